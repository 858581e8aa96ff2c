//! Example: Write a local text file to MOIBit
//!
//! Usage:
//!   cargo run --example write -- --signature SIG --nonce NONCE LOCAL_FILE REMOTE_PATH [--keep-previous] [--replication N]

mod cli;

use cli::{ArgParser, credentials_from_parser, init_tracing, parse_path, usage_and_exit};
use moibit::WriteOptions;

const USAGE: &str = "Usage: cargo run --example write -- --signature SIG --nonce NONCE [--app-id APP] [--keep-previous] [--no-create-folders] [--replication N] LOCAL_FILE REMOTE_PATH";

#[tokio::main]
async fn main() {
    init_tracing();
    let mut parser = ArgParser::new(USAGE);
    let creds = credentials_from_parser(&mut parser, USAGE);

    let mut options = WriteOptions::new();
    if parser.take_flag(&["--keep-previous"]) {
        options = options.keep_previous();
    }
    if parser.take_flag(&["--no-create-folders"]) {
        options = options.create_only_file();
    }
    if let Some(n) = parser.take_value(&["--replication"]) {
        let n = n.parse().unwrap_or_else(|_| usage_and_exit(USAGE));
        options = options.replication(n);
    }

    let positionals = parser.remaining();
    let [local, remote] = positionals.as_slice() else {
        usage_and_exit(USAGE);
    };
    let remote = parse_path(remote);

    let data = std::fs::read(local).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {}", local, e);
        std::process::exit(1);
    });

    let session = creds.connect().await.unwrap_or_else(|e| {
        eprintln!("Login failed: {}", e);
        std::process::exit(1);
    });

    match session.write_file(&data, &remote, options).await {
        Ok(files) => {
            println!("Wrote {} ({} bytes)", remote, data.len());
            for file in files {
                println!("  {} v{} hash={}", file.path, file.version, file.hash);
            }
        }
        Err(e) => {
            eprintln!("Write failed: {}", e);
            std::process::exit(1);
        }
    }
}
