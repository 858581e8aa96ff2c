//! Example: Read a file from MOIBit
//!
//! Usage:
//!   cargo run --example read -- --signature SIG --nonce NONCE REMOTE_PATH [--version N] [--out FILE]

mod cli;

use std::io::Write;

use cli::{ArgParser, credentials_from_parser, init_tracing, parse_path, usage_and_exit};

const USAGE: &str = "Usage: cargo run --example read -- --signature SIG --nonce NONCE [--app-id APP] [--version N] [--out FILE] REMOTE_PATH";

#[tokio::main]
async fn main() {
    init_tracing();
    let mut parser = ArgParser::new(USAGE);
    let creds = credentials_from_parser(&mut parser, USAGE);
    let version = parser
        .take_value(&["--version"])
        .map(|v| v.parse().unwrap_or_else(|_| usage_and_exit(USAGE)))
        .unwrap_or(0);
    let out = parser.take_value(&["--out", "-o"]);

    let positionals = parser.remaining();
    let [remote] = positionals.as_slice() else {
        usage_and_exit(USAGE);
    };
    let remote = parse_path(remote);

    let session = creds.connect().await.unwrap_or_else(|e| {
        eprintln!("Login failed: {}", e);
        std::process::exit(1);
    });

    let data = match session.read_file(&remote, version).await {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Read failed: {}", e);
            std::process::exit(1);
        }
    };

    let written = match out {
        Some(file) => std::fs::write(&file, &data),
        None => std::io::stdout().write_all(&data),
    };
    if let Err(e) = written {
        eprintln!("Failed to write output: {}", e);
        std::process::exit(1);
    }
}
