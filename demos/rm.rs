//! Example: Remove or restore a file or directory
//!
//! Usage:
//!   cargo run --example rm -- --signature SIG --nonce NONCE REMOTE_PATH [--version N] [--dir] [--restore]

mod cli;

use cli::{ArgParser, credentials_from_parser, init_tracing, parse_path, usage_and_exit};
use moibit::RemoveOptions;

const USAGE: &str = "Usage: cargo run --example rm -- --signature SIG --nonce NONCE [--app-id APP] [--version N] [--dir] [--restore] REMOTE_PATH";

#[tokio::main]
async fn main() {
    init_tracing();
    let mut parser = ArgParser::new(USAGE);
    let creds = credentials_from_parser(&mut parser, USAGE);
    let version = parser
        .take_value(&["--version"])
        .map(|v| v.parse().unwrap_or_else(|_| usage_and_exit(USAGE)))
        .unwrap_or(0);

    let mut options = RemoveOptions::new();
    if parser.take_flag(&["--dir", "-r"]) {
        options = options.directory();
    }
    if parser.take_flag(&["--restore"]) {
        options = options.restore();
    }

    let positionals = parser.remaining();
    let [remote] = positionals.as_slice() else {
        usage_and_exit(USAGE);
    };
    let remote = parse_path(remote);

    let session = creds.connect().await.unwrap_or_else(|e| {
        eprintln!("Login failed: {}", e);
        std::process::exit(1);
    });

    let action = if options.is_restore() { "Restored" } else { "Removed" };
    match session.remove_file(&remote, version, options).await {
        Ok(()) => println!("{} {} (version {})", action, remote, version),
        Err(e) => {
            eprintln!("Failed: {}", e);
            std::process::exit(1);
        }
    }
}
