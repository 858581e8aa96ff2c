//! Example: Create a directory on MOIBit
//!
//! Usage:
//!   cargo run --example mkdir -- --signature SIG --nonce NONCE /path/to/dir

mod cli;

use cli::{ArgParser, credentials_from_parser, init_tracing, parse_path, usage_and_exit};

const USAGE: &str =
    "Usage: cargo run --example mkdir -- --signature SIG --nonce NONCE [--app-id APP] REMOTE_DIR";

#[tokio::main]
async fn main() {
    init_tracing();
    let mut parser = ArgParser::new(USAGE);
    let creds = credentials_from_parser(&mut parser, USAGE);

    let positionals = parser.remaining();
    let [remote] = positionals.as_slice() else {
        usage_and_exit(USAGE);
    };
    let remote = parse_path(remote);

    let session = creds.connect().await.unwrap_or_else(|e| {
        eprintln!("Login failed: {}", e);
        std::process::exit(1);
    });

    match session.make_dir(&remote).await {
        Ok(()) => println!("Created {}", remote),
        Err(e) => {
            eprintln!("mkdir failed: {}", e);
            std::process::exit(1);
        }
    }
}
