//! Example: List a MOIBit directory
//!
//! Usage:
//!   cargo run --example ls -- --signature SIG --nonce NONCE [--path /dir]

mod cli;

use cli::{ArgParser, credentials_from_parser, format_size, init_tracing, parse_path};

const USAGE: &str = "Usage: cargo run --example ls -- --signature SIG --nonce NONCE [--app-id APP] [--path PATH]";

#[tokio::main]
async fn main() {
    init_tracing();
    let mut parser = ArgParser::new(USAGE);
    let creds = credentials_from_parser(&mut parser, USAGE);
    let path = parse_path(&parser.take_value(&["--path"]).unwrap_or_else(|| "/".to_string()));

    let session = creds.connect().await.unwrap_or_else(|e| {
        eprintln!("Login failed: {}", e);
        std::process::exit(1);
    });

    println!("Listing: {}\n", path);
    match session.list_files(&path).await {
        Ok(files) if files.is_empty() => println!("  (empty)"),
        Ok(files) => {
            for file in files {
                let kind = if file.is_directory { "d" } else { "-" };
                let size = if file.is_directory {
                    String::new()
                } else {
                    format_size(file.file_size)
                };
                println!("  {} {} {} v{}", kind, file.path, size, file.version);
            }
        }
        Err(e) => {
            eprintln!("Failed to list: {}", e);
            std::process::exit(1);
        }
    }
}
