//! Example: Show status and versions of a file
//!
//! Usage:
//!   cargo run --example stat -- --signature SIG --nonce NONCE --path /path/to/file.txt

mod cli;

use cli::{ArgParser, credentials_from_parser, format_size, init_tracing, parse_path, usage_and_exit};

const USAGE: &str = "Usage: cargo run --example stat -- --signature SIG --nonce NONCE [--app-id APP] --path PATH";

#[tokio::main]
async fn main() {
    init_tracing();
    let mut parser = ArgParser::new(USAGE);
    let creds = credentials_from_parser(&mut parser, USAGE);
    let path = parser
        .take_value(&["--path"])
        .map(|p| parse_path(&p))
        .unwrap_or_else(|| usage_and_exit(USAGE));

    let session = creds.connect().await.unwrap_or_else(|e| {
        eprintln!("Login failed: {}", e);
        std::process::exit(1);
    });

    let status = match session.file_status(&path).await {
        Ok(status) => status,
        Err(e) => {
            eprintln!("Failed to stat {}: {}", path, e);
            std::process::exit(1);
        }
    };
    if !status.exists() {
        eprintln!("Not found: {}", path);
        std::process::exit(1);
    }

    println!("Path:         {}", status.path);
    println!("Directory:    {}", status.is_directory);
    println!("Hash:         {}", status.hash);
    println!("Size:         {}", format_size(status.file_size));
    println!("Version:      {}", status.version);
    println!("Replication:  {}", status.replication);
    println!("Last updated: {}", status.last_updated);

    if path.is_file() {
        match session.file_versions(&path).await {
            Ok(versions) => {
                println!("\nVersions:");
                for v in versions {
                    println!("  v{} {} {} {}", v.version, v.hash, format_size(v.file_size), v.last_updated);
                }
            }
            Err(e) => eprintln!("Failed to list versions: {}", e),
        }
    }
}
