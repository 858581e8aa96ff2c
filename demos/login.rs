//! Example: Authenticate with MOIBit
//!
//! Usage:
//!   cargo run --example login -- --signature SIG --nonce NONCE [--app-id APP] [--proxy PROXY]

mod cli;

use cli::{ArgParser, credentials_from_parser, init_tracing, usage_and_exit};

const USAGE: &str = "Usage: cargo run --example login -- --signature SIG --nonce NONCE [--app-id APP] [--network-id NET] [--base-url URL] [--proxy PROXY]";

#[tokio::main]
async fn main() {
    init_tracing();
    let mut parser = ArgParser::new(USAGE);
    let creds = credentials_from_parser(&mut parser, USAGE);
    if !parser.remaining().is_empty() {
        usage_and_exit(USAGE);
    }

    match creds.connect().await {
        Ok(session) => {
            println!("Authenticated");
            println!("Developer key: {}", session.developer_key());
            println!("Network ID:    {}", session.network_id());
            if !session.app_id().is_empty() {
                match session.app_details().await {
                    Ok(app) => println!("App:           {} ({})", app.app_name, app.app_id),
                    Err(e) => eprintln!("Failed to read app details: {}", e),
                }
            }
        }
        Err(e) => {
            eprintln!("Login failed: {}", e);
            std::process::exit(1);
        }
    }
}
