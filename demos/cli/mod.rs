use std::env;
use std::process;

use moibit::{FilePath, Session, SessionConfig};
use tracing_subscriber::{EnvFilter, fmt};

pub fn usage_and_exit(usage: &str) -> ! {
    eprintln!("{usage}");
    process::exit(1);
}

pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("moibit=debug"));
    fmt().with_env_filter(filter).with_target(false).init();
}

pub struct ArgParser {
    args: Vec<String>,
    usage: &'static str,
}

impl ArgParser {
    pub fn new(usage: &'static str) -> Self {
        let args: Vec<String> = env::args().skip(1).collect();

        if args.iter().any(|a| a == "--help" || a == "-h") {
            println!("{usage}");
            process::exit(0);
        }

        Self { args, usage }
    }

    pub fn take_value(&mut self, names: &[&str]) -> Option<String> {
        let mut i = 0;
        while i < self.args.len() {
            if names.contains(&self.args[i].as_str()) {
                let value = self.args.get(i + 1).cloned();
                if value.is_none() {
                    usage_and_exit(self.usage);
                }
                self.args.drain(i..=i + 1);
                return value;
            }
            i += 1;
        }
        None
    }

    #[allow(dead_code)] // Only some demos take boolean flags.
    pub fn take_flag(&mut self, names: &[&str]) -> bool {
        match self.args.iter().position(|a| names.contains(&a.as_str())) {
            Some(i) => {
                self.args.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn remaining(self) -> Vec<String> {
        self.args
    }
}

pub struct Credentials {
    pub signature: String,
    pub nonce: String,
    pub config: SessionConfig,
    pub proxy: Option<String>,
}

pub fn credentials_from_parser(parser: &mut ArgParser, usage: &'static str) -> Credentials {
    let signature = parser
        .take_value(&["--signature", "-s"])
        .or_else(|| env::var("MOIBIT_SIGNATURE").ok())
        .unwrap_or_else(|| usage_and_exit(usage));
    let nonce = parser
        .take_value(&["--nonce", "-n"])
        .or_else(|| env::var("MOIBIT_NONCE").ok())
        .unwrap_or_else(|| usage_and_exit(usage));

    let mut config = SessionConfig::default();
    if let Some(app) = parser.take_value(&["--app-id"]) {
        config = config.with_app_id(app);
    }
    if let Some(net) = parser.take_value(&["--network-id"]) {
        config = config.with_network_id(net);
    }
    if let Some(url) = parser.take_value(&["--base-url"]) {
        config = config.with_base_url(url);
    }
    let proxy = parser.take_value(&["--proxy"]);

    Credentials {
        signature,
        nonce,
        config,
        proxy,
    }
}

impl Credentials {
    pub async fn connect(&self) -> moibit::Result<Session> {
        if let Some(proxy) = &self.proxy {
            Session::connect_with_proxy(&self.signature, &self.nonce, self.config.clone(), proxy)
                .await
        } else {
            Session::connect(&self.signature, &self.nonce, self.config.clone()).await
        }
    }
}

#[allow(dead_code)]
pub fn parse_path(raw: &str) -> FilePath {
    raw.parse().unwrap_or_else(|e| {
        eprintln!("Invalid path '{}': {}", raw, e);
        process::exit(1);
    })
}

#[allow(dead_code)]
pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{}B", bytes)
    } else if bytes < 1_048_576 {
        format!("{:.1}KB", bytes as f64 / 1024.0)
    } else if bytes < 1_073_741_824 {
        format!("{:.1}MB", bytes as f64 / 1_048_576.0)
    } else {
        format!("{:.2}GB", bytes as f64 / 1_073_741_824.0)
    }
}
