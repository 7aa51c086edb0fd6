use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use prometheus::Registry;
use serde_json::Value;

use golconda_bridge::config::{load_config, BridgeConfig};
use golconda_bridge::observability::{exporter, logging};
use golconda_bridge::{BridgeMetrics, ServiceBridge};

#[derive(Parser)]
#[command(name = "bridge-cli")]
#[command(about = "Send requests to a local Golconda service", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured service hostname
    #[arg(long)]
    hostname: Option<String>,

    /// Override the configured service port
    #[arg(long)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// POST a JSON payload to a service endpoint path
    Send {
        /// Endpoint path, appended to the base URL
        path: String,

        /// JSON payload for the request body
        #[arg(short, long, default_value = "{}")]
        payload: String,

        /// Per-request timeout in milliseconds (defaults to the
        /// configured timeout)
        #[arg(long)]
        timeout_ms: Option<u64>,

        /// Print the metrics exposition after the request
        #[arg(long)]
        show_metrics: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => BridgeConfig::default(),
    };
    if let Some(hostname) = cli.hostname {
        config.service.hostname = hostname;
    }
    if let Some(port) = cli.port {
        config.service.port = port;
    }

    logging::init_logging(&config.observability);

    let registry = Registry::new();
    let metrics = BridgeMetrics::new(&registry)?;
    let bridge = ServiceBridge::from_config(&config, metrics)?;

    match cli.command {
        Commands::Send {
            path,
            payload,
            timeout_ms,
            show_metrics,
        } => {
            let payload: Value = serde_json::from_str(&payload)?;
            let ttl = Duration::from_millis(timeout_ms.unwrap_or(config.service.timeout_ms));

            let result = bridge.request_with_timeout(&path, &payload, ttl).await;
            let failed = match result {
                Ok(res) => {
                    print_response(res).await?;
                    false
                }
                Err(e) => {
                    eprintln!("request failed: {}", e);
                    true
                }
            };

            if show_metrics {
                print!("{}", exporter::render(&registry)?);
            }
            if failed {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("service returned status {}", status);
    }

    let text = res.text().await?;
    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}
