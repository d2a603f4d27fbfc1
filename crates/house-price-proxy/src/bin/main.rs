//! House Price Proxy entry point
//!
//! Serves the validating prediction proxy, or talks to a prediction service
//! from the command line.

use clap::{Parser, Subcommand};
use colored::Colorize;
use house_price_core::{find_preset, format_inr, presets, validate_house_record, HouseRecord};
use house_price_proxy::handler::{create_router, AppState};
use house_price_proxy::telemetry::{self, LogFormat};
use house_price_proxy::{PredictionServiceClient, ProxyConfig, SERVICE_NAME, SERVICE_VERSION};
use std::net::SocketAddr;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "house-price-proxy")]
#[command(about = "House Price Proxy - validates house records and forwards them for prediction")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000", env = "PORT")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Base URL of the prediction service [default: $API_URL or http://localhost:8000]
        #[arg(long)]
        api_url: Option<String>,
    },

    /// Request a price prediction
    Predict {
        /// Use a named preset
        #[arg(long, conflicts_with = "file")]
        preset: Option<String>,

        /// Read the house record from a JSON file
        #[arg(short, long)]
        file: Option<String>,

        /// Base URL of the prediction service or of a running proxy [default: $API_URL or http://localhost:8000]
        #[arg(long)]
        api_url: Option<String>,

        /// Print the raw JSON result
        #[arg(long)]
        json: bool,
    },

    /// List the available presets
    Presets,

    /// Validate a house record file without contacting any service
    Validate {
        /// Path to the JSON file
        #[arg(short, long)]
        file: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            port,
            host,
            api_url,
        } => {
            telemetry::init(LogFormat::Json)?;

            let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
            let config = resolve_config(api_url);
            let upstream = config.api_url().to_string();
            let router = create_router(Arc::new(AppState::new(config)));

            tracing::info!("Starting {} v{} on {}", SERVICE_NAME, SERVICE_VERSION, addr);
            tracing::info!(upstream = %upstream, "Forwarding predictions");

            let listener = tokio::net::TcpListener::bind(addr).await?;
            axum::serve(listener, router).await?;
        }

        Commands::Predict {
            preset,
            file,
            api_url,
            json,
        } => {
            telemetry::init(LogFormat::Pretty)?;

            let record = match (preset, file) {
                (Some(name), _) => match find_preset(&name) {
                    Some(p) => p.values,
                    None => {
                        eprintln!("{} Unknown preset: {}", "x".red(), name);
                        std::process::exit(2);
                    }
                },
                (None, Some(path)) => match load_record(&path)? {
                    Some(record) => record,
                    None => std::process::exit(1),
                },
                (None, None) => HouseRecord::default(),
            };

            let client = PredictionServiceClient::new(resolve_config(api_url));
            match client.predict(&record).await {
                Ok(result) if json => println!("{}", serde_json::to_string_pretty(&result)?),
                Ok(result) => println!(
                    "{} Predicted price: {}",
                    "✓".green(),
                    format_inr(result.predicted_price).bold()
                ),
                Err(e) => {
                    eprintln!("{} {}", "x".red(), e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Presets => {
            println!("{}", serde_json::to_string_pretty(&presets())?);
        }

        Commands::Validate { file } => match load_record(&file)? {
            Some(record) => {
                println!("{} {} is a valid house record", "✓".green(), file);
                println!("{}", serde_json::to_string_pretty(&record)?);
            }
            None => std::process::exit(1),
        },
    }

    Ok(())
}

/// `--api-url` wins over `API_URL`
fn resolve_config(api_url: Option<String>) -> ProxyConfig {
    api_url.map(ProxyConfig::new).unwrap_or_else(ProxyConfig::from_env)
}

/// Read and validate a record file, printing violations when invalid
fn load_record(path: &str) -> anyhow::Result<Option<HouseRecord>> {
    let content = std::fs::read_to_string(path)?;
    let input: serde_json::Value = serde_json::from_str(&content)?;

    match validate_house_record(&input) {
        Ok(record) => Ok(Some(record)),
        Err(err) => {
            eprintln!("{} {}", "x".red(), err.to_string().red().bold());
            for violation in err.violations() {
                eprintln!(
                    "  {} [{}] {}",
                    violation.field.yellow(),
                    violation.kind.code(),
                    violation.message
                );
            }
            Ok(None)
        }
    }
}
