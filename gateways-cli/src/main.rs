//! Gateways CLI
//!
//! Command-line interface for the Gateway Dispatch API.

mod client;

use anyhow::Result;
use clap::{Parser, Subcommand};

use client::GatewaysClient;
use gateways_types::DispatchStatus;

#[derive(Parser)]
#[command(name = "gateways")]
#[command(author, version, about = "Gateway Dispatch API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Gateway Dispatch API
    #[arg(
        long,
        env = "GATEWAYS_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dispatch a payment through a gateway family
    Pay {
        /// Gateway family name (pagseguro, mercadopago, stripe)
        #[arg(long)]
        gateway: String,
        /// Amount in smallest currency unit (cents)
        #[arg(long)]
        amount: i64,
        /// Card identifier
        #[arg(long)]
        card: String,
    },
    /// List the gateway families the server can dispatch to
    List,
    /// Check API health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let client = GatewaysClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Pay {
            gateway,
            amount,
            card,
        } => {
            let response = client.pay(&gateway, amount, &card).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
            if response.status == DispatchStatus::Rejected {
                std::process::exit(1);
            }
        }

        Commands::List => {
            let gateways = client.gateways().await?;
            println!("{}", serde_json::to_string_pretty(&gateways)?);
        }
    }

    Ok(())
}
