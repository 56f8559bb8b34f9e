use std::process::ExitCode;

use clap::{Parser, Subcommand};
use foodscan_off::OffClient;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "foodscan-cli")]
#[command(about = "Look up food products by barcode and assess them")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Look up a barcode and print the assessed product as JSON
    Lookup {
        barcode: String,
        /// Print single-line JSON instead of pretty-printed output
        #[arg(long)]
        compact: bool,
    },
    /// List the product sources in lookup order
    Sources,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    let config = foodscan_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = OffClient::from_config(&config)?;

    match cli.command {
        Commands::Lookup { barcode, compact } => {
            let (body, code) = match foodscan_off::lookup(&client, &barcode).await {
                Ok(result) => (serde_json::to_value(&result)?, ExitCode::SUCCESS),
                Err(e) => (serde_json::json!({ "error": e.to_string() }), ExitCode::FAILURE),
            };
            let rendered = if compact {
                serde_json::to_string(&body)?
            } else {
                serde_json::to_string_pretty(&body)?
            };
            println!("{rendered}");
            Ok(code)
        }
        Commands::Sources => {
            for endpoint in client.endpoints() {
                println!("{}\t{}", endpoint.region, endpoint.base_url);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
