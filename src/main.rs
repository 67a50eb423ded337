use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing::{debug, info};

use vanscout::cli::{self, Cli, Commands};
use vanscout::{Catalog, VanScoutConfig, VanScoutError, telemetry, web};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config =
        VanScoutConfig::load_from_path(cli.config.clone()).context("Failed to load configuration")?;
    telemetry::init(&config.logging, cli.verbose)?;
    debug!("Configuration loaded: {:?}", config);

    let catalog = Catalog::load(config.catalog.path.as_deref()).context("Failed to load catalog")?;
    info!(
        "Catalog ready: {} vans, {} locations",
        catalog.vehicles().len(),
        catalog.locations().len()
    );

    match cli.command {
        Commands::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            web::run(&config, catalog).await
        }
        command => match cli::execute(command, &catalog, &config, Local::now().date_naive()) {
            Ok(output) => {
                print!("{output}");
                Ok(())
            }
            Err(e @ VanScoutError::Validation { .. }) => {
                eprintln!("{}", e.user_message());
                std::process::exit(2);
            }
            Err(e) => Err(e.into()),
        },
    }
}
