//! albums - connect to the catalog database and run the two lookups
//!
//! Exit status is 0 on success and 1 on any failure.

use anyhow::{Context, Result};
use std::process::ExitCode;
use tracing::info;

use album_config::AppConfig;

#[tokio::main]
async fn main() -> ExitCode {
    album_obs::init("albums");

    match try_main().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn try_main() -> Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    info!("Loaded configuration: {:?}", config);

    let mut store = album_cli::connect(&config).await?;
    println!("Connect Success");

    let report = album_cli::run(&mut store, &config.query()).await?;
    println!("{}", report.render(config.output_format())?);

    store.close().await.context("Failed to close connection")?;
    Ok(())
}
