use std::path::Path;

use anyhow::Result;
use clap::Parser;

use prayer_times::cli::{Cli, Command};
use prayer_times::config::ScraperConfig;
use prayer_times::logging;
use prayer_times::module::prayer::SnapshotUpdater;
use prayer_times::module::prayer::lookup;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ScraperConfig::from_file(path)?,
        None => ScraperConfig::default(),
    };

    logging::init_logging(&config.log_level)?;

    match cli.command {
        Command::Today(args) => {
            // failures are already folded into the response body; this
            // path always prints JSON and exits 0
            let response = lookup::lookup_today(&config).await;

            if args.cgi {
                println!("Content-Type: application/json");
                println!();
            }
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Command::Scrape(args) => {
            let output = args.out.unwrap_or_else(|| config.output_file.clone());

            let updater = SnapshotUpdater::new(&config)?;
            let snapshot = updater.update(Path::new(&output)).await?;

            tracing::info!(
                "Prayer times for {} {} saved to {}",
                snapshot.month,
                snapshot.year,
                output
            );
        }
    }

    Ok(())
}
