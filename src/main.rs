//! Contact Assistant - Main entry point
//!
//! Runs the interactive assistant bot on stdin/stdout. Logs go to stderr so
//! they never interleave with the console dialogue.

use anyhow::Result;
use contact_assistant::{run_console, AddressBook, Config};
use tokio::io::{stdin, stdout, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if let Some(today) = config.today {
        info!("Birthday queries pinned to {}", today);
    }

    let mut book = AddressBook::new();
    run_console(
        &mut book,
        BufReader::new(stdin()),
        stdout(),
        &config.prompt,
        || config.today(),
    )
    .await?;

    info!("Contact assistant shutdown complete");
    Ok(())
}
