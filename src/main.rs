//! Contact Book - Main entry point
//!
//! Loads the store named by the configuration and runs the interactive menu
//! on stdin/stdout.

use anyhow::{Context, Result};
use contact_book::{Config, ContactBook, JsonFileRepository, Shell};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize logging (stderr only so log lines never mix with the menu)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        "Using store {} (backup: {})",
        config.contacts_file.display(),
        config.backup_file.display()
    );

    let repository = JsonFileRepository::from_config(&config);
    let book = match ContactBook::open(Box::new(repository)) {
        Ok(book) => book,
        Err(e) => {
            error!("Failed to load contacts: {}", e);
            return Err(e.into());
        }
    };

    let mut shell = Shell::new(
        book,
        io::stdin().lock(),
        io::stdout().lock(),
        config.export_file.clone(),
    );
    shell.run()?;

    info!("Contact book closed");
    Ok(())
}
