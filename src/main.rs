//! Contact Book - Main entry point
//!
//! Loads the saved contacts, runs the interactive command loop on
//! stdin/stdout, and saves the contacts when the loop ends.

use anyhow::Result;
use contact_book::repositories::{DirectoryRepository, JsonFileRepository};
use contact_book::{run_session, Config, SystemClock};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging (stderr only so it never mixes with the conversation)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Using contacts file {}", config.contacts_path.display());

    let repository = JsonFileRepository::new(&config.contacts_path);
    let directory = match repository.load() {
        Ok(directory) => directory,
        Err(e) => {
            error!("Failed to load contacts: {}", e);
            return Err(e.into());
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let directory = run_session(
        stdin.lock(),
        &mut stdout.lock(),
        directory,
        &repository,
        &config,
        &SystemClock,
    )?;

    info!("Session closed with {} contacts", directory.len());
    Ok(())
}
