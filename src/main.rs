//! Contact book - Main entry point
//!
//! Loads the address book, runs one command and saves the book again when the
//! command changed it. Logs go to stderr so stdout carries only command output.

use anyhow::{Context, Result};
use clap::Parser;
use contact_book::cli::{execute, Cli, Settings};
use contact_book::repositories::{BookRepository, JsonBookRepository};
use contact_book::Config;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(text) => {
            if !text.is_empty() {
                println!("{}", text);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // RUST_LOG wins over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let path = cli.file.clone().unwrap_or_else(|| config.contacts_file.clone());
    let repository = JsonBookRepository::new(path);
    info!(path = %repository.path().display(), "using address book");

    let mut book = repository
        .load()
        .with_context(|| format!("Failed to load {}", repository.path().display()))?;

    let settings = Settings::from_config(&config);
    let output = execute(&cli.command, &mut book, &settings)?;

    if output.modified {
        repository
            .save(&book)
            .with_context(|| format!("Failed to save {}", repository.path().display()))?;
    } else {
        debug!("book unchanged, skipping save");
    }

    Ok(output.text)
}
