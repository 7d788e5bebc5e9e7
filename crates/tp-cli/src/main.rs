use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tp_cli::commands::{coverage, delete, export, import, list, score, stats, status};
use tp_cli::{Cli, Commands, Config, SeriesStore, open_store};

/// Load config and open the backend it selects.
fn open_backend(config_path: Option<&Path>) -> Result<(Box<dyn SeriesStore>, Config)> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let store = open_store(&config)?;
    Ok((store, config))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let mut stdout = io::stdout().lock();
    match &cli.command {
        Some(Commands::Import { file }) => {
            let (mut store, _config) = open_backend(cli.config.as_deref())?;
            import::run(&mut stdout, store.as_mut(), file.as_deref())?;
        }
        Some(Commands::Export) => {
            let (store, _config) = open_backend(cli.config.as_deref())?;
            export::run(&mut stdout, store.as_ref())?;
        }
        Some(Commands::List { json }) => {
            let (store, _config) = open_backend(cli.config.as_deref())?;
            list::run(&mut stdout, store.as_ref(), *json)?;
        }
        Some(Commands::Delete { id }) => {
            let (mut store, _config) = open_backend(cli.config.as_deref())?;
            delete::run(&mut stdout, store.as_mut(), id)?;
        }
        Some(Commands::Score { series, game, json }) => {
            let (store, _config) = open_backend(cli.config.as_deref())?;
            score::run(&mut stdout, store.as_ref(), series, *game, *json)?;
        }
        Some(Commands::Stats { tag, json }) => {
            let (store, _config) = open_backend(cli.config.as_deref())?;
            stats::run(&mut stdout, store.as_ref(), *tag, *json)?;
        }
        Some(Commands::Coverage { pins, tag, json }) => {
            let (store, _config) = open_backend(cli.config.as_deref())?;
            coverage::run(&mut stdout, store.as_ref(), pins, *tag, *json)?;
        }
        Some(Commands::Status) => {
            let (store, config) = open_backend(cli.config.as_deref())?;
            status::run(&mut stdout, store.as_ref(), &config)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
