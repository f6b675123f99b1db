//! Whodunit CLI - Command-line interface for murder mystery character guides.

use clap::Parser;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use whodunit_cli::commands;
use whodunit_cli::{Cli, Command, Config, Formatter};
use whodunit_store::SqliteStore;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> whodunit_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Load config from --config or the default location
    let config_path = match &cli.config {
        Some(path) => PathBuf::from(path),
        None => Config::path()?,
    };
    let mut config = Config::load_from(&config_path)?;
    debug!("Loaded configuration from {}", config_path.display());

    // Override database if specified
    if let Some(database) = &cli.database {
        config.settings.database = Some(PathBuf::from(database));
    }

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Handle commands
    match cli.command {
        Command::Parse(args) => commands::execute_parse(args, &config, &formatter)?,
        Command::Section(args) => commands::execute_section(args)?,
        Command::Config(args) => {
            commands::execute_config(args, &config, &config_path, &formatter)?
        }
        Command::Import(args) => {
            commands::execute_import(args, &config, open_store(&config)?, &formatter)?
        }
        Command::List(args) => commands::execute_list(args, &open_store(&config)?, &formatter)?,
        Command::Show(args) => commands::execute_show(args, &open_store(&config)?, &formatter)?,
        Command::Delete(args) => {
            commands::execute_delete(args, &mut open_store(&config)?, &formatter)?
        }
    }

    Ok(())
}

/// Open the character database, creating its directory when needed.
fn open_store(config: &Config) -> whodunit_cli::Result<SqliteStore> {
    let database = config.database_path()?;
    debug!("Opening character database at {}", database.display());
    Ok(SqliteStore::new(&database)?)
}

/// Log to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = if verbose == 0 { "warn" } else { "debug" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_store_creates_database_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.settings.database = Some(dir.path().join("nested").join("whodunit.db"));

        assert!(open_store(&config).is_ok());
        assert!(dir.path().join("nested").join("whodunit.db").exists());
    }
}
