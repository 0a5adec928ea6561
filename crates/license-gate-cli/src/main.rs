//! License Gate CLI - Inspect the license switches of a build.

use clap::Parser;
use license_gate_cli::commands;
use license_gate_cli::properties::build_store;
use license_gate_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    // Log to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> license_gate_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let config = Config::load_from(&config_path)?;
    tracing::debug!("Loaded configuration from {}", config_path.display());

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Coordinate(args) => commands::execute_coordinate(args, &formatter)?,
        Command::Config(args) => {
            commands::execute_config(args, &config, &config_path, &formatter)?
        }
        cmd => {
            // Commands that read project properties
            let store = build_store(&cli.properties, &config.params)?;

            match cmd {
                Command::Get(args) => {
                    commands::execute_get(args, &store, &config.params, &formatter)?;
                }
                Command::IsFalse(args) => {
                    commands::execute_is_false(args, &store, &config.params, &formatter)?;
                }
                Command::List => commands::execute_list(&store, &config.params, &formatter)?,
                Command::Settings => {
                    commands::execute_settings(&store, &config.params, &formatter)?
                }
                Command::Coordinate(_) | Command::Config(_) => unreachable!(),
            }
        }
    }

    Ok(())
}
