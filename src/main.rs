//! Macropad Compiler - declarative macropad configuration compiler
//!
//! Reads a YAML macropad configuration and produces the device programming
//! script and a Markdown cheat sheet.

use clap::{Parser, Subcommand};
use macropad_compiler::cli::{
    CliError, CliResult, CompileArgs, ConfigArgs, KeycodeArgs, ValidateArgs,
};
use macropad_compiler::config::Config;
use macropad_compiler::constants::{APP_BINARY_NAME, APP_NAME};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Macropad Compiler - turn a macropad YAML into device commands and a cheat sheet
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file (defaults to the platform config directory)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a configuration into a script and a cheat sheet
    Compile(CompileArgs),
    /// Check a configuration and print a summary
    Validate(ValidateArgs),
    /// Translate keycode expressions into display form
    Keycode(KeycodeArgs),
    /// Show or change compiler settings
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code.code());
    }
}

fn run(cli: &Cli) -> CliResult<()> {
    let settings_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::config_file_path()
            .map_err(|e| CliError::io(format!("{e:#}")))?,
    };

    match &cli.command {
        Command::Compile(args) => {
            let settings = Config::load_from(&settings_path).map_err(|e| {
                CliError::validation(format!("Failed to load configuration: {e:#}"))
            })?;
            args.execute(&settings)
        }
        Command::Validate(args) => args.execute(),
        Command::Keycode(args) => args.execute(),
        Command::Config(args) => args.execute(&settings_path),
    }
}
