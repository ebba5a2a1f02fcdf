//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Print the configuration file path
    Path,
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Device configuration tool executable
    #[arg(long, value_name = "COMMAND")]
    tool: Option<String>,

    /// Default output path of the programming script
    #[arg(long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Default output path of the cheat sheet
    #[arg(long, value_name = "FILE")]
    cheat_sheet: Option<PathBuf>,

    /// First line of the generated script
    #[arg(long, value_name = "LINE")]
    shebang: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    path: String,
    tool: String,
    script: String,
    cheat_sheet: String,
    shebang: String,
}

impl ConfigArgs {
    /// Execute config subcommand against the file at `path`
    pub fn execute(&self, path: &Path) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(path),
            ConfigCommand::Set(args) => args.execute(path),
            ConfigCommand::Path => {
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self, path: &Path) -> CliResult<()> {
        let config = Config::load_from(path)
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        let output = ConfigOutput {
            path: path.display().to_string(),
            tool: config.tool.command,
            script: config.output.script.display().to_string(),
            cheat_sheet: config.output.cheat_sheet.display().to_string(),
            shebang: config.script.shebang,
        };

        if self.json {
            let json = serde_json::to_string_pretty(&output).map_err(|e| {
                CliError::io(format!("Failed to serialize configuration to JSON: {e}"))
            })?;
            println!("{json}");
        } else {
            println!("Config file:  {}", output.path);
            println!("Tool:         {}", output.tool);
            println!("Script:       {}", output.script);
            println!("Cheat sheet:  {}", output.cheat_sheet);
            println!("Shebang:      {}", output.shebang);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self, path: &Path) -> CliResult<()> {
        if self.tool.is_none()
            && self.script.is_none()
            && self.cheat_sheet.is_none()
            && self.shebang.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --tool, --script, --cheat-sheet, or --shebang",
            ));
        }

        let mut config = Config::load_from(path)
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if let Some(tool) = &self.tool {
            config.tool.command.clone_from(tool);
        }
        if let Some(script) = &self.script {
            config.output.script.clone_from(script);
        }
        if let Some(cheat_sheet) = &self.cheat_sheet {
            config.output.cheat_sheet.clone_from(cheat_sheet);
        }
        if let Some(shebang) = &self.shebang {
            config.script.shebang.clone_from(shebang);
        }

        if let Err(e) = config.validate() {
            return Err(CliError::validation(format!("Invalid configuration: {e}")));
        }

        config
            .save_to(path)
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }
}
