//! Compile command: writes the programming script and the cheat sheet.

use crate::cli::common::{load_device_config, CliError, CliResult};
use crate::config::Config;
use crate::export::generate_cheat_sheet;
use crate::firmware::ScriptGenerator;
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Compile a macropad configuration into a script and a cheat sheet
#[derive(Debug, Clone, Args)]
pub struct CompileArgs {
    /// Path to the macropad YAML configuration
    #[arg(value_name = "CONFIG")]
    pub input: PathBuf,

    /// Output path of the programming script
    #[arg(long, value_name = "FILE")]
    pub output_sh: Option<PathBuf>,

    /// Output path of the Markdown cheat sheet
    #[arg(long, value_name = "FILE")]
    pub output_md: Option<PathBuf>,
}

impl CompileArgs {
    /// Execute the compile command
    pub fn execute(&self, settings: &Config) -> CliResult<()> {
        let (device, macros) = load_device_config(&self.input)?;

        let script_path = self.output_sh.as_ref().unwrap_or(&settings.output.script);
        let cheat_sheet_path = self
            .output_md
            .as_ref()
            .unwrap_or(&settings.output.cheat_sheet);

        let script = ScriptGenerator::new(&device, &macros)
            .with_tool(&settings.tool.command)
            .with_shebang(&settings.script.shebang)
            .generate();
        write_output(script_path, &script)?;

        let cheat_sheet = generate_cheat_sheet(&device, &macros);
        write_output(cheat_sheet_path, &cheat_sheet)?;

        println!("Generated: {}", script_path.display());
        println!("Generated: {}", cheat_sheet_path.display());

        Ok(())
    }
}

fn write_output(path: &Path, content: &str) -> CliResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            CliError::io(format!(
                "Failed to create output directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    fs::write(path, content)
        .map_err(|e| CliError::io(format!("Failed to write {}: {e}", path.display())))?;

    info!(path = %path.display(), bytes = content.len(), "Wrote output file");
    Ok(())
}
