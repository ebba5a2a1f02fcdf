//! Validation command for macropad configurations.

use crate::cli::common::{load_device_config, CliError, CliResult};
use crate::models::{DeviceConfig, Macro, MacroSummary};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Load a macropad configuration and summarize its contents
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to the macropad YAML configuration
    #[arg(value_name = "CONFIG")]
    pub input: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Summary printed by `validate`.
#[derive(Debug, Serialize)]
pub struct ValidationSummary {
    /// Whether the configuration loaded
    pub valid: bool,
    /// Device id as written
    pub device_id: String,
    /// Configuration name or "Unnamed"
    pub name: String,
    /// Number of layers
    pub layers: usize,
    /// Number of key bindings
    pub keys: usize,
    /// Number of encoder bindings
    pub encoders: usize,
    /// Macros with their resolved slots
    pub macros: Vec<MacroSummary>,
    /// Keys that fall outside the grid and are left out of the cheat sheet
    pub warnings: Vec<String>,
}

impl ValidationSummary {
    /// Builds the summary of a loaded configuration.
    #[must_use]
    pub fn new(device: &DeviceConfig, macros: &[Macro]) -> Self {
        let warnings = device
            .layers
            .iter()
            .flat_map(|layer| {
                layer
                    .keys
                    .iter()
                    .filter(|key| !key.position().is_on_grid())
                    .map(move |key| {
                        format!(
                            "Layer {}: key at {},{} is outside the grid",
                            layer.index, key.row, key.col
                        )
                    })
            })
            .collect();

        Self {
            valid: true,
            device_id: device.device_id.to_string(),
            name: device.display_name().to_string(),
            layers: device.layers.len(),
            keys: device.key_count(),
            encoders: device.encoder_count(),
            macros: macros.iter().map(MacroSummary::from).collect(),
            warnings,
        }
    }
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let (device, macros) = load_device_config(&self.input)?;
        let summary = ValidationSummary::new(&device, &macros);

        if self.json {
            let json = serde_json::to_string_pretty(&summary)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
        } else {
            print_human_readable(&summary);
        }

        Ok(())
    }
}

fn print_human_readable(summary: &ValidationSummary) {
    println!("✓ Configuration is valid");
    println!("Device:   {} ({})", summary.name, summary.device_id);
    println!("Layers:   {}", summary.layers);
    println!("Keys:     {}", summary.keys);
    println!("Encoders: {}", summary.encoders);
    println!("Macros:   {}", summary.macros.len());

    for m in &summary.macros {
        if m.description.is_empty() {
            println!("  M{}: {} action(s)", m.slot, m.actions);
        } else {
            println!("  M{}: {} ({} action(s))", m.slot, m.description, m.actions);
        }
    }

    for warning in &summary.warnings {
        println!("⚠ {warning}");
    }
}
