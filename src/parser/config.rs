//! YAML macropad configuration loading.
//!
//! The file format:
//!
//! ```yaml
//! device_id: 5633
//! name: Emacs pad
//! macros:
//!   - id: 1
//!     description: C-x 3
//!     actions:
//!       - type: tap
//!         keycode: LCTL(KC_X)
//!       - type: delay
//!         ms: 20
//!       - KC_3
//! layers:
//!   - index: 0
//!     name: Main
//!     keys:
//!       - { row: 0, col: 0, value: M1, description: "Split vertical (C-x 3)" }
//!     encoders:
//!       - { encoder: 0, cw: KC_VOLU, ccw: KC_VOLD, description: Volume }
//! ```

use crate::models::DeviceConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Top-level fields that must be present.
const REQUIRED_FIELDS: [&str; 2] = ["device_id", "layers"];

/// Reads and parses a configuration file.
pub fn load_config(path: &Path) -> Result<DeviceConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_config(&content).with_context(|| format!("Invalid config file: {}", path.display()))
}

/// Parses configuration YAML.
///
/// Only the presence of the required top-level fields is checked beyond what
/// deserialization itself enforces.
pub fn parse_config(content: &str) -> Result<DeviceConfig> {
    let value: serde_yml::Value =
        serde_yml::from_str(content).context("Failed to parse YAML")?;

    check_required_fields(&value)?;

    let config: DeviceConfig =
        serde_yml::from_value(value).context("Failed to read configuration structure")?;

    debug!(
        layers = config.layers.len(),
        macros = config.macros.len(),
        "Parsed configuration for device {}",
        config.device_id
    );

    Ok(config)
}

fn check_required_fields(value: &serde_yml::Value) -> Result<()> {
    if !value.is_mapping() {
        anyhow::bail!("Configuration must be a YAML mapping");
    }

    for field in REQUIRED_FIELDS {
        if value.get(field).is_none() {
            anyhow::bail!("Missing required field: {field}");
        }
    }

    if value.get("layers").is_some_and(|layers| !layers.is_sequence()) {
        anyhow::bail!("'layers' must be a list");
    }

    Ok(())
}
