//! Top-level device configuration.

use crate::models::scalar::optional_scalar_string;
use crate::models::{Layer, MacroDef};
use serde::Deserialize;
use std::fmt;

/// Device identifier as given in the configuration (`5633` or `"0x1601"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DeviceId {
    /// Numeric id
    Number(u64),
    /// Textual id, passed through as written
    Text(String),
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Complete macropad configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeviceConfig {
    /// Device the commands are addressed to
    pub device_id: DeviceId,
    /// Optional human-readable name
    #[serde(default, deserialize_with = "optional_scalar_string")]
    pub name: Option<String>,
    /// Layers in configuration order
    pub layers: Vec<Layer>,
    /// Macro definitions in configuration order
    #[serde(default)]
    pub macros: Vec<MacroDef>,
}

impl DeviceConfig {
    /// Creates an empty configuration for a device.
    pub fn new(device_id: DeviceId) -> Self {
        Self {
            device_id,
            name: None,
            layers: Vec::new(),
            macros: Vec::new(),
        }
    }

    /// Configuration name or "Unnamed".
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed")
    }

    /// Total number of key bindings across all layers.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.layers.iter().map(|l| l.keys.len()).sum()
    }

    /// Total number of encoder bindings across all layers.
    #[must_use]
    pub fn encoder_count(&self) -> usize {
        self.layers.iter().map(|l| l.encoders.len()).sum()
    }
}
