//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application settings
//! in TOML format with platform-specific directory resolution. These are the
//! compiler's own settings, not the macropad YAML being compiled.

use crate::constants::{
    CONFIG_DIR_NAME, DEFAULT_CHEAT_SHEET_PATH, DEFAULT_SCRIPT_PATH, DEFAULT_SHEBANG,
    DEFAULT_TOOL_COMMAND,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Device configuration tool settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Executable invoked by every generated command
    pub command: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            command: DEFAULT_TOOL_COMMAND.to_string(),
        }
    }
}

/// Default output locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Generated shell script
    pub script: PathBuf,
    /// Generated cheat sheet
    pub cheat_sheet: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            script: PathBuf::from(DEFAULT_SCRIPT_PATH),
            cheat_sheet: PathBuf::from(DEFAULT_CHEAT_SHEET_PATH),
        }
    }
}

/// Generated script settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptConfig {
    /// First line of the script
    pub shebang: String,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            shebang: DEFAULT_SHEBANG.to_string(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/MacropadCompiler/config.toml`
/// - macOS: `~/Library/Application Support/MacropadCompiler/config.toml`
/// - Windows: `%APPDATA%\MacropadCompiler\config.toml`
///
/// # Example
///
/// ```toml
/// [tool]
/// command = "vitaly"
///
/// [output]
/// script = "macropad.sh"
/// cheat_sheet = "cheat-sheet.md"
///
/// [script]
/// shebang = "#!/bin/bash"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Device configuration tool
    pub tool: ToolConfig,
    /// Default output paths
    pub output: OutputConfig,
    /// Script settings
    pub script: ScriptConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from a specific file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to a file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp config file: {}", temp_path.display())
        })?;

        fs::rename(&temp_path, path).with_context(|| {
            format!("Failed to rename temp config file to: {}", path.display())
        })?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - the tool command is not blank
    /// - both output paths are set
    pub fn validate(&self) -> Result<()> {
        if self.tool.command.trim().is_empty() {
            anyhow::bail!("tool.command cannot be empty");
        }

        if self.output.script.as_os_str().is_empty() {
            anyhow::bail!("output.script cannot be empty");
        }

        if self.output.cheat_sheet.as_os_str().is_empty() {
            anyhow::bail!("output.cheat_sheet cannot be empty");
        }

        Ok(())
    }
}
