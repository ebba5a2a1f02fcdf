//! Shared CLI error and exit code types.

use crate::models::{DeviceConfig, Macro};
use crate::parser::load_config;
use crate::services::assign_slots;
use std::fmt;
use std::io;
use std::path::Path;

/// Process exit codes used by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// File or parse failure
    IoError = 1,
    /// Invalid configuration or arguments
    ValidationError = 2,
}

impl ExitCode {
    /// Numeric code passed to the OS.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error reported by a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code the process terminates with
    pub exit_code: ExitCode,
    /// Message shown to the user
    pub message: String,
}

impl CliError {
    /// Creates an I/O or parse error (exit code 1).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Creates a validation error (exit code 2).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationError,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type of CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Formats an `anyhow` error with its context chain on one line.
pub fn describe(err: &anyhow::Error) -> String {
    format!("{err:#}")
}

/// Reads a macropad configuration and resolves its macro slots.
///
/// Unreadable files are I/O errors; content that fails to parse or lacks a
/// required field is a validation error.
pub fn load_device_config(path: &Path) -> CliResult<(DeviceConfig, Vec<Macro>)> {
    let config = load_config(path).map_err(|e| {
        if e.chain().any(|cause| cause.is::<io::Error>()) {
            CliError::io(describe(&e))
        } else {
            CliError::validation(describe(&e))
        }
    })?;

    let macros = assign_slots(&config.macros);
    Ok((config, macros))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::fs;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::io("x").exit_code.code(), 1);
        assert_eq!(CliError::validation("x").exit_code.code(), 2);
        assert_eq!(ExitCode::Success.code(), 0);
    }

    #[test]
    fn test_display_is_message() {
        assert_eq!(CliError::io("Failed to read").to_string(), "Failed to read");
    }

    #[test]
    fn test_load_device_config_errors() {
        let temp = tempfile::TempDir::new().unwrap();

        let missing = load_device_config(&temp.path().join("absent.yaml")).unwrap_err();
        assert_eq!(missing.exit_code, ExitCode::IoError);
        assert!(missing.message.starts_with("Failed to read config file"));

        let path = temp.path().join("pad.yaml");
        fs::write(&path, "name: no device\n").unwrap();
        let invalid = load_device_config(&path).unwrap_err();
        assert_eq!(invalid.exit_code, ExitCode::ValidationError);
        assert!(invalid.message.starts_with("Invalid config file"));
        assert!(invalid.message.contains("Missing required field: device_id"));

        fs::write(&path, "device_id: [\n").unwrap();
        let malformed = load_device_config(&path).unwrap_err();
        assert_eq!(malformed.exit_code, ExitCode::ValidationError);
    }

    #[test]
    fn test_load_device_config_resolves_slots() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("pad.yaml");
        fs::write(
            &path,
            "device_id: 1\nlayers: []\nmacros:\n  - actions: [KC_A]\n  - id: 0\n    actions: [KC_B]\n",
        )
        .unwrap();

        let (_, macros) = load_device_config(&path).unwrap();
        let slots: Vec<u32> = macros.iter().map(|m| m.slot).collect();
        assert_eq!(slots, vec![0, 1]);
    }

    #[test]
    fn test_describe_includes_context() {
        let err = Err::<(), _>(anyhow::anyhow!("Missing required field: layers"))
            .context("Invalid config file: pad.yaml")
            .unwrap_err();
        assert_eq!(
            describe(&err),
            "Invalid config file: pad.yaml: Missing required field: layers"
        );
    }
}
