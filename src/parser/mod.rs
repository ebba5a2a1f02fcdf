//! Parsing of macropad configuration files.
//!
//! YAML parsing and the required-field check live here; everything past
//! this point works on the typed models.

pub mod config;

// Re-export commonly used functions
pub use config::{load_config, parse_config};
