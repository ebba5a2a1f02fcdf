//! Device programming script generation.
//!
//! This module turns a macropad configuration into the shell script that
//! programs macros, keys and encoders through the device configuration tool.

pub mod script;

// Re-export script types
pub use script::{ScriptCommand, ScriptGenerator};
