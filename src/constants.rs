//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the defaults of the generated files.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Macropad Compiler";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "macropad";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "MacropadCompiler";

/// Device configuration tool invoked by the generated script.
pub const DEFAULT_TOOL_COMMAND: &str = "vitaly";

/// First line of the generated script.
pub const DEFAULT_SHEBANG: &str = "#!/bin/bash";

/// Default path of the generated script.
pub const DEFAULT_SCRIPT_PATH: &str = "macropad.sh";

/// Default path of the generated cheat sheet.
pub const DEFAULT_CHEAT_SHEET_PATH: &str = "cheat-sheet.md";
