//! CLI command handlers for the macropad compiler.
//!
//! Each subcommand is a `clap` argument struct with an `execute` method that
//! returns a [`CliResult`](common::CliResult); `main` maps errors to exit codes.

pub mod common;
pub mod compile;
pub mod config;
pub mod keycode;
pub mod validate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use compile::CompileArgs;
pub use config::ConfigArgs;
pub use keycode::KeycodeArgs;
pub use validate::ValidateArgs;
