//! Macropad Compiler Library
//!
//! This library compiles a declarative macropad configuration (YAML) into a
//! shell script of device programming commands and a Markdown cheat sheet
//! with box-drawn key grids, encoder tables and a macro table.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod firmware;
pub mod keycode;
pub mod models;
pub mod parser;
pub mod services;

pub use export::{generate_cheat_sheet, render_grid};
pub use firmware::ScriptGenerator;
pub use keycode::{extract_key_info, translate};
pub use parser::{load_config, parse_config};
