//! Cheat sheet export.
//!
//! This module renders a macropad configuration as a Markdown reference
//! document with a box-drawing key grid per layer.

pub mod cheat_sheet;
pub mod grid;

pub use cheat_sheet::{build_layer_grid, generate_cheat_sheet};
pub use grid::{render_grid, DisplayCell, Grid};
