//! Data models for macropad configurations.
//!
//! Models mirror the YAML configuration and are read-only once parsed.

pub mod device;
pub mod layer;
pub mod macro_def;
pub mod scalar;

// Re-export all model types
pub use device::{DeviceConfig, DeviceId};
pub use layer::{Direction, EncoderBinding, KeyBinding, Layer, Position, GRID_COLS, GRID_ROWS};
pub use macro_def::{Action, Macro, MacroDef, MacroSummary};
