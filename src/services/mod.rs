//! Service layer for business logic.
//!
//! Services coordinate between the parsed models and the renderers.

pub mod macros;

// Re-export commonly used functions
pub use macros::{assign_slots, expand_macro, find_macro};
