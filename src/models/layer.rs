//! Layer, key, and encoder binding data structures.

use crate::models::scalar::{optional_scalar_string, scalar_string};
use serde::Deserialize;

/// Number of rows on the macropad grid.
pub const GRID_ROWS: usize = 4;
/// Number of columns on the macropad grid.
pub const GRID_COLS: usize = 4;

/// Position on the key grid (row, col), each in `0..4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Grid row (0-based)
    pub row: u8,
    /// Grid column (0-based)
    pub col: u8,
}

impl Position {
    /// Creates a new Position with the given row and column.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns true if the position lies on the fixed 4×4 grid.
    #[must_use]
    pub const fn is_on_grid(self) -> bool {
        (self.row as usize) < GRID_ROWS && (self.col as usize) < GRID_COLS
    }
}

/// Single key assignment on a layer.
///
/// `value` is either a keycode expression (`"LCTL(KC_C)"`) or a macro
/// reference of the form `"M<slot>"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeyBinding {
    /// Grid row
    pub row: u8,
    /// Grid column
    pub col: u8,
    /// Keycode expression or macro reference
    #[serde(deserialize_with = "scalar_string")]
    pub value: String,
    /// Optional user description, possibly ending in a "(C-x 3)" annotation
    #[serde(default, deserialize_with = "optional_scalar_string")]
    pub description: Option<String>,
}

impl KeyBinding {
    /// Creates a new `KeyBinding` without description.
    pub fn new(row: u8, col: u8, value: impl Into<String>) -> Self {
        Self {
            row,
            col,
            value: value.into(),
            description: None,
        }
    }

    /// Sets the description for this key.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Grid position of this key.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }

    /// Description or the empty string.
    #[must_use]
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Rotation direction of an encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Clockwise
    Cw,
    /// Counter-clockwise
    Ccw,
}

impl Direction {
    /// Both directions, clockwise first.
    pub const ALL: [Self; 2] = [Self::Cw, Self::Ccw];

    /// Label used in documents and script comments.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cw => "CW",
            Self::Ccw => "CCW",
        }
    }

    /// Index the device firmware uses for this direction.
    #[must_use]
    pub const fn firmware_index(self) -> u8 {
        match self {
            Self::Cw => 1,
            Self::Ccw => 0,
        }
    }
}

/// Rotary encoder assignment on a layer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EncoderBinding {
    /// Encoder index on the device
    pub encoder: u8,
    /// Value sent on clockwise rotation
    #[serde(default, deserialize_with = "optional_scalar_string")]
    pub cw: Option<String>,
    /// Value sent on counter-clockwise rotation
    #[serde(default, deserialize_with = "optional_scalar_string")]
    pub ccw: Option<String>,
    /// Optional user description
    #[serde(default, deserialize_with = "optional_scalar_string")]
    pub description: Option<String>,
}

impl EncoderBinding {
    /// Creates an encoder binding with both directions set.
    pub fn new(encoder: u8, cw: impl Into<String>, ccw: impl Into<String>) -> Self {
        Self {
            encoder,
            cw: Some(cw.into()),
            ccw: Some(ccw.into()),
            description: None,
        }
    }

    /// Sets the description for this encoder.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Value bound to the given direction, if any.
    #[must_use]
    pub fn action(&self, direction: Direction) -> Option<&str> {
        match direction {
            Direction::Cw => self.cw.as_deref(),
            Direction::Ccw => self.ccw.as_deref(),
        }
    }

    /// Returns true if at least one direction is bound.
    #[must_use]
    pub const fn has_actions(&self) -> bool {
        self.cw.is_some() || self.ccw.is_some()
    }

    /// Human-readable encoder name ("Left", "Middle", "Right", "Encoder 3").
    #[must_use]
    pub fn display_name(&self) -> String {
        match self.encoder {
            0 => "Left".to_string(),
            1 => "Middle".to_string(),
            2 => "Right".to_string(),
            n => format!("Encoder {n}"),
        }
    }
}

/// A single layer of the macropad.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Layer {
    /// Layer index on the device
    pub index: u8,
    /// Optional layer name
    #[serde(default, deserialize_with = "optional_scalar_string")]
    pub name: Option<String>,
    /// Key bindings, at most one per position
    #[serde(default)]
    pub keys: Vec<KeyBinding>,
    /// Encoder bindings
    #[serde(default)]
    pub encoders: Vec<EncoderBinding>,
}

impl Layer {
    /// Creates an empty layer.
    pub fn new(index: u8, name: impl Into<String>) -> Self {
        Self {
            index,
            name: Some(name.into()),
            keys: Vec::new(),
            encoders: Vec::new(),
        }
    }

    /// Adds a key binding.
    pub fn add_key(&mut self, key: KeyBinding) {
        self.keys.push(key);
    }

    /// Adds an encoder binding.
    pub fn add_encoder(&mut self, encoder: EncoderBinding) {
        self.encoders.push(encoder);
    }

    /// Layer name or "Unnamed".
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed")
    }
}
