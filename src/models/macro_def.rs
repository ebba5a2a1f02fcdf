//! Macro and macro action data structures.

use crate::models::scalar::optional_scalar_string;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One step of a macro.
///
/// In YAML an action is either a plain keycode string (tap shorthand) or a
/// map with a `type` of `tap`, `down`, `up` (with `keycode`) or `delay`
/// (with `ms`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawAction")]
pub enum Action {
    /// Press and release a key
    Tap(String),
    /// Press and hold a key
    Down(String),
    /// Release a held key
    Up(String),
    /// Wait before the next action
    Delay(u64),
    /// Bare keycode string, same effect as `Tap`
    Bare(String),
}

impl Action {
    /// Keycode this action sends, or `None` for delays.
    #[must_use]
    pub fn keycode(&self) -> Option<&str> {
        match self {
            Self::Tap(kc) | Self::Down(kc) | Self::Up(kc) | Self::Bare(kc) => Some(kc),
            Self::Delay(_) => None,
        }
    }

    /// Firmware macro syntax for this action (`Tap(KC_A)`, `Delay(20)`).
    #[must_use]
    pub fn to_firmware(&self) -> String {
        match self {
            Self::Tap(kc) | Self::Bare(kc) => format!("Tap({kc})"),
            Self::Down(kc) => format!("Down({kc})"),
            Self::Up(kc) => format!("Up({kc})"),
            Self::Delay(ms) => format!("Delay({ms})"),
        }
    }
}

/// Short form used in the cheat sheet: `tap(KC_A)`, `delay(20)`, bare
/// shorthand verbatim.
impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tap(kc) => write!(f, "tap({kc})"),
            Self::Down(kc) => write!(f, "down({kc})"),
            Self::Up(kc) => write!(f, "up({kc})"),
            Self::Delay(ms) => write!(f, "delay({ms})"),
            Self::Bare(kc) => f.write_str(kc),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAction {
    Bare(String),
    Typed(TypedAction),
}

#[derive(Deserialize)]
struct TypedAction {
    #[serde(rename = "type")]
    kind: String,
    keycode: Option<String>,
    ms: Option<u64>,
}

impl TryFrom<RawAction> for Action {
    type Error = String;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        let typed = match raw {
            RawAction::Bare(keycode) => return Ok(Self::Bare(keycode)),
            RawAction::Typed(typed) => typed,
        };

        let keycode = |kind: &str| {
            typed
                .keycode
                .clone()
                .ok_or_else(|| format!("Macro action '{kind}' requires a 'keycode'"))
        };

        match typed.kind.as_str() {
            "tap" => Ok(Self::Tap(keycode("tap")?)),
            "down" => Ok(Self::Down(keycode("down")?)),
            "up" => Ok(Self::Up(keycode("up")?)),
            "delay" => typed
                .ms
                .map(Self::Delay)
                .ok_or_else(|| "Macro action 'delay' requires 'ms'".to_string()),
            other => Err(format!("Unknown macro action type: {other}")),
        }
    }
}

/// A macro as written in the configuration; `id` may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MacroDef {
    /// Explicit slot, if the author chose one
    #[serde(default)]
    pub id: Option<u32>,
    /// Ordered actions
    #[serde(default)]
    pub actions: Vec<Action>,
    /// Optional description
    #[serde(default, deserialize_with = "optional_scalar_string")]
    pub description: Option<String>,
}

/// A macro with its slot resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Macro {
    /// Slot number referenced as `M<slot>`
    pub slot: u32,
    /// Ordered actions
    pub actions: Vec<Action>,
    /// Optional description
    pub description: Option<String>,
}

impl Macro {
    /// Creates a macro in the given slot.
    #[must_use]
    pub fn new(slot: u32, actions: Vec<Action>) -> Self {
        Self {
            slot,
            actions,
            description: None,
        }
    }

    /// Sets the description for this macro.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Firmware macro body: actions joined by `"; "`.
    #[must_use]
    pub fn to_firmware(&self) -> String {
        self.actions
            .iter()
            .map(Action::to_firmware)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Slot summary used by `validate --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MacroSummary {
    /// Resolved slot
    pub slot: u32,
    /// Description or empty
    pub description: String,
    /// Number of actions
    pub actions: usize,
}

impl From<&Macro> for MacroSummary {
    fn from(m: &Macro) -> Self {
        Self {
            slot: m.slot,
            description: m.description.clone().unwrap_or_default(),
            actions: m.actions.len(),
        }
    }
}
