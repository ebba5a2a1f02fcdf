//! Keycode translation into human-readable notation.
//!
//! Converts QMK keycode expressions into the Emacs-style key notation used
//! on the cheat sheet: `LCTL(KC_C)` becomes `C-c`, `LCTL(LSFT(KC_C))`
//! becomes `C-S-c`, and `KC_SPC` becomes `SPC`.

pub mod key_info;

pub use key_info::{extract_key_info, looks_like_key_sequence};

/// Namespace marker of bare QMK keycodes.
const KEYCODE_PREFIX: &str = "KC_";

/// Modifier wrappers and the prefix each one contributes.
///
/// Right-hand variants and the QMK aliases (`LCMD`, `LOPT`, `LWIN`) map to
/// the same prefix as their left-hand counterpart.
const MODIFIER_WRAPPERS: &[(&str, &str)] = &[
    ("LCTL", "C-"),
    ("RCTL", "C-"),
    ("LSFT", "S-"),
    ("RSFT", "S-"),
    ("LALT", "A-"),
    ("RALT", "A-"),
    ("LOPT", "A-"),
    ("ROPT", "A-"),
    ("LGUI", "G-"),
    ("RGUI", "G-"),
    ("LCMD", "G-"),
    ("RCMD", "G-"),
    ("LWIN", "G-"),
    ("RWIN", "G-"),
];

/// Key names that keep an uppercase display form.
const SPECIAL_KEYS: &[(&str, &str)] = &[
    ("SPC", "SPC"),
    ("SPACE", "SPC"),
    ("ESC", "ESC"),
    ("ESCAPE", "ESC"),
    ("TAB", "TAB"),
];

/// Translates a keycode expression into human-readable notation.
///
/// - `WRAPPER(inner)` becomes the wrapper's prefix followed by the
///   translation of `inner`, so nested wrappers stack outermost first.
/// - `KC_<name>` becomes the special display form for space, escape and
///   tab, and the lower-cased name otherwise.
/// - Anything else is returned unchanged.
///
/// # Examples
///
/// ```
/// use macropad_compiler::keycode::translate;
///
/// assert_eq!(translate("LCTL(KC_C)"), "C-c");
/// assert_eq!(translate("LCTL(LSFT(KC_C))"), "C-S-c");
/// assert_eq!(translate("KC_SPC"), "SPC");
/// assert_eq!(translate("CUSTOM_KEY"), "CUSTOM_KEY");
/// ```
pub fn translate(expr: &str) -> String {
    for (wrapper, prefix) in MODIFIER_WRAPPERS {
        if let Some(inner) = unwrap_call(expr, wrapper) {
            return format!("{prefix}{}", translate(inner));
        }
    }

    if let Some(name) = expr.strip_prefix(KEYCODE_PREFIX) {
        return SPECIAL_KEYS
            .iter()
            .find(|(special, _)| *special == name)
            .map_or_else(|| name.to_lowercase(), |(_, display)| (*display).to_string());
    }

    expr.to_string()
}

/// Returns the argument text if `expr` is exactly `name(...)`.
fn unwrap_call<'a>(expr: &'a str, name: &str) -> Option<&'a str> {
    expr.strip_prefix(name)?
        .strip_prefix('(')?
        .strip_suffix(')')
}
