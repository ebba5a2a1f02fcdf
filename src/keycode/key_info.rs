//! Display name and key sequence extraction for a single key binding.

use super::translate;
use crate::models::Macro;
use crate::services::macros::{expand_macro, find_macro};
use regex::Regex;
use std::sync::OnceLock;

/// Whitespace-delimited words that mark a key sequence.
const SEQUENCE_KEY_NAMES: [&str; 4] = ["ESC", "SPC", "TAB", "RET"];

/// `name (X)` at the end of a description; X holds no parentheses.
fn trailing_parenthetical() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(.*)\(([^()]*)\)\s*$").expect("parenthetical regex is valid"))
}

/// A modifier prefix such as `C-` or `M-` starting a word.
fn modifier_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b[CMSAG]-").expect("modifier prefix regex is valid"))
}

/// Macro reference such as `M12`.
fn macro_reference() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^M(\d+)$").expect("macro reference regex is valid"))
}

/// Returns true if an annotation reads like a key sequence (`C-x 3`, `ESC`)
/// rather than a remark (`visual select`).
///
/// This is a lexical heuristic only. Text that happens to contain a
/// modifier prefix or a special key word is classified as a sequence.
pub fn looks_like_key_sequence(text: &str) -> bool {
    modifier_prefix().is_match(text)
        || text
            .split_whitespace()
            .any(|word| SEQUENCE_KEY_NAMES.contains(&word))
}

/// Extracts the `(name, sequence)` pair shown for a key.
///
/// Priority:
/// 1. A trailing `(X)` in the description that looks like a key sequence is
///    used verbatim as the sequence.
/// 2. A trailing `(X)` that does not is dropped and `value` is translated.
/// 3. A macro reference `M<slot>` expands to the macro's taps; an unknown
///    slot is shown as written.
/// 4. Anything else is translated with [`translate`].
///
/// # Examples
///
/// ```
/// use macropad_compiler::keycode::extract_key_info;
///
/// let (name, seq) = extract_key_info("Shift-copy (visual select)", "LCTL(LSFT(KC_C))", &[]);
/// assert_eq!(name, "Shift-copy");
/// assert_eq!(seq, "C-S-c");
/// ```
pub fn extract_key_info(description: &str, value: &str, macros: &[Macro]) -> (String, String) {
    if let Some(caps) = trailing_parenthetical().captures(description) {
        let name = caps[1].trim().to_string();
        let annotation = &caps[2];

        let sequence = if looks_like_key_sequence(annotation) {
            annotation.to_string()
        } else {
            translate(value)
        };
        return (name, sequence);
    }

    let sequence = match macro_slot(value) {
        Some(slot) => find_macro(macros, slot).map_or_else(|| value.to_string(), expand_macro),
        None if macro_reference().is_match(value) => value.to_string(),
        None => translate(value),
    };

    (description.to_string(), sequence)
}

/// Slot number of a macro reference, if `value` is one and fits a slot.
fn macro_slot(value: &str) -> Option<u32> {
    macro_reference()
        .captures(value)
        .and_then(|caps| caps[1].parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Action;

    fn sample_macros() -> Vec<Macro> {
        vec![
            Macro::new(
                0,
                vec![
                    Action::Tap("LCTL(KC_Q)".into()),
                    Action::Tap("KC_ESC".into()),
                ],
            )
            .with_description("CTRL-Q then ESC"),
            Macro::new(
                1,
                vec![
                    Action::Tap("LCTL(KC_X)".into()),
                    Action::Delay(20),
                    Action::Tap("KC_3".into()),
                ],
            )
            .with_description("C-x 3"),
            Macro::new(
                10,
                vec![
                    Action::Tap("LCTL(KC_C)".into()),
                    Action::Delay(20),
                    Action::Tap("LCTL(KC_E)".into()),
                ],
            )
            .with_description("C-c C-e"),
        ]
    }

    #[test]
    fn test_parens_with_key_sequence_wins_over_macro() {
        let (name, seq) = extract_key_info("Split vertical (C-x 3)", "M1", &sample_macros());
        assert_eq!(name, "Split vertical");
        assert_eq!(seq, "C-x 3");
    }

    #[test]
    fn test_parens_with_non_key_info() {
        let (name, seq) =
            extract_key_info("Shift-copy (visual select)", "LCTL(LSFT(KC_C))", &sample_macros());
        assert_eq!(name, "Shift-copy");
        assert_eq!(seq, "C-S-c");
    }

    #[test]
    fn test_no_parens_direct_keycode() {
        let (name, seq) = extract_key_info("Copy", "LCTL(KC_C)", &sample_macros());
        assert_eq!(name, "Copy");
        assert_eq!(seq, "C-c");
    }

    #[test]
    fn test_no_parens_macro_ref() {
        let (name, seq) = extract_key_info("CTRL-Q ESC", "M0", &sample_macros());
        assert_eq!(name, "CTRL-Q ESC");
        assert_eq!(seq, "C-q ESC");
    }

    #[test]
    fn test_macro_ref_delays_skipped() {
        let (_, seq) = extract_key_info("Split vertical", "M1", &sample_macros());
        assert_eq!(seq, "C-x 3");
    }

    #[test]
    fn test_multi_tap_macro() {
        let (name, seq) = extract_key_info("Eat emacs mode", "M10", &sample_macros());
        assert_eq!(name, "Eat emacs mode");
        assert_eq!(seq, "C-c C-e");
    }

    #[test]
    fn test_unknown_macro_passes_through() {
        let (_, seq) = extract_key_info("Missing", "M42", &sample_macros());
        assert_eq!(seq, "M42");
        let (_, seq) = extract_key_info("Huge", "M99999999999", &sample_macros());
        assert_eq!(seq, "M99999999999");
    }

    #[test]
    fn test_paren_with_esc() {
        let (name, seq) = extract_key_info("Quit (ESC)", "KC_ESC", &[]);
        assert_eq!(name, "Quit");
        assert_eq!(seq, "ESC");
    }

    #[test]
    fn test_paren_with_return_word() {
        let (name, seq) = extract_key_info("Submit (C-c RET)", "M3", &[]);
        assert_eq!(name, "Submit");
        assert_eq!(seq, "C-c RET");
    }

    #[test]
    fn test_empty_description() {
        let (name, seq) = extract_key_info("", "KC_A", &[]);
        assert_eq!(name, "");
        assert_eq!(seq, "a");
    }

    #[test]
    fn test_nested_parens_are_not_an_annotation() {
        let (name, seq) = extract_key_info("Odd (a (b))", "KC_A", &[]);
        assert_eq!(name, "Odd (a (b))");
        assert_eq!(seq, "a");
    }

    #[test]
    fn test_looks_like_key_sequence() {
        assert!(looks_like_key_sequence("C-x 3"));
        assert!(looks_like_key_sequence("M-x"));
        assert!(looks_like_key_sequence("ESC"));
        assert!(looks_like_key_sequence("press TAB twice"));
        assert!(!looks_like_key_sequence("visual select"));
        assert!(!looks_like_key_sequence("ABC-1"));
        assert!(!looks_like_key_sequence("escape"));
    }

    #[test]
    fn test_ambiguous_annotation_kept_as_sequence() {
        // A remark ending in a special key word is treated as a sequence
        let (name, seq) = extract_key_info("Leave (hit ESC)", "KC_Q", &[]);
        assert_eq!(name, "Leave");
        assert_eq!(seq, "hit ESC");
    }
}
