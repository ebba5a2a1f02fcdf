//! Macro slot assignment and expansion.
//!
//! Macros may name their slot explicitly (`id`) or leave it to the compiler.
//! Explicit slots are kept; the rest fill the lowest free slots in
//! definition order.

use crate::keycode::translate;
use crate::models::{Action, Macro, MacroDef};
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Resolves the slot of every macro definition.
///
/// The returned macros are sorted by slot. A repeated explicit slot is kept
/// as written and logged; lookups by slot then find the first definition.
pub fn assign_slots(defs: &[MacroDef]) -> Vec<Macro> {
    let mut used = BTreeSet::new();
    let mut macros = Vec::with_capacity(defs.len());

    // First pass: explicit slots
    for def in defs {
        if let Some(slot) = def.id {
            if !used.insert(slot) {
                warn!("Duplicate macro slot: {slot}");
            }
            macros.push(resolve(def, slot));
        }
    }

    // Second pass: fill the lowest free slots
    let mut next_slot = 0u32;
    for def in defs.iter().filter(|def| def.id.is_none()) {
        while used.contains(&next_slot) {
            next_slot += 1;
        }
        used.insert(next_slot);
        debug!("Assigned macro slot {next_slot}");
        macros.push(resolve(def, next_slot));
        next_slot += 1;
    }

    // Stable sort keeps duplicate slots in definition order
    macros.sort_by_key(|m| m.slot);
    macros
}

fn resolve(def: &MacroDef, slot: u32) -> Macro {
    Macro {
        slot,
        actions: def.actions.clone(),
        description: def.description.clone(),
    }
}

/// Finds the macro stored in `slot`.
pub fn find_macro(macros: &[Macro], slot: u32) -> Option<&Macro> {
    macros.iter().find(|m| m.slot == slot)
}

/// Expands a macro into the human-readable taps it sends.
///
/// Delays are skipped; every other action's keycode is translated and the
/// results are joined with single spaces.
pub fn expand_macro(m: &Macro) -> String {
    m.actions
        .iter()
        .filter_map(Action::keycode)
        .map(translate)
        .collect::<Vec<_>>()
        .join(" ")
}
