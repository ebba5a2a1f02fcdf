//! Cheat sheet document assembly.
//!
//! Composes the Markdown reference document: a title, the macro table, and
//! one section per layer holding the key grid and the encoder table.

use crate::export::grid::{empty_grid, render_grid, Grid};
use crate::keycode::extract_key_info;
use crate::models::{DeviceConfig, Direction, EncoderBinding, Layer, Macro, GRID_COLS, GRID_ROWS};
use std::fmt::Write as _;
use tracing::debug;

/// Generates the complete cheat sheet.
///
/// `macros` are the slot-resolved macros of `config` (see
/// [`crate::services::assign_slots`]); they drive both the macro table and
/// the expansion of `M<slot>` keys.
///
/// # Example Output
///
/// ````markdown
/// # Macropad Configuration: Emacs
///
/// Device ID: `5633`
///
/// ## Layer 0: Main
///
/// ```
/// ┌────────────────┬──────┐
/// │ Split vertical │ Copy │
/// │ C-x 3          │ A-w  │
/// └────────────────┴──────┘
/// ```
/// ````
pub fn generate_cheat_sheet(config: &DeviceConfig, macros: &[Macro]) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# Macropad Configuration: {}", config.display_name());
    output.push('\n');
    let _ = writeln!(output, "Device ID: `{}`", config.device_id);
    output.push('\n');

    if !macros.is_empty() {
        output.push_str(&generate_macro_table(macros));
        output.push('\n');
    }

    for layer in &config.layers {
        output.push_str(&generate_layer_section(layer, macros));
        output.push('\n');
    }

    output
}

/// Builds the display grid of a layer.
///
/// Keys outside the 4×4 grid are left out; positions without a key stay
/// empty. If two keys share a position the later one is shown.
pub fn build_layer_grid(layer: &Layer, macros: &[Macro]) -> Grid {
    let mut grid = empty_grid(GRID_ROWS, GRID_COLS);

    for key in &layer.keys {
        if !key.position().is_on_grid() {
            debug!(
                "Skipping key at ({}, {}) on layer {}: outside the grid",
                key.row, key.col, layer.index
            );
            continue;
        }

        let cell = extract_key_info(key.description_or_empty(), &key.value, macros);
        grid[usize::from(key.row)][usize::from(key.col)] = cell.into();
    }

    grid
}

/// Generates the section of a single layer.
fn generate_layer_section(layer: &Layer, macros: &[Macro]) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "## Layer {}: {}", layer.index, layer.display_name());
    output.push('\n');
    output.push_str(&render_grid(&build_layer_grid(layer, macros)));
    output.push('\n');

    if !layer.encoders.is_empty() {
        output.push('\n');
        output.push_str(&generate_encoder_table(&layer.encoders));
    }

    output
}

/// Generates the `### Encoders` table of a layer.
///
/// Both directions are listed, clockwise first, whenever either is bound;
/// an unbound direction shows `N/A`.
pub fn generate_encoder_table(encoders: &[EncoderBinding]) -> String {
    let mut output = String::new();

    output.push_str("### Encoders\n\n");
    output.push_str("| Encoder | Direction | Action | Description |\n");
    output.push_str("|---------|-----------|--------|-------------|\n");

    for encoder in encoders.iter().filter(|e| e.has_actions()) {
        let name = encoder.display_name();
        for direction in Direction::ALL {
            let action = encoder.action(direction).unwrap_or("N/A");
            let description = match direction {
                Direction::Cw => encoder.description.as_deref().unwrap_or(""),
                Direction::Ccw => "",
            };
            let _ = writeln!(
                output,
                "| {} | {} | `{}` | {} |",
                name,
                direction.label(),
                action,
                description
            );
        }
    }

    output
}

/// Generates the `## Macros` table.
pub fn generate_macro_table(macros: &[Macro]) -> String {
    let mut output = String::new();

    output.push_str("## Macros\n\n");
    output.push_str("| Slot | Description | Actions |\n");
    output.push_str("|------|-------------|---------|\n");

    for m in macros {
        let actions = m
            .actions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(
            output,
            "| {} | {} | {} |",
            m.slot,
            m.description.as_deref().unwrap_or(""),
            actions
        );
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Action, DeviceId, KeyBinding};

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
                    Action::Bare("KC_3".into()),
                ],
            )
            .with_description("C-x 3"),
        ]
    }

    fn sample_config() -> DeviceConfig {
        let mut layer = Layer::new(0, "Main");
        layer.add_key(KeyBinding::new(0, 0, "M0").with_description("CTRL-Q ESC"));
        layer.add_key(KeyBinding::new(0, 1, "M1").with_description("Split vertical (C-x 3)"));
        layer.add_key(KeyBinding::new(1, 0, "LCTL(KC_SPC)").with_description("Mark (C-SPC)"));

        let mut config = DeviceConfig::new(DeviceId::Number(5633));
        config.name = Some("Test".to_string());
        config.layers.push(layer);
        config
    }

    #[test]
    fn test_header_present() {
        let result = generate_cheat_sheet(&sample_config(), &[]);
        assert!(result.starts_with("# Macropad Configuration: Test\n"));
        assert!(result.contains("Device ID: `5633`"));
    }

    #[test]
    fn test_layer_header_and_grid() {
        let result = generate_cheat_sheet(&sample_config(), &sample_macros());
        assert!(result.contains("## Layer 0: Main"));
        assert!(result.contains('┌'));
        assert!(result.contains('└'));
        assert!(!result.contains("| Pos |"));
    }

    #[test]
    fn test_key_names_in_output() {
        let result = generate_cheat_sheet(&sample_config(), &sample_macros());
        assert!(result.contains("CTRL-Q ESC"));
        assert!(result.contains("Split vertical"));
        assert!(result.contains("Mark"));
        assert!(result.contains("C-q ESC"));
        assert!(result.contains("C-SPC"));
    }

    #[test]
    fn test_build_layer_grid_places_keys() {
        let grid = build_layer_grid(&sample_config().layers[0], &sample_macros());
        assert_eq!(grid.len(), GRID_ROWS);
        assert_eq!(grid[0][0].name, "CTRL-Q ESC");
        assert_eq!(grid[0][0].sequence, "C-q ESC");
        assert_eq!(grid[0][1].sequence, "C-x 3");
        assert_eq!(grid[1][0].name, "Mark");
        assert!(grid[3][3].is_empty());
    }

    #[test]
    fn test_build_layer_grid_skips_off_grid_keys() {
        let mut layer = Layer::new(0, "Main");
        layer.add_key(KeyBinding::new(4, 0, "KC_A"));
        layer.add_key(KeyBinding::new(0, 9, "KC_B"));
        let grid = build_layer_grid(&layer, &[]);
        assert!(grid.iter().flatten().all(|cell| cell.is_empty()));
    }

    #[test]
    fn test_macro_table() {
        let result = generate_cheat_sheet(&sample_config(), &sample_macros());
        assert!(result.contains("## Macros"));
        assert!(result.contains("| 0 | CTRL-Q then ESC | tap(LCTL(KC_Q)), tap(KC_ESC) |"));
        assert!(result.contains("| 1 | C-x 3 | tap(LCTL(KC_X)), delay(20), KC_3 |"));
    }

    #[test]
    fn test_no_macro_section_without_macros() {
        let result = generate_cheat_sheet(&sample_config(), &[]);
        assert!(!result.contains("## Macros"));
    }

    #[test]
    fn test_encoder_table() {
        let mut config = sample_config();
        config.layers[0].add_encoder(
            EncoderBinding::new(0, "KC_VOLU", "KC_VOLD").with_description("Volume"),
        );
        let mut scroll = EncoderBinding::new(3, "KC_WH_D", "KC_WH_U");
        scroll.ccw = None;
        config.layers[0].add_encoder(scroll);

        let result = generate_cheat_sheet(&config, &[]);
        assert!(result.contains("### Encoders"));
        assert!(result.contains("| Encoder | Direction | Action | Description |"));
        assert!(result.contains("| Left | CW | `KC_VOLU` | Volume |"));
        assert!(result.contains("| Left | CCW | `KC_VOLD` |  |"));
        assert!(result.contains("| Encoder 3 | CW | `KC_WH_D` |  |"));
        assert!(result.contains("| Encoder 3 | CCW | `N/A` |  |"));

        let cw = result.find("| Left | CW |").unwrap();
        let ccw = result.find("| Left | CCW |").unwrap();
        assert!(cw < ccw);
    }

    #[test]
    fn test_no_encoder_section_without_encoders() {
        let result = generate_cheat_sheet(&sample_config(), &[]);
        assert!(!result.contains("### Encoders"));
    }

    #[test]
    fn test_unnamed_config_and_layer() {
        let mut config = DeviceConfig::new(DeviceId::Text("pad".into()));
        config.layers.push(Layer {
            index: 2,
            name: None,
            keys: vec![],
            encoders: vec![],
        });
        let result = generate_cheat_sheet(&config, &[]);
        assert!(result.contains("# Macropad Configuration: Unnamed"));
        assert!(result.contains("Device ID: `pad`"));
        assert!(result.contains("## Layer 2: Unnamed"));
    }
}
