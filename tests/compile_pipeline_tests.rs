//! Library-level tests running the full load, resolve and render pipeline.

use macropad_compiler::services::assign_slots;
use macropad_compiler::{generate_cheat_sheet, load_config, ScriptGenerator};

mod fixtures;
use fixtures::*;

/// Lines of every fenced block in a document.
fn fenced_blocks(document: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current: Option<Vec<&str>> = None;

    for line in document.lines() {
        if line == "```" {
            match current.take() {
                Some(block) => blocks.push(block),
                None => current = Some(Vec::new()),
            }
        } else if let Some(block) = current.as_mut() {
            block.push(line);
        }
    }

    blocks
}

#[test]
fn test_grids_are_aligned_and_pipe_free() {
    let (config_path, _temp_dir) = create_sample_config();
    let config = load_config(&config_path).unwrap();
    let macros = assign_slots(&config.macros);

    let document = generate_cheat_sheet(&config, &macros);
    let blocks = fenced_blocks(&document);
    assert_eq!(blocks.len(), 2, "One grid per layer");

    for block in blocks {
        // 4 rows of two content lines, 3 separators, top and bottom
        assert_eq!(block.len(), 13);
        let width = block[0].chars().count();
        for line in &block {
            assert!(!line.contains('|'), "Grid must not contain ASCII pipes: {line}");
            assert_eq!(line.chars().count(), width, "Ragged line: {line}");
        }
        assert!(block[0].starts_with('┌'));
        assert!(block[12].starts_with('└'));
    }
}

#[test]
fn test_macro_key_expands_to_taps() {
    let yaml = "\
device_id: 1
layers:
  - index: 0
    keys:
      - { row: 0, col: 0, value: M2, description: Save }
      - { row: 0, col: 1, value: M9, description: Missing }
macros:
  - id: 2
    actions:
      - type: tap
        keycode: LCTL(KC_X)
      - type: delay
        ms: 10
      - LCTL(KC_S)
";
    let (config_path, _temp_dir) = create_temp_file("pad.yaml", yaml);
    let config = load_config(&config_path).unwrap();
    let macros = assign_slots(&config.macros);

    let document = generate_cheat_sheet(&config, &macros);
    assert!(document.contains("│ C-x C-s "));
    assert!(document.contains("│ M9 "));
}

#[test]
fn test_script_and_cheat_sheet_share_slots() {
    let (config_path, _temp_dir) = create_sample_config();
    let config = load_config(&config_path).unwrap();
    let macros = assign_slots(&config.macros);

    let script = ScriptGenerator::new(&config, &macros).generate();
    let document = generate_cheat_sheet(&config, &macros);

    for m in &macros {
        assert!(script.contains(&format!("macros -n {} -v", m.slot)));
        assert!(document.contains(&format!("| {} | ", m.slot)));
    }
}

#[test]
fn test_numeric_text_and_pipes_render_cleanly() {
    let yaml = "\
device_id: 1
name: 2024
layers:
  - index: 0
    keys:
      - { row: 0, col: 0, value: KC_A, description: 3 }
      - { row: 0, col: 1, value: KC_B, description: grep | less }
";
    let (config_path, _temp_dir) = create_temp_file("pad.yaml", yaml);
    let config = load_config(&config_path).unwrap();
    let macros = assign_slots(&config.macros);

    let document = generate_cheat_sheet(&config, &macros);
    assert!(document.starts_with("# Macropad Configuration: 2024\n"));
    assert!(document.contains("│ 3 "));
    assert!(document.contains("│ grep ¦ less "));
    for block in fenced_blocks(&document) {
        assert!(block.iter().all(|line| !line.contains('|')));
    }
}
