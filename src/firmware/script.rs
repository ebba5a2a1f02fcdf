//! Device command script generation.
//!
//! Emits one invocation of the device configuration tool per macro, key and
//! encoder binding:
//!
//! ```bash
//! #!/bin/bash
//!
//! # Macro 0: CTRL-Q then ESC
//! vitaly -i 5633 macros -n 0 -v 'Tap(LCTL(KC_Q)); Tap(KC_ESC)'
//!
//! # Copy
//! vitaly -i 5633 keys -l 0 -p 0,0 -v 'LCTL(KC_C)'
//!
//! # Volume (CW)
//! vitaly -i 5633 encoders -l 0 -p 0,1 -v 'KC_VOLU'
//! ```

use crate::constants::{DEFAULT_SHEBANG, DEFAULT_TOOL_COMMAND};
use crate::models::{DeviceConfig, Direction, KeyBinding, Macro};

/// One generated command with its optional comment line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptCommand {
    /// Comment text without the leading `# `
    pub comment: Option<String>,
    /// Shell command line
    pub command: String,
}

/// Generates the device command script for a configuration.
#[derive(Debug, Clone)]
pub struct ScriptGenerator<'a> {
    config: &'a DeviceConfig,
    macros: &'a [Macro],
    tool: String,
    shebang: String,
}

impl<'a> ScriptGenerator<'a> {
    /// Creates a generator using the default tool and shebang.
    ///
    /// `macros` are the slot-resolved macros of `config`.
    #[must_use]
    pub fn new(config: &'a DeviceConfig, macros: &'a [Macro]) -> Self {
        Self {
            config,
            macros,
            tool: DEFAULT_TOOL_COMMAND.to_string(),
            shebang: DEFAULT_SHEBANG.to_string(),
        }
    }

    /// Sets the tool executable used in every command.
    #[must_use]
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = tool.into();
        self
    }

    /// Sets the first line of the script.
    #[must_use]
    pub fn with_shebang(mut self, shebang: impl Into<String>) -> Self {
        self.shebang = shebang.into();
        self
    }

    /// Commands programming every macro, in slot order.
    pub fn macro_commands(&self) -> Vec<ScriptCommand> {
        self.macros
            .iter()
            .map(|m| ScriptCommand {
                comment: m
                    .description
                    .as_deref()
                    .filter(|d| !d.is_empty())
                    .map(|d| format!("Macro {}: {}", m.slot, d)),
                command: format!(
                    "{} macros -n {} -v {}",
                    self.tool_prefix(),
                    m.slot,
                    shell_quote(&m.to_firmware())
                ),
            })
            .collect()
    }

    /// Commands programming every key, grouped by layer and row.
    ///
    /// Each group is one inner vector, ordered by (layer, row, col).
    pub fn key_command_groups(&self) -> Vec<Vec<ScriptCommand>> {
        let mut keys: Vec<(u8, &KeyBinding)> = self
            .config
            .layers
            .iter()
            .flat_map(|layer| layer.keys.iter().map(move |key| (layer.index, key)))
            .collect();
        keys.sort_by_key(|(layer, key)| (*layer, key.row, key.col));

        let mut groups: Vec<Vec<ScriptCommand>> = Vec::new();
        let mut current_group = None;

        for (layer, key) in keys {
            if current_group != Some((layer, key.row)) {
                groups.push(Vec::new());
                current_group = Some((layer, key.row));
            }

            let command = ScriptCommand {
                comment: key.description.as_deref().filter(|d| !d.is_empty()).map(String::from),
                command: format!(
                    "{} keys -l {} -p {},{} -v {}",
                    self.tool_prefix(),
                    layer,
                    key.row,
                    key.col,
                    shell_quote(&key.value)
                ),
            };
            if let Some(group) = groups.last_mut() {
                group.push(command);
            }
        }

        groups
    }

    /// Commands programming every encoder direction, one group per encoder.
    ///
    /// Encoders are ordered by (layer, encoder); clockwise comes first.
    pub fn encoder_command_groups(&self) -> Vec<Vec<ScriptCommand>> {
        let mut encoders: Vec<_> = self
            .config
            .layers
            .iter()
            .flat_map(|layer| layer.encoders.iter().map(move |enc| (layer.index, enc)))
            .collect();
        encoders.sort_by_key(|(layer, enc)| (*layer, enc.encoder));

        encoders
            .into_iter()
            .filter(|(_, enc)| enc.has_actions())
            .map(|(layer, enc)| {
                Direction::ALL
                    .into_iter()
                    .filter_map(|direction| {
                        let value = enc.action(direction)?;
                        let comment = match enc.description.as_deref().filter(|d| !d.is_empty()) {
                            Some(desc) => format!("{} ({})", desc, direction.label()),
                            None => direction.label().to_string(),
                        };
                        Some(ScriptCommand {
                            comment: Some(comment),
                            command: format!(
                                "{} encoders -l {} -p {},{} -v {}",
                                self.tool_prefix(),
                                layer,
                                enc.encoder,
                                direction.firmware_index(),
                                shell_quote(value)
                            ),
                        })
                    })
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// Generates the complete script.
    pub fn generate(&self) -> String {
        let mut lines: Vec<String> = vec![self.shebang.clone(), String::new()];

        for cmd in self.macro_commands() {
            push_command(&mut lines, &cmd);
            lines.push(String::new());
        }

        for (idx, group) in self.key_command_groups().iter().enumerate() {
            if idx > 0 {
                lines.push(String::new());
            }
            for cmd in group {
                push_command(&mut lines, cmd);
            }
        }
        lines.push(String::new());

        for (idx, group) in self.encoder_command_groups().iter().enumerate() {
            if idx > 0 {
                lines.push(String::new());
            }
            for cmd in group {
                push_command(&mut lines, cmd);
            }
        }

        let mut script = lines.join("\n");
        script.push('\n');
        script
    }

    fn tool_prefix(&self) -> String {
        format!(
            "{} -i {}",
            self.tool,
            shell_word(&self.config.device_id.to_string())
        )
    }
}

fn push_command(lines: &mut Vec<String>, cmd: &ScriptCommand) {
    if let Some(comment) = &cmd.comment {
        lines.push(format!("# {}", single_line(comment)));
    }
    lines.push(cmd.command.clone());
}

/// Wraps a value in single quotes for the shell.
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

/// Leaves plain words as they are and quotes anything else.
fn shell_word(value: &str) -> String {
    let plain = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | ':' | '/'));

    if plain {
        value.to_string()
    } else {
        shell_quote(value)
    }
}

/// Collapses line breaks so a comment stays on one line.
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
