//! Keycode translation command.

use crate::cli::common::{CliError, CliResult};
use crate::keycode::translate;
use clap::Args;
use serde::Serialize;

/// Translate keycode expressions into their short display form
#[derive(Debug, Clone, Args)]
pub struct KeycodeArgs {
    /// Keycode expressions (e.g., "LCTL(KC_C)")
    #[arg(value_name = "EXPR", required = true)]
    pub exprs: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct Translation<'a> {
    input: &'a str,
    translated: String,
}

impl KeycodeArgs {
    /// Execute the keycode command
    pub fn execute(&self) -> CliResult<()> {
        let translations: Vec<Translation> = self
            .exprs
            .iter()
            .map(|expr| Translation {
                input: expr,
                translated: translate(expr),
            })
            .collect();

        if self.json {
            let json = serde_json::to_string_pretty(&translations)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
        } else {
            for t in &translations {
                println!("{} -> {}", t.input, t.translated);
            }
        }

        Ok(())
    }
}
