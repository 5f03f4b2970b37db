//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for terminal-based selection. The conflict prompt plugs
//! into the merge as a `ConflictResolver`, so the core never touches the
//! terminal itself.

use std::path::PathBuf;

use colored::Colorize;
use dialoguer::{Confirm, Select};
use serde_yaml::Value;

use vault_content::{Choice, ConflictResolver, Error};

use crate::error::Result;

/// One-line YAML rendering of a value for display in a prompt.
fn display_value(value: &Value) -> String {
    serde_yaml::to_string(value)
        .unwrap_or_else(|_| "<unrenderable>".to_string())
        .trim_end()
        .to_string()
}

/// Conflict resolver that asks the user which value to keep.
pub struct PromptResolver {
    /// File being repaired, shown for context.
    pub file: PathBuf,
}

impl ConflictResolver for PromptResolver {
    fn resolve(
        &mut self,
        key: &str,
        existing: &Value,
        incoming: &Value,
    ) -> vault_content::Result<Choice> {
        println!(
            "{} conflict for key '{}' in {}",
            "!".yellow().bold(),
            key.cyan(),
            self.file.display()
        );
        let items = [
            format!("keep earlier value: {}", display_value(existing)),
            format!("keep later value:   {}", display_value(incoming)),
        ];
        let idx = Select::new()
            .with_prompt("Choose which value to keep")
            .items(&items)
            .default(1)
            .interact()
            .map_err(|e| Error::resolve(key, e.to_string()))?;
        Ok(if idx == 0 {
            Choice::Existing
        } else {
            Choice::Incoming
        })
    }
}

/// Ask the user to confirm a destructive step. Defaults to no.
pub fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}
