//! Command registry
//!
//! Metadata for the actions a host editor can bind.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A key combination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotkey {
    /// Modifiers (e.g., ["Ctrl", "Shift"])
    #[serde(default)]
    pub modifiers: Vec<String>,
    pub key: String,
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in &self.modifiers {
            write!(f, "{modifier}+")?;
        }
        write!(f, "{}", self.key)
    }
}

/// An invocable editor action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    pub id: String,
    pub name: String,
    pub hotkey: Option<Hotkey>,
}

pub const FIX_DECLENSION_ID: &str = "fix-declination-with-ai";

/// The "fix declension" action, bound to Ctrl+D by default
pub fn fix_declension() -> CommandSpec {
    CommandSpec {
        id: FIX_DECLENSION_ID.to_string(),
        name: "Fix declension with AI".to_string(),
        hotkey: Some(Hotkey {
            modifiers: vec!["Ctrl".to_string()],
            key: "D".to_string(),
        }),
    }
}

/// All registered commands
pub fn registry() -> Vec<CommandSpec> {
    vec![fix_declension()]
}
