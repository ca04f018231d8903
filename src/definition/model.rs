//! In-memory shape of one definition file.

use serde::{Deserialize, Serialize};

/// A top-level `gh` command group (e.g. `pr`, `issue`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandGroup {
    /// Group name; also the output file stem.
    pub command: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub subcommands: Vec<Subcommand>,
}

/// One invocable `gh <group> <name>` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcommand {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

/// A positional argument or a flag of a subcommand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    /// Declared type: string, integer, boolean, array or map. Anything else maps to string.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Element type for arrays.
    #[serde(default)]
    pub item_type: Option<String>,
    /// Long flag spelling, e.g. `--limit`.
    #[serde(default)]
    pub flag: Option<String>,
    /// Short flag spelling, e.g. `-L`.
    #[serde(default)]
    pub short: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub positional: bool,
    /// Allowed literal values. Advisory only.
    #[serde(rename = "enum", default)]
    pub allowed: Option<Vec<String>>,
}

impl CommandGroup {
    /// Number of tools this group produces.
    pub fn tool_count(&self) -> usize {
        self.subcommands.len()
    }
}

impl Subcommand {
    pub fn positional(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().filter(|p| p.positional)
    }

    pub fn flags(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().filter(|p| !p.positional)
    }

    pub fn has_positional(&self) -> bool {
        self.parameters.iter().any(|p| p.positional)
    }
}

impl Parameter {
    /// Spelling used on the command line for flag-style parameters.
    ///
    /// Falls back to the short flag, then to `--<name>`.
    pub fn flag_spelling(&self) -> String {
        self.flag
            .as_deref()
            .filter(|f| !f.is_empty())
            .or_else(|| self.short.as_deref().filter(|s| !s.is_empty()))
            .map(str::to_string)
            .unwrap_or_else(|| format!("--{}", self.name))
    }
}
