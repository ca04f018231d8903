/*!
`shared.rs`

Helpers used by more than one subcommand: option defaults and the
"load definitions and say what was found" step.
*/

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use gh_mcp_gen::CommandGroup;
use gh_mcp_gen::codegen::DEFAULT_TOOL_PREFIX;
use gh_mcp_gen::definition::load_definitions;

pub const DEFAULT_DEFINITIONS_DIR: &str = "definitions";
pub const DEFAULT_OUTPUT_DIR: &str = "src/generated";

/// Where definitions come from. Shared by `generate` and `list`.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Directory containing YAML command definitions
    /// (falls back to GH_MCP_DEFINITIONS, then `definitions`)
    #[arg(short = 'd', long, value_name = "DIR")]
    pub definitions: Option<PathBuf>,

    /// Prefix of generated tool names
    #[arg(long, value_name = "PREFIX")]
    pub tool_prefix: Option<String>,
}

impl SourceArgs {
    pub fn definitions_dir(&self) -> PathBuf {
        self.definitions
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DEFINITIONS_DIR))
    }

    pub fn tool_prefix(&self) -> String {
        self.tool_prefix
            .clone()
            .unwrap_or_else(|| DEFAULT_TOOL_PREFIX.to_string())
    }
}

/// Absolute form of `path` for display; the input when that fails.
pub fn display_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Load every definition under `dir`.
pub fn load_groups(dir: &Path) -> Result<Vec<CommandGroup>> {
    load_definitions(dir)
        .with_context(|| format!("failed to load definitions from {}", dir.display()))
}

/// Lines describing what was parsed, one per group after the count.
pub fn summary_lines(groups: &[CommandGroup]) -> Vec<String> {
    let mut lines = Vec::with_capacity(groups.len() + 1);
    lines.push(format!("Parsed {} command definition(s)", groups.len()));
    for group in groups {
        lines.push(format!(
            "  - {} ({} subcommands)",
            group.command,
            group.subcommands.len()
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use gh_mcp_gen::Subcommand;

    #[test]
    fn defaults_apply_when_unset() {
        let args = SourceArgs::default();
        assert_eq!(args.definitions_dir(), PathBuf::from("definitions"));
        assert_eq!(args.tool_prefix(), "gh");
    }

    #[test]
    fn summary_counts_subcommands() {
        let groups = vec![
            CommandGroup {
                command: "pr".into(),
                description: String::new(),
                subcommands: vec![Subcommand::default(), Subcommand::default()],
            },
            CommandGroup {
                command: "issue".into(),
                description: String::new(),
                subcommands: vec![],
            },
        ];
        assert_eq!(
            summary_lines(&groups),
            [
                "Parsed 2 command definition(s)",
                "  - pr (2 subcommands)",
                "  - issue (0 subcommands)",
            ]
        );
    }

    #[test]
    fn missing_directory_loads_nothing() {
        let tmp = tempfile::TempDir::new().unwrap();
        let groups = load_groups(&tmp.path().join("absent")).unwrap();
        assert!(groups.is_empty());
    }
}
