//! Definition loading: `<dir>/*.yaml` -> Vec<CommandGroup>.
//!
//! Missing directory or no matching files is not an error. The first
//! unreadable or undecodable file aborts the whole load.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::codegen::naming;
use crate::definition::CommandGroup;
use crate::error::LoadError;

/// Extension of definition files.
pub const DEFINITION_EXTENSION: &str = "yaml";

/// Read every definition file in `dir`, in lexical path order.
pub fn load_definitions(dir: impl AsRef<Path>) -> Result<Vec<CommandGroup>, LoadError> {
    let files = definition_files(dir.as_ref())?;

    let mut groups = Vec::with_capacity(files.len());
    for file in &files {
        groups.push(load_definition_file(file)?);
    }

    check_unique_tools(&groups)?;
    Ok(groups)
}

/// Decode a single definition file.
pub fn load_definition_file(path: &Path) -> Result<CommandGroup, LoadError> {
    let data = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let group: CommandGroup =
        serde_yaml::from_str(&data).map_err(|source| LoadError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    if !is_valid_command(&group.command) {
        return Err(LoadError::InvalidCommand {
            path: path.to_path_buf(),
            command: group.command,
        });
    }

    debug!(
        file = %path.display(),
        command = %group.command,
        subcommands = group.subcommands.len(),
        "decoded definition"
    );
    Ok(group)
}

fn definition_files(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let pattern = format!(
        "{}/*.{DEFINITION_EXTENSION}",
        glob::Pattern::escape(&dir.to_string_lossy())
    );
    let entries = glob::glob(&pattern).map_err(|source| LoadError::Pattern {
        pattern: pattern.clone(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// The group name becomes a file stem and a module name.
fn is_valid_command(command: &str) -> bool {
    !command.is_empty()
        && command
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Generated items that would clash in the output: group modules across the
/// run, registration functions across the run, argument types within a group.
fn check_unique_tools(groups: &[CommandGroup]) -> Result<(), LoadError> {
    let mut modules: HashMap<String, String> = HashMap::new();
    let mut functions: HashMap<String, String> = HashMap::new();
    for group in groups {
        claim(
            &mut modules,
            naming::module_name(&group.command),
            group.command.clone(),
        )?;

        let mut types: HashMap<String, String> = HashMap::new();
        for sub in &group.subcommands {
            let origin = format!("{} {}", group.command, sub.name);
            claim(
                &mut functions,
                naming::register_fn(&group.command, &sub.name),
                origin.clone(),
            )?;
            claim(
                &mut types,
                naming::type_name(&group.command, &sub.name),
                origin,
            )?;
        }
    }
    Ok(())
}

fn claim(
    seen: &mut HashMap<String, String>,
    ident: String,
    origin: String,
) -> Result<(), LoadError> {
    match seen.get(&ident) {
        Some(first) => Err(LoadError::DuplicateTool {
            tool: ident,
            first: first.clone(),
            second: origin,
        }),
        None => {
            seen.insert(ident, origin);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, body: &str) {
        fs::write(dir.path().join(name), body).unwrap();
    }

    #[test]
    fn missing_directory_yields_empty() {
        let tmp = TempDir::new().unwrap();
        let groups = load_definitions(tmp.path().join("nope")).unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn empty_directory_yields_empty() {
        let tmp = TempDir::new().unwrap();
        write(&tmp, "README.md", "not a definition");
        assert!(load_definitions(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn one_group_per_file_in_name_order() {
        let tmp = TempDir::new().unwrap();
        write(&tmp, "repo.yaml", "command: repo\nsubcommands: []\n");
        write(&tmp, "issue.yaml", "command: issue\nsubcommands: []\n");
        write(&tmp, "auth.yaml", "command: auth\n");

        let groups = load_definitions(tmp.path()).unwrap();
        let names: Vec<_> = groups.iter().map(|g| g.command.as_str()).collect();
        assert_eq!(names, ["auth", "issue", "repo"]);
    }

    #[test]
    fn parameter_order_is_preserved() {
        let tmp = TempDir::new().unwrap();
        write(
            &tmp,
            "variable.yaml",
            r#"
command: variable
subcommands:
  - name: set
    parameters:
      - { name: name, type: string, positional: true, required: true }
      - { name: env, type: string, flag: --env }
      - { name: value, type: string, positional: true }
      - { name: org, type: string, flag: --org }
"#,
        );
        let groups = load_definitions(tmp.path()).unwrap();
        let params: Vec<_> = groups[0].subcommands[0]
            .parameters
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(params, ["name", "env", "value", "org"]);
    }

    #[test]
    fn one_bad_file_fails_the_whole_load() {
        let tmp = TempDir::new().unwrap();
        write(&tmp, "a.yaml", "command: a\n");
        write(&tmp, "b.yaml", "command: [unterminated\n");
        write(&tmp, "c.yaml", "command: c\n");

        let err = load_definitions(tmp.path()).unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }));
        assert!(err.to_string().contains("b.yaml"));
    }

    #[test]
    fn mismatched_shape_is_a_decode_error() {
        let tmp = TempDir::new().unwrap();
        write(&tmp, "x.yaml", "command: x\nsubcommands: nope\n");
        let err = load_definitions(tmp.path()).unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }));
    }

    #[test]
    fn duplicate_subcommands_are_rejected() {
        let tmp = TempDir::new().unwrap();
        write(
            &tmp,
            "pr.yaml",
            "command: pr\nsubcommands:\n  - name: list\n  - name: list\n",
        );
        let err = load_definitions(tmp.path()).unwrap_err();
        match err {
            LoadError::DuplicateTool { tool, .. } => assert_eq!(tool, "register_pr_list"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn colliding_identifiers_across_groups_are_rejected() {
        let tmp = TempDir::new().unwrap();
        write(&tmp, "a.yaml", "command: gpg-key\nsubcommands:\n  - name: list\n");
        write(&tmp, "b.yaml", "command: gpg\nsubcommands:\n  - name: key-list\n");
        assert!(matches!(
            load_definitions(tmp.path()),
            Err(LoadError::DuplicateTool { .. })
        ));
    }

    #[test]
    fn colliding_group_modules_are_rejected() {
        let tmp = TempDir::new().unwrap();
        write(&tmp, "a.yaml", "command: gpg-key\nsubcommands:\n  - name: list\n");
        write(&tmp, "b.yaml", "command: gpg_key\nsubcommands:\n  - name: view\n");
        match load_definitions(tmp.path()).unwrap_err() {
            LoadError::DuplicateTool { tool, first, second } => {
                assert_eq!(tool, "gpg_key_gen");
                assert_eq!(first, "gpg-key");
                assert_eq!(second, "gpg_key");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn group_names_differing_only_in_case_are_rejected() {
        let tmp = TempDir::new().unwrap();
        write(&tmp, "a.yaml", "command: Pr\nsubcommands:\n  - name: list\n");
        write(&tmp, "b.yaml", "command: pr\nsubcommands:\n  - name: view\n");
        assert!(matches!(
            load_definitions(tmp.path()),
            Err(LoadError::DuplicateTool { tool, .. }) if tool == "pr_gen"
        ));
    }

    #[test]
    fn colliding_argument_types_are_rejected() {
        let tmp = TempDir::new().unwrap();
        write(
            &tmp,
            "pr.yaml",
            "command: pr\nsubcommands:\n  - name: foo-bar\n  - name: FooBar\n",
        );
        match load_definitions(tmp.path()).unwrap_err() {
            LoadError::DuplicateTool { tool, first, second } => {
                assert_eq!(tool, "PrFooBarArgs");
                assert_eq!(first, "pr foo-bar");
                assert_eq!(second, "pr FooBar");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unsafe_command_names_are_rejected() {
        for command in ["\"../escape\"", "\"\"", "\"a/b\"", "\"pr list\""] {
            let tmp = TempDir::new().unwrap();
            write(&tmp, "x.yaml", &format!("command: {command}\n"));
            match load_definitions(tmp.path()).unwrap_err() {
                LoadError::InvalidCommand { path, .. } => assert!(path.ends_with("x.yaml")),
                other => panic!("unexpected error for {command}: {other}"),
            }
        }
    }

    #[test]
    fn missing_command_is_rejected() {
        let tmp = TempDir::new().unwrap();
        write(&tmp, "x.yaml", "description: no name\n");
        let err = load_definitions(tmp.path()).unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }));
    }
}
