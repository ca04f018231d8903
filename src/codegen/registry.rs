//! Registry emitter: `registry_gen.rs`, the module root of the generated set.

use serde::Serialize;
use tracing::debug;

use super::command::command_file_name;
use super::naming::{module_name, register_fn};
use super::templates::{self, REGISTRY_TEMPLATE, REGISTRY_TEMPLATE_NAME, literal};
use super::{CodegenOptions, SourceUnit, format::format_source};
use crate::definition::CommandGroup;
use crate::error::RenderError;

pub const REGISTRY_FILE_NAME: &str = "registry_gen.rs";

#[derive(Debug, Serialize)]
struct RegistryView {
    runtime_path: String,
    groups: Vec<GroupModule>,
    calls: Vec<String>,
    tool_count: usize,
    registrar_param: &'static str,
    executor_param: &'static str,
}

#[derive(Debug, Serialize)]
struct GroupModule {
    module: String,
    file_lit: String,
}

/// Render the registry over all groups, in the order given.
pub fn emit_registry(
    groups: &[CommandGroup],
    options: &CodegenOptions,
) -> Result<SourceUnit, RenderError> {
    let view = registry_view(groups, options);
    let raw = templates::render(
        REGISTRY_TEMPLATE_NAME,
        REGISTRY_TEMPLATE,
        REGISTRY_FILE_NAME,
        &view,
    )?;

    Ok(match format_source(REGISTRY_FILE_NAME, &raw) {
        Ok(contents) => SourceUnit::formatted(REGISTRY_FILE_NAME, contents),
        Err(e) => {
            debug!(file = REGISTRY_FILE_NAME, error = %e, "keeping unformatted output");
            SourceUnit::unformatted(REGISTRY_FILE_NAME, raw, e)
        }
    })
}

fn registry_view(groups: &[CommandGroup], options: &CodegenOptions) -> RegistryView {
    let calls: Vec<String> = groups
        .iter()
        .flat_map(|group| {
            let module = module_name(&group.command);
            group.subcommands.iter().map(move |sub| {
                format!(
                    "{module}::{}(registrar, Arc::clone(&executor));",
                    register_fn(&group.command, &sub.name)
                )
            })
        })
        .collect();

    // Unused parameters would warn in the generated crate.
    let (registrar_param, executor_param) = if calls.is_empty() {
        ("_registrar", "_executor")
    } else {
        ("registrar", "executor")
    };

    RegistryView {
        runtime_path: options.runtime_path.clone(),
        groups: groups
            .iter()
            .map(|g| GroupModule {
                module: module_name(&g.command),
                file_lit: literal(&command_file_name(g)),
            })
            .collect(),
        tool_count: calls.len(),
        calls,
        registrar_param,
        executor_param,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::Subcommand;

    fn group(command: &str, subs: &[&str]) -> CommandGroup {
        CommandGroup {
            command: command.into(),
            description: String::new(),
            subcommands: subs
                .iter()
                .map(|s| Subcommand {
                    name: (*s).into(),
                    ..Default::default()
                })
                .collect(),
        }
    }

    fn emit(groups: &[CommandGroup]) -> String {
        let unit = emit_registry(groups, &CodegenOptions::default()).unwrap();
        assert!(unit.format_error.is_none(), "{:?}", unit.format_error);
        assert_eq!(unit.file_name, REGISTRY_FILE_NAME);
        unit.contents
    }

    #[test]
    fn every_subcommand_is_registered_once_in_order() {
        let groups = [
            group("pr", &["list", "create", "view"]),
            group("gpg-key", &["add"]),
            group("issue", &["close", "list"]),
        ];
        let out = emit(&groups);

        let expected = [
            "pr_gen::register_pr_list(",
            "pr_gen::register_pr_create(",
            "pr_gen::register_pr_view(",
            "gpg_key_gen::register_gpg_key_add(",
            "issue_gen::register_issue_close(",
            "issue_gen::register_issue_list(",
        ];
        let mut last = 0;
        for call in expected {
            assert_eq!(out.matches(call).count(), 1, "{call} should appear once");
            let at = out.find(call).unwrap();
            assert!(at > last, "{call} out of order");
            last = at;
        }
        assert_eq!(out.matches("Arc::clone(&executor)").count(), 6);
    }

    #[test]
    fn declares_group_modules() {
        let out = emit(&[group("gpg-key", &["list"]), group("pr", &[])]);
        assert!(out.contains(r#"#[path = "gpg-key_gen.rs"]"#));
        assert!(out.contains("pub mod gpg_key_gen;"));
        assert!(out.contains(r#"#[path = "pr_gen.rs"]"#));
        assert!(out.contains("pub mod pr_gen;"));
    }

    #[test]
    fn empty_input_renders_empty_entry_point() {
        let out = emit(&[]);
        assert!(out.contains("pub fn register_all_tools("));
        assert!(out.contains("_executor: Arc<dyn Executor>"));
        assert!(!out.contains("::register_"));
        assert!(!out.contains("pub mod"));
    }

    #[test]
    fn idempotent() {
        let groups = [group("repo", &["clone", "fork"])];
        assert_eq!(emit(&groups), emit(&groups));
    }
}
