//! Per-command emitter: one `<group>_gen.rs` per command group.
//!
//! For each subcommand the unit holds
//!   - `<Group><Sub>Args`   parameter struct (declaration order)
//!   - `to_args()`          positional tokens first, then flags
//!   - `register_<g>_<s>()` registration delegating to the executor

use serde::Serialize;
use tracing::debug;

use super::naming::{register_fn, rust_ident, to_snake, tool_name, type_name};
use super::templates::{self, COMMAND_TEMPLATE, COMMAND_TEMPLATE_NAME, doc_lines, literal};
use super::types::{RustType, map_type};
use super::{CodegenOptions, SourceUnit, format::format_source};
use crate::definition::{CommandGroup, Parameter, Subcommand};
use crate::error::RenderError;

#[derive(Debug, Serialize)]
struct CommandView {
    runtime_path: String,
    doc: Vec<String>,
    has_subcommands: bool,
    uses_map: bool,
    subcommands: Vec<SubcommandView>,
}

#[derive(Debug, Serialize)]
struct SubcommandView {
    invocation: String,
    type_name: String,
    register_fn: String,
    tool_name: String,
    tool_name_lit: String,
    description_lit: String,
    doc: Vec<String>,
    fields: Vec<FieldView>,
    base_args: String,
    has_steps: bool,
    steps: Vec<String>,
}

#[derive(Debug, Serialize)]
struct FieldView {
    ident: String,
    ty: String,
    serde_attr: Option<String>,
    doc: Vec<String>,
}

/// Output file name for a group.
pub fn command_file_name(group: &CommandGroup) -> String {
    format!("{}_gen.rs", group.command)
}

/// Render the source unit for one command group.
pub fn emit_command(
    group: &CommandGroup,
    options: &CodegenOptions,
) -> Result<SourceUnit, RenderError> {
    let file_name = command_file_name(group);
    let view = command_view(group, options);
    let raw = templates::render(COMMAND_TEMPLATE_NAME, COMMAND_TEMPLATE, &file_name, &view)?;

    Ok(match format_source(&file_name, &raw) {
        Ok(contents) => SourceUnit::formatted(file_name, contents),
        Err(e) => {
            debug!(file = %file_name, error = %e, "keeping unformatted output");
            SourceUnit::unformatted(file_name, raw, e)
        }
    })
}

fn command_view(group: &CommandGroup, options: &CodegenOptions) -> CommandView {
    let mut doc = vec![format!("`gh {}` tools.", group.command)];
    let description = doc_lines(&group.description);
    if !description.is_empty() {
        doc.push(String::new());
        doc.extend(description);
    }

    let uses_map = group
        .subcommands
        .iter()
        .flat_map(|s| &s.parameters)
        .any(|p| map_type(p) == RustType::StringMap);

    CommandView {
        runtime_path: options.runtime_path.clone(),
        doc,
        has_subcommands: !group.subcommands.is_empty(),
        uses_map,
        subcommands: group
            .subcommands
            .iter()
            .map(|sub| subcommand_view(group, sub, options))
            .collect(),
    }
}

fn subcommand_view(
    group: &CommandGroup,
    sub: &Subcommand,
    options: &CodegenOptions,
) -> SubcommandView {
    let invocation = format!("{} {}", group.command, sub.name);
    let tool = tool_name(&options.tool_prefix, &group.command, &sub.name);
    let description = if sub.description.trim().is_empty() {
        format!("Run `gh {invocation}`")
    } else {
        sub.description.trim().to_string()
    };

    let steps: Vec<String> = sub
        .positional()
        .map(positional_step)
        .chain(sub.flags().map(flag_step))
        .collect();

    SubcommandView {
        type_name: type_name(&group.command, &sub.name),
        register_fn: register_fn(&group.command, &sub.name),
        tool_name_lit: literal(&tool),
        tool_name: tool,
        description_lit: literal(&description),
        doc: doc_lines(&description),
        fields: sub.parameters.iter().map(field_view).collect(),
        base_args: format!(
            "{}.to_string(), {}.to_string()",
            literal(&group.command),
            literal(&sub.name)
        ),
        has_steps: !steps.is_empty(),
        steps,
        invocation,
    }
}

fn field_view(param: &Parameter) -> FieldView {
    let ident = rust_ident(&param.name);
    let wire = to_snake(&param.name);

    let mut serde_args = Vec::new();
    if !param.required {
        serde_args.push("default".to_string());
    }
    if ident.trim_start_matches("r#") != wire {
        serde_args.push(format!("rename = {}", literal(&wire)));
    }
    let serde_attr =
        (!serde_args.is_empty()).then(|| format!("#[serde({})]", serde_args.join(", ")));

    let mut doc = doc_lines(&param.description);
    if let Some(allowed) = param.allowed.as_ref().filter(|a| !a.is_empty()) {
        doc.push(format!("Allowed values: {}", allowed.join(", ")));
    }

    FieldView {
        ident,
        ty: map_type(param).to_string(),
        serde_attr,
        doc,
    }
}

/// Bare tokens for a positional parameter. Optional ones are skipped when zero.
fn positional_step(param: &Parameter) -> String {
    let field = format!("self.{}", rust_ident(&param.name));
    let ty = map_type(param);
    let push = match ty {
        RustType::String => format!("args.push({field}.clone());"),
        RustType::Integer | RustType::Boolean => format!("args.push({field}.to_string());"),
        RustType::StringList => return format!("args.extend({field}.iter().cloned());"),
        RustType::IntegerList => {
            return format!("args.extend({field}.iter().map(|v| v.to_string()));");
        }
        RustType::StringMap => {
            return format!("args.extend({field}.iter().map(|(k, v)| format!(\"{{k}}={{v}}\")));");
        }
    };
    if param.required {
        push
    } else {
        format!("if {} {{ {push} }}", ty.present_check(&field))
    }
}

/// Flag token (and value token) for a flag-style parameter, when non-zero.
fn flag_step(param: &Parameter) -> String {
    let field = format!("self.{}", rust_ident(&param.name));
    let flag = format!("args.push({}.to_string());", literal(&param.flag_spelling()));
    match map_type(param) {
        RustType::Boolean => format!("if {field} {{ {flag} }}"),
        RustType::String => {
            format!("if !{field}.is_empty() {{ {flag} args.push({field}.clone()); }}")
        }
        RustType::Integer => {
            format!("if {field} != 0 {{ {flag} args.push({field}.to_string()); }}")
        }
        RustType::StringList => {
            format!("for value in &{field} {{ {flag} args.push(value.clone()); }}")
        }
        RustType::IntegerList => {
            format!("for value in &{field} {{ {flag} args.push(value.to_string()); }}")
        }
        RustType::StringMap => format!(
            "for (key, value) in &{field} {{ {flag} args.push(format!(\"{{key}}={{value}}\")); }}"
        ),
    }
}
