/*!
`list.rs`

Implements the `list` subcommand: show the tools a definitions directory
would produce, without writing anything.

Columns: # | TOOL | ARGS TYPE | PARAMS | DESCRIPTION
PARAMS summarizes parameters as `<name>` for positionals and the flag
spelling otherwise, `*` marking required ones.

JSON Output Shape:
{
  "status": "ok",
  "definitions": "<dir>",
  "count": 2,
  "tools": [
    {
      "name": "gh_pr_list",
      "command": "pr",
      "subcommand": "list",
      "args_type": "PrListArgs",
      "description": "...",
      "parameters": [
        {"name": "state", "type": "String", "required": false, "positional": false, "flag": "--state"}
      ]
    }
  ]
}
*/

use anyhow::Result;
use clap::Args;

use gh_mcp_gen::codegen::naming::{tool_name, type_name};
use gh_mcp_gen::codegen::types::map_type;
use gh_mcp_gen::{CommandGroup, Parameter};

use crate::cmd::format::{Role, StyleOptions, box_header, color, emoji, table, truncate_ellipsis};
use crate::cmd::shared::{SourceArgs, display_path, load_groups};

/// CLI arguments for `gh-mcp-gen list`
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

/// One generated tool, as shown by `list`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ToolEntry {
    name: String,
    command: String,
    subcommand: String,
    args_type: String,
    description: String,
    parameters: Vec<Parameter>,
}

/// Entry point for the list subcommand.
pub fn execute_list(args: ListArgs) -> Result<()> {
    let definitions = display_path(&args.source.definitions_dir());
    let groups = load_groups(&definitions)?;
    let entries = tool_entries(&groups, &args.source.tool_prefix());

    if args.json {
        println!(
            "{}",
            serde_json::json!({
                "status": "ok",
                "definitions": definitions.display().to_string(),
                "count": entries.len(),
                "tools": entries.iter().map(entry_json).collect::<Vec<_>>(),
            })
        );
        return Ok(());
    }

    let style = StyleOptions::detect();
    println!(
        "{}",
        box_header(
            format!("{} Tools ({})", emoji("list", &style), entries.len()).trim_start(),
            Some(format!("definitions={}", definitions.display())),
            &style,
        )
    );

    if entries.is_empty() {
        println!(
            "{}",
            color(
                Role::Dim,
                format!("{} (none)", emoji("info", &style)).trim_start(),
                &style
            )
        );
        return Ok(());
    }

    let rows: Vec<Vec<String>> = entries
        .iter()
        .enumerate()
        .map(|(idx, e)| {
            vec![
                (idx + 1).to_string(),
                e.name.clone(),
                e.args_type.clone(),
                param_summary(&e.parameters),
                truncate_ellipsis(&e.description.replace('\n', " "), 90),
            ]
        })
        .collect();
    println!(
        "{}",
        table(
            &["#", "TOOL", "ARGS TYPE", "PARAMS", "DESCRIPTION"],
            &rows,
            &style
        )
    );
    Ok(())
}

fn tool_entries(groups: &[CommandGroup], prefix: &str) -> Vec<ToolEntry> {
    groups
        .iter()
        .flat_map(|group| {
            group.subcommands.iter().map(|sub| ToolEntry {
                name: tool_name(prefix, &group.command, &sub.name),
                command: group.command.clone(),
                subcommand: sub.name.clone(),
                args_type: type_name(&group.command, &sub.name),
                description: sub.description.clone(),
                parameters: sub.parameters.clone(),
            })
        })
        .collect()
}

fn param_summary(params: &[Parameter]) -> String {
    if params.is_empty() {
        return "-".to_string();
    }
    params
        .iter()
        .map(|p| {
            let shown = if p.positional {
                format!("<{}>", p.name)
            } else {
                p.flag_spelling()
            };
            if p.required { format!("{shown}*") } else { shown }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn entry_json(entry: &ToolEntry) -> serde_json::Value {
    let parameters: Vec<_> = entry
        .parameters
        .iter()
        .map(|p| {
            serde_json::json!({
                "name": p.name,
                "type": map_type(p).as_str(),
                "required": p.required,
                "positional": p.positional,
                "flag": (!p.positional).then(|| p.flag_spelling()),
            })
        })
        .collect();
    serde_json::json!({
        "name": entry.name,
        "command": entry.command,
        "subcommand": entry.subcommand,
        "args_type": entry.args_type,
        "description": entry.description,
        "parameters": parameters,
    })
}
