/*!
`generate.rs`

Implements the `generate` subcommand (also the default when no subcommand
is given): load definitions, emit one `<command>_gen.rs` per group plus
`registry_gen.rs`.

Human output:
  Reading definitions from: /abs/definitions
  Writing generated code to: /abs/src/generated
  Parsed 2 command definition(s)
    - pr (3 subcommands)
    - issue (2 subcommands)
  Generated /abs/src/generated/pr_gen.rs
  ...

JSON output (--json):
{
  "status": "ok",
  "definitions": "...",
  "output": "...",
  "groups": [{"command": "pr", "subcommands": 3}],
  "tool_count": 5,
  "files": [{"path": "...", "formatted": true}],
  "warnings": ["failed to format ..."]
}
*/

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, info};

use gh_mcp_gen::codegen::{CodegenOptions, DEFAULT_RUNTIME_PATH, GenerationReport, generate_code};
use gh_mcp_gen::CommandGroup;

use crate::cmd::format::{Role, StyleOptions, color, emoji};
use crate::cmd::shared::{
    DEFAULT_OUTPUT_DIR, SourceArgs, display_path, load_groups, summary_lines,
};

/// CLI arguments for `gh-mcp-gen generate`
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output directory for generated code
    /// (falls back to GH_MCP_OUTPUT, then `src/generated`)
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Module path the generated code imports its runtime from
    #[arg(long, value_name = "PATH")]
    pub runtime_path: Option<String>,

    /// Output a JSON summary instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

impl GenerateArgs {
    pub fn output_dir(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }

    pub fn codegen_options(&self) -> CodegenOptions {
        CodegenOptions {
            runtime_path: self
                .runtime_path
                .clone()
                .unwrap_or_else(|| DEFAULT_RUNTIME_PATH.to_string()),
            tool_prefix: self.source.tool_prefix(),
        }
    }
}

/// Entry point for the generate subcommand.
pub fn execute_generate(args: GenerateArgs) -> Result<()> {
    let definitions = display_path(&args.source.definitions_dir());
    let output = display_path(&args.output_dir());
    let options = args.codegen_options();
    debug!(?options, "codegen options");

    if !args.json {
        println!("Reading definitions from: {}", definitions.display());
        println!("Writing generated code to: {}", output.display());
    }

    let groups = load_groups(&definitions)?;
    if !args.json {
        for line in summary_lines(&groups) {
            println!("{line}");
        }
    }

    let report = generate_code(&groups, &output, &options)
        .with_context(|| format!("code generation into {} failed", output.display()))?;
    info!(
        files = report.files.len(),
        tools = report.tool_count,
        "generation complete"
    );

    if args.json {
        println!(
            "{}",
            json_summary(&definitions, &output, &groups, &report)
        );
    } else {
        print_human(&report);
    }
    Ok(())
}

fn json_summary(
    definitions: &std::path::Path,
    output: &std::path::Path,
    groups: &[CommandGroup],
    report: &GenerationReport,
) -> serde_json::Value {
    let group_items: Vec<_> = groups
        .iter()
        .map(|g| {
            serde_json::json!({
                "command": g.command,
                "subcommands": g.subcommands.len(),
            })
        })
        .collect();
    let files: Vec<_> = report
        .files
        .iter()
        .map(|f| {
            serde_json::json!({
                "path": f.path.display().to_string(),
                "formatted": f.formatted,
            })
        })
        .collect();
    let warnings: Vec<_> = report.warnings.iter().map(|w| w.to_string()).collect();

    serde_json::json!({
        "status": "ok",
        "definitions": definitions.display().to_string(),
        "output": output.display().to_string(),
        "groups": group_items,
        "tool_count": report.tool_count,
        "files": files,
        "warnings": warnings,
    })
}

fn print_human(report: &GenerationReport) {
    let style = StyleOptions::detect();
    for file in &report.files {
        let line = format!("Generated {}", file.path.display());
        if file.formatted {
            println!("{line}");
        } else {
            println!(
                "{line} {}",
                color(Role::Warning, "(unformatted)", &style)
            );
        }
    }

    let done = format!(
        "{} Code generation complete: {} file(s), {} tool(s)",
        emoji("success", &style),
        report.files.len(),
        report.tool_count
    );
    println!("{}", color(Role::Success, done.trim_start(), &style));
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use gh_mcp_gen::codegen::WrittenFile;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(subcommand)]
        cmd: TestSub,
    }

    #[derive(clap::Subcommand, Debug)]
    enum TestSub {
        Generate(GenerateArgs),
    }

    fn parse(args: &[&str]) -> GenerateArgs {
        match TestCli::try_parse_from(args).unwrap().cmd {
            TestSub::Generate(a) => a,
        }
    }

    #[test]
    fn clap_parses_generate_options() {
        let a = parse(&[
            "t",
            "generate",
            "--definitions",
            "defs",
            "-o",
            "out",
            "--tool-prefix",
            "github",
            "--runtime-path",
            "crate::rt",
            "--json",
        ]);
        assert_eq!(a.source.definitions_dir(), PathBuf::from("defs"));
        assert_eq!(a.output_dir(), PathBuf::from("out"));
        assert!(a.json);
        let options = a.codegen_options();
        assert_eq!(options.tool_prefix, "github");
        assert_eq!(options.runtime_path, "crate::rt");
    }

    #[test]
    fn defaults() {
        let a = parse(&["t", "generate"]);
        assert_eq!(a.source.definitions_dir(), PathBuf::from("definitions"));
        assert_eq!(a.output_dir(), PathBuf::from("src/generated"));
        assert_eq!(a.codegen_options(), CodegenOptions::default());
    }

    #[test]
    fn json_summary_shape() {
        let groups = vec![CommandGroup {
            command: "pr".into(),
            ..Default::default()
        }];
        let report = GenerationReport {
            files: vec![WrittenFile {
                path: PathBuf::from("/out/pr_gen.rs"),
                formatted: true,
            }],
            warnings: vec![],
            tool_count: 0,
        };
        let v = json_summary(
            std::path::Path::new("/defs"),
            std::path::Path::new("/out"),
            &groups,
            &report,
        );
        assert_eq!(v["status"], "ok");
        assert_eq!(v["groups"][0]["command"], "pr");
        assert_eq!(v["files"][0]["path"], "/out/pr_gen.rs");
        assert_eq!(v["files"][0]["formatted"], true);
        assert_eq!(v["warnings"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn writes_into_output_dir() {
        let tmp = tempfile::TempDir::new().unwrap();
        let defs = tmp.path().join("defs");
        std::fs::create_dir(&defs).unwrap();
        std::fs::write(
            defs.join("repo.yaml"),
            "command: repo\nsubcommands:\n  - name: view\n    description: View\n",
        )
        .unwrap();

        let out = tmp.path().join("out");
        execute_generate(GenerateArgs {
            source: SourceArgs {
                definitions: Some(defs),
                tool_prefix: None,
            },
            output: Some(out.clone()),
            runtime_path: None,
            json: true,
        })
        .unwrap();

        assert!(out.join("repo_gen.rs").is_file());
        assert!(out.join("registry_gen.rs").is_file());
    }
}
