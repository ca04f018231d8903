use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod cmd;
mod utils;

use cmd::{GenerateArgs, ListArgs, ServeArgs};

const DEFINITIONS_ENV: &str = "GH_MCP_DEFINITIONS";
const OUTPUT_ENV: &str = "GH_MCP_OUTPUT";

/// gh-mcp-gen - generate MCP tool bindings for the GitHub CLI from YAML
///
///   gh-mcp-gen [generate] [--definitions DIR] [--output DIR] [--json]
///   gh-mcp-gen list [--definitions DIR] [--json]
///   gh-mcp-gen serve [--gh PATH] [--timeout SECS]
///
/// With no subcommand, `generate` runs with default options.
///
/// Global flags / env:
///   -v / -vv            Increase verbosity (RUST_LOG overrides)
///   -q / --quiet        Errors only
///   GH_MCP_DEFINITIONS  Fallback for --definitions (default `definitions`)
///   GH_MCP_OUTPUT       Fallback for --output (default `src/generated`)
#[derive(Parser, Debug)]
#[command(
    name = "gh-mcp-gen",
    version,
    author,
    about = "Generate MCP tool bindings for the GitHub CLI from YAML definitions",
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Silence all non-error logging
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate `<command>_gen.rs` files and `registry_gen.rs`
    Generate(GenerateArgs),

    /// List the tools the definitions would produce
    List(ListArgs),

    /// Serve the generated tools as an MCP server on stdio
    Serve(ServeArgs),
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from)
}

fn main() {
    let cli = Cli::parse();

    let level = utils::derive_level(cli.verbose, cli.quiet);
    utils::init_logging(level);

    if let Err(e) = run(cli.command.unwrap_or_else(|| Commands::Generate(GenerateArgs::default()))) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    // CLI flag > environment > built-in default
    let definitions_env = env_path(DEFINITIONS_ENV);

    match command {
        Commands::Generate(mut args) => {
            if args.source.definitions.is_none() {
                args.source.definitions = definitions_env;
            }
            if args.output.is_none() {
                args.output = env_path(OUTPUT_ENV);
            }
            cmd::execute_generate(args)
        }
        Commands::List(mut args) => {
            if args.source.definitions.is_none() {
                args.source.definitions = definitions_env;
            }
            cmd::execute_list(args)
        }
        Commands::Serve(args) => cmd::execute_serve(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["gh-mcp-gen"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["gh-mcp-gen", "list", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Some(Commands::List(_))));
    }

    #[test]
    fn generate_flags() {
        let cli =
            Cli::try_parse_from(["gh-mcp-gen", "generate", "--output", "gen", "-q"]).unwrap();
        assert!(cli.quiet);
        match cli.command {
            Some(Commands::Generate(a)) => assert_eq!(a.output, Some(PathBuf::from("gen"))),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn serve_subcommand() {
        let cli = Cli::try_parse_from(["gh-mcp-gen", "serve", "--timeout", "60"]).unwrap();
        match cli.command {
            Some(Commands::Serve(a)) => {
                assert_eq!(a.timeout, 60);
                assert!(a.gh.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
