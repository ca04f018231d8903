//! gh-mcp-gen: typed MCP tools for the GitHub CLI, generated from YAML definitions.
//!
//!   definition  YAML model + loader
//!   codegen     naming, type mapping, command/registry emitters
//!   runtime     executor + registrar contract used by generated code
//!   generated   bindings for the groups under `definitions/`

// Generated code imports `gh_mcp_gen::runtime`, in this crate too.
extern crate self as gh_mcp_gen;

pub mod codegen;
pub mod definition;
pub mod error;
pub mod runtime;

/// Bindings generated from `definitions/`. Regenerate with `gh-mcp-gen`.
#[path = "generated/registry_gen.rs"]
pub mod generated;

pub use codegen::{CodegenOptions, GenerationReport, generate_code};
pub use definition::{CommandGroup, Parameter, Subcommand, load_definitions};
pub use error::{FormatError, GenerateError, LoadError, RenderError, WriteError};
