/*!
Command dispatcher module: declarations and re-exports only.

  src/cmd/
    mod.rs       (this file)
    generate.rs  (GenerateArgs + execute_generate)
    list.rs      (ListArgs + execute_list)
    serve.rs     (ServeArgs + execute_serve, MCP over stdio)
    shared.rs    (definition source options, loading, summary lines)
    format.rs    (box / table / color helpers for human output)

Each subcommand module exposes one public `execute_*` function returning
`anyhow::Result<()>`.
*/

pub mod format;
pub mod generate;
pub mod list;
pub mod serve;
pub mod shared;

pub use generate::{GenerateArgs, execute_generate};
pub use list::{ListArgs, execute_list};
pub use serve::{ServeArgs, execute_serve};
