//! Runtime contract the generated code is compiled against.
//!
//! Generated files import `Executor`, `ToolRegistrar`, `input_schema` and
//! `typed_handler` from here (or from the path given by `--runtime-path`).
//! `ToolServer` serves a populated registry over MCP.

pub mod executor;
pub mod registry;
pub mod server;

pub use executor::{CommandExecutor, DEFAULT_TIMEOUT, ExecOutput, ExecutionError, Executor};
pub use registry::{
    JsonObject, RegisteredTool, ToolError, ToolHandler, ToolRegistrar, ToolRegistry,
    input_schema, into_call_result, typed_handler,
};
pub use server::ToolServer;
