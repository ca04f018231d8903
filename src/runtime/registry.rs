//! Registration target for generated tools.
//!
//! Generated `register_*` functions call `ToolRegistrar::register` with the
//! tool name, description, JSON input schema and a handler built by
//! `typed_handler`. `ToolRegistry` is the in-memory implementation; it hands
//! out `rmcp` model values for a transport to serve.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::BoxFuture;
use rmcp::model::{CallToolResult, Content, Tool};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use super::executor::{ExecOutput, ExecutionError, Executor};

pub type JsonObject = serde_json::Map<String, Value>;
pub type ToolFuture = BoxFuture<'static, Result<ExecOutput, ToolError>>;
pub type ToolHandler = Arc<dyn Fn(Value) -> ToolFuture + Send + Sync>;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("unknown tool '{0}'")]
    UnknownTool(String),

    #[error("invalid arguments: {0}")]
    InvalidArguments(#[source] serde_json::Error),

    #[error(transparent)]
    Execution(#[from] ExecutionError),
}

/// Anything generated tools can be registered into.
pub trait ToolRegistrar {
    fn register(
        &mut self,
        name: &str,
        description: &str,
        input_schema: JsonObject,
        handler: ToolHandler,
    );
}

/// JSON schema of a generated argument struct.
pub fn input_schema<A: JsonSchema>() -> JsonObject {
    match serde_json::to_value(schemars::schema_for!(A)) {
        Ok(Value::Object(map)) => map,
        _ => JsonObject::new(),
    }
}

/// Handler decoding `A` from the call arguments, building the argument vector
/// with `build` and running it on `executor`. The executor's result is
/// returned unchanged.
pub fn typed_handler<A, F>(executor: Arc<dyn Executor>, build: F) -> ToolHandler
where
    A: DeserializeOwned,
    F: Fn(&A) -> Vec<String> + Send + Sync + 'static,
{
    Arc::new(move |arguments: Value| -> ToolFuture {
        let executor = Arc::clone(&executor);
        let argv = parse_arguments::<A>(arguments).map(|args| build(&args));
        Box::pin(async move { Ok(executor.execute(argv?).await?) })
    })
}

// Clients may omit arguments entirely for tools without required fields.
fn parse_arguments<A: DeserializeOwned>(arguments: Value) -> Result<A, ToolError> {
    let arguments = match arguments {
        Value::Null => Value::Object(JsonObject::new()),
        other => other,
    };
    serde_json::from_value(arguments).map_err(ToolError::InvalidArguments)
}

/// A registered tool.
pub struct RegisteredTool {
    pub name: String,
    pub description: String,
    pub input_schema: Arc<JsonObject>,
    handler: ToolHandler,
}

impl std::fmt::Debug for RegisteredTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredTool")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// In-memory registrar, keeping registration order.
#[derive(Default, Debug)]
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
    index: HashMap<String, usize>,
}

impl ToolRegistrar for ToolRegistry {
    fn register(
        &mut self,
        name: &str,
        description: &str,
        input_schema: JsonObject,
        handler: ToolHandler,
    ) {
        let tool = RegisteredTool {
            name: name.to_string(),
            description: description.to_string(),
            input_schema: Arc::new(input_schema),
            handler,
        };
        match self.index.get(name) {
            Some(&at) => {
                warn!(tool = name, "tool registered twice; replacing");
                self.tools[at] = tool;
            }
            None => {
                debug!(tool = name, "registered tool");
                self.index.insert(name.to_string(), self.tools.len());
                self.tools.push(tool);
            }
        }
    }
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Tool names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&RegisteredTool> {
        self.index.get(name).map(|&at| &self.tools[at])
    }

    /// Tools as MCP `tools/list` entries.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tools
            .iter()
            .map(|t| {
                Tool::new(
                    t.name.clone(),
                    t.description.clone(),
                    Arc::clone(&t.input_schema),
                )
            })
            .collect()
    }

    /// Invoke a tool by name with JSON arguments.
    pub async fn call(&self, name: &str, arguments: Value) -> Result<ExecOutput, ToolError> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        (tool.handler)(arguments).await
    }
}

/// MCP `tools/call` result for a call outcome.
pub fn into_call_result(outcome: Result<ExecOutput, ToolError>) -> CallToolResult {
    match outcome {
        Ok(output) => {
            let text = if output.stdout.trim().is_empty() && !output.stderr.is_empty() {
                output.stderr
            } else {
                output.stdout
            };
            CallToolResult::success(vec![Content::text(text)])
        }
        Err(e) => CallToolResult::error(vec![Content::text(e.to_string())]),
    }
}
