//! MCP server exposing a `ToolRegistry`: `tools/list` and `tools/call`.

use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParam, CallToolResult, ErrorData, ListToolsResult, PaginatedRequestParam,
    ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{RoleServer, ServerHandler};
use serde_json::Value;
use tracing::debug;

use super::registry::{ToolError, ToolRegistry, into_call_result};

const INSTRUCTIONS: &str = "Each tool runs one `gh <command> <subcommand>` invocation. \
Arguments map to positional arguments and flags; the tool result is the command's output.";

/// Serves every tool of a registry. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ToolServer {
    registry: Arc<ToolRegistry>,
}

impl ToolServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Full tool listing; the set is small enough to skip pagination.
    pub fn tool_listing(&self) -> ListToolsResult {
        ListToolsResult::with_all_items(self.registry.list_tools())
    }

    /// Run a tool. Unknown names are protocol errors; every other failure is
    /// reported to the caller as an error result.
    pub async fn dispatch(
        &self,
        request: CallToolRequestParam,
    ) -> Result<CallToolResult, ErrorData> {
        let arguments = request.arguments.map_or(Value::Null, Value::Object);
        debug!(tool = %request.name, "tools/call");
        match self.registry.call(&request.name, arguments).await {
            Err(ToolError::UnknownTool(name)) => Err(ErrorData::invalid_params(
                format!("unknown tool '{name}'"),
                None,
            )),
            outcome => Ok(into_call_result(outcome)),
        }
    }
}

impl ServerHandler for ToolServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(self.tool_listing())
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        self.dispatch(request).await
    }
}
