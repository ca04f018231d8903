/*!
`serve.rs`

Implements the `serve` subcommand: register every checked-in generated tool
against a `gh` executor and serve them over MCP on stdio.

stdout carries the protocol; all logging goes to stderr.
*/

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use rmcp::ServiceExt;
use tracing::info;

use gh_mcp_gen::generated::register_all_tools;
use gh_mcp_gen::runtime::{CommandExecutor, DEFAULT_TIMEOUT, Executor, ToolRegistry, ToolServer};

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Path to the gh binary (default: looked up on PATH)
    #[arg(long, value_name = "PATH")]
    pub gh: Option<PathBuf>,

    /// Per-call timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,
}

pub fn execute_serve(args: ServeArgs) -> Result<()> {
    let executor = match &args.gh {
        Some(path) => CommandExecutor::new(path),
        None => CommandExecutor::gh().context("Cannot serve without the gh CLI")?,
    }
    .with_timeout(Duration::from_secs(args.timeout));

    info!(
        program = %executor.program().display(),
        timeout_secs = args.timeout,
        "using gh executable"
    );

    let registry = generated_registry(Arc::new(executor));
    info!(tools = registry.len(), "serving generated tools on stdio");

    let rt = tokio::runtime::Runtime::new().context("Failed to create Tokio runtime")?;
    rt.block_on(serve_stdio(ToolServer::new(registry)))
}

/// Registry holding every checked-in generated tool.
pub fn generated_registry(executor: Arc<dyn Executor>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    register_all_tools(&mut registry, executor);
    registry
}

async fn serve_stdio(server: ToolServer) -> Result<()> {
    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .context("MCP initialization failed")?;
    let reason = service.waiting().await.context("MCP server task failed")?;
    info!(?reason, "MCP session closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use gh_mcp_gen::runtime::{ExecOutput, ExecutionError};

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        args: ServeArgs,
    }

    struct NoopExecutor;

    #[async_trait::async_trait]
    impl Executor for NoopExecutor {
        async fn execute(&self, _args: Vec<String>) -> Result<ExecOutput, ExecutionError> {
            Ok(ExecOutput::default())
        }
    }

    #[test]
    fn defaults() {
        let cli = TestCli::try_parse_from(["x"]).unwrap();
        assert!(cli.args.gh.is_none());
        assert_eq!(cli.args.timeout, 300);
    }

    #[test]
    fn explicit_binary_and_timeout() {
        let cli =
            TestCli::try_parse_from(["x", "--gh", "/opt/gh/bin/gh", "--timeout", "30"]).unwrap();
        assert_eq!(cli.args.gh, Some(PathBuf::from("/opt/gh/bin/gh")));
        assert_eq!(cli.args.timeout, 30);
    }

    #[test]
    fn registry_holds_every_generated_tool() {
        let registry = generated_registry(Arc::new(NoopExecutor));
        assert_eq!(registry.len(), 13);
        assert_eq!(registry.names().first(), Some(&"gh_gpg_key_list"));
        assert!(registry.get("gh_pr_merge").is_some());
        assert!(registry.get("gh_secret_delete").is_some());

        let server = ToolServer::new(registry);
        assert_eq!(server.tool_listing().tools.len(), 13);
    }
}
