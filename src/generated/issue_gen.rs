//! Code generated by gh-mcp-gen. DO NOT EDIT.
//!
//! `gh issue` tools.
//!
//! Work with GitHub issues
use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;

use gh_mcp_gen::runtime::{Executor, ToolRegistrar, input_schema, typed_handler};

/// List issues in a repository
#[derive(Debug, Clone, Default, PartialEq, Deserialize, JsonSchema)]
pub struct IssueListArgs {
    /// Filter by state
    /// Allowed values: open, closed, all
    #[serde(default)]
    pub state: String,
    /// Filter by assignee
    #[serde(default)]
    pub assignee: String,
    /// Maximum number of issues to fetch
    #[serde(default)]
    pub limit: i64,
}

impl IssueListArgs {
    /// Arguments for `gh issue list`.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec!["issue".to_string(), "list".to_string()];
        if !self.state.is_empty() {
            args.push("--state".to_string());
            args.push(self.state.clone());
        }
        if !self.assignee.is_empty() {
            args.push("--assignee".to_string());
            args.push(self.assignee.clone());
        }
        if self.limit != 0 {
            args.push("--limit".to_string());
            args.push(self.limit.to_string());
        }
        args
    }
}

/// Registers the `gh_issue_list` tool.
pub fn register_issue_list(registrar: &mut dyn ToolRegistrar, executor: Arc<dyn Executor>) {
    registrar.register(
        "gh_issue_list",
        "List issues in a repository",
        input_schema::<IssueListArgs>(),
        typed_handler(executor, IssueListArgs::to_args),
    );
}

/// Create a new issue
#[derive(Debug, Clone, Default, PartialEq, Deserialize, JsonSchema)]
pub struct IssueCreateArgs {
    /// Supply a title
    pub title: String,
    /// Supply a body
    #[serde(default)]
    pub body: String,
    /// Add labels by name
    #[serde(default)]
    pub label: Vec<String>,
}

impl IssueCreateArgs {
    /// Arguments for `gh issue create`.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec!["issue".to_string(), "create".to_string()];
        if !self.title.is_empty() {
            args.push("--title".to_string());
            args.push(self.title.clone());
        }
        if !self.body.is_empty() {
            args.push("--body".to_string());
            args.push(self.body.clone());
        }
        for value in &self.label {
            args.push("--label".to_string());
            args.push(value.clone());
        }
        args
    }
}

/// Registers the `gh_issue_create` tool.
pub fn register_issue_create(registrar: &mut dyn ToolRegistrar, executor: Arc<dyn Executor>) {
    registrar.register(
        "gh_issue_create",
        "Create a new issue",
        input_schema::<IssueCreateArgs>(),
        typed_handler(executor, IssueCreateArgs::to_args),
    );
}

/// Close issue
#[derive(Debug, Clone, Default, PartialEq, Deserialize, JsonSchema)]
pub struct IssueCloseArgs {
    /// Issue number or URL
    pub number: String,
    /// Reason for closing
    /// Allowed values: completed, not planned
    #[serde(default)]
    pub reason: String,
    /// Leave a closing comment
    #[serde(default)]
    pub comment: String,
}

impl IssueCloseArgs {
    /// Arguments for `gh issue close`.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec!["issue".to_string(), "close".to_string()];
        args.push(self.number.clone());
        if !self.reason.is_empty() {
            args.push("--reason".to_string());
            args.push(self.reason.clone());
        }
        if !self.comment.is_empty() {
            args.push("--comment".to_string());
            args.push(self.comment.clone());
        }
        args
    }
}

/// Registers the `gh_issue_close` tool.
pub fn register_issue_close(registrar: &mut dyn ToolRegistrar, executor: Arc<dyn Executor>) {
    registrar.register(
        "gh_issue_close",
        "Close issue",
        input_schema::<IssueCloseArgs>(),
        typed_handler(executor, IssueCloseArgs::to_args),
    );
}
