//! Code generated by gh-mcp-gen. DO NOT EDIT.
//!
//! `gh pr` tools.
//!
//! Work with GitHub pull requests
use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;

use gh_mcp_gen::runtime::{Executor, ToolRegistrar, input_schema, typed_handler};

/// List pull requests in a repository
#[derive(Debug, Clone, Default, PartialEq, Deserialize, JsonSchema)]
pub struct PrListArgs {
    /// Filter by state
    /// Allowed values: open, closed, merged, all
    #[serde(default)]
    pub state: String,
    /// Maximum number of items to fetch
    #[serde(default)]
    pub limit: i64,
    /// Filter by label
    #[serde(default)]
    pub label: Vec<String>,
    /// Filter by draft state
    #[serde(default)]
    pub draft: bool,
    /// Select another repository using the OWNER/REPO format
    #[serde(default)]
    pub repo: String,
}

impl PrListArgs {
    /// Arguments for `gh pr list`.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec!["pr".to_string(), "list".to_string()];
        if !self.state.is_empty() {
            args.push("--state".to_string());
            args.push(self.state.clone());
        }
        if self.limit != 0 {
            args.push("--limit".to_string());
            args.push(self.limit.to_string());
        }
        for value in &self.label {
            args.push("--label".to_string());
            args.push(value.clone());
        }
        if self.draft {
            args.push("--draft".to_string());
        }
        if !self.repo.is_empty() {
            args.push("--repo".to_string());
            args.push(self.repo.clone());
        }
        args
    }
}

/// Registers the `gh_pr_list` tool.
pub fn register_pr_list(registrar: &mut dyn ToolRegistrar, executor: Arc<dyn Executor>) {
    registrar.register(
        "gh_pr_list",
        "List pull requests in a repository",
        input_schema::<PrListArgs>(),
        typed_handler(executor, PrListArgs::to_args),
    );
}

/// Create a pull request
#[derive(Debug, Clone, Default, PartialEq, Deserialize, JsonSchema)]
pub struct PrCreateArgs {
    /// Title for the pull request
    pub title: String,
    /// Body for the pull request
    #[serde(default)]
    pub body: String,
    /// The branch into which you want your code merged
    #[serde(default)]
    pub base: String,
    /// Mark pull request as a draft
    #[serde(default)]
    pub draft: bool,
    /// Request reviews from people or teams by their handle
    #[serde(default)]
    pub reviewer: Vec<String>,
}

impl PrCreateArgs {
    /// Arguments for `gh pr create`.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec!["pr".to_string(), "create".to_string()];
        if !self.title.is_empty() {
            args.push("--title".to_string());
            args.push(self.title.clone());
        }
        if !self.body.is_empty() {
            args.push("--body".to_string());
            args.push(self.body.clone());
        }
        if !self.base.is_empty() {
            args.push("--base".to_string());
            args.push(self.base.clone());
        }
        if self.draft {
            args.push("--draft".to_string());
        }
        for value in &self.reviewer {
            args.push("--reviewer".to_string());
            args.push(value.clone());
        }
        args
    }
}

/// Registers the `gh_pr_create` tool.
pub fn register_pr_create(registrar: &mut dyn ToolRegistrar, executor: Arc<dyn Executor>) {
    registrar.register(
        "gh_pr_create",
        "Create a pull request",
        input_schema::<PrCreateArgs>(),
        typed_handler(executor, PrCreateArgs::to_args),
    );
}

/// Display the title, body, and other information about a pull request
#[derive(Debug, Clone, Default, PartialEq, Deserialize, JsonSchema)]
pub struct PrViewArgs {
    /// Pull request number, URL or branch
    #[serde(default)]
    pub number: String,
    /// View pull request comments
    #[serde(default)]
    pub comments: bool,
    /// Output JSON with the specified fields
    #[serde(default)]
    pub json: String,
}

impl PrViewArgs {
    /// Arguments for `gh pr view`.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec!["pr".to_string(), "view".to_string()];
        if !self.number.is_empty() {
            args.push(self.number.clone());
        }
        if self.comments {
            args.push("--comments".to_string());
        }
        if !self.json.is_empty() {
            args.push("--json".to_string());
            args.push(self.json.clone());
        }
        args
    }
}

/// Registers the `gh_pr_view` tool.
pub fn register_pr_view(registrar: &mut dyn ToolRegistrar, executor: Arc<dyn Executor>) {
    registrar.register(
        "gh_pr_view",
        "Display the title, body, and other information about a pull request",
        input_schema::<PrViewArgs>(),
        typed_handler(executor, PrViewArgs::to_args),
    );
}

/// Merge a pull request on GitHub
#[derive(Debug, Clone, Default, PartialEq, Deserialize, JsonSchema)]
pub struct PrMergeArgs {
    /// Pull request number, URL or branch
    pub number: String,
    /// Squash the commits into one commit and merge it into the base branch
    #[serde(default)]
    pub squash: bool,
    /// Delete the local and remote branch after merge
    #[serde(default)]
    pub delete_branch: bool,
}

impl PrMergeArgs {
    /// Arguments for `gh pr merge`.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec!["pr".to_string(), "merge".to_string()];
        args.push(self.number.clone());
        if self.squash {
            args.push("--squash".to_string());
        }
        if self.delete_branch {
            args.push("--delete-branch".to_string());
        }
        args
    }
}

/// Registers the `gh_pr_merge` tool.
pub fn register_pr_merge(registrar: &mut dyn ToolRegistrar, executor: Arc<dyn Executor>) {
    registrar.register(
        "gh_pr_merge",
        "Merge a pull request on GitHub",
        input_schema::<PrMergeArgs>(),
        typed_handler(executor, PrMergeArgs::to_args),
    );
}
