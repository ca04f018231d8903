//! Code generated by gh-mcp-gen. DO NOT EDIT.
//!
//! `gh secret` tools.
//!
//! Manage GitHub secrets
use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;

use gh_mcp_gen::runtime::{Executor, ToolRegistrar, input_schema, typed_handler};

/// List secrets for a repository, environment, or organization
#[derive(Debug, Clone, Default, PartialEq, Deserialize, JsonSchema)]
pub struct SecretListArgs {
    /// List secrets for an environment
    #[serde(default)]
    pub env: String,
    /// List secrets for an organization
    #[serde(default)]
    pub org: String,
}

impl SecretListArgs {
    /// Arguments for `gh secret list`.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec!["secret".to_string(), "list".to_string()];
        if !self.env.is_empty() {
            args.push("--env".to_string());
            args.push(self.env.clone());
        }
        if !self.org.is_empty() {
            args.push("--org".to_string());
            args.push(self.org.clone());
        }
        args
    }
}

/// Registers the `gh_secret_list` tool.
pub fn register_secret_list(registrar: &mut dyn ToolRegistrar, executor: Arc<dyn Executor>) {
    registrar.register(
        "gh_secret_list",
        "List secrets for a repository, environment, or organization",
        input_schema::<SecretListArgs>(),
        typed_handler(executor, SecretListArgs::to_args),
    );
}

/// Set a value for a secret
#[derive(Debug, Clone, Default, PartialEq, Deserialize, JsonSchema)]
pub struct SecretSetArgs {
    /// Name of the secret
    pub secret_name: String,
    /// The value for the secret
    #[serde(default)]
    pub body: String,
    /// Load secret names and values from a dotenv-formatted file
    #[serde(default)]
    pub env_file: String,
    /// List of repositories that can access an organization or user secret
    #[serde(default)]
    pub repos: Vec<String>,
}

impl SecretSetArgs {
    /// Arguments for `gh secret set`.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec!["secret".to_string(), "set".to_string()];
        args.push(self.secret_name.clone());
        if !self.body.is_empty() {
            args.push("--body".to_string());
            args.push(self.body.clone());
        }
        if !self.env_file.is_empty() {
            args.push("--env-file".to_string());
            args.push(self.env_file.clone());
        }
        for value in &self.repos {
            args.push("--repos".to_string());
            args.push(value.clone());
        }
        args
    }
}

/// Registers the `gh_secret_set` tool.
pub fn register_secret_set(registrar: &mut dyn ToolRegistrar, executor: Arc<dyn Executor>) {
    registrar.register(
        "gh_secret_set",
        "Set a value for a secret",
        input_schema::<SecretSetArgs>(),
        typed_handler(executor, SecretSetArgs::to_args),
    );
}

/// Delete a secret
#[derive(Debug, Clone, Default, PartialEq, Deserialize, JsonSchema)]
pub struct SecretDeleteArgs {
    /// Name of the secret
    pub secret_name: String,
    /// Delete a secret for an environment
    #[serde(default)]
    pub env: String,
}

impl SecretDeleteArgs {
    /// Arguments for `gh secret delete`.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec!["secret".to_string(), "delete".to_string()];
        args.push(self.secret_name.clone());
        if !self.env.is_empty() {
            args.push("--env".to_string());
            args.push(self.env.clone());
        }
        args
    }
}

/// Registers the `gh_secret_delete` tool.
pub fn register_secret_delete(registrar: &mut dyn ToolRegistrar, executor: Arc<dyn Executor>) {
    registrar.register(
        "gh_secret_delete",
        "Delete a secret",
        input_schema::<SecretDeleteArgs>(),
        typed_handler(executor, SecretDeleteArgs::to_args),
    );
}
