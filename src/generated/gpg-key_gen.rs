//! Code generated by gh-mcp-gen. DO NOT EDIT.
//!
//! `gh gpg-key` tools.
//!
//! Manage GPG keys registered with your GitHub account
use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;

use gh_mcp_gen::runtime::{Executor, ToolRegistrar, input_schema, typed_handler};

/// Lists GPG keys in your GitHub account
#[derive(Debug, Clone, Default, PartialEq, Deserialize, JsonSchema)]
pub struct GpgKeyListArgs {}

impl GpgKeyListArgs {
    /// Arguments for `gh gpg-key list`.
    pub fn to_args(&self) -> Vec<String> {
        vec!["gpg-key".to_string(), "list".to_string()]
    }
}

/// Registers the `gh_gpg_key_list` tool.
pub fn register_gpg_key_list(registrar: &mut dyn ToolRegistrar, executor: Arc<dyn Executor>) {
    registrar.register(
        "gh_gpg_key_list",
        "Lists GPG keys in your GitHub account",
        input_schema::<GpgKeyListArgs>(),
        typed_handler(executor, GpgKeyListArgs::to_args),
    );
}

/// Add a GPG key to your GitHub account
#[derive(Debug, Clone, Default, PartialEq, Deserialize, JsonSchema)]
pub struct GpgKeyAddArgs {
    /// Path to the public key file; read from standard input when omitted
    #[serde(default)]
    pub key_file: String,
    /// Title for the new key
    #[serde(default)]
    pub title: String,
}

impl GpgKeyAddArgs {
    /// Arguments for `gh gpg-key add`.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec!["gpg-key".to_string(), "add".to_string()];
        if !self.key_file.is_empty() {
            args.push(self.key_file.clone());
        }
        if !self.title.is_empty() {
            args.push("--title".to_string());
            args.push(self.title.clone());
        }
        args
    }
}

/// Registers the `gh_gpg_key_add` tool.
pub fn register_gpg_key_add(registrar: &mut dyn ToolRegistrar, executor: Arc<dyn Executor>) {
    registrar.register(
        "gh_gpg_key_add",
        "Add a GPG key to your GitHub account",
        input_schema::<GpgKeyAddArgs>(),
        typed_handler(executor, GpgKeyAddArgs::to_args),
    );
}

/// Delete a GPG key from your GitHub account
#[derive(Debug, Clone, Default, PartialEq, Deserialize, JsonSchema)]
pub struct GpgKeyDeleteArgs {
    /// ID of the key to delete
    pub key_id: String,
    /// Skip the confirmation prompt
    #[serde(default)]
    pub yes: bool,
}

impl GpgKeyDeleteArgs {
    /// Arguments for `gh gpg-key delete`.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec!["gpg-key".to_string(), "delete".to_string()];
        args.push(self.key_id.clone());
        if self.yes {
            args.push("--yes".to_string());
        }
        args
    }
}

/// Registers the `gh_gpg_key_delete` tool.
pub fn register_gpg_key_delete(registrar: &mut dyn ToolRegistrar, executor: Arc<dyn Executor>) {
    registrar.register(
        "gh_gpg_key_delete",
        "Delete a GPG key from your GitHub account",
        input_schema::<GpgKeyDeleteArgs>(),
        typed_handler(executor, GpgKeyDeleteArgs::to_args),
    );
}
