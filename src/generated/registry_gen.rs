//! Code generated by gh-mcp-gen. DO NOT EDIT.
//!
//! Registers every generated `gh` tool.
#[path = "gpg-key_gen.rs"]
pub mod gpg_key_gen;
#[path = "issue_gen.rs"]
pub mod issue_gen;
#[path = "pr_gen.rs"]
pub mod pr_gen;
#[path = "secret_gen.rs"]
pub mod secret_gen;

use std::sync::Arc;

use gh_mcp_gen::runtime::{Executor, ToolRegistrar};

/// Registers all 13 generated tools, in definition order.
pub fn register_all_tools(registrar: &mut dyn ToolRegistrar, executor: Arc<dyn Executor>) {
    gpg_key_gen::register_gpg_key_list(registrar, Arc::clone(&executor));
    gpg_key_gen::register_gpg_key_add(registrar, Arc::clone(&executor));
    gpg_key_gen::register_gpg_key_delete(registrar, Arc::clone(&executor));
    issue_gen::register_issue_list(registrar, Arc::clone(&executor));
    issue_gen::register_issue_create(registrar, Arc::clone(&executor));
    issue_gen::register_issue_close(registrar, Arc::clone(&executor));
    pr_gen::register_pr_list(registrar, Arc::clone(&executor));
    pr_gen::register_pr_create(registrar, Arc::clone(&executor));
    pr_gen::register_pr_view(registrar, Arc::clone(&executor));
    pr_gen::register_pr_merge(registrar, Arc::clone(&executor));
    secret_gen::register_secret_list(registrar, Arc::clone(&executor));
    secret_gen::register_secret_set(registrar, Arc::clone(&executor));
    secret_gen::register_secret_delete(registrar, Arc::clone(&executor));
}
