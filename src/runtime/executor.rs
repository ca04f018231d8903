//! Execution collaborator: runs the wrapped CLI and captures its output.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, error, info};

/// Default per-invocation timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5 * 60);

const REDACTED: &str = "[REDACTED]";
const SENSITIVE_FLAGS: &[&str] = &["--token", "--password", "--secret"];

/// Captured result of one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExecOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("{program} not found in PATH: {source}")]
    NotFound {
        program: String,
        #[source]
        source: which::Error,
    },

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} timed out after {}s", timeout.as_secs_f32())]
    Timeout { program: String, timeout: Duration },

    #[error("{program} command failed (exit {exit_code}): {stderr}")]
    Failed {
        program: String,
        exit_code: i32,
        stdout: String,
        stderr: String,
    },
}

impl ExecutionError {
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ExecutionError::Failed { exit_code, .. } => Some(*exit_code),
            _ => None,
        }
    }
}

/// Runs the wrapped tool with an argument vector (program name excluded).
#[async_trait]
pub trait Executor: Send + Sync {
    async fn execute(&self, args: Vec<String>) -> Result<ExecOutput, ExecutionError>;
}

/// Subprocess-backed executor with a bounded runtime per call.
#[derive(Debug, Clone)]
pub struct CommandExecutor {
    program: PathBuf,
    timeout: Duration,
}

impl CommandExecutor {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Resolve `name` on PATH.
    pub fn locate(name: &str) -> Result<Self, ExecutionError> {
        which::which(name)
            .map(Self::new)
            .map_err(|source| ExecutionError::NotFound {
                program: name.to_string(),
                source,
            })
    }

    /// Executor for the GitHub CLI.
    pub fn gh() -> Result<Self, ExecutionError> {
        Self::locate("gh")
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn program_name(&self) -> String {
        self.program
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.program.display().to_string())
    }
}

#[async_trait]
impl Executor for CommandExecutor {
    async fn execute(&self, args: Vec<String>) -> Result<ExecOutput, ExecutionError> {
        let program = self.program_name();
        let shown = shell_words::join(redact_args(&args));
        info!(command = %program, args = %shown, "executing command");

        let mut command = Command::new(&self.program);
        command
            .args(&args)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = match tokio::time::timeout(self.timeout, command.output()).await {
            Ok(result) => result.map_err(|source| ExecutionError::Spawn {
                program: program.clone(),
                source,
            })?,
            Err(_) => {
                error!(command = %program, args = %shown, timeout = ?self.timeout, "command timed out");
                return Err(ExecutionError::Timeout {
                    program,
                    timeout: self.timeout,
                });
            }
        };

        // Killed by a signal: no exit code.
        let exit_code = output.status.code().unwrap_or(-1);
        let result = ExecOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code,
        };

        if !output.status.success() {
            error!(
                command = %program,
                args = %shown,
                exit_code,
                stderr = %result.stderr,
                "command failed"
            );
            return Err(ExecutionError::Failed {
                program,
                exit_code,
                stdout: result.stdout,
                stderr: result.stderr,
            });
        }

        debug!(command = %program, args = %shown, exit_code, "command succeeded");
        Ok(result)
    }
}

/// Copy of `args` safe for logs: values of credential flags are masked.
///
/// `--body` is masked only for `secret ...` invocations, where it carries the secret.
pub fn redact_args(args: &[String]) -> Vec<String> {
    let secret_body = args.first().is_some_and(|a| a == "secret");
    let sensitive = |flag: &str| {
        SENSITIVE_FLAGS.contains(&flag) || (secret_body && matches!(flag, "--body" | "-b"))
    };

    let mut out = Vec::with_capacity(args.len());
    let mut mask_next = false;
    for arg in args {
        if mask_next {
            out.push(REDACTED.to_string());
            mask_next = false;
            continue;
        }
        if let Some((flag, _)) = arg.split_once('=')
            && sensitive(flag)
        {
            out.push(format!("{flag}={REDACTED}"));
            continue;
        }
        mask_next = sensitive(arg.as_str());
        out.push(arg.clone());
    }
    out
}
