//! Error kinds of the generation pipeline.
//!
//! LoadError / RenderError / WriteError are fatal and abort the run.
//! FormatError is recovered by the emitters (raw rendering is kept).

use std::path::PathBuf;

use thiserror::Error;

/// Failure while discovering or decoding definition files.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid definitions pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to list definitions: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error(
        "invalid command name '{command}' in {}: expected a non-empty name of letters, digits, '-' or '_'",
        path.display()
    )]
    InvalidCommand { path: PathBuf, command: String },

    #[error("duplicate tool '{tool}' (defined by '{first}' and '{second}')")]
    DuplicateTool {
        tool: String,
        first: String,
        second: String,
    },
}

/// Template or view-model failure. Always a generator bug, never a data problem.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to parse template '{template}': {source}")]
    Parse {
        template: &'static str,
        #[source]
        source: liquid::Error,
    },

    #[error("failed to build template context for '{unit}': {source}")]
    Context {
        unit: String,
        #[source]
        source: liquid::Error,
    },

    #[error("failed to render template '{template}' for '{unit}': {source}")]
    Render {
        template: &'static str,
        unit: String,
        #[source]
        source: liquid::Error,
    },
}

/// Canonical formatting failed; the unformatted rendering is used instead.
#[derive(Debug, Clone, Error)]
#[error("failed to format {unit}: {message}")]
pub struct FormatError {
    pub unit: String,
    pub message: String,
}

/// Output directory or file could not be written.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level failure of a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("failed to generate code for {group}: {source}")]
    Render {
        group: String,
        #[source]
        source: RenderError,
    },

    #[error("failed to generate registry: {0}")]
    Registry(#[source] RenderError),

    #[error("failed to generate code for {group}: {source}")]
    Write {
        group: String,
        #[source]
        source: WriteError,
    },

    #[error(transparent)]
    Output(#[from] WriteError),
}
