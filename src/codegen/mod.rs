//! Code generation: definitions -> `<group>_gen.rs` files + `registry_gen.rs`.
//!
//! Flow (sequential, single pass each):
//!   1. emit_command for every group, writing each file as it is rendered
//!   2. emit_registry over all groups
//!
//! Any render or write failure aborts the run; files already written stay.

pub mod command;
pub mod format;
pub mod naming;
pub mod registry;
pub mod templates;
pub mod types;

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::definition::CommandGroup;
use crate::error::{FormatError, GenerateError, WriteError};

pub use command::emit_command;
pub use registry::{REGISTRY_FILE_NAME, emit_registry};

/// Module path the generated code imports its runtime contract from.
pub const DEFAULT_RUNTIME_PATH: &str = "gh_mcp_gen::runtime";
/// Prefix of every generated tool name.
pub const DEFAULT_TOOL_PREFIX: &str = "gh";

/// Knobs shared by both emitters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenOptions {
    pub runtime_path: String,
    pub tool_prefix: String,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            runtime_path: DEFAULT_RUNTIME_PATH.to_string(),
            tool_prefix: DEFAULT_TOOL_PREFIX.to_string(),
        }
    }
}

/// One rendered output file.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    pub file_name: String,
    pub contents: String,
    /// Set when formatting failed and `contents` is the raw rendering.
    pub format_error: Option<FormatError>,
}

impl SourceUnit {
    pub fn formatted(file_name: impl Into<String>, contents: String) -> Self {
        Self {
            file_name: file_name.into(),
            contents,
            format_error: None,
        }
    }

    pub fn unformatted(file_name: impl Into<String>, contents: String, error: FormatError) -> Self {
        Self {
            file_name: file_name.into(),
            contents,
            format_error: Some(error),
        }
    }
}

/// A file written by `generate_code`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub formatted: bool,
}

/// Outcome of a successful run.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub files: Vec<WrittenFile>,
    pub warnings: Vec<FormatError>,
    pub tool_count: usize,
}

/// Emit every group and the registry into `output_dir`.
pub fn generate_code(
    groups: &[CommandGroup],
    output_dir: impl AsRef<Path>,
    options: &CodegenOptions,
) -> Result<GenerationReport, GenerateError> {
    let output_dir = output_dir.as_ref();
    std::fs::create_dir_all(output_dir).map_err(|source| WriteError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut report = GenerationReport::default();

    for group in groups {
        let unit = emit_command(group, options).map_err(|source| GenerateError::Render {
            group: group.command.clone(),
            source,
        })?;
        let written = write_unit(output_dir, unit, &mut report).map_err(|source| {
            GenerateError::Write {
                group: group.command.clone(),
                source,
            }
        })?;
        report.files.push(written);
        report.tool_count += group.tool_count();
    }

    let unit = emit_registry(groups, options).map_err(GenerateError::Registry)?;
    let written = write_unit(output_dir, unit, &mut report)?;
    report.files.push(written);

    Ok(report)
}

fn write_unit(
    output_dir: &Path,
    unit: SourceUnit,
    report: &mut GenerationReport,
) -> Result<WrittenFile, WriteError> {
    let path = output_dir.join(&unit.file_name);
    std::fs::write(&path, unit.contents.as_bytes()).map_err(|source| WriteError::Write {
        path: path.clone(),
        source,
    })?;

    let formatted = unit.format_error.is_none();
    if let Some(e) = unit.format_error {
        warn!("{e}; wrote unformatted source");
        report.warnings.push(e);
    }
    debug!(file = %path.display(), "generated");

    Ok(WrittenFile { path, formatted })
}
