use enumgen_core::{EnumGenError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// What happened to the target file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    Updated,
    Unchanged,
}

impl WriteOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            WriteOutcome::Created => "created",
            WriteOutcome::Updated => "updated",
            WriteOutcome::Unchanged => "unchanged",
        }
    }
}

impl std::fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct CodeWriter;

impl CodeWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write `<output_dir>/<type_name>.<extension>`, creating the directory
    pub fn write_enum(
        &self,
        output_dir: &Path,
        type_name: &str,
        extension: &str,
        content: &str,
    ) -> Result<(PathBuf, WriteOutcome)> {
        let path = output_dir.join(format!("{}.{}", type_name, extension));
        let outcome = self.write_if_changed(&path, content)?;
        Ok((path, outcome))
    }

    pub fn write_if_changed(&self, path: &Path, content: &str) -> Result<WriteOutcome> {
        let failure = |e: std::io::Error| EnumGenError::write_failure(path.display().to_string(), e);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(failure)?;
        }

        let outcome = if path.exists() {
            let existing = fs::read(path).map_err(failure)?;
            if existing == content.as_bytes() {
                tracing::debug!(path = %path.display(), "generated file unchanged");
                return Ok(WriteOutcome::Unchanged);
            }
            tracing::warn!(path = %path.display(), "overwriting existing file");
            WriteOutcome::Updated
        } else {
            WriteOutcome::Created
        };

        fs::write(path, content).map_err(failure)?;
        tracing::info!(path = %path.display(), outcome = %outcome, "wrote generated enum");
        Ok(outcome)
    }
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new()
    }
}
