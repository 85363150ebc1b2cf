//! Landing planned module files on disk.
//!
//! Files are replaced wholesale on every run. In preview mode nothing under
//! the modules root is created; the rendered text is handed back instead.

use crate::error::{CliResult, WriteError};
use std::path::{Path, PathBuf};
use tracing::info;

/// Where planned files go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriteMode {
    Disk,
    Preview,
}

/// What happened to one planned file.
#[derive(Debug)]
pub enum WriteResult {
    Written { path: PathBuf, bytes: usize },

    /// `--dry-run`: the file was rendered but left unwritten.
    DryRun { content: String, path: PathBuf },
}

impl WriteResult {
    /// Destination of the file, written or not.
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path, .. } | WriteResult::DryRun { path, .. } => path,
        }
    }

    pub fn was_written(&self) -> bool {
        matches!(self, WriteResult::Written { .. })
    }
}

/// Writes module files, or previews them with `dry_run`.
#[derive(Debug)]
pub struct FileWriter {
    mode: WriteMode,
}

impl FileWriter {
    pub fn new(dry_run: bool) -> Self {
        let mode = if dry_run {
            WriteMode::Preview
        } else {
            WriteMode::Disk
        };
        Self { mode }
    }

    /// Create a module directory and its parents. Existing directories are
    /// left alone.
    pub fn ensure_dir(&self, path: &Path) -> CliResult<()> {
        if self.mode == WriteMode::Preview || path.is_dir() {
            return Ok(());
        }

        std::fs::create_dir_all(path)
            .map_err(|e| WriteError::create_dir(path.to_path_buf(), e))?;
        Ok(())
    }

    /// Replace `path` with `content`.
    pub fn write(&self, path: &Path, content: &str) -> CliResult<WriteResult> {
        if self.mode == WriteMode::Preview {
            return Ok(WriteResult::DryRun {
                content: content.to_string(),
                path: path.to_path_buf(),
            });
        }

        if let Some(parent) = path.parent() {
            self.ensure_dir(parent)?;
        }

        std::fs::write(path, content)
            .map_err(|e| WriteError::write_file(path.to_path_buf(), e))?;
        info!(path = %path.display(), bytes = content.len(), "wrote file");

        Ok(WriteResult::Written {
            path: path.to_path_buf(),
            bytes: content.len(),
        })
    }
}
