use crate::ports::outbound::OutputPresenter;
use crate::shared::error::SbomError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Writes `content` to `path` through a temporary file in the same
/// directory, so readers never observe a half-written file.
///
/// # Errors
/// Returns `FileWriteError` if the parent directory is missing or any step
/// of the write fails, and `SecurityError` if `path` is a symbolic link.
pub(crate) fn write_atomically(path: &Path, content: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if parent != Path::new("") => parent,
        _ => Path::new("."),
    };

    if !parent.is_dir() {
        return Err(write_error(
            path,
            format!("Parent directory does not exist: {}", parent.display()),
        ));
    }

    validate_not_symlink(path, "write")?;

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| write_error(path, e.to_string()))?;
    temp.write_all(content)
        .map_err(|e| write_error(path, e.to_string()))?;
    temp.persist(path)
        .map_err(|e| write_error(path, e.error.to_string()))?;

    Ok(())
}

fn write_error(path: &Path, details: String) -> anyhow::Error {
    SbomError::FileWriteError {
        path: path.to_path_buf(),
        details,
    }
    .into()
}

/// FileSystemWriter adapter for writing output to files
///
/// This adapter implements the OutputPresenter port for file output.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        write_atomically(&self.output_path, content.as_bytes())?;
        eprintln!("✅ Output complete: {}", self.output_path.display());
        Ok(())
    }
}

/// StdoutPresenter adapter for writing output to stdout
///
/// This adapter implements the OutputPresenter port for stdout output.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
