use std::fs;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("refusing to write outside the output directory: {0}")]
    OutsideOutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Ensure output directory exists; create if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<(), WriteError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| WriteError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(WriteError::OutputDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| WriteError::OutputDir(e.to_string()))?;
    }
    // Writability probe.
    NamedTempFile::new_in(dir).map_err(|e| WriteError::OutputDir(e.to_string()))?;
    Ok(())
}

/// Writes `{root}/{relative}` through a temp file and a rename.
///
/// Readers of the output directory never observe a half-written page.
pub struct AtomicFileWriter {
    root: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn write(&self, relative: &str, content: &str) -> Result<PathBuf, WriteError> {
        let relative_path = checked_relative(relative)?;
        ensure_output_dir(&self.root)?;

        let target = self.root.join(relative_path);
        let parent = target.parent().unwrap_or(&self.root).to_path_buf();
        fs::create_dir_all(&parent)?;

        let mut tmp = NamedTempFile::new_in(&parent)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        if target.exists() {
            fs::remove_file(&target)?;
        }
        tmp.persist(&target).map_err(|e| WriteError::Io(e.error))?;
        Ok(target)
    }
}

fn checked_relative(relative: &str) -> Result<&Path, WriteError> {
    let path = Path::new(relative);
    let normal = path
        .components()
        .all(|component| matches!(component, Component::Normal(_)));
    if relative.is_empty() || !normal {
        return Err(WriteError::OutsideOutputDir(relative.to_string()));
    }
    Ok(path)
}
