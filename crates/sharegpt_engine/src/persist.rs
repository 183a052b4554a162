use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use sharegpt_core::Record;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("output path has no file name: {0:?}")]
    OutputPath(PathBuf),
    #[error("failed to serialize dataset: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Ensure output directory exists; create if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::OutputDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    }
    // Writability check; the temp file is removed on drop.
    NamedTempFile::new_in(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    Ok(())
}

/// Writes the cleaned dataset as one pretty-printed JSON array.
///
/// The content goes to a temp file next to the target which is then renamed
/// over it, so readers never see a half-written dataset.
#[derive(Debug, Clone)]
pub struct DatasetWriter {
    target: PathBuf,
}

impl DatasetWriter {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
        }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Check the target can be written without touching it.
    pub fn prepare(&self) -> Result<(), PersistError> {
        if self.target.file_name().is_none() {
            return Err(PersistError::OutputPath(self.target.clone()));
        }
        ensure_output_dir(self.parent_dir())
    }

    pub fn write(&self, records: &[Record]) -> Result<PathBuf, PersistError> {
        self.prepare()?;
        let content = serde_json::to_string_pretty(records)?;

        let mut tmp = NamedTempFile::new_in(self.parent_dir())?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;
        tmp.persist(&self.target).map_err(|e| PersistError::Io(e.error))?;
        Ok(self.target.clone())
    }

    fn parent_dir(&self) -> &Path {
        match self.target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}
