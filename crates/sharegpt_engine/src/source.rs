use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use sharegpt_core::{parse_record, Record, StructuralError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot read input directory {path:?}: {source}")]
    ReadDir { path: PathBuf, source: io::Error },
}

/// One input unit: its name for logging plus whatever could be extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    pub name: String,
    pub record: Result<Record, StructuralError>,
}

impl SourceEntry {
    pub fn new(name: impl Into<String>, record: Result<Record, StructuralError>) -> Self {
        Self {
            name: name.into(),
            record,
        }
    }
}

/// The `*.json` files directly inside a directory, in file name order.
///
/// Each file is read to completion and closed before its entry is yielded. A
/// file that cannot be read yields a structural error instead of stopping the
/// iteration.
#[derive(Debug)]
pub struct DirectorySource {
    files: std::vec::IntoIter<PathBuf>,
}

impl DirectorySource {
    pub fn open(dir: &Path) -> Result<Self, SourceError> {
        let read_dir_err = |source| SourceError::ReadDir {
            path: dir.to_path_buf(),
            source,
        };
        let mut files = Vec::new();
        for entry in fs::read_dir(dir).map_err(read_dir_err)? {
            let path = entry.map_err(read_dir_err)?.path();
            let is_json = path.extension().is_some_and(|ext| ext == "json");
            if is_json && !path.is_dir() {
                files.push(path);
            }
        }
        files.sort();
        Ok(Self {
            files: files.into_iter(),
        })
    }
}

impl Iterator for DirectorySource {
    type Item = SourceEntry;

    fn next(&mut self) -> Option<SourceEntry> {
        let path = self.files.next()?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let record = fs::read_to_string(&path)
            .map_err(|e| StructuralError::Io(e.to_string()))
            .and_then(|text| parse_record(&text));
        Some(SourceEntry::new(name, record))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.files.size_hint()
    }
}

impl ExactSizeIterator for DirectorySource {}
