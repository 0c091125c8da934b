use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot directory missing or not writable: {0}")]
    Dir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Writes the rendered page to a fixed path, replacing it atomically each time.
pub struct SnapshotWriter {
    path: PathBuf,
}

impl SnapshotWriter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn write(&self, html: &str) -> Result<(), SnapshotError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        ensure_dir(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(html.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| SnapshotError::Io(e.error))?;
        Ok(())
    }
}

fn ensure_dir(dir: &Path) -> Result<(), SnapshotError> {
    if dir.exists() {
        if !dir.is_dir() {
            return Err(SnapshotError::Dir(format!("{dir:?} is not a directory")));
        }
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|e| SnapshotError::Dir(e.to_string()))
}
