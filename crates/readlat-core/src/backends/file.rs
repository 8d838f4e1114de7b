//! Single-file backend.

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::ReadBackend;
use crate::error::Result;
use crate::workload::Payload;

/// Reads the whole payload from one file.
///
/// Each read opens, drains and closes the file so the measured cost includes
/// the open/close round trip, not just a cached descriptor read.
pub struct SingleFileBackend {
    path: PathBuf,
    payload_len: usize,
}

impl SingleFileBackend {
    /// Create a backend that stores its payload at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            payload_len: 0,
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Open `path`, read it to the end, close it.
pub(crate) fn read_file(path: &Path) -> Result<String> {
    let mut file = File::open(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(content)
}

impl ReadBackend for SingleFileBackend {
    fn label(&self) -> &str {
        "fs_single"
    }

    fn title(&self) -> String {
        format!(
            "Filesystem — single file ({:.0}kb)",
            self.payload_len as f64 / 1024.0
        )
    }

    fn seed(&mut self, payload: &Payload) -> Result<()> {
        fs::write(&self.path, payload.as_bytes())?;
        self.payload_len = payload.len();
        debug!(path = %self.path.display(), bytes = payload.len(), "seeded single file");
        Ok(())
    }

    fn read(&mut self) -> Result<String> {
        read_file(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_seed_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = SingleFileBackend::new(dir.path().join("single.txt"));

        backend.seed(&Payload::from("abcdefghij")).unwrap();
        assert_eq!(backend.read().unwrap(), "abcdefghij");
    }

    #[test]
    fn test_reseed_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = SingleFileBackend::new(dir.path().join("single.txt"));

        backend.seed(&Payload::from("a much longer first payload")).unwrap();
        backend.seed(&Payload::from("short")).unwrap();
        assert_eq!(backend.read().unwrap(), "short");
    }

    #[test]
    fn test_read_unseeded_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = SingleFileBackend::new(dir.path().join("missing.txt"));
        assert!(matches!(backend.read(), Err(Error::Io(_))));
    }

    #[test]
    fn test_title_reports_size() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = SingleFileBackend::new(dir.path().join("single.txt"));
        backend.seed(&Payload::from("x".repeat(100 * 1024))).unwrap();
        assert_eq!(backend.title(), "Filesystem — single file (100kb)");
        assert_eq!(backend.label(), "fs_single");
    }
}
