//! Fan-out file backend.
//!
//! The payload is split into `file_count` contiguous chunks, one file each.
//! A read spawns one worker per file, every worker opens its own handle, and
//! the call returns only after all of them have joined. The timed span is the
//! whole fan-out/fan-in, not the sum of the individual reads.
//!
//! Chunks are `len / file_count` bytes; any remainder is not stored.
//!
//! Joining the chunks back into one `String` happens inside the timed span.
//! It is a single allocation sized to the sum of the chunks plus one copy of
//! the payload, which the single-file read does not pay.

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

use tracing::debug;

use super::file::read_file;
use super::ReadBackend;
use crate::error::{Error, Result};
use crate::workload::Payload;

/// Reads the payload back from many files in parallel.
pub struct ConcurrentFileBackend {
    dir: PathBuf,
    file_count: usize,
    paths: Vec<PathBuf>,
}

impl ConcurrentFileBackend {
    /// Create a backend that writes `file_count` chunk files under `dir`.
    pub fn new(dir: impl Into<PathBuf>, file_count: usize) -> Self {
        Self {
            dir: dir.into(),
            file_count,
            paths: Vec::new(),
        }
    }

    /// Number of chunk files.
    pub fn file_count(&self) -> usize {
        self.file_count
    }

    /// Chunk file paths, in payload order. Empty until seeded.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}

/// Split `text` into `count` equal contiguous chunks of `len / count` bytes.
///
/// The trailing `len % count` bytes are dropped. Fails if `count` is zero or a
/// chunk boundary would split a UTF-8 character.
pub fn split_chunks(text: &str, count: usize) -> Result<Vec<&str>> {
    if count == 0 {
        return Err(Error::Config("file count must be greater than zero".into()));
    }
    let chunk_len = text.len() / count;
    (0..count)
        .map(|i| {
            let (start, end) = (i * chunk_len, (i + 1) * chunk_len);
            text.get(start..end).ok_or_else(|| {
                Error::Config(format!(
                    "chunk {} ({}..{}) splits a UTF-8 character",
                    i, start, end
                ))
            })
        })
        .collect()
}

impl ReadBackend for ConcurrentFileBackend {
    fn label(&self) -> &str {
        "fs_concurrent"
    }

    fn title(&self) -> String {
        format!(
            "Filesystem — {} concurrent files (same total size)",
            self.file_count
        )
    }

    fn seed(&mut self, payload: &Payload) -> Result<()> {
        let chunks = split_chunks(payload.as_str(), self.file_count)?;
        fs::create_dir_all(&self.dir)?;

        let mut paths = Vec::with_capacity(chunks.len());
        for (i, chunk) in chunks.iter().enumerate() {
            let path = self.dir.join(format!("chunk_{:03}.txt", i));
            fs::write(&path, chunk)?;
            paths.push(path);
        }

        debug!(
            dir = %self.dir.display(),
            files = paths.len(),
            chunk_bytes = payload.len() / self.file_count,
            dropped_bytes = payload.len() % self.file_count,
            "seeded chunk files"
        );
        self.paths = paths;
        Ok(())
    }

    fn read(&mut self) -> Result<String> {
        if self.paths.is_empty() {
            return Err(Error::NotSeeded("fs_concurrent"));
        }

        concat_chunks(fan_out(&self.paths, read_file))
    }
}

/// Run `f` on every path, one scoped thread each, and wait for all of them.
///
/// Results come back in `paths` order. A panicking worker is reported as
/// [`Error::WorkerPanicked`].
pub(crate) fn fan_out<T, F>(paths: &[PathBuf], f: F) -> Vec<Result<T>>
where
    T: Send,
    F: Fn(&Path) -> Result<T> + Sync,
{
    let f = &f;
    thread::scope(|scope| {
        let workers: Vec<_> = paths
            .iter()
            .map(|path| scope.spawn(move || f(path.as_path())))
            .collect();

        workers
            .into_iter()
            .map(|worker| worker.join().unwrap_or_else(|_| Err(Error::WorkerPanicked)))
            .collect()
    })
}

/// Concatenate chunk reads in order, failing on the first error.
fn concat_chunks(results: Vec<Result<String>>) -> Result<String> {
    let chunks = results.into_iter().collect::<Result<Vec<_>>>()?;
    let mut content = String::with_capacity(chunks.iter().map(String::len).sum());
    for chunk in &chunks {
        content.push_str(chunk);
    }
    Ok(content)
}
