//! Resize event sinks
//!
//! The monitor reports every capacity change as one human-readable line.
//! Where those lines go is up to the caller: a file on disk for the CLI,
//! an in-memory buffer for tests.

use std::fs::{File, OpenOptions};
use std::io::{self, LineWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Append-only destination for resize event lines
///
/// Implementations receive lines in the exact order resizes happened; the
/// monitor only calls `append_line` while holding its lock.
pub trait ResizeSink: Send {
    /// Append one line (without trailing newline)
    fn append_line(&mut self, line: &str) -> io::Result<()>;
}

/// Sink writing one line per resize to a file
///
/// The file is truncated on open. Every line is flushed as it is written
/// so the log stays complete even if the process is killed mid-run.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    writer: LineWriter<File>,
}

impl FileSink {
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)?;
        Ok(Self {
            path,
            writer: LineWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ResizeSink for FileSink {
    fn append_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()
    }
}

/// Shared in-memory sink
///
/// Clones share the same line buffer, so a test can hand one clone to the
/// monitor and keep another to inspect what was written.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all lines written so far
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl ResizeSink for MemorySink {
    fn append_line(&mut self, line: &str) -> io::Result<()> {
        let mut lines = self
            .lines
            .lock()
            .map_err(|_| io::Error::other("memory sink poisoned"))?;
        lines.push(line.to_string());
        Ok(())
    }
}

/// Sink that discards every line
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ResizeSink for NullSink {
    fn append_line(&mut self, _line: &str) -> io::Result<()> {
        Ok(())
    }
}
