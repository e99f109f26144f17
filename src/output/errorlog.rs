//! On-disk mirror of the error channel.
//!
//! The file is truncated when opened and flushed after every record, so the
//! last messages before a crash survive for post-mortem inspection. It is
//! never closed explicitly; dropping the owning logger (or process exit)
//! releases the descriptor.

use super::{LogRecord, Output};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Error-log sink: an optional path and an optional open stream.
///
/// The path outlives a failed open so the host can still report where the
/// log was supposed to be.
#[derive(Debug, Default)]
pub struct ErrorLog {
    path: Option<PathBuf>,
    file: Option<BufWriter<File>>,
    /// Mirror the console's time prefix into the file too.
    timestamps: bool,
}

impl ErrorLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn timestamps(mut self, enabled: bool) -> Self {
        self.timestamps = enabled;
        self
    }

    /// Truncates (or creates) `path` and keeps the stream open. Any previously
    /// open stream is closed first. Returns whether the open succeeded; the
    /// path is retained either way.
    pub fn open(&mut self, path: PathBuf) -> bool {
        // Flush and close before truncating, in case `path` is the same file.
        self.file = None;
        self.file = File::create(&path).ok().map(BufWriter::new);
        self.path = Some(path);
        self.file.is_some()
    }

    /// Forgets the path and closes the stream.
    pub fn close(&mut self) {
        self.file = None;
        self.path = None;
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.file.is_some()
    }

    #[must_use]
    pub const fn has_timestamps(&self) -> bool {
        self.timestamps
    }
}

impl Output for ErrorLog {
    fn write(&mut self, record: &LogRecord<'_>) -> Result<(), crate::Error> {
        let Some(file) = self.file.as_mut() else {
            return Ok(());
        };

        if self.timestamps {
            file.write_all(record.prefix.as_bytes())?;
        }
        file.write_fmt(record.args)?;
        file.flush()?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), crate::Error> {
        if let Some(file) = self.file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }
}
