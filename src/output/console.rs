//! Standard output by default; tests and embedders swap in any `Write`.

use super::{LogRecord, Output};
use std::fmt;
use std::io::{self, Write};

/// Console sink. Every channel writes here with the time prefix.
pub struct Console {
    writer: Box<dyn Write + Send>,
}

impl Default for Console {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}

impl Console {
    #[must_use]
    pub fn stdout() -> Self {
        Self::to_writer(io::stdout())
    }

    #[must_use]
    pub fn to_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Box::new(writer),
        }
    }
}

impl Output for Console {
    // Relies on the writer's own buffering; stdout is line-buffered.
    fn write(&mut self, record: &LogRecord<'_>) -> Result<(), crate::Error> {
        self.writer.write_all(record.prefix.as_bytes())?;
        self.writer.write_fmt(record.args)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), crate::Error> {
        self.writer.flush()?;
        Ok(())
    }
}
