//! The two sinks a message can reach: the console every channel writes to, and
//! the error log that mirrors the error channel onto disk.

mod console;
mod errorlog;

pub use console::Console;
pub use errorlog::ErrorLog;

use std::fmt;

/// One emission: the rendered time prefix plus the caller's unformatted arguments.
///
/// The message stays as `fmt::Arguments` all the way to the sink so width,
/// precision and escapes are exactly what the caller's `format_args!` produced.
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    pub prefix: &'a str,
    pub args: fmt::Arguments<'a>,
}

/// `Send` so a logger owning its sinks can live in the process-wide holder.
pub trait Output: Send {
    /// Writes one record. No newline is appended.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn write(&mut self, record: &LogRecord<'_>) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&mut self) -> Result<(), crate::Error>;
}
