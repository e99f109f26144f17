//! The explicit holder for all logging state: verbosity, the debug level mask,
//! the console and the error log. The process-wide functions in
//! [`crate::global`] wrap exactly one of these.

mod builder;
mod from_config;

pub use builder::LoggerBuilder;

use crate::Error;
use crate::category::{Categories, LevelMask};
use crate::fmt::TimePrefix;
use crate::output::{Console, ErrorLog, LogRecord, Output};
use crate::runtime::PathResolver;
use std::fmt;
use std::path::Path;

/// Base name handed to the [`PathResolver`] for the error log.
pub const ERRORLOG_NAME: &str = "errorlog";

/// Emits on three channels: `info` (gated by verbosity), `error` (always,
/// mirrored to the error log) and `debug` (gated by the level mask).
///
/// Emitters never fail and never append a newline; the caller's format
/// string carries one when wanted.
pub struct Logger {
    categories: Categories,
    mask: LevelMask,
    verbose: bool,
    prefix: TimePrefix,
    console: Console,
    errorlog: ErrorLog,
    errorlog_enabled: bool,
    resolver: Box<dyn PathResolver>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("mask", &self.mask)
            .field("verbose", &self.verbose)
            .field("prefix", &self.prefix)
            .field("errorlog", &self.errorlog)
            .finish_non_exhaustive()
    }
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Opens the error log at the resolver's path for `"errorlog"`, truncating it.
    ///
    /// If no path can be resolved, one error is emitted to the console and the
    /// logger stays on stdout only. If the open fails, the path is kept for
    /// reporting but nothing is mirrored. Calling this again reinitializes: the
    /// previous stream is closed before the new one is opened.
    pub fn init_logging(&mut self) {
        if !self.errorlog_enabled {
            return;
        }

        let Some(path) = self.resolver.resolve(ERRORLOG_NAME) else {
            self.errorlog.close();
            self.error(format_args!("Could not initialize errorlog\n"));
            return;
        };

        self.errorlog.open(path);
    }

    /// Takes effect on the next `info`; errors and debug output are unaffected.
    pub const fn set_verbosity(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Enables a debug category by name, case-insensitively. `"all"` sets
    /// every bit. Repeating a name is a no-op.
    ///
    /// # Errors
    /// Returns [`Error::UnknownCategory`] for a name not in the registry; the
    /// mask is left unchanged. Callers that want silent behavior ignore it.
    pub fn add_loglevel(&mut self, name: &str) -> Result<(), Error> {
        let bits = self.categories.resolve(name)?;
        self.mask.enable(bits);
        Ok(())
    }

    /// Informational message, dropped while verbosity is off.
    pub fn info(&mut self, args: fmt::Arguments<'_>) {
        if !self.verbose {
            return;
        }
        self.emit(args, false);
    }

    /// Error message: always printed, and appended and flushed to the error
    /// log when one is open.
    pub fn error(&mut self, args: fmt::Arguments<'_>) {
        self.emit(args, true);
    }

    /// Debug message tagged with category `bits`; printed only if one of them
    /// is enabled. Verbosity does not apply.
    pub fn debug(&mut self, bits: u64, args: fmt::Arguments<'_>) {
        if !self.mask.admits(bits) {
            return;
        }
        self.emit(args, false);
    }

    fn emit(&mut self, args: fmt::Arguments<'_>, mirror: bool) {
        let prefix = self.prefix.render();
        let record = LogRecord {
            prefix: &prefix,
            args,
        };

        let _ = self.console.write(&record);
        if mirror {
            let _ = self.errorlog.write(&record);
        }
    }

    /// Flushes the console; the error log is already flushed per record.
    ///
    /// # Errors
    /// Returns the first I/O error from either sink.
    pub fn flush(&mut self) -> Result<(), Error> {
        self.console.flush()?;
        self.errorlog.flush()
    }

    /// Path of the error log, set once resolution succeeded even if the open failed.
    #[must_use]
    pub fn errorlog_path(&self) -> Option<&Path> {
        self.errorlog.path()
    }

    #[must_use]
    pub const fn is_errorlog_open(&self) -> bool {
        self.errorlog.is_open()
    }

    #[must_use]
    pub const fn level_mask(&self) -> LevelMask {
        self.mask
    }

    /// Whether a debug message tagged with `bits` would be printed.
    #[must_use]
    pub const fn is_enabled(&self, bits: u64) -> bool {
        self.mask.admits(bits)
    }

    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    #[must_use]
    pub const fn categories(&self) -> &Categories {
        &self.categories
    }

    #[must_use]
    pub const fn time_prefix(&self) -> &TimePrefix {
        &self.prefix
    }
}
