//! Stepwise construction so tests and embedders can replace the console,
//! the category registry or the path resolver without touching the rest.

use super::Logger;
use crate::category::{Categories, LevelMask};
use crate::fmt::{DEFAULT_TIMESTAMP_FORMAT, TimePrefix};
use crate::output::{Console, ErrorLog};
use crate::runtime::{PathResolver, RuntimeDir};
use std::io::Write;

/// Builder for [`Logger`].
pub struct LoggerBuilder {
    categories: Categories,
    verbose: bool,
    levels: Vec<String>,
    timestamp_format: String,
    console: Option<Console>,
    resolver: Option<Box<dyn PathResolver>>,
    errorlog_enabled: bool,
    errorlog_timestamps: bool,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Verbose, no debug categories, stdout console, runtime-dir error log.
    #[must_use]
    pub fn new() -> Self {
        Self {
            categories: Categories::default(),
            verbose: true,
            levels: Vec::new(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            console: None,
            resolver: None,
            errorlog_enabled: true,
            errorlog_timestamps: false,
        }
    }

    /// Replaces the default category registry.
    #[must_use]
    pub fn categories(mut self, categories: Categories) -> Self {
        self.categories = categories;
        self
    }

    #[must_use]
    pub const fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Debug category enabled at build time. Unknown names are reported on the
    /// built logger's error channel.
    #[must_use]
    pub fn level(mut self, name: impl Into<String>) -> Self {
        self.levels.push(name.into());
        self
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    /// Sends console output to `writer` instead of stdout.
    #[must_use]
    pub fn console(mut self, writer: impl Write + Send + 'static) -> Self {
        self.console = Some(Console::to_writer(writer));
        self
    }

    #[must_use]
    pub fn resolver(mut self, resolver: impl PathResolver + 'static) -> Self {
        self.resolver = Some(Box::new(resolver));
        self
    }

    /// With `false`, `init_logging` never opens a file.
    #[must_use]
    pub const fn errorlog(mut self, enabled: bool) -> Self {
        self.errorlog_enabled = enabled;
        self
    }

    #[must_use]
    pub const fn errorlog_timestamps(mut self, enabled: bool) -> Self {
        self.errorlog_timestamps = enabled;
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        let mut logger = Logger {
            categories: self.categories,
            mask: LevelMask::NONE,
            verbose: self.verbose,
            prefix: TimePrefix::new(&self.timestamp_format),
            console: self.console.unwrap_or_default(),
            errorlog: ErrorLog::new().timestamps(self.errorlog_timestamps),
            errorlog_enabled: self.errorlog_enabled,
            resolver: self
                .resolver
                .unwrap_or_else(|| Box::new(RuntimeDir::default())),
        };

        for name in &self.levels {
            if let Err(e) = logger.add_loglevel(name) {
                logger.error(format_args!("Ignoring {e}\n"));
            }
        }

        logger
    }
}
