//! Logger configuration from tilelog config files.

use super::{Logger, LoggerBuilder};
use crate::config::Config;

impl LoggerBuilder {
    /// Applies verbosity, debug levels, prefix format and error-log settings
    /// from `config`. Settings not covered by the config (console, category
    /// registry) keep whatever the builder already has.
    #[must_use]
    pub fn config(self, config: &Config) -> Self {
        let mut builder = self
            .verbose(config.general.verbose)
            .timestamp_format(&config.general.timestamp_format)
            .errorlog(config.errorlog.enabled)
            .errorlog_timestamps(config.errorlog.timestamps);

        for level in &config.general.levels {
            builder = builder.level(level);
        }

        if let Some(dir) = config.errorlog_dir() {
            builder = builder.resolver(dir);
        }

        builder
    }
}

impl Logger {
    /// Creates a logger from the default config file, falling back to defaults
    /// when it is missing or unreadable.
    #[must_use]
    pub fn from_default_config() -> Self {
        let config = Config::load().unwrap_or_default();
        Self::from_config(&config)
    }

    /// Creates a stdout logger from a loaded config.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        LoggerBuilder::new().config(config).build()
    }
}
