//! Configuration struct definitions.

use crate::fmt::DEFAULT_TIMESTAMP_FORMAT;
use serde::Deserialize;

/// Channel gating and prefix layout.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Informational output on or off.
    pub verbose: bool,
    /// Debug categories to enable; `"all"` enables every one.
    pub levels: Vec<String>,
    /// strftime pattern for the time prefix.
    pub timestamp_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            verbose: true,
            levels: Vec::new(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

/// Error-log file settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ErrorLogConfig {
    /// When false, `init_logging` leaves the logger on stdout only.
    pub enabled: bool,
    /// Directory for the error log instead of the runtime directory. `~` is expanded.
    pub dir: Option<String>,
    /// Write the console's time prefix into the file too.
    pub timestamps: bool,
}

impl Default for ErrorLogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: None,
            timestamps: false,
        }
    }
}
