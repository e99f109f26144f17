//! Every console line starts with the wall-clock time so interleaved output from
//! a long session can be correlated with user actions after the fact.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

/// Date then time of day, the short forms chrono renders as `MM/DD/YY HH:MM:SS`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%x %X";

/// Placed between the timestamp and the caller's text.
pub const SEPARATOR: &str = " - ";

/// Renders the `<date> <time> - ` prefix shared by every channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimePrefix {
    pattern: String,
}

impl Default for TimePrefix {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl TimePrefix {
    /// A strftime pattern chrono cannot parse would panic on render, so it is
    /// replaced with [`DEFAULT_TIMESTAMP_FORMAT`] here.
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        if is_valid_pattern(pattern) {
            Self {
                pattern: pattern.to_string(),
            }
        } else {
            Self::default()
        }
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Prefix for the current local time.
    #[must_use]
    pub fn render(&self) -> String {
        self.render_at(&Local::now())
    }

    /// Prefix for a fixed instant. With the `debug-timing` feature the epoch
    /// seconds and microseconds follow as a second `secs.micros - ` field.
    #[must_use]
    pub fn render_at<Tz>(&self, at: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let mut prefix = at.format(&self.pattern).to_string();
        prefix.push_str(SEPARATOR);

        #[cfg(feature = "debug-timing")]
        {
            use std::fmt::Write;
            let _ = write!(
                prefix,
                "{}.{:06}{SEPARATOR}",
                at.timestamp(),
                at.timestamp_subsec_micros()
            );
        }

        prefix
    }
}

fn is_valid_pattern(pattern: &str) -> bool {
    StrftimeItems::new(pattern).all(|item| !matches!(item, Item::Error))
}
