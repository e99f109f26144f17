#![forbid(unsafe_code)]

//! `tilelog` - Process-wide diagnostic logging for tiling window managers.
//!
//! Three channels, all written to stdout behind a `<date> <time> - ` prefix:
//! - `info`: gated by a verbosity flag
//! - `error`: always emitted, and mirrored into a per-process error log file
//!   that is flushed after every message for post-mortem inspection
//! - `debug`: gated by a 64-bit mask of enabled categories
//!
//! # Example
//!
//! ```
//! use tilelog::{Categories, Logger};
//!
//! let categories = Categories::new(["event", "ipc"]).unwrap();
//! let ipc = categories.bit("ipc").unwrap();
//!
//! let mut logger = Logger::builder()
//!     .categories(categories)
//!     .console(std::io::sink())
//!     .build();
//!
//! logger.add_loglevel("IPC").unwrap();
//! assert!(logger.is_enabled(ipc));
//!
//! logger.info(format_args!("starting\n"));
//! logger.debug(ipc, format_args!("client {} connected\n", 3));
//! logger.error(format_args!("cannot grab keyboard\n"));
//! ```
//!
//! The same operations exist as free functions in [`global`] and as the
//! `info!`, `error!` and `debug!` macros. The setup functions (`install`,
//! `init_logging`, `set_verbosity`, `add_loglevel`, `errorlog_path`,
//! `with_logger`) are also re-exported at the crate root; emission goes
//! through the macros or `global::{info, error, debug}`.
//!
//! # Features
//!
//! - `cli` (default): Enables the `tilelog` command-line tool
//! - `debug-timing`: Adds `<seconds>.<microseconds> - ` after the time prefix

#[macro_use]
mod macros;

pub mod category;
pub mod config;
pub mod fmt;
pub mod global;
pub mod logger;
pub mod output;
pub mod runtime;

mod error;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use category::{Categories, DEFAULT_CATEGORIES, LevelMask};
pub use config::Config;
pub use error::Error;
pub use fmt::TimePrefix;
pub use global::{
    add_loglevel, errorlog_path, init_logging, install, set_verbosity, with_logger,
};
pub use logger::{Logger, LoggerBuilder};
pub use output::{Console, ErrorLog, LogRecord, Output};
pub use runtime::{FixedDir, PathResolver, RuntimeDir, Unresolvable};
