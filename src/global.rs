//! The process-wide logger.
//!
//! One [`Logger`] lives behind a `Mutex` for the life of the process and is
//! never dropped, so its error log stays open until exit. Emission is meant
//! to come from a single thread; the lock exists because statics must be
//! `Sync`, not to order output between threads.
//!
//! Arguments are formatted while the lock is held: a `Display` impl that logs
//! through these functions would deadlock.

use crate::Error;
use crate::category::LevelMask;
use crate::logger::Logger;
use std::fmt;
use std::path::PathBuf;
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

static LOGGER: LazyLock<Mutex<Logger>> = LazyLock::new(|| Mutex::new(Logger::default()));

/// A panic mid-emission leaves the logger usable, so poisoning is ignored.
fn lock() -> MutexGuard<'static, Logger> {
    LOGGER.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Replaces the process-wide logger, e.g. with one built from config. The
/// previous logger is dropped, closing its error log.
pub fn install(logger: Logger) {
    *lock() = logger;
}

/// Runs `f` with exclusive access to the process-wide logger.
pub fn with_logger<R>(f: impl FnOnce(&mut Logger) -> R) -> R {
    f(&mut lock())
}

/// See [`Logger::init_logging`].
pub fn init_logging() {
    lock().init_logging();
}

/// See [`Logger::set_verbosity`].
pub fn set_verbosity(verbose: bool) {
    lock().set_verbosity(verbose);
}

/// See [`Logger::add_loglevel`].
///
/// # Errors
/// Returns [`Error::UnknownCategory`] for an unregistered name.
pub fn add_loglevel(name: &str) -> Result<(), Error> {
    lock().add_loglevel(name)
}

/// Currently enabled debug categories.
#[must_use]
pub fn level_mask() -> LevelMask {
    lock().level_mask()
}

/// Bitmask for a registered category name, for use with [`debug`].
#[must_use]
pub fn category_bit(name: &str) -> Option<u64> {
    lock().categories().bit(name)
}

/// Where the error log is (or was meant to be), for reporting at startup.
#[must_use]
pub fn errorlog_path() -> Option<PathBuf> {
    lock().errorlog_path().map(Into::into)
}

/// See [`Logger::info`]. Usually called through `info!`.
pub fn info(args: fmt::Arguments<'_>) {
    lock().info(args);
}

/// See [`Logger::error`]. Usually called through `error!`.
pub fn error(args: fmt::Arguments<'_>) {
    lock().error(args);
}

/// See [`Logger::debug`]. Usually called through `debug!`.
pub fn debug(bits: u64, args: fmt::Arguments<'_>) {
    lock().debug(bits, args);
}
