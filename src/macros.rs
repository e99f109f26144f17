//! `println!`-style front ends for the process-wide logger. Like `print!`,
//! none of them appends a newline.

/// Informational message, dropped while verbosity is off.
///
/// ```
/// tilelog::info!("workspace {} created\n", 3);
/// ```
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::global::info(::std::format_args!($($arg)+))
    };
}

/// Error message, always printed and mirrored to the error log.
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::global::error(::std::format_args!($($arg)+))
    };
}

/// Debug message for the categories in `bits`.
///
/// ```
/// let ipc = tilelog::global::category_bit("ipc").unwrap_or(0);
/// tilelog::debug!(ipc, "client {} subscribed\n", 7);
/// ```
#[macro_export]
macro_rules! debug {
    ($bits:expr, $($arg:tt)+) => {
        $crate::global::debug($bits, ::std::format_args!($($arg)+))
    };
}
