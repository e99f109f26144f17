//! One-shot front end to the window manager's logger, for scripts and for
//! checking which debug categories a config enables.
//!
//! Usage:
//!   tilelog info <msg>...                 Informational message
//!   tilelog error <msg>...                Error, also appended to the error log
//!   tilelog -d ipc debug ipc <msg>...     Debug message in a category
//!   tilelog -d all categories             List categories and their bits

use clap::Parser;
use std::process::ExitCode;
use tilelog::cli::{Cli, run};

fn main() -> ExitCode {
    run(Cli::parse())
}
