//! CLI module for tilelog.
//!
//! This module provides the command-line interface using Clap. Each
//! invocation configures the process-wide logger the way the window manager
//! does at startup, opens the error log, and emits one message.

use crate::config::Config;
use crate::logger::Logger;
use crate::{global, init_logging};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// tilelog - Emit window manager diagnostics from the command line.
#[derive(Debug, Parser)]
#[command(
    name = "tilelog",
    version,
    about = "Emit window manager diagnostics from the command line"
)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress informational messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable a debug category ("all" for every one); repeatable or comma-separated
    #[arg(short = 'd', long = "debug-level", value_name = "NAME", value_delimiter = ',')]
    pub levels: Vec<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log an informational message.
    Info {
        /// Message words, joined with spaces
        #[arg(required = true)]
        msg: Vec<String>,
    },
    /// Log an error; it is also written to the error log.
    Error {
        /// Message words, joined with spaces
        #[arg(required = true)]
        msg: Vec<String>,
    },
    /// Log a debug message in a category.
    Debug {
        /// Category the message belongs to
        category: String,
        /// Message words, joined with spaces
        #[arg(required = true)]
        msg: Vec<String>,
    },
    /// List debug categories and their mask bits.
    Categories,
}

/// Runs one parsed invocation against the process-wide logger.
#[must_use]
pub fn run(cli: Cli) -> ExitCode {
    let loaded = cli
        .config
        .as_deref()
        .map_or_else(Config::load, Config::load_from);
    let config = match loaded {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    global::install(Logger::from_config(&config));
    if cli.quiet {
        global::set_verbosity(false);
    }
    for level in &cli.levels {
        if let Err(e) = global::add_loglevel(level) {
            error!("{e}\n");
        }
    }

    if matches!(cli.command, Command::Categories) {
        return print_categories();
    }

    init_logging();
    if let Some(path) = global::errorlog_path() {
        info!("errorlog at {}\n", path.display());
    }

    match cli.command {
        Command::Info { msg } => info!("{}\n", msg.join(" ")),
        Command::Error { msg } => error!("{}\n", msg.join(" ")),
        Command::Debug { category, msg } => {
            let Some(bit) = global::category_bit(&category) else {
                error!("Unknown debug category: {category}\n");
                return ExitCode::FAILURE;
            };
            debug!(bit, "{}\n", msg.join(" "));
        }
        Command::Categories => {}
    }

    ExitCode::SUCCESS
}

/// Command output, not a log line: no prefix and independent of verbosity.
fn print_categories() -> ExitCode {
    let lines = global::with_logger(|logger| {
        let mask = logger.level_mask();
        logger
            .categories()
            .names()
            .enumerate()
            .map(|(index, name)| {
                let bit = crate::category::bit_for_index(index);
                let state = if mask.admits(bit) { "on" } else { "off" };
                format!("{name:<12} {bit:#018x} {state}")
            })
            .collect::<Vec<_>>()
    });

    let mut out = io::stdout().lock();
    for line in lines {
        if writeln!(out, "{line}").is_err() {
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
