//! TOML configuration: which channels are on, which debug categories are
//! enabled, and where the error log goes.

mod structs;

pub use structs::{ErrorLogConfig, GeneralConfig};

use crate::runtime::FixedDir;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A completely empty config file must still produce a working logger, so
/// every field carries `#[serde(default)]`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub errorlog: ErrorLogConfig,
}

impl Config {
    /// Loads the user's config from the default location; a missing file yields defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be
    /// read, or it contains a TOML syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Loads configuration from an explicit path; a missing file yields defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// # Errors
    /// Returns [`crate::Error::ConfigParse`] on invalid TOML or mistyped fields.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<config_dir>/tilelog/tilelog.toml`, following the XDG base directory layout.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("tilelog").join("tilelog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Resolver for an explicitly configured error-log directory, with `~` expanded.
    #[must_use]
    pub fn errorlog_dir(&self) -> Option<FixedDir> {
        self.errorlog.dir.as_deref().map(|dir| {
            let expanded = shellexpand::tilde(dir);
            FixedDir(PathBuf::from(expanded.as_ref()))
        })
    }
}
