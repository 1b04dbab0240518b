//! Runtime configuration.
//!
//! Values come from the environment (a `.env` file is loaded by the binary
//! via `dotenv`) and are overridden by command line flags.

use crate::output::Format;
use crate::resolver::Mode;
use clap::ValueEnum;
use std::error::Error;
use std::path::PathBuf;

/// Host overflow policy: `wrapping` or `strict`.
pub const ENV_MODE: &str = "CIDR_RESOLVER_MODE";
/// Output format: `text`, `csv` or `json`.
pub const ENV_FORMAT: &str = "CIDR_RESOLVER_FORMAT";
/// Path of the log4rs YAML file.
pub const ENV_LOG_CONFIG: &str = "CIDR_RESOLVER_LOG_CONFIG";

pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub mode: Mode,
    pub format: Format,
    pub log_config: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mode: Mode::default(),
            format: Format::default(),
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, unset keys keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(mode) = lookup(ENV_MODE) {
            config.mode = mode.parse().map_err(|e| format!("{ENV_MODE}: {e}"))?;
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            config.format =
                Format::from_str(format.trim(), true).map_err(|e| format!("{ENV_FORMAT}: {e}"))?;
        }
        if let Some(path) = lookup(ENV_LOG_CONFIG).filter(|p| !p.trim().is_empty()) {
            config.log_config = PathBuf::from(path);
        }

        Ok(config)
    }

    /// Apply command line overrides.
    pub fn with_overrides(mut self, strict: bool, format: Option<Format>) -> Config {
        if strict {
            self.mode = Mode::Strict;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}
