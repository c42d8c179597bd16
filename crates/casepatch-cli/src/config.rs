//! Configuration resolution
//!
//! Sources, highest precedence first: command-line flags, environment
//! (including a `.env` file), `casepatch.toml`, built-in defaults.

use std::path::{Path, PathBuf};

use casepatch_core::errors::{ExError, ExErrorKind, Result};
use casepatch_core::logging_facility::Profile;
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "casepatch.toml";
pub const DEFAULT_PAYMENTS_DB: &str = ".casepatch/payments.db";
pub const DEFAULT_REFUNDS_DB: &str = ".casepatch/refunds.db";

pub const ENV_PAYMENTS_DB: &str = "CASEPATCH_PAYMENTS_DB";
pub const ENV_REFUNDS_DB: &str = "CASEPATCH_REFUNDS_DB";
pub const ENV_LOG_PROFILE: &str = "CASEPATCH_LOG_PROFILE";
/// Upstream trace id to correlate this invocation with
pub const ENV_TRACE_ID: &str = "CASEPATCH_TRACE_ID";

/// Contents of `casepatch.toml`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub stores: StoresSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoresSection {
    pub payments_db: Option<PathBuf>,
    pub refunds_db: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSection {
    pub profile: Option<String>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            config_error(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| config_error(format!("Invalid configuration: {}", e)))
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub payments_db: Option<PathBuf>,
    pub refunds_db: Option<PathBuf>,
    pub log_profile: Option<String>,
}

/// Fully resolved configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub payments_db: PathBuf,
    pub refunds_db: PathBuf,
    pub profile: Profile,
}

impl Config {
    /// Resolve against the process environment and working directory
    pub fn resolve(overrides: &Overrides) -> Result<Self> {
        Self::resolve_with(overrides, |key| std::env::var(key).ok())
    }

    /// Resolve with an explicit environment lookup
    ///
    /// An explicit `--config` file must exist; the default `casepatch.toml`
    /// is only read when present.
    pub fn resolve_with<F>(overrides: &Overrides, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = match &overrides.config {
            Some(path) => FileConfig::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                FileConfig::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => FileConfig::default(),
        };

        let payments_db = overrides
            .payments_db
            .clone()
            .or_else(|| env(ENV_PAYMENTS_DB).map(PathBuf::from))
            .or(file.stores.payments_db)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PAYMENTS_DB));

        let refunds_db = overrides
            .refunds_db
            .clone()
            .or_else(|| env(ENV_REFUNDS_DB).map(PathBuf::from))
            .or(file.stores.refunds_db)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REFUNDS_DB));

        let profile = match overrides
            .log_profile
            .clone()
            .or_else(|| env(ENV_LOG_PROFILE))
            .or(file.logging.profile)
        {
            Some(name) => name.parse::<Profile>().map_err(config_error)?,
            None => Profile::Development,
        };

        Ok(Self {
            payments_db,
            refunds_db,
            profile,
        })
    }
}

fn config_error(message: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::Config)
        .with_op("config")
        .with_message(message)
}
