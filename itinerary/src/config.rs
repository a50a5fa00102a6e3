//! Run configuration for the command-line tool.

use std::path::PathBuf;

use tracing::debug;

use crate::context::{Context, ContextError};
use crate::locations::{LocationError, LocationTable};
use crate::render::OutputFormat;

/// Environment variable holding the based city code.
pub const BASED_VAR: &str = "BASED";
/// Environment variable overriding the time zone.
pub const TIME_ZONE_VAR: &str = "TIME_ZONE";
/// Environment variable pointing at a JSON location table.
pub const LOCATIONS_FILE_VAR: &str = "LOCATIONS_FILE";
/// Environment variable selecting `text` or `json` output.
pub const OUTPUT_VAR: &str = "OUTPUT";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Configuration parameters for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Based city code, checked when the context is built.
    pub based_city: String,

    /// Explicit IANA time zone; otherwise taken from the based city.
    pub time_zone: Option<String>,

    /// JSON location table; the built-in table is used when absent.
    pub locations_file: Option<PathBuf>,

    pub output: OutputFormat,
}

impl RunConfig {
    /// Create a new configuration with the given based city and defaults
    /// for everything else.
    pub fn new(based_city: impl Into<String>) -> Self {
        Self {
            based_city: based_city.into(),
            time_zone: None,
            locations_file: None,
            output: OutputFormat::default(),
        }
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let based_city = get(BASED_VAR).ok_or(ConfigError::Missing(BASED_VAR))?;
        let output = match get(OUTPUT_VAR) {
            Some(value) => value.parse::<OutputFormat>().map_err(|reason| ConfigError::Invalid {
                var: OUTPUT_VAR,
                reason,
            })?,
            None => OutputFormat::default(),
        };

        let config = Self {
            based_city: based_city.trim().to_string(),
            time_zone: get(TIME_ZONE_VAR).map(|tz| tz.trim().to_string()),
            locations_file: get(LOCATIONS_FILE_VAR).map(PathBuf::from),
            output,
        };
        debug!(?config, "read configuration");
        Ok(config)
    }

    /// The configured location table, or the built-in one.
    pub fn location_table(&self) -> Result<LocationTable, LocationError> {
        match &self.locations_file {
            Some(path) => LocationTable::load(path),
            None => Ok(LocationTable::builtin()),
        }
    }

    /// Build the run context, checking the based city against `table`.
    pub fn context(&self, table: &LocationTable) -> Result<Context, ContextError> {
        Context::with_resolver(&self.based_city, self.time_zone.as_deref(), table)
    }
}
