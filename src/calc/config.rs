//! Configuration of the calculation round trip.
//!
//! # Example
//!
//! ```
//! use opening_optics::calc::CalcConfig;
//!
//! let config = CalcConfig::from_lookup(|_| None).unwrap();
//! assert_eq!(config.calc_path, "calc/shower");
//! ```

use std::env;

use thiserror::Error;

/// Environment variable overriding [`CalcConfig::calc_path`].
pub const CALC_PATH_VAR: &str = "OPENING_CALC_PATH";

const DEFAULT_CALC_PATH: &str = "calc/shower";

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// Where and how calculations are requested.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalcConfig {
    /// Path of the calculation endpoint, relative to the service root.
    pub calc_path: String,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            calc_path: DEFAULT_CALC_PATH.to_string(),
        }
    }
}

impl CalcConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `OPENING_CALC_PATH`: calculation endpoint (optional, default: `calc/shower`)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is empty or not
    /// valid Unicode.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(CALC_PATH_VAR) {
            Ok(value) => Self::from_lookup(|_| Some(value.clone())),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidValue {
                key: CALC_PATH_VAR.to_string(),
                message: "value is not valid Unicode".to_string(),
            }),
        }
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let calc_path = match lookup(CALC_PATH_VAR) {
            Some(value) => non_empty(CALC_PATH_VAR, value)?,
            None => DEFAULT_CALC_PATH.to_string(),
        };
        Ok(Self { calc_path })
    }
}

fn non_empty(key: &str, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim().trim_matches('/');
    if trimmed.is_empty() {
        Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: "value is empty".to_string(),
        })
    } else {
        Ok(trimmed.to_string())
    }
}
