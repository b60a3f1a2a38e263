//! Environment variable handling for configuration overrides.
//!
//! This module provides support for PATHKIT_* environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;
use std::str::FromStr;

/// Overrides `assembler.join_capacity`.
pub const JOIN_CAPACITY_ENV: &str = "PATHKIT_JOIN_CAPACITY";
/// Overrides `assembler.file_name_capacity`.
pub const FILE_NAME_CAPACITY_ENV: &str = "PATHKIT_FILE_NAME_CAPACITY";
/// Overrides `assembler.growth_factor`.
pub const GROWTH_FACTOR_ENV: &str = "PATHKIT_GROWTH_FACTOR";
/// Overrides `resolver.max_path_len`.
pub const MAX_PATH_LEN_ENV: &str = "PATHKIT_MAX_PATH_LEN";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathkit::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value cannot be parsed.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(capacity) =
            Self::parse_var::<usize>(JOIN_CAPACITY_ENV, "a non-negative integer")?
        {
            config
                .assembler
                .get_or_insert_with(Default::default)
                .join_capacity = Some(capacity);
        }

        if let Some(capacity) =
            Self::parse_var::<usize>(FILE_NAME_CAPACITY_ENV, "a non-negative integer")?
        {
            config
                .assembler
                .get_or_insert_with(Default::default)
                .file_name_capacity = Some(capacity);
        }

        if let Some(factor) = Self::parse_var::<f64>(GROWTH_FACTOR_ENV, "a number")? {
            config
                .assembler
                .get_or_insert_with(Default::default)
                .growth_factor = Some(factor);
        }

        if let Some(max) = Self::parse_var::<usize>(MAX_PATH_LEN_ENV, "a positive integer")? {
            config
                .resolver
                .get_or_insert_with(Default::default)
                .max_path_len = Some(max);
        }

        Ok(())
    }

    /// Read and parse a single variable; unset means no override.
    fn parse_var<T: FromStr>(name: &str, expected: &str) -> Result<Option<T>> {
        match env::var(name) {
            Ok(value) => value
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| Error::Validation {
                    field: name.to_string(),
                    message: format!("Must be {expected}, got '{value}'"),
                }),
            Err(_) => Ok(None),
        }
    }
}
