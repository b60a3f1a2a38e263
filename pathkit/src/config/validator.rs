//! Configuration validation.
//!
//! This module checks that merged configuration values are usable before
//! they reach the path operations.

use crate::config::schema::{AssemblerConfig, Config, ResolverConfig};
use crate::error::{Error, Result};

/// Largest accepted initial buffer capacity, in code units.
pub const MAX_CAPACITY_HINT: usize = 1 << 20;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use pathkit::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error naming the first invalid field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref assembler) = config.assembler {
            Self::validate_assembler(assembler)?;
        }

        if let Some(ref resolver) = config.resolver {
            Self::validate_resolver(resolver)?;
        }

        Ok(())
    }

    fn validate_assembler(assembler: &AssemblerConfig) -> Result<()> {
        if let Some(capacity) = assembler.join_capacity {
            Self::validate_capacity("assembler.join_capacity", capacity)?;
        }

        if let Some(capacity) = assembler.file_name_capacity {
            Self::validate_capacity("assembler.file_name_capacity", capacity)?;
        }

        if let Some(factor) = assembler.growth_factor {
            if !factor.is_finite() || factor <= 1.0 {
                return Err(Error::Validation {
                    field: "assembler.growth_factor".into(),
                    message: format!("Growth factor must be a finite number greater than 1.0, got {factor}"),
                });
            }
        }

        Ok(())
    }

    fn validate_capacity(field: &str, capacity: usize) -> Result<()> {
        if capacity > MAX_CAPACITY_HINT {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("Capacity must be at most {MAX_CAPACITY_HINT}, got {capacity}"),
            });
        }
        Ok(())
    }

    fn validate_resolver(resolver: &ResolverConfig) -> Result<()> {
        if resolver.max_path_len == Some(0) {
            return Err(Error::Validation {
                field: "resolver.max_path_len".into(),
                message: "Maximum path length must be greater than 0".into(),
            });
        }
        Ok(())
    }
}
