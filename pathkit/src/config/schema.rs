//! Configuration schema definitions.
//!
//! Every field is optional so that partial configurations from several
//! sources can be merged; accessors on [`Config`] fall back to the built-in
//! defaults.

use serde::{Deserialize, Serialize};

use crate::path::assembler::{
    DEFAULT_FILE_NAME_CAPACITY, DEFAULT_GROWTH_FACTOR, DEFAULT_JOIN_CAPACITY,
};

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use pathkit::config::{AssemblerConfig, Config};
///
/// let config = Config {
///     assembler: Some(AssemblerConfig {
///         join_capacity: Some(512),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
/// assert_eq!(config.join_capacity(), 512);
/// assert_eq!(config.file_name_capacity(), 64);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path assembler settings.
    pub assembler: Option<AssemblerConfig>,

    /// Path resolver settings.
    pub resolver: Option<ResolverConfig>,
}

/// Settings for the growable buffers used by join and extraction.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AssemblerConfig {
    /// Initial capacity, in code units, of the join buffer.
    pub join_capacity: Option<usize>,

    /// Initial capacity, in code units, of the file name buffer.
    pub file_name_capacity: Option<usize>,

    /// Capacity multiplier applied when a buffer runs out of room.
    pub growth_factor: Option<f64>,
}

/// Settings for path resolution.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ResolverConfig {
    /// Reject resolved paths longer than this many bytes.
    pub max_path_len: Option<usize>,
}

impl Config {
    /// Initial join buffer capacity.
    #[must_use]
    pub fn join_capacity(&self) -> usize {
        self.assembler
            .as_ref()
            .and_then(|a| a.join_capacity)
            .unwrap_or(DEFAULT_JOIN_CAPACITY)
    }

    /// Initial file name buffer capacity.
    #[must_use]
    pub fn file_name_capacity(&self) -> usize {
        self.assembler
            .as_ref()
            .and_then(|a| a.file_name_capacity)
            .unwrap_or(DEFAULT_FILE_NAME_CAPACITY)
    }

    /// Buffer growth factor.
    #[must_use]
    pub fn growth_factor(&self) -> f64 {
        self.assembler
            .as_ref()
            .and_then(|a| a.growth_factor)
            .unwrap_or(DEFAULT_GROWTH_FACTOR)
    }

    /// Maximum resolved path length, if limited.
    #[must_use]
    pub fn max_path_len(&self) -> Option<usize> {
        self.resolver.as_ref().and_then(|r| r.max_path_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.join_capacity(), DEFAULT_JOIN_CAPACITY);
        assert_eq!(config.file_name_capacity(), DEFAULT_FILE_NAME_CAPACITY);
        assert!((config.growth_factor() - DEFAULT_GROWTH_FACTOR).abs() < f64::EPSILON);
        assert_eq!(config.max_path_len(), None);
    }

    #[test]
    fn test_parse_full_yaml() {
        let yaml = r"
assembler:
  join_capacity: 128
  file_name_capacity: 32
  growth_factor: 2.0
resolver:
  max_path_len: 4096
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.join_capacity(), 128);
        assert_eq!(config.file_name_capacity(), 32);
        assert!((config.growth_factor() - 2.0).abs() < f64::EPSILON);
        assert_eq!(config.max_path_len(), Some(4096));
    }

    #[test]
    fn test_parse_partial_yaml() {
        let yaml = "assembler:\n  growth_factor: 1.25\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!((config.growth_factor() - 1.25).abs() < f64::EPSILON);
        assert_eq!(config.join_capacity(), DEFAULT_JOIN_CAPACITY);
        assert!(config.resolver.is_none());
    }

    #[test]
    fn test_parse_empty_yaml() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        assert!(serde_yaml::from_str::<Config>("unknown: 1\n").is_err());
        assert!(serde_yaml::from_str::<Config>("assembler:\n  capacity: 1\n").is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let config = Config {
            resolver: Some(ResolverConfig {
                max_path_len: Some(260),
            }),
            ..Default::default()
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}
