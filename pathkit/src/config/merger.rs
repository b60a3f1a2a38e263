//! Configuration merging and precedence handling.
//!
//! Sources are merged field by field: a value set in a higher-precedence
//! source replaces the lower one, unset values fall through.

use crate::config::loader::ConfigSource;
use crate::config::schema::{AssemblerConfig, Config, ResolverConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use pathkit::config::{Config, ConfigMerger, ResolverConfig};
///
/// let low = Config {
///     resolver: Some(ResolverConfig { max_path_len: Some(4096) }),
///     ..Default::default()
/// };
/// let high = Config {
///     resolver: Some(ResolverConfig { max_path_len: Some(260) }),
///     ..Default::default()
/// };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.max_path_len(), Some(260));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    pub fn merge_into(target: &mut Config, source: &Config) {
        if let Some(ref assembler) = source.assembler {
            Self::merge_assembler(target.assembler.get_or_insert_with(Default::default), assembler);
        }

        if let Some(ref resolver) = source.resolver {
            Self::merge_resolver(target.resolver.get_or_insert_with(Default::default), resolver);
        }
    }

    fn merge_assembler(target: &mut AssemblerConfig, source: &AssemblerConfig) {
        if source.join_capacity.is_some() {
            target.join_capacity = source.join_capacity;
        }
        if source.file_name_capacity.is_some() {
            target.file_name_capacity = source.file_name_capacity;
        }
        if source.growth_factor.is_some() {
            target.growth_factor = source.growth_factor;
        }
    }

    fn merge_resolver(target: &mut ResolverConfig, source: &ResolverConfig) {
        if source.max_path_len.is_some() {
            target.max_path_len = source.max_path_len;
        }
    }
}
