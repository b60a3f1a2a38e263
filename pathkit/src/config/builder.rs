//! Builder for assembling the final configuration.
//!
//! The builder pulls together configuration files, environment variables
//! and programmatic overrides, then validates the result.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builder for loading and merging configuration.
///
/// # Examples
///
/// ```
/// use pathkit::config::{AssemblerConfig, Config, ConfigBuilder};
///
/// let overrides = Config {
///     assembler: Some(AssemblerConfig {
///         growth_factor: Some(2.0),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(overrides)
///     .build()
///     .unwrap();
///
/// assert!((config.growth_factor() - 2.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config_file: Option<PathBuf>,
    config_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder that reads the user config and environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip loading configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skip environment variable overrides.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Load an explicit configuration file on top of the user config.
    ///
    /// The file must exist when [`build`](Self::build) runs.
    #[must_use]
    pub fn with_config_file(mut self, path: impl AsRef<Path>) -> Self {
        self.config_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Look for the user config in `dir` instead of `~/.pathkit`.
    #[must_use]
    pub fn with_config_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.config_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Apply programmatic overrides with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Build the final configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be loaded, an
    /// environment variable cannot be parsed, or the merged result fails
    /// validation.
    pub fn build(self) -> Result<Config> {
        let mut config = if self.skip_files {
            Config::default()
        } else {
            let sources = ConfigLoader::load_all(
                self.config_file.as_deref(),
                self.config_dir.as_deref(),
            )?;
            for source in &sources {
                log::debug!("Loaded configuration from {}", source.path.display());
            }
            ConfigMerger::merge(sources)
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;

        Ok(config)
    }
}
