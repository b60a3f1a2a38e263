//! Configuration system for pathkit.
//!
//! This module provides layered configuration for the path operations:
//! - YAML configuration files (user config and an explicit file)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of the merged result
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`PATHKIT_*`)
//! 3. Explicit file (via `ConfigBuilder::with_config_file`)
//! 4. User config (`~/.pathkit/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! Basic usage with defaults:
//!
//! ```no_run
//! use pathkit::config::ConfigBuilder;
//! use pathkit::PathJoiner;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! let joiner = PathJoiner::from_config(&config);
//! let joined = joiner.join(Path::new("src"), Path::new("lib.rs")).unwrap();
//! ```
//!
//! Loading an explicit file:
//!
//! ```no_run
//! use pathkit::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new()
//!     .skip_env()
//!     .with_config_file("/etc/pathkit.yaml")
//!     .build()
//!     .unwrap();
//! println!("join buffer starts at {} units", config.join_capacity());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{AssemblerConfig, Config, ResolverConfig};
pub use validator::ConfigValidator;
