//! Configuration loading and validation.

pub mod loader;
pub mod types;
pub mod validate;

pub use loader::{ConfigError, ConfigLoader, default_config_path};
pub use types::{ConfigFile, LinkingConfig, LoggingConfig, Profile, ResolvedConfig, ScopeRuleConfig};
pub use validate::validate_settings;
