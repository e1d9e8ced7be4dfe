use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::links::LinkStyle;
use crate::mention::LinkSettings;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    pub vault_root: String,
    /// Folders to exclude from enumeration (relative to vault_root).
    #[serde(default)]
    pub excluded_folders: Vec<String>,
    #[serde(default)]
    pub linking: LinkingConfig,
}

/// `[profiles.<name>.linking]` as written in the config file.
#[derive(Debug, Deserialize, Clone)]
pub struct LinkingConfig {
    /// Trigger symbols that have no scope rule of their own.
    #[serde(default)]
    pub symbols: Vec<String>,
    #[serde(default)]
    pub scope_rules: Vec<ScopeRuleConfig>,
    #[serde(default = "default_true")]
    pub include_symbol: bool,
    #[serde(default)]
    pub show_add_new_note: bool,
    #[serde(default)]
    pub add_new_note_template: String,
    #[serde(default)]
    pub add_new_note_directory: String,
    /// Integer or string; anything that is not a non-negative number becomes 0.
    #[serde(default)]
    pub leave_open_for_spaces: Option<toml::Value>,
    #[serde(default)]
    pub link_style: LinkStyle,
    #[serde(default = "default_extension")]
    pub default_extension: String,
}

impl Default for LinkingConfig {
    fn default() -> Self {
        Self {
            symbols: Vec::new(),
            scope_rules: Vec::new(),
            include_symbol: default_true(),
            show_add_new_note: false,
            add_new_note_template: String::new(),
            add_new_note_directory: String::new(),
            leave_open_for_spaces: None,
            link_style: LinkStyle::default(),
            default_extension: default_extension(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ScopeRuleConfig {
    #[serde(default)]
    pub folder: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub full_path: bool,
}

fn default_true() -> bool {
    true
}

fn default_extension() -> String {
    "md".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    pub vault_root: PathBuf,
    /// Folders to exclude from enumeration (relative to vault_root).
    pub excluded_folders: Vec<PathBuf>,
    pub logging: LoggingConfig,
    /// Snapshot handed to the mention pipeline.
    pub linking: LinkSettings,
}
