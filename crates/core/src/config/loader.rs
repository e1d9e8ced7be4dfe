use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use dirs::home_dir;
use thiserror::Error;
use tracing::warn;

use crate::config::types::{ConfigFile, LinkingConfig, LoggingConfig, Profile, ResolvedConfig};
use crate::mention::{LinkSettings, ScopeRule};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("profile '{0}' not found")]
    ProfileNotFound(String),

    #[error("no profiles defined in config")]
    NoProfiles,

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("home directory not available to expand '~'")]
    NoHome,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load `config_path` (or the default location) and resolve one profile.
    pub fn load(
        config_path: Option<&Path>,
        profile_override: Option<&str>,
    ) -> Result<ResolvedConfig, ConfigError> {
        let path = config_path.map_or_else(default_config_path, Path::to_path_buf);
        let origin = path.display().to_string();

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(ConfigError::NotFound(origin)),
            Err(e) => return Err(ConfigError::ReadError(origin, e)),
        };
        Self::load_str(&text, &origin, profile_override)
    }

    /// Resolve a configuration held in memory. `origin` names it in errors.
    pub fn load_str(
        text: &str,
        origin: &str,
        profile_override: Option<&str>,
    ) -> Result<ResolvedConfig, ConfigError> {
        let file: ConfigFile =
            toml::from_str(text).map_err(|e| ConfigError::ParseError(origin.to_string(), e))?;

        match (file.version, file.profiles.is_empty()) {
            (1, false) => {}
            (1, true) => return Err(ConfigError::NoProfiles),
            (v, _) => return Err(ConfigError::BadVersion(v)),
        }

        let name = profile_override.or(file.profile.as_deref()).unwrap_or("default");
        let profile = file
            .profiles
            .get(name)
            .ok_or_else(|| ConfigError::ProfileNotFound(name.to_string()))?;

        resolve(name, profile, &file.logging)
    }
}

fn resolve(
    name: &str,
    profile: &Profile,
    logging: &LoggingConfig,
) -> Result<ResolvedConfig, ConfigError> {
    let vault_root = expand_path(&profile.vault_root)?;

    let file = match &logging.file {
        Some(file) => {
            let raw = file.to_string_lossy().replace("{{vault_root}}", &vault_root.to_string_lossy());
            Some(expand_path(&raw)?)
        }
        None => None,
    };

    Ok(ResolvedConfig {
        active_profile: name.to_string(),
        excluded_folders: profile.excluded_folders.iter().map(PathBuf::from).collect(),
        logging: LoggingConfig { file, ..logging.clone() },
        linking: link_settings(&profile.linking),
        vault_root,
    })
}

/// Build the settings snapshot from the `[linking]` table.
pub fn link_settings(cfg: &LinkingConfig) -> LinkSettings {
    LinkSettings {
        symbols: cfg.symbols.clone(),
        scope_rules: cfg
            .scope_rules
            .iter()
            .map(|r| ScopeRule::new(r.folder.clone(), r.symbol.clone()).with_full_path(r.full_path))
            .collect(),
        include_symbol: cfg.include_symbol,
        show_add_new_note: cfg.show_add_new_note,
        add_new_note_template: cfg.add_new_note_template.clone(),
        add_new_note_directory: cfg.add_new_note_directory.clone(),
        leave_open_for_spaces: coerce_space_budget(cfg.leave_open_for_spaces.as_ref()),
        link_style: cfg.link_style,
        default_extension: cfg.default_extension.trim_start_matches('.').to_string(),
    }
}

/// `leave_open_for_spaces` accepts an integer or a numeric string.
/// Anything else, including negatives, falls back to 0.
pub fn coerce_space_budget(value: Option<&toml::Value>) -> usize {
    let parsed = match value {
        None => return 0,
        Some(toml::Value::Integer(n)) => usize::try_from(*n).ok(),
        Some(toml::Value::String(s)) => s.trim().parse::<usize>().ok(),
        Some(_) => None,
    };
    parsed.unwrap_or_else(|| {
        warn!(?value, "leave_open_for_spaces is not a non-negative integer, using 0");
        0
    })
}

/// `$XDG_CONFIG_HOME/atlink/config.toml`, else `~/.config/atlink/config.toml`.
pub fn default_config_path() -> PathBuf {
    let base = match env::var_os("XDG_CONFIG_HOME") {
        Some(xdg) => PathBuf::from(xdg),
        None => home_dir().unwrap_or_else(|| PathBuf::from("~")).join(".config"),
    };
    base.join("atlink").join("config.toml")
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    shellexpand::full(input)
        .map(|expanded| PathBuf::from(expanded.as_ref()))
        .map_err(|_| ConfigError::NoHome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(toml::Value::Integer(2), 2)]
    #[case(toml::Value::String(" 3 ".into()), 3)]
    #[case(toml::Value::String("lots".into()), 0)]
    #[case(toml::Value::Integer(-1), 0)]
    #[case(toml::Value::Boolean(true), 0)]
    fn space_budget_coercion(#[case] value: toml::Value, #[case] expected: usize) {
        assert_eq!(coerce_space_budget(Some(&value)), expected);
    }

    #[test]
    fn missing_space_budget_is_zero() {
        assert_eq!(coerce_space_budget(None), 0);
    }
}
