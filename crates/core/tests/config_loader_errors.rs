use atlink_core::config::loader::{ConfigError, ConfigLoader};
use tempfile::tempdir;

const ONE_PROFILE: &str = r#"
version = 1
profile = "default"
[profiles.default]
vault_root = "/tmp/vault"
"#;

#[test]
fn missing_file_fails() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("nope/config.toml");
    match ConfigLoader::load(Some(&cfg_path), None).unwrap_err() {
        ConfigError::NotFound(path) => assert!(path.ends_with("nope/config.toml")),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn bad_version_fails() {
    match ConfigLoader::load_str("version = 2\nprofiles = {}\n", "inline", None).unwrap_err() {
        ConfigError::BadVersion(2) => {}
        other => panic!("expected BadVersion(2), got {other:?}"),
    }
}

#[test]
fn no_profiles_fails() {
    match ConfigLoader::load_str("version = 1\nprofiles = {}\n", "inline", None).unwrap_err() {
        ConfigError::NoProfiles => {}
        other => panic!("expected NoProfiles, got {other:?}"),
    }
}

#[test]
fn profile_not_found_fails() {
    match ConfigLoader::load_str(ONE_PROFILE, "inline", Some("missing")).unwrap_err() {
        ConfigError::ProfileNotFound(p) if p == "missing" => {}
        other => panic!("expected ProfileNotFound(\"missing\"), got {other:?}"),
    }
}

#[test]
fn selected_profile_must_exist_too() {
    let toml = ONE_PROFILE.replace(r#"profile = "default""#, r#"profile = "work""#);
    match ConfigLoader::load_str(&toml, "inline", None).unwrap_err() {
        ConfigError::ProfileNotFound(p) if p == "work" => {}
        other => panic!("expected ProfileNotFound(\"work\"), got {other:?}"),
    }
}

#[test]
fn unknown_link_style_fails_to_parse() {
    let toml = format!("{ONE_PROFILE}[profiles.default.linking]\nlink_style = \"html\"\n");
    match ConfigLoader::load_str(&toml, "inline", None).unwrap_err() {
        ConfigError::ParseError(origin, _) if origin == "inline" => {}
        other => panic!("expected ParseError, got {other:?}"),
    }
}

#[test]
fn missing_vault_root_fails_to_parse() {
    let toml = "version = 1\n[profiles.default]\nexcluded_folders = []\n";
    assert!(matches!(
        ConfigLoader::load_str(toml, "inline", None).unwrap_err(),
        ConfigError::ParseError(..)
    ));
}
