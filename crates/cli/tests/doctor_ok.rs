use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn doctor_reads_provided_config_path() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
vault_root = "/tmp/atlink-missing-vault"

[profiles.default.linking]
leave_open_for_spaces = 2

[[profiles.default.linking.scope_rules]]
folder = "People"
symbol = "@"
"#;
    write_file(&cfg, toml);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("atl"));
    cmd.args(["doctor", "--config", cfg.to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   atl doctor"))
        .stdout(predicate::str::contains("profile: default"))
        .stdout(predicate::str::contains("vault_root: /tmp/atlink-missing-vault"))
        .stdout(predicate::str::contains("linking.scope: @ -> People"))
        .stdout(predicate::str::contains("linking.leave_open_for_spaces: 2"))
        .stdout(predicate::str::contains("WARN vault_root is not a directory"));
}

#[test]
fn doctor_uses_xdg_default_when_present() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("atlink").join("config.toml");
    write_file(
        &cfg_path,
        r#"
version = 1
profile = "default"
[profiles.default]
vault_root = "/tmp/v"
"#,
    );

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("atl"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.arg("doctor");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   atl doctor"))
        .stdout(predicate::str::contains("vault_root: /tmp/v"))
        .stdout(predicate::str::contains("linking.symbols: @"));
}

#[test]
fn doctor_reports_settings_that_do_not_match_the_vault() {
    let tmp = tempdir().unwrap();
    let vault = tmp.path().join("vault");
    fs::create_dir_all(vault.join("People")).unwrap();
    let cfg = tmp.path().join("config.toml");
    let toml = format!(
        r##"
version = 1
[profiles.default]
vault_root = "{}"

[profiles.default.linking]
show_add_new_note = true
add_new_note_template = "Templates/Person"

[[profiles.default.linking.scope_rules]]
folder = "People"

[[profiles.default.linking.scope_rules]]
folder = "Gone"
symbol = "#"
"##,
        vault.display()
    );
    write_file(&cfg, &toml);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("atl"));
    cmd.arg("--config").arg(&cfg).arg("doctor");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("WARN Unable to find folder at path: Gone."))
        .stdout(predicate::str::contains(
            "WARN Unable to find template file at path: Templates/Person.md",
        ))
        .stdout(predicate::str::contains("Unable to find folder at path: People").not());
}
