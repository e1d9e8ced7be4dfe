use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Vault with a few notes plus a config pointing at it. Returns the config path.
fn setup(root: &Path, linking: &str) -> PathBuf {
    let vault = root.join("vault");
    write_file(&vault.join("Alice.md"), "");
    write_file(&vault.join("People/Brandon.md"), "---\naliases: [Sando]\n---\n");
    write_file(&vault.join("Tags/project-x.md"), "");

    let cfg = root.join("config.toml");
    let toml = format!(
        "version = 1\n[profiles.default]\nvault_root = \"{}\"\n\n[profiles.default.linking]\n{linking}\n",
        vault.display()
    );
    write_file(&cfg, &toml);
    cfg
}

#[test]
fn lists_ranked_candidates_as_json() {
    let tmp = tempdir().unwrap();
    let cfg = setup(tmp.path(), "");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("atl"));
    cmd.arg("--config").arg(&cfg).args(["candidates", "--query", "sando", "--format", "json"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""title": "Sando""#))
        .stdout(predicate::str::contains(r#""path": "People/Brandon.md""#))
        .stdout(predicate::str::contains("Alice").not());
}

#[test]
fn table_lists_everything_for_empty_query() {
    let tmp = tempdir().unwrap();
    let cfg = setup(tmp.path(), "");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("atl"));
    cmd.arg("--config").arg(&cfg).arg("candidates");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("project-x"))
        .stdout(predicate::str::contains("Alice"))
        .stdout(predicate::str::contains("-- 4 candidates --"));
}

#[test]
fn scoped_symbol_lists_its_folder_only() {
    let tmp = tempdir().unwrap();
    let cfg = setup(
        tmp.path(),
        "[[profiles.default.linking.scope_rules]]\nfolder = \"Tags\"\nsymbol = \"#\"",
    );

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("atl"));
    cmd.arg("--config").arg(&cfg).args(["candidates", "--symbol", "#", "--format", "quiet"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Tags/project-x.md"))
        .stdout(predicate::str::contains("People/").not());
}

#[test]
fn create_new_entry_is_offered_last() {
    let tmp = tempdir().unwrap();
    let cfg = setup(tmp.path(), "show_add_new_note = true\nadd_new_note_directory = \"People\"");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("atl"));
    cmd.arg("--config").arg(&cfg).args(["candidates", "--query", "Zed", "--format", "quiet"]);
    cmd.assert().success().stdout(predicate::str::ends_with("People/Zed.md\n"));
}

#[test]
fn unknown_symbol_is_rejected() {
    let tmp = tempdir().unwrap();
    let cfg = setup(tmp.path(), "");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("atl"));
    cmd.arg("--config").arg(&cfg).args(["candidates", "--symbol", "%"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("'%' is not a configured trigger symbol"));
}
