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

/// Returns (config path, vault root).
fn setup(root: &Path, linking: &str) -> (PathBuf, PathBuf) {
    let vault = root.join("vault");
    write_file(&vault.join("People/Brandon.md"), "---\naliases: [Sando]\n---\n");
    write_file(&vault.join("Daily/today.md"), "Met ");

    let cfg = root.join("config.toml");
    let toml = format!(
        "version = 1\n[profiles.default]\nvault_root = \"{}\"\n\n[profiles.default.linking]\n{linking}\n",
        vault.display()
    );
    write_file(&cfg, &toml);
    (cfg, vault)
}

fn atl(cfg: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("atl"));
    cmd.arg("--config").arg(cfg);
    cmd
}

#[test]
fn inserts_alias_link_into_note() {
    let tmp = tempdir().unwrap();
    let (cfg, vault) = setup(tmp.path(), "");

    atl(&cfg)
        .args(["mention", "--note", "Daily/today.md", "--type", "@sando", "--select", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Linked [[People/Brandon|@Sando]] in Daily/today.md"));

    let note = fs::read_to_string(vault.join("Daily/today.md")).unwrap();
    assert_eq!(note, "Met [[People/Brandon|@Sando]]");
}

#[test]
fn dry_run_prints_without_writing() {
    let tmp = tempdir().unwrap();
    let (cfg, vault) = setup(tmp.path(), "include_symbol = false");

    atl(&cfg)
        .args(["mention", "--note", "Daily/today.md", "--type", "@sando", "--select", "1"])
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Met [[People/Brandon|Sando]]"));

    let note = fs::read_to_string(vault.join("Daily/today.md")).unwrap();
    assert_eq!(note, "Met ");
}

#[test]
fn typing_at_a_position_in_the_middle() {
    let tmp = tempdir().unwrap();
    let (cfg, vault) = setup(tmp.path(), "");
    write_file(&vault.join("Daily/today.md"), "Met \ntoday\n");

    atl(&cfg)
        .args(["mention", "--note", "Daily/today.md", "--at", "1:5", "--type", "@sando"])
        .args(["--select", "1"])
        .assert()
        .success();

    let note = fs::read_to_string(vault.join("Daily/today.md")).unwrap();
    assert_eq!(note, "Met [[People/Brandon|@Sando]]\ntoday\n");
}

#[test]
fn create_new_writes_the_new_note() {
    let tmp = tempdir().unwrap();
    let (cfg, vault) = setup(
        tmp.path(),
        "show_add_new_note = true\nadd_new_note_directory = \"People\"\nadd_new_note_template = \"Templates/Person\"",
    );
    write_file(&vault.join("Templates/Person.md"), "# {{title}}\n");

    atl(&cfg)
        .args(["mention", "--note", "Daily/today.md", "--type", "@Carl", "--select", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created People/Carl.md"));

    assert_eq!(fs::read_to_string(vault.join("People/Carl.md")).unwrap(), "# Carl\n");
    let note = fs::read_to_string(vault.join("Daily/today.md")).unwrap();
    assert_eq!(note, "Met [[People/Carl|@Carl]]");
}

#[test]
fn batch_mode_requires_select() {
    let tmp = tempdir().unwrap();
    let (cfg, _) = setup(tmp.path(), "");

    atl(&cfg)
        .args(["mention", "--note", "Daily/today.md", "--type", "@bran", "--batch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--select is required in batch mode"));
}

#[test]
fn plain_typing_does_not_open_a_mention() {
    let tmp = tempdir().unwrap();
    let (cfg, _) = setup(tmp.path(), "");

    atl(&cfg)
        .args(["mention", "--note", "Daily/today.md", "--type", "hello", "--select", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No mention is open"));
}

#[test]
fn missing_note_fails() {
    let tmp = tempdir().unwrap();
    let (cfg, _) = setup(tmp.path(), "");

    atl(&cfg)
        .args(["mention", "--note", "Nope.md", "--type", "@a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error reading note"));
}

#[test]
fn name_match_on_aliased_note_still_lists_both_entries() {
    let tmp = tempdir().unwrap();
    let (cfg, vault) = setup(tmp.path(), "");

    // The alias entry matches through the file name and comes first.
    atl(&cfg)
        .args(["mention", "--note", "Daily/today.md", "--type", "@bran", "--select", "2"])
        .assert()
        .success();

    let note = fs::read_to_string(vault.join("Daily/today.md")).unwrap();
    assert_eq!(note, "Met [[People/Brandon|@Brandon]]");
}
