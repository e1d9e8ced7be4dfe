pub mod candidates;
pub mod doctor;
pub mod mention;
pub mod output;

use atlink_core::config::{ConfigLoader, ResolvedConfig};
use atlink_core::host::{LogNotifier, Notifier, RecordingNotifier};
use atlink_core::vault::FsDocumentStore;
use std::path::Path;

/// Load the configuration or exit with status 1.
pub fn load_config(config: Option<&Path>, profile: Option<&str>) -> ResolvedConfig {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    }
}

pub fn open_store(rc: &ResolvedConfig) -> FsDocumentStore {
    if !rc.vault_root.is_dir() {
        eprintln!("Vault root does not exist: {}", rc.vault_root.display());
        std::process::exit(1);
    }
    FsDocumentStore::new(&rc.vault_root)
        .with_exclusions(rc.excluded_folders.clone())
        .with_extension(&rc.linking.default_extension)
}

/// Print collected notices to stderr and forward them to the log.
pub fn flush_notices(notifier: &RecordingNotifier) {
    for notice in notifier.take() {
        let tag = if notice.persistent { "error" } else { "note" };
        eprintln!("{tag}: {}", notice.message);
        LogNotifier.notify(notice);
    }
}
