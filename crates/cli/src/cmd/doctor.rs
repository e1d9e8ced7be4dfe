use atlink_core::config::loader::{default_config_path, ConfigLoader};
use atlink_core::config::validate_settings;
use atlink_core::host::RecordingNotifier;
use atlink_core::vault::FsDocumentStore;
use std::path::Path;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    let rc = match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL atl doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    };
    crate::logging::init(&rc.logging);

    println!("OK   atl doctor");
    println!(
        "path: {}",
        config.map_or_else(
            || default_config_path().display().to_string(),
            |p| p.display().to_string()
        )
    );
    println!("profile: {}", rc.active_profile);
    println!("vault_root: {}", rc.vault_root.display());
    for folder in &rc.excluded_folders {
        println!("excluded: {}", folder.display());
    }

    let linking = &rc.linking;
    println!("linking.symbols: {}", linking.trigger_symbols().join(" "));
    for rule in &linking.scope_rules {
        let folder = if rule.is_inert() { "(any)" } else { rule.folder.as_str() };
        let mode = if rule.full_path { " [full path]" } else { "" };
        println!("linking.scope: {} -> {folder}{mode}", rule.symbol());
    }
    println!("linking.include_symbol: {}", linking.include_symbol);
    println!("linking.show_add_new_note: {}", linking.show_add_new_note);
    if linking.show_add_new_note {
        println!("linking.add_new_note_template: {}", linking.add_new_note_template);
        println!("linking.add_new_note_directory: {}", linking.add_new_note_directory);
    }
    println!("linking.leave_open_for_spaces: {}", linking.leave_open_for_spaces);
    println!("linking.link_style: {:?}", linking.link_style);
    println!("linking.default_extension: {}", linking.default_extension);

    if !rc.vault_root.is_dir() {
        println!("WARN vault_root is not a directory, skipping vault checks");
        return;
    }

    let store = FsDocumentStore::new(&rc.vault_root)
        .with_exclusions(rc.excluded_folders.clone())
        .with_extension(&linking.default_extension);
    let notifier = RecordingNotifier::new();
    validate_settings(linking, &store, &notifier);

    let notices = notifier.take();
    if notices.is_empty() {
        println!("OK   linking settings match the vault");
    }
    for notice in notices {
        println!("WARN {}", notice.message);
    }
}
