//! Consistency checks between linking settings and the vault.

use tracing::warn;

use crate::host::{DocumentStore, Notice, Notifier};
use crate::mention::LinkSettings;

/// Reset settings that point at missing folders or templates.
///
/// Each correction is reported through `notifier`. Never fails: the
/// returned snapshot is always usable.
pub fn validate_settings(
    settings: &LinkSettings,
    store: &dyn DocumentStore,
    notifier: &dyn Notifier,
) -> LinkSettings {
    let mut fixed = settings.clone();

    for rule in &mut fixed.scope_rules {
        let folder = rule.folder.trim().trim_end_matches('/');
        if folder.is_empty() || store.folder_exists(folder) {
            continue;
        }
        warn!(%folder, "scope folder not found, disabling rule");
        notifier.notify(Notice::transient(format!(
            "Unable to find folder at path: {folder}. Please add it if you want to limit links to this folder."
        )));
        rule.folder.clear();
    }

    if fixed.show_add_new_note {
        let template = fixed.add_new_note_template.trim();
        if !template.is_empty() {
            let template_path = format!("{template}.{}", fixed.default_extension);
            if !store.file_exists(&template_path) {
                warn!(path = %template_path, "new-note template not found");
                notifier.notify(Notice::transient(format!(
                    "Unable to find template file at path: {template_path}"
                )));
                fixed.add_new_note_template.clear();
            }
        }

        let directory = fixed.add_new_note_directory.trim().trim_end_matches('/');
        if !directory.is_empty() && !store.folder_exists(directory) {
            warn!(%directory, "new-note directory not found");
            notifier.notify(Notice::transient(format!(
                "Unable to find folder for new notes at path: {directory}. Please add it if you want to create new notes in this folder."
            )));
            fixed.add_new_note_directory.clear();
        }
    }

    fixed
}
