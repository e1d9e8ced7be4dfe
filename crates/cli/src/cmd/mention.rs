use atlink_core::buffer::{StringBuffer, TextBuffer};
use atlink_core::config::validate_settings;
use atlink_core::host::{DocumentStore, RecordingNotifier};
use atlink_core::links::StandardLinkFormatter;
use atlink_core::markdown_ast::MarkdownSyntax;
use atlink_core::mention::{LinkSuggest, RankedCandidate};
use dialoguer::{theme::ColorfulTheme, FuzzySelect};
use std::fs;
use std::io::IsTerminal;
use std::path::Path;
use tracing::debug;

use super::output::{candidate_label, print_candidates_table};
use super::{flush_notices, load_config, open_store};
use crate::MentionArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: MentionArgs) {
    let rc = load_config(config, profile);
    crate::logging::init(&rc.logging);

    let store = open_store(&rc);
    let notifier = RecordingNotifier::new();
    let settings = validate_settings(&rc.linking, &store, &notifier);

    let note = args.note.trim_start_matches("./").to_string();
    let content = match store.read(&note) {
        Ok(c) => c,
        Err(e) => {
            flush_notices(&notifier);
            eprintln!("Error reading note: {}", e);
            std::process::exit(1);
        }
    };

    let mut buffer = StringBuffer::new(content);
    let mut suggest =
        LinkSuggest::new(store, StandardLinkFormatter::new(settings.link_style), &notifier);

    // Replay the typed text one keystroke at a time, as an editor would.
    let mut cursor = args.at.map_or_else(|| buffer.end(), |at| buffer.clip(at));
    let mut window = None;
    for c in args.text.chars() {
        cursor = buffer.insert_char(cursor, c);
        window = suggest.on_trigger(cursor, &buffer, &MarkdownSyntax, &settings);
    }

    let Some(window) = window else {
        flush_notices(&notifier);
        eprintln!("No mention is open after typing {:?}", args.text);
        std::process::exit(1);
    };
    debug!(query = %window.query, symbol = %window.symbol, "final mention window");

    let ranked = suggest.get_candidates(&window, &settings);
    if ranked.is_empty() {
        flush_notices(&notifier);
        println!("(no candidates found)");
        std::process::exit(1);
    }

    let chosen = match pick(&ranked, args.select, args.batch) {
        Ok(Some(c)) => c,
        Ok(None) => {
            println!("Cancelled");
            return;
        }
        Err(msg) => {
            flush_notices(&notifier);
            eprintln!("{msg}");
            std::process::exit(1);
        }
    };

    let outcome = match suggest.commit(&chosen.candidate, &mut buffer, &note, &settings) {
        Ok(o) => o,
        Err(e) => {
            flush_notices(&notifier);
            eprintln!("Error inserting link: {}", e);
            std::process::exit(1);
        }
    };
    flush_notices(&notifier);

    if args.dry_run {
        print!("{}", buffer.text());
        return;
    }

    let note_path = rc.vault_root.join(&note);
    if let Err(e) = fs::write(&note_path, buffer.text()) {
        eprintln!("Failed to write {}: {}", note_path.display(), e);
        std::process::exit(1);
    }

    if let Some(created) = &outcome.created {
        println!("Created {created}");
    }
    println!("Linked {} in {}", outcome.link_text, note);
}

/// Choose a candidate by 1-based index, or prompt when running interactively.
fn pick(
    ranked: &[RankedCandidate],
    select: Option<usize>,
    batch: bool,
) -> Result<Option<RankedCandidate>, String> {
    if let Some(n) = select {
        return ranked
            .get(n.wrapping_sub(1))
            .cloned()
            .map(Some)
            .ok_or_else(|| format!("--select {n} is out of range (1-{})", ranked.len()));
    }

    if batch || !std::io::stdin().is_terminal() {
        print_candidates_table(ranked);
        return Err("Error: --select is required in batch mode".to_string());
    }

    let items: Vec<String> = ranked.iter().map(candidate_label).collect();
    let selection = FuzzySelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Link to")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|e| format!("Selector error: {}", e))?;

    Ok(selection.map(|idx| ranked[idx].clone()))
}
