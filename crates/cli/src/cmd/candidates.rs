use atlink_core::buffer::Position;
use atlink_core::config::validate_settings;
use atlink_core::host::RecordingNotifier;
use atlink_core::links::StandardLinkFormatter;
use atlink_core::mention::{LinkSuggest, TriggerWindow};
use std::path::Path;

use super::output::{print_candidates_json, print_candidates_quiet, print_candidates_table};
use super::{flush_notices, load_config, open_store};
use crate::{CandidatesArgs, OutputFormat};

pub fn run(config: Option<&Path>, profile: Option<&str>, args: CandidatesArgs) {
    let rc = load_config(config, profile);
    crate::logging::init(&rc.logging);

    let store = open_store(&rc);
    let notifier = RecordingNotifier::new();
    let settings = validate_settings(&rc.linking, &store, &notifier);

    if !settings.trigger_symbols().contains(&args.symbol) {
        eprintln!("'{}' is not a configured trigger symbol", args.symbol);
        eprintln!("configured: {}", settings.trigger_symbols().join(" "));
        std::process::exit(1);
    }

    let suggest = LinkSuggest::new(store, StandardLinkFormatter::new(settings.link_style), &notifier);
    let window = TriggerWindow {
        start: Position::default(),
        end: Position::default(),
        query: args.query,
        symbol: args.symbol,
    };
    let mut ranked = suggest.get_candidates(&window, &settings);
    if let Some(limit) = args.limit {
        ranked.truncate(limit);
    }
    flush_notices(&notifier);

    match args.format {
        OutputFormat::Table => print_candidates_table(&ranked),
        OutputFormat::Json => print_candidates_json(&ranked),
        OutputFormat::Quiet => print_candidates_quiet(&ranked),
    }
}
