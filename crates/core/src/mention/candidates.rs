//! Candidate index: documents and aliases linkable from the active symbol.

use crate::host::DocumentMeta;

use super::settings::LinkSettings;
use super::types::Candidate;

/// How a document relates to the scope rules of the active symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// No rule restricts the active symbol.
    Unrestricted,
    /// Matched a rule; `full_path` is that rule's display mode.
    Allowed { full_path: bool },
    Excluded,
}

fn scope_of(doc: &DocumentMeta, settings: &LinkSettings, symbol: &str) -> Scope {
    let mut rules = settings.active_rules(symbol).peekable();
    if rules.peek().is_none() {
        return Scope::Unrestricted;
    }
    rules
        .find(|rule| rule.matches_path(&doc.path))
        .map_or(Scope::Excluded, |rule| Scope::Allowed { full_path: rule.full_path })
}

/// Build the candidate list for `active_symbol`.
///
/// Each included document yields one candidate per alias followed by one
/// for its bare name, in the documents' enumeration order.
pub fn enumerate_candidates(
    documents: &[DocumentMeta],
    settings: &LinkSettings,
    active_symbol: &str,
) -> Vec<Candidate> {
    let mut candidates = Vec::with_capacity(documents.len());

    for doc in documents {
        let full_path = match scope_of(doc, settings, active_symbol) {
            Scope::Excluded => continue,
            Scope::Unrestricted => false,
            Scope::Allowed { full_path } => full_path,
        };
        let display_name = if full_path { doc.path_without_extension() } else { doc.stem() };

        for alias in doc.aliases.values() {
            candidates.push(Candidate::document(display_name, &doc.path).with_alias(alias));
        }
        candidates.push(Candidate::document(display_name, &doc.path));
    }

    candidates
}
