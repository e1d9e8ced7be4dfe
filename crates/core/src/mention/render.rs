//! Host-neutral rendering of a ranked candidate.

use serde::Serialize;

use super::ranker::{MatchField, RankedCandidate};

/// What a suggestion row shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayFragment {
    pub title: String,
    /// Char indices in `title` matched by the query.
    pub highlights: Vec<usize>,
    /// Target path without its extension.
    pub path: String,
    /// Show the alias flair.
    pub alias: bool,
}

impl DisplayFragment {
    /// Title with matched characters wrapped in `open` / `close`.
    pub fn highlighted(&self, open: &str, close: &str) -> String {
        let mut out = String::with_capacity(self.title.len());
        for (i, c) in self.title.chars().enumerate() {
            if self.highlights.contains(&i) {
                out.push_str(open);
                out.push(c);
                out.push_str(close);
            } else {
                out.push(c);
            }
        }
        out
    }
}

pub fn render_candidate(ranked: &RankedCandidate) -> DisplayFragment {
    let candidate = &ranked.candidate;
    let alias = candidate.alias.as_deref().filter(|a| !a.is_empty());

    let (title, highlights) = match (&ranked.matched, alias) {
        (Some(m), Some(alias)) if m.field == MatchField::Alias => {
            (alias.to_string(), m.indices.clone())
        }
        (_, Some(alias)) => (alias.to_string(), Vec::new()),
        (Some(m), None) if m.field == MatchField::Name => {
            (candidate.display_name.clone(), m.indices.clone())
        }
        _ => (candidate.display_name.clone(), Vec::new()),
    };

    DisplayFragment { title, highlights, path: strip_extension(&candidate.target_path), alias: alias.is_some() }
}

fn strip_extension(path: &str) -> String {
    let name_start = path.rfind('/').map_or(0, |i| i + 1);
    match path[name_start..].rfind('.') {
        Some(dot) if dot > 0 => path[..name_start + dot].to_string(),
        _ => path.to_string(),
    }
}
