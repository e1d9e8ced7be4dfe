//! Fuzzy ranking of candidates against the live query.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use serde::Serialize;

use super::settings::LinkSettings;
use super::types::Candidate;

/// Which candidate field produced the winning match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchField {
    Alias,
    Name,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedKey {
    pub field: MatchField,
    /// Char indices of the matched characters within that field.
    pub indices: Vec<usize>,
}

/// A candidate together with how it matched the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedCandidate {
    pub candidate: Candidate,
    /// `None` for the no-query listing and for create-new entries.
    pub score: Option<i64>,
    pub matched: Option<MatchedKey>,
}

impl RankedCandidate {
    pub fn unscored(candidate: Candidate) -> Self {
        Self { candidate, score: None, matched: None }
    }
}

pub struct Ranker {
    matcher: SkimMatcherV2,
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Ranker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ranker").finish_non_exhaustive()
    }
}

impl Ranker {
    pub fn new() -> Self {
        Self { matcher: SkimMatcherV2::default().ignore_case() }
    }

    /// Order `candidates` for `query`.
    ///
    /// An empty query lists everything in reverse enumeration order without
    /// scores. Otherwise each candidate is scored on its alias and its display
    /// name (the alias wins ties), non-matches are dropped, and the rest are
    /// sorted by descending score. The sort is stable, so equal scores keep
    /// enumeration order.
    pub fn rank(&self, candidates: Vec<Candidate>, query: &str) -> Vec<RankedCandidate> {
        if query.is_empty() {
            return candidates.into_iter().rev().map(RankedCandidate::unscored).collect();
        }

        let mut ranked: Vec<RankedCandidate> = candidates
            .into_iter()
            .filter_map(|candidate| {
                let (score, matched) = self.best_match(&candidate, query)?;
                Some(RankedCandidate { candidate, score: Some(score), matched: Some(matched) })
            })
            .collect();

        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }

    fn best_match(&self, candidate: &Candidate, query: &str) -> Option<(i64, MatchedKey)> {
        let alias = candidate
            .alias
            .as_deref()
            .and_then(|alias| self.matcher.fuzzy_indices(alias, query))
            .filter(|(score, _)| *score > 0);
        let name = self
            .matcher
            .fuzzy_indices(&candidate.display_name, query)
            .filter(|(score, _)| *score > 0);

        match (alias, name) {
            (Some((a, ai)), Some((n, _))) if a >= n => {
                Some((a, MatchedKey { field: MatchField::Alias, indices: ai }))
            }
            (_, Some((n, ni))) => Some((n, MatchedKey { field: MatchField::Name, indices: ni })),
            (Some((a, ai)), None) => {
                Some((a, MatchedKey { field: MatchField::Alias, indices: ai }))
            }
            (None, None) => None,
        }
    }
}

/// Append the "create new note" entry when the feature is enabled.
///
/// Existing create-new entries are dropped first so exactly one remains.
/// Nothing is added when a result's display name equals the query
/// (case-insensitively) or the query is empty.
pub fn offer_create_new(
    mut results: Vec<RankedCandidate>,
    query: &str,
    settings: &LinkSettings,
) -> Vec<RankedCandidate> {
    if !settings.show_add_new_note || query.is_empty() {
        return results;
    }

    let wanted = query.to_lowercase();
    if results.iter().any(|r| r.candidate.display_name.to_lowercase() == wanted) {
        return results;
    }

    results.retain(|r| !r.candidate.is_create_new);

    let directory = settings.add_new_note_directory.trim();
    let separator = if directory.is_empty() { "" } else { "/" };
    let target = format!(
        "{directory}{separator}{}.{}",
        query.trim(),
        settings.default_extension.trim_start_matches('.')
    );
    results.push(RankedCandidate::unscored(Candidate::create_new(query, target)));
    results
}
