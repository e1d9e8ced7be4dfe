//! Shared output formatting for candidate listings.

use atlink_core::mention::{RankedCandidate, render_candidate};
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

/// Formatted candidate for JSON output.
#[derive(Debug, Serialize)]
pub struct CandidateOutput {
    pub title: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    pub create_new: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
    pub highlights: Vec<usize>,
}

impl From<&RankedCandidate> for CandidateOutput {
    fn from(ranked: &RankedCandidate) -> Self {
        let fragment = render_candidate(ranked);
        Self {
            title: fragment.title,
            path: ranked.candidate.target_path.clone(),
            alias: ranked.candidate.alias.clone(),
            create_new: ranked.candidate.is_create_new,
            score: ranked.score,
            highlights: fragment.highlights,
        }
    }
}

#[derive(Tabled)]
struct CandidateRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Alias")]
    alias: String,
    #[tabled(rename = "Score")]
    score: String,
}

/// One-line label used by prompts: title with matches bracketed, then the path.
pub fn candidate_label(ranked: &RankedCandidate) -> String {
    let fragment = render_candidate(ranked);
    let flair = if fragment.alias { " (alias)" } else { "" };
    format!("{}{flair}  {}", fragment.highlighted("[", "]"), fragment.path)
}

/// Print candidates as a table, numbered from 1.
pub fn print_candidates_table(candidates: &[RankedCandidate]) {
    if candidates.is_empty() {
        println!("(no candidates found)");
        return;
    }

    let rows: Vec<CandidateRow> = candidates
        .iter()
        .enumerate()
        .map(|(i, ranked)| {
            let fragment = render_candidate(ranked);
            CandidateRow {
                index: i + 1,
                title: fragment.highlighted("[", "]"),
                path: ranked.candidate.target_path.clone(),
                alias: if fragment.alias { "yes".to_string() } else { String::new() },
                score: ranked.score.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string()),
            }
        })
        .collect();

    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{table}");
    println!();
    println!("-- {} candidates --", candidates.len());
}

/// Print candidates as JSON.
pub fn print_candidates_json(candidates: &[RankedCandidate]) {
    let output: Vec<CandidateOutput> = candidates.iter().map(CandidateOutput::from).collect();
    println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
}

/// Print candidate target paths only (quiet mode).
pub fn print_candidates_quiet(candidates: &[RankedCandidate]) {
    for ranked in candidates {
        println!("{}", ranked.candidate.target_path);
    }
}
