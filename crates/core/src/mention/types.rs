//! Candidate and session types shared across the mention pipeline.

use serde::Serialize;

use crate::buffer::Position;

/// Display name of the synthetic "create new note" candidate.
pub const CREATE_NEW_LABEL: &str = "Create new note";

/// One selectable link target.
///
/// Candidates are rebuilt on every query evaluation; nothing caches them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Bare stem, or folder path without extension for full-path scopes.
    pub display_name: String,
    /// Vault-relative path of the document.
    pub target_path: String,
    pub alias: Option<String>,
    /// Synthetic entry that creates `target_path` on commit.
    pub is_create_new: bool,
    /// Raw query that produced a create-new entry.
    pub create_query: Option<String>,
}

impl Candidate {
    pub fn document(display_name: impl Into<String>, target_path: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            target_path: target_path.into(),
            alias: None,
            is_create_new: false,
            create_query: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn create_new(query: impl Into<String>, target_path: impl Into<String>) -> Self {
        Self {
            display_name: CREATE_NEW_LABEL.to_string(),
            target_path: target_path.into(),
            alias: None,
            is_create_new: true,
            create_query: Some(query.into()),
        }
    }

    /// Alias when present and non-empty, display name otherwise.
    pub fn label(&self) -> &str {
        self.alias.as_deref().filter(|a| !a.is_empty()).unwrap_or(&self.display_name)
    }
}

/// The live state of an open mention query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriggerSession {
    /// Where the trigger symbol starts.
    pub anchor: Position,
    /// Cursor when the symbol was recognized; the query starts here.
    pub opened_at: Position,
    /// The symbol that opened this session.
    pub symbol: String,
    /// Cursor at the most recent evaluation.
    pub end: Position,
}

/// What the trigger machine reports to the host for an open session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriggerWindow {
    pub start: Position,
    pub end: Position,
    pub query: String,
    pub symbol: String,
}
