//! Selection/insertion engine: turns a chosen candidate into link text.

use chrono::{Local, NaiveDateTime};
use thiserror::Error;
use tracing::{debug, error};

use crate::buffer::{Position, TextBuffer};
use crate::host::{DocumentMeta, DocumentStore, LinkFormatter, Notice, Notifier, StoreError};
use crate::templates::render_new_note;

use super::settings::LinkSettings;
use super::types::{Candidate, TriggerSession};

#[derive(Debug, Error)]
pub enum CommitError {
    #[error("no mention session is open")]
    NoSession,

    #[error("failed to read template {path}: {source}")]
    TemplateRead {
        path: String,
        #[source]
        source: StoreError,
    },

    #[error("unable to create new note at path: {path}: {source}")]
    Create {
        path: String,
        #[source]
        source: StoreError,
    },

    #[error("link target does not exist: {0}")]
    MissingTarget(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result of a successful commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitOutcome {
    /// Text that replaced the mention.
    pub link_text: String,
    /// First replaced position (the located trigger symbol).
    pub from: Position,
    pub to: Position,
    /// Path of the note created for a create-new candidate.
    pub created: Option<String>,
}

/// Performs the buffer rewrite for a committed candidate.
pub struct Inserter<'a> {
    store: &'a dyn DocumentStore,
    formatter: &'a dyn LinkFormatter,
    notifier: &'a dyn Notifier,
}

impl<'a> Inserter<'a> {
    pub fn new(
        store: &'a dyn DocumentStore,
        formatter: &'a dyn LinkFormatter,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self { store, formatter, notifier }
    }

    /// Commit `candidate` for `session`, rewriting `buffer`.
    ///
    /// For a create-new candidate the note is created first; if that fails a
    /// persistent notice names the path and the buffer is left untouched.
    pub fn commit(
        &self,
        candidate: &Candidate,
        session: &TriggerSession,
        buffer: &mut dyn TextBuffer,
        source_path: &str,
        settings: &LinkSettings,
    ) -> Result<CommitOutcome, CommitError> {
        let line = buffer.get_range(Position::new(session.anchor.line, 0), session.end);

        let (target, alias, created) = if candidate.is_create_new {
            let doc = self.create_note(candidate, settings)?;
            let created = Some(doc.path.clone());
            // Label the link with exactly what was typed.
            (doc, candidate.create_query.clone(), created)
        } else {
            let doc = self
                .store
                .document(&candidate.target_path)?
                .ok_or_else(|| CommitError::MissingTarget(candidate.target_path.clone()))?;
            (doc, candidate.alias.clone(), None)
        };

        let mut label = alias
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| candidate.display_name.clone());
        if settings.include_symbol {
            label = format!("{}{label}", session.symbol);
        }

        let mut link_text = self.formatter.format_link(&target, source_path, &label);
        if link_text.contains('\n') {
            link_text = link_text.replace('\n', "");
        }

        // The line may have been edited since the anchor was recorded, so find
        // the symbol again instead of trusting the stored column.
        let from_ch = last_symbol_column(&line, &session.symbol).unwrap_or(session.anchor.ch);
        let from = Position::new(session.anchor.line, from_ch);
        buffer.replace_range(&link_text, from, session.end);
        debug!(link = %link_text, line = from.line, ch = from.ch, "inserted link");

        Ok(CommitOutcome { link_text, from, to: session.end, created })
    }

    fn create_note(
        &self,
        candidate: &Candidate,
        settings: &LinkSettings,
    ) -> Result<DocumentMeta, CommitError> {
        let path = &candidate.target_path;
        let content = self.new_note_content(path, settings, Local::now().naive_local())?;

        self.store.create(path, &content).map_err(|source| {
            error!(%path, "failed to create note: {source}");
            self.notifier.notify(Notice::persistent(format!(
                "Unable to create new note at path: {path}."
            )));
            CommitError::Create { path: path.clone(), source }
        })
    }

    fn new_note_content(
        &self,
        path: &str,
        settings: &LinkSettings,
        now: NaiveDateTime,
    ) -> Result<String, CommitError> {
        let template = settings.add_new_note_template.trim();
        if template.is_empty() {
            return Ok(String::new());
        }

        let template_path = format!("{template}.{}", settings.default_extension);
        let raw = self
            .store
            .read(&template_path)
            .map_err(|source| CommitError::TemplateRead { path: template_path, source })?;
        Ok(render_new_note(&raw, DocumentMeta::new(path).stem(), now))
    }
}

/// Char column of the last occurrence of `symbol` in `line`.
fn last_symbol_column(line: &str, symbol: &str) -> Option<usize> {
    line.rfind(symbol).map(|byte| line[..byte].chars().count())
}
