//! Trigger state machine.
//!
//! `Closed` until the text just before the cursor ends with a configured
//! trigger symbol, then `Open` until a closing condition fires. Every cursor
//! or content change is fed through [`TriggerMachine::on_trigger`].

use tracing::{debug, trace};

use crate::buffer::{Position, TextBuffer};
use crate::host::SyntaxClassifier;

use super::query::has_accepted_char;
use super::settings::LinkSettings;
use super::types::{TriggerSession, TriggerWindow};

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// Newline or tab typed.
    LineBreak,
    /// More spaces than `leave_open_for_spaces` allows.
    TooManySpaces,
    LeadingSpace,
    /// Empty query, or no accepted character in it.
    InvalidQuery,
    Committed,
    Cancelled,
}

/// Owns the single optional [`TriggerSession`].
#[derive(Debug, Default)]
pub struct TriggerMachine {
    session: Option<TriggerSession>,
}

impl TriggerMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&TriggerSession> {
        self.session.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// End the session. Closing an already closed machine does nothing.
    pub fn close(&mut self, reason: CloseReason) {
        if let Some(session) = self.session.take() {
            debug!(?reason, symbol = %session.symbol, "mention closed");
        }
    }

    /// Evaluate one cursor/content change.
    ///
    /// Returns the window to suggest for, or `None` when no session is open
    /// after this event.
    pub fn on_trigger(
        &mut self,
        cursor: Position,
        buffer: &dyn TextBuffer,
        syntax: &dyn SyntaxClassifier,
        settings: &LinkSettings,
    ) -> Option<TriggerWindow> {
        let symbols = settings.trigger_symbols();
        let max_len = symbols.iter().map(|s| s.chars().count()).max().unwrap_or(1);

        let preceding = buffer.get_range(cursor.back(max_len), cursor);
        // Nothing before the cursor on this line means a line was just broken.
        let typed = preceding.chars().last().unwrap_or('\n');

        if self.is_open() && matches!(typed, '\n' | '\t') {
            self.close(CloseReason::LineBreak);
            return None;
        }

        // Once open, backticks may be part of the note name.
        if !self.is_open() && syntax.is_code(buffer, cursor) {
            return None;
        }

        if let Some(matched) = symbols.iter().find(|s| preceding.ends_with(s.as_str())) {
            let anchor = cursor.back(matched.chars().count());
            let symbol = match &self.session {
                Some(open) => open.symbol.clone(),
                None => matched.clone(),
            };
            debug!(%symbol, line = cursor.line, ch = anchor.ch, "mention opened");
            self.session =
                Some(TriggerSession { anchor, opened_at: cursor, symbol: symbol.clone(), end: cursor });
            return Some(TriggerWindow { start: anchor, end: cursor, query: String::new(), symbol });
        }

        let session = self.session.as_ref()?;
        // One char of lookahead lets the boundary just typed take part in the checks.
        let query = buffer.get_range(session.opened_at, cursor.forward(1));

        if let Some(reason) = closing_condition(&query, settings) {
            self.close(reason);
            return None;
        }

        let session = self.session.as_mut()?;
        session.end = cursor;
        trace!(%query, "mention query");
        Some(TriggerWindow {
            start: session.anchor,
            end: cursor,
            query,
            symbol: session.symbol.clone(),
        })
    }
}

fn closing_condition(query: &str, settings: &LinkSettings) -> Option<CloseReason> {
    if query.starts_with(' ') {
        return Some(CloseReason::LeadingSpace);
    }
    if query.matches(' ').count() > settings.leave_open_for_spaces {
        return Some(CloseReason::TooManySpaces);
    }
    if query.is_empty() || !has_accepted_char(query) {
        return Some(CloseReason::InvalidQuery);
    }
    None
}
