//! The interface a host adapter drives.

use tracing::warn;

use crate::buffer::{Position, TextBuffer};
use crate::host::{DocumentStore, LinkFormatter, Notifier, SyntaxClassifier};

use super::candidates::enumerate_candidates;
use super::insert::{CommitError, CommitOutcome, Inserter};
use super::ranker::{RankedCandidate, Ranker, offer_create_new};
use super::render::{DisplayFragment, render_candidate};
use super::settings::LinkSettings;
use super::trigger::{CloseReason, TriggerMachine};
use super::types::{Candidate, TriggerSession, TriggerWindow};

/// Mention suggester bound to one document store, formatter and notifier.
///
/// The host owns the popup lifecycle: it calls [`on_trigger`](Self::on_trigger)
/// on every edit or cursor move, shows [`get_candidates`](Self::get_candidates)
/// while a window is returned, and calls [`commit`](Self::commit) on selection.
/// Settings are passed per call, so a changed configuration applies from the
/// next call on.
#[derive(Debug)]
pub struct LinkSuggest<S, F, N> {
    machine: TriggerMachine,
    ranker: Ranker,
    store: S,
    formatter: F,
    notifier: N,
}

impl<S, F, N> LinkSuggest<S, F, N>
where
    S: DocumentStore,
    F: LinkFormatter,
    N: Notifier,
{
    pub fn new(store: S, formatter: F, notifier: N) -> Self {
        Self { machine: TriggerMachine::new(), ranker: Ranker::new(), store, formatter, notifier }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn is_open(&self) -> bool {
        self.machine.is_open()
    }

    pub fn session(&self) -> Option<&TriggerSession> {
        self.machine.session()
    }

    pub fn on_trigger(
        &mut self,
        cursor: Position,
        buffer: &dyn TextBuffer,
        syntax: &dyn SyntaxClassifier,
        settings: &LinkSettings,
    ) -> Option<TriggerWindow> {
        self.machine.on_trigger(cursor, buffer, syntax, settings)
    }

    /// Ranked candidates for a window, enumerated fresh from the store.
    pub fn get_candidates(
        &self,
        window: &TriggerWindow,
        settings: &LinkSettings,
    ) -> Vec<RankedCandidate> {
        let documents = self.store.documents().unwrap_or_else(|e| {
            warn!("document enumeration failed: {e}");
            Vec::new()
        });
        let candidates = enumerate_candidates(&documents, settings, &window.symbol);
        let ranked = self.ranker.rank(candidates, &window.query);
        offer_create_new(ranked, &window.query, settings)
    }

    pub fn render_candidate(&self, candidate: &RankedCandidate) -> DisplayFragment {
        render_candidate(candidate)
    }

    /// Insert the link for `candidate` and close the session.
    ///
    /// On error the buffer is unchanged and the session stays open.
    pub fn commit(
        &mut self,
        candidate: &Candidate,
        buffer: &mut dyn TextBuffer,
        source_path: &str,
        settings: &LinkSettings,
    ) -> Result<CommitOutcome, CommitError> {
        let session = self.machine.session().cloned().ok_or(CommitError::NoSession)?;
        let inserter = Inserter::new(&self.store, &self.formatter, &self.notifier);
        let outcome = inserter.commit(candidate, &session, buffer, source_path, settings)?;
        self.machine.close(CloseReason::Committed);
        Ok(outcome)
    }

    /// Programmatic cancel (escape key, focus loss).
    pub fn close(&mut self) {
        self.machine.close(CloseReason::Cancelled);
    }
}
