//! Symbol-triggered link suggestion.
//!
//! Data flows leaf-first through the submodules:
//! buffer edit → [`trigger`] opens/extends/closes a session and extracts the
//! query → [`candidates`] enumerates link targets for the active symbol →
//! [`ranker`] orders them → [`insert`] rewrites the buffer on selection.
//! [`LinkSuggest`] ties the pieces together for a host adapter.

pub mod candidates;
pub mod insert;
pub mod query;
pub mod ranker;
pub mod render;
pub mod settings;
pub mod suggest;
pub mod trigger;
pub mod types;

pub use candidates::enumerate_candidates;
pub use insert::{CommitError, CommitOutcome, Inserter};
pub use query::has_accepted_char;
pub use ranker::{MatchField, MatchedKey, RankedCandidate, Ranker, offer_create_new};
pub use render::{DisplayFragment, render_candidate};
pub use settings::{DEFAULT_SYMBOL, LinkSettings, ScopeRule};
pub use suggest::LinkSuggest;
pub use trigger::{CloseReason, TriggerMachine};
pub use types::{Candidate, TriggerSession, TriggerWindow};
