#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Core library for atlink.
//!
//! Detects an in-progress mention (a trigger symbol such as `@`) in a live
//! text buffer, ranks link candidates drawn from the vault, and rewrites the
//! buffer with a formatted link once a candidate is chosen.

pub mod buffer;
pub mod config;
pub mod frontmatter;
pub mod host;
pub mod links;
pub mod markdown_ast;
pub mod mention;
pub mod templates;
pub mod vault;

pub use buffer::{Position, StringBuffer, TextBuffer};
pub use host::{
    AliasField, DocumentMeta, DocumentStore, LinkFormatter, Notice, Notifier,
    StoreError, SyntaxClassifier,
};
pub use mention::{
    Candidate, CommitError, CommitOutcome, DisplayFragment, LinkSettings, LinkSuggest,
    RankedCandidate, ScopeRule, TriggerSession, TriggerWindow,
};
