//! Markdown syntax classification backed by comrak.

pub mod code;

pub use code::{MarkdownSyntax, is_code_at};
