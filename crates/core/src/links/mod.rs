//! Link markup generation.

pub mod formatter;

pub use formatter::{LinkStyle, StandardLinkFormatter, relative_path};
