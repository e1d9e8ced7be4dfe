//! Frontmatter parsing.
//!
//! Only the parts of a document's YAML header the linker cares about are
//! interpreted: `alias` and `aliases`.

pub mod parser;
pub mod types;

pub use parser::{FrontmatterParseError, alias_field, parse};
pub use types::{Frontmatter, ParsedDocument};
