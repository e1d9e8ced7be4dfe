//! Splitting a YAML header off a markdown document.

use super::types::{Frontmatter, ParsedDocument};
use crate::host::AliasField;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum FrontmatterParseError {
    #[error("invalid YAML frontmatter: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),
}

const DELIMITER: &str = "---";

/// Parse the frontmatter of `content`, if it has any.
///
/// The header must open the document (leading whitespace allowed) and be
/// closed by a line holding only `---`. An unclosed header is body text.
pub fn parse(content: &str) -> Result<ParsedDocument, FrontmatterParseError> {
    let Some((yaml, body)) = split(content) else {
        return Ok(ParsedDocument { frontmatter: None, body: content.to_string() });
    };

    let frontmatter = if yaml.trim().is_empty() {
        Frontmatter::default()
    } else {
        serde_yaml::from_str(yaml)?
    };
    Ok(ParsedDocument { frontmatter: Some(frontmatter), body: body.to_string() })
}

/// `(yaml, body)` when `content` starts with a closed header.
fn split(content: &str) -> Option<(&str, &str)> {
    let mut lines = content.trim_start().split_inclusive('\n');
    let opening = lines.next()?;
    if opening.trim_end() != DELIMITER {
        return None;
    }

    let header_start = content.len() - content.trim_start().len() + opening.len();
    let mut offset = header_start;
    for line in lines {
        if line.trim() == DELIMITER {
            return Some((&content[header_start..offset], &content[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

/// Alias metadata of a document, tolerating malformed frontmatter.
///
/// A header that fails to parse is treated as if it declared no aliases.
pub fn alias_field(content: &str) -> AliasField {
    match parse(content) {
        Ok(doc) => doc.frontmatter.map(|fm| fm.alias_field()).unwrap_or_default(),
        Err(e) => {
            debug!("ignoring unparseable frontmatter: {e}");
            AliasField::None
        }
    }
}
