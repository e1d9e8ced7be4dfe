//! Wikilink and markdown link formatting.

use serde::{Deserialize, Serialize};

use crate::host::{DocumentMeta, LinkFormatter};

/// Which link syntax to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStyle {
    /// `[[People/Brandon|@Brandon]]`
    #[default]
    Wikilink,
    /// `[@Brandon](People/Brandon.md)`
    Markdown,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardLinkFormatter {
    pub style: LinkStyle,
}

impl StandardLinkFormatter {
    pub fn new(style: LinkStyle) -> Self {
        Self { style }
    }
}

impl LinkFormatter for StandardLinkFormatter {
    fn format_link(&self, target: &DocumentMeta, source_path: &str, label: &str) -> String {
        match self.style {
            LinkStyle::Wikilink => {
                // Markdown notes are linked without their extension.
                let link = if target.extension == "md" {
                    target.path_without_extension()
                } else {
                    target.path.as_str()
                };
                if label.is_empty() || label == link {
                    format!("[[{link}]]")
                } else {
                    format!("[[{link}|{label}]]")
                }
            }
            LinkStyle::Markdown => {
                let rel = relative_path(source_path, &target.path);
                format!("[{label}]({})", rel.replace(' ', "%20"))
            }
        }
    }
}

/// Path of `target` relative to the folder containing `source`.
///
/// Both paths are vault-relative with `/` separators. An empty `source`
/// means the vault root.
pub fn relative_path(source: &str, target: &str) -> String {
    let source_dir: Vec<&str> = match source.rsplit_once('/') {
        Some((dir, _)) => dir.split('/').filter(|s| !s.is_empty()).collect(),
        None => Vec::new(),
    };
    let target_parts: Vec<&str> = target.split('/').filter(|s| !s.is_empty()).collect();

    let common = source_dir
        .iter()
        .zip(target_parts.iter())
        .take_while(|(a, b)| a == b)
        .count()
        // The file name itself never counts as a shared folder.
        .min(target_parts.len().saturating_sub(1));

    let mut parts: Vec<&str> = vec![".."; source_dir.len() - common];
    parts.extend(&target_parts[common..]);
    parts.join("/")
}
