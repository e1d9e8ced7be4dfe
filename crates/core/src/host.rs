//! Capabilities the host editor provides to the linking core.
//!
//! The core never touches the filesystem, the editor view, or the UI
//! directly. A host adapter implements these traits and hands them in.

use std::cell::RefCell;

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::buffer::{Position, TextBuffer};
use crate::vault::VaultWalkerError;

/// Errors reported by a [`DocumentStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("document already exists: {0}")]
    AlreadyExists(String),

    #[error("document not found: {0}")]
    NotFound(String),

    #[error("path escapes the vault: {0}")]
    InvalidPath(String),

    #[error("vault is read-only: cannot write {0}")]
    ReadOnly(String),

    #[error(transparent)]
    Walk(#[from] VaultWalkerError),
}

/// Alias metadata declared by a document's frontmatter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub enum AliasField {
    /// No alias declared.
    #[default]
    None,
    /// `alias: Name`
    Single(String),
    /// `aliases: [A, B]` or `aliases: "A, B"`
    Multiple(Vec<String>),
}

impl AliasField {
    /// Every declared alias, in declaration order.
    pub fn values(&self) -> Vec<&str> {
        match self {
            AliasField::None => Vec::new(),
            AliasField::Single(a) => vec![a.as_str()],
            AliasField::Multiple(list) => list.iter().map(String::as_str).collect(),
        }
    }
}

/// A linkable document as seen by the candidate index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentMeta {
    /// Vault-relative path using `/` separators, e.g. `People/Brandon.md`.
    pub path: String,
    /// Extension without the dot, e.g. `md`.
    pub extension: String,
    pub aliases: AliasField,
}

impl DocumentMeta {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let extension = basename(&path)
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_string())
            .unwrap_or_default();
        Self { path, extension, aliases: AliasField::None }
    }

    pub fn with_aliases(mut self, aliases: AliasField) -> Self {
        self.aliases = aliases;
        self
    }

    /// Path with the extension removed: `People/Brandon`.
    pub fn path_without_extension(&self) -> &str {
        if self.extension.is_empty() {
            return &self.path;
        }
        &self.path[..self.path.len() - self.extension.len() - 1]
    }

    /// File name with the extension removed: `Brandon`.
    pub fn stem(&self) -> &str {
        basename(self.path_without_extension())
    }
}

fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Document corpus plus the create and read primitives used by the core.
pub trait DocumentStore {
    /// Enumerate every linkable document, in the store's natural order.
    fn documents(&self) -> Result<Vec<DocumentMeta>, StoreError>;

    /// Look up a single document by vault-relative path.
    fn document(&self, path: &str) -> Result<Option<DocumentMeta>, StoreError>;

    fn folder_exists(&self, path: &str) -> bool;

    fn file_exists(&self, path: &str) -> bool;

    fn read(&self, path: &str) -> Result<String, StoreError>;

    /// Create a new document. Fails if something already exists at `path`.
    fn create(&self, path: &str, content: &str) -> Result<DocumentMeta, StoreError>;
}

/// Reports whether a cursor sits inside inline code or a code block.
pub trait SyntaxClassifier {
    fn is_code(&self, buffer: &dyn TextBuffer, cursor: Position) -> bool;
}

/// Classifier for hosts with no syntax information: nothing is code.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextSyntax;

impl SyntaxClassifier for PlainTextSyntax {
    fn is_code(&self, _buffer: &dyn TextBuffer, _cursor: Position) -> bool {
        false
    }
}

/// Produces host-native link markup.
pub trait LinkFormatter {
    /// Format a link to `target`, relative to the document at `source_path`,
    /// displaying `label`.
    fn format_link(&self, target: &DocumentMeta, source_path: &str, label: &str) -> String;
}

/// A user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub message: String,
    /// Stays on screen until dismissed.
    pub persistent: bool,
}

impl Notice {
    pub fn transient(message: impl Into<String>) -> Self {
        Self { message: message.into(), persistent: false }
    }

    pub fn persistent(message: impl Into<String>) -> Self {
        Self { message: message.into(), persistent: true }
    }
}

/// Non-blocking, user-dismissible notifications.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Forwards notices to the `tracing` log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        if notice.persistent {
            warn!(persistent = true, "{}", notice.message);
        } else {
            info!("{}", notice.message);
        }
    }
}

/// Keeps every notice it receives.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    pub fn take(&self) -> Vec<Notice> {
        self.notices.take()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice);
    }
}

impl<T: DocumentStore + ?Sized> DocumentStore for &T {
    fn documents(&self) -> Result<Vec<DocumentMeta>, StoreError> {
        (**self).documents()
    }

    fn document(&self, path: &str) -> Result<Option<DocumentMeta>, StoreError> {
        (**self).document(path)
    }

    fn folder_exists(&self, path: &str) -> bool {
        (**self).folder_exists(path)
    }

    fn file_exists(&self, path: &str) -> bool {
        (**self).file_exists(path)
    }

    fn read(&self, path: &str) -> Result<String, StoreError> {
        (**self).read(path)
    }

    fn create(&self, path: &str, content: &str) -> Result<DocumentMeta, StoreError> {
        (**self).create(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_meta_splits_path() {
        let doc = DocumentMeta::new("People/Brandon Sanderson.md");
        assert_eq!(doc.extension, "md");
        assert_eq!(doc.path_without_extension(), "People/Brandon Sanderson");
        assert_eq!(doc.stem(), "Brandon Sanderson");
    }

    #[test]
    fn dotted_folder_does_not_count_as_extension() {
        let doc = DocumentMeta::new("v1.2/README");
        assert_eq!(doc.extension, "");
        assert_eq!(doc.stem(), "README");
    }

    #[test]
    fn recording_notifier_keeps_order() {
        let n = RecordingNotifier::new();
        n.notify(Notice::transient("one"));
        n.notify(Notice::persistent("two"));
        let notices = n.take();
        assert_eq!(notices.len(), 2);
        assert!(!notices[0].persistent);
        assert!(notices[1].persistent);
        assert!(n.notices().is_empty());
    }
}
