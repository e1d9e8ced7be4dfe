//! In-memory document store.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use crate::frontmatter;
use crate::host::{DocumentMeta, DocumentStore, StoreError};

use super::check_vault_path;

/// A vault held entirely in memory, enumerated in path order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    notes: RefCell<BTreeMap<String, String>>,
    folders: RefCell<BTreeSet<String>>,
    read_only: bool,
    extension: String,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self { extension: "md".into(), ..Default::default() }
    }

    /// Add a note; its parent folders come into existence with it.
    pub fn with_note(self, path: &str, content: &str) -> Self {
        self.insert(path, content);
        self
    }

    pub fn with_folder(self, path: &str) -> Self {
        self.folders.borrow_mut().insert(path.trim_end_matches('/').to_string());
        self
    }

    /// Make every `create` fail.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn content(&self, path: &str) -> Option<String> {
        self.notes.borrow().get(path).cloned()
    }

    fn insert(&self, path: &str, content: &str) {
        let mut folders = self.folders.borrow_mut();
        let mut parts: Vec<&str> = path.split('/').collect();
        parts.pop();
        for i in 1..=parts.len() {
            folders.insert(parts[..i].join("/"));
        }
        self.notes.borrow_mut().insert(path.to_string(), content.to_string());
    }

    fn meta(path: &str, content: &str) -> DocumentMeta {
        DocumentMeta::new(path).with_aliases(frontmatter::alias_field(content))
    }
}

impl DocumentStore for MemoryStore {
    fn documents(&self) -> Result<Vec<DocumentMeta>, StoreError> {
        let suffix = format!(".{}", self.extension);
        Ok(self
            .notes
            .borrow()
            .iter()
            .filter(|(path, _)| path.ends_with(&suffix))
            .map(|(path, content)| Self::meta(path, content))
            .collect())
    }

    fn document(&self, path: &str) -> Result<Option<DocumentMeta>, StoreError> {
        Ok(self.notes.borrow().get(path).map(|content| Self::meta(path, content)))
    }

    fn folder_exists(&self, path: &str) -> bool {
        self.folders.borrow().contains(path.trim_end_matches('/'))
    }

    fn file_exists(&self, path: &str) -> bool {
        self.notes.borrow().contains_key(path)
    }

    fn read(&self, path: &str) -> Result<String, StoreError> {
        self.content(path).ok_or_else(|| StoreError::NotFound(path.to_string()))
    }

    fn create(&self, path: &str, content: &str) -> Result<DocumentMeta, StoreError> {
        check_vault_path(path)?;
        if self.read_only {
            return Err(StoreError::ReadOnly(path.to_string()));
        }
        if self.file_exists(path) {
            return Err(StoreError::AlreadyExists(path.to_string()));
        }
        self.insert(path, content);
        Ok(Self::meta(path, content))
    }
}
