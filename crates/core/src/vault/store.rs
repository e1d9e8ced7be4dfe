//! Filesystem-backed document store.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use tracing::{debug, info};

use crate::frontmatter;
use crate::host::{DocumentMeta, DocumentStore, StoreError};

use super::check_vault_path;
use super::walker::VaultWalker;

/// Serves the documents of a vault directory.
#[derive(Debug, Clone)]
pub struct FsDocumentStore {
    root: PathBuf,
    excluded_folders: Vec<PathBuf>,
    extension: String,
}

impl FsDocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), excluded_folders: Vec::new(), extension: "md".into() }
    }

    pub fn with_exclusions(mut self, excluded_folders: Vec<PathBuf>) -> Self {
        self.excluded_folders = excluded_folders;
        self
    }

    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, StoreError> {
        check_vault_path(path)?;
        Ok(self.root.join(path))
    }

    fn load_meta(&self, path: &str) -> Result<DocumentMeta, StoreError> {
        let content = self.read(path)?;
        Ok(DocumentMeta::new(path).with_aliases(frontmatter::alias_field(&content)))
    }
}

impl DocumentStore for FsDocumentStore {
    fn documents(&self) -> Result<Vec<DocumentMeta>, StoreError> {
        let walker = VaultWalker::with_exclusions(&self.root, self.excluded_folders.clone())?
            .with_extension(&self.extension);
        let files = walker.walk()?;
        debug!(count = files.len(), root = %self.root.display(), "enumerated vault");

        files.iter().map(|f| self.load_meta(&f.vault_path())).collect()
    }

    fn document(&self, path: &str) -> Result<Option<DocumentMeta>, StoreError> {
        if !self.resolve(path)?.is_file() {
            return Ok(None);
        }
        self.load_meta(path).map(Some)
    }

    fn folder_exists(&self, path: &str) -> bool {
        self.resolve(path).is_ok_and(|p| p.is_dir())
    }

    fn file_exists(&self, path: &str) -> bool {
        self.resolve(path).is_ok_and(|p| p.is_file())
    }

    fn read(&self, path: &str) -> Result<String, StoreError> {
        let abs = self.resolve(path)?;
        fs::read_to_string(&abs).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StoreError::NotFound(path.to_string()),
            _ => StoreError::Io { path: path.to_string(), source: e },
        })
    }

    fn create(&self, path: &str, content: &str) -> Result<DocumentMeta, StoreError> {
        let abs = self.resolve(path)?;
        let io_err = |source| StoreError::Io { path: path.to_string(), source };

        if let Some(parent) = abs.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let mut file = OpenOptions::new().write(true).create_new(true).open(&abs).map_err(
            |e| match e.kind() {
                ErrorKind::AlreadyExists => StoreError::AlreadyExists(path.to_string()),
                _ => io_err(e),
            },
        )?;
        file.write_all(content.as_bytes()).map_err(io_err)?;

        info!(path, "created note");
        Ok(DocumentMeta::new(path).with_aliases(frontmatter::alias_field(content)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::AliasField;
    use tempfile::TempDir;

    fn vault() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("People")).unwrap();
        fs::write(root.join("People/Brandon.md"), "---\naliases: [Bran]\n---\n# Brandon").unwrap();
        fs::write(root.join("Inbox.md"), "# Inbox").unwrap();
        fs::write(root.join("image.png"), "not a note").unwrap();
        dir
    }

    #[test]
    fn documents_are_sorted_with_aliases() {
        let dir = vault();
        let store = FsDocumentStore::new(dir.path());
        let docs = store.documents().unwrap();
        let paths: Vec<_> = docs.iter().map(|d| d.path.as_str()).collect();
        assert_eq!(paths, vec!["Inbox.md", "People/Brandon.md"]);
        assert_eq!(docs[1].aliases, AliasField::Multiple(vec!["Bran".into()]));
    }

    #[test]
    fn create_writes_and_refuses_overwrite() {
        let dir = vault();
        let store = FsDocumentStore::new(dir.path());

        let doc = store.create("New/Idea.md", "# Idea").unwrap();
        assert_eq!(doc.stem(), "Idea");
        assert_eq!(fs::read_to_string(dir.path().join("New/Idea.md")).unwrap(), "# Idea");

        let err = store.create("New/Idea.md", "again").unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists(_)));
    }

    #[test]
    fn paths_cannot_escape_vault() {
        let dir = vault();
        let store = FsDocumentStore::new(dir.path());
        assert!(matches!(store.create("../escape.md", ""), Err(StoreError::InvalidPath(_))));
        assert!(matches!(store.read("/etc/passwd"), Err(StoreError::InvalidPath(_))));
    }

    #[test]
    fn lookup_and_existence_checks() {
        let dir = vault();
        let store = FsDocumentStore::new(dir.path());
        assert!(store.folder_exists("People"));
        assert!(!store.folder_exists("Missing"));
        assert!(store.file_exists("Inbox.md"));
        assert!(store.document("Nope.md").unwrap().is_none());
        assert!(matches!(store.read("Nope.md"), Err(StoreError::NotFound(_))));
    }
}
