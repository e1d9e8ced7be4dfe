//! Recursive vault walk.
//!
//! Results come back sorted by vault path; that order is what the
//! candidate index sees as "enumeration order".

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Error)]
pub enum VaultWalkerError {
    #[error("vault root does not exist: {0}")]
    MissingRoot(String),

    #[error("failed to walk vault directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),
}

/// A document found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    pub absolute_path: PathBuf,
    /// Path relative to the vault root.
    pub relative_path: PathBuf,
}

impl WalkedFile {
    /// Relative path with `/` separators regardless of platform.
    pub fn vault_path(&self) -> String {
        self.relative_path
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Directories that never hold notes.
const SKIPPED_DIRS: &[&str] = &["node_modules", "target", "__pycache__", "venv"];

#[derive(Debug)]
pub struct VaultWalker {
    root: PathBuf,
    /// Relative to `root`.
    excluded_folders: Vec<PathBuf>,
    /// Without the dot.
    extension: String,
}

impl VaultWalker {
    pub fn new(root: &Path) -> Result<Self, VaultWalkerError> {
        Self::with_exclusions(root, Vec::new())
    }

    /// Exclusions may be vault-relative or absolute paths inside the vault.
    pub fn with_exclusions(
        root: &Path,
        excluded_folders: Vec<PathBuf>,
    ) -> Result<Self, VaultWalkerError> {
        let root = root
            .canonicalize()
            .map_err(|_| VaultWalkerError::MissingRoot(root.display().to_string()))?;

        let excluded_folders = excluded_folders
            .into_iter()
            .map(|p| match p.strip_prefix(&root) {
                Ok(rel) => rel.to_path_buf(),
                Err(_) => p,
            })
            .collect();

        Ok(Self { root, excluded_folders, extension: "md".to_string() })
    }

    /// Only pick up files with this extension (default `md`).
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Every document under the root, hidden and excluded folders skipped.
    pub fn walk(&self) -> Result<Vec<WalkedFile>, VaultWalkerError> {
        let mut files = Vec::new();
        let walk = WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !self.skip(e));

        for entry in walk {
            let entry = entry
                .map_err(|e| VaultWalkerError::WalkError(self.root.display().to_string(), e))?;
            if !entry.file_type().is_file() || !self.is_document(entry.path()) {
                continue;
            }
            let relative_path =
                entry.path().strip_prefix(&self.root).unwrap_or(entry.path()).to_path_buf();
            files.push(WalkedFile { absolute_path: entry.path().to_path_buf(), relative_path });
        }

        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        Ok(files)
    }

    fn skip(&self, entry: &DirEntry) -> bool {
        let name = entry.file_name().to_string_lossy();
        if name.starts_with('.') || SKIPPED_DIRS.contains(&name.as_ref()) {
            return true;
        }
        entry
            .path()
            .strip_prefix(&self.root)
            .is_ok_and(|rel| self.excluded_folders.iter().any(|ex| rel.starts_with(ex)))
    }

    fn is_document(&self, path: &Path) -> bool {
        path.extension().and_then(|e| e.to_str()).is_some_and(|e| e == self.extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn vault(files: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for file in files {
            let path = dir.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "").unwrap();
        }
        dir
    }

    fn walked(walker: &VaultWalker) -> Vec<String> {
        walker.walk().unwrap().iter().map(WalkedFile::vault_path).collect()
    }

    #[test]
    fn lists_notes_in_path_order() {
        let dir = vault(&["b.md", "People/Zed.md", "a.md", "People/Amy.md", "notes.txt"]);
        let walker = VaultWalker::new(dir.path()).unwrap();
        assert_eq!(walked(&walker), vec!["People/Amy.md", "People/Zed.md", "a.md", "b.md"]);
    }

    #[test]
    fn skips_hidden_and_tooling_directories() {
        let dir = vault(&[
            "keep.md",
            ".obsidian/workspace.md",
            ".atlink/cache.md",
            "node_modules/pkg/README.md",
        ]);
        let walker = VaultWalker::new(dir.path()).unwrap();
        assert_eq!(walked(&walker), vec!["keep.md"]);
    }

    #[test]
    fn honours_relative_and_absolute_exclusions() {
        let dir = vault(&["Inbox.md", "Templates/Person.md", "Archive/2020/old.md", "Area/x.md"]);
        let root = dir.path().canonicalize().unwrap();
        let excluded = vec![PathBuf::from("Templates"), root.join("Archive")];
        let walker = VaultWalker::with_exclusions(dir.path(), excluded).unwrap();
        assert_eq!(walked(&walker), vec!["Area/x.md", "Inbox.md"]);
    }

    #[test]
    fn exclusion_matches_whole_components() {
        let dir = vault(&["Temp/a.md", "Templates/b.md"]);
        let walker =
            VaultWalker::with_exclusions(dir.path(), vec![PathBuf::from("Temp")]).unwrap();
        assert_eq!(walked(&walker), vec!["Templates/b.md"]);
    }

    #[test]
    fn custom_extension() {
        let dir = vault(&["a.md", "b.txt"]);
        let walker = VaultWalker::new(dir.path()).unwrap().with_extension(".txt");
        assert_eq!(walked(&walker), vec!["b.txt"]);
    }

    #[test]
    fn missing_root_is_an_error() {
        let err = VaultWalker::new(Path::new("/nonexistent/atlink-vault")).unwrap_err();
        assert!(matches!(err, VaultWalkerError::MissingRoot(_)));
    }
}
