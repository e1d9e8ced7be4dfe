//! Document stores backing the candidate index.
//!
//! [`FsDocumentStore`] serves a vault on disk; [`MemoryStore`] keeps
//! everything in memory for embedding hosts and tests.

pub mod memory;
pub mod store;
pub mod walker;

pub use memory::MemoryStore;
pub use store::FsDocumentStore;
pub use walker::{VaultWalker, VaultWalkerError, WalkedFile};

use std::path::{Component, Path};

use crate::host::StoreError;

/// Reject absolute paths and `..` so documents stay inside the vault.
pub(crate) fn check_vault_path(path: &str) -> Result<(), StoreError> {
    let p = Path::new(path);
    let escapes = p.is_absolute()
        || path.starts_with('/')
        || p.components().any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)));
    if path.trim().is_empty() || escapes {
        return Err(StoreError::InvalidPath(path.to_string()));
    }
    Ok(())
}
