//! Directory content
//!
//! A directory table maps component names to file ids. The table does
//! not own the referenced files; ownership lives in the file arena, and
//! entries are plain id references. Names are unique under the active
//! naming policy's canonicalization, and enumeration preserves insertion
//! order.

use alloc::vec::Vec;

use heapfs_path::Name;

use crate::error::{FsError, FsResult};
use crate::file::FileId;

/// One directory entry: a name and the id of the file it references
#[derive(Debug, Clone)]
pub struct DirEntry {
    /// Entry name
    pub name: Name,
    /// Referenced file id
    pub id: FileId,
}

/// A directory's content: name-to-id mapping plus parent linkage
#[derive(Debug, Clone, Default)]
pub struct DirTable {
    entries: Vec<DirEntry>,
    parent: Option<FileId>,
}

impl DirTable {
    /// Create an empty table with no parent
    pub fn new() -> Self {
        DirTable {
            entries: Vec::new(),
            parent: None,
        }
    }

    /// The id of the containing directory, if linked into a tree
    pub fn parent(&self) -> Option<FileId> {
        self.parent
    }

    /// Set the containing directory ("..")
    pub fn set_parent(&mut self, parent: FileId) {
        self.parent = Some(parent);
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by name (canonical-form comparison)
    pub fn get(&self, name: &Name) -> Option<FileId> {
        self.entries
            .iter()
            .find(|entry| entry.name == *name)
            .map(|entry| entry.id)
    }

    /// Insert an entry.
    ///
    /// Rejected when an entry with the same canonical name exists; the
    /// existing entry is left untouched and the caller decides the
    /// overwrite policy.
    pub fn insert(&mut self, name: Name, id: FileId) -> FsResult<()> {
        if self.get(&name).is_some() {
            return Err(FsError::AlreadyExists);
        }
        self.entries.push(DirEntry { name, id });
        Ok(())
    }

    /// Remove an entry by name, returning the referenced id
    pub fn remove(&mut self, name: &Name) -> Option<FileId> {
        let pos = self.entries.iter().position(|entry| entry.name == *name)?;
        Some(self.entries.remove(pos).id)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &DirEntry> {
        self.entries.iter()
    }

    /// Copy the entry mapping.
    ///
    /// The referenced files are shared, not copied, and the parent link
    /// is cleared; the caller re-links the copy where it gets inserted.
    pub fn duplicate(&self) -> DirTable {
        DirTable {
            entries: self.entries.clone(),
            parent: None,
        }
    }
}
