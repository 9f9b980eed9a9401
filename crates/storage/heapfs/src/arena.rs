//! File arena
//!
//! Live files are owned here, indexed by id. Directory tables reference
//! files by id only, which keeps parent and child directories from owning
//! each other. Each file sits behind its own read/write lock; the layer
//! above acquires it before touching content, per the engine's locking
//! contract.
//!
//! Removing a file drops it once the last handle goes away; a regular
//! file's blocks return to the disk's free stack at that point.

use alloc::collections::BTreeMap;
use alloc::sync::Arc;

use spin::RwLock;

use crate::file::{File, FileId};

/// Shared handle to a live file
pub type FileHandle = Arc<RwLock<File>>;

/// Id-indexed table of live files
#[derive(Default)]
pub struct FileArena {
    files: RwLock<BTreeMap<FileId, FileHandle>>,
}

impl FileArena {
    /// Create an empty arena
    pub fn new() -> Self {
        FileArena {
            files: RwLock::new(BTreeMap::new()),
        }
    }

    /// Take ownership of a file and return a handle to it
    pub fn insert(&self, file: File) -> FileHandle {
        let id = file.id();
        let handle = Arc::new(RwLock::new(file));
        self.files.write().insert(id, handle.clone());
        handle
    }

    /// Look up a live file by id
    pub fn get(&self, id: FileId) -> Option<FileHandle> {
        self.files.read().get(&id).cloned()
    }

    /// Drop a file from the arena.
    ///
    /// Returns whether the id was present. The file itself is dropped
    /// when the last outstanding handle goes away.
    pub fn remove(&self, id: FileId) -> bool {
        let removed = self.files.write().remove(&id).is_some();
        if removed {
            log::debug!("arena: removed file {}", id);
        }
        removed
    }

    /// Number of live files
    pub fn len(&self) -> usize {
        self.files.read().len()
    }

    /// Check if the arena holds no files
    pub fn is_empty(&self) -> bool {
        self.files.read().is_empty()
    }
}
