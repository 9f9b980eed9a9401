//! Filesystem instance
//!
//! Wires one naming policy, one disk, one file service, and one arena
//! into a filesystem value, and creates a directory for each root the
//! policy recognizes. Path resolution against the tree stays in the
//! layer above; this type only holds the pieces together and exposes
//! the roots.

use alloc::sync::Arc;
use alloc::vec::Vec;

use heapfs_path::{Name, NamingPolicy};
use spin::Mutex;

use crate::arena::{FileArena, FileHandle};
use crate::attr::{AttributeStore, BasicAttributes};
use crate::disk::{Disk, DiskStats, DEFAULT_BLOCK_SIZE};
use crate::error::FsResult;
use crate::service::FileService;

/// An in-memory filesystem instance
pub struct HeapFs {
    policy: Arc<dyn NamingPolicy>,
    disk: Arc<Mutex<Disk>>,
    service: FileService,
    arena: FileArena,
    roots: Vec<(Name, FileHandle)>,
}

impl HeapFs {
    /// Create an instance with the default block size and basic attributes
    pub fn new(policy: Arc<dyn NamingPolicy>) -> FsResult<Self> {
        Self::with_block_size(policy, DEFAULT_BLOCK_SIZE)
    }

    /// Create an instance with an explicit block size
    pub fn with_block_size(policy: Arc<dyn NamingPolicy>, block_size: usize) -> FsResult<Self> {
        let attrs = Arc::new(BasicAttributes::for_policy(policy.as_ref()));
        Self::with_parts(policy, Disk::new(block_size), attrs)
    }

    /// Create an instance from explicit parts
    pub fn with_parts(
        policy: Arc<dyn NamingPolicy>,
        disk: Disk,
        attrs: Arc<dyn AttributeStore>,
    ) -> FsResult<Self> {
        let disk = Arc::new(Mutex::new(disk));
        let service = FileService::new(disk.clone(), attrs);
        let arena = FileArena::new();

        let mut roots = Vec::new();
        for spelling in policy.roots() {
            let name = policy.create_name(spelling, true)?;
            let mut dir = service.create_directory()?;
            // a root is its own parent, the "/.." convention
            let id = dir.id();
            if let Some(table) = dir.table_mut() {
                table.set_parent(id);
            }
            let handle = arena.insert(dir);
            roots.push((name, handle));
        }

        log::debug!("heapfs: instance up with {} root(s)", roots.len());
        Ok(HeapFs {
            policy,
            disk,
            service,
            arena,
            roots,
        })
    }

    /// The naming policy this instance was built with
    pub fn policy(&self) -> &Arc<dyn NamingPolicy> {
        &self.policy
    }

    /// The shared disk
    pub fn disk(&self) -> &Arc<Mutex<Disk>> {
        &self.disk
    }

    /// Disk usage counters
    pub fn disk_stats(&self) -> DiskStats {
        self.disk.lock().stats()
    }

    /// The file service
    pub fn service(&self) -> &FileService {
        &self.service
    }

    /// The file arena
    pub fn arena(&self) -> &FileArena {
        &self.arena
    }

    /// Look up a root directory by name
    pub fn root(&self, name: &Name) -> Option<FileHandle> {
        self.roots
            .iter()
            .find(|(root, _)| root == name)
            .map(|(_, handle)| handle.clone())
    }

    /// All root directories in policy order
    pub fn roots(&self) -> impl Iterator<Item = &(Name, FileHandle)> {
        self.roots.iter()
    }
}
