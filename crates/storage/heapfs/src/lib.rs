//! heapfs - in-memory filesystem storage core
//!
//! The storage engine of an in-process virtual file system: everything
//! lives on the heap, nothing persists, and the OS-facing call surface
//! (open/read/write/seek, channels, attribute views) sits in a layer
//! above this crate.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │        OS-integration layer (above)      │
//! └──────┬───────────────┬───────────────────┘
//!        │ create/copy   │ resolve
//! ┌──────▼──────┐ ┌──────▼──────────────────┐
//! │ FileService │ │ NamingPolicy            │
//! │ FileArena   │ │ (heapfs-path)           │
//! └──────┬──────┘ └─────────────────────────┘
//!        │ File = id + content + attributes
//! ┌──────▼──────────────────────────────────┐
//! │ ByteStore │ DirTable │ link target      │
//! └──────┬──────────────────────────────────┘
//!        │ block index operations
//! ┌──────▼──────────────────────────────────┐
//! │ Disk - fixed-size block pool            │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Locking model
//!
//! - File ids come from an atomic counter; no lock.
//! - The disk is shared as `Arc<spin::Mutex<Disk>>`; allocation, free,
//!   and block copies serialize on it.
//! - Each file sits behind its own `spin::RwLock` in the arena; the
//!   layer above takes it for reading or writing before touching
//!   content.
//! - Naming policies are immutable and shared freely.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod arena;
pub mod attr;
pub mod dir;
pub mod disk;
pub mod error;
pub mod file;
pub mod fs;
pub mod service;
pub mod store;

pub use arena::{FileArena, FileHandle};
pub use attr::{AttributeStore, BasicAttributes};
pub use dir::{DirEntry, DirTable};
pub use disk::{Disk, DiskStats, DEFAULT_BLOCK_SIZE};
pub use error::{FsError, FsResult};
pub use file::{File, FileContent, FileId, FileType};
pub use fs::HeapFs;
pub use service::{CreateKind, FileService};
pub use store::ByteStore;

// Re-export the naming layer so engine users need only one dependency
pub use heapfs_path as path;
