//! File creation and identity allocation
//!
//! The file service hands out process-unique ids from an atomic counter
//! and constructs files of each content kind. Creation consumes an id
//! permanently, even when the caller discards the file.

use alloc::sync::Arc;
use core::sync::atomic::{AtomicU64, Ordering};

use heapfs_path::ParsedPath;
use spin::Mutex;

use crate::attr::AttributeStore;
use crate::dir::DirTable;
use crate::disk::Disk;
use crate::error::FsResult;
use crate::file::{File, FileContent, FileId};
use crate::store::ByteStore;

/// Which kind of file a deferred creation should produce.
///
/// Lookup code that implements create-if-absent carries one of these
/// instead of depending on the service's constructors; the set of
/// creatable kinds is closed, so a tagged variant replaces dynamic
/// dispatch.
#[derive(Debug, Clone)]
pub enum CreateKind {
    /// An empty directory
    Directory,
    /// An empty regular file
    RegularFile,
    /// A symbolic link to the given target
    SymbolicLink(ParsedPath),
}

/// Factory and identity allocator for files
pub struct FileService {
    ids: AtomicU64,
    disk: Arc<Mutex<Disk>>,
    attrs: Arc<dyn AttributeStore>,
}

impl FileService {
    /// Create a service allocating from the given disk
    pub fn new(disk: Arc<Mutex<Disk>>, attrs: Arc<dyn AttributeStore>) -> Self {
        FileService {
            ids: AtomicU64::new(0),
            disk,
            attrs,
        }
    }

    /// Allocate the next file id.
    ///
    /// Strictly increasing and unique for this service's lifetime; safe
    /// under concurrent invocation without locking.
    pub fn next_id(&self) -> FileId {
        FileId(self.ids.fetch_add(1, Ordering::Relaxed))
    }

    /// The disk this service allocates file content from
    pub fn disk(&self) -> &Arc<Mutex<Disk>> {
        &self.disk
    }

    fn build(&self, content: FileContent) -> FsResult<File> {
        let mut file = File::new(self.next_id(), content);
        self.attrs.set_initial_attributes(&mut file)?;
        log::debug!("service: created {:?} file {}", file.file_type(), file.id());
        Ok(file)
    }

    /// Create a directory with an empty table
    pub fn create_directory(&self) -> FsResult<File> {
        self.build(FileContent::Table(DirTable::new()))
    }

    /// Create a regular file with empty content
    pub fn create_regular_file(&self) -> FsResult<File> {
        self.build(FileContent::Bytes(ByteStore::new(self.disk.clone())))
    }

    /// Create a symbolic link to the given target
    pub fn create_symbolic_link(&self, target: ParsedPath) -> FsResult<File> {
        self.build(FileContent::Link(target))
    }

    /// Create a file of the given kind
    pub fn create(&self, kind: CreateKind) -> FsResult<File> {
        match kind {
            CreateKind::Directory => self.create_directory(),
            CreateKind::RegularFile => self.create_regular_file(),
            CreateKind::SymbolicLink(target) => self.create_symbolic_link(target),
        }
    }

    /// Deep-copy a file under a fresh id.
    ///
    /// Content duplicates per its kind; the attribute table is carried
    /// over from the source rather than re-initialized.
    pub fn copy(&self, file: &File) -> FsResult<File> {
        let mut copy = File::new(self.next_id(), file.content().duplicate()?);
        copy.copy_attributes_from(file);
        log::debug!("service: copied file {} as {}", file.id(), copy.id());
        Ok(copy)
    }
}
