//! File identity and content
//!
//! A file is a process-unique id, exactly one content variant, and a
//! namespaced attribute table. Content variants form a closed set:
//! regular byte content, a directory table, or a symbolic-link target.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use heapfs_path::ParsedPath;

use crate::dir::DirTable;
use crate::error::FsResult;
use crate::store::ByteStore;

/// Process-unique file identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileId(pub u64);

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// File type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    /// Regular file
    Regular,
    /// Directory
    Directory,
    /// Symbolic link
    Symlink,
}

/// A file's content: exactly one variant
pub enum FileContent {
    /// Regular file bytes
    Bytes(ByteStore),
    /// Directory table
    Table(DirTable),
    /// Symbolic-link target path
    Link(ParsedPath),
}

impl FileContent {
    /// The file type this content implies
    pub fn file_type(&self) -> FileType {
        match self {
            FileContent::Bytes(_) => FileType::Regular,
            FileContent::Table(_) => FileType::Directory,
            FileContent::Link(_) => FileType::Symlink,
        }
    }

    /// Duplicate this content for a file copy.
    ///
    /// Byte content is copied block by block, directory content copies
    /// the entry mapping but not the referenced files, and a link target
    /// is cloned by value.
    pub fn duplicate(&self) -> FsResult<FileContent> {
        Ok(match self {
            FileContent::Bytes(store) => FileContent::Bytes(store.duplicate()?),
            FileContent::Table(table) => FileContent::Table(table.duplicate()),
            FileContent::Link(target) => FileContent::Link(target.clone()),
        })
    }
}

/// A file: unique id, one content variant, attribute table
pub struct File {
    id: FileId,
    content: FileContent,
    attrs: BTreeMap<String, String>,
}

impl File {
    /// Create a file with the given id and content and no attributes
    pub fn new(id: FileId, content: FileContent) -> Self {
        File {
            id,
            content,
            attrs: BTreeMap::new(),
        }
    }

    /// This file's id
    pub fn id(&self) -> FileId {
        self.id
    }

    /// This file's type
    pub fn file_type(&self) -> FileType {
        self.content.file_type()
    }

    /// Check if this is a directory
    pub fn is_directory(&self) -> bool {
        self.file_type() == FileType::Directory
    }

    /// Check if this is a regular file
    pub fn is_regular(&self) -> bool {
        self.file_type() == FileType::Regular
    }

    /// Check if this is a symbolic link
    pub fn is_symlink(&self) -> bool {
        self.file_type() == FileType::Symlink
    }

    /// The content object
    pub fn content(&self) -> &FileContent {
        &self.content
    }

    /// Byte content, when this is a regular file
    pub fn bytes(&self) -> Option<&ByteStore> {
        match &self.content {
            FileContent::Bytes(store) => Some(store),
            _ => None,
        }
    }

    /// Mutable byte content, when this is a regular file
    pub fn bytes_mut(&mut self) -> Option<&mut ByteStore> {
        match &mut self.content {
            FileContent::Bytes(store) => Some(store),
            _ => None,
        }
    }

    /// Directory table, when this is a directory
    pub fn table(&self) -> Option<&DirTable> {
        match &self.content {
            FileContent::Table(table) => Some(table),
            _ => None,
        }
    }

    /// Mutable directory table, when this is a directory
    pub fn table_mut(&mut self) -> Option<&mut DirTable> {
        match &mut self.content {
            FileContent::Table(table) => Some(table),
            _ => None,
        }
    }

    /// Link target, when this is a symbolic link
    pub fn link_target(&self) -> Option<&ParsedPath> {
        match &self.content {
            FileContent::Link(target) => Some(target),
            _ => None,
        }
    }

    /// Look up an attribute by provider namespace and name
    pub fn attribute(&self, namespace: &str, name: &str) -> Option<&str> {
        self.attrs.get(&attr_key(namespace, name)).map(String::as_str)
    }

    /// Set an attribute under a provider namespace
    pub fn set_attribute(&mut self, namespace: &str, name: &str, value: &str) {
        self.attrs.insert(attr_key(namespace, name), String::from(value));
    }

    /// Attribute names defined under a provider namespace
    pub fn attribute_names(&self, namespace: &str) -> Vec<String> {
        let prefix = attr_key(namespace, "");
        self.attrs
            .keys()
            .filter(|key| key.starts_with(&prefix))
            .map(|key| String::from(&key[prefix.len()..]))
            .collect()
    }

    /// Replace this file's attribute table with a copy of another's.
    ///
    /// Used by file copies, which carry metadata over instead of
    /// re-initializing it.
    pub fn copy_attributes_from(&mut self, other: &File) {
        self.attrs = other.attrs.clone();
    }
}

fn attr_key(namespace: &str, name: &str) -> String {
    let mut key = String::from(namespace);
    key.push(':');
    key.push_str(name);
    key
}
