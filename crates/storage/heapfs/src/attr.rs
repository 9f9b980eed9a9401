//! Attribute store contract
//!
//! The engine does not interpret attribute semantics; it only carries a
//! namespaced string table per file and calls out to an attribute store
//! at creation time. Attribute-view families (POSIX, DOS, ACL) live in
//! the layer above and implement this trait.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::sync::atomic::{AtomicU64, Ordering};

use heapfs_path::NamingPolicy;

use crate::error::{FsError, FsResult};
use crate::file::File;

/// Contract between the engine and the attribute layer
pub trait AttributeStore: Send + Sync {
    /// Populate a freshly created file's attribute table.
    ///
    /// A failure here propagates out of file creation; no partial file
    /// becomes visible.
    fn set_initial_attributes(&self, file: &mut File) -> FsResult<()>;

    /// Read an attribute by provider namespace and name
    fn get(&self, file: &File, namespace: &str, name: &str) -> Option<String>;

    /// Set an attribute by provider namespace and name
    fn set(&self, file: &mut File, namespace: &str, name: &str, value: &str) -> FsResult<()>;

    /// List attribute names under a provider namespace
    fn list(&self, file: &File, namespace: &str) -> Vec<String>;
}

/// Minimal attribute store: `basic:*` stamps plus an ownership seed.
///
/// Timestamps come from a logical clock (one tick per stamped event),
/// since nothing in this engine touches wall-clock time.
pub struct BasicAttributes {
    default_user: String,
    default_acl: Vec<String>,
    clock: AtomicU64,
}

impl BasicAttributes {
    /// Store seeding ownership from the given user name
    pub fn new(default_user: &str) -> Self {
        BasicAttributes {
            default_user: String::from(default_user),
            default_acl: Vec::new(),
            clock: AtomicU64::new(0),
        }
    }

    /// Store seeding ownership and ACL entries from a naming policy
    pub fn for_policy(policy: &dyn NamingPolicy) -> Self {
        let mut attrs = Self::new(policy.default_user());
        attrs.default_acl = policy.default_acl().to_vec();
        attrs
    }

    fn tick(&self) -> u64 {
        self.clock.fetch_add(1, Ordering::Relaxed)
    }
}

impl AttributeStore for BasicAttributes {
    fn set_initial_attributes(&self, file: &mut File) -> FsResult<()> {
        let now = self.tick().to_string();
        file.set_attribute("basic", "created", &now);
        file.set_attribute("basic", "modified", &now);
        file.set_attribute("owner", "user", &self.default_user);
        if !self.default_acl.is_empty() {
            file.set_attribute("acl", "entries", &self.default_acl.join(";"));
        }
        Ok(())
    }

    fn get(&self, file: &File, namespace: &str, name: &str) -> Option<String> {
        file.attribute(namespace, name).map(String::from)
    }

    fn set(&self, file: &mut File, namespace: &str, name: &str, value: &str) -> FsResult<()> {
        if namespace.is_empty() || name.is_empty() {
            return Err(FsError::AttributeRejected);
        }
        file.set_attribute(namespace, name, value);
        file.set_attribute("basic", "modified", &self.tick().to_string());
        Ok(())
    }

    fn list(&self, file: &File, namespace: &str) -> Vec<String> {
        file.attribute_names(namespace)
    }
}
