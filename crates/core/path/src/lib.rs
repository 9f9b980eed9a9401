//! heapfs naming policy layer
//!
//! Provides path component names, structured paths, and the per-platform
//! naming conventions used by the storage engine.
//!
//! Supports:
//! - Unix-style paths (`/foo/bar`)
//! - Windows-style paths (`C:\folder\file`, `C:/folder/file`)
//! - Case-insensitive name comparison where the convention calls for it
//! - Root token detection and canonicalization
//!
//! Every platform-specific lexical rule lives behind the [`NamingPolicy`]
//! trait, so the storage engine itself never branches on platform. A policy
//! is chosen once at filesystem construction and is immutable afterwards.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::hash::{Hash, Hasher};

/// Maximum length of a single path component
pub const MAX_NAME: usize = 255;

/// Result type for naming and parsing operations
pub type PathResult<T> = Result<T, PathError>;

/// Errors produced while building names or parsing paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Component is empty, overlong, or contains a separator or NUL
    InvalidName(String),
    /// Root token does not match the policy's root convention
    MalformedRoot(String),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::InvalidName(name) => write!(f, "invalid name: {:?}", name),
            PathError::MalformedRoot(root) => write!(f, "malformed root: {:?}", root),
        }
    }
}

/// A path component carrying both its original spelling and the canonical
/// form used for equality and lookups.
///
/// Two names are equal iff their canonical forms match; the display form
/// is preserved untouched for presentation.
#[derive(Debug, Clone)]
pub struct Name {
    display: String,
    canonical: String,
}

impl Name {
    /// Create a name with distinct display and canonical forms
    pub fn new(display: &str, canonical: &str) -> Self {
        Name {
            display: String::from(display),
            canonical: String::from(canonical),
        }
    }

    /// Create a name whose canonical form is its spelling
    pub fn simple(s: &str) -> Self {
        Name {
            display: String::from(s),
            canonical: String::from(s),
        }
    }

    /// Original spelling, for display
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Canonical form, for comparison and lookup
    pub fn canonical(&self) -> &str {
        &self.canonical
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for Name {}

impl Hash for Name {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical.hash(state);
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

/// A parsed path: an optional root plus the ordered component names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPath {
    root: Option<Name>,
    names: Vec<Name>,
}

impl ParsedPath {
    /// Assemble a path from an optional root and component names
    pub fn new(root: Option<Name>, names: Vec<Name>) -> Self {
        ParsedPath { root, names }
    }

    /// An empty, rootless path
    pub fn empty() -> Self {
        ParsedPath {
            root: None,
            names: Vec::new(),
        }
    }

    /// The root name, if a root was present in the input
    pub fn root(&self) -> Option<&Name> {
        self.root.as_ref()
    }

    /// Component names in order, root excluded
    pub fn names(&self) -> &[Name] {
        &self.names
    }

    /// Check if the path had a root
    pub fn is_absolute(&self) -> bool {
        self.root.is_some()
    }

    /// Check if the path has neither root nor components
    pub fn is_empty(&self) -> bool {
        self.root.is_none() && self.names.is_empty()
    }

    /// The final component, if any
    pub fn file_name(&self) -> Option<&Name> {
        self.names.last()
    }
}

/// Per-platform naming convention
///
/// Implementations hold only immutable policy values and are safe to share
/// freely across threads.
pub trait NamingPolicy: Send + Sync {
    /// Primary path separator
    fn separator(&self) -> char;

    /// Separators accepted on input and normalized to the primary on output
    fn alternate_separators(&self) -> &[char];

    /// Recognized root spellings
    fn roots(&self) -> &[String];

    /// Default working directory for new filesystem instances
    fn working_directory(&self) -> &str;

    /// User name seeded into ownership attributes at file creation
    fn default_user(&self) -> &str;

    /// ACL entries seeded into new files, when the convention carries any
    fn default_acl(&self) -> &[String] {
        &[]
    }

    /// Build a [`Name`], applying the policy's canonicalization.
    ///
    /// Root names receive a root-specific canonical form; non-root names
    /// must be plain components (no separators, no NUL, length-bounded).
    fn create_name(&self, raw: &str, is_root: bool) -> PathResult<Name>;

    /// Detect a root token at the start of a joined path string.
    ///
    /// Returns the length of the root prefix in bytes, or `None` when the
    /// string does not begin with a root under this convention.
    fn match_root(&self, joined: &str) -> Option<usize>;

    /// Check whether a character is the primary or an alternate separator
    fn is_separator(&self, c: char) -> bool {
        c == self.separator() || self.alternate_separators().contains(&c)
    }

    /// Parse raw path components into a structured path.
    ///
    /// The components are joined on the primary separator, an optional root
    /// prefix is split off, and the remainder is divided on the primary and
    /// all alternate separators. Empty segments are discarded, so repeated
    /// or trailing separators collapse. A separator-only input yields an
    /// empty, rootless path.
    fn parse_path(&self, components: &[&str]) -> PathResult<ParsedPath> {
        let mut joined = String::new();
        for (i, part) in components.iter().enumerate() {
            if i > 0 {
                joined.push(self.separator());
            }
            joined.push_str(part);
        }

        let mut root = None;
        let mut rest = joined.as_str();
        if let Some(len) = self.match_root(rest) {
            root = Some(self.create_name(&rest[..len], true)?);
            rest = &rest[len..];
        }

        let mut names = Vec::new();
        for segment in rest.split(|c: char| self.is_separator(c)) {
            if segment.is_empty() {
                continue;
            }
            names.push(self.create_name(segment, false)?);
        }

        Ok(ParsedPath::new(root, names))
    }

    /// Render a structured path back to a string using the primary separator
    fn display(&self, path: &ParsedPath) -> String {
        let mut out = String::new();
        if let Some(root) = path.root() {
            out.push_str(root.display());
            if !out.ends_with(self.separator()) {
                out.push(self.separator());
            }
        }
        for (i, name) in path.names().iter().enumerate() {
            if i > 0 {
                out.push(self.separator());
            }
            out.push_str(name.display());
        }
        out
    }
}

/// Validate a plain (non-root) component
fn check_component(raw: &str, policy: &dyn NamingPolicy) -> PathResult<()> {
    if raw.is_empty() || raw.len() > MAX_NAME {
        return Err(PathError::InvalidName(raw.to_string()));
    }
    if raw.contains('\0') || raw.chars().any(|c| policy.is_separator(c)) {
        return Err(PathError::InvalidName(raw.to_string()));
    }
    Ok(())
}

/// Unix-style naming: `/` separator, single `/` root, case-sensitive names
pub struct UnixPolicy {
    roots: Vec<String>,
    working_directory: String,
    default_user: String,
}

impl UnixPolicy {
    /// Policy with `/` as the sole root and `/work` as the working directory
    pub fn new() -> Self {
        Self::with_defaults("/work", "user")
    }

    /// Policy with explicit working directory and default user
    pub fn with_defaults(working_directory: &str, default_user: &str) -> Self {
        UnixPolicy {
            roots: alloc::vec![String::from("/")],
            working_directory: String::from(working_directory),
            default_user: String::from(default_user),
        }
    }
}

impl Default for UnixPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl NamingPolicy for UnixPolicy {
    fn separator(&self) -> char {
        '/'
    }

    fn alternate_separators(&self) -> &[char] {
        &[]
    }

    fn roots(&self) -> &[String] {
        &self.roots
    }

    fn working_directory(&self) -> &str {
        &self.working_directory
    }

    fn default_user(&self) -> &str {
        &self.default_user
    }

    fn create_name(&self, raw: &str, is_root: bool) -> PathResult<Name> {
        if is_root {
            if raw != "/" {
                return Err(PathError::MalformedRoot(raw.to_string()));
            }
            return Ok(Name::simple("/"));
        }
        check_component(raw, self)?;
        Ok(Name::simple(raw))
    }

    fn match_root(&self, joined: &str) -> Option<usize> {
        if joined.starts_with('/') {
            Some(1)
        } else {
            None
        }
    }
}

/// Windows-style naming: `\` separator with `/` accepted, drive-letter
/// roots, case-insensitive names.
///
/// Root names canonicalize to `UPPERCASE` with a trailing separator
/// (`c:` compares equal to `C:\`); other names canonicalize by ASCII
/// case folding, so `Foo.txt` and `foo.TXT` collide in one directory.
pub struct WindowsPolicy {
    roots: Vec<String>,
    working_directory: String,
    default_user: String,
    default_acl: Vec<String>,
}

impl WindowsPolicy {
    /// Policy with a single `C:\` root and `C:\work` as the working directory
    pub fn new() -> Self {
        Self::with_defaults("C:\\work", "user", &["C:\\"])
    }

    /// Policy with explicit working directory, default user, and roots
    pub fn with_defaults(working_directory: &str, default_user: &str, roots: &[&str]) -> Self {
        WindowsPolicy {
            roots: roots.iter().map(|r| String::from(*r)).collect(),
            working_directory: String::from(working_directory),
            default_user: String::from(default_user),
            default_acl: Vec::new(),
        }
    }

    /// Attach ACL entries seeded into newly created files
    pub fn with_default_acl(mut self, entries: &[&str]) -> Self {
        self.default_acl = entries.iter().map(|e| String::from(*e)).collect();
        self
    }
}

impl Default for WindowsPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl NamingPolicy for WindowsPolicy {
    fn separator(&self) -> char {
        '\\'
    }

    fn alternate_separators(&self) -> &[char] {
        &['/']
    }

    fn roots(&self) -> &[String] {
        &self.roots
    }

    fn working_directory(&self) -> &str {
        &self.working_directory
    }

    fn default_user(&self) -> &str {
        &self.default_user
    }

    fn default_acl(&self) -> &[String] {
        &self.default_acl
    }

    fn create_name(&self, raw: &str, is_root: bool) -> PathResult<Name> {
        if is_root {
            if drive_letter(raw).is_none() {
                return Err(PathError::MalformedRoot(raw.to_string()));
            }
            // accept "c:" with or without one trailing separator
            let tail = &raw[2..];
            let tail_ok = tail.is_empty()
                || (tail.len() == 1 && tail.chars().all(|c| self.is_separator(c)));
            if !tail_ok {
                return Err(PathError::MalformedRoot(raw.to_string()));
            }
            let mut canonical = raw[..2].to_ascii_uppercase();
            canonical.push(self.separator());
            return Ok(Name::new(raw, &canonical));
        }
        check_component(raw, self)?;
        Ok(Name::new(raw, &raw.to_ascii_lowercase()))
    }

    fn match_root(&self, joined: &str) -> Option<usize> {
        drive_letter(joined).map(|_| 2)
    }
}

/// Check if a string starts with a drive letter (e.g., `C:` or `c:\`)
pub fn drive_letter(s: &str) -> Option<char> {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 && bytes[1] == b':' && bytes[0].is_ascii_alphabetic() {
        Some((bytes[0] as char).to_ascii_uppercase())
    } else {
        None
    }
}
