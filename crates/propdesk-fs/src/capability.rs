//! The directory capability abstraction
//!
//! A capability is an opaque handle to one directory. Handles for children are
//! derived from their parent, so access can never escape the tree the user
//! authorized. Capabilities are process-local and never serialized.

use propdesk_core::prelude::*;

/// Kind of an immediate directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// Immediate child of a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
        }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// Scoped read-write handle to a directory
#[trait_variant::make(DirectoryCapability: Send)]
pub trait LocalDirectoryCapability {
    /// Final component of the directory path (what the user picked)
    fn name(&self) -> &str;

    /// Human-readable location used in listings and messages
    fn display_path(&self) -> String;

    /// Immediate children, in no particular order
    async fn list_entries(&self) -> Result<Vec<DirEntry>>;

    /// Handle for a child directory, creating it first when `create` is set
    async fn child(&self, name: &str, create: bool) -> Result<Self>
    where
        Self: Sized;

    /// Full text of a file in this directory
    async fn read_text(&self, file_name: &str) -> Result<String>;

    /// Replace a file's content in one commit.
    ///
    /// Readers observe either the old or the new content, never a partial
    /// write. Fails with [`Error::WriteFailure`].
    async fn write_text(&self, file_name: &str, contents: &str) -> Result<()>;
}

/// Reject names that would leave the directory (`..`, separators, empty).
pub fn validate_entry_name(name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
        || name.contains('\0');

    if invalid {
        return Err(Error::validation(format!(
            "'{}' is not a plain entry name",
            name
        )));
    }
    Ok(())
}
