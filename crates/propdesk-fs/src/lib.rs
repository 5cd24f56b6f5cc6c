//! # propdesk-fs - Directory Capabilities
//!
//! Scoped access to the authorized directory tree. Every filesystem call the
//! application makes goes through a [`DirectoryCapability`]; nothing above
//! this crate touches paths directly.
//!
//! Depends on [`propdesk_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Capability Trait
//! - [`DirectoryCapability`] - List, descend, read and atomically write within one directory
//! - [`DirEntry`], [`EntryKind`] - Immediate children of a directory
//!
//! ### Implementations
//! - [`FsDirectory`] - Path-backed capability with explicit permission checks
//! - [`MemoryDirectory`] - In-memory tree with failure injection (`test-helpers`)

pub mod capability;
pub mod local;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

// Public API re-exports
pub use capability::{
    validate_entry_name, DirEntry, DirectoryCapability, EntryKind, LocalDirectoryCapability,
};
pub use local::FsDirectory;
#[cfg(any(test, feature = "test-helpers"))]
pub use test_utils::MemoryDirectory;
