//! # propdesk-core - Core Domain Types
//!
//! Foundation crate for propdesk. Provides domain types, the properties
//! codec, the row search index, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`ConfigEntry`] - One `key=value` row of an open file
//! - [`Column`] - Which half of a row is being edited
//! - [`EnvironmentMode`] - `Online` (read-only) or `Local` (editable)
//! - [`Project`] - A directory under `{root}/data`
//! - [`ConfigFile`] - A `*.properties` file inside a project's `config-cache`
//!
//! ### Properties Codec (`properties`)
//! - [`decode()`] - Parse properties text into ordered entries
//! - [`encode()`] - Serialize entries back to text (lossy: comments dropped)
//!
//! ### Search (`search`)
//! - [`SearchIndex`] - Substring matches over the row table with a wrapping cursor
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error taxonomy (cancelled, not found, permission, validation, write)
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use propdesk_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod prelude;
pub mod properties;
pub mod search;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use properties::{decode, encode};
pub use search::SearchIndex;
pub use types::{
    AccessMode, Column, ConfigEntry, ConfigFile, EnvironmentMode, Project, PROPERTIES_EXTENSION,
};
