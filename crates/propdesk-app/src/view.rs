//! Snapshot of the workbench published to the UI
//!
//! Everything a renderer or the headless report needs, with no capability
//! handles inside, so it can cross a channel and be serialized.

use propdesk_core::{ConfigEntry, ConfigFile, EnvironmentMode, Project, SearchIndex};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorkbenchView {
    /// Bumped by the engine after every processed command
    pub revision: u64,
    pub authorized: bool,
    /// Display path of the authorized root
    pub root_path: Option<String>,
    pub environment: EnvironmentMode,
    pub projects: Vec<Project>,
    pub current_project: Option<Project>,
    pub files: Vec<ConfigFile>,
    pub editor: Option<EditorView>,
    pub quit: bool,
}

impl WorkbenchView {
    pub fn is_local(&self) -> bool {
        self.environment.is_local()
    }
}

/// The open file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorView {
    pub project: String,
    pub file: ConfigFile,
    pub rows: Vec<RowView>,
    pub dirty: bool,
    pub search: SearchView,
    /// Row to scroll into view (last added row or current match)
    pub focus_row: Option<usize>,
}

/// One row of the entry table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub key: String,
    pub value: String,
    /// Rows can only be deleted in `Local` mode
    pub deletable: bool,
}

impl RowView {
    pub fn from_entry(entry: &ConfigEntry, environment: EnvironmentMode) -> Self {
        Self {
            key: entry.key.clone(),
            value: entry.value.clone(),
            deletable: environment.is_local(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchView {
    pub query: String,
    pub matches: Vec<usize>,
    pub current_row: Option<usize>,
    pub summary: String,
}

impl From<&SearchIndex> for SearchView {
    fn from(index: &SearchIndex) -> Self {
        Self {
            query: index.query().to_string(),
            matches: index.matches().to_vec(),
            current_row: index.current_row(),
            summary: index.summary(),
        }
    }
}

impl SearchView {
    pub fn is_match(&self, row: usize) -> bool {
        self.matches.binary_search(&row).is_ok()
    }

    pub fn is_current(&self, row: usize) -> bool {
        self.current_row == Some(row)
    }
}
