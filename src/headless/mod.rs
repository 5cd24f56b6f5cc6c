//! Headless mode - JSON lines instead of the TUI
//!
//! Authorizes the `--root` path without prompting, then reports what the
//! TUI would show. Useful for scripts and for checking a tree quickly.
//!
//! # Example Output
//!
//! ```json
//! {"event":"authorized","root":"/opt","timestamp":1704700001000}
//! {"event":"environment","mode":"Online","timestamp":1704700001001}
//! {"event":"project","name":"billing","path":"/opt/data/billing","files":[{"file_name":"app+Billing.properties","display_name":"Billing"}],"timestamp":1704700001002}
//! ```

pub mod runner;

pub use runner::run_headless;

use chrono::Utc;
use propdesk_core::{ConfigFile, EnvironmentMode};
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Root granted and validated
    Authorized { root: String, timestamp: i64 },

    /// Current environment mode
    Environment {
        mode: EnvironmentMode,
        timestamp: i64,
    },

    /// One project with its config files
    Project {
        name: String,
        path: String,
        files: Vec<ConfigFile>,
        timestamp: i64,
    },

    /// Decoded entries of a file requested with `--show`
    Entries {
        project: String,
        file: String,
        entries: Vec<EntryLine>,
        timestamp: i64,
    },

    /// Something the workbench wanted to tell the user
    Notification {
        title: String,
        message: String,
        timestamp: i64,
    },

    /// Run aborted
    Error { message: String, timestamp: i64 },
}

#[derive(Debug, Clone, Serialize)]
pub struct EntryLine {
    pub key: String,
    pub value: String,
}

impl HeadlessEvent {
    /// Emit this event to stdout as one JSON line
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }
        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn authorized(root: &str) -> Self {
        Self::Authorized {
            root: root.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn environment(mode: EnvironmentMode) -> Self {
        Self::Environment {
            mode,
            timestamp: Self::now(),
        }
    }

    pub fn project(name: &str, path: &str, files: Vec<ConfigFile>) -> Self {
        Self::Project {
            name: name.to_string(),
            path: path.to_string(),
            files,
            timestamp: Self::now(),
        }
    }

    pub fn entries(project: &str, file: &str, entries: Vec<EntryLine>) -> Self {
        Self::Entries {
            project: project.to_string(),
            file: file.to_string(),
            entries,
            timestamp: Self::now(),
        }
    }

    pub fn notification(title: &str, message: &str) -> Self {
        Self::Notification {
            title: title.to_string(),
            message: message.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            timestamp: Self::now(),
        }
    }
}
