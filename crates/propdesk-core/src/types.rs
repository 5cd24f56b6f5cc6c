//! Domain types shared by every propdesk layer

use serde::Serialize;

/// File extension that marks an editable configuration file
pub const PROPERTIES_EXTENSION: &str = ".properties";

/// Placeholder key for rows appended by the editor
pub const NEW_ROW_KEY: &str = "new_key";

/// Placeholder value for rows appended by the editor
pub const NEW_ROW_VALUE: &str = "new_value";

// ─────────────────────────────────────────────────────────────────────────────
// Entries
// ─────────────────────────────────────────────────────────────────────────────

/// One `key=value` row of an open configuration file.
///
/// Keys are not unique; a row is identified by its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
}

impl ConfigEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// The row appended by "add row"
    pub fn placeholder() -> Self {
        Self::new(NEW_ROW_KEY, NEW_ROW_VALUE)
    }

    /// Read one column of the row
    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::Key => &self.key,
            Column::Value => &self.value,
        }
    }

    /// Overwrite one column of the row
    pub fn set(&mut self, column: Column, text: impl Into<String>) {
        match column {
            Column::Key => self.key = text.into(),
            Column::Value => self.value = text.into(),
        }
    }

    /// Case-sensitive substring test over key and value
    pub fn contains(&self, needle: &str) -> bool {
        self.key.contains(needle) || self.value.contains(needle)
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for ConfigEntry {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

/// Editable column of the row table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Column {
    #[default]
    Key,
    Value,
}

impl Column {
    /// The other column (Tab in the editor)
    pub fn other(self) -> Self {
        match self {
            Column::Key => Column::Value,
            Column::Value => Column::Key,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Environment
// ─────────────────────────────────────────────────────────────────────────────

/// Whether the edited configuration is the live (read-only) one or a local copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum EnvironmentMode {
    /// Server-managed configuration; every edit operation is blocked
    #[default]
    Online,
    /// Local override (`env=Local`); editing allowed
    Local,
}

impl EnvironmentMode {
    pub fn is_local(self) -> bool {
        matches!(self, EnvironmentMode::Local)
    }

    pub fn toggled(self) -> Self {
        match self {
            EnvironmentMode::Online => EnvironmentMode::Local,
            EnvironmentMode::Local => EnvironmentMode::Online,
        }
    }

    /// Label shown in the header
    pub fn label(self) -> &'static str {
        match self {
            EnvironmentMode::Online => "Online",
            EnvironmentMode::Local => "Local",
        }
    }
}

impl std::fmt::Display for EnvironmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Access requested when acquiring a directory capability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    Read,
    ReadWrite,
}

// ─────────────────────────────────────────────────────────────────────────────
// Projects & Files
// ─────────────────────────────────────────────────────────────────────────────

/// A project directory under `{root}/data`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Directory name; the project's only identity
    pub name: String,
    /// Human-readable location, e.g. `/opt/data/billing`
    pub display_path: String,
}

impl Project {
    pub fn new(name: impl Into<String>, data_display_path: &str) -> Self {
        let name = name.into();
        Self {
            display_path: format!("{}/{}", data_display_path.trim_end_matches('/'), name),
            name,
        }
    }
}

/// A `*.properties` file inside `{project}/config-cache`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigFile {
    /// On-disk name, e.g. `application+Billing.properties`
    pub file_name: String,
    /// Name shown in the file list, e.g. `Billing`
    pub display_name: String,
}

impl ConfigFile {
    /// Build from a directory entry name; `None` unless it ends in `.properties`
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        if !file_name.ends_with(PROPERTIES_EXTENSION) {
            return None;
        }

        Some(Self {
            file_name: file_name.to_string(),
            display_name: display_name_for(file_name),
        })
    }
}

/// Display name encoded in a cache file name.
///
/// `namespace+Display.properties` shows as `Display`; the segment runs up to
/// the next `+`. Names without a usable segment show their stem.
fn display_name_for(file_name: &str) -> String {
    let stem = file_name
        .strip_suffix(PROPERTIES_EXTENSION)
        .unwrap_or(file_name);

    match file_name.split('+').nth(1) {
        Some(segment) => {
            let segment = segment
                .strip_suffix(PROPERTIES_EXTENSION)
                .unwrap_or(segment);
            if segment.is_empty() {
                stem.to_string()
            } else {
                segment.to_string()
            }
        }
        None => stem.to_string(),
    }
}
