//! Settings types for `config.toml`

use serde::{Deserialize, Serialize};

/// Application settings (`~/.config/propdesk/config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub root: RootSettings,

    #[serde(default)]
    pub editor: EditorSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Which directory may be authorized as the root
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RootSettings {
    /// Required directory name, compared case-insensitively
    #[serde(default = "default_root_name")]
    pub name: String,

    /// Path pre-filled in the authorization prompt
    #[serde(default = "default_start_hint")]
    pub start_hint: String,
}

impl Default for RootSettings {
    fn default() -> Self {
        Self {
            name: default_root_name(),
            start_hint: default_start_hint(),
        }
    }
}

fn default_root_name() -> String {
    "opt".to_string()
}

fn default_start_hint() -> String {
    if cfg!(windows) {
        "C:/opt".to_string()
    } else {
        "/opt".to_string()
    }
}

/// Editor behavior
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EditorSettings {
    /// Close the file after a successful save
    #[serde(default = "default_true")]
    pub close_after_save: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            close_after_save: true,
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show the key hint line in the status bar
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_key_hints: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.root.name, "opt");
        assert!(settings.root.start_hint.ends_with("/opt"));
        assert!(settings.editor.close_after_save);
        assert!(settings.ui.show_key_hints);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings = toml::from_str("[editor]\nclose_after_save = false\n").unwrap();
        assert!(!settings.editor.close_after_save);
        assert_eq!(settings.root, RootSettings::default());
    }

    #[test]
    fn test_root_override() {
        let settings: Settings =
            toml::from_str("[root]\nname = \"srv\"\nstart_hint = \"/srv\"\n").unwrap();
        assert_eq!(settings.root.name, "srv");
        assert_eq!(settings.root.start_hint, "/srv");
    }
}
