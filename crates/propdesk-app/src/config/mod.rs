//! Configuration file handling
//!
//! Supports `~/.config/propdesk/config.toml` with `[root]`, `[editor]` and
//! `[ui]` sections. Every field has a default.

pub mod settings;
pub mod types;

pub use settings::{
    config_dir, load_settings, load_user_settings, save_settings, CONFIG_FILENAME,
};
pub use types::*;
