//! Online/Local environment switch stored in `settings/server.properties`
//!
//! The file is ini-like: a `[General]` section line and at most one
//! `env=Local` directive. Any other content is carried through a toggle,
//! minus blank lines.

use propdesk_core::prelude::*;
use propdesk_core::EnvironmentMode;
use propdesk_fs::DirectoryCapability;

use crate::host::{Host, TITLE_ERROR, TITLE_INFO};

/// Subdirectory of the root holding server settings
pub const SETTINGS_DIR: &str = "settings";

/// File carrying the environment directive
pub const SERVER_PROPERTIES: &str = "server.properties";

const GENERAL_SECTION: &str = "[General]";
const ENV_PREFIX: &str = "env=";
const LOCAL_DIRECTIVE: &str = "env=Local";

/// Current environment mode and the operations that read or flip it
#[derive(Debug, Default)]
pub struct EnvironmentSwitch {
    mode: EnvironmentMode,
}

impl EnvironmentSwitch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> EnvironmentMode {
        self.mode
    }

    /// Back to `Online` until the file is read again
    pub fn reset(&mut self) {
        self.mode = EnvironmentMode::Online;
    }

    /// Read the mode from `{root}/settings/server.properties`.
    ///
    /// Creates the file with a bare `[General]` section when it is missing.
    /// Any failure leaves the mode `Online`.
    pub async fn read<D: DirectoryCapability>(&mut self, root: &D) -> EnvironmentMode {
        self.mode = match read_or_create(root).await {
            Ok(text) => parse_mode(&text),
            Err(e) => {
                warn!("Failed to read {}: {}, assuming Online", SERVER_PROPERTIES, e);
                EnvironmentMode::Online
            }
        };
        info!("Environment mode: {}", self.mode);
        self.mode
    }

    /// Flip the mode after asking the user, then rewrite the settings file.
    ///
    /// The in-memory mode flips before the write. A failed write is reported
    /// but the flip stays, so memory and disk can disagree until the next read.
    pub async fn toggle<D, H>(&mut self, root: &D, host: &H)
    where
        D: DirectoryCapability,
        H: Host,
    {
        let target = self.mode.toggled();
        if !host.confirm(&confirm_message(target)).await {
            debug!("Environment switch to {} declined", target);
            return;
        }

        let settings = match root.child(SETTINGS_DIR, true).await {
            Ok(settings) => settings,
            Err(e) => {
                error!("Cannot open {}: {}", SETTINGS_DIR, e);
                host.notify(&format!("Cannot access {}", SERVER_PROPERTIES), TITLE_ERROR);
                return;
            }
        };
        let current = match settings.read_text(SERVER_PROPERTIES).await {
            Ok(text) => text,
            Err(Error::NotFound { .. }) => String::new(),
            Err(e) => {
                error!("Cannot read {}: {}", SERVER_PROPERTIES, e);
                host.notify(&format!("Cannot access {}", SERVER_PROPERTIES), TITLE_ERROR);
                return;
            }
        };

        self.mode = target;
        let updated = rewrite(&current, target);

        match settings.write_text(SERVER_PROPERTIES, &updated).await {
            Ok(()) => {
                info!("Switched environment to {}", target);
                host.notify(
                    &format!("Switched to the {} environment", target),
                    TITLE_INFO,
                );
            }
            Err(e) => {
                error!("Failed to write {}: {}", SERVER_PROPERTIES, e);
                host.notify(&format!("Cannot write {}", SERVER_PROPERTIES), TITLE_ERROR);
            }
        }
    }
}

async fn read_or_create<D: DirectoryCapability>(root: &D) -> Result<String> {
    let settings = root.child(SETTINGS_DIR, true).await?;
    match settings.read_text(SERVER_PROPERTIES).await {
        Ok(text) => Ok(text),
        Err(Error::NotFound { .. }) => {
            let initial = format!("{}\n", GENERAL_SECTION);
            settings.write_text(SERVER_PROPERTIES, &initial).await?;
            debug!("Created {}/{}", SETTINGS_DIR, SERVER_PROPERTIES);
            Ok(initial)
        }
        Err(e) => Err(e),
    }
}

fn confirm_message(target: EnvironmentMode) -> String {
    match target {
        EnvironmentMode::Local => {
            "Switch to the Local environment? This sets env=Local.".to_string()
        }
        EnvironmentMode::Online => {
            "Switch to the Online environment? This removes the env setting.".to_string()
        }
    }
}

/// Mode encoded in settings text.
///
/// The first trimmed line starting with `env=` decides; its value runs up to
/// the next `=` and must be exactly `Local`.
pub fn parse_mode(text: &str) -> EnvironmentMode {
    let directive = text
        .split('\n')
        .map(str::trim)
        .find_map(|line| line.strip_prefix(ENV_PREFIX));

    match directive {
        Some(value) if value.split('=').next().unwrap_or_default().trim() == "Local" => {
            EnvironmentMode::Local
        }
        _ => EnvironmentMode::Online,
    }
}

/// Settings text for `mode`, derived from the current text.
///
/// Every `env=` line and every blank line is dropped. For `Local` the
/// directive goes right after `[General]`; without that section it is
/// appended and `[General]` is prepended.
pub fn rewrite(text: &str, mode: EnvironmentMode) -> String {
    let mut lines: Vec<&str> = text
        .split('\n')
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with(ENV_PREFIX)
        })
        .collect();

    let general = lines.iter().position(|line| line.trim() == GENERAL_SECTION);

    if mode.is_local() {
        match general {
            Some(index) => lines.insert(index + 1, LOCAL_DIRECTIVE),
            None => {
                lines.insert(0, GENERAL_SECTION);
                lines.push(LOCAL_DIRECTIVE);
            }
        }
    } else if general.is_none() {
        lines.insert(0, GENERAL_SECTION);
    }

    lines.join("\n")
}
