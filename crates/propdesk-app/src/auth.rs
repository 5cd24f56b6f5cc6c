//! Root directory authorization
//!
//! Nothing is remembered across restarts: every process starts unauthorized
//! and must get a fresh grant from the host.

use propdesk_core::prelude::*;
use propdesk_core::AccessMode;
use propdesk_fs::DirectoryCapability;

use crate::host::Host;

/// Holds the root capability once the user has granted it
#[derive(Debug)]
pub struct AuthorizationSession<D> {
    root: Option<D>,
    root_name: String,
}

impl<D: DirectoryCapability> AuthorizationSession<D> {
    /// `root_name` is the directory name a grant must carry (e.g. `opt`)
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            root: None,
            root_name: root_name.into(),
        }
    }

    /// Ask the host for the root directory once.
    ///
    /// A wrong directory fails with [`Error::Validation`], a cancelled picker
    /// with [`Error::UserCancelled`]. Either way the session stays
    /// unauthorized and the caller decides whether to ask again.
    pub async fn acquire_root<H>(&mut self, host: &H, start_hint: &str) -> Result<&D>
    where
        H: Host<Directory = D>,
    {
        self.reset();
        let dir = host
            .prompt_directory(AccessMode::ReadWrite, start_hint)
            .await?;
        self.validate(&dir)?;

        info!("Authorized root {}", dir.display_path());
        Ok(self.root.insert(dir))
    }

    fn validate(&self, dir: &D) -> Result<()> {
        if dir.name().eq_ignore_ascii_case(&self.root_name) {
            Ok(())
        } else {
            warn!(
                "Rejected root '{}', expected '{}'",
                dir.display_path(),
                self.root_name
            );
            Err(Error::validation(format!(
                "Please select the {} directory",
                self.root_name
            )))
        }
    }

    /// Drop the capability
    pub fn reset(&mut self) {
        if self.root.take().is_some() {
            debug!("Root authorization dropped");
        }
    }

    pub fn is_authorized(&self) -> bool {
        self.root.is_some()
    }

    pub fn root(&self) -> Option<&D> {
        self.root.as_ref()
    }

    pub fn root_name(&self) -> &str {
        &self.root_name
    }
}
