//! Host collaborator: directory picker, confirmations and notifications
//!
//! The core never blocks on a dialog. Whatever drives it (terminal UI,
//! headless report, tests) implements [`Host`] and answers the requests.

use std::future::Future;

use propdesk_core::prelude::*;
use propdesk_core::AccessMode;
use propdesk_fs::{DirectoryCapability, FsDirectory};
use tokio::sync::{mpsc, oneshot};

/// Title used for error notifications
pub const TITLE_ERROR: &str = "Error";
/// Title used for informational notifications
pub const TITLE_INFO: &str = "Notice";

/// User-facing collaborator consumed by the core
pub trait Host: Send + Sync {
    /// Capability type the directory picker grants
    type Directory: DirectoryCapability + Send + Sync + 'static;

    /// Ask the user to grant access to a directory.
    ///
    /// Fails with [`Error::UserCancelled`] when the user backs out.
    fn prompt_directory(
        &self,
        mode: AccessMode,
        start_hint: &str,
    ) -> impl Future<Output = Result<Self::Directory>> + Send;

    /// Yes/no question; `false` when declined or unanswerable
    fn confirm(&self, message: &str) -> impl Future<Output = bool> + Send;

    /// Fire-and-forget message
    fn notify(&self, message: &str, title: &str);
}

// ─────────────────────────────────────────────────────────────────────────────
// Channel-backed host
// ─────────────────────────────────────────────────────────────────────────────

/// Request sent from the engine to the UI
#[derive(Debug)]
pub enum HostRequest {
    /// Yes/no question; a dropped reply counts as "no"
    Confirm {
        message: String,
        reply: oneshot::Sender<bool>,
    },
    /// Ask for a directory path; `None` or a dropped reply cancels
    PromptDirectory {
        start_hint: String,
        reply: oneshot::Sender<Option<String>>,
    },
    Notify {
        title: String,
        message: String,
    },
}

/// [`Host`] that forwards every request to the UI over a channel
#[derive(Debug, Clone)]
pub struct ChannelHost {
    tx: mpsc::Sender<HostRequest>,
}

impl ChannelHost {
    pub fn new(tx: mpsc::Sender<HostRequest>) -> Self {
        Self { tx }
    }
}

impl Host for ChannelHost {
    type Directory = FsDirectory;

    async fn prompt_directory(&self, mode: AccessMode, start_hint: &str) -> Result<FsDirectory> {
        let (reply, answer) = oneshot::channel();
        self.tx
            .send(HostRequest::PromptDirectory {
                start_hint: start_hint.to_string(),
                reply,
            })
            .await
            .map_err(|_| Error::ChannelClosed)?;

        match answer.await {
            Ok(Some(path)) => FsDirectory::open(path.trim(), mode).await,
            Ok(None) | Err(_) => Err(Error::UserCancelled),
        }
    }

    async fn confirm(&self, message: &str) -> bool {
        let (reply, answer) = oneshot::channel();
        let request = HostRequest::Confirm {
            message: message.to_string(),
            reply,
        };
        if self.tx.send(request).await.is_err() {
            warn!("UI gone, treating confirmation as declined");
            return false;
        }
        answer.await.unwrap_or(false)
    }

    fn notify(&self, message: &str, title: &str) {
        let request = HostRequest::Notify {
            title: title.to_string(),
            message: message.to_string(),
        };
        if let Err(e) = self.tx.try_send(request) {
            warn!("Dropped notification '{}': {}", message, e);
        }
    }
}
