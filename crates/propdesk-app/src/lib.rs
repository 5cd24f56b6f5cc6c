//! propdesk-app - Workbench state and orchestration for propdesk
//!
//! The [`Workbench`] owns the authorized root, the environment switch and
//! the open file, and talks to the user only through a [`Host`]. The
//! [`Engine`] runs it on its own task so a terminal UI can block on dialogs
//! without blocking the event loop. The rest of the crate is the TEA side
//! of that UI: [`AppState`], [`Message`] and the handlers.

pub mod auth;
pub mod config;
pub mod confirm_dialog;
pub mod edit_session;
pub mod engine;
pub mod environment;
pub mod handler;
pub mod host;
pub mod input_key;
pub mod line_input;
pub mod message;
pub mod repository;
pub mod signals;
pub mod state;
pub mod view;
pub mod workbench;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types
pub use config::Settings;
pub use engine::{Command, Engine};
pub use handler::{handle_host_request, update, UpdateAction, UpdateResult};
pub use host::{ChannelHost, Host, HostRequest, TITLE_ERROR, TITLE_INFO};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, Screen, UiMode};
pub use view::{EditorView, RowView, SearchView, WorkbenchView};
pub use workbench::Workbench;
