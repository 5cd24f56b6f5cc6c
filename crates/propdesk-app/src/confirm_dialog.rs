//! Confirm dialog state.
//!
//! Data model for yes/no dialogs raised by the engine. The reply channel is
//! kept separately in [`crate::state::AppState`]; the rendering widget lives
//! in the TUI crate.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    /// Label for the accepting choice
    pub yes_label: String,
    /// Label for the declining choice
    pub no_label: String,
}

impl ConfirmDialogState {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            yes_label: "Yes".to_string(),
            no_label: "No".to_string(),
        }
    }

    /// Dialog for an engine confirmation request
    pub fn from_request(message: &str) -> Self {
        Self::new("Confirm", message)
    }
}
