//! Custom widget components

mod confirm_dialog;
mod directory_prompt;
mod entry_table;
mod file_list;
mod header;
pub mod modal_overlay;
mod notification;
mod project_list;
mod search_input;
mod status_bar;
pub mod text_input;

pub use confirm_dialog::ConfirmDialog;
pub use directory_prompt::DirectoryPrompt;
pub use entry_table::EntryTable;
pub use file_list::FileList;
pub use header::{MainHeader, OnlineBanner};
pub use notification::NotificationPopup;
pub use project_list::ProjectList;
pub use search_input::SearchInput;
pub use status_bar::StatusBar;

// Re-export state types from app layer (these are used by render/)
pub use propdesk_app::confirm_dialog::ConfirmDialogState;
pub use propdesk_app::line_input::LineInput;
