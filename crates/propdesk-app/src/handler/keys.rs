//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Screen, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Ctrl+C quits from anywhere. Unsaved edits get the quit prompt first;
    // pressing it again while a dialog is open quits regardless.
    if key == InputKey::CharCtrl('c') {
        if state.has_unsaved_changes() && state.ui_mode() != UiMode::ConfirmDialog {
            return Some(Message::RequestQuit);
        }
        return Some(Message::Quit);
    }

    match state.ui_mode() {
        UiMode::ConfirmDialog => handle_key_confirm_dialog(key),
        UiMode::DirectoryPrompt => handle_key_directory_prompt(key),
        UiMode::Notification => handle_key_notification(key),
        UiMode::SearchInput => handle_key_search_input(key),
        UiMode::EditCell => handle_key_edit_cell(key),
        UiMode::Normal => handle_key_normal(state, key),
    }
}

fn handle_key_confirm_dialog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => Some(Message::ConfirmDialogAnswer(true)),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::ConfirmDialogAnswer(false)),
        _ => None,
    }
}

fn handle_key_directory_prompt(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::SubmitDirectoryPrompt),
        InputKey::Esc => Some(Message::CancelDirectoryPrompt),
        other => Some(Message::PromptEdit(other)),
    }
}

fn handle_key_notification(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc | InputKey::Char(' ') => {
            Some(Message::DismissNotification)
        }
        _ => None,
    }
}

fn handle_key_search_input(key: InputKey) -> Option<Message> {
    match key {
        // Cancel search: close the bar and drop the query
        InputKey::Esc => Some(Message::CancelSearch),
        // Keep query, exit input mode
        InputKey::Enter => Some(Message::SubmitSearch),
        InputKey::Down => Some(Message::NextSearchMatch),
        InputKey::Up => Some(Message::PreviousSearchMatch),
        other => Some(Message::SearchEdit(other)),
    }
}

fn handle_key_edit_cell(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::CommitEditCell),
        InputKey::Esc => Some(Message::CancelEditCell),
        other => Some(Message::CellEdit(other)),
    }
}

fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(msg) = handle_navigation(key) {
        return Some(msg);
    }

    match (state.screen(), key) {
        (_, InputKey::Char('q')) => Some(Message::RequestQuit),

        (Screen::Authorization, InputKey::Enter | InputKey::Char('a')) => {
            Some(Message::Authorize)
        }
        (Screen::Authorization, _) => None,

        // Any authorized screen
        (_, InputKey::Char('e')) => Some(Message::ToggleEnvironment),
        (_, InputKey::Char('p')) => Some(Message::Reauthorize),
        (_, InputKey::Enter) => Some(Message::Activate),
        (_, InputKey::Esc) => Some(Message::Back),

        (Screen::Projects | Screen::Files, InputKey::Char('r')) => Some(Message::RefreshProjects),

        (Screen::Editor, InputKey::Char('a')) => Some(Message::AddRow),
        (Screen::Editor, InputKey::Char('d') | InputKey::Delete) => Some(Message::DeleteRow),
        (Screen::Editor, InputKey::Char('s') | InputKey::CharCtrl('s')) => Some(Message::Save),
        (Screen::Editor, InputKey::Char('/') | InputKey::CharCtrl('f')) => {
            Some(Message::StartSearch)
        }
        (Screen::Editor, InputKey::Char('n')) => Some(Message::NextSearchMatch),
        (Screen::Editor, InputKey::Char('N')) => Some(Message::PreviousSearchMatch),
        (Screen::Editor, InputKey::Tab | InputKey::BackTab | InputKey::Left | InputKey::Right) => {
            Some(Message::SwitchColumn)
        }

        _ => None,
    }
}

fn handle_navigation(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevious),
        InputKey::Home | InputKey::Char('g') => Some(Message::SelectFirst),
        InputKey::End | InputKey::Char('G') => Some(Message::SelectLast),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::PageUp => Some(Message::PageUp),
        _ => None,
    }
}
