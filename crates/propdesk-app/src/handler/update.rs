//! Main update function - handles state transitions (TEA pattern)

use tracing::debug;

use crate::engine::Command;
use crate::host::TITLE_INFO;
use crate::line_input::LineInput;
use crate::message::Message;
use crate::state::{AppState, InputMode, Screen, PAGE_SIZE};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        Message::ViewUpdated(view) => {
            state.apply_view(*view);
            UpdateResult::none()
        }

        Message::RequestQuit => send_exclusive(state, Command::RequestQuit),

        Message::Quit => {
            state.force_quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Dialogs
        // ─────────────────────────────────────────────────────────
        Message::ConfirmDialogAnswer(yes) => {
            state.answer_confirm(yes);
            UpdateResult::none()
        }

        Message::SubmitDirectoryPrompt => {
            let path = state.prompt_input.text().trim().to_string();
            state.answer_prompt(if path.is_empty() { None } else { Some(path) });
            UpdateResult::none()
        }

        Message::CancelDirectoryPrompt => {
            state.answer_prompt(None);
            UpdateResult::none()
        }

        Message::PromptEdit(key) => {
            state.prompt_input.handle_key(key);
            UpdateResult::none()
        }

        Message::DismissNotification => {
            state.notifications.pop_front();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::SelectNext => {
            state.move_selection(1);
            UpdateResult::none()
        }
        Message::SelectPrevious => {
            state.move_selection(-1);
            UpdateResult::none()
        }
        Message::SelectFirst => {
            state.select_first();
            UpdateResult::none()
        }
        Message::SelectLast => {
            state.select_last();
            UpdateResult::none()
        }
        Message::PageDown => {
            state.move_selection(PAGE_SIZE as isize);
            UpdateResult::none()
        }
        Message::PageUp => {
            state.move_selection(-(PAGE_SIZE as isize));
            UpdateResult::none()
        }

        Message::Activate => handle_activate(state),

        Message::Back => match state.screen() {
            Screen::Editor => send_exclusive(state, Command::CloseFile),
            Screen::Files => send_exclusive(state, Command::CloseProject),
            Screen::Projects | Screen::Authorization => UpdateResult::none(),
        },

        Message::SwitchColumn => {
            state.selection.column = state.selection.column.other();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Workbench operations
        // ─────────────────────────────────────────────────────────
        Message::Authorize => send_exclusive(state, Command::Authorize),
        Message::Reauthorize => send_exclusive(state, Command::Reauthorize),
        Message::RefreshProjects => send_exclusive(state, Command::RefreshProjects),
        Message::ToggleEnvironment => send_exclusive(state, Command::ToggleEnvironment),

        Message::AddRow => {
            if state.screen() != Screen::Editor {
                return UpdateResult::none();
            }
            send_exclusive(state, Command::AddRow)
        }

        Message::DeleteRow => {
            let row = state.selection.row;
            let has_row = state
                .view
                .editor
                .as_ref()
                .is_some_and(|editor| row < editor.rows.len());
            if !has_row {
                return UpdateResult::none();
            }
            send_exclusive(state, Command::DeleteRow(row))
        }

        Message::Save => {
            if state.screen() != Screen::Editor {
                return UpdateResult::none();
            }
            send_exclusive(state, Command::Save)
        }

        // ─────────────────────────────────────────────────────────
        // Cell editing
        // ─────────────────────────────────────────────────────────
        Message::StartEditCell => {
            if !state.view.is_local() {
                state.push_notification(
                    TITLE_INFO,
                    "Online mode: switch to Local (e) to edit entries",
                );
                return UpdateResult::none();
            }
            if let Some(text) = state.selected_cell().map(str::to_string) {
                state.cell_input = LineInput::with_text(text);
                state.input_mode = InputMode::EditCell;
            }
            UpdateResult::none()
        }

        Message::CellEdit(key) => {
            state.cell_input.handle_key(key);
            UpdateResult::none()
        }

        Message::CommitEditCell => {
            state.input_mode = InputMode::Normal;
            let value = state.cell_input.text().to_string();
            if state.selected_cell() == Some(value.as_str()) {
                return UpdateResult::none();
            }
            let command = Command::SetCell {
                row: state.selection.row,
                column: state.selection.column,
                value,
            };
            send_exclusive(state, command)
        }

        Message::CancelEditCell => {
            state.input_mode = InputMode::Normal;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Search
        // ─────────────────────────────────────────────────────────
        Message::StartSearch => {
            if let Some(editor) = &state.view.editor {
                state.search_input = LineInput::with_text(editor.search.query.clone());
                state.input_mode = InputMode::SearchInput;
            }
            UpdateResult::none()
        }

        Message::SearchEdit(key) => {
            if !state.search_input.handle_key(key) {
                return UpdateResult::none();
            }
            let query = state.search_input.text().to_string();
            send(state, Command::SetSearchQuery(query))
        }

        Message::SubmitSearch => {
            state.input_mode = InputMode::Normal;
            UpdateResult::none()
        }

        Message::CancelSearch => {
            state.input_mode = InputMode::Normal;
            state.search_input.clear();
            send(state, Command::ClearSearch)
        }

        Message::NextSearchMatch => send(state, Command::SearchNext),
        Message::PreviousSearchMatch => send(state, Command::SearchPrevious),
    }
}

fn handle_activate(state: &mut AppState) -> UpdateResult {
    match state.screen() {
        Screen::Authorization => UpdateResult::message(Message::Authorize),
        Screen::Projects => match state.selected_project_name() {
            Some(name) => {
                let command = Command::OpenProject(name.to_string());
                send_exclusive(state, command)
            }
            None => UpdateResult::none(),
        },
        Screen::Files => match state.selected_file_name() {
            Some(name) => {
                let command = Command::OpenFile(name.to_string());
                send_exclusive(state, command)
            }
            None => UpdateResult::none(),
        },
        Screen::Editor => UpdateResult::message(Message::StartEditCell),
    }
}

/// Send a command that must not overlap another one.
///
/// Ignored while the engine is still busy with an earlier command.
fn send_exclusive(state: &mut AppState, command: Command) -> UpdateResult {
    if state.is_busy() {
        debug!("Engine busy, ignoring {:?}", command);
        return UpdateResult::none();
    }
    send(state, command)
}

/// Send a command that is safe to queue behind others (search, navigation)
fn send(state: &mut AppState, command: Command) -> UpdateResult {
    state.sent_commands += 1;
    UpdateResult::action(UpdateAction::Send(command))
}
