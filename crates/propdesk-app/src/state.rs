//! UI state (TEA model)
//!
//! The workbench lives on the engine task; the UI only keeps the latest
//! [`WorkbenchView`] plus what is purely presentational: selections, text
//! inputs, dialogs waiting for an answer and queued notifications.

use std::collections::VecDeque;

use propdesk_core::Column;
use tokio::sync::oneshot;
use tracing::debug;

use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::line_input::LineInput;
use crate::view::WorkbenchView;

/// Which screen the workbench view calls for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// No root yet
    Authorization,
    Projects,
    Files,
    Editor,
}

/// Input mode, from most to least modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Yes/no dialog raised by the engine
    ConfirmDialog,
    /// Path input for the directory picker
    DirectoryPrompt,
    /// Notification popup waiting to be dismissed
    Notification,
    /// Typing into the search bar
    SearchInput,
    /// Typing into a cell
    EditCell,
    Normal,
}

/// Text-entry mode the user chose (dialogs are layered on top)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    SearchInput,
    EditCell,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
}

/// Selected indices per screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub project: usize,
    pub file: usize,
    pub row: usize,
    pub column: Column,
}

/// Rows moved by PageUp/PageDown
pub const PAGE_SIZE: usize = 10;

#[derive(Debug)]
pub struct AppState {
    pub settings: Settings,

    /// Latest snapshot from the engine
    pub view: WorkbenchView,

    /// Commands sent to the engine; the engine is busy while this is ahead
    /// of `view.revision`
    pub sent_commands: u64,

    pub input_mode: InputMode,
    pub selection: Selection,

    pub search_input: LineInput,
    pub cell_input: LineInput,
    pub prompt_input: LineInput,

    pub confirm_dialog_state: Option<ConfirmDialogState>,
    pub confirm_reply: Option<oneshot::Sender<bool>>,
    pub prompt_reply: Option<oneshot::Sender<Option<String>>>,

    pub notifications: VecDeque<Notification>,

    quitting: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            view: WorkbenchView::default(),
            sent_commands: 0,
            input_mode: InputMode::Normal,
            selection: Selection::default(),
            search_input: LineInput::new(),
            cell_input: LineInput::new(),
            prompt_input: LineInput::new(),
            confirm_dialog_state: None,
            confirm_reply: None,
            prompt_reply: None,
            notifications: VecDeque::new(),
            quitting: false,
        }
    }

    pub fn screen(&self) -> Screen {
        if !self.view.authorized {
            Screen::Authorization
        } else if self.view.editor.is_some() {
            Screen::Editor
        } else if self.view.current_project.is_some() {
            Screen::Files
        } else {
            Screen::Projects
        }
    }

    pub fn ui_mode(&self) -> UiMode {
        if self.confirm_dialog_state.is_some() {
            UiMode::ConfirmDialog
        } else if self.prompt_reply.is_some() {
            UiMode::DirectoryPrompt
        } else if !self.notifications.is_empty() {
            UiMode::Notification
        } else {
            match self.input_mode {
                InputMode::Normal => UiMode::Normal,
                InputMode::SearchInput => UiMode::SearchInput,
                InputMode::EditCell => UiMode::EditCell,
            }
        }
    }

    /// Whether a command is still being processed
    pub fn is_busy(&self) -> bool {
        self.sent_commands > self.view.revision
    }

    /// Whether the open file has edits that were not saved
    pub fn has_unsaved_changes(&self) -> bool {
        self.view.editor.as_ref().is_some_and(|editor| editor.dirty)
    }

    pub fn should_quit(&self) -> bool {
        self.quitting || self.view.quit
    }

    pub fn force_quit(&mut self) {
        self.quitting = true;
    }

    // ─────────────────────────────────────────────────────────
    // Dialogs
    // ─────────────────────────────────────────────────────────

    pub fn show_confirm(&mut self, message: &str, reply: oneshot::Sender<bool>) {
        // A newer request supersedes an unanswered one; dropping the old
        // sender declines it
        self.confirm_dialog_state = Some(ConfirmDialogState::from_request(message));
        self.confirm_reply = Some(reply);
    }

    pub fn answer_confirm(&mut self, yes: bool) {
        self.confirm_dialog_state = None;
        if let Some(reply) = self.confirm_reply.take() {
            if reply.send(yes).is_err() {
                debug!("Confirmation answered after the engine stopped waiting");
            }
        }
    }

    pub fn show_prompt(&mut self, start_hint: &str, reply: oneshot::Sender<Option<String>>) {
        self.prompt_input = LineInput::with_text(start_hint);
        self.prompt_reply = Some(reply);
    }

    pub fn answer_prompt(&mut self, path: Option<String>) {
        if let Some(reply) = self.prompt_reply.take() {
            if reply.send(path).is_err() {
                debug!("Directory prompt answered after the engine stopped waiting");
            }
        }
    }

    pub fn push_notification(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.notifications.push_back(Notification {
            title: title.into(),
            message: message.into(),
        });
    }

    pub fn current_notification(&self) -> Option<&Notification> {
        self.notifications.front()
    }

    // ─────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────

    /// Number of items on the current screen
    pub fn item_count(&self) -> usize {
        match self.screen() {
            Screen::Authorization => 0,
            Screen::Projects => self.view.projects.len(),
            Screen::Files => self.view.files.len(),
            Screen::Editor => self.view.editor.as_ref().map_or(0, |e| e.rows.len()),
        }
    }

    fn selected_mut(&mut self) -> Option<&mut usize> {
        match self.screen() {
            Screen::Authorization => None,
            Screen::Projects => Some(&mut self.selection.project),
            Screen::Files => Some(&mut self.selection.file),
            Screen::Editor => Some(&mut self.selection.row),
        }
    }

    /// Move the selection by `delta`, clamped to the list
    pub fn move_selection(&mut self, delta: isize) {
        let count = self.item_count();
        if let Some(selected) = self.selected_mut() {
            if count == 0 {
                *selected = 0;
                return;
            }
            let target = (*selected as isize + delta).clamp(0, count as isize - 1);
            *selected = target as usize;
        }
    }

    pub fn select_first(&mut self) {
        if let Some(selected) = self.selected_mut() {
            *selected = 0;
        }
    }

    pub fn select_last(&mut self) {
        let count = self.item_count();
        if let Some(selected) = self.selected_mut() {
            *selected = count.saturating_sub(1);
        }
    }

    /// Adopt a new snapshot and keep selections inside the new lists
    pub fn apply_view(&mut self, view: WorkbenchView) {
        let editor_was_open = self.view.editor.is_some();
        let previous_focus = self.view.editor.as_ref().and_then(|e| e.focus_row);
        self.view = view;

        let clamp = |index: usize, len: usize| index.min(len.saturating_sub(1));
        self.selection.project = clamp(self.selection.project, self.view.projects.len());
        self.selection.file = clamp(self.selection.file, self.view.files.len());

        match &self.view.editor {
            Some(editor) => {
                if !editor_was_open {
                    self.selection.row = 0;
                    self.selection.column = Column::Key;
                }
                if let Some(focus) = editor.focus_row {
                    if !editor_was_open || editor.focus_row != previous_focus {
                        self.selection.row = focus;
                    }
                }
                self.selection.row = clamp(self.selection.row, editor.rows.len());
            }
            None => {
                self.selection.row = 0;
                if self.input_mode != InputMode::Normal {
                    self.input_mode = InputMode::Normal;
                    self.search_input.clear();
                }
            }
        }
    }

    pub fn selected_project_name(&self) -> Option<&str> {
        self.view
            .projects
            .get(self.selection.project)
            .map(|p| p.name.as_str())
    }

    pub fn selected_file_name(&self) -> Option<&str> {
        self.view
            .files
            .get(self.selection.file)
            .map(|f| f.file_name.as_str())
    }

    /// Text of the selected cell
    pub fn selected_cell(&self) -> Option<&str> {
        let row = self.view.editor.as_ref()?.rows.get(self.selection.row)?;
        Some(match self.selection.column {
            Column::Key => row.key.as_str(),
            Column::Value => row.value.as_str(),
        })
    }
}
