//! Message types for the UI (TEA pattern)

use crate::input_key::InputKey;
use crate::view::WorkbenchView;

/// All possible messages/actions in the UI
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// The engine published a new snapshot
    ViewUpdated(Box<WorkbenchView>),

    /// Ask the engine to quit (it confirms first)
    RequestQuit,

    /// Force quit without confirmation (Ctrl+C)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Dialogs
    // ─────────────────────────────────────────────────────────
    /// Answer the open confirm dialog
    ConfirmDialogAnswer(bool),

    /// Submit the directory prompt with its current text
    SubmitDirectoryPrompt,

    /// Cancel the directory prompt
    CancelDirectoryPrompt,

    /// Editing key for the directory prompt
    PromptEdit(InputKey),

    /// Dismiss the notification on top of the queue
    DismissNotification,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,
    PageDown,
    PageUp,

    /// Enter on the current screen (authorize, open project/file, edit cell)
    Activate,

    /// Esc on the current screen (close file/project)
    Back,

    /// Switch between the key and value column
    SwitchColumn,

    // ─────────────────────────────────────────────────────────
    // Workbench operations
    // ─────────────────────────────────────────────────────────
    Authorize,
    Reauthorize,
    RefreshProjects,
    AddRow,
    DeleteRow,
    Save,
    ToggleEnvironment,

    // ─────────────────────────────────────────────────────────
    // Cell editing
    // ─────────────────────────────────────────────────────────
    StartEditCell,
    /// Editing key for the cell input
    CellEdit(InputKey),
    CommitEditCell,
    CancelEditCell,

    // ─────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────
    /// Open the search bar
    StartSearch,
    /// Editing key for the search bar
    SearchEdit(InputKey),
    /// Close the search bar, keeping the query
    SubmitSearch,
    /// Close the search bar and clear the query
    CancelSearch,
    NextSearchMatch,
    PreviousSearchMatch,
}
