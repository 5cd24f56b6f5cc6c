//! Tests for handler module

use super::*;
use crate::engine::Command;
use crate::host::HostRequest;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, InputMode, Screen, UiMode};
use crate::view::{EditorView, RowView, SearchView, WorkbenchView};
use propdesk_core::{Column, ConfigFile, EnvironmentMode, Project};
use tokio::sync::oneshot;

fn projects_view() -> WorkbenchView {
    WorkbenchView {
        revision: 0,
        authorized: true,
        root_path: Some("/opt".to_string()),
        projects: vec![
            Project::new("archive", "/opt/data"),
            Project::new("billing", "/opt/data"),
        ],
        ..Default::default()
    }
}

fn editor_view(environment: EnvironmentMode) -> WorkbenchView {
    let mut view = projects_view();
    view.environment = environment;
    view.current_project = Some(Project::new("billing", "/opt/data"));
    view.files = vec![ConfigFile::from_file_name("app+Billing.properties").unwrap()];
    view.editor = Some(EditorView {
        project: "billing".to_string(),
        file: view.files[0].clone(),
        rows: vec![
            RowView {
                key: "alpha".to_string(),
                value: "1".to_string(),
                deletable: environment.is_local(),
            },
            RowView {
                key: "beta".to_string(),
                value: "2".to_string(),
                deletable: environment.is_local(),
            },
        ],
        dirty: false,
        search: SearchView::default(),
        focus_row: None,
    });
    view
}

fn state_with(view: WorkbenchView) -> AppState {
    let mut state = AppState::new();
    state.apply_view(view);
    state
}

fn sent(result: UpdateResult) -> Option<Command> {
    result.action.map(|UpdateAction::Send(command)| command)
}

// ─────────────────────────────────────────────────────────
// Quit
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting() {
    let mut state = AppState::new();
    assert!(!state.should_quit());

    update(&mut state, Message::Quit);

    assert!(state.should_quit());
}

#[test]
fn test_q_key_produces_request_quit_message() {
    let state = AppState::new();

    let result = handle_key(&state, InputKey::Char('q'));

    assert!(matches!(result, Some(Message::RequestQuit)));
}

#[test]
fn test_ctrl_c_quits_from_any_mode() {
    let mut state = state_with(editor_view(EnvironmentMode::Local));
    state.input_mode = InputMode::EditCell;

    let result = handle_key(&state, InputKey::CharCtrl('c'));

    assert!(matches!(result, Some(Message::Quit)));
}

#[test]
fn test_ctrl_c_with_unsaved_edits_asks_first() {
    let mut view = editor_view(EnvironmentMode::Local);
    if let Some(editor) = view.editor.as_mut() {
        editor.dirty = true;
    }
    let mut state = state_with(view);

    let msg = handle_key(&state, InputKey::CharCtrl('c')).unwrap();
    assert!(matches!(msg, Message::RequestQuit));
    let result = update(&mut state, msg);

    assert_eq!(sent(result), Some(Command::RequestQuit));
    assert!(!state.should_quit());
}

#[test]
fn test_second_ctrl_c_during_quit_prompt_quits() {
    let mut view = editor_view(EnvironmentMode::Local);
    if let Some(editor) = view.editor.as_mut() {
        editor.dirty = true;
    }
    let mut state = state_with(view);
    let (reply, _rx) = oneshot::channel();
    handle_host_request(
        &mut state,
        HostRequest::Confirm {
            message: "You have unsaved changes. Close the configuration viewer?".to_string(),
            reply,
        },
    );

    let msg = handle_key(&state, InputKey::CharCtrl('c')).unwrap();
    update(&mut state, msg);

    assert!(state.should_quit());
}

#[test]
fn test_request_quit_goes_through_engine() {
    let mut state = AppState::new();

    let result = update(&mut state, Message::RequestQuit);

    assert_eq!(sent(result), Some(Command::RequestQuit));
    assert!(!state.should_quit());
}

// ─────────────────────────────────────────────────────────
// Screens
// ─────────────────────────────────────────────────────────

#[test]
fn test_enter_on_authorization_screen_authorizes() {
    let mut state = AppState::new();
    assert_eq!(state.screen(), Screen::Authorization);

    let msg = handle_key(&state, InputKey::Enter).unwrap();
    assert!(matches!(msg, Message::Authorize));

    let result = update(&mut state, msg);
    assert_eq!(sent(result), Some(Command::Authorize));
}

#[test]
fn test_editor_keys_ignored_before_authorization() {
    let state = AppState::new();

    assert!(handle_key(&state, InputKey::Char('e')).is_none());
    assert!(handle_key(&state, InputKey::Char('s')).is_none());
}

#[test]
fn test_activate_opens_selected_project() {
    let mut state = state_with(projects_view());
    update(&mut state, Message::SelectNext);

    let result = update(&mut state, Message::Activate);

    assert_eq!(sent(result), Some(Command::OpenProject("billing".to_string())));
}

#[test]
fn test_back_from_editor_closes_file() {
    let mut state = state_with(editor_view(EnvironmentMode::Local));

    let msg = handle_key(&state, InputKey::Esc).unwrap();
    let result = update(&mut state, msg);

    assert_eq!(sent(result), Some(Command::CloseFile));
}

#[test]
fn test_back_from_projects_does_nothing() {
    let mut state = state_with(projects_view());

    let result = update(&mut state, Message::Back);

    assert!(result.action.is_none());
    assert_eq!(state.sent_commands, 0);
}

// ─────────────────────────────────────────────────────────
// Busy guard
// ─────────────────────────────────────────────────────────

#[test]
fn test_commands_ignored_while_busy() {
    let mut state = state_with(editor_view(EnvironmentMode::Local));

    let first = update(&mut state, Message::Save);
    assert_eq!(sent(first), Some(Command::Save));
    assert!(state.is_busy());

    let second = update(&mut state, Message::AddRow);
    assert!(second.action.is_none());
}

#[test]
fn test_commands_accepted_after_view_catches_up() {
    let mut state = state_with(editor_view(EnvironmentMode::Local));
    update(&mut state, Message::Save);

    let mut view = editor_view(EnvironmentMode::Local);
    view.revision = 1;
    update(&mut state, Message::ViewUpdated(Box::new(view)));

    let result = update(&mut state, Message::AddRow);
    assert_eq!(sent(result), Some(Command::AddRow));
}

#[test]
fn test_search_navigation_bypasses_busy_guard() {
    let mut state = state_with(editor_view(EnvironmentMode::Local));
    update(&mut state, Message::Save);

    let result = update(&mut state, Message::NextSearchMatch);

    assert_eq!(sent(result), Some(Command::SearchNext));
    assert_eq!(state.sent_commands, 2);
}

// ─────────────────────────────────────────────────────────
// Cell editing
// ─────────────────────────────────────────────────────────

#[test]
fn test_edit_cell_disabled_online() {
    let mut state = state_with(editor_view(EnvironmentMode::Online));

    update(&mut state, Message::StartEditCell);

    assert_eq!(state.input_mode, InputMode::Normal);
    assert_eq!(state.ui_mode(), UiMode::Notification);
}

#[test]
fn test_edit_cell_commit_sends_set_cell() {
    let mut state = state_with(editor_view(EnvironmentMode::Local));
    update(&mut state, Message::SelectNext);
    update(&mut state, Message::SwitchColumn);

    update(&mut state, Message::StartEditCell);
    assert_eq!(state.ui_mode(), UiMode::EditCell);
    assert_eq!(state.cell_input.text(), "2");

    for key in [InputKey::Backspace, InputKey::Char('4'), InputKey::Char('2')] {
        let msg = handle_key(&state, key).unwrap();
        update(&mut state, msg);
    }
    let result = update(&mut state, Message::CommitEditCell);

    assert_eq!(state.input_mode, InputMode::Normal);
    assert_eq!(
        sent(result),
        Some(Command::SetCell {
            row: 1,
            column: Column::Value,
            value: "42".to_string(),
        })
    );
}

#[test]
fn test_unchanged_cell_commit_sends_nothing() {
    let mut state = state_with(editor_view(EnvironmentMode::Local));
    update(&mut state, Message::StartEditCell);

    let result = update(&mut state, Message::CommitEditCell);

    assert!(result.action.is_none());
}

#[test]
fn test_escape_cancels_cell_edit() {
    let mut state = state_with(editor_view(EnvironmentMode::Local));
    update(&mut state, Message::StartEditCell);

    let msg = handle_key(&state, InputKey::Esc).unwrap();
    assert!(matches!(msg, Message::CancelEditCell));
    let result = update(&mut state, msg);

    assert!(result.action.is_none());
    assert_eq!(state.input_mode, InputMode::Normal);
}

#[test]
fn test_delete_row_targets_selection() {
    let mut state = state_with(editor_view(EnvironmentMode::Local));
    update(&mut state, Message::SelectLast);

    let msg = handle_key(&state, InputKey::Char('d')).unwrap();
    let result = update(&mut state, msg);

    assert_eq!(sent(result), Some(Command::DeleteRow(1)));
}

// ─────────────────────────────────────────────────────────
// Search
// ─────────────────────────────────────────────────────────

#[test]
fn test_typing_in_search_updates_query() {
    let mut state = state_with(editor_view(EnvironmentMode::Online));
    update(&mut state, Message::StartSearch);
    assert_eq!(state.ui_mode(), UiMode::SearchInput);

    let msg = handle_key(&state, InputKey::Char('b')).unwrap();
    let result = update(&mut state, msg);

    assert_eq!(sent(result), Some(Command::SetSearchQuery("b".to_string())));
}

#[test]
fn test_cancel_search_clears_query() {
    let mut state = state_with(editor_view(EnvironmentMode::Local));
    update(&mut state, Message::StartSearch);
    update(&mut state, Message::SearchEdit(InputKey::Char('x')));

    let result = update(&mut state, Message::CancelSearch);

    assert_eq!(sent(result), Some(Command::ClearSearch));
    assert_eq!(state.search_input.text(), "");
    assert_eq!(state.input_mode, InputMode::Normal);
}

#[test]
fn test_n_key_moves_to_next_match() {
    let state = state_with(editor_view(EnvironmentMode::Local));

    assert!(matches!(
        handle_key(&state, InputKey::Char('n')),
        Some(Message::NextSearchMatch)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Char('N')),
        Some(Message::PreviousSearchMatch)
    ));
}

// ─────────────────────────────────────────────────────────
// Host requests
// ─────────────────────────────────────────────────────────

#[test]
fn test_confirm_request_answered_with_y() {
    let mut state = state_with(projects_view());
    let (reply, mut rx) = oneshot::channel();
    handle_host_request(
        &mut state,
        HostRequest::Confirm {
            message: "Switch to Local?".to_string(),
            reply,
        },
    );
    assert_eq!(state.ui_mode(), UiMode::ConfirmDialog);

    let msg = handle_key(&state, InputKey::Char('y')).unwrap();
    update(&mut state, msg);

    assert_eq!(rx.try_recv(), Ok(true));
    assert_eq!(state.ui_mode(), UiMode::Normal);
}

#[test]
fn test_directory_prompt_submits_trimmed_path() {
    let mut state = AppState::new();
    let (reply, mut rx) = oneshot::channel();
    handle_host_request(
        &mut state,
        HostRequest::PromptDirectory {
            start_hint: "/opt".to_string(),
            reply,
        },
    );
    assert_eq!(state.prompt_input.text(), "/opt");

    update(&mut state, Message::PromptEdit(InputKey::Char(' ')));
    update(&mut state, Message::SubmitDirectoryPrompt);

    assert_eq!(rx.try_recv(), Ok(Some("/opt".to_string())));
}

#[test]
fn test_directory_prompt_escape_cancels() {
    let mut state = AppState::new();
    let (reply, mut rx) = oneshot::channel();
    handle_host_request(
        &mut state,
        HostRequest::PromptDirectory {
            start_hint: "/opt".to_string(),
            reply,
        },
    );

    let msg = handle_key(&state, InputKey::Esc).unwrap();
    update(&mut state, msg);

    assert_eq!(rx.try_recv(), Ok(None));
    assert_eq!(state.ui_mode(), UiMode::Normal);
}

#[test]
fn test_notifications_dismissed_in_order() {
    let mut state = AppState::new();
    handle_host_request(
        &mut state,
        HostRequest::Notify {
            title: "Error".to_string(),
            message: "first".to_string(),
        },
    );
    handle_host_request(
        &mut state,
        HostRequest::Notify {
            title: "Notice".to_string(),
            message: "second".to_string(),
        },
    );

    update(&mut state, Message::DismissNotification);

    assert_eq!(
        state.current_notification().map(|n| n.message.as_str()),
        Some("second")
    );
}
