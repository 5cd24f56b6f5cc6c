//! Tests for the workbench workflow

use super::*;
use crate::config::Settings;
use crate::test_utils::ScriptedHost;
use propdesk_core::Column;
use propdesk_fs::MemoryDirectory;

const SERVER_FILE: &str = "settings/server.properties";
const BILLING_FILE: &str = "data/billing/config-cache/app+Billing.properties";

fn tree(env_line: &str) -> MemoryDirectory {
    MemoryDirectory::root("opt")
        .with_file(SERVER_FILE, &format!("[General]\n{}\n", env_line))
        .with_file(BILLING_FILE, "# header\nalpha=1\nbeta=alpha2\ngamma=3\n")
        .with_file("data/billing/config-cache/app+Other.properties", "x=1\n")
        .with_dir("data/archive")
}

/// Authorized workbench with `billing` open on `app+Billing.properties`
async fn editing(root: &MemoryDirectory) -> Workbench<ScriptedHost> {
    let host = ScriptedHost::new().grant(root.clone());
    let mut workbench = Workbench::new(host, Settings::default());
    assert!(workbench.authorize().await);
    workbench.open_project("billing").await;
    workbench.open_file("app+Billing.properties").await;
    assert!(workbench.view().editor.is_some());
    workbench
}

// ─────────────────────────────────────────────────────────────────────────────
// Authorization
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_authorize_reads_environment_and_lists_projects() {
    let root = tree("env=Local");
    let host = ScriptedHost::new().grant(root);
    let mut workbench = Workbench::new(host, Settings::default());

    assert!(workbench.authorize().await);

    let view = workbench.view();
    assert!(view.authorized);
    assert_eq!(view.root_path.as_deref(), Some("/opt"));
    assert_eq!(view.environment, EnvironmentMode::Local);
    let names: Vec<_> = view.projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["archive", "billing"]);
}

#[tokio::test]
async fn test_wrong_directory_notifies_and_stays_unauthorized() {
    let host = ScriptedHost::new().grant(MemoryDirectory::root("home"));
    let mut workbench = Workbench::new(host, Settings::default());

    assert!(!workbench.authorize().await);

    assert!(!workbench.view().authorized);
    let notes = workbench.host().notifications();
    assert_eq!(notes.len(), 1);
    assert!(notes[0].1.contains("opt"));
}

#[tokio::test]
async fn test_cancelled_authorization_is_silent() {
    let host = ScriptedHost::new().cancel_prompt();
    let mut workbench = Workbench::new(host, Settings::default());

    assert!(!workbench.authorize().await);
    assert!(workbench.host().notifications().is_empty());
}

#[tokio::test]
async fn test_configured_root_name_is_enforced() {
    let mut settings = Settings::default();
    settings.root.name = "srv".to_string();
    let host = ScriptedHost::new().grant(MemoryDirectory::root("SRV"));
    let mut workbench = Workbench::new(host, settings);

    assert!(workbench.authorize().await);
}

#[tokio::test]
async fn test_reauthorization_resets_environment_until_read() {
    let first = tree("env=Local");
    let second = MemoryDirectory::root("opt");
    let host = ScriptedHost::new().grant(first).cancel_prompt();
    let mut workbench = Workbench::new(host, Settings::default());
    workbench.authorize().await;
    assert_eq!(workbench.environment(), EnvironmentMode::Local);

    // Cancelled re-prompt: everything derived from the old root is gone
    assert!(!workbench.reauthorize().await);
    let view = workbench.view();
    assert!(!view.authorized);
    assert_eq!(view.environment, EnvironmentMode::Online);
    assert!(view.projects.is_empty());

    let host = ScriptedHost::new().grant(second);
    let mut workbench = Workbench::new(host, Settings::default());
    workbench.authorize().await;
    assert_eq!(workbench.environment(), EnvironmentMode::Online);
}

#[tokio::test]
async fn test_operations_require_authorization() {
    let mut workbench = Workbench::new(ScriptedHost::new(), Settings::default());

    workbench.refresh_projects().await;
    workbench.toggle_environment().await;
    workbench.open_project("billing").await;

    assert_eq!(workbench.host().notifications().len(), 3);
    assert!(workbench.host().confirms().is_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// Projects & files
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_open_project_lists_files_by_name() {
    let root = tree("");
    let host = ScriptedHost::new().grant(root);
    let mut workbench = Workbench::new(host, Settings::default());
    workbench.authorize().await;

    workbench.open_project("billing").await;

    let view = workbench.view();
    let shown: Vec<_> = view.files.iter().map(|f| f.display_name.as_str()).collect();
    assert_eq!(shown, vec!["Billing", "Other"]);
}

#[tokio::test]
async fn test_project_without_cache_gives_empty_list_and_one_notification() {
    let root = tree("");
    let host = ScriptedHost::new().grant(root);
    let mut workbench = Workbench::new(host, Settings::default());
    workbench.authorize().await;

    workbench.open_project("archive").await;

    assert!(workbench.view().files.is_empty());
    assert_eq!(workbench.host().notifications().len(), 1);
}

#[tokio::test]
async fn test_open_file_failure_notifies_once() {
    let root = tree("");
    let host = ScriptedHost::new().grant(root.clone());
    let mut workbench = Workbench::new(host, Settings::default());
    workbench.authorize().await;
    workbench.open_project("billing").await;

    root.deny("data/billing/config-cache");
    workbench.open_file("app+Billing.properties").await;

    assert!(workbench.view().editor.is_none());
    assert_eq!(workbench.host().notifications().len(), 1);
}

#[tokio::test]
async fn test_close_project_closes_editor() {
    let root = tree("");
    let mut workbench = editing(&root).await;

    workbench.close_project().await;

    let view = workbench.view();
    assert!(view.editor.is_none());
    assert!(view.current_project.is_none());
    assert!(view.files.is_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// Editing
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_mutations_dirty_in_local() {
    let root = tree("env=Local");
    let mut workbench = editing(&root).await;
    workbench.host().always(true);

    workbench.set_cell(0, Column::Value, "10");
    assert!(workbench.view().editor.unwrap().dirty);

    let row = workbench.add_row().unwrap();
    let editor = workbench.view().editor.unwrap();
    assert_eq!(editor.rows[row].key, "new_key");
    assert_eq!(editor.focus_row, Some(row));
    assert!(editor.rows.iter().all(|r| r.deletable));

    workbench.delete_row(0).await;
    assert_eq!(workbench.view().editor.unwrap().rows.len(), 3);
}

#[tokio::test]
async fn test_mutations_are_noops_online() {
    let root = tree("");
    let mut workbench = editing(&root).await;
    workbench.host().always(true);
    let before = workbench.view().editor.unwrap();

    workbench.set_cell(0, Column::Key, "changed");
    assert_eq!(workbench.add_row(), None);
    workbench.delete_row(0).await;

    let after = workbench.view().editor.unwrap();
    assert_eq!(after.rows, before.rows);
    assert!(!after.dirty);
    assert!(after.rows.iter().all(|r| !r.deletable));
    assert!(workbench.host().confirms().is_empty());
}

#[tokio::test]
async fn test_save_online_writes_nothing_and_notifies() {
    let root = tree("");
    let mut workbench = editing(&root).await;
    let writes_before = root.write_count();

    workbench.save().await;

    assert_eq!(root.write_count(), writes_before);
    assert!(workbench.view().editor.is_some());
    assert_eq!(workbench.host().notifications().len(), 1);
}

#[tokio::test]
async fn test_save_local_writes_and_closes_editor() {
    let root = tree("env=Local");
    let mut workbench = editing(&root).await;

    workbench.set_cell(1, Column::Value, "b2");
    workbench.save().await;

    assert_eq!(
        root.file(BILLING_FILE).as_deref(),
        Some("alpha=1\nbeta=b2\ngamma=3\n")
    );
    assert!(workbench.view().editor.is_none());
    assert_eq!(workbench.host().notifications().len(), 1);
}

#[tokio::test]
async fn test_save_can_keep_editor_open() {
    let root = tree("env=Local");
    let host = ScriptedHost::new().grant(root.clone());
    let mut settings = Settings::default();
    settings.editor.close_after_save = false;
    let mut workbench = Workbench::new(host, settings);
    workbench.authorize().await;
    workbench.open_project("billing").await;
    workbench.open_file("app+Billing.properties").await;

    workbench.add_row();
    workbench.save().await;

    let editor = workbench.view().editor.unwrap();
    assert!(!editor.dirty);
    assert_eq!(editor.rows.len(), 4);
}

#[tokio::test]
async fn test_save_failure_keeps_dirty_and_notifies_once() {
    let root = tree("env=Local");
    let mut workbench = editing(&root).await;
    workbench.add_row();
    root.fail_writes(true);

    workbench.save().await;

    let editor = workbench.view().editor.unwrap();
    assert!(editor.dirty);
    let notes = workbench.host().notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].0, TITLE_ERROR);
}

#[tokio::test]
async fn test_close_dirty_file_needs_confirmation() {
    let root = tree("env=Local");
    let mut workbench = editing(&root).await;
    workbench.add_row();

    assert!(!workbench.close_file().await);
    assert!(workbench.view().editor.is_some());

    workbench.host().answer(true);
    assert!(workbench.close_file().await);
    assert!(workbench.view().editor.is_none());
}

// ─────────────────────────────────────────────────────────────────────────────
// Search
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_search_navigation_wraps() {
    let root = tree("");
    let mut workbench = editing(&root).await;

    workbench.set_search_query("alpha");
    let search = workbench.view().editor.unwrap().search;
    assert_eq!(search.matches, vec![0, 1]);
    assert_eq!(search.current_row, Some(0));
    assert_eq!(search.summary, "1/2");

    workbench.search_next();
    assert_eq!(workbench.search().cursor(), Some(1));
    workbench.search_next();
    assert_eq!(workbench.search().cursor(), Some(0));
    workbench.search_previous();
    assert_eq!(workbench.view().editor.unwrap().focus_row, Some(1));
}

#[tokio::test]
async fn test_search_follows_entry_changes() {
    let root = tree("env=Local");
    let mut workbench = editing(&root).await;
    workbench.host().always(true);
    workbench.set_search_query("alpha");

    workbench.delete_row(0).await;
    assert_eq!(workbench.search().matches(), &[0]);

    workbench.set_cell(0, Column::Value, "plain");
    assert!(workbench.search().matches().is_empty());
    assert_eq!(workbench.search().cursor(), None);

    workbench.set_cell(1, Column::Key, "alpha");
    assert_eq!(workbench.search().matches(), &[1]);
}

#[tokio::test]
async fn test_clear_search() {
    let root = tree("");
    let mut workbench = editing(&root).await;
    workbench.set_search_query("a");

    workbench.clear_search();

    let search = workbench.view().editor.unwrap().search;
    assert!(search.query.is_empty());
    assert!(search.matches.is_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// Environment & quit
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_toggle_environment_enables_editing() {
    let root = tree("");
    let mut workbench = editing(&root).await;
    workbench.host().answer(true);

    workbench.toggle_environment().await;

    assert_eq!(workbench.environment(), EnvironmentMode::Local);
    assert_eq!(
        root.file(SERVER_FILE).as_deref(),
        Some("[General]\nenv=Local")
    );
    assert!(workbench.add_row().is_some());
}

#[tokio::test]
async fn test_toggle_write_failure_leaves_mode_flipped() {
    let root = tree("");
    let mut workbench = editing(&root).await;
    workbench.host().answer(true);
    root.fail_writes(true);

    workbench.toggle_environment().await;

    assert_eq!(workbench.environment(), EnvironmentMode::Local);
    assert_eq!(root.file(SERVER_FILE).as_deref(), Some("[General]\n\n"));
}

#[tokio::test]
async fn test_request_quit_warns_about_unsaved_changes() {
    let root = tree("env=Local");
    let mut workbench = editing(&root).await;
    workbench.add_row();

    assert!(!workbench.request_quit().await);
    assert!(workbench.host().confirms()[0].contains("unsaved"));

    workbench.host().answer(true);
    assert!(workbench.request_quit().await);
    assert!(workbench.view().quit);
}
