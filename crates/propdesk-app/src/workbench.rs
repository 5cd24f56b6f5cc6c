//! The workbench: one session object sequencing every component
//!
//! Owns the root capability (through [`AuthorizationSession`]), the project
//! and file lists, the open file and the search state. Every operation
//! reports a failure to the host at most once and leaves state at its prior
//! or empty value; nothing here returns an error to the caller.

use propdesk_core::prelude::*;
use propdesk_core::{Column, ConfigFile, EnvironmentMode, Project, SearchIndex};
use propdesk_fs::DirectoryCapability;

use crate::auth::AuthorizationSession;
use crate::config::Settings;
use crate::edit_session::{EditSession, SaveOutcome};
use crate::environment::EnvironmentSwitch;
use crate::host::{Host, TITLE_ERROR};
use crate::repository::ConfigRepository;
use crate::view::{EditorView, RowView, SearchView, WorkbenchView};

pub struct Workbench<H: Host> {
    host: H,
    settings: Settings,
    auth: AuthorizationSession<H::Directory>,
    repository: ConfigRepository<H::Directory>,
    environment: EnvironmentSwitch,
    editor: EditSession<H::Directory>,
    search: SearchIndex,
    projects: Vec<Project>,
    current_project: Option<Project>,
    files: Vec<ConfigFile>,
    focus_row: Option<usize>,
    quit: bool,
}

impl<H: Host> Workbench<H> {
    pub fn new(host: H, settings: Settings) -> Self {
        let auth = AuthorizationSession::new(settings.root.name.clone());
        Self {
            host,
            settings,
            auth,
            repository: ConfigRepository::new(),
            environment: EnvironmentSwitch::new(),
            editor: EditSession::new(),
            search: SearchIndex::new(),
            projects: Vec::new(),
            current_project: None,
            files: Vec::new(),
            focus_row: None,
            quit: false,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn environment(&self) -> EnvironmentMode {
        self.environment.mode()
    }

    pub fn is_authorized(&self) -> bool {
        self.auth.is_authorized()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    fn notify_error(&self, message: &str) {
        self.host.notify(message, TITLE_ERROR);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Authorization
    // ─────────────────────────────────────────────────────────────────────────

    /// Ask the host for the root, then read the environment and list projects.
    ///
    /// Returns whether the workbench is authorized afterwards.
    pub async fn authorize(&mut self) -> bool {
        let start_hint = self.settings.root.start_hint.clone();
        let acquired = self
            .auth
            .acquire_root(&self.host, &start_hint)
            .await
            .map(|_| ());
        match acquired {
            Ok(()) => {}
            Err(e) if e.is_silent() => {
                debug!("Authorization cancelled");
                return false;
            }
            Err(Error::Validation { message }) => {
                self.notify_error(&message);
                return false;
            }
            Err(e) => {
                error!("Authorization failed: {}", e);
                self.notify_error("Authorization failed, please try again");
                return false;
            }
        }

        if let Some(root) = self.auth.root() {
            self.environment.read(root).await;
        }
        self.refresh_projects().await;
        true
    }

    /// Drop the current root and everything derived from it, then prompt again.
    ///
    /// Unsaved edits are only discarded after the user confirms.
    pub async fn reauthorize(&mut self) -> bool {
        if !self.editor.close(&self.host).await {
            return self.is_authorized();
        }

        self.auth.reset();
        self.repository.reset();
        self.environment.reset();
        self.search.clear();
        self.projects.clear();
        self.files.clear();
        self.current_project = None;
        self.focus_row = None;

        self.authorize().await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Projects & Files
    // ─────────────────────────────────────────────────────────────────────────

    /// Re-list projects (and the files of the open project)
    pub async fn refresh_projects(&mut self) {
        let Some(root) = self.auth.root() else {
            self.notify_error("Not authorized, please authorize again");
            return;
        };

        self.projects = self.repository.list_projects(root, &self.host).await;

        let current = self.current_project.take();
        if let Some(project) = current {
            if let Some(project) = self.projects.iter().find(|p| p.name == project.name) {
                self.current_project = Some(project.clone());
                self.files = self.repository.list_config_files(project, &self.host).await;
            } else {
                self.files.clear();
            }
        }
    }

    /// Make `name` the current project and list its files
    pub async fn open_project(&mut self, name: &str) {
        if !self.is_authorized() {
            self.notify_error("Not authorized, please authorize again");
            return;
        }
        let Some(project) = self.projects.iter().find(|p| p.name == name).cloned() else {
            warn!("Unknown project {}", name);
            self.notify_error(&format!("Project {} not found", name));
            return;
        };

        self.files = self.repository.list_config_files(&project, &self.host).await;
        debug!("Project {}: {} config files", project.name, self.files.len());
        self.current_project = Some(project);
    }

    /// Leave the current project (closing its file first)
    pub async fn close_project(&mut self) {
        if !self.close_file().await {
            return;
        }
        self.current_project = None;
        self.files.clear();
    }

    /// Open a file of the current project in the editor
    pub async fn open_file(&mut self, file_name: &str) {
        let Some(project) = self.current_project.clone() else {
            self.notify_error("No project selected");
            return;
        };
        let Some(file) = self.files.iter().find(|f| f.file_name == file_name).cloned() else {
            self.notify_error(&format!("Config file {} not found", file_name));
            return;
        };
        if !self.close_file().await {
            return;
        }

        let dir = match self.repository.open_cache_dir(&project).await {
            Ok(dir) => dir,
            Err(e) => {
                error!("Cannot open config-cache of {}: {}", project.name, e);
                self.notify_error("Cannot read the configuration file");
                return;
            }
        };
        if let Err(e) = self.editor.open(dir, project, file).await {
            error!("Cannot read {}: {}", file_name, e);
            self.notify_error("Cannot read the configuration file");
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Editing
    // ─────────────────────────────────────────────────────────────────────────

    pub fn set_cell(&mut self, row: usize, column: Column, value: impl Into<String>) {
        if self
            .editor
            .set_cell(self.environment.mode(), row, column, value)
        {
            self.search.refresh(self.editor.entries());
        }
    }

    /// Append a placeholder row; it becomes the focused row
    pub fn add_row(&mut self) -> Option<usize> {
        let row = self.editor.add_row(self.environment.mode())?;
        self.search.refresh(self.editor.entries());
        self.focus_row = Some(row);
        Some(row)
    }

    pub async fn delete_row(&mut self, row: usize) {
        let mode = self.environment.mode();
        if self.editor.delete_row(mode, row, &self.host).await {
            self.search.refresh(self.editor.entries());
            self.focus_row = None;
        }
    }

    pub async fn save(&mut self) {
        if !self.editor.is_open() {
            self.notify_error("No configuration file is open");
            return;
        }

        match self.editor.save(self.environment.mode(), &self.host).await {
            Ok(SaveOutcome::Saved) => {
                if self.settings.editor.close_after_save {
                    self.editor.reset();
                    self.search.clear();
                    self.focus_row = None;
                }
            }
            Ok(SaveOutcome::Blocked) => {}
            Err(e) => {
                error!("Save failed: {}", e);
                self.notify_error("Cannot save the configuration file");
            }
        }
    }

    /// Close the open file. Returns `false` if the user kept it open.
    pub async fn close_file(&mut self) -> bool {
        if !self.editor.close(&self.host).await {
            return false;
        }
        self.search.clear();
        self.focus_row = None;
        true
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────

    pub fn set_search_query(&mut self, text: &str) {
        self.search.set_query(text, self.editor.entries());
        self.focus_row = self.search.current_row();
    }

    pub fn search_next(&mut self) {
        self.search.next();
        self.focus_row = self.search.current_row();
    }

    pub fn search_previous(&mut self) {
        self.search.previous();
        self.focus_row = self.search.current_row();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    pub fn search(&self) -> &SearchIndex {
        &self.search
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Environment & lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    pub async fn toggle_environment(&mut self) {
        let Some(root) = self.auth.root() else {
            self.notify_error("Not authorized, please authorize again");
            return;
        };
        self.environment.toggle(root, &self.host).await;
    }

    /// Ask before quitting; warns about unsaved changes
    pub async fn request_quit(&mut self) -> bool {
        let message = if self.editor.is_dirty() {
            "You have unsaved changes. Close the configuration viewer?"
        } else {
            "Close the configuration viewer?"
        };
        if self.host.confirm(message).await {
            info!("Quit confirmed");
            self.quit = true;
        }
        self.quit
    }

    pub fn view(&self) -> WorkbenchView {
        let environment = self.environment.mode();
        let editor = match (self.editor.project(), self.editor.file()) {
            (Some(project), Some(file)) => Some(EditorView {
                project: project.name.clone(),
                file: file.clone(),
                rows: self
                    .editor
                    .entries()
                    .iter()
                    .map(|entry| RowView::from_entry(entry, environment))
                    .collect(),
                dirty: self.editor.is_dirty(),
                search: SearchView::from(&self.search),
                focus_row: self.focus_row,
            }),
            _ => None,
        };

        WorkbenchView {
            revision: 0,
            authorized: self.auth.is_authorized(),
            root_path: self.auth.root().map(|root| root.display_path()),
            environment,
            projects: self.projects.clone(),
            current_project: self.current_project.clone(),
            files: self.files.clone(),
            editor,
            quit: self.quit,
        }
    }
}

#[cfg(test)]
mod tests;
