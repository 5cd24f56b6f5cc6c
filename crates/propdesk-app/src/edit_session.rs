//! In-memory editing of one config file
//!
//! Rows are identified by position; keys may repeat. Every mutation is gated
//! on the environment mode and silently does nothing while `Online`.

use propdesk_core::prelude::*;
use propdesk_core::{decode, encode, Column, ConfigEntry, ConfigFile, EnvironmentMode, Project};
use propdesk_fs::DirectoryCapability;

use crate::host::{Host, TITLE_INFO};

/// Lifecycle of the edit session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditPhase {
    #[default]
    Closed,
    Loading,
    Ready,
    Closing,
}

/// Outcome of a save request that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// Online mode; nothing was written
    Blocked,
}

/// Rows of the open file plus dirty tracking
#[derive(Debug)]
pub struct EditSession<D> {
    phase: EditPhase,
    /// `{project}/config-cache` of the open file
    dir: Option<D>,
    project: Option<Project>,
    file: Option<ConfigFile>,
    entries: Vec<ConfigEntry>,
    dirty: bool,
}

impl<D> Default for EditSession<D> {
    fn default() -> Self {
        Self {
            phase: EditPhase::Closed,
            dir: None,
            project: None,
            file: None,
            entries: Vec::new(),
            dirty: false,
        }
    }
}

impl<D: DirectoryCapability> EditSession<D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `file` from `dir` and make it the open file.
    ///
    /// On failure the session is left `Closed` and the error is returned.
    pub async fn open(&mut self, dir: D, project: Project, file: ConfigFile) -> Result<()> {
        self.reset();
        self.phase = EditPhase::Loading;

        let read = dir.read_text(&file.file_name).await;
        match read {
            Ok(text) => {
                self.entries = decode(&text);
                debug!(
                    "Opened {} ({} entries)",
                    file.file_name,
                    self.entries.len()
                );
                self.dir = Some(dir);
                self.project = Some(project);
                self.file = Some(file);
                self.dirty = false;
                self.phase = EditPhase::Ready;
                Ok(())
            }
            Err(e) => {
                self.reset();
                Err(e)
            }
        }
    }

    fn editable(&self, mode: EnvironmentMode) -> bool {
        self.phase == EditPhase::Ready && mode.is_local()
    }

    /// Overwrite one cell. Returns whether anything changed.
    pub fn set_cell(
        &mut self,
        mode: EnvironmentMode,
        row: usize,
        column: Column,
        value: impl Into<String>,
    ) -> bool {
        if !self.editable(mode) {
            return false;
        }
        let Some(entry) = self.entries.get_mut(row) else {
            return false;
        };
        entry.set(column, value);
        self.dirty = true;
        true
    }

    /// Append a placeholder row and return its index
    pub fn add_row(&mut self, mode: EnvironmentMode) -> Option<usize> {
        if !self.editable(mode) {
            return None;
        }
        self.entries.push(ConfigEntry::placeholder());
        self.dirty = true;
        Some(self.entries.len() - 1)
    }

    /// Remove a row once the user confirms. Returns whether it was removed.
    pub async fn delete_row<H: Host>(&mut self, mode: EnvironmentMode, row: usize, host: &H) -> bool {
        if !self.editable(mode) || row >= self.entries.len() {
            return false;
        }
        if !host.confirm("Delete this entry?").await {
            return false;
        }
        let removed = self.entries.remove(row);
        trace!("Deleted row {} ({})", row, removed.key);
        self.dirty = true;
        true
    }

    /// Write the rows back to the open file.
    ///
    /// In `Online` mode the user is told the edit is blocked and nothing is
    /// written. `dirty` only clears once the write has committed.
    pub async fn save<H: Host>(&mut self, mode: EnvironmentMode, host: &H) -> Result<SaveOutcome> {
        if !mode.is_local() {
            host.notify(
                "Online mode: configuration changes are not supported and will not take effect",
                TITLE_INFO,
            );
            return Ok(SaveOutcome::Blocked);
        }

        let (Some(dir), Some(file)) = (self.dir.as_ref(), self.file.as_ref()) else {
            return Err(Error::NoOpenFile);
        };

        dir.write_text(&file.file_name, &encode(&self.entries)).await?;
        self.dirty = false;

        info!("Saved {}", file.file_name);
        host.notify("Configuration file saved", TITLE_INFO);
        Ok(SaveOutcome::Saved)
    }

    /// Close the file, asking first when there are unsaved changes.
    ///
    /// Returns `false` when the user chose to keep editing.
    pub async fn close<H: Host>(&mut self, host: &H) -> bool {
        if self.phase == EditPhase::Closed {
            return true;
        }

        self.phase = EditPhase::Closing;
        if self.dirty && !host.confirm("You have unsaved changes. Close anyway?").await {
            self.phase = EditPhase::Ready;
            return false;
        }

        self.reset();
        true
    }

    /// Drop everything without asking
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn phase(&self) -> EditPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != EditPhase::Closed
    }

    pub fn entries(&self) -> &[ConfigEntry] {
        &self.entries
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn file(&self) -> Option<&ConfigFile> {
        self.file.as_ref()
    }

    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ScriptedHost;
    use propdesk_core::EnvironmentMode::{Local, Online};
    use propdesk_fs::MemoryDirectory;

    const FILE: &str = "app+Billing.properties";

    fn cache() -> MemoryDirectory {
        MemoryDirectory::root("config-cache").with_file(FILE, "# c\na=1\nb=2\n")
    }

    async fn opened(dir: &MemoryDirectory) -> EditSession<MemoryDirectory> {
        let mut session = EditSession::new();
        session
            .open(
                dir.clone(),
                Project::new("billing", "/opt/data"),
                ConfigFile::from_file_name(FILE).unwrap(),
            )
            .await
            .unwrap();
        session
    }

    #[tokio::test]
    async fn test_open_decodes_entries() {
        let session = opened(&cache()).await;
        assert_eq!(session.phase(), EditPhase::Ready);
        assert_eq!(session.entries().len(), 2);
        assert!(!session.is_dirty());
        assert_eq!(session.file().unwrap().display_name, "Billing");
    }

    #[tokio::test]
    async fn test_open_failure_leaves_closed() {
        let mut session = EditSession::new();
        let err = session
            .open(
                cache(),
                Project::new("billing", "/opt/data"),
                ConfigFile::from_file_name("missing.properties").unwrap(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
        assert_eq!(session.phase(), EditPhase::Closed);
        assert!(session.entries().is_empty());
    }

    #[tokio::test]
    async fn test_mutations_mark_dirty_in_local() {
        let host = ScriptedHost::new();
        host.always(true);
        let mut session = opened(&cache()).await;

        assert!(session.set_cell(Local, 0, Column::Value, "9"));
        assert_eq!(session.entries()[0].value, "9");
        assert!(session.is_dirty());

        let row = session.add_row(Local).unwrap();
        assert_eq!(row, 2);
        assert_eq!(session.entries()[2], ConfigEntry::placeholder());

        assert!(session.delete_row(Local, 1, &host).await);
        assert_eq!(session.entries().len(), 2);
    }

    #[tokio::test]
    async fn test_mutations_are_noops_online() {
        let host = ScriptedHost::new();
        host.always(true);
        let mut session = opened(&cache()).await;

        assert!(!session.set_cell(Online, 0, Column::Key, "x"));
        assert_eq!(session.add_row(Online), None);
        assert!(!session.delete_row(Online, 0, &host).await);

        assert!(!session.is_dirty());
        assert_eq!(session.entries()[0], ConfigEntry::new("a", "1"));
        assert!(host.confirms().is_empty());
    }

    #[tokio::test]
    async fn test_set_cell_out_of_range_is_noop() {
        let mut session = opened(&cache()).await;
        assert!(!session.set_cell(Local, 7, Column::Key, "x"));
        assert!(!session.is_dirty());
    }

    #[tokio::test]
    async fn test_delete_declined_keeps_row() {
        let host = ScriptedHost::new();
        let mut session = opened(&cache()).await;

        assert!(!session.delete_row(Local, 0, &host).await);
        assert_eq!(session.entries().len(), 2);
        assert!(!session.is_dirty());
    }

    #[tokio::test]
    async fn test_save_online_is_blocked() {
        let dir = cache();
        let host = ScriptedHost::new();
        let mut session = opened(&dir).await;
        session.set_cell(Local, 0, Column::Value, "9");

        let outcome = session.save(Online, &host).await.unwrap();

        assert_eq!(outcome, SaveOutcome::Blocked);
        assert!(session.is_dirty());
        assert_eq!(session.entries()[0].value, "9");
        assert_eq!(dir.write_count(), 0);
        assert_eq!(host.notifications().len(), 1);
    }

    #[tokio::test]
    async fn test_save_local_writes_encoded_rows() {
        let dir = cache();
        let host = ScriptedHost::new();
        let mut session = opened(&dir).await;
        session.set_cell(Local, 0, Column::Value, " 9 ");
        session.add_row(Local);

        let outcome = session.save(Local, &host).await.unwrap();

        assert_eq!(outcome, SaveOutcome::Saved);
        assert!(!session.is_dirty());
        assert_eq!(
            dir.file(FILE).as_deref(),
            Some("a=9\nb=2\nnew_key=new_value\n")
        );
    }

    #[tokio::test]
    async fn test_save_failure_keeps_dirty() {
        let dir = cache();
        let host = ScriptedHost::new();
        let mut session = opened(&dir).await;
        session.add_row(Local);
        dir.fail_writes(true);

        let err = session.save(Local, &host).await.unwrap_err();

        assert!(matches!(err, Error::WriteFailure { .. }));
        assert!(session.is_dirty());
        assert!(host.notifications().is_empty());
    }

    #[tokio::test]
    async fn test_close_dirty_asks_and_can_be_declined() {
        let host = ScriptedHost::new();
        let mut session = opened(&cache()).await;
        session.add_row(Local);

        assert!(!session.close(&host).await);
        assert_eq!(session.phase(), EditPhase::Ready);
        assert!(session.is_dirty());

        host.answer(true);
        assert!(session.close(&host).await);
        assert_eq!(session.phase(), EditPhase::Closed);
        assert_eq!(host.confirms().len(), 2);
    }

    #[tokio::test]
    async fn test_close_clean_does_not_ask() {
        let host = ScriptedHost::new();
        let mut session = opened(&cache()).await;

        assert!(session.close(&host).await);
        assert!(host.confirms().is_empty());
        assert!(!session.is_open());
    }
}
