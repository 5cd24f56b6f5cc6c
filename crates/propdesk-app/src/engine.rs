//! Engine - runs the workbench on its own task
//!
//! The UI sends [`Command`]s and watches [`WorkbenchView`] snapshots. Commands
//! are processed strictly one at a time, so no two filesystem operations ever
//! overlap on the same capability.

use propdesk_core::prelude::*;
use propdesk_core::Column;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::host::Host;
use crate::view::WorkbenchView;
use crate::workbench::Workbench;

/// Channel capacity for UI commands
const COMMAND_CAPACITY: usize = 32;

/// One workbench operation requested by the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Authorize,
    Reauthorize,
    RefreshProjects,
    OpenProject(String),
    CloseProject,
    OpenFile(String),
    SetCell {
        row: usize,
        column: Column,
        value: String,
    },
    AddRow,
    DeleteRow(usize),
    Save,
    CloseFile,
    SetSearchQuery(String),
    SearchNext,
    SearchPrevious,
    ClearSearch,
    ToggleEnvironment,
    RequestQuit,
}

impl<H: Host> Workbench<H> {
    /// Run one command to completion
    pub async fn apply(&mut self, command: Command) {
        trace!("Applying {:?}", command);
        match command {
            Command::Authorize => {
                self.authorize().await;
            }
            Command::Reauthorize => {
                self.reauthorize().await;
            }
            Command::RefreshProjects => self.refresh_projects().await,
            Command::OpenProject(name) => self.open_project(&name).await,
            Command::CloseProject => self.close_project().await,
            Command::OpenFile(name) => self.open_file(&name).await,
            Command::SetCell { row, column, value } => self.set_cell(row, column, value),
            Command::AddRow => {
                self.add_row();
            }
            Command::DeleteRow(row) => self.delete_row(row).await,
            Command::Save => self.save().await,
            Command::CloseFile => {
                self.close_file().await;
            }
            Command::SetSearchQuery(text) => self.set_search_query(&text),
            Command::SearchNext => self.search_next(),
            Command::SearchPrevious => self.search_previous(),
            Command::ClearSearch => self.clear_search(),
            Command::ToggleEnvironment => self.toggle_environment().await,
            Command::RequestQuit => {
                self.request_quit().await;
            }
        }
    }
}

/// Handle to a running workbench task
pub struct Engine {
    commands: mpsc::Sender<Command>,
    views: watch::Receiver<WorkbenchView>,
    task: JoinHandle<()>,
}

impl Engine {
    /// Move `workbench` onto a tokio task and start processing commands
    pub fn spawn<H>(workbench: Workbench<H>) -> Self
    where
        H: Host + 'static,
    {
        let (commands, command_rx) = mpsc::channel(COMMAND_CAPACITY);
        let (view_tx, views) = watch::channel(workbench.view());
        let task = tokio::spawn(run(workbench, command_rx, view_tx));

        Self {
            commands,
            views,
            task,
        }
    }

    /// Sender for UI commands
    pub fn commands(&self) -> mpsc::Sender<Command> {
        self.commands.clone()
    }

    /// Receiver of view snapshots
    pub fn subscribe(&self) -> watch::Receiver<WorkbenchView> {
        self.views.clone()
    }

    /// Queue a command without waiting
    pub fn send(&self, command: Command) -> Result<()> {
        self.commands
            .try_send(command)
            .map_err(|e| Error::channel_send(e.to_string()))
    }

    /// Latest snapshot
    pub fn view(&self) -> WorkbenchView {
        self.views.borrow().clone()
    }

    /// Stop accepting commands and wait for the task to finish
    pub async fn shutdown(self) {
        let Engine { commands, task, .. } = self;
        drop(commands);
        if let Err(e) = task.await {
            warn!("Engine task ended abnormally: {}", e);
        }
    }
}

async fn run<H: Host>(
    mut workbench: Workbench<H>,
    mut commands: mpsc::Receiver<Command>,
    views: watch::Sender<WorkbenchView>,
) {
    let mut revision = 0u64;
    while let Some(command) = commands.recv().await {
        workbench.apply(command).await;

        revision += 1;
        let mut view = workbench.view();
        view.revision = revision;
        if views.send(view).is_err() {
            debug!("No view subscribers left, stopping engine");
            break;
        }
        if workbench.should_quit() {
            info!("Engine stopping after quit");
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::test_utils::ScriptedHost;
    use propdesk_fs::MemoryDirectory;

    async fn next_view(views: &mut watch::Receiver<WorkbenchView>) -> WorkbenchView {
        views.changed().await.unwrap();
        views.borrow_and_update().clone()
    }

    #[tokio::test]
    async fn test_each_command_publishes_a_new_revision() {
        let root = MemoryDirectory::root("opt").with_dir("data/billing");
        let host = ScriptedHost::new().grant(root);
        let engine = Engine::spawn(Workbench::new(host, Settings::default()));
        let mut views = engine.subscribe();

        assert_eq!(engine.view().revision, 0);
        assert!(!engine.view().authorized);

        engine.send(Command::Authorize).unwrap();
        let view = next_view(&mut views).await;
        assert_eq!(view.revision, 1);
        assert!(view.authorized);
        assert_eq!(view.projects.len(), 1);

        engine.send(Command::OpenProject("billing".into())).unwrap();
        let view = next_view(&mut views).await;
        assert_eq!(view.revision, 2);
        assert_eq!(view.current_project.unwrap().name, "billing");
    }

    #[tokio::test]
    async fn test_confirmed_quit_stops_engine() {
        let host = ScriptedHost::new();
        host.always(true);
        let engine = Engine::spawn(Workbench::new(host, Settings::default()));
        let mut views = engine.subscribe();

        engine.send(Command::RequestQuit).unwrap();
        assert!(next_view(&mut views).await.quit);

        engine.shutdown().await;
    }
}
