//! Headless runner: drives the workbench directly, no engine task

use std::path::{Path, PathBuf};

use propdesk_app::{Host, Settings, Workbench};
use propdesk_core::prelude::*;
use propdesk_core::AccessMode;
use propdesk_fs::FsDirectory;

use super::{EntryLine, HeadlessEvent};

/// Host that answers the directory prompt with a fixed path and declines everything else
struct HeadlessHost {
    root: PathBuf,
}

impl Host for HeadlessHost {
    type Directory = FsDirectory;

    async fn prompt_directory(&self, mode: AccessMode, _start_hint: &str) -> Result<FsDirectory> {
        FsDirectory::open(&self.root, mode).await
    }

    async fn confirm(&self, message: &str) -> bool {
        debug!("Declining confirmation in headless mode: {}", message);
        false
    }

    fn notify(&self, message: &str, title: &str) {
        HeadlessEvent::notification(title, message).emit();
    }
}

/// Report the tree under `root` as JSON lines.
///
/// `show` is `PROJECT/FILE`; its entries are printed after the project list.
pub async fn run_headless(root: &Path, show: Option<&str>, settings: Settings) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("propdesk starting in HEADLESS mode");
    info!("Root: {}", root.display());
    info!("═══════════════════════════════════════════════════════");

    let host = HeadlessHost {
        root: root.to_path_buf(),
    };
    let mut workbench = Workbench::new(host, settings);

    if !workbench.authorize().await {
        // The reason was already emitted as a notification
        HeadlessEvent::error(format!("Could not authorize {}", root.display())).emit();
        return Err(Error::NotAuthorized);
    }

    let view = workbench.view();
    HeadlessEvent::authorized(view.root_path.as_deref().unwrap_or_default()).emit();
    HeadlessEvent::environment(view.environment).emit();

    for project in view.projects {
        workbench.open_project(&project.name).await;
        HeadlessEvent::project(&project.name, &project.display_path, workbench.view().files)
            .emit();
        workbench.close_project().await;
    }

    if let Some(target) = show {
        show_entries(&mut workbench, target).await?;
    }

    info!("propdesk headless mode exiting");
    Ok(())
}

async fn show_entries(workbench: &mut Workbench<HeadlessHost>, target: &str) -> Result<()> {
    let Some((project, file)) = target.split_once('/') else {
        let err = Error::validation(format!("Expected PROJECT/FILE, got '{}'", target));
        HeadlessEvent::error(err.to_string()).emit();
        return Err(err);
    };

    workbench.open_project(project).await;
    workbench.open_file(file).await;

    let Some(editor) = workbench.view().editor else {
        HeadlessEvent::error(format!("Could not open {}", target)).emit();
        return Err(Error::not_found(target));
    };

    let entries = editor
        .rows
        .into_iter()
        .map(|row| EntryLine {
            key: row.key,
            value: row.value,
        })
        .collect();
    HeadlessEvent::entries(project, &editor.file.file_name, entries).emit();

    Ok(())
}
