//! Project and config file listing under the authorized root
//!
//! Layout: `{root}/data/{project}/config-cache/*.properties`. Listing failures
//! never reach the caller as errors: the user gets one notification and the
//! list comes back empty.

use propdesk_core::prelude::*;
use propdesk_core::{ConfigFile, Project};
use propdesk_fs::DirectoryCapability;

use crate::host::{Host, TITLE_ERROR};

/// Subdirectory of the root holding one directory per project
pub const DATA_DIR: &str = "data";

/// Subdirectory of a project holding its properties files
pub const CONFIG_CACHE_DIR: &str = "config-cache";

/// Lists projects and their config files
#[derive(Debug)]
pub struct ConfigRepository<D> {
    /// `{root}/data`, set by the last successful project listing
    data: Option<D>,
}

impl<D> Default for ConfigRepository<D> {
    fn default() -> Self {
        Self { data: None }
    }
}

impl<D: DirectoryCapability> ConfigRepository<D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the data directory (re-authorization)
    pub fn reset(&mut self) {
        self.data = None;
    }

    /// Display path of `{root}/data`, once listed
    pub fn data_display_path(&self) -> Option<String> {
        self.data.as_ref().map(|d| d.display_path())
    }

    /// Projects under `{root}/data`, creating `data` when missing
    pub async fn list_projects<H: Host>(&mut self, root: &D, host: &H) -> Vec<Project> {
        match self.try_list_projects(root).await {
            Ok(projects) => projects,
            Err(e) => {
                error!("Failed to list projects: {}", e);
                host.notify(
                    &format!("Cannot access {}/{}", root.display_path(), DATA_DIR),
                    TITLE_ERROR,
                );
                Vec::new()
            }
        }
    }

    async fn try_list_projects(&mut self, root: &D) -> Result<Vec<Project>> {
        self.data = None;
        let data = root.child(DATA_DIR, true).await?;
        let data_path = data.display_path();

        let mut projects: Vec<Project> = data
            .list_entries()
            .await?
            .into_iter()
            .filter(|entry| entry.is_dir())
            .map(|entry| Project::new(entry.name, &data_path))
            .collect();
        projects.sort_by(|a, b| a.name.cmp(&b.name));

        debug!("Found {} projects under {}", projects.len(), data_path);
        self.data = Some(data);
        Ok(projects)
    }

    /// `*.properties` files in `{project}/config-cache`
    pub async fn list_config_files<H: Host>(&self, project: &Project, host: &H) -> Vec<ConfigFile> {
        match self.try_list_config_files(project).await {
            Ok(files) => files,
            Err(e) => {
                error!("Failed to list config files of {}: {}", project.name, e);
                host.notify(
                    &format!("Cannot read config files of {}", project.name),
                    TITLE_ERROR,
                );
                Vec::new()
            }
        }
    }

    async fn try_list_config_files(&self, project: &Project) -> Result<Vec<ConfigFile>> {
        let cache = self.open_cache_dir(project).await?;

        let mut files: Vec<ConfigFile> = cache
            .list_entries()
            .await?
            .into_iter()
            .filter(|entry| entry.is_file())
            .filter_map(|entry| ConfigFile::from_file_name(&entry.name))
            .collect();
        files.sort_by(|a, b| a.file_name.cmp(&b.file_name));

        Ok(files)
    }

    /// Capability for `{project}/config-cache` (never created)
    pub async fn open_cache_dir(&self, project: &Project) -> Result<D> {
        let data = self.data.as_ref().ok_or(Error::NotAuthorized)?;
        let project_dir = data.child(&project.name, false).await?;
        project_dir.child(CONFIG_CACHE_DIR, false).await
    }
}
