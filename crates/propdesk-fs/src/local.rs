//! Path-backed directory capability
//!
//! Off the browser there is no user-agent enforcing capability scope, so the
//! checks happen here: the directory must exist when it is opened, write
//! access is verified up front for read-write handles, child names may never
//! leave the directory, and every resolved path (symlinks included) must stay
//! under the directory the user opened.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use propdesk_core::prelude::*;
use propdesk_core::AccessMode;
use tokio::io::AsyncWriteExt;

use crate::capability::{validate_entry_name, DirEntry, DirectoryCapability, EntryKind};

/// Scratch file used to check that a read-write directory accepts writes
const WRITE_CHECK_FILE: &str = ".propdesk-write-check";

/// A directory on the local filesystem
#[derive(Debug, Clone)]
pub struct FsDirectory {
    path: PathBuf,
    name: String,
    mode: AccessMode,
    /// Canonical path of the directory the user opened; shared by all children
    scope: Arc<PathBuf>,
}

impl FsDirectory {
    /// Open a directory the user selected.
    ///
    /// The path is canonicalized so the reported name is the real directory
    /// name (`/opt/.` opens as `opt`).
    pub async fn open(path: impl AsRef<Path>, mode: AccessMode) -> Result<Self> {
        let requested = path.as_ref();
        let shown = requested.display().to_string();

        let canonical = canonical_path(requested, &shown).await?;

        let metadata = tokio::fs::metadata(&canonical)
            .await
            .map_err(|e| Error::from_io(e, shown.clone()))?;
        if !metadata.is_dir() {
            return Err(Error::validation(format!("{} is not a directory", shown)));
        }
        if mode == AccessMode::ReadWrite {
            check_writable(&canonical).await?;
        }

        let name = canonical
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        debug!("Opened directory capability {:?} ({:?})", canonical, mode);
        Ok(Self {
            scope: Arc::new(canonical.clone()),
            path: canonical,
            name,
            mode,
        })
    }

    /// Underlying path (for logging and the headless report)
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> AccessMode {
        self.mode
    }

    fn entry_path(&self, name: &str) -> Result<PathBuf> {
        validate_entry_name(name)?;
        Ok(self.path.join(name))
    }

    fn require_write(&self, target: &Path) -> Result<()> {
        if self.mode == AccessMode::ReadWrite {
            Ok(())
        } else {
            Err(Error::permission_denied(target.display().to_string()))
        }
    }

    /// Resolve links in `path` and refuse anything outside the opened tree
    async fn resolve_in_scope(&self, path: &Path) -> Result<PathBuf> {
        let shown = path.display().to_string();
        let resolved = canonical_path(path, &shown).await?;
        if resolved.starts_with(self.scope.as_path()) {
            Ok(resolved)
        } else {
            warn!(
                "Refusing {} (resolves to {:?}, outside {:?})",
                shown, resolved, self.scope
            );
            Err(Error::permission_denied(shown))
        }
    }

    /// Like [`Self::resolve_in_scope`], but a missing entry is fine (it is about to be created)
    async fn resolve_existing_in_scope(&self, path: &Path) -> Result<()> {
        match tokio::fs::symlink_metadata(path).await {
            Ok(_) => self.resolve_in_scope(path).await.map(|_| ()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::from_io(e, path.display().to_string())),
        }
    }
}

impl DirectoryCapability for FsDirectory {
    fn name(&self) -> &str {
        &self.name
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    async fn list_entries(&self) -> Result<Vec<DirEntry>> {
        let shown = self.display_path();
        let mut reader = tokio::fs::read_dir(&self.path)
            .await
            .map_err(|e| Error::from_io(e, shown.clone()))?;

        let mut entries = Vec::new();
        while let Some(entry) = reader
            .next_entry()
            .await
            .map_err(|e| Error::from_io(e, shown.clone()))?
        {
            let Ok(name) = entry.file_name().into_string() else {
                trace!("Skipping non UTF-8 entry in {}", shown);
                continue;
            };
            if name == WRITE_CHECK_FILE {
                continue;
            }
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| Error::from_io(e, shown.clone()))?;

            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else if file_type.is_file() {
                EntryKind::File
            } else if file_type.is_symlink() {
                // Links are listed only when they point back into the tree
                if self.resolve_in_scope(&entry.path()).await.is_err() {
                    continue;
                }
                match tokio::fs::metadata(entry.path()).await {
                    Ok(meta) if meta.is_dir() => EntryKind::Directory,
                    Ok(meta) if meta.is_file() => EntryKind::File,
                    _ => continue,
                }
            } else {
                continue;
            };
            entries.push(DirEntry { name, kind });
        }

        Ok(entries)
    }

    async fn child(&self, name: &str, create: bool) -> Result<Self> {
        let path = self.entry_path(name)?;
        let shown = path.display().to_string();

        if create {
            match tokio::fs::symlink_metadata(&path).await {
                Ok(_) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    self.require_write(&path)?;
                    tokio::fs::create_dir_all(&path)
                        .await
                        .map_err(|e| Error::from_io(e, shown.clone()))?;
                    info!("Created directory {}", shown);
                }
                Err(e) => return Err(Error::from_io(e, shown)),
            }
        }

        let resolved = self.resolve_in_scope(&path).await?;
        let metadata = tokio::fs::metadata(&resolved)
            .await
            .map_err(|e| Error::from_io(e, shown.clone()))?;
        if !metadata.is_dir() {
            return Err(Error::not_found(shown));
        }

        Ok(Self {
            path: resolved,
            name: name.to_string(),
            mode: self.mode,
            scope: Arc::clone(&self.scope),
        })
    }

    async fn read_text(&self, file_name: &str) -> Result<String> {
        let path = self.entry_path(file_name)?;
        let resolved = self.resolve_in_scope(&path).await?;
        tokio::fs::read_to_string(&resolved)
            .await
            .map_err(|e| Error::from_io(e, path.display().to_string()))
    }

    async fn write_text(&self, file_name: &str, contents: &str) -> Result<()> {
        let path = self.entry_path(file_name)?;
        let shown = path.display().to_string();
        self.require_write(&path)?;
        self.resolve_existing_in_scope(&path).await?;

        // Atomic write: write to temp, then rename
        let temp_path = self.path.join(format!(".{}.tmp", file_name));
        let result = write_then_rename(&temp_path, &path, contents).await;
        if let Err(e) = result {
            if let Err(cleanup) = tokio::fs::remove_file(&temp_path).await {
                trace!("No temp file to clean up at {:?}: {}", temp_path, cleanup);
            }
            warn!("Failed to write {}: {}", shown, e);
            return Err(Error::write_failure(shown, e.to_string()));
        }

        debug!("Wrote {} bytes to {}", contents.len(), shown);
        Ok(())
    }
}

async fn canonical_path(path: &Path, shown: &str) -> Result<PathBuf> {
    let canonical = tokio::fs::canonicalize(path)
        .await
        .map_err(|e| Error::from_io(e, shown))?;
    Ok(dunce::simplified(&canonical).to_path_buf())
}

/// Mode bits say nothing about ownership or ACLs, so try an actual write
async fn check_writable(dir: &Path) -> Result<()> {
    let check = dir.join(WRITE_CHECK_FILE);
    if let Err(e) = tokio::fs::File::create(&check).await {
        warn!("Directory {:?} is not writable: {}", dir, e);
        return Err(Error::permission_denied(dir.display().to_string()));
    }
    if let Err(e) = tokio::fs::remove_file(&check).await {
        warn!("Could not remove {:?}: {}", check, e);
    }
    Ok(())
}

async fn write_then_rename(temp: &Path, target: &Path, contents: &str) -> std::io::Result<()> {
    let mut file = tokio::fs::File::create(temp).await?;
    file.write_all(contents.as_bytes()).await?;
    file.sync_all().await?;
    drop(file);
    tokio::fs::rename(temp, target).await
}
