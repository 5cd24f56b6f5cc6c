//! In-memory directory tree for tests
//!
//! `MemoryDirectory` implements [`DirectoryCapability`] over a shared map so
//! tests can seed a tree, inject failures and inspect what was written without
//! touching the disk. Handles derived with [`DirectoryCapability::child`]
//! share the same tree.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard};

use propdesk_core::prelude::*;

use crate::capability::{validate_entry_name, DirEntry, DirectoryCapability};

#[derive(Debug, Default)]
struct Tree {
    dirs: BTreeSet<String>,
    files: BTreeMap<String, String>,
    fail_writes: bool,
    denied: BTreeSet<String>,
    write_count: usize,
}

/// Handle to one directory of a shared in-memory tree
#[derive(Debug, Clone)]
pub struct MemoryDirectory {
    tree: Arc<Mutex<Tree>>,
    path: String,
    name: String,
}

impl MemoryDirectory {
    /// Empty tree whose root directory is called `name`
    pub fn root(name: &str) -> Self {
        let mut tree = Tree::default();
        tree.dirs.insert(name.to_string());
        Self {
            tree: Arc::new(Mutex::new(tree)),
            path: name.to_string(),
            name: name.to_string(),
        }
    }

    /// Seed a file; `path` is relative to this directory, parents are created
    pub fn with_file(self, path: &str, contents: &str) -> Self {
        let full = self.join(path);
        {
            let mut tree = self.lock();
            add_parents(&mut tree, &full);
            tree.files.insert(full, contents.to_string());
        }
        self
    }

    /// Seed a directory (and its parents) relative to this directory
    pub fn with_dir(self, path: &str) -> Self {
        let full = self.join(path);
        {
            let mut tree = self.lock();
            add_parents(&mut tree, &full);
            tree.dirs.insert(full);
        }
        self
    }

    /// Make every subsequent write fail
    pub fn fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }

    /// Deny listing and reading of a directory relative to this one
    pub fn deny(&self, path: &str) {
        let full = self.join(path);
        self.lock().denied.insert(full);
    }

    /// Content of a file relative to this directory
    pub fn file(&self, path: &str) -> Option<String> {
        let full = self.join(path);
        self.lock().files.get(&full).cloned()
    }

    /// Whether a directory relative to this one exists
    pub fn has_dir(&self, path: &str) -> bool {
        let full = self.join(path);
        self.lock().dirs.contains(&full)
    }

    /// Number of successful writes across the whole tree
    pub fn write_count(&self) -> usize {
        self.lock().write_count
    }

    fn join(&self, path: &str) -> String {
        let path = path.trim_matches('/');
        if path.is_empty() {
            self.path.clone()
        } else {
            format!("{}/{}", self.path, path)
        }
    }

    fn lock(&self) -> MutexGuard<'_, Tree> {
        self.tree.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check_access(&self, tree: &Tree) -> Result<()> {
        if tree.denied.contains(&self.path) {
            return Err(Error::permission_denied(self.display_path()));
        }
        if !tree.dirs.contains(&self.path) {
            return Err(Error::not_found(self.display_path()));
        }
        Ok(())
    }
}

fn add_parents(tree: &mut Tree, full: &str) {
    let mut prefix = String::new();
    let mut parts = full.split('/').peekable();
    while let Some(part) = parts.next() {
        if parts.peek().is_none() {
            break;
        }
        if !prefix.is_empty() {
            prefix.push('/');
        }
        prefix.push_str(part);
        tree.dirs.insert(prefix.clone());
    }
}

fn direct_child<'a>(parent: &str, path: &'a str) -> Option<&'a str> {
    let rest = path.strip_prefix(parent)?.strip_prefix('/')?;
    if rest.is_empty() || rest.contains('/') {
        None
    } else {
        Some(rest)
    }
}

impl DirectoryCapability for MemoryDirectory {
    fn name(&self) -> &str {
        &self.name
    }

    fn display_path(&self) -> String {
        format!("/{}", self.path)
    }

    async fn list_entries(&self) -> Result<Vec<DirEntry>> {
        let tree = self.lock();
        self.check_access(&tree)?;

        let dirs = tree
            .dirs
            .iter()
            .filter_map(|d| direct_child(&self.path, d))
            .map(DirEntry::directory);
        let files = tree
            .files
            .keys()
            .filter_map(|f| direct_child(&self.path, f))
            .map(DirEntry::file);
        Ok(dirs.chain(files).collect())
    }

    async fn child(&self, name: &str, create: bool) -> Result<Self> {
        validate_entry_name(name)?;
        let mut tree = self.lock();
        self.check_access(&tree)?;

        let path = format!("{}/{}", self.path, name);
        if !tree.dirs.contains(&path) {
            if !create {
                return Err(Error::not_found(format!("/{}", path)));
            }
            if tree.fail_writes {
                return Err(Error::permission_denied(format!("/{}", path)));
            }
            tree.dirs.insert(path.clone());
        }

        Ok(Self {
            tree: Arc::clone(&self.tree),
            path,
            name: name.to_string(),
        })
    }

    async fn read_text(&self, file_name: &str) -> Result<String> {
        validate_entry_name(file_name)?;
        let tree = self.lock();
        self.check_access(&tree)?;

        let path = format!("{}/{}", self.path, file_name);
        tree.files
            .get(&path)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("/{}", path)))
    }

    async fn write_text(&self, file_name: &str, contents: &str) -> Result<()> {
        validate_entry_name(file_name)?;
        let mut tree = self.lock();
        self.check_access(&tree)?;

        let path = format!("{}/{}", self.path, file_name);
        if tree.fail_writes {
            return Err(Error::write_failure(
                format!("/{}", path),
                "injected write failure",
            ));
        }
        tree.files.insert(path, contents.to_string());
        tree.write_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_tree_lists_direct_children_only() {
        let root = MemoryDirectory::root("opt")
            .with_file("data/billing/config-cache/a.properties", "a=1")
            .with_dir("data/empty");

        let data = root.child("data", false).await.unwrap();
        let mut names: Vec<_> = data
            .list_entries()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["billing", "empty"]);
        assert_eq!(data.display_path(), "/opt/data");
    }

    #[tokio::test]
    async fn test_child_create_and_write_share_tree() {
        let root = MemoryDirectory::root("opt");
        let settings = root.child("settings", true).await.unwrap();
        settings.write_text("server.properties", "[General]\n").await.unwrap();

        assert_eq!(
            root.file("settings/server.properties").as_deref(),
            Some("[General]\n")
        );
        assert_eq!(root.write_count(), 1);
    }

    #[tokio::test]
    async fn test_injected_failures() {
        let root = MemoryDirectory::root("opt").with_dir("data");
        root.deny("data");
        let data = root.child("data", false).await.unwrap();
        assert!(matches!(
            data.list_entries().await.unwrap_err(),
            Error::PermissionDenied { .. }
        ));

        root.fail_writes(true);
        assert!(matches!(
            root.write_text("x.properties", "").await.unwrap_err(),
            Error::WriteFailure { .. }
        ));
        assert_eq!(root.write_count(), 0);
    }
}
