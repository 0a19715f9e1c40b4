//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use static_templ_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{StaticTemplError, StaticTemplResult},
};

/// In-memory filesystem for testing.
///
/// Clones share the same storage, so a test can hand one clone to a service
/// and inspect the other afterwards.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn add_dir_all(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Add a file and its parent directories (builder-style testing helper).
    pub fn with_file(self, path: impl AsRef<Path>, content: &str) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            let path = path.as_ref();
            if let Some(parent) = path.parent() {
                inner.add_dir_all(parent);
            }
            inner.files.insert(path.to_path_buf(), content.to_string());
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files in path order.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn read(&self) -> StaticTemplResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner.read().map_err(|_| poisoned())
    }

    fn write(&self) -> StaticTemplResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| poisoned())
    }
}

fn poisoned() -> StaticTemplError {
    StaticTemplError::Internal {
        message: "memory filesystem lock poisoned".into(),
    }
}

fn missing(path: &Path, reason: &str) -> StaticTemplError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
    .into()
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn walk_files(&self, root: &Path) -> StaticTemplResult<Vec<PathBuf>> {
        let inner = self.read()?;
        if !inner.directories.contains(root) {
            return Err(missing(root, "Directory does not exist"));
        }
        Ok(inner
            .files
            .keys()
            .filter(|p| p.starts_with(root))
            .cloned()
            .collect())
    }

    fn read_to_string(&self, path: &Path) -> StaticTemplResult<String> {
        let inner = self.read()?;
        inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| missing(path, "File does not exist"))
    }

    fn write_file(&self, path: &Path, content: &str) -> StaticTemplResult<()> {
        let mut inner = self.write()?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(missing(path, "Parent directory does not exist"));
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> StaticTemplResult<()> {
        self.write()?.add_dir_all(path);
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> StaticTemplResult<()> {
        let mut inner = self.write()?;
        inner.directories.retain(|d| !d.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> StaticTemplResult<()> {
        let content = self.read_to_string(from)?;
        self.write_file(to, &content)
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_lists_files_below_root() {
        let fs = MemoryFilesystem::new()
            .with_file("/web/pages/index_templ.go", "package pages")
            .with_file("/web/pages/style.css", "")
            .with_file("/other/readme.md", "");

        assert_eq!(
            fs.walk_files(Path::new("/web")).unwrap(),
            [
                PathBuf::from("/web/pages/index_templ.go"),
                PathBuf::from("/web/pages/style.css"),
            ]
        );
        assert!(fs.walk_files(Path::new("/missing")).is_err());
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/dist/index.html"), "").is_err());

        fs.create_dir_all(Path::new("/dist")).unwrap();
        fs.write_file(Path::new("/dist/index.html"), "<p/>").unwrap();
        assert_eq!(fs.read_file(Path::new("/dist/index.html")).unwrap(), "<p/>");
    }

    #[test]
    fn remove_drops_everything_below() {
        let fs = MemoryFilesystem::new()
            .with_file("/dist/a/b.html", "")
            .with_file("/dist/c.css", "");
        fs.remove_dir_all(Path::new("/dist")).unwrap();

        assert!(fs.list_files().is_empty());
        assert!(!fs.exists(Path::new("/dist/a")));
    }
}
