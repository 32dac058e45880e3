//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockWriteGuard},
};

use crudsmith_core::{
    application::{ApplicationError, ports::Filesystem},
    error::CrudsmithResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same tree, so a clone handed to a service can be
/// inspected afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryTree>>,
}

#[derive(Debug, Default)]
pub(crate) struct MemoryTree {
    pub(crate) files: BTreeMap<PathBuf, String>,
    pub(crate) directories: BTreeSet<PathBuf>,
}

impl MemoryTree {
    fn add_directory(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }

    pub(crate) fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.directories.contains(path)
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating its parent directories.
    pub fn with_file(self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            let path = path.as_ref();
            if let Some(parent) = path.parent() {
                inner.add_directory(parent);
            }
            inner.files.insert(path.to_path_buf(), content.into());
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// Overwrite a file behind the service's back (testing helper).
    pub fn replace_file(&self, path: impl AsRef<Path>, content: impl Into<String>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.files.insert(path.as_ref().to_path_buf(), content.into());
        }
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn is_dir(&self, path: impl AsRef<Path>) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path.as_ref()))
            .unwrap_or(false)
    }

    /// Exclusive access to the whole tree.
    pub(crate) fn lock(&self) -> CrudsmithResult<RwLockWriteGuard<'_, MemoryTree>> {
        self.inner.write().map_err(|_| {
            ApplicationError::LockPoisoned {
                resource: "memory filesystem".into(),
            }
            .into()
        })
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.exists(path))
            .unwrap_or(false)
    }

    fn create_dir_all(&self, path: &Path) -> CrudsmithResult<()> {
        self.lock()?.add_directory(path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> CrudsmithResult<()> {
        let mut inner = self.lock()?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> CrudsmithResult<String> {
        self.read_file(path).ok_or_else(|| {
            ApplicationError::FileNotFound {
                path: path.to_path_buf(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_registers_ancestors() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/app/resources/views/backend")).unwrap();
        assert!(fs.is_dir("/app/resources"));
        assert!(fs.exists(Path::new("/app/resources/views/backend")));
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/app/x.php"), "x").is_err());

        fs.create_dir_all(Path::new("/app")).unwrap();
        fs.write_file(Path::new("/app/x.php"), "x").unwrap();
        assert_eq!(fs.read_file("/app/x.php").as_deref(), Some("x"));
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new().with_file("/app/routes/web.php", "<?php\n");
        let clone = fs.clone();
        clone.replace_file("/app/routes/web.php", "changed");
        assert_eq!(fs.read_file("/app/routes/web.php").as_deref(), Some("changed"));
        assert!(fs.is_dir("/app/routes"));
        assert_eq!(fs.list_files(), [PathBuf::from("/app/routes/web.php")]);
    }
}
