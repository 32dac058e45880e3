//! Route file inside a [`MemoryFilesystem`].

use std::path::Path;

use crudsmith_core::{
    application::{
        ApplicationError,
        ports::{AppendOutcome, Filesystem, RouteFile},
        services::append_suffix,
    },
    error::CrudsmithResult,
};

use crate::filesystem::MemoryFilesystem;

/// Route file backed by a shared in-memory tree.
///
/// The tree's write lock is held across the check and the append.
#[derive(Debug, Clone)]
pub struct MemoryRouteFile {
    filesystem: MemoryFilesystem,
}

impl MemoryRouteFile {
    pub fn new(filesystem: MemoryFilesystem) -> Self {
        Self { filesystem }
    }
}

impl RouteFile for MemoryRouteFile {
    fn exists(&self, path: &Path) -> bool {
        self.filesystem.exists(path) && !self.filesystem.is_dir(path)
    }

    fn append_line_if_absent(&self, path: &Path, line: &str) -> CrudsmithResult<AppendOutcome> {
        let mut tree = self.filesystem.lock()?;

        let Some(content) = tree.files.get_mut(path) else {
            return Err(ApplicationError::FileNotFound {
                path: path.to_path_buf(),
            }
            .into());
        };

        match append_suffix(content, line) {
            None => Ok(AppendOutcome::Duplicate),
            Some(suffix) => {
                content.push_str(&suffix);
                Ok(AppendOutcome::Appended)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn concurrent_appends_of_the_same_line_land_once() {
        let fs = MemoryFilesystem::new().with_file("/app/routes/web.php", "<?php\n");
        let routes = Arc::new(MemoryRouteFile::new(fs.clone()));
        let line = "Route::resource('posts', PostController::class);";

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let routes = Arc::clone(&routes);
                thread::spawn(move || {
                    routes
                        .append_line_if_absent(Path::new("/app/routes/web.php"), line)
                        .unwrap()
                })
            })
            .collect();
        let appended = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|o| *o == AppendOutcome::Appended)
            .count();

        assert_eq!(appended, 1);
        let content = fs.read_file("/app/routes/web.php").unwrap();
        assert_eq!(content.matches(line).count(), 1);
    }

    #[test]
    fn directories_are_not_route_files() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/app/routes")).unwrap();
        let routes = MemoryRouteFile::new(fs);
        assert!(!routes.exists(Path::new("/app/routes")));
        assert!(routes
            .append_line_if_absent(Path::new("/app/routes"), "x")
            .is_err());
    }
}
