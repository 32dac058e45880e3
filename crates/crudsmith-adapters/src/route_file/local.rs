//! Route file on disk, guarded by an advisory OS lock.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;

use tracing::{debug, trace};

use crudsmith_core::{
    application::{
        ApplicationError,
        ports::{AppendOutcome, RouteFile},
        services::append_suffix,
    },
    error::CrudsmithResult,
};

use crate::filesystem::map_io_error;

/// Appends to a route file on the local filesystem.
///
/// The check-then-append runs under `File::lock`, so two crudsmith
/// processes cannot interleave on the same file.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalRouteFile;

impl LocalRouteFile {
    pub fn new() -> Self {
        Self
    }
}

impl RouteFile for LocalRouteFile {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn append_line_if_absent(&self, path: &Path, line: &str) -> CrudsmithResult<AppendOutcome> {
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(path)
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => ApplicationError::FileNotFound {
                    path: path.to_path_buf(),
                }
                .into(),
                _ => map_io_error(path, e, "open route file"),
            })?;

        file.lock()
            .map_err(|e| map_io_error(path, e, "lock route file"))?;
        trace!(path = %path.display(), "Route file locked");

        let outcome = append_locked(&mut file, line);

        // Closing the handle also releases the lock.
        if let Err(e) = file.unlock() {
            debug!(path = %path.display(), error = %e, "Unlock failed");
        }

        outcome.map_err(|e| map_io_error(path, e, "append to route file"))
    }
}

fn append_locked(file: &mut File, line: &str) -> io::Result<AppendOutcome> {
    let mut content = String::new();
    file.read_to_string(&mut content)?;

    match append_suffix(&content, line) {
        None => Ok(AppendOutcome::Duplicate),
        Some(suffix) => {
            file.write_all(suffix.as_bytes())?;
            file.flush()?;
            Ok(AppendOutcome::Appended)
        }
    }
}
