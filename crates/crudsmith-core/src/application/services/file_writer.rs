//! Create-if-absent and append-if-absent file synthesis.
//!
//! Directories and breadcrumb files are created once and never touched
//! again. The route file is append-only and line-granular: a line that is
//! already present (ignoring trailing whitespace) is never written twice.

use std::path::Path;

use tracing::debug;

use crate::{
    application::{
        ApplicationError,
        ports::{AppendOutcome, Filesystem, RouteFile},
    },
    error::CrudsmithResult,
};

/// What an idempotent write did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    /// The target already existed; nothing was written.
    Skipped,
}

/// True if any line of `content` equals `line`, ignoring trailing whitespace.
pub fn contains_line(content: &str, line: &str) -> bool {
    let line = line.trim_end();
    content.lines().any(|existing| existing.trim_end() == line)
}

/// Text to append so that `content` ends with `line`, or `None` when the
/// line is already present.
///
/// A newline is prepended when `content` does not end with one, and the
/// appended line is always newline-terminated.
pub fn append_suffix(content: &str, line: &str) -> Option<String> {
    if contains_line(content, line) {
        return None;
    }

    let line = line.trim_end();
    let mut suffix = String::with_capacity(line.len() + 2);
    if !content.is_empty() && !content.ends_with('\n') {
        suffix.push('\n');
    }
    suffix.push_str(line);
    suffix.push('\n');
    Some(suffix)
}

/// Idempotent writes over the filesystem and route-file ports.
pub struct IdempotentFileWriter<'a> {
    filesystem: &'a dyn Filesystem,
    routes: &'a dyn RouteFile,
}

impl<'a> IdempotentFileWriter<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, routes: &'a dyn RouteFile) -> Self {
        Self { filesystem, routes }
    }

    /// Create `path` and missing ancestors unless it already exists.
    pub fn ensure_directory(&self, path: &Path) -> CrudsmithResult<WriteOutcome> {
        if self.filesystem.exists(path) {
            debug!(path = %path.display(), "Directory already exists");
            return Ok(WriteOutcome::Skipped);
        }

        self.filesystem.create_dir_all(path)?;
        debug!(path = %path.display(), "Directory created");
        Ok(WriteOutcome::Created)
    }

    /// Write `content` to `path` only if nothing is there yet.
    ///
    /// An existing file is never overwritten, whatever its content.
    pub fn create_file_if_absent(&self, path: &Path, content: &str) -> CrudsmithResult<WriteOutcome> {
        if self.filesystem.exists(path) {
            debug!(path = %path.display(), "File already exists, skipping");
            return Ok(WriteOutcome::Skipped);
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !self.filesystem.exists(parent) {
                self.filesystem.create_dir_all(parent)?;
            }
        }

        self.filesystem.write_file(path, content)?;
        debug!(path = %path.display(), bytes = content.len(), "File created");
        Ok(WriteOutcome::Created)
    }

    /// Append `line` to the existing file at `path`.
    ///
    /// # Errors
    ///
    /// - `FileNotFound` if `path` does not exist (it is never created)
    /// - `DuplicateEntry` if the line is already present
    pub fn append_line_if_absent(&self, path: &Path, line: &str) -> CrudsmithResult<()> {
        if !self.routes.exists(path) {
            return Err(ApplicationError::FileNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        match self.routes.append_line_if_absent(path, line)? {
            AppendOutcome::Appended => {
                debug!(path = %path.display(), line, "Line appended");
                Ok(())
            }
            AppendOutcome::Duplicate => Err(ApplicationError::DuplicateEntry {
                path: path.to_path_buf(),
                line: line.to_string(),
            }
            .into()),
        }
    }
}
