//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the outside world.
//! The `crudsmith-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{ArtifactRequest, Layer};
use crate::error::CrudsmithResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `crudsmith_adapters::filesystem::LocalFilesystem` (production)
/// - `crudsmith_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> CrudsmithResult<()>;

    /// Write content to a file, replacing what is there.
    fn write_file(&self, path: &Path, content: &str) -> CrudsmithResult<()>;

    fn read_to_string(&self, path: &Path) -> CrudsmithResult<String>;
}

/// Result of an atomic append attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    Appended,
    Duplicate,
}

/// Port for the shared route-registration file.
///
/// `append_line_if_absent` must run its check-then-append while holding
/// exclusive access to the file. Implementations return
/// `ApplicationError::FileNotFound` when the file is missing and never
/// create it.
#[cfg_attr(test, mockall::automock)]
pub trait RouteFile: Send + Sync {
    fn exists(&self, path: &Path) -> bool;

    fn append_line_if_absent(&self, path: &Path, line: &str) -> CrudsmithResult<AppendOutcome>;
}

/// Port for the framework's artifact generator.
///
/// Implemented by:
/// - `crudsmith_adapters::generator::ArtisanGenerator` (`php artisan make:*`)
/// - `crudsmith_adapters::generator::MemoryGenerator` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait ArtifactGenerator: Send + Sync {
    /// Produce one artifact. `Ok` carries the generator's own message.
    fn generate(&self, request: &ArtifactRequest) -> CrudsmithResult<String>;
}

/// Port for interactive layer selection.
#[cfg_attr(test, mockall::automock)]
pub trait LayerPrompt {
    /// Present `choices` with `default` preselected and return the raw answer.
    fn choose(&self, choices: &[Layer], default: Layer) -> CrudsmithResult<String>;
}
