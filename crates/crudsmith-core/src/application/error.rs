//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Inside a generation run they are converted into failed report steps;
//! only `DomainError` aborts a run.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ArtifactKind;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The route-registration file does not exist.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The route line is already registered.
    #[error("duplicate entry in {path}: {line}")]
    DuplicateEntry { path: PathBuf, line: String },

    /// Filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The external generator reported a failure.
    #[error("{kind} generator failed: {reason}")]
    GeneratorFailed { kind: ArtifactKind, reason: String },

    /// Interactive layer selection failed (closed terminal, interrupted).
    #[error("layer prompt failed: {reason}")]
    PromptFailed { reason: String },

    /// A lock guarding shared state was poisoned.
    #[error("lock poisoned: {resource}")]
    LockPoisoned { resource: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FileNotFound { path } => vec![
                format!("Expected route file at: {}", path.display()),
                "Run from the project root or pass --root".into(),
                "Or point paths.routes_file at the right file".into(),
            ],
            Self::DuplicateEntry { line, .. } => vec![
                format!("Already registered: {line}"),
                "Nothing to do; the route exists".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::GeneratorFailed { .. } => vec![
                "Check that php and artisan are available".into(),
                "Configure generator.php / generator.artisan if they live elsewhere".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Pass the layer explicitly with --layer backend|frontend".into(),
            ],
            Self::LockPoisoned { .. } => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FileNotFound { .. } => ErrorCategory::NotFound,
            Self::DuplicateEntry { .. } => ErrorCategory::Validation,
            Self::PromptFailed { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. }
            | Self::GeneratorFailed { .. }
            | Self::LockPoisoned { .. } => ErrorCategory::Internal,
        }
    }
}
