//! Unified error handling for Crudsmith Core.
//!
//! Wraps domain and application errors with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Crudsmith Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CrudsmithError {
    /// Errors from the domain layer (invalid name or layer).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (I/O, generator, prompt).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl CrudsmithError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {message}"),
                "Run 'crudsmith config list' to inspect the effective configuration".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in crudsmith".into(),
                "Re-run with -vvv and include the log when reporting it".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Shorthand for a filesystem failure at `path`.
    pub fn filesystem(path: impl Into<std::path::PathBuf>, reason: impl ToString) -> Self {
        ApplicationError::FilesystemError {
            path: path.into(),
            reason: reason.to_string(),
        }
        .into()
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type CrudsmithResult<T> = Result<T, CrudsmithError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn domain_errors_are_validation() {
        let err: CrudsmithError = DomainError::InvalidLayer {
            value: "sideways".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.to_string().contains("sideways"));
    }

    #[test]
    fn missing_route_file_is_not_found() {
        let err: CrudsmithError = ApplicationError::FileNotFound {
            path: PathBuf::from("routes/web.php"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.suggestions().iter().any(|s| s.contains("routes/web.php")));
    }

    #[test]
    fn filesystem_shorthand() {
        let err = CrudsmithError::filesystem("/tmp/x", "permission denied");
        assert_eq!(
            err,
            CrudsmithError::Application(ApplicationError::FilesystemError {
                path: PathBuf::from("/tmp/x"),
                reason: "permission denied".into(),
            })
        );
    }
}
