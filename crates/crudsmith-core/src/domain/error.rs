// ============================================================================
// domain/error.rs - NAMING AND LAYER ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Both variants are fatal for a generation run: nothing downstream is
/// meaningful without a valid name and a resolved layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("invalid model name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("invalid layer '{value}': expected 'backend' or 'frontend'")]
    InvalidLayer { value: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { name, reason } => vec![
                format!("'{name}' cannot be used as a model name: {reason}"),
                "Use letters, digits, '_', '-' or spaces, starting with a letter".into(),
                "Examples: post, BlogPost, blog_post, order-item".into(),
            ],
            Self::InvalidLayer { value } => vec![
                format!("'{value}' is not a layer"),
                "Supported layers:".into(),
                "  • backend   - admin side (default)".into(),
                "  • frontend  - public side".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. } | Self::InvalidLayer { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
