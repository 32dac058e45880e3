//! Domain value objects: Layer and ArtifactKind.
//!
//! Pure value types: `Copy`, equality-by-value, no identity. This file
//! defines the types, their string representations and their `FromStr`
//! parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Layer ────────────────────────────────────────────────────────────────────

/// The backend/frontend axis along which artifacts are namespaced and placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    #[default]
    Backend,
    Frontend,
}

impl Layer {
    /// Every layer, in prompt order. The first entry is the default.
    pub const ALL: [Layer; 2] = [Layer::Backend, Layer::Frontend];

    /// Lowercase form used in paths and breadcrumb keys.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Backend => "backend",
            Self::Frontend => "frontend",
        }
    }

    /// Capitalized form used in PHP namespaces (`Backend\PostController`).
    pub const fn namespace(&self) -> &'static str {
        match self {
            Self::Backend => "Backend",
            Self::Frontend => "Frontend",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layer {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "backend" => Ok(Self::Backend),
            "frontend" => Ok(Self::Frontend),
            _ => Err(DomainError::InvalidLayer {
                value: s.to_string(),
            }),
        }
    }
}

// ── ArtifactKind ─────────────────────────────────────────────────────────────

/// An artifact produced by the external generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Model,
    Migration,
    Controller,
    Request,
    Repository,
}

impl ArtifactKind {
    /// Generation order for a run.
    pub const ALL: [ArtifactKind; 5] = [
        ArtifactKind::Model,
        ArtifactKind::Migration,
        ArtifactKind::Controller,
        ArtifactKind::Request,
        ArtifactKind::Repository,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Migration => "migration",
            Self::Controller => "controller",
            Self::Request => "request",
            Self::Repository => "repository",
        }
    }

    /// Human label used in step messages.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Model => "Model",
            Self::Migration => "Migration",
            Self::Controller => "Controller",
            Self::Request => "Request",
            Self::Repository => "Repository",
        }
    }

    /// Class-name suffix for namespaced kinds.
    pub const fn class_suffix(&self) -> Option<&'static str> {
        match self {
            Self::Controller => Some("Controller"),
            Self::Request => Some("Request"),
            Self::Repository => Some("Repository"),
            Self::Model | Self::Migration => None,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_parses_case_insensitively() {
        assert_eq!(Layer::from_str("backend").unwrap(), Layer::Backend);
        assert_eq!(Layer::from_str("Frontend").unwrap(), Layer::Frontend);
        assert_eq!(Layer::from_str("  BACKEND \n").unwrap(), Layer::Backend);
    }

    #[test]
    fn layer_rejects_unknown_values() {
        let err = Layer::from_str("api").unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidLayer {
                value: "api".into()
            }
        );
        assert!(Layer::from_str("").is_err());
    }

    #[test]
    fn layer_defaults_to_backend() {
        assert_eq!(Layer::default(), Layer::Backend);
        assert_eq!(Layer::ALL[0], Layer::Backend);
    }

    #[test]
    fn layer_spellings() {
        assert_eq!(Layer::Backend.as_str(), "backend");
        assert_eq!(Layer::Frontend.namespace(), "Frontend");
        assert_eq!(Layer::Frontend.to_string(), "frontend");
    }

    #[test]
    fn artifact_kinds_in_generation_order() {
        let names: Vec<_> = ArtifactKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            names,
            ["model", "migration", "controller", "request", "repository"]
        );
    }

    #[test]
    fn only_namespaced_kinds_have_suffix() {
        assert_eq!(ArtifactKind::Controller.class_suffix(), Some("Controller"));
        assert_eq!(ArtifactKind::Model.class_suffix(), None);
        assert_eq!(ArtifactKind::Migration.class_suffix(), None);
    }
}
