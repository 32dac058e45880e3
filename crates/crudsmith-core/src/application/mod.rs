//! Application layer for Crudsmith.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (CrudService, LayerSelector, IdempotentFileWriter)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Naming and template rules live in `crate::domain`; this layer sequences
//! them against the ports and records what happened.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{CrudService, IdempotentFileWriter, LayerSelector, WriteOutcome};

// Re-export port traits (for adapter implementation)
pub use ports::{AppendOutcome, ArtifactGenerator, Filesystem, LayerPrompt, RouteFile};

pub use error::ApplicationError;
