//! Infrastructure adapters for Crudsmith.
//!
//! This crate implements the ports defined in `crudsmith_core::application::ports`.
//! It contains all process and filesystem I/O.

pub mod filesystem;
pub mod generator;
pub mod prompt;
pub mod route_file;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use generator::{ArtisanGenerator, MemoryGenerator};
pub use prompt::FixedPrompt;
pub use route_file::{LocalRouteFile, MemoryRouteFile};
