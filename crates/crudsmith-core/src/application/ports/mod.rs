//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `crudsmith-adapters` implement
//! these; the CLI adds terminal prompts.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory and file operations
//!   - `RouteFile`: atomic append into the shared route file
//!   - `ArtifactGenerator`: the framework's `make:*` generators
//!   - `LayerPrompt`: interactive backend/frontend choice

pub mod output;

pub use output::{AppendOutcome, ArtifactGenerator, Filesystem, LayerPrompt, RouteFile};

#[cfg(test)]
pub use output::{MockArtifactGenerator, MockFilesystem, MockLayerPrompt, MockRouteFile};
