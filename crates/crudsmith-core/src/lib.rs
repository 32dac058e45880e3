//! Crudsmith Core - Hexagonal Architecture Implementation
//!
//! Domain and application layers for the Crudsmith CRUD generator, following
//! hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          crudsmith-cli (CLI)            │
//! │   (clap commands, prompts, output)      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (CrudService, LayerSelector, Writer)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, RouteFile, Generator,      │
//! │  LayerPrompt)                           │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   crudsmith-adapters (Infrastructure)   │
//! │ (LocalFilesystem, ArtisanGenerator, …)  │
//! └─────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (NameSet, templates, GenerationPlan)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use crudsmith_core::prelude::*;
//!
//! let names = NameSet::derive("blog post", Layer::Backend).unwrap();
//! assert_eq!(names.studly(), "BlogPost");
//! assert_eq!(names.plural_snake(), "blog_posts");
//!
//! let plan = GenerationPlan::new(names, Layer::Backend, &ProjectLayout::new("."));
//! assert!(plan.route_line.starts_with("Route::resource('blog_posts'"));
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, CrudService, IdempotentFileWriter, LayerSelector, WriteOutcome,
        ports::{AppendOutcome, ArtifactGenerator, Filesystem, LayerPrompt, RouteFile},
    };
    pub use crate::domain::{
        ArtifactKind, ArtifactRequest, DomainError, GenerationPlan, Layer, NameSet,
        ProjectLayout, Report, Step, StepOutcome, StepStatus,
    };
    pub use crate::error::{CrudsmithError, CrudsmithResult, ErrorCategory};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
