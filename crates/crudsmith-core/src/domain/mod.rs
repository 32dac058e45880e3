// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Crudsmith.
//!
//! Pure logic only: identifier derivation, templates, generation plans and
//! run reports. All I/O goes through the ports defined in the application
//! layer.
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, process, or terminal access
//! - **Immutable values**: `NameSet`, `GenerationPlan` are computed once per run
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod naming;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    plan::{ArtifactRequest, GenerationPlan, ProjectLayout},
    report::{Report, Step, StepOutcome, StepStatus},
    template::{
        BreadcrumbAction, DEFAULT_CONTROLLER_NAMESPACE, RenderContext, breadcrumb_key,
        breadcrumb_parent, render_breadcrumb_set, render_model, render_route_line,
    },
};

pub use error::{DomainError, ErrorCategory};
pub use naming::{NameSet, pluralize};
pub use value_objects::{ArtifactKind, Layer};
