pub mod plan;
pub mod report;
pub mod template;

pub use plan::{ArtifactRequest, GenerationPlan, ProjectLayout};
pub use report::{Report, Step, StepOutcome, StepStatus};
pub use template::{BreadcrumbAction, RenderContext};
