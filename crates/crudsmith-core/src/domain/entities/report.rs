use std::fmt;

use serde::Serialize;

use crate::domain::{
    naming::NameSet,
    value_objects::{ArtifactKind, Layer},
};

/// A reported step of a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Views,
    Model,
    Migration,
    Controller,
    Request,
    Repository,
    Route,
    Breadcrumbs,
}

impl Step {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Views => "views",
            Self::Model => "model",
            Self::Migration => "migration",
            Self::Controller => "controller",
            Self::Request => "request",
            Self::Repository => "repository",
            Self::Route => "route",
            Self::Breadcrumbs => "breadcrumbs",
        }
    }
}

impl From<ArtifactKind> for Step {
    fn from(kind: ArtifactKind) -> Self {
        match kind {
            ArtifactKind::Model => Self::Model,
            ArtifactKind::Migration => Self::Migration,
            ArtifactKind::Controller => Self::Controller,
            ArtifactKind::Request => Self::Request,
            ArtifactKind::Repository => Self::Repository,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Created,
    Skipped,
    Failed,
}

/// Outcome of a single step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    pub step: Step,
    pub status: StepStatus,
    pub message: String,
}

impl StepOutcome {
    pub fn created(step: Step, message: impl Into<String>) -> Self {
        Self {
            step,
            status: StepStatus::Created,
            message: message.into(),
        }
    }

    pub fn skipped(step: Step, message: impl Into<String>) -> Self {
        Self {
            step,
            status: StepStatus::Skipped,
            message: message.into(),
        }
    }

    pub fn failed(step: Step, message: impl Into<String>) -> Self {
        Self {
            step,
            status: StepStatus::Failed,
            message: message.into(),
        }
    }
}

/// One outcome per step, in execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub names: NameSet,
    pub layer: Layer,
    steps: Vec<StepOutcome>,
}

impl Report {
    pub fn new(names: NameSet, layer: Layer) -> Self {
        Self {
            names,
            layer,
            steps: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: StepOutcome) {
        self.steps.push(outcome);
    }

    pub fn steps(&self) -> &[StepOutcome] {
        &self.steps
    }

    /// First outcome recorded for `step`.
    pub fn outcome(&self, step: Step) -> Option<&StepOutcome> {
        self.steps.iter().find(|o| o.step == step)
    }

    pub fn count(&self, status: StepStatus) -> usize {
        self.steps.iter().filter(|o| o.status == status).count()
    }

    pub fn has_failures(&self) -> bool {
        self.count(StepStatus::Failed) > 0
    }
}
