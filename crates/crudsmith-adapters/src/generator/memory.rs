//! Recording generator for tests and dry runs.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crudsmith_core::{
    application::{ApplicationError, ports::ArtifactGenerator},
    domain::{ArtifactKind, ArtifactRequest},
    error::CrudsmithResult,
};

/// Records every request and succeeds unless told otherwise.
#[derive(Debug, Clone, Default)]
pub struct MemoryGenerator {
    requests: Arc<Mutex<Vec<ArtifactRequest>>>,
    failing: HashSet<ArtifactKind>,
}

impl MemoryGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every request for `kind` fail.
    pub fn failing_on(mut self, kind: ArtifactKind) -> Self {
        self.failing.insert(kind);
        self
    }

    /// Requests received so far, in order.
    pub fn requests(&self) -> Vec<ArtifactRequest> {
        self.log().clone()
    }

    pub fn calls(&self, kind: ArtifactKind) -> usize {
        self.log().iter().filter(|r| r.kind == kind).count()
    }

    /// The request log. Append-only, so a poisoned lock is still usable.
    fn log(&self) -> MutexGuard<'_, Vec<ArtifactRequest>> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ArtifactGenerator for MemoryGenerator {
    fn generate(&self, request: &ArtifactRequest) -> CrudsmithResult<String> {
        self.log().push(request.clone());

        if self.failing.contains(&request.kind) {
            return Err(ApplicationError::GeneratorFailed {
                kind: request.kind,
                reason: "scripted failure".into(),
            }
            .into());
        }

        Ok(format!("{} [{}] created", request.kind.label(), request.target_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crudsmith_core::domain::{Layer, NameSet};

    #[test]
    fn records_and_fails_on_request() {
        let names = NameSet::derive("post", Layer::Backend).unwrap();
        let generator = MemoryGenerator::new().failing_on(ArtifactKind::Migration);

        let model = ArtifactRequest::new(ArtifactKind::Model, &names, Layer::Backend);
        let migration = ArtifactRequest::new(ArtifactKind::Migration, &names, Layer::Backend);

        assert_eq!(generator.generate(&model).unwrap(), "Model [Post] created");
        assert!(generator.generate(&migration).is_err());
        assert_eq!(generator.requests(), [model, migration]);
        assert_eq!(generator.calls(ArtifactKind::Model), 1);
    }

    #[test]
    fn poisoned_log_still_records_and_reports() {
        let names = NameSet::derive("post", Layer::Backend).unwrap();
        let generator = MemoryGenerator::new();
        let model = ArtifactRequest::new(ArtifactKind::Model, &names, Layer::Backend);
        generator.generate(&model).unwrap();

        let shared = generator.clone();
        let poisoner = std::thread::spawn(move || {
            let _guard = shared.requests.lock().unwrap();
            panic!("poison the request log");
        });
        assert!(poisoner.join().is_err());
        assert!(generator.requests.is_poisoned());

        let controller = ArtifactRequest::new(ArtifactKind::Controller, &names, Layer::Backend);
        assert!(generator.generate(&controller).is_ok());
        assert_eq!(generator.requests(), [model, controller]);
        assert_eq!(generator.calls(ArtifactKind::Controller), 1);
    }
}
