//! Crud Service - main application orchestrator.
//!
//! One `generate` call runs the whole workflow for a model:
//! 1. Resolve the layer (fatal on an invalid value)
//! 2. Derive the name set (fatal on an invalid name)
//! 3. Ensure the view directory
//! 4. Ask the generator for model, migration, controller, request, repository
//! 5. Append the resource route
//! 6. Write the breadcrumb file
//!
//! Steps 3 to 6 never abort the run. Each one becomes a [`StepOutcome`] in
//! the returned [`Report`].

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ports::{ArtifactGenerator, Filesystem, LayerPrompt, RouteFile},
        services::{
            file_writer::{IdempotentFileWriter, WriteOutcome},
            layer_selector::LayerSelector,
        },
    },
    domain::{
        ArtifactKind, ArtifactRequest, GenerationPlan, Layer, NameSet, ProjectLayout, Report,
        Step, StepOutcome, StepStatus, render_breadcrumb_set, render_model,
    },
    error::CrudsmithResult,
};

/// Main generation service.
pub struct CrudService {
    filesystem: Box<dyn Filesystem>,
    routes: Box<dyn RouteFile>,
    generator: Box<dyn ArtifactGenerator>,
    layout: ProjectLayout,
    model_skeleton: bool,
}

impl CrudService {
    /// Create a new service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let service = CrudService::new(
    ///     Box::new(LocalFilesystem::new()),
    ///     Box::new(LocalRouteFile::new()),
    ///     Box::new(ArtisanGenerator::new(".")),
    ///     ProjectLayout::new("."),
    /// );
    /// let report = service.generate("post", Some("backend"), &FixedPrompt::default())?;
    /// ```
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        routes: Box<dyn RouteFile>,
        generator: Box<dyn ArtifactGenerator>,
        layout: ProjectLayout,
    ) -> Self {
        Self {
            filesystem,
            routes,
            generator,
            layout,
            model_skeleton: true,
        }
    }

    /// Toggle overwriting a freshly generated model stub with the
    /// crudsmith model skeleton. On by default.
    pub fn with_model_skeleton(mut self, enabled: bool) -> Self {
        self.model_skeleton = enabled;
        self
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Everything a run for (`raw`, `layer`) would touch, without touching it.
    pub fn plan(&self, raw: &str, layer: Layer) -> CrudsmithResult<GenerationPlan> {
        let names = NameSet::derive(raw, layer)?;
        Ok(GenerationPlan::new(names, layer, &self.layout))
    }

    /// Run the full workflow for one model.
    ///
    /// Returns `Err` only when the layer or the name is invalid, or the
    /// prompt fails. Every later failure is recorded in the report.
    #[instrument(
        skip_all,
        fields(model = %raw, root = %self.layout.root().display())
    )]
    pub fn generate(
        &self,
        raw: &str,
        explicit_layer: Option<&str>,
        prompt: &dyn LayerPrompt,
    ) -> CrudsmithResult<Report> {
        let layer = LayerSelector::resolve(explicit_layer, prompt)?;
        let plan = self.plan(raw, layer)?;

        info!(
            model = %plan.names.studly(),
            table = %plan.names.plural_snake(),
            %layer,
            "Generating CRUD"
        );

        let mut report = Report::new(plan.names.clone(), layer);

        report.push(self.views_step(&plan));
        for request in &plan.artifacts {
            report.push(self.artifact_step(&plan, request));
        }
        report.push(self.route_step(&plan));
        report.push(self.breadcrumbs_step(&plan));

        info!(
            created = report.count(StepStatus::Created),
            skipped = report.count(StepStatus::Skipped),
            failed = report.count(StepStatus::Failed),
            "Generation finished"
        );
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Steps
    // -------------------------------------------------------------------------

    fn writer(&self) -> IdempotentFileWriter<'_> {
        IdempotentFileWriter::new(self.filesystem.as_ref(), self.routes.as_ref())
    }

    fn views_step(&self, plan: &GenerationPlan) -> StepOutcome {
        let dir = plan.view_dir.display();
        match self.writer().ensure_directory(&plan.view_dir) {
            Ok(WriteOutcome::Created) => StepOutcome::created(Step::Views, format!("created {dir}")),
            Ok(WriteOutcome::Skipped) => {
                StepOutcome::skipped(Step::Views, format!("{dir} already exists"))
            }
            Err(e) => {
                warn!(error = %e, "View directory step failed");
                StepOutcome::failed(Step::Views, e.to_string())
            }
        }
    }

    fn artifact_step(&self, plan: &GenerationPlan, request: &ArtifactRequest) -> StepOutcome {
        let step = Step::from(request.kind);
        let is_model = request.kind == ArtifactKind::Model;

        if is_model && self.filesystem.exists(&plan.model_file) {
            debug!(path = %plan.model_file.display(), "Model exists, not regenerating");
            return StepOutcome::skipped(
                step,
                format!("{} already exists", plan.model_file.display()),
            );
        }

        match self.generator.generate(request) {
            Ok(message) => {
                if is_model && self.model_skeleton {
                    if let Err(e) = self.write_model_skeleton(plan) {
                        warn!(error = %e, "Model skeleton not written");
                        return StepOutcome::failed(
                            step,
                            format!("{message}; skeleton not written: {e}"),
                        );
                    }
                }
                StepOutcome::created(step, message)
            }
            Err(e) => {
                warn!(kind = %request.kind, target = %request.target_path, error = %e, "Generator failed");
                StepOutcome::failed(step, e.to_string())
            }
        }
    }

    fn write_model_skeleton(&self, plan: &GenerationPlan) -> CrudsmithResult<()> {
        if let Some(parent) = plan.model_file.parent() {
            if !self.filesystem.exists(parent) {
                self.filesystem.create_dir_all(parent)?;
            }
        }

        let content = render_model(&plan.names, plan.names.plural_snake());
        self.filesystem.write_file(&plan.model_file, &content)
    }

    fn route_step(&self, plan: &GenerationPlan) -> StepOutcome {
        match self
            .writer()
            .append_line_if_absent(&plan.route_file, &plan.route_line)
        {
            Ok(()) => StepOutcome::created(Step::Route, plan.route_line.clone()),
            Err(e) => {
                warn!(error = %e, "Route step failed");
                StepOutcome::failed(Step::Route, e.to_string())
            }
        }
    }

    fn breadcrumbs_step(&self, plan: &GenerationPlan) -> StepOutcome {
        let writer = self.writer();
        let file = plan.breadcrumb_file.display();

        let written = writer.ensure_directory(&plan.breadcrumb_dir).and_then(|_| {
            let content = render_breadcrumb_set(&plan.names, plan.layer);
            writer.create_file_if_absent(&plan.breadcrumb_file, &content)
        });

        match written {
            Ok(WriteOutcome::Created) => {
                StepOutcome::created(Step::Breadcrumbs, format!("created {file}"))
            }
            Ok(WriteOutcome::Skipped) => {
                StepOutcome::skipped(Step::Breadcrumbs, format!("{file} already exists"))
            }
            Err(e) => {
                warn!(error = %e, "Breadcrumb step failed");
                StepOutcome::failed(Step::Breadcrumbs, e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::application::{
        ApplicationError,
        ports::{
            AppendOutcome, MockArtifactGenerator, MockFilesystem, MockLayerPrompt, MockRouteFile,
        },
    };
    use crate::domain::DomainError;
    use crate::error::CrudsmithError;

    const MODEL_FILE: &str = "/app/app/Models/Post.php";

    fn service(
        fs: MockFilesystem,
        routes: MockRouteFile,
        generator: MockArtifactGenerator,
    ) -> CrudService {
        CrudService::new(
            Box::new(fs),
            Box::new(routes),
            Box::new(generator),
            ProjectLayout::new("/app"),
        )
    }

    fn empty_project() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs
    }

    fn accepting_routes() -> MockRouteFile {
        let mut routes = MockRouteFile::new();
        routes.expect_exists().return_const(true);
        routes
            .expect_append_line_if_absent()
            .returning(|_, _| Ok(AppendOutcome::Appended));
        routes
    }

    fn echo_generator() -> MockArtifactGenerator {
        let mut generator = MockArtifactGenerator::new();
        generator
            .expect_generate()
            .returning(|r| Ok(format!("{} created", r.target_path)));
        generator
    }

    fn no_prompt() -> MockLayerPrompt {
        let mut prompt = MockLayerPrompt::new();
        prompt.expect_choose().never();
        prompt
    }

    #[test]
    fn fresh_project_creates_every_step_in_order() {
        let svc = service(empty_project(), accepting_routes(), echo_generator());
        let report = svc.generate("post", Some("backend"), &no_prompt()).unwrap();

        let steps: Vec<_> = report.steps().iter().map(|o| o.step).collect();
        assert_eq!(
            steps,
            [
                Step::Views,
                Step::Model,
                Step::Migration,
                Step::Controller,
                Step::Request,
                Step::Repository,
                Step::Route,
                Step::Breadcrumbs,
            ]
        );
        assert_eq!(report.count(StepStatus::Created), 8);
        assert_eq!(
            report.outcome(Step::Controller).unwrap().message,
            r"Backend\PostController created"
        );
        assert!(report.outcome(Step::Route).unwrap().message.contains("'posts'"));
    }

    #[test]
    fn invalid_name_aborts_before_any_port() {
        let svc = service(
            MockFilesystem::new(),
            MockRouteFile::new(),
            MockArtifactGenerator::new(),
        );
        let err = svc.generate("9lives", Some("backend"), &no_prompt()).unwrap_err();
        assert!(matches!(
            err,
            CrudsmithError::Domain(DomainError::InvalidName { .. })
        ));
    }

    #[test]
    fn invalid_layer_aborts() {
        let svc = service(
            MockFilesystem::new(),
            MockRouteFile::new(),
            MockArtifactGenerator::new(),
        );
        let err = svc.generate("post", Some("api"), &no_prompt()).unwrap_err();
        assert!(matches!(
            err,
            CrudsmithError::Domain(DomainError::InvalidLayer { .. })
        ));
    }

    #[test]
    fn prompted_layer_is_used() {
        let mut prompt = MockLayerPrompt::new();
        prompt
            .expect_choose()
            .times(1)
            .returning(|_, _| Ok("frontend".into()));

        let svc = service(empty_project(), accepting_routes(), echo_generator());
        let report = svc.generate("category", None, &prompt).unwrap();
        assert_eq!(report.layer, Layer::Frontend);
        assert_eq!(
            report.outcome(Step::Request).unwrap().message,
            r"Frontend\CategoryRequest created"
        );
    }

    #[test]
    fn generator_failure_does_not_stop_the_run() {
        let mut generator = MockArtifactGenerator::new();
        generator.expect_generate().returning(|r| {
            if r.kind == ArtifactKind::Migration {
                Err(ApplicationError::GeneratorFailed {
                    kind: r.kind,
                    reason: "exit status 1".into(),
                }
                .into())
            } else {
                Ok("ok".into())
            }
        });

        let svc = service(empty_project(), accepting_routes(), generator);
        let report = svc.generate("post", Some("backend"), &no_prompt()).unwrap();

        let migration = report.outcome(Step::Migration).unwrap();
        assert_eq!(migration.status, StepStatus::Failed);
        assert!(migration.message.contains("exit status 1"));
        assert_eq!(report.count(StepStatus::Failed), 1);
        assert_eq!(
            report.outcome(Step::Breadcrumbs).unwrap().status,
            StepStatus::Created
        );
    }

    /// Filesystem mock that records writes; `existing` paths report as present.
    fn recording_project(
        existing: Vec<PathBuf>,
    ) -> (MockFilesystem, Arc<Mutex<Vec<(PathBuf, String)>>>) {
        let writes = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&writes);

        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(move |p| existing.iter().any(|e| e.as_path() == p));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(move |p, c| {
            sink.lock().unwrap().push((p.to_path_buf(), c.to_string()));
            Ok(())
        });
        (fs, writes)
    }

    fn written(writes: &Arc<Mutex<Vec<(PathBuf, String)>>>, path: &str) -> Option<String> {
        writes
            .lock()
            .unwrap()
            .iter()
            .find(|(p, _)| p == Path::new(path))
            .map(|(_, c)| c.clone())
    }

    #[test]
    fn existing_model_is_skipped_without_generator_call() {
        let (fs, writes) = recording_project(vec![PathBuf::from(MODEL_FILE)]);

        let mut generator = MockArtifactGenerator::new();
        generator
            .expect_generate()
            .withf(|r| r.kind != ArtifactKind::Model)
            .times(4)
            .returning(|_| Ok("ok".into()));

        let svc = service(fs, accepting_routes(), generator);
        let report = svc.generate("post", Some("backend"), &no_prompt()).unwrap();

        assert_eq!(report.outcome(Step::Model).unwrap().status, StepStatus::Skipped);
        assert!(written(&writes, MODEL_FILE).is_none());
    }

    #[test]
    fn skeleton_is_written_over_fresh_model() {
        let (fs, writes) = recording_project(Vec::new());

        let svc = service(fs, accepting_routes(), echo_generator());
        svc.generate("post", Some("backend"), &no_prompt()).unwrap();

        let model = written(&writes, MODEL_FILE).unwrap();
        assert!(model.contains("class Post extends Model"));
        assert!(model.contains("protected $table = 'posts';"));
    }

    #[test]
    fn skeleton_can_be_disabled() {
        let (fs, writes) = recording_project(Vec::new());

        let svc = service(fs, accepting_routes(), echo_generator()).with_model_skeleton(false);
        let report = svc.generate("post", Some("backend"), &no_prompt()).unwrap();

        assert_eq!(report.outcome(Step::Model).unwrap().status, StepStatus::Created);
        assert!(written(&writes, MODEL_FILE).is_none());
        assert!(written(&writes, "/app/routes/breadcrumbs/backend/post.php").is_some());
    }

    #[test]
    fn duplicate_route_is_reported_as_failure() {
        let mut routes = MockRouteFile::new();
        routes.expect_exists().return_const(true);
        routes
            .expect_append_line_if_absent()
            .returning(|_, _| Ok(AppendOutcome::Duplicate));

        let svc = service(empty_project(), routes, echo_generator());
        let report = svc.generate("post", Some("backend"), &no_prompt()).unwrap();

        let route = report.outcome(Step::Route).unwrap();
        assert_eq!(route.status, StepStatus::Failed);
        assert!(route.message.starts_with("duplicate entry"));
        assert_eq!(
            report.outcome(Step::Breadcrumbs).unwrap().status,
            StepStatus::Created
        );
    }

    #[test]
    fn missing_route_file_fails_only_the_route_step() {
        let mut routes = MockRouteFile::new();
        routes.expect_exists().return_const(false);
        routes.expect_append_line_if_absent().never();

        let svc = service(empty_project(), routes, echo_generator());
        let report = svc.generate("post", Some("backend"), &no_prompt()).unwrap();

        assert_eq!(report.count(StepStatus::Failed), 1);
        assert!(report
            .outcome(Step::Route)
            .unwrap()
            .message
            .starts_with("file not found"));
    }

    #[test]
    fn plan_touches_no_port() {
        let svc = service(
            MockFilesystem::new(),
            MockRouteFile::new(),
            MockArtifactGenerator::new(),
        );
        let plan = svc.plan("BlogPost", Layer::Frontend).unwrap();
        assert_eq!(plan.names.plural_snake(), "blog_posts");
        assert_eq!(
            plan.breadcrumb_file,
            Path::new("/app/routes/breadcrumbs/frontend/blog_post.php")
        );
    }
}
