//! Where a generation run writes, and what it asks the generator for.
//!
//! [`ProjectLayout`] holds the framework-convention locations relative to a
//! project root. [`GenerationPlan`] applies a layout to one (NameSet, Layer)
//! pair and yields every path, line and request a run touches. Building a
//! plan performs no I/O, so the same value drives both real runs and
//! `--dry-run` output.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{
    entities::template::{DEFAULT_CONTROLLER_NAMESPACE, render_route_line},
    naming::NameSet,
    value_objects::{ArtifactKind, Layer},
};

/// Framework-convention locations for a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectLayout {
    root: PathBuf,
    routes_file: PathBuf,
    breadcrumbs_dir: PathBuf,
    views_dir: PathBuf,
    models_dir: PathBuf,
    controller_namespace: String,
}

impl ProjectLayout {
    /// Laravel defaults under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            routes_file: PathBuf::from("routes/web.php"),
            breadcrumbs_dir: PathBuf::from("routes/breadcrumbs"),
            views_dir: PathBuf::from("resources/views"),
            models_dir: PathBuf::from("app/Models"),
            controller_namespace: DEFAULT_CONTROLLER_NAMESPACE.to_string(),
        }
    }

    pub fn with_routes_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.routes_file = path.into();
        self
    }

    pub fn with_breadcrumbs_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.breadcrumbs_dir = path.into();
        self
    }

    pub fn with_views_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.views_dir = path.into();
        self
    }

    pub fn with_models_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.models_dir = path.into();
        self
    }

    pub fn with_controller_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.controller_namespace = namespace.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn controller_namespace(&self) -> &str {
        &self.controller_namespace
    }

    /// Shared route-registration file.
    pub fn routes_file(&self) -> PathBuf {
        self.root.join(&self.routes_file)
    }

    /// `{breadcrumbs_dir}/{layer}`
    pub fn breadcrumbs_dir(&self, layer: Layer) -> PathBuf {
        self.root.join(&self.breadcrumbs_dir).join(layer.as_str())
    }

    /// `{views_dir}/{layer}`
    pub fn views_dir(&self, layer: Layer) -> PathBuf {
        self.root.join(&self.views_dir).join(layer.as_str())
    }

    pub fn models_dir(&self) -> PathBuf {
        self.root.join(&self.models_dir)
    }
}

/// One request to the external generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactRequest {
    pub kind: ArtifactKind,
    /// Name handed to the generator, e.g. `Backend\PostController`.
    pub target_path: String,
    #[serde(skip)]
    pub names: NameSet,
    pub layer: Layer,
}

impl ArtifactRequest {
    /// Build the kind-appropriate target path.
    ///
    /// | Kind | Target |
    /// |------|--------|
    /// | Model | `Post` |
    /// | Migration | `create_posts_table` |
    /// | Controller | `Backend\PostController` |
    /// | Request | `Backend\PostRequest` |
    /// | Repository | `Backend\PostRepository` |
    pub fn new(kind: ArtifactKind, names: &NameSet, layer: Layer) -> Self {
        let target_path = match kind {
            ArtifactKind::Model => names.studly().to_string(),
            ArtifactKind::Migration => format!("create_{}_table", names.plural_snake()),
            ArtifactKind::Controller | ArtifactKind::Request | ArtifactKind::Repository => {
                format!(
                    "{}\\{}{}",
                    names.namespace_segment(),
                    names.studly(),
                    kind.class_suffix().unwrap_or_default()
                )
            }
        };

        Self {
            kind,
            target_path,
            names: names.clone(),
            layer,
        }
    }
}

/// Everything one run touches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationPlan {
    pub names: NameSet,
    pub layer: Layer,
    /// `{views}/{layer}/{snake}`
    pub view_dir: PathBuf,
    /// `{models}/{Studly}.php`
    pub model_file: PathBuf,
    pub breadcrumb_dir: PathBuf,
    /// `{breadcrumbs}/{layer}/{snake}.php`
    pub breadcrumb_file: PathBuf,
    pub route_file: PathBuf,
    pub route_line: String,
    pub artifacts: Vec<ArtifactRequest>,
}

impl GenerationPlan {
    pub fn new(names: NameSet, layer: Layer, layout: &ProjectLayout) -> Self {
        let breadcrumb_dir = layout.breadcrumbs_dir(layer);
        let artifacts = ArtifactKind::ALL
            .iter()
            .map(|kind| ArtifactRequest::new(*kind, &names, layer))
            .collect();

        Self {
            view_dir: layout.views_dir(layer).join(names.snake()),
            model_file: layout.models_dir().join(format!("{}.php", names.studly())),
            breadcrumb_file: breadcrumb_dir.join(format!("{}.php", names.snake())),
            breadcrumb_dir,
            route_file: layout.routes_file(),
            route_line: render_route_line(&names, layer, layout.controller_namespace()),
            artifacts,
            names,
            layer,
        }
    }

    /// The generator request for `kind`.
    pub fn artifact(&self, kind: ArtifactKind) -> Option<&ArtifactRequest> {
        self.artifacts.iter().find(|a| a.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(raw: &str, layer: Layer) -> GenerationPlan {
        let names = NameSet::derive(raw, layer).unwrap();
        GenerationPlan::new(names, layer, &ProjectLayout::new("/app"))
    }

    #[test]
    fn layout_defaults_follow_laravel() {
        let layout = ProjectLayout::new("/srv/site");
        assert_eq!(layout.routes_file(), PathBuf::from("/srv/site/routes/web.php"));
        assert_eq!(
            layout.views_dir(Layer::Frontend),
            PathBuf::from("/srv/site/resources/views/frontend")
        );
        assert_eq!(
            layout.breadcrumbs_dir(Layer::Backend),
            PathBuf::from("/srv/site/routes/breadcrumbs/backend")
        );
        assert_eq!(layout.models_dir(), PathBuf::from("/srv/site/app/Models"));
        assert_eq!(layout.controller_namespace(), r"App\Http\Controllers");
    }

    #[test]
    fn layout_overrides() {
        let layout = ProjectLayout::new("/p")
            .with_routes_file("routes/admin.php")
            .with_views_dir("views")
            .with_breadcrumbs_dir("crumbs")
            .with_models_dir("src/Models")
            .with_controller_namespace(r"Acme\Controllers");
        assert_eq!(layout.routes_file(), PathBuf::from("/p/routes/admin.php"));
        assert_eq!(layout.views_dir(Layer::Backend), PathBuf::from("/p/views/backend"));
        assert_eq!(layout.breadcrumbs_dir(Layer::Backend), PathBuf::from("/p/crumbs/backend"));
        assert_eq!(layout.models_dir(), PathBuf::from("/p/src/Models"));
        assert_eq!(layout.controller_namespace(), r"Acme\Controllers");
    }

    #[test]
    fn artifact_targets_for_backend_post() {
        let p = plan("post", Layer::Backend);
        let targets: Vec<_> = p.artifacts.iter().map(|a| a.target_path.as_str()).collect();
        assert_eq!(
            targets,
            [
                "Post",
                "create_posts_table",
                r"Backend\PostController",
                r"Backend\PostRequest",
                r"Backend\PostRepository",
            ]
        );
        assert!(p.artifacts.iter().all(|a| a.layer == Layer::Backend));
    }

    #[test]
    fn plan_paths_for_frontend_category() {
        let p = plan("category", Layer::Frontend);
        assert_eq!(p.view_dir, PathBuf::from("/app/resources/views/frontend/category"));
        assert_eq!(p.model_file, PathBuf::from("/app/app/Models/Category.php"));
        assert_eq!(
            p.breadcrumb_file,
            PathBuf::from("/app/routes/breadcrumbs/frontend/category.php")
        );
        assert_eq!(p.route_file, PathBuf::from("/app/routes/web.php"));
        assert!(p.route_line.contains("'categories'"));
        assert_eq!(
            p.artifact(ArtifactKind::Migration).unwrap().target_path,
            "create_categories_table"
        );
    }
}
