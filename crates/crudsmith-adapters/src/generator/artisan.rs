//! `php artisan make:*` as an artifact generator.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, instrument};

use crudsmith_core::{
    application::{ApplicationError, ports::ArtifactGenerator},
    domain::ArtifactRequest,
    error::CrudsmithResult,
};

/// Runs the framework's own generators inside a project root.
#[derive(Debug, Clone)]
pub struct ArtisanGenerator {
    root: PathBuf,
    php: String,
    artisan: PathBuf,
}

impl ArtisanGenerator {
    /// `php artisan` in `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            php: "php".into(),
            artisan: PathBuf::from("artisan"),
        }
    }

    pub fn with_php(mut self, php: impl Into<String>) -> Self {
        self.php = php.into();
        self
    }

    /// Artisan script, relative to the root unless absolute.
    pub fn with_artisan(mut self, artisan: impl Into<PathBuf>) -> Self {
        self.artisan = artisan.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Arguments passed after the php binary.
    pub fn args(&self, request: &ArtifactRequest) -> Vec<String> {
        vec![
            self.artisan.display().to_string(),
            format!("make:{}", request.kind.as_str()),
            request.target_path.clone(),
        ]
    }
}

impl ArtifactGenerator for ArtisanGenerator {
    #[instrument(skip_all, fields(kind = %request.kind, target = %request.target_path))]
    fn generate(&self, request: &ArtifactRequest) -> CrudsmithResult<String> {
        let args = self.args(request);
        debug!(php = %self.php, ?args, "Running generator");

        let output = Command::new(&self.php)
            .args(&args)
            .current_dir(&self.root)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ApplicationError::GeneratorFailed {
                kind: request.kind,
                reason: format!("could not run '{}': {e}", self.php),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if !output.status.success() {
            let reason = [stderr, stdout]
                .into_iter()
                .find(|s| !s.is_empty())
                .unwrap_or_else(|| output.status.to_string());
            return Err(ApplicationError::GeneratorFailed {
                kind: request.kind,
                reason,
            }
            .into());
        }

        if stdout.is_empty() {
            Ok(format!("{} {} created", request.kind.label(), request.target_path))
        } else {
            Ok(stdout)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crudsmith_core::domain::{ArtifactKind, Layer, NameSet};
    use crudsmith_core::error::CrudsmithError;

    fn request(kind: ArtifactKind) -> ArtifactRequest {
        let names = NameSet::derive("post", Layer::Backend).unwrap();
        ArtifactRequest::new(kind, &names, Layer::Backend)
    }

    #[test]
    fn builds_make_arguments() {
        let generator = ArtisanGenerator::new("/srv/app");
        assert_eq!(
            generator.args(&request(ArtifactKind::Controller)),
            ["artisan", "make:controller", r"Backend\PostController"]
        );
        assert_eq!(
            generator
                .with_artisan("bin/artisan")
                .args(&request(ArtifactKind::Migration)),
            ["bin/artisan", "make:migration", "create_posts_table"]
        );
    }

    #[test]
    fn missing_binary_is_a_generator_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let generator =
            ArtisanGenerator::new(tmp.path()).with_php("crudsmith-no-such-php-binary");
        let err = generator.generate(&request(ArtifactKind::Model)).unwrap_err();
        assert!(matches!(
            err,
            CrudsmithError::Application(ApplicationError::GeneratorFailed {
                kind: ArtifactKind::Model,
                ..
            })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn reports_script_output_verbatim() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(
            tmp.path().join("artisan"),
            "echo \"INFO  $1 [$2] created successfully.\"\n",
        )
        .unwrap();

        let generator = ArtisanGenerator::new(tmp.path()).with_php("sh");
        let message = generator.generate(&request(ArtifactKind::Request)).unwrap();
        assert_eq!(
            message,
            r"INFO  make:request [Backend\PostRequest] created successfully."
        );
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_carries_stderr() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(
            tmp.path().join("artisan"),
            "echo 'Command \"make:repository\" is not defined.' >&2\nexit 1\n",
        )
        .unwrap();

        let generator = ArtisanGenerator::new(tmp.path()).with_php("sh");
        let err = generator
            .generate(&request(ArtifactKind::Repository))
            .unwrap_err();
        assert!(err.to_string().contains("is not defined"));
    }
}
