//! Implementation of the `crudsmith generate` command.
//!
//! Responsibility: wire the local adapters into a [`CrudService`] for the
//! project root, run it and print the report. Step failures are part of the
//! report; only invalid input ends the command early.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crudsmith_adapters::{ArtisanGenerator, LocalFilesystem, LocalRouteFile};
use crudsmith_core::{
    application::{CrudService, LayerSelector},
    domain::StepStatus,
};

use crate::{
    cli::{GenerateArgs, OutputFormat},
    commands::names::print_plan,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
    prompt,
};

/// Execute the `crudsmith generate` command.
///
/// 1. Resolve the project root
/// 2. Build the service from config
/// 3. Resolve the layer: `--layer`, then `defaults.layer`, then the prompt
/// 4. Print the plan (`--dry-run`) or run and print the report
#[instrument(skip_all, fields(model = %args.model))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = project_root(args.root.as_deref())?;
    let service = build_service(&root, &config, args.no_skeleton);

    let explicit = args.layer.as_deref().or(config.defaults.layer.as_deref());
    debug!(root = %root.display(), explicit_layer = ?explicit, "Generate resolved");
    let prompt = prompt::layer_prompt();

    if args.dry_run {
        let layer = LayerSelector::resolve(explicit, prompt.as_ref())?;
        let plan = service.plan(&args.model, layer)?;
        if output.format() == OutputFormat::Json {
            output.json(&plan)?;
        } else {
            output.info("Dry run: nothing will be written")?;
            print_plan(&plan, &output)?;
        }
        return Ok(());
    }

    let report = service.generate(&args.model, explicit, prompt.as_ref())?;
    output.report(&report)?;

    let failed = report.count(StepStatus::Failed);
    if args.strict && failed > 0 {
        return Err(CliError::StepsFailed {
            failed,
            total: report.steps().len(),
        });
    }

    info!(failed, "Generate command finished");
    Ok(())
}

/// `--root`, or the current directory. Must be an existing directory.
fn project_root(flag: Option<&Path>) -> CliResult<PathBuf> {
    let root = match flag {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().with_cli_context(|| "could not read current directory")?,
    };

    if !root.is_dir() {
        return Err(CliError::InvalidInput {
            message: format!("project root '{}' is not a directory", root.display()),
        });
    }
    Ok(root)
}

fn build_service(root: &Path, config: &AppConfig, no_skeleton: bool) -> CrudService {
    let generator = ArtisanGenerator::new(root)
        .with_php(&config.generator.php)
        .with_artisan(&config.generator.artisan);

    CrudService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(LocalRouteFile::new()),
        Box::new(generator),
        config.layout(root),
    )
    .with_model_skeleton(config.model_skeleton && !no_skeleton)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_root_is_user_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope");
        let err = project_root(Some(missing.as_path())).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn explicit_root_is_kept() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(project_root(Some(tmp.path())).unwrap(), tmp.path());
    }

    #[test]
    fn service_uses_configured_layout() {
        let mut config = AppConfig::default();
        config.paths.routes_file = PathBuf::from("routes/admin.php");
        let service = build_service(Path::new("/srv/app"), &config, false);
        assert_eq!(
            service.layout().routes_file(),
            PathBuf::from("/srv/app/routes/admin.php")
        );
    }
}
