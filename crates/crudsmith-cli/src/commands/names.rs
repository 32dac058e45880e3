//! `crudsmith names`: show every identifier and path derived for a model.

use std::path::PathBuf;

use crudsmith_core::{
    domain::{GenerationPlan, Layer, NameSet},
    error::CrudsmithError,
};

use crate::{
    cli::{NamesArgs, NamesFormat, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: NamesArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let layer: Layer = args.layer.parse().map_err(CrudsmithError::from)?;
    let names = NameSet::derive(&args.model, layer).map_err(CrudsmithError::from)?;

    // Relative paths: no project is touched.
    let plan = GenerationPlan::new(names, layer, &config.layout(PathBuf::new()));

    if matches!(args.format, NamesFormat::Json) || output.format() == OutputFormat::Json {
        output.json(&plan)?;
    } else {
        print_plan(&plan, &output)?;
    }
    Ok(())
}

/// Label/value rows describing a plan, in display order.
pub(crate) fn plan_rows(plan: &GenerationPlan) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Class", plan.names.studly().to_string()),
        ("Snake", plan.names.snake().to_string()),
        ("Table", plan.names.plural_snake().to_string()),
        ("Layer", plan.layer.to_string()),
        ("Namespace", plan.names.namespace_segment().to_string()),
        ("Views", plan.view_dir.display().to_string()),
        ("Model file", plan.model_file.display().to_string()),
        ("Breadcrumbs", plan.breadcrumb_file.display().to_string()),
        ("Routes file", plan.route_file.display().to_string()),
        ("Route", plan.route_line.clone()),
    ];

    rows.extend(
        plan.artifacts
            .iter()
            .map(|a| (a.kind.label(), format!("make:{} {}", a.kind, a.target_path))),
    );
    rows
}

pub(crate) fn print_plan(plan: &GenerationPlan, output: &OutputManager) -> CliResult<()> {
    output.header(&format!("{} ({})", plan.names.studly(), plan.layer))?;
    for (label, value) in plan_rows(plan) {
        output.print(&format!("  {label:<13}{value}"))?;
    }
    Ok(())
}
