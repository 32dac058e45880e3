//! `crudsmith config`: inspect the effective configuration.

use std::path::Path;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config: AppConfig,
    explicit: Option<&Path>,
    project_root: &Path,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            output.print(&config.get(&key)?)?;
        }

        ConfigCommands::List => {
            output.header("Current configuration:")?;
            output.print(config.to_toml()?.trim_end())?;
        }

        ConfigCommands::Path => {
            for path in AppConfig::sources(explicit, project_root) {
                let marker = if path.exists() { "" } else { "  (missing)" };
                output.print(&format!("{}{marker}", path.display()))?;
            }
        }
    }

    Ok(())
}
