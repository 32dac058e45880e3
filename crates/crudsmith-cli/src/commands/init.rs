//! `crudsmith init`: write a configuration file holding the defaults.

use std::path::PathBuf;

use crate::{
    cli::InitArgs,
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Create a default configuration file.
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let config_path = target_path(&args)?;

    if config_path.exists() && !args.force {
        return Err(CliError::ConfigExists { path: config_path });
    }

    let toml = AppConfig::default().to_toml()?;

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(&config_path, toml).with_cli_context(|| {
        format!("Failed to write config to '{}'", config_path.display())
    })?;

    output.success(&format!("Configuration created at {}", config_path.display()))?;
    Ok(())
}

/// `--global` writes to the platform config directory; anything else to the
/// current directory.
fn target_path(args: &InitArgs) -> CliResult<PathBuf> {
    if args.global {
        return AppConfig::global_config_path().ok_or_else(|| CliError::ConfigError {
            message: "no configuration directory on this platform".into(),
            source: None,
        });
    }
    Ok(PathBuf::from(LOCAL_CONFIG_FILE))
}
