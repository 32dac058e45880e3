//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the [`ProjectLayout`]
//! built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `CRUDSMITH__SECTION__KEY`
//! 3. `--config FILE`
//! 4. `.crudsmith.toml` in the project root
//! 5. Global `config.toml` in the platform config directory
//! 6. Built-in defaults

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crudsmith_core::domain::{DEFAULT_CONTROLLER_NAMESPACE, ProjectLayout};

use crate::error::{CliError, CliResult};

/// Name of the per-project configuration file.
pub const LOCAL_CONFIG_FILE: &str = ".crudsmith.toml";

const ENV_PREFIX: &str = "CRUDSMITH";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub defaults: Defaults,
    /// Project layout, relative to the project root.
    pub paths: PathsConfig,
    pub generator: GeneratorConfig,
    pub output: OutputConfig,
    /// Replace the generator's model stub with the crudsmith skeleton.
    pub model_skeleton: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Used when `--layer` is not given. Unset means prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub routes_file: PathBuf,
    pub breadcrumbs_dir: PathBuf,
    pub views_dir: PathBuf,
    pub models_dir: PathBuf,
    pub controller_namespace: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub php: String,
    pub artisan: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`; `--output-format` wins.
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            paths: PathsConfig::default(),
            generator: GeneratorConfig::default(),
            output: OutputConfig::default(),
            model_skeleton: true,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            routes_file: PathBuf::from("routes/web.php"),
            breadcrumbs_dir: PathBuf::from("routes/breadcrumbs"),
            views_dir: PathBuf::from("resources/views"),
            models_dir: PathBuf::from("app/Models"),
            controller_namespace: DEFAULT_CONTROLLER_NAMESPACE.to_string(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            php: "php".into(),
            artisan: PathBuf::from("artisan"),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load and merge every configuration source for `project_root`.
    ///
    /// Missing global and project files are fine; a missing `explicit`
    /// file is an error.
    pub fn load(explicit: Option<&Path>, project_root: &Path) -> anyhow::Result<Self> {
        let mut builder = Config::builder();

        if let Some(global) = Self::global_config_path() {
            builder = builder.add_source(File::from(global).format(FileFormat::Toml).required(false));
        }

        builder = builder.add_source(
            File::from(project_root.join(LOCAL_CONFIG_FILE))
                .format(FileFormat::Toml)
                .required(false),
        );

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Global configuration file, if the platform has a config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "crudsmith", "crudsmith")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Files consulted for `project_root`, lowest priority first.
    pub fn sources(explicit: Option<&Path>, project_root: &Path) -> Vec<PathBuf> {
        Self::global_config_path()
            .into_iter()
            .chain(std::iter::once(project_root.join(LOCAL_CONFIG_FILE)))
            .chain(explicit.map(Path::to_path_buf))
            .collect()
    }

    /// Layout rooted at `root`.
    pub fn layout(&self, root: impl Into<PathBuf>) -> ProjectLayout {
        ProjectLayout::new(root)
            .with_routes_file(&self.paths.routes_file)
            .with_breadcrumbs_dir(&self.paths.breadcrumbs_dir)
            .with_views_dir(&self.paths.views_dir)
            .with_models_dir(&self.paths.models_dir)
            .with_controller_namespace(&self.paths.controller_namespace)
    }

    /// Look up a dotted key such as `paths.routes_file`.
    pub fn get(&self, key: &str) -> CliResult<String> {
        let value = serde_json::to_value(self).map_err(|e| CliError::ConfigError {
            message: "could not serialize configuration".into(),
            source: Some(Box::new(e)),
        })?;

        let pointer = format!("/{}", key.replace('.', "/"));
        match value.pointer(&pointer) {
            None | Some(serde_json::Value::Null) => Err(CliError::UnknownConfigKey {
                key: key.to_string(),
            }),
            Some(serde_json::Value::String(s)) => Ok(s.clone()),
            Some(other) => Ok(other.to_string()),
        }
    }

    /// TOML rendering used by `init` and `config list`.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::ConfigError {
            message: "could not render configuration as TOML".into(),
            source: Some(Box::new(e)),
        })
    }
}
