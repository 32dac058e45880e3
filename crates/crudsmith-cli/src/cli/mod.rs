//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "crudsmith",
    bin_name = "crudsmith",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "CRUD scaffolding for Laravel projects",
    long_about = "Crudsmith derives every identifier for a model from one name and \
                  generates its model, migration, controller, request, repository, \
                  views, route and breadcrumbs.",
    after_help = "EXAMPLES:\n\
        \x20 crudsmith generate post --layer backend\n\
        \x20 crudsmith g category -l frontend --dry-run\n\
        \x20 crudsmith names \"blog post\"\n\
        \x20 crudsmith completions bash > /usr/share/bash-completion/completions/crudsmith",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the full CRUD set for a model.
    #[command(
        visible_aliases = ["g", "crud"],
        about = "Generate CRUD artifacts for a model",
        after_help = "EXAMPLES:\n\
            \x20 crudsmith generate post                 # prompts for the layer\n\
            \x20 crudsmith generate post -l backend\n\
            \x20 crudsmith generate OrderItem -l frontend -C ../shop\n\
            \x20 crudsmith generate post -l backend --strict"
    )]
    Generate(GenerateArgs),

    /// Show the identifiers and paths derived for a model.
    #[command(
        about = "Show derived names without writing anything",
        after_help = "EXAMPLES:\n\
            \x20 crudsmith names person\n\
            \x20 crudsmith names \"order item\" --layer frontend --format json"
    )]
    Names(NamesArgs),

    /// Initialise a Crudsmith configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 crudsmith init           # .crudsmith.toml in CWD\n\
            \x20 crudsmith init --global  # global config\n\
            \x20 crudsmith init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 crudsmith completions bash > ~/.local/share/bash-completion/completions/crudsmith\n\
            \x20 crudsmith completions zsh  > ~/.zfunc/_crudsmith\n\
            \x20 crudsmith completions fish > ~/.config/fish/completions/crudsmith.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 crudsmith config get defaults.layer\n\
            \x20 crudsmith config list\n\
            \x20 crudsmith config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `crudsmith generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Model name in any casing: `post`, `BlogPost`, `blog_post`, `"blog post"`.
    #[arg(value_name = "MODEL", help = "Model name")]
    pub model: String,

    /// Target layer. Prompted for when omitted and no default is configured.
    #[arg(
        short = 'l',
        long = "layer",
        value_name = "LAYER",
        help = "Layer to generate into (backend | frontend)"
    )]
    pub layer: Option<String>,

    /// Project root (defaults to the current directory).
    #[arg(
        short = 'C',
        long = "root",
        value_name = "DIR",
        help = "Laravel project root"
    )]
    pub root: Option<PathBuf>,

    /// Print the plan without touching the project.
    #[arg(long = "dry-run", help = "Show what would be generated without generating")]
    pub dry_run: bool,

    /// Keep the generator's model stub instead of the crudsmith skeleton.
    #[arg(long = "no-skeleton", help = "Do not write the model skeleton")]
    pub no_skeleton: bool,

    /// Exit with status 5 when any step failed.
    #[arg(long = "strict", help = "Fail the command when any step fails")]
    pub strict: bool,
}

// ── names ─────────────────────────────────────────────────────────────────────

/// Arguments for `crudsmith names`.
#[derive(Debug, Args)]
pub struct NamesArgs {
    #[arg(value_name = "MODEL", help = "Model name")]
    pub model: String,

    #[arg(
        short = 'l',
        long = "layer",
        value_name = "LAYER",
        default_value = "backend",
        help = "Layer used for namespaces and paths"
    )]
    pub layer: String,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: NamesFormat,
}

/// Output format for the `names` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum NamesFormat {
    /// Human-readable table.
    Table,
    /// JSON object.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `crudsmith init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the global config location instead of `.crudsmith.toml`
    /// in the current directory.
    #[arg(long = "global", help = "Create global configuration")]
    pub global: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `crudsmith completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `crudsmith config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `paths.routes_file`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the configuration file locations, in load order.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
