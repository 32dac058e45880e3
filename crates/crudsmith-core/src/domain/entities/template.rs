//! Fixed textual templates for the artifacts the core owns.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  NameSet + Layer                                            │
//! │  └── RenderContext (Value Object)                           │
//! │      └── {{MODEL_CLASS}} -> "BlogPost"                      │
//! │                                                             │
//! │  render_model          -> app/Models/BlogPost.php           │
//! │  render_breadcrumb_set -> routes/breadcrumbs/backend/...    │
//! │  render_route_line     -> Route::resource(...)              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is pure string construction. No I/O.

use std::collections::HashMap;

use inflector::Inflector;

use crate::domain::{naming::NameSet, value_objects::Layer};

/// Namespace that resource controllers live under unless configured otherwise.
pub const DEFAULT_CONTROLLER_NAMESPACE: &str = r"App\Http\Controllers";

/// Variable substitution context for the fixed templates.
///
/// ## Built-in Variables
///
/// | Variable | Example |
/// |----------|---------|
/// | `MODEL_CLASS` | "BlogPost" |
/// | `MODEL_SNAKE` | "blog_post" |
/// | `MODEL_PLURAL` | "blog_posts" |
/// | `MODEL_VARIABLE` | "blogPost" |
/// | `LAYER` | "backend" |
/// | `LAYER_NAMESPACE` | "Backend" |
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Build the standard variables for a model in a layer.
    pub fn new(names: &NameSet, layer: Layer) -> Self {
        let mut vars = HashMap::new();

        vars.insert("MODEL_CLASS".to_string(), names.studly().to_string());
        vars.insert("MODEL_SNAKE".to_string(), names.snake().to_string());
        vars.insert("MODEL_PLURAL".to_string(), names.plural_snake().to_string());
        vars.insert("MODEL_VARIABLE".to_string(), names.snake().to_camel_case());
        vars.insert("LAYER".to_string(), layer.as_str().to_string());
        vars.insert(
            "LAYER_NAMESPACE".to_string(),
            names.namespace_segment().to_string(),
        );

        Self { variables: vars }
    }

    /// Add or override a variable.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Replace every `{{VARIABLE}}` placeholder.
    ///
    /// Unknown placeholders are left as-is.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}

// ============================================================================
// Model
// ============================================================================

const MODEL_TEMPLATE: &str = r#"<?php

namespace App\Models;

use Illuminate\Database\Eloquent\Factories\HasFactory;
use Illuminate\Database\Eloquent\Model;

class {{MODEL_CLASS}} extends Model
{
    use HasFactory;

    /*
    |--------------------------------------------------------------------------
    | GLOBAL VARIABLES
    |--------------------------------------------------------------------------
    */

    protected $table = '{{TABLE_NAME}}';
    // protected $primaryKey = 'id';
    // public $timestamps = false;
    protected $guarded = ['id'];
    // protected $fillable = [];
    // protected $hidden = [];

    protected function casts(): array
    {
        return [
            // 'email_verified_at' => 'datetime',
        ];
    }

    /*
    |--------------------------------------------------------------------------
    | FUNCTIONS
    |--------------------------------------------------------------------------
    */

    /*
    |--------------------------------------------------------------------------
    | RELATIONS
    |--------------------------------------------------------------------------
    */

    /*
    |--------------------------------------------------------------------------
    | SCOPES
    |--------------------------------------------------------------------------
    */

    /*
    |--------------------------------------------------------------------------
    | ACCESSORS
    |--------------------------------------------------------------------------
    */

    /*
    |--------------------------------------------------------------------------
    | MUTATORS
    |--------------------------------------------------------------------------
    */
}
"#;

/// Render the Eloquent model skeleton bound to `table_name`.
///
/// Every column except `id` is mass-assignable; the section banners are
/// left empty for hand editing.
pub fn render_model(names: &NameSet, table_name: &str) -> String {
    // The model is layer-independent; the context only needs the names.
    RenderContext::new(names, Layer::Backend)
        .with_variable("TABLE_NAME", table_name)
        .render(MODEL_TEMPLATE)
}

// ============================================================================
// Breadcrumbs
// ============================================================================

/// The four navigation entries generated per model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreadcrumbAction {
    Index,
    Create,
    Edit,
    Profile,
}

impl BreadcrumbAction {
    pub const ALL: [BreadcrumbAction; 4] = [
        BreadcrumbAction::Index,
        BreadcrumbAction::Create,
        BreadcrumbAction::Edit,
        BreadcrumbAction::Profile,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Create => "create",
            Self::Edit => "edit",
            Self::Profile => "profile",
        }
    }

    /// Whether the route needs the model instance as a parameter.
    pub const fn takes_model(&self) -> bool {
        matches!(self, Self::Edit | Self::Profile)
    }
}

/// `{layer}.{snake}.{action}`
pub fn breadcrumb_key(names: &NameSet, layer: Layer, action: BreadcrumbAction) -> String {
    format!("{}.{}.{}", layer.as_str(), names.snake(), action.as_str())
}

/// Parent of a breadcrumb entry: the layer dashboard for `index`, the
/// model's `index` for everything else.
pub fn breadcrumb_parent(names: &NameSet, layer: Layer, action: BreadcrumbAction) -> String {
    match action {
        BreadcrumbAction::Index => format!("{}.dashboard", layer.as_str()),
        _ => breadcrumb_key(names, layer, BreadcrumbAction::Index),
    }
}

const BREADCRUMB_HEADER: &str = r#"<?php

use Diglactic\Breadcrumbs\Breadcrumbs;
use Diglactic\Breadcrumbs\Generator as BreadcrumbTrail;
"#;

const BREADCRUMB_ENTRY: &str = r#"
// {{KEY}}
Breadcrumbs::for('{{KEY}}', function (BreadcrumbTrail $trail) {
    $trail->parent('{{PARENT}}');
    $trail->push(__('{{KEY}}'), route('{{KEY}}'));
});
"#;

const BREADCRUMB_MODEL_ENTRY: &str = r#"
// {{KEY}}
Breadcrumbs::for('{{KEY}}', function (BreadcrumbTrail $trail, ${{MODEL_VARIABLE}}) {
    $trail->parent('{{PARENT}}');
    $trail->push(__('{{KEY}}'), route('{{KEY}}', ${{MODEL_VARIABLE}}));
});
"#;

/// Render the four breadcrumb definitions for a model in a layer.
pub fn render_breadcrumb_set(names: &NameSet, layer: Layer) -> String {
    let base = RenderContext::new(names, layer);
    let mut out = String::from(BREADCRUMB_HEADER);

    for action in BreadcrumbAction::ALL {
        let template = if action.takes_model() {
            BREADCRUMB_MODEL_ENTRY
        } else {
            BREADCRUMB_ENTRY
        };
        let ctx = base
            .clone()
            .with_variable("KEY", breadcrumb_key(names, layer, action))
            .with_variable("PARENT", breadcrumb_parent(names, layer, action));
        out.push_str(&ctx.render(template));
    }

    out
}

// ============================================================================
// Route
// ============================================================================

const ROUTE_TEMPLATE: &str = r"Route::resource('{{MODEL_PLURAL}}', \{{CONTROLLER_NAMESPACE}}\{{LAYER_NAMESPACE}}\{{MODEL_CLASS}}Controller::class);";

/// Render the resource-route registration line.
///
/// This exact string is the duplicate-detection key in the route file.
pub fn render_route_line(names: &NameSet, layer: Layer, controller_namespace: &str) -> String {
    RenderContext::new(names, layer)
        .with_variable(
            "CONTROLLER_NAMESPACE",
            controller_namespace.trim_matches('\\'),
        )
        .render(ROUTE_TEMPLATE)
}
