//! Identifier derivation: one raw token in, a consistent family of spellings out.
//!
//! | Input | studly | snake | plural_snake |
//! |-------|--------|-------|--------------|
//! | `post` | `Post` | `post` | `posts` |
//! | `BlogPost` | `BlogPost` | `blog_post` | `blog_posts` |
//! | `order-item` | `OrderItem` | `order_item` | `order_items` |
//! | `category` | `Category` | `category` | `categories` |
//! | `person` | `Person` | `person` | `people` |
//!
//! Casing is delegated to `Inflector`, with two corrections so that every
//! name has exactly one canonical spelling:
//!
//! - A digit stays attached to the segment before it (`post2` → `post2`,
//!   `v2_post` → `v2_post`), where `Inflector` would split it off.
//! - `studly` and `snake` are re-derived from each other until neither
//!   changes. Single-letter segments collapse into their neighbour
//!   (`a_b` → `Ab` / `ab`), so deriving again from any studly form yields
//!   the same family.
//!
//! # Pluralization rules
//!
//! Only the last `_` segment of the snake name is pluralized
//! (`user_category` → `user_categories`). That segment is checked, in order:
//!
//! 1. [`UNCOUNTABLE`]: returned unchanged (`equipment`, `news`, `sheep`).
//! 2. [`IRREGULAR`]: fixed singular/plural pairs (`person` → `people`).
//! 3. The English suffix rules of `Inflector::to_plural`:
//!
//! | Ending | Rule | Example |
//! |--------|------|---------|
//! | `f`, `fe` | → `ves` | `leaf` → `leaves` |
//! | `is` | → `es` | `analysis` → `analyses` |
//! | `ix`, `ex` | → `ices` | `matrix` → `matrices`, `index` → `indices` |
//! | `us`, `o` | Latin/Greek forms | `virus`, `hero` are pinned in [`IRREGULAR`] |
//! | consonant + `y` | `y` → `ies` | `category` → `categories` |
//! | `x`, `ch`, `ss`, `sh` | + `es` | `box` → `boxes` |
//! | anything else | + `s` | `post` → `posts`, `medium` → `mediums` |

use inflector::Inflector;
use serde::Serialize;

use crate::domain::{error::DomainError, value_objects::Layer};

/// Words whose plural is the word itself.
pub const UNCOUNTABLE: &[&str] = &[
    "audio",
    "cattle",
    "data",
    "deer",
    "education",
    "equipment",
    "evidence",
    "feedback",
    "fish",
    "furniture",
    "information",
    "knowledge",
    "metadata",
    "money",
    "news",
    "police",
    "rice",
    "series",
    "sheep",
    "software",
    "species",
    "traffic",
];

/// Singular → plural pairs the suffix rules get wrong.
pub const IRREGULAR: &[(&str, &str)] = &[
    ("campus", "campuses"),
    ("child", "children"),
    ("criterion", "criteria"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("hero", "heroes"),
    ("man", "men"),
    ("mouse", "mice"),
    ("octopus", "octopuses"),
    ("ox", "oxen"),
    ("person", "people"),
    ("potato", "potatoes"),
    ("status", "statuses"),
    ("tomato", "tomatoes"),
    ("tooth", "teeth"),
    ("virus", "viruses"),
    ("woman", "women"),
];

/// Upper bound on studly/snake re-derivation rounds.
const MAX_CANONICAL_ROUNDS: usize = 4;

/// The derived family of identifier spellings for one model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameSet {
    raw: String,
    studly: String,
    snake: String,
    plural_snake: String,
    namespace_segment: String,
}

impl NameSet {
    /// Derive every spelling from a raw token and the resolved layer.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidName`] when the token is blank, does not start
    /// with a letter, or contains anything other than ASCII alphanumerics,
    /// `_`, `-` and spaces.
    pub fn derive(raw: &str, layer: Layer) -> Result<Self, DomainError> {
        let raw = raw.trim();
        validate_raw(raw)?;

        let (studly, snake) = canonical_spellings(raw);
        let plural_snake = pluralize(&snake);

        Ok(Self {
            raw: raw.to_string(),
            studly,
            snake,
            plural_snake,
            namespace_segment: layer.namespace().to_string(),
        })
    }

    /// The token as supplied (trimmed).
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// PascalCase class name (`BlogPost`).
    pub fn studly(&self) -> &str {
        &self.studly
    }

    /// snake_case name (`blog_post`).
    pub fn snake(&self) -> &str {
        &self.snake
    }

    /// Plural snake_case name, used for tables and resource routes (`blog_posts`).
    pub fn plural_snake(&self) -> &str {
        &self.plural_snake
    }

    /// Capitalized layer name (`Backend`).
    pub fn namespace_segment(&self) -> &str {
        &self.namespace_segment
    }
}

fn validate_raw(raw: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidName {
        name: raw.to_string(),
        reason: reason.to_string(),
    };

    let Some(first) = raw.chars().next() else {
        return Err(invalid("name cannot be empty"));
    };
    if !first.is_ascii_alphabetic() {
        return Err(invalid("name must start with a letter"));
    }
    if let Some(bad) = raw
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | ' ')))
    {
        return Err(invalid(&format!("character '{bad}' is not allowed")));
    }
    Ok(())
}

/// The fixed point of `snake -> studly -> snake`, starting from `raw`.
fn canonical_spellings(raw: &str) -> (String, String) {
    let mut snake = snake_case(raw);
    let mut studly = snake.to_pascal_case();

    for _ in 0..MAX_CANONICAL_ROUNDS {
        let next = snake_case(&studly);
        if next == snake {
            break;
        }
        studly = next.to_pascal_case();
        snake = next;
    }
    (studly, snake)
}

/// `Inflector` snake case with digits glued to the preceding segment.
fn snake_case(input: &str) -> String {
    let split = input.to_snake_case();
    let mut out = String::with_capacity(split.len());
    let mut chars = split.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '_' && !out.is_empty() && chars.peek().is_some_and(char::is_ascii_digit) {
            continue;
        }
        out.push(c);
    }
    out
}

/// Pluralize a snake_case name by its last segment.
pub fn pluralize(snake: &str) -> String {
    match snake.rsplit_once('_') {
        Some((head, last)) => format!("{head}_{}", pluralize_word(last)),
        None => pluralize_word(snake),
    }
}

fn pluralize_word(word: &str) -> String {
    let lower = word.to_ascii_lowercase();
    if UNCOUNTABLE.contains(&lower.as_str()) {
        return lower;
    }
    if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == lower) {
        return (*plural).to_string();
    }
    lower.to_plural()
}
