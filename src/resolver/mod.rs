//! Turns a completed [`Selection`] into a human-readable suggestion.
//!
//! Two strategies live behind [`Resolve`]:
//! - [`TemplateResolver`] interpolates option labels and a country note into a
//!   fixed sentence. It tolerates countries without a note.
//! - [`TableResolver`] looks the exact `(country, roof type, wall type)`
//!   triple up in a [`SuggestionTable`](crate::catalog::SuggestionTable).
//!
//! Both are pure. The only error they report is an incomplete selection, and
//! it comes back as a [`Resolution`] value, never as a panic or `Err`.

pub mod table;
pub mod template;

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, SuggestionTable};
use crate::config::{ConfiguratorConfig, StrategyKind};
use crate::error::ConfigError;
use crate::selection::Selection;

pub use table::TableResolver;
pub use template::TemplateResolver;

/// Outcome of one submit: an error message or a suggestion, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum Resolution {
    Error(String),
    Suggestion(String),
}

impl Resolution {
    pub fn error(&self) -> Option<&str> {
        match self {
            Resolution::Error(msg) => Some(msg),
            Resolution::Suggestion(_) => None,
        }
    }

    pub fn suggestion(&self) -> Option<&str> {
        match self {
            Resolution::Suggestion(msg) => Some(msg),
            Resolution::Error(_) => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Resolution::Error(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Resolution::Error(msg) | Resolution::Suggestion(msg) => msg,
        }
    }
}

pub trait Resolve {
    /// Every category the strategy reads.
    fn fields(&self) -> &[Category];

    /// Categories that must be set before a suggestion can be produced.
    fn required(&self) -> &[Category];

    /// Categories unlocked one after another, earliest first. Empty when the
    /// form has no ordering between fields.
    fn cascade(&self) -> &[Category] {
        &[]
    }

    fn resolve(&self, selection: &Selection) -> Resolution;
}

/// The strategy picked by configuration.
#[derive(Debug, Clone)]
pub enum Resolver {
    Template(TemplateResolver),
    Table(TableResolver),
}

impl Resolver {
    pub fn from_config(config: &ConfiguratorConfig) -> Result<Self, ConfigError> {
        let resolver = match config.strategy {
            StrategyKind::Template => Resolver::Template(TemplateResolver {
                country_required: config.country_required,
                strict_labels: config.strict_labels,
            }),
            StrategyKind::Table => {
                let table = match &config.table_path {
                    Some(path) => SuggestionTable::load(path)?,
                    None => SuggestionTable::builtin(),
                };
                Resolver::Table(TableResolver::new(table))
            }
        };
        Ok(resolver)
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            Resolver::Template(_) => StrategyKind::Template,
            Resolver::Table(_) => StrategyKind::Table,
        }
    }

    fn inner(&self) -> &dyn Resolve {
        match self {
            Resolver::Template(r) => r as &dyn Resolve,
            Resolver::Table(r) => r as &dyn Resolve,
        }
    }
}

impl Resolve for Resolver {
    fn fields(&self) -> &[Category] {
        self.inner().fields()
    }

    fn required(&self) -> &[Category] {
        self.inner().required()
    }

    fn cascade(&self) -> &[Category] {
        self.inner().cascade()
    }

    fn resolve(&self, selection: &Selection) -> Resolution {
        self.inner().resolve(selection)
    }
}
