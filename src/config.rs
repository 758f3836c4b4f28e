use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Sentence template filled with option labels and a country note.
    #[default]
    Template,
    /// Nested `country -> roof type -> wall type` lookup.
    Table,
}

/// Configurator settings. Every field has a default, so `{}` is a valid
/// config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfiguratorConfig {
    pub strategy: StrategyKind,
    /// Template strategy only. When false the country may be left unset.
    pub country_required: bool,
    /// Template strategy only. Values missing from their option set count
    /// as unset.
    pub strict_labels: bool,
    /// Table strategy only. Replaces the built-in suggestion table.
    pub table_path: Option<PathBuf>,
}

impl Default for ConfiguratorConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Template,
            country_required: true,
            strict_labels: false,
            table_path: None,
        }
    }
}

impl ConfiguratorConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }
}
