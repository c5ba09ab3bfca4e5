//! Pipeline configuration
//!
//! Everything that used to be an ambient constant (kanban table, backlog cut-off, the
//! missing-rank sentinel, week start) is plain data here, loadable from JSON, YAML or TOML.
//!
//! ```yaml
//! filter:
//!   week_start: Sun
//! backlog:
//!   top_n: 5
//! kanban:
//!   overlap: first_match
//!   columns:
//!     - title: Entregue
//!       aliases: [entregue, concluído]
//! ```

use std::collections::HashSet;
use std::path::Path;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::backlog::BacklogConfig;
use crate::error::ConfigError;
use crate::kanban::KanbanConfig;

/// Filter engine settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// First day of the `Esta Semana` window
    pub week_start: Weekday,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            week_start: Weekday::Mon,
        }
    }
}

/// Full pipeline configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Filter settings
    pub filter: FilterConfig,
    /// Kanban column table
    pub kanban: KanbanConfig,
    /// Backlog queue settings
    pub backlog: BacklogConfig,
}

impl PipelineConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With filter settings
    #[inline]
    #[must_use]
    pub fn with_filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }

    /// With kanban table
    #[inline]
    #[must_use]
    pub fn with_kanban(mut self, kanban: KanbanConfig) -> Self {
        self.kanban = kanban;
        self
    }

    /// With backlog settings
    #[inline]
    #[must_use]
    pub fn with_backlog(mut self, backlog: BacklogConfig) -> Self {
        self.backlog = backlog;
        self
    }

    /// Parse from JSON string
    ///
    /// # Errors
    /// Returns error if JSON is invalid or the result fails [`validate`](Self::validate)
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse from YAML string
    ///
    /// # Errors
    /// Returns error if YAML is invalid or the result fails [`validate`](Self::validate)
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse from TOML string
    ///
    /// # Errors
    /// Returns error if TOML is invalid or the result fails [`validate`](Self::validate)
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file, choosing the format by extension
    ///
    /// # Errors
    /// - `ConfigError::Io` if the file cannot be read
    /// - `ConfigError::UnsupportedFormat` for extensions other than json/yaml/yml/toml
    /// - parse and validation errors as for the `from_*` constructors
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        let loader: fn(&str) -> Result<Self, ConfigError> = match extension.as_str() {
            "json" => Self::from_json,
            "yaml" | "yml" => Self::from_yaml,
            "toml" => Self::from_toml,
            _ => return Err(ConfigError::UnsupportedFormat(extension)),
        };

        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::io_error(path, e))?;
        let config = loader(&text)?;
        tracing::debug!("Loaded pipeline config from {}", path.display());
        Ok(config)
    }

    /// Check the kanban table and backlog settings
    ///
    /// # Errors
    /// - `ConfigError::EmptyBoard` if there are no columns
    /// - `ConfigError::DuplicateColumn` if two columns share a title
    /// - `ConfigError::ColumnWithoutAliases` if a column has no non-blank alias
    /// - `ConfigError::ZeroTopN` if the backlog cut-off is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.kanban.columns.is_empty() {
            return Err(ConfigError::EmptyBoard);
        }

        let mut titles = HashSet::new();
        for column in &self.kanban.columns {
            if !titles.insert(column.title.as_str()) {
                return Err(ConfigError::DuplicateColumn(column.title.clone()));
            }
            if column.aliases.iter().all(|a| a.trim().is_empty()) {
                return Err(ConfigError::ColumnWithoutAliases(column.title.clone()));
            }
        }

        if self.backlog.top_n == 0 {
            return Err(ConfigError::ZeroTopN);
        }

        Ok(())
    }
}
