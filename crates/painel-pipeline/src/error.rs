//! Error types for pipeline configuration
//!
//! The derivations themselves are total; only loading configuration can fail.

use std::path::PathBuf;

/// Errors while loading or validating a [`PipelineConfig`](crate::PipelineConfig)
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid JSON
    #[error("invalid JSON config: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Invalid YAML
    #[error("invalid YAML config: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    /// Invalid TOML
    #[error("invalid TOML config: {0}")]
    InvalidToml(#[from] toml::de::Error),

    /// IO error reading a config file
    #[error("io error reading {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File extension does not name a known format
    #[error("unsupported config format: '{0}'")]
    UnsupportedFormat(String),

    /// Kanban table has no columns
    #[error("kanban table has no columns")]
    EmptyBoard,

    /// Two kanban columns share a title
    #[error("duplicate kanban column: '{0}'")]
    DuplicateColumn(String),

    /// Kanban column cannot match anything
    #[error("kanban column '{0}' has no aliases")]
    ColumnWithoutAliases(String),

    /// Backlog top-N of zero
    #[error("backlog top_n must be at least 1")]
    ZeroTopN,
}

impl ConfigError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Check if the error is about the config content rather than reading it
    #[inline]
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyBoard
                | Self::DuplicateColumn(_)
                | Self::ColumnWithoutAliases(_)
                | Self::ZeroTopN
        )
    }
}
