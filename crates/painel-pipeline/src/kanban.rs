//! Kanban status classifier
//!
//! Free-text `Status` values are matched against each column's alias substrings after
//! lower-casing. Substring matching is not a partition: one status can satisfy several
//! columns. [`OverlapPolicy`] decides whether that overlap is kept.

use painel_model::{FieldKey, ProjectRecord};
use serde::{Deserialize, Serialize};

use crate::extract::field_value;

/// One board column and the substrings that route a status into it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanbanColumn {
    /// Display title
    pub title: String,
    /// Status substrings, compared case-insensitively
    pub aliases: Vec<String>,
}

impl KanbanColumn {
    /// Create column
    #[must_use]
    pub fn new<I, S>(title: impl Into<String>, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            aliases: aliases.into_iter().map(Into::into).collect(),
        }
    }
}

/// What happens to a status that matches more than one column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// Record appears in every matching column
    #[default]
    Overlapping,
    /// Record appears only in the first matching column, in table order
    FirstMatch,
}

/// Ordered column table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KanbanConfig {
    /// Columns in board order
    pub columns: Vec<KanbanColumn>,
    /// Overlap handling
    pub overlap: OverlapPolicy,
}

impl Default for KanbanConfig {
    fn default() -> Self {
        Self {
            columns: vec![
                KanbanColumn::new("Ideação", ["ideação", "ideacao"]),
                KanbanColumn::new("Análise técnica e negócios", ["análise", "analise"]),
                KanbanColumn::new("Backlog priorizado", ["backlog"]),
                KanbanColumn::new("Em desenvolvimento", ["desenvolvimento", "em andamento"]),
                KanbanColumn::new("Em homologação", ["homologação", "homologacao"]),
                KanbanColumn::new(
                    "Operação assistida",
                    ["operação assistida", "operacao assistida"],
                ),
                KanbanColumn::new("Entregue", ["entregue", "concluido", "concluído"]),
                KanbanColumn::new("Cancelado", ["cancelado"]),
                KanbanColumn::new("Bloqueado", ["bloqueado"]),
            ],
            overlap: OverlapPolicy::Overlapping,
        }
    }
}

/// One column's records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KanbanLane {
    /// Column title
    pub title: String,
    /// Records routed into the column, in input order
    pub records: Vec<ProjectRecord>,
}

/// Classifier over an injected column table
#[derive(Debug, Clone)]
pub struct KanbanClassifier {
    columns: Vec<CompiledColumn>,
    overlap: OverlapPolicy,
}

#[derive(Debug, Clone)]
struct CompiledColumn {
    title: String,
    needles: Vec<String>,
}

impl CompiledColumn {
    fn matches(&self, status: &str) -> bool {
        self.needles.iter().any(|needle| status.contains(needle.as_str()))
    }
}

impl Default for KanbanClassifier {
    fn default() -> Self {
        Self::new(&KanbanConfig::default())
    }
}

impl KanbanClassifier {
    /// Build classifier, lower-casing aliases and dropping blank ones
    #[must_use]
    pub fn new(config: &KanbanConfig) -> Self {
        let columns = config
            .columns
            .iter()
            .map(|column| CompiledColumn {
                title: column.title.clone(),
                needles: column
                    .aliases
                    .iter()
                    .map(|alias| alias.trim().to_lowercase())
                    .filter(|alias| !alias.is_empty())
                    .collect(),
            })
            .collect();
        Self {
            columns,
            overlap: config.overlap,
        }
    }

    /// Column titles in board order
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.title.as_str())
    }

    /// Indices of the columns a status belongs to under the overlap policy
    ///
    /// Absent or blank status belongs nowhere.
    #[must_use]
    pub fn columns_for(&self, record: &ProjectRecord) -> Vec<usize> {
        let Some(status) = field_value(record, FieldKey::Status) else {
            return Vec::new();
        };
        let status = status.to_lowercase();

        let mut matching = self
            .columns
            .iter()
            .enumerate()
            .filter(|(_, column)| column.matches(&status))
            .map(|(i, _)| i);

        match self.overlap {
            OverlapPolicy::Overlapping => matching.collect(),
            OverlapPolicy::FirstMatch => matching.next().into_iter().collect(),
        }
    }

    /// Records belonging to the column titled `title`
    ///
    /// Unknown titles yield an empty list.
    #[must_use]
    pub fn column(&self, title: &str, records: &[ProjectRecord]) -> Vec<ProjectRecord> {
        let Some(index) = self.columns.iter().position(|c| c.title == title) else {
            tracing::debug!("Unknown kanban column requested: {}", title);
            return Vec::new();
        };
        records
            .iter()
            .filter(|record| self.columns_for(record).contains(&index))
            .cloned()
            .collect()
    }

    /// One lane per column, in board order
    #[must_use]
    pub fn board(&self, records: &[ProjectRecord]) -> Vec<KanbanLane> {
        let mut lanes: Vec<KanbanLane> = self
            .columns
            .iter()
            .map(|c| KanbanLane {
                title: c.title.clone(),
                records: Vec::new(),
            })
            .collect();

        let mut unplaced = 0usize;
        for record in records {
            let placed = self.columns_for(record);
            if placed.is_empty() {
                unplaced += 1;
            }
            for index in placed {
                lanes[index].records.push(record.clone());
            }
        }

        tracing::debug!(
            "Kanban placed {} of {} records across {} columns",
            records.len() - unplaced,
            records.len(),
            lanes.len()
        );
        lanes
    }
}
