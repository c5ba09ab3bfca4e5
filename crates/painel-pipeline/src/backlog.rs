//! Backlog queue processor
//!
//! Ranks `Backlog Priorizado` records by `PosicaoBacklog`:
//! - [`top_backlog`] gives the global head of the queue
//! - [`backlog_by_owner`] gives one queue per `Responsável`
//!
//! Sorting is stable, so equal ranks keep collection order.

use indexmap::IndexMap;
use painel_model::{labels, ProjectRecord};
use serde::{Deserialize, Serialize};

use crate::extract::owner;

/// Backlog queue settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BacklogConfig {
    /// Length of the global queue view
    pub top_n: usize,
    /// Rank assumed for records without `PosicaoBacklog`
    pub missing_position: i64,
}

impl Default for BacklogConfig {
    fn default() -> Self {
        Self {
            top_n: 3,
            missing_position: labels::DEFAULT_BACKLOG_POSITION,
        }
    }
}

/// Ranked backlog record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacklogEntry {
    /// 1-based display rank within its view
    pub rank: usize,
    /// The record
    pub record: ProjectRecord,
}

/// One owner's ranked queue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerQueue {
    /// Trimmed `Responsável`, or `Sem Responsável`
    pub owner: String,
    /// Entries ranked 1..n
    pub entries: Vec<BacklogEntry>,
}

impl OwnerQueue {
    /// Number of queued records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if queue is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Check if a record sits in the prioritised backlog
#[inline]
#[must_use]
pub fn is_backlog(record: &ProjectRecord) -> bool {
    record.status.as_deref() == Some(labels::BACKLOG_PRIORIZADO)
}

/// Backlog records sorted by rank
fn ranked<'a>(records: &'a [ProjectRecord], missing_position: i64) -> Vec<&'a ProjectRecord> {
    let mut backlog: Vec<_> = records.iter().filter(|r| is_backlog(r)).collect();
    backlog.sort_by_key(|r| r.backlog_rank(missing_position));
    backlog
}

fn entries<'a>(records: impl IntoIterator<Item = &'a ProjectRecord>) -> Vec<BacklogEntry> {
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| BacklogEntry {
            rank: i + 1,
            record: record.clone(),
        })
        .collect()
}

/// Global head of the backlog, `config.top_n` entries at most
#[must_use]
pub fn top_backlog(records: &[ProjectRecord], config: &BacklogConfig) -> Vec<BacklogEntry> {
    entries(
        ranked(records, config.missing_position)
            .into_iter()
            .take(config.top_n),
    )
}

/// Global top-3 with the default missing rank
#[inline]
#[must_use]
pub fn top3_backlog(records: &[ProjectRecord]) -> Vec<BacklogEntry> {
    top_backlog(records, &BacklogConfig::default())
}

/// Backlog grouped by owner, largest queue first
///
/// Groups of equal size keep the order in which their owner first appears.
#[must_use]
pub fn backlog_by_owner(records: &[ProjectRecord], config: &BacklogConfig) -> Vec<OwnerQueue> {
    let mut groups: IndexMap<String, Vec<&ProjectRecord>> = IndexMap::new();
    for record in records.iter().filter(|r| is_backlog(r)) {
        groups
            .entry(owner(record).into_owned())
            .or_default()
            .push(record);
    }

    let mut queues: Vec<OwnerQueue> = groups
        .into_iter()
        .map(|(owner, mut members)| {
            members.sort_by_key(|r| r.backlog_rank(config.missing_position));
            OwnerQueue {
                owner,
                entries: entries(members),
            }
        })
        .collect();
    queues.sort_by(|a, b| b.len().cmp(&a.len()));

    tracing::debug!("Backlog split across {} owners", queues.len());
    queues
}

#[cfg(test)]
mod tests {
    use super::*;
    use painel_test_utils::{backlog_scenario, RecordBuilder};
    use pretty_assertions::assert_eq;

    fn entry_ids(entries: &[BacklogEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.record.id.as_str()).collect()
    }

    fn backlog(id: &str, owner: Option<&str>, position: Option<i64>) -> ProjectRecord {
        let mut builder = RecordBuilder::new(id).status("Backlog Priorizado");
        if let Some(owner) = owner {
            builder = builder.responsavel(owner);
        }
        if let Some(position) = position {
            builder = builder.posicao(position);
        }
        builder.build()
    }

    #[test]
    fn top3_scenario() {
        let top = top3_backlog(&backlog_scenario());
        assert_eq!(entry_ids(&top), vec!["2", "1"]);
        assert_eq!(top[0].rank, 1);
        assert_eq!(top[1].rank, 2);
    }

    #[test]
    fn top_cuts_at_n() {
        let records: Vec<_> = (0..6)
            .map(|i| backlog(&format!("b{i}"), None, Some(6 - i)))
            .collect();
        let top = top3_backlog(&records);
        assert_eq!(entry_ids(&top), vec!["b5", "b4", "b3"]);

        let config = BacklogConfig {
            top_n: 5,
            ..BacklogConfig::default()
        };
        assert_eq!(top_backlog(&records, &config).len(), 5);
    }

    #[test]
    fn missing_position_sorts_last_and_ties_stable() {
        let records = vec![
            backlog("x", None, None),
            backlog("y", None, Some(999)),
            backlog("z", None, Some(5)),
        ];
        assert_eq!(entry_ids(&top3_backlog(&records)), vec!["z", "x", "y"]);
    }

    #[test]
    fn status_must_match_exactly() {
        let records = vec![
            RecordBuilder::new("1").status("backlog priorizado").posicao(1).build(),
            RecordBuilder::new("2").status("Backlog Priorizado ").posicao(1).build(),
            backlog("3", None, Some(9)),
        ];
        assert_eq!(entry_ids(&top3_backlog(&records)), vec!["3"]);
    }

    #[test]
    fn owner_groups_by_size_then_encounter() {
        let records = vec![
            backlog("1", Some("Ana"), Some(3)),
            backlog("2", Some("Bruno"), Some(1)),
            backlog("3", None, Some(2)),
            backlog("4", Some("Bruno"), None),
            backlog("5", Some(" "), Some(1)),
            backlog("6", Some("Ana"), Some(1)),
            RecordBuilder::new("7").status("Entregue").responsavel("Carla").build(),
        ];
        let queues = backlog_by_owner(&records, &BacklogConfig::default());

        let owners: Vec<_> = queues.iter().map(|q| q.owner.as_str()).collect();
        assert_eq!(owners, vec!["Ana", "Bruno", "Sem Responsável"]);
        assert_eq!(entry_ids(&queues[0].entries), vec!["6", "1"]);
        assert_eq!(entry_ids(&queues[1].entries), vec!["2", "4"]);
        assert_eq!(entry_ids(&queues[2].entries), vec!["5", "3"]);

        let ranks: Vec<_> = queues[2].entries.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2]);
    }

    #[test]
    fn owner_name_is_trimmed() {
        let records = vec![
            backlog("1", Some("Ana "), Some(1)),
            backlog("2", Some("Ana"), Some(2)),
        ];
        let queues = backlog_by_owner(&records, &BacklogConfig::default());
        assert_eq!(queues.len(), 1);
        assert_eq!(queues[0].len(), 2);
    }

    #[test]
    fn empty_input() {
        assert!(top3_backlog(&[]).is_empty());
        assert!(backlog_by_owner(&[], &BacklogConfig::default()).is_empty());
    }
}
