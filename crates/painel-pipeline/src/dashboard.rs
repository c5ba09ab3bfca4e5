//! Dashboard assembly
//!
//! Runs the full derivation once: filter, then totals, kanban and backlog over the filtered
//! collection. Filter options come from the unfiltered collection so choices do not vanish
//! as the user narrows the selection.

use painel_model::ProjectRecord;
use serde::{Deserialize, Serialize};

use crate::backlog::{backlog_by_owner, top_backlog, BacklogEntry, OwnerQueue};
use crate::clock::Clock;
use crate::config::PipelineConfig;
use crate::filter::{filter_records_with, FilterCriteria};
use crate::kanban::{KanbanClassifier, KanbanLane};
use crate::options::FilterOptions;
use crate::totals::Totals;

/// Every derived structure the dashboard renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    /// Records passing the criteria
    pub filtered: Vec<ProjectRecord>,
    /// Counters over `filtered`
    pub totals: Totals,
    /// One lane per kanban column over `filtered`
    pub kanban: Vec<KanbanLane>,
    /// Head of the backlog over `filtered`
    pub top_backlog: Vec<BacklogEntry>,
    /// Per-owner backlog over `filtered`
    pub backlog_by_owner: Vec<OwnerQueue>,
    /// Choice lists over the unfiltered collection
    pub options: FilterOptions,
}

impl DashboardView {
    /// Derive the view
    #[must_use]
    pub fn build(
        records: &[ProjectRecord],
        criteria: &FilterCriteria,
        config: &PipelineConfig,
        clock: &dyn Clock,
    ) -> Self {
        let filtered = filter_records_with(records, criteria, &config.filter, clock);
        let classifier = KanbanClassifier::new(&config.kanban);

        let view = Self {
            totals: Totals::compute(&filtered, clock),
            kanban: classifier.board(&filtered),
            top_backlog: top_backlog(&filtered, &config.backlog),
            backlog_by_owner: backlog_by_owner(&filtered, &config.backlog),
            options: FilterOptions::from_records(records),
            filtered,
        };

        tracing::info!(
            "Dashboard built: {} of {} records, {} in backlog, {} owners",
            view.filtered.len(),
            records.len(),
            view.totals.backlog,
            view.backlog_by_owner.len()
        );
        view
    }
}
