//! Painel Pipeline
//!
//! Turns a loosely-typed project collection into the structures the dashboard renders.
//!
//! # Core Concepts
//!
//! - [`field_value`] / [`owner`]: trimmed field access with fallbacks
//! - [`unique_options`] / [`FilterOptions`]: choice lists for the multi-select filters
//! - [`filter_records`]: AND across categories, OR within one, plus period or advanced dates
//! - [`Totals`]: the eight dashboard counters
//! - [`KanbanClassifier`]: substring routing of `Status` into an injected column table
//! - [`top_backlog`] / [`backlog_by_owner`]: ranked backlog queues
//! - [`DashboardView`]: all of the above in one pass
//!
//! Every derivation is pure and total: malformed records shift results, they never fail.
//! Anything that depends on "today" reads it from a [`Clock`].
//!
//! # Example
//!
//! ```rust
//! use painel_model::parse_records;
//! use painel_pipeline::{top3_backlog, count_backlog_priorizado};
//!
//! let records = parse_records(r#"[
//!     {"ID": "1", "Status": "Backlog Priorizado", "PosicaoBacklog": 2, "Responsável": "Ana"},
//!     {"ID": "2", "Status": "Backlog Priorizado", "PosicaoBacklog": 1, "Responsável": "Ana"},
//!     {"ID": "3", "Status": "Em Andamento"}
//! ]"#).unwrap();
//!
//! assert_eq!(count_backlog_priorizado(&records), 2);
//! let top: Vec<_> = top3_backlog(&records).into_iter().map(|e| e.record.id).collect();
//! assert_eq!(top, ["2", "1"]);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod backlog;
pub mod clock;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod extract;
pub mod filter;
pub mod kanban;
pub mod options;
pub mod totals;

// Re-exports
pub use backlog::{
    backlog_by_owner, is_backlog, top3_backlog, top_backlog, BacklogConfig, BacklogEntry,
    OwnerQueue,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{FilterConfig, PipelineConfig};
pub use dashboard::DashboardView;
pub use error::ConfigError;
pub use extract::{field_or, field_or_default, field_value, owner};
pub use filter::{
    filter_records, filter_records_with, period_window, DateOperator, FilterCriteria, FilterPlan,
    Periodo,
};
pub use kanban::{KanbanClassifier, KanbanColumn, KanbanConfig, KanbanLane, OverlapPolicy};
pub use options::{sorted_options, unique_options, FilterOptions};
pub use totals::{
    count_atrasado, count_backlog_priorizado, count_em_andamento, count_em_ideacao,
    count_em_risco, count_entregas_do_mes, count_no_prazo, total_projetos, Totals,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for building dashboard views
    pub use crate::{
        Clock, DashboardView, FilterCriteria, FixedClock, KanbanClassifier, PipelineConfig,
        Periodo, SystemClock, Totals,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
