//! Totalizer calculators
//!
//! Each counter is an independent pure function over a collection. Enumerated values are
//! compared byte-for-byte.

use chrono::Datelike;
use painel_model::{labels, FieldKey, ProjectRecord};
use serde::{Deserialize, Serialize};

use crate::backlog::is_backlog;
use crate::clock::Clock;

fn count_where(records: &[ProjectRecord], predicate: impl Fn(&ProjectRecord) -> bool) -> usize {
    records.iter().filter(|r| predicate(r)).count()
}

fn prazo_is(record: &ProjectRecord, label: &str) -> bool {
    record.status_prazo.as_deref() == Some(label)
}

/// Number of records
#[inline]
#[must_use]
pub fn total_projetos(records: &[ProjectRecord]) -> usize {
    records.len()
}

/// `Status de prazo == "No prazo"`
#[must_use]
pub fn count_no_prazo(records: &[ProjectRecord]) -> usize {
    count_where(records, |r| prazo_is(r, labels::NO_PRAZO))
}

/// `Status de prazo == "Atrasado"`
#[must_use]
pub fn count_atrasado(records: &[ProjectRecord]) -> usize {
    count_where(records, |r| prazo_is(r, labels::ATRASADO))
}

/// `Status de prazo == "Em risco"`
#[must_use]
pub fn count_em_risco(records: &[ProjectRecord]) -> usize {
    count_where(records, |r| prazo_is(r, labels::EM_RISCO))
}

/// `Status == "Em Andamento"`
#[must_use]
pub fn count_em_andamento(records: &[ProjectRecord]) -> usize {
    count_where(records, |r| r.status.as_deref() == Some(labels::EM_ANDAMENTO))
}

/// `Status == "Backlog Priorizado"`
#[must_use]
pub fn count_backlog_priorizado(records: &[ProjectRecord]) -> usize {
    count_where(records, is_backlog)
}

/// `Status de ideação` is `Recente` or `Rever`
#[must_use]
pub fn count_em_ideacao(records: &[ProjectRecord]) -> usize {
    count_where(records, |r| {
        matches!(r.status_ideacao.as_deref(), Some(labels::RECENTE | labels::REVER))
    })
}

/// `Data de término` inside the clock's current month and year
///
/// Missing or unparseable dates are not counted.
#[must_use]
pub fn count_entregas_do_mes(records: &[ProjectRecord], clock: &dyn Clock) -> usize {
    let today = clock.today();
    count_where(records, |r| {
        r.date(FieldKey::DataTermino)
            .is_some_and(|d| d.year() == today.year() && d.month() == today.month())
    })
}

/// The eight dashboard counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// [`total_projetos`]
    pub total: usize,
    /// [`count_no_prazo`]
    pub no_prazo: usize,
    /// [`count_atrasado`]
    pub atrasado: usize,
    /// [`count_em_risco`]
    pub em_risco: usize,
    /// [`count_em_andamento`]
    pub em_andamento: usize,
    /// [`count_backlog_priorizado`]
    pub backlog: usize,
    /// [`count_em_ideacao`]
    pub ideacao: usize,
    /// [`count_entregas_do_mes`]
    pub entregas_mes: usize,
}

impl Totals {
    /// Compute every counter from scratch
    #[must_use]
    pub fn compute(records: &[ProjectRecord], clock: &dyn Clock) -> Self {
        Self {
            total: total_projetos(records),
            no_prazo: count_no_prazo(records),
            atrasado: count_atrasado(records),
            em_risco: count_em_risco(records),
            em_andamento: count_em_andamento(records),
            backlog: count_backlog_priorizado(records),
            ideacao: count_em_ideacao(records),
            entregas_mes: count_entregas_do_mes(records, clock),
        }
    }
}
