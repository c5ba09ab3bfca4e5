//! Filter predicate engine
//!
//! [`filter_records`] keeps the records that pass every active check of a [`FilterCriteria`]:
//! - each non-empty multi-select category (OR within the category, AND across categories)
//! - the relative period window on `Data de criação`, or
//! - the advanced date comparison when `periodo` is `Filtro Avançado`
//!
//! Criteria are resolved once into a [`FilterPlan`] per call.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use indexmap::IndexSet;
use painel_model::{parse_date, FieldKey, ProjectRecord};
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::config::FilterConfig;
use crate::extract::field_value;

/// Relative date window selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Periodo {
    /// No date constraint
    #[default]
    #[serde(rename = "Todos", alias = "")]
    Todos,
    /// Created today
    #[serde(rename = "Hoje")]
    Hoje,
    /// Created during the current calendar week
    #[serde(rename = "Esta Semana")]
    EstaSemana,
    /// Created during the current calendar month
    #[serde(rename = "Este Mês")]
    EsteMes,
    /// Replace the window with the advanced date comparison
    #[serde(rename = "Filtro Avançado")]
    FiltroAvancado,
}

/// Comparison mode of the advanced date filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateOperator {
    /// Same day as `data1`
    #[serde(rename = "eq", alias = "igual")]
    Eq,
    /// Any day other than `data1`
    #[serde(rename = "neq", alias = "diferente")]
    Neq,
    /// Within `[data1, data2]`, open-ended when a bound is missing
    #[serde(rename = "between", alias = "entre")]
    Between,
}

/// Dashboard filter state
///
/// Created with all-empty defaults; only user interaction changes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// Selected `Área` values
    pub area: IndexSet<String>,
    /// Selected `Status` values
    pub status: IndexSet<String>,
    /// Selected `Prioridade` values
    pub prioridade: IndexSet<String>,
    /// Selected `Squad` values
    pub squad: IndexSet<String>,
    /// Selected `Grupo Solicitante` values
    pub grupo_solicitante: IndexSet<String>,
    /// Relative window or the advanced-filter sentinel
    pub periodo: Periodo,
    /// Date field tested by the advanced filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campo_data: Option<FieldKey>,
    /// Advanced comparison mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operador: Option<DateOperator>,
    /// First bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data1: Option<String>,
    /// Second bound, only used by `between`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data2: Option<String>,
}

impl FilterCriteria {
    /// Create empty criteria
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection set backing a category key
    #[must_use]
    pub fn selection(&self, key: FieldKey) -> Option<&IndexSet<String>> {
        match key {
            FieldKey::Area => Some(&self.area),
            FieldKey::Status => Some(&self.status),
            FieldKey::Prioridade => Some(&self.prioridade),
            FieldKey::Squad => Some(&self.squad),
            FieldKey::GrupoSolicitante => Some(&self.grupo_solicitante),
            _ => None,
        }
    }

    /// Add values to a category selection
    ///
    /// Keys that are not filter categories are ignored.
    #[must_use]
    pub fn with_selection<I, S>(mut self, key: FieldKey, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let target = match key {
            FieldKey::Area => &mut self.area,
            FieldKey::Status => &mut self.status,
            FieldKey::Prioridade => &mut self.prioridade,
            FieldKey::Squad => &mut self.squad,
            FieldKey::GrupoSolicitante => &mut self.grupo_solicitante,
            _ => {
                tracing::warn!("Ignoring selection on non-category field {}", key);
                return self;
            }
        };
        target.extend(values.into_iter().map(Into::into));
        self
    }

    /// With relative period
    #[inline]
    #[must_use]
    pub fn with_periodo(mut self, periodo: Periodo) -> Self {
        self.periodo = periodo;
        self
    }

    /// Switch to the advanced date filter
    #[must_use]
    pub fn with_advanced(
        mut self,
        campo_data: FieldKey,
        operador: DateOperator,
        data1: Option<&str>,
        data2: Option<&str>,
    ) -> Self {
        self.periodo = Periodo::FiltroAvancado;
        self.campo_data = Some(campo_data);
        self.operador = Some(operador);
        self.data1 = data1.map(str::to_string);
        self.data2 = data2.map(str::to_string);
        self
    }

    /// Check if no check is active
    #[must_use]
    pub fn is_empty(&self) -> bool {
        FieldKey::CATEGORIES
            .iter()
            .all(|key| self.selection(*key).map_or(true, IndexSet::is_empty))
            && self.periodo == Periodo::Todos
    }
}

/// Resolved date check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateCheck {
    /// Inclusive window on one date field
    Window {
        field: FieldKey,
        start: NaiveDate,
        end: NaiveDate,
    },
    /// Same day
    On { field: FieldKey, day: NaiveDate },
    /// Any other day
    NotOn { field: FieldKey, day: NaiveDate },
    /// Open-ended inclusive range
    Range {
        field: FieldKey,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
}

impl DateCheck {
    fn matches(self, record: &ProjectRecord) -> bool {
        let field = match self {
            Self::Window { field, .. }
            | Self::On { field, .. }
            | Self::NotOn { field, .. }
            | Self::Range { field, .. } => field,
        };
        let Some(date) = record.date(field) else {
            return false;
        };
        match self {
            Self::Window { start, end, .. } => start <= date && date <= end,
            Self::On { day, .. } => date == day,
            Self::NotOn { day, .. } => date != day,
            Self::Range { from, to, .. } => {
                from.map_or(true, |from| from <= date) && to.map_or(true, |to| date <= to)
            }
        }
    }
}

/// Criteria compiled against a reference day
#[derive(Debug, Clone)]
pub struct FilterPlan<'c> {
    categories: Vec<(FieldKey, &'c IndexSet<String>)>,
    date: Option<DateCheck>,
}

impl<'c> FilterPlan<'c> {
    /// Compile criteria, resolving period windows against `clock`
    #[must_use]
    pub fn compile(criteria: &'c FilterCriteria, config: &FilterConfig, clock: &dyn Clock) -> Self {
        let categories = FieldKey::CATEGORIES
            .into_iter()
            .filter_map(|key| criteria.selection(key).map(|set| (key, set)))
            .filter(|(_, set)| !set.is_empty())
            .collect();

        let date = match criteria.periodo {
            Periodo::Todos => None,
            Periodo::Hoje | Periodo::EstaSemana | Periodo::EsteMes => {
                let (start, end) = period_window(criteria.periodo, clock.today(), config.week_start);
                Some(DateCheck::Window {
                    field: FieldKey::DataCriacao,
                    start,
                    end,
                })
            }
            Periodo::FiltroAvancado => advanced_check(criteria),
        };

        Self { categories, date }
    }

    /// Number of active checks
    #[inline]
    #[must_use]
    pub fn active_checks(&self) -> usize {
        self.categories.len() + usize::from(self.date.is_some())
    }

    /// Check a single record against every active check
    #[must_use]
    pub fn matches(&self, record: &ProjectRecord) -> bool {
        let categories_pass = self.categories.iter().all(|(key, selected)| {
            field_value(record, *key).is_some_and(|value| selected.contains(value.as_ref()))
        });
        categories_pass && self.date.map_or(true, |check| check.matches(record))
    }

    /// Keep matching records, cloned, in input order
    #[must_use]
    pub fn apply(&self, records: &[ProjectRecord]) -> Vec<ProjectRecord> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}

/// Filter a collection with the default [`FilterConfig`]
#[must_use]
pub fn filter_records(
    records: &[ProjectRecord],
    criteria: &FilterCriteria,
    clock: &dyn Clock,
) -> Vec<ProjectRecord> {
    filter_records_with(records, criteria, &FilterConfig::default(), clock)
}

/// Filter a collection
///
/// Pure: the input is not modified and the result owns fresh copies.
#[must_use]
pub fn filter_records_with(
    records: &[ProjectRecord],
    criteria: &FilterCriteria,
    config: &FilterConfig,
    clock: &dyn Clock,
) -> Vec<ProjectRecord> {
    let plan = FilterPlan::compile(criteria, config, clock);
    if plan.active_checks() == 0 {
        return records.to_vec();
    }

    let filtered = plan.apply(records);
    tracing::debug!(
        "Filter kept {} of {} records ({} active checks)",
        filtered.len(),
        records.len(),
        plan.active_checks()
    );
    filtered
}

/// Inclusive `[start, end]` window containing `today`
#[must_use]
pub fn period_window(periodo: Periodo, today: NaiveDate, week_start: Weekday) -> (NaiveDate, NaiveDate) {
    match periodo {
        Periodo::EstaSemana => {
            let offset = (7 + today.weekday().num_days_from_monday()
                - week_start.num_days_from_monday())
                % 7;
            let start = today
                .checked_sub_days(Days::new(u64::from(offset)))
                .unwrap_or(today);
            let end = start.checked_add_days(Days::new(6)).unwrap_or(today);
            (start, end)
        }
        Periodo::EsteMes => {
            let start = today.with_day(1).unwrap_or(today);
            let end = start
                .checked_add_months(chrono::Months::new(1))
                .and_then(|next| next.pred_opt())
                .unwrap_or(today);
            (start, end)
        }
        Periodo::Hoje | Periodo::Todos | Periodo::FiltroAvancado => (today, today),
    }
}

fn parse_bound(name: &str, raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?;
    let parsed = parse_date(raw);
    if parsed.is_none() && !raw.trim().is_empty() {
        tracing::warn!("Ignoring unparseable {} bound: {:?}", name, raw);
    }
    parsed
}

fn advanced_check(criteria: &FilterCriteria) -> Option<DateCheck> {
    let (Some(field), Some(operador)) = (criteria.campo_data, criteria.operador) else {
        tracing::warn!("Advanced date filter incomplete, no date constraint applied");
        return None;
    };
    let data1 = parse_bound("data1", criteria.data1.as_deref());
    let data2 = parse_bound("data2", criteria.data2.as_deref());

    let check = match (operador, data1, data2) {
        (DateOperator::Eq, Some(day), _) => DateCheck::On { field, day },
        (DateOperator::Neq, Some(day), _) => DateCheck::NotOn { field, day },
        (DateOperator::Between, from, to) if from.is_some() || to.is_some() => {
            DateCheck::Range { field, from, to }
        }
        _ => {
            tracing::warn!(
                "Advanced date filter {:?} on {} has no usable bound, no date constraint applied",
                operador,
                field
            );
            return None;
        }
    };
    Some(check)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use painel_test_utils::{ids, RecordBuilder};
    use pretty_assertions::assert_eq;

    fn clock() -> FixedClock {
        // Saturday
        FixedClock::ymd(2025, 5, 17).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn records() -> Vec<ProjectRecord> {
        vec![
            RecordBuilder::new("a")
                .area("TI")
                .status("Em Andamento")
                .data_criacao("2025-05-17")
                .data_termino("2025-06-01")
                .build(),
            RecordBuilder::new("b")
                .area("RH")
                .status("Em Andamento")
                .data_criacao("2025-05-12")
                .data_termino("2025-05-20")
                .build(),
            RecordBuilder::new("c")
                .area("TI")
                .status("Entregue")
                .data_criacao("2025-05-01")
                .build(),
            RecordBuilder::new("d")
                .area(" TI ")
                .data_criacao("2025-04-30")
                .data_termino("nunca")
                .build(),
            RecordBuilder::new("e").data_criacao("lixo").build(),
        ]
    }

    fn run(criteria: &FilterCriteria) -> Vec<String> {
        filter_records(&records(), criteria, &clock())
            .iter()
            .map(|r| r.id.clone())
            .collect()
    }

    #[test]
    fn empty_criteria_is_identity() {
        let data = records();
        assert_eq!(filter_records(&data, &FilterCriteria::new(), &clock()), data);
        assert!(FilterCriteria::new().is_empty());
    }

    #[test]
    fn category_or_within() {
        let criteria = FilterCriteria::new().with_selection(FieldKey::Area, ["RH", "TI"]);
        assert_eq!(run(&criteria), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn category_and_across() {
        let criteria = FilterCriteria::new()
            .with_selection(FieldKey::Area, ["TI"])
            .with_selection(FieldKey::Status, ["Em Andamento"]);
        assert_eq!(run(&criteria), vec!["a"]);
    }

    #[test]
    fn missing_value_never_matches() {
        let criteria = FilterCriteria::new().with_selection(FieldKey::Status, ["Entregue"]);
        assert_eq!(run(&criteria), vec!["c"]);
    }

    #[test]
    fn selection_on_non_category_ignored() {
        let criteria = FilterCriteria::new().with_selection(FieldKey::Titulo, ["x"]);
        assert!(criteria.is_empty());
    }

    #[test]
    fn periodo_hoje() {
        let criteria = FilterCriteria::new().with_periodo(Periodo::Hoje);
        assert_eq!(run(&criteria), vec!["a"]);
    }

    #[test]
    fn periodo_esta_semana_monday_start() {
        let criteria = FilterCriteria::new().with_periodo(Periodo::EstaSemana);
        assert_eq!(run(&criteria), vec!["a", "b"]);
    }

    #[test]
    fn periodo_esta_semana_custom_start() {
        // Tuesday start puts 2025-05-12 in the previous week
        let config = FilterConfig {
            week_start: Weekday::Tue,
        };
        let criteria = FilterCriteria::new().with_periodo(Periodo::EstaSemana);
        let kept = filter_records_with(&records(), &criteria, &config, &clock());
        assert_eq!(ids(&kept), vec!["a"]);
    }

    #[test]
    fn periodo_este_mes() {
        let criteria = FilterCriteria::new().with_periodo(Periodo::EsteMes);
        assert_eq!(run(&criteria), vec!["a", "b", "c"]);
    }

    #[test]
    fn window_bounds() {
        let today = day(2025, 5, 17);
        assert_eq!(
            period_window(Periodo::EstaSemana, today, Weekday::Mon),
            (day(2025, 5, 12), day(2025, 5, 18))
        );
        assert_eq!(
            period_window(Periodo::EstaSemana, today, Weekday::Sun),
            (day(2025, 5, 11), day(2025, 5, 17))
        );
        assert_eq!(
            period_window(Periodo::EsteMes, day(2024, 2, 10), Weekday::Mon),
            (day(2024, 2, 1), day(2024, 2, 29))
        );
        assert_eq!(
            period_window(Periodo::EsteMes, day(2025, 12, 31), Weekday::Mon),
            (day(2025, 12, 1), day(2025, 12, 31))
        );
        assert_eq!(period_window(Periodo::Hoje, today, Weekday::Mon), (today, today));
    }

    #[test]
    fn advanced_eq() {
        let criteria = FilterCriteria::new().with_advanced(
            FieldKey::DataTermino,
            DateOperator::Eq,
            Some("2025-05-20"),
            None,
        );
        assert_eq!(run(&criteria), vec!["b"]);
    }

    #[test]
    fn advanced_neq_excludes_missing_dates() {
        let criteria = FilterCriteria::new().with_advanced(
            FieldKey::DataTermino,
            DateOperator::Neq,
            Some("2025-05-20"),
            None,
        );
        assert_eq!(run(&criteria), vec!["a"]);
    }

    #[test]
    fn advanced_between_inclusive() {
        let criteria = FilterCriteria::new().with_advanced(
            FieldKey::DataCriacao,
            DateOperator::Between,
            Some("2025-05-01"),
            Some("2025-05-12"),
        );
        assert_eq!(run(&criteria), vec!["b", "c"]);
    }

    #[test]
    fn advanced_between_open_ended() {
        let criteria = FilterCriteria::new().with_advanced(
            FieldKey::DataCriacao,
            DateOperator::Between,
            Some("2025-05-12"),
            None,
        );
        assert_eq!(run(&criteria), vec!["a", "b"]);

        let upper_only = FilterCriteria::new().with_advanced(
            FieldKey::DataCriacao,
            DateOperator::Between,
            None,
            Some("2025-05-01"),
        );
        assert_eq!(run(&upper_only), vec!["c", "d"]);
    }

    #[test]
    fn advanced_replaces_period() {
        // Only the advanced comparison applies, not a window
        let criteria = FilterCriteria::new().with_advanced(
            FieldKey::DataCriacao,
            DateOperator::Eq,
            Some("2025-04-30"),
            None,
        );
        assert_eq!(run(&criteria), vec!["d"]);
    }

    #[test]
    fn advanced_incomplete_is_inactive() {
        let mut criteria = FilterCriteria::new().with_periodo(Periodo::FiltroAvancado);
        assert_eq!(run(&criteria).len(), 5);

        criteria.campo_data = Some(FieldKey::DataCriacao);
        criteria.operador = Some(DateOperator::Eq);
        criteria.data1 = Some("amanhã".to_string());
        assert_eq!(run(&criteria).len(), 5);
    }

    #[test]
    fn advanced_combined_with_category() {
        let criteria = FilterCriteria::new()
            .with_selection(FieldKey::Area, ["TI"])
            .with_advanced(
                FieldKey::DataCriacao,
                DateOperator::Between,
                Some("2025-05-01"),
                None,
            );
        assert_eq!(run(&criteria), vec!["a", "c"]);
    }

    #[test]
    fn deserialize_ui_payload() {
        let criteria: FilterCriteria = serde_json::from_str(
            r#"{
                "area": ["TI"],
                "grupoSolicitante": [],
                "periodo": "Filtro Avançado",
                "campoData": "Data de término",
                "operador": "entre",
                "data1": "2025-05-01",
                "data2": "2025-05-31"
            }"#,
        )
        .unwrap();

        assert_eq!(criteria.periodo, Periodo::FiltroAvancado);
        assert_eq!(criteria.campo_data, Some(FieldKey::DataTermino));
        assert_eq!(criteria.operador, Some(DateOperator::Between));
        assert!(criteria.status.is_empty());
    }

    #[test]
    fn deserialize_periodo_aliases() {
        let blank: Periodo = serde_json::from_str("\"\"").unwrap();
        assert_eq!(blank, Periodo::Todos);
        let month: Periodo = serde_json::from_str("\"Este Mês\"").unwrap();
        assert_eq!(month, Periodo::EsteMes);
        let op: DateOperator = serde_json::from_str("\"diferente\"").unwrap();
        assert_eq!(op, DateOperator::Neq);
    }

    #[test]
    fn input_not_mutated() {
        let data = records();
        let snapshot = data.clone();
        let criteria = FilterCriteria::new().with_selection(FieldKey::Area, ["RH"]);
        let _ = filter_records(&data, &criteria, &clock());
        assert_eq!(data, snapshot);
    }
}
