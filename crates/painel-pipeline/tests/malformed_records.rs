//! Malformed tracker payloads degrade results instead of failing.

use painel_model::{parse_records, FieldKey};
use painel_pipeline::{
    DashboardView, DateOperator, FilterCriteria, FixedClock, PipelineConfig, Totals,
};
use pretty_assertions::assert_eq;

const PAYLOAD: &str = r#"[
    {"ID": "1"},
    {"ID": 2, "Status": null, "PosicaoBacklog": "alto", "Responsável": ""},
    {"ID": "3", "Status": "Backlog Priorizado", "PosicaoBacklog": [1], "Data de término": "amanhã"},
    {"ID": "4", "Status": 17, "Status de prazo": false, "Área": {"nested": true}},
    {"ID": "5", "Status": "Backlog Priorizado", "Responsável": "  ", "Data de criação": "2025-13-01"},
    {"ID": "6", "Status": "Entregue", "Data de término": "2025-05-09", "Extra": [1, 2, 3]}
]"#;

fn clock() -> FixedClock {
    FixedClock::ymd(2025, 5, 17).unwrap()
}

#[test]
fn payload_parses() {
    let records = parse_records(PAYLOAD).unwrap();
    assert_eq!(records.len(), 6);
    assert_eq!(records[1].id, "2");
    assert_eq!(records[1].posicao_backlog, None);
    assert_eq!(records[3].status.as_deref(), Some("17"));
    assert_eq!(records[3].status_prazo.as_deref(), Some("false"));
    assert_eq!(records[3].area, None);
}

#[test]
fn totals_shift_not_fail() {
    let records = parse_records(PAYLOAD).unwrap();
    let totals = Totals::compute(&records, &clock());
    assert_eq!(totals.total, 6);
    assert_eq!(totals.backlog, 2);
    assert_eq!(totals.no_prazo, 0);
    assert_eq!(totals.entregas_mes, 1);
}

#[test]
fn dashboard_over_malformed_payload() {
    let records = parse_records(PAYLOAD).unwrap();
    let criteria = FilterCriteria::new().with_advanced(
        FieldKey::DataCriacao,
        DateOperator::Between,
        Some("2025-01-01"),
        None,
    );
    let view = DashboardView::build(&records, &criteria, &PipelineConfig::new(), &clock());

    // Nobody has a valid creation date
    assert!(view.filtered.is_empty());
    assert!(view.top_backlog.is_empty());
    assert!(view.options.status.contains(&"17".to_string()));
}

#[test]
fn missing_owner_and_rank_defaults() {
    let records = parse_records(PAYLOAD).unwrap();
    let view = DashboardView::build(
        &records,
        &FilterCriteria::new(),
        &PipelineConfig::new(),
        &clock(),
    );

    assert_eq!(view.backlog_by_owner.len(), 1);
    assert_eq!(view.backlog_by_owner[0].owner, "Sem Responsável");
    let ids: Vec<_> = view.top_backlog.iter().map(|e| e.record.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "5"]);
}
