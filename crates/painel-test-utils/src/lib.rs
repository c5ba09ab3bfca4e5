//! Testing utilities for Painel workspace
//!
//! Shared record builders, fixtures, and proptest strategies.

#![allow(missing_docs)]

use painel_model::ProjectRecord;
use proptest::prelude::*;
use serde_json::Value;

/// Fluent builder over [`ProjectRecord`]
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    record: ProjectRecord,
}

macro_rules! text_setters {
    ($($name:ident => $field:ident),* $(,)?) => {
        $(
            #[must_use]
            pub fn $name(mut self, value: &str) -> Self {
                self.record.$field = Some(value.to_string());
                self
            }
        )*
    };
}

impl RecordBuilder {
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self {
            record: ProjectRecord::new(id),
        }
    }

    text_setters! {
        titulo => titulo,
        status => status,
        prioridade => prioridade,
        area => area,
        squad => squad,
        grupo_solicitante => grupo_solicitante,
        responsavel => responsavel,
        status_prazo => status_prazo,
        status_ideacao => status_ideacao,
        data_criacao => data_criacao,
        data_inicio => data_inicio,
        data_termino => data_termino,
        data_conclusao => data_conclusao,
    }

    #[must_use]
    pub fn posicao(mut self, position: i64) -> Self {
        self.record.posicao_backlog = Some(position);
        self
    }

    #[must_use]
    pub fn extra(mut self, key: &str, value: Value) -> Self {
        self.record.extra.insert(key.to_string(), value);
        self
    }

    #[must_use]
    pub fn build(self) -> ProjectRecord {
        self.record
    }
}

/// IDs of a collection, in order
#[must_use]
pub fn ids(records: &[ProjectRecord]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}

/// Two ranked backlog items owned by Ana plus one in-progress project
#[must_use]
pub fn backlog_scenario() -> Vec<ProjectRecord> {
    vec![
        RecordBuilder::new("1")
            .status("Backlog Priorizado")
            .posicao(2)
            .responsavel("Ana")
            .build(),
        RecordBuilder::new("2")
            .status("Backlog Priorizado")
            .posicao(1)
            .responsavel("Ana")
            .build(),
        RecordBuilder::new("3").status("Em Andamento").build(),
    ]
}

/// Deadline health `["No prazo", "Atrasado", "Em risco", "Atrasado"]`
#[must_use]
pub fn deadline_scenario() -> Vec<ProjectRecord> {
    ["No prazo", "Atrasado", "Em risco", "Atrasado"]
        .iter()
        .enumerate()
        .map(|(i, prazo)| {
            RecordBuilder::new(&(i + 1).to_string())
                .status_prazo(prazo)
                .build()
        })
        .collect()
}

/// Mixed portfolio covering every workflow stage, with a few malformed records
#[must_use]
pub fn sample_portfolio() -> Vec<ProjectRecord> {
    vec![
        RecordBuilder::new("p1")
            .titulo("Portal do cliente")
            .status("Em Andamento")
            .prioridade("Alta")
            .area("Tecnologia")
            .squad("Canais")
            .grupo_solicitante("Diretoria Comercial")
            .responsavel("Ana")
            .status_prazo("No prazo")
            .data_criacao("2025-05-12")
            .data_termino("2025-05-30")
            .build(),
        RecordBuilder::new("p2")
            .titulo("Conciliação bancária")
            .status("Backlog Priorizado")
            .prioridade("Crítica")
            .area("Financeiro")
            .squad("Pagamentos")
            .responsavel("Bruno")
            .posicao(1)
            .status_prazo("Em risco")
            .data_criacao("2025-04-02")
            .build(),
        RecordBuilder::new("p3")
            .titulo("Nova esteira de crédito")
            .status("Backlog Priorizado")
            .prioridade("Média")
            .area("Financeiro")
            .squad("Crédito")
            .responsavel("Ana")
            .posicao(3)
            .status_prazo("Atrasado")
            .data_criacao("2025-05-17T09:30:00")
            .build(),
        RecordBuilder::new("p4")
            .titulo("Chatbot")
            .status("Ideação")
            .status_ideacao("Recente")
            .area("Tecnologia")
            .data_criacao("2025-05-16")
            .build(),
        RecordBuilder::new("p5")
            .titulo("Migração de ERP")
            .status("Entregue")
            .prioridade("Alta")
            .area("Tecnologia")
            .squad("Canais")
            .data_termino("2025-05-02")
            .data_conclusao("2025-05-02")
            .build(),
        RecordBuilder::new("p6")
            .titulo("Painel de risco")
            .status("Backlog Priorizado")
            .prioridade("Baixa")
            .area("Riscos")
            .build(),
        RecordBuilder::new("p7")
            .titulo("Registro sem dados")
            .status("   ")
            .data_criacao("ontem")
            .data_termino("31/05/2025")
            .build(),
        RecordBuilder::new("p8")
            .titulo("Homologação do app")
            .status("Em homologação")
            .squad("Canais")
            .status_ideacao("Rever")
            .status_prazo("Atrasado")
            .data_termino("2024-05-20")
            .build(),
    ]
}

fn arb_label(choices: &'static [&'static str]) -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        1 => Just(None),
        4 => proptest::sample::select(choices).prop_map(|s| Some(s.to_string())),
    ]
}

/// Arbitrary record body; the ID is assigned by [`arb_records`]
pub fn arb_record() -> impl Strategy<Value = ProjectRecord> {
    const STATUS: &[&str] = &[
        "Backlog Priorizado",
        "Em Andamento",
        "Entregue",
        "Concluído",
        "Ideação",
        "Cancelado",
        "Bloqueado",
        "em homologação",
        "BACKLOG PRIORIZADO",
        "",
        "  ",
    ];
    const PRIORIDADE: &[&str] = &["Alta", "Média", "Baixa", "Crítica", "alta", ""];
    const AREA: &[&str] = &["TI", "RH", "Financeiro", " TI ", ""];
    const OWNER: &[&str] = &["Ana", "Bruno", "Carla", " ", ""];
    const PRAZO: &[&str] = &["No prazo", "Em risco", "Atrasado", "no prazo", ""];
    const IDEACAO: &[&str] = &["Recente", "Rever", "Arquivada", ""];
    const DATES: &[&str] = &[
        "2025-05-01",
        "2025-05-17",
        "2025-05-31",
        "2025-04-30",
        "2024-05-17",
        "2025-05-18T08:00:00Z",
        "ontem",
        "",
    ];

    (
        arb_label(STATUS),
        arb_label(PRIORIDADE),
        arb_label(AREA),
        arb_label(AREA),
        arb_label(AREA),
        arb_label(OWNER),
        proptest::option::of(0i64..8),
        arb_label(PRAZO),
        arb_label(IDEACAO),
        arb_label(DATES),
        arb_label(DATES),
    )
        .prop_map(
            |(
                status,
                prioridade,
                area,
                squad,
                grupo_solicitante,
                responsavel,
                posicao_backlog,
                status_prazo,
                status_ideacao,
                data_criacao,
                data_termino,
            )| ProjectRecord {
                status,
                prioridade,
                area,
                squad,
                grupo_solicitante,
                responsavel,
                posicao_backlog,
                status_prazo,
                status_ideacao,
                data_criacao,
                data_termino,
                ..ProjectRecord::default()
            },
        )
}

/// Arbitrary collection with unique IDs
pub fn arb_records(max_len: usize) -> impl Strategy<Value = Vec<ProjectRecord>> {
    proptest::collection::vec(arb_record(), 0..max_len).prop_map(|records| {
        records
            .into_iter()
            .enumerate()
            .map(|(i, mut record)| {
                record.id = format!("r{i}");
                record
            })
            .collect()
    })
}
