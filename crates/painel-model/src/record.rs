//! Project records
//!
//! [`ProjectRecord`] is the unit of data the dashboard derives everything from. Every field
//! except `id` is optional; unrecognised wire keys are kept in `extra` so a record
//! serializes back to the shape it arrived in.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::date::parse_date;
use crate::error::ModelError;
use crate::field::FieldKey;
use crate::lenient;

/// One project as delivered by the tracker
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Unique identifier
    #[serde(rename = "ID", deserialize_with = "lenient::required_text")]
    pub id: String,

    /// Display title
    #[serde(
        rename = "Título",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub titulo: Option<String>,

    /// Free-text workflow stage
    #[serde(
        rename = "Status",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<String>,

    /// Free-text priority label
    #[serde(
        rename = "Prioridade",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub prioridade: Option<String>,

    /// Business area
    #[serde(
        rename = "Área",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub area: Option<String>,

    /// Delivery squad
    #[serde(
        rename = "Squad",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub squad: Option<String>,

    /// Requesting group
    #[serde(
        rename = "Grupo Solicitante",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub grupo_solicitante: Option<String>,

    /// Owner
    #[serde(
        rename = "Responsável",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub responsavel: Option<String>,

    /// Explicit backlog rank, lower is higher priority
    #[serde(
        rename = "PosicaoBacklog",
        default,
        deserialize_with = "lenient::position",
        skip_serializing_if = "Option::is_none"
    )]
    pub posicao_backlog: Option<i64>,

    /// Deadline health: `No prazo`, `Em risco` or `Atrasado`
    #[serde(
        rename = "Status de prazo",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub status_prazo: Option<String>,

    /// Ideation stage marker, e.g. `Recente` or `Rever`
    #[serde(
        rename = "Status de ideação",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub status_ideacao: Option<String>,

    /// Creation date
    #[serde(
        rename = "Data de criação",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub data_criacao: Option<String>,

    /// Start date
    #[serde(
        rename = "Data de início",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub data_inicio: Option<String>,

    /// Planned end date
    #[serde(
        rename = "Data de término",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub data_termino: Option<String>,

    /// Completion date
    #[serde(
        rename = "Data de conclusão",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub data_conclusao: Option<String>,

    /// Keys outside the schema, preserved verbatim
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ProjectRecord {
    /// Create record with only an ID
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Raw value of a field, untrimmed
    ///
    /// `PosicaoBacklog` is rendered as its decimal string.
    #[must_use]
    pub fn text(&self, key: FieldKey) -> Option<Cow<'_, str>> {
        match key {
            FieldKey::Id => Some(Cow::Borrowed(self.id.as_str())),
            FieldKey::Titulo => borrowed(&self.titulo),
            FieldKey::Status => borrowed(&self.status),
            FieldKey::Prioridade => borrowed(&self.prioridade),
            FieldKey::Area => borrowed(&self.area),
            FieldKey::Squad => borrowed(&self.squad),
            FieldKey::GrupoSolicitante => borrowed(&self.grupo_solicitante),
            FieldKey::Responsavel => borrowed(&self.responsavel),
            FieldKey::PosicaoBacklog => self.posicao_backlog.map(|p| Cow::Owned(p.to_string())),
            FieldKey::StatusPrazo => borrowed(&self.status_prazo),
            FieldKey::StatusIdeacao => borrowed(&self.status_ideacao),
            FieldKey::DataCriacao => borrowed(&self.data_criacao),
            FieldKey::DataInicio => borrowed(&self.data_inicio),
            FieldKey::DataTermino => borrowed(&self.data_termino),
            FieldKey::DataConclusao => borrowed(&self.data_conclusao),
        }
    }

    /// Parsed calendar day held by a field, if it holds a parseable date
    #[inline]
    #[must_use]
    pub fn date(&self, key: FieldKey) -> Option<NaiveDate> {
        self.text(key).as_deref().and_then(parse_date)
    }

    /// Backlog rank with `fallback` standing in for a missing position
    #[inline]
    #[must_use]
    pub fn backlog_rank(&self, fallback: i64) -> i64 {
        self.posicao_backlog.unwrap_or(fallback)
    }
}

fn borrowed(value: &Option<String>) -> Option<Cow<'_, str>> {
    value.as_deref().map(Cow::Borrowed)
}

/// Parse a tracker payload (a JSON array of objects) into records
///
/// Field values are read leniently; see the field docs on [`ProjectRecord`].
///
/// # Errors
/// - `ModelError::InvalidJson` if the payload is not an array of objects, or a record lacks `ID`
/// - `ModelError::DuplicateId` if two records share an `ID`
pub fn parse_records(json: &str) -> Result<Vec<ProjectRecord>, ModelError> {
    let records: Vec<ProjectRecord> = serde_json::from_str(json)?;
    ensure_unique_ids(&records)?;
    tracing::debug!("Parsed {} project records", records.len());
    Ok(records)
}

/// Check the collection invariant that every `ID` appears once
///
/// # Errors
/// Returns `ModelError::DuplicateId` naming the first repeated ID
pub fn ensure_unique_ids(records: &[ProjectRecord]) -> Result<(), ModelError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id.as_str()) {
            return Err(ModelError::DuplicateId(record.id.clone()));
        }
    }
    Ok(())
}
