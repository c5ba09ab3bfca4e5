//! Record field keys
//!
//! The tracker addresses fields by accented Portuguese names. [`FieldKey`] enumerates every
//! key the dashboard understands and maps it one-to-one onto its wire name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Recognised project record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldKey {
    /// `ID`
    #[serde(rename = "ID")]
    Id,
    /// `Título`
    #[serde(rename = "Título")]
    Titulo,
    /// `Status`
    #[serde(rename = "Status")]
    Status,
    /// `Prioridade`
    #[serde(rename = "Prioridade")]
    Prioridade,
    /// `Área`
    #[serde(rename = "Área")]
    Area,
    /// `Squad`
    #[serde(rename = "Squad")]
    Squad,
    /// `Grupo Solicitante`
    #[serde(rename = "Grupo Solicitante")]
    GrupoSolicitante,
    /// `Responsável`
    #[serde(rename = "Responsável")]
    Responsavel,
    /// `PosicaoBacklog`
    #[serde(rename = "PosicaoBacklog")]
    PosicaoBacklog,
    /// `Status de prazo`
    #[serde(rename = "Status de prazo")]
    StatusPrazo,
    /// `Status de ideação`
    #[serde(rename = "Status de ideação")]
    StatusIdeacao,
    /// `Data de criação`
    #[serde(rename = "Data de criação")]
    DataCriacao,
    /// `Data de início`
    #[serde(rename = "Data de início")]
    DataInicio,
    /// `Data de término`
    #[serde(rename = "Data de término")]
    DataTermino,
    /// `Data de conclusão`
    #[serde(rename = "Data de conclusão")]
    DataConclusao,
}

impl FieldKey {
    /// Every recognised key, in schema order
    pub const ALL: [FieldKey; 15] = [
        Self::Id,
        Self::Titulo,
        Self::Status,
        Self::Prioridade,
        Self::Area,
        Self::Squad,
        Self::GrupoSolicitante,
        Self::Responsavel,
        Self::PosicaoBacklog,
        Self::StatusPrazo,
        Self::StatusIdeacao,
        Self::DataCriacao,
        Self::DataInicio,
        Self::DataTermino,
        Self::DataConclusao,
    ];

    /// Keys backing the multi-select filter categories
    pub const CATEGORIES: [FieldKey; 5] = [
        Self::Area,
        Self::Status,
        Self::Prioridade,
        Self::Squad,
        Self::GrupoSolicitante,
    ];

    /// Exact key used by the tracker payload
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Titulo => "Título",
            Self::Status => "Status",
            Self::Prioridade => "Prioridade",
            Self::Area => "Área",
            Self::Squad => "Squad",
            Self::GrupoSolicitante => "Grupo Solicitante",
            Self::Responsavel => "Responsável",
            Self::PosicaoBacklog => "PosicaoBacklog",
            Self::StatusPrazo => "Status de prazo",
            Self::StatusIdeacao => "Status de ideação",
            Self::DataCriacao => "Data de criação",
            Self::DataInicio => "Data de início",
            Self::DataTermino => "Data de término",
            Self::DataConclusao => "Data de conclusão",
        }
    }

    /// ASCII identifier, accepted by [`FromStr`] alongside the wire name
    #[must_use]
    pub const fn ident(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Titulo => "titulo",
            Self::Status => "status",
            Self::Prioridade => "prioridade",
            Self::Area => "area",
            Self::Squad => "squad",
            Self::GrupoSolicitante => "grupo_solicitante",
            Self::Responsavel => "responsavel",
            Self::PosicaoBacklog => "posicao_backlog",
            Self::StatusPrazo => "status_prazo",
            Self::StatusIdeacao => "status_ideacao",
            Self::DataCriacao => "data_criacao",
            Self::DataInicio => "data_inicio",
            Self::DataTermino => "data_termino",
            Self::DataConclusao => "data_conclusao",
        }
    }

    /// Check if the field holds a date string
    #[inline]
    #[must_use]
    pub const fn is_date(self) -> bool {
        matches!(
            self,
            Self::DataCriacao | Self::DataInicio | Self::DataTermino | Self::DataConclusao
        )
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for FieldKey {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|key| key.wire_name() == s || key.ident().eq_ignore_ascii_case(s))
            .ok_or_else(|| ModelError::UnknownField(s.to_string()))
    }
}
