//! Unique option extraction
//!
//! Builds the choice lists of the multi-select filters from the values actually present in a
//! collection. Recomputed from scratch on every call.

use indexmap::IndexSet;
use painel_model::{FieldKey, ProjectRecord};
use serde::{Deserialize, Serialize};

use crate::extract::field_value;

/// Distinct trimmed, non-blank values of `key`, in first-encounter order
#[must_use]
pub fn unique_options(records: &[ProjectRecord], key: FieldKey) -> Vec<String> {
    let mut seen: IndexSet<String> = IndexSet::new();
    for record in records {
        if let Some(value) = field_value(record, key) {
            if !seen.contains(value.as_ref()) {
                seen.insert(value.into_owned());
            }
        }
    }
    seen.into_iter().collect()
}

/// [`unique_options`] sorted for display
#[must_use]
pub fn sorted_options(records: &[ProjectRecord], key: FieldKey) -> Vec<String> {
    let mut options = unique_options(records, key);
    options.sort_unstable();
    options
}

/// Choice lists for every multi-select filter category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    /// `Área` choices
    pub area: Vec<String>,
    /// `Status` choices
    pub status: Vec<String>,
    /// `Prioridade` choices
    pub prioridade: Vec<String>,
    /// `Squad` choices
    pub squad: Vec<String>,
    /// `Grupo Solicitante` choices
    pub grupo_solicitante: Vec<String>,
}

impl FilterOptions {
    /// Build sorted choice lists from a collection
    #[must_use]
    pub fn from_records(records: &[ProjectRecord]) -> Self {
        Self {
            area: sorted_options(records, FieldKey::Area),
            status: sorted_options(records, FieldKey::Status),
            prioridade: sorted_options(records, FieldKey::Prioridade),
            squad: sorted_options(records, FieldKey::Squad),
            grupo_solicitante: sorted_options(records, FieldKey::GrupoSolicitante),
        }
    }

    /// Choices for one category key, `None` for keys that are not filter categories
    #[must_use]
    pub fn get(&self, key: FieldKey) -> Option<&[String]> {
        match key {
            FieldKey::Area => Some(&self.area),
            FieldKey::Status => Some(&self.status),
            FieldKey::Prioridade => Some(&self.prioridade),
            FieldKey::Squad => Some(&self.squad),
            FieldKey::GrupoSolicitante => Some(&self.grupo_solicitante),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use painel_test_utils::RecordBuilder;
    use pretty_assertions::assert_eq;

    fn records() -> Vec<ProjectRecord> {
        vec![
            RecordBuilder::new("1").squad("Pagamentos").build(),
            RecordBuilder::new("2").squad("Crédito").build(),
            RecordBuilder::new("3").squad(" Pagamentos ").build(),
            RecordBuilder::new("4").squad("").build(),
            RecordBuilder::new("5").build(),
        ]
    }

    #[test]
    fn unique_in_encounter_order() {
        assert_eq!(
            unique_options(&records(), FieldKey::Squad),
            vec!["Pagamentos".to_string(), "Crédito".to_string()]
        );
    }

    #[test]
    fn sorted_for_display() {
        assert_eq!(
            sorted_options(&records(), FieldKey::Squad),
            vec!["Crédito".to_string(), "Pagamentos".to_string()]
        );
    }

    #[test]
    fn empty_collection() {
        assert!(unique_options(&[], FieldKey::Area).is_empty());
    }

    #[test]
    fn recomputes_on_new_collection() {
        let mut data = records();
        assert_eq!(unique_options(&data, FieldKey::Squad).len(), 2);
        data.push(RecordBuilder::new("6").squad("Seguros").build());
        assert_eq!(unique_options(&data, FieldKey::Squad).len(), 3);
    }

    #[test]
    fn filter_options_all_categories() {
        let data = vec![
            RecordBuilder::new("1")
                .area("TI")
                .status("Em Andamento")
                .prioridade("Alta")
                .grupo_solicitante("Diretoria")
                .build(),
            RecordBuilder::new("2").area("RH").prioridade("Alta").build(),
        ];
        let options = FilterOptions::from_records(&data);

        assert_eq!(options.area, vec!["RH".to_string(), "TI".to_string()]);
        assert_eq!(options.prioridade, vec!["Alta".to_string()]);
        assert!(options.squad.is_empty());
        assert_eq!(options.get(FieldKey::GrupoSolicitante).unwrap(), ["Diretoria"]);
        assert!(options.get(FieldKey::DataTermino).is_none());
    }
}
