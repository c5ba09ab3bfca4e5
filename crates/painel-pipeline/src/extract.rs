//! Field extraction with fallbacks
//!
//! Values are trimmed; a value that is empty after trimming counts as missing.

use std::borrow::Cow;

use painel_model::{labels, FieldKey, ProjectRecord};

/// Trimmed, non-blank value of `key`
#[must_use]
pub fn field_value(record: &ProjectRecord, key: FieldKey) -> Option<Cow<'_, str>> {
    match record.text(key)? {
        Cow::Borrowed(raw) => Some(raw.trim()).filter(|v| !v.is_empty()).map(Cow::Borrowed),
        Cow::Owned(raw) => {
            let trimmed = raw.trim();
            (!trimmed.is_empty()).then(|| Cow::Owned(trimmed.to_string()))
        }
    }
}

/// Value of `key`, or `fallback` when missing or blank
#[inline]
#[must_use]
pub fn field_or<'a>(record: &'a ProjectRecord, key: FieldKey, fallback: &'a str) -> Cow<'a, str> {
    field_value(record, key).unwrap_or(Cow::Borrowed(fallback))
}

/// Value of `key`, or `"Não informado"`
#[inline]
#[must_use]
pub fn field_or_default(record: &ProjectRecord, key: FieldKey) -> Cow<'_, str> {
    field_or(record, key, labels::NAO_INFORMADO)
}

/// Owner of a record, or `"Sem Responsável"`
#[inline]
#[must_use]
pub fn owner(record: &ProjectRecord) -> Cow<'_, str> {
    field_or(record, FieldKey::Responsavel, labels::SEM_RESPONSAVEL)
}
