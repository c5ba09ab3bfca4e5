//! Error types for record ingest
//!
//! Derivations over records never fail; errors only exist at the ingest boundary.

/// Errors raised while turning tracker payloads into records
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Payload is not valid JSON, or a record is not an object
    #[error("invalid record payload: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Two records share the same `ID`
    #[error("duplicate record id: '{0}'")]
    DuplicateId(String),

    /// Field name is not part of the record schema
    #[error("unknown record field: '{0}'")]
    UnknownField(String),
}

impl ModelError {
    /// Check if the error came from malformed input rather than a schema violation
    #[inline]
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::InvalidJson(e) if e.is_syntax() || e.is_eof())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_id_display() {
        let err = ModelError::DuplicateId("42".to_string());
        assert_eq!(err.to_string(), "duplicate record id: '42'");
    }

    #[test]
    fn syntax_error_detected() {
        let err: ModelError = serde_json::from_str::<serde_json::Value>("[{")
            .unwrap_err()
            .into();
        assert!(err.is_syntax());
        assert!(!ModelError::UnknownField("x".into()).is_syntax());
    }
}
