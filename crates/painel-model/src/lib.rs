//! Painel Model
//!
//! Typed schema for the project records pulled from the external tracker.
//!
//! # Overview
//!
//! - **ProjectRecord**: one project, with every recognised wire key mapped to an ASCII field
//! - **FieldKey**: enumerates the recognised keys and their exact (accented) wire names
//! - **labels**: the byte-exact enumerated values the dashboard classifies on
//! - **parse_records**: lenient JSON ingest that enforces unique IDs
//!
//! # Example
//!
//! ```rust
//! use painel_model::{parse_records, FieldKey};
//!
//! let records = parse_records(r#"[{"ID": 7, "Responsável": "Ana", "PosicaoBacklog": "2"}]"#).unwrap();
//!
//! assert_eq!(records[0].id, "7");
//! assert_eq!(records[0].posicao_backlog, Some(2));
//! assert_eq!(records[0].text(FieldKey::Responsavel).as_deref(), Some("Ana"));
//! ```

#![warn(missing_docs)]

pub mod date;
pub mod error;
pub mod field;
pub mod labels;
pub mod record;

mod lenient;

// Re-exports
pub use date::parse_date;
pub use error::ModelError;
pub use field::FieldKey;
pub use record::{ensure_unique_ids, parse_records, ProjectRecord};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with project records
    pub use crate::{labels, parse_date, parse_records, FieldKey, ModelError, ProjectRecord};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
