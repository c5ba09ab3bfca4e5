//! Enumerated values shared with the tracker
//!
//! Classification compares against these byte-for-byte.

/// `Status` of a queued, ranked project ready for execution
pub const BACKLOG_PRIORIZADO: &str = "Backlog Priorizado";

/// `Status` of a project under execution
pub const EM_ANDAMENTO: &str = "Em Andamento";

/// `Status de prazo`: on time
pub const NO_PRAZO: &str = "No prazo";

/// `Status de prazo`: at risk
pub const EM_RISCO: &str = "Em risco";

/// `Status de prazo`: late
pub const ATRASADO: &str = "Atrasado";

/// `Status de ideação`: recently proposed
pub const RECENTE: &str = "Recente";

/// `Status de ideação`: flagged for review
pub const REVER: &str = "Rever";

/// General fallback for a missing field
pub const NAO_INFORMADO: &str = "Não informado";

/// Fallback owner bucket
pub const SEM_RESPONSAVEL: &str = "Sem Responsável";

/// Rank used for records without `PosicaoBacklog`
pub const DEFAULT_BACKLOG_POSITION: i64 = 999;
