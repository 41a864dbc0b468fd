use thiserror::Error;

/// Error taxonomy shared by stores, services, and the query engine.
///
/// Absent lookups inside the alert queries are never errors; they
/// surface as empty collections or defaulted fields. `NotFound` is
/// reserved for explicit by-id CRUD operations. `StoreFailure` is
/// fatal and propagates to the caller untouched.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("record not found: {0}")]
    NotFound(String),

    #[error("invalid record: {0}")]
    InvalidRecord(String),

    #[error("store failure: {0}")]
    StoreFailure(String),
}
