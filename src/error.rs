//! Crate error type.
//!
//! A single `NotFound` kind covers every failed lookup: unknown
//! professional, patient, or department keys as well as queries that match
//! nothing. Lookups are caller-input problems, raised synchronously and
//! never retried. The import readers add I/O and record-format kinds on
//! top.

/// Result alias used throughout the crate.
pub type EmergencyResult<T> = Result<T, EmergencyError>;

/// Errors raised by the intake engine.
#[derive(Debug, thiserror::Error)]
pub enum EmergencyError {
    /// A keyed lookup or filter query matched nothing.
    #[error("no matching record found")]
    NotFound,

    /// The import source was unavailable or unreadable.
    #[error("import source unreadable: {0}")]
    Io(#[from] std::io::Error),

    /// An import record was structurally malformed.
    #[error("malformed import record: {0}")]
    Import(#[from] csv::Error),

    /// A numeric import field failed to parse.
    #[error("malformed numeric field: {0}")]
    Field(#[from] std::num::ParseIntError),
}
