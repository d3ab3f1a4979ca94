//! Store error types

use thiserror::Error;

/// Errors surfaced by store operations, split along the three classes
/// callers treat differently: validation, lookup, and I/O.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid party size '{0}': must be a positive whole number")]
    InvalidPartySize(String),

    #[error("invalid reservation time '{0}': expected MM-DD-YYYY HH:MM")]
    InvalidTime(String),

    #[error("no reservation at position {0}")]
    InvalidPosition(usize),

    /// The mutation that triggered the write stays applied in memory;
    /// only the file is out of date.
    #[error("failed to write reservations to {path}: {source}")]
    Persist {
        path: String,
        #[source]
        source: csv::Error,
    },
}

impl StoreError {
    /// Validation and lookup errors abort the operation; persist errors do not.
    pub fn is_persist(&self) -> bool {
        matches!(self, StoreError::Persist { .. })
    }
}
