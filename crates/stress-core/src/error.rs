//! Error taxonomy for store operations and generated records.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// The store could not be reached. Fatal to a harness run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Store '{store}' is unreachable: {reason}")]
pub struct ConnectivityError {
    /// Store description (name, path or endpoint).
    pub store: String,
    /// Why the store is unreachable.
    pub reason: String,
}

impl ConnectivityError {
    pub fn new(store: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            store: store.into(),
            reason: reason.into(),
        }
    }
}

/// A single record failed to write.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WriteError {
    /// The store refused this record. Only this record is affected.
    #[error("Record {id} rejected: {reason}")]
    Rejected { id: String, reason: String },

    /// The store stopped accepting writes. The rest of the batch is lost.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl WriteError {
    /// Whether the loader may continue with the next record of the batch.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, WriteError::Rejected { .. })
    }
}

/// A read query or aggregate check failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The store reported an error while executing the query.
    #[error("Query failed: {0}")]
    Failed(String),

    /// The store could not read its data.
    #[error("Read error: {0}")]
    Read(String),

    /// A stored document could not be decoded.
    #[error("Malformed document at line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

/// A generated record violates an invariant. Indicates a generator bug.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Record {id} has negative citation count {value}")]
    NegativeCitationCount { id: Uuid, value: i64 },

    #[error("Record {id} has publication date {date} outside the window")]
    DateOutOfWindow { id: Uuid, date: NaiveDate },

    #[error("Record {id} has illegal {field} value '{value}'")]
    IllegalValue {
        id: Uuid,
        field: &'static str,
        value: String,
    },

    #[error("Record {id} has an empty required field")]
    EmptyField { id: Uuid },
}
