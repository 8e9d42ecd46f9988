//! KnowledgeStore trait definition.
//!
//! This trait is the only boundary between the harness and the store under
//! test. Every call is blocking; its wall-clock duration is what the harness
//! measures as latency.

use crate::error::{ConnectivityError, QueryError, WriteError};
use crate::record::{Row, SyntheticRecord};
use serde::{Deserialize, Serialize};

/// Default number of rows a keyword search returns.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Trait for the record store exercised by the harness.
///
/// # Usage Pattern
///
/// Harness stages are generic over the store:
///
/// ```ignore
/// pub fn run<S: KnowledgeStore + ?Sized>(&mut self, store: &mut S) -> LoaderAggregate {
///     store.write(record)?;
/// }
/// ```
pub trait KnowledgeStore {
    /// Short description used in logs and error messages.
    fn describe(&self) -> String;

    /// Check that the store is reachable.
    fn ping(&self) -> Result<(), ConnectivityError>;

    /// Insert one record. Ownership of the record moves to the store.
    fn write(&mut self, record: SyntheticRecord) -> Result<(), WriteError>;

    /// Execute a read query and return the matching rows.
    fn query(&self, text: &str, params: &QueryParams) -> Result<Vec<Row>, QueryError>;

    /// Count the stored records matching `predicate`.
    fn count(&self, predicate: &Predicate) -> Result<u64, QueryError>;

    /// Group stored records by `column` and count each group.
    ///
    /// Groups are returned in descending count order (ties by value), at most
    /// `limit` of them when a limit is given. Records with an empty or absent
    /// value for `column` are not grouped.
    fn group_count(
        &self,
        column: Column,
        limit: Option<usize>,
    ) -> Result<Vec<(String, u64)>, QueryError>;
}

/// Record filters understood by [`KnowledgeStore::count`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    /// Every stored record.
    All,
    /// Title, authors or abstract empty or absent.
    MissingRequiredField,
    /// Citation count below zero.
    NegativeCitationCount,
}

/// Groupable columns for [`KnowledgeStore::group_count`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Title,
    Category,
    Field,
}

/// Result ordering for a read query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderBy {
    /// Store order.
    #[default]
    Natural,
    /// Most cited first.
    CitationsDesc,
}

/// Parameters accompanying a query text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    /// Case-insensitive term matched against title, abstract and field.
    /// `None` matches every record.
    pub keyword: Option<String>,
    /// Maximum number of rows to return.
    pub limit: Option<usize>,
    pub order_by: OrderBy,
}

impl QueryParams {
    /// Keyword search derived from a natural-language query.
    ///
    /// The last word of the text (stripped of punctuation) becomes the
    /// search term; results are ordered by citations and capped at
    /// [`DEFAULT_SEARCH_LIMIT`].
    pub fn keyword_search(text: &str) -> Self {
        let keyword = text
            .split_whitespace()
            .last()
            .map(|word| {
                word.trim_matches(|c: char| !c.is_alphanumeric())
                    .to_string()
            })
            .filter(|word| !word.is_empty());

        Self {
            keyword,
            limit: Some(DEFAULT_SEARCH_LIMIT),
            order_by: OrderBy::CitationsDesc,
        }
    }

    /// Unfiltered read of at most `limit` rows.
    pub fn sample(limit: usize) -> Self {
        Self {
            keyword: None,
            limit: Some(limit),
            order_by: OrderBy::Natural,
        }
    }
}
