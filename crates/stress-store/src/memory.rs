//! In-memory knowledge store.

use crate::eval;
use stress_core::{
    Column, ConnectivityError, KnowledgeStore, Predicate, QueryError, QueryParams, Row,
    StoredDocument, SyntheticRecord, WriteError,
};

/// Store keeping every document in a `Vec`.
///
/// The store can be switched offline to simulate an outage: `ping` fails,
/// writes return [`WriteError::Unavailable`] and reads fail.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    documents: Vec<StoredDocument>,
    offline: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a raw document, bypassing the write path.
    ///
    /// Lets tests seed data the generator would never produce.
    pub fn insert_document(&mut self, document: StoredDocument) {
        self.documents.push(document);
    }

    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }

    pub fn documents(&self) -> &[StoredDocument] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn check_online(&self) -> Result<(), QueryError> {
        if self.offline {
            Err(QueryError::Failed("memory store is offline".to_string()))
        } else {
            Ok(())
        }
    }
}

impl KnowledgeStore for MemoryStore {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    fn ping(&self) -> Result<(), ConnectivityError> {
        if self.offline {
            return Err(ConnectivityError::new(self.describe(), "store is offline"));
        }
        Ok(())
    }

    fn write(&mut self, record: SyntheticRecord) -> Result<(), WriteError> {
        if self.offline {
            return Err(WriteError::Unavailable("memory store is offline".to_string()));
        }
        self.documents.push(StoredDocument::from(record));
        Ok(())
    }

    fn query(&self, _text: &str, params: &QueryParams) -> Result<Vec<Row>, QueryError> {
        self.check_online()?;
        Ok(eval::select(&self.documents, params))
    }

    fn count(&self, predicate: &Predicate) -> Result<u64, QueryError> {
        self.check_online()?;
        Ok(eval::count(&self.documents, predicate))
    }

    fn group_count(
        &self,
        column: Column,
        limit: Option<usize>,
    ) -> Result<Vec<(String, u64)>, QueryError> {
        self.check_online()?;
        Ok(eval::group_count(&self.documents, column, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stress_generator::RecordGenerator;

    #[test]
    fn test_write_then_read() {
        let mut store = MemoryStore::new();
        let mut generator = RecordGenerator::new(Some(42));

        for record in generator.records(25) {
            store.write(record).unwrap();
        }

        assert_eq!(store.len(), 25);
        assert_eq!(store.count(&Predicate::All).unwrap(), 25);
        assert_eq!(store.count(&Predicate::MissingRequiredField).unwrap(), 0);
        assert_eq!(store.query("", &QueryParams::sample(5)).unwrap().len(), 5);
    }

    #[test]
    fn test_offline_store() {
        let mut store = MemoryStore::new();
        store.set_offline(true);

        assert!(store.ping().is_err());
        assert!(store.count(&Predicate::All).is_err());

        let record = RecordGenerator::new(Some(1)).generate_one();
        let err = store.write(record).unwrap_err();
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_insert_document_bypasses_validation() {
        let mut store = MemoryStore::new();
        store.insert_document(StoredDocument {
            id: "corrupt".to_string(),
            citation_count: -5,
            ..Default::default()
        });

        assert_eq!(store.count(&Predicate::NegativeCitationCount).unwrap(), 1);
        assert_eq!(store.count(&Predicate::MissingRequiredField).unwrap(), 1);
    }
}
