//! JSON-Lines file store.
//!
//! One [`StoredDocument`] per line. Writes append to the file; every read
//! scans the whole file.

use crate::eval;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};
use stress_core::{
    Column, ConnectivityError, KnowledgeStore, Predicate, QueryError, QueryParams, Row,
    StoredDocument, SyntheticRecord, WriteError,
};
use tracing::debug;

/// Store backed by a JSONL file.
#[derive(Debug)]
pub struct JsonlStore {
    path: PathBuf,
    writer: Option<File>,
}

impl JsonlStore {
    /// Create a store for `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            writer: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a raw document, bypassing record conversion.
    pub fn append_document(&mut self, document: &StoredDocument) -> Result<(), WriteError> {
        let mut line = serde_json::to_string(document).map_err(|e| WriteError::Rejected {
            id: document.id.clone(),
            reason: e.to_string(),
        })?;
        line.push('\n');

        let location = self.path.display().to_string();
        let file = self.writer()?;
        file.write_all(line.as_bytes())
            .map_err(|e| WriteError::Unavailable(format!("{location}: {e}")))
    }

    fn writer(&mut self) -> Result<&mut File, WriteError> {
        if self.writer.is_none() {
            debug!("Opening {} for append", self.path.display());
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)
                .map_err(|e| WriteError::Unavailable(format!("{}: {e}", self.path.display())))?;
            self.writer = Some(file);
        }
        self.writer
            .as_mut()
            .ok_or_else(|| WriteError::Unavailable("writer not open".to_string()))
    }

    /// Read every document in the file. A missing file holds no documents.
    pub fn load(&self) -> Result<Vec<StoredDocument>, QueryError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(QueryError::Read(format!("{}: {e}", self.path.display()))),
        };

        let mut documents = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| QueryError::Read(e.to_string()))?;
            if line.trim().is_empty() {
                continue;
            }
            let document = serde_json::from_str(&line).map_err(|e| QueryError::Malformed {
                line: index + 1,
                reason: e.to_string(),
            })?;
            documents.push(document);
        }
        Ok(documents)
    }
}

impl KnowledgeStore for JsonlStore {
    fn describe(&self) -> String {
        format!("jsonl:{}", self.path.display())
    }

    fn ping(&self) -> Result<(), ConnectivityError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                return Err(ConnectivityError::new(
                    self.describe(),
                    format!("directory {} does not exist", parent.display()),
                ));
            }
        }
        if self.path.is_dir() {
            return Err(ConnectivityError::new(self.describe(), "path is a directory"));
        }
        if self.path.exists() {
            File::open(&self.path)
                .map_err(|e| ConnectivityError::new(self.describe(), e.to_string()))?;
        }
        Ok(())
    }

    fn write(&mut self, record: SyntheticRecord) -> Result<(), WriteError> {
        self.append_document(&StoredDocument::from(record))
    }

    fn query(&self, _text: &str, params: &QueryParams) -> Result<Vec<Row>, QueryError> {
        Ok(eval::select(&self.load()?, params))
    }

    fn count(&self, predicate: &Predicate) -> Result<u64, QueryError> {
        Ok(eval::count(&self.load()?, predicate))
    }

    fn group_count(
        &self,
        column: Column,
        limit: Option<usize>,
    ) -> Result<Vec<(String, u64)>, QueryError> {
        Ok(eval::group_count(&self.load()?, column, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stress_generator::RecordGenerator;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_count() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonlStore::new(dir.path().join("kb.jsonl"));
        store.ping().unwrap();

        let mut generator = RecordGenerator::new(Some(42));
        for record in generator.records(40) {
            store.write(record).unwrap();
        }

        assert_eq!(store.count(&Predicate::All).unwrap(), 40);
        assert_eq!(store.count(&Predicate::NegativeCitationCount).unwrap(), 0);

        let reopened = JsonlStore::new(store.path());
        assert_eq!(reopened.load().unwrap().len(), 40);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonlStore::new(dir.path().join("absent.jsonl"));

        assert!(store.ping().is_ok());
        assert_eq!(store.count(&Predicate::All).unwrap(), 0);
        assert!(store.group_count(Column::Title, None).unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory_is_unreachable() {
        let dir = TempDir::new().unwrap();
        let store = JsonlStore::new(dir.path().join("no-such-dir").join("kb.jsonl"));
        assert!(store.ping().is_err());
    }

    #[test]
    fn test_malformed_line_reports_position() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kb.jsonl");
        std::fs::write(&path, "{\"id\":\"a\",\"title\":\"T\"}\n\nnot json\n").unwrap();

        let store = JsonlStore::new(&path);
        match store.count(&Predicate::All) {
            Err(QueryError::Malformed { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected malformed error, got {other:?}"),
        }
    }

    #[test]
    fn test_sparse_documents_are_audited() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kb.jsonl");
        std::fs::write(
            &path,
            concat!(
                "{\"id\":\"a\",\"title\":\"Same\",\"authors\":[\"X, Y.\"],\"abstract_text\":\"A\"}\n",
                "{\"id\":\"b\",\"title\":\"Same\",\"citation_count\":-4}\n",
            ),
        )
        .unwrap();

        let store = JsonlStore::new(&path);
        assert_eq!(store.count(&Predicate::MissingRequiredField).unwrap(), 1);
        assert_eq!(store.count(&Predicate::NegativeCitationCount).unwrap(), 1);
        assert_eq!(
            store.group_count(Column::Title, None).unwrap(),
            vec![("Same".to_string(), 2)]
        );
    }
}
