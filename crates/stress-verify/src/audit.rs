//! Integrity audit of stored records.

use std::collections::BTreeMap;
use std::sync::Arc;
use stress_core::{
    Column, HarnessEvent, HarnessObserver, IntegrityReport, KnowledgeStore, Predicate, QueryError,
    TracingObserver,
};
use tracing::info;

/// Number of groups kept for the category and field distributions.
pub const DISTRIBUTION_LIMIT: usize = 10;

/// Runs structural integrity checks through aggregate store queries.
///
/// The checks:
/// 1. Total record count (zero ends the audit with score 0)
/// 2. Records missing a title, author list or abstract
/// 3. Records whose title collides with another record's
/// 4. Records with a negative citation count
/// 5. Category and research field distributions (top 10)
///
/// A check that fails is recorded in the report and counts zero issues.
pub struct IntegrityAuditor {
    observer: Arc<dyn HarnessObserver>,
}

impl Default for IntegrityAuditor {
    fn default() -> Self {
        Self::new()
    }
}

impl IntegrityAuditor {
    pub fn new() -> Self {
        Self {
            observer: Arc::new(TracingObserver),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn HarnessObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn audit<S: KnowledgeStore + ?Sized>(&self, store: &S) -> IntegrityReport {
        info!("Auditing integrity of {}", store.describe());
        let mut report = IntegrityReport::default();

        report.total_records = match store.count(&Predicate::All) {
            Ok(total) => total,
            Err(e) => {
                self.check_failed(&mut report, "record count", &e);
                self.finish(&report);
                return report;
            }
        };
        if report.total_records == 0 {
            self.finish(&report);
            return report;
        }

        let missing = self.run_check(&mut report, "missing fields", || {
            store.count(&Predicate::MissingRequiredField)
        });
        let duplicates = self.run_check(&mut report, "duplicate titles", || {
            store.group_count(Column::Title, None).map(|groups| {
                groups
                    .into_iter()
                    .filter(|(_, count)| *count > 1)
                    .map(|(_, count)| count)
                    .sum::<u64>()
            })
        });
        let negative = self.run_check(&mut report, "negative citations", || {
            store.count(&Predicate::NegativeCitationCount)
        });
        let categories = self.run_check(&mut report, "category distribution", || {
            distribution(store, Column::Category)
        });
        let fields = self.run_check(&mut report, "field distribution", || {
            distribution(store, Column::Field)
        });

        report.missing_field_count = missing.unwrap_or(0);
        report.duplicate_title_count = duplicates.unwrap_or(0);
        report.invalid_citation_count = negative.unwrap_or(0);
        report.category_distribution = categories.unwrap_or_default();
        report.field_distribution = fields.unwrap_or_default();

        report.integrity_score =
            IntegrityReport::compute_score(report.total_records, report.total_issues());
        self.finish(&report);
        report
    }

    fn run_check<T>(
        &self,
        report: &mut IntegrityReport,
        name: &str,
        check: impl FnOnce() -> Result<T, QueryError>,
    ) -> Option<T> {
        match check() {
            Ok(value) => Some(value),
            Err(e) => {
                self.check_failed(report, name, &e);
                None
            }
        }
    }

    fn check_failed(&self, report: &mut IntegrityReport, name: &str, error: &QueryError) {
        let message = error.to_string();
        self.observer.on_event(&HarnessEvent::AuditCheckFailed {
            check: name,
            error: &message,
        });
        report.failed_checks.push(format!("{name}: {message}"));
    }

    fn finish(&self, report: &IntegrityReport) {
        self.observer.on_event(&HarnessEvent::AuditCompleted(report));
    }
}

fn distribution<S: KnowledgeStore + ?Sized>(
    store: &S,
    column: Column,
) -> Result<BTreeMap<String, u64>, QueryError> {
    Ok(store
        .group_count(column, Some(DISTRIBUTION_LIMIT))?
        .into_iter()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use stress_core::{
        ConnectivityError, NoopObserver, QueryParams, Row, StoredDocument, SyntheticRecord,
        WriteError,
    };
    use stress_generator::RecordGenerator;
    use stress_store::MemoryStore;

    fn auditor() -> IntegrityAuditor {
        IntegrityAuditor::new().with_observer(Arc::new(NoopObserver))
    }

    /// Store returning canned aggregate results and counting calls.
    struct CannedStore {
        total: u64,
        missing: u64,
        duplicate_groups: Vec<(String, u64)>,
        negative: u64,
        fail_groups: bool,
        calls: Cell<usize>,
    }

    impl CannedStore {
        fn new(total: u64) -> Self {
            Self {
                total,
                missing: 0,
                duplicate_groups: Vec::new(),
                negative: 0,
                fail_groups: false,
                calls: Cell::new(0),
            }
        }
    }

    impl KnowledgeStore for CannedStore {
        fn describe(&self) -> String {
            "canned".to_string()
        }

        fn ping(&self) -> Result<(), ConnectivityError> {
            Ok(())
        }

        fn write(&mut self, _record: SyntheticRecord) -> Result<(), WriteError> {
            Ok(())
        }

        fn query(&self, _text: &str, _params: &QueryParams) -> Result<Vec<Row>, QueryError> {
            self.calls.set(self.calls.get() + 1);
            Ok(Vec::new())
        }

        fn count(&self, predicate: &Predicate) -> Result<u64, QueryError> {
            self.calls.set(self.calls.get() + 1);
            Ok(match predicate {
                Predicate::All => self.total,
                Predicate::MissingRequiredField => self.missing,
                Predicate::NegativeCitationCount => self.negative,
            })
        }

        fn group_count(
            &self,
            column: Column,
            _limit: Option<usize>,
        ) -> Result<Vec<(String, u64)>, QueryError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail_groups {
                return Err(QueryError::Failed("GROUP BY not supported".to_string()));
            }
            Ok(match column {
                Column::Title => self.duplicate_groups.clone(),
                Column::Category => vec![("cs.AI".to_string(), self.total)],
                Column::Field => vec![("Robotics".to_string(), self.total)],
            })
        }
    }

    #[test]
    fn test_score_with_issues() {
        let mut store = CannedStore::new(100);
        store.missing = 5;
        store.negative = 2;
        store.duplicate_groups = vec![
            ("Same Title".to_string(), 3),
            ("Unique".to_string(), 1),
        ];

        let report = auditor().audit(&store);

        assert_eq!(report.total_records, 100);
        assert_eq!(report.missing_field_count, 5);
        assert_eq!(report.duplicate_title_count, 3);
        assert_eq!(report.invalid_citation_count, 2);
        assert_eq!(report.integrity_score, 90.0);
        assert!(report.failed_checks.is_empty());
        assert_eq!(report.category_distribution.get("cs.AI"), Some(&100));
    }

    #[test]
    fn test_empty_store_scores_zero_without_further_queries() {
        let store = CannedStore::new(0);

        let report = auditor().audit(&store);

        assert_eq!(report, IntegrityReport::default());
        assert_eq!(report.integrity_score, 0.0);
        assert_eq!(store.calls.get(), 1);
    }

    #[test]
    fn test_failed_check_is_recorded_and_audit_continues() {
        let mut store = CannedStore::new(50);
        store.missing = 5;
        store.fail_groups = true;

        let report = auditor().audit(&store);

        assert_eq!(report.duplicate_title_count, 0);
        assert!(report.category_distribution.is_empty());
        assert_eq!(report.failed_checks.len(), 3);
        assert!(report.failed_checks[0].starts_with("duplicate titles"));
        assert_eq!(report.integrity_score, 90.0);
    }

    #[test]
    fn test_generated_data_scores_high() {
        let mut store = MemoryStore::new();
        for record in RecordGenerator::new(Some(11)).records(200) {
            store.write(record).unwrap();
        }
        store.insert_document(StoredDocument {
            id: "broken".to_string(),
            title: Some("Broken".to_string()),
            citation_count: -1,
            ..Default::default()
        });

        let report = auditor().audit(&store);

        assert_eq!(report.total_records, 201);
        assert_eq!(report.missing_field_count, 1);
        assert_eq!(report.invalid_citation_count, 1);
        assert!(report.category_distribution.len() <= DISTRIBUTION_LIMIT);
        assert!(report.field_distribution.len() <= DISTRIBUTION_LIMIT);
        assert!(report.integrity_score > 0.0 && report.integrity_score < 100.0);
    }
}
