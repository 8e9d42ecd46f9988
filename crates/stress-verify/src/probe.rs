//! Query probe: latency and success rate of sample queries.

use crate::corpus::ProbeQuery;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::Arc;
use std::time::Instant;
use stress_core::{
    HarnessEvent, HarnessObserver, KnowledgeStore, ProbeAggregate, QueryParams, QueryProbeResult,
    TracingObserver,
};
use tracing::info;

/// Sends a random sample of a query corpus to the store.
///
/// Every query is issued even if earlier ones fail; failures are recorded,
/// never propagated.
pub struct QueryProbe {
    rng: StdRng,
    observer: Arc<dyn HarnessObserver>,
}

impl QueryProbe {
    /// Create a probe. Without a seed, sampling uses OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            observer: Arc::new(TracingObserver),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn HarnessObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Pick up to `sample_size` distinct queries from `corpus` in random order.
    ///
    /// A sample size at or above the corpus size yields the whole corpus once.
    pub fn sample<'c>(&mut self, corpus: &'c [ProbeQuery], sample_size: usize) -> Vec<&'c ProbeQuery> {
        let amount = sample_size.min(corpus.len());
        let mut order: Vec<usize> = (0..corpus.len()).collect();
        let (picked, _) = order.partial_shuffle(&mut self.rng, amount);
        picked.iter().map(|&i| &corpus[i]).collect()
    }

    /// Run a sample of `corpus` against `store`.
    pub fn run<S: KnowledgeStore + ?Sized>(
        &mut self,
        corpus: &[ProbeQuery],
        sample_size: usize,
        store: &S,
    ) -> ProbeAggregate {
        let queries = self.sample(corpus, sample_size);
        info!(
            "Probing {} with {} of {} queries",
            store.describe(),
            queries.len(),
            corpus.len()
        );

        let results: Vec<QueryProbeResult> = queries
            .into_iter()
            .map(|query| {
                let result = probe_one(&query.text, store);
                self.observer.on_event(&HarnessEvent::QueryCompleted(&result));
                result
            })
            .collect();

        let aggregate = ProbeAggregate::from_results(results);
        info!(
            "Probe finished: {}/{} queries succeeded, average latency {:?}",
            aggregate.success_count, aggregate.total_queries, aggregate.average_latency
        );
        aggregate
    }
}

fn probe_one<S: KnowledgeStore + ?Sized>(text: &str, store: &S) -> QueryProbeResult {
    let params = QueryParams::keyword_search(text);
    let start = Instant::now();
    let outcome = store.query(text, &params);
    let latency = start.elapsed();

    match outcome {
        Ok(rows) => QueryProbeResult {
            query_text: text.to_string(),
            latency,
            result_count: rows.len(),
            succeeded: true,
            error: None,
        },
        Err(e) => QueryProbeResult {
            query_text: text.to_string(),
            latency,
            result_count: 0,
            succeeded: false,
            error: Some(e.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::builtin_corpus;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use stress_core::{
        Column, ConnectivityError, NoopObserver, Predicate, QueryError, Row, SyntheticRecord,
        WriteError,
    };
    use stress_generator::RecordGenerator;
    use stress_store::MemoryStore;

    fn probe(seed: u64) -> QueryProbe {
        QueryProbe::new(Some(seed)).with_observer(Arc::new(NoopObserver))
    }

    /// Store recording every query text and failing those containing "fail".
    #[derive(Default)]
    struct RecordingStore {
        seen: RefCell<Vec<String>>,
    }

    impl KnowledgeStore for RecordingStore {
        fn describe(&self) -> String {
            "recording".to_string()
        }

        fn ping(&self) -> Result<(), ConnectivityError> {
            Ok(())
        }

        fn write(&mut self, _record: SyntheticRecord) -> Result<(), WriteError> {
            Ok(())
        }

        fn query(&self, text: &str, _params: &QueryParams) -> Result<Vec<Row>, QueryError> {
            self.seen.borrow_mut().push(text.to_string());
            if text.contains("fail") {
                Err(QueryError::Failed("syntax error".to_string()))
            } else {
                Ok(Vec::new())
            }
        }

        fn count(&self, _predicate: &Predicate) -> Result<u64, QueryError> {
            Ok(0)
        }

        fn group_count(
            &self,
            _column: Column,
            _limit: Option<usize>,
        ) -> Result<Vec<(String, u64)>, QueryError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_oversize_sample_uses_whole_corpus_once() {
        let corpus = builtin_corpus();
        let store = RecordingStore::default();

        let aggregate = probe(42).run(&corpus, 100, &store);

        assert_eq!(aggregate.total_queries, 25);
        let seen = store.seen.borrow();
        let distinct: HashSet<&String> = seen.iter().collect();
        assert_eq!(seen.len(), 25);
        assert_eq!(distinct.len(), 25);
    }

    #[test]
    fn test_sample_without_replacement() {
        let corpus = builtin_corpus();
        let mut probe = probe(7);

        let sample = probe.sample(&corpus, 20);
        let distinct: HashSet<&str> = sample.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(sample.len(), 20);
        assert_eq!(distinct.len(), 20);

        assert!(probe.sample(&corpus, 0).is_empty());
        assert!(probe.sample(&[], 5).is_empty());
    }

    #[test]
    fn test_same_seed_same_sample() {
        let corpus = builtin_corpus();
        let first: Vec<String> = probe(9).sample(&corpus, 10).iter().map(|q| q.text.clone()).collect();
        let second: Vec<String> = probe(9).sample(&corpus, 10).iter().map(|q| q.text.clone()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_failures_are_recorded_not_fatal() {
        let corpus = vec![
            ProbeQuery::custom("this will fail"),
            ProbeQuery::custom("find papers"),
            ProbeQuery::custom("fail again"),
            ProbeQuery::custom("show vision"),
        ];
        let store = RecordingStore::default();

        let aggregate = probe(1).run(&corpus, 4, &store);

        assert_eq!(aggregate.total_queries, 4);
        assert_eq!(aggregate.success_count, 2);
        assert_eq!(aggregate.failure_count, 2);
        assert_eq!(aggregate.success_rate(), Some(50.0));
        let failed: Vec<&QueryProbeResult> =
            aggregate.results.iter().filter(|r| !r.succeeded).collect();
        assert!(failed
            .iter()
            .all(|r| r.error.as_deref() == Some("Query failed: syntax error")));
    }

    #[test]
    fn test_probe_against_populated_store() {
        let mut store = MemoryStore::new();
        for record in RecordGenerator::new(Some(3)).records(300) {
            store.write(record).unwrap();
        }

        let corpus = builtin_corpus();
        let aggregate = probe(3).run(&corpus, 20, &store);

        assert_eq!(aggregate.total_queries, 20);
        assert_eq!(aggregate.success_count, 20);
        assert!(aggregate.results.iter().all(|r| r.result_count <= 10));
        assert!(aggregate.results.iter().any(|r| r.result_count > 0));
        assert!(aggregate.min_latency <= aggregate.max_latency);
    }
}
