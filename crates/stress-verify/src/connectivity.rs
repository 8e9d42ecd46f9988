//! Connectivity check that opens every harness run.

use std::time::Instant;
use stress_core::{ConnectivityError, ConnectivityResult, KnowledgeStore, Predicate, QueryParams};
use tracing::{info, warn};

/// Rows requested by the sample retrieval.
pub const SAMPLE_SIZE: usize = 5;

/// Checks that the store answers basic operations.
///
/// The store must respond to `ping` and to a record count. When it holds
/// records, a small unfiltered read is attempted as well; its failure is
/// reported but not fatal.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConnectivityCheck;

impl ConnectivityCheck {
    pub fn run<S: KnowledgeStore + ?Sized>(
        &self,
        store: &S,
    ) -> Result<ConnectivityResult, ConnectivityError> {
        let start = Instant::now();

        store.ping()?;
        let record_count = store
            .count(&Predicate::All)
            .map_err(|e| ConnectivityError::new(store.describe(), e.to_string()))?;

        let sample_retrieval = if record_count > 0 {
            match store.query("", &QueryParams::sample(SAMPLE_SIZE)) {
                Ok(rows) => !rows.is_empty(),
                Err(e) => {
                    warn!("Sample retrieval from {} failed: {e}", store.describe());
                    false
                }
            }
        } else {
            false
        };

        let result = ConnectivityResult {
            reachable: true,
            record_count: Some(record_count),
            sample_retrieval,
            response_time: start.elapsed(),
        };
        info!(
            "Connected to {} ({} records)",
            store.describe(),
            record_count
        );
        Ok(result)
    }
}
