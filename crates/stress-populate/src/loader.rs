//! Batch loader.

use crate::args::total_batches;
use crate::error::PopulateError;
use std::sync::Arc;
use std::time::Instant;
use stress_core::{
    BatchResult, HarnessEvent, HarnessObserver, KnowledgeStore, LoaderAggregate, TracingObserver,
};
use stress_generator::RecordGenerator;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Upper bound on the batch results reserved before the first batch runs.
const PREALLOCATED_BATCHES: usize = 1024;

/// Generates records in batches and writes them one by one to a store.
///
/// A write that fails with a recoverable error costs only that record. A
/// non-recoverable error counts the rest of the batch as failed and moves on
/// to the next batch. Cancellation is honoured between batches only.
pub struct BatchLoader {
    generator: RecordGenerator,
    observer: Arc<dyn HarnessObserver>,
}

impl BatchLoader {
    pub fn new(generator: RecordGenerator) -> Self {
        Self {
            generator,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Set the observer receiving batch progress events.
    pub fn with_observer(mut self, observer: Arc<dyn HarnessObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn generator(&self) -> &RecordGenerator {
        &self.generator
    }

    /// Load `total_count` records in batches of `batch_size`.
    pub fn run<S: KnowledgeStore + ?Sized>(
        &mut self,
        total_count: u64,
        batch_size: usize,
        store: &mut S,
        cancel: &CancellationToken,
    ) -> Result<LoaderAggregate, PopulateError> {
        if batch_size == 0 {
            return Err(PopulateError::InvalidBatchSize(batch_size));
        }

        let total_batches = total_batches(total_count, batch_size) as usize;
        info!(
            "Loading {} records into {} in {} batches of up to {}",
            total_count,
            store.describe(),
            total_batches,
            batch_size
        );

        let start_time = Instant::now();
        let mut batches = Vec::with_capacity(total_batches.min(PREALLOCATED_BATCHES));
        let mut remaining = total_count;
        let mut cancelled = false;

        for batch_index in 0..total_batches {
            if cancel.is_cancelled() {
                self.observer.on_event(&HarnessEvent::LoadCancelled {
                    next_batch: batch_index,
                });
                cancelled = true;
                break;
            }

            let size = remaining.min(batch_size as u64) as usize;
            remaining -= size as u64;

            self.observer.on_event(&HarnessEvent::BatchStarted {
                batch_index,
                total_batches,
                size,
            });

            let result = self.load_batch(batch_index, size, store);
            self.observer.on_event(&HarnessEvent::BatchCompleted {
                result: &result,
                total_batches,
            });
            batches.push(result);
        }

        let aggregate = LoaderAggregate::from_batches(batches, start_time.elapsed(), cancelled);
        info!(
            "Load finished: {} succeeded, {} failed in {:?} ({:.1} records/sec, peak {:.1})",
            aggregate.success_count,
            aggregate.failure_count,
            aggregate.total_elapsed,
            aggregate.average_throughput,
            aggregate.peak_throughput
        );

        Ok(aggregate)
    }

    fn load_batch<S: KnowledgeStore + ?Sized>(
        &mut self,
        batch_index: usize,
        size: usize,
        store: &mut S,
    ) -> BatchResult {
        let batch_start = Instant::now();
        let window = *self.generator.window();
        let mut records = self.generator.generate_batch(size).into_iter();

        let mut success_count = 0u64;
        let mut failure_count = 0u64;
        let mut aborted = false;

        while let Some(record) = records.next() {
            debug_assert!(record.validate(&window).is_ok(), "generator produced invalid record");

            match store.write(record) {
                Ok(()) => success_count += 1,
                Err(e) => {
                    failure_count += 1;
                    let message = e.to_string();
                    self.observer.on_event(&HarnessEvent::WriteFailed {
                        batch_index,
                        error: &message,
                    });
                    if !e.is_recoverable() {
                        failure_count += records.len() as u64;
                        aborted = true;
                        break;
                    }
                }
            }
        }

        BatchResult {
            batch_index,
            requested_size: size,
            elapsed: batch_start.elapsed(),
            success_count,
            failure_count,
            aborted,
        }
    }
}
