//! Progress notifications emitted while a harness run executes.
//!
//! Components report progress to an injected [`HarnessObserver`] instead of
//! writing to the console. [`TracingObserver`] turns events into `tracing`
//! records; tests plug in their own observer to watch (or steer) a run.

use crate::metrics::{BatchResult, ConnectivityResult, IntegrityReport, QueryProbeResult};
use std::fmt;

/// Harness stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Connectivity,
    Load,
    Probe,
    Audit,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Connectivity => "connectivity",
            Stage::Load => "load",
            Stage::Probe => "probe",
            Stage::Audit => "audit",
        };
        f.write_str(name)
    }
}

/// Something that happened during a run.
#[derive(Debug)]
pub enum HarnessEvent<'a> {
    StageStarted(Stage),
    StageCompleted(Stage),
    ConnectivityChecked(&'a ConnectivityResult),
    BatchStarted {
        batch_index: usize,
        total_batches: usize,
        size: usize,
    },
    BatchCompleted {
        result: &'a BatchResult,
        total_batches: usize,
    },
    WriteFailed {
        batch_index: usize,
        error: &'a str,
    },
    /// Loading stopped before `next_batch` because cancellation was requested.
    LoadCancelled { next_batch: usize },
    QueryCompleted(&'a QueryProbeResult),
    AuditCheckFailed {
        check: &'a str,
        error: &'a str,
    },
    AuditCompleted(&'a IntegrityReport),
}

/// Receiver of harness progress events.
pub trait HarnessObserver: Send + Sync {
    fn on_event(&self, event: &HarnessEvent<'_>);
}

/// Observer that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl HarnessObserver for NoopObserver {
    fn on_event(&self, _event: &HarnessEvent<'_>) {}
}

/// Observer that logs events through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl HarnessObserver for TracingObserver {
    fn on_event(&self, event: &HarnessEvent<'_>) {
        match event {
            HarnessEvent::StageStarted(stage) => tracing::info!("Starting {stage} stage"),
            HarnessEvent::StageCompleted(stage) => tracing::info!("Completed {stage} stage"),
            HarnessEvent::ConnectivityChecked(result) => tracing::info!(
                "Store reachable in {:?}, {} records, sample retrieval {}",
                result.response_time,
                result
                    .record_count
                    .map_or_else(|| "unknown".to_string(), |c| c.to_string()),
                if result.sample_retrieval { "ok" } else { "empty" }
            ),
            HarnessEvent::BatchStarted {
                batch_index,
                total_batches,
                size,
            } => tracing::debug!(
                "Batch {}/{}: generating {} records",
                batch_index + 1,
                total_batches,
                size
            ),
            HarnessEvent::BatchCompleted {
                result,
                total_batches,
            } => tracing::info!(
                "Batch {}/{}: {} ok, {} failed in {:?} ({:.1} records/sec){}",
                result.batch_index + 1,
                total_batches,
                result.success_count,
                result.failure_count,
                result.elapsed,
                result.throughput(),
                if result.aborted { ", aborted" } else { "" }
            ),
            HarnessEvent::WriteFailed { batch_index, error } => {
                tracing::warn!("Write failed in batch {}: {error}", batch_index + 1)
            }
            HarnessEvent::LoadCancelled { next_batch } => {
                tracing::warn!("Load cancelled before batch {}", next_batch + 1)
            }
            HarnessEvent::QueryCompleted(result) => {
                if result.succeeded {
                    tracing::debug!(
                        "Query '{}' returned {} rows in {:?}",
                        result.query_text,
                        result.result_count,
                        result.latency
                    );
                } else {
                    tracing::warn!(
                        "Query '{}' failed: {}",
                        result.query_text,
                        result.error.as_deref().unwrap_or("unknown error")
                    );
                }
            }
            HarnessEvent::AuditCheckFailed { check, error } => {
                tracing::warn!("Integrity check '{check}' failed: {error}")
            }
            HarnessEvent::AuditCompleted(report) => tracing::info!(
                "Integrity audit: {} records, {} issues, score {:.1}",
                report.total_records,
                report.total_issues(),
                report.integrity_score
            ),
        }
    }
}
