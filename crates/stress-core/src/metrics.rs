//! Result types produced by each harness stage.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

fn per_second(count: u64, elapsed: Duration) -> f64 {
    if elapsed.as_secs_f64() > 0.0 {
        count as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    }
}

fn percentage(part: u64, whole: u64) -> Option<f64> {
    if whole == 0 {
        None
    } else {
        Some(part as f64 / whole as f64 * 100.0)
    }
}

/// Outcome of one loader batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    /// Zero-based batch number.
    pub batch_index: usize,
    /// Records generated for this batch.
    pub requested_size: usize,
    /// From generation start to after the last write attempt.
    pub elapsed: Duration,
    pub success_count: u64,
    pub failure_count: u64,
    /// The batch stopped early on a non-recoverable write error.
    pub aborted: bool,
}

impl BatchResult {
    /// Records per second for this batch.
    pub fn throughput(&self) -> f64 {
        per_second(self.requested_size as u64, self.elapsed)
    }
}

/// Totals for a loader run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoaderAggregate {
    pub total_elapsed: Duration,
    pub success_count: u64,
    pub failure_count: u64,
    /// Successful writes per second over the whole run.
    pub average_throughput: f64,
    /// Highest per-batch throughput observed.
    pub peak_throughput: f64,
    pub batches: Vec<BatchResult>,
    /// The run stopped at a batch boundary because of cancellation.
    pub cancelled: bool,
}

impl LoaderAggregate {
    /// Build the aggregate from completed batches.
    pub fn from_batches(batches: Vec<BatchResult>, total_elapsed: Duration, cancelled: bool) -> Self {
        let success_count = batches.iter().map(|b| b.success_count).sum();
        let failure_count = batches.iter().map(|b| b.failure_count).sum();
        let peak_throughput = batches
            .iter()
            .map(BatchResult::throughput)
            .fold(0.0f64, f64::max);

        Self {
            total_elapsed,
            success_count,
            failure_count,
            average_throughput: per_second(success_count, total_elapsed),
            peak_throughput,
            batches,
            cancelled,
        }
    }

    /// Total write attempts.
    pub fn attempted(&self) -> u64 {
        self.success_count + self.failure_count
    }

    /// Percentage of attempted writes that succeeded, `None` if nothing was attempted.
    pub fn success_rate(&self) -> Option<f64> {
        percentage(self.success_count, self.attempted())
    }
}

/// Outcome of a single probe query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryProbeResult {
    pub query_text: String,
    pub latency: Duration,
    /// Rows returned; zero when the query failed.
    pub result_count: usize,
    pub succeeded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Totals for a probe run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProbeAggregate {
    pub total_queries: u64,
    pub success_count: u64,
    pub failure_count: u64,
    /// Mean latency of successful queries.
    pub average_latency: Option<Duration>,
    pub min_latency: Option<Duration>,
    pub max_latency: Option<Duration>,
    pub results: Vec<QueryProbeResult>,
}

impl ProbeAggregate {
    /// Build the aggregate from individual probe results.
    ///
    /// Latency statistics cover successful queries only.
    pub fn from_results(results: Vec<QueryProbeResult>) -> Self {
        let total_queries = results.len() as u64;
        let successful: Vec<Duration> = results
            .iter()
            .filter(|r| r.succeeded)
            .map(|r| r.latency)
            .collect();
        let success_count = successful.len() as u64;

        let average_latency = if successful.is_empty() {
            None
        } else {
            let total: Duration = successful.iter().sum();
            Some(total / successful.len() as u32)
        };

        Self {
            total_queries,
            success_count,
            failure_count: total_queries - success_count,
            average_latency,
            min_latency: successful.iter().min().copied(),
            max_latency: successful.iter().max().copied(),
            results,
        }
    }

    /// Percentage of queries that succeeded, `None` if no query ran.
    pub fn success_rate(&self) -> Option<f64> {
        percentage(self.success_count, self.total_queries)
    }
}

/// Structural data quality of the stored records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntegrityReport {
    pub total_records: u64,
    /// Records with an empty or absent title, author list or abstract.
    pub missing_field_count: u64,
    /// Records whose title is shared with at least one other record.
    pub duplicate_title_count: u64,
    /// Records with a negative citation count.
    pub invalid_citation_count: u64,
    /// Top categories by record count.
    pub category_distribution: BTreeMap<String, u64>,
    /// Top research fields by record count.
    pub field_distribution: BTreeMap<String, u64>,
    /// Checks that could not be executed.
    #[serde(default)]
    pub failed_checks: Vec<String>,
    /// 0-100.
    pub integrity_score: f64,
}

impl IntegrityReport {
    /// Sum of all issue counts.
    pub fn total_issues(&self) -> u64 {
        self.missing_field_count + self.duplicate_title_count + self.invalid_citation_count
    }

    /// `max(0, 100 - issues / total * 100)`; zero when there are no records.
    pub fn compute_score(total_records: u64, issues: u64) -> f64 {
        if total_records == 0 {
            return 0.0;
        }
        (100.0 - issues as f64 / total_records as f64 * 100.0).max(0.0)
    }

    /// Category counts, largest first.
    pub fn categories_by_count(&self) -> Vec<(&str, u64)> {
        sorted_by_count(&self.category_distribution)
    }

    /// Research field counts, largest first.
    pub fn fields_by_count(&self) -> Vec<(&str, u64)> {
        sorted_by_count(&self.field_distribution)
    }
}

fn sorted_by_count(map: &BTreeMap<String, u64>) -> Vec<(&str, u64)> {
    let mut entries: Vec<(&str, u64)> = map.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries
}

/// Outcome of the connectivity check that opens every run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectivityResult {
    pub reachable: bool,
    /// Stored record count, if the count query succeeded.
    pub record_count: Option<u64>,
    /// A small unfiltered read returned at least one row.
    pub sample_retrieval: bool,
    pub response_time: Duration,
}
