//! Overall harness report and its renderings.

use crate::score::{recommendation, ComponentScores, HealthStatus, CONNECTIVITY_SCORE};
use chrono::{DateTime, Utc};
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use stress_core::{ConnectivityResult, IntegrityReport, LoaderAggregate, ProbeAggregate};
use stress_generator::GenerationStats;

/// Results of every stage that ran, plus the derived score and status.
///
/// Scores are computed once, in [`OverallReport::new`]; the report exposes
/// read-only accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallReport {
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    seed: u64,
    connectivity: Option<ConnectivityResult>,
    loader: Option<LoaderAggregate>,
    probe: Option<ProbeAggregate>,
    integrity: Option<IntegrityReport>,
    component_scores: ComponentScores,
    overall_score: f64,
    status: HealthStatus,
}

/// Stage outputs a report is assembled from.
#[derive(Debug, Clone, Default)]
pub struct StageResults {
    pub connectivity: Option<ConnectivityResult>,
    pub loader: Option<LoaderAggregate>,
    pub probe: Option<ProbeAggregate>,
    pub integrity: Option<IntegrityReport>,
}

impl StageResults {
    /// Score each component that ran and produced something to score.
    ///
    /// - connectivity: 100 when reachable
    /// - loader: write success rate, if any write was attempted
    /// - probe: query success rate, if any query was issued
    /// - integrity: the integrity score whenever the audit ran
    pub fn scores(&self) -> ComponentScores {
        ComponentScores {
            connectivity: self
                .connectivity
                .as_ref()
                .filter(|c| c.reachable)
                .map(|_| CONNECTIVITY_SCORE),
            loader: self.loader.as_ref().and_then(LoaderAggregate::success_rate),
            probe: self.probe.as_ref().and_then(ProbeAggregate::success_rate),
            integrity: self.integrity.as_ref().map(|i| i.integrity_score),
        }
    }
}

impl OverallReport {
    pub fn new(
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        seed: u64,
        results: StageResults,
    ) -> Self {
        let component_scores = results.scores();
        let overall_score = component_scores.overall();

        Self {
            started_at,
            completed_at,
            seed,
            connectivity: results.connectivity,
            loader: results.loader,
            probe: results.probe,
            integrity: results.integrity,
            component_scores,
            overall_score,
            status: HealthStatus::from_score(overall_score),
        }
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    /// Seed used for generation and query sampling.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn connectivity(&self) -> Option<&ConnectivityResult> {
        self.connectivity.as_ref()
    }

    pub fn loader(&self) -> Option<&LoaderAggregate> {
        self.loader.as_ref()
    }

    pub fn probe(&self) -> Option<&ProbeAggregate> {
        self.probe.as_ref()
    }

    pub fn integrity(&self) -> Option<&IntegrityReport> {
        self.integrity.as_ref()
    }

    pub fn component_scores(&self) -> &ComponentScores {
        &self.component_scores
    }

    pub fn overall_score(&self) -> f64 {
        self.overall_score
    }

    pub fn status(&self) -> HealthStatus {
        self.status
    }

    pub fn recommendation(&self) -> &'static str {
        recommendation(self.overall_score)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write the report as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        fs::write(path, json)
    }
}

/// Format the report as tables for the terminal.
pub fn format_table(report: &OverallReport) -> String {
    let mut output = String::new();

    let mut summary = component_table(
        report.connectivity(),
        report.loader(),
        report.probe(),
        report.integrity(),
        report.component_scores(),
    );
    summary.add_row(vec![
        Cell::new("OVERALL").fg(Color::Cyan),
        status_cell(report.status()),
        Cell::new(format!("{:.1}", report.overall_score())).fg(score_color(report.overall_score())),
    ]);

    output.push_str(&summary.to_string());
    output.push_str(&format!("\nRecommendation: {}\n", report.recommendation()));
    output.push_str(&format!("Seed: {}\n", report.seed()));

    if let Some(integrity) = report.integrity() {
        if !integrity.category_distribution.is_empty() {
            output.push('\n');
            output.push_str(&distribution_table("Category", &integrity.categories_by_count()));
        }
        if !integrity.field_distribution.is_empty() {
            output.push('\n');
            output.push_str(&distribution_table("Research Field", &integrity.fields_by_count()));
        }
        if !integrity.failed_checks.is_empty() {
            output.push_str("\nFailed checks:\n");
            for check in &integrity.failed_checks {
                output.push_str(&format!("  {check}\n"));
            }
        }
    }

    output
}

/// Format statistics of a standalone generation run.
pub fn format_generation_stats(stats: &GenerationStats, top: usize) -> String {
    let mut summary = Table::new();
    summary.load_preset(UTF8_FULL);
    summary.set_header(vec!["Metric", "Value"]);
    summary.add_row(vec!["Records".to_string(), format_number(stats.total_records)]);
    summary.add_row(vec![
        "Research fields".to_string(),
        stats.distinct_fields().to_string(),
    ]);
    summary.add_row(vec![
        "Categories".to_string(),
        stats.distinct_categories().to_string(),
    ]);
    summary.add_row(vec!["Paper types".to_string(), stats.distinct_types().to_string()]);
    summary.add_row(vec![
        "Average citations".to_string(),
        format!("{:.1}", stats.average_citations()),
    ]);

    let mut fields = Table::new();
    fields.load_preset(UTF8_FULL);
    fields.set_header(vec!["Research Field", "Count", "Share"]);
    for share in stats.top_fields(top) {
        fields.add_row(vec![
            Cell::new(&share.field),
            Cell::new(format_number(share.count)),
            Cell::new(format!("{:.1}%", share.percentage)),
        ]);
    }

    format!("{summary}\n\n{fields}\n")
}

/// Format what a cancelled run measured before it stopped.
///
/// No overall score is given; the run ended before scoring.
pub fn format_partial_results(results: &StageResults) -> String {
    let table = component_table(
        results.connectivity.as_ref(),
        results.loader.as_ref(),
        results.probe.as_ref(),
        results.integrity.as_ref(),
        &results.scores(),
    );
    format!("{table}\nRun cancelled: no overall score.\n")
}

fn component_table(
    connectivity: Option<&ConnectivityResult>,
    loader: Option<&LoaderAggregate>,
    probe: Option<&ProbeAggregate>,
    integrity: Option<&IntegrityReport>,
    scores: &ComponentScores,
) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Component", "Result", "Score"]);

    if let Some(c) = connectivity {
        table.add_row(vec![
            Cell::new("Connectivity"),
            Cell::new(format!(
                "{} records, sample {}, {}",
                c.record_count
                    .map(format_number)
                    .unwrap_or_else(|| "-".to_string()),
                if c.sample_retrieval { "ok" } else { "none" },
                format_latency(c.response_time)
            )),
            score_cell(scores.connectivity),
        ]);
    }
    if let Some(l) = loader {
        table.add_row(vec![
            Cell::new("Load"),
            Cell::new(format!(
                "{} ok / {} failed, {:.1} rec/s (peak {:.1}){}",
                format_number(l.success_count),
                format_number(l.failure_count),
                l.average_throughput,
                l.peak_throughput,
                if l.cancelled { ", cancelled" } else { "" }
            )),
            score_cell(scores.loader),
        ]);
    }
    if let Some(p) = probe {
        table.add_row(vec![
            Cell::new("Query probe"),
            Cell::new(format!(
                "{}/{} ok, avg {} (min {}, max {})",
                p.success_count,
                p.total_queries,
                format_optional_latency(p.average_latency),
                format_optional_latency(p.min_latency),
                format_optional_latency(p.max_latency)
            )),
            score_cell(scores.probe),
        ]);
    }
    if let Some(i) = integrity {
        table.add_row(vec![
            Cell::new("Integrity"),
            Cell::new(format!(
                "{} records: {} missing, {} duplicate, {} invalid",
                format_number(i.total_records),
                i.missing_field_count,
                i.duplicate_title_count,
                i.invalid_citation_count
            )),
            score_cell(scores.integrity),
        ]);
    }

    table
}

fn distribution_table(label: &str, entries: &[(&str, u64)]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![label, "Count"]);
    for (value, count) in entries {
        table.add_row(vec![Cell::new(value), Cell::new(format_number(*count))]);
    }
    table.to_string()
}

fn score_color(score: f64) -> Color {
    match HealthStatus::from_score(score) {
        HealthStatus::Healthy => Color::Green,
        HealthStatus::IssuesDetected => Color::Yellow,
        HealthStatus::Critical => Color::Red,
    }
}

fn score_cell(score: Option<f64>) -> Cell {
    match score {
        Some(score) => Cell::new(format!("{score:.1}")).fg(score_color(score)),
        None => Cell::new("-"),
    }
}

fn status_cell(status: HealthStatus) -> Cell {
    let color = match status {
        HealthStatus::Healthy => Color::Green,
        HealthStatus::IssuesDetected => Color::Yellow,
        HealthStatus::Critical => Color::Red,
    };
    Cell::new(status.label()).fg(color)
}

fn format_latency(latency: Duration) -> String {
    let millis = latency.as_secs_f64() * 1000.0;
    if millis < 1000.0 {
        format!("{millis:.1}ms")
    } else {
        format!("{:.2}s", latency.as_secs_f64())
    }
}

fn format_optional_latency(latency: Option<Duration>) -> String {
    latency.map(format_latency).unwrap_or_else(|| "-".to_string())
}

/// Format number with thousands separators.
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}
