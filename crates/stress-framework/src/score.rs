//! Health scoring.

use crate::error::HarnessError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Score awarded for a reachable store.
pub const CONNECTIVITY_SCORE: f64 = 100.0;

/// Overall health classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    /// Score of 70 or more.
    Healthy,
    /// Score in `[50, 70)`.
    IssuesDetected,
    /// Score below 50.
    Critical,
}

impl HealthStatus {
    pub fn from_score(score: f64) -> Self {
        if score >= 70.0 {
            HealthStatus::Healthy
        } else if score >= 50.0 {
            HealthStatus::IssuesDetected
        } else {
            HealthStatus::Critical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "HEALTHY",
            HealthStatus::IssuesDetected => "ISSUES DETECTED",
            HealthStatus::Critical => "CRITICAL",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            HealthStatus::Healthy => 0,
            HealthStatus::IssuesDetected => 1,
            HealthStatus::Critical => 2,
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Advice shown next to the overall score.
pub fn recommendation(score: f64) -> &'static str {
    if score >= 80.0 {
        "System ready for production"
    } else if score >= 60.0 {
        "Review performance metrics"
    } else {
        "Address critical issues before deployment"
    }
}

/// Per-component scores; `None` means the component did not contribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub connectivity: Option<f64>,
    pub loader: Option<f64>,
    pub probe: Option<f64>,
    pub integrity: Option<f64>,
}

impl ComponentScores {
    /// Contributed scores in component order.
    pub fn contributed(&self) -> Vec<f64> {
        [self.connectivity, self.loader, self.probe, self.integrity]
            .into_iter()
            .flatten()
            .collect()
    }

    /// Arithmetic mean of the contributed scores, zero when none contributed.
    pub fn overall(&self) -> f64 {
        let scores = self.contributed();
        if scores.is_empty() {
            0.0
        } else {
            scores.iter().sum::<f64>() / scores.len() as f64
        }
    }
}

/// How a harness run ended, as seen by the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarnessOutcome {
    Completed(HealthStatus),
    ConnectivityFailed,
    Cancelled,
    /// Configuration or startup error.
    Failed,
}

impl HarnessOutcome {
    pub fn from_error(error: &HarnessError) -> Self {
        match error {
            HarnessError::Connectivity(_) => HarnessOutcome::ConnectivityFailed,
            HarnessError::Cancelled { .. } => HarnessOutcome::Cancelled,
            HarnessError::Config(_) | HarnessError::Populate(_) => HarnessOutcome::Failed,
        }
    }

    /// Process exit code: 0 healthy, 1 issues or aborted run, 2 critical.
    pub fn exit_code(&self) -> i32 {
        match self {
            HarnessOutcome::Completed(status) => status.exit_code(),
            HarnessOutcome::ConnectivityFailed
            | HarnessOutcome::Cancelled
            | HarnessOutcome::Failed => 1,
        }
    }
}
