//! Harness pipeline: connectivity, load, probe and audit against one store.

use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::report::{OverallReport, StageResults};
use chrono::Utc;
use std::sync::Arc;
use stress_core::{HarnessEvent, HarnessObserver, KnowledgeStore, Stage, TracingObserver};
use stress_generator::RecordGenerator;
use stress_populate::BatchLoader;
use stress_verify::{ConnectivityCheck, IntegrityAuditor, QueryProbe};
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Runs the configured stages in order and scores the outcome.
///
/// The connectivity check always runs first and is the only fatal stage.
/// Cancellation is observed between stages and, inside the load stage,
/// between batches. A load cut short by cancellation still reports what it
/// wrote; the run then stops before the next stage.
pub struct HarnessPipeline {
    config: HarnessConfig,
    observer: Arc<dyn HarnessObserver>,
}

impl HarnessPipeline {
    pub fn new(config: HarnessConfig) -> Self {
        Self {
            config,
            observer: Arc::new(TracingObserver),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn HarnessObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    pub fn run<S: KnowledgeStore + ?Sized>(
        &self,
        store: &mut S,
        cancel: &CancellationToken,
    ) -> Result<OverallReport, HarnessError> {
        self.config.validate()?;

        let started_at = Utc::now();
        let seed = self.config.seed.unwrap_or_else(rand::random);
        info!("Starting harness run against {} (seed {seed})", store.describe());

        let mut results = StageResults::default();

        check_cancelled(cancel, Stage::Connectivity, &mut results)?;
        self.observer.on_event(&HarnessEvent::StageStarted(Stage::Connectivity));
        let connectivity = ConnectivityCheck.run(&*store)?;
        self.observer
            .on_event(&HarnessEvent::ConnectivityChecked(&connectivity));
        self.observer.on_event(&HarnessEvent::StageCompleted(Stage::Connectivity));
        results.connectivity = Some(connectivity);

        let stages = self.config.stages;

        if stages.load {
            check_cancelled(cancel, Stage::Load, &mut results)?;
            self.observer.on_event(&HarnessEvent::StageStarted(Stage::Load));
            let mut loader = BatchLoader::new(RecordGenerator::new(Some(seed)))
                .with_observer(Arc::clone(&self.observer));
            let aggregate = loader.run(self.config.records, self.config.batch_size, store, cancel)?;
            self.observer.on_event(&HarnessEvent::StageCompleted(Stage::Load));
            results.loader = Some(aggregate);
        }

        if stages.probe {
            check_cancelled(cancel, Stage::Probe, &mut results)?;
            self.observer.on_event(&HarnessEvent::StageStarted(Stage::Probe));
            let corpus = self.config.corpus();
            let mut probe =
                QueryProbe::new(Some(seed)).with_observer(Arc::clone(&self.observer));
            let aggregate = probe.run(&corpus, self.config.test_queries, &*store);
            self.observer.on_event(&HarnessEvent::StageCompleted(Stage::Probe));
            results.probe = Some(aggregate);
        }

        if stages.audit {
            check_cancelled(cancel, Stage::Audit, &mut results)?;
            self.observer.on_event(&HarnessEvent::StageStarted(Stage::Audit));
            let report = IntegrityAuditor::new()
                .with_observer(Arc::clone(&self.observer))
                .audit(&*store);
            self.observer.on_event(&HarnessEvent::StageCompleted(Stage::Audit));
            results.integrity = Some(report);
        }

        let report = OverallReport::new(started_at, Utc::now(), seed, results);
        info!(
            "Harness run finished: score {:.1} ({})",
            report.overall_score(),
            report.status()
        );
        Ok(report)
    }
}

fn check_cancelled(
    cancel: &CancellationToken,
    next: Stage,
    results: &mut StageResults,
) -> Result<(), HarnessError> {
    if cancel.is_cancelled() {
        info!("Cancellation requested, stopping before the {next} stage");
        Err(HarnessError::Cancelled {
            stage: next,
            completed: Box::new(std::mem::take(results)),
        })
    } else {
        Ok(())
    }
}
