//! Harness orchestration for kb-stress.
//!
//! [`HarnessPipeline`] runs the connectivity check, the batch loader, the
//! query probe and the integrity audit against one
//! [`KnowledgeStore`](stress_core::KnowledgeStore), then folds their results
//! into an [`OverallReport`] with a single health score.
//!
//! # Example
//!
//! ```rust,no_run
//! use stress_framework::{format_table, HarnessConfig, HarnessPipeline};
//! use tokio_util::sync::CancellationToken;
//!
//! let config = HarnessConfig::new()
//!     .with_records(10_000)
//!     .with_batch_size(500)
//!     .with_seed(Some(42));
//!
//! let mut store = config.store.open();
//! let report = HarnessPipeline::new(config)
//!     .run(store.as_mut(), &CancellationToken::new())
//!     .unwrap();
//!
//! println!("{}", format_table(&report));
//! ```

pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod score;

pub use config::{HarnessConfig, StageSelection, StoreConfig};
pub use error::{ConfigError, HarnessError};
pub use pipeline::HarnessPipeline;
pub use report::{
    format_generation_stats, format_number, format_partial_results, format_table, OverallReport,
    StageResults,
};
pub use score::{recommendation, ComponentScores, HarnessOutcome, HealthStatus};
