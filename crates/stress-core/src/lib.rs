//! Core types for the kb-stress harness.
//!
//! This crate provides the foundational types shared by every stage of a
//! harness run:
//!
//! - [`SyntheticRecord`] - A generated research paper record
//! - [`StoredDocument`] / [`Row`] - Store-side shapes of a record
//! - [`KnowledgeStore`] - The boundary to the store under test
//! - [`metrics`] - Per-stage result types (batches, probes, integrity)
//! - [`HarnessObserver`] - Injected sink for structured progress events
//!
//! # Architecture
//!
//! ```text
//! stress-core (this crate)
//!    │
//!    ├─── stress-generator  (produces SyntheticRecord)
//!    ├─── stress-populate   (writes through KnowledgeStore)
//!    ├─── stress-verify     (reads through KnowledgeStore)
//!    ├─── stress-store      (implements KnowledgeStore)
//!    └─── stress-framework  (orchestrates, scores, reports)
//! ```

pub mod error;
pub mod metrics;
pub mod observer;
pub mod record;
pub mod store;

pub use error::{ConnectivityError, QueryError, ValidationError, WriteError};
pub use metrics::{
    BatchResult, ConnectivityResult, IntegrityReport, LoaderAggregate, ProbeAggregate,
    QueryProbeResult,
};
pub use observer::{HarnessEvent, HarnessObserver, NoopObserver, Stage, TracingObserver};
pub use record::{
    PaperType, PublicationWindow, Row, StoredDocument, SyntheticRecord, CATEGORIES,
    RESEARCH_FIELDS,
};
pub use store::{Column, KnowledgeStore, OrderBy, Predicate, QueryParams};
