//! Batch loader for the kb-stress harness.
//!
//! [`BatchLoader`] pulls records from a
//! [`RecordGenerator`](stress_generator::RecordGenerator) in fixed-size
//! batches, writes them to a [`KnowledgeStore`](stress_core::KnowledgeStore)
//! and accounts for every write attempt.

pub mod args;
pub mod error;
pub mod loader;

pub use args::PopulateArgs;
pub use error::PopulateError;
pub use loader::BatchLoader;
