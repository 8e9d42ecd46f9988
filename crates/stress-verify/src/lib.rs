//! Read-side checks for the kb-stress harness.
//!
//! - [`ConnectivityCheck`] - ping, record count and sample retrieval
//! - [`QueryProbe`] - latency and success rate of sampled natural-language queries
//! - [`IntegrityAuditor`] - structural quality of the stored records
//!
//! All checks go through [`stress_core::KnowledgeStore`] read operations
//! only; none of them modifies the store.

pub mod args;
pub mod audit;
pub mod connectivity;
pub mod corpus;
pub mod probe;

pub use args::ProbeArgs;
pub use audit::IntegrityAuditor;
pub use connectivity::ConnectivityCheck;
pub use corpus::{builtin_corpus, ProbeQuery, QueryKind};
pub use probe::QueryProbe;
