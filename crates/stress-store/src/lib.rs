//! Reference implementations of [`stress_core::KnowledgeStore`].
//!
//! - [`MemoryStore`] - documents held in a `Vec`, with hooks for seeding
//!   corrupt data and simulating an outage
//! - [`JsonlStore`] - one JSON document per line in a local file

mod eval;
pub mod jsonl;
pub mod memory;

pub use jsonl::JsonlStore;
pub use memory::MemoryStore;
