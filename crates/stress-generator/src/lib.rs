//! Synthetic research paper generator for the kb-stress harness.
//!
//! This crate provides the [`RecordGenerator`] which produces realistic
//! research paper records from fixed vocabularies and distributions. The
//! generator uses a seeded RNG; the seed is always retrievable so any run can
//! be replayed.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │   RecordGenerator    │
//! │                      │
//! │  - seed              │
//! │  - rng (StdRng)      │
//! │  - window            │
//! └──────────┬───────────┘
//!            │  template / authors / dates
//!            ▼
//!     SyntheticRecord { id, title, authors, category, field, ... }
//! ```
//!
//! # Example
//!
//! ```rust
//! use stress_generator::{GenerationStats, RecordGenerator};
//!
//! let mut generator = RecordGenerator::new(Some(42));
//! let records = generator.generate_batch(100);
//! let stats = GenerationStats::from_records(&records);
//! assert_eq!(stats.total_records, 100);
//! ```
//!
//! # Distributions
//!
//! - Titles: 10 templates, slots filled uniformly
//! - Authors: 1-8 per record, weighted `[5, 15, 25, 25, 15, 10, 3, 2]`
//! - Publication date: trailing ten-year window, linearly favouring recent days
//! - Citations: exponential in paper age plus a uniform `-50..=200` adjustment
//! - Abstracts: 5 templates, independent of the title

pub mod authors;
pub mod dates;
pub mod generator;
pub mod stats;
pub mod template;
pub mod vocabulary;

pub use generator::{RecordGenerator, RecordIterator};
pub use stats::{FieldShare, GenerationStats};
