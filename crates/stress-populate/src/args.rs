//! CLI argument definitions for the batch loader.

use clap::Args;

/// Minutes per batch assumed when estimating how long a load will take.
const ESTIMATED_MINUTES_PER_BATCH: f64 = 2.0;

/// Arguments controlling how many records are loaded and how.
#[derive(Args, Clone, Debug)]
pub struct PopulateArgs {
    /// Number of records to generate and insert
    #[arg(long, short = 'r', default_value = "1000", env = "KB_STRESS_RECORDS")]
    pub records: u64,

    /// Records generated and written per batch
    #[arg(long, short = 'b', default_value = "100", env = "KB_STRESS_BATCH_SIZE")]
    pub batch_size: usize,

    /// Random seed for generation (same seed = same data; random when omitted)
    #[arg(long, env = "KB_STRESS_SEED")]
    pub seed: Option<u64>,
}

impl PopulateArgs {
    /// Number of batches the load will be split into.
    pub fn total_batches(&self) -> u64 {
        total_batches(self.records, self.batch_size)
    }

    /// Rough duration estimate shown before a load starts.
    pub fn estimated_minutes(&self) -> f64 {
        if self.batch_size == 0 {
            return 0.0;
        }
        self.records as f64 / self.batch_size as f64 * ESTIMATED_MINUTES_PER_BATCH
    }
}

/// `ceil(records / batch_size)`, zero for an empty batch size.
pub fn total_batches(records: u64, batch_size: usize) -> u64 {
    if batch_size == 0 {
        return 0;
    }
    records.div_ceil(batch_size as u64)
}
