//! CLI argument definitions for the read-side checks.

use clap::Args;

/// Arguments controlling the query probe.
#[derive(Args, Clone, Debug)]
pub struct ProbeArgs {
    /// Number of sample queries to run against the store
    #[arg(long, default_value = "20", env = "KB_STRESS_TEST_QUERIES")]
    pub test_queries: usize,

    /// Skip loading and only run the connectivity, probe and integrity checks
    #[arg(long)]
    pub test_only: bool,
}
