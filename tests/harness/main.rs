//! Harness integration tests.
//!
//! These tests drive the whole harness against file-backed stores:
//! 1. Generate or load deterministic records (fixed seed)
//! 2. Run the read-side checks against the same file
//! 3. Check the report and the process exit codes

mod cli;
mod jsonl_pipeline;
