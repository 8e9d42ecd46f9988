//! Configuration types for a harness run.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use stress_core::KnowledgeStore;
use stress_store::{JsonlStore, MemoryStore};
use stress_verify::{builtin_corpus, ProbeQuery};

/// Configuration for a harness run.
///
/// Built in code with the `with_*` methods or loaded from YAML:
///
/// ```yaml
/// records: 5000
/// batch_size: 250
/// test_queries: 10
/// seed: 42
/// stages:
///   load: true
///   probe: true
///   audit: true
/// store:
///   type: jsonl
///   path: /tmp/kb.jsonl
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Number of records to generate and load.
    pub records: u64,
    /// Records per loader batch.
    pub batch_size: usize,
    /// Number of probe queries to sample.
    pub test_queries: usize,
    /// Seed for generation and query sampling (random when absent).
    pub seed: Option<u64>,
    /// Which stages run after the connectivity check.
    pub stages: StageSelection,
    /// Store under test.
    pub store: StoreConfig,
    /// Probe corpus override (empty = built-in corpus).
    pub queries: Vec<String>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            records: 1000,
            batch_size: 100,
            test_queries: 20,
            seed: None,
            stages: StageSelection::default(),
            store: StoreConfig::default(),
            queries: Vec::new(),
        }
    }
}

impl HarnessConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn with_records(mut self, records: u64) -> Self {
        self.records = records;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_test_queries(mut self, test_queries: usize) -> Self {
        self.test_queries = test_queries;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_stages(mut self, stages: StageSelection) -> Self {
        self.stages = stages;
        self
    }

    pub fn with_store(mut self, store: StoreConfig) -> Self {
        self.store = store;
        self
    }

    pub fn with_queries(mut self, queries: Vec<String>) -> Self {
        self.queries = queries;
        self
    }

    /// Check value ranges before a run starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stages.load && self.batch_size == 0 {
            return Err(ConfigError::Invalid(
                "batch_size must be at least 1".to_string(),
            ));
        }
        if let StoreConfig::Jsonl { path } = &self.store {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Invalid(
                    "jsonl store requires a path".to_string(),
                ));
            }
        }
        if self.queries.iter().any(|q| q.trim().is_empty()) {
            return Err(ConfigError::Invalid("probe queries must not be empty".to_string()));
        }
        Ok(())
    }

    /// The corpus the probe samples from.
    pub fn corpus(&self) -> Vec<ProbeQuery> {
        if self.queries.is_empty() {
            builtin_corpus()
        } else {
            self.queries.iter().map(ProbeQuery::custom).collect()
        }
    }
}

/// Stages to run after the connectivity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageSelection {
    pub load: bool,
    pub probe: bool,
    pub audit: bool,
}

impl Default for StageSelection {
    fn default() -> Self {
        Self::all()
    }
}

impl StageSelection {
    pub fn all() -> Self {
        Self {
            load: true,
            probe: true,
            audit: true,
        }
    }

    /// Read-side checks only; nothing is written.
    pub fn checks_only() -> Self {
        Self {
            load: false,
            ..Self::all()
        }
    }
}

/// Store the harness runs against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreConfig {
    /// Fresh in-memory store.
    #[default]
    Memory,
    /// JSON-Lines file.
    Jsonl { path: PathBuf },
}

impl StoreConfig {
    /// Open the configured store.
    pub fn open(&self) -> Box<dyn KnowledgeStore + Send> {
        match self {
            StoreConfig::Memory => Box::new(MemoryStore::new()),
            StoreConfig::Jsonl { path } => Box::new(JsonlStore::new(path)),
        }
    }
}
