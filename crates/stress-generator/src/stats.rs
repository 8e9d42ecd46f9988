//! Summary statistics over generated records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use stress_core::SyntheticRecord;

/// Share of generated records belonging to one research field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldShare {
    pub field: String,
    pub count: u64,
    pub percentage: f64,
}

/// Running statistics for a set of generated records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub total_records: u64,
    pub total_citations: i64,
    pub field_counts: BTreeMap<String, u64>,
    pub category_counts: BTreeMap<String, u64>,
    pub type_counts: BTreeMap<String, u64>,
}

impl GenerationStats {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a SyntheticRecord>) -> Self {
        let mut stats = Self::default();
        for record in records {
            stats.observe(record);
        }
        stats
    }

    /// Add one record to the statistics.
    pub fn observe(&mut self, record: &SyntheticRecord) {
        self.total_records += 1;
        self.total_citations += record.citation_count;
        *self.field_counts.entry(record.field.clone()).or_default() += 1;
        *self.category_counts.entry(record.category.clone()).or_default() += 1;
        *self
            .type_counts
            .entry(record.record_type.label().to_string())
            .or_default() += 1;
    }

    pub fn distinct_fields(&self) -> usize {
        self.field_counts.len()
    }

    pub fn distinct_categories(&self) -> usize {
        self.category_counts.len()
    }

    pub fn distinct_types(&self) -> usize {
        self.type_counts.len()
    }

    pub fn average_citations(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            self.total_citations as f64 / self.total_records as f64
        }
    }

    /// The `limit` most common research fields, largest first.
    pub fn top_fields(&self, limit: usize) -> Vec<FieldShare> {
        let mut fields: Vec<(&String, &u64)> = self.field_counts.iter().collect();
        fields.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

        fields
            .into_iter()
            .take(limit)
            .map(|(field, count)| FieldShare {
                field: field.clone(),
                count: *count,
                percentage: *count as f64 / self.total_records as f64 * 100.0,
            })
            .collect()
    }
}
