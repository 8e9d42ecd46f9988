//! Query evaluation over an in-process sequence of documents.
//!
//! Both reference stores keep (or stream) whole documents and answer the
//! read side of [`stress_core::KnowledgeStore`] with these helpers.

use std::collections::HashMap;
use stress_core::{Column, OrderBy, Predicate, QueryParams, Row, StoredDocument};

/// Whether `doc` matches a lowercase keyword in title, abstract or field.
fn matches_keyword(doc: &StoredDocument, keyword: &str) -> bool {
    [&doc.title, &doc.abstract_text, &doc.field]
        .into_iter()
        .flatten()
        .any(|text| text.to_lowercase().contains(keyword))
}

/// Run a read query over `docs`.
pub fn select<'a>(
    docs: impl IntoIterator<Item = &'a StoredDocument>,
    params: &QueryParams,
) -> Vec<Row> {
    let keyword = params.keyword.as_ref().map(|k| k.to_lowercase());
    let matching = docs
        .into_iter()
        .filter(|doc| keyword.as_deref().map_or(true, |kw| matches_keyword(doc, kw)));

    let mut rows: Vec<Row> = match params.order_by {
        // Natural order can stop early.
        OrderBy::Natural => matching
            .take(params.limit.unwrap_or(usize::MAX))
            .map(StoredDocument::to_row)
            .collect(),
        OrderBy::CitationsDesc => matching.map(StoredDocument::to_row).collect(),
    };

    if params.order_by == OrderBy::CitationsDesc {
        rows.sort_by(|a, b| b.citation_count.cmp(&a.citation_count));
        if let Some(limit) = params.limit {
            rows.truncate(limit);
        }
    }

    rows
}

/// Count the documents satisfying `predicate`.
pub fn count<'a>(docs: impl IntoIterator<Item = &'a StoredDocument>, predicate: &Predicate) -> u64 {
    docs.into_iter()
        .filter(|doc| match predicate {
            Predicate::All => true,
            Predicate::MissingRequiredField => doc.is_missing_required_field(),
            Predicate::NegativeCitationCount => doc.citation_count < 0,
        })
        .count() as u64
}

fn column_value(doc: &StoredDocument, column: Column) -> Option<&str> {
    let value = match column {
        Column::Title => doc.title.as_deref(),
        Column::Category => doc.category.as_deref(),
        Column::Field => doc.field.as_deref(),
    };
    value.filter(|v| !v.trim().is_empty())
}

/// Group documents by `column`, largest groups first (ties by value).
pub fn group_count<'a>(
    docs: impl IntoIterator<Item = &'a StoredDocument>,
    column: Column,
    limit: Option<usize>,
) -> Vec<(String, u64)> {
    let mut groups: HashMap<&str, u64> = HashMap::new();
    for doc in docs {
        if let Some(value) = column_value(doc, column) {
            *groups.entry(value).or_default() += 1;
        }
    }

    let mut groups: Vec<(String, u64)> = groups
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect();
    groups.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    if let Some(limit) = limit {
        groups.truncate(limit);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(title: &str, field: &str, category: &str, citations: i64) -> StoredDocument {
        StoredDocument {
            id: title.to_string(),
            title: Some(title.to_string()),
            authors: vec!["Smith, J.".to_string()],
            category: Some(category.to_string()),
            field: Some(field.to_string()),
            citation_count: citations,
            abstract_text: Some("An abstract.".to_string()),
            ..Default::default()
        }
    }

    fn corpus() -> Vec<StoredDocument> {
        vec![
            doc("Deep Learning for Vision", "Computer Vision", "cs.CV", 10),
            doc("Robust Clustering", "Machine Learning", "cs.LG", 300),
            doc("Vision Transformers", "Computer Vision", "cs.CV", 45),
            doc("Robust Clustering", "Statistics", "stat.ML", 2),
        ]
    }

    #[test]
    fn test_select_keyword_orders_by_citations() {
        let docs = corpus();
        let rows = select(&docs, &QueryParams::keyword_search("computer vision"));

        let titles: Vec<&str> = rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Vision Transformers", "Deep Learning for Vision"]);
    }

    #[test]
    fn test_select_keyword_matches_field_case_insensitively() {
        let docs = corpus();
        let rows = select(&docs, &QueryParams::keyword_search("STATISTICS"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].citation_count, 2);
    }

    #[test]
    fn test_select_sample_respects_limit() {
        let docs = corpus();
        assert_eq!(select(&docs, &QueryParams::sample(3)).len(), 3);
        assert_eq!(select(&docs, &QueryParams::sample(10)).len(), 4);
    }

    #[test]
    fn test_count_predicates() {
        let mut docs = corpus();
        docs[0].citation_count = -1;
        docs[1].abstract_text = None;

        assert_eq!(count(&docs, &Predicate::All), 4);
        assert_eq!(count(&docs, &Predicate::MissingRequiredField), 1);
        assert_eq!(count(&docs, &Predicate::NegativeCitationCount), 1);
    }

    #[test]
    fn test_group_count_order_and_limit() {
        let mut docs = corpus();
        docs.push(StoredDocument {
            id: "blank".to_string(),
            title: Some(String::new()),
            ..Default::default()
        });

        assert_eq!(
            group_count(&docs, Column::Title, None),
            vec![
                ("Robust Clustering".to_string(), 2),
                ("Deep Learning for Vision".to_string(), 1),
                ("Vision Transformers".to_string(), 1),
            ]
        );
        assert_eq!(
            group_count(&docs, Column::Category, Some(1)),
            vec![("cs.CV".to_string(), 2)]
        );
    }
}
