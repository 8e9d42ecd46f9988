//! Built-in probe query corpus.

use serde::{Deserialize, Serialize};

/// What a probe query is meant to exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    BasicLookup,
    Semantic,
    Technical,
    CitationImpact,
    CrossDomain,
    /// Supplied by the user rather than the built-in corpus.
    Custom,
}

/// A natural-language query sent to the store by the probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeQuery {
    pub text: String,
    pub kind: QueryKind,
}

impl ProbeQuery {
    pub fn new(text: impl Into<String>, kind: QueryKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn custom(text: impl Into<String>) -> Self {
        Self::new(text, QueryKind::Custom)
    }
}

const BUILTIN: &[(QueryKind, &str)] = &[
    (QueryKind::BasicLookup, "Find papers about machine learning"),
    (QueryKind::BasicLookup, "Show me research on neural networks"),
    (QueryKind::BasicLookup, "What papers discuss computer vision?"),
    (QueryKind::BasicLookup, "Find papers by authors with last name Smith"),
    (QueryKind::BasicLookup, "Show papers published in 2023"),
    (QueryKind::BasicLookup, "Find papers in cs.AI category"),
    (QueryKind::Semantic, "What are the latest developments in deep learning?"),
    (QueryKind::Semantic, "Find papers about natural language processing applications"),
    (QueryKind::Semantic, "Show me research on autonomous vehicles and robotics"),
    (QueryKind::Semantic, "What papers discuss medical AI and healthcare?"),
    (QueryKind::Semantic, "Find papers about cybersecurity and machine learning"),
    (QueryKind::Semantic, "Show research on climate change and data science"),
    (QueryKind::Technical, "Find papers about transformer architectures"),
    (QueryKind::Technical, "Show me research on reinforcement learning algorithms"),
    (QueryKind::Technical, "What papers discuss graph neural networks?"),
    (QueryKind::Technical, "Find papers about computer vision in healthcare"),
    (QueryKind::Technical, "Show me research on federated learning"),
    (QueryKind::Technical, "Find papers about adversarial machine learning"),
    (QueryKind::CitationImpact, "Show me the most cited papers"),
    (QueryKind::CitationImpact, "Find recent papers with high impact"),
    (QueryKind::CitationImpact, "What are the trending research topics?"),
    (QueryKind::CitationImpact, "Show papers with more than 100 citations"),
    (QueryKind::CrossDomain, "Find interdisciplinary papers combining AI and biology"),
    (QueryKind::CrossDomain, "Show research connecting machine learning and physics"),
    (QueryKind::CrossDomain, "Find papers about AI applications in finance"),
];

/// The 25 built-in queries, grouped by kind.
pub fn builtin_corpus() -> Vec<ProbeQuery> {
    BUILTIN
        .iter()
        .map(|(kind, text)| ProbeQuery::new(*text, *kind))
        .collect()
}
