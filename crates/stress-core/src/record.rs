//! Research paper record types.
//!
//! A [`SyntheticRecord`] is what the generator produces and what gets moved
//! into the store on write. A [`StoredDocument`] is the store-side shape of
//! the same data, loose enough to represent records damaged by other writers
//! (empty titles, negative citation counts). A [`Row`] is what a read query
//! returns.

use crate::error::ValidationError;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// arXiv-style subject categories a record can be filed under.
pub const CATEGORIES: &[&str] = &[
    "cs.AI",
    "cs.LG",
    "cs.CV",
    "cs.CL",
    "cs.IR",
    "cs.NE",
    "cs.DC",
    "cs.DS",
    "cs.HC",
    "cs.RO",
    "cs.CR",
    "cs.CC",
    "cs.CG",
    "cs.GT",
    "cs.MA",
    "math.CO",
    "math.OC",
    "math.ST",
    "math.PR",
    "math.NA",
    "physics.data-an",
    "physics.comp-ph",
    "physics.bio-ph",
    "stat.ML",
    "stat.AP",
    "stat.CO",
    "stat.ME",
    "q-bio.QM",
    "q-bio.GN",
    "q-bio.BM",
    "q-bio.NC",
    "econ.EM",
    "econ.TH",
    "cs.other",
    "other",
];

/// Research fields a record can belong to.
pub const RESEARCH_FIELDS: &[&str] = &[
    "Machine Learning",
    "Computer Vision",
    "Natural Language Processing",
    "Artificial Intelligence",
    "Data Science",
    "Human-Computer Interaction",
    "Robotics",
    "Computer Graphics",
    "Cybersecurity",
    "Distributed Systems",
    "Mathematics",
    "Statistics",
    "Physics",
    "Biology",
    "Economics",
    "Quantum Computing",
    "Blockchain",
    "Internet of Things",
    "Cloud Computing",
    "Software Engineering",
    "Database Systems",
    "Operating Systems",
];

/// Publication type of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaperType {
    ResearchPaper,
    ReviewPaper,
    ConferencePaper,
    JournalArticle,
    Preprint,
    WorkshopPaper,
    ShortPaper,
    PositionPaper,
    TechnicalReport,
    SurveyPaper,
}

impl PaperType {
    /// Every legal paper type, in declaration order.
    pub const ALL: [PaperType; 10] = [
        PaperType::ResearchPaper,
        PaperType::ReviewPaper,
        PaperType::ConferencePaper,
        PaperType::JournalArticle,
        PaperType::Preprint,
        PaperType::WorkshopPaper,
        PaperType::ShortPaper,
        PaperType::PositionPaper,
        PaperType::TechnicalReport,
        PaperType::SurveyPaper,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            PaperType::ResearchPaper => "Research Paper",
            PaperType::ReviewPaper => "Review Paper",
            PaperType::ConferencePaper => "Conference Paper",
            PaperType::JournalArticle => "Journal Article",
            PaperType::Preprint => "Preprint",
            PaperType::WorkshopPaper => "Workshop Paper",
            PaperType::ShortPaper => "Short Paper",
            PaperType::PositionPaper => "Position Paper",
            PaperType::TechnicalReport => "Technical Report",
            PaperType::SurveyPaper => "Survey Paper",
        }
    }
}

impl std::fmt::Display for PaperType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The trailing window publication dates are drawn from.
///
/// A date `d` is inside the window when `reference - (days - 1) <= d <= reference`,
/// i.e. it lies `0..days` days before the reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationWindow {
    /// Most recent date in the window ("today" for the run).
    pub reference_date: NaiveDate,
    /// Window length in days.
    pub days: u32,
}

impl PublicationWindow {
    /// Default window length (ten years).
    pub const DEFAULT_DAYS: u32 = 3650;

    /// Create a ten-year window ending at `reference_date`.
    pub fn ending_at(reference_date: NaiveDate) -> Self {
        Self {
            reference_date,
            days: Self::DEFAULT_DAYS,
        }
    }

    /// Date lying `days_ago` days before the reference date.
    pub fn date_for(&self, days_ago: u32) -> NaiveDate {
        self.reference_date - Duration::days(i64::from(days_ago))
    }

    /// Number of days between `date` and the reference date.
    pub fn days_since(&self, date: NaiveDate) -> i64 {
        (self.reference_date - date).num_days()
    }

    /// Whether `date` lies inside the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        let age = self.days_since(date);
        age >= 0 && age < i64::from(self.days)
    }
}

/// One generated research paper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticRecord {
    pub id: Uuid,
    pub title: String,
    /// Ordered author names, formatted `"Surname, G."` or `"Surname, G. M."`.
    pub authors: Vec<String>,
    pub category: String,
    pub field: String,
    pub record_type: PaperType,
    pub publication_date: NaiveDate,
    pub citation_count: i64,
    pub abstract_text: String,
    pub arxiv_id: String,
    pub venue: String,
}

impl SyntheticRecord {
    /// Check the record against the generator's invariants.
    ///
    /// A failure here is a generator bug, never a runtime condition.
    pub fn validate(&self, window: &PublicationWindow) -> Result<(), ValidationError> {
        if self.citation_count < 0 {
            return Err(ValidationError::NegativeCitationCount {
                id: self.id,
                value: self.citation_count,
            });
        }
        if !window.contains(self.publication_date) {
            return Err(ValidationError::DateOutOfWindow {
                id: self.id,
                date: self.publication_date,
            });
        }
        if !CATEGORIES.contains(&self.category.as_str()) {
            return Err(ValidationError::IllegalValue {
                id: self.id,
                field: "category",
                value: self.category.clone(),
            });
        }
        if !RESEARCH_FIELDS.contains(&self.field.as_str()) {
            return Err(ValidationError::IllegalValue {
                id: self.id,
                field: "field",
                value: self.field.clone(),
            });
        }
        if self.title.is_empty() || self.abstract_text.is_empty() || self.authors.is_empty() {
            return Err(ValidationError::EmptyField { id: self.id });
        }
        Ok(())
    }

    /// Authors joined the way the knowledge base displays them.
    pub fn authors_display(&self) -> String {
        self.authors.join(", ")
    }
}

/// Store-side representation of a record.
///
/// Text fields are optional and the citation count is signed so that the
/// integrity audit can observe data the generator would never produce.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredDocument {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub record_type: Option<PaperType>,
    #[serde(default)]
    pub publication_date: Option<NaiveDate>,
    #[serde(default)]
    pub citation_count: i64,
    #[serde(default)]
    pub abstract_text: Option<String>,
    #[serde(default)]
    pub arxiv_id: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
}

impl StoredDocument {
    /// Whether any required text field (title, authors, abstract) is empty or absent.
    pub fn is_missing_required_field(&self) -> bool {
        is_blank(&self.title)
            || self.authors.iter().all(|a| a.trim().is_empty())
            || is_blank(&self.abstract_text)
    }

    /// Project the document onto the columns a read query returns.
    pub fn to_row(&self) -> Row {
        Row {
            title: self.title.clone().unwrap_or_default(),
            authors: self.authors.clone(),
            category: self.category.clone().unwrap_or_default(),
            field: self.field.clone().unwrap_or_default(),
            citation_count: self.citation_count,
            venue: self.venue.clone(),
            publication_date: self.publication_date,
        }
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |s| s.trim().is_empty())
}

impl From<SyntheticRecord> for StoredDocument {
    fn from(record: SyntheticRecord) -> Self {
        Self {
            id: record.id.to_string(),
            title: Some(record.title),
            authors: record.authors,
            category: Some(record.category),
            field: Some(record.field),
            record_type: Some(record.record_type),
            publication_date: Some(record.publication_date),
            citation_count: record.citation_count,
            abstract_text: Some(record.abstract_text),
            arxiv_id: Some(record.arxiv_id),
            venue: Some(record.venue),
        }
    }
}

/// A row returned by a read query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub title: String,
    pub authors: Vec<String>,
    pub category: String,
    pub field: String,
    pub citation_count: i64,
    pub venue: Option<String>,
    pub publication_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn sample_record() -> SyntheticRecord {
        SyntheticRecord {
            id: Uuid::nil(),
            title: "Robust Transformer for Fraud Detection in Finance".to_string(),
            authors: vec!["Smith, J.".to_string(), "Okafor, A. B.".to_string()],
            category: "cs.LG".to_string(),
            field: "Machine Learning".to_string(),
            record_type: PaperType::Preprint,
            publication_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            citation_count: 12,
            abstract_text: "We address the challenging problem of fraud.".to_string(),
            arxiv_id: "2301.01234".to_string(),
            venue: "NeurIPS".to_string(),
        }
    }

    #[test]
    fn test_window_bounds() {
        let window = PublicationWindow::ending_at(reference());

        assert!(window.contains(reference()));
        assert!(window.contains(window.date_for(3649)));
        assert!(!window.contains(window.date_for(3650)));
        assert!(!window.contains(reference() + Duration::days(1)));
    }

    #[test]
    fn test_validate_accepts_generated_shape() {
        let window = PublicationWindow::ending_at(reference());
        assert!(sample_record().validate(&window).is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_citations() {
        let window = PublicationWindow::ending_at(reference());
        let mut record = sample_record();
        record.citation_count = -3;

        assert!(matches!(
            record.validate(&window),
            Err(ValidationError::NegativeCitationCount { value: -3, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_unknown_category() {
        let window = PublicationWindow::ending_at(reference());
        let mut record = sample_record();
        record.category = "cs.XX".to_string();

        assert!(matches!(
            record.validate(&window),
            Err(ValidationError::IllegalValue {
                field: "category",
                ..
            })
        ));
    }

    #[test]
    fn test_missing_required_field() {
        let mut doc = StoredDocument::from(sample_record());
        assert!(!doc.is_missing_required_field());

        doc.abstract_text = Some("   ".to_string());
        assert!(doc.is_missing_required_field());

        let mut doc = StoredDocument::from(sample_record());
        doc.authors.clear();
        assert!(doc.is_missing_required_field());

        let mut doc = StoredDocument::from(sample_record());
        doc.title = None;
        assert!(doc.is_missing_required_field());
    }

    #[test]
    fn test_paper_type_serde_name() {
        let json = serde_json::to_string(&PaperType::TechnicalReport).unwrap();
        assert_eq!(json, "\"technical_report\"");
        assert_eq!(PaperType::TechnicalReport.to_string(), "Technical Report");
    }
}
