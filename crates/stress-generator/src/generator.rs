//! Main record generator.

use crate::authors::AuthorSampler;
use crate::dates::{arxiv_id, citation_count, DaysAgoSampler};
use crate::template::{generate_abstract, generate_title};
use crate::vocabulary::VENUES;
use chrono::{NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use stress_core::{PaperType, PublicationWindow, SyntheticRecord, CATEGORIES, RESEARCH_FIELDS};

/// Generator of synthetic research paper records.
///
/// All randomness, record ids included, comes from one seeded `StdRng`, so
/// two generators with the same seed and reference date produce identical
/// records.
pub struct RecordGenerator {
    seed: u64,
    rng: StdRng,
    window: PublicationWindow,
    days_ago: DaysAgoSampler,
    authors: AuthorSampler,
    generated: u64,
}

impl RecordGenerator {
    /// Create a generator. Without a seed, one is drawn from OS entropy.
    ///
    /// The reference date defaults to today (UTC).
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        tracing::info!("Record generator seed: {seed}");

        let window = PublicationWindow::ending_at(Utc::now().date_naive());
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            days_ago: DaysAgoSampler::new(&window),
            window,
            authors: AuthorSampler::new(),
            generated: 0,
        }
    }

    /// Pin the date publication windows end at.
    pub fn with_reference_date(mut self, reference_date: NaiveDate) -> Self {
        self.window = PublicationWindow {
            reference_date,
            days: self.window.days,
        };
        self
    }

    /// The effective seed; pass it back to [`RecordGenerator::new`] to replay a run.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn window(&self) -> &PublicationWindow {
        &self.window
    }

    /// Number of records produced so far.
    pub fn generated(&self) -> u64 {
        self.generated
    }

    /// Generate one record.
    pub fn generate_one(&mut self) -> SyntheticRecord {
        let rng = &mut self.rng;

        let id = uuid::Builder::from_random_bytes(rng.gen()).into_uuid();
        let title = generate_title(rng);
        let authors = self.authors.sample(rng);
        let category = pick(CATEGORIES, rng);
        let field = pick(RESEARCH_FIELDS, rng);
        let record_type = PaperType::ALL
            .choose(rng)
            .copied()
            .unwrap_or(PaperType::ResearchPaper);

        let days_ago = self.days_ago.sample(rng);
        let publication_date = self.window.date_for(days_ago);
        let citation_count = citation_count(days_ago, rng);

        let abstract_text = generate_abstract(rng);
        let arxiv_id = arxiv_id(publication_date, rng);
        let venue = pick(VENUES, rng);

        self.generated += 1;

        SyntheticRecord {
            id,
            title,
            authors,
            category,
            field,
            record_type,
            publication_date,
            citation_count,
            abstract_text,
            arxiv_id,
            venue,
        }
    }

    /// Generate exactly `count` records.
    pub fn generate_batch(&mut self, count: usize) -> Vec<SyntheticRecord> {
        self.records(count).collect()
    }

    /// Lazily generate `count` records.
    pub fn records(&mut self, count: usize) -> RecordIterator<'_> {
        RecordIterator {
            generator: self,
            remaining: count,
        }
    }
}

fn pick<R: Rng + ?Sized>(values: &[&str], rng: &mut R) -> String {
    values.choose(rng).copied().unwrap_or_default().to_string()
}

/// Iterator that lazily generates records.
pub struct RecordIterator<'a> {
    generator: &'a mut RecordGenerator,
    remaining: usize,
}

impl Iterator for RecordIterator<'_> {
    type Item = SyntheticRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.generate_one())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RecordIterator<'_> {}
