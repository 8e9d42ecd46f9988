//! Publication dates, citation counts and arXiv identifiers.

use chrono::{Datelike, NaiveDate};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use rand_distr::Exp1;
use stress_core::PublicationWindow;

/// Rate of the exponential citation factor (mean 10).
pub const CITATION_RATE: f64 = 0.1;

/// Draws how many days before the reference date a record was published.
///
/// Day `i` of the window has weight `days - i`, so recent dates are favoured
/// linearly.
#[derive(Debug, Clone)]
pub struct DaysAgoSampler {
    days: WeightedIndex<u64>,
}

impl DaysAgoSampler {
    pub fn new(window: &PublicationWindow) -> Self {
        // Every weight `length - i` is at least 1 and the window holds at
        // least one day, so `WeightedIndex::new` cannot fail. The weight sum
        // of a `u32` window fits in `u64`.
        let length = u64::from(window.days.max(1));
        Self {
            days: WeightedIndex::new((0..length).map(|i| length - i))
                .expect("publication window weights are positive"),
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        self.days.sample(rng) as u32
    }
}

/// Citation count for a record published `days_ago` days before the reference.
///
/// `base = max(0, Exp(0.1) * age_years * 10)`, then a uniform adjustment in
/// `-50..=200` is added and the result clamped at zero.
pub fn citation_count<R: Rng + ?Sized>(days_ago: u32, rng: &mut R) -> i64 {
    let age_years = f64::from(days_ago) / 365.0;
    let factor: f64 = Exp1.sample(rng);
    let base = (factor / CITATION_RATE * age_years * 10.0).max(0.0).round() as i64;
    let adjustment = rng.gen_range(-50..=200);
    (base + adjustment).max(0)
}

/// arXiv-style identifier `YYMM.NNNNN` for a publication date.
pub fn arxiv_id<R: Rng + ?Sized>(date: NaiveDate, rng: &mut R) -> String {
    format!(
        "{:02}{:02}.{:05}",
        date.year().rem_euclid(100),
        date.month(),
        rng.gen_range(1..100_000u32)
    )
}
