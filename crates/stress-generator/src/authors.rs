//! Author list generation.

use crate::vocabulary::{GIVEN_NAMES, SURNAMES};
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;

/// Relative weights for author counts 1 through 8.
pub const AUTHOR_COUNT_WEIGHTS: [u32; 8] = [5, 15, 25, 25, 15, 10, 3, 2];

/// Probability that a name carries a middle initial.
pub const MIDDLE_INITIAL_PROBABILITY: f64 = 0.3;

const INITIALS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Draws author lists with a weighted length distribution.
#[derive(Debug, Clone)]
pub struct AuthorSampler {
    counts: WeightedIndex<u32>,
}

impl AuthorSampler {
    pub fn new() -> Self {
        // Constant weights, all positive; covered by the tests below.
        Self {
            counts: WeightedIndex::new(AUTHOR_COUNT_WEIGHTS)
                .expect("author count weights are positive"),
        }
    }

    /// Number of authors for the next record (1..=8).
    pub fn sample_count<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.counts.sample(rng) + 1
    }

    /// Ordered author names for one record.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<String> {
        let count = self.sample_count(rng);
        (0..count).map(|_| author_name(rng)).collect()
    }
}

impl Default for AuthorSampler {
    fn default() -> Self {
        Self::new()
    }
}

/// One name formatted `"Surname, G."` or `"Surname, G. M."`.
pub fn author_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let surname = SURNAMES.choose(rng).copied().unwrap_or("Doe");
    let given = GIVEN_NAMES.choose(rng).copied().unwrap_or("Jane");
    let initial = given.chars().next().unwrap_or('J');

    if rng.gen_bool(MIDDLE_INITIAL_PROBABILITY) {
        let middle = char::from(INITIALS[rng.gen_range(0..INITIALS.len())]);
        format!("{surname}, {initial}. {middle}.")
    } else {
        format!("{surname}, {initial}.")
    }
}
