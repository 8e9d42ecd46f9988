//! Slot-filling for title and abstract templates.
//!
//! A template is plain text with `{name}` placeholders. Each distinct
//! placeholder is filled with one uniform draw from its slot vocabulary;
//! repeated occurrences of the same placeholder receive the same value.
//! Distinct placeholders never repeat a value already used in the same
//! template unless their vocabulary offers nothing else.

use crate::vocabulary::{Slot, ABSTRACT_SLOTS, ABSTRACT_TEMPLATES, TITLE_SLOTS, TITLE_TEMPLATES};
use rand::seq::SliceRandom;
use rand::Rng;

/// Fill every placeholder of `template` from `slots`.
///
/// Placeholders without a matching slot are left untouched.
pub fn fill_template<R: Rng + ?Sized>(template: &str, slots: &[Slot], rng: &mut R) -> String {
    let mut result = template.to_string();
    let mut search_from = 0;
    let mut used: Vec<&'static str> = Vec::new();

    while let Some(offset) = result[search_from..].find('{') {
        let start = search_from + offset;
        let Some(len) = result[start..].find('}') else {
            break;
        };
        let end = start + len;
        let name = &result[start + 1..end];

        match slots.iter().find(|(slot, _)| *slot == name) {
            Some((_, values)) => {
                let fresh: Vec<&'static str> =
                    values.iter().copied().filter(|v| !used.contains(v)).collect();
                let pool: &[&'static str] = if fresh.is_empty() {
                    *values
                } else {
                    fresh.as_slice()
                };
                let value = pool.choose(rng).copied().unwrap_or_default();
                used.push(value);
                let placeholder = format!("{{{name}}}");
                result = result.replace(&placeholder, value);
                search_from = start + value.len();
            }
            None => search_from = end + 1,
        }
    }

    result
}

/// Generate a title from a uniformly chosen title template.
pub fn generate_title<R: Rng + ?Sized>(rng: &mut R) -> String {
    let template = TITLE_TEMPLATES.choose(rng).copied().unwrap_or_default();
    fill_template(template, TITLE_SLOTS, rng)
}

/// Generate an abstract from a uniformly chosen abstract template.
pub fn generate_abstract<R: Rng + ?Sized>(rng: &mut R) -> String {
    let template = ABSTRACT_TEMPLATES.choose(rng).copied().unwrap_or_default();
    fill_template(template, ABSTRACT_SLOTS, rng)
}
