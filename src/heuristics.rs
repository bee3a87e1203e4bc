//! Shared keyword-scoring primitives.
//!
//! Every rule-based scorer in the crate (red-flag detection, the local
//! provider tier, the multi-method assessment engine) is a table of phrase
//! lists fed through one of these routines, which keeps the scoring laws
//! auditable in a single place. Callers pass lower-cased text.

use regex::Regex;

/// A named check: does any of the phrases occur? `invert` flips the check
/// for absence-is-good indicators (e.g. emotional stability).
#[derive(Debug, Clone, Copy)]
pub struct Check {
    pub name: &'static str,
    pub phrases: &'static [&'static str],
    pub invert: bool,
}

impl Check {
    pub const fn any(name: &'static str, phrases: &'static [&'static str]) -> Self {
        Self {
            name,
            phrases,
            invert: false,
        }
    }

    pub const fn none(name: &'static str, phrases: &'static [&'static str]) -> Self {
        Self {
            name,
            phrases,
            invert: true,
        }
    }

    pub fn passes(&self, text: &str) -> bool {
        contains_any(text, self.phrases) != self.invert
    }
}

/// True if any phrase occurs as a literal substring
pub fn contains_any(text: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|p| text.contains(p))
}

/// Phrases that occur in `text`, in list-declaration order
pub fn matched_phrases(text: &str, phrases: &'static [&'static str]) -> Vec<&'static str> {
    phrases
        .iter()
        .filter(|p| text.contains(**p))
        .copied()
        .collect()
}

/// Total non-overlapping occurrences of any phrase, scanning left to right.
/// Phrases are matched as literals; the alternation is escaped before
/// compilation so punctuation in a phrase cannot change the pattern.
pub fn occurrence_count(text: &str, phrases: &[&str]) -> usize {
    if phrases.is_empty() {
        return 0;
    }
    let alternation = phrases
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|");
    let re = Regex::new(&alternation).expect("escaped literal alternation always compiles");
    re.find_iter(text).count()
}

/// Share of passing checks scaled to a 0..=10 score
pub fn check_ratio_score(text: &str, checks: &[Check]) -> f64 {
    if checks.is_empty() {
        return 0.0;
    }
    let passed = checks.iter().filter(|c| c.passes(text)).count();
    passed as f64 / checks.len() as f64 * 10.0
}

/// Occurrence count across all groups, weighted and capped at 10
pub fn weighted_occurrence_score(text: &str, groups: &[&[&str]], weight: f64) -> f64 {
    let hits: usize = groups.iter().map(|g| occurrence_count(text, g)).sum();
    (hits as f64 * weight).min(10.0)
}

/// Round to one decimal place, the precision all scores are reported at
pub fn round1(score: f64) -> f64 {
    (score * 10.0).round() / 10.0
}
