use super::categories::{categorize, DifferenceCategory};
use super::normalizer::{normalize, NormalizationRule};
use super::similarity::similarity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Everything a caller needs to explain how two company names relate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub name1: String,
    pub name2: String,
    pub normalized_name1: String,
    pub normalized_name2: String,
    /// Similarity of the normalized names, rounded to three decimals.
    pub score: f64,
    pub normalization_applied: BTreeSet<NormalizationRule>,
    pub difference_categories: BTreeSet<DifferenceCategory>,
}

impl ComparisonResult {
    pub fn normalized_names_match(&self) -> bool {
        self.normalized_name1 == self.normalized_name2
    }

    pub fn has_category(&self, category: DifferenceCategory) -> bool {
        self.difference_categories.contains(&category)
    }
}

/// Normalize both names, score them, and classify what still differs.
pub fn compare(name1: &str, name2: &str) -> ComparisonResult {
    let first = normalize(name1);
    let second = normalize(name2);

    let score = round_score(similarity(&first.value, &second.value));
    let difference_categories = categorize(name1, name2, &first.value, &second.value);
    let normalization_applied = first
        .rules
        .iter()
        .chain(second.rules.iter())
        .copied()
        .collect();

    ComparisonResult {
        name1: name1.to_string(),
        name2: name2.to_string(),
        normalized_name1: first.value,
        normalized_name2: second.value,
        score,
        normalization_applied,
        difference_categories,
    }
}

/// Ties go to the even neighbour; ratios over powers of two land exactly on them.
fn round_score(score: f64) -> f64 {
    (score * 1000.0).round_ties_even() / 1000.0
}
