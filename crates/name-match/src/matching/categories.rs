use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::OnceLock;
use super::normalizer::is_space;
use unidecode::unidecode;

static DIGITS: OnceLock<Regex> = OnceLock::new();
static NON_WORD: OnceLock<Regex> = OnceLock::new();

/// Qualitative label describing how two raw names diverge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifferenceCategory {
    AccentDifference,
    WhitespaceDifference,
    NumberDifference,
    PunctuationDifference,
    SemanticOrStructuralDifference,
}

impl DifferenceCategory {
    pub fn id(self) -> &'static str {
        match self {
            DifferenceCategory::AccentDifference => "accent_difference",
            DifferenceCategory::WhitespaceDifference => "whitespace_difference",
            DifferenceCategory::NumberDifference => "number_difference",
            DifferenceCategory::PunctuationDifference => "punctuation_difference",
            DifferenceCategory::SemanticOrStructuralDifference => {
                "semantic_or_structural_difference"
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DifferenceCategory::AccentDifference => "accent difference",
            DifferenceCategory::WhitespaceDifference => "whitespace difference",
            DifferenceCategory::NumberDifference => "number difference",
            DifferenceCategory::PunctuationDifference => "punctuation difference",
            DifferenceCategory::SemanticOrStructuralDifference => {
                "semantic or structural difference"
            }
        }
    }
}

impl fmt::Display for DifferenceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Label the kinds of divergence between two raw names and their normalized forms.
///
/// The raw-string checks only run when the raw names differ; the structural check
/// compares the normalized forms unconditionally. Several labels may fire at once.
pub fn categorize(
    raw1: &str,
    raw2: &str,
    norm1: &str,
    norm2: &str,
) -> BTreeSet<DifferenceCategory> {
    let mut categories = BTreeSet::new();

    if raw1 != raw2 {
        if unidecode(raw1) == unidecode(raw2) {
            categories.insert(DifferenceCategory::AccentDifference);
        }
        if without_whitespace(raw1) == without_whitespace(raw2) {
            categories.insert(DifferenceCategory::WhitespaceDifference);
        }
        if digits().replace_all(raw1, "") == digits().replace_all(raw2, "") {
            categories.insert(DifferenceCategory::NumberDifference);
        }
        if differs_only_in_punctuation(raw1, raw2) {
            categories.insert(DifferenceCategory::PunctuationDifference);
        }
    }

    if norm1 != norm2 {
        categories.insert(DifferenceCategory::SemanticOrStructuralDifference);
    }

    categories
}

fn without_whitespace(value: &str) -> String {
    value.chars().filter(|ch| !is_space(*ch)).collect()
}

/// Broader than the normalizer's class: word characters are Unicode letters, numbers,
/// and underscores, so combining marks and other connectors count as punctuation. Case is ignored, but a
/// pure case difference is not punctuation.
fn differs_only_in_punctuation(raw1: &str, raw2: &str) -> bool {
    let folded1 = raw1.to_lowercase();
    let folded2 = raw2.to_lowercase();
    folded1 != folded2
        && non_word().replace_all(&folded1, "") == non_word().replace_all(&folded2, "")
}

fn digits() -> &'static Regex {
    DIGITS.get_or_init(|| Regex::new(r"\d").expect("digit pattern compiles"))
}

fn non_word() -> &'static Regex {
    NON_WORD.get_or_init(|| {
        Regex::new(r"[^\p{L}\p{N}_]").expect("non-word pattern compiles")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::normalize;

    fn categories_for(raw1: &str, raw2: &str) -> BTreeSet<DifferenceCategory> {
        let norm1 = normalize(raw1).value;
        let norm2 = normalize(raw2).value;
        categorize(raw1, raw2, &norm1, &norm2)
    }

    #[test]
    fn identical_raw_names_have_no_categories() {
        assert!(categories_for("Acme Corp.", "Acme Corp.").is_empty());
        assert!(categories_for("", "").is_empty());
    }

    #[test]
    fn accent_only_difference() {
        let categories = categories_for("Café", "Cafe");
        assert!(categories.contains(&DifferenceCategory::AccentDifference));
        assert!(!categories.contains(&DifferenceCategory::SemanticOrStructuralDifference));
    }

    #[test]
    fn whitespace_only_difference_is_structural_after_normalization() {
        let categories = categories_for("Acme Corp", "AcmeCorp");
        assert!(categories.contains(&DifferenceCategory::WhitespaceDifference));
        assert!(categories.contains(&DifferenceCategory::SemanticOrStructuralDifference));
    }

    #[test]
    fn whitespace_check_covers_tabs() {
        let categories = categories_for("Acme\tCorp", "Acme Corp");
        assert!(categories.contains(&DifferenceCategory::WhitespaceDifference));
        assert!(!categories.contains(&DifferenceCategory::SemanticOrStructuralDifference));
    }

    #[test]
    fn digits_only_difference() {
        let categories = categories_for("Company 123", "Company 456");
        assert_eq!(
            categories,
            BTreeSet::from([
                DifferenceCategory::NumberDifference,
                DifferenceCategory::SemanticOrStructuralDifference,
            ])
        );
    }

    #[test]
    fn punctuation_check_uses_non_word_class() {
        let categories = categories_for("Acme_Corp", "Acme-Corp");
        assert!(!categories.contains(&DifferenceCategory::PunctuationDifference));

        let categories = categories_for("Acme, Inc.", "Acme Inc");
        assert!(categories.contains(&DifferenceCategory::PunctuationDifference));
        assert!(!categories.contains(&DifferenceCategory::SemanticOrStructuralDifference));
    }

    #[test]
    fn combining_marks_count_as_punctuation() {
        let categories = categories_for("Cafe\u{301} Ltd", "Cafe Ltd");
        assert!(categories.contains(&DifferenceCategory::AccentDifference));
        assert!(categories.contains(&DifferenceCategory::PunctuationDifference));

        let categories = categories_for("Acme\u{203F}Corp", "AcmeCorp");
        assert!(categories.contains(&DifferenceCategory::PunctuationDifference));
    }

    #[test]
    fn punctuation_check_ignores_case() {
        let categories = categories_for("Acme Corp.", "acme corp");
        assert_eq!(
            categories,
            BTreeSet::from([DifferenceCategory::PunctuationDifference])
        );
    }

    #[test]
    fn case_only_difference_fires_no_category() {
        assert!(categories_for("ACME", "acme").is_empty());
    }

    #[test]
    fn structural_check_ignores_raw_equality_guard() {
        let categories = categorize("same", "same", "left", "right");
        assert_eq!(
            categories,
            BTreeSet::from([DifferenceCategory::SemanticOrStructuralDifference])
        );
    }

    #[test]
    fn labels_match_ids() {
        for category in [
            DifferenceCategory::AccentDifference,
            DifferenceCategory::WhitespaceDifference,
            DifferenceCategory::NumberDifference,
            DifferenceCategory::PunctuationDifference,
            DifferenceCategory::SemanticOrStructuralDifference,
        ] {
            assert_eq!(category.label().replace(' ', "_"), category.id());
        }
    }
}
