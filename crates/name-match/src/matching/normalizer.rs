use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use unidecode::unidecode;

static NON_CANONICAL_CHARS: OnceLock<Regex> = OnceLock::new();

/// One of the fixed canonicalization steps applied to a company name.
///
/// Variants are declared in pipeline order, so ordered collections of rules list
/// them the way they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationRule {
    Trim,
    Lowercase,
    Deaccent,
    StripPunctuation,
    CollapseWhitespace,
}

impl NormalizationRule {
    pub const PIPELINE: [NormalizationRule; 5] = [
        NormalizationRule::Trim,
        NormalizationRule::Lowercase,
        NormalizationRule::Deaccent,
        NormalizationRule::StripPunctuation,
        NormalizationRule::CollapseWhitespace,
    ];

    pub fn id(self) -> &'static str {
        match self {
            NormalizationRule::Trim => "trim",
            NormalizationRule::Lowercase => "lowercase",
            NormalizationRule::Deaccent => "deaccent",
            NormalizationRule::StripPunctuation => "strip_punctuation",
            NormalizationRule::CollapseWhitespace => "collapse_whitespace",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NormalizationRule::Trim => "leading/trailing whitespace removed",
            NormalizationRule::Lowercase => "lowercased",
            NormalizationRule::Deaccent => "accents removed",
            NormalizationRule::StripPunctuation => "punctuation removed",
            NormalizationRule::CollapseWhitespace => "extra whitespace removed",
        }
    }

    fn apply(self, value: &str) -> String {
        match self {
            NormalizationRule::Trim => value.trim_matches(is_space).to_string(),
            NormalizationRule::Lowercase => value.to_lowercase(),
            NormalizationRule::Deaccent => unidecode(value),
            NormalizationRule::StripPunctuation => {
                non_canonical_chars().replace_all(value, "").into_owned()
            }
            // Runs exposed at either end by the earlier steps are dropped too, which
            // keeps the pipeline idempotent.
            NormalizationRule::CollapseWhitespace => {
                value
                    .split(is_space)
                    .filter(|part| !part.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ")
            }
        }
    }
}

impl fmt::Display for NormalizationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A normalized company name together with the rules that changed it, in the order
/// they fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedName {
    pub value: String,
    pub rules: Vec<NormalizationRule>,
}

impl NormalizedName {
    pub fn changed(&self) -> bool {
        !self.rules.is_empty()
    }
}

/// Reduce a raw name to its canonical comparable form.
///
/// Each rule is compared against the string as it stood right before that rule ran
/// and recorded only when it made a change.
pub fn normalize(raw: &str) -> NormalizedName {
    let mut value = raw.to_string();
    let mut rules = Vec::new();

    for rule in NormalizationRule::PIPELINE {
        let next = rule.apply(&value);
        if next != value {
            rules.push(rule);
            value = next;
        }
    }

    NormalizedName { value, rules }
}

/// Unicode whitespace plus the ASCII information separators U+001C..=U+001F.
pub(crate) fn is_space(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&ch)
}

fn non_canonical_chars() -> &'static Regex {
    NON_CANONICAL_CHARS.get_or_init(|| {
        Regex::new(r"[^a-z0-9\s\x1C-\x1F]").expect("punctuation pattern compiles")
    })
}
