//! Company-name comparison pipeline.
//!
//! Raw names are normalized independently, the normalized forms are scored with a
//! sequence-matching ratio, and the raw/normalized pairs are classified into
//! difference categories. Every function here is pure and total.

mod categories;
mod comparison;
mod explanation;
mod normalizer;
mod request;
mod similarity;

pub use categories::{categorize, DifferenceCategory};
pub use comparison::{compare, ComparisonResult};
pub use normalizer::{normalize, NormalizationRule, NormalizedName};
pub use request::{ComparisonRequest, RequestError};
pub use similarity::{similarity, MatchingBlock, SequenceMatcher};

/// Name pairs that exercise each rule and category, used by the demo drivers.
pub const SAMPLE_PAIRS: &[(&str, &str)] = &[
    ("Acme Corp.", "acme corp"),
    ("Café Müller", "Cafe Muller"),
    ("ABC Inc", "XYZ Ltd"),
    ("Company 123", "Company 456"),
    ("  Smith & Sons ", "Smith and Sons"),
    ("Nordic_Trade AB", "Nordic Trade AB"),
];
