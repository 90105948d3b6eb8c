//! Company-name matching debugger.
//!
//! Normalizes two free-text company names, scores how similar the normalized forms
//! are, and explains which normalization rules fired and what kind of difference
//! remains.
//!
//! ```rust
//! use name_match::matching::{compare, DifferenceCategory};
//!
//! let result = compare("Acme Corp.", "acme corp");
//! assert_eq!(result.normalized_name1, "acme corp");
//! assert_eq!(result.score, 1.0);
//! assert!(result.has_category(DifferenceCategory::PunctuationDifference));
//! ```

pub mod config;
pub mod error;
pub mod matching;
pub mod telemetry;

pub use matching::{compare, normalize, ComparisonResult};
