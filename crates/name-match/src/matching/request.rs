use super::comparison::{compare, ComparisonResult};
use crate::config::InputLimits;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Two names submitted for comparison by a driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRequest {
    pub name1: String,
    pub name2: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("{field} is {actual} characters long; the limit is {limit}")]
    NameTooLong {
        field: &'static str,
        limit: usize,
        actual: usize,
    },
}

impl ComparisonRequest {
    pub fn new(name1: impl Into<String>, name2: impl Into<String>) -> Self {
        Self {
            name1: name1.into(),
            name2: name2.into(),
        }
    }

    /// Reject names the configured limits consider too long to score.
    pub fn validate(&self, limits: &InputLimits) -> Result<(), RequestError> {
        for (field, value) in [("name1", &self.name1), ("name2", &self.name2)] {
            let actual = value.chars().count();
            if actual > limits.max_name_chars {
                return Err(RequestError::NameTooLong {
                    field,
                    limit: limits.max_name_chars,
                    actual,
                });
            }
        }
        Ok(())
    }

    pub fn compare(&self) -> ComparisonResult {
        compare(&self.name1, &self.name2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_names_within_limit() {
        let limits = InputLimits { max_name_chars: 4 };
        let request = ComparisonRequest::new("Café", "");
        assert_eq!(request.validate(&limits), Ok(()));
        assert_eq!(request.compare().normalized_name1, "cafe");
    }

    #[test]
    fn rejects_overlong_name_with_field() {
        let limits = InputLimits { max_name_chars: 4 };
        let request = ComparisonRequest::new("Acme", "Acme Corp");
        let error = request.validate(&limits).expect_err("name2 too long");
        assert_eq!(
            error,
            RequestError::NameTooLong {
                field: "name2",
                limit: 4,
                actual: 9,
            }
        );
        assert_eq!(
            error.to_string(),
            "name2 is 9 characters long; the limit is 4"
        );
    }
}
