// src/report.rs
//! Flattened validation outcomes

use crate::error::{ErrorKind, IdError};

/// The outcome of a single validation, flattened into a validity flag, an error kind and a
/// human-readable message.
///
/// The message is empty when the number is valid.
///
/// # Example
/// ```
/// use ecuador_ids::{ErrorKind, ValidationReport, validate_national_id};
///
/// let report = ValidationReport::from(&validate_national_id("9926687856"));
/// assert!(!report.is_valid());
/// assert_eq!(report.error_kind(), Some(ErrorKind::InvalidProvinceCode));
///
/// let report = ValidationReport::from(&validate_national_id("0926687856"));
/// assert_eq!(report.message(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationReport {
    valid: bool,
    error: Option<ErrorKind>,
    message: String,
}

impl ValidationReport {
    /// Whether the number passed every check.
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Kind of the failed check, `None` when the number is valid.
    pub const fn error_kind(&self) -> Option<ErrorKind> {
        self.error
    }

    /// Why the number was rejected, or `""` if it wasn't.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<T> From<&Result<T, IdError>> for ValidationReport {
    fn from(result: &Result<T, IdError>) -> Self {
        match result {
            Ok(_) => Self {
                valid: true,
                error: None,
                message: String::new(),
            },
            Err(error) => Self {
                valid: false,
                error: Some(error.kind()),
                message: error.to_string(),
            },
        }
    }
}

impl<T> From<Result<T, IdError>> for ValidationReport {
    fn from(result: Result<T, IdError>) -> Self {
        Self::from(&result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Validator;

    #[test]
    fn report_of_rejection() {
        let report: ValidationReport = Validator::default()
            .validate_natural_person_tax_id("0926687856000")
            .into();
        assert!(!report.is_valid());
        assert_eq!(report.error_kind(), Some(ErrorKind::InvalidEstablishmentCode));
        assert_eq!(report.message(), "Establishment code cannot be 0");
    }

    #[test]
    fn report_only_reflects_its_own_call() {
        let validator = Validator::default();
        let failed = ValidationReport::from(validator.validate_national_id(""));
        let passed = ValidationReport::from(validator.validate_national_id("0926687856"));

        assert_eq!(failed.error_kind(), Some(ErrorKind::EmptyInput));
        assert!(passed.is_valid());
        assert_eq!(passed.error_kind(), None);
        assert_eq!(passed.message(), "");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn report_serializes() {
        let report = ValidationReport::from(Validator::default().validate_national_id("0996687856"));
        let json = serde_json::to_value(&report).expect("Failed to serialize report");
        assert_eq!(json["valid"], false);
        assert_eq!(json["error"], "invalid_third_digit");
    }
}
