// src/error.rs
//! Error types for identification number validation

use thiserror::Error;

use crate::kind::IdKind;

/// Reason an identification number was rejected.
///
/// Validation stops at the first failing check, so an error only ever describes one defect.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum IdError {
    #[error("Value cannot be empty")]
    EmptyInput,
    #[error("Value may only contain the digits 0-9")]
    NonDigitCharacters,
    #[error("Value must have {expected} digits, found {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("Province code {code:02} is outside the range 00-{max:02}")]
    InvalidProvinceCode { code: u8, max: u8 },
    #[error("Third digit {digit} is not valid for a {kind}, expected {}", .kind.third_digit_rule())]
    InvalidThirdDigit { digit: u8, kind: IdKind },
    /// A 13 digit number whose kind was not given, with a third digit that fits no RUC kind.
    #[error("Third digit {digit} matches no kind of RUC, expected 0-6 or 9")]
    UnknownRucThirdDigit { digit: u8 },
    #[error("Establishment code cannot be 0")]
    InvalidEstablishmentCode,
    #[error("Check digit {found} does not validate against the initial digits")]
    ChecksumMismatch {
        /// `None` when the payload has no valid check digit at all.
        expected: Option<u8>,
        found: u8,
    },
}

impl IdError {
    /// The fieldless kind of this error, for matching without caring about the details.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput => ErrorKind::EmptyInput,
            Self::NonDigitCharacters => ErrorKind::NonDigitCharacters,
            Self::WrongLength { .. } => ErrorKind::WrongLength,
            Self::InvalidProvinceCode { .. } => ErrorKind::InvalidProvinceCode,
            Self::InvalidThirdDigit { .. } | Self::UnknownRucThirdDigit { .. } => {
                ErrorKind::InvalidThirdDigit
            }
            Self::InvalidEstablishmentCode => ErrorKind::InvalidEstablishmentCode,
            Self::ChecksumMismatch { .. } => ErrorKind::ChecksumMismatch,
        }
    }
}

/// Category of an [`IdError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorKind {
    EmptyInput,
    NonDigitCharacters,
    WrongLength,
    InvalidProvinceCode,
    InvalidThirdDigit,
    InvalidEstablishmentCode,
    ChecksumMismatch,
}

impl ErrorKind {
    /// Name of the variant, matches the enum variant exactly.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyInput => "EmptyInput",
            Self::NonDigitCharacters => "NonDigitCharacters",
            Self::WrongLength => "WrongLength",
            Self::InvalidProvinceCode => "InvalidProvinceCode",
            Self::InvalidThirdDigit => "InvalidThirdDigit",
            Self::InvalidEstablishmentCode => "InvalidEstablishmentCode",
            Self::ChecksumMismatch => "ChecksumMismatch",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while loading a [`crate::Validator`] from the environment.
#[allow(
    clippy::module_name_repetitions,
    reason = "It is conventional for error types to contain 'Error' at the end to provide context."
)]
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1} ({2})")]
    InvalidEnvVar(&'static str, String, String),
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    #[test]
    fn snapshot_error_messages() {
        assert_snapshot!(IdError::EmptyInput, @"Value cannot be empty");
        assert_snapshot!(IdError::NonDigitCharacters, @"Value may only contain the digits 0-9");
        assert_snapshot!(
            IdError::WrongLength { expected: 10, actual: 16 },
            @"Value must have 10 digits, found 16"
        );
        assert_snapshot!(
            IdError::InvalidProvinceCode { code: 99, max: 24 },
            @"Province code 99 is outside the range 00-24"
        );
        assert_snapshot!(
            IdError::InvalidProvinceCode { code: 5, max: 24 },
            @"Province code 05 is outside the range 00-24"
        );
        assert_snapshot!(
            IdError::InvalidThirdDigit { digit: 9, kind: IdKind::Cedula },
            @"Third digit 9 is not valid for a cédula, expected 0-5"
        );
        assert_snapshot!(
            IdError::InvalidThirdDigit { digit: 8, kind: IdKind::PrivateEntityRuc },
            @"Third digit 8 is not valid for a private entity RUC, expected 9"
        );
        assert_snapshot!(
            IdError::UnknownRucThirdDigit { digit: 7 },
            @"Third digit 7 matches no kind of RUC, expected 0-6 or 9"
        );
        assert_snapshot!(IdError::InvalidEstablishmentCode, @"Establishment code cannot be 0");
        assert_snapshot!(
            IdError::ChecksumMismatch { expected: Some(6), found: 8 },
            @"Check digit 8 does not validate against the initial digits"
        );
    }

    #[test]
    fn kind_names_match_variants() {
        let errors = [
            IdError::EmptyInput,
            IdError::NonDigitCharacters,
            IdError::WrongLength { expected: 13, actual: 12 },
            IdError::InvalidProvinceCode { code: 25, max: 24 },
            IdError::InvalidThirdDigit { digit: 7, kind: IdKind::NaturalPersonRuc },
            IdError::UnknownRucThirdDigit { digit: 8 },
            IdError::InvalidEstablishmentCode,
            IdError::ChecksumMismatch { expected: None, found: 0 },
        ];

        let names: Vec<_> = errors.iter().map(|e| e.kind().as_str()).collect();
        assert_eq!(
            names,
            [
                "EmptyInput",
                "NonDigitCharacters",
                "WrongLength",
                "InvalidProvinceCode",
                "InvalidThirdDigit",
                "InvalidThirdDigit",
                "InvalidEstablishmentCode",
                "ChecksumMismatch",
            ]
        );
    }
}
