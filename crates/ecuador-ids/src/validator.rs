// src/validator.rs
//! The validation pipeline shared by every kind of identification number

use crate::{
    error::IdError,
    id::{Cedula, Identification, Ruc},
    kind::{CEDULA_LENGTH, IdKind, RUC_LENGTH},
    province::DEFAULT_MAX_PROVINCE_CODE,
};

/// Validates cédula and RUC numbers.
///
/// Every call runs the same ordered checks and stops at the first one that fails:
///
/// 1. the input is non-empty, made of ascii digits only, and has the length of its kind
/// 2. the province code (first two digits) is in range
/// 3. the third digit is allowed for the kind
/// 4. the establishment code is not zero (RUC only)
/// 5. the check digit matches the payload
///
/// A validator holds no state between calls, a single instance can be shared freely.
///
/// # Example
/// ```
/// use ecuador_ids::{ErrorKind, Validator};
///
/// let validator = Validator::default();
/// assert!(validator.validate_national_id("0926687856").is_ok());
///
/// let error = validator.validate_national_id("0926687858").unwrap_err();
/// assert_eq!(error.kind(), ErrorKind::ChecksumMismatch);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, bon::Builder)]
pub struct Validator {
    /// Highest accepted province code.
    #[builder(default = DEFAULT_MAX_PROVINCE_CODE)]
    pub(crate) max_province_code: u8,
}

impl Default for Validator {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Validator {
    /// Highest accepted province code.
    pub const fn max_province_code(&self) -> u8 {
        self.max_province_code
    }

    /// Validate a cédula (10 digits, Modulo-10).
    ///
    /// # Errors
    /// Returns the first check the number fails.
    pub fn validate_national_id(&self, input: &str) -> Result<Cedula, IdError> {
        self.validate(IdKind::Cedula, input)?;
        Ok(Cedula(input.to_owned()))
    }

    /// Validate the RUC of a natural person (13 digits, third digit 0-5, Modulo-10).
    ///
    /// # Errors
    /// Returns the first check the number fails.
    pub fn validate_natural_person_tax_id(&self, input: &str) -> Result<Ruc, IdError> {
        self.validate_ruc(IdKind::NaturalPersonRuc, input)
    }

    /// Validate the RUC of a private entity (13 digits, third digit 9, Modulo-11).
    ///
    /// # Errors
    /// Returns the first check the number fails.
    pub fn validate_private_entity_tax_id(&self, input: &str) -> Result<Ruc, IdError> {
        self.validate_ruc(IdKind::PrivateEntityRuc, input)
    }

    /// Validate the RUC of a public entity (13 digits, third digit 6, Modulo-11 over the
    /// first 8 digits).
    ///
    /// # Errors
    /// Returns the first check the number fails.
    pub fn validate_public_entity_tax_id(&self, input: &str) -> Result<Ruc, IdError> {
        self.validate_ruc(IdKind::PublicEntityRuc, input)
    }

    /// Validate a number whose kind is not known up front, see [`Self::identify`].
    ///
    /// # Errors
    /// Returns the first check the number fails.
    pub fn validate_any(&self, input: &str) -> Result<Identification, IdError> {
        let kind = self.identify(input).inspect_err(|error| {
            tracing::debug!(%error, "could not identify the kind of number");
        })?;

        match kind {
            IdKind::Cedula => self.validate_national_id(input).map(Identification::Cedula),
            kind => self.validate_ruc(kind, input).map(Identification::Ruc),
        }
    }

    /// Work out which kind of number `input` claims to be, without verifying its checksum.
    ///
    /// Ten digits are a cédula. Thirteen digits are a RUC whose kind is picked by the third
    /// digit: 0-5 natural person, 6 public entity, 9 private entity.
    ///
    /// # Errors
    /// Fails on structural defects, and on a 13 digit number whose province code or third digit
    /// fits no RUC kind. A length that is neither is reported against the closer of 10 and 13.
    pub fn identify(&self, input: &str) -> Result<IdKind, IdError> {
        let digits = parse_digits(input)?;

        match digits.as_slice() {
            d if d.len() == CEDULA_LENGTH => Ok(IdKind::Cedula),
            d @ [_, _, third, ..] if d.len() == RUC_LENGTH => {
                self.check_province(d)?;
                IdKind::ruc_for_third_digit(*third)
                    .ok_or(IdError::UnknownRucThirdDigit { digit: *third })
            }
            d => Err(IdError::WrongLength {
                expected: nearest_length(d.len()),
                actual: d.len(),
            }),
        }
    }

    /// Run the full pipeline for `kind`.
    ///
    /// # Errors
    /// Returns the first check the number fails.
    pub fn validate(&self, kind: IdKind, input: &str) -> Result<(), IdError> {
        // Numbers are personal data and never logged.
        let result = self.run_checks(kind, input);
        match &result {
            Ok(()) => tracing::trace!(%kind, "accepted identification number"),
            Err(error) => tracing::debug!(%kind, %error, kind_of_error = %error.kind(), "rejected identification number"),
        }
        result
    }

    /// Validate any RUC form and wrap it.
    fn validate_ruc(&self, kind: IdKind, input: &str) -> Result<Ruc, IdError> {
        self.validate(kind, input)?;
        Ok(Ruc {
            number: input.to_owned(),
            kind,
        })
    }

    /// The ordered checks, short-circuiting on the first failure.
    #[allow(
        clippy::indexing_slicing,
        reason = "the length of `digits` is verified before any position is read"
    )]
    fn run_checks(&self, kind: IdKind, input: &str) -> Result<(), IdError> {
        let digits = parse_digits(input)?;
        check_length(&digits, kind.length())?;
        self.check_province(&digits)?;
        check_third_digit(kind, digits[2])?;
        if let Some(range) = kind.establishment_range() {
            check_establishment(&digits[range])?;
        }
        check_digit(kind, &digits)
    }

    /// Province code must not exceed the configured maximum.
    #[allow(
        clippy::indexing_slicing,
        reason = "only called once the length has been verified"
    )]
    fn check_province(&self, digits: &[u8]) -> Result<(), IdError> {
        let code = number(&digits[..2]);
        if code > u32::from(self.max_province_code) {
            return Err(IdError::InvalidProvinceCode {
                code: u8::try_from(code).unwrap_or(u8::MAX),
                max: self.max_province_code,
            });
        }
        Ok(())
    }
}

/// The structural checks alone: non-empty, ascii digits only, exactly `expected` digits.
pub(crate) fn check_structure(input: &str, expected: usize) -> Result<(), IdError> {
    check_length(&parse_digits(input)?, expected)
}

/// Whichever of the cédula and RUC lengths is closer to `actual`.
const fn nearest_length(actual: usize) -> usize {
    if actual.abs_diff(CEDULA_LENGTH) <= actual.abs_diff(RUC_LENGTH) {
        CEDULA_LENGTH
    } else {
        RUC_LENGTH
    }
}

/// Split `input` into digit values, rejecting empty input and anything that isn't an ascii
/// digit.
fn parse_digits(input: &str) -> Result<Vec<u8>, IdError> {
    if input.is_empty() {
        return Err(IdError::EmptyInput);
    }

    input
        .bytes()
        .map(|b| {
            if b.is_ascii_digit() {
                Ok(b.wrapping_sub(b'0'))
            } else {
                Err(IdError::NonDigitCharacters)
            }
        })
        .collect()
}

fn check_length(digits: &[u8], expected: usize) -> Result<(), IdError> {
    if digits.len() == expected {
        Ok(())
    } else {
        Err(IdError::WrongLength {
            expected,
            actual: digits.len(),
        })
    }
}

fn check_third_digit(kind: IdKind, digit: u8) -> Result<(), IdError> {
    if kind.allows_third_digit(digit) {
        Ok(())
    } else {
        Err(IdError::InvalidThirdDigit { digit, kind })
    }
}

fn check_establishment(digits: &[u8]) -> Result<(), IdError> {
    if number(digits) < 1 {
        return Err(IdError::InvalidEstablishmentCode);
    }
    Ok(())
}

/// Compare the check digit against the one computed from the payload before it.
fn check_digit(kind: IdKind, digits: &[u8]) -> Result<(), IdError> {
    let (payload, rest) = digits.split_at(kind.check_digit_index());
    let found = rest.first().copied().ok_or(IdError::WrongLength {
        expected: kind.length(),
        actual: digits.len(),
    })?;

    let expected = kind.algorithm().check_digit(payload);
    if expected == Some(found) {
        Ok(())
    } else {
        Err(IdError::ChecksumMismatch { expected, found })
    }
}

/// Decimal value of a short run of digits.
#[allow(
    clippy::arithmetic_side_effects,
    reason = "callers pass at most four digits"
)]
fn number(digits: &[u8]) -> u32 {
    digits
        .iter()
        .fold(0, |acc, &digit| acc * 10 + u32::from(digit))
}
