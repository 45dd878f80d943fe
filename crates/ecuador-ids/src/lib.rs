//! Validation of Ecuadorian identification numbers: the cédula (national identity number) and
//! the RUC (taxpayer registry number) of natural persons, private entities and public entities.
//!
//! Every number goes through the same checks, stopping at the first failure: structure, province
//! code, third digit, establishment code (RUC only) and finally a Modulo-10 or Modulo-11 check
//! digit.
//!
//! # Example
//!
//! ```
//! use ecuador_ids::{ErrorKind, IdKind, validate_any, validate_national_id};
//!
//! let cedula = validate_national_id("0926687856").expect("valid cédula");
//! assert_eq!(cedula.province_name(), Some("Guayas"));
//!
//! let error = validate_national_id("0996687856").unwrap_err();
//! assert_eq!(error.kind(), ErrorKind::InvalidThirdDigit);
//!
//! let id = validate_any("0992397535001").expect("valid RUC");
//! assert_eq!(id.kind(), IdKind::PrivateEntityRuc);
//! ```

pub mod checksum;
pub mod config;
pub mod distribution;
pub mod error;
pub mod id;
pub mod kind;
pub mod province;
pub mod report;
pub mod validator;

// Re-export main types for convenience
pub use distribution::NumberDist;
pub use error::{ConfigError, ErrorKind, IdError};
pub use id::{Cedula, Identification, Ruc};
pub use kind::IdKind;
pub use report::ValidationReport;
pub use validator::Validator;

/// Validate a cédula with the default [`Validator`].
///
/// # Errors
/// Returns the first check the number fails.
pub fn validate_national_id(input: &str) -> Result<Cedula, IdError> {
    Validator::default().validate_national_id(input)
}

/// Validate a natural person RUC with the default [`Validator`].
///
/// # Errors
/// Returns the first check the number fails.
pub fn validate_natural_person_tax_id(input: &str) -> Result<Ruc, IdError> {
    Validator::default().validate_natural_person_tax_id(input)
}

/// Validate a private entity RUC with the default [`Validator`].
///
/// # Errors
/// Returns the first check the number fails.
pub fn validate_private_entity_tax_id(input: &str) -> Result<Ruc, IdError> {
    Validator::default().validate_private_entity_tax_id(input)
}

/// Validate a public entity RUC with the default [`Validator`].
///
/// # Errors
/// Returns the first check the number fails.
pub fn validate_public_entity_tax_id(input: &str) -> Result<Ruc, IdError> {
    Validator::default().validate_public_entity_tax_id(input)
}

/// Validate a number of any kind with the default [`Validator`].
///
/// # Errors
/// Returns the first check the number fails.
pub fn validate_any(input: &str) -> Result<Identification, IdError> {
    Validator::default().validate_any(input)
}
