// src/kind.rs
//! The kinds of identification numbers and the layout each one follows

use std::{fmt, ops::Range};

use crate::checksum::{
    Algorithm, PRIVATE_ENTITY_COEFFICIENTS, PUBLIC_ENTITY_COEFFICIENTS,
};

/// Length of a cédula.
pub const CEDULA_LENGTH: usize = 10;

/// Length of every RUC form.
pub const RUC_LENGTH: usize = 13;

/// Kind of Ecuadorian identification number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IdKind {
    /// National identity number of a natural person.
    Cedula,
    /// Taxpayer number of a natural person, a cédula followed by an establishment code.
    NaturalPersonRuc,
    /// Taxpayer number of a private company.
    PrivateEntityRuc,
    /// Taxpayer number of a public-sector institution.
    PublicEntityRuc,
}

impl IdKind {
    /// Every kind, in the order [`crate::Validator::identify`] considers them.
    pub const ALL: [Self; 4] = [
        Self::Cedula,
        Self::NaturalPersonRuc,
        Self::PrivateEntityRuc,
        Self::PublicEntityRuc,
    ];

    /// Number of digits a number of this kind must have.
    pub const fn length(self) -> usize {
        match self {
            Self::Cedula => CEDULA_LENGTH,
            Self::NaturalPersonRuc | Self::PrivateEntityRuc | Self::PublicEntityRuc => RUC_LENGTH,
        }
    }

    /// Whether this is one of the taxpayer registry forms.
    pub const fn is_ruc(self) -> bool {
        !matches!(self, Self::Cedula)
    }

    /// Whether `digit` is allowed in third position.
    pub const fn allows_third_digit(self, digit: u8) -> bool {
        match self {
            Self::Cedula | Self::NaturalPersonRuc => digit <= 5,
            Self::PrivateEntityRuc => digit == 9,
            Self::PublicEntityRuc => digit == 6,
        }
    }

    /// Human-readable form of the third digit rule, used in error messages.
    pub const fn third_digit_rule(self) -> &'static str {
        match self {
            Self::Cedula | Self::NaturalPersonRuc => "0-5",
            Self::PrivateEntityRuc => "9",
            Self::PublicEntityRuc => "6",
        }
    }

    /// Digits holding the establishment code, if this kind has one.
    pub const fn establishment_range(self) -> Option<Range<usize>> {
        match self {
            Self::Cedula => None,
            Self::NaturalPersonRuc | Self::PrivateEntityRuc => Some(10..RUC_LENGTH),
            Self::PublicEntityRuc => Some(9..RUC_LENGTH),
        }
    }

    /// Position of the check digit. The digits before it are the checksum payload.
    pub const fn check_digit_index(self) -> usize {
        match self {
            Self::Cedula | Self::NaturalPersonRuc | Self::PrivateEntityRuc => 9,
            Self::PublicEntityRuc => 8,
        }
    }

    /// Checksum used to compute the check digit.
    pub const fn algorithm(self) -> Algorithm {
        match self {
            Self::Cedula | Self::NaturalPersonRuc => Algorithm::Modulo10,
            Self::PrivateEntityRuc => Algorithm::Modulo11 {
                coefficients: &PRIVATE_ENTITY_COEFFICIENTS,
            },
            Self::PublicEntityRuc => Algorithm::Modulo11 {
                coefficients: &PUBLIC_ENTITY_COEFFICIENTS,
            },
        }
    }

    /// Kind of RUC a 13 digit number belongs to, judged by its third digit alone.
    pub const fn ruc_for_third_digit(digit: u8) -> Option<Self> {
        match digit {
            0..=5 => Some(Self::NaturalPersonRuc),
            6 => Some(Self::PublicEntityRuc),
            9 => Some(Self::PrivateEntityRuc),
            _ => None,
        }
    }
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Cedula => "cédula",
            Self::NaturalPersonRuc => "natural person RUC",
            Self::PrivateEntityRuc => "private entity RUC",
            Self::PublicEntityRuc => "public entity RUC",
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn payload_matches_coefficients() {
        for kind in IdKind::ALL {
            if let Algorithm::Modulo11 { coefficients } = kind.algorithm() {
                assert_eq!(coefficients.len(), kind.check_digit_index(), "{kind}");
            } else {
                assert_eq!(kind.check_digit_index(), 9, "{kind}");
            }
        }
    }

    #[test]
    fn establishment_follows_check_digit() {
        for kind in IdKind::ALL.into_iter().filter(|k| k.is_ruc()) {
            let range = kind.establishment_range().expect("RUC forms have an establishment");
            assert_eq!(range.start, kind.check_digit_index() + 1, "{kind}");
            assert_eq!(range.end, kind.length(), "{kind}");
        }
        assert_eq!(IdKind::Cedula.establishment_range(), None);
    }

    #[rstest]
    #[case(0, Some(IdKind::NaturalPersonRuc))]
    #[case(5, Some(IdKind::NaturalPersonRuc))]
    #[case(6, Some(IdKind::PublicEntityRuc))]
    #[case(7, None)]
    #[case(8, None)]
    #[case(9, Some(IdKind::PrivateEntityRuc))]
    fn ruc_kind_from_third_digit(#[case] digit: u8, #[case] expected: Option<IdKind>) {
        assert_eq!(IdKind::ruc_for_third_digit(digit), expected);
        if let Some(kind) = expected {
            assert!(kind.allows_third_digit(digit));
        }
    }
}
