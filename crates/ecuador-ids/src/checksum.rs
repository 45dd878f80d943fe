// src/checksum.rs
//! Check digit algorithms

/// Modulo-10 coefficients, alternating from 2.
pub const MODULO_10_COEFFICIENTS: [u8; 9] = [2, 1, 2, 1, 2, 1, 2, 1, 2];

/// Modulo-11 coefficients for private entity RUCs.
pub const PRIVATE_ENTITY_COEFFICIENTS: [u8; 9] = [4, 3, 2, 7, 6, 5, 4, 3, 2];

/// Modulo-11 coefficients for public entity RUCs.
pub const PUBLIC_ENTITY_COEFFICIENTS: [u8; 8] = [3, 2, 7, 6, 5, 4, 3, 2];

/// Weighted-digit checksum producing a single check digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Products of 10 or more are folded to the sum of their digits before summing.
    Modulo10,
    /// Products are summed directly.
    Modulo11 {
        /// One coefficient per payload digit.
        coefficients: &'static [u8],
    },
}

impl Algorithm {
    /// Calculate the check digit for a payload of decimal digits.
    ///
    /// Returns `None` when no single digit can be a valid check digit, which happens for
    /// Modulo-11 when the remainder is 1.
    ///
    /// # Example
    /// ```
    /// use ecuador_ids::checksum::Algorithm;
    ///
    /// assert_eq!(Algorithm::Modulo10.check_digit(&[0, 9, 2, 6, 6, 8, 7, 8, 5]), Some(6));
    /// ```
    pub fn check_digit(self, payload: &[u8]) -> Option<u8> {
        match self {
            Self::Modulo10 => Some(modulo10(payload)),
            Self::Modulo11 { coefficients } => modulo11(payload, coefficients),
        }
    }
}

/// Modulo-10 check digit.
#[allow(
    clippy::arithmetic_side_effects,
    reason = "digits and coefficients are single digits, the sum cannot overflow"
)]
fn modulo10(payload: &[u8]) -> u8 {
    let total: u32 = payload
        .iter()
        .zip(MODULO_10_COEFFICIENTS)
        .map(|(&digit, coefficient)| {
            let product = u32::from(digit) * u32::from(coefficient);
            // 12 -> 1 + 2 == 12 - 9
            if product >= 10 { product - 9 } else { product }
        })
        .sum();

    match total % 10 {
        0 => 0,
        remainder => (10 - remainder) as u8,
    }
}

/// Modulo-11 check digit.
#[allow(
    clippy::arithmetic_side_effects,
    reason = "digits and coefficients are single digits, the sum cannot overflow"
)]
fn modulo11(payload: &[u8], coefficients: &[u8]) -> Option<u8> {
    let total: u32 = payload
        .iter()
        .zip(coefficients)
        .map(|(&digit, &coefficient)| u32::from(digit) * u32::from(coefficient))
        .sum();

    match total % 11 {
        0 => Some(0),
        1 => None,
        remainder => Some((11 - remainder) as u8),
    }
}
