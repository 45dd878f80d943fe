// src/distribution.rs
//! Random generation of valid identification numbers

use rand::{Rng, distr::Distribution};

use crate::{kind::IdKind, province::DEFAULT_MAX_PROVINCE_CODE};

/// Distribution of numbers that pass validation for one kind.
///
/// Province codes are drawn from 01-24 and establishment codes are never zero.
///
/// # Example
/// ```
/// use ecuador_ids::{IdKind, NumberDist, validate_national_id};
/// use rand::distr::Distribution;
///
/// let number = NumberDist::new(IdKind::Cedula).sample(&mut rand::rng());
/// assert!(validate_national_id(&number).is_ok());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NumberDist {
    kind: IdKind,
}

impl NumberDist {
    /// Distribution of valid numbers of `kind`.
    pub const fn new(kind: IdKind) -> Self {
        Self { kind }
    }
}

impl Distribution<String> for NumberDist {
    #[allow(
        clippy::indexing_slicing,
        clippy::arithmetic_side_effects,
        reason = "every index is below the length of the kind and every value is a single digit"
    )]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let kind = self.kind;
        let check_index = kind.check_digit_index();
        let mut digits = vec![0_u8; kind.length()];

        let province = rng.random_range(1..=DEFAULT_MAX_PROVINCE_CODE);
        digits[0] = province / 10;
        digits[1] = province % 10;
        digits[2] = match kind {
            IdKind::Cedula | IdKind::NaturalPersonRuc => rng.random_range(0..=5),
            IdKind::PrivateEntityRuc => 9,
            IdKind::PublicEntityRuc => 6,
        };

        // Modulo-11 payloads with a remainder of 1 have no check digit, draw again.
        let check = loop {
            for digit in &mut digits[3..check_index] {
                *digit = rng.random_range(0..=9);
            }
            if let Some(check) = kind.algorithm().check_digit(&digits[..check_index]) {
                break check;
            }
        };
        digits[check_index] = check;

        if let Some(range) = kind.establishment_range() {
            let width = range.len();
            let max = 10_u32.pow(u32::try_from(width).unwrap_or(3)) - 1;
            let establishment = rng.random_range(1..=max);
            let text = format!("{establishment:0width$}");
            for (slot, b) in digits[range].iter_mut().zip(text.bytes()) {
                *slot = b - b'0';
            }
        }

        digits.into_iter().map(|d| char::from(b'0' + d)).collect()
    }
}
