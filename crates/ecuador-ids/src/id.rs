// src/id.rs
//! Validated identification number types

use std::{fmt, str::FromStr};

use crate::{
    error::IdError,
    kind::{CEDULA_LENGTH, IdKind, RUC_LENGTH},
    province,
    validator::{self, Validator},
};

/// A cédula that passed validation.
///
/// # Example
/// ```
/// use ecuador_ids::Cedula;
/// use std::str::FromStr;
///
/// let cedula = Cedula::from_str("0926687856").unwrap();
/// assert_eq!(cedula.province_name(), Some("Guayas"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cedula(pub(crate) String);

/// A RUC that passed validation, along with the kind it was validated as.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ruc {
    pub(crate) number: String,
    pub(crate) kind: IdKind,
}

/// Either kind of identification number, as produced by [`Validator::validate_any`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identification {
    /// A 10 digit cédula.
    Cedula(Cedula),
    /// A 13 digit RUC of any kind.
    Ruc(Ruc),
}

/// First two digits of a validated number.
#[allow(
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
    reason = "validated numbers always start with two ascii digits"
)]
fn province_code_of(number: &str) -> u8 {
    let bytes = number.as_bytes();
    (bytes[0] - b'0') * 10 + (bytes[1] - b'0')
}

impl Cedula {
    /// Get string slice representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Code of the province the cédula was issued in.
    pub fn province_code(&self) -> u8 {
        province_code_of(&self.0)
    }

    /// Name of the province the cédula was issued in, if the code names one.
    pub fn province_name(&self) -> Option<&'static str> {
        province::province_name(self.province_code())
    }
}

impl Ruc {
    /// Get string slice representation
    pub fn as_str(&self) -> &str {
        &self.number
    }

    /// The kind of RUC, one of the three taxpayer forms.
    pub const fn kind(&self) -> IdKind {
        self.kind
    }

    /// Code of the province the RUC was registered in.
    pub fn province_code(&self) -> u8 {
        province_code_of(&self.number)
    }

    /// Name of the province the RUC was registered in, if the code names one.
    pub fn province_name(&self) -> Option<&'static str> {
        province::province_name(self.province_code())
    }

    /// The establishment code, 3 digits for persons and private entities, 4 for public ones.
    pub fn establishment_code(&self) -> u16 {
        self.kind
            .establishment_range()
            .and_then(|range| self.number.get(range))
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// The cédula a natural person RUC is built on.
    ///
    /// Entity RUCs are not derived from a cédula and return `None`.
    pub fn cedula(&self) -> Option<Cedula> {
        match self.kind {
            IdKind::NaturalPersonRuc => self
                .number
                .get(..CEDULA_LENGTH)
                .map(|s| Cedula(s.to_owned())),
            _ => None,
        }
    }
}

impl Identification {
    /// The kind the number was identified as.
    pub const fn kind(&self) -> IdKind {
        match self {
            Self::Cedula(_) => IdKind::Cedula,
            Self::Ruc(ruc) => ruc.kind,
        }
    }

    /// Get string slice representation
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cedula(cedula) => cedula.as_str(),
            Self::Ruc(ruc) => ruc.as_str(),
        }
    }
}

impl AsRef<str> for Cedula {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for Ruc {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::ops::Deref for Cedula {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl std::ops::Deref for Ruc {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl From<Cedula> for String {
    fn from(id: Cedula) -> Self {
        id.0
    }
}

impl From<Ruc> for String {
    fn from(id: Ruc) -> Self {
        id.number
    }
}

impl From<Cedula> for Identification {
    fn from(id: Cedula) -> Self {
        Self::Cedula(id)
    }
}

impl From<Ruc> for Identification {
    fn from(id: Ruc) -> Self {
        Self::Ruc(id)
    }
}

impl FromStr for Cedula {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Validator::default().validate_national_id(s)
    }
}

/// Parses any RUC form, choosing the kind from the third digit.
impl FromStr for Ruc {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validator::check_structure(s, RUC_LENGTH)?;

        match Validator::default().validate_any(s)? {
            Identification::Ruc(ruc) => Ok(ruc),
            Identification::Cedula(cedula) => Err(IdError::WrongLength {
                expected: RUC_LENGTH,
                actual: cedula.len(),
            }),
        }
    }
}

impl FromStr for Identification {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Validator::default().validate_any(s)
    }
}

impl TryFrom<String> for Cedula {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

impl TryFrom<String> for Ruc {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

impl fmt::Display for Cedula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Ruc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number)
    }
}

impl fmt::Display for Identification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
/// Validated numbers serialize as their digit string and are validated again when deserialized.
mod serde_impl {
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

    use super::{Cedula, Identification, Ruc};

    impl Serialize for Cedula {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.as_str())
        }
    }

    impl Serialize for Ruc {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.as_str())
        }
    }

    impl Serialize for Identification {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.as_str())
        }
    }

    impl<'de> Deserialize<'de> for Cedula {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(D::Error::custom)
        }
    }

    impl<'de> Deserialize<'de> for Ruc {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(D::Error::custom)
        }
    }

    impl<'de> Deserialize<'de> for Identification {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(D::Error::custom)
        }
    }
}
