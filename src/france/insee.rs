use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::core::normalize::{DOT_SEPARATORS, all_digits, digit};
use crate::core::{Sex, SsnError, normalize};

const LENGTH: usize = 15;

const PAYLOAD_LENGTH: usize = 13;

const MODULUS: u32 = 97;

/// A verified 15-digit INSEE number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct InseeNumber(String);

impl InseeNumber {
    /// The 15 digits without separators.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Leading digit: 1 or 2 for permanent numbers, 7 or 8 for temporary ones.
    pub fn sex_digit(&self) -> u32 {
        digit(self.0.as_bytes()[0])
    }

    pub fn sex(&self) -> Option<Sex> {
        match self.sex_digit() {
            1 => Some(Sex::Male),
            2 => Some(Sex::Female),
            _ => None,
        }
    }

    /// Two-digit birth year.
    pub fn birth_year(&self) -> u32 {
        self.number(1..3)
    }

    /// Raw month field; 20-42 and 50-99 mark unknown or fictitious months.
    pub fn birth_month(&self) -> u32 {
        self.number(3..5)
    }

    /// Department of birth ("99" for births abroad).
    pub fn department(&self) -> &str {
        &self.0[5..7]
    }

    /// INSEE commune code (or country code for births abroad).
    pub fn commune(&self) -> &str {
        &self.0[7..10]
    }

    /// Order number of the birth registration within the commune and month.
    pub fn order(&self) -> &str {
        &self.0[10..13]
    }

    pub fn key(&self) -> u32 {
        self.number(13..15)
    }

    pub fn has_known_sex(&self) -> bool {
        self.sex().is_some()
    }

    /// Month field is 1-12 or one of the reserved ranges 20-42 and 50-99.
    pub fn has_plausible_month(&self) -> bool {
        matches!(self.birth_month(), 1..=12 | 20..=42 | 50..=99)
    }

    fn number(&self, range: std::ops::Range<usize>) -> u32 {
        self.0[range].parse().unwrap_or_default()
    }
}

impl fmt::Display for InseeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.0;
        write!(
            f,
            "{} {} {} {} {} {} {}",
            &d[0..1],
            &d[1..3],
            &d[3..5],
            &d[5..7],
            &d[7..10],
            &d[10..13],
            &d[13..15]
        )
    }
}

impl FromStr for InseeNumber {
    type Err = SsnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_french_insee(s)
    }
}

impl TryFrom<String> for InseeNumber {
    type Error = SsnError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_french_insee(&value)
    }
}

impl From<InseeNumber> for String {
    fn from(value: InseeNumber) -> Self {
        value.0
    }
}

/// Parse and verify a French INSEE number. Whitespace and dots are ignored.
///
/// ```
/// use nationalid::france::parse_french_insee;
///
/// let nir = parse_french_insee("2 55 08 14 168 025 38").unwrap();
/// assert_eq!(nir.department(), "14");
/// assert_eq!(nir.key(), 38);
/// ```
pub fn parse_french_insee(input: &str) -> Result<InseeNumber, SsnError> {
    let digits = normalize(input, DOT_SEPARATORS);
    if digits.is_empty() {
        return Err(SsnError::Empty);
    }
    if !all_digits(&digits) {
        return Err(SsnError::InvalidFormat("INSEE number must be digits only".into()));
    }
    if digits.len() != LENGTH {
        return Err(SsnError::InvalidLength {
            expected: LENGTH,
            actual: digits.len(),
        });
    }

    let bytes = digits.as_bytes();
    let expected = MODULUS - mod97(&bytes[..PAYLOAD_LENGTH]);
    let found = digit(bytes[13]) * 10 + digit(bytes[14]);
    if expected != found {
        return Err(SsnError::ChecksumMismatch {
            expected: format!("{expected:02}"),
            found: format!("{found:02}"),
        });
    }
    Ok(InseeNumber(digits))
}

/// True if `input` is a valid French INSEE number.
pub fn is_valid_french_insee(input: &str) -> bool {
    parse_french_insee(input).is_ok()
}

/// Remainder of a decimal digit string modulo 97, reduced digit by digit.
fn mod97(digits: &[u8]) -> u32 {
    digits
        .iter()
        .fold(0, |acc, &b| (acc * 10 + digit(b)) % MODULUS)
}
