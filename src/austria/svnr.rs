use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::core::normalize::{DASH_SLASH_SEPARATORS, all_digits, digit};
use crate::core::{SsnError, normalize, resolve_birth_date};

const LENGTH: usize = 10;

const CHECK_INDEX: usize = 3;

/// Weights per digit index; index 3 holds the check digit and is not weighted.
const WEIGHTS: [u32; LENGTH] = [3, 7, 9, 0, 5, 4, 8, 6, 1, 2];

/// A verified Austrian SVNR.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Svnr(String);

impl Svnr {
    /// The 10 digits without separators.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Sequence number assigned by the insurance carrier.
    pub fn serial(&self) -> &str {
        &self.0[0..3]
    }

    pub fn check_digit(&self) -> u32 {
        digit(self.0.as_bytes()[CHECK_INDEX])
    }

    /// Raw `DD` field. May exceed 31 for administrative numbers.
    pub fn birth_day(&self) -> u32 {
        self.number(4..6)
    }

    /// Raw `MM` field. Values 13+ are used when the real month is unknown.
    pub fn birth_month(&self) -> u32 {
        self.number(6..8)
    }

    /// Raw `YY` field.
    pub fn birth_year(&self) -> u32 {
        self.number(8..10)
    }

    /// Birth date resolved against `reference`, `None` for administrative values.
    pub fn birth_date(&self, reference: NaiveDate) -> Option<NaiveDate> {
        resolve_birth_date(
            self.birth_year(),
            self.birth_month(),
            self.birth_day(),
            reference,
        )
    }

    fn number(&self, range: std::ops::Range<usize>) -> u32 {
        self.0[range].parse().unwrap_or_default()
    }
}

impl fmt::Display for Svnr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", &self.0[..4], &self.0[4..])
    }
}

impl FromStr for Svnr {
    type Err = SsnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_austrian_svnr(s)
    }
}

impl TryFrom<String> for Svnr {
    type Error = SsnError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_austrian_svnr(&value)
    }
}

impl From<Svnr> for String {
    fn from(value: Svnr) -> Self {
        value.0
    }
}

/// Parse and verify an Austrian SVNR. Whitespace, `-` and `/` are ignored.
pub fn parse_austrian_svnr(input: &str) -> Result<Svnr, SsnError> {
    let digits = normalize(input, DASH_SLASH_SEPARATORS);
    if digits.is_empty() {
        return Err(SsnError::Empty);
    }
    if !all_digits(&digits) {
        return Err(SsnError::InvalidFormat("SVNR must be digits only".into()));
    }
    if digits.len() != LENGTH {
        return Err(SsnError::InvalidLength {
            expected: LENGTH,
            actual: digits.len(),
        });
    }

    let bytes = digits.as_bytes();
    let expected = check_digit(bytes);
    let found = digit(bytes[CHECK_INDEX]);
    if expected != found {
        return Err(SsnError::ChecksumMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        });
    }
    Ok(Svnr(digits))
}

/// True if `input` is a valid Austrian SVNR.
pub fn is_valid_austrian_svnr(input: &str) -> bool {
    parse_austrian_svnr(input).is_ok()
}

/// Weighted sum mod 11; a remainder of 10 maps to 0.
fn check_digit(digits: &[u8]) -> u32 {
    let sum: u32 = digits
        .iter()
        .zip(WEIGHTS)
        .map(|(&b, w)| digit(b) * w)
        .sum();
    match sum % 11 {
        10 => 0,
        r => r,
    }
}
