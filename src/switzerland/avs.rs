use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::core::normalize::{DOT_SEPARATORS, all_digits, digit};
use crate::core::{SsnError, normalize};

/// GS1 country prefix of Switzerland, mandatory on every AVS number.
pub const AVS_PREFIX: &str = "756";

const LENGTH: usize = 13;

/// A verified 13-digit AVS number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct AvsNumber(String);

impl AvsNumber {
    /// The 13 digits without separators.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Dotted display form, e.g. "756.1234.5678.97".
    pub fn formatted(&self) -> String {
        let d = &self.0;
        format!("{}.{}.{}.{}", &d[0..3], &d[3..7], &d[7..11], &d[11..13])
    }

    pub fn check_digit(&self) -> u32 {
        digit(self.0.as_bytes()[12])
    }
}

impl fmt::Display for AvsNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for AvsNumber {
    type Err = SsnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_swiss_avs(s)
    }
}

impl TryFrom<String> for AvsNumber {
    type Error = SsnError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_swiss_avs(&value)
    }
}

impl From<AvsNumber> for String {
    fn from(value: AvsNumber) -> Self {
        value.0
    }
}

/// Parse and verify a Swiss AVS number. Whitespace and dots are ignored.
pub fn parse_swiss_avs(input: &str) -> Result<AvsNumber, SsnError> {
    let digits = normalize(input, DOT_SEPARATORS);
    if digits.is_empty() {
        return Err(SsnError::Empty);
    }
    if !all_digits(&digits) {
        return Err(SsnError::InvalidFormat("AVS number must be digits only".into()));
    }
    if digits.len() != LENGTH {
        return Err(SsnError::InvalidLength {
            expected: LENGTH,
            actual: digits.len(),
        });
    }
    if !digits.starts_with(AVS_PREFIX) {
        return Err(SsnError::InvalidFormat(format!(
            "AVS number must start with {AVS_PREFIX}"
        )));
    }

    let bytes = digits.as_bytes();
    let expected = ean13_check_digit(&bytes[..12]);
    let found = digit(bytes[12]);
    if expected != found {
        return Err(SsnError::ChecksumMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        });
    }
    Ok(AvsNumber(digits))
}

/// True if `input` is a valid Swiss AVS number.
pub fn is_valid_swiss_avs(input: &str) -> bool {
    parse_swiss_avs(input).is_ok()
}

/// EAN-13 check digit: weights 1,3,1,3,... from the left.
fn ean13_check_digit(payload: &[u8]) -> u32 {
    let sum: u32 = payload
        .iter()
        .enumerate()
        .map(|(i, &b)| digit(b) * if i % 2 == 0 { 1 } else { 3 })
        .sum();
    (10 - sum % 10) % 10
}
