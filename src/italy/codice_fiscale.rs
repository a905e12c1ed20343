//! Italian Codice Fiscale (personal tax code) validation and decoding.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::tables::{OMOCODIA_SLOTS, even_value, month_number, odd_value, omocodia_digit};
use crate::core::normalize::DOT_SEPARATORS;
use crate::core::{Sex, SsnError, normalize, resolve_birth_date};

const LENGTH: usize = 16;

/// Positions that must hold a letter (surname/name code, place prefix, control char).
const LETTER_SLOTS: [usize; 8] = [0, 1, 2, 3, 4, 5, 11, 15];

const MONTH_SLOT: usize = 8;

/// A structurally valid Codice Fiscale with a matching control character.
///
/// Holds both the code as written and the omocodia-free form used for decoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct CodiceFiscale {
    code: String,
    decoded: String,
}

impl CodiceFiscale {
    /// The normalized code (uppercase, no separators), omocodia letters kept.
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// The code with every omocodia letter replaced by its digit.
    pub fn decoded(&self) -> &str {
        &self.decoded
    }

    /// True if any numeric field carries an omocodia letter.
    pub fn is_omocodic(&self) -> bool {
        self.code != self.decoded
    }

    /// Three-letter surname code.
    pub fn surname_code(&self) -> &str {
        &self.code[0..3]
    }

    /// Three-letter given-name code.
    pub fn name_code(&self) -> &str {
        &self.code[3..6]
    }

    /// Two-digit birth year (0-99).
    pub fn birth_year(&self) -> u32 {
        self.number(6..8)
    }

    /// Birth month (1-12).
    pub fn birth_month(&self) -> u32 {
        // the month slot is checked during parsing
        month_number(self.code.as_bytes()[MONTH_SLOT]).unwrap_or_default()
    }

    /// Day of birth with the female offset of 40 removed.
    pub fn birth_day(&self) -> u32 {
        let day = self.number(9..11);
        if day > 40 { day - 40 } else { day }
    }

    pub fn sex(&self) -> Sex {
        if self.number(9..11) > 40 {
            Sex::Female
        } else {
            Sex::Male
        }
    }

    /// Cadastral code of the birthplace (e.g. "H501" for Rome), digits decoded.
    pub fn place_code(&self) -> &str {
        &self.decoded[11..15]
    }

    /// The trailing control character.
    pub fn check_char(&self) -> char {
        char::from(self.code.as_bytes()[15])
    }

    /// Full birth date, choosing the century so the date is not after `reference`.
    ///
    /// `None` if the encoded day/month combination does not exist.
    pub fn birth_date(&self, reference: NaiveDate) -> Option<NaiveDate> {
        resolve_birth_date(
            self.birth_year(),
            self.birth_month(),
            self.birth_day(),
            reference,
        )
    }

    fn number(&self, range: std::ops::Range<usize>) -> u32 {
        self.decoded[range].parse().unwrap_or_default()
    }
}

impl fmt::Display for CodiceFiscale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for CodiceFiscale {
    type Err = SsnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_codice_fiscale(s)
    }
}

impl TryFrom<String> for CodiceFiscale {
    type Error = SsnError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_codice_fiscale(&value)
    }
}

impl From<CodiceFiscale> for String {
    fn from(value: CodiceFiscale) -> Self {
        value.code
    }
}

/// Parse and verify a Codice Fiscale.
///
/// Case, whitespace and dots are ignored. Omocodia letters in the year, day
/// and place-number fields are mapped back to digits before the control
/// character is computed.
///
/// ```
/// use nationalid::italy::parse_codice_fiscale;
///
/// let cf = parse_codice_fiscale("rss.mra.80a01.h501u").unwrap();
/// assert_eq!(cf.place_code(), "H501");
/// assert_eq!(cf.birth_month(), 1);
/// ```
pub fn parse_codice_fiscale(input: &str) -> Result<CodiceFiscale, SsnError> {
    let code = normalize(input, DOT_SEPARATORS);
    if code.is_empty() {
        return Err(SsnError::Empty);
    }
    let len = code.chars().count();
    if len != LENGTH {
        return Err(SsnError::InvalidLength {
            expected: LENGTH,
            actual: len,
        });
    }
    if let Some((position, found)) = code
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_alphanumeric())
    {
        return Err(SsnError::InvalidCharacter { position, found });
    }

    let bytes = code.as_bytes();
    if let Some(&i) = LETTER_SLOTS
        .iter()
        .find(|&&i| !bytes[i].is_ascii_alphabetic())
    {
        return Err(SsnError::InvalidFormat(format!(
            "expected a letter at position {i}"
        )));
    }
    if month_number(bytes[MONTH_SLOT]).is_none() {
        return Err(SsnError::InvalidCharacter {
            position: MONTH_SLOT,
            found: char::from(bytes[MONTH_SLOT]),
        });
    }

    let mut decoded = bytes.to_vec();
    for i in OMOCODIA_SLOTS {
        if decoded[i].is_ascii_digit() {
            continue;
        }
        decoded[i] = omocodia_digit(decoded[i]).ok_or(SsnError::InvalidCharacter {
            position: i,
            found: char::from(decoded[i]),
        })?;
    }

    let expected = check_char(&decoded[..15])?;
    let found = char::from(bytes[15]);
    if expected != found {
        return Err(SsnError::ChecksumMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        });
    }

    let decoded = String::from_utf8(decoded)
        .map_err(|_| SsnError::InvalidFormat("non-ASCII after decoding".into()))?;
    Ok(CodiceFiscale { code, decoded })
}

/// True if `input` is a valid Codice Fiscale.
pub fn is_valid_codice_fiscale(input: &str) -> bool {
    parse_codice_fiscale(input).is_ok()
}

/// Control character for the first 15 (omocodia-free) characters.
fn check_char(payload: &[u8]) -> Result<char, SsnError> {
    let mut sum = 0;
    for (i, &c) in payload.iter().enumerate() {
        // i is 0-indexed: even i is an odd 1-indexed position
        let value = if i % 2 == 0 {
            odd_value(c)
        } else {
            even_value(c)
        };
        sum += value.ok_or(SsnError::InvalidCharacter {
            position: i,
            found: char::from(c),
        })?;
    }
    Ok(char::from(b'A' + (sum % 26) as u8))
}
