//! Personal data encoded inside national identifiers.

use chrono::{Datelike, NaiveDate};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sex of the holder as encoded by the identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sex {
    Male,
    Female,
}

/// Resolve a two-digit year to the latest full date that is not after `reference`.
///
/// Identifiers only carry `YY`; the century is picked so the holder is not born
/// in the future relative to `reference`. Returns `None` for impossible dates
/// (day 0, month 13, 30 February, ...).
pub(crate) fn resolve_birth_date(
    two_digit_year: u32,
    month: u32,
    day: u32,
    reference: NaiveDate,
) -> Option<NaiveDate> {
    if two_digit_year > 99 {
        return None;
    }
    let century = reference.year() - reference.year().rem_euclid(100);
    let date = NaiveDate::from_ymd_opt(century + two_digit_year as i32, month, day)?;
    if date <= reference {
        Some(date)
    } else {
        NaiveDate::from_ymd_opt(century - 100 + two_digit_year as i32, month, day)
    }
}
