use crate::austria::parse_austrian_svnr;
use crate::core::{CountryCode, SsnError};
use crate::france::parse_french_insee;
use crate::italy::parse_codice_fiscale;
use crate::switzerland::parse_swiss_avs;

/// Validate `input` against the format of one single country.
///
/// Returns [`SsnError::InvalidFormat`] if `country` is empty or a combination.
pub fn parse_for(country: CountryCode, input: &str) -> Result<(), SsnError> {
    match country {
        CountryCode::ITALY => parse_codice_fiscale(input).map(drop),
        CountryCode::SWITZERLAND => parse_swiss_avs(input).map(drop),
        CountryCode::AUSTRIA => parse_austrian_svnr(input).map(drop),
        CountryCode::FRANCE => parse_french_insee(input).map(drop),
        other => Err(SsnError::InvalidFormat(format!(
            "'{other}' is not a single country"
        ))),
    }
}

/// First enabled country whose format `input` matches.
///
/// Countries are tried in the order Italy, Switzerland, Austria, France.
pub fn matching_country(input: &str, countries: CountryCode) -> Option<CountryCode> {
    for country in countries.countries() {
        match parse_for(country, input) {
            Ok(()) => {
                tracing::debug!(%country, len = input.len(), "national id matched");
                return Some(country);
            }
            Err(error) => {
                tracing::trace!(%country, %error, "national id rejected");
            }
        }
    }
    None
}

/// True if `input` is missing, empty, or valid for at least one of `countries`.
///
/// ```
/// use nationalid::core::CountryCode;
/// use nationalid::validator::is_valid_ssn;
///
/// assert!(is_valid_ssn(Some("RSSMRA80A01H501U"), CountryCode::ANY));
/// assert!(is_valid_ssn(Some(""), CountryCode::ITALY));
/// assert!(!is_valid_ssn(Some("RSS.MRA.80A.01.H501Z"), CountryCode::ANY));
/// ```
pub fn is_valid_ssn(input: Option<&str>, countries: CountryCode) -> bool {
    match input {
        None | Some("") => {
            tracing::debug!(%countries, "empty national id accepted");
            true
        }
        Some(value) => matching_country(value, countries).is_some(),
    }
}
