//! Country selection for the composite validator.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use thiserror::Error;

/// Set of countries whose identifier formats are accepted.
///
/// Flags combine with `|`; [`CountryCode::ANY`] enables every supported format.
///
/// ```
/// use nationalid::core::CountryCode;
///
/// let c = CountryCode::ITALY | CountryCode::FRANCE;
/// assert_eq!(c.to_string(), "IT|FR");
/// assert_eq!("it, fr".parse::<CountryCode>().unwrap(), c);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountryCode(u8);

bitflags! {
    impl CountryCode: u8 {
        /// Italian Codice Fiscale.
        const ITALY = 0b0001;
        /// Swiss AVS/AHV number.
        const SWITZERLAND = 0b0010;
        /// Austrian Sozialversicherungsnummer.
        const AUSTRIA = 0b0100;
        /// French INSEE / NIR.
        const FRANCE = 0b1000;
        /// Every supported country.
        const ANY = Self::ITALY.bits()
            | Self::SWITZERLAND.bits()
            | Self::AUSTRIA.bits()
            | Self::FRANCE.bits();
    }
}

impl CountryCode {
    /// Single countries in evaluation order.
    pub const ORDER: [CountryCode; 4] = [
        CountryCode::ITALY,
        CountryCode::SWITZERLAND,
        CountryCode::AUSTRIA,
        CountryCode::FRANCE,
    ];

    /// Enabled single countries, in evaluation order.
    pub fn countries(self) -> impl Iterator<Item = CountryCode> {
        Self::ORDER.into_iter().filter(move |c| self.contains(*c))
    }

    /// ISO 3166-1 alpha-2 code of a single country, `None` for combinations.
    pub fn alpha2(self) -> Option<&'static str> {
        match self {
            CountryCode::ITALY => Some("IT"),
            CountryCode::SWITZERLAND => Some("CH"),
            CountryCode::AUSTRIA => Some("AT"),
            CountryCode::FRANCE => Some("FR"),
            _ => None,
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let mut first = true;
        for code in self.countries().filter_map(CountryCode::alpha2) {
            if !first {
                f.write_str("|")?;
            }
            f.write_str(code)?;
            first = false;
        }
        Ok(())
    }
}

/// Error returned when a country list contains an unsupported entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported country '{0}'")]
pub struct ParseCountryError(pub String);

impl FromStr for CountryCode {
    type Err = ParseCountryError;

    /// Parse `|` or `,` separated alpha-2 codes or English names, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut codes = CountryCode::empty();
        for token in s.split(['|', ',']).map(str::trim) {
            let code = match token.to_ascii_uppercase().as_str() {
                "IT" | "ITALY" => CountryCode::ITALY,
                "CH" | "SWITZERLAND" => CountryCode::SWITZERLAND,
                "AT" | "AUSTRIA" => CountryCode::AUSTRIA,
                "FR" | "FRANCE" => CountryCode::FRANCE,
                "ANY" => CountryCode::ANY,
                _ => return Err(ParseCountryError(token.to_string())),
            };
            codes |= code;
        }
        Ok(codes)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CountryCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CountryCode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        if s == "none" {
            return Ok(CountryCode::empty());
        }
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_is_union_of_all() {
        assert_eq!(
            CountryCode::ANY,
            CountryCode::ITALY
                | CountryCode::SWITZERLAND
                | CountryCode::AUSTRIA
                | CountryCode::FRANCE
        );
        assert_eq!(CountryCode::ANY, CountryCode::all());
    }

    #[test]
    fn countries_in_fixed_order() {
        let c = CountryCode::FRANCE | CountryCode::ITALY | CountryCode::AUSTRIA;
        let order: Vec<_> = c.countries().collect();
        assert_eq!(
            order,
            vec![CountryCode::ITALY, CountryCode::AUSTRIA, CountryCode::FRANCE]
        );
    }

    #[test]
    fn display_joins_codes() {
        assert_eq!(CountryCode::ANY.to_string(), "IT|CH|AT|FR");
        assert_eq!(CountryCode::SWITZERLAND.to_string(), "CH");
        assert_eq!(CountryCode::empty().to_string(), "none");
    }

    #[test]
    fn parse_codes_and_names() {
        assert_eq!(
            "IT|CH".parse::<CountryCode>(),
            Ok(CountryCode::ITALY | CountryCode::SWITZERLAND)
        );
        assert_eq!("austria".parse::<CountryCode>(), Ok(CountryCode::AUSTRIA));
        assert_eq!(
            " fr , It ".parse::<CountryCode>(),
            Ok(CountryCode::FRANCE | CountryCode::ITALY)
        );
        assert_eq!("any".parse::<CountryCode>(), Ok(CountryCode::ANY));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(
            "IT|DE".parse::<CountryCode>(),
            Err(ParseCountryError("DE".into()))
        );
        assert!("".parse::<CountryCode>().is_err());
    }

    #[test]
    fn alpha2_only_for_single_country() {
        assert_eq!(CountryCode::AUSTRIA.alpha2(), Some("AT"));
        assert_eq!(CountryCode::ANY.alpha2(), None);
    }

    #[test]
    fn truncate_drops_unknown_bits() {
        assert_eq!(CountryCode::from_bits_truncate(0xFF), CountryCode::ANY);
    }
}
