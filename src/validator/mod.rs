//! Composite validation across several countries.
//!
//! [`is_valid_ssn`] accepts a value if it matches any enabled country.
//! A missing (`None`) or empty value is accepted: presence is a separate
//! concern, enforce it with [`SsnValidator::required`] or your own check.
//!
//! # Example
//!
//! ```
//! use nationalid::core::CountryCode;
//! use nationalid::validator::*;
//!
//! let countries = CountryCode::ITALY | CountryCode::SWITZERLAND;
//! assert!(is_valid_ssn(Some("756.1234.5678.97"), countries));
//! assert!(is_valid_ssn(None, countries));
//! assert!(!is_valid_ssn(Some("1237010180"), countries));
//!
//! let v = SsnValidator::new(CountryCode::ANY).field("ssn").required(true);
//! assert_eq!(v.validate(Some("")).unwrap_err().to_string(), "ssn: value is required");
//! ```

mod dispatch;
mod ssn_validator;

pub use dispatch::{is_valid_ssn, matching_country, parse_for};
pub use ssn_validator::SsnValidator;
