//! French social security number (numéro d'inscription au répertoire, NIR/INSEE).
//!
//! 15 digits: sex, birth year and month, department, commune, order number,
//! and a 2-digit key equal to `97 - (first 13 digits mod 97)`.
//!
//! The sex and month fields are decoded but not enforced: numbers with an
//! unusual sex digit or month field still validate when the key matches.

mod insee;

pub use insee::{InseeNumber, is_valid_french_insee, parse_french_insee};
