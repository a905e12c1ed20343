//! Italian Codice Fiscale.
//!
//! 16 characters: surname and name codes, birth year, month letter, birth day
//! (plus 40 for women), cadastral place code and a control letter. Digits in
//! the year, day and place-number fields may be replaced by omocodia letters
//! to keep colliding codes unique.
//!
//! # Example
//!
//! ```
//! use nationalid::italy::*;
//!
//! assert!(is_valid_codice_fiscale("RSSMRA80A01H501U"));
//! assert!(!is_valid_codice_fiscale("RSSMRA80A01H501Z"));
//! ```

mod codice_fiscale;
mod tables;

pub use codice_fiscale::{CodiceFiscale, is_valid_codice_fiscale, parse_codice_fiscale};
