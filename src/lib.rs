//! # nationalid
//!
//! Checksum and format validation for national identification numbers:
//! Italian Codice Fiscale, Swiss AVS/AHV, Austrian SVNR and French INSEE/NIR.
//!
//! Every validator is a pure function over fixed tables. Input is normalized
//! (uppercased, whitespace and country-specific separators removed) before
//! any check, so `"756.1234.5678.97"` and `"7561234567897"` are equivalent.
//!
//! ## Quick Start
//!
//! ```rust
//! use nationalid::*;
//!
//! assert!(is_valid_codice_fiscale("RSSMRA80A01H501U"));
//! assert!(is_valid_swiss_avs("756.1234.5678.97"));
//! assert!(is_valid_austrian_svnr("1237 010180"));
//! assert!(is_valid_french_insee("190123306030016"));
//!
//! // Any of several countries; None and "" pass (presence is checked elsewhere)
//! let countries = CountryCode::ITALY | CountryCode::SWITZERLAND;
//! assert!(is_valid_ssn(Some("7561234567897"), countries));
//! assert!(is_valid_ssn(None, countries));
//! assert!(!is_valid_ssn(Some("190123306030016"), countries));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize`/`Deserialize` for country sets and parsed identifiers |

pub mod core;

pub mod austria;
pub mod france;
pub mod italy;
pub mod switzerland;
pub mod validator;

// Re-export the common entry points at crate root for convenience
pub use crate::austria::is_valid_austrian_svnr;
pub use crate::core::{CountryCode, Sex, SsnError, ValidationError};
pub use crate::france::is_valid_french_insee;
pub use crate::italy::is_valid_codice_fiscale;
pub use crate::switzerland::is_valid_swiss_avs;
pub use crate::validator::{SsnValidator, is_valid_ssn};
