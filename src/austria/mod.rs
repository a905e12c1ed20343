//! Austrian social insurance number (Sozialversicherungsnummer, SVNR).
//!
//! 10 digits: a 3-digit serial, a check digit, and the holder's birth date
//! as `DDMMYY`. Often written `1237 010180` or `1237-010180`.

mod svnr;

pub use svnr::{Svnr, is_valid_austrian_svnr, parse_austrian_svnr};
