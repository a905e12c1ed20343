//! Swiss social security number (AHV/AVS, "AHV-Nummer").
//!
//! 13 digits starting with the country prefix `756`, usually written
//! `756.XXXX.XXXX.XX`. The last digit is an EAN-13 check digit.

mod avs;

pub use avs::{AVS_PREFIX, AvsNumber, is_valid_swiss_avs, parse_swiss_avs};
