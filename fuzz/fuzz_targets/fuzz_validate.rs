#![no_main]

use libfuzzer_sys::fuzz_target;
use nationalid::CountryCode;

fuzz_target!(|data: &[u8]| {
    if let Some((&bits, rest)) = data.split_first() {
        if let Ok(s) = std::str::from_utf8(rest) {
            // Must not panic: every string is either valid or rejected.
            let countries = CountryCode::from_bits_truncate(bits);
            let _ = nationalid::is_valid_ssn(Some(s), countries);
            let _ = nationalid::italy::parse_codice_fiscale(s);
            let _ = nationalid::switzerland::parse_swiss_avs(s);
            let _ = nationalid::austria::parse_austrian_svnr(s);
            let _ = nationalid::france::parse_french_insee(s);
        }
    }
});
