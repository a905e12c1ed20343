#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Anything that parses must parse again from its display form.
        if let Ok(cf) = nationalid::italy::parse_codice_fiscale(s) {
            assert_eq!(nationalid::italy::parse_codice_fiscale(&cf.to_string()), Ok(cf));
        }
        if let Ok(avs) = nationalid::switzerland::parse_swiss_avs(s) {
            assert_eq!(nationalid::switzerland::parse_swiss_avs(&avs.to_string()), Ok(avs));
        }
        if let Ok(svnr) = nationalid::austria::parse_austrian_svnr(s) {
            assert_eq!(nationalid::austria::parse_austrian_svnr(&svnr.to_string()), Ok(svnr));
        }
        if let Ok(nir) = nationalid::france::parse_french_insee(s) {
            assert_eq!(nationalid::france::parse_french_insee(&nir.to_string()), Ok(nir));
        }
    }
});
