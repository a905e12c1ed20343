use chrono::NaiveDate;
use nationalid::austria::*;
use nationalid::core::*;
use nationalid::france::*;
use nationalid::italy::*;
use nationalid::switzerland::*;
use nationalid::validator::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ---------------------------------------------------------------------------
// Italy: Codice Fiscale
// ---------------------------------------------------------------------------

const VALID_CF: &[&str] = &[
    "RSSMRA80A01H501U",
    "MRTMTT91D08F205J",
    "BNCGLI85E45L219U",
    "CRTGPR68Z22F839H",
    "VRDGPP13P10D969N",
];

#[test]
fn it_valid_codes() {
    for code in VALID_CF {
        assert!(is_valid_codice_fiscale(code), "{code}");
    }
}

#[test]
fn it_lowercase_and_separators() {
    assert!(is_valid_codice_fiscale("rssmra80a01h501u"));
    assert!(is_valid_codice_fiscale("RSS MRA 80A01 H501U"));
    assert!(is_valid_codice_fiscale("RSS.MRA.80A.01.H501U"));
}

#[test]
fn it_every_other_control_char_rejected() {
    for code in VALID_CF {
        let (payload, check) = code.split_at(15);
        for c in 'A'..='Z' {
            if c.to_string() == check {
                continue;
            }
            assert!(!is_valid_codice_fiscale(&format!("{payload}{c}")), "{payload}{c}");
        }
    }
}

#[test]
fn it_omocodic_code() {
    let cf = parse_codice_fiscale("RSSMRAULALMHRLMU").unwrap();
    assert!(cf.is_omocodic());
    assert_eq!(cf.birth_date(date(2024, 6, 15)), Some(date(1980, 1, 1)));
    assert_eq!(cf.place_code(), "H501");
}

#[test]
fn it_invalid_omocodia_letter() {
    // 'W' is not an omocodia letter
    assert!(matches!(
        parse_codice_fiscale("RSSMRA80A01H50WU"),
        Err(SsnError::InvalidCharacter { position: 14, found: 'W' })
    ));
}

#[test]
fn it_decoded_fields() {
    let cf = parse_codice_fiscale("VRDGPP13P10D969N").unwrap();
    assert_eq!(cf.birth_month(), 9);
    assert_eq!(cf.birth_day(), 10);
    assert_eq!(cf.sex(), Sex::Male);
    assert_eq!(cf.place_code(), "D969");
    assert_eq!(cf.birth_date(date(2024, 6, 15)), Some(date(2013, 9, 10)));
    assert_eq!(cf.birth_date(date(2010, 1, 1)), Some(date(1913, 9, 10)));
}

#[test]
fn it_other_country_formats_rejected() {
    assert!(!is_valid_codice_fiscale("7561234567897"));
    assert!(!is_valid_codice_fiscale("190123306030016"));
}

// ---------------------------------------------------------------------------
// Switzerland: AVS
// ---------------------------------------------------------------------------

#[test]
fn ch_valid() {
    assert!(is_valid_swiss_avs("7561234567897"));
    assert!(is_valid_swiss_avs("756.0000.0000.02"));
    assert!(is_valid_swiss_avs("756.9217.0769.85"));
}

#[test]
fn ch_bad_checksum() {
    assert!(!is_valid_swiss_avs("756.1234.5678.92"));
}

#[test]
fn ch_prefix_required() {
    assert!(!is_valid_swiss_avs("1234567890128"));
    assert!(!is_valid_swiss_avs("0000000000000"));
}

#[test]
fn ch_formatted_roundtrip() {
    let avs = parse_swiss_avs("7569217076985").unwrap();
    assert_eq!(avs.formatted(), "756.9217.0769.85");
    assert_eq!(parse_swiss_avs(&avs.formatted()).unwrap(), avs);
}

// ---------------------------------------------------------------------------
// Austria: SVNR
// ---------------------------------------------------------------------------

#[test]
fn at_valid() {
    assert!(is_valid_austrian_svnr("1237010180"));
    assert!(is_valid_austrian_svnr("1237 01 01 80"));
}

#[test]
fn at_bad_checksum() {
    for wrong in 0..=9 {
        if wrong == 7 {
            continue;
        }
        let candidate = format!("123{wrong}010180");
        assert!(!is_valid_austrian_svnr(&candidate), "{candidate}");
    }
}

#[test]
fn at_non_digits_rejected() {
    assert!(!is_valid_austrian_svnr("CRTGPR68Z22F839K"));
    assert!(!is_valid_austrian_svnr("123A010180"));
}

#[test]
fn at_birth_date() {
    let svnr = parse_austrian_svnr("1237-010180").unwrap();
    assert_eq!(svnr.birth_date(date(2024, 6, 15)), Some(date(1980, 1, 1)));
}

// ---------------------------------------------------------------------------
// France: INSEE
// ---------------------------------------------------------------------------

#[test]
fn fr_valid() {
    assert!(is_valid_french_insee("190123306030016"));
    assert!(is_valid_french_insee("2 55 08 14 168 025 38"));
}

#[test]
fn fr_bad_key() {
    assert!(!is_valid_french_insee("190123306030011"));
    assert!(!is_valid_french_insee("116102603801457"));
}

#[test]
fn fr_key_97() {
    let nir = parse_french_insee("100000000004797").unwrap();
    assert_eq!(nir.key(), 97);
}

#[test]
fn fr_decoded_sex() {
    assert_eq!(
        parse_french_insee("190123306030016").unwrap().sex(),
        Some(Sex::Male)
    );
    assert_eq!(
        parse_french_insee("255081416802538").unwrap().sex(),
        Some(Sex::Female)
    );
}

// ---------------------------------------------------------------------------
// Composite dispatcher
// ---------------------------------------------------------------------------

#[test]
fn ssn_null_is_valid() {
    assert!(is_valid_ssn(None, CountryCode::ITALY));
}

#[test]
fn ssn_empty_is_valid() {
    assert!(is_valid_ssn(
        Some(""),
        CountryCode::ITALY | CountryCode::SWITZERLAND
    ));
}

#[test]
fn ssn_fails_both_countries() {
    assert!(!is_valid_ssn(
        Some("RSS.MRA.80A.01.H501Z"),
        CountryCode::ITALY | CountryCode::SWITZERLAND
    ));
}

#[test]
fn ssn_any_accepts_each_country() {
    for value in [
        "RSSMRA80A01H501U",
        "7561234567897",
        "1237010180",
        "190123306030016",
    ] {
        assert!(is_valid_ssn(Some(value), CountryCode::ANY), "{value}");
    }
}

#[test]
fn ssn_matching_country() {
    let cases = [
        ("RSSMRA80A01H501U", CountryCode::ITALY),
        ("756.1234.5678.97", CountryCode::SWITZERLAND),
        ("1237 010180", CountryCode::AUSTRIA),
        ("1 90 12 33 060 300 16", CountryCode::FRANCE),
    ];
    for (value, country) in cases {
        assert_eq!(matching_country(value, CountryCode::ANY), Some(country));
        assert_eq!(matching_country(value, CountryCode::ANY - country), None);
    }
}

#[test]
fn ssn_countries_from_config_string() {
    let countries: CountryCode = "CH|FR".parse().unwrap();
    assert!(is_valid_ssn(Some("190123306030016"), countries));
    assert!(!is_valid_ssn(Some("RSSMRA80A01H501U"), countries));
}

#[test]
fn validator_required_and_optional() {
    let optional = SsnValidator::new(CountryCode::AUSTRIA);
    let required = optional.clone().required(true);
    assert!(optional.is_valid(None));
    assert!(!required.is_valid(None));
    assert!(required.is_valid(Some("1237010180")));
}

#[test]
fn validation_is_idempotent() {
    let v = SsnValidator::default();
    for value in ["RSSMRA80A01H501U", "RSSMRA80A01H501Z", "", "1237010180"] {
        let first = v.validate(Some(value));
        let second = v.validate(Some(value));
        assert_eq!(first, second);
    }
}
