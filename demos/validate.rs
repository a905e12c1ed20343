use nationalid::validator::{SsnValidator, matching_country};
use nationalid::*;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nationalid=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Single-country validation
    println!("=== Per-Country Validation ===\n");

    let italian = [
        "RSSMRA80A01H501U",
        "rss.mra.80a01.h501u",  // separators and case ignored
        "RSSMRA80A01H501Z",     // wrong control character
        "RSSMRAULALMHRLMU",     // omocodia
    ];
    for id in &italian {
        println!("  IT {id:<24} => {}", is_valid_codice_fiscale(id));
    }

    let swiss = ["756.1234.5678.97", "756.1234.5678.92", "7571234567896"];
    for id in &swiss {
        println!("  CH {id:<24} => {}", is_valid_swiss_avs(id));
    }

    let austrian = ["1237 010180", "1234 010180"];
    for id in &austrian {
        println!("  AT {id:<24} => {}", is_valid_austrian_svnr(id));
    }

    let french = ["190123306030016", "190123306030011"];
    for id in &french {
        println!("  FR {id:<24} => {}", is_valid_french_insee(id));
    }

    // Any-of-N validation
    println!("\n=== Composite Validation (IT|CH) ===\n");

    let countries = CountryCode::ITALY | CountryCode::SWITZERLAND;
    let candidates = [
        Some("RSSMRA80A01H501U"),
        Some("7561234567897"),
        Some("1237010180"),
        Some(""),
        None,
    ];
    for id in candidates {
        let shown = id.map_or("<none>".to_string(), |s| format!("{s:?}"));
        println!("  {shown:<24} => {}", is_valid_ssn(id, countries));
    }

    // Configured validator with detailed errors
    println!("\n=== Required Field ===\n");

    let validator = SsnValidator::new(CountryCode::ANY)
        .field("applicant.ssn")
        .required(true);
    for id in [Some("255081416802538"), Some("RSS.MRA.80A.01.H501Z"), None] {
        match validator.validate(id) {
            Ok(()) => {
                let country = id.and_then(|s| matching_country(s, CountryCode::ANY));
                println!("  {id:?} => valid ({})", country.unwrap_or_default());
            }
            Err(e) => println!("  {id:?} => INVALID: {e}"),
        }
    }
}
