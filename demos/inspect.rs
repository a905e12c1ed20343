use chrono::Local;
use nationalid::austria::parse_austrian_svnr;
use nationalid::france::parse_french_insee;
use nationalid::italy::parse_codice_fiscale;
use nationalid::switzerland::parse_swiss_avs;

fn main() {
    let today = Local::now().date_naive();

    println!("=== Codice Fiscale ===\n");
    for id in ["BNCGLI85E45L219U", "RSSMRAULALMHRLMU", "RSSMRA80A01H501Z"] {
        match parse_codice_fiscale(id) {
            Ok(cf) => println!(
                "  {cf} => sex={:?} born={:?} place={} omocodic={}",
                cf.sex(),
                cf.birth_date(today),
                cf.place_code(),
                cf.is_omocodic()
            ),
            Err(e) => println!("  {id} => INVALID: {e}"),
        }
    }

    println!("\n=== AVS ===\n");
    match parse_swiss_avs("7569217076985") {
        Ok(avs) => println!("  {} => {avs}", avs.as_str()),
        Err(e) => println!("  INVALID: {e}"),
    }

    println!("\n=== SVNR ===\n");
    match parse_austrian_svnr("1237010180") {
        Ok(svnr) => println!(
            "  {svnr} => serial={} born={:?}",
            svnr.serial(),
            svnr.birth_date(today)
        ),
        Err(e) => println!("  INVALID: {e}"),
    }

    println!("\n=== INSEE ===\n");
    for id in ["255081416802538", "116102603801457"] {
        match parse_french_insee(id) {
            Ok(nir) => println!(
                "  {nir} => sex={:?} year={:02} month={:02} department={}",
                nir.sex(),
                nir.birth_year(),
                nir.birth_month(),
                nir.department()
            ),
            Err(e) => println!("  {id} => INVALID: {e}"),
        }
    }
}
