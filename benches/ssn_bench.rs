use criterion::{Criterion, black_box, criterion_group, criterion_main};

use nationalid::core::CountryCode;
use nationalid::*;

fn bench_single_country(c: &mut Criterion) {
    c.bench_function("codice_fiscale", |b| {
        b.iter(|| is_valid_codice_fiscale(black_box("RSS.MRA.80A.01.H501U")))
    });
    c.bench_function("codice_fiscale_omocodic", |b| {
        b.iter(|| is_valid_codice_fiscale(black_box("RSSMRAULALMHRLMU")))
    });
    c.bench_function("swiss_avs", |b| {
        b.iter(|| is_valid_swiss_avs(black_box("756.1234.5678.97")))
    });
    c.bench_function("austrian_svnr", |b| {
        b.iter(|| is_valid_austrian_svnr(black_box("1237 010180")))
    });
    c.bench_function("french_insee", |b| {
        b.iter(|| is_valid_french_insee(black_box("1 90 12 33 060 300 16")))
    });
}

fn bench_composite(c: &mut Criterion) {
    // worst case: the value is tried against every country before France matches
    c.bench_function("ssn_any_last_match", |b| {
        b.iter(|| is_valid_ssn(black_box(Some("190123306030016")), CountryCode::ANY))
    });
    c.bench_function("ssn_any_no_match", |b| {
        b.iter(|| is_valid_ssn(black_box(Some("RSSMRA80A01H501Z")), CountryCode::ANY))
    });
}

criterion_group!(benches, bench_single_country, bench_composite);
criterion_main!(benches);
