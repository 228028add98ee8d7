// Criterion benchmark suite: ferrocase vs the standard library where std has
// an equivalent.
//
// Run: cargo bench
// Specific group: cargo bench -- map
// HTML report: target/criterion/report/index.html

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ferrocase::casemap::{map, CaseMode, MapOptions};
use ferrocase::encodings::{Utf16, Utf8};
use ferrocase::prelude::*;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

const ASCII: &str = "The quick brown fox jumps over the lazy dog near the riverbank";
const LATIN: &str = "Größenwahn und Straßenbahn: Ærøskøbing, Œuvre, Ça va, Ðáñïêl";
const GREEK: &str = "ΟΔΥΣΣΕΥΣ ΚΑΙ ΠΗΝΕΛΟΠΗ ΣΤΗΝ ΙΘΑΚΗ, ᾼ ΦΩΣ ΤΗΣ ΑΥΓΗΣ";

fn inputs() -> Vec<(&'static str, String)> {
    vec![
        ("ascii", ASCII.repeat(16)),
        ("latin", LATIN.repeat(16)),
        ("greek", GREEK.repeat(16)),
    ]
}

// ---------------------------------------------------------------------------
// Case mapping
// ---------------------------------------------------------------------------

fn bench_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("map");
    for (name, text) in inputs() {
        for (mode_name, mode) in [("lower", CaseMode::Lowercase), ("upper", CaseMode::Uppercase)] {
            let opts = MapOptions::new(mode);
            let id = format!("{}/{}", mode_name, name);

            // Verify agreement with std
            let ours = String::from_utf8(map::<Utf8>(text.as_bytes(), &opts).unwrap()).unwrap();
            let std_out = match mode {
                CaseMode::Lowercase => text.to_lowercase(),
                _ => text.to_uppercase(),
            };
            assert_eq!(ours, std_out, "{}", id);

            group.bench_with_input(BenchmarkId::new("ferrocase", &id), text.as_bytes(), |b, src| {
                b.iter(|| black_box(map::<Utf8>(black_box(src), &opts).unwrap()));
            });
            group.bench_with_input(BenchmarkId::new("std", &id), text.as_str(), |b, src| {
                b.iter(|| match mode {
                    CaseMode::Lowercase => black_box(black_box(src).to_lowercase()),
                    _ => black_box(black_box(src).to_uppercase()),
                });
            });
        }
    }
    group.finish();
}

fn bench_map_widths(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_widths");
    let opts = MapOptions::new(CaseMode::Casefold);
    for (name, text) in inputs() {
        let u16s: Vec<u16> = text.encode_utf16().collect();
        group.bench_with_input(BenchmarkId::new("utf8", name), text.as_bytes(), |b, src| {
            b.iter(|| black_box(map::<Utf8>(black_box(src), &opts).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("utf16", name), &u16s[..], |b, src| {
            b.iter(|| black_box(map::<Utf16>(black_box(src), &opts).unwrap()));
        });
    }
    group.finish();
}

fn bench_titlecase(c: &mut Criterion) {
    let mut group = c.benchmark_group("titlecase");
    let mapper = CaseMapper::titlecase();
    for (name, text) in inputs() {
        group.bench_with_input(BenchmarkId::new("uax29", name), text.as_str(), |b, src| {
            b.iter(|| black_box(mapper.map_str(black_box(src)).unwrap()));
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Comparison
// ---------------------------------------------------------------------------

fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare");
    for (name, text) in inputs() {
        let upper = text.to_uppercase();
        group.bench_with_input(BenchmarkId::new("caseless", name), &upper, |b, other| {
            b.iter(|| black_box(caseless::compare(black_box(&text), black_box(other))));
        });
        group.bench_with_input(BenchmarkId::new("std_fold_then_eq", name), &upper, |b, other| {
            b.iter(|| black_box(text.to_lowercase() == other.to_lowercase()));
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let haystack = ASCII.repeat(64);
    let cases: &[(&str, &str)] = &[("early", "QUICK"), ("late", "RIVERBANK"), ("missing", "ZEBRA")];
    for (name, needle) in cases {
        group.bench_with_input(BenchmarkId::new("caseless", name), needle, |b, needle| {
            b.iter(|| black_box(caseless::search(black_box(&haystack), needle)));
        });
    }
    group.finish();
}

fn bench_collate(c: &mut Criterion) {
    let mut group = c.benchmark_group("collate");
    let mut words: Vec<String> = LATIN
        .split_whitespace()
        .chain(ASCII.split_whitespace())
        .map(str::to_owned)
        .collect();
    words.sort();
    group.bench_function("sort_by_collate", |b| {
        b.iter(|| {
            let mut w = words.clone();
            w.sort_by(|a, b| casesens::collate(a, b));
            black_box(w)
        });
    });
    group.bench_function("sort_by_sortkey", |b| {
        b.iter(|| {
            let mut w = words.clone();
            w.sort_by_cached_key(|s| casesens::sortkey(s).unwrap());
            black_box(w)
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_map,
    bench_map_widths,
    bench_titlecase,
    bench_compare,
    bench_search,
    bench_collate,
);
criterion_main!(benches);
