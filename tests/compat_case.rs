// compat_case.rs - Case mapping tables checked in all three widths.
//
// Same shape as a conformance table:
//   lo(input, expected)          -> full lowercase, root locale
//   up(input, expected)          -> full uppercase, root locale
//   ti(input, expected)          -> titlecase, UAX #29 words
//   cf(input, expected)          -> full casefold
//   loc(mode, tag, input, expected) -> tailored mapping
//
// Every helper maps the UTF-8, UTF-16 and UTF-32 forms of `input` and
// requires the same result from each.

use ferrocase::casemap::{map, CaseMode, MapOptions};
use ferrocase::encodings::{Utf16, Utf32, Utf8};
use ferrocase::locale::Locale;
use proptest::prelude::*;

fn check(opts: MapOptions, input: &str, expected: &str) {
    let u8_out = map::<Utf8>(input.as_bytes(), &opts).unwrap();
    assert_eq!(
        std::str::from_utf8(&u8_out).unwrap_or("<invalid>"),
        expected,
        "UTF-8 {:?} of {:?}",
        opts.mode,
        input
    );

    let u16_in: Vec<u16> = input.encode_utf16().collect();
    let u16_out = map::<Utf16>(&u16_in, &opts).unwrap();
    assert_eq!(
        String::from_utf16(&u16_out).unwrap_or_default(),
        expected,
        "UTF-16 {:?} of {:?}",
        opts.mode,
        input
    );

    let u32_in: Vec<u32> = input.chars().map(|c| c as u32).collect();
    let u32_out: String = map::<Utf32>(&u32_in, &opts)
        .unwrap()
        .into_iter()
        .filter_map(char::from_u32)
        .collect();
    assert_eq!(u32_out, expected, "UTF-32 {:?} of {:?}", opts.mode, input);
}

fn lo(input: &str, expected: &str) {
    check(MapOptions::new(CaseMode::Lowercase), input, expected);
}

fn up(input: &str, expected: &str) {
    check(MapOptions::new(CaseMode::Uppercase), input, expected);
}

fn ti(input: &str, expected: &str) {
    check(MapOptions::new(CaseMode::Titlecase), input, expected);
}

fn cf(input: &str, expected: &str) {
    check(MapOptions::new(CaseMode::Casefold), input, expected);
}

fn loc(mode: CaseMode, tag: &str, input: &str, expected: &str) {
    let opts = MapOptions {
        locale: Locale::from_tag(tag),
        ..MapOptions::new(mode)
    };
    check(opts, input, expected);
}

fn simple(mode: CaseMode, input: &str, expected: &str) {
    let opts = MapOptions {
        full: false,
        ..MapOptions::new(mode)
    };
    check(opts, input, expected);
}

// === Root mappings ===

#[test]
fn lowercase() {
    lo("HELLO", "hello");
    lo("ÀÉÎÕÜ", "àéîõü");
    lo("ΑΒΓ", "αβγ");
    lo("АБВ", "абв");
    lo("𐐀𐐁", "𐐨𐐩");
    lo("\u{212a}", "k"); // Kelvin sign
    lo("\u{2126}", "\u{03c9}"); // Ohm sign
    lo("ǅ", "ǆ");
    lo("123 !?", "123 !?");
}

#[test]
fn final_sigma() {
    lo("ΟΔΥΣΣΕΥΣ", "οδυσσευς");
    lo("ΣΑ ΣΑΣ.", "σα σας.");
    lo("Α\u{0301}Σ", "α\u{0301}ς");
    lo("ΑΣ\u{0301}Β", "ασ\u{0301}β");
    lo("-Σ-", "-σ-");
    // Spacing marks are not case-ignorable; emoji modifiers and Lm are.
    lo("ΑΣ\u{0903}Α", "ας\u{0903}α");
    lo("Α\u{1f3fb}Σ", "α\u{1f3fb}ς");
    lo("ΑΣ\u{a9cf}Α", "ασ\u{a9cf}α");
    lo("ΑΣ\u{16fe0}Α", "ασ\u{16fe0}α");
}

#[test]
fn uppercase() {
    up("hello", "HELLO");
    up("straße", "STRASSE");
    up("ﬁ ﬂ ﬃ", "FI FL FFI");
    up("\u{0149}", "\u{02bc}N");
    up("\u{0390}", "\u{0399}\u{0308}\u{0301}");
    up("\u{1fb3}", "\u{0391}\u{0399}");
    up("ǆ", "Ǆ");
    up("ÿ", "Ÿ");
    up("ı", "I");
    up("ſ", "S");
}

#[test]
fn titlecase() {
    ti("hello world", "Hello World");
    ti("HELLO WORLD", "Hello World");
    ti("ǆungla", "ǅungla");
    ti("ﬁsh", "Fish");
    ti("ßig", "Ssig");
    ti("\u{1fb3}", "\u{1fbc}");
    ti("\u{0149}a", "\u{02bc}Na");
    ti("o'neil mcdonald", "O'neil Mcdonald");
    ti("123abc", "123Abc");
    ti("ΣΑΣ", "Σας");
}

#[test]
fn casefold() {
    cf("HELLO", "hello");
    cf("Straße", "strasse");
    cf("ẞ", "ss");
    cf("ς", "σ");
    cf("İ", "i\u{0307}");
    cf("ﬃ", "ffi");
    cf("\u{1fbc}", "\u{03b1}\u{03b9}");
    cf("\u{1c90}\u{1c91}", "\u{10d0}\u{10d1}");
    cf("\u{13a0}\u{ab70}", "\u{13a0}\u{13a0}");
}

#[test]
fn simple_mappings() {
    simple(CaseMode::Uppercase, "straße", "STRAßE");
    simple(CaseMode::Uppercase, "\u{1fb3}", "\u{1fbc}");
    simple(CaseMode::Lowercase, "İ", "i");
    simple(CaseMode::Casefold, "ẞ", "ß");
    simple(CaseMode::Titlecase, "ǆ", "ǅ");
    // Contextual rules need full mode.
    simple(CaseMode::Lowercase, "ΑΣ", "ασ");
}

// === Tailorings ===

#[test]
fn turkish() {
    loc(CaseMode::Lowercase, "tr", "İstanbul", "istanbul");
    loc(CaseMode::Lowercase, "tr", "IRMAK", "ırmak");
    loc(CaseMode::Lowercase, "tr", "I\u{0307}", "i");
    loc(CaseMode::Lowercase, "tr", "I\u{0316}\u{0307}", "i\u{0316}");
    loc(CaseMode::Uppercase, "tr", "iğne", "İĞNE");
    loc(CaseMode::Titlecase, "tr", "istanbul izmir", "İstanbul İzmir");
    loc(CaseMode::Casefold, "tr", "IİiI", "ıiiı");
    loc(CaseMode::Lowercase, "az", "İI", "iı");
}

#[test]
fn lithuanian() {
    loc(CaseMode::Lowercase, "lt", "I\u{0300}", "i\u{0307}\u{0300}");
    loc(CaseMode::Lowercase, "lt", "J\u{0301}", "j\u{0307}\u{0301}");
    loc(CaseMode::Lowercase, "lt", "Į\u{0303}", "į\u{0307}\u{0303}");
    loc(CaseMode::Lowercase, "lt", "ÌÍĨ", "i\u{0307}\u{0300}i\u{0307}\u{0301}i\u{0307}\u{0303}");
    loc(CaseMode::Lowercase, "lt", "IJ", "ij");
    loc(CaseMode::Uppercase, "lt", "i\u{0307}", "I");
    loc(CaseMode::Uppercase, "lt", "j\u{0307}\u{0301}", "J\u{0301}");
    loc(CaseMode::Uppercase, "lt", "a\u{0307}", "A\u{0307}");
    // The rest of a titlecased word is lowercased, which keeps the dot.
    loc(CaseMode::Titlecase, "lt", "i\u{0307}x", "I\u{0307}x");
}

#[test]
fn greek_and_unknown_use_root() {
    loc(CaseMode::Lowercase, "el", "ΟΔΟΣ", "οδος");
    loc(CaseMode::Uppercase, "el", "άλφα", "ΆΛΦΑ");
    loc(CaseMode::Lowercase, "de-DE", "İ", "i\u{0307}");
    loc(CaseMode::Uppercase, "nl", "ijs", "IJS");
}

// === Properties ===

// Greek capitals mixed with case-ignorables, spacing marks and anything else.
fn sigma_text() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        3 => prop::sample::select(vec!['Σ', 'Α', 'Ω', 'σ', 'ς', 'a']),
        2 => prop::sample::select(vec![
            '\u{0301}', '\u{0345}', '\u{0903}', '\u{00ad}', '\u{02b0}', '\u{02c2}',
            '\u{a9cf}', '\u{16fe0}', '\u{1f3fb}', '\u{2019}', '\'', '.', ':', ' ', '1',
        ]),
        1 => any::<char>(),
    ];
    proptest::collection::vec(piece, 0..16).prop_map(|cs| cs.into_iter().collect())
}

proptest! {
    #[test]
    fn lowercase_matches_std(s in sigma_text()) {
        let out = map::<Utf8>(s.as_bytes(), &MapOptions::new(CaseMode::Lowercase)).unwrap();
        prop_assert_eq!(String::from_utf8(out).unwrap(), s.to_lowercase());
    }

    #[test]
    fn lowercase_matches_std_on_any_text(s in "\\PC{0,40}") {
        let out = map::<Utf8>(s.as_bytes(), &MapOptions::new(CaseMode::Lowercase)).unwrap();
        prop_assert_eq!(String::from_utf8(out).unwrap(), s.to_lowercase());
    }

    #[test]
    fn uppercase_matches_std(s in "\\PC{0,40}") {
        let out = map::<Utf8>(s.as_bytes(), &MapOptions::new(CaseMode::Uppercase)).unwrap();
        prop_assert_eq!(String::from_utf8(out).unwrap(), s.to_uppercase());
    }

    #[test]
    fn casefold_is_idempotent(s in "\\PC{0,40}") {
        let opts = MapOptions::new(CaseMode::Casefold);
        let once = map::<Utf8>(s.as_bytes(), &opts).unwrap();
        let twice = map::<Utf8>(&once, &opts).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn widths_yield_the_same_codepoints(s in "\\PC{0,40}", mode in 0usize..4) {
        let opts = MapOptions::new(CaseMode::ALL[mode]);
        let a = String::from_utf8(map::<Utf8>(s.as_bytes(), &opts).unwrap()).unwrap();
        let u16s: Vec<u16> = s.encode_utf16().collect();
        let b = String::from_utf16(&map::<Utf16>(&u16s, &opts).unwrap()).unwrap();
        let u32s: Vec<u32> = s.chars().map(|c| c as u32).collect();
        let c: String = map::<Utf32>(&u32s, &opts)
            .unwrap()
            .into_iter()
            .filter_map(char::from_u32)
            .collect();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(&a, &c);
    }

    #[test]
    fn output_stays_within_growth_bound(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        for mode in CaseMode::ALL {
            let out = map::<Utf8>(&bytes, &MapOptions::new(mode)).unwrap();
            prop_assert!(out.len() <= bytes.len() * ferrocase::encoding::CASE_MAP_GROWTH);
            prop_assert!(std::str::from_utf8(&out).is_ok());
        }
    }
}
