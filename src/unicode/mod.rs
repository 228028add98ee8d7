// unicode/mod.rs - Codepoint case properties and mappings.
//
// Read-only oracle consulted by the engines: property bits per codepoint and
// the simple (1:1) and full (1:n, n <= MAX_FULL_MAPPING) mapping for each
// mode. Root rules only; locale-conditional rules live in `tailoring`.

mod tables;

use std::iter;

use bitflags::bitflags;
use smallvec::SmallVec;
use unicode_casefold::{CaseFold, Locale as FoldLocale, UnicodeCaseFold, Variant};
use unicode_normalization::char as ucd;

use crate::casemap::CaseMode;
use crate::encoding::CodePoint;
use crate::safe::SafeArray;
use tables::in_ranges;

/// Longest full mapping of a single codepoint (U+0390 uppercases to three).
pub const MAX_FULL_MAPPING: usize = 3;

/// Output buffer for one full mapping.
pub type FullMapping = SafeArray<char, MAX_FULL_MAPPING>;

/// Full mapping of one codepoint, as returned to callers.
pub type MappedChars = SmallVec<[char; MAX_FULL_MAPPING]>;

bitflags! {
    /// Case-related properties of a codepoint (DerivedCoreProperties.txt,
    /// PropList.txt, General_Category=Lt).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CaseProps: u8 {
        const LOWERCASE = 1 << 0;
        const UPPERCASE = 1 << 1;
        const TITLECASE = 1 << 2;
        const CASED = 1 << 3;
        const CASE_IGNORABLE = 1 << 4;
        const SOFT_DOTTED = 1 << 5;
    }
}

/// How a codepoint maps under a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingKind {
    /// Maps to itself.
    Identity,
    /// Maps to exactly one other codepoint.
    Simple,
    /// Maps to a sequence of codepoints.
    Full,
}

// === Latin-1 property table ===
// Fast path for code < 256, built at compile time.

const fn latin1_props(c: u32) -> u8 {
    let lower = matches!(c, 0x61..=0x7a | 0xaa | 0xb5 | 0xba | 0xdf..=0xf6 | 0xf8..=0xff);
    let upper = matches!(c, 0x41..=0x5a | 0xc0..=0xd6 | 0xd8..=0xde);
    let ignorable = matches!(
        c,
        0x27 | 0x2e | 0x3a | 0x5e | 0x60 | 0xa8 | 0xad | 0xaf | 0xb4 | 0xb7 | 0xb8
    );
    let mut bits = 0;
    if lower {
        bits |= CaseProps::LOWERCASE.bits() | CaseProps::CASED.bits();
    }
    if upper {
        bits |= CaseProps::UPPERCASE.bits() | CaseProps::CASED.bits();
    }
    if ignorable {
        bits |= CaseProps::CASE_IGNORABLE.bits();
    }
    if c == 0x69 || c == 0x6a {
        bits |= CaseProps::SOFT_DOTTED.bits();
    }
    bits
}

const fn build_latin1_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = latin1_props(i as u32);
        i += 1;
    }
    table
}

static LATIN1_CASE_PROPS: [u8; 256] = build_latin1_table();

fn compute_props(c: char) -> CaseProps {
    let code = c as CodePoint;
    let mut props = CaseProps::empty();
    if c.is_lowercase() {
        props |= CaseProps::LOWERCASE;
    }
    if c.is_uppercase() {
        props |= CaseProps::UPPERCASE;
    }
    if in_ranges(code, tables::TITLECASE_RANGES) {
        props |= CaseProps::TITLECASE;
    }
    if props.intersects(CaseProps::LOWERCASE | CaseProps::UPPERCASE | CaseProps::TITLECASE) {
        props |= CaseProps::CASED;
    }
    if in_ranges(code, tables::CASE_IGNORABLE_RANGES) {
        props |= CaseProps::CASE_IGNORABLE;
    }
    if in_ranges(code, tables::SOFT_DOTTED_RANGES) {
        props |= CaseProps::SOFT_DOTTED;
    }
    props
}

// === Property queries ===

pub fn props(c: char) -> CaseProps {
    if (c as u32) < 256 {
        return CaseProps::from_bits_truncate(LATIN1_CASE_PROPS[c as usize]);
    }
    compute_props(c)
}

pub fn is_lowercase(c: char) -> bool {
    props(c).contains(CaseProps::LOWERCASE)
}

pub fn is_uppercase(c: char) -> bool {
    props(c).contains(CaseProps::UPPERCASE)
}

pub fn is_titlecase(c: char) -> bool {
    props(c).contains(CaseProps::TITLECASE)
}

pub fn is_cased(c: char) -> bool {
    props(c).contains(CaseProps::CASED)
}

pub fn is_case_ignorable(c: char) -> bool {
    props(c).contains(CaseProps::CASE_IGNORABLE)
}

pub fn is_soft_dotted(c: char) -> bool {
    props(c).contains(CaseProps::SOFT_DOTTED)
}

/// Canonical_Combining_Class.
pub fn combining_class(c: char) -> u8 {
    ucd::canonical_combining_class(c)
}

/// Combining mark (Mn, Mc, Me) or any codepoint with a non-zero combining class.
pub fn is_mark(c: char) -> bool {
    ucd::is_combining_mark(c) || ucd::canonical_combining_class(c) != 0
}

// === Simple mappings ===

pub fn to_simple_lowercase(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        // İ is the only codepoint whose lowercase expands.
        _ if c == '\u{0130}' => 'i',
        _ => c,
    }
}

pub fn to_simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => tables::iota_subscript_upper(c).unwrap_or(c),
    }
}

pub fn to_simple_titlecase(c: char) -> char {
    if let Some(t) = tables::titlecase_digraph(c) {
        return t;
    }
    if in_ranges(c as CodePoint, tables::TITLECASE_IDENTITY_RANGES) {
        return c;
    }
    to_simple_uppercase(c)
}

// unicode-casefold carries Unicode 9.0 data. A letter it leaves alone but std
// lowercases (Georgian Mtavruli, U+A7C0, ...) folds through that lowercase.

fn fold_data(c: char, variant: Variant) -> CaseFold<iter::Once<char>> {
    iter::once(c).case_fold_with(variant, FoldLocale::NonTurkic)
}

fn fold_source(c: char) -> char {
    let mut folded = fold_data(c, Variant::Full);
    match (folded.next(), folded.next()) {
        (Some(f), None) if f == c => to_simple_lowercase(c),
        _ => c,
    }
}

pub fn to_simple_casefold(c: char) -> char {
    let src = fold_source(c);
    fold_data(src, Variant::Simple).next().unwrap_or(src)
}

pub(crate) fn map_simple(c: char, mode: CaseMode) -> char {
    match mode {
        CaseMode::Lowercase => to_simple_lowercase(c),
        CaseMode::Uppercase => to_simple_uppercase(c),
        CaseMode::Titlecase => to_simple_titlecase(c),
        CaseMode::Casefold => to_simple_casefold(c),
    }
}

// === Full mappings ===

// Writing a fourth codepoint is a contract violation and aborts.
fn fill<I: IntoIterator<Item = char>>(chars: I, out: &mut FullMapping) -> usize {
    let mut n = 0;
    for c in chars {
        out[n] = c;
        n += 1;
    }
    n
}

pub(crate) fn full_lowercase(c: char, out: &mut FullMapping) -> usize {
    fill(c.to_lowercase(), out)
}

pub(crate) fn full_uppercase(c: char, out: &mut FullMapping) -> usize {
    fill(c.to_uppercase(), out)
}

pub(crate) fn full_titlecase(c: char, out: &mut FullMapping) -> usize {
    if let Some(special) = tables::titlecase_special(c) {
        return fill(special.iter().copied(), out);
    }
    let upper = c.to_uppercase();
    if upper.len() == 1 {
        out[0] = to_simple_titlecase(c);
        return 1;
    }
    if let Some(t) = tables::iota_subscript_upper(c) {
        out[0] = t;
        return 1;
    }
    // ß → Ss, ﬃ → Ffi, և → Եւ: keep the first letter, lower the rest.
    fill(
        upper
            .enumerate()
            .map(|(i, u)| if i == 0 { u } else { to_simple_lowercase(u) }),
        out,
    )
}

pub(crate) fn full_casefold(c: char, out: &mut FullMapping) -> usize {
    fill(fold_data(fold_source(c), Variant::Full), out)
}

pub(crate) fn map_full(c: char, mode: CaseMode, out: &mut FullMapping) -> usize {
    match mode {
        CaseMode::Lowercase => full_lowercase(c, out),
        CaseMode::Uppercase => full_uppercase(c, out),
        CaseMode::Titlecase => full_titlecase(c, out),
        CaseMode::Casefold => full_casefold(c, out),
    }
}

fn collect_full(c: char, mode: CaseMode) -> MappedChars {
    let mut buf = FullMapping::new();
    let n = map_full(c, mode, &mut buf);
    (0..n).map(|i| buf[i]).collect()
}

pub fn to_lowercase_full(c: char) -> MappedChars {
    collect_full(c, CaseMode::Lowercase)
}

pub fn to_uppercase_full(c: char) -> MappedChars {
    collect_full(c, CaseMode::Uppercase)
}

pub fn to_titlecase_full(c: char) -> MappedChars {
    collect_full(c, CaseMode::Titlecase)
}

pub fn to_casefold_full(c: char) -> MappedChars {
    collect_full(c, CaseMode::Casefold)
}

pub fn mapping_kind(c: char, mode: CaseMode) -> MappingKind {
    let mut buf = FullMapping::new();
    match map_full(c, mode, &mut buf) {
        1 if buf[0] == c => MappingKind::Identity,
        1 => MappingKind::Simple,
        _ => MappingKind::Full,
    }
}
