// collate.rs - Multi-level collation and sort keys.
//
// Weights are computed from the case-folded, canonically decomposed stream:
//
//   primary    base characters only: character class, then codepoint
//   secondary  one weight per base (all equal) or combining mark
//   tertiary   case of each source character, case-sensitive order only
//
// Levels are compared one after another, so accents only break ties between
// strings with equal base letters, and case only ties between strings that
// are otherwise equal.

use std::cmp::Ordering;

use tracing::trace;
use unicode_normalization::char::decompose_canonical;

use crate::encoding::{to_char, Encoding};
use crate::error::CaseError;
use crate::safe::{In, SafeArray};
use crate::unicode::{self, FullMapping};

/// Longest full canonical decomposition of a single codepoint.
pub const MAX_DECOMPOSITION: usize = 4;

const CLASS_SHIFT: u32 = 21;
const MARK_WEIGHT: u32 = 1 << CLASS_SHIFT;
const KEY_TOP_BIT: u32 = 0x8000_0000;
const LEVEL_SEPARATOR: u8 = 0x00;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Primary,
    Secondary,
    Tertiary,
}

impl Level {
    fn levels(case_sensitive: bool) -> &'static [Level] {
        if case_sensitive {
            &[Level::Primary, Level::Secondary, Level::Tertiary]
        } else {
            &[Level::Primary, Level::Secondary]
        }
    }
}

// Whitespace < punctuation and symbols < digits < letters.
fn char_class(c: char) -> u32 {
    if c.is_whitespace() {
        1
    } else if c.is_alphabetic() {
        4
    } else if c.is_numeric() {
        3
    } else {
        2
    }
}

/// Weights of one level, produced lazily from the source sequence.
pub struct Weights<'a, E: Encoding> {
    src: In<'a, E::Unit>,
    level: Level,
    folded: FullMapping,
    folded_len: usize,
    folded_pos: usize,
    decomposed: SafeArray<char, MAX_DECOMPOSITION>,
    decomposed_len: usize,
    decomposed_pos: usize,
}

impl<'a, E: Encoding> Weights<'a, E> {
    pub fn new(src: &'a [E::Unit], level: Level) -> Self {
        Weights {
            src: In::new(src),
            level,
            folded: FullMapping::new(),
            folded_len: 0,
            folded_pos: 0,
            decomposed: SafeArray::new(),
            decomposed_len: 0,
            decomposed_pos: 0,
        }
    }

    fn decompose(&mut self, c: char) {
        let mut n = 0;
        let out = &mut self.decomposed;
        decompose_canonical(c, |d| {
            out[n] = d;
            n += 1;
        });
        self.decomposed_len = n;
        self.decomposed_pos = 0;
    }

    fn weight(&self, c: char) -> Option<u32> {
        let mark = unicode::is_mark(c);
        match self.level {
            Level::Primary if mark => None,
            Level::Primary => Some((char_class(c) << CLASS_SHIFT) | c as u32),
            Level::Secondary if mark => Some(MARK_WEIGHT | c as u32),
            Level::Secondary => Some(1),
            Level::Tertiary => None,
        }
    }
}

impl<E: Encoding> Iterator for Weights<'_, E> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.level == Level::Tertiary {
            if self.src.is_end() {
                return None;
            }
            let c = to_char(E::decode(&mut self.src));
            let upper = unicode::is_uppercase(c) || unicode::is_titlecase(c);
            return Some(if upper { 2 } else { 1 });
        }
        loop {
            while self.decomposed_pos < self.decomposed_len {
                let c = self.decomposed[self.decomposed_pos];
                self.decomposed_pos += 1;
                if let Some(w) = self.weight(c) {
                    return Some(w);
                }
            }
            if self.folded_pos < self.folded_len {
                let c = self.folded[self.folded_pos];
                self.folded_pos += 1;
                self.decompose(c);
                continue;
            }
            if self.src.is_end() {
                return None;
            }
            let c = to_char(E::decode(&mut self.src));
            self.folded_len = unicode::full_casefold(c, &mut self.folded);
            self.folded_pos = 0;
        }
    }
}

/// Linguistic order of two sequences. Case only decides between otherwise
/// equal strings, and only when `case_sensitive` is set.
pub fn collate<E: Encoding>(a: &[E::Unit], b: &[E::Unit], case_sensitive: bool) -> Ordering {
    for &level in Level::levels(case_sensitive) {
        let ord = Weights::<E>::new(a, level).cmp(Weights::<E>::new(b, level));
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

/// Byte string whose lexicographic order equals [`collate`]'s.
///
/// Each weight is four big-endian bytes with the top bit set; levels are
/// separated by a single zero byte.
pub fn sortkey<E: Encoding>(src: &[E::Unit], case_sensitive: bool) -> Result<Vec<u8>, CaseError> {
    let levels = Level::levels(case_sensitive);
    let weights: usize = levels
        .iter()
        .map(|&level| Weights::<E>::new(src, level).count())
        .sum();
    let len = weights
        .checked_mul(4)
        .and_then(|n| n.checked_add(levels.len() - 1))
        .filter(|&n| n <= isize::MAX as usize)
        .ok_or_else(|| CaseError::overflow(weights.saturating_mul(4), "sortkey"))?;

    let mut key = Vec::new();
    key.try_reserve_exact(len)
        .map_err(|_| CaseError::overflow(len, "sortkey"))?;
    for (i, &level) in levels.iter().enumerate() {
        if i > 0 {
            key.push(LEVEL_SEPARATOR);
        }
        for w in Weights::<E>::new(src, level) {
            key.extend_from_slice(&(w | KEY_TOP_BIT).to_be_bytes());
        }
    }
    trace!(len = key.len(), "generated sort key");
    Ok(key)
}
