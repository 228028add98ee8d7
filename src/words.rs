// words.rs - Word-boundary predicate consumed by titlecasing.
//
// Boundaries are expressed over codepoint indices of the decoded input, so
// the same predicate serves every unit width.

use smallvec::SmallVec;
use unicode_segmentation::UnicodeSegmentation;

use crate::encoding::{Decoded, Encoding};

pub trait WordBreaks {
    /// True if a word starts at codepoint `index`.
    fn is_break(&self, index: usize) -> bool;
}

/// Treats the whole input as one word.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBreaks;

impl WordBreaks for NoBreaks {
    fn is_break(&self, index: usize) -> bool {
        index == 0
    }
}

impl<F: Fn(usize) -> bool> WordBreaks for F {
    fn is_break(&self, index: usize) -> bool {
        self(index)
    }
}

/// UAX #29 word starts, as sorted codepoint indices.
#[derive(Debug, Clone, Default)]
pub struct WordStarts {
    starts: SmallVec<[usize; 16]>,
}

impl WordStarts {
    pub fn from_text(text: &str) -> Self {
        let mut starts = SmallVec::new();
        let mut chars = 0;
        let mut byte = 0;
        for (idx, _) in text.split_word_bound_indices() {
            chars += text[byte..idx].chars().count();
            byte = idx;
            starts.push(chars);
        }
        WordStarts { starts }
    }

    pub fn from_units<E: Encoding>(src: &[E::Unit]) -> Self {
        let text: String = Decoded::<E>::new(src).collect();
        Self::from_text(&text)
    }

    pub fn starts(&self) -> &[usize] {
        &self.starts
    }
}

impl WordBreaks for WordStarts {
    fn is_break(&self, index: usize) -> bool {
        self.starts.binary_search(&index).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encodings::Utf16;

    #[test]
    fn word_starts_are_codepoint_indices() {
        let w = WordStarts::from_text("héllo wörld");
        assert_eq!(w.starts(), &[0, 5, 6]);
        assert!(w.is_break(6));
        assert!(!w.is_break(7));
    }

    #[test]
    fn contractions_stay_in_one_word() {
        let w = WordStarts::from_text("don't stop");
        assert_eq!(w.starts(), &[0, 5, 6]);
    }

    #[test]
    fn from_units_agrees_with_text() {
        let text = "𝄞 ab";
        let units: Vec<u16> = text.encode_utf16().collect();
        assert_eq!(
            WordStarts::from_units::<Utf16>(&units).starts(),
            WordStarts::from_text(text).starts()
        );
    }

    #[test]
    fn closures_and_no_breaks() {
        let every_other = |i: usize| i % 2 == 0;
        assert!(every_other.is_break(2));
        assert!(NoBreaks.is_break(0));
        assert!(!NoBreaks.is_break(1));
    }
}
