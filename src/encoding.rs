// encoding.rs - Unit-width strategy shared by the engines.
//
// The mapping and comparison engines are written once, generic over
// `Encoding`: a zero-sized strategy that pulls one codepoint out of an `In`
// cursor and pushes one codepoint into an `Out` cursor.

use std::marker::PhantomData;

use crate::safe::{In, Out, Unit};

pub type CodePoint = u32;

pub const REPLACEMENT_CHARACTER: CodePoint = 0xFFFD;
pub const MAX_CODE_POINT: CodePoint = 0x10FFFF;

/// Worst-case growth of a case mapping, in output units per input unit.
///
/// Holds for all three widths: ΐ (one UTF-16 unit, two UTF-8 units) expands
/// to three codepoints, and a lone ill-formed UTF-8 byte becomes U+FFFD
/// (three bytes). Checked over the whole codepoint range by the test suite.
pub const CASE_MAP_GROWTH: usize = 3;

// === Encoding Trait ===

pub trait Encoding {
    type Unit: Unit;

    /// Encoding name ("UTF-8", "UTF-16", "UTF-32")
    const NAME: &'static str;

    /// Maximum encoded codepoint length in units
    const MAX_ENC_LEN: usize;

    /// Decode the codepoint at `src` and advance past it.
    ///
    /// `src` must not be at its end. Ill-formed sequences decode to U+FFFD;
    /// at least one unit is always consumed and the read never crosses the
    /// cursor's end.
    fn decode(src: &mut In<'_, Self::Unit>) -> CodePoint;

    /// Encode a scalar value at `dst`, advancing it.
    fn encode(code: CodePoint, dst: &mut Out<'_, Self::Unit>);

    /// Number of units `encode` writes for `code`.
    fn code_len(code: CodePoint) -> usize;
}

#[inline]
pub fn is_surrogate(code: CodePoint) -> bool {
    (0xD800..=0xDFFF).contains(&code)
}

#[inline]
pub fn is_scalar(code: CodePoint) -> bool {
    code <= MAX_CODE_POINT && !is_surrogate(code)
}

/// Decoded codepoint as a `char`. Decoders only produce scalar values, the
/// fallback is never taken for their output.
#[inline]
pub fn to_char(code: CodePoint) -> char {
    char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
}

// === Decoded iterator ===

/// Iterator over the codepoints of a unit sequence.
pub struct Decoded<'a, E: Encoding> {
    src: In<'a, E::Unit>,
    _enc: PhantomData<E>,
}

impl<'a, E: Encoding> Decoded<'a, E> {
    pub fn new(src: &'a [E::Unit]) -> Self {
        Decoded {
            src: In::new(src),
            _enc: PhantomData,
        }
    }
}

impl<E: Encoding> Iterator for Decoded<'_, E> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        if self.src.is_end() {
            return None;
        }
        Some(to_char(E::decode(&mut self.src)))
    }
}
