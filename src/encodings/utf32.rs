// encodings/utf32.rs - UTF-32 decode/encode strategy
// One unit per codepoint; surrogates and values past U+10FFFF decode to U+FFFD.

use crate::encoding::*;
use crate::safe::{In, Out};

#[derive(Debug, Clone, Copy, Default)]
pub struct Utf32;

impl Encoding for Utf32 {
    type Unit = u32;

    const NAME: &'static str = "UTF-32";
    const MAX_ENC_LEN: usize = 1;

    fn decode(src: &mut In<'_, u32>) -> CodePoint {
        let v = src.next_unit();
        if is_scalar(v) {
            v
        } else {
            REPLACEMENT_CHARACTER
        }
    }

    fn encode(code: CodePoint, dst: &mut Out<'_, u32>) {
        dst.put(code);
    }

    fn code_len(_code: CodePoint) -> usize {
        1
    }
}
