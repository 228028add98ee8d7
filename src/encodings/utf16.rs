// encodings/utf16.rs - UTF-16 decode/encode strategy
// Native-endian 16-bit units; unpaired surrogates decode to U+FFFD.

use crate::encoding::*;
use crate::safe::{In, Out};

#[inline]
fn is_lead_surrogate(u: u16) -> bool {
    (0xd800..=0xdbff).contains(&u)
}

#[inline]
fn is_trail_surrogate(u: u16) -> bool {
    (0xdc00..=0xdfff).contains(&u)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Utf16;

impl Encoding for Utf16 {
    type Unit = u16;

    const NAME: &'static str = "UTF-16";
    const MAX_ENC_LEN: usize = 2;

    fn decode(src: &mut In<'_, u16>) -> CodePoint {
        let u = src.next_unit();
        if is_lead_surrogate(u) {
            if !src.is_end() {
                let t = src.get();
                if is_trail_surrogate(t) {
                    src.inc();
                    return 0x10000 + (((u as CodePoint) - 0xd800) << 10) + ((t as CodePoint) - 0xdc00);
                }
            }
            return REPLACEMENT_CHARACTER;
        }
        if is_trail_surrogate(u) {
            return REPLACEMENT_CHARACTER;
        }
        u as CodePoint
    }

    fn encode(code: CodePoint, dst: &mut Out<'_, u16>) {
        if code < 0x10000 {
            dst.put(code as u16);
        } else {
            let v = code - 0x10000;
            dst.put((0xd800 + (v >> 10)) as u16);
            dst.put((0xdc00 + (v & 0x3ff)) as u16);
        }
    }

    fn code_len(code: CodePoint) -> usize {
        if code < 0x10000 {
            1
        } else {
            2
        }
    }
}
