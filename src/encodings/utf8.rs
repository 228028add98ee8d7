// encodings/utf8.rs - UTF-8 decode/encode strategy
// RFC 3629 range: U+0000 - U+10FFFF, surrogates and overlongs rejected.

use crate::encoding::*;
use crate::safe::{In, Out};

// === UTF-8 Helpers ===

#[inline]
fn utf8_istail(c: u8) -> bool {
    (c & 0xc0) == 0x80
}

// === EncLen_UTF8 Table ===
// Maps first byte to sequence length (RFC 3629: max 4 bytes).
// Continuation bytes and the never-valid leads C0, C1, F5..FF map to 1.

static ENC_LEN_UTF8: [u8; 256] = [
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
];

// Allowed range of the second byte, narrower than 80..BF for the leads that
// could otherwise encode overlongs, surrogates or values past U+10FFFF.
#[inline]
fn second_byte_range(lead: u8) -> (u8, u8) {
    match lead {
        0xe0 => (0xa0, 0xbf),
        0xed => (0x80, 0x9f),
        0xf0 => (0x90, 0xbf),
        0xf4 => (0x80, 0x8f),
        _ => (0x80, 0xbf),
    }
}

// === UTF-8 Strategy ===

#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8;

impl Encoding for Utf8 {
    type Unit = u8;

    const NAME: &'static str = "UTF-8";
    const MAX_ENC_LEN: usize = 4;

    fn decode(src: &mut In<'_, u8>) -> CodePoint {
        let lead = src.next_unit();
        let len = ENC_LEN_UTF8[lead as usize] as usize;
        if len == 1 {
            return if lead < 0x80 {
                lead as CodePoint
            } else {
                REPLACEMENT_CHARACTER
            };
        }

        let (lo, hi) = second_byte_range(lead);
        let mut code = (lead as CodePoint) & (0x7f >> len);
        for i in 1..len {
            if src.is_end() {
                return REPLACEMENT_CHARACTER;
            }
            let b = src.get();
            let ok = if i == 1 {
                (lo..=hi).contains(&b)
            } else {
                utf8_istail(b)
            };
            if !ok {
                return REPLACEMENT_CHARACTER;
            }
            src.inc();
            code = (code << 6) | (b & 0x3f) as CodePoint;
        }
        code
    }

    fn encode(code: CodePoint, dst: &mut Out<'_, u8>) {
        if (code & 0xffffff80) == 0 {
            dst.put(code as u8);
        } else if (code & 0xfffff800) == 0 {
            dst.put(((code >> 6) & 0x1f) as u8 | 0xc0);
            dst.put((code & 0x3f) as u8 | 0x80);
        } else if (code & 0xffff0000) == 0 {
            dst.put(((code >> 12) & 0x0f) as u8 | 0xe0);
            dst.put(((code >> 6) & 0x3f) as u8 | 0x80);
            dst.put((code & 0x3f) as u8 | 0x80);
        } else {
            dst.put(((code >> 18) & 0x07) as u8 | 0xf0);
            dst.put(((code >> 12) & 0x3f) as u8 | 0x80);
            dst.put(((code >> 6) & 0x3f) as u8 | 0x80);
            dst.put((code & 0x3f) as u8 | 0x80);
        }
    }

    fn code_len(code: CodePoint) -> usize {
        if (code & 0xffffff80) == 0 {
            1
        } else if (code & 0xfffff800) == 0 {
            2
        } else if (code & 0xffff0000) == 0 {
            3
        } else {
            4
        }
    }
}
