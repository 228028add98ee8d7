// unicode/tables.rs - Static data for the case property oracle.
//
// Range tables are flat `[lo, hi, lo, hi, ...]` arrays, sorted and
// non-overlapping, searched with `in_ranges`. Everything std's `char` and the
// unicode-* crates already expose is taken from them instead.

use crate::encoding::CodePoint;

/// DerivedCoreProperties.txt Case_Ignorable (Unicode 17.0): Mn, Me, Cf, Lm, Sk
/// and the Word_Break MidLetter/MidNumLet/Single_Quote characters.
pub static CASE_IGNORABLE_RANGES: &[CodePoint] = &[
    0x0027, 0x0027, 0x002e, 0x002e, 0x003a, 0x003a, 0x005e, 0x005e,
    0x0060, 0x0060, 0x00a8, 0x00a8, 0x00ad, 0x00ad, 0x00af, 0x00af,
    0x00b4, 0x00b4, 0x00b7, 0x00b8, 0x02b0, 0x036f, 0x0374, 0x0375,
    0x037a, 0x037a, 0x0384, 0x0385, 0x0387, 0x0387, 0x0483, 0x0489,
    0x0559, 0x0559, 0x055f, 0x055f, 0x0591, 0x05bd, 0x05bf, 0x05bf,
    0x05c1, 0x05c2, 0x05c4, 0x05c5, 0x05c7, 0x05c7, 0x05f4, 0x05f4,
    0x0600, 0x0605, 0x0610, 0x061a, 0x061c, 0x061c, 0x0640, 0x0640,
    0x064b, 0x065f, 0x0670, 0x0670, 0x06d6, 0x06dd, 0x06df, 0x06e8,
    0x06ea, 0x06ed, 0x070f, 0x070f, 0x0711, 0x0711, 0x0730, 0x074a,
    0x07a6, 0x07b0, 0x07eb, 0x07f5, 0x07fa, 0x07fa, 0x07fd, 0x07fd,
    0x0816, 0x082d, 0x0859, 0x085b, 0x0888, 0x0888, 0x0890, 0x0891,
    0x0897, 0x089f, 0x08c9, 0x0902, 0x093a, 0x093a, 0x093c, 0x093c,
    0x0941, 0x0948, 0x094d, 0x094d, 0x0951, 0x0957, 0x0962, 0x0963,
    0x0971, 0x0971, 0x0981, 0x0981, 0x09bc, 0x09bc, 0x09c1, 0x09c4,
    0x09cd, 0x09cd, 0x09e2, 0x09e3, 0x09fe, 0x09fe, 0x0a01, 0x0a02,
    0x0a3c, 0x0a3c, 0x0a41, 0x0a42, 0x0a47, 0x0a48, 0x0a4b, 0x0a4d,
    0x0a51, 0x0a51, 0x0a70, 0x0a71, 0x0a75, 0x0a75, 0x0a81, 0x0a82,
    0x0abc, 0x0abc, 0x0ac1, 0x0ac5, 0x0ac7, 0x0ac8, 0x0acd, 0x0acd,
    0x0ae2, 0x0ae3, 0x0afa, 0x0aff, 0x0b01, 0x0b01, 0x0b3c, 0x0b3c,
    0x0b3f, 0x0b3f, 0x0b41, 0x0b44, 0x0b4d, 0x0b4d, 0x0b55, 0x0b56,
    0x0b62, 0x0b63, 0x0b82, 0x0b82, 0x0bc0, 0x0bc0, 0x0bcd, 0x0bcd,
    0x0c00, 0x0c00, 0x0c04, 0x0c04, 0x0c3c, 0x0c3c, 0x0c3e, 0x0c40,
    0x0c46, 0x0c48, 0x0c4a, 0x0c4d, 0x0c55, 0x0c56, 0x0c62, 0x0c63,
    0x0c81, 0x0c81, 0x0cbc, 0x0cbc, 0x0cbf, 0x0cbf, 0x0cc6, 0x0cc6,
    0x0ccc, 0x0ccd, 0x0ce2, 0x0ce3, 0x0d00, 0x0d01, 0x0d3b, 0x0d3c,
    0x0d41, 0x0d44, 0x0d4d, 0x0d4d, 0x0d62, 0x0d63, 0x0d81, 0x0d81,
    0x0dca, 0x0dca, 0x0dd2, 0x0dd4, 0x0dd6, 0x0dd6, 0x0e31, 0x0e31,
    0x0e34, 0x0e3a, 0x0e46, 0x0e4e, 0x0eb1, 0x0eb1, 0x0eb4, 0x0ebc,
    0x0ec6, 0x0ec6, 0x0ec8, 0x0ece, 0x0f18, 0x0f19, 0x0f35, 0x0f35,
    0x0f37, 0x0f37, 0x0f39, 0x0f39, 0x0f71, 0x0f7e, 0x0f80, 0x0f84,
    0x0f86, 0x0f87, 0x0f8d, 0x0f97, 0x0f99, 0x0fbc, 0x0fc6, 0x0fc6,
    0x102d, 0x1030, 0x1032, 0x1037, 0x1039, 0x103a, 0x103d, 0x103e,
    0x1058, 0x1059, 0x105e, 0x1060, 0x1071, 0x1074, 0x1082, 0x1082,
    0x1085, 0x1086, 0x108d, 0x108d, 0x109d, 0x109d, 0x10fc, 0x10fc,
    0x135d, 0x135f, 0x1712, 0x1714, 0x1732, 0x1733, 0x1752, 0x1753,
    0x1772, 0x1773, 0x17b4, 0x17b5, 0x17b7, 0x17bd, 0x17c6, 0x17c6,
    0x17c9, 0x17d3, 0x17d7, 0x17d7, 0x17dd, 0x17dd, 0x180b, 0x180f,
    0x1843, 0x1843, 0x1885, 0x1886, 0x18a9, 0x18a9, 0x1920, 0x1922,
    0x1927, 0x1928, 0x1932, 0x1932, 0x1939, 0x193b, 0x1a17, 0x1a18,
    0x1a1b, 0x1a1b, 0x1a56, 0x1a56, 0x1a58, 0x1a5e, 0x1a60, 0x1a60,
    0x1a62, 0x1a62, 0x1a65, 0x1a6c, 0x1a73, 0x1a7c, 0x1a7f, 0x1a7f,
    0x1aa7, 0x1aa7, 0x1ab0, 0x1add, 0x1ae0, 0x1aeb, 0x1b00, 0x1b03,
    0x1b34, 0x1b34, 0x1b36, 0x1b3a, 0x1b3c, 0x1b3c, 0x1b42, 0x1b42,
    0x1b6b, 0x1b73, 0x1b80, 0x1b81, 0x1ba2, 0x1ba5, 0x1ba8, 0x1ba9,
    0x1bab, 0x1bad, 0x1be6, 0x1be6, 0x1be8, 0x1be9, 0x1bed, 0x1bed,
    0x1bef, 0x1bf1, 0x1c2c, 0x1c33, 0x1c36, 0x1c37, 0x1c78, 0x1c7d,
    0x1cd0, 0x1cd2, 0x1cd4, 0x1ce0, 0x1ce2, 0x1ce8, 0x1ced, 0x1ced,
    0x1cf4, 0x1cf4, 0x1cf8, 0x1cf9, 0x1d2c, 0x1d6a, 0x1d78, 0x1d78,
    0x1d9b, 0x1dff, 0x1fbd, 0x1fbd, 0x1fbf, 0x1fc1, 0x1fcd, 0x1fcf,
    0x1fdd, 0x1fdf, 0x1fed, 0x1fef, 0x1ffd, 0x1ffe, 0x200b, 0x200f,
    0x2018, 0x2019, 0x2024, 0x2024, 0x2027, 0x2027, 0x202a, 0x202e,
    0x2060, 0x2064, 0x2066, 0x206f, 0x2071, 0x2071, 0x207f, 0x207f,
    0x2090, 0x209c, 0x20d0, 0x20f0, 0x2c7c, 0x2c7d, 0x2cef, 0x2cf1,
    0x2d6f, 0x2d6f, 0x2d7f, 0x2d7f, 0x2de0, 0x2dff, 0x2e2f, 0x2e2f,
    0x3005, 0x3005, 0x302a, 0x302d, 0x3031, 0x3035, 0x303b, 0x303b,
    0x3099, 0x309e, 0x30fc, 0x30fe, 0xa015, 0xa015, 0xa4f8, 0xa4fd,
    0xa60c, 0xa60c, 0xa66f, 0xa672, 0xa674, 0xa67d, 0xa67f, 0xa67f,
    0xa69c, 0xa69f, 0xa6f0, 0xa6f1, 0xa700, 0xa721, 0xa770, 0xa770,
    0xa788, 0xa78a, 0xa7f1, 0xa7f4, 0xa7f8, 0xa7f9, 0xa802, 0xa802,
    0xa806, 0xa806, 0xa80b, 0xa80b, 0xa825, 0xa826, 0xa82c, 0xa82c,
    0xa8c4, 0xa8c5, 0xa8e0, 0xa8f1, 0xa8ff, 0xa8ff, 0xa926, 0xa92d,
    0xa947, 0xa951, 0xa980, 0xa982, 0xa9b3, 0xa9b3, 0xa9b6, 0xa9b9,
    0xa9bc, 0xa9bd, 0xa9cf, 0xa9cf, 0xa9e5, 0xa9e6, 0xaa29, 0xaa2e,
    0xaa31, 0xaa32, 0xaa35, 0xaa36, 0xaa43, 0xaa43, 0xaa4c, 0xaa4c,
    0xaa70, 0xaa70, 0xaa7c, 0xaa7c, 0xaab0, 0xaab0, 0xaab2, 0xaab4,
    0xaab7, 0xaab8, 0xaabe, 0xaabf, 0xaac1, 0xaac1, 0xaadd, 0xaadd,
    0xaaec, 0xaaed, 0xaaf3, 0xaaf4, 0xaaf6, 0xaaf6, 0xab5b, 0xab5f,
    0xab69, 0xab6b, 0xabe5, 0xabe5, 0xabe8, 0xabe8, 0xabed, 0xabed,
    0xfb1e, 0xfb1e, 0xfbb2, 0xfbc2, 0xfe00, 0xfe0f, 0xfe13, 0xfe13,
    0xfe20, 0xfe2f, 0xfe52, 0xfe52, 0xfe55, 0xfe55, 0xfeff, 0xfeff,
    0xff07, 0xff07, 0xff0e, 0xff0e, 0xff1a, 0xff1a, 0xff3e, 0xff3e,
    0xff40, 0xff40, 0xff70, 0xff70, 0xff9e, 0xff9f, 0xffe3, 0xffe3,
    0xfff9, 0xfffb, 0x101fd, 0x101fd, 0x102e0, 0x102e0, 0x10376, 0x1037a,
    0x10780, 0x10785, 0x10787, 0x107b0, 0x107b2, 0x107ba, 0x10a01, 0x10a03,
    0x10a05, 0x10a06, 0x10a0c, 0x10a0f, 0x10a38, 0x10a3a, 0x10a3f, 0x10a3f,
    0x10ae5, 0x10ae6, 0x10d24, 0x10d27, 0x10d4e, 0x10d4e, 0x10d69, 0x10d6d,
    0x10d6f, 0x10d6f, 0x10eab, 0x10eac, 0x10ec5, 0x10ec5, 0x10efa, 0x10eff,
    0x10f46, 0x10f50, 0x10f82, 0x10f85, 0x11001, 0x11001, 0x11038, 0x11046,
    0x11070, 0x11070, 0x11073, 0x11074, 0x1107f, 0x11081, 0x110b3, 0x110b6,
    0x110b9, 0x110ba, 0x110bd, 0x110bd, 0x110c2, 0x110c2, 0x110cd, 0x110cd,
    0x11100, 0x11102, 0x11127, 0x1112b, 0x1112d, 0x11134, 0x11173, 0x11173,
    0x11180, 0x11181, 0x111b6, 0x111be, 0x111c9, 0x111cc, 0x111cf, 0x111cf,
    0x1122f, 0x11231, 0x11234, 0x11234, 0x11236, 0x11237, 0x1123e, 0x1123e,
    0x11241, 0x11241, 0x112df, 0x112df, 0x112e3, 0x112ea, 0x11300, 0x11301,
    0x1133b, 0x1133c, 0x11340, 0x11340, 0x11366, 0x1136c, 0x11370, 0x11374,
    0x113bb, 0x113c0, 0x113ce, 0x113ce, 0x113d0, 0x113d0, 0x113d2, 0x113d2,
    0x113e1, 0x113e2, 0x11438, 0x1143f, 0x11442, 0x11444, 0x11446, 0x11446,
    0x1145e, 0x1145e, 0x114b3, 0x114b8, 0x114ba, 0x114ba, 0x114bf, 0x114c0,
    0x114c2, 0x114c3, 0x115b2, 0x115b5, 0x115bc, 0x115bd, 0x115bf, 0x115c0,
    0x115dc, 0x115dd, 0x11633, 0x1163a, 0x1163d, 0x1163d, 0x1163f, 0x11640,
    0x116ab, 0x116ab, 0x116ad, 0x116ad, 0x116b0, 0x116b5, 0x116b7, 0x116b7,
    0x1171d, 0x1171d, 0x1171f, 0x1171f, 0x11722, 0x11725, 0x11727, 0x1172b,
    0x1182f, 0x11837, 0x11839, 0x1183a, 0x1193b, 0x1193c, 0x1193e, 0x1193e,
    0x11943, 0x11943, 0x119d4, 0x119d7, 0x119da, 0x119db, 0x119e0, 0x119e0,
    0x11a01, 0x11a0a, 0x11a33, 0x11a38, 0x11a3b, 0x11a3e, 0x11a47, 0x11a47,
    0x11a51, 0x11a56, 0x11a59, 0x11a5b, 0x11a8a, 0x11a96, 0x11a98, 0x11a99,
    0x11b60, 0x11b60, 0x11b62, 0x11b64, 0x11b66, 0x11b66, 0x11c30, 0x11c36,
    0x11c38, 0x11c3d, 0x11c3f, 0x11c3f, 0x11c92, 0x11ca7, 0x11caa, 0x11cb0,
    0x11cb2, 0x11cb3, 0x11cb5, 0x11cb6, 0x11d31, 0x11d36, 0x11d3a, 0x11d3a,
    0x11d3c, 0x11d3d, 0x11d3f, 0x11d45, 0x11d47, 0x11d47, 0x11d90, 0x11d91,
    0x11d95, 0x11d95, 0x11d97, 0x11d97, 0x11dd9, 0x11dd9, 0x11ef3, 0x11ef4,
    0x11f00, 0x11f01, 0x11f36, 0x11f3a, 0x11f40, 0x11f40, 0x11f42, 0x11f42,
    0x11f5a, 0x11f5a, 0x13430, 0x13440, 0x13447, 0x13455, 0x1611e, 0x16129,
    0x1612d, 0x1612f, 0x16af0, 0x16af4, 0x16b30, 0x16b36, 0x16b40, 0x16b43,
    0x16d40, 0x16d42, 0x16d6b, 0x16d6c, 0x16f4f, 0x16f4f, 0x16f8f, 0x16f9f,
    0x16fe0, 0x16fe1, 0x16fe3, 0x16fe4, 0x16ff2, 0x16ff3, 0x1aff0, 0x1aff3,
    0x1aff5, 0x1affb, 0x1affd, 0x1affe, 0x1bc9d, 0x1bc9e, 0x1bca0, 0x1bca3,
    0x1cf00, 0x1cf2d, 0x1cf30, 0x1cf46, 0x1d167, 0x1d169, 0x1d173, 0x1d182,
    0x1d185, 0x1d18b, 0x1d1aa, 0x1d1ad, 0x1d242, 0x1d244, 0x1da00, 0x1da36,
    0x1da3b, 0x1da6c, 0x1da75, 0x1da75, 0x1da84, 0x1da84, 0x1da9b, 0x1da9f,
    0x1daa1, 0x1daaf, 0x1e000, 0x1e006, 0x1e008, 0x1e018, 0x1e01b, 0x1e021,
    0x1e023, 0x1e024, 0x1e026, 0x1e02a, 0x1e030, 0x1e06d, 0x1e08f, 0x1e08f,
    0x1e130, 0x1e13d, 0x1e2ae, 0x1e2ae, 0x1e2ec, 0x1e2ef, 0x1e4eb, 0x1e4ef,
    0x1e5ee, 0x1e5ef, 0x1e6e3, 0x1e6e3, 0x1e6e6, 0x1e6e6, 0x1e6ee, 0x1e6ef,
    0x1e6f5, 0x1e6f5, 0x1e6ff, 0x1e6ff, 0x1e8d0, 0x1e8d6, 0x1e944, 0x1e94b,
    0x1f3fb, 0x1f3ff, 0xe0001, 0xe0001, 0xe0020, 0xe007f, 0xe0100, 0xe01ef,
];

/// PropList.txt Soft_Dotted.
pub static SOFT_DOTTED_RANGES: &[CodePoint] = &[
    0x0069, 0x006a, 0x012f, 0x012f, 0x0249, 0x0249, 0x0268, 0x0268,
    0x029d, 0x029d, 0x02b2, 0x02b2, 0x03f3, 0x03f3, 0x0456, 0x0456,
    0x0458, 0x0458, 0x1d62, 0x1d62, 0x1d96, 0x1d96, 0x1da4, 0x1da4,
    0x1da8, 0x1da8, 0x1e2d, 0x1e2d, 0x1ecb, 0x1ecb, 0x2071, 0x2071,
    0x2148, 0x2149, 0x2c7c, 0x2c7c, 0x1d422, 0x1d423, 0x1d456, 0x1d457,
    0x1d48a, 0x1d48b, 0x1d4be, 0x1d4bf, 0x1d4f2, 0x1d4f3, 0x1d526, 0x1d527,
    0x1d55a, 0x1d55b, 0x1d58e, 0x1d58f, 0x1d5c2, 0x1d5c3, 0x1d5f6, 0x1d5f7,
    0x1d62a, 0x1d62b, 0x1d65e, 0x1d65f, 0x1d692, 0x1d693, 0x1df1a, 0x1df1a,
    0x1e04c, 0x1e04d, 0x1e068, 0x1e068,
];

/// General_Category=Lt.
pub static TITLECASE_RANGES: &[CodePoint] = &[
    0x01c5, 0x01c5, 0x01c8, 0x01c8, 0x01cb, 0x01cb, 0x01f2, 0x01f2,
    0x1f88, 0x1f8f, 0x1f98, 0x1f9f, 0x1fa8, 0x1faf, 0x1fbc, 0x1fbc,
    0x1fcc, 0x1fcc, 0x1ffc, 0x1ffc,
];

/// Georgian Mkhedruli: uppercases to Mtavruli but titlecases to itself.
pub static TITLECASE_IDENTITY_RANGES: &[CodePoint] = &[0x10d0, 0x10fa, 0x10fd, 0x10ff];

/// Binary search over a flat range table.
pub fn in_ranges(code: CodePoint, ranges: &[CodePoint]) -> bool {
    let n = ranges.len() / 2;
    let mut low = 0usize;
    let mut high = n;
    while low < high {
        let mid = (low + high) / 2;
        if code > ranges[mid * 2 + 1] {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    low < n && code >= ranges[low * 2]
}

/// Simple titlecase of the Latin digraphs DŽ, LJ, NJ, DZ in all three forms.
pub fn titlecase_digraph(c: char) -> Option<char> {
    let title = match c {
        '\u{01c4}'..='\u{01c6}' => '\u{01c5}',
        '\u{01c7}'..='\u{01c9}' => '\u{01c8}',
        '\u{01ca}'..='\u{01cc}' => '\u{01cb}',
        '\u{01f1}'..='\u{01f3}' => '\u{01f2}',
        _ => return None,
    };
    Some(title)
}

/// Greek letters with ypogegrammeni whose full uppercase is two codepoints
/// (ᾳ → ΑΙ) but whose simple uppercase and titlecase is the single
/// prosgegrammeni form (ᾳ → ᾼ).
pub fn iota_subscript_upper(c: char) -> Option<char> {
    let code = c as CodePoint;
    let upper = match code {
        0x1f80..=0x1f87 | 0x1f90..=0x1f97 | 0x1fa0..=0x1fa7 => code + 8,
        0x1f88..=0x1f8f | 0x1f98..=0x1f9f | 0x1fa8..=0x1faf => code,
        0x1fb3 | 0x1fc3 | 0x1ff3 => code + 9,
        0x1fbc | 0x1fcc | 0x1ffc => code,
        _ => return None,
    };
    char::from_u32(upper)
}

/// SpecialCasing.txt titlecase entries that do not follow "first letter of
/// the uppercase expansion, rest lowercased".
pub static TITLECASE_SPECIAL: &[(char, &[char])] = &[
    ('\u{0149}', &['\u{02bc}', '\u{004e}']),
    ('\u{1fb2}', &['\u{1fba}', '\u{0345}']),
    ('\u{1fb4}', &['\u{0386}', '\u{0345}']),
    ('\u{1fb7}', &['\u{0391}', '\u{0342}', '\u{0345}']),
    ('\u{1fc2}', &['\u{1fca}', '\u{0345}']),
    ('\u{1fc4}', &['\u{0389}', '\u{0345}']),
    ('\u{1fc7}', &['\u{0397}', '\u{0342}', '\u{0345}']),
    ('\u{1ff2}', &['\u{1ffa}', '\u{0345}']),
    ('\u{1ff4}', &['\u{038f}', '\u{0345}']),
    ('\u{1ff7}', &['\u{03a9}', '\u{0342}', '\u{0345}']),
];

pub fn titlecase_special(c: char) -> Option<&'static [char]> {
    TITLECASE_SPECIAL
        .binary_search_by_key(&c, |&(k, _)| k)
        .ok()
        .map(|i| TITLECASE_SPECIAL[i].1)
}
