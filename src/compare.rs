// compare.rs - Ordering, substring search and LIKE matching.
//
// All three walk `Folded` cursors, so the caseless and case-sensitive
// variants share one implementation selected by the `fold` flag. Nothing is
// materialized: at most one character's fold expansion is held per side.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::ops::Range;

use crate::encoding::{to_char, Encoding};
use crate::fold::Folded;
use crate::safe::In;
use crate::unicode;

/// Order two sequences by (folded) codepoint value; a proper prefix sorts
/// first.
pub fn compare<E: Encoding>(a: &[E::Unit], b: &[E::Unit], fold: bool) -> Ordering {
    Folded::<E>::new(a, fold).cmp(Folded::<E>::new(b, fold))
}

// === Search ===

/// Outcome of [`search`]. Offsets are code units into the unfolded
/// haystack and carry no meaning when nothing was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchResult {
    found: bool,
    start: usize,
    end: usize,
}

impl SearchResult {
    pub const NOT_FOUND: SearchResult = SearchResult {
        found: false,
        start: 0,
        end: 0,
    };

    fn at(start: usize, end: usize) -> Self {
        SearchResult {
            found: true,
            start,
            end,
        }
    }

    pub fn found(&self) -> bool {
        self.found
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> Option<Range<usize>> {
        self.found.then_some(self.start..self.end)
    }
}

// KMP failure function: for each prefix, the length of its longest proper
// border.
fn borders(pattern: &[char]) -> Vec<usize> {
    let mut fail = vec![0; pattern.len()];
    let mut k = 0;
    for i in 1..pattern.len() {
        while k > 0 && pattern[i] != pattern[k] {
            k = fail[k - 1];
        }
        if pattern[i] == pattern[k] {
            k += 1;
        }
        fail[i] = k;
    }
    fail
}

/// Find the first occurrence of `needle` in `haystack`.
///
/// A match starts at a haystack character boundary and covers whole
/// haystack characters. An empty needle matches at `0..0`.
///
/// The needle is folded once and run as a KMP automaton over the lazily
/// folded haystack: linear in both lengths, with auxiliary space linear in
/// the folded needle only.
pub fn search<E: Encoding>(haystack: &[E::Unit], needle: &[E::Unit], fold: bool) -> SearchResult {
    let pattern: Vec<char> = Folded::<E>::new(needle, fold).collect();
    if pattern.is_empty() {
        return SearchResult::at(0, 0);
    }
    let fail = borders(&pattern);
    let m = pattern.len();

    // (folded index, unit offset) of the haystack characters that start
    // inside the last `m` folded codepoints.
    let mut starts: VecDeque<(usize, usize)> = VecDeque::with_capacity(m + 1);
    let mut h = Folded::<E>::new(haystack, fold);
    let mut matched = 0;
    let mut i = 0;

    loop {
        let boundary = h.at_boundary();
        let offset = h.offset();
        let Some(c) = h.next() else {
            break;
        };
        if boundary {
            starts.push_back((i, offset));
        }
        i += 1;
        while starts.front().is_some_and(|&(p, _)| p + m < i) {
            starts.pop_front();
        }

        while matched > 0 && pattern[matched] != c {
            matched = fail[matched - 1];
        }
        if pattern[matched] == c {
            matched += 1;
        }
        if matched == m {
            // A match may neither start nor end inside a character's expansion.
            if let Some(&(p, start)) = starts.front() {
                if p + m == i && h.at_boundary() {
                    return SearchResult::at(start, h.offset());
                }
            }
            matched = fail[m - 1];
        }
    }
    SearchResult::NOT_FOUND
}

// === LIKE ===

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    /// `%`
    Run,
    /// `_`
    One,
    Lit(char),
}

fn tokenize<E: Encoding>(pattern: &[E::Unit], escape: Option<char>, fold: bool) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(pattern.len());
    let mut buf = unicode::FullMapping::new();
    let mut it = In::new(pattern);
    while !it.is_end() {
        let mut c = to_char(E::decode(&mut it));
        if Some(c) == escape && !it.is_end() {
            c = to_char(E::decode(&mut it));
        } else if c == '%' {
            // Consecutive runs are equivalent to one.
            if tokens.last() != Some(&Token::Run) {
                tokens.push(Token::Run);
            }
            continue;
        } else if c == '_' {
            tokens.push(Token::One);
            continue;
        }
        if fold {
            let n = unicode::full_casefold(c, &mut buf);
            tokens.extend((0..n).map(|i| Token::Lit(buf[i])));
        } else {
            tokens.push(Token::Lit(c));
        }
    }
    tokens
}

/// SQL LIKE: `%` matches any run of codepoints, `_` exactly one (folded)
/// codepoint; `escape` makes the following pattern character literal.
///
/// Linear for patterns without `%`. After a `%` a mismatch rescans from one
/// codepoint further on, so the worst case is O(text × pattern).
pub fn like<E: Encoding>(
    haystack: &[E::Unit],
    pattern: &[E::Unit],
    escape: Option<char>,
    fold: bool,
) -> bool {
    let tokens = tokenize::<E>(pattern, escape, fold);
    let mut h = Folded::<E>::new(haystack, fold);
    let mut t = 0;
    // Token index after the last `%`, and where its run currently ends.
    let mut star = None;

    loop {
        if let Some(&token) = tokens.get(t) {
            match token {
                Token::Run => {
                    t += 1;
                    star = Some((t, h.mark()));
                    continue;
                }
                Token::One => {
                    if h.next().is_some() {
                        t += 1;
                        continue;
                    }
                }
                Token::Lit(pc) => {
                    if h.next() == Some(pc) {
                        t += 1;
                        continue;
                    }
                }
            }
        } else if h.is_done() {
            return true;
        }

        // Mismatch: let the last `%` swallow one more codepoint.
        match star {
            Some((after, mark)) => {
                h.reset(mark);
                if h.next().is_none() {
                    return false;
                }
                star = Some((after, h.mark()));
                t = after;
            }
            None => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encodings::{Utf16, Utf8};

    fn cmp(a: &str, b: &str, fold: bool) -> Ordering {
        compare::<Utf8>(a.as_bytes(), b.as_bytes(), fold)
    }

    fn find(h: &str, n: &str, fold: bool) -> Option<Range<usize>> {
        search::<Utf8>(h.as_bytes(), n.as_bytes(), fold).range()
    }

    fn like_ci(h: &str, p: &str) -> bool {
        like::<Utf8>(h.as_bytes(), p.as_bytes(), Some('\\'), true)
    }

    #[test]
    fn caseless_and_sensitive_compare() {
        assert_eq!(cmp("HELLO", "hello", true), Ordering::Equal);
        assert_eq!(cmp("HELLO", "hello", false), Ordering::Less);
        assert_eq!(cmp("Straße", "STRASSE", true), Ordering::Equal);
        assert_eq!(cmp("abc", "abd", true), Ordering::Less);
        assert_eq!(cmp("ab", "abc", true), Ordering::Less);
        assert_eq!(cmp("", "", true), Ordering::Equal);
    }

    #[test]
    fn search_reports_unfolded_offsets() {
        assert_eq!(find("Hello World", "WORLD", true), Some(6..11));
        assert_eq!(find("Hello World", "WORLD", false), None);
        assert_eq!(find("Maße und Gewicht", "SSE", true), Some(2..5));
        assert_eq!(find("abc", "", true), Some(0..0));
        assert_eq!(find("", "", false), Some(0..0));
        assert_eq!(find("", "a", true), None);
    }

    #[test]
    fn search_respects_character_boundaries() {
        // "s" alone would end inside the expansion of ß.
        assert_eq!(find("ß", "s", true), None);
        assert_eq!(find("ß", "ss", true), Some(0..2));
        assert_eq!(find("aß", "ss", true), Some(1..3));
    }

    #[test]
    fn border_table() {
        let p: Vec<char> = "abacabab".chars().collect();
        assert_eq!(borders(&p), vec![0, 0, 1, 0, 1, 2, 3, 2]);
    }

    #[test]
    fn search_with_repetitive_needle() {
        let hay = "a".repeat(100_000);
        let mut needle = "A".repeat(1000);
        assert_eq!(find(&hay, &needle, true), Some(0..1000));
        needle.push('b');
        assert_eq!(find(&hay, &needle, true), None);
        let hay = format!("{}b", hay);
        assert_eq!(find(&hay, &needle, true), Some(99_000..100_001));
        assert_eq!(find("aaab", "aab", false), Some(1..4));
    }

    #[test]
    fn search_in_utf16() {
        let h: Vec<u16> = "𝄞 Hello".encode_utf16().collect();
        let n: Vec<u16> = "hello".encode_utf16().collect();
        let r = search::<Utf16>(&h, &n, true);
        assert!(r.found());
        assert_eq!((r.start(), r.end()), (3, 8));
    }

    #[test]
    fn like_wildcards() {
        assert!(like_ci("Hello World", "hello%"));
        assert!(like_ci("Hello World", "%WORLD"));
        assert!(like_ci("Hello World", "h_llo w%d"));
        assert!(like_ci("Hello", "%%%"));
        assert!(like_ci("", "%"));
        assert!(!like_ci("", "_"));
        assert!(!like_ci("Hello", "hell"));
        assert!(like_ci("abcabcabd", "%abd"));
        assert!(like_ci("STRASSE", "stra%e"));
        assert!(like_ci("straße", "STRASSE"));
    }

    #[test]
    fn like_escape() {
        assert!(like_ci("100%", "100\\%"));
        assert!(!like_ci("1000", "100\\%"));
        assert!(like_ci("a_b", "a\\_b"));
        assert!(!like_ci("axb", "a\\_b"));
        assert!(like_ci("a\\", "a\\"));
    }

    #[test]
    fn like_case_sensitive() {
        assert!(!like::<Utf8>(b"Hello", b"hello", None, false));
        assert!(like::<Utf8>(b"Hello", b"H%o", None, false));
    }
}
