// api.rs - Idiomatic Rust API for ferrocase.
//
// Wraps the width-generic engines (casemap::map, compare::search, ...) with
// `&str` entry points, a `CaseMapper` builder and `Match` results.

use std::ops::Range;

use crate::casemap::{self, CaseMode, MapOptions};
use crate::encodings::{Utf16, Utf32, Utf8};
use crate::error::CaseError;
use crate::locale::Locale;
use crate::words::WordBreaks;

/// Configured case mapping.
///
/// # Examples
///
/// ```
/// use ferrocase::api::CaseMapper;
/// use ferrocase::locale::Locale;
///
/// let upper = CaseMapper::uppercase();
/// assert_eq!(upper.map_str("straße").unwrap(), "STRASSE");
/// assert_eq!(upper.simple(true).map_str("straße").unwrap(), "STRAßE");
///
/// let lower = CaseMapper::lowercase().locale(Locale::TURKISH);
/// assert_eq!(lower.map_str("İstanbul").unwrap(), "istanbul");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseMapper {
    options: MapOptions,
}

impl CaseMapper {
    pub fn new(mode: CaseMode) -> Self {
        CaseMapper {
            options: MapOptions::new(mode),
        }
    }

    pub fn lowercase() -> Self {
        Self::new(CaseMode::Lowercase)
    }

    pub fn uppercase() -> Self {
        Self::new(CaseMode::Uppercase)
    }

    pub fn titlecase() -> Self {
        Self::new(CaseMode::Titlecase)
    }

    pub fn casefold() -> Self {
        Self::new(CaseMode::Casefold)
    }

    /// Use simple 1:1 mappings (no expansion, no tailoring).
    pub fn simple(mut self, yes: bool) -> Self {
        self.options.full = !yes;
        self
    }

    /// Apply the conditional rules of `locale`.
    pub fn locale(mut self, locale: Locale) -> Self {
        self.options.locale = locale;
        self
    }

    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    /// Map a UTF-8 string.
    pub fn map_str(&self, text: &str) -> Result<String, CaseError> {
        let bytes = casemap::map::<Utf8>(text.as_bytes(), &self.options)?;
        Ok(String::from_utf8(bytes)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
    }

    /// Map UTF-8 bytes; ill-formed sequences become U+FFFD.
    pub fn map_bytes(&self, bytes: &[u8]) -> Result<Vec<u8>, CaseError> {
        casemap::map::<Utf8>(bytes, &self.options)
    }

    pub fn map_utf16(&self, units: &[u16]) -> Result<Vec<u16>, CaseError> {
        casemap::map::<Utf16>(units, &self.options)
    }

    pub fn map_utf32(&self, units: &[u32]) -> Result<Vec<u32>, CaseError> {
        casemap::map::<Utf32>(units, &self.options)
    }

    /// Map a UTF-8 string with caller-supplied word starts (codepoint
    /// indices) for titlecasing.
    pub fn map_str_with_breaks<W: WordBreaks + ?Sized>(
        &self,
        text: &str,
        breaks: &W,
    ) -> Result<String, CaseError> {
        let bytes = casemap::map_with_breaks::<Utf8, W>(text.as_bytes(), &self.options, breaks)?;
        Ok(String::from_utf8(bytes)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
    }
}

impl Default for CaseMapper {
    fn default() -> Self {
        Self::lowercase()
    }
}

/// Full lowercase with root rules.
pub fn to_lowercase(text: &str) -> Result<String, CaseError> {
    CaseMapper::lowercase().map_str(text)
}

pub fn to_uppercase(text: &str) -> Result<String, CaseError> {
    CaseMapper::uppercase().map_str(text)
}

/// Titlecase each UAX #29 word.
///
/// ```
/// assert_eq!(ferrocase::api::to_titlecase("hello world").unwrap(), "Hello World");
/// ```
pub fn to_titlecase(text: &str) -> Result<String, CaseError> {
    CaseMapper::titlecase().map_str(text)
}

pub fn to_casefold(text: &str) -> Result<String, CaseError> {
    CaseMapper::casefold().map_str(text)
}

/// A search hit referencing the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'t> {
    text: &'t str,
    start: usize,
    end: usize,
}

impl<'t> Match<'t> {
    /// Byte offset of the start of the match.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset just past the match.
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn as_str(&self) -> &'t str {
        &self.text[self.start..self.end]
    }
}

macro_rules! variant_module {
    ($name:ident, $fold:expr, $doc:expr) => {
        #[doc = $doc]
        pub mod $name {
            use std::cmp::Ordering;

            use super::Match;
            use crate::collate;
            use crate::compare::{self, SearchResult};
            use crate::encodings::Utf8;
            use crate::error::CaseError;

            pub fn compare(a: &str, b: &str) -> Ordering {
                compare::compare::<Utf8>(a.as_bytes(), b.as_bytes(), $fold)
            }

            pub fn eq(a: &str, b: &str) -> bool {
                compare(a, b) == Ordering::Equal
            }

            pub fn collate(a: &str, b: &str) -> Ordering {
                collate::collate::<Utf8>(a.as_bytes(), b.as_bytes(), !$fold)
            }

            pub fn sortkey(text: &str) -> Result<Vec<u8>, CaseError> {
                collate::sortkey::<Utf8>(text.as_bytes(), !$fold)
            }

            pub fn search(haystack: &str, needle: &str) -> SearchResult {
                compare::search::<Utf8>(haystack.as_bytes(), needle.as_bytes(), $fold)
            }

            pub fn find<'t>(haystack: &'t str, needle: &str) -> Option<Match<'t>> {
                search(haystack, needle).range().map(|r| Match {
                    text: haystack,
                    start: r.start,
                    end: r.end,
                })
            }

            pub fn like(text: &str, pattern: &str, escape: Option<char>) -> bool {
                compare::like::<Utf8>(text.as_bytes(), pattern.as_bytes(), escape, $fold)
            }
        }
    };
}

variant_module!(
    caseless,
    true,
    "Case-insensitive comparison, collation, search and LIKE over `&str`."
);
variant_module!(
    casesens,
    false,
    "Case-sensitive counterparts of [`caseless`]."
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn mapper_builder() {
        let m = CaseMapper::uppercase().simple(true).locale(Locale::TURKISH);
        assert!(!m.options().full);
        assert_eq!(m.options().locale, Locale::TURKISH);
        assert_eq!(m.options().mode, CaseMode::Uppercase);
        assert_eq!(CaseMapper::default().options().mode, CaseMode::Lowercase);
    }

    #[test]
    fn widths() {
        let m = CaseMapper::uppercase();
        let u16s: Vec<u16> = "ß𝄞".encode_utf16().collect();
        assert_eq!(
            m.map_utf16(&u16s).unwrap(),
            "SS𝄞".encode_utf16().collect::<Vec<_>>()
        );
        assert_eq!(m.map_utf32(&['a' as u32]).unwrap(), vec!['A' as u32]);
        assert_eq!(m.map_bytes(&[0x61, 0x80]).unwrap(), "A\u{fffd}".as_bytes());
    }

    #[test]
    fn find_returns_original_slice() {
        let m = caseless::find("Grüße aus Köln", "KÖLN").unwrap();
        assert_eq!(m.as_str(), "Köln");
        assert_eq!(m.range(), 12..17);
        assert!(casesens::find("Grüße aus Köln", "KÖLN").is_none());
    }

    #[test]
    fn variants_share_semantics() {
        assert!(caseless::eq("HELLO", "hello"));
        assert!(!casesens::eq("HELLO", "hello"));
        assert_eq!(caseless::collate("a", "A"), Ordering::Equal);
        assert_eq!(casesens::collate("a", "A"), Ordering::Less);
        assert!(caseless::like("Hello", "h%", None));
        assert!(!casesens::like("Hello", "h%", None));
    }
}
