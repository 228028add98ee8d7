// casemap.rs - Case mapping engine.
//
// Single left-to-right pass: decode a codepoint, pick the mapping for the
// mode (tailored rule, full mapping or simple mapping), re-encode into an
// output buffer pre-sized to CASE_MAP_GROWTH units per input unit. Context
// conditions see a look-behind summary kept in `Behind` and a bounded
// look-ahead over a copy of the input cursor.

use std::mem::size_of;

use crate::encoding::{to_char, CodePoint, Encoding, CASE_MAP_GROWTH};
use crate::error::CaseError;
use crate::locale::Locale;
use crate::safe::{In, Out};
use crate::tailoring::{self, Condition, Context};
use crate::unicode::{self, CaseProps, FullMapping};
use crate::words::{NoBreaks, WordBreaks, WordStarts};

/// Codepoints examined after the current one when evaluating a context
/// condition. Longer runs of ignorables are treated as end of input.
pub const LOOKAHEAD: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseMode {
    Lowercase,
    Uppercase,
    Titlecase,
    Casefold,
}

impl CaseMode {
    pub const ALL: [CaseMode; 4] = [
        CaseMode::Lowercase,
        CaseMode::Uppercase,
        CaseMode::Titlecase,
        CaseMode::Casefold,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapOptions {
    pub mode: CaseMode,
    /// Full (1:n) mappings and tailorings; simple 1:1 mappings when false.
    pub full: bool,
    pub locale: Locale,
}

impl MapOptions {
    pub fn new(mode: CaseMode) -> Self {
        MapOptions {
            mode,
            full: true,
            locale: Locale::ROOT,
        }
    }
}

// === Context ===

#[derive(Debug, Default, Clone, Copy)]
struct Behind {
    cased_before: bool,
    after_i: bool,
    after_soft_dotted: bool,
}

impl Behind {
    fn update(&mut self, c: char) {
        let props = unicode::props(c);
        if !props.contains(CaseProps::CASE_IGNORABLE) {
            self.cased_before = props.contains(CaseProps::CASED);
        }
        let ccc = unicode::combining_class(c);
        if ccc == 0 || ccc == 230 {
            self.after_i = c == 'I';
            self.after_soft_dotted = props.contains(CaseProps::SOFT_DOTTED);
        }
    }
}

struct Ahead<'s, 'a, E: Encoding> {
    next: In<'a, E::Unit>,
    behind: &'s Behind,
}

impl<E: Encoding> Ahead<'_, '_, E> {
    // Feed following codepoints to `f` until it decides.
    fn scan<F: FnMut(char) -> Option<bool>>(&self, mut f: F) -> bool {
        let mut it = self.next;
        for _ in 0..LOOKAHEAD {
            if it.is_end() {
                return false;
            }
            if let Some(decided) = f(to_char(E::decode(&mut it))) {
                return decided;
            }
        }
        false
    }

    fn cased_follows(&self) -> bool {
        self.scan(|c| {
            if unicode::is_case_ignorable(c) {
                None
            } else {
                Some(unicode::is_cased(c))
            }
        })
    }

    fn before_dot(&self) -> bool {
        self.scan(|c| {
            if c == '\u{0307}' {
                return Some(true);
            }
            match unicode::combining_class(c) {
                0 | 230 => Some(false),
                _ => None,
            }
        })
    }

    fn more_above(&self) -> bool {
        self.scan(|c| match unicode::combining_class(c) {
            230 => Some(true),
            0 => Some(false),
            _ => None,
        })
    }
}

impl<E: Encoding> Context for Ahead<'_, '_, E> {
    fn holds(&self, condition: Condition) -> bool {
        match condition {
            Condition::Always => true,
            Condition::FinalSigma => self.behind.cased_before && !self.cased_follows(),
            Condition::AfterI => self.behind.after_i,
            Condition::AfterSoftDotted => self.behind.after_soft_dotted,
            Condition::NotBeforeDot => !self.before_dot(),
            Condition::MoreAbove => self.more_above(),
        }
    }
}

// === Engine ===

fn map_one<E: Encoding>(
    c: char,
    mode: CaseMode,
    opts: &MapOptions,
    behind: &Behind,
    next: In<'_, E::Unit>,
    buf: &mut FullMapping,
) -> usize {
    if !opts.full {
        buf[0] = unicode::map_simple(c, mode);
        return 1;
    }
    if tailoring::is_tailored(c) {
        let ctx = Ahead::<E> { next, behind };
        if let Some(replacement) = tailoring::lookup(c, mode, opts.locale, &ctx) {
            for (i, &r) in replacement.iter().enumerate() {
                buf[i] = r;
            }
            return replacement.len();
        }
    }
    unicode::map_full(c, mode, buf)
}

/// Map `src` into `dst`, returning the number of units written.
///
/// `dst` must have room for `src.len() * CASE_MAP_GROWTH` units. In
/// titlecase mode `breaks` marks the codepoint indices that start a word;
/// other modes ignore it.
pub fn case_map<E: Encoding, W: WordBreaks + ?Sized>(
    src: &[E::Unit],
    dst: &mut Out<'_, E::Unit>,
    opts: &MapOptions,
    breaks: &W,
) -> usize {
    let mut it = In::new(src);
    let mut behind = Behind::default();
    let mut buf = FullMapping::new();
    let mut index = 0usize;
    let mut want_title = false;

    while it != it.end() {
        let code = E::decode(&mut it);
        let c = to_char(code);

        let mode = match opts.mode {
            CaseMode::Titlecase => {
                if breaks.is_break(index) {
                    want_title = true;
                }
                if !want_title {
                    Some(CaseMode::Lowercase)
                } else if unicode::is_cased(c) {
                    want_title = false;
                    Some(CaseMode::Titlecase)
                } else {
                    None
                }
            }
            mode => Some(mode),
        };

        match mode {
            Some(mode) => {
                let n = map_one::<E>(c, mode, opts, &behind, it, &mut buf);
                for i in 0..n {
                    E::encode(buf[i] as CodePoint, dst);
                }
            }
            None => E::encode(c as CodePoint, dst),
        }

        behind.update(c);
        index += 1;
    }
    dst.written()
}

/// Output buffer size for `len` input units, or `CapacityOverflow` if it
/// cannot be allocated in one block.
pub fn output_capacity<E: Encoding>(len: usize) -> Result<usize, CaseError> {
    let ceiling = isize::MAX as usize / size_of::<E::Unit>();
    match len.checked_mul(CASE_MAP_GROWTH) {
        Some(units) if units <= ceiling => Ok(units),
        _ => Err(CaseError::overflow(
            len.saturating_mul(CASE_MAP_GROWTH),
            E::NAME,
        )),
    }
}

/// Map a unit sequence with explicit word boundaries.
pub fn map_with_breaks<E: Encoding, W: WordBreaks + ?Sized>(
    src: &[E::Unit],
    opts: &MapOptions,
    breaks: &W,
) -> Result<Vec<E::Unit>, CaseError> {
    if src.is_empty() {
        return Ok(Vec::new());
    }
    let capacity = output_capacity::<E>(src.len())?;
    let mut buf: Vec<E::Unit> = Vec::new();
    buf.try_reserve_exact(capacity)
        .map_err(|_| CaseError::overflow(capacity, E::NAME))?;
    buf.resize(capacity, E::Unit::default());

    let written = {
        let mut dst = Out::new(&mut buf, capacity);
        case_map::<E, W>(src, &mut dst, opts, breaks)
    };
    buf.truncate(written);
    buf.shrink_to_fit();
    Ok(buf)
}

/// Map a unit sequence. Titlecase uses UAX #29 word boundaries.
pub fn map<E: Encoding>(src: &[E::Unit], opts: &MapOptions) -> Result<Vec<E::Unit>, CaseError> {
    if opts.mode == CaseMode::Titlecase {
        let words = WordStarts::from_units::<E>(src);
        map_with_breaks::<E, _>(src, opts, &words)
    } else {
        map_with_breaks::<E, _>(src, opts, &NoBreaks)
    }
}

/// Largest output, in units, produced for any single codepoint under any
/// mode and locale, divided by its encoded input length. Exposed so callers
/// and tests can confirm CASE_MAP_GROWTH against the linked tables.
pub fn growth_of<E: Encoding>(c: char, opts: &MapOptions) -> usize {
    let mut src = [E::Unit::default(); 4];
    let len = {
        let mut out = Out::new(&mut src, E::MAX_ENC_LEN);
        E::encode(c as CodePoint, &mut out);
        out.written()
    };
    let mut dst = [E::Unit::default(); 4 * CASE_MAP_GROWTH];
    let mut out = Out::new(&mut dst, len * CASE_MAP_GROWTH);
    let written = case_map::<E, _>(&src[..len], &mut out, opts, &NoBreaks);
    written.div_ceil(len)
}
