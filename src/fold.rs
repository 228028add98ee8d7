// fold.rs - Lazy case-folding cursor.
//
// Yields the folded codepoints of a unit sequence one at a time while
// tracking where each one came from in the unfolded input. At most one
// source character's expansion is buffered.

use crate::encoding::{to_char, Encoding};
use crate::safe::In;
use crate::unicode::{self, FullMapping};

/// Saved position of a [`Folded`] cursor.
pub struct Mark<'a, E: Encoding> {
    start: In<'a, E::Unit>,
    pos: usize,
}

impl<E: Encoding> Clone for Mark<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Encoding> Copy for Mark<'_, E> {}

pub struct Folded<'a, E: Encoding> {
    src: In<'a, E::Unit>,
    // Start of the source character whose expansion is in `buf`.
    start: In<'a, E::Unit>,
    buf: FullMapping,
    len: usize,
    pos: usize,
    fold: bool,
}

impl<'a, E: Encoding> Folded<'a, E> {
    /// Cursor over `src`; with `fold` false the codepoints pass unchanged.
    pub fn new(src: &'a [E::Unit], fold: bool) -> Self {
        Self::from_cursor(In::new(src), fold)
    }

    /// Cursor over `src[start..]`. `start` must be a character boundary.
    pub fn at(src: &'a [E::Unit], start: usize, fold: bool) -> Self {
        Self::from_cursor(In::with_end(src, start, src.len()), fold)
    }

    fn from_cursor(src: In<'a, E::Unit>, fold: bool) -> Self {
        Folded {
            src,
            start: src,
            buf: FullMapping::new(),
            len: 0,
            pos: 0,
            fold,
        }
    }

    fn load(&mut self) -> bool {
        if self.src.is_end() {
            return false;
        }
        self.start = self.src;
        let c = to_char(E::decode(&mut self.src));
        self.len = if self.fold {
            unicode::full_casefold(c, &mut self.buf)
        } else {
            self.buf[0] = c;
            1
        };
        self.pos = 0;
        true
    }

    /// True when the buffered expansion is used up, i.e. the next codepoint
    /// (if any) begins a new source character.
    pub fn at_boundary(&self) -> bool {
        self.pos >= self.len
    }

    /// True when nothing is left to yield.
    pub fn is_done(&self) -> bool {
        self.at_boundary() && self.src.is_end()
    }

    /// Unit offset just past the last source character consumed.
    pub fn offset(&self) -> usize {
        self.src.offset()
    }

    pub fn mark(&self) -> Mark<'a, E> {
        if self.at_boundary() {
            Mark {
                start: self.src,
                pos: 0,
            }
        } else {
            Mark {
                start: self.start,
                pos: self.pos,
            }
        }
    }

    pub fn reset(&mut self, mark: Mark<'a, E>) {
        self.src = mark.start;
        self.len = 0;
        self.pos = 0;
        if mark.pos > 0 && self.load() {
            self.pos = mark.pos;
        }
    }
}

impl<E: Encoding> Iterator for Folded<'_, E> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        while self.at_boundary() {
            if !self.load() {
                return None;
            }
        }
        let c = self.buf[self.pos];
        self.pos += 1;
        Some(c)
    }
}
