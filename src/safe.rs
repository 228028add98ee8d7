// safe.rs - Bounds-checked primitives for the low-level algorithms.
//
// Every unit-level walk in the engines goes through `In`, `Out` and
// `SafeArray`. With the `safe-layer` feature an access outside the declared
// bounds aborts the process at the faulting access; without it the guards
// compile out and plain slice indexing is all that is left.
//
// A guard firing is never an input error. Ill-formed input is handled by the
// decoders before it gets here.

use std::fmt;
use std::ops::{Index, IndexMut, Sub};

/// Terminate the process immediately.
///
/// Reaching this means the algorithm itself is broken: the next access would
/// read or write memory the call does not own. There is no error value and
/// no unwinding.
#[cold]
#[inline(never)]
pub fn kms() -> ! {
    std::process::abort()
}

#[cfg(feature = "safe-layer")]
macro_rules! guard {
    ($cond:expr) => {
        if !($cond) {
            $crate::safe::kms();
        }
    };
}

#[cfg(not(feature = "safe-layer"))]
macro_rules! guard {
    ($cond:expr) => {
        if false {
            let _ = $cond;
        }
    };
}

/// Whether the guards are compiled in.
pub const CHECKED: bool = cfg!(feature = "safe-layer");

mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for char {}
}

/// Element types a [`SafeArray`] may hold: single-byte, double-byte and
/// 32-bit scalars. Sealed so the low-level code cannot drift to another width.
pub trait Element: Copy + Default + fmt::Debug + sealed::Sealed {}

impl Element for u8 {}
impl Element for u16 {}
impl Element for u32 {}
impl Element for char {}

/// Code unit of a transformation format.
pub trait Unit: Element + Eq + Ord {}

impl Unit for u8 {}
impl Unit for u16 {}
impl Unit for u32 {}

// === SafeArray ===

/// Fixed-capacity array with a checked index operator.
///
/// Not `Clone`, not resizable, and `N` must be non-zero (enforced at compile
/// time when the array is constructed).
pub struct SafeArray<T: Element, const N: usize> {
    items: [T; N],
}

impl<T: Element, const N: usize> SafeArray<T, N> {
    const NON_EMPTY: () = assert!(N != 0, "SafeArray must never be zero-sized");

    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;
        SafeArray {
            items: [T::default(); N],
        }
    }

    /// Declared capacity. Meant for tests, the algorithms know their bounds.
    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<T: Element, const N: usize> Default for SafeArray<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element, const N: usize> Index<usize> for SafeArray<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, pos: usize) -> &T {
        guard!(pos < N);
        &self.items[pos]
    }
}

impl<T: Element, const N: usize> IndexMut<usize> for SafeArray<T, N> {
    #[inline]
    fn index_mut(&mut self, pos: usize) -> &mut T {
        guard!(pos < N);
        &mut self.items[pos]
    }
}

impl<T: Element, const N: usize> fmt::Debug for SafeArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

// === Input cursor ===

/// End sentinel of an [`In`] cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct End {
    it: isize,
}

/// Read cursor over a borrowed unit sequence, bounded to `[begin, end)`.
///
/// Moving the cursor is unchecked; dereferencing outside the bounds aborts.
#[derive(Clone, Copy)]
pub struct In<'a, T: Unit> {
    data: &'a [T],
    it: isize,
    begin: isize,
    end: isize,
}

impl<'a, T: Unit> In<'a, T> {
    /// Cursor over the whole sequence.
    pub fn new(data: &'a [T]) -> Self {
        Self::with_count(data, 0, data.len())
    }

    /// Cursor starting at `start`, bounded to `count` units.
    pub fn with_count(data: &'a [T], start: usize, count: usize) -> Self {
        guard!(start <= data.len() && count <= data.len() - start);
        In {
            data,
            it: start as isize,
            begin: start as isize,
            end: (start + count) as isize,
        }
    }

    /// Cursor starting at `start`, bounded to `end`.
    pub fn with_end(data: &'a [T], start: usize, end: usize) -> Self {
        guard!(start <= end);
        Self::with_count(data, start, end.wrapping_sub(start))
    }

    /// Dereference.
    #[inline]
    pub fn get(&self) -> T {
        guard!(self.it >= self.begin && self.it < self.end);
        self.data[self.it as usize]
    }

    /// Dereference, then advance (`*it++`).
    #[inline]
    pub fn next_unit(&mut self) -> T {
        let v = self.get();
        self.it += 1;
        v
    }

    /// Pre-increment.
    #[inline]
    pub fn inc(&mut self) -> &mut Self {
        self.it += 1;
        self
    }

    /// Post-increment: advance and return the previous position.
    #[inline]
    pub fn post_inc(&mut self) -> Self {
        let prev = *self;
        self.it += 1;
        prev
    }

    /// Pre-decrement.
    #[inline]
    pub fn dec(&mut self) -> &mut Self {
        self.it -= 1;
        self
    }

    /// Post-decrement.
    #[inline]
    pub fn post_dec(&mut self) -> Self {
        let prev = *self;
        self.it -= 1;
        prev
    }

    #[inline]
    pub fn end(&self) -> End {
        End { it: self.end }
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.it == self.end
    }

    /// Position in units from the start of the underlying sequence.
    #[inline]
    pub fn offset(&self) -> usize {
        self.it as usize
    }
}

impl<T: Unit> PartialEq for In<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.it == other.it
    }
}

impl<T: Unit> PartialEq<End> for In<'_, T> {
    fn eq(&self, other: &End) -> bool {
        self.it == other.it
    }
}

impl<'a, T: Unit> Sub for In<'a, T> {
    type Output = isize;

    fn sub(self, rhs: In<'a, T>) -> isize {
        self.it - rhs.it
    }
}

impl<T: Unit> fmt::Debug for In<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("In")
            .field("it", &self.it)
            .field("begin", &self.begin)
            .field("end", &self.end)
            .finish()
    }
}

// === Output cursor ===

/// Write cursor over a caller-owned buffer, bounded to `capacity` units.
pub struct Out<'a, T: Unit> {
    data: &'a mut [T],
    it: usize,
    end: usize,
}

impl<'a, T: Unit> Out<'a, T> {
    pub fn new(data: &'a mut [T], capacity: usize) -> Self {
        guard!(capacity <= data.len());
        Out {
            data,
            it: 0,
            end: capacity,
        }
    }

    /// Write, then advance (`*it++ = v`).
    #[inline]
    pub fn put(&mut self, v: T) {
        guard!(self.it < self.end);
        self.data[self.it] = v;
        self.it += 1;
    }

    /// Units written so far (distance from the start).
    #[inline]
    pub fn written(&self) -> usize {
        self.it
    }
}

impl<T: Unit> fmt::Debug for Out<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Out")
            .field("it", &self.it)
            .field("end", &self.end)
            .finish()
    }
}
