use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// A window onto reference-counted, element-wise mutable storage.
///
/// Owners and views each hold a `SharedBuffer`; the storage is freed when the last
/// handle goes away. Every element sits in a [`Cell`], so writes through one handle
/// are visible through every other handle whose window covers the same slot.
///
/// The type is neither `Send` nor `Sync`: a block of storage stays on the thread
/// that created it.
pub struct SharedBuffer<T> {
    cells: Rc<[Cell<T>]>,
    offset: usize,
    len: usize,
}

impl<T: Copy> SharedBuffer<T> {
    /// Allocates `len` elements, all set to `value`.
    pub fn filled(len: usize, value: T) -> Self {
        let cells: Rc<[Cell<T>]> = (0..len).map(|_| Cell::new(value)).collect();
        Self {
            cells,
            offset: 0,
            len,
        }
    }

    /// Takes ownership of `data` as fresh, unshared storage.
    pub fn from_vec(data: Vec<T>) -> Self {
        let len = data.len();
        let cells: Rc<[Cell<T>]> = data.into_iter().map(Cell::new).collect();
        Self {
            cells,
            offset: 0,
            len,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The slots covered by this window.
    #[inline]
    pub fn as_cells(&self) -> &[Cell<T>] {
        &self.cells[self.offset..self.offset + self.len]
    }

    #[inline]
    pub fn get(&self, idx: usize) -> T {
        self.as_cells()[idx].get()
    }

    #[inline]
    pub fn set(&self, idx: usize, value: T) {
        self.as_cells()[idx].set(value)
    }

    /// Returns a handle onto `[start, end)` of this window, sharing storage.
    ///
    /// # Panics
    /// If `start > end` or `end > self.len()`.
    pub fn slice(&self, start: usize, end: usize) -> Self {
        assert!(
            start <= end && end <= self.len,
            "buffer window [{}, {}) out of range for length {}",
            start,
            end,
            self.len
        );
        Self {
            cells: Rc::clone(&self.cells),
            offset: self.offset + start,
            len: end - start,
        }
    }

    /// An empty handle positioned inside this window's storage.
    pub(crate) fn empty_at(&self, start: usize) -> Self {
        Self {
            cells: Rc::clone(&self.cells),
            offset: self.offset + start.min(self.len),
            len: 0,
        }
    }

    /// Copies this window into newly allocated storage.
    pub fn deep_copy(&self) -> Self {
        Self::from_vec(self.to_vec())
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.as_cells().iter().map(Cell::get).collect()
    }

    /// True when both handles point into the same allocation.
    pub fn shares_storage(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cells, &other.cells)
    }

    /// Number of live handles onto the underlying storage.
    pub fn holders(&self) -> usize {
        Rc::strong_count(&self.cells)
    }
}

/// Copies `min(dst.len(), src.len())` elements from `src` into `dst`.
///
/// Overlapping ranges of the same storage are handled like `memmove`: the result is
/// as if `src` had been read in full before `dst` was written.
pub fn copy_cells<T: Copy>(dst: &[Cell<T>], src: &[Cell<T>]) {
    let n = dst.len().min(src.len());
    let (dst, src) = (&dst[..n], &src[..n]);
    if dst.as_ptr() > src.as_ptr() {
        for (d, s) in dst.iter().zip(src).rev() {
            d.set(s.get());
        }
    } else {
        for (d, s) in dst.iter().zip(src) {
            d.set(s.get());
        }
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for SharedBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedBuffer")
            .field("offset", &self.offset)
            .field("len", &self.len)
            .field("holders", &self.holders())
            .field("data", &self.to_vec())
            .finish()
    }
}
