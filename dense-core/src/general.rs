use crate::assert::debug_check;
use crate::buffer::{copy_cells, SharedBuffer};
use crate::error::DenseCoreError;
use crate::traits::{Matrix, Scalar};
use std::cell::Cell;
use std::fmt;

/// A dense, row-major matrix addressed through a stride.
///
/// Element `(i, j)` lives at `data[i * stride + j]`. A `General` either owns fresh
/// storage (see [`General::zeros`]) or is a view onto another matrix's storage (see
/// [`General::view`]); both kinds are the same type and behave identically.
///
/// Geometry is not validated on construction or mutation. Call [`General::check`]
/// wherever the geometry comes from outside.
#[derive(Debug)]
pub struct General<T: Scalar = f64> {
    data: SharedBuffer<T>,
    rows: isize,
    cols: isize,
    stride: isize,
}

impl<T: Scalar> General<T> {
    /// Creates a `rows x cols` matrix of zeros with `stride == cols`.
    ///
    /// # Panics
    /// If `rows` or `cols` exceeds `isize::MAX`, or `rows * cols` overflows `usize`.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        log::trace!("Allocating {}x{} general matrix", rows, cols);
        let len = rows
            .checked_mul(cols)
            .unwrap_or_else(|| panic!("general: {}x{} element count overflows usize", rows, cols));
        let rows = isize::try_from(rows).expect("general: rows exceed isize::MAX");
        let cols = isize::try_from(cols).expect("general: cols exceed isize::MAX");
        Self {
            data: SharedBuffer::filled(len, T::zero()),
            rows,
            cols,
            stride: cols,
        }
    }

    /// Adopts `data` with the given geometry, without validating it.
    pub fn from_raw_parts(data: Vec<T>, rows: isize, cols: isize, stride: isize) -> Self {
        log::trace!(
            "Adopting {} elements as {}x{} general matrix (stride {})",
            data.len(),
            rows,
            cols,
            stride
        );
        Self {
            data: SharedBuffer::from_vec(data),
            rows,
            cols,
            stride,
        }
    }

    /// Adopts `data` with the given geometry, rejecting it if [`check`](Self::check) fails.
    pub fn new(
        data: Vec<T>,
        rows: isize,
        cols: isize,
        stride: isize,
    ) -> Result<Self, DenseCoreError> {
        let g = Self::from_raw_parts(data, rows, cols, stride);
        g.check()?;
        Ok(g)
    }

    #[inline]
    pub fn stride(&self) -> isize {
        self.stride
    }

    /// The buffer window this matrix addresses.
    #[inline]
    pub fn data(&self) -> &SharedBuffer<T> {
        &self.data
    }

    /// True when `self` and `other` share backing storage.
    pub fn aliases(&self, other: &Self) -> bool {
        self.data.shares_storage(&other.data)
    }

    #[inline]
    fn index(&self, i: isize, j: isize) -> usize {
        (i * self.stride + j) as usize
    }

    #[inline]
    fn debug_check_index(&self, i: isize, j: isize) {
        debug_check!(i >= 0 && i < self.rows, "row out of bounds");
        debug_check!(j >= 0 && j < self.cols, "col out of bounds");
    }

    /// Returns the value at row `i`, column `j`.
    ///
    /// Indices are only checked when the diagnostic layer is active. Outside it, an
    /// index inside the buffer but outside the logical shape silently reads a
    /// neighbouring slot.
    #[inline]
    pub fn at(&self, i: isize, j: isize) -> T {
        self.debug_check_index(i, j);
        self.data.get(self.index(i, j))
    }

    /// Writes `value` at row `i`, column `j`. Checked like [`at`](Self::at).
    #[inline]
    pub fn set(&mut self, i: isize, j: isize, value: T) {
        self.debug_check_index(i, j);
        self.data.set(self.index(i, j), value)
    }

    /// Bounds-checked read, in every build mode.
    pub fn get(&self, i: isize, j: isize) -> Option<T> {
        if i < 0 || i >= self.rows || j < 0 || j >= self.cols {
            return None;
        }
        self.data.as_cells().get(self.index(i, j)).map(Cell::get)
    }

    /// Adds `h` element-wise into `self`.
    ///
    /// `h` must have the same rows and columns as `self`; strides may differ. The
    /// shape is only asserted when the diagnostic layer is active.
    pub fn add(&mut self, h: &General<T>) {
        debug_check!(self.rows == h.rows, "row size mismatch");
        debug_check!(self.cols == h.cols, "col size mismatch");
        let dst = self.data.as_cells();
        for i in 0..self.rows {
            let start = (i * self.stride) as usize;
            let row = &dst[start..start + self.cols as usize];
            for (j, cell) in (0..).zip(row) {
                cell.set(cell.get() + h.at(i, j));
            }
        }
    }

    /// Overwrites `self` with the contents of `h`, one physical row span at a time.
    ///
    /// Row `k` copies as many slots as both row spans hold, where a row span runs
    /// `stride` slots from the row start, cut at the end of the buffer. Logical cells
    /// are always covered; stride padding is copied where both sides have it.
    /// Shapes must match, as for [`add`](Self::add).
    pub fn copy(&mut self, h: &General<T>) {
        debug_check!(self.rows == h.rows, "row mismatch");
        debug_check!(self.cols == h.cols, "col mismatch");
        let dst = self.data.as_cells();
        let src = h.data.as_cells();
        for k in 0..self.rows {
            copy_cells(row_span(dst, k, self.stride), row_span(src, k, h.stride));
        }
    }

    /// Returns an `r x c` view whose top-left element is `(i, j)` of `self`.
    ///
    /// The view keeps the parent's stride and shares its storage. Its window runs
    /// from the first to the last element of the block, so interior rows carry the
    /// parent's neighbouring columns as padding.
    pub fn view(&self, i: isize, j: isize, r: isize, c: isize) -> General<T> {
        debug_check!(i >= 0 && i + r <= self.rows, "row out of bounds");
        debug_check!(j >= 0 && j + c <= self.cols, "col out of bounds");
        let start = i * self.stride + j;
        let end = (i + r - 1) * self.stride + j + c;
        log::trace!(
            "Viewing {}x{} block at ({}, {}) of {}x{} general matrix",
            r,
            c,
            i,
            j,
            self.rows,
            self.cols
        );
        let data = if end <= start {
            self.data.empty_at(start.max(0) as usize)
        } else {
            self.data.slice(start as usize, end as usize)
        };
        General {
            data,
            rows: r,
            cols: c,
            stride: self.stride,
        }
    }

    /// Reports the first violated geometry invariant, if any.
    pub fn check(&self) -> Result<(), DenseCoreError> {
        let result = self.validate();
        if let Err(err) = &result {
            log::debug!(
                "Rejecting {}x{} general matrix (stride {}, {} elements): {}",
                self.rows,
                self.cols,
                self.stride,
                self.data.len(),
                err
            );
        }
        result
    }

    fn validate(&self) -> Result<(), DenseCoreError> {
        if self.rows < 0 {
            return Err(DenseCoreError::NegativeRows(self.rows));
        }
        if self.cols < 0 {
            return Err(DenseCoreError::NegativeCols(self.cols));
        }
        // Zero-column matrices from `zeros` carry stride 0.
        if self.stride < 1 && !(self.cols == 0 && self.stride == 0) {
            return Err(DenseCoreError::StrideTooSmall(self.stride));
        }
        if self.stride < self.cols {
            return Err(DenseCoreError::IllegalStride {
                stride: self.stride,
                cols: self.cols,
            });
        }
        let len = self.data.len();
        let required = (self.rows - 1)
            .checked_mul(self.stride)
            .and_then(|n| n.checked_add(self.cols));
        match required {
            Some(n) if n <= len as isize => Ok(()),
            _ => Err(DenseCoreError::InsufficientLength { required, len }),
        }
    }

    /// True iff geometry, buffer length and every buffer element match exactly.
    ///
    /// Stride padding takes part in the comparison, so matrices with the same
    /// logical contents but different strides or buffer lengths are not equal.
    pub fn equal(&self, other: &General<T>) -> bool {
        self.same_layout(other)
            && self
                .data
                .as_cells()
                .iter()
                .zip(other.data.as_cells())
                .all(|(a, b)| a.get() == b.get())
    }

    /// Like [`equal`](Self::equal), but elements match when `|a - b| <= tol`.
    pub fn equal_within_abs(&self, other: &General<T>, tol: T) -> bool {
        self.same_layout(other)
            && self
                .data
                .as_cells()
                .iter()
                .zip(other.data.as_cells())
                .all(|(a, b)| (a.get() - b.get()).abs() <= tol)
    }

    fn same_layout(&self, other: &General<T>) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self.stride == other.stride
            && self.data.len() == other.data.len()
    }

    /// The logical cells in row-major order, without stride padding.
    pub fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::with_capacity((self.rows.max(0) * self.cols.max(0)) as usize);
        for i in 0..self.rows {
            for j in 0..self.cols {
                out.push(self.at(i, j));
            }
        }
        out
    }
}

/// Row `k`'s physical span: `stride` slots from the row start, cut at the buffer end.
fn row_span<T>(cells: &[Cell<T>], k: isize, stride: isize) -> &[Cell<T>] {
    let start = (k * stride) as usize;
    let end = start.saturating_add(stride as usize).min(cells.len());
    &cells[start..end]
}

/// Deep copy: the whole buffer window is copied into fresh storage.
impl<T: Scalar> Clone for General<T> {
    fn clone(&self) -> Self {
        log::trace!(
            "Cloning {}x{} general matrix ({} elements)",
            self.rows,
            self.cols,
            self.data.len()
        );
        Self {
            data: self.data.deep_copy(),
            rows: self.rows,
            cols: self.cols,
            stride: self.stride,
        }
    }
}

impl<T: Scalar> PartialEq for General<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<T: Scalar> Matrix for General<T> {
    type Value = T;

    fn dims(&self) -> (isize, isize) {
        (self.rows, self.cols)
    }

    // rows(), cols(), is_square() are provided by default impls in the trait
}

impl<T: Scalar> fmt::Display for General<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "r = {} c = {} stride: {}", self.rows, self.cols, self.stride)?;
        let cells = self.data.as_cells();
        for i in 0..self.rows {
            let start = (i * self.stride).max(0) as usize;
            if start >= cells.len() {
                break;
            }
            let end = start.saturating_add(self.stride.max(0) as usize).min(cells.len());
            let values: Vec<T> = cells[start..end].iter().map(Cell::get).collect();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}
