//! Row layout: offset and stride addressing over a flat buffer

use std::ops::Range;

/// Addressing of `rows` contiguous rows of `cols` elements each.
///
/// Row `r` occupies `offset + r * cols .. offset + (r + 1) * cols` in the
/// underlying buffer. The row stride equals `cols`; rows never overlap.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RowLayout {
    offset: usize,
    rows: usize,
    cols: usize,
}

impl RowLayout {
    /// Row-major layout starting at element 0
    pub fn contiguous(rows: usize, cols: usize) -> Self {
        Self::new(0, rows, cols)
    }

    /// Row-major layout starting at element `offset`
    pub fn new(offset: usize, rows: usize, cols: usize) -> Self {
        Self { offset, rows, cols }
    }

    /// Layout for a buffer of `elements` items split along a trailing axis of `cols`
    ///
    /// Returns `None` if `cols` is zero or does not divide `elements`.
    pub fn from_elements(elements: usize, cols: usize) -> Option<Self> {
        if cols == 0 || elements % cols != 0 {
            return None;
        }
        Some(Self::contiguous(elements / cols, cols))
    }

    /// The same row count with a different row length (e.g. `k` for top-k output)
    pub fn with_cols(&self, cols: usize) -> Self {
        Self::contiguous(self.rows, cols)
    }

    /// Starting element index
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Elements per row
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Distance in elements between the starts of consecutive rows
    #[inline]
    pub fn row_stride(&self) -> usize {
        self.cols
    }

    /// Total element count covered by the layout
    #[inline]
    pub fn elem_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Flat element range of one row
    #[inline]
    pub fn row_range(&self, row: usize) -> Range<usize> {
        let start = self.offset + row * self.row_stride();
        start..start + self.cols
    }

    /// Flat element range spanning every row
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.offset..self.offset + self.elem_count()
    }
}
