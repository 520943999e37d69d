//! Row selection and sort kernels

use crate::dtype::Element;
use std::cmp::Ordering;

/// Orders column indices of one row by the values they point at.
///
/// Values compare by [`Element::total_cmp`], reversed when descending. Equal
/// values fall back to ascending column index, which makes the order strict
/// and total: any correct selection or sort algorithm yields the same output.
#[derive(Copy, Clone, Debug)]
pub struct RowComparator<'a, T> {
    row: &'a [T],
    descending: bool,
}

impl<'a, T: Element> RowComparator<'a, T> {
    /// Comparator over `row`
    #[inline]
    pub fn new(row: &'a [T], descending: bool) -> Self {
        Self { row, descending }
    }

    /// Compare the elements at columns `a` and `b`
    #[inline]
    pub fn compare(&self, a: u32, b: u32) -> Ordering {
        let va = &self.row[a as usize];
        let vb = &self.row[b as usize];
        let by_value = if self.descending {
            vb.total_cmp(va)
        } else {
            va.total_cmp(vb)
        };
        by_value.then_with(|| a.cmp(&b))
    }
}

/// Reset `idx` to the identity permutation `0..len`.
#[inline]
pub fn fill_indices(idx: &mut Vec<u32>, len: usize) {
    debug_assert!(len <= u32::MAX as usize);
    idx.clear();
    idx.extend(0..len as u32);
}

#[inline]
fn gather<T: Element>(row: &[T], order: &[u32], out_values: &mut [T], out_indices: &mut [u32]) {
    for ((&col, value), index) in order.iter().zip(out_values).zip(out_indices) {
        *value = row[col as usize];
        *index = col;
    }
}

/// Write the `k = out_values.len()` extremal elements of `row` and their columns.
///
/// `idx` is scratch space; its previous contents are discarded. Expected
/// cost is `O(C + k log k)`: a linear-time selection moves the k winners to
/// the front, then only those k are sorted.
///
/// Requires `1 <= k <= row.len()` and `out_indices.len() == k`.
pub fn topk_row<T: Element>(
    row: &[T],
    idx: &mut Vec<u32>,
    descending: bool,
    out_values: &mut [T],
    out_indices: &mut [u32],
) {
    let k = out_values.len();
    debug_assert!(k >= 1 && k <= row.len());
    debug_assert_eq!(out_indices.len(), k);

    fill_indices(idx, row.len());
    let cmp = RowComparator::new(row, descending);

    if k < idx.len() {
        idx.select_nth_unstable_by(k - 1, |&a, &b| cmp.compare(a, b));
    }
    let head = &mut idx[..k];
    head.sort_unstable_by(|&a, &b| cmp.compare(a, b));

    gather(row, head, out_values, out_indices);
}

/// Write all of `row` in sorted order together with the source columns.
///
/// Requires `out_values.len() == out_indices.len() == row.len()`.
pub fn sort_row<T: Element>(
    row: &[T],
    idx: &mut Vec<u32>,
    descending: bool,
    out_values: &mut [T],
    out_indices: &mut [u32],
) {
    debug_assert_eq!(out_values.len(), row.len());
    debug_assert_eq!(out_indices.len(), row.len());

    fill_indices(idx, row.len());
    let cmp = RowComparator::new(row, descending);
    idx.sort_unstable_by(|&a, &b| cmp.compare(a, b));

    gather(row, idx, out_values, out_indices);
}
