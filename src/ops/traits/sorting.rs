//! Row-wise top-k and sort operations trait.

use crate::error::Result;
use crate::tensor::{TensorView, TensorViewMut};

/// Row-wise ordering operations
///
/// A tensor of shape `[..., C]` is treated as `R = elements / C` independent
/// rows. Both operations write into caller-allocated outputs and never
/// allocate or reshape them.
///
/// # Ordering
///
/// Rows are ordered by the element type's total order (IEEE 754
/// `totalOrder` for floats). Equal values are emitted in ascending
/// original-index order, in both directions, so results are deterministic
/// regardless of thread count.
pub trait SortingOps {
    /// Select the `k` extremal elements of every row, with their column indices.
    ///
    /// # Arguments
    ///
    /// * `out_values` - `F32` output holding `R * k` elements
    /// * `out_indices` - `U32` output holding `R * k` elements
    /// * `input` - `F32` input of shape `[..., C]`
    /// * `k` - elements kept per row, `1 <= k <= C`
    /// * `axis` - must be the last axis (`ndim - 1`)
    /// * `descending` - largest first if true, smallest first otherwise
    ///
    /// # Errors
    ///
    /// `InvalidAxis`, `UnsupportedElementType`, `ElementTypeMismatch`,
    /// `InvalidArgument` (k = 0), `KExceedsRowLength`, `ShapeMismatch`.
    /// Nothing is written on error.
    ///
    /// # Example
    ///
    /// ```
    /// # use rowsort::prelude::*;
    /// let client = CpuClient::new();
    /// let data = [3.0f32, 1.0, 4.0, 1.5];
    /// let mut values = [0.0f32; 2];
    /// let mut indices = [0u32; 2];
    ///
    /// let input = TensorView::from_slice(&data, &[1, 4])?;
    /// let mut out_v = TensorViewMut::from_slice_mut(&mut values, &[1, 2])?;
    /// let mut out_i = TensorViewMut::from_slice_mut(&mut indices, &[1, 2])?;
    /// client.topk(&mut out_v, &mut out_i, &input, 2, 1, true)?;
    ///
    /// assert_eq!(values, [4.0, 3.0]);
    /// assert_eq!(indices, [2, 0]);
    /// # Ok::<(), rowsort::error::Error>(())
    /// ```
    fn topk(
        &self,
        out_values: &mut TensorViewMut<'_>,
        out_indices: &mut TensorViewMut<'_>,
        input: &TensorView<'_>,
        k: usize,
        axis: usize,
        descending: bool,
    ) -> Result<()>;

    /// Fully order every row, returning sorted values and their column indices.
    ///
    /// # Arguments
    ///
    /// * `out_values` - output of the input's element type holding `R * C` elements
    /// * `out_indices` - `U32` output holding `R * C` elements
    /// * `input` - input of shape `[..., C]` and any sortable element type
    /// * `axis` - must be the last axis (`ndim - 1`)
    /// * `descending` - largest first if true, smallest first otherwise
    ///
    /// # Errors
    ///
    /// `InvalidAxis`, `UnsupportedElementType`, `ElementTypeMismatch`,
    /// `ShapeMismatch`. Nothing is written on error.
    ///
    /// # Example
    ///
    /// ```
    /// # use rowsort::prelude::*;
    /// let client = CpuClient::new();
    /// let data = [3.0f32, 1.0, 4.0, 1.5];
    /// let mut values = [0.0f32; 4];
    /// let mut indices = [0u32; 4];
    ///
    /// let input = TensorView::from_slice(&data, &[4])?;
    /// let mut out_v = TensorViewMut::from_slice_mut(&mut values, &[4])?;
    /// let mut out_i = TensorViewMut::from_slice_mut(&mut indices, &[4])?;
    /// client.sort(&mut out_v, &mut out_i, &input, 0, false)?;
    ///
    /// assert_eq!(values, [1.0, 1.5, 3.0, 4.0]);
    /// assert_eq!(indices, [1, 3, 0, 2]);
    /// # Ok::<(), rowsort::error::Error>(())
    /// ```
    fn sort(
        &self,
        out_values: &mut TensorViewMut<'_>,
        out_indices: &mut TensorViewMut<'_>,
        input: &TensorView<'_>,
        axis: usize,
        descending: bool,
    ) -> Result<()>;
}
