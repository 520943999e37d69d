//! # rowsort
//!
//! **Row-wise top-k selection and full sort over flat, row-major tensor buffers.**
//!
//! A tensor of shape `[..., C]` is treated as `R = elements / C` independent
//! rows. Per row, rowsort either selects the `k` largest or smallest elements
//! together with their column indices ([`topk`]), or writes the whole row in
//! sorted order with indices ([`sort`]).
//!
//! rowsort never allocates or owns tensor storage. Inputs and outputs are
//! borrowed views ([`TensorView`](tensor::TensorView),
//! [`TensorViewMut`](tensor::TensorViewMut)) over caller-owned buffers.
//!
//! ## Quick Start
//!
//! ```rust
//! use rowsort::prelude::*;
//!
//! let data = [3.0f32, 1.0, 4.0, 1.5, 0.5, 2.0, 8.0, 7.0];
//! let mut values = [0.0f32; 4];
//! let mut indices = [0u32; 4];
//!
//! let input = TensorView::from_slice(&data, &[2, 4])?;
//! let mut out_v = TensorViewMut::from_slice_mut(&mut values, &[2, 2])?;
//! let mut out_i = TensorViewMut::from_slice_mut(&mut indices, &[2, 2])?;
//! rowsort::topk(&mut out_v, &mut out_i, &input, 2, 1, true)?;
//!
//! assert_eq!(values, [4.0, 3.0, 8.0, 7.0]);
//! assert_eq!(indices, [2, 0, 2, 3]);
//! # Ok::<(), rowsort::error::Error>(())
//! ```
//!
//! ## Ordering
//!
//! Rows are ordered by each element type's total order (IEEE 754
//! `totalOrder` for floats, so NaN sorts above +inf). Equal values come out
//! in ascending column order in both directions.
//!
//! ## Feature Flags
//!
//! - `rayon` (default): fan rows out across threads
//! - `f16`: sort support for F16 and BF16 via `half`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dtype;
pub mod error;
pub mod ops;
pub mod runtime;
pub mod tensor;

use ops::SortingOps;
use runtime::cpu::CpuClient;
use tensor::{TensorView, TensorViewMut};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dtype::{DType, Element};
    pub use crate::error::{Error, Result};
    pub use crate::ops::{SortOp, SortingOps};
    pub use crate::runtime::cpu::{CpuClient, ParallelismConfig};
    pub use crate::tensor::{Shape, TensorView, TensorViewMut};
}

/// Row-wise top-k on a default [`CpuClient`].
///
/// See [`SortingOps::topk`].
pub fn topk(
    out_values: &mut TensorViewMut<'_>,
    out_indices: &mut TensorViewMut<'_>,
    input: &TensorView<'_>,
    k: usize,
    axis: usize,
    descending: bool,
) -> error::Result<()> {
    CpuClient::new().topk(out_values, out_indices, input, k, axis, descending)
}

/// Row-wise full sort on a default [`CpuClient`].
///
/// See [`SortingOps::sort`].
pub fn sort(
    out_values: &mut TensorViewMut<'_>,
    out_indices: &mut TensorViewMut<'_>,
    input: &TensorView<'_>,
    axis: usize,
    descending: bool,
) -> error::Result<()> {
    CpuClient::new().sort(out_values, out_indices, input, axis, descending)
}
