//! Eager precondition checks for row-wise operations

use super::SortOp;
use crate::dtype::DType;
use crate::error::{Error, Result};
use crate::tensor::{RowLayout, TensorView, TensorViewMut};

/// Validated description of a row-wise call
///
/// Produced only when every precondition holds; backends execute a plan
/// without re-checking.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RowPlan {
    /// Operation being executed
    pub op: SortOp,
    /// Element type of the input and value output
    pub dtype: DType,
    /// Rows of the input (`cols` = row length C)
    pub input: RowLayout,
    /// Rows of both outputs (`cols` = k for top-k, C for sort)
    pub output: RowLayout,
}

impl RowPlan {
    /// Number of independent rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.input.rows()
    }

    /// Row length along the last axis
    #[inline]
    pub fn row_len(&self) -> usize {
        self.input.cols()
    }

    /// Elements written per row
    #[inline]
    pub fn out_len(&self) -> usize {
        self.output.cols()
    }
}

/// Check `axis` is the trailing axis and return the input row layout.
fn trailing_rows(input: &TensorView<'_>, axis: usize) -> Result<RowLayout> {
    let shape = input.shape();
    let ndim = shape.ndim();
    if ndim == 0 || axis != ndim - 1 {
        return Err(Error::invalid_axis(axis, ndim));
    }
    let cols = shape[axis];
    check_index_range(shape)?;
    RowLayout::from_elements(input.elements(), cols).ok_or_else(|| Error::InvalidShape {
        shape: shape.to_vec(),
        reason: "last dimension does not divide element count",
    })
}

/// Reject rows whose length cannot be counted in a `u32`.
fn check_index_range(shape: &[usize]) -> Result<()> {
    match shape.last() {
        Some(&cols) if cols > u32::MAX as usize => Err(Error::InvalidShape {
            shape: shape.to_vec(),
            reason: "row length exceeds the u32 index range",
        }),
        _ => Ok(()),
    }
}

fn check_input_dtype(op: SortOp, dtype: DType) -> Result<()> {
    if !op.supports(dtype) {
        return Err(Error::unsupported(dtype, op.name()));
    }
    Ok(())
}

fn check_indices_dtype(out_indices: &TensorViewMut<'_>) -> Result<()> {
    if out_indices.dtype() != DType::INDEX {
        return Err(Error::mismatch("indices", DType::INDEX, out_indices.dtype()));
    }
    Ok(())
}

fn check_output_len(
    out_values: &TensorViewMut<'_>,
    out_indices: &TensorViewMut<'_>,
    output: &RowLayout,
) -> Result<()> {
    let expected = output.elem_count();
    if out_values.elements() != expected {
        return Err(Error::shape_mismatch("values", expected, out_values.elements()));
    }
    if out_indices.elements() != expected {
        return Err(Error::shape_mismatch("indices", expected, out_indices.elements()));
    }
    Ok(())
}

/// Validate a top-k call.
///
/// Checks, in order: trailing axis, input element type, index element type,
/// `1 <= k <= C`, value element type (`F32`), and output element counts
/// (`R * k` each).
pub fn validate_topk(
    out_values: &TensorViewMut<'_>,
    out_indices: &TensorViewMut<'_>,
    input: &TensorView<'_>,
    k: usize,
    axis: usize,
) -> Result<RowPlan> {
    let op = SortOp::TopK;
    let rows = trailing_rows(input, axis)?;
    check_input_dtype(op, input.dtype())?;
    check_indices_dtype(out_indices)?;

    if k == 0 {
        return Err(Error::InvalidArgument {
            arg: "k",
            reason: "k must be at least 1".to_string(),
        });
    }
    if k > rows.cols() {
        return Err(Error::KExceedsRowLength {
            k,
            len: rows.cols(),
        });
    }
    if out_values.dtype() != DType::F32 {
        return Err(Error::mismatch("values", DType::F32, out_values.dtype()));
    }

    let output = rows.with_cols(k);
    check_output_len(out_values, out_indices, &output)?;

    Ok(RowPlan {
        op,
        dtype: input.dtype(),
        input: rows,
        output,
    })
}

/// Validate a full sort call.
///
/// Checks, in order: trailing axis, input element type, index element type,
/// value element type (same as input), and output element counts (`R * C`
/// each).
pub fn validate_sort(
    out_values: &TensorViewMut<'_>,
    out_indices: &TensorViewMut<'_>,
    input: &TensorView<'_>,
    axis: usize,
) -> Result<RowPlan> {
    let op = SortOp::Sort;
    let rows = trailing_rows(input, axis)?;
    check_input_dtype(op, input.dtype())?;
    check_indices_dtype(out_indices)?;

    if out_values.dtype() != input.dtype() {
        return Err(Error::mismatch("values", input.dtype(), out_values.dtype()));
    }

    let output = rows;
    check_output_len(out_values, out_indices, &output)?;

    Ok(RowPlan {
        op,
        dtype: input.dtype(),
        input: rows,
        output,
    })
}
