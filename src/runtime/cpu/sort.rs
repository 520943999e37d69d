//! Top-k and sort drivers for the CPU runtime

use super::CpuClient;
use super::helpers::dispatch_dtype;
use super::kernels::{sort_row, topk_row};
use crate::dtype::Element;
use crate::error::Result;
use crate::ops::{RowPlan, validate_sort, validate_topk};
use crate::tensor::{TensorView, TensorViewMut};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Validate, then run `topk_row` over every row
pub fn topk_impl(
    client: &CpuClient,
    out_values: &mut TensorViewMut<'_>,
    out_indices: &mut TensorViewMut<'_>,
    input: &TensorView<'_>,
    k: usize,
    axis: usize,
    descending: bool,
) -> Result<()> {
    let plan = validate_topk(out_values, out_indices, input, k, axis)?;
    log_plan(client, &plan, descending);

    dispatch_dtype!(plan.dtype, T => {
        run_rows::<T, _>(client, &plan, out_values, out_indices, input, |row, idx, vals, inds| {
            topk_row(row, idx, descending, vals, inds)
        })?;
    }, "topk");

    Ok(())
}

/// Validate, then run `sort_row` over every row
pub fn sort_impl(
    client: &CpuClient,
    out_values: &mut TensorViewMut<'_>,
    out_indices: &mut TensorViewMut<'_>,
    input: &TensorView<'_>,
    axis: usize,
    descending: bool,
) -> Result<()> {
    let plan = validate_sort(out_values, out_indices, input, axis)?;
    log_plan(client, &plan, descending);

    dispatch_dtype!(plan.dtype, T => {
        run_rows::<T, _>(client, &plan, out_values, out_indices, input, |row, idx, vals, inds| {
            sort_row(row, idx, descending, vals, inds)
        })?;
    }, "sort");

    Ok(())
}

fn log_plan(client: &CpuClient, plan: &RowPlan, descending: bool) {
    log::debug!(
        "{}: dtype={} rows={} cols={} out_cols={} descending={} parallel={}",
        plan.op.name(),
        plan.dtype,
        plan.rows(),
        plan.row_len(),
        plan.out_len(),
        descending,
        client.should_parallelize(plan.rows()),
    );
}

/// Apply `kernel` to each row, fanning out over threads when worthwhile.
///
/// All three buffers are reinterpreted before the first row runs, so a
/// failure here also leaves the outputs untouched.
fn run_rows<T, F>(
    client: &CpuClient,
    plan: &RowPlan,
    out_values: &mut TensorViewMut<'_>,
    out_indices: &mut TensorViewMut<'_>,
    input: &TensorView<'_>,
    kernel: F,
) -> Result<()>
where
    T: Element,
    F: Fn(&[T], &mut Vec<u32>, &mut [T], &mut [u32]) + Sync,
{
    let src = &input.as_slice::<T>()?[plan.input.span()];
    let values = out_values.as_mut_slice::<T>()?;
    let indices = out_indices.as_mut_slice::<u32>()?;

    #[cfg(feature = "rayon")]
    if client.should_parallelize(plan.rows()) {
        run_rows_parallel(client, plan, src, values, indices, &kernel);
        return Ok(());
    }

    #[cfg(not(feature = "rayon"))]
    let _ = client;

    let mut idx = Vec::with_capacity(plan.row_len());
    for r in 0..plan.rows() {
        let row = &src[plan.input.row_range(r)];
        let out = plan.output.row_range(r);
        kernel(row, &mut idx, &mut values[out.clone()], &mut indices[out]);
    }
    Ok(())
}

#[cfg(feature = "rayon")]
fn run_rows_parallel<T, F>(
    client: &CpuClient,
    plan: &RowPlan,
    src: &[T],
    values: &mut [T],
    indices: &mut [u32],
    kernel: &F,
) where
    T: Element,
    F: Fn(&[T], &mut Vec<u32>, &mut [T], &mut [u32]) + Sync,
{
    let cols = plan.row_len();
    let out_cols = plan.out_len();
    let min_len = client.rayon_min_len();

    client.install_parallelism(|| {
        src.par_chunks_exact(cols)
            .zip(values.par_chunks_exact_mut(out_cols))
            .zip(indices.par_chunks_exact_mut(out_cols))
            .with_min_len(min_len)
            .for_each_init(
                || {
                    log::trace!("{}: worker scratch for rows of {cols}", plan.op.name());
                    Vec::with_capacity(cols)
                },
                |idx, ((row, vals), inds)| kernel(row, idx, vals, inds),
            );
    });
}
