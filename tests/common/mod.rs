//! Common test utilities
#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rowsort::prelude::*;

/// Seeded RNG so randomized tests are reproducible
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Random f32 row data drawn from a small value set so ties are common
pub fn random_f32_with_ties(rng: &mut StdRng, len: usize, distinct: u32) -> Vec<f32> {
    (0..len)
        .map(|_| rng.random_range(0..distinct) as f32 * 0.5 - 2.0)
        .collect()
}

/// Random u32 data
pub fn random_u32(rng: &mut StdRng, len: usize, max: u32) -> Vec<u32> {
    (0..len).map(|_| rng.random_range(0..max)).collect()
}

/// Run top-k through `client`, returning (values, indices)
pub fn run_topk(
    client: &CpuClient,
    data: &[f32],
    shape: &[usize],
    k: usize,
    descending: bool,
) -> Result<(Vec<f32>, Vec<u32>)> {
    let rows = data.len() / shape[shape.len() - 1];
    let mut values = vec![0.0f32; rows * k];
    let mut indices = vec![0u32; rows * k];

    let input = TensorView::from_slice(data, shape)?;
    let out_shape = Shape::new(shape)?
        .with_last_dim(k)
        .expect("run_topk needs k >= 1");
    let mut out_v = TensorViewMut::from_slice_mut(&mut values, &out_shape)?;
    let mut out_i = TensorViewMut::from_slice_mut(&mut indices, &out_shape)?;
    client.topk(&mut out_v, &mut out_i, &input, k, shape.len() - 1, descending)?;

    Ok((values, indices))
}

/// Run a full sort through `client`, returning (values, indices)
pub fn run_sort<T: Element + Default>(
    client: &CpuClient,
    data: &[T],
    shape: &[usize],
    descending: bool,
) -> Result<(Vec<T>, Vec<u32>)> {
    let mut values = vec![T::default(); data.len()];
    let mut indices = vec![0u32; data.len()];

    let input = TensorView::from_slice(data, shape)?;
    let mut out_v = TensorViewMut::from_slice_mut(&mut values, shape)?;
    let mut out_i = TensorViewMut::from_slice_mut(&mut indices, shape)?;
    client.sort(&mut out_v, &mut out_i, &input, shape.len() - 1, descending)?;

    Ok((values, indices))
}

/// Reference ordering: stable sort of column indices by value, ties in
/// ascending column order. Independent of the crate's selection kernels.
pub fn reference_order<T: Element>(row: &[T], descending: bool) -> Vec<u32> {
    let mut idx: Vec<u32> = (0..row.len() as u32).collect();
    idx.sort_by(|&a, &b| {
        let (va, vb) = (&row[a as usize], &row[b as usize]);
        if descending {
            vb.total_cmp(va)
        } else {
            va.total_cmp(vb)
        }
    });
    idx
}

/// Assert one output row obeys index validity and value/index consistency
pub fn assert_row_consistent<T: Element + std::fmt::Debug>(
    input_row: &[T],
    out_values: &[T],
    out_indices: &[u32],
) {
    assert_eq!(out_values.len(), out_indices.len());
    let mut seen = vec![false; input_row.len()];
    for (v, &i) in out_values.iter().zip(out_indices) {
        let i = i as usize;
        assert!(i < input_row.len(), "index {i} out of range");
        assert!(!seen[i], "index {i} emitted twice");
        seen[i] = true;
        assert_eq!(
            v.total_cmp(&input_row[i]),
            std::cmp::Ordering::Equal,
            "value {v:?} does not match input at {i}"
        );
    }
}
