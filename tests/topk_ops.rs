//! Integration tests for row-wise top-k
//!
//! Tests verify:
//! - The k extremal values per row, ordered by direction
//! - Index validity and value/index consistency
//! - Deterministic tie-breaking by ascending column
//! - Agreement with a stable full-sort reference

mod common;

use common::{
    assert_row_consistent, random_f32_with_ties, reference_order, run_topk, seeded_rng,
};
use rowsort::prelude::*;

#[test]
fn test_topk_single_row_descending() {
    let client = CpuClient::new();
    let (values, indices) = run_topk(&client, &[3.0, 1.0, 4.0, 1.5], &[4], 2, true).unwrap();
    assert_eq!(values, [4.0, 3.0]);
    assert_eq!(indices, [2, 0]);
}

#[test]
fn test_topk_single_row_ascending() {
    let client = CpuClient::new();
    let (values, indices) = run_topk(&client, &[3.0, 1.0, 4.0, 1.5], &[4], 2, false).unwrap();
    assert_eq!(values, [1.0, 1.5]);
    assert_eq!(indices, [1, 3]);
}

#[test]
fn test_topk_batched_rows() {
    let client = CpuClient::new();
    // Shape [2, 5] - two rows of 5 elements each
    let data = [
        5.0, 2.0, 8.0, 1.0, 9.0, // row 0
        3.0, 7.0, 4.0, 6.0, 0.0, // row 1
    ];
    let (values, indices) = run_topk(&client, &data, &[2, 5], 2, true).unwrap();
    assert_eq!(values, [9.0, 8.0, 7.0, 6.0]);
    assert_eq!(indices, [4, 2, 1, 3]);
}

#[test]
fn test_topk_rank3_input() {
    let client = CpuClient::new();
    // [2, 2, 3]: four rows of three
    let data = [
        1.0, 2.0, 3.0, //
        6.0, 5.0, 4.0, //
        0.0, -1.0, 7.0, //
        2.0, 2.0, 1.0, //
    ];
    let (values, indices) = run_topk(&client, &data, &[2, 2, 3], 1, true).unwrap();
    assert_eq!(values, [3.0, 6.0, 7.0, 2.0]);
    assert_eq!(indices, [2, 0, 2, 0]);
}

#[test]
fn test_topk_k_equals_row_length_is_full_sort() {
    let client = CpuClient::new();
    let data = [3.0, 1.0, 4.0, 1.0, 5.0];
    let (values, indices) = run_topk(&client, &data, &[5], 5, true).unwrap();
    assert_eq!(values, [5.0, 4.0, 3.0, 1.0, 1.0]);
    assert_eq!(indices, [4, 2, 0, 1, 3]);
}

#[test]
fn test_topk_single_column() {
    let client = CpuClient::new();
    let (values, indices) = run_topk(&client, &[2.5, -1.0, 0.0], &[3, 1], 1, false).unwrap();
    assert_eq!(values, [2.5, -1.0, 0.0]);
    assert_eq!(indices, [0, 0, 0]);
}

#[test]
fn test_topk_ties_break_by_ascending_index() {
    let client = CpuClient::new();
    let data = [2.0, 5.0, 2.0, 5.0, 2.0, 5.0];

    let (values, indices) = run_topk(&client, &data, &[6], 4, true).unwrap();
    assert_eq!(values, [5.0, 5.0, 5.0, 2.0]);
    assert_eq!(indices, [1, 3, 5, 0]);

    let (values, indices) = run_topk(&client, &data, &[6], 2, false).unwrap();
    assert_eq!(values, [2.0, 2.0]);
    assert_eq!(indices, [0, 2]);
}

#[test]
fn test_topk_nan_ranks_above_infinity() {
    let client = CpuClient::new();
    let data = [1.0, f32::NAN, f32::INFINITY, -3.0];
    let (values, indices) = run_topk(&client, &data, &[4], 2, true).unwrap();
    assert!(values[0].is_nan());
    assert_eq!(values[1], f32::INFINITY);
    assert_eq!(indices, [1, 2]);
}

#[test]
fn test_topk_selected_dominate_unselected() {
    let client = CpuClient::new();
    let mut rng = seeded_rng(7);
    let cols = 37;
    let rows = 9;
    let data = random_f32_with_ties(&mut rng, rows * cols, 11);

    for &descending in &[true, false] {
        let k = 6;
        let (values, indices) = run_topk(&client, &data, &[rows, cols], k, descending).unwrap();
        for r in 0..rows {
            let row = &data[r * cols..(r + 1) * cols];
            let vals = &values[r * k..(r + 1) * k];
            let inds = &indices[r * k..(r + 1) * k];
            assert_row_consistent(row, vals, inds);

            // Ordered among themselves
            for w in vals.windows(2) {
                if descending {
                    assert!(w[0] >= w[1]);
                } else {
                    assert!(w[0] <= w[1]);
                }
            }
            // Every selected value dominates every unselected one
            let worst = vals[k - 1];
            for (c, &v) in row.iter().enumerate() {
                if !inds.contains(&(c as u32)) {
                    if descending {
                        assert!(worst >= v, "row {r}: {worst} < unselected {v}");
                    } else {
                        assert!(worst <= v, "row {r}: {worst} > unselected {v}");
                    }
                }
            }
        }
    }
}

#[test]
fn test_topk_matches_reference_prefix() {
    let client = CpuClient::new();
    let mut rng = seeded_rng(42);

    for &(rows, cols) in &[(1, 1), (3, 8), (16, 33), (5, 200)] {
        let data = random_f32_with_ties(&mut rng, rows * cols, 7);
        for k in [1, cols / 2 + 1, cols] {
            for &descending in &[true, false] {
                let (_, indices) =
                    run_topk(&client, &data, &[rows, cols], k, descending).unwrap();
                for r in 0..rows {
                    let row = &data[r * cols..(r + 1) * cols];
                    let expected = &reference_order(row, descending)[..k];
                    assert_eq!(
                        &indices[r * k..(r + 1) * k],
                        expected,
                        "rows={rows} cols={cols} k={k} descending={descending} row={r}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_topk_free_function_matches_client() {
    let data = [0.25f32, 0.75, 0.5, 1.0, 0.0, 0.125];
    let mut values = [0.0f32; 2];
    let mut indices = [0u32; 2];

    let input = TensorView::from_slice(&data, &[2, 3]).unwrap();
    let mut out_v = TensorViewMut::from_slice_mut(&mut values, &[2, 1]).unwrap();
    let mut out_i = TensorViewMut::from_slice_mut(&mut indices, &[2, 1]).unwrap();
    rowsort::topk(&mut out_v, &mut out_i, &input, 1, 1, false).unwrap();

    assert_eq!(values, [0.25, 0.0]);
    assert_eq!(indices, [0, 1]);
}
