//! CPU implementation of sorting operations.

use crate::error::Result;
use crate::ops::SortingOps;
use crate::runtime::cpu::CpuClient;
use crate::tensor::{TensorView, TensorViewMut};

/// SortingOps implementation for CPU runtime.
impl SortingOps for CpuClient {
    fn topk(
        &self,
        out_values: &mut TensorViewMut<'_>,
        out_indices: &mut TensorViewMut<'_>,
        input: &TensorView<'_>,
        k: usize,
        axis: usize,
        descending: bool,
    ) -> Result<()> {
        crate::runtime::cpu::sort::topk_impl(self, out_values, out_indices, input, k, axis, descending)
    }

    fn sort(
        &self,
        out_values: &mut TensorViewMut<'_>,
        out_indices: &mut TensorViewMut<'_>,
        input: &TensorView<'_>,
        axis: usize,
        descending: bool,
    ) -> Result<()> {
        crate::runtime::cpu::sort::sort_impl(self, out_values, out_indices, input, axis, descending)
    }
}
