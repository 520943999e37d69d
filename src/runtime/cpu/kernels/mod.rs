//! CPU kernel implementations
//!
//! Kernels operate on one row at a time and are generic over `T: Element`.

pub mod sort;

pub use sort::{sort_row, topk_row};
