//! Tensor views and row addressing
//!
//! This module provides borrowed, dtype-tagged views over caller-owned
//! row-major buffers. Nothing here allocates element storage: a view is a
//! `(Shape, DType, bytes)` triple and the caller keeps ownership of the bytes.

mod layout;
mod shape;
mod view;

pub use layout::RowLayout;
pub use shape::Shape;
pub use view::{TensorView, TensorViewMut};
