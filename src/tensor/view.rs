//! Borrowed, dtype-tagged views over caller-owned buffers

use super::Shape;
use crate::dtype::{DType, Element};
use crate::error::{Error, Result};

fn check_len(shape: &Shape, dtype: DType, bytes: usize) -> Result<()> {
    let elements = shape.elements();
    let expected = elements * dtype.size_in_bytes();
    if bytes != expected {
        return Err(Error::BufferSize {
            dtype,
            elements,
            expected,
            got: bytes,
        });
    }
    Ok(())
}

/// Read-only view of a contiguous row-major buffer
///
/// The view never owns its bytes; the borrow ties its lifetime to the
/// caller's storage.
#[derive(Clone, Debug)]
pub struct TensorView<'a> {
    shape: Shape,
    dtype: DType,
    data: &'a [u8],
}

impl<'a> TensorView<'a> {
    /// Wrap raw bytes tagged with `dtype`.
    ///
    /// Fails with [`Error::BufferSize`] unless `data` holds exactly
    /// `shape.elements()` elements of `dtype`.
    pub fn new(shape: Shape, dtype: DType, data: &'a [u8]) -> Result<Self> {
        check_len(&shape, dtype, data.len())?;
        Ok(Self { shape, dtype, data })
    }

    /// Wrap a typed slice without copying.
    ///
    /// ```
    /// use rowsort::prelude::*;
    /// let data = [3.0f32, 1.0, 4.0, 1.5];
    /// let view = TensorView::from_slice(&data, &[2, 2])?;
    /// assert_eq!(view.dtype(), DType::F32);
    /// # Ok::<(), rowsort::error::Error>(())
    /// ```
    pub fn from_slice<T: Element>(data: &'a [T], shape: &[usize]) -> Result<Self> {
        Self::new(Shape::new(shape)?, T::DTYPE, bytemuck::cast_slice(data))
    }

    /// Shape of the view
    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Element type tag
    #[inline]
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// Number of elements
    #[inline]
    pub fn elements(&self) -> usize {
        self.shape.elements()
    }

    /// Reinterpret the bytes as `&[T]`.
    ///
    /// Fails if `T` does not match the view's dtype or the buffer is not
    /// aligned for `T`.
    pub fn as_slice<T: Element>(&self) -> Result<&'a [T]> {
        if T::DTYPE != self.dtype {
            return Err(Error::mismatch("view", T::DTYPE, self.dtype));
        }
        bytemuck::try_cast_slice(self.data).map_err(|_| Error::Misaligned { dtype: self.dtype })
    }
}

/// Writable view of a contiguous row-major output buffer
#[derive(Debug)]
pub struct TensorViewMut<'a> {
    shape: Shape,
    dtype: DType,
    data: &'a mut [u8],
}

impl<'a> TensorViewMut<'a> {
    /// Wrap raw bytes tagged with `dtype`.
    pub fn new(shape: Shape, dtype: DType, data: &'a mut [u8]) -> Result<Self> {
        check_len(&shape, dtype, data.len())?;
        Ok(Self { shape, dtype, data })
    }

    /// Wrap a typed mutable slice without copying.
    pub fn from_slice_mut<T: Element>(data: &'a mut [T], shape: &[usize]) -> Result<Self> {
        Self::new(Shape::new(shape)?, T::DTYPE, bytemuck::cast_slice_mut(data))
    }

    /// Shape of the view
    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Element type tag
    #[inline]
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// Number of elements
    #[inline]
    pub fn elements(&self) -> usize {
        self.shape.elements()
    }

    /// Reinterpret the bytes as `&mut [T]`.
    pub fn as_mut_slice<T: Element>(&mut self) -> Result<&mut [T]> {
        if T::DTYPE != self.dtype {
            return Err(Error::mismatch("view", T::DTYPE, self.dtype));
        }
        let dtype = self.dtype;
        bytemuck::try_cast_slice_mut(&mut *self.data).map_err(|_| Error::Misaligned { dtype })
    }
}
