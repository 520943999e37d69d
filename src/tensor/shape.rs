//! Shape type: dimensions of a tensor

use crate::error::{Error, Result};
use smallvec::SmallVec;
use std::fmt;
use std::ops::Deref;

/// Stack allocation threshold for dimensions
/// Most tensors have 4 or fewer dimensions, so we stack-allocate up to 4
pub(crate) const STACK_DIMS: usize = 4;

/// Shape type: dimensions of a tensor
///
/// Every dimension is strictly positive. The last entry is the axis sorting
/// and selection operate along.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Shape(SmallVec<[usize; STACK_DIMS]>);

impl Shape {
    /// Create a shape from its dimensions.
    ///
    /// Fails with [`Error::InvalidShape`] if any dimension is zero.
    pub fn new(dims: &[usize]) -> Result<Self> {
        if dims.contains(&0) {
            return Err(Error::InvalidShape {
                shape: dims.to_vec(),
                reason: "dimensions must be positive",
            });
        }
        Ok(Self(dims.iter().copied().collect()))
    }

    /// Create a rank-0 (scalar) shape.
    pub fn scalar() -> Self {
        Self(SmallVec::new())
    }

    /// View shape as a slice.
    pub fn as_slice(&self) -> &[usize] {
        self.0.as_slice()
    }

    /// Number of dimensions in this shape.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.0.len()
    }

    /// Product of all dimensions (1 for a scalar).
    #[inline]
    pub fn elements(&self) -> usize {
        self.0.iter().product()
    }

    /// Size of the trailing dimension, if any.
    #[inline]
    pub fn last_dim(&self) -> Option<usize> {
        self.0.last().copied()
    }

    /// The same shape with the trailing dimension replaced by `len`.
    ///
    /// Returns `None` for a scalar shape or a zero `len`.
    pub fn with_last_dim(&self, len: usize) -> Option<Self> {
        if self.0.is_empty() || len == 0 {
            return None;
        }
        let mut dims = self.0.clone();
        if let Some(last) = dims.last_mut() {
            *last = len;
        }
        Some(Self(dims))
    }
}

impl Deref for Shape {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        self.0.as_slice()
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0.as_slice())
    }
}

impl TryFrom<&[usize]> for Shape {
    type Error = Error;

    fn try_from(dims: &[usize]) -> Result<Self> {
        Self::new(dims)
    }
}

impl<const N: usize> TryFrom<[usize; N]> for Shape {
    type Error = Error;

    fn try_from(dims: [usize; N]) -> Result<Self> {
        Self::new(&dims)
    }
}
