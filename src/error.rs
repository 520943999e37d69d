//! Error types for rowsort

use crate::dtype::DType;
use thiserror::Error;

/// Result type alias using rowsort's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rowsort operations
///
/// Every variant describes a violated call contract. Operations check all
/// preconditions before touching any output buffer, so an `Err` always means
/// nothing was written.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested axis is not the trailing dimension
    #[error("Invalid axis {axis} for tensor with {ndim} dimensions: only the last axis is supported")]
    InvalidAxis {
        /// The requested axis
        axis: usize,
        /// Number of dimensions of the input
        ndim: usize,
    },

    /// Element type is outside the operation's supported set
    #[error("Unsupported element type {dtype} for operation '{op}'")]
    UnsupportedElementType {
        /// The unsupported dtype
        dtype: DType,
        /// The operation name
        op: &'static str,
    },

    /// Top-k asked for more elements than a row holds
    #[error("Cannot select {k} elements from rows of length {len}")]
    KExceedsRowLength {
        /// Requested k
        k: usize,
        /// Row length along the last axis
        len: usize,
    },

    /// A buffer's declared element type differs from the one the operation needs
    #[error("Element type mismatch for {operand}: expected {expected}, got {got}")]
    ElementTypeMismatch {
        /// Which operand is wrong ("values", "indices", ...)
        operand: &'static str,
        /// Element type required by the operation
        expected: DType,
        /// Element type found on the buffer
        got: DType,
    },

    /// An output buffer does not hold the number of elements the operation writes
    #[error("Shape mismatch for {operand}: expected {expected} elements, got {got}")]
    ShapeMismatch {
        /// Which operand is wrong
        operand: &'static str,
        /// Required element count
        expected: usize,
        /// Actual element count
        got: usize,
    },

    /// A shape contains a zero-sized dimension
    #[error("Invalid shape {shape:?}: {reason}")]
    InvalidShape {
        /// The rejected dimensions
        shape: Vec<usize>,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Byte length of a buffer does not match its shape and dtype
    #[error("Buffer of {got} bytes cannot back {elements} elements of {dtype} ({expected} bytes)")]
    BufferSize {
        /// Element type of the view
        dtype: DType,
        /// Element count implied by the shape
        elements: usize,
        /// Required byte length
        expected: usize,
        /// Actual byte length
        got: usize,
    },

    /// Buffer is not aligned for its element type
    #[error("Buffer is not aligned for element type {dtype}")]
    Misaligned {
        /// Element type of the view
        dtype: DType,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Thread pool construction failed
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(String),
}

impl Error {
    /// Create an invalid axis error
    pub fn invalid_axis(axis: usize, ndim: usize) -> Self {
        Self::InvalidAxis { axis, ndim }
    }

    /// Create an unsupported element type error
    pub fn unsupported(dtype: DType, op: &'static str) -> Self {
        Self::UnsupportedElementType { dtype, op }
    }

    /// Create an element type mismatch error
    pub fn mismatch(operand: &'static str, expected: DType, got: DType) -> Self {
        Self::ElementTypeMismatch {
            operand,
            expected,
            got,
        }
    }

    /// Create a shape (element count) mismatch error
    pub fn shape_mismatch(operand: &'static str, expected: usize, got: usize) -> Self {
        Self::ShapeMismatch {
            operand,
            expected,
            got,
        }
    }
}
