//! Data type system for rowsort views
//!
//! This module provides the `DType` enum tagging the element kind of a buffer,
//! and the [`Element`] trait connecting Rust types to those tags.

mod element;

pub use element::Element;

use std::fmt;

/// Element types a tensor view can be tagged with
///
/// The set is closed: every kind the crate knows about is listed here, and
/// each operation declares which subset it accepts (see
/// [`SortOp::supported_dtypes`](crate::ops::SortOp::supported_dtypes)).
/// A tag outside that subset is rejected, never coerced.
///
/// # Discriminant Values (Serialization Stability)
///
/// - Floats: 0-9 (F64=0, F32=1, F16=2, BF16=3)
/// - Signed ints: 10-19 (I64=10, I32=11)
/// - Unsigned ints: 20-29 (U32=21, U8=23)
/// - Bool: 30
///
/// Existing values are never changed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum DType {
    /// 64-bit floating point
    F64 = 0,
    /// 32-bit floating point
    F32 = 1,
    /// 16-bit floating point (IEEE 754)
    F16 = 2,
    /// 16-bit brain floating point
    BF16 = 3,
    /// 64-bit signed integer
    I64 = 10,
    /// 32-bit signed integer
    I32 = 11,
    /// 32-bit unsigned integer, also the index type of every output
    U32 = 21,
    /// 8-bit unsigned integer
    U8 = 23,
    /// Boolean type
    Bool = 30,
}

impl DType {
    /// Element type of every index output buffer
    pub const INDEX: DType = DType::U32;

    /// Size of one element in bytes
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Self::F64 | Self::I64 => 8,
            Self::F32 | Self::I32 | Self::U32 => 4,
            Self::F16 | Self::BF16 => 2,
            Self::U8 | Self::Bool => 1,
        }
    }

    /// Short name for display (e.g., "f32", "u32")
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::F64 => "f64",
            Self::F32 => "f32",
            Self::F16 => "f16",
            Self::BF16 => "bf16",
            Self::I64 => "i64",
            Self::I32 => "i32",
            Self::U32 => "u32",
            Self::U8 => "u8",
            Self::Bool => "bool",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}
