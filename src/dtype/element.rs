//! Element trait for mapping Rust types to DType

use super::DType;
use bytemuck::Pod;
use std::cmp::Ordering;

/// Trait for types that can be elements of a sortable view
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - rows are handed to worker threads by reference
/// - `Pod` - zero-copy reinterpretation of caller-owned byte buffers (bytemuck)
/// - `PartialOrd` - natural comparison, refined by [`Element::total_cmp`]
pub trait Element: Copy + Send + Sync + Pod + PartialOrd + 'static {
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Total order used by every comparator in the crate.
    ///
    /// Integers use their natural order. Floats use IEEE 754 `totalOrder`:
    /// `-NaN < -inf < ... < -0.0 < +0.0 < ... < +inf < +NaN`.
    fn total_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! impl_element_int {
    ($($ty:ty => $dtype:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                const DTYPE: DType = DType::$dtype;

                #[inline]
                fn total_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

macro_rules! impl_element_float {
    ($($ty:ty => $dtype:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                const DTYPE: DType = DType::$dtype;

                #[inline]
                fn total_cmp(&self, other: &Self) -> Ordering {
                    <$ty>::total_cmp(self, other)
                }
            }
        )*
    };
}

impl_element_int!(i64 => I64, i32 => I32, u32 => U32, u8 => U8);
impl_element_float!(f64 => F64, f32 => F32);

#[cfg(feature = "f16")]
impl_element_float!(half::f16 => F16, half::bf16 => BF16);
