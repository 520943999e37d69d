//! Helper macros for CPU operation dispatch

/// Macro for dtype dispatch to typed kernel calls
///
/// Matches on a [`DType`](crate::dtype::DType) and runs the block with `$T`
/// bound to the corresponding Rust element type.
/// Usage: `dispatch_dtype!(dtype, T => { code using T }, "op_name")`
///
/// F16 and BF16 are dispatched when the "f16" feature is enabled.
/// Tags with no element type (Bool, or half floats without the feature)
/// return `UnsupportedElementType`.
macro_rules! dispatch_dtype {
    ($dtype:expr, $T:ident => $body:block, $error_op:expr) => {
        match $dtype {
            $crate::dtype::DType::F64 => {
                type $T = f64;
                $body
            }
            $crate::dtype::DType::F32 => {
                type $T = f32;
                $body
            }
            $crate::dtype::DType::F16 => {
                #[cfg(feature = "f16")]
                {
                    type $T = half::f16;
                    $body
                }
                #[cfg(not(feature = "f16"))]
                {
                    return Err($crate::error::Error::unsupported($dtype, $error_op));
                }
            }
            $crate::dtype::DType::BF16 => {
                #[cfg(feature = "f16")]
                {
                    type $T = half::bf16;
                    $body
                }
                #[cfg(not(feature = "f16"))]
                {
                    return Err($crate::error::Error::unsupported($dtype, $error_op));
                }
            }
            $crate::dtype::DType::I64 => {
                type $T = i64;
                $body
            }
            $crate::dtype::DType::I32 => {
                type $T = i32;
                $body
            }
            $crate::dtype::DType::U32 => {
                type $T = u32;
                $body
            }
            $crate::dtype::DType::U8 => {
                type $T = u8;
                $body
            }
            $crate::dtype::DType::Bool => {
                return Err($crate::error::Error::unsupported($dtype, $error_op));
            }
        }
    };
}

pub(crate) use dispatch_dtype;
