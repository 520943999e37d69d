//! Per-operation element type capability sets

use crate::dtype::DType;

#[cfg(not(feature = "f16"))]
const SORT_DTYPES: &[DType] = &[
    DType::F64,
    DType::F32,
    DType::I64,
    DType::I32,
    DType::U32,
    DType::U8,
];

#[cfg(feature = "f16")]
const SORT_DTYPES: &[DType] = &[
    DType::F64,
    DType::F32,
    DType::F16,
    DType::BF16,
    DType::I64,
    DType::I32,
    DType::U32,
    DType::U8,
];

const TOPK_DTYPES: &[DType] = &[DType::F32];

/// Row-wise ordering operations and the element types each one accepts
///
/// Top-k is deliberately narrower than sort: its value output is fixed to
/// `F32`. Every top-k type is also a sort type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SortOp {
    /// Select the k extremal elements of each row
    TopK,
    /// Fully order each row
    Sort,
}

impl SortOp {
    /// Operation name used in errors and logs
    pub const fn name(self) -> &'static str {
        match self {
            Self::TopK => "topk",
            Self::Sort => "sort",
        }
    }

    /// Input element types this operation accepts
    pub const fn supported_dtypes(self) -> &'static [DType] {
        match self {
            Self::TopK => TOPK_DTYPES,
            Self::Sort => SORT_DTYPES,
        }
    }

    /// Whether `dtype` is an accepted input element type
    pub fn supports(self, dtype: DType) -> bool {
        self.supported_dtypes().contains(&dtype)
    }
}
