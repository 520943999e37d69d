//! Row-wise ordering operations
//!
//! Operations are defined as traits implemented by a client type, following
//! the same shape on every backend:
//!
//! ```text
//! CpuClient
//!   └── implements SortingOps
//!         ├── topk  (k extremal values + indices per row)
//!         └── sort  (full permutation + indices per row)
//! ```
//!
//! Each operation first runs its validator ([`validate_topk`] / [`validate_sort`]),
//! which checks every precondition and produces a [`RowPlan`]. Only then does
//! the backend touch output memory, so a failed call never leaves a partial
//! result behind.
//!
//! Element type support is declared per operation through [`SortOp`] rather
//! than checked ad hoc inside kernels.

mod capability;
mod cpu;
mod traits;
mod validation;

pub use capability::SortOp;
pub use traits::SortingOps;
pub use validation::{RowPlan, validate_sort, validate_topk};
