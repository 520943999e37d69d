//! Runtime backends for row-wise operations
//!
//! ```text
//! CpuClient (dispatches operations, owns parallelism settings)
//! ├── ParallelismConfig (thread count, rows per task)
//! └── kernels (per-row selection and sort routines)
//! ```

pub mod cpu;
