//! CPU runtime implementation
//!
//! Rows are independent, so the CPU runtime fans them out across a rayon
//! pool when the `rayon` feature is enabled and the input is large enough.
//! Each worker owns its index scratch buffer and writes a disjoint slice of
//! the outputs; no locking is involved and the result is identical to the
//! sequential path.

mod client;
mod config;
pub(crate) mod helpers;
pub(crate) mod kernels;
pub(crate) mod sort;

pub use client::CpuClient;
pub use config::ParallelismConfig;
