//! Operation traits

mod sorting;

pub use sorting::SortingOps;
