//! CPU implementations of operation traits

mod sorting;
