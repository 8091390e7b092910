//! Benchmarking utilities for the fastmix crates.

pub mod benchmark;
