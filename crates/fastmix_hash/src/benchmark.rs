pub mod benchmarks;
