use crate::xoroshiro::Xoroshiro128Plus;
use fastmix_profiling::benchmark::Benchmarker;
use rand::{RngCore, SeedableRng};
use std::hint::black_box;

const SEED: u64 = 0x2545f4914f6cdd1d;
pub const FILL_LEN: usize = 1024;

pub fn next_u64(benchmarker: impl Benchmarker) {
    let mut generator = Xoroshiro128Plus::seed_from_u64(SEED);
    benchmarker.benchmark(&mut || generator.next_u64());
}

pub fn next_f64(benchmarker: impl Benchmarker) {
    let mut generator = Xoroshiro128Plus::seed_from_u64(SEED);
    benchmarker.benchmark(&mut || generator.next_f64());
}

pub fn fill_bytes(benchmarker: impl Benchmarker) {
    let mut generator = Xoroshiro128Plus::seed_from_u64(SEED);
    let mut buffer = vec![0; FILL_LEN];
    benchmarker.benchmark(&mut || {
        generator.fill_bytes(black_box(&mut buffer));
        buffer[0]
    });
}
