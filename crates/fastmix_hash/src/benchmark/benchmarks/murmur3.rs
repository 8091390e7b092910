use crate::murmur3::{murmur3_32, murmur3_128_x64, murmur3_128_x86};
use fastmix_profiling::benchmark::Benchmarker;
use std::hint::black_box;

/// Spans three 4-byte blocks and a 1-byte tail, or no 16-byte block and a
/// 13-byte tail.
pub const SHORT_INPUT_LEN: usize = 13;
pub const LONG_INPUT_LEN: usize = 4096;

pub fn hash_32_short(benchmarker: impl Benchmarker) {
    let input = create_input(SHORT_INPUT_LEN);
    benchmarker.benchmark(&mut || murmur3_32(black_box(&input), 0));
}

pub fn hash_32_long(benchmarker: impl Benchmarker) {
    let input = create_input(LONG_INPUT_LEN);
    benchmarker.benchmark(&mut || murmur3_32(black_box(&input), 0));
}

pub fn hash_128_x86_short(benchmarker: impl Benchmarker) {
    let input = create_input(SHORT_INPUT_LEN);
    benchmarker.benchmark(&mut || murmur3_128_x86(black_box(&input), 0));
}

pub fn hash_128_x86_long(benchmarker: impl Benchmarker) {
    let input = create_input(LONG_INPUT_LEN);
    benchmarker.benchmark(&mut || murmur3_128_x86(black_box(&input), 0));
}

pub fn hash_128_x64_short(benchmarker: impl Benchmarker) {
    let input = create_input(SHORT_INPUT_LEN);
    benchmarker.benchmark(&mut || murmur3_128_x64(black_box(&input), 0));
}

pub fn hash_128_x64_long(benchmarker: impl Benchmarker) {
    let input = create_input(LONG_INPUT_LEN);
    benchmarker.benchmark(&mut || murmur3_128_x64(black_box(&input), 0));
}

fn create_input(len: usize) -> Vec<u8> {
    (0..len).map(|idx| (idx as u8).wrapping_mul(31)).collect()
}
