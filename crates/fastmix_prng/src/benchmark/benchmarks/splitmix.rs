use crate::splitmix::SplitMix64;
use fastmix_profiling::benchmark::Benchmarker;

pub fn next_mixed_u64(benchmarker: impl Benchmarker) {
    let mut generator = SplitMix64::new(0x2545f4914f6cdd1d);
    benchmarker.benchmark(&mut || generator.next_u64());
}
