//! Benchmark targets for both engines, runnable by name.

pub mod benchmarks {
    pub use fastmix_hash::benchmark::benchmarks::murmur3;
    pub use fastmix_prng::benchmark::benchmarks::{splitmix, xoroshiro};
}

fastmix_profiling::define_target_enum! {
    Target,
    crate::benchmark::benchmarks,
    murmur3 => {
        hash_32_short,
        hash_32_long,
        hash_128_x86_short,
        hash_128_x86_long,
        hash_128_x64_short,
        hash_128_x64_long,
    },
    xoroshiro => {
        next_u64,
        next_f64,
        fill_bytes,
    },
    splitmix => {
        next_mixed_u64,
    },
}

pub fn benchmark(target: Target, duration: f64, delay: f64) {
    fastmix_profiling::benchmark::benchmark(
        |benchmarker| target.execute(benchmarker),
        duration,
        delay,
    );
}
