use fastmix::benchmark::benchmarks::{
    splitmix,
    xoroshiro::{self, FILL_LEN},
};
use fastmix_profiling::{benchmark::criterion, define_criterion_target};

define_criterion_target!(xoroshiro, next_u64);
define_criterion_target!(xoroshiro, next_f64);
define_criterion_target!(xoroshiro, fill_bytes, bytes = FILL_LEN);
define_criterion_target!(splitmix, next_mixed_u64);

criterion::criterion_group!(
    name = benches;
    config = criterion::config();
    targets =
        next_u64,
        next_f64,
        fill_bytes,
        next_mixed_u64,
);
criterion::criterion_main!(benches);
