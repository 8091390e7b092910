//! Benchmarking using `criterion`.

pub use criterion::*;

use crate::benchmark::Benchmarker;

/// Defines a function `$name(&mut Criterion)` that runs the benchmark function
/// `$group::$name` under criterion. When `bytes = $len` is given, criterion
/// also reports the throughput for `$len` bytes consumed per call.
#[macro_export]
macro_rules! define_criterion_target {
    ($group:ident, $name:ident) => {
        pub fn $name(c: &mut $crate::benchmark::criterion::Criterion) {
            $group::$name(
                $crate::benchmark::criterion::CriterionFunctionBenchmarker::new(
                    c,
                    stringify!($name),
                ),
            );
        }
    };
    ($group:ident, $name:ident, bytes = $len:expr) => {
        pub fn $name(c: &mut $crate::benchmark::criterion::Criterion) {
            $group::$name(
                $crate::benchmark::criterion::CriterionFunctionBenchmarker::new(
                    c,
                    stringify!($name),
                )
                .with_bytes_per_call($len),
            );
        }
    };
}

#[allow(missing_debug_implementations)]
pub struct CriterionFunctionBenchmarker<'a> {
    c: &'a mut Criterion,
    id: &'static str,
    bytes_per_call: Option<usize>,
}

impl<'a> CriterionFunctionBenchmarker<'a> {
    pub fn new(c: &'a mut Criterion, id: &'static str) -> Self {
        Self {
            c,
            id,
            bytes_per_call: None,
        }
    }

    pub fn with_bytes_per_call(mut self, bytes_per_call: usize) -> Self {
        self.bytes_per_call = Some(bytes_per_call);
        self
    }
}

impl Benchmarker for CriterionFunctionBenchmarker<'_> {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T) {
        let mut benchmark_group = self.c.benchmark_group(self.id);

        if let Some(bytes_per_call) = self.bytes_per_call {
            benchmark_group.throughput(Throughput::Bytes(bytes_per_call as u64));
        }

        benchmark_group.bench_function(self.id, |b| b.iter(&mut *f));
        benchmark_group.finish();
    }
}

pub fn config() -> Criterion {
    Criterion::default()
}
