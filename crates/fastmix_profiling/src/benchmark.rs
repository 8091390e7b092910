//! Repeatedly executing and timing benchmark closures.

#[cfg(feature = "criterion")]
pub mod criterion;
pub mod throughput;

use fastmix_log::info;
use std::{
    hint::black_box,
    time::{Duration, Instant},
};

/// Something that can repeatedly execute and measure a closure.
pub trait Benchmarker {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T);
}

/// Executes a closure in a loop until a given duration has passed, then logs
/// the number of calls and the average time per call.
///
/// The closure is always executed at least once.
#[derive(Clone, Debug)]
pub struct DurationBenchmarker {
    duration: Duration,
    delayer: Delayer,
}

/// Postpones the start of a benchmark until a given time has passed since the
/// program was started, which makes it easier to attach an external profiler.
#[derive(Clone, Debug)]
pub struct Delayer {
    program_start: Instant,
    delay: Duration,
}

/// Number of calls of a closure and the total time they took.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallTiming {
    pub calls: u64,
    pub elapsed: Duration,
}

impl DurationBenchmarker {
    pub fn new(duration: Duration, delayer: Delayer) -> Self {
        Self { duration, delayer }
    }
}

impl Benchmarker for DurationBenchmarker {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T) {
        self.delayer.wait();
        let timing = time_calls(f, |calls, elapsed| calls > 0 && elapsed > self.duration);
        info!(
            "Ran {} calls in {:.2} ms ({:.1} ns per call)",
            timing.calls,
            timing.elapsed.as_secs_f64() * 1e3,
            timing.nanos_per_call()
        );
    }
}

impl Delayer {
    pub fn new(program_start: Instant, delay_seconds: f64) -> Self {
        Self {
            program_start,
            delay: Duration::from_secs_f64(delay_seconds),
        }
    }

    fn wait(&self) {
        let remaining = self.delay.saturating_sub(self.program_start.elapsed());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
    }
}

impl CallTiming {
    /// Average time per call in nanoseconds. Zero if there were no calls.
    pub fn nanos_per_call(&self) -> f64 {
        if self.calls == 0 {
            0.0
        } else {
            self.elapsed.as_secs_f64() * 1e9 / self.calls as f64
        }
    }
}

/// Calls `f` until `is_done(calls, elapsed)` returns `true`, checking before
/// every call, and returns how many calls were made and how long they took.
pub(crate) fn time_calls<T>(
    f: &mut impl FnMut() -> T,
    mut is_done: impl FnMut(u64, Duration) -> bool,
) -> CallTiming {
    let start = Instant::now();
    let mut calls = 0;
    loop {
        let elapsed = start.elapsed();
        if is_done(calls, elapsed) {
            return CallTiming { calls, elapsed };
        }
        black_box(f());
        calls += 1;
    }
}

/// Defines an enum with one variant per benchmark function, named by the
/// camel-cased module and function names. The enum gets a public `all`
/// function listing every variant and a private `execute` method dispatching
/// to the function.
///
/// The calling crate must depend on `pastey`, and on `clap` if it has a `cli`
/// feature.
#[macro_export]
macro_rules! define_target_enum {
(
    $name:ident,
    $benchmarks_mod:path,
    $(
        $module:ident => {
            $($func:ident),* $(,)?
        }
    ),* $(,)?
) => {
    ::pastey::paste! {
        #[allow(clippy::enum_variant_names)]
        #[cfg_attr(feature = "cli", derive(::clap::ValueEnum))]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
        pub enum $name {
            $(
                $( [<$module:camel $func:camel>] ),*
            ),*
        }

        impl $name {
            /// Every target, in declaration order.
            pub fn all() -> Vec<Self> {
                vec![$($(Self::[<$module:camel $func:camel>]),*),*]
            }

            fn execute(&self, benchmarker: impl $crate::benchmark::Benchmarker) {
                match self {
                    $(
                        $( Self::[<$module:camel $func:camel>] => $benchmarks_mod::$module::$func(benchmarker), )*
                    )*
                }
            }
        }
    }};
}

/// Runs the given benchmark for `duration` seconds after waiting until `delay`
/// seconds have passed since this function was called.
pub fn benchmark(execute: impl Fn(DurationBenchmarker), duration: f64, delay: f64) {
    let delayer = Delayer::new(Instant::now(), delay);
    execute(DurationBenchmarker::new(
        Duration::from_secs_f64(duration),
        delayer,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    #[test]
    fn duration_benchmarker_runs_closure_at_least_once() {
        let count = Cell::new(0);
        benchmark(
            |benchmarker| benchmarker.benchmark(&mut || count.set(count.get() + 1)),
            0.0,
            0.0,
        );
        assert!(count.get() >= 1);
    }

    #[test]
    fn timing_stops_when_condition_is_met() {
        let mut count = 0;
        let timing = time_calls(&mut || count += 1, |calls, _| calls == 7);
        assert_eq!(timing.calls, 7);
        assert_eq!(count, 7);
    }

    #[test]
    fn timing_without_calls_has_zero_time_per_call() {
        let timing = time_calls(&mut || (), |_, _| true);
        assert_eq!(timing.calls, 0);
        assert_eq!(timing.nanos_per_call(), 0.0);
    }

    #[test]
    fn delayer_waits_until_delay_has_passed_since_start() {
        let start = Instant::now();
        Delayer::new(start, 0.01).wait();
        assert!(start.elapsed() >= Duration::from_millis(10));
    }
}
