//! Measuring how fast a function consumes bytes.

use crate::benchmark::{Benchmarker, CallTiming, time_calls};
use std::{fmt, time::Duration};

/// Throughput of a function over a fixed-size input, measured over a number
/// of repeated calls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Throughput {
    bytes_per_call: usize,
    timing: CallTiming,
}

/// Executes a closure a fixed number of times and records the resulting
/// [`Throughput`].
#[derive(Debug)]
pub struct ThroughputBenchmarker<'a> {
    calls: u64,
    throughput: &'a mut Throughput,
}

impl Throughput {
    /// Number of bytes consumed by each call.
    pub fn bytes_per_call(&self) -> usize {
        self.bytes_per_call
    }

    /// Number of calls that were timed.
    pub fn calls(&self) -> u64 {
        self.timing.calls
    }

    /// Total time spent in the timed calls.
    pub fn elapsed(&self) -> Duration {
        self.timing.elapsed
    }

    /// Average time per call in nanoseconds.
    pub fn nanos_per_call(&self) -> f64 {
        self.timing.nanos_per_call()
    }

    /// Average time per consumed byte in nanoseconds. Zero for empty inputs.
    pub fn nanos_per_byte(&self) -> f64 {
        if self.bytes_per_call == 0 {
            0.0
        } else {
            self.nanos_per_call() / self.bytes_per_call as f64
        }
    }

    /// Consumed megabytes (10^6 bytes) per second. Infinite if no measurable
    /// time elapsed.
    pub fn megabytes_per_second(&self) -> f64 {
        let total_bytes = self.bytes_per_call as f64 * self.timing.calls as f64;
        let seconds = self.timing.elapsed.as_secs_f64();
        if seconds == 0.0 {
            f64::INFINITY
        } else {
            total_bytes / seconds * 1e-6
        }
    }
}

impl fmt::Display for Throughput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:5} bytes {:10.2} MB/s {:9.3} ns/call {:7.3} ns/byte",
            self.bytes_per_call,
            self.megabytes_per_second(),
            self.nanos_per_call(),
            self.nanos_per_byte()
        )
    }
}

impl Benchmarker for ThroughputBenchmarker<'_> {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T) {
        let calls = self.calls;
        self.throughput.timing = time_calls(f, |done, _| done == calls);
    }
}

/// Hands `execute` a benchmarker that makes `calls` calls of the closure it
/// is given, and returns the throughput assuming each call consumes
/// `bytes_per_call` bytes. The throughput has zero calls if `execute` never
/// uses the benchmarker.
pub fn measure_throughput(
    bytes_per_call: usize,
    calls: u64,
    execute: impl FnOnce(ThroughputBenchmarker<'_>),
) -> Throughput {
    let mut throughput = Throughput {
        bytes_per_call,
        timing: CallTiming {
            calls: 0,
            elapsed: Duration::ZERO,
        },
    };
    execute(ThroughputBenchmarker {
        calls,
        throughput: &mut throughput,
    });
    throughput
}
