//! Sources of unpredictable seeds.

use crate::splitmix::splitmix64;
use anyhow::{Result, anyhow};
use fastmix_log::error;
use rand::{TryRngCore, rngs::OsRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// A source of unpredictable `u64` values, consulted when a generator is
/// initialized with a zero seed.
pub trait EntropySource {
    /// Returns an unpredictable `u64`.
    fn entropy_u64(&mut self) -> u64;
}

/// Entropy from the secure random number generator of the operating system.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl OsEntropy {
    /// Reads a `u64` from the operating system's random number generator.
    ///
    /// # Errors
    /// Returns an error if the operating system generator is unavailable.
    pub fn try_entropy_u64(&mut self) -> Result<u64> {
        OsRng
            .try_next_u64()
            .map_err(|err| anyhow!("Could not read entropy from the operating system: {err}"))
    }
}

impl EntropySource for OsEntropy {
    /// Reads a `u64` from the operating system's random number generator,
    /// falling back to a value derived from the system clock if it is
    /// unavailable.
    fn entropy_u64(&mut self) -> u64 {
        self.try_entropy_u64().unwrap_or_else(|err| {
            error!("{err}; using a seed derived from the system clock instead");
            clock_entropy_u64()
        })
    }
}

fn clock_entropy_u64() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64);
    splitmix64(nanos)
}
