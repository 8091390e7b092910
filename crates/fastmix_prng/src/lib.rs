//! Fast non-cryptographic pseudo-random number generation.
//!
//! [`Xoroshiro128Plus`] is a small, fast generator with a two-word state,
//! seeded from a single `u64` by expanding it with [`SplitMix64`]. A zero seed
//! is replaced with a value from an [`EntropySource`]. The generator is not
//! suitable for security-sensitive use.

#[cfg(feature = "benchmark")]
pub mod benchmark;
pub mod entropy;
pub mod splitmix;
pub mod xoroshiro;

pub use entropy::{EntropySource, OsEntropy};
pub use splitmix::{SplitMix64, splitmix64};
pub use xoroshiro::Xoroshiro128Plus;
