//! Fast non-cryptographic hashing and pseudo-random number generation.
//!
//! - [`hash`]: the MurmurHash3 family in its 32-bit, x86 128-bit and x64
//!   128-bit variants.
//! - [`prng`]: the xoroshiro128+ generator with SplitMix64 seed expansion.

#[cfg(feature = "benchmark")]
pub mod benchmark;

pub use fastmix_hash as hash;
pub use fastmix_log as log;
pub use fastmix_prng as prng;
