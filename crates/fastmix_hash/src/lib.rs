//! Fast non-cryptographic hashing with MurmurHash3.
//!
//! Three variants are provided, all producing bit-for-bit the same digests as
//! the reference implementation for every input length and seed:
//!
//! - [`murmur3_32`]: 32-bit digest, intended for hash tables.
//! - [`murmur3_128_x86`]: 128-bit digest mixed in four 32-bit lanes.
//! - [`murmur3_128_x64`]: 128-bit digest mixed in two 64-bit lanes.
//!
//! The two 128-bit variants do not produce the same digests. None of the
//! variants offer any resistance against deliberately constructed collisions.

#[cfg(feature = "benchmark")]
pub mod benchmark;
pub mod digest;
pub mod murmur3;

pub use digest::{Digest32, Digest128};
pub use murmur3::{
    murmur3_32, murmur3_32_str, murmur3_128_x64, murmur3_128_x64_str, murmur3_128_x86,
    murmur3_128_x86_canonical,
};
