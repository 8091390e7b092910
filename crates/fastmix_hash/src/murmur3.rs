//! MurmurHash3.
//!
//! All variants read the input as little-endian words regardless of the
//! platform, consume it in full-width blocks and fold the remaining bytes into
//! a final partial block before an avalanche finalization. An empty input is
//! valid and yields a digest that depends only on the seed.
//!
//! Every function is a `const fn`, so digests of constant data can be computed
//! at compile time.

mod x64_128;
mod x86_128;
mod x86_32;

use crate::digest::{Digest32, Digest128};

pub use x64_128::murmur3_128_x64;
pub use x86_32::murmur3_32;
pub use x86_128::{murmur3_128_x86, murmur3_128_x86_canonical};

/// Computes the 32-bit MurmurHash3 digest of the UTF-8 bytes of the given
/// string.
#[inline]
pub const fn murmur3_32_str(string: &str, seed: u32) -> Digest32 {
    murmur3_32(string.as_bytes(), seed)
}

/// Computes the 128-bit MurmurHash3 digest (64-bit lanes) of the UTF-8 bytes
/// of the given string.
#[inline]
pub const fn murmur3_128_x64_str(string: &str, seed: u32) -> Digest128 {
    murmur3_128_x64(string.as_bytes(), seed)
}

/// Forces all bits of a 32-bit hash state to avalanche.
#[inline]
const fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85ebca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2ae35);
    h ^= h >> 16;
    h
}

/// Forces all bits of a 64-bit hash state to avalanche.
#[inline]
const fn fmix64(mut k: u64) -> u64 {
    k ^= k >> 33;
    k = k.wrapping_mul(0xff51afd7ed558ccd);
    k ^= k >> 33;
    k = k.wrapping_mul(0xc4ceb9fe1a85ec53);
    k ^= k >> 33;
    k
}

#[inline]
const fn read_u32_le(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

#[inline]
const fn read_u64_le(bytes: &[u8], offset: usize) -> u64 {
    u64::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
        bytes[offset + 4],
        bytes[offset + 5],
        bytes[offset + 6],
        bytes[offset + 7],
    ])
}

/// Assembles the (at most four) bytes from `offset` up to the end of `bytes`
/// into a word, with byte `i` at bit shift `8 * i`. Missing high bytes are
/// zero.
#[inline]
const fn read_partial_u32_le(bytes: &[u8], offset: usize) -> u32 {
    let mut word = 0;
    let mut idx = 0;
    while idx < 4 && offset + idx < bytes.len() {
        word ^= (bytes[offset + idx] as u32) << (8 * idx);
        idx += 1;
    }
    word
}

/// Like [`read_partial_u32_le`], but for up to eight bytes.
#[inline]
const fn read_partial_u64_le(bytes: &[u8], offset: usize) -> u64 {
    let mut word = 0;
    let mut idx = 0;
    while idx < 8 && offset + idx < bytes.len() {
        word ^= (bytes[offset + idx] as u64) << (8 * idx);
        idx += 1;
    }
    word
}
