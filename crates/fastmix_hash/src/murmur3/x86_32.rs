//! The 32-bit variant, for use in hash tables.

use super::{fmix32, read_partial_u32_le, read_u32_le};
use crate::digest::Digest32;

const C1: u32 = 0xcc9e2d51;
const C2: u32 = 0x1b873593;

#[inline]
const fn mix_k1(k1: u32) -> u32 {
    k1.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2)
}

/// Computes the 32-bit MurmurHash3 digest of the given bytes.
///
/// The bytes are consumed as 4-byte little-endian blocks, and the final 1-3
/// bytes, if any, are folded in as a partial block without the block update
/// step. Any input length, including zero, is valid.
///
/// # Compatibility
/// The partial block starts from a zero word as in canonical MurmurHash3, not
/// from the word of the last full block. Digests of inputs with both full
/// blocks and a tail (such as `b"hello"`) differ from those of hash code that
/// carries the last block word into the tail.
pub const fn murmur3_32(bytes: &[u8], seed: u32) -> Digest32 {
    let n_blocks = bytes.len() / 4;

    let mut h1 = seed;

    let mut block_idx = 0;
    while block_idx < n_blocks {
        let k1 = read_u32_le(bytes, block_idx * 4);

        h1 ^= mix_k1(k1);
        h1 = h1.rotate_left(13);
        h1 = h1.wrapping_mul(5).wrapping_add(0xe6546b64);

        block_idx += 1;
    }

    let tail_offset = n_blocks * 4;
    if bytes.len() > tail_offset {
        h1 ^= mix_k1(read_partial_u32_le(bytes, tail_offset));
    }

    h1 ^= bytes.len() as u32;

    Digest32::from_u32(fmix32(h1))
}
