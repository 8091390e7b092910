//! The 128-bit variant mixed in two 64-bit lanes, for 64-bit platforms.

use super::{fmix64, read_partial_u64_le, read_u64_le};
use crate::digest::Digest128;

const C1: u64 = 0x87c37b91114253d5;
const C2: u64 = 0x4cf5ad432745937f;

#[inline]
const fn mix_k1(k1: u64) -> u64 {
    k1.wrapping_mul(C1).rotate_left(31).wrapping_mul(C2)
}

#[inline]
const fn mix_k2(k2: u64) -> u64 {
    k2.wrapping_mul(C2).rotate_left(33).wrapping_mul(C1)
}

/// Computes the 128-bit MurmurHash3 digest of the given bytes using two 64-bit
/// lanes.
///
/// The bytes are consumed as 16-byte blocks of two little-endian words. Of
/// the final 1-15 bytes, bytes 8-14 are folded into the second lane and bytes
/// 0-7 into the first. The returned lanes are `(h1, h2)`.
///
/// # Compatibility
/// The tail words start from zero as in canonical MurmurHash3, not from the
/// words of the last full block.
pub const fn murmur3_128_x64(bytes: &[u8], seed: u32) -> Digest128 {
    let n_blocks = bytes.len() / 16;

    let mut h1 = seed as u64;
    let mut h2 = seed as u64;

    let mut block_idx = 0;
    while block_idx < n_blocks {
        let offset = block_idx * 16;
        let k1 = read_u64_le(bytes, offset);
        let k2 = read_u64_le(bytes, offset + 8);

        h1 ^= mix_k1(k1);
        h1 = h1.rotate_left(27).wrapping_add(h2);
        h1 = h1.wrapping_mul(5).wrapping_add(0x52dce729);

        h2 ^= mix_k2(k2);
        h2 = h2.rotate_left(31).wrapping_add(h1);
        h2 = h2.wrapping_mul(5).wrapping_add(0x38495ab5);

        block_idx += 1;
    }

    let tail_offset = n_blocks * 16;
    let tail_len = bytes.len() - tail_offset;

    if tail_len > 8 {
        h2 ^= mix_k2(read_partial_u64_le(bytes, tail_offset + 8));
    }
    if tail_len > 0 {
        h1 ^= mix_k1(read_partial_u64_le(bytes, tail_offset));
    }

    let len = bytes.len() as u64;
    h1 ^= len;
    h2 ^= len;

    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);

    h1 = fmix64(h1);
    h2 = fmix64(h2);

    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);

    Digest128::from_lanes(h1, h2)
}
