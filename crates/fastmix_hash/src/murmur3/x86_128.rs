//! The 128-bit variant mixed in four 32-bit lanes, for 32-bit platforms.

use super::{fmix32, read_partial_u32_le, read_u32_le};
use crate::digest::Digest128;

// Lane `i` multiplies by `(C_i, C_{i+1 mod 4})`
const C1: u32 = 0x239b961b;
const C2: u32 = 0xab0e9789;
const C3: u32 = 0x38b34ae5;
const C4: u32 = 0xa1e38b93;

#[inline]
const fn mix_k1(k1: u32) -> u32 {
    k1.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2)
}

#[inline]
const fn mix_k2(k2: u32) -> u32 {
    k2.wrapping_mul(C2).rotate_left(16).wrapping_mul(C3)
}

#[inline]
const fn mix_k3(k3: u32) -> u32 {
    k3.wrapping_mul(C3).rotate_left(17).wrapping_mul(C4)
}

#[inline]
const fn mix_k4(k4: u32) -> u32 {
    k4.wrapping_mul(C4).rotate_left(18).wrapping_mul(C1)
}

/// Computes the 128-bit MurmurHash3 digest of the given bytes using four
/// 32-bit lanes.
///
/// # Compatibility
/// Both 64-bit lanes of the returned digest are `(h1 << 32) | h2`, so only 64
/// bits of the final state are exposed and the two lanes are always equal.
/// This deviates from canonical MurmurHash3 x86_128 and is kept for inputs
/// hashed with the earlier duplicated-lane output. Use
/// [`murmur3_128_x86_canonical`] for the canonical digest, which emits
/// `(h3 << 32) | h4` as the second lane.
///
/// The tail is folded into zeroed words as in canonical MurmurHash3, not into
/// the words of the last full block. Earlier digests are therefore only
/// reproduced for inputs that are shorter than one block or a whole number of
/// blocks long.
pub const fn murmur3_128_x86(bytes: &[u8], seed: u32) -> Digest128 {
    let [h1, h2, _, _] = hash_lanes(bytes, seed);
    let word = join(h1, h2);
    Digest128::from_lanes(word, word)
}

/// Computes the canonical 128-bit MurmurHash3 x86 digest of the given bytes,
/// exposing all four 32-bit lanes.
///
/// The first lane is always equal to both lanes of [`murmur3_128_x86`] for
/// the same input and seed.
pub const fn murmur3_128_x86_canonical(bytes: &[u8], seed: u32) -> Digest128 {
    let [h1, h2, h3, h4] = hash_lanes(bytes, seed);
    Digest128::from_lanes(join(h1, h2), join(h3, h4))
}

#[inline]
const fn join(high: u32, low: u32) -> u64 {
    ((high as u64) << 32) | low as u64
}

/// Runs the block loop, tail folding and finalization and returns the final
/// lanes `[h1, h2, h3, h4]`.
const fn hash_lanes(bytes: &[u8], seed: u32) -> [u32; 4] {
    let n_blocks = bytes.len() / 16;

    let mut h1 = seed;
    let mut h2 = seed;
    let mut h3 = seed;
    let mut h4 = seed;

    let mut block_idx = 0;
    while block_idx < n_blocks {
        let offset = block_idx * 16;
        let k1 = read_u32_le(bytes, offset);
        let k2 = read_u32_le(bytes, offset + 4);
        let k3 = read_u32_le(bytes, offset + 8);
        let k4 = read_u32_le(bytes, offset + 12);

        h1 ^= mix_k1(k1);
        h1 = h1.rotate_left(19).wrapping_add(h2);
        h1 = h1.wrapping_mul(5).wrapping_add(0x561ccd1b);

        h2 ^= mix_k2(k2);
        h2 = h2.rotate_left(17).wrapping_add(h3);
        h2 = h2.wrapping_mul(5).wrapping_add(0x0bcaa747);

        h3 ^= mix_k3(k3);
        h3 = h3.rotate_left(15).wrapping_add(h4);
        h3 = h3.wrapping_mul(5).wrapping_add(0x96cd1c35);

        h4 ^= mix_k4(k4);
        h4 = h4.rotate_left(13).wrapping_add(h1);
        h4 = h4.wrapping_mul(5).wrapping_add(0x32ac3b17);

        block_idx += 1;
    }

    // The 1-15 tail bytes are folded from the highest lane down. A lane is
    // mixed whenever at least one of its bytes is present, and every lane
    // below a present lane is full.
    let tail_offset = n_blocks * 16;
    let tail_len = bytes.len() - tail_offset;

    if tail_len > 12 {
        h4 ^= mix_k4(read_partial_u32_le(bytes, tail_offset + 12));
    }
    if tail_len > 8 {
        h3 ^= mix_k3(read_partial_u32_le(bytes, tail_offset + 8));
    }
    if tail_len > 4 {
        h2 ^= mix_k2(read_partial_u32_le(bytes, tail_offset + 4));
    }
    if tail_len > 0 {
        h1 ^= mix_k1(read_partial_u32_le(bytes, tail_offset));
    }

    let len = bytes.len() as u32;
    h1 ^= len;
    h2 ^= len;
    h3 ^= len;
    h4 ^= len;

    h1 = h1.wrapping_add(h2).wrapping_add(h3).wrapping_add(h4);
    h2 = h2.wrapping_add(h1);
    h3 = h3.wrapping_add(h1);
    h4 = h4.wrapping_add(h1);

    h1 = fmix32(h1);
    h2 = fmix32(h2);
    h3 = fmix32(h3);
    h4 = fmix32(h4);

    h1 = h1.wrapping_add(h2).wrapping_add(h3).wrapping_add(h4);
    h2 = h2.wrapping_add(h1);
    h3 = h3.wrapping_add(h1);
    h4 = h4.wrapping_add(h1);

    [h1, h2, h3, h4]
}
