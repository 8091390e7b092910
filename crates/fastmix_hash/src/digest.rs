//! Fixed-width hash digests.

use bytemuck::{Pod, Zeroable};
use std::fmt;

/// A 32-bit digest.
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Zeroable, Pod)]
pub struct Digest32(u32);

/// A 128-bit digest, stored as two 64-bit lanes.
///
/// Both lanes are always set together when the digest is created; there is no
/// way to obtain a digest with only one lane written.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Zeroable, Pod)]
pub struct Digest128 {
    lanes: [u64; 2],
}

impl Digest32 {
    #[inline]
    pub const fn from_u32(value: u32) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn to_u32(self) -> u32 {
        self.0
    }
}

impl From<Digest32> for u32 {
    fn from(digest: Digest32) -> Self {
        digest.0
    }
}

impl fmt::Display for Digest32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

impl Digest128 {
    /// Creates a digest from its two lanes.
    #[inline]
    pub const fn from_lanes(first: u64, second: u64) -> Self {
        Self {
            lanes: [first, second],
        }
    }

    #[inline]
    pub const fn first_lane(&self) -> u64 {
        self.lanes[0]
    }

    #[inline]
    pub const fn second_lane(&self) -> u64 {
        self.lanes[1]
    }

    #[inline]
    pub const fn to_lanes(self) -> [u64; 2] {
        self.lanes
    }

    /// Returns the digest as a single `u128` with the first lane in the high
    /// 64 bits.
    #[inline]
    pub const fn to_u128(self) -> u128 {
        ((self.lanes[0] as u128) << 64) | self.lanes[1] as u128
    }

    /// Returns the 16 bytes of the digest: the first lane in little-endian
    /// order followed by the second lane in little-endian order. This is the
    /// byte string the reference implementation writes to its output buffer.
    pub const fn to_le_bytes(self) -> [u8; 16] {
        let first = self.lanes[0].to_le_bytes();
        let second = self.lanes[1].to_le_bytes();

        let mut bytes = [0; 16];
        let mut idx = 0;
        while idx < 8 {
            bytes[idx] = first[idx];
            bytes[idx + 8] = second[idx];
            idx += 1;
        }
        bytes
    }
}

impl From<Digest128> for u128 {
    fn from(digest: Digest128) -> Self {
        digest.to_u128()
    }
}

impl From<Digest128> for [u64; 2] {
    fn from(digest: Digest128) -> Self {
        digest.lanes
    }
}

impl fmt::Display for Digest128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}{:016x}", self.lanes[0], self.lanes[1])
    }
}
