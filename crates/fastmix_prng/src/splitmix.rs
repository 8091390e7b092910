//! Seed expansion using the `SplitMix64` algorithm.

/// Increment added to the state before every output.
const GOLDEN_GAMMA: u64 = 0x9E3779B97F4A7C15;

/// A `SplitMix64` generator.
///
/// Each output advances the state by a fixed odd increment and passes the new
/// state through an avalanche mix, so repeated calls starting from the same
/// seed give unrelated-looking outputs. Used to expand a single seed word into
/// the additional state words of larger generators.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Creates a generator starting from the given state. Any state is valid.
    #[inline]
    pub const fn new(state: u64) -> Self {
        Self { state }
    }

    /// The current state, which advances with every output.
    #[inline]
    pub const fn state(&self) -> u64 {
        self.state
    }

    /// Advances the state and returns the next pseudo-random `u64`.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        mix(self.state)
    }
}

/// Generates a pseudo-random `u64` from the given state. Equals the first
/// output of a [`SplitMix64`] created with that state.
#[inline]
pub const fn splitmix64(state: u64) -> u64 {
    mix(state.wrapping_add(GOLDEN_GAMMA))
}

#[inline]
const fn mix(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}
