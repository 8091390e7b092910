//! The xoroshiro128+ pseudo-random number generator.

use crate::{
    entropy::{EntropySource, OsEntropy},
    splitmix::SplitMix64,
};
use anyhow::{Result, bail};
use fastmix_log::debug;
use rand::{
    RngCore, SeedableRng,
    rand_core::{impls, le},
};

/// Bit pattern of `1.0_f64`: zero sign, biased exponent 1023 and zero
/// fraction.
const ONE_BITS: u64 = 0x3ff0000000000000;

/// Mask for the 52 fraction bits of an `f64`.
const FRACTION_MASK: u64 = (1 << 52) - 1;

/// The xoroshiro128+ generator, producing 64-bit pseudo-random values from a
/// state of two `u64` words.
///
/// The state is never all zero: every constructor rejects or avoids it, and
/// the state transition maps non-zero states to non-zero states.
///
/// # Concurrency
/// A generator is plain mutable state owned by its user. Threads that need
/// random values concurrently should each have their own generator, for
/// example created with different seeds.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[u64; 2]", into = "[u64; 2]")
)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Xoroshiro128Plus {
    v0: u64,
    v1: u64,
}

impl Xoroshiro128Plus {
    /// Creates a generator from the given seed.
    ///
    /// The first state word is the seed and the second is the first
    /// [`SplitMix64`] output for the seed. A zero seed is first replaced with
    /// a value read from the operating system's random number generator.
    pub fn new(seed: u64) -> Self {
        Self::with_entropy_source(seed, &mut OsEntropy)
    }

    /// Like [`Self::new`], but a zero seed is replaced with a value from the
    /// given entropy source.
    pub fn with_entropy_source(seed: u64, entropy: &mut impl EntropySource) -> Self {
        let seed = if seed == 0 {
            debug!("Seeding xoroshiro128+ generator from entropy source since the seed is zero");
            entropy.entropy_u64()
        } else {
            seed
        };
        Self::from_expanded_seed(seed)
    }

    /// Restores a generator from a state obtained with [`Self::state`].
    ///
    /// # Errors
    /// Returns an error if both state words are zero, since the generator
    /// would then only ever produce zeros.
    pub fn from_state(state: [u64; 2]) -> Result<Self> {
        let [v0, v1] = state;
        if v0 == 0 && v1 == 0 {
            bail!("The all-zero state is not a valid xoroshiro128+ state");
        }
        Ok(Self { v0, v1 })
    }

    /// Returns the current state, from which the generator can be restored
    /// with [`Self::from_state`].
    #[inline]
    pub fn state(&self) -> [u64; 2] {
        [self.v0, self.v1]
    }

    /// Advances the state and returns the next pseudo-random `u64`.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let v0 = self.v0;
        let mut v1 = self.v1;
        let result = v0.wrapping_add(v1);

        v1 ^= v0;
        self.v0 = v0.rotate_left(55) ^ v1 ^ (v1 << 14);
        self.v1 = v1.rotate_left(36);

        result
    }

    /// Returns a pseudo-random `f64` uniformly distributed in `[0, 1)` with
    /// 52 bits of randomness.
    ///
    /// The low 52 bits of the next `u64` become the fraction of a number in
    /// `[1, 2)`, from which one is subtracted.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        let fraction = self.next_u64() & FRACTION_MASK;
        f64::from_bits(ONE_BITS | fraction) - 1.0
    }

    /// Uses the seed as the first state word and expands it into the second.
    /// Never yields the all-zero state: a zero seed expands to a non-zero
    /// word.
    fn from_expanded_seed(seed: u64) -> Self {
        let mut expander = SplitMix64::new(seed);
        Self {
            v0: seed,
            v1: expander.next_u64(),
        }
    }
}

impl TryFrom<[u64; 2]> for Xoroshiro128Plus {
    type Error = anyhow::Error;

    fn try_from(state: [u64; 2]) -> Result<Self> {
        Self::from_state(state)
    }
}

impl From<Xoroshiro128Plus> for [u64; 2] {
    fn from(generator: Xoroshiro128Plus) -> Self {
        generator.state()
    }
}

impl RngCore for Xoroshiro128Plus {
    /// Returns the high 32 bits of the next `u64`, which are the
    /// statistically strongest.
    fn next_u32(&mut self) -> u32 {
        (Self::next_u64(self) >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        Self::next_u64(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst);
    }
}

impl SeedableRng for Xoroshiro128Plus {
    /// The two state words in little-endian byte order.
    type Seed = [u8; 16];

    /// Creates a generator with the given state. The all-zero seed is
    /// replaced with the state from `seed_from_u64(0)`.
    fn from_seed(seed: Self::Seed) -> Self {
        let mut state = [0; 2];
        le::read_u64_into(&seed, &mut state);
        Self::from_state(state).unwrap_or_else(|_| Self::seed_from_u64(0))
    }

    /// Creates a generator deterministically from the given seed, in the same
    /// way as [`Xoroshiro128Plus::new`] except that a zero seed is used as
    /// is rather than replaced with entropy.
    fn seed_from_u64(seed: u64) -> Self {
        Self::from_expanded_seed(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::Rng;

    #[derive(Debug)]
    struct FixedEntropy {
        value: u64,
        reads: usize,
    }

    impl FixedEntropy {
        fn new(value: u64) -> Self {
            Self { value, reads: 0 }
        }
    }

    impl EntropySource for FixedEntropy {
        fn entropy_u64(&mut self) -> u64 {
            self.reads += 1;
            self.value
        }
    }

    fn take(generator: &mut Xoroshiro128Plus, count: usize) -> Vec<u64> {
        (0..count).map(|_| generator.next_u64()).collect()
    }

    #[test]
    fn seed_is_expanded_with_splitmix() {
        let generator = Xoroshiro128Plus::new(1);
        assert_eq!(generator.state(), [1, 0x910a2dec89025cc1]);

        let generator = Xoroshiro128Plus::new(0x0123456789abcdef);
        assert_eq!(generator.state(), [0x0123456789abcdef, 0x157a3807a48faa9d]);
    }

    #[test]
    fn sequence_for_seed_matches_reference_values() {
        let mut generator = Xoroshiro128Plus::new(1);
        assert_eq!(
            take(&mut generator, 5),
            [
                0x910a2dec89025cc2,
                0xab16dbb52ed53b88,
                0xc339190fa569d576,
                0xeb706c89b1fdb0a0,
                0xedf12ffce9d93b9d,
            ]
        );
        assert_eq!(generator.state(), [0x46b4e495c54cf996, 0x1d1331dd1cccffc8]);

        let mut generator = Xoroshiro128Plus::new(0x0123456789abcdef);
        assert_eq!(
            take(&mut generator, 5),
            [
                0x169d7d6f2e3b788c,
                0x8ec85eacccd40896,
                0xeb71aa5aeac7053b,
                0x0ad736e6f895b02f,
                0xd72a48450d4d1773,
            ]
        );
    }

    #[test]
    fn step_follows_xoroshiro128_plus_transition() {
        let mut generator = Xoroshiro128Plus::from_state([1, 2]).unwrap();
        assert_eq!(generator.next_u64(), 3);
        assert_eq!(generator.state(), [0x0080000000000000 ^ 3 ^ (3 << 14), 3 << 36]);
        assert_eq!(generator.next_u64(), 0x008000300000c003);
        assert_eq!(generator.next_u64(), 0x0118406038000363);
    }

    #[test]
    fn non_zero_seed_does_not_consult_entropy_source() {
        let mut entropy = FixedEntropy::new(5);
        let generator = Xoroshiro128Plus::with_entropy_source(9, &mut entropy);
        assert_eq!(entropy.reads, 0);
        assert_eq!(generator, Xoroshiro128Plus::new(9));
    }

    #[test]
    fn zero_seed_is_replaced_from_entropy_source() {
        let mut entropy = FixedEntropy::new(5);
        let generator = Xoroshiro128Plus::with_entropy_source(0, &mut entropy);
        assert_eq!(entropy.reads, 1);
        assert_eq!(generator, Xoroshiro128Plus::new(5));
    }

    #[test]
    fn zero_entropy_still_gives_valid_state() {
        let generator = Xoroshiro128Plus::with_entropy_source(0, &mut FixedEntropy::new(0));
        assert_eq!(generator.state(), [0, 0xe220a8397b1dcdaf]);
    }

    #[test]
    fn zero_seed_gives_unpredictable_valid_state() {
        let first = Xoroshiro128Plus::new(0);
        let second = Xoroshiro128Plus::new(0);
        assert_ne!(first.state(), [0, 0]);
        assert_ne!(second.state(), [0, 0]);
        // Equal with probability 2^-64
        assert_ne!(first, second);
    }

    #[test]
    fn all_zero_state_is_rejected() {
        assert!(Xoroshiro128Plus::from_state([0, 0]).is_err());
        assert!(Xoroshiro128Plus::try_from([0, 0]).is_err());
        assert!(Xoroshiro128Plus::from_state([0, 1]).is_ok());
        assert!(Xoroshiro128Plus::from_state([1, 0]).is_ok());
    }

    #[test]
    fn restored_state_continues_sequence() {
        let mut generator = Xoroshiro128Plus::new(77);
        take(&mut generator, 10);

        let mut restored = Xoroshiro128Plus::from_state(generator.state()).unwrap();
        assert_eq!(take(&mut restored, 20), take(&mut generator, 20));
    }

    #[test]
    fn float_is_built_from_low_52_bits() {
        let mut generator = Xoroshiro128Plus::new(1);
        // First output is 0x910a2dec89025cc2
        let expected = 0xa2dec89025cc2_u64 as f64 / (1_u64 << 52) as f64;
        assert_eq!(generator.next_f64(), expected);
    }

    #[test]
    fn rng_core_next_u32_uses_high_bits() {
        let mut generator = Xoroshiro128Plus::new(1);
        assert_eq!(RngCore::next_u32(&mut generator), 0x910a2dec);
    }

    #[test]
    fn rng_core_fills_short_remainder_from_next_u32() {
        let mut generator = Xoroshiro128Plus::new(1);
        let mut bytes = [0; 12];
        generator.fill_bytes(&mut bytes);

        let mut expected = Vec::new();
        expected.extend_from_slice(&0x910a2dec89025cc2_u64.to_le_bytes());
        expected.extend_from_slice(&0xab16dbb5_u32.to_le_bytes());
        assert_eq!(bytes.as_slice(), expected.as_slice());
    }

    #[test]
    fn rng_core_fills_long_remainder_from_next_u64() {
        let mut generator = Xoroshiro128Plus::new(1);
        let mut bytes = [0; 14];
        generator.fill_bytes(&mut bytes);

        let mut expected = Vec::new();
        expected.extend_from_slice(&0x910a2dec89025cc2_u64.to_le_bytes());
        expected.extend_from_slice(&0xab16dbb52ed53b88_u64.to_le_bytes()[..6]);
        assert_eq!(bytes.as_slice(), expected.as_slice());
    }

    #[test]
    fn seedable_rng_reads_little_endian_state_words() {
        let mut seed = [0; 16];
        seed[0] = 1;
        seed[8] = 2;
        let generator = Xoroshiro128Plus::from_seed(seed);
        assert_eq!(generator.state(), [1, 2]);
    }

    #[test]
    fn seedable_rng_replaces_all_zero_seed_deterministically() {
        let generator = Xoroshiro128Plus::from_seed([0; 16]);
        assert_eq!(generator.state(), [0, 0xe220a8397b1dcdaf]);
        assert_eq!(generator, Xoroshiro128Plus::seed_from_u64(0));
    }

    #[test]
    fn works_with_rand_distributions() {
        let mut generator = Xoroshiro128Plus::seed_from_u64(3);
        for _ in 0..1000 {
            let value = generator.random_range(10..20);
            assert!((10..20).contains(&value));
        }
    }

    #[test]
    fn generators_can_be_moved_to_other_threads() {
        let generators: Vec<_> = (1..=4).map(Xoroshiro128Plus::new).collect();
        let handles: Vec<_> = generators
            .into_iter()
            .map(|mut generator| std::thread::spawn(move || generator.next_u64()))
            .collect();
        let outputs: Vec<u64> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();

        let expected: Vec<u64> = (1..=4)
            .map(|seed| Xoroshiro128Plus::new(seed).next_u64())
            .collect();
        assert_eq!(outputs, expected);
    }

    proptest! {
        #[test]
        fn same_seed_gives_same_sequence(seed in any::<u64>()) {
            let mut first = Xoroshiro128Plus::seed_from_u64(seed);
            let mut second = Xoroshiro128Plus::seed_from_u64(seed);
            prop_assert_eq!(take(&mut first, 64), take(&mut second, 64));
        }
    }

    proptest! {
        #[test]
        fn state_never_becomes_all_zero(seed in 1..u64::MAX) {
            let mut generator = Xoroshiro128Plus::new(seed);
            prop_assert_ne!(generator.state(), [0, 0]);
            for _ in 0..1000 {
                generator.next_u64();
                prop_assert_ne!(generator.state(), [0, 0]);
            }
        }
    }

    proptest! {
        #[test]
        fn floats_are_in_unit_interval(seed in any::<u64>()) {
            let mut generator = Xoroshiro128Plus::seed_from_u64(seed);
            for _ in 0..100 {
                let value = generator.next_f64();
                prop_assert!((0.0..1.0).contains(&value));
            }
        }
    }
}
