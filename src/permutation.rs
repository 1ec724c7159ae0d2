use crate::error::PermutationError;
use crate::params::{PermutationConfig, Triplet};
use crate::xorshift::XorShift;

pub const NUM_ROUNDS: usize = 64;
pub const NUM_MASKS: usize = NUM_ROUNDS * 2;

const ONES: u64 = u64::MAX;

/// A seeded bijection on `u64`.
///
/// Round `i` picks one of two masks by the current value of bit `i` and
/// flips every other bit the mask leaves clear. Bit `i` itself is never
/// touched, so running the same round again undoes it, and `unmap` just
/// runs the rounds of `map` backwards.
///
/// ```
/// use xorperm::Permutation;
///
/// let perm = Permutation::new(1, (13, 7, 17));
/// let x = 0x0123_4567_89ab_cdef;
/// assert_eq!(perm.unmap(perm.map(x)), x);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    masks: [u64; NUM_MASKS],
}

impl Permutation {
    /// Builds the mask table without looking at the parameters.
    ///
    /// The result is always a bijection, but a zero seed gives an all-zero
    /// table and a triplet without full period mixes poorly. Use
    /// [`Permutation::try_new`] to reject a zero seed up front.
    pub const fn new(seed: u64, triplet: (u32, u32, u32)) -> Self {
        Self::with_triplet(seed, Triplet::from_tuple(triplet))
    }

    pub const fn with_triplet(seed: u64, triplet: Triplet) -> Self {
        let mut xorshift = XorShift::new(seed, triplet);
        let mut masks = [0; NUM_MASKS];

        let mut i = 0;
        while i < NUM_MASKS {
            masks[i] = xorshift.next() & ((1 << (i >> 1)) ^ ONES);
            i += 1;
        }

        Self { masks }
    }

    pub fn try_new(seed: u64, triplet: (u32, u32, u32)) -> Result<Self, PermutationError> {
        let triplet = Triplet::from(triplet);
        if seed == 0 {
            let err = PermutationError::ZeroSeed;
            tracing::warn!(seed, %triplet, %err, "rejected permutation parameters");
            return Err(err);
        }

        tracing::debug!(seed, %triplet, "building permutation");
        Ok(Self::with_triplet(seed, triplet))
    }

    pub fn from_config(config: &PermutationConfig) -> Result<Self, PermutationError> {
        Self::try_new(config.seed, config.triplet.into())
    }

    #[inline]
    pub const fn masks(&self) -> &[u64; NUM_MASKS] {
        &self.masks
    }

    pub const fn map(&self, mut num: u64) -> u64 {
        let mut i = 0;
        while i < NUM_ROUNDS {
            num = self.round(num, i);
            i += 1;
        }
        num
    }

    pub const fn unmap(&self, mut num: u64) -> u64 {
        let mut i = NUM_ROUNDS;
        while i > 0 {
            i -= 1;
            num = self.round(num, i);
        }
        num
    }

    #[inline(always)]
    const fn round(&self, num: u64, i: usize) -> u64 {
        let bit: u64 = 1 << i;
        let b = ((num & bit) >> i) as usize;
        let mask = self.masks[(i << 1) + b];
        if b == 0 {
            num ^ (ONES ^ (mask | (bit ^ (num & bit))))
        } else {
            num ^ (ONES ^ (mask | (num & bit)))
        }
    }
}
