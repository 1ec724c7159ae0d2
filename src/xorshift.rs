use rand::RngCore;

use crate::params::Triplet;

/// Marsaglia's 64-bit XorShift generator.
///
/// A zero state is a fixed point, so a generator seeded with `0` yields `0`
/// forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XorShift {
    state: u64,
    triplet: Triplet,
}

impl XorShift {
    #[inline]
    pub const fn new(seed: u64, triplet: Triplet) -> Self {
        Self { state: seed, triplet }
    }

    #[inline]
    pub const fn state(&self) -> u64 {
        self.state
    }

    pub const fn next(&mut self) -> u64 {
        self.state ^= shl(self.state, self.triplet.a);
        self.state ^= shr(self.state, self.triplet.b);
        self.state ^= shl(self.state, self.triplet.c);
        self.state
    }
}

// Shifting by 64 or more drops every bit.
#[inline(always)]
const fn shl(x: u64, shift: u32) -> u64 {
    match x.checked_shl(shift) {
        Some(v) => v,
        None => 0
    }
}

#[inline(always)]
const fn shr(x: u64, shift: u32) -> u64 {
    match x.checked_shr(shift) {
        Some(v) => v,
        None => 0
    }
}

impl RngCore for XorShift {
    fn next_u32(&mut self) -> u32 {
        self.next() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let word = self.next().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }
}
