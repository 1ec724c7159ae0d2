//! Seeded, invertible permutations of the 64-bit integers.
//!
//! A [`Permutation`] is built from a seed and an XorShift shift triplet. Its
//! [`map`](Permutation::map) scrambles a `u64` and [`unmap`](Permutation::unmap)
//! puts it back. This is meant for things like turning sequential ids into
//! opaque ones. It is not a cipher.

pub mod error;
pub mod params;
pub mod permutation;
pub mod xorshift;

pub use self::{
    error::PermutationError,
    params::{PermutationConfig, Triplet},
    permutation::{Permutation, NUM_MASKS, NUM_ROUNDS},
    xorshift::XorShift
};
