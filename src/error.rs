use thiserror::Error;

/// Reasons [`Permutation::try_new`](crate::Permutation::try_new) refuses a parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PermutationError {
    #[error("seed must be nonzero, a zero seed makes the xorshift stream constant")]
    ZeroSeed,
}
