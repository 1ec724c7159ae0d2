#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shift amounts `(a, b, c)` for the XorShift step `<< a, >> b, << c`.
///
/// Only a few hundred triplets give a full-period 64-bit generator (see
/// Marsaglia, "Xorshift RNGs", J. Stat. Softw. 8(14), 2003). Picking one is
/// up to the caller; nothing here checks the period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triplet {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl Triplet {
    pub const DEFAULT: Triplet = Triplet::new(13, 7, 17);

    #[inline]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c }
    }

    #[inline]
    pub const fn from_tuple(triplet: (u32, u32, u32)) -> Self {
        Self::new(triplet.0, triplet.1, triplet.2)
    }
}

impl Default for Triplet {
    fn default() -> Self {
        Triplet::DEFAULT
    }
}

impl From<(u32, u32, u32)> for Triplet {
    fn from(value: (u32, u32, u32)) -> Self {
        Triplet::from_tuple(value)
    }
}

impl From<Triplet> for (u32, u32, u32) {
    fn from(value: Triplet) -> Self {
        (value.a, value.b, value.c)
    }
}

impl std::fmt::Display for Triplet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.a, self.b, self.c)
    }
}

/// Everything needed to rebuild a [`Permutation`](crate::Permutation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PermutationConfig {
    pub seed: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub triplet: Triplet,
}

impl Default for PermutationConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            triplet: Triplet::DEFAULT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tuple_conversions() {
        let triplet = Triplet::from((1, 3, 45));
        assert_eq!(triplet, Triplet::new(1, 3, 45));
        assert_eq!(<(u32, u32, u32)>::from(triplet), (1, 3, 45));
    }

    #[test]
    fn defaults() {
        assert_eq!(Triplet::default(), Triplet::new(13, 7, 17));
        assert_eq!(Triplet::DEFAULT.to_string(), "(13, 7, 17)");

        let config = PermutationConfig::default();
        assert_eq!(config.seed, 1);
        assert_eq!(config.triplet, Triplet::DEFAULT);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_from_json() {
        let json = r#"{ "seed": 99, "triplet": { "a": 5, "b": 15, "c": 27 } }"#;
        let config: PermutationConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.seed, 99);
        assert_eq!(config.triplet, Triplet::new(5, 15, 27));

        let config: PermutationConfig = serde_json::from_str(r#"{ "seed": 7 }"#).unwrap();
        assert_eq!(config.triplet, Triplet::DEFAULT);
    }
}
