use crate::arrow::Arrow;
use itertools::Itertools;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::fmt;

/// The ordered arrows a session asks the player to reproduce
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChallengeSequence {
    arrows: Vec<Arrow>,
}

impl ChallengeSequence {
    pub const DEFAULT_LENGTH: usize = 10;

    pub fn new(arrows: Vec<Arrow>) -> Self {
        Self { arrows }
    }

    pub fn len(&self) -> usize {
        self.arrows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrows.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<Arrow> {
        self.arrows.get(idx).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arrow> {
        self.arrows.iter()
    }

    pub fn as_slice(&self) -> &[Arrow] {
        &self.arrows
    }
}

impl fmt::Display for ChallengeSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.arrows.iter().join(" "))
    }
}

/// Draws challenge sequences uniformly from the four arrows
#[derive(Debug)]
pub struct SequenceGenerator {
    length: usize,
    rng: StdRng,
}

impl SequenceGenerator {
    pub fn new(length: usize) -> Self {
        Self {
            length,
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible generator, used by `--seed` and tests
    pub fn with_seed(length: usize, seed: u64) -> Self {
        Self {
            length,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn generate(&mut self) -> ChallengeSequence {
        let arrows = (0..self.length)
            .map(|_| Arrow::ALL[self.rng.gen_range(0..Arrow::ALL.len())])
            .collect();
        ChallengeSequence::new(arrows)
    }
}

impl Default for SequenceGenerator {
    fn default() -> Self {
        Self::new(ChallengeSequence::DEFAULT_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_generator_yields_ten_arrows() {
        let mut generator = SequenceGenerator::default();
        for _ in 0..200 {
            let seq = generator.generate();
            assert_eq!(seq.len(), 10);
            assert!(seq.iter().all(|a| Arrow::ALL.contains(a)));
        }
    }

    #[test]
    fn test_custom_length() {
        let mut generator = SequenceGenerator::with_seed(3, 7);
        assert_eq!(generator.generate().len(), 3);
    }

    #[test]
    fn test_seeded_generators_agree() {
        let mut a = SequenceGenerator::with_seed(10, 42);
        let mut b = SequenceGenerator::with_seed(10, 42);
        assert_eq!(a.generate(), b.generate());
        assert_eq!(a.generate(), b.generate());
    }

    #[test]
    fn test_all_arrows_are_drawn() {
        let mut generator = SequenceGenerator::with_seed(10, 1);
        let seen: HashSet<Arrow> = (0..50)
            .flat_map(|_| generator.generate().as_slice().to_vec())
            .collect();
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_display_joins_glyphs() {
        let seq = ChallengeSequence::new(vec![Arrow::Up, Arrow::Down, Arrow::Left, Arrow::Right]);
        assert_eq!(seq.to_string(), "↑ ↓ ← →");
    }

    #[test]
    fn test_empty_sequence() {
        let seq = ChallengeSequence::default();
        assert!(seq.is_empty());
        assert_eq!(seq.get(0), None);
        assert_eq!(seq.to_string(), "");
    }
}
