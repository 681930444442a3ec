//! Queue randomization
//!
//! Unbiased Fisher-Yates permutation via `SliceRandom::shuffle`.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Source of queue permutations
#[derive(Debug, Clone)]
pub struct Shuffler {
    rng: StdRng,
}

impl Shuffler {
    /// Create a shuffler; a fixed seed makes permutations reproducible
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Permute `items` in place, uniformly over all orderings
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

impl Default for Shuffler {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_contents() {
        let mut shuffler = Shuffler::new(Some(7));
        let mut items: Vec<u32> = (0..100).collect();
        shuffler.shuffle(&mut items);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn same_seed_same_permutation() {
        let mut a: Vec<u32> = (0..20).collect();
        let mut b = a.clone();
        Shuffler::new(Some(42)).shuffle(&mut a);
        Shuffler::new(Some(42)).shuffle(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn all_orderings_reachable() {
        let mut shuffler = Shuffler::new(Some(1));
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            let mut items = [1, 2, 3];
            shuffler.shuffle(&mut items);
            seen.insert(items);
        }
        assert_eq!(seen.len(), 6);
    }
}
