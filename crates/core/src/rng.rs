//! RNG module - uniform random hole selection
//!
//! A small LCG keeps the core crate dependency-free and the game fully
//! deterministic for a given seed, which the tests rely on. Spawn
//! selection only ever needs "pick one element of a short slice".

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Pick one element of `slice` uniformly at random
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        if slice.is_empty() {
            return None;
        }
        let index = self.next_range(slice.len() as u32) as usize;
        Some(&slice[index])
    }

    /// Current RNG state (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(9) < 9);
        }
    }

    #[test]
    fn test_choose_empty_slice() {
        let mut rng = SimpleRng::new(7);
        let empty: [usize; 0] = [];
        assert_eq!(rng.choose(&empty), None);
    }

    #[test]
    fn test_choose_single_element() {
        let mut rng = SimpleRng::new(7);
        assert_eq!(rng.choose(&[42]), Some(&42));
    }

    #[test]
    fn test_choose_eventually_covers_all_elements() {
        let mut rng = SimpleRng::new(99);
        let candidates = [0usize, 1, 2, 3, 4];
        let mut seen = [false; 5];

        for _ in 0..500 {
            let picked = *rng.choose(&candidates).unwrap();
            seen[picked] = true;
        }

        assert!(seen.iter().all(|&s| s), "all candidates should be reachable");
    }
}
