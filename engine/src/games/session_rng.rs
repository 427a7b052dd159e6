use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Seedable per-session RNG so that games can be replayed deterministically.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_produces_same_sequence() {
        let mut a = SessionRng::new(42);
        let mut b = SessionRng::new(42);

        for _ in 0..32 {
            let x: u32 = a.random_range(0..1000);
            let y: u32 = b.random_range(0..1000);
            assert_eq!(x, y);
        }
    }

    #[test]
    fn test_same_seed_produces_same_shuffle() {
        let mut a = SessionRng::new(7);
        let mut b = SessionRng::new(7);

        let mut left: Vec<u32> = (0..20).collect();
        let mut right: Vec<u32> = (0..20).collect();
        a.shuffle(&mut left);
        b.shuffle(&mut right);

        assert_eq!(left, right);
    }
}
