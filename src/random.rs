/// Uniform integer source threaded through key generation and the search.
pub trait RandomSource {
    /// Unbiased draw from the closed range `[0, n]`.
    fn int_inclusive(&mut self, n: usize) -> usize;

    fn reseed(&mut self, seed: u64);
}

impl RandomSource for fastrand::Rng {
    #[inline(always)]
    fn int_inclusive(&mut self, n: usize) -> usize {
        self.usize(0..=n)
    }

    fn reseed(&mut self, seed: u64) {
        self.seed(seed);
    }
}

/// Seeded generator when a seed is given, entropy-seeded otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> fastrand::Rng {
    match seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_stay_in_closed_range() {
        let mut rng = fastrand::Rng::with_seed(7);
        let mut seen = [false; 26];
        for _ in 0..10_000 {
            let v = rng.int_inclusive(25);
            assert!(v <= 25);
            seen[v] = true;
        }
        assert!(seen.iter().all(|&s| s), "both bounds must be reachable");
    }

    #[test]
    fn reseed_restarts_the_stream() {
        let mut rng = fastrand::Rng::with_seed(1);
        let first: Vec<usize> = (0..8).map(|_| rng.int_inclusive(100)).collect();
        rng.reseed(1);
        let second: Vec<usize> = (0..8).map(|_| rng.int_inclusive(100)).collect();
        assert_eq!(first, second);
    }
}
