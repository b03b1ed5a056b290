use crate::alphabet::clean_indices;
use crate::codec::decrypt;
use crate::config::SearchParams;
use crate::error::CfResult;
use crate::key::DecryptKey;
use crate::optimizer::climb::{HillClimber, ScoredKey};
use crate::random::RandomSource;
use crate::scorer::QuadgramScorer;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

/// Receives one call per finished attempt, in attempt order.
pub trait ProgressCallback: Send + Sync {
    fn on_attempt(&self, attempt: usize, score: f64, best_score: f64);
}

impl ProgressCallback for () {
    fn on_attempt(&self, _attempt: usize, _score: f64, _best_score: f64) {}
}

#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    pub key: DecryptKey,
    pub score: f64,
    /// Best score of each attempt, in attempt order.
    pub attempts: Vec<f64>,
}

impl Solution {
    pub fn plaintext(&self, ciphertext: &str) -> String {
        decrypt(&self.key, ciphertext)
    }
}

/// Runs a fixed number of independent hill climbs and keeps the best key.
pub struct Solver {
    params: SearchParams,
}

impl Default for Solver {
    fn default() -> Self {
        Self {
            params: SearchParams::default(),
        }
    }
}

impl Solver {
    pub fn new(params: SearchParams) -> CfResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    pub fn solve<R: RandomSource + ?Sized>(
        &self,
        scorer: &QuadgramScorer,
        ciphertext: &str,
        rng: &mut R,
    ) -> Solution {
        self.solve_with_progress(scorer, ciphertext, rng, &())
    }

    /// Sequential attempts drawing from one generator. Ties keep the earliest attempt.
    pub fn solve_with_progress<R: RandomSource + ?Sized, CB: ProgressCallback>(
        &self,
        scorer: &QuadgramScorer,
        ciphertext: &str,
        rng: &mut R,
        callback: &CB,
    ) -> Solution {
        let cipher = clean_indices(ciphertext);
        let mut climber = HillClimber::new(scorer, &cipher, self.params.patience);

        let results = (0..self.params.restarts).map(|_| climber.run(rng));
        reduce(results, callback)
    }

    pub fn solve_parallel(&self, scorer: &QuadgramScorer, ciphertext: &str, seed: u64) -> Solution {
        self.solve_parallel_with_progress(scorer, ciphertext, seed, &())
    }

    /// Attempt `i` owns a generator seeded with `seed + i`, so the result does not
    /// depend on scheduling. Ties keep the lowest attempt index.
    pub fn solve_parallel_with_progress<CB: ProgressCallback>(
        &self,
        scorer: &QuadgramScorer,
        ciphertext: &str,
        seed: u64,
        callback: &CB,
    ) -> Solution {
        let cipher = clean_indices(ciphertext);
        let patience = self.params.patience;

        let results: Vec<ScoredKey> = (0..self.params.restarts)
            .into_par_iter()
            .map(|i| {
                let mut rng = fastrand::Rng::with_seed(seed.wrapping_add(i as u64));
                HillClimber::new(scorer, &cipher, patience).run(&mut rng)
            })
            .collect();

        reduce(results, callback)
    }
}

fn reduce<I, CB>(results: I, callback: &CB) -> Solution
where
    I: IntoIterator<Item = ScoredKey>,
    CB: ProgressCallback,
{
    let mut best: Option<ScoredKey> = None;
    let mut attempts = Vec::new();

    for (attempt, result) in results.into_iter().enumerate() {
        attempts.push(result.score);

        let improved = best.map_or(true, |b| result.score > b.score);
        if improved {
            best = Some(result);
        }

        let best_score = best.map_or(result.score, |b| b.score);
        debug!(
            "Attempt #{} | Score: {:.3} | Best: {:.3}",
            attempt + 1,
            result.score,
            best_score
        );
        callback.on_attempt(attempt, result.score, best_score);
    }

    let best = best.unwrap_or(ScoredKey {
        key: DecryptKey::identity(),
        score: 0.0,
    });
    info!(
        "🏆 Best score {:.3} after {} attempts",
        best.score,
        attempts.len()
    );

    Solution {
        key: best.key,
        score: best.score,
        attempts,
    }
}

/// Default 25-restart search. Returns the ciphertext->plaintext key.
pub fn solve<R: RandomSource + ?Sized>(
    scorer: &QuadgramScorer,
    ciphertext: &str,
    rng: &mut R,
) -> DecryptKey {
    Solver::default().solve(scorer, ciphertext, rng).key
}
