use crate::alphabet::{clean_indices, ALPHABET_LEN};
use crate::codec::decrypt_indices_into;
use crate::key::{DecryptKey, EncryptKey};
use crate::random::RandomSource;
use crate::scorer::QuadgramScorer;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredKey {
    pub key: DecryptKey,
    pub score: f64,
}

/// One randomized local search over decryption keys for a fixed ciphertext.
///
/// The ciphertext is held as alphabet indices. Scoring the decoded indices gives the same
/// value as scoring the decoded full text, since decoding maps letters to letters and
/// leaves everything else alone.
pub struct HillClimber<'a> {
    scorer: &'a QuadgramScorer,
    cipher: &'a [u8],
    patience: usize,
    buf: Vec<u8>,
}

impl<'a> HillClimber<'a> {
    pub fn new(scorer: &'a QuadgramScorer, cipher: &'a [u8], patience: usize) -> Self {
        Self {
            scorer,
            cipher,
            patience,
            buf: Vec::with_capacity(cipher.len()),
        }
    }

    #[inline(always)]
    pub fn evaluate(&mut self, key: &DecryptKey) -> f64 {
        decrypt_indices_into(key, self.cipher, &mut self.buf);
        self.scorer.score_indices(&self.buf)
    }

    /// Two distinct positions, `j` resampled until it differs from `i`.
    #[inline(always)]
    fn pick_pair<R: RandomSource + ?Sized>(rng: &mut R) -> (usize, usize) {
        let i = rng.int_inclusive(ALPHABET_LEN - 1);
        let mut j = rng.int_inclusive(ALPHABET_LEN - 1);
        while j == i {
            j = rng.int_inclusive(ALPHABET_LEN - 1);
        }
        (i, j)
    }

    /// Climbs from a fresh random key until `patience` consecutive swaps fail to improve.
    pub fn run<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> ScoredKey {
        let start: DecryptKey = EncryptKey::random(rng).inverse();
        self.climb_from(start, rng)
    }

    pub fn climb_from<R: RandomSource + ?Sized>(
        &mut self,
        start: DecryptKey,
        rng: &mut R,
    ) -> ScoredKey {
        let mut current = start;
        let mut current_score = self.evaluate(&current);

        // Equal to `current` while only strict improvements are accepted.
        let mut best = ScoredKey {
            key: current,
            score: current_score,
        };

        let mut fails = 0;
        let mut steps = 0usize;
        let mut accepted = 0usize;

        while fails < self.patience {
            steps += 1;
            let (i, j) = Self::pick_pair(rng);
            let candidate = current.swapped(i, j);
            let candidate_score = self.evaluate(&candidate);

            if candidate_score > current_score {
                current = candidate;
                current_score = candidate_score;
                fails = 0;
                accepted += 1;

                if candidate_score > best.score {
                    best = ScoredKey {
                        key: candidate,
                        score: candidate_score,
                    };
                }
            } else {
                fails += 1;
            }
        }

        trace!(
            "climb finished: {} steps, {} accepted, score {:.3}",
            steps,
            accepted,
            best.score
        );

        best
    }
}

/// Runs a single climb over `ciphertext`.
pub fn hill_climb<R: RandomSource + ?Sized>(
    scorer: &QuadgramScorer,
    ciphertext: &str,
    patience: usize,
    rng: &mut R,
) -> ScoredKey {
    let cipher = clean_indices(ciphertext);
    HillClimber::new(scorer, &cipher, patience).run(rng)
}
