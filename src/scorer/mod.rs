pub mod loader;
pub mod table;

pub use self::table::QuadgramTable;

use self::table::QUAD_LEN;
use crate::alphabet::{clean_indices, ALPHABET_LEN};
use crate::error::{CfResult, CipherForgeError};
use tracing::debug;

const QUAD_SPACE: usize = ALPHABET_LEN * ALPHABET_LEN * ALPHABET_LEN * ALPHABET_LEN;

#[inline(always)]
fn quad_code(w: &[u8]) -> usize {
    ((w[0] as usize * ALPHABET_LEN + w[1] as usize) * ALPHABET_LEN + w[2] as usize) * ALPHABET_LEN
        + w[3] as usize
}

/// Log10 likelihood model over overlapping 4-letter windows.
///
/// Every one of the 26^4 quadgrams has a precomputed score. Quadgrams missing from the
/// table (or present with a zero count) get the floor `log10(1 / total)`, which counts
/// them as if they had been seen once.
pub struct QuadgramScorer {
    scores: Vec<f64>,
    floor: f64,
    total: u64,
}

impl QuadgramScorer {
    pub fn new(table: &QuadgramTable) -> CfResult<Self> {
        let total = table.total();
        if total == 0 {
            return Err(CipherForgeError::Validation(
                "quadgram table is empty (total count is 0)".to_string(),
            ));
        }

        let total_f = total as f64;
        let floor = (1.0 / total_f).log10();
        let mut scores = vec![floor; QUAD_SPACE];

        for (quad, count) in table.iter() {
            if count > 0 {
                scores[quad_code(quad)] = (count as f64 / total_f).log10();
            }
        }

        debug!(
            "Quadgram scorer built: {} entries, total {}, floor {:.4}",
            table.len(),
            total,
            floor
        );

        Ok(Self {
            scores,
            floor,
            total,
        })
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn floor(&self) -> f64 {
        self.floor
    }

    /// Score of a single quadgram. The input is cleaned first; anything
    /// that is not exactly four letters afterwards scores the floor.
    pub fn quad_score(&self, quad: &str) -> f64 {
        let idx = clean_indices(quad);
        if idx.len() != QUAD_LEN {
            return self.floor;
        }
        self.scores[quad_code(&idx)]
    }

    /// Sum of window scores over the letters of `text`. Returns 0.0 when
    /// fewer than four letters remain after cleaning.
    pub fn score(&self, text: &str) -> f64 {
        self.score_indices(&clean_indices(text))
    }

    /// Same as [`score`](Self::score) for text already reduced to alphabet indices.
    #[inline]
    pub fn score_indices(&self, letters: &[u8]) -> f64 {
        if letters.len() < QUAD_LEN {
            return 0.0;
        }
        let mut total = 0.0;
        for w in letters.windows(QUAD_LEN) {
            total += self.scores[quad_code(w)];
        }
        total
    }
}
