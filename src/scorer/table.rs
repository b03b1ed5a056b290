use crate::alphabet::index_of;
use crate::error::{CfResult, CipherForgeError};
use std::collections::HashMap;
use tracing::debug;

pub const QUAD_LEN: usize = 4;

/// Occurrence counts for 4-letter sequences, keyed by alphabet indices.
#[derive(Debug, Clone, Default)]
pub struct QuadgramTable {
    counts: HashMap<[u8; QUAD_LEN], u64>,
    total: u64,
}

impl QuadgramTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` occurrences of `quad`. Repeated quadgrams accumulate.
    ///
    /// A count that would overflow the entry or the table total is rejected and leaves
    /// the table unchanged.
    pub fn insert(&mut self, quad: &str, count: u64) -> CfResult<()> {
        let key = parse_quad(quad)?;
        let overflow = || {
            CipherForgeError::Validation(format!(
                "count {} for quadgram '{}' overflows the table total",
                count, quad
            ))
        };
        let total = self.total.checked_add(count).ok_or_else(overflow)?;
        let entry = self.counts.entry(key).or_default();
        *entry = entry.checked_add(count).ok_or_else(overflow)?;
        self.total = total;
        Ok(())
    }

    pub fn get(&self, quad: &str) -> Option<u64> {
        parse_quad(quad)
            .ok()
            .and_then(|k| self.counts.get(&k).copied())
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[u8; QUAD_LEN], u64)> {
        self.counts.iter().map(|(k, &v)| (k, v))
    }

    /// Builds a table by counting every overlapping window of the cleaned text.
    pub fn from_text(text: &str) -> Self {
        let letters: Vec<u8> = text.chars().filter_map(index_of).collect();
        let mut table = Self::new();
        for w in letters.windows(QUAD_LEN) {
            let key = [w[0], w[1], w[2], w[3]];
            *table.counts.entry(key).or_default() += 1;
            table.total += 1;
        }
        table
    }
}

fn parse_quad(quad: &str) -> CfResult<[u8; QUAD_LEN]> {
    let mut key = [0u8; QUAD_LEN];
    let mut n = 0;
    for c in quad.chars() {
        if n == QUAD_LEN {
            n += 1;
            break;
        }
        match index_of(c) {
            Some(idx) => key[n] = idx,
            None => {
                return Err(CipherForgeError::Validation(format!(
                    "quadgram '{}' contains non-letter '{}'",
                    quad, c
                )))
            }
        }
        n += 1;
    }
    if n != QUAD_LEN {
        return Err(CipherForgeError::Validation(format!(
            "quadgram '{}' is not {} letters",
            quad, QUAD_LEN
        )));
    }
    Ok(key)
}

impl<S: AsRef<str>> FromIterator<(S, u64)> for QuadgramTable {
    /// Invalid quadgrams are dropped.
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (quad, count) in iter {
            if let Err(e) = table.insert(quad.as_ref(), count) {
                debug!("Dropped quadgram entry: {}", e);
            }
        }
        table
    }
}
