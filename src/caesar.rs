use crate::alphabet::{clean, index_of, letter_at, ALPHABET_LEN};
use std::collections::HashSet;

/// Uppercased word list used for dictionary voting.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(|w| w.as_ref().trim().to_ascii_uppercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaesarCandidate {
    pub shift: u8,
    pub text: String,
}

#[inline]
fn rotate_index(idx: u8, shift: u8) -> u8 {
    (idx + shift) % ALPHABET_LEN as u8
}

/// Rotates letters forward by `shift` (uppercased). Whitespace is kept and every other
/// character is dropped.
pub fn rotate(text: &str, shift: i64) -> String {
    let shift = shift.rem_euclid(ALPHABET_LEN as i64) as u8;
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if let Some(idx) = index_of(c) {
            out.push(letter_at(rotate_index(idx, shift)));
        } else if c.is_whitespace() {
            out.push(c);
        }
    }
    out
}

/// Tries all 26 shifts and keeps those where more than half of the cleaned words are
/// dictionary words. Candidates come back in shift order.
pub fn crack_caesar(ciphertext: &str, dict: &Dictionary) -> Vec<CaesarCandidate> {
    let mut candidates = Vec::new();

    for shift in 0..ALPHABET_LEN as u8 {
        let line = rotate(ciphertext, shift as i64);
        let words: Vec<String> = line
            .split_whitespace()
            .map(clean)
            .filter(|w| !w.is_empty())
            .collect();

        let total = words.len();
        let good = words.iter().filter(|w| dict.contains(w)).count();

        if total > 0 && good > total / 2 {
            candidates.push(CaesarCandidate {
                shift,
                text: words.join(" "),
            });
        }
    }

    candidates
}
