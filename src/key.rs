use crate::alphabet::{index_of, letter_at, ALPHABET_LEN};
use crate::error::{CfResult, CipherForgeError};
use crate::random::RandomSource;
use serde::{Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::PlainToCipher {}
    impl Sealed for super::CipherToPlain {}
}

/// Orientation tag for a key. Each direction knows its inverse.
pub trait Direction: sealed::Sealed + Copy + fmt::Debug + Eq + Send + Sync + 'static {
    type Inverse: Direction<Inverse = Self>;
    const NAME: &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlainToCipher;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CipherToPlain;

impl Direction for PlainToCipher {
    type Inverse = CipherToPlain;
    const NAME: &'static str = "plain->cipher";
}

impl Direction for CipherToPlain {
    type Inverse = PlainToCipher;
    const NAME: &'static str = "cipher->plain";
}

/// A permutation of the alphabet. Position `i` holds the index that letter `i` maps to.
///
/// The only constructors are the identity, a random shuffle, a checked parse, `swapped`
/// and `inverse`, so every value is a permutation.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubstitutionKey<D: Direction> {
    table: [u8; ALPHABET_LEN],
    _dir: PhantomData<D>,
}

pub type EncryptKey = SubstitutionKey<PlainToCipher>;
pub type DecryptKey = SubstitutionKey<CipherToPlain>;

impl<D: Direction> SubstitutionKey<D> {
    fn from_table(table: [u8; ALPHABET_LEN]) -> Self {
        debug_assert!(is_permutation(&table));
        Self {
            table,
            _dir: PhantomData,
        }
    }

    pub fn identity() -> Self {
        let mut table = [0u8; ALPHABET_LEN];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Self::from_table(table)
    }

    /// Uniform random permutation (Fisher-Yates over `int_inclusive`).
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let mut table = Self::identity().table;
        for i in (1..ALPHABET_LEN).rev() {
            let j = rng.int_inclusive(i);
            table.swap(i, j);
        }
        Self::from_table(table)
    }

    /// Parses 26 distinct letters, either case.
    pub fn from_letters(letters: &str) -> CfResult<Self> {
        let mut table = [0u8; ALPHABET_LEN];
        let mut seen = [false; ALPHABET_LEN];
        let mut len = 0;

        for c in letters.chars() {
            if len == ALPHABET_LEN {
                return Err(CipherForgeError::InvalidKey(format!(
                    "'{}' has more than {} letters",
                    letters, ALPHABET_LEN
                )));
            }
            let idx = index_of(c).ok_or_else(|| {
                CipherForgeError::InvalidKey(format!("'{}' is not a letter", c))
            })?;
            if seen[idx as usize] {
                return Err(CipherForgeError::InvalidKey(format!(
                    "letter '{}' appears twice",
                    letter_at(idx)
                )));
            }
            seen[idx as usize] = true;
            table[len] = idx;
            len += 1;
        }

        if len != ALPHABET_LEN {
            return Err(CipherForgeError::InvalidKey(format!(
                "expected {} letters, got {}",
                ALPHABET_LEN, len
            )));
        }

        Ok(Self::from_table(table))
    }

    /// Copy of this key with positions `i` and `j` exchanged.
    #[inline(always)]
    pub fn swapped(&self, i: usize, j: usize) -> Self {
        let mut table = self.table;
        table.swap(i, j);
        Self::from_table(table)
    }

    pub fn inverse(&self) -> SubstitutionKey<D::Inverse> {
        let mut table = [0u8; ALPHABET_LEN];
        for (i, &target) in self.table.iter().enumerate() {
            table[target as usize] = i as u8;
        }
        SubstitutionKey::from_table(table)
    }

    #[inline(always)]
    pub fn map_index(&self, index: u8) -> u8 {
        self.table[index as usize]
    }

    pub fn letters(&self) -> String {
        self.table.iter().map(|&i| letter_at(i)).collect()
    }

    pub fn is_permutation(&self) -> bool {
        is_permutation(&self.table)
    }
}

fn is_permutation(table: &[u8; ALPHABET_LEN]) -> bool {
    let mut seen = [false; ALPHABET_LEN];
    for &v in table {
        let v = v as usize;
        if v >= ALPHABET_LEN || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

impl<D: Direction> fmt::Display for SubstitutionKey<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.letters())
    }
}

impl<D: Direction> fmt::Debug for SubstitutionKey<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubstitutionKey<{}>({})", D::NAME, self.letters())
    }
}

impl<D: Direction> FromStr for SubstitutionKey<D> {
    type Err = CipherForgeError;

    fn from_str(s: &str) -> CfResult<Self> {
        Self::from_letters(s.trim())
    }
}

impl<D: Direction> Serialize for SubstitutionKey<D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_round_trips() {
        let mut rng = fastrand::Rng::with_seed(3);
        let enc = EncryptKey::random(&mut rng);
        let dec: DecryptKey = enc.inverse();
        for i in 0..26u8 {
            assert_eq!(dec.map_index(enc.map_index(i)), i);
        }
        assert_eq!(dec.inverse(), enc);
    }

    #[test]
    fn parse_rejects_bad_keys() {
        assert!(DecryptKey::from_letters("ABC").is_err());
        assert!(DecryptKey::from_letters("AACDEFGHIJKLMNOPQRSTUVWXYZ").is_err());
        assert!(DecryptKey::from_letters("ABCDEFGHIJKLMNOPQRSTUVWXY1").is_err());
        assert!(DecryptKey::from_letters("ABCDEFGHIJKLMNOPQRSTUVWXYZA").is_err());

        let key: DecryptKey = "zyxwvutsrqponmlkjihgfedcba".parse().unwrap();
        assert_eq!(key.letters(), "ZYXWVUTSRQPONMLKJIHGFEDCBA");
    }

    #[test]
    fn swap_exchanges_two_positions() {
        let key = DecryptKey::identity().swapped(0, 25);
        assert_eq!(key.letters(), "ZBCDEFGHIJKLMNOPQRSTUVWXYA");
        assert!(key.is_permutation());
    }
}
