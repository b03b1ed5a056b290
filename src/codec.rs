use crate::alphabet::{index_of, letter_at};
use crate::key::{DecryptKey, Direction, EncryptKey, SubstitutionKey};

/// Maps every ASCII letter through `key` (uppercased) and copies all other characters verbatim.
/// The output has exactly as many characters as the input.
pub fn apply_key<D: Direction>(key: &SubstitutionKey<D>, text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match index_of(c) {
            Some(idx) => out.push(letter_at(key.map_index(idx))),
            None => out.push(c),
        }
    }
    out
}

pub fn encrypt(key: &EncryptKey, plaintext: &str) -> String {
    apply_key(key, plaintext)
}

pub fn decrypt(key: &DecryptKey, ciphertext: &str) -> String {
    apply_key(key, ciphertext)
}

/// Decodes pre-cleaned alphabet indices into `out`, reusing its allocation.
#[inline(always)]
pub fn decrypt_indices_into(key: &DecryptKey, cipher: &[u8], out: &mut Vec<u8>) {
    out.clear();
    out.extend(cipher.iter().map(|&c| key.map_index(c)));
}
