pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const ALPHABET_LEN: usize = 26;

/// Canonical 0-25 index of an ASCII letter, either case.
#[inline(always)]
pub fn index_of(c: char) -> Option<u8> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_uppercase() as u8 - b'A')
    } else {
        None
    }
}

#[inline(always)]
pub fn letter_at(index: u8) -> char {
    ALPHABET[index as usize] as char
}

/// Uppercase letters only, everything else stripped.
pub fn clean(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Letters of `text` as alphabet indices, everything else stripped.
pub fn clean_indices(text: &str) -> Vec<u8> {
    text.chars().filter_map(index_of).collect()
}
