//! Key material: the expanded key table and passphrase-derived keys.

use crate::word::Word;

/// Expanded round-key table `S` of `2 * (rounds + 1)` words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyTable<W: Word> {
    words: Vec<W>,
}

impl<W: Word> KeyTable<W> {
    pub(crate) fn from_words(words: Vec<W>) -> Self {
        debug_assert!(words.len() >= 2 && words.len() % 2 == 0);
        Self { words }
    }

    /// Returns the word at `index` (`0..2 * rounds + 2`).
    #[inline]
    pub fn get(&self, index: usize) -> W {
        self.words[index]
    }

    /// Number of rounds the table was expanded for.
    pub fn rounds(&self) -> usize {
        self.words.len() / 2 - 1
    }

    /// All table words in order.
    pub fn as_slice(&self) -> &[W] {
        &self.words
    }
}

/// Derives a `key_len`-byte key from a passphrase: the MD5 digest of the
/// passphrase repeated as often as needed and truncated.
pub fn derive_key(passphrase: &[u8], key_len: usize) -> Vec<u8> {
    let digest = md5_core::digest(passphrase);
    digest
        .as_bytes()
        .iter()
        .copied()
        .cycle()
        .take(key_len)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_key_lengths() {
        let digest = md5_core::digest(b"abcd");
        let half = derive_key(b"abcd", 8);
        let full = derive_key(b"abcd", 16);
        let double = derive_key(b"abcd", 32);

        assert_eq!(half.as_slice(), &digest.as_bytes()[..8]);
        assert_eq!(full.as_slice(), digest.as_bytes());
        assert_eq!(&double[..16], digest.as_bytes());
        assert_eq!(&double[16..], digest.as_bytes());
        assert!(derive_key(b"abcd", 0).is_empty());
    }

    #[test]
    fn table_reports_rounds() {
        let table = KeyTable::from_words(vec![0u32; 26]);
        assert_eq!(table.rounds(), 12);
        assert_eq!(table.as_slice().len(), 26);
    }
}
