//! RC5 key schedule and single-block encryption/decryption.

use std::cmp::max;

use tracing::trace;

use crate::error::Result;
use crate::key::KeyTable;
use crate::word::Word;

/// Expands `key` into the round-key table for `rounds` rounds.
///
/// The key is packed little-endian into `ceil(len / BYTES)` words (one zero
/// word for an empty key), the table is seeded from `P_w` stepped by `Q_w`,
/// and both are mixed over `3 * max(table, key words)` iterations.
pub fn expand_key<W: Word>(key: &[u8], rounds: u32) -> KeyTable<W> {
    let key_words = max(1, key.len().div_ceil(W::BYTES));
    let mut l = vec![W::default(); key_words];
    for (i, &byte) in key.iter().enumerate().rev() {
        let slot = &mut l[i / W::BYTES];
        *slot = slot.rotl(8).add_byte(byte);
    }

    let table_len = 2 * (rounds as usize + 1);
    let mut s = Vec::with_capacity(table_len);
    let mut value = W::P;
    s.push(value);
    for _ in 1..table_len {
        value = value.add_word(W::Q);
        s.push(value);
    }

    let (mut x, mut y) = (W::default(), W::default());
    let (mut i, mut j) = (0, 0);
    for _ in 0..3 * max(table_len, key_words) {
        s[i] = s[i].add_word(x).add_word(y).rotl(3);
        x = s[i];

        let xy = x.add_word(y);
        l[j] = l[j].add_word(xy).rotl(xy.rotation());
        y = l[j];

        i = (i + 1) % table_len;
        j = (j + 1) % key_words;
    }

    trace!(
        word_bits = W::BITS,
        rounds,
        table_len,
        key_words,
        "expanded RC5 key table"
    );
    KeyTable::from_words(s)
}

#[inline]
fn encrypt_words<W: Word>(a: W, b: W, table: &KeyTable<W>) -> (W, W) {
    let mut a = a.add_word(table.get(0));
    let mut b = b.add_word(table.get(1));
    for i in 1..=table.rounds() {
        a = a.xor_word(b).rotl(b.rotation()).add_word(table.get(2 * i));
        b = b.xor_word(a).rotl(a.rotation()).add_word(table.get(2 * i + 1));
    }
    (a, b)
}

#[inline]
fn decrypt_words<W: Word>(a: W, b: W, table: &KeyTable<W>) -> (W, W) {
    let (mut a, mut b) = (a, b);
    for i in (1..=table.rounds()).rev() {
        b = b.sub_word(table.get(2 * i + 1)).rotr(a.rotation()).xor_word(a);
        a = a.sub_word(table.get(2 * i)).rotr(b.rotation()).xor_word(b);
    }
    (a.sub_word(table.get(0)), b.sub_word(table.get(1)))
}

/// Encrypts the first block (`2 * BYTES`) of `block` in place.
pub fn encrypt_block<W: Word>(block: &mut [u8], table: &KeyTable<W>) -> Result<()> {
    let a = W::from_bytes(block, 0)?;
    let b = W::from_bytes(block, W::BYTES)?;
    let (a, b) = encrypt_words(a, b, table);
    a.to_bytes(block, 0)?;
    b.to_bytes(block, W::BYTES)
}

/// Decrypts the first block (`2 * BYTES`) of `block` in place.
pub fn decrypt_block<W: Word>(block: &mut [u8], table: &KeyTable<W>) -> Result<()> {
    let a = W::from_bytes(block, 0)?;
    let b = W::from_bytes(block, W::BYTES)?;
    let (a, b) = decrypt_words(a, b, table);
    a.to_bytes(block, 0)?;
    b.to_bytes(block, W::BYTES)
}

/// In-place encryption of a chunk that is exactly one block long.
pub(crate) fn encrypt_chunk<W: Word>(chunk: &mut [u8], table: &KeyTable<W>) {
    let (lo, hi) = chunk.split_at_mut(W::BYTES);
    let (a, b) = encrypt_words(W::from_le_slice(lo), W::from_le_slice(hi), table);
    a.write_le_slice(lo);
    b.write_le_slice(hi);
}

/// In-place decryption of a chunk that is exactly one block long.
pub(crate) fn decrypt_chunk<W: Word>(chunk: &mut [u8], table: &KeyTable<W>) {
    let (lo, hi) = chunk.split_at_mut(W::BYTES);
    let (a, b) = decrypt_words(W::from_le_slice(lo), W::from_le_slice(hi), table);
    a.write_le_slice(lo);
    b.write_le_slice(hi);
}
