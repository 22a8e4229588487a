//! Whole-message encoding: padding, IV derivation and CBC feedback.
//!
//! Ciphertext layout is `E(IV) || C1 || ... || Cn` where `Ci = E(Pi ^ Ci-1)`
//! and `C0` is the raw IV. The IV comes from a Lehmer generator with fixed
//! seed constants, so it depends only on the word size.

use std::marker::PhantomData;
use std::num::NonZeroU64;

use lehmer_gen::LehmerGenerator;
use tracing::debug;

use crate::block::{pad, unpad, xor_in_place};
use crate::cipher::{decrypt_chunk, encrypt_chunk, expand_key};
use crate::error::{Rc5Error, Result};
use crate::word::Word;

const IV_MODULUS: NonZeroU64 = match NonZeroU64::new(1023) {
    Some(m) => m,
    None => panic!("IV modulus is zero"),
};

/// IV generator: `A = 2^5`, `C = 2`, `M = 2^10 - 1`, `X0 = 23`.
const IV_SOURCE: LehmerGenerator = LehmerGenerator::with_modulus(32, 2, IV_MODULUS, 23, 0);

/// Bytes contributed by one generated value.
const IV_VALUE_BYTES: usize = 8;

/// RC5 over words of type `W` with padded CBC chaining.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rc5<W: Word> {
    rounds: u32,
    key_len: usize,
    _word: PhantomData<W>,
}

impl<W: Word> Rc5<W> {
    /// Block size in bytes.
    pub const BLOCK_SIZE: usize = 2 * W::BYTES;

    /// Builds a cipher with `rounds` rounds. `key_len` is the nominal key
    /// length; it does not constrain the keys passed to `encode`/`decode`.
    pub fn new(rounds: u32, key_len: usize) -> Result<Self> {
        if rounds == 0 {
            return Err(Rc5Error::ZeroRounds);
        }
        Ok(Self {
            rounds,
            key_len,
            _word: PhantomData,
        })
    }

    /// Number of rounds.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Nominal key length in bytes.
    pub fn key_len(&self) -> usize {
        self.key_len
    }

    /// Block size in bytes.
    pub fn block_size(&self) -> usize {
        Self::BLOCK_SIZE
    }

    /// Raw initialization vector, one block long: the little-endian bytes of
    /// successive generated values, truncated.
    pub fn initialization_vector(&self) -> Vec<u8> {
        IV_SOURCE
            .values()
            .take(Self::BLOCK_SIZE.div_ceil(IV_VALUE_BYTES))
            .flat_map(u64::to_le_bytes)
            .take(Self::BLOCK_SIZE)
            .collect()
    }

    /// Pads and encrypts `plaintext`. The output is one IV block plus the
    /// padded plaintext length.
    pub fn encode(&self, plaintext: &[u8], key: &[u8]) -> Vec<u8> {
        let block_size = Self::BLOCK_SIZE;
        let table = expand_key::<W>(key, self.rounds);
        let padded = pad(plaintext, block_size);
        let iv = self.initialization_vector();

        let mut out = Vec::with_capacity(block_size + padded.len());
        let mut head = iv.clone();
        encrypt_chunk(&mut head, &table);
        out.extend_from_slice(&head);

        let mut feedback = iv;
        for block in padded.chunks_exact(block_size) {
            let mut current = block.to_vec();
            xor_in_place(&mut current, &feedback);
            encrypt_chunk(&mut current, &table);
            out.extend_from_slice(&current);
            feedback = current;
        }

        debug!(
            word_bits = W::BITS,
            rounds = self.rounds,
            blocks = padded.len() / block_size,
            "RC5 encode"
        );
        out
    }

    /// Decrypts `ciphertext` produced by [`encode`](Self::encode) and strips
    /// the padding.
    ///
    /// A wrong key usually surfaces as [`Rc5Error::InvalidPadding`]; it can
    /// also yield garbage of plausible length.
    pub fn decode(&self, ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        let block_size = Self::BLOCK_SIZE;
        if ciphertext.len() < block_size || ciphertext.len() % block_size != 0 {
            return Err(Rc5Error::TruncatedCiphertext {
                len: ciphertext.len(),
                block_size,
            });
        }

        let table = expand_key::<W>(key, self.rounds);
        let (head, body) = ciphertext.split_at(block_size);

        let mut feedback = head.to_vec();
        decrypt_chunk(&mut feedback, &table);

        let mut out = Vec::with_capacity(body.len());
        for block in body.chunks_exact(block_size) {
            let mut current = block.to_vec();
            decrypt_chunk(&mut current, &table);
            xor_in_place(&mut current, &feedback);
            out.extend_from_slice(&current);
            feedback.copy_from_slice(block);
        }

        if let Err(err) = unpad(&mut out) {
            debug!(word_bits = W::BITS, error = %err, "RC5 decode rejected padding");
            return Err(err);
        }
        debug!(
            word_bits = W::BITS,
            rounds = self.rounds,
            blocks = body.len() / block_size,
            "RC5 decode"
        );
        Ok(out)
    }
}
