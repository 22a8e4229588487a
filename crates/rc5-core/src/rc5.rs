//! Word-size selection made once per configuration.

use crate::chain::Rc5;
use crate::config::{CipherConfig, WordSize};
use crate::error::Result;

/// RC5 cipher specialized for one of the supported word sizes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rc5Cipher {
    /// 16-bit words.
    W16(Rc5<u16>),
    /// 32-bit words.
    W32(Rc5<u32>),
    /// 64-bit words.
    W64(Rc5<u64>),
}

macro_rules! dispatch {
    ($self:expr, $cipher:ident => $body:expr) => {
        match $self {
            Rc5Cipher::W16($cipher) => $body,
            Rc5Cipher::W32($cipher) => $body,
            Rc5Cipher::W64($cipher) => $body,
        }
    };
}

impl Rc5Cipher {
    /// Validates `config` and builds the matching specialization.
    pub fn new(config: CipherConfig) -> Result<Self> {
        config.validate()?;
        let CipherConfig {
            word_size,
            rounds,
            key_len,
        } = config;
        Ok(match word_size {
            WordSize::W16 => Rc5Cipher::W16(Rc5::new(rounds, key_len)?),
            WordSize::W32 => Rc5Cipher::W32(Rc5::new(rounds, key_len)?),
            WordSize::W64 => Rc5Cipher::W64(Rc5::new(rounds, key_len)?),
        })
    }

    /// Builds a cipher from a raw bit width.
    pub fn with_params(word_bits: u32, rounds: u32, key_len: usize) -> Result<Self> {
        Self::new(CipherConfig::new(word_bits, rounds, key_len)?)
    }

    /// Parameters of this cipher.
    pub fn config(&self) -> CipherConfig {
        let word_size = match self {
            Rc5Cipher::W16(_) => WordSize::W16,
            Rc5Cipher::W32(_) => WordSize::W32,
            Rc5Cipher::W64(_) => WordSize::W64,
        };
        dispatch!(self, c => CipherConfig {
            word_size,
            rounds: c.rounds(),
            key_len: c.key_len(),
        })
    }

    /// Block size in bytes.
    pub fn block_size(&self) -> usize {
        dispatch!(self, c => c.block_size())
    }

    /// Raw IV used as the first feedback block.
    pub fn initialization_vector(&self) -> Vec<u8> {
        dispatch!(self, c => c.initialization_vector())
    }

    /// See [`Rc5::encode`].
    pub fn encode(&self, plaintext: &[u8], key: &[u8]) -> Vec<u8> {
        dispatch!(self, c => c.encode(plaintext, key))
    }

    /// See [`Rc5::decode`].
    pub fn decode(&self, ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        dispatch!(self, c => c.decode(ciphertext, key))
    }
}
