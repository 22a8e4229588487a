//! Cipher parameters.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Rc5Error, Result};

/// Supported word widths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum WordSize {
    /// 16-bit words, 4-byte blocks.
    W16,
    /// 32-bit words, 8-byte blocks.
    W32,
    /// 64-bit words, 16-byte blocks.
    W64,
}

impl WordSize {
    /// All supported widths, narrowest first.
    pub const ALL: [WordSize; 3] = [WordSize::W16, WordSize::W32, WordSize::W64];

    /// Width in bits.
    pub const fn bits(self) -> u32 {
        match self {
            WordSize::W16 => 16,
            WordSize::W32 => 32,
            WordSize::W64 => 64,
        }
    }

    /// Width in bytes.
    pub const fn bytes(self) -> usize {
        self.bits() as usize / 8
    }

    /// Block size in bytes (two words).
    pub const fn block_size(self) -> usize {
        2 * self.bytes()
    }
}

impl TryFrom<u32> for WordSize {
    type Error = Rc5Error;

    fn try_from(bits: u32) -> Result<Self> {
        match bits {
            16 => Ok(WordSize::W16),
            32 => Ok(WordSize::W32),
            64 => Ok(WordSize::W64),
            other => Err(Rc5Error::UnsupportedWordSize(other)),
        }
    }
}

impl From<WordSize> for u32 {
    fn from(value: WordSize) -> Self {
        value.bits()
    }
}

impl fmt::Display for WordSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

/// Parameters fixed for the lifetime of a cipher instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CipherConfig {
    /// Word width.
    pub word_size: WordSize,
    /// Number of rounds, at least one.
    pub rounds: u32,
    /// Nominal key length in bytes. Sizes the IV seed generator only; keys of
    /// any length are accepted.
    pub key_len: usize,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            word_size: WordSize::W32,
            rounds: 12,
            key_len: 16,
        }
    }
}

impl CipherConfig {
    /// Builds a configuration from a raw bit width.
    pub fn new(word_bits: u32, rounds: u32, key_len: usize) -> Result<Self> {
        let config = Self {
            word_size: WordSize::try_from(word_bits)?,
            rounds,
            key_len,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the invariants the cipher relies on.
    pub fn validate(&self) -> Result<()> {
        if self.rounds == 0 {
            return Err(Rc5Error::ZeroRounds);
        }
        Ok(())
    }

    /// Block size in bytes.
    pub const fn block_size(&self) -> usize {
        self.word_size.block_size()
    }
}

impl fmt::Display for CipherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RC5-{}/{}/{}", self.word_size, self.rounds, self.key_len)
    }
}
