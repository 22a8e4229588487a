//! Error types for the cipher.

/// Errors produced by cipher construction, word access and decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rc5Error {
    /// Word size other than 16, 32 or 64 bits.
    #[error("unsupported word size {0} bits (expected 16, 32 or 64)")]
    UnsupportedWordSize(u32),
    /// Round count of zero.
    #[error("round count must be positive")]
    ZeroRounds,
    /// A word read or write ran past the end of the supplied buffer.
    #[error("buffer too short: need {needed} bytes, have {available}")]
    BufferTooShort {
        /// Bytes the access required.
        needed: usize,
        /// Bytes the buffer holds.
        available: usize,
    },
    /// The recovered padding length does not fit the recovered data.
    #[error("wrong key or corrupt data: padding length {pad} exceeds {available} recovered bytes")]
    InvalidPadding {
        /// Final byte read as a padding length.
        pad: u8,
        /// Length of the recovered buffer.
        available: usize,
    },
    /// Ciphertext is not an IV block followed by whole blocks.
    #[error("corrupt data: {len} bytes is not a whole number of {block_size}-byte blocks")]
    TruncatedCiphertext {
        /// Ciphertext length in bytes.
        len: usize,
        /// Cipher block size in bytes.
        block_size: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Rc5Error>;
