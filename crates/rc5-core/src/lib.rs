//! RC5 block cipher parameterized by word size, with padded CBC chaining.
//!
//! This crate provides:
//! - The [`Word`] abstraction over 16-, 32- and 64-bit words.
//! - The RC5 key schedule and single-block encryption/decryption.
//! - Whole-message [`Rc5::encode`]/[`Rc5::decode`]: PKCS#7-style padding, an
//!   IV block derived from a fixed-seed Lehmer generator, and CBC feedback.
//! - [`Rc5Cipher`], which picks the word size once from a [`CipherConfig`].
//! - [`derive_key`], turning a passphrase into a key of a given length.
//!
//! The implementation favours clarity over constant-time behaviour; it is not
//! side-channel hardened, and the IV is predictable by construction.
//!
//! ```
//! use rc5_core::{CipherConfig, Rc5Cipher, WordSize};
//!
//! let cipher = Rc5Cipher::new(CipherConfig {
//!     word_size: WordSize::W32,
//!     rounds: 12,
//!     key_len: 16,
//! })?;
//! let key = rc5_core::derive_key(b"passphrase", 16);
//! let ciphertext = cipher.encode(b"Security is cool", &key);
//! assert_eq!(ciphertext.len(), 8 + 24);
//! assert_eq!(cipher.decode(&ciphertext, &key)?, b"Security is cool");
//! # Ok::<(), rc5_core::Rc5Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod chain;
mod cipher;
mod config;
mod error;
mod key;
mod rc5;
mod word;

pub use crate::chain::Rc5;
pub use crate::cipher::{decrypt_block, encrypt_block, expand_key};
pub use crate::config::{CipherConfig, WordSize};
pub use crate::error::{Rc5Error, Result};
pub use crate::key::{derive_key, KeyTable};
pub use crate::rc5::Rc5Cipher;
pub use crate::word::Word;
