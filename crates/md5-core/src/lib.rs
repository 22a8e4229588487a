//! MD5 message digest implemented directly from RFC 1321.
//!
//! This crate provides:
//! - Message padding to a 512-bit boundary.
//! - The 64-step compression function over four 32-bit accumulators.
//! - A [`Md5Digest`] value type with lowercase-hex rendering and parsing.
//!
//! MD5 is broken for collision resistance. It is kept here for checksums and
//! for deriving fixed-length cipher keys from passphrases.
//!
//! ```
//! assert_eq!(md5_core::digest_hex(b"abc"), "900150983cd24fb0d6963f7d28e17f72");
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod digest;
mod pad;
mod tables;

pub use crate::digest::{digest, digest_hex, same_digest, Md5Digest, DIGEST_LEN};
pub use crate::pad::{pad, BLOCK_LEN};
