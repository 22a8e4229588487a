//! Compression function and digest value type.

use std::fmt;
use std::str::FromStr;

use crate::pad::{pad, BLOCK_LEN};
use crate::tables::{INITIAL_STATE, K, SHIFTS};

/// Digest length in bytes.
pub const DIGEST_LEN: usize = 16;

/// 128-bit MD5 digest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Md5Digest(pub [u8; DIGEST_LEN]);

impl Md5Digest {
    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Lowercase hex rendering, two characters per byte.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<Md5Digest> for [u8; DIGEST_LEN] {
    fn from(value: Md5Digest) -> Self {
        value.0
    }
}

impl AsRef<[u8]> for Md5Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Md5Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Md5Digest {
    type Err = hex::FromHexError;

    /// Parses exactly 32 hex characters, either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; DIGEST_LEN];
        hex::decode_to_slice(s.trim(), &mut bytes)?;
        Ok(Self(bytes))
    }
}

/// Computes the MD5 digest of `input`.
pub fn digest(input: &[u8]) -> Md5Digest {
    let mut state = INITIAL_STATE;
    for block in pad(input).chunks_exact(BLOCK_LEN) {
        compress(&mut state, block);
    }

    let mut out = [0u8; DIGEST_LEN];
    for (chunk, word) in out.chunks_exact_mut(4).zip(state) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    Md5Digest(out)
}

/// Computes the digest of `input` as lowercase hex.
pub fn digest_hex(input: &[u8]) -> String {
    digest(input).to_hex()
}

/// Returns `true` when both buffers hash to the same digest.
pub fn same_digest(a: &[u8], b: &[u8]) -> bool {
    digest(a) == digest(b)
}

fn compress(state: &mut [u32; 4], block: &[u8]) {
    let mut m = [0u32; 16];
    for (word, bytes) in m.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }

    let [mut a, mut b, mut c, mut d] = *state;
    for i in 0..64 {
        let (f, g) = match i {
            0..=15 => ((b & c) | (!b & d), i),
            16..=31 => ((d & b) | (!d & c), (5 * i + 1) % 16),
            32..=47 => (b ^ c ^ d, (3 * i + 5) % 16),
            _ => (c ^ (b | !d), (7 * i) % 16),
        };

        let rotated = f
            .wrapping_add(a)
            .wrapping_add(K[i])
            .wrapping_add(m[g])
            .rotate_left(SHIFTS[i]);
        a = d;
        d = c;
        c = b;
        b = b.wrapping_add(rotated);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}
