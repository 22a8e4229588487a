//! Byte-level block helpers: XOR feedback and length padding.

use crate::error::{Rc5Error, Result};

/// XORs `rhs` into `dst` over their common length.
#[inline]
pub(crate) fn xor_in_place(dst: &mut [u8], rhs: &[u8]) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Appends `block_size - len % block_size` bytes, each holding that count.
/// Aligned input gains a full block.
///
/// `block_size` is a cipher block size, `4..=16`, so the count fits a byte.
pub(crate) fn pad(input: &[u8], block_size: usize) -> Vec<u8> {
    debug_assert!((1..=usize::from(u8::MAX)).contains(&block_size));
    let pad_len = block_size - input.len() % block_size;
    let mut padded = Vec::with_capacity(input.len() + pad_len);
    padded.extend_from_slice(input);
    padded.resize(input.len() + pad_len, pad_len as u8);
    padded
}

/// Strips padding, reading the final byte as the number of bytes to drop.
pub(crate) fn unpad(buf: &mut Vec<u8>) -> Result<()> {
    let available = buf.len();
    let pad = match buf.last() {
        Some(&pad) if usize::from(pad) <= available => pad,
        last => {
            return Err(Rc5Error::InvalidPadding {
                pad: last.copied().unwrap_or(0),
                available,
            })
        }
    };
    buf.truncate(available - usize::from(pad));
    Ok(())
}
