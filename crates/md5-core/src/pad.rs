//! Message padding.

/// Compression block length in bytes.
pub const BLOCK_LEN: usize = 64;

/// Offset of the length suffix inside the final block.
const LENGTH_OFFSET: usize = 56;

/// Pads `input` to a multiple of [`BLOCK_LEN`]: a single `0x80` byte, zero
/// bytes up to 56 mod 64, then the message length in bits as a little-endian
/// `u64`.
pub fn pad(input: &[u8]) -> Vec<u8> {
    let zeros = (BLOCK_LEN + LENGTH_OFFSET - (input.len() + 1) % BLOCK_LEN) % BLOCK_LEN;
    let total = input.len() + 1 + zeros + 8;
    let bit_len = (input.len() as u64).wrapping_mul(8);

    let mut padded = Vec::with_capacity(total);
    padded.extend_from_slice(input);
    padded.push(0x80);
    padded.resize(total - 8, 0);
    padded.extend_from_slice(&bit_len.to_le_bytes());
    padded
}
