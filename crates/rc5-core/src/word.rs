//! Fixed-width words the cipher operates on.
//!
//! [`Word`] is implemented for `u16`, `u32` and `u64`. All arithmetic wraps
//! modulo `2^BITS` and rotation amounts are reduced modulo `BITS`, so no
//! operation can fail except a byte access outside the supplied buffer.
//! Operations take `self` by value and return a new word; there is no shared
//! mutable state between words.

use std::fmt::Debug;

use crate::error::{Rc5Error, Result};

/// Unsigned word of a fixed bit width.
pub trait Word: Copy + Default + Eq + Debug + Send + Sync + 'static {
    /// Width in bits.
    const BITS: u32;
    /// Width in bytes.
    const BYTES: usize;
    /// Magic constant `P_w` seeding the key table.
    const P: Self;
    /// Magic constant `Q_w` stepping the key table.
    const Q: Self;

    /// Reads [`Self::BYTES`] little-endian bytes starting at `offset`.
    fn from_bytes(buf: &[u8], offset: usize) -> Result<Self>;

    /// Writes [`Self::BYTES`] little-endian bytes starting at `offset`.
    fn to_bytes(self, buf: &mut [u8], offset: usize) -> Result<()>;

    /// Little-endian read of at most [`Self::BYTES`] bytes; missing high
    /// bytes are zero.
    fn from_le_slice(bytes: &[u8]) -> Self;

    /// Little-endian write of the low `out.len()` bytes (at most
    /// [`Self::BYTES`]).
    fn write_le_slice(self, out: &mut [u8]);

    /// Circular left shift by `n mod BITS`.
    fn rotl(self, n: u32) -> Self;

    /// Circular right shift by `n mod BITS`.
    fn rotr(self, n: u32) -> Self;

    /// Wrapping addition.
    fn add_word(self, other: Self) -> Self;

    /// Wrapping addition of a single byte.
    fn add_byte(self, byte: u8) -> Self;

    /// Wrapping subtraction.
    fn sub_word(self, other: Self) -> Self;

    /// Bitwise exclusive or.
    fn xor_word(self, other: Self) -> Self;

    /// Low 32 bits, used as a data-dependent rotation amount.
    fn rotation(self) -> u32;
}

fn access_range(offset: usize, width: usize, available: usize) -> Result<std::ops::Range<usize>> {
    match offset.checked_add(width) {
        Some(end) if end <= available => Ok(offset..end),
        end => Err(Rc5Error::BufferTooShort {
            needed: end.unwrap_or(usize::MAX),
            available,
        }),
    }
}

macro_rules! impl_word {
    ($ty:ty, $p:literal, $q:literal) => {
        impl Word for $ty {
            const BITS: u32 = <$ty>::BITS;
            const BYTES: usize = std::mem::size_of::<$ty>();
            const P: Self = $p;
            const Q: Self = $q;

            fn from_bytes(buf: &[u8], offset: usize) -> Result<Self> {
                let range = access_range(offset, Self::BYTES, buf.len())?;
                Ok(Self::from_le_slice(&buf[range]))
            }

            fn to_bytes(self, buf: &mut [u8], offset: usize) -> Result<()> {
                let range = access_range(offset, Self::BYTES, buf.len())?;
                self.write_le_slice(&mut buf[range]);
                Ok(())
            }

            #[inline]
            fn from_le_slice(bytes: &[u8]) -> Self {
                let mut raw = [0u8; std::mem::size_of::<$ty>()];
                let n = bytes.len().min(raw.len());
                raw[..n].copy_from_slice(&bytes[..n]);
                <$ty>::from_le_bytes(raw)
            }

            #[inline]
            fn write_le_slice(self, out: &mut [u8]) {
                let raw = self.to_le_bytes();
                let n = out.len().min(raw.len());
                out[..n].copy_from_slice(&raw[..n]);
            }

            #[inline]
            fn rotl(self, n: u32) -> Self {
                self.rotate_left(n % Self::BITS)
            }

            #[inline]
            fn rotr(self, n: u32) -> Self {
                self.rotate_right(n % Self::BITS)
            }

            #[inline]
            fn add_word(self, other: Self) -> Self {
                self.wrapping_add(other)
            }

            #[inline]
            fn add_byte(self, byte: u8) -> Self {
                self.wrapping_add(Self::from(byte))
            }

            #[inline]
            fn sub_word(self, other: Self) -> Self {
                self.wrapping_sub(other)
            }

            #[inline]
            fn xor_word(self, other: Self) -> Self {
                self ^ other
            }

            #[inline]
            fn rotation(self) -> u32 {
                self as u32
            }
        }
    };
}

impl_word!(u16, 0xB7E1, 0x9E37);
impl_word!(u32, 0xB7E1_5162, 0x9E37_79B9);
impl_word!(u64, 0xB7E1_5162_8AED_2A6B, 0x9E37_79B9_7F4A_7C15);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_and_writes_little_endian() {
        let buf = [0xAA, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        assert_eq!(u16::from_bytes(&buf, 1).unwrap(), 0x0201);
        assert_eq!(u32::from_bytes(&buf, 1).unwrap(), 0x0403_0201);
        assert_eq!(u64::from_bytes(&buf, 1).unwrap(), 0x0807_0605_0403_0201);

        let mut out = [0u8; 6];
        0x0403_0201u32.to_bytes(&mut out, 2).unwrap();
        assert_eq!(out, [0, 0, 1, 2, 3, 4]);
    }

    #[test]
    fn access_past_end_fails() {
        let buf = [0u8; 5];
        assert_eq!(
            u32::from_bytes(&buf, 2),
            Err(Rc5Error::BufferTooShort {
                needed: 6,
                available: 5
            })
        );
        let mut out = [0u8; 7];
        assert_eq!(
            0u64.to_bytes(&mut out, 0),
            Err(Rc5Error::BufferTooShort {
                needed: 8,
                available: 7
            })
        );
        assert!(u16::from_bytes(&buf, usize::MAX).is_err());
    }

    #[test]
    fn rotation_amounts_wrap_at_width() {
        assert_eq!(0x8001u16.rotl(1), 0x0003);
        assert_eq!(0x8001u16.rotl(17), 0x0003);
        assert_eq!(0x8001u16.rotr(16), 0x8001);
        assert_eq!(0x1234_5678u32.rotl(0), 0x1234_5678);
        assert_eq!(0x1234_5678u32.rotl(36), 0x2345_6781);
        assert_eq!(1u64.rotr(65), 0x8000_0000_0000_0000);
    }

    #[test]
    fn rotate_left_then_right_is_identity() {
        for n in 0..130 {
            let w = 0xDEAD_BEEF_0BAD_F00Du64;
            assert_eq!(w.rotl(n).rotr(n), w);
        }
    }

    #[test]
    fn arithmetic_wraps() {
        assert_eq!(0xFFFFu16.add_word(2), 1);
        assert_eq!(0u32.sub_word(1), u32::MAX);
        assert_eq!(0xFFu16.add_byte(0x01), 0x100);
        assert_eq!(u64::MAX.add_byte(1), 0);
        assert_eq!(0b1100u32.xor_word(0b1010), 0b0110);
    }

    #[test]
    fn rotation_uses_low_bits() {
        assert_eq!(0x1_0000_0021u64.rotation(), 0x21);
        assert_eq!(0x1_0000_0021u64.rotation() % u64::BITS, 33);
    }
}
