//! A typed view over a bit string living in caller memory.
//!
//! [`BitField`] borrows a byte slice and gives it a logical length in bits. It never reallocates
//! nor touches bytes past `ceil(len / 8)`, and its shifts keep the out-of-band bits of the last
//! byte intact, so it can wrap a sub-field of a larger structure.

use std::fmt::{Binary, Display};

use crate::iter::BitIterator;
use crate::utils::byte_len;
use crate::{shift_in_place, Bit, Bits, Direction, ShiftError};

/// A mutable bit string of `len` bits backed by a borrowed byte slice.
#[derive(Debug, PartialEq, Eq)]
pub struct BitField<'a> {
    data: &'a mut [u8],
    length: usize,
}

impl<'a> BitField<'a> {
    /// Wrap the first `ceil(length / 8)` bytes of `data` as a bit string of `length` bits.
    /// Return an error if `data` is too small.
    pub fn new(data: &'a mut [u8], length: usize) -> Result<Self, ShiftError> {
        let required = byte_len(length);
        if data.len() < required {
            return Err(ShiftError::BufferTooSmall {
                required,
                actual: data.len(),
            });
        }
        Ok(BitField { data, length })
    }

    /// Return the length of the bit string in bits.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Return wether the bit string is empty or not.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Return the bit at `index`.
    /// Will panic if `index` is out of bound.
    pub fn get(&self, index: usize) -> Bit {
        assert!(index < self.length, "index {} out of bound", index);
        Bit::of_byte(self.data[index / 8], index % 8)
    }

    /// Set the bit at `index`.
    /// Will panic if `index` is out of bound.
    pub fn set(&mut self, index: usize, bit: Bit) {
        assert!(index < self.length, "index {} out of bound", index);
        let b = &mut self.data[index / 8];
        *b = (*b & !(1 << (index % 8))) | (u8::from(bit) << (index % 8));
    }

    /// Shift the bits to the left by `amount` positions, filling the low bits with `fill`.
    /// Shifting by `len()` or more sets every bit to `fill`.
    pub fn shl(&mut self, amount: usize, fill: Bit) {
        shift_in_place::<Bits>(self.data, self.length, amount, Direction::Left, fill);
    }

    /// Shift the bits to the right by `amount` positions, filling the high bits with `fill`.
    /// Shifting by `len()` or more sets every bit to `fill`.
    pub fn shr(&mut self, amount: usize, fill: Bit) {
        shift_in_place::<Bits>(self.data, self.length, amount, Direction::Right, fill);
    }

    /// Return the bytes backing the bit string, including the out-of-band bits of the last byte.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..byte_len(self.length)]
    }

    pub fn iter(&self) -> BitIterator<'_> {
        BitIterator::new(self.as_bytes(), self.length)
    }
}

impl Binary for BitField<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            f.write_str("0b")?;
        }
        for bit in self.iter().rev() {
            Display::fmt(&bit, f)?;
        }
        Ok(())
    }
}
