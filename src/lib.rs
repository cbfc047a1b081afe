//! Crate for shifting byte-backed bit strings of arbitrary length.
//!
//! A bit string of `size` bits is stored little endian in `ceil(size / 8)` bytes: the bit at
//! index 0 is the least significant bit of byte 0 and byte indices grow with significance. When
//! `size` is not a multiple of 8, the high bits of the last byte lie outside of the bit string.
//! Those out-of-band bits may belong to unrelated data sharing the byte and every operation of
//! this crate copies them unchanged from the source.
//!
//! Shifts are expressed at one of two granularities, both implementing
//! [`granularity::Granularity`]: [`Bytes`] shifts whole bytes and fills with a byte, [`Bits`]
//! shifts single bits and fills with a [`Bit`]. A single generic entry point, [`shift`], works
//! with disjoint source and destination slices while [`shift_in_place`] works on one slice.
//! Shift amounts larger than the size behave like a shift by the size, turning the whole string
//! into fill. A zero size is always a no-op.
//!
//! The engine never allocates and holds no state between calls. [`BitField`] offers a typed view
//! over a bit string for callers preferring methods over free functions.

use std::fmt::Display;

pub mod bit;
pub mod field;
pub mod granularity;
pub mod iter;
pub mod lanes;
mod utils;

pub use bit::Bit;
pub use field::BitField;
pub use granularity::{Bits, Bytes};
pub use iter::BitIterator;

use granularity::Granularity;
use lanes::{Disjoint, InPlace, Lanes};

/// The direction of a shift.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward higher significance: vacated positions are at the low end.
    Left,
    /// Toward lower significance: vacated positions are at the high end.
    Right,
}

/// An enumeration representing errors which can arise when the storage handed to a shift does
/// not match the request.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ShiftError {
    /// The storage holds fewer bytes than the requested size needs.
    BufferTooSmall { required: usize, actual: usize },
    /// The destination and source slices have different lengths.
    LengthMismatch { dst: usize, src: usize },
}

impl Display for ShiftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftError::BufferTooSmall { required, actual } => write!(
                f,
                "Buffer of {} bytes is too small, {} bytes are required",
                actual, required
            ),
            ShiftError::LengthMismatch { dst, src } => write!(
                f,
                "Destination buffer of {} bytes does not match source buffer of {} bytes",
                dst, src
            ),
        }
    }
}

impl std::error::Error for ShiftError {}

fn run<G: Granularity, L: Lanes>(
    lanes: &mut L,
    size: usize,
    amount: usize,
    direction: Direction,
    fill: G::Fill,
) -> Result<(), ShiftError> {
    let required = G::byte_len(size);
    if lanes.len() < required {
        return Err(ShiftError::BufferTooSmall {
            required,
            actual: lanes.len(),
        });
    }
    if size == 0 {
        return Ok(());
    }
    let amount = amount.min(size);
    match direction {
        Direction::Left => G::shift_left(lanes, size, amount, fill),
        Direction::Right => G::shift_right(lanes, size, amount, fill),
    }
    Ok(())
}

/// Shift the `size` units string held in `src` by `amount` units in `direction` and write the
/// result to `dst`, filling vacated units with `fill`.
///
/// Units are bytes or bits depending on `G`. Only the first `G::byte_len(size)` bytes of the
/// slices are accessed. Out-of-band bits of the last byte are copied from `src`.
///
/// Return an error if the slices differ in length or are too small for `size`.
pub fn try_shift<G: Granularity>(
    dst: &mut [u8],
    src: &[u8],
    size: usize,
    amount: usize,
    direction: Direction,
    fill: G::Fill,
) -> Result<(), ShiftError> {
    let mut lanes = Disjoint::new(dst, src)?;
    run::<G, _>(&mut lanes, size, amount, direction, fill)
}

/// In place variant of [`try_shift`].
pub fn try_shift_in_place<G: Granularity>(
    buf: &mut [u8],
    size: usize,
    amount: usize,
    direction: Direction,
    fill: G::Fill,
) -> Result<(), ShiftError> {
    run::<G, _>(&mut InPlace::new(buf), size, amount, direction, fill)
}

/// Shift the `size` units string held in `src` by `amount` units in `direction` and write the
/// result to `dst`, filling vacated units with `fill`.
/// Will panic if the slices differ in length or are too small for `size`, see [`try_shift`].
pub fn shift<G: Granularity>(
    dst: &mut [u8],
    src: &[u8],
    size: usize,
    amount: usize,
    direction: Direction,
    fill: G::Fill,
) {
    if let Err(e) = try_shift::<G>(dst, src, size, amount, direction, fill) {
        panic!("{}", e);
    }
}

/// Shift the `size` units string held in `buf` by `amount` units in `direction`, filling vacated
/// units with `fill`.
/// Will panic if `buf` is too small for `size`, see [`try_shift_in_place`].
pub fn shift_in_place<G: Granularity>(
    buf: &mut [u8],
    size: usize,
    amount: usize,
    direction: Direction,
    fill: G::Fill,
) {
    if let Err(e) = try_shift_in_place::<G>(buf, size, amount, direction, fill) {
        panic!("{}", e);
    }
}

/// Shift `byte_size` bytes left by `byte_shift` bytes, filling the low bytes with `fill`.
pub fn shl_bytes(dst: &mut [u8], src: &[u8], byte_size: usize, byte_shift: usize, fill: u8) {
    shift::<Bytes>(dst, src, byte_size, byte_shift, Direction::Left, fill)
}

/// Shift `byte_size` bytes right by `byte_shift` bytes, filling the high bytes with `fill`.
pub fn shr_bytes(dst: &mut [u8], src: &[u8], byte_size: usize, byte_shift: usize, fill: u8) {
    shift::<Bytes>(dst, src, byte_size, byte_shift, Direction::Right, fill)
}

/// Shift a `size` bits string left by `shift` bits, filling the low bits with `fill`.
pub fn shl_bits(dst: &mut [u8], src: &[u8], size: usize, shift: usize, fill: Bit) {
    self::shift::<Bits>(dst, src, size, shift, Direction::Left, fill)
}

/// Shift a `size` bits string right by `shift` bits, filling the high bits with `fill`.
pub fn shr_bits(dst: &mut [u8], src: &[u8], size: usize, shift: usize, fill: Bit) {
    self::shift::<Bits>(dst, src, size, shift, Direction::Right, fill)
}

pub fn shl_bytes_in_place(buf: &mut [u8], byte_size: usize, byte_shift: usize, fill: u8) {
    shift_in_place::<Bytes>(buf, byte_size, byte_shift, Direction::Left, fill)
}

pub fn shr_bytes_in_place(buf: &mut [u8], byte_size: usize, byte_shift: usize, fill: u8) {
    shift_in_place::<Bytes>(buf, byte_size, byte_shift, Direction::Right, fill)
}

pub fn shl_bits_in_place(buf: &mut [u8], size: usize, shift: usize, fill: Bit) {
    shift_in_place::<Bits>(buf, size, shift, Direction::Left, fill)
}

pub fn shr_bits_in_place(buf: &mut [u8], size: usize, shift: usize, fill: Bit) {
    shift_in_place::<Bits>(buf, size, shift, Direction::Right, fill)
}

#[cfg(test)]
mod tests;
