use num_bigint::BigUint;
use rand::{thread_rng, Rng};

use crate::utils::byte_len;
use crate::{Bit, Direction};

mod bit;

const TEST_VECTORS: [u64; 15] = [
    0x0000000000000000,
    0x0000000000000001,
    0x8000000000000000,
    0x8000000000000001,
    0x5555555555555555,
    0xAAAAAAAAAAAAAAAA,
    0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFFFFFFFFFE,
    0x7FFFFFFFFFFFFFFF,
    0x7FFFFFFFFFFFFFFE,
    0x0123456789ABCDEF,
    0x257F4883E5289CD4,
    0x473E039541FD0E85,
    0x3D69139463520062,
    0xE3B4B05FB914863D,
];

const FILLS: [Bit; 2] = [Bit::Zero, Bit::One];

/// Mask of the `size` low bits of a 64 bits word, `size` < 64.
fn low_mask(size: usize) -> u64 {
    u64::MAX.checked_shr((64 - size) as u32).unwrap_or(0)
}

/// Closed form of a bit shift applied to the `size` low bits of `src`, everything above `size`
/// being passed through.
fn expected_u64(src: u64, size: usize, shift: usize, direction: Direction, fill: Bit) -> u64 {
    let mask = low_mask(size);
    let shift = shift.min(size);
    let ones = low_mask(shift);
    match direction {
        Direction::Left => {
            let pad = if fill == Bit::One { ones } else { 0 };
            ((src << shift) & mask) | (src & !mask) | pad
        }
        Direction::Right => {
            let pad = if fill == Bit::One { ones << (size - shift) } else { 0 };
            ((src & mask) >> shift) | (src & !mask) | pad
        }
    }
}

fn random_bytes(length: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; length];
    thread_rng().fill(&mut bytes[..]);
    bytes
}

fn bigint_mask(size: usize) -> BigUint {
    (BigUint::from(1u8) << size) - 1u8
}

/// Logical value of the `size` bits string stored in `bytes`.
fn to_bigint(bytes: &[u8], size: usize) -> BigUint {
    BigUint::from_bytes_le(&bytes[..byte_len(size)]) & bigint_mask(size)
}

/// Arbitrary precision reference of a bit shift on a `size` bits value.
fn expected_bigint(
    value: &BigUint,
    size: usize,
    shift: usize,
    direction: Direction,
    fill: Bit,
) -> BigUint {
    let shift = shift.min(size);
    let pad = match fill {
        Bit::Zero => BigUint::from(0u8),
        Bit::One => bigint_mask(shift),
    };
    match direction {
        Direction::Left => ((value << shift) & bigint_mask(size)) | pad,
        Direction::Right => (value >> shift) | (pad << (size - shift)),
    }
}

/// Check that `result` holds `expected` in its `size` logical bits and that every other bit,
/// out-of-band bits included, is identical to `src`.
fn assert_shifted(result: &[u8], src: &[u8], size: usize, expected: &BigUint) {
    assert_eq!(result.len(), src.len());
    assert_eq!(&to_bigint(result, size), expected, "logical bits, size {}", size);
    if size % 8 != 0 {
        let top = byte_len(size) - 1;
        let mask = 0xFFu8 << (size % 8);
        assert_eq!(result[top] & mask, src[top] & mask, "tail bits, size {}", size);
    }
    assert_eq!(
        &result[byte_len(size)..],
        &src[byte_len(size)..],
        "bytes past the bit string, size {}",
        size
    );
}
