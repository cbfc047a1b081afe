/// Number of bytes needed to store `size` bits.
pub(crate) fn byte_len(size: usize) -> usize {
    size / 8 + usize::from(size % 8 != 0)
}

/// Mask selecting the out-of-band bits of the last byte of a `size` bits string.
/// Zero when `size` is a multiple of 8.
pub(crate) fn tail_mask(size: usize) -> u8 {
    match size % 8 {
        0 => 0,
        r => 0xFF << r,
    }
}
