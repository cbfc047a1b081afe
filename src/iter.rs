use std::ops::Range;

use crate::utils::byte_len;
use crate::Bit;

/// An iterator over the logical bits of a byte-backed bit string, from the least significant
/// bit upward. Out-of-band bits of the last byte are never yielded.
#[derive(Clone, Debug)]
pub struct BitIterator<'a> {
    bytes: &'a [u8],
    range: Range<usize>,
}

impl<'a> BitIterator<'a> {
    /// Iterate over the first `len` bits stored in `bytes`.
    /// Will panic if `bytes` holds fewer than `ceil(len / 8)` bytes.
    pub fn new(bytes: &'a [u8], len: usize) -> Self {
        assert!(
            bytes.len() >= byte_len(len),
            "{} bits do not fit in {} bytes",
            len,
            bytes.len()
        );
        Self {
            bytes,
            range: 0..len,
        }
    }

    fn bit(&self, idx: usize) -> Bit {
        Bit::of_byte(self.bytes[idx / 8], idx % 8)
    }
}

impl Iterator for BitIterator<'_> {
    type Item = Bit;

    fn next(&mut self) -> Option<Self::Item> {
        if self.range.start < self.range.end {
            let bit = self.bit(self.range.start);
            self.range.start += 1;
            Some(bit)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.range.end - self.range.start;
        (remaining, Some(remaining))
    }

    fn count(self) -> usize {
        self.range.end - self.range.start
    }

    fn last(self) -> Option<Self::Item> {
        if self.range.start < self.range.end {
            Some(self.bit(self.range.end - 1))
        } else {
            None
        }
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if n < self.range.end - self.range.start {
            let bit = self.bit(self.range.start + n);
            self.range.start += n + 1;
            Some(bit)
        } else {
            self.range.start = self.range.end;
            None
        }
    }
}

impl ExactSizeIterator for BitIterator<'_> {}

impl DoubleEndedIterator for BitIterator<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.range.start < self.range.end {
            self.range.end -= 1;
            Some(self.bit(self.range.end))
        } else {
            None
        }
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        if n < self.range.end - self.range.start {
            self.range.end -= n + 1;
            Some(self.bit(self.range.end))
        } else {
            self.range.end = self.range.start;
            None
        }
    }
}
