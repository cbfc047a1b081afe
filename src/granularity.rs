//! Shift strategies at byte and bit granularity.
//!
//! Both strategies implement [`Granularity`] and expect a request already normalized by the
//! drivers of the crate root: a non-zero `size`, a `shift` no larger than `size` and a store
//! holding at least [`Granularity::byte_len`] bytes.

use std::cmp::Ordering;

use crate::lanes::{Lanes, TailGuard};
use crate::utils::{byte_len, tail_mask};
use crate::Bit;

/// The unit in which sizes, shift amounts and fill values of a shift are expressed.
pub trait Granularity {
    /// The value written into every vacated unit.
    type Fill: Copy;

    /// Number of bytes backing a string of `size` units.
    fn byte_len(size: usize) -> usize;

    /// Shift `size` units toward higher significance by `shift` units.
    fn shift_left<L: Lanes>(lanes: &mut L, size: usize, shift: usize, fill: Self::Fill);

    /// Shift `size` units toward lower significance by `shift` units.
    fn shift_right<L: Lanes>(lanes: &mut L, size: usize, shift: usize, fill: Self::Fill);
}

/// Whole byte granularity: sizes and shifts count bytes, the fill is a full byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Bytes;

/// Single bit granularity: sizes and shifts count bits, the fill is a single [`Bit`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Bits;

impl Granularity for Bytes {
    type Fill = u8;

    fn byte_len(size: usize) -> usize {
        size
    }

    fn shift_left<L: Lanes>(lanes: &mut L, size: usize, shift: usize, fill: u8) {
        // Descending so a byte is always read before the write that could clobber it.
        for i in (shift..size).rev() {
            let v = lanes.load(i - shift);
            lanes.store(i, v);
        }
        for i in 0..shift {
            lanes.store(i, fill);
        }
    }

    fn shift_right<L: Lanes>(lanes: &mut L, size: usize, shift: usize, fill: u8) {
        let kept = size - shift;
        for i in 0..kept {
            let v = lanes.load(i + shift);
            lanes.store(i, v);
        }
        for i in kept..size {
            lanes.store(i, fill);
        }
    }
}

impl Granularity for Bits {
    type Fill = Bit;

    fn byte_len(size: usize) -> usize {
        byte_len(size)
    }

    fn shift_left<L: Lanes>(lanes: &mut L, size: usize, shift: usize, fill: Bit) {
        let fill8 = fill.replicate();
        let byte_size = byte_len(size);
        let top = byte_size - 1;
        let lsb = shift / 8;
        let r = shift % 8;
        let mut lanes = TailGuard::new(lanes, top, tail_mask(size));

        if r == 0 {
            Bytes::shift_left(&mut lanes, byte_size, lsb, fill8);
            return;
        }

        // r != 0 implies lsb * 8 < size, hence lsb <= top.
        let mut hi = lanes.load(top - lsb);
        for i in (lsb..byte_size).rev() {
            let lo = if i > lsb {
                lanes.load(i - lsb - 1)
            } else {
                fill8
            };
            lanes.store(i, (hi << r) | (lo >> (8 - r)));
            hi = lo;
        }
        for i in 0..lsb {
            lanes.store(i, fill8);
        }
    }

    fn shift_right<L: Lanes>(lanes: &mut L, size: usize, shift: usize, fill: Bit) {
        let fill8 = fill.replicate();
        let byte_size = byte_len(size);
        let top = byte_size - 1;
        let mask = tail_mask(size);
        let lsb = shift / 8;
        let r = shift % 8;
        let mut lanes = TailGuard::new(lanes, top, mask);

        if r == 0 && mask == 0 {
            Bytes::shift_right(&mut lanes, byte_size, lsb, fill8);
            return;
        }

        // The top byte is read with its out-of-band bits replaced by fill, and anything past it
        // is pure fill, so the bits entering the logical range from above are always fill.
        let source = |lanes: &TailGuard<'_, L>, idx: usize| match idx.cmp(&top) {
            Ordering::Less => lanes.load(idx),
            Ordering::Equal => (lanes.load(idx) & !mask) | (fill8 & mask),
            Ordering::Greater => fill8,
        };

        // Either r != 0 or the size is not byte aligned; both imply lsb <= top.
        let kept = byte_size - lsb;
        let mut lo = source(&lanes, lsb);
        for i in 0..kept {
            let hi = source(&lanes, i + lsb + 1);
            let v = if r == 0 {
                lo
            } else {
                (lo >> r) | (hi << (8 - r))
            };
            lanes.store(i, v);
            lo = hi;
        }
        for i in kept..byte_size {
            lanes.store(i, fill8);
        }
    }
}
