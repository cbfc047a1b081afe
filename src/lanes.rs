//! Byte stores traversed by the shift strategies.
//!
//! A shift reads source bytes and writes destination bytes through the [`Lanes`] trait. The two
//! provided implementations cover the aliasing patterns supported by the crate: [`Disjoint`]
//! reads from one slice and writes to another, [`InPlace`] reads and writes the same slice.
//!
//! Every strategy in [`crate::granularity`] only loads a byte before storing to it, never after,
//! so [`InPlace`] produces the same result as [`Disjoint`] with a copy of the source.

use crate::ShiftError;

/// A byte store read as a source and written as a destination.
pub trait Lanes {
    /// Number of bytes available, for both reading and writing.
    fn len(&self) -> usize;

    /// Read the source byte at `idx`.
    /// Will panic if `idx` is out of bound.
    fn load(&self, idx: usize) -> u8;

    /// Write the destination byte at `idx`.
    /// Will panic if `idx` is out of bound.
    fn store(&mut self, idx: usize, value: u8);

    /// Return wether the store is empty or not.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A source slice and a distinct destination slice of identical length.
#[derive(Debug)]
pub struct Disjoint<'a> {
    dst: &'a mut [u8],
    src: &'a [u8],
}

impl<'a> Disjoint<'a> {
    /// Pair `dst` with `src`. Both slices must have the same length.
    pub fn new(dst: &'a mut [u8], src: &'a [u8]) -> Result<Self, ShiftError> {
        if dst.len() != src.len() {
            return Err(ShiftError::LengthMismatch {
                dst: dst.len(),
                src: src.len(),
            });
        }
        Ok(Disjoint { dst, src })
    }
}

impl Lanes for Disjoint<'_> {
    fn len(&self) -> usize {
        self.dst.len()
    }

    fn load(&self, idx: usize) -> u8 {
        self.src[idx]
    }

    fn store(&mut self, idx: usize, value: u8) {
        self.dst[idx] = value;
    }
}

/// A single slice acting as both source and destination.
#[derive(Debug)]
pub struct InPlace<'a> {
    buf: &'a mut [u8],
}

impl<'a> InPlace<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        InPlace { buf }
    }
}

impl Lanes for InPlace<'_> {
    fn len(&self) -> usize {
        self.buf.len()
    }

    fn load(&self, idx: usize) -> u8 {
        self.buf[idx]
    }

    fn store(&mut self, idx: usize, value: u8) {
        self.buf[idx] = value;
    }
}

/// Wraps another store so that writes to the byte at `top` keep the bits selected by `mask`
/// as they were in the source when the guard was created.
pub(crate) struct TailGuard<'l, L: Lanes> {
    inner: &'l mut L,
    top: usize,
    mask: u8,
    bits: u8,
}

impl<'l, L: Lanes> TailGuard<'l, L> {
    pub(crate) fn new(inner: &'l mut L, top: usize, mask: u8) -> Self {
        let bits = inner.load(top) & mask;
        TailGuard {
            inner,
            top,
            mask,
            bits,
        }
    }
}

impl<L: Lanes> Lanes for TailGuard<'_, L> {
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn load(&self, idx: usize) -> u8 {
        self.inner.load(idx)
    }

    fn store(&mut self, idx: usize, value: u8) {
        if idx == self.top {
            self.inner.store(idx, (value & !self.mask) | self.bits);
        } else {
            self.inner.store(idx, value);
        }
    }
}
