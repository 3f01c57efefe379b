/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use alloc::vec::Vec;
use num_traits::Zero;

use super::{Element, Endianness};
use crate::error::{Error, Result};
use crate::utils::{from_endian, to_endian};

/// Sequential, streaming element-by-element reads.
///
/// Only [`read`](DataRead::read) is required; the other methods read one
/// element at a time and can be overridden for efficiency. The default
/// methods stop at the first failed read, so implementations over fixed
/// views override [`read_into`](DataRead::read_into) and
/// [`skip`](DataRead::skip) to fail with [`Error::OutOfRange`] without
/// advancing; stream-backed implementations fail with
/// [`Error::EndOfData`].
pub trait DataRead {
    /// The element type (the type of the result of [`DataRead::read`]).
    type Elem: Element;

    /// Reads an element and advances the current position.
    fn read(&mut self) -> Result<Self::Elem>;

    /// Skips `len` elements.
    fn skip(&mut self, len: usize) -> Result<()> {
        for _ in 0..len {
            self.read()?;
        }
        Ok(())
    }

    /// Reads `size` elements and composes them into a value, with the most
    /// significant element first if `msb` is true.
    ///
    /// `size` cannot exceed [`Element::MAX_ENDIAN`].
    fn read_endian(&mut self, size: usize, msb: bool) -> Result<u64> {
        Error::check_range(0, size, Self::Elem::MAX_ENDIAN)?;
        let mut buffer = [Self::Elem::zero(); 64];
        let buffer = &mut buffer[..size];
        self.read_into(buffer)?;
        Ok(from_endian(buffer, msb))
    }

    /// Like [`read_endian`](DataRead::read_endian), with a static
    /// endianness.
    #[inline(always)]
    fn read_uint<E: Endianness>(&mut self, size: usize) -> Result<u64> {
        self.read_endian(size, E::MSB)
    }

    /// Fills `dest` with the next `dest.len()` elements.
    fn read_into(&mut self, dest: &mut [Self::Elem]) -> Result<()> {
        for element in dest.iter_mut() {
            *element = self.read()?;
        }
        Ok(())
    }

    /// Reads the next `len` elements into a new vector.
    fn read_vec(&mut self, len: usize) -> Result<Vec<Self::Elem>> {
        let mut result = alloc::vec![Self::Elem::zero(); len];
        self.read_into(&mut result)?;
        Ok(result)
    }
}

/// Sequential, streaming element-by-element writes.
///
/// Only [`write`](DataWrite::write) is required; the other methods write
/// one element at a time and can be overridden for efficiency. As with
/// [`DataRead`], implementations over fixed views override
/// [`fill`](DataWrite::fill) and [`write_from`](DataWrite::write_from) so
/// that a write past the end changes nothing.
pub trait DataWrite {
    /// The element type (the type of the argument of [`DataWrite::write`]).
    type Elem: Element;

    /// Writes an element and advances the current position.
    fn write(&mut self, value: Self::Elem) -> Result<()>;

    /// Skips `len` elements. By default this writes zeros.
    fn skip(&mut self, len: usize) -> Result<()> {
        self.fill(len, Self::Elem::zero())
    }

    /// Decomposes `value` into `size` elements and writes them, with the
    /// most significant element first if `msb` is true.
    ///
    /// Bits of `value` that do not fit are dropped, unless the `checks`
    /// feature is enabled, in which case [`Error::InvalidEncoding`] is
    /// returned.
    fn write_endian(&mut self, value: u64, size: usize, msb: bool) -> Result<()> {
        Error::check_range(0, size, Self::Elem::MAX_ENDIAN)?;
        #[cfg(feature = "checks")]
        super::provider::check_width::<Self::Elem>(value, size)?;
        let mut buffer = [Self::Elem::zero(); 64];
        let buffer = &mut buffer[..size];
        to_endian(value, buffer, msb);
        self.write_from(buffer)
    }

    /// Like [`write_endian`](DataWrite::write_endian), with a static
    /// endianness.
    #[inline(always)]
    fn write_uint<E: Endianness>(&mut self, value: u64, size: usize) -> Result<()> {
        self.write_endian(value, size, E::MSB)
    }

    /// Writes `len` copies of `value`.
    fn fill(&mut self, len: usize, value: Self::Elem) -> Result<()> {
        for _ in 0..len {
            self.write(value)?;
        }
        Ok(())
    }

    /// Writes all elements of `src`.
    fn write_from(&mut self, src: &[Self::Elem]) -> Result<()> {
        for &element in src {
            self.write(element)?;
        }
        Ok(())
    }

    /// Flushes the underlying sink, if any.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Seekability for [`DataRead`] and [`DataWrite`] cursors over a window.
pub trait DataSeek {
    /// Returns the current position from the start of the window.
    #[must_use]
    fn position(&self) -> usize;

    /// Returns the length of the window the position moves in.
    #[must_use]
    fn limit(&self) -> usize;

    /// Sets the current position; fails with [`Error::OutOfRange`],
    /// leaving the position unchanged, if `position` is beyond the limit.
    fn set_position(&mut self, position: usize) -> Result<()>;

    /// Records the current position for a later [`reset`](DataSeek::reset).
    fn mark(&mut self);

    /// Returns to the last marked position (the start if never marked).
    fn reset(&mut self);

    /// Returns the number of elements between the position and the limit.
    #[inline(always)]
    #[must_use]
    fn remaining(&self) -> usize {
        self.limit().saturating_sub(self.position())
    }
}
