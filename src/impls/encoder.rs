/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use alloc::vec::Vec;

use super::{Span, SpanMut};
use crate::error::{Error, Result};
use crate::traits::*;

/// The state of an [`Encoder`].
///
/// Freezing is not a state: [`Encoder::freeze`] consumes the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncoderState {
    /// Nothing has been written yet.
    Empty,
    /// At least one write succeeded.
    Growing,
    /// A write would have exceeded the maximum; all further writes fail.
    Failed,
}

/// A growable buffer implementing [`DataWrite`], [`DataRead`], [`DataSeek`]
/// and [`Provider`].
///
/// The length of the encoder is the largest position ever reached by a
/// write (or the initial length). Writes grow the buffer as needed, up to a
/// maximum: the capacity doubles, starting from
/// [`SIZE_DEFAULT`](Encoder::SIZE_DEFAULT), and is clamped to the maximum.
/// A write that would exceed the maximum fails with
/// [`Error::CapacityExceeded`] and leaves the encoder in the
/// [`Failed`](EncoderState::Failed) state, in which every write fails.
/// Reads never grow the buffer and fail with [`Error::OutOfRange`] past the
/// length.
///
/// Note that [`skip`](Encoder::skip) on an encoder is the writing skip: use
/// `DataRead::skip(&mut encoder, len)` to skip while reading.
///
/// # Example
/// ```
/// use data_substrate::prelude::*;
///
/// let mut encoder = Encoder::<u8>::new();
/// encoder.write_u32::<BE>(0x01020304).unwrap();
/// encoder.write_from(&[5, 6]).unwrap();
///
/// // rewrite the header
/// encoder.set_position(0).unwrap();
/// encoder.write_u16::<LE>(0xaabb).unwrap();
///
/// let span = encoder.freeze();
/// assert_eq!(span.as_slice(), &[0xbb, 0xaa, 3, 4, 5, 6]);
///
/// let mut encoder = Encoder::<u16>::with_max(1);
/// encoder.write(1).unwrap();
/// assert!(matches!(encoder.write(2), Err(Error::CapacityExceeded { required: 2, max: 1 })));
/// assert_eq!(encoder.state(), EncoderState::Failed);
/// ```
#[derive(Debug, Clone)]
pub struct Encoder<T: Element> {
    data: Vec<T>,
    capacity: usize,
    max: usize,
    position: usize,
    mark: usize,
    state: EncoderState,
}

impl<T: Element> Encoder<T> {
    /// The initial capacity of a default encoder, and the minimum capacity
    /// after growth.
    pub const SIZE_DEFAULT: usize = 32;

    /// The default maximum length.
    pub const MAX_DEFAULT: usize = isize::MAX as usize / core::mem::size_of::<T>();

    /// Creates an empty encoder with default capacity and maximum.
    #[must_use]
    pub fn new() -> Self {
        Self::with_max(Self::MAX_DEFAULT)
    }

    /// Creates an empty encoder that cannot grow beyond `max` elements.
    #[must_use]
    pub fn with_max(max: usize) -> Self {
        let capacity = Self::SIZE_DEFAULT.min(max);
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
            max,
            position: 0,
            mark: 0,
            state: EncoderState::Empty,
        }
    }

    /// Creates an encoder of initial length `len`, filled with zeros, and
    /// of matching capacity, that cannot grow beyond `max` elements.
    ///
    /// Useful to avoid growth (and a trimming copy on
    /// [`freeze`](Encoder::freeze)) if the final length is known.
    pub fn with_len(len: usize, max: usize) -> Result<Self> {
        if len > max {
            return Err(Error::CapacityExceeded { required: len, max });
        }
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| Error::CapacityExceeded { required: len, max })?;
        data.resize(len, T::zero());
        Ok(Self {
            data,
            capacity: len,
            max,
            position: 0,
            mark: 0,
            state: EncoderState::Empty,
        })
    }

    /// Creates an encoder of fixed length `len`, filled with zeros, that
    /// cannot grow.
    pub fn fixed(len: usize) -> Result<Self> {
        Self::with_len(len, len)
    }

    /// Returns the current physical capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the maximum length.
    #[must_use]
    pub fn max(&self) -> usize {
        self.max
    }

    #[must_use]
    pub fn state(&self) -> EncoderState {
        self.state
    }

    /// Returns the elements written so far, up to the length.
    #[inline(always)]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns a mutable view over `[0, len)`.
    ///
    /// The view borrows the encoder, so it cannot outlive a subsequent
    /// growth of the buffer.
    pub fn as_mut_view(&mut self) -> SpanMut<'_, T> {
        SpanMut::wrap(&mut self.data)
    }

    /// Skips `len` elements, growing the encoder if needed. New elements
    /// are zero; elements within the current length are left unchanged.
    pub fn skip(&mut self, len: usize) -> Result<()> {
        self.write_inc(len).map(|_| ())
    }

    /// Freezes the encoder into an immutable [`Span`] of exactly
    /// [`len`](Provider::len) elements.
    ///
    /// The buffer is moved into the span; unused capacity is released,
    /// which might imply a copy.
    #[must_use]
    pub fn freeze(self) -> Span<T> {
        let mut data = self.data;
        data.shrink_to_fit();
        Span::wrap(data)
    }

    /// Returns the written elements, up to the length.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Returns the current position and advances it by `len` within the
    /// current length.
    fn read_inc(&mut self, len: usize) -> Result<usize> {
        let index = self.position;
        Error::check_range(index, len, self.data.len())?;
        self.position += len;
        Ok(index)
    }

    /// Returns the current position and advances it by `len`, growing the
    /// buffer and extending the length as needed.
    fn write_inc(&mut self, len: usize) -> Result<usize> {
        let index = self.position;
        let required = match index.checked_add(len) {
            Some(required) if required <= self.max && self.state != EncoderState::Failed => {
                required
            }
            _ => {
                self.state = EncoderState::Failed;
                return Err(Error::CapacityExceeded {
                    required: index.saturating_add(len),
                    max: self.max,
                });
            }
        };
        self.grow(required)?;
        if required > self.data.len() {
            self.data.resize(required, T::zero());
        }
        self.position = required;
        self.state = EncoderState::Growing;
        Ok(index)
    }

    fn grow(&mut self, required: usize) -> Result<()> {
        if required <= self.capacity {
            return Ok(());
        }
        let mut capacity = self.capacity.saturating_mul(2).min(self.max);
        if capacity < Self::SIZE_DEFAULT {
            capacity = Self::SIZE_DEFAULT.min(self.max);
        }
        capacity = capacity.max(required);
        log::trace!(
            "growing encoder from {} to {} elements (required {}, max {})",
            self.capacity,
            capacity,
            required,
            self.max
        );
        if self
            .data
            .try_reserve_exact(capacity - self.data.len())
            .is_err()
        {
            self.state = EncoderState::Failed;
            return Err(Error::CapacityExceeded {
                required,
                max: self.max,
            });
        }
        self.capacity = capacity;
        Ok(())
    }
}

impl<T: Element> Default for Encoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> DataWrite for Encoder<T> {
    type Elem = T;

    #[inline]
    fn write(&mut self, value: T) -> Result<()> {
        let index = self.write_inc(1)?;
        self.data[index] = value;
        Ok(())
    }

    fn skip(&mut self, len: usize) -> Result<()> {
        Encoder::skip(self, len)
    }

    fn fill(&mut self, len: usize, value: T) -> Result<()> {
        let index = self.write_inc(len)?;
        self.data[index..index + len].fill(value);
        Ok(())
    }

    fn write_from(&mut self, src: &[T]) -> Result<()> {
        let index = self.write_inc(src.len())?;
        self.data[index..index + src.len()].copy_from_slice(src);
        Ok(())
    }
}

impl<T: Element> DataRead for Encoder<T> {
    type Elem = T;

    #[inline]
    fn read(&mut self) -> Result<T> {
        let index = self.read_inc(1)?;
        Ok(self.data[index])
    }

    fn skip(&mut self, len: usize) -> Result<()> {
        self.read_inc(len).map(|_| ())
    }

    fn read_into(&mut self, dest: &mut [T]) -> Result<()> {
        let index = self.read_inc(dest.len())?;
        dest.copy_from_slice(&self.data[index..index + dest.len()]);
        Ok(())
    }
}

impl<T: Element> DataSeek for Encoder<T> {
    #[inline(always)]
    fn position(&self) -> usize {
        self.position
    }

    #[inline(always)]
    fn limit(&self) -> usize {
        self.data.len()
    }

    fn set_position(&mut self, position: usize) -> Result<()> {
        Error::check_range(position, 0, self.data.len())?;
        self.position = position;
        Ok(())
    }

    fn mark(&mut self) {
        self.mark = self.position;
    }

    fn reset(&mut self) {
        self.position = self.mark;
    }
}

impl<T: Element> Provider for Encoder<T> {
    type Elem = T;

    #[inline(always)]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    fn get(&self, index: usize) -> Result<T> {
        self.data.get(index).copied().ok_or(Error::OutOfRange {
            index,
            len: 1,
            bound: self.data.len(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_growth() -> Result<()> {
        let mut encoder = Encoder::<u32>::with_max(100);
        assert_eq!(encoder.capacity(), 32);
        assert_eq!(encoder.state(), EncoderState::Empty);
        encoder.fill(32, 7)?;
        assert_eq!(encoder.capacity(), 32);
        encoder.write(8)?;
        assert_eq!(encoder.capacity(), 64);
        encoder.skip(31)?;
        assert_eq!(encoder.capacity(), 64);
        // doubling is clamped to the maximum
        encoder.write(9)?;
        assert_eq!(encoder.capacity(), 100);
        assert_eq!(encoder.len(), 65);
        assert_eq!(encoder.state(), EncoderState::Growing);
        Ok(())
    }

    #[test]
    fn test_growth_to_required() -> Result<()> {
        let mut encoder = Encoder::<u8>::with_len(3, 1000)?;
        assert_eq!(encoder.capacity(), 3);
        encoder.skip(3)?;
        // doubling to 6 is raised to the default size
        encoder.write(1)?;
        assert_eq!(encoder.capacity(), 32);
        // and to the required length if still insufficient
        encoder.write_from(&[0; 100])?;
        assert_eq!(encoder.capacity(), 104);
        assert_eq!(encoder.len(), 104);
        Ok(())
    }

    #[test]
    fn test_failed() -> Result<()> {
        let mut encoder = Encoder::<u64>::with_max(2);
        encoder.write(1)?;
        assert!(encoder.write_from(&[2, 3]).is_err());
        assert_eq!(encoder.state(), EncoderState::Failed);
        assert_eq!(encoder.len(), 1);
        assert!(encoder.write(2).is_err());
        encoder.set_position(0)?;
        assert_eq!(DataRead::read(&mut encoder)?, 1);
        assert_eq!(encoder.freeze().as_slice(), &[1]);
        Ok(())
    }

    #[test]
    fn test_read_back() -> Result<()> {
        let mut encoder = Encoder::<u16>::new();
        encoder.write_from(&[1, 2, 3])?;
        assert!(DataRead::read(&mut encoder).is_err());
        encoder.set_position(1)?;
        assert_eq!(encoder.read_endian(2, true)?, 0x0002_0003);
        assert!(encoder.set_position(4).is_err());
        encoder.set_position(1)?;
        DataRead::skip(&mut encoder, 1)?;
        assert!(DataRead::skip(&mut encoder, 2).is_err());
        assert_eq!(encoder.position(), 2);
        Ok(())
    }

    #[test]
    fn test_mut_view() -> Result<()> {
        let mut encoder = Encoder::<u8>::fixed(4)?;
        encoder.as_mut_view().set_uint::<BE>(0, 0x01020304, 4)?;
        assert_eq!(encoder.read_u32::<LE>()?, 0x04030201);
        assert!(encoder.write(0).is_err());
        Ok(())
    }
}
