/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::error::{Error, Result};
use crate::traits::*;

/// An implementation of [`DataRead`] and [`DataSeek`] for a slice.
///
/// Reads past the end of the slice fail with [`Error::OutOfRange`] and
/// leave the position unchanged.
///
/// # Example
/// ```
/// use data_substrate::prelude::*;
///
/// let data = [0x01_u8, 0x02, 0x03, 0x04];
/// let mut reader = SpanReader::new(&data);
///
/// assert_eq!(reader.read_u32::<BE>().unwrap(), 0x01020304);
/// assert_eq!(reader.position(), 4);
/// assert!(reader.read().is_err());
///
/// // a negative slice looks back at what was just read
/// let mut back = reader.slice(-4).unwrap();
/// assert_eq!(back.read_u32::<LE>().unwrap(), 0x04030201);
/// assert_eq!(reader.position(), 4);
///
/// // an errored seek doesn't change the current position
/// assert!(reader.set_position(5).is_err());
/// assert_eq!(reader.position(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SpanReader<T: Element, B: AsRef<[T]>> {
    data: B,
    position: usize,
    mark: usize,
    _marker: core::marker::PhantomData<T>,
}

impl<T: Element, B: AsRef<[T]>> SpanReader<T, B> {
    /// Creates a new [`SpanReader`] at the start of `data`.
    #[must_use]
    pub fn new(data: B) -> Self {
        Self {
            data,
            position: 0,
            mark: 0,
            _marker: Default::default(),
        }
    }

    pub fn into_inner(self) -> B {
        self.data
    }

    /// Returns the elements that have not been read yet.
    #[must_use]
    pub fn unread(&self) -> &[T] {
        &self.data.as_ref()[self.position..]
    }

    /// Returns a reader over `len` elements from the current position,
    /// without advancing it. A negative `len` gives the `-len` elements
    /// before the current position.
    pub fn slice(&self, len: isize) -> Result<SpanReader<T, &[T]>> {
        let data = self.data.as_ref();
        let (index, len) = super::span::window(self.position, len)?;
        Error::check_range(index, len, data.len())?;
        Ok(SpanReader::new(&data[index..index + len]))
    }

    #[inline(always)]
    fn advance(&mut self, len: usize) -> Result<usize> {
        let index = self.position;
        Error::check_range(index, len, self.data.as_ref().len())?;
        self.position += len;
        Ok(index)
    }
}

impl<T: Element, B: AsRef<[T]>> DataRead for SpanReader<T, B> {
    type Elem = T;

    #[inline(always)]
    fn read(&mut self) -> Result<T> {
        let index = self.advance(1)?;
        Ok(self.data.as_ref()[index])
    }

    #[inline(always)]
    fn skip(&mut self, len: usize) -> Result<()> {
        self.advance(len).map(|_| ())
    }

    fn read_into(&mut self, dest: &mut [T]) -> Result<()> {
        let index = self.advance(dest.len())?;
        let src = &self.data.as_ref()[index..index + dest.len()];
        #[cfg(not(feature = "no_copy_impls"))]
        dest.copy_from_slice(src);
        #[cfg(feature = "no_copy_impls")]
        for (element, &value) in dest.iter_mut().zip(src) {
            *element = value;
        }
        Ok(())
    }
}

impl<T: Element, B: AsRef<[T]>> DataSeek for SpanReader<T, B> {
    #[inline(always)]
    fn position(&self) -> usize {
        self.position
    }

    #[inline(always)]
    fn limit(&self) -> usize {
        self.data.as_ref().len()
    }

    fn set_position(&mut self, position: usize) -> Result<()> {
        Error::check_range(position, 0, self.limit())?;
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

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_read_endian() -> Result<()> {
        let data = [0x0102_u16, 0x0304, 0x0506];
        let mut reader = SpanReader::new(&data);
        assert_eq!(reader.read_endian(2, true)?, 0x0102_0304);
        assert!(reader.read_endian(2, false).is_err());
        assert_eq!(reader.position(), 2);
        assert_eq!(reader.read_endian(1, false)?, 0x0506);
        assert!(reader.read_endian(5, true).is_err());
        Ok(())
    }

    #[test]
    fn test_mark_reset() -> Result<()> {
        let data = [1_u32, 2, 3, 4];
        let mut reader = SpanReader::new(&data);
        reader.skip(1)?;
        reader.mark();
        assert_eq!(reader.read_vec(2)?, [2, 3]);
        reader.reset();
        assert_eq!(reader.position(), 1);
        assert_eq!(reader.remaining(), 3);
        assert_eq!(reader.unread(), &[2, 3, 4]);
        let mut dest = [0; 4];
        assert!(reader.read_into(&mut dest).is_err());
        assert_eq!(reader.position(), 1);
        assert!(reader.slice(-2).is_err());
        assert_eq!(reader.slice(3)?.unread(), &[2, 3, 4]);
        Ok(())
    }
}
