/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::SpanReader;
use crate::error::{Error, Result};
use crate::traits::*;

/// An implementation of [`DataWrite`] and [`DataSeek`] for a mutable slice
/// of fixed length.
///
/// Writes past the end of the slice fail with [`Error::OutOfRange`],
/// without partial effects. Use an [`Encoder`](super::Encoder) if the final
/// length is not known in advance.
///
/// # Example
/// ```
/// use data_substrate::prelude::*;
///
/// let mut data = [0_u8; 6];
/// let mut writer = SpanWriter::new(&mut data);
///
/// writer.write_u16::<BE>(0x0102).unwrap();
/// writer.write_u16::<LE>(0x0304).unwrap();
/// assert_eq!(writer.position(), 4);
///
/// // checksum the bytes just written
/// let crc = CrcStd::Crc8Smbus
///     .algorithm()
///     .start()
///     .add_reader(writer.slice(-4).unwrap())
///     .unwrap()
///     .crc();
/// writer.write(crc as u8).unwrap();
///
/// assert!(writer.write_u16::<BE>(0).is_err());
/// assert_eq!(writer.position(), 5);
/// ```
#[derive(Debug, PartialEq)]
pub struct SpanWriter<T: Element, B: AsMut<[T]> + AsRef<[T]>> {
    data: B,
    position: usize,
    mark: usize,
    _marker: core::marker::PhantomData<T>,
}

impl<T: Element, B: AsMut<[T]> + AsRef<[T]>> SpanWriter<T, B> {
    /// Creates a new [`SpanWriter`] at the start of `data`.
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

    /// Returns the elements before the current position.
    #[must_use]
    pub fn written(&self) -> &[T] {
        &self.data.as_ref()[..self.position]
    }

    /// Returns a reader over `len` elements from the current position,
    /// without advancing it. A negative `len` gives the `-len` elements
    /// just written.
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

impl<T: Element, B: AsMut<[T]> + AsRef<[T]>> DataWrite for SpanWriter<T, B> {
    type Elem = T;

    #[inline(always)]
    fn write(&mut self, value: T) -> Result<()> {
        let index = self.advance(1)?;
        self.data.as_mut()[index] = value;
        Ok(())
    }

    fn fill(&mut self, len: usize, value: T) -> Result<()> {
        let index = self.advance(len)?;
        self.data.as_mut()[index..index + len].fill(value);
        Ok(())
    }

    // The range is checked before any element is written, whatever the
    // copy strategy.
    fn write_from(&mut self, src: &[T]) -> Result<()> {
        let index = self.advance(src.len())?;
        let dest = &mut self.data.as_mut()[index..index + src.len()];
        #[cfg(not(feature = "no_copy_impls"))]
        dest.copy_from_slice(src);
        #[cfg(feature = "no_copy_impls")]
        for (element, &value) in dest.iter_mut().zip(src) {
            *element = value;
        }
        Ok(())
    }
}

impl<T: Element, B: AsMut<[T]> + AsRef<[T]>> DataSeek for SpanWriter<T, B> {
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
    use alloc::vec;

    #[test]
    fn test_write_endian() -> Result<()> {
        let mut data = vec![0_u32; 3];
        let mut writer = SpanWriter::new(&mut data);
        writer.write_endian(0x1111_2222_3333_4444, 2, true)?;
        assert!(writer.write_endian(0, 2, false).is_err());
        writer.write_uint::<LE>(0x5555_6666, 1)?;
        assert_eq!(writer.remaining(), 0);
        assert_eq!(writer.written(), &[0x1111_2222, 0x3333_4444, 0x5555_6666]);
        Ok(())
    }

    #[test]
    fn test_skip_and_seek() -> Result<()> {
        let mut data = [7_u8; 4];
        let mut writer = SpanWriter::new(&mut data[..]);
        writer.write(1)?;
        writer.mark();
        writer.skip(2)?;
        writer.write(4)?;
        writer.reset();
        writer.write(2)?;
        assert!(writer.set_position(5).is_err());
        writer.set_position(4)?;
        assert!(writer.fill(1, 0).is_err());
        assert_eq!(writer.slice(-4)?.unread(), &[1, 2, 0, 4]);
        assert!(writer.slice(1).is_err());
        Ok(())
    }
}
