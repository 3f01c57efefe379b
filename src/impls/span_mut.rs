/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::span::window;
use super::{Span, SpanReader, SpanWriter};
use crate::error::{Error, Result};
use crate::traits::*;

/// A mutable window over a borrowed slice of elements.
///
/// Sub-windows obtained by [`slice`](SpanMut::slice) reborrow this span, so
/// the borrow checker forbids using a window after the store it points
/// into has been reallocated (for example, by a growing
/// [`Encoder`](super::Encoder)).
///
/// # Example
/// ```
/// use data_substrate::prelude::*;
///
/// let mut data = [0_u8; 6];
/// let mut span = SpanMut::wrap(&mut data);
/// span.set_uint::<BE>(0, 0x010203, 3).unwrap();
/// {
///     let mut tail = span.slice(6, -3).unwrap();
///     tail.fill(0, 3, 0xff).unwrap();
/// }
/// assert_eq!(span.as_slice(), &[1, 2, 3, 0xff, 0xff, 0xff]);
/// ```
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct SpanMut<'a, T: Element> {
    data: &'a mut [T],
}

impl<'a, T: Element> SpanMut<'a, T> {
    /// Wraps a mutable slice, without copying it.
    #[must_use]
    pub fn wrap(data: &'a mut [T]) -> Self {
        Self { data }
    }

    /// Returns the elements of the window.
    #[inline(always)]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &*self.data
    }

    /// Returns the elements of the window, mutably.
    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.data
    }

    /// Returns the underlying slice.
    #[must_use]
    pub fn into_slice(self) -> &'a mut [T] {
        self.data
    }

    /// Returns the mutable window of `len` elements starting at `index`,
    /// reborrowing this span. A negative `len` gives the `-len` elements
    /// ending at `index`.
    pub fn slice(&mut self, index: usize, len: isize) -> Result<SpanMut<'_, T>> {
        let (index, len) = window(index, len)?;
        Error::check_range(index, len, self.data.len())?;
        Ok(SpanMut {
            data: &mut self.data[index..index + len],
        })
    }

    /// Returns a reader over the window.
    #[must_use]
    pub fn reader(&self) -> SpanReader<T, &[T]> {
        SpanReader::new(&*self.data)
    }

    /// Returns a fixed-size writer over the window.
    pub fn writer(&mut self) -> SpanWriter<T, &mut [T]> {
        SpanWriter::new(&mut *self.data)
    }

    /// Copies the window into an immutable [`Span`].
    #[must_use]
    pub fn to_span(&self) -> Span<T> {
        Span::copy_of(&*self.data)
    }
}

impl<T: Element> Provider for SpanMut<'_, T> {
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

    #[cfg(not(feature = "no_copy_impls"))]
    fn copy_to(&self, index: usize, dest: &mut [T]) -> Result<usize> {
        Error::check_range(index, dest.len(), self.data.len())?;
        dest.copy_from_slice(&self.data[index..index + dest.len()]);
        Ok(index + dest.len())
    }

    #[cfg(not(feature = "no_copy_impls"))]
    fn copy(&self, index: usize, len: usize) -> Result<alloc::vec::Vec<T>> {
        Error::check_range(index, len, self.data.len())?;
        Ok(self.data[index..index + len].to_vec())
    }
}

impl<T: Element> Receiver for SpanMut<'_, T> {
    #[inline(always)]
    fn set(&mut self, index: usize, value: T) -> Result<usize> {
        let bound = self.data.len();
        match self.data.get_mut(index) {
            Some(element) => {
                *element = value;
                Ok(index + 1)
            }
            None => Err(Error::OutOfRange {
                index,
                len: 1,
                bound,
            }),
        }
    }

    #[cfg(not(feature = "no_copy_impls"))]
    fn fill(&mut self, index: usize, len: usize, value: T) -> Result<usize> {
        Error::check_range(index, len, self.data.len())?;
        self.data[index..index + len].fill(value);
        Ok(index + len)
    }

    #[cfg(not(feature = "no_copy_impls"))]
    fn copy_from(&mut self, index: usize, src: &[T]) -> Result<usize> {
        Error::check_range(index, src.len(), self.data.len())?;
        self.data[index..index + src.len()].copy_from_slice(src);
        Ok(index + src.len())
    }
}

impl<'a, T: Element> From<&'a mut [T]> for SpanMut<'a, T> {
    fn from(data: &'a mut [T]) -> Self {
        Self::wrap(data)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::traits::{BE, LE};

    #[test]
    fn test_set_endian() -> Result<()> {
        let mut data = [0_u16; 4];
        let mut span = SpanMut::wrap(&mut data);
        assert_eq!(span.set_uint::<BE>(0, 0x0001_0002, 2)?, 2);
        assert_eq!(span.set_uint::<LE>(2, 0x0003_0004, 2)?, 4);
        assert_eq!(span.as_slice(), &[1, 2, 4, 3]);
        assert!(span.set_endian(3, 0, 2, true).is_err());
        assert!(span.set_endian(0, 0, 5, true).is_err());
        assert_eq!(span.as_slice(), &[1, 2, 4, 3]);
        Ok(())
    }

    #[test]
    fn test_no_partial_effect() {
        let mut data = [1_u8, 2, 3];
        let mut span = SpanMut::wrap(&mut data);
        assert!(span.copy_from(2, &[9, 9]).is_err());
        assert!(span.fill(1, 3, 9).is_err());
        assert!(span.set(3, 9).is_err());
        assert_eq!(data, [1, 2, 3]);
    }
}
