/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::hash::{Hash, Hasher};
use core::ops::Deref;

use super::SpanReader;
use crate::error::{Error, Result};
use crate::traits::*;

/// An immutable window over a shared store of elements.
///
/// A [`Span`] is an offset and a length over a reference-counted
/// [`Vec`]: cloning and slicing never copy elements, and the store is
/// released when the last span referring to it is dropped. Since the
/// store is never mutated through a span, spans can be shared freely
/// between threads.
///
/// Slicing a large store keeps the whole store alive; use
/// [`detach`](Span::detach) to copy a long-lived small window into a store
/// of its own.
///
/// Equality and hashing consider only the elements of the window.
///
/// # Example
/// ```
/// use data_substrate::prelude::*;
///
/// let span = Span::wrap(vec![1_u8, 2, 3, 4, 5]);
/// let tail = span.slice(1, 4).unwrap();
/// assert_eq!(tail.as_slice(), &[2, 3, 4, 5]);
/// assert!(tail.shares_store(&span));
///
/// // a negative length ends the slice at the index
/// assert_eq!(span.slice(4, -2).unwrap().as_slice(), &[3, 4]);
///
/// assert_eq!(tail.get_endian(0, 4, true).unwrap(), 0x02030405);
/// assert_eq!(tail.get_u16::<LE>(2).unwrap(), 0x0504);
/// ```
#[derive(Clone)]
pub struct Span<T: Element> {
    store: Arc<Vec<T>>,
    offset: usize,
    len: usize,
}

impl<T: Element> Span<T> {
    /// Returns an empty span.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            store: Arc::new(Vec::new()),
            offset: 0,
            len: 0,
        }
    }

    /// Wraps a vector, without copying it.
    #[must_use]
    pub fn wrap(data: Vec<T>) -> Self {
        let len = data.len();
        Self {
            store: Arc::new(data),
            offset: 0,
            len,
        }
    }

    /// Wraps the window `[offset, offset + len)` of a vector, without
    /// copying it.
    pub fn wrap_range(data: Vec<T>, offset: usize, len: usize) -> Result<Self> {
        Self::from_store(Arc::new(data), offset, len)
    }

    /// Creates a span over the window `[offset, offset + len)` of a shared
    /// store.
    pub fn from_store(store: Arc<Vec<T>>, offset: usize, len: usize) -> Result<Self> {
        Error::check_range(offset, len, store.len())?;
        if len == 0 {
            return Ok(Self::empty());
        }
        Ok(Self { store, offset, len })
    }

    /// Copies the elements into a new span.
    #[must_use]
    pub fn copy_of(data: &[T]) -> Self {
        Self::wrap(data.to_vec())
    }

    /// Returns the elements of the window.
    #[inline(always)]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.store[self.offset..self.offset + self.len]
    }

    /// Returns the span of `len` elements starting at `index`.
    ///
    /// If `len` is negative, the span contains the `-len` elements ending
    /// at `index` (excluded). The store is shared; a zero length gives an
    /// empty span, and the whole window gives a clone of this span.
    pub fn slice(&self, index: usize, len: isize) -> Result<Self> {
        let (index, len) = window(index, len)?;
        Error::check_range(index, len, self.len)?;
        if len == 0 {
            return Ok(Self::empty());
        }
        if index == 0 && len == self.len {
            return Ok(self.clone());
        }
        Ok(Self {
            store: self.store.clone(),
            offset: self.offset + index,
            len,
        })
    }

    /// Returns the span of the elements from `index` to the end.
    pub fn slice_from(&self, index: usize) -> Result<Self> {
        Error::check_range(index, 0, self.len)?;
        self.slice(index, (self.len - index) as isize)
    }

    /// Copies the window into a store of its own.
    #[must_use]
    pub fn detach(&self) -> Self {
        Self::copy_of(self.as_slice())
    }

    /// Returns true if both spans refer to the same store.
    #[must_use]
    pub fn shares_store(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.store, &other.store)
    }

    /// Returns a reader over the window.
    #[must_use]
    pub fn reader(&self) -> SpanReader<T, &[T]> {
        SpanReader::new(self.as_slice())
    }

    /// Returns a reader owning a clone of this span.
    #[must_use]
    pub fn into_reader(self) -> SpanReader<T, Self> {
        SpanReader::new(self)
    }

    /// Returns the elements as a vector; the store is reused if this is
    /// its only reference and the window covers it, and copied otherwise.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        let Self { store, offset, len } = self;
        if offset == 0 && len == store.len() {
            match Arc::try_unwrap(store) {
                Ok(data) => data,
                Err(store) => store.as_ref().clone(),
            }
        } else {
            store[offset..offset + len].to_vec()
        }
    }
}

/// Normalizes an index and a possibly negative length into a forward
/// window.
pub(crate) fn window(index: usize, len: isize) -> Result<(usize, usize)> {
    if len >= 0 {
        return Ok((index, len as usize));
    }
    let len = len.unsigned_abs();
    match index.checked_sub(len) {
        Some(start) => Ok((start, len)),
        None => Err(Error::OutOfRange {
            index,
            len,
            bound: index,
        }),
    }
}

impl<T: Element> Provider for Span<T> {
    type Elem = T;

    #[inline(always)]
    fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    fn get(&self, index: usize) -> Result<T> {
        self.as_slice()
            .get(index)
            .copied()
            .ok_or(Error::OutOfRange {
                index,
                len: 1,
                bound: self.len,
            })
    }

    #[cfg(not(feature = "no_copy_impls"))]
    fn copy_to(&self, index: usize, dest: &mut [T]) -> Result<usize> {
        Error::check_range(index, dest.len(), self.len)?;
        dest.copy_from_slice(&self.as_slice()[index..index + dest.len()]);
        Ok(index + dest.len())
    }

    #[cfg(not(feature = "no_copy_impls"))]
    fn copy(&self, index: usize, len: usize) -> Result<Vec<T>> {
        Error::check_range(index, len, self.len)?;
        Ok(self.as_slice()[index..index + len].to_vec())
    }

    #[cfg(not(feature = "no_copy_impls"))]
    fn is_equal_to(&self, index: usize, other: &[T]) -> bool {
        Error::check_range(index, other.len(), self.len).is_ok()
            && self.as_slice()[index..index + other.len()] == *other
    }
}

impl<T: Element> Default for Span<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Element> Deref for Span<T> {
    type Target = [T];

    #[inline(always)]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Element> AsRef<[T]> for Span<T> {
    #[inline(always)]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Element> From<Vec<T>> for Span<T> {
    fn from(data: Vec<T>) -> Self {
        Self::wrap(data)
    }
}

impl<T: Element> From<&[T]> for Span<T> {
    fn from(data: &[T]) -> Self {
        Self::copy_of(data)
    }
}

impl<T: Element> PartialEq for Span<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Element> Eq for Span<T> {}

impl<T: Element> PartialEq<[T]> for Span<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Element> Hash for Span<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: Element> core::fmt::Debug for Span<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Span")
            .field("offset", &self.offset)
            .field("len", &self.len)
            .field("data", &self.as_slice())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_wrap_range() {
        let span = Span::wrap_range(vec![0_u8, 1, 2, 3, 4], 1, 3).unwrap();
        assert_eq!(span.as_slice(), &[1, 2, 3]);
        assert!(Span::wrap_range(vec![0_u8, 1], 1, 2).is_err());
        assert!(Span::wrap_range(vec![0_u8, 1], 2, 0).unwrap().is_empty());
    }

    #[test]
    fn test_window() {
        assert_eq!(window(3, 2).unwrap(), (3, 2));
        assert_eq!(window(3, -2).unwrap(), (1, 2));
        assert_eq!(window(3, -3).unwrap(), (0, 3));
        assert!(window(3, -4).is_err());
        assert!(window(0, isize::MIN).is_err());
    }

    #[test]
    fn test_into_vec() {
        let span = Span::wrap(vec![1_u32, 2, 3]);
        let other = span.clone();
        assert_eq!(span.into_vec(), vec![1, 2, 3]);
        assert_eq!(other.slice(1, 2).unwrap().into_vec(), vec![2, 3]);
        assert_eq!(other.into_vec(), vec![1, 2, 3]);
    }
}
