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

/// Random access to a bounded window of elements.
///
/// Implementors need only [`len`](Provider::len) and
/// [`get`](Provider::get): bulk methods have element-at-a-time defaults
/// which contiguous backings should override with slice copies.
///
/// All index arguments are relative to the window, and all methods fail
/// with [`Error::OutOfRange`], without partial effects, if a range is not
/// contained in the window.
pub trait Provider {
    /// The element type.
    type Elem: Element;

    /// Returns the number of elements of the window.
    fn len(&self) -> usize;

    /// Returns the element at `index`.
    fn get(&self, index: usize) -> Result<Self::Elem>;

    /// Returns true if the window is empty.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Composes `size` elements starting at `index` into a value, with the
    /// most significant element first if `msb` is true.
    ///
    /// `size` cannot exceed [`Element::MAX_ENDIAN`].
    fn get_endian(&self, index: usize, size: usize, msb: bool) -> Result<u64> {
        Error::check_range(0, size, Self::Elem::MAX_ENDIAN)?;
        Error::check_range(index, size, self.len())?;
        let mut buffer = [Self::Elem::zero(); 64];
        let buffer = &mut buffer[..size];
        self.copy_to(index, buffer)?;
        Ok(from_endian(buffer, msb))
    }

    /// Like [`get_endian`](Provider::get_endian), with a static endianness.
    #[inline(always)]
    fn get_uint<E: Endianness>(&self, index: usize, size: usize) -> Result<u64> {
        self.get_endian(index, size, E::MSB)
    }

    /// Copies `dest.len()` elements starting at `index` into `dest`, and
    /// returns the index after the last copied element.
    fn copy_to(&self, index: usize, dest: &mut [Self::Elem]) -> Result<usize> {
        Error::check_range(index, dest.len(), self.len())?;
        for (i, element) in dest.iter_mut().enumerate() {
            *element = self.get(index + i)?;
        }
        Ok(index + dest.len())
    }

    /// Returns an independent copy of `len` elements starting at `index`.
    fn copy(&self, index: usize, len: usize) -> Result<Vec<Self::Elem>> {
        Error::check_range(index, len, self.len())?;
        let mut result = alloc::vec![Self::Elem::zero(); len];
        self.copy_to(index, &mut result)?;
        Ok(result)
    }

    /// Returns true if the elements starting at `index` are equal to
    /// `other`. A range outside the window is never equal.
    fn is_equal_to(&self, index: usize, other: &[Self::Elem]) -> bool {
        if Error::check_range(index, other.len(), self.len()).is_err() {
            return false;
        }
        other
            .iter()
            .enumerate()
            .all(|(i, element)| self.get(index + i).is_ok_and(|e| e == *element))
    }
}

/// Random write access to a bounded window of elements.
///
/// As with [`Provider`], bulk methods have element-at-a-time defaults.
pub trait Receiver: Provider {
    /// Sets the element at `index`, and returns `index + 1`.
    fn set(&mut self, index: usize, value: Self::Elem) -> Result<usize>;

    /// Decomposes `value` into `size` elements starting at `index`, with
    /// the most significant element first if `msb` is true. Returns the
    /// index after the last written element.
    ///
    /// Bits of `value` that do not fit are dropped, unless the `checks`
    /// feature is enabled, in which case [`Error::InvalidEncoding`] is
    /// returned.
    fn set_endian(&mut self, index: usize, value: u64, size: usize, msb: bool) -> Result<usize> {
        Error::check_range(0, size, Self::Elem::MAX_ENDIAN)?;
        Error::check_range(index, size, self.len())?;
        #[cfg(feature = "checks")]
        check_width::<Self::Elem>(value, size)?;
        let mut buffer = [Self::Elem::zero(); 64];
        let buffer = &mut buffer[..size];
        to_endian(value, buffer, msb);
        self.copy_from(index, buffer)
    }

    /// Like [`set_endian`](Receiver::set_endian), with a static endianness.
    #[inline(always)]
    fn set_uint<E: Endianness>(&mut self, index: usize, value: u64, size: usize) -> Result<usize> {
        self.set_endian(index, value, size, E::MSB)
    }

    /// Sets `len` elements starting at `index` to `value`. Returns the index
    /// after the last written element.
    fn fill(&mut self, index: usize, len: usize, value: Self::Elem) -> Result<usize> {
        Error::check_range(index, len, self.len())?;
        for i in index..index + len {
            self.set(i, value)?;
        }
        Ok(index + len)
    }

    /// Copies `src` into the window starting at `index`. Returns the index
    /// after the last written element.
    fn copy_from(&mut self, index: usize, src: &[Self::Elem]) -> Result<usize> {
        Error::check_range(index, src.len(), self.len())?;
        for (i, &element) in src.iter().enumerate() {
            self.set(index + i, element)?;
        }
        Ok(index + src.len())
    }
}

/// Checks that `value` fits in `size` elements.
#[cfg(feature = "checks")]
pub(crate) fn check_width<T: Element>(value: u64, size: usize) -> Result<()> {
    let bits = (size as u64 * T::BITS as u64).min(64) as u32;
    let remainder = value & !crate::utils::mask(bits);
    if remainder != 0 {
        return Err(Error::InvalidEncoding { value, remainder });
    }
    Ok(())
}

/// Typed access to providers of bytes.
pub trait ByteProvider: Provider<Elem = u8> {
    /// Returns the byte at `index` as an `i8`.
    #[inline(always)]
    fn get_i8(&self, index: usize) -> Result<i8> {
        Ok(self.get(index)? as i8)
    }

    /// Returns true if the byte at `index` is not zero.
    #[inline(always)]
    fn get_bool(&self, index: usize) -> Result<bool> {
        Ok(self.get(index)? != 0)
    }

    #[inline(always)]
    fn get_u16<E: Endianness>(&self, index: usize) -> Result<u16> {
        Ok(self.get_endian(index, 2, E::MSB)? as u16)
    }

    #[inline(always)]
    fn get_i16<E: Endianness>(&self, index: usize) -> Result<i16> {
        Ok(self.get_endian(index, 2, E::MSB)? as i16)
    }

    #[inline(always)]
    fn get_u32<E: Endianness>(&self, index: usize) -> Result<u32> {
        Ok(self.get_endian(index, 4, E::MSB)? as u32)
    }

    #[inline(always)]
    fn get_i32<E: Endianness>(&self, index: usize) -> Result<i32> {
        Ok(self.get_endian(index, 4, E::MSB)? as i32)
    }

    #[inline(always)]
    fn get_u64<E: Endianness>(&self, index: usize) -> Result<u64> {
        self.get_endian(index, 8, E::MSB)
    }

    #[inline(always)]
    fn get_i64<E: Endianness>(&self, index: usize) -> Result<i64> {
        Ok(self.get_endian(index, 8, E::MSB)? as i64)
    }

    #[inline(always)]
    fn get_f32<E: Endianness>(&self, index: usize) -> Result<f32> {
        Ok(f32::from_bits(self.get_u32::<E>(index)?))
    }

    #[inline(always)]
    fn get_f64<E: Endianness>(&self, index: usize) -> Result<f64> {
        Ok(f64::from_bits(self.get_u64::<E>(index)?))
    }
}

impl<P: Provider<Elem = u8> + ?Sized> ByteProvider for P {}
