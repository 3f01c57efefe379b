/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Bit-level helpers: masks, reflection, signed shifts and composition of
//! elements into `u64` values in either order.

use crate::error::{ConfigError, Result};
use crate::traits::Element;

/// Returns a mask of the lowest `bits` bits; `bits >= 64` gives all ones.
#[inline(always)]
#[must_use]
pub const fn mask(bits: u32) -> u64 {
    if bits >= u64::BITS {
        u64::MAX
    } else {
        (1 << bits) - 1
    }
}

/// Returns a mask of `bits` bits starting at bit `start`. Bits beyond the
/// 64th are dropped.
#[inline]
#[must_use]
pub const fn mask_range(start: u32, bits: u32) -> u64 {
    if start >= u64::BITS {
        0
    } else {
        mask(bits) << start
    }
}

/// Returns a mask with the given bit positions set.
///
/// Positions must be smaller than 64.
pub fn mask_of_bits(bits: &[u32]) -> Result<u64> {
    bits.iter().try_fold(0, |acc, &bit| {
        if bit >= u64::BITS {
            Err(ConfigError::BitPosition(bit).into())
        } else {
            Ok(acc | 1 << bit)
        }
    })
}

/// Reverses the order of the lowest `bits` bits of `value`, discarding the
/// others.
#[inline]
#[must_use]
pub const fn reflect(value: u64, bits: u32) -> u64 {
    if bits == 0 {
        0
    } else if bits >= u64::BITS {
        value.reverse_bits()
    } else {
        value.reverse_bits() >> (u64::BITS - bits)
    }
}

/// Shifts `value` right by `bits` if positive, left by `-bits` if negative.
/// Shifting by 64 or more positions gives zero.
#[inline(always)]
#[must_use]
pub const fn shift_bits(value: u64, bits: i32) -> u64 {
    let amount = bits.unsigned_abs();
    if amount >= u64::BITS {
        0
    } else if bits >= 0 {
        value >> amount
    } else {
        value << amount
    }
}

/// Composes elements, most significant first, into a `u64`.
///
/// Only the last [`Element::MAX_ENDIAN`] elements can contribute.
#[inline]
pub fn from_msb<T: Element>(elements: &[T]) -> u64 {
    elements.iter().fold(0, |acc, &element| {
        acc.checked_shl(T::BITS).unwrap_or(0) | element.as_u64()
    })
}

/// Composes elements, least significant first, into a `u64`.
///
/// Elements beyond the first [`Element::MAX_ENDIAN`] are ignored.
#[inline]
pub fn from_lsb<T: Element>(elements: &[T]) -> u64 {
    elements
        .iter()
        .take(T::MAX_ENDIAN)
        .enumerate()
        .fold(0, |acc, (i, &element)| acc | element.as_u64() << (i as u32 * T::BITS))
}

/// Decomposes `value` into `dest.len()` elements, most significant first.
/// Elements beyond the 64th bit are zero.
#[inline]
pub fn to_msb<T: Element>(value: u64, dest: &mut [T]) {
    let len = dest.len();
    for (i, element) in dest.iter_mut().enumerate() {
        let shift = (len - 1 - i) as u64 * T::BITS as u64;
        *element = T::from_u64(if shift >= 64 { 0 } else { value >> shift });
    }
}

/// Decomposes `value` into `dest.len()` elements, least significant first.
/// Elements beyond the 64th bit are zero.
#[inline]
pub fn to_lsb<T: Element>(value: u64, dest: &mut [T]) {
    for (i, element) in dest.iter_mut().enumerate() {
        let shift = i as u64 * T::BITS as u64;
        *element = T::from_u64(if shift >= 64 { 0 } else { value >> shift });
    }
}

/// Composes elements into a `u64` in the given order.
#[inline(always)]
pub fn from_endian<T: Element>(elements: &[T], msb: bool) -> u64 {
    if msb {
        from_msb(elements)
    } else {
        from_lsb(elements)
    }
}

/// Decomposes a `u64` into elements in the given order.
#[inline(always)]
pub fn to_endian<T: Element>(value: u64, dest: &mut [T], msb: bool) {
    if msb {
        to_msb(value, dest)
    } else {
        to_lsb(value, dest)
    }
}
