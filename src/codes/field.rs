/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use alloc::vec::Vec;

use super::{MaskCodec, Remainder, TypeCodec};
use crate::error::Result;

/// A typed sub-field of a `u64` register.
///
/// A [`BitField`] extracts the field with a [`MaskCodec`] and interprets
/// it with a [`TypeCodec`]. All methods taking a register return the
/// updated register, leaving the bits outside the field untouched.
///
/// # Example
/// ```
/// use data_substrate::codes::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Parity { Off, Even, Odd }
///
/// let codec = TypeCodec::new([Parity::Off, Parity::Even, Parity::Odd], |p| *p as u64).unwrap();
/// let parity = BitField::new(MaskCodec::of_bits(4, 2).unwrap(), codec);
///
/// let register = parity.set(0xff0f, &Parity::Odd);
/// assert_eq!(register, 0xff2f);
/// assert_eq!(parity.get(register), Some(&Parity::Odd));
/// assert_eq!(parity.get(0x30), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitField<T> {
    mask: MaskCodec,
    codec: TypeCodec<T>,
}

impl<T: PartialEq> BitField<T> {
    pub fn new(mask: MaskCodec, codec: TypeCodec<T>) -> Self {
        Self { mask, codec }
    }

    #[must_use]
    pub fn mask(&self) -> &MaskCodec {
        &self.mask
    }

    #[must_use]
    pub fn codec(&self) -> &TypeCodec<T> {
        &self.codec
    }

    /// Returns the raw value of the field.
    #[inline]
    #[must_use]
    pub fn value(&self, register: u64) -> u64 {
        self.mask.decode(register)
    }

    /// Replaces the raw value of the field.
    #[inline]
    #[must_use]
    pub fn set_value(&self, register: u64, value: u64) -> u64 {
        self.mask.encode(register, value)
    }

    #[must_use]
    pub fn get(&self, register: u64) -> Option<&T> {
        self.codec.decode(self.value(register))
    }

    pub fn get_valid(&self, register: u64) -> Result<&T> {
        self.codec.decode_valid(self.value(register))
    }

    #[must_use]
    pub fn get_all(&self, register: u64) -> Remainder<&T> {
        self.codec.decode_all(self.value(register))
    }

    pub fn get_all_valid(&self, register: u64) -> Result<Vec<&T>> {
        self.codec.decode_all_valid(self.value(register))
    }

    /// Returns true if the field holds a value its codec can decode.
    #[must_use]
    pub fn is_valid(&self, register: u64) -> bool {
        self.codec.is_valid(self.value(register))
    }

    #[must_use]
    pub fn set(&self, register: u64, t: &T) -> u64 {
        self.set_value(register, self.codec.encode_type(t))
    }

    /// Replaces the field with the union of the given types.
    #[must_use]
    pub fn set_all<'a>(&self, register: u64, types: impl IntoIterator<Item = &'a T>) -> u64
    where
        T: 'a,
    {
        self.set_value(register, self.codec.encode(types))
    }

    #[must_use]
    pub fn add<'a>(&self, register: u64, types: impl IntoIterator<Item = &'a T>) -> u64
    where
        T: 'a,
    {
        self.set_value(register, self.codec.add(self.value(register), types))
    }

    #[must_use]
    pub fn remove<'a>(&self, register: u64, types: impl IntoIterator<Item = &'a T>) -> u64
    where
        T: 'a,
    {
        self.set_value(register, self.codec.remove(self.value(register), types))
    }

    #[must_use]
    pub fn has(&self, register: u64, t: &T) -> bool {
        self.codec.has(self.value(register), t)
    }

    #[must_use]
    pub fn has_all<'a>(&self, register: u64, types: impl IntoIterator<Item = &'a T>) -> bool
    where
        T: 'a,
    {
        self.codec.has_all(self.value(register), types)
    }
}
