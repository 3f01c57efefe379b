/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use alloc::vec;
use alloc::vec::Vec;

use crate::error::{ConfigError, Error, Result};

/// The outcome of a lenient decoding: the decoded types and the bits that
/// no type accounted for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Remainder<T> {
    types: Vec<T>,
    diff: u64,
}

impl<T> Remainder<T> {
    pub fn new(types: Vec<T>, diff: u64) -> Self {
        Self { types, diff }
    }

    #[must_use]
    pub fn types(&self) -> &[T] {
        &self.types
    }

    /// Returns the bits left over after decoding.
    #[must_use]
    pub fn remainder(&self) -> u64 {
        self.diff
    }

    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.types.first()
    }

    /// Returns true if no bits were left over.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.diff == 0
    }

    /// Returns true if nothing was decoded and nothing was left over.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.is_exact()
    }

    pub fn into_types(self) -> Vec<T> {
        self.types
    }
}

/// A two-way mapping between a fixed set of types and `u64` values.
///
/// Each type is assigned a value once, at construction; values must be
/// unique, but they may overlap bitwise, in which case multi-type decoding
/// depends on the order in which types were supplied. Types outside the
/// set encode to zero.
///
/// # Example
/// ```
/// use data_substrate::codes::TypeCodec;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Flag { Read, Write, Exec }
///
/// let codec = TypeCodec::new([Flag::Read, Flag::Write, Flag::Exec], |flag| match flag {
///     Flag::Read => 4,
///     Flag::Write => 2,
///     Flag::Exec => 1,
/// }).unwrap();
///
/// let value = codec.encode(&[Flag::Read, Flag::Exec]);
/// assert_eq!(value, 5);
/// assert_eq!(codec.decode(value), None);
/// assert_eq!(codec.decode_all(value).types(), &[&Flag::Read, &Flag::Exec]);
/// assert!(codec.decode_all_valid(8).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCodec<T> {
    types: Vec<T>,
    keys: Vec<u64>,
}

impl<T: PartialEq> TypeCodec<T> {
    /// Creates a codec, failing if two types map to the same value.
    pub fn new(
        types: impl IntoIterator<Item = T>,
        value_of: impl Fn(&T) -> u64,
    ) -> Result<Self> {
        let mut codec = Self::empty();
        for t in types {
            let key = value_of(&t);
            if codec.keys.contains(&key) {
                return Err(ConfigError::DuplicateValue(key).into());
            }
            codec.push(t, key);
        }
        Ok(codec)
    }

    /// Creates a codec, keeping only the first type of each value; later
    /// types with the same value encode to zero.
    pub fn keep_first(types: impl IntoIterator<Item = T>, value_of: impl Fn(&T) -> u64) -> Self {
        let mut codec = Self::empty();
        for t in types {
            let key = value_of(&t);
            if codec.keys.contains(&key) {
                log::trace!("dropping duplicate value {key:#x}");
                continue;
            }
            codec.push(t, key);
        }
        codec
    }

    fn empty() -> Self {
        Self {
            types: Vec::new(),
            keys: Vec::new(),
        }
    }

    fn push(&mut self, t: T, key: u64) {
        // Repeated types would be unreachable by encoding.
        if !self.types.contains(&t) {
            self.types.push(t);
            self.keys.push(key);
        }
    }

    fn key_of(&self, t: &T) -> Option<u64> {
        self.types
            .iter()
            .position(|x| x == t)
            .map(|index| self.keys[index])
    }

    fn exact(&self, value: u64) -> Option<&T> {
        self.keys
            .iter()
            .position(|&key| key == value)
            .map(|index| &self.types[index])
    }

    /// Returns all types, in insertion order.
    #[must_use]
    pub fn all(&self) -> &[T] {
        &self.types
    }

    /// Returns the union of the bits of all values.
    #[must_use]
    pub fn mask(&self) -> u64 {
        self.keys.iter().fold(0, |mask, key| mask | key)
    }

    /// Returns the value of a type, or zero if the type is not mapped.
    #[must_use]
    pub fn encode_type(&self, t: &T) -> u64 {
        self.key_of(t).unwrap_or(0)
    }

    /// Returns the union of the values of the given types.
    #[must_use]
    pub fn encode<'a>(&self, types: impl IntoIterator<Item = &'a T>) -> u64
    where
        T: 'a,
    {
        types
            .into_iter()
            .fold(0, |value, t| value | self.encode_type(t))
    }

    /// Returns the type mapped exactly to `value`.
    #[must_use]
    pub fn decode(&self, value: u64) -> Option<&T> {
        self.exact(value)
    }

    /// Returns the type mapped exactly to `value`, or `default`.
    #[must_use]
    pub fn decode_or<'a>(&'a self, value: u64, default: &'a T) -> &'a T {
        self.exact(value).unwrap_or(default)
    }

    /// Returns the type mapped exactly to `value`, or an error carrying
    /// the bits that a lenient decoding leaves over.
    pub fn decode_valid(&self, value: u64) -> Result<&T> {
        match self.exact(value) {
            Some(t) => Ok(t),
            None => Err(Error::InvalidEncoding {
                value,
                remainder: self.decode_rem(value).remainder(),
            }),
        }
    }

    /// Decodes a single type leniently: an exact match, or else the first
    /// type whose nonzero value is contained in `value`, or else the type
    /// mapped to zero, if any.
    #[must_use]
    pub fn decode_rem(&self, value: u64) -> Remainder<&T> {
        if let Some(t) = self.exact(value) {
            return Remainder::new(vec![t], 0);
        }
        if let Some(index) = self
            .keys
            .iter()
            .position(|&key| key != 0 && key & value == key)
        {
            return Remainder::new(vec![&self.types[index]], value & !self.keys[index]);
        }
        Remainder::new(self.exact(0).into_iter().collect(), value)
    }

    /// Returns the type decoded by [`decode_rem`](TypeCodec::decode_rem).
    #[must_use]
    pub fn decode_first(&self, value: u64) -> Option<&T> {
        self.decode_rem(value).first().copied()
    }

    /// Decodes all types contained in `value`.
    ///
    /// Types are visited in insertion order; each type whose nonzero value
    /// is contained in the bits not yet accounted for is added, and its bits
    /// are cleared. The walk stops as soon as no bits are left. If no type
    /// was found, the type mapped to zero, if any, is returned.
    #[must_use]
    pub fn decode_all(&self, value: u64) -> Remainder<&T> {
        let mut types = Vec::new();
        let mut diff = value;
        for (t, &key) in self.types.iter().zip(&self.keys) {
            if diff == 0 {
                break;
            }
            if key == 0 || key & diff != key {
                continue;
            }
            types.push(t);
            diff &= !key;
        }
        if types.is_empty() {
            types.extend(self.exact(0));
        }
        Remainder::new(types, diff)
    }

    /// Decodes all types contained in `value`, failing if some bits are
    /// left over.
    pub fn decode_all_valid(&self, value: u64) -> Result<Vec<&T>> {
        let rem = self.decode_all(value);
        if rem.is_exact() {
            Ok(rem.into_types())
        } else {
            Err(Error::InvalidEncoding {
                value,
                remainder: rem.remainder(),
            })
        }
    }

    /// Returns true if `value` is zero, is mapped exactly, or is covered
    /// by [`decode_all`](TypeCodec::decode_all) without remainder.
    #[must_use]
    pub fn is_valid(&self, value: u64) -> bool {
        value == 0 || self.exact(value).is_some() || self.decode_all(value).is_exact()
    }

    /// Returns true if `value` decodes exactly to `t`.
    #[must_use]
    pub fn is(&self, value: u64, t: &T) -> bool {
        self.exact(value) == Some(t)
    }

    #[must_use]
    pub fn is_any<'a>(&self, value: u64, types: impl IntoIterator<Item = &'a T>) -> bool
    where
        T: 'a,
    {
        match self.exact(value) {
            Some(found) => types.into_iter().any(|t| t == found),
            None => false,
        }
    }

    /// Returns true if `value` is exactly the union of the given types.
    #[must_use]
    pub fn is_all<'a>(&self, value: u64, types: impl IntoIterator<Item = &'a T>) -> bool
    where
        T: 'a,
    {
        self.encode(types) == value
    }

    /// Returns true if `t` is mapped and all its bits are set in `value`.
    #[must_use]
    pub fn has(&self, value: u64, t: &T) -> bool {
        self.key_of(t).is_some_and(|key| value & key == key)
    }

    #[must_use]
    pub fn has_any<'a>(&self, value: u64, types: impl IntoIterator<Item = &'a T>) -> bool
    where
        T: 'a,
    {
        types.into_iter().any(|t| self.has(value, t))
    }

    #[must_use]
    pub fn has_all<'a>(&self, value: u64, types: impl IntoIterator<Item = &'a T>) -> bool
    where
        T: 'a,
    {
        let mask = self.encode(types);
        value & mask == mask
    }

    /// Sets the bits of the given types in `value`.
    #[must_use]
    pub fn add<'a>(&self, value: u64, types: impl IntoIterator<Item = &'a T>) -> u64
    where
        T: 'a,
    {
        value | self.encode(types)
    }

    /// Clears the bits of the given types in `value`.
    #[must_use]
    pub fn remove<'a>(&self, value: u64, types: impl IntoIterator<Item = &'a T>) -> u64
    where
        T: 'a,
    {
        value & !self.encode(types)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Mode {
        Off,
        Low,
        High,
        Both,
        Aux,
    }

    fn mode_value(mode: &Mode) -> u64 {
        match mode {
            Mode::Off => 0,
            Mode::Low => 1,
            Mode::High => 2,
            Mode::Both => 3,
            Mode::Aux => 8,
        }
    }

    const MODES: [Mode; 5] = [Mode::Off, Mode::Low, Mode::High, Mode::Both, Mode::Aux];

    #[test]
    fn test_exact() -> Result<()> {
        let codec = TypeCodec::new(MODES, mode_value)?;
        assert_eq!(codec.mask(), 0b1011);
        assert_eq!(codec.decode(3), Some(&Mode::Both));
        assert_eq!(codec.decode(4), None);
        assert_eq!(codec.decode_or(4, &Mode::Off), &Mode::Off);
        assert_eq!(codec.decode_valid(0)?, &Mode::Off);
        assert!(matches!(
            codec.decode_valid(12),
            Err(Error::InvalidEncoding {
                value: 12,
                remainder: 4
            })
        ));
        assert!(codec.is(1, &Mode::Low));
        assert!(codec.is_any(8, &[Mode::Low, Mode::Aux]));
        assert!(!codec.is_any(9, &[Mode::Low, Mode::Aux]));
        Ok(())
    }

    #[test]
    fn test_overlap_order() -> Result<()> {
        let codec = TypeCodec::new(MODES, mode_value)?;
        // Low and High come before Both, so Both is never reached.
        let rem = codec.decode_all(11);
        assert_eq!(rem.types(), &[&Mode::Low, &Mode::High, &Mode::Aux]);
        assert!(rem.is_exact());

        let reordered = TypeCodec::new([Mode::Both, Mode::Low, Mode::High, Mode::Off], mode_value)?;
        let rem = reordered.decode_all(7);
        assert_eq!(rem.types(), &[&Mode::Both]);
        assert_eq!(rem.remainder(), 4);
        assert!(!reordered.is_valid(7));
        assert!(reordered.decode_all_valid(7).is_err());
        Ok(())
    }

    #[test]
    fn test_zero_member() -> Result<()> {
        let codec = TypeCodec::new(MODES, mode_value)?;
        let rem = codec.decode_all(0);
        assert_eq!(rem.types(), &[&Mode::Off]);
        assert!(!rem.is_empty());
        assert_eq!(codec.decode_all(4).types(), &[&Mode::Off]);
        assert_eq!(codec.decode_all(4).remainder(), 4);
        assert_eq!(codec.decode_rem(4).first(), Some(&&Mode::Off));

        let codec = TypeCodec::new([Mode::Low, Mode::High], mode_value)?;
        assert!(codec.decode_all(0).is_empty());
        assert!(codec.is_valid(0));
        assert_eq!(codec.decode_first(0), None);
        Ok(())
    }

    #[test]
    fn test_decode_rem() -> Result<()> {
        let codec = TypeCodec::new(MODES, mode_value)?;
        let rem = codec.decode_rem(10);
        assert_eq!(rem.first(), Some(&&Mode::High));
        assert_eq!(rem.remainder(), 8);
        assert_eq!(codec.decode_first(3), Some(&Mode::Both));
        assert_eq!(codec.decode_first(7), Some(&Mode::Low));
        Ok(())
    }

    #[test]
    fn test_duplicates() {
        let value_of = |m: &Mode| mode_value(m) & 1;
        assert!(matches!(
            TypeCodec::new(MODES, value_of),
            Err(Error::InvalidConfiguration(ConfigError::DuplicateValue(0)))
        ));
        let codec = TypeCodec::keep_first(MODES, value_of);
        assert_eq!(codec.all(), &[Mode::Off, Mode::Low]);
        assert_eq!(codec.encode_type(&Mode::Both), 0);
        assert_eq!(codec.encode(&[Mode::Low, Mode::Both]), 1);
    }

    #[test]
    fn test_set_ops() -> Result<()> {
        let codec = TypeCodec::new(MODES, mode_value)?;
        let value = codec.add(0, &[Mode::Low, Mode::Aux]);
        assert_eq!(value, 9);
        assert!(codec.has(value, &Mode::Low));
        assert!(!codec.has(value, &Mode::Both));
        assert!(codec.has(value, &Mode::Off));
        assert!(codec.has_any(value, &[Mode::High, Mode::Aux]));
        assert!(codec.has_all(value, &[Mode::Low, Mode::Aux]));
        assert!(!codec.has_all(value, &[Mode::Low, Mode::High]));
        assert!(codec.is_all(value, &[Mode::Aux, Mode::Low]));
        assert!(!codec.is_all(value, &[Mode::Aux]));
        assert_eq!(codec.remove(value, &[Mode::Aux, Mode::High]), 1);
        assert!(codec.is_valid(9));
        assert!(!codec.is_valid(4));
        Ok(())
    }
}
