/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Masked sub-fields of a `u64`.

#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

use crate::error::{ConfigError, Result};
use crate::utils::mask_range;

/// An absolute bit mask and a shift, identifying a sub-field of a `u64`.
///
/// The mask is applied before shifting when decoding, and after shifting
/// when encoding, so the mask need not be contiguous. Encoding never
/// touches bits outside the mask, and decoding never returns bits outside
/// [`field_mask`](MaskCodec::field_mask).
///
/// # Example
/// ```
/// use data_substrate::codes::MaskCodec;
///
/// let codec = MaskCodec::of_bits(4, 8).unwrap();
/// assert_eq!(codec.mask(), 0xff0);
/// let register = codec.encode(0xf00f, 0x1a5);
/// assert_eq!(register, 0xfa5f);
/// assert_eq!(codec.decode(register), 0xa5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize), mem_size(flat))]
pub struct MaskCodec {
    mask: u64,
    shift: u32,
}

impl MaskCodec {
    /// The identity codec: all bits, no shift.
    pub const NONE: MaskCodec = MaskCodec {
        mask: u64::MAX,
        shift: 0,
    };

    /// Creates a codec from an absolute mask and a shift smaller than 64.
    pub fn new(mask: u64, shift: u32) -> Result<Self> {
        if shift >= u64::BITS {
            return Err(ConfigError::BitPosition(shift).into());
        }
        Ok(Self { mask, shift })
    }

    /// Creates a codec for the `count` contiguous bits starting at `shift`.
    pub fn of_bits(shift: u32, count: u32) -> Result<Self> {
        Self::new(mask_range(shift, count), shift)
    }

    #[inline(always)]
    #[must_use]
    pub const fn mask(&self) -> u64 {
        self.mask
    }

    #[inline(always)]
    #[must_use]
    pub const fn shift(&self) -> u32 {
        self.shift
    }

    /// Returns the mask of decoded values.
    #[inline(always)]
    #[must_use]
    pub const fn field_mask(&self) -> u64 {
        self.mask >> self.shift
    }

    /// Returns the number of bits of decoded values, up to the highest bit
    /// of the mask.
    #[must_use]
    pub const fn width(&self) -> u32 {
        u64::BITS - self.field_mask().leading_zeros()
    }

    /// Replaces the field in `current` with `value`; the bits of `value`
    /// beyond the field are dropped.
    #[inline(always)]
    #[must_use]
    pub const fn encode(&self, current: u64, value: u64) -> u64 {
        (current & !self.mask) | ((value << self.shift) & self.mask)
    }

    /// Sets all bits of the field in `current` if `on`, or clears them.
    #[inline(always)]
    #[must_use]
    pub const fn encode_bool(&self, current: u64, on: bool) -> u64 {
        self.encode(current, if on { u64::MAX } else { 0 })
    }

    /// Extracts the field from `current`.
    #[inline(always)]
    #[must_use]
    pub const fn decode(&self, current: u64) -> u64 {
        (current & self.mask) >> self.shift
    }
}

impl Default for MaskCodec {
    fn default() -> Self {
        Self::NONE
    }
}
