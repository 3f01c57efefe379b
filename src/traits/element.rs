/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::fmt::{Debug, LowerHex};
use core::hash::Hash;
use num_traits::{PrimInt, Unsigned};

/// This is a trait alias for all the properties that we need from the
/// elements stored in spans and moved by readers and writers.
///
/// It is implemented by `u8`, `u16`, `u32` and `u64`: a single generic
/// implementation covers byte, int and long arrays.
pub trait Element: PrimInt + Unsigned + Hash + Debug + LowerHex + Default + Send + Sync + 'static {
    /// The number of bits of the element.
    const BITS: u32;

    /// The maximum number of elements that can be composed into a `u64`.
    const MAX_ENDIAN: usize = (u64::BITS / Self::BITS) as usize;

    /// Widens the element to a `u64`.
    fn as_u64(self) -> u64;

    /// Truncates a `u64` to the element.
    fn from_u64(value: u64) -> Self;
}

macro_rules! impl_element {
    ($($ty:ty),*) => {$(
        impl Element for $ty {
            const BITS: u32 = <$ty>::BITS;

            #[inline(always)]
            fn as_u64(self) -> u64 {
                self as u64
            }

            #[inline(always)]
            fn from_u64(value: u64) -> Self {
                value as $ty
            }
        }
    )*};
}

impl_element!(u8, u16, u32, u64);
