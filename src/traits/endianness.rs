/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// Inner private trait used to make implementing [`Endianness`]
/// impossible for other structs.
mod private {
    /// This is a [SealedTrait](https://predr.ag/blog/definitive-guide-to-sealed-traits-in-rust/).
    pub trait Endianness {}
}

/// Marker trait for endianness selector types.
///
/// Its only implementations are [`LittleEndian`] and [`BigEndian`].
///
/// Typed accessors such as
/// [`ByteRead::read_u32`](crate::traits::ByteRead::read_u32) take the
/// selector as a type parameter; the untyped `*_endian` methods take the
/// equivalent `msb` flag, which is [`Endianness::MSB`].
pub trait Endianness: private::Endianness + 'static {
    /// Whether the most significant element comes first (lowest index).
    const MSB: bool;
    /// A human-readable name.
    const NAME: &'static str;
}

/// Selector type for little-endian (LSB-first) data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LittleEndian;

/// Selector type for big-endian (MSB-first) data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BigEndian;

/// Alias for [`BigEndian`]
pub type BE = BigEndian;

/// Alias for [`LittleEndian`]
pub type LE = LittleEndian;

/// The endianness of the target platform.
#[cfg(target_endian = "little")]
pub type NativeEndian = LittleEndian;

/// The endianness of the target platform.
#[cfg(target_endian = "big")]
pub type NativeEndian = BigEndian;

/// The `msb` flag matching [`NativeEndian`].
pub const NATIVE_MSB: bool = <NativeEndian as Endianness>::MSB;

impl private::Endianness for LittleEndian {}
impl private::Endianness for BigEndian {}

impl Endianness for LittleEndian {
    const MSB: bool = false;
    const NAME: &'static str = "little";
}

impl Endianness for BigEndian {
    const MSB: bool = true;
    const NAME: &'static str = "big";
}
