/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{DataRead, DataWrite, Endianness};
use crate::error::Result;

/// Typed reads from byte readers.
///
/// The endianness is a type parameter, as in `reader.read_u32::<BE>()`;
/// use [`NativeEndian`](crate::traits::NativeEndian) for platform order.
pub trait ByteRead: DataRead<Elem = u8> {
    #[inline(always)]
    fn read_u8(&mut self) -> Result<u8> {
        self.read()
    }

    #[inline(always)]
    fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read()? as i8)
    }

    /// Reads a byte, returning true if it is not zero.
    #[inline(always)]
    fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read()? != 0)
    }

    #[inline(always)]
    fn read_u16<E: Endianness>(&mut self) -> Result<u16> {
        Ok(self.read_endian(2, E::MSB)? as u16)
    }

    #[inline(always)]
    fn read_i16<E: Endianness>(&mut self) -> Result<i16> {
        Ok(self.read_endian(2, E::MSB)? as i16)
    }

    #[inline(always)]
    fn read_u32<E: Endianness>(&mut self) -> Result<u32> {
        Ok(self.read_endian(4, E::MSB)? as u32)
    }

    #[inline(always)]
    fn read_i32<E: Endianness>(&mut self) -> Result<i32> {
        Ok(self.read_endian(4, E::MSB)? as i32)
    }

    #[inline(always)]
    fn read_u64<E: Endianness>(&mut self) -> Result<u64> {
        self.read_endian(8, E::MSB)
    }

    #[inline(always)]
    fn read_i64<E: Endianness>(&mut self) -> Result<i64> {
        Ok(self.read_endian(8, E::MSB)? as i64)
    }

    #[inline(always)]
    fn read_f32<E: Endianness>(&mut self) -> Result<f32> {
        Ok(f32::from_bits(self.read_u32::<E>()?))
    }

    #[inline(always)]
    fn read_f64<E: Endianness>(&mut self) -> Result<f64> {
        Ok(f64::from_bits(self.read_u64::<E>()?))
    }
}

impl<R: DataRead<Elem = u8> + ?Sized> ByteRead for R {}

/// Typed writes to byte writers.
pub trait ByteWrite: DataWrite<Elem = u8> {
    #[inline(always)]
    fn write_u8(&mut self, value: u8) -> Result<()> {
        self.write(value)
    }

    #[inline(always)]
    fn write_i8(&mut self, value: i8) -> Result<()> {
        self.write(value as u8)
    }

    /// Writes 1 for true, 0 for false.
    #[inline(always)]
    fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write(value as u8)
    }

    #[inline(always)]
    fn write_u16<E: Endianness>(&mut self, value: u16) -> Result<()> {
        self.write_endian(value as u64, 2, E::MSB)
    }

    #[inline(always)]
    fn write_i16<E: Endianness>(&mut self, value: i16) -> Result<()> {
        self.write_endian(value as u16 as u64, 2, E::MSB)
    }

    #[inline(always)]
    fn write_u32<E: Endianness>(&mut self, value: u32) -> Result<()> {
        self.write_endian(value as u64, 4, E::MSB)
    }

    #[inline(always)]
    fn write_i32<E: Endianness>(&mut self, value: i32) -> Result<()> {
        self.write_endian(value as u32 as u64, 4, E::MSB)
    }

    #[inline(always)]
    fn write_u64<E: Endianness>(&mut self, value: u64) -> Result<()> {
        self.write_endian(value, 8, E::MSB)
    }

    #[inline(always)]
    fn write_i64<E: Endianness>(&mut self, value: i64) -> Result<()> {
        self.write_endian(value as u64, 8, E::MSB)
    }

    #[inline(always)]
    fn write_f32<E: Endianness>(&mut self, value: f32) -> Result<()> {
        self.write_u32::<E>(value.to_bits())
    }

    #[inline(always)]
    fn write_f64<E: Endianness>(&mut self, value: f64) -> Result<()> {
        self.write_u64::<E>(value.to_bits())
    }
}

impl<W: DataWrite<Elem = u8> + ?Sized> ByteWrite for W {}
