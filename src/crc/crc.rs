/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::hash::Hasher;

use super::CrcAlgorithm;
use crate::error::{Error, Result};
use crate::traits::{DataRead, DataSeek, Provider};

/// A running CRC computation.
///
/// A [`Crc`] holds only a register; the table lives in the
/// [`CrcAlgorithm`] it was started from. Adding bytes is total: the same
/// CRC results from any split of the input into consecutive parts.
///
/// [`Crc`] implements [`Hasher`], so it can be fed through
/// [`Hash`](core::hash::Hash) implementations of byte containers (note that
/// these usually hash a length prefix, too).
///
/// # Example
/// ```
/// use data_substrate::crc::*;
///
/// let algorithm = CrcAlgorithm::of(8, 0x07, 0, false).unwrap();
/// let mut crc = algorithm.start();
/// crc.add(b"1234").add(b"56789");
/// assert_eq!(crc.crc(), 0xf4);
/// crc.reset();
/// assert_eq!(crc.add_byte(0).crc(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Crc<'a> {
    algorithm: &'a CrcAlgorithm,
    register: u64,
}

impl<'a> Crc<'a> {
    pub(crate) fn new(algorithm: &'a CrcAlgorithm) -> Self {
        Self {
            algorithm,
            register: algorithm.seed(),
        }
    }

    /// Returns the algorithm of this computation.
    #[must_use]
    pub fn algorithm(&self) -> &'a CrcAlgorithm {
        self.algorithm
    }

    /// Restarts the computation.
    pub fn reset(&mut self) -> &mut Self {
        self.register = self.algorithm.seed();
        self
    }

    #[inline]
    pub fn add_byte(&mut self, byte: u8) -> &mut Self {
        self.register = self.algorithm.update(self.register, byte);
        self
    }

    pub fn add(&mut self, bytes: &[u8]) -> &mut Self {
        let algorithm = self.algorithm;
        self.register = bytes
            .iter()
            .fold(self.register, |register, &byte| algorithm.update(register, byte));
        self
    }

    /// Adds `len` bytes of a provider, starting at `index`.
    pub fn add_provider<P: Provider<Elem = u8> + ?Sized>(
        &mut self,
        provider: &P,
        index: usize,
        len: usize,
    ) -> Result<&mut Self> {
        Error::check_range(index, len, provider.len())?;
        for i in index..index + len {
            self.add_byte(provider.get(i)?);
        }
        Ok(self)
    }

    /// Adds all remaining bytes of a reader.
    pub fn add_reader<R: DataRead<Elem = u8> + DataSeek>(
        &mut self,
        mut reader: R,
    ) -> Result<&mut Self> {
        let mut buffer = [0_u8; 256];
        while reader.remaining() > 0 {
            let buffer = &mut buffer[..reader.remaining().min(256)];
            reader.read_into(buffer)?;
            self.add(buffer);
        }
        Ok(self)
    }

    /// Returns the CRC of the bytes added so far.
    #[must_use]
    pub fn crc(&self) -> u64 {
        self.algorithm.complete(self.register)
    }

    /// Returns the lowest byte of the CRC.
    #[must_use]
    pub fn crc_u8(&self) -> u8 {
        self.crc() as u8
    }

    /// Returns the lowest 16 bits of the CRC.
    #[must_use]
    pub fn crc_u16(&self) -> u16 {
        self.crc() as u16
    }

    /// Returns the lowest 32 bits of the CRC.
    #[must_use]
    pub fn crc_u32(&self) -> u32 {
        self.crc() as u32
    }
}

impl Hasher for Crc<'_> {
    fn finish(&self) -> u64 {
        self.crc()
    }

    fn write(&mut self, bytes: &[u8]) {
        self.add(bytes);
    }
}
