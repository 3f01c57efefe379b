/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use alloc::vec::Vec;
use core::fmt::{self, Display, Formatter};
use core::hash::{Hash, Hasher};

#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Crc, CrcParams};
use crate::error::{ConfigError, Error, Result};
use crate::utils::{mask, mask_of_bits, reflect, shift_bits};

/// The ASCII bytes `"123456789"`, whose CRC is the check value of an
/// algorithm.
pub const CHECK_BYTES: &[u8] = b"123456789";

/// A table-driven CRC algorithm of any width from 1 to 64 bits.
///
/// An algorithm is defined by its width, polynomial, initial value,
/// reflection of input bytes and of the output, and a final xor. Input is
/// processed one byte at a time through a 256-entry table built at
/// construction; the table is immutable, so an algorithm can be shared by
/// any number of [`Crc`] accumulators, also across threads.
///
/// Equality and hashing consider only the defining parameters.
///
/// # Examples
/// ```
/// use data_substrate::crc::*;
///
/// let xmodem = CrcAlgorithm::of(16, 0x1021, 0, false).unwrap();
/// assert_eq!(xmodem.check(), 0x31c3);
/// assert_eq!(xmodem.to_string(), "CRC-16[0x1021,0,F,F,0]");
///
/// let kermit = CrcAlgorithm::builder(16)
///     .powers(&[16, 12, 5, 0])
///     .reflect(true, true)
///     .build()
///     .unwrap();
/// assert_eq!(kermit.start().add(b"123456789").crc(), 0x2189);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "CrcParams", into = "CrcParams")
)]
pub struct CrcAlgorithm {
    width: u32,
    poly: u64,
    init: u64,
    ref_in: bool,
    ref_out: bool,
    xor_out: u64,
    /// Number of bits of the register: the width, or 8 for narrower
    /// non-reflected algorithms, whose register is aligned to the top of a
    /// byte.
    reg_bits: u32,
    /// Pre-shift of the register when computing the table index.
    shift1: i32,
    /// Shift of the register xored into the table entry.
    shift2: i32,
    table: Vec<u64>,
}

impl CrcAlgorithm {
    /// Creates an algorithm with the same reflection for input and output,
    /// and no final xor.
    pub fn of(width: u32, poly: u64, init: u64, reflected: bool) -> Result<Self> {
        Self::builder(width)
            .poly(poly)
            .init(init)
            .reflect(reflected, reflected)
            .build()
    }

    /// Creates an algorithm from all defining parameters.
    pub fn new(
        width: u32,
        poly: u64,
        init: u64,
        ref_in: bool,
        ref_out: bool,
        xor_out: u64,
    ) -> Result<Self> {
        if width == 0 || width > u64::BITS {
            return Err(ConfigError::CrcWidth(width).into());
        }
        Ok(Self::create(width, poly, init, ref_in, ref_out, xor_out))
    }

    /// Creates an algorithm from parameters, verifying the check value if
    /// present.
    pub fn from_params(params: &CrcParams) -> Result<Self> {
        let algorithm = Self::new(
            params.width,
            params.poly,
            params.init,
            params.ref_in,
            params.ref_out,
            params.xor_out,
        )?;
        if let Some(expected) = params.check {
            let actual = algorithm.check();
            if actual != expected {
                return Err(ConfigError::CrcCheck { expected, actual }.into());
            }
        }
        Ok(algorithm)
    }

    /// Returns a builder for an algorithm of the given width, with zero
    /// polynomial, zero initial value, no reflection and no final xor.
    #[must_use]
    pub fn builder(width: u32) -> CrcBuilder {
        CrcBuilder {
            width,
            poly: Poly::Value(0),
            init: 0,
            ref_in: false,
            ref_out: false,
            xor_out: 0,
        }
    }

    /// Builds the table; `width` must be in `1..=64`.
    pub(crate) fn create(
        width: u32,
        poly: u64,
        init: u64,
        ref_in: bool,
        ref_out: bool,
        xor_out: u64,
    ) -> Self {
        let width_mask = mask(width);
        let poly = poly & width_mask;
        let reg_bits = if ref_in { width } else { width.max(8) };
        let table = if ref_in {
            reflected_table(reflect(poly, width))
        } else {
            normal_table(poly << (reg_bits - width), reg_bits)
        };
        log::trace!(
            "built CRC table for CRC-{}[{:#x},{:#x},{},{},{:#x}]",
            width,
            poly,
            init & width_mask,
            ref_in,
            ref_out,
            xor_out & width_mask
        );
        Self {
            width,
            poly,
            init: init & width_mask,
            ref_in,
            ref_out,
            xor_out: xor_out & width_mask,
            reg_bits,
            shift1: if ref_in { 0 } else { reg_bits as i32 - 8 },
            shift2: if ref_in { 8 } else { -8 },
            table,
        }
    }

    #[inline(always)]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline(always)]
    #[must_use]
    pub fn poly(&self) -> u64 {
        self.poly
    }

    #[inline(always)]
    #[must_use]
    pub fn init(&self) -> u64 {
        self.init
    }

    #[inline(always)]
    #[must_use]
    pub fn ref_in(&self) -> bool {
        self.ref_in
    }

    #[inline(always)]
    #[must_use]
    pub fn ref_out(&self) -> bool {
        self.ref_out
    }

    #[inline(always)]
    #[must_use]
    pub fn xor_out(&self) -> u64 {
        self.xor_out
    }

    /// Returns the mask of the lowest `width` bits.
    #[inline(always)]
    #[must_use]
    pub fn mask(&self) -> u64 {
        mask(self.width)
    }

    /// Returns the number of bytes needed to store a CRC.
    #[must_use]
    pub fn bytes(&self) -> usize {
        self.width.div_ceil(8) as usize
    }

    /// Returns the CRC of [`CHECK_BYTES`].
    #[must_use]
    pub fn check(&self) -> u64 {
        self.compute(CHECK_BYTES)
    }

    /// Returns the CRC of `bytes`.
    #[must_use]
    pub fn compute(&self, bytes: &[u8]) -> u64 {
        self.start().add(bytes).crc()
    }

    /// Starts a CRC computation.
    #[must_use]
    pub fn start(&self) -> Crc<'_> {
        Crc::new(self)
    }

    /// Returns the defining parameters, with the check value.
    #[must_use]
    pub fn params(&self) -> CrcParams {
        CrcParams::new(
            self.width,
            self.poly,
            self.init,
            self.ref_in,
            self.ref_out,
            self.xor_out,
        )
        .with_check(self.check())
    }

    /// Returns the register value before any input.
    #[inline]
    pub(crate) fn seed(&self) -> u64 {
        if self.ref_in {
            reflect(self.init, self.width)
        } else {
            self.init << (self.reg_bits - self.width)
        }
    }

    /// Feeds one byte into the register.
    #[inline(always)]
    pub(crate) fn update(&self, register: u64, byte: u8) -> u64 {
        let index = (shift_bits(register, self.shift1) ^ byte as u64) & 0xff;
        (self.table[index as usize] ^ shift_bits(register, self.shift2)) & mask(self.reg_bits)
    }

    /// Turns the register into the CRC value.
    #[inline]
    pub(crate) fn complete(&self, register: u64) -> u64 {
        let mut value = if self.ref_in {
            register
        } else {
            register >> (self.reg_bits - self.width)
        };
        if self.ref_in != self.ref_out {
            value = reflect(value, self.width);
        }
        (value ^ self.xor_out) & self.mask()
    }
}

/// Table for registers shifting towards the most significant bit.
fn normal_table(poly: u64, reg_bits: u32) -> Vec<u64> {
    let top = 1 << (reg_bits - 1);
    let reg_mask = mask(reg_bits);
    (0..256_u64)
        .map(|i| {
            let mut r = i << (reg_bits - 8);
            for _ in 0..8 {
                r = (if r & top != 0 { (r << 1) ^ poly } else { r << 1 }) & reg_mask;
            }
            r
        })
        .collect()
}

/// Table for registers shifting towards the least significant bit.
fn reflected_table(poly: u64) -> Vec<u64> {
    (0..256_u64)
        .map(|i| {
            let mut r = i;
            for _ in 0..8 {
                r = if r & 1 != 0 { (r >> 1) ^ poly } else { r >> 1 };
            }
            r
        })
        .collect()
}

impl PartialEq for CrcAlgorithm {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.poly == other.poly
            && self.init == other.init
            && self.ref_in == other.ref_in
            && self.ref_out == other.ref_out
            && self.xor_out == other.xor_out
    }
}

impl Eq for CrcAlgorithm {}

impl Hash for CrcAlgorithm {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (
            self.width,
            self.poly,
            self.init,
            self.ref_in,
            self.ref_out,
            self.xor_out,
        )
            .hash(state);
    }
}

struct Hex(u64);

impl Display for Hex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            f.write_str("0")
        } else {
            write!(f, "{:#x}", self.0)
        }
    }
}

const fn flag(value: bool) -> char {
    if value { 'T' } else { 'F' }
}

impl Display for CrcAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CRC-{}[{},{},{},{},{}]",
            self.width,
            Hex(self.poly),
            Hex(self.init),
            flag(self.ref_in),
            flag(self.ref_out),
            Hex(self.xor_out)
        )
    }
}

impl TryFrom<CrcParams> for CrcAlgorithm {
    type Error = Error;

    fn try_from(params: CrcParams) -> Result<Self> {
        Self::from_params(&params)
    }
}

impl From<CrcAlgorithm> for CrcParams {
    fn from(algorithm: CrcAlgorithm) -> Self {
        algorithm.params()
    }
}

#[derive(Debug, Clone)]
enum Poly {
    Value(u64),
    Powers(Vec<u32>),
}

/// A builder for [`CrcAlgorithm`].
#[derive(Debug, Clone)]
pub struct CrcBuilder {
    width: u32,
    poly: Poly,
    init: u64,
    ref_in: bool,
    ref_out: bool,
    xor_out: u64,
}

impl CrcBuilder {
    /// Sets the polynomial, without the implicit top term.
    #[must_use]
    pub fn poly(mut self, poly: u64) -> Self {
        self.poly = Poly::Value(poly);
        self
    }

    /// Sets the polynomial from the powers of its terms; the power equal to
    /// the width, if present, is the implicit top term.
    #[must_use]
    pub fn powers(mut self, powers: &[u32]) -> Self {
        self.poly = Poly::Powers(powers.to_vec());
        self
    }

    #[must_use]
    pub fn init(mut self, init: u64) -> Self {
        self.init = init;
        self
    }

    /// Sets the reflection of input bytes and of the output.
    #[must_use]
    pub fn reflect(mut self, ref_in: bool, ref_out: bool) -> Self {
        self.ref_in = ref_in;
        self.ref_out = ref_out;
        self
    }

    #[must_use]
    pub fn xor_out(mut self, xor_out: u64) -> Self {
        self.xor_out = xor_out;
        self
    }

    pub fn build(self) -> Result<CrcAlgorithm> {
        let poly = match self.poly {
            Poly::Value(poly) => poly,
            Poly::Powers(powers) => {
                let terms: Vec<u32> = powers
                    .into_iter()
                    .filter(|&power| power != self.width)
                    .collect();
                if let Some(&power) = terms.iter().find(|&&power| power > self.width) {
                    return Err(ConfigError::BitPosition(power).into());
                }
                mask_of_bits(&terms)?
            }
        };
        CrcAlgorithm::new(
            self.width,
            poly,
            self.init,
            self.ref_in,
            self.ref_out,
            self.xor_out,
        )
    }
}
