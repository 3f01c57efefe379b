/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::fmt::{self, Display, Formatter};

#[cfg(feature = "std")]
use std::sync::OnceLock;

use super::{CrcAlgorithm, CrcParams};

/// Commonly used CRC algorithms.
///
/// Parameters and names follow the catalogue of parametrised CRC
/// algorithms by Greg Cook; the first name is the canonical one, the
/// others are aliases. With the `std` feature, the algorithm of each entry
/// is built once and cached.
///
/// # Example
/// ```
/// use data_substrate::crc::*;
///
/// let entry = CrcStd::from_name("crc-32").unwrap();
/// assert_eq!(entry, CrcStd::Crc32IsoHdlc);
/// assert_eq!(entry.to_string(), "CRC-32/ISO-HDLC");
/// assert_eq!(entry.build().check(), 0xcbf43926);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum CrcStd {
    Crc3Gsm,
    Crc5Usb,
    Crc8Smbus,
    Crc12Umts,
    Crc16Ibm3740,
    Crc16Kermit,
    Crc16Xmodem,
    Crc24Ble,
    Crc32Bzip2,
    Crc32Cksum,
    Crc32IsoHdlc,
    Crc32Mpeg2,
    Crc64GoIso,
    Crc64Xz,
}

const ONES: u64 = u64::MAX;

impl CrcStd {
    /// All entries of the catalogue.
    pub const ALL: [CrcStd; 14] = [
        CrcStd::Crc3Gsm,
        CrcStd::Crc5Usb,
        CrcStd::Crc8Smbus,
        CrcStd::Crc12Umts,
        CrcStd::Crc16Ibm3740,
        CrcStd::Crc16Kermit,
        CrcStd::Crc16Xmodem,
        CrcStd::Crc24Ble,
        CrcStd::Crc32Bzip2,
        CrcStd::Crc32Cksum,
        CrcStd::Crc32IsoHdlc,
        CrcStd::Crc32Mpeg2,
        CrcStd::Crc64GoIso,
        CrcStd::Crc64Xz,
    ];

    /// Returns the names of the algorithm, canonical name first.
    #[must_use]
    pub const fn names(self) -> &'static [&'static str] {
        match self {
            CrcStd::Crc3Gsm => &["CRC-3/GSM"],
            CrcStd::Crc5Usb => &["CRC-5/USB"],
            CrcStd::Crc8Smbus => &["CRC-8/SMBUS", "CRC-8"],
            CrcStd::Crc12Umts => &["CRC-12/UMTS", "CRC-12/3GPP"],
            CrcStd::Crc16Ibm3740 => &["CRC-16/IBM-3740", "CRC-16/AUTOSAR", "CRC-16/CCITT-FALSE"],
            CrcStd::Crc16Kermit => &[
                "CRC-16/KERMIT",
                "CRC-16/CCITT",
                "CRC-16/CCITT-TRUE",
                "CRC-16/V-41-LSB",
                "CRC-CCITT",
                "KERMIT",
            ],
            CrcStd::Crc16Xmodem => &[
                "CRC-16/XMODEM",
                "CRC-16/ACORN",
                "CRC-16/LTE",
                "CRC-16/V-41-MSB",
                "XMODEM",
                "ZMODEM",
            ],
            CrcStd::Crc24Ble => &["CRC-24/BLE"],
            CrcStd::Crc32Bzip2 => &["CRC-32/BZIP2", "CRC-32/AAL5", "CRC-32/DECT-B", "B-CRC-32"],
            CrcStd::Crc32Cksum => &["CRC-32/CKSUM", "CKSUM", "CRC-32/POSIX"],
            CrcStd::Crc32IsoHdlc => &[
                "CRC-32/ISO-HDLC",
                "CRC-32",
                "CRC-32/ADCCP",
                "CRC-32/V-42",
                "CRC-32/XZ",
                "PKZIP",
            ],
            CrcStd::Crc32Mpeg2 => &["CRC-32/MPEG-2"],
            CrcStd::Crc64GoIso => &["CRC-64/GO-ISO"],
            CrcStd::Crc64Xz => &["CRC-64/XZ", "CRC-64/GO-ECMA"],
        }
    }

    /// Returns the canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.names()[0]
    }

    /// Looks up an algorithm by any of its names, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<CrcStd> {
        Self::ALL.into_iter().find(|entry| {
            entry.names()
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(name))
        })
    }

    /// Returns the parameters, including the published check value.
    #[must_use]
    pub const fn params(self) -> CrcParams {
        match self {
            CrcStd::Crc3Gsm => CrcParams::new(3, 0x3, 0, false, false, 0x7).with_check(0x4),
            CrcStd::Crc5Usb => CrcParams::new(5, 0x05, 0x1f, true, true, 0x1f).with_check(0x19),
            CrcStd::Crc8Smbus => CrcParams::new(8, 0x07, 0, false, false, 0).with_check(0xf4),
            CrcStd::Crc12Umts => CrcParams::new(12, 0x80f, 0, false, true, 0).with_check(0xdaf),
            CrcStd::Crc16Ibm3740 => {
                CrcParams::new(16, 0x1021, 0xffff, false, false, 0).with_check(0x29b1)
            }
            CrcStd::Crc16Kermit => CrcParams::new(16, 0x1021, 0, true, true, 0).with_check(0x2189),
            CrcStd::Crc16Xmodem => {
                CrcParams::new(16, 0x1021, 0, false, false, 0).with_check(0x31c3)
            }
            CrcStd::Crc24Ble => {
                CrcParams::new(24, 0x00065b, 0x555555, true, true, 0).with_check(0xc25a56)
            }
            CrcStd::Crc32Bzip2 => {
                CrcParams::new(32, 0x04c11db7, 0xffffffff, false, false, 0xffffffff)
                    .with_check(0xfc891918)
            }
            CrcStd::Crc32Cksum => {
                CrcParams::new(32, 0x04c11db7, 0, false, false, 0xffffffff).with_check(0x765e7680)
            }
            CrcStd::Crc32IsoHdlc => {
                CrcParams::new(32, 0x04c11db7, 0xffffffff, true, true, 0xffffffff)
                    .with_check(0xcbf43926)
            }
            CrcStd::Crc32Mpeg2 => {
                CrcParams::new(32, 0x04c11db7, 0xffffffff, false, false, 0).with_check(0x0376e6e7)
            }
            CrcStd::Crc64GoIso => {
                CrcParams::new(64, 0x1b, ONES, true, true, ONES).with_check(0xb90956c775a41001)
            }
            CrcStd::Crc64Xz => CrcParams::new(64, 0x42f0e1eba9ea3693, ONES, true, true, ONES)
                .with_check(0x995dc9bbdf1939fa),
        }
    }

    /// Builds a new instance of the algorithm.
    #[must_use]
    pub fn build(self) -> CrcAlgorithm {
        let p = self.params();
        CrcAlgorithm::create(p.width, p.poly, p.init, p.ref_in, p.ref_out, p.xor_out)
    }

    /// Returns the cached instance of the algorithm, building it on first
    /// access.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn algorithm(self) -> &'static CrcAlgorithm {
        static CACHE: [OnceLock<CrcAlgorithm>; CrcStd::ALL.len()] =
            [const { OnceLock::new() }; CrcStd::ALL.len()];
        CACHE[self as usize].get_or_init(|| self.build())
    }

    /// Returns the published check value.
    #[must_use]
    pub const fn check(self) -> u64 {
        match self.params().check {
            Some(check) => check,
            None => 0,
        }
    }
}

impl Display for CrcStd {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
