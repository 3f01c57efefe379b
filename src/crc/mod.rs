/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Generic table-driven CRC computation.

A [`CrcAlgorithm`] is defined by the classic parameters `(width, poly,
init, ref_in, ref_out, xor_out)`, for any width from 1 to 64 bits, and
holds a 256-entry lookup table of `u64` shared by the [`Crc`] accumulators
started from it. Every algorithm can verify itself through its
[check value](CrcAlgorithm::check), the CRC of the ASCII bytes
`"123456789"`.

[`CrcStd`] lists commonly used algorithms by name, and [`CrcParams`] is the
plain-data form of an algorithm, suitable for configuration files when the
`serde` feature is enabled.

*/

mod algorithm;
pub use algorithm::*;

mod catalog;
pub use catalog::*;

#[allow(clippy::module_inception)]
mod crc;
pub use crc::*;

mod params;
pub use params::*;
