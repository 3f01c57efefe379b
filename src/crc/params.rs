/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The parameters of a CRC algorithm.
///
/// The six fields from `width` to `xor_out` define the algorithm; `check`,
/// if present, is the expected CRC of the ASCII bytes `"123456789"`, and
/// is verified when an algorithm is built with
/// [`CrcAlgorithm::from_params`](super::CrcAlgorithm::from_params).
///
/// With the `serde` feature, this is also the serialized form of a
/// [`CrcAlgorithm`](super::CrcAlgorithm).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CrcParams {
    /// The width in bits, in `1..=64`.
    pub width: u32,
    /// The polynomial, without the implicit top term.
    pub poly: u64,
    /// The initial register value.
    pub init: u64,
    /// Whether input bytes are reflected.
    pub ref_in: bool,
    /// Whether the final register is reflected.
    pub ref_out: bool,
    /// The value xored into the final register.
    pub xor_out: u64,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub check: Option<u64>,
}

impl CrcParams {
    #[must_use]
    pub const fn new(
        width: u32,
        poly: u64,
        init: u64,
        ref_in: bool,
        ref_out: bool,
        xor_out: u64,
    ) -> Self {
        Self {
            width,
            poly,
            init,
            ref_in,
            ref_out,
            xor_out,
            check: None,
        }
    }

    /// Sets the expected check value.
    #[must_use]
    pub const fn with_check(mut self, check: u64) -> Self {
        self.check = Some(check);
        self
    }
}
