/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Error types shared by spans, cursors, encoders, CRC algorithms and
//! transcoders.

use thiserror::Error;

/// Result type with the crate [`enum@Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors returned by the operations of this crate.
///
/// Errors are plain values returned to the immediate caller: nothing in
/// this crate logs, swallows or retries them.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// An index or length violates the window of a span or cursor.
    ///
    /// This is always a programming error against a fixed-size view, and
    /// the failing call has no partial effect.
    #[error("range at index {index} of length {len} is out of bounds for length {bound}")]
    OutOfRange {
        index: usize,
        len: usize,
        bound: usize,
    },

    /// A stream-backed reader could not provide the requested elements.
    ///
    /// Unlike [`Error::OutOfRange`] the same request against a later state
    /// of the stream might succeed.
    #[error("unexpected end of data: {requested} elements requested, {available} available")]
    EndOfData { requested: usize, available: usize },

    /// The configured maximum of a growable encoder would be exceeded.
    #[error("capacity exceeded: {required} elements required, maximum is {max}")]
    CapacityExceeded { required: usize, max: usize },

    /// A value could not be decoded (or written) exactly; `remainder` holds
    /// the bits that were left unmatched.
    #[error("invalid encoding of {value:#x}: remainder {remainder:#x}")]
    InvalidEncoding { value: u64, remainder: u64 },

    /// A CRC algorithm or transcoder was configured with contradictory
    /// parameters.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    /// An I/O error other than end of data from a stream adapter.
    #[cfg(feature = "std")]
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns an [`Error::OutOfRange`] unless `[index, index + len)` is
    /// within `[0, bound)`.
    #[inline]
    pub(crate) fn check_range(index: usize, len: usize, bound: usize) -> Result<()> {
        match index.checked_add(len) {
            Some(end) if end <= bound => Ok(()),
            _ => Err(Error::OutOfRange { index, len, bound }),
        }
    }
}

/// Details of an [`Error::InvalidConfiguration`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("CRC width {0} is not in 1..=64")]
    CrcWidth(u32),
    #[error("CRC check value {actual:#x} does not match the expected {expected:#x}")]
    CrcCheck { expected: u64, actual: u64 },
    #[error("bit position {0} is not in 0..64")]
    BitPosition(u32),
    #[error("duplicate type value {0:#x}")]
    DuplicateValue(u64),
}
