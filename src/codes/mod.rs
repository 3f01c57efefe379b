/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Transcoders between `u64` values and typed fields.

A [`MaskCodec`] isolates a sub-field of a `u64` given an absolute mask and
a shift. A [`TypeCodec`] maps a fixed set of types to values, decoding
either a single type by exact match or a set of types whose values are
bitwise contained in the input; in the latter case, the bits that no type
accounts for are reported in a [`Remainder`]. A [`BitField`] combines the
two to read and update typed fields of a register.

Types whose values overlap are decoded in the order in which they were
given to the codec: for example, if `A = 0b01`, `B = 0b10` and
`AB = 0b11`, in this order, then `0b11` decodes to `[A, B]`, and `AB` can
only be obtained by exact decoding.

*/

mod field;
pub use field::*;

mod mask;
pub use mask::*;

mod type_codec;
pub use type_codec::*;
