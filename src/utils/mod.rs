/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Bit manipulation helpers and debug wrappers.

The functions in this module compose and decompose multi-element values,
build and reflect bit masks, and shift in either direction.

[`CountRead`] and [`CountWrite`] keep track of the number of elements read
from a [`DataRead`](crate::traits::DataRead) or written to a
[`DataWrite`](crate::traits::DataWrite), respectively, optionally logging
the operations performed.

*/

mod bits;
pub use bits::*;

mod count;
pub use count::*;
