/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Traits

[`Provider`] and [`Receiver`] give random access to a window of elements;
[`DataRead`], [`DataWrite`] and [`DataSeek`] give sequential access.
[`ByteProvider`], [`ByteRead`] and [`ByteWrite`] add typed accessors for
bytes, with the endianness selected by [`BigEndian`] or [`LittleEndian`].

*/

mod element;
pub use element::*;

mod endianness;
pub use endianness::*;

mod provider;
pub use provider::*;

mod words;
pub use words::*;

mod bytes;
pub use bytes::*;
