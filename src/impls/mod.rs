/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Implementations of spans, cursors and stream adapters.

A [`Span`] is an immutable, cheaply clonable window over a shared store of
elements; a [`SpanMut`] is a mutable window over a borrowed slice. Both
give random access through [`Provider`](crate::traits::Provider) (and
[`Receiver`](crate::traits::Receiver) for [`SpanMut`]).

For sequential access over memory you can use [`SpanReader`] and
[`SpanWriter`], which have a fixed length, or an [`Encoder`], which grows
as needed up to a maximum and can be frozen into a [`Span`] once written.

If you need to read or write elements from a file or any backend
implementing [`std::io::Read`] or [`std::io::Write`] you just need to wrap
it in a [`StreamReader`] or [`StreamWriter`].

In all cases, you must specify an element type, which must be one of `u8`,
`u16`, `u32` and `u64`. In the case of the stream adapters, elements wider
than a byte are read and written in native byte order.

*/

mod span;
pub use span::Span;

mod span_mut;
pub use span_mut::SpanMut;

mod span_reader;
pub use span_reader::SpanReader;

mod span_writer;
pub use span_writer::SpanWriter;

mod encoder;
pub use encoder::*;

#[cfg(feature = "std")]
mod stream;
#[cfg(feature = "std")]
pub use stream::*;
