/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::error::Result;
use crate::traits::*;

/// Wrapping struct that keeps track of written elements. Optionally,
/// logs at debug level the methods called.
#[derive(Debug, Clone)]
pub struct CountWrite<W: DataWrite, const PRINT: bool = false> {
    write: W,
    /// The number of elements written (or skipped) so far on the underlying
    /// [`DataWrite`].
    pub elems_written: usize,
}

impl<W: DataWrite, const PRINT: bool> CountWrite<W, PRINT> {
    pub fn new(write: W) -> Self {
        Self {
            write,
            elems_written: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.write
    }
}

impl<W: DataWrite, const PRINT: bool> DataWrite for CountWrite<W, PRINT> {
    type Elem = W::Elem;

    fn write(&mut self, value: W::Elem) -> Result<()> {
        self.write.write(value).map(|()| {
            self.elems_written += 1;
            if PRINT {
                log::debug!("write({:#x}) (total = {})", value, self.elems_written);
            }
        })
    }

    fn skip(&mut self, len: usize) -> Result<()> {
        self.write.skip(len).map(|()| {
            self.elems_written += len;
            if PRINT {
                log::debug!("skip({}) (total = {})", len, self.elems_written);
            }
        })
    }

    fn fill(&mut self, len: usize, value: W::Elem) -> Result<()> {
        self.write.fill(len, value).map(|()| {
            self.elems_written += len;
            if PRINT {
                log::debug!(
                    "fill({}, {:#x}) (total = {})",
                    len,
                    value,
                    self.elems_written
                );
            }
        })
    }

    fn write_from(&mut self, src: &[W::Elem]) -> Result<()> {
        self.write.write_from(src).map(|()| {
            self.elems_written += src.len();
            if PRINT {
                log::debug!(
                    "write_from([{} elements]) (total = {})",
                    src.len(),
                    self.elems_written
                );
            }
        })
    }

    fn flush(&mut self) -> Result<()> {
        self.write.flush()
    }
}

/// Wrapping struct that keeps track of read elements. Optionally,
/// logs at debug level the methods called.
#[derive(Debug, Clone)]
pub struct CountRead<R: DataRead, const PRINT: bool = false> {
    read: R,
    /// The number of elements read (or skipped) so far from the underlying
    /// [`DataRead`].
    pub elems_read: usize,
}

impl<R: DataRead, const PRINT: bool> CountRead<R, PRINT> {
    pub fn new(read: R) -> Self {
        Self {
            read,
            elems_read: 0,
        }
    }

    pub fn into_inner(self) -> R {
        self.read
    }
}

impl<R: DataRead, const PRINT: bool> DataRead for CountRead<R, PRINT> {
    type Elem = R::Elem;

    fn read(&mut self) -> Result<R::Elem> {
        self.read.read().map(|x| {
            self.elems_read += 1;
            if PRINT {
                log::debug!("read() = {:#x} (total = {})", x, self.elems_read);
            }
            x
        })
    }

    fn skip(&mut self, len: usize) -> Result<()> {
        self.read.skip(len).map(|()| {
            self.elems_read += len;
            if PRINT {
                log::debug!("skip({}) (total = {})", len, self.elems_read);
            }
        })
    }

    fn read_into(&mut self, dest: &mut [R::Elem]) -> Result<()> {
        self.read.read_into(dest).map(|()| {
            self.elems_read += dest.len();
            if PRINT {
                log::debug!(
                    "read_into([{} elements]) (total = {})",
                    dest.len(),
                    self.elems_read
                );
            }
        })
    }
}

#[cfg(test)]
#[test]
fn test_count() -> Result<()> {
    use crate::prelude::*;
    let mut write = CountWrite::<_, true>::new(Encoder::<u8>::new());

    write.write_u16::<BE>(0x0102)?;
    assert_eq!(write.elems_written, 2);
    write.write_from(&[3, 4, 5])?;
    assert_eq!(write.elems_written, 5);
    write.fill(3, 0xff)?;
    assert_eq!(write.elems_written, 8);
    write.skip(2)?;
    assert_eq!(write.elems_written, 10);

    let span = write.into_inner().freeze();
    let mut read = CountRead::<_, true>::new(span.reader());
    assert_eq!(read.read_u16::<BE>()?, 0x0102);
    assert_eq!(read.elems_read, 2);
    read.skip(6)?;
    assert_eq!(read.elems_read, 8);
    assert_eq!(read.read_vec(2)?, [0, 0]);
    assert_eq!(read.elems_read, 10);
    assert!(read.read().is_err());
    assert_eq!(read.elems_read, 10);

    Ok(())
}
