/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::io::{ErrorKind, Read, Write};

use crate::error::{Error, Result};
use crate::traits::*;
use crate::utils::{from_endian, to_endian};

/// The number of bytes of an element.
#[inline(always)]
const fn bytes_of<T: Element>() -> usize {
    (T::BITS / 8) as usize
}

/// An adapter from [`Read`] to [`DataRead`].
///
/// Instances of this struct turn every standard source of bytes (such as
/// [`std::fs::File`], [`std::io::BufReader`], sockets, etc.) into a source
/// of elements. Elements wider than a byte are read in native byte order.
///
/// When the source ends before a request is satisfied,
/// [`Error::EndOfData`] is returned: the elements read so far are lost, but
/// a later request might succeed if the source is, for example, a socket.
/// Other I/O errors are returned as [`Error::Io`]; interrupted reads are
/// retried.
///
/// # Example
/// ```
/// use data_substrate::prelude::*;
///
/// let data = [0x01_u8, 0x02, 0x03];
/// let mut reader = StreamReader::<u8, _>::new(&data[..]);
/// assert_eq!(reader.read_u16::<BE>().unwrap(), 0x0102);
/// assert!(matches!(
///     reader.read_u16::<BE>(),
///     Err(Error::EndOfData { requested: 2, available: 1 })
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct StreamReader<T: Element, R> {
    backend: R,
    position: usize,
    _marker: core::marker::PhantomData<T>,
}

impl<T: Element, R: Read> StreamReader<T, R> {
    /// Creates a new adapter.
    pub fn new(backend: R) -> Self {
        Self {
            backend,
            position: 0,
            _marker: core::marker::PhantomData,
        }
    }

    pub fn into_inner(self) -> R {
        self.backend
    }

    /// Returns the number of elements read so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Reads until `buffer` is full or the backend ends, and returns the
    /// number of bytes read.
    fn fill_bytes(&mut self, buffer: &mut [u8]) -> Result<usize> {
        let mut read = 0;
        while read < buffer.len() {
            match self.backend.read(&mut buffer[read..]) {
                Ok(0) => break,
                Ok(n) => read += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(read)
    }

    fn read_elements(&mut self, dest: &mut [T]) -> Result<()> {
        let size = bytes_of::<T>();
        let mut bytes = [0_u8; 4096];
        let chunk = bytes.len() / size;
        for (i, part) in dest.chunks_mut(chunk).enumerate() {
            let bytes = &mut bytes[..part.len() * size];
            let read = self.fill_bytes(bytes)?;
            if read < bytes.len() {
                return Err(Error::EndOfData {
                    requested: dest.len(),
                    available: i * chunk + read / size,
                });
            }
            for (element, bytes) in part.iter_mut().zip(bytes.chunks_exact(size)) {
                *element = T::from_u64(from_endian(bytes, NATIVE_MSB));
            }
        }
        self.position += dest.len();
        Ok(())
    }
}

impl<T: Element, R: Read> DataRead for StreamReader<T, R> {
    type Elem = T;

    #[inline]
    fn read(&mut self) -> Result<T> {
        let mut element = [T::zero()];
        self.read_elements(&mut element)?;
        Ok(element[0])
    }

    fn skip(&mut self, len: usize) -> Result<()> {
        let size = bytes_of::<T>();
        let requested = len.checked_mul(size).ok_or(Error::OutOfRange {
            index: self.position,
            len,
            bound: usize::MAX / size,
        })? as u64;
        let skipped = std::io::copy(
            &mut (&mut self.backend).take(requested),
            &mut std::io::sink(),
        )?;
        if skipped < requested {
            self.position += skipped as usize / size;
            return Err(Error::EndOfData {
                requested: len,
                available: skipped as usize / size,
            });
        }
        self.position += len;
        Ok(())
    }

    fn read_into(&mut self, dest: &mut [T]) -> Result<()> {
        self.read_elements(dest)
    }
}

/// An adapter from [`Write`] to [`DataWrite`].
///
/// Elements wider than a byte are written in native byte order. All I/O
/// errors are returned as [`Error::Io`].
#[derive(Debug, Clone)]
pub struct StreamWriter<T: Element, W> {
    backend: W,
    position: usize,
    _marker: core::marker::PhantomData<T>,
}

impl<T: Element, W: Write> StreamWriter<T, W> {
    /// Creates a new adapter.
    pub fn new(backend: W) -> Self {
        Self {
            backend,
            position: 0,
            _marker: core::marker::PhantomData,
        }
    }

    pub fn into_inner(self) -> W {
        self.backend
    }

    /// Returns the number of elements written so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<T: Element, W: Write> DataWrite for StreamWriter<T, W> {
    type Elem = T;

    #[inline]
    fn write(&mut self, value: T) -> Result<()> {
        self.write_from(&[value])
    }

    fn write_from(&mut self, src: &[T]) -> Result<()> {
        let size = bytes_of::<T>();
        let mut bytes = [0_u8; 4096];
        for part in src.chunks(bytes.len() / size) {
            let bytes = &mut bytes[..part.len() * size];
            for (element, bytes) in part.iter().zip(bytes.chunks_exact_mut(size)) {
                to_endian(element.as_u64(), bytes, NATIVE_MSB);
            }
            self.backend.write_all(bytes)?;
        }
        self.position += src.len();
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(self.backend.flush()?)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::prelude::*;

    /// Returns one byte per call, interrupting every other call.
    struct Trickle<'a> {
        data: &'a [u8],
        interrupt: bool,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            self.interrupt = !self.interrupt;
            if self.interrupt {
                return Err(ErrorKind::Interrupted.into());
            }
            match (self.data.split_first(), buf.first_mut()) {
                (Some((&first, rest)), Some(dest)) => {
                    *dest = first;
                    self.data = rest;
                    Ok(1)
                }
                _ => Ok(0),
            }
        }
    }

    #[test]
    fn test_round_trip() -> Result<()> {
        let data: Vec<u32> = vec![
            0xa6032421, 0xc9d01b28, 0x168b4ecd, 0xc5ccbed9, 0xfd007100, 0x08469d41, 0x989fd8c2,
            0x954d351a, 0x3225ec9f, 0xbca253f9, 0x915aad84, 0x274c0de1, 0x4bfc6982, 0x59a47341,
        ];
        let mut writer = StreamWriter::<u32, _>::new(Vec::new());
        writer.write_from(&data[..4])?;
        for &value in &data[4..] {
            writer.write(value)?;
        }
        writer.flush()?;
        assert_eq!(writer.position(), data.len());
        let bytes = writer.into_inner();
        assert_eq!(bytes.len(), data.len() * 4);

        let mut reader = StreamReader::<u32, _>::new(&bytes[..]);
        assert_eq!(reader.read()?, data[0]);
        reader.skip(2)?;
        assert_eq!(reader.read_vec(data.len() - 3)?, &data[3..]);
        assert!(matches!(
            reader.read(),
            Err(Error::EndOfData {
                requested: 1,
                available: 0
            })
        ));
        Ok(())
    }

    #[test]
    fn test_interrupted() -> Result<()> {
        let data = [1_u8, 2, 3, 4, 5];
        let mut reader = StreamReader::<u8, _>::new(Trickle {
            data: &data,
            interrupt: false,
        });
        assert_eq!(reader.read_u32::<LE>()?, 0x04030201);
        assert!(matches!(
            reader.skip(3),
            Err(Error::EndOfData {
                requested: 3,
                available: 1
            })
        ));
        assert_eq!(reader.position(), 5);
        Ok(())
    }

    #[test]
    fn test_io_error() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(ErrorKind::BrokenPipe.into())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }
        let mut writer = StreamWriter::<u16, _>::new(Broken);
        assert!(matches!(writer.write_from(&[1, 2]), Err(Error::Io(_))));
        assert_eq!(writer.position(), 0);
    }
}
