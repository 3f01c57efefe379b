/*
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::prelude::*;
use alloc::vec;
use alloc::vec::Vec;
use arbitrary::Arbitrary;

#[derive(Arbitrary, Debug)]
pub struct FuzzCase {
    max: u16,
    commands: Vec<RandomCommand>,
}

#[derive(Arbitrary, Debug)]
pub enum RandomCommand {
    Len,
    GetPosition,
    SetPosition(u16),
    Mark,
    Reset,
    Read,
    Write(u8),
    WriteFrom(Vec<u8>),
    Fill(u8, u8),
    Skip(u8),
    WriteEndian(u64, u8, bool),
}

/// The expected content of the encoder.
struct Model {
    buffer: Vec<u8>,
    idx: usize,
    max: usize,
    failed: bool,
}

impl Model {
    fn write(&mut self, src: &[u8], result: Result<()>) {
        if self.failed || self.idx + src.len() > self.max {
            assert!(matches!(result, Err(Error::CapacityExceeded { .. })));
            self.failed = true;
            return;
        }
        assert!(result.is_ok());
        let end = self.idx + src.len();
        if end > self.buffer.len() {
            self.buffer.resize(end, 0);
        }
        self.buffer[self.idx..end].copy_from_slice(src);
        self.idx = end;
    }
}

pub fn harness(data: FuzzCase) {
    let mut model = Model {
        buffer: Vec::new(),
        idx: 0,
        max: data.max as usize,
        failed: false,
    };
    let mut mark = 0;

    let mut encoder = Encoder::<u8>::with_max(model.max);
    for command in data.commands {
        match command {
            RandomCommand::Len => {
                assert_eq!(Provider::len(&encoder), model.buffer.len());
                assert!(encoder.capacity() <= model.max);
            }
            RandomCommand::GetPosition => {
                assert_eq!(encoder.position(), model.idx);
            }
            RandomCommand::SetPosition(position) => {
                let position = position as usize;
                let result = encoder.set_position(position);
                if position <= model.buffer.len() {
                    assert!(result.is_ok());
                    model.idx = position;
                } else {
                    assert!(result.is_err());
                }
            }
            RandomCommand::Mark => {
                encoder.mark();
                mark = model.idx;
            }
            RandomCommand::Reset => {
                encoder.reset();
                model.idx = mark;
            }
            RandomCommand::Read => {
                let result = DataRead::read(&mut encoder);
                assert_eq!(result.ok(), model.buffer.get(model.idx).copied());
                if model.idx < model.buffer.len() {
                    model.idx += 1;
                }
            }
            RandomCommand::Write(value) => {
                let result = encoder.write(value);
                model.write(&[value], result);
            }
            RandomCommand::WriteFrom(values) => {
                let result = encoder.write_from(&values);
                model.write(&values, result);
            }
            RandomCommand::Fill(len, value) => {
                let result = encoder.fill(len as usize, value);
                model.write(&vec![value; len as usize], result);
            }
            RandomCommand::Skip(len) => {
                // existing elements are kept, new ones are zero
                let values: Vec<u8> = (model.idx..model.idx + len as usize)
                    .map(|i| model.buffer.get(i).copied().unwrap_or(0))
                    .collect();
                let result = encoder.skip(len as usize);
                model.write(&values, result);
            }
            RandomCommand::WriteEndian(value, size, msb) => {
                let size = (size % 9) as usize;
                let mut values = vec![0_u8; size];
                to_endian(value, &mut values, msb);
                let result = encoder.write_endian(value, size, msb);
                #[cfg(feature = "checks")]
                if size < 8 && value >> (8 * size) != 0 {
                    assert!(matches!(result, Err(Error::InvalidEncoding { .. })));
                    continue;
                }
                model.write(&values, result);
            }
        };
        assert_eq!(encoder.as_slice(), &model.buffer[..]);
        assert_eq!(encoder.state() == EncoderState::Failed, model.failed);
    }

    let span = encoder.freeze();
    assert_eq!(span.as_slice(), &model.buffer[..]);
}
