/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::prelude::*;
use alloc::vec::Vec;
use arbitrary::Arbitrary;

#[derive(Arbitrary, Debug)]
pub struct FuzzCase {
    init: Vec<u16>,
    offset: u8,
    len: u8,
    commands: Vec<RandomCommand>,
}

#[derive(Arbitrary, Debug)]
pub enum RandomCommand {
    GetPosition,
    SetPosition(u8),
    Mark,
    Reset,
    Read,
    Skip(u8),
    ReadEndian(u8, bool),
    Slice(i8),
}

pub fn harness(data: FuzzCase) {
    let store = Span::wrap(data.init);
    let Ok(span) = store.slice(data.offset as usize, data.len as isize) else {
        assert!(data.offset as usize + data.len as usize > store.len());
        return;
    };
    let window = &store.as_slice()[data.offset as usize..][..data.len as usize];
    assert_eq!(span.as_slice(), window);
    assert!(span.is_empty() || span.shares_store(&store));

    let mut idx = 0;
    let mut mark = 0;
    let mut reader = span.reader();
    for command in data.commands {
        match command {
            RandomCommand::GetPosition => {
                assert_eq!(reader.position(), idx);
                assert_eq!(reader.remaining(), window.len() - idx);
            }
            RandomCommand::SetPosition(position) => {
                let position = position as usize;
                let result = reader.set_position(position);
                assert_eq!(result.is_ok(), position <= window.len());
                if result.is_ok() {
                    idx = position;
                }
            }
            RandomCommand::Mark => {
                reader.mark();
                mark = idx;
            }
            RandomCommand::Reset => {
                reader.reset();
                idx = mark;
            }
            RandomCommand::Read => {
                assert_eq!(reader.read().ok(), window.get(idx).copied());
                if idx < window.len() {
                    idx += 1;
                }
            }
            RandomCommand::Skip(len) => {
                let len = len as usize;
                let result = reader.skip(len);
                assert_eq!(result.is_ok(), idx + len <= window.len());
                if result.is_ok() {
                    idx += len;
                }
                assert_eq!(reader.position(), idx);
            }
            RandomCommand::ReadEndian(size, msb) => {
                let size = (size % 5) as usize;
                let result = reader.read_endian(size, msb);
                if idx + size <= window.len() {
                    let expected = from_endian(&window[idx..idx + size], msb);
                    assert_eq!(result.ok(), Some(expected));
                    assert_eq!(
                        span.get_endian(idx, size, msb).ok(),
                        Some(expected)
                    );
                    idx += size;
                } else {
                    assert!(result.is_err());
                }
                assert_eq!(reader.position(), idx);
            }
            RandomCommand::Slice(len) => {
                let result = reader.slice(len as isize);
                let (start, end) = if len >= 0 {
                    (idx, idx + len as usize)
                } else {
                    (idx.wrapping_sub(len.unsigned_abs() as usize), idx)
                };
                if start <= end && end <= window.len() {
                    let slice = result.ok().map(|s| s.unread().to_vec());
                    assert_eq!(slice.as_deref(), Some(&window[start..end]));
                    let copy = span.slice(start, (end - start) as isize).map(|s| s.detach());
                    assert_eq!(copy.ok().as_deref(), Some(&window[start..end]));
                } else {
                    assert!(result.is_err());
                }
            }
        };
    }
}
