/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::prelude::*;
use alloc::vec::Vec;
use arbitrary::Arbitrary;

#[derive(Arbitrary, Debug)]
pub struct FuzzCase {
    algorithm: Algorithm,
    data: Vec<u8>,
    splits: Vec<u8>,
}

#[derive(Arbitrary, Debug)]
pub enum Algorithm {
    Catalogue(CrcStd),
    Custom {
        width: u8,
        poly: u64,
        init: u64,
        ref_in: bool,
        ref_out: bool,
        xor_out: u64,
    },
}

pub fn harness(data: FuzzCase) {
    let algorithm = match data.algorithm {
        Algorithm::Catalogue(entry) => entry.build(),
        Algorithm::Custom {
            width,
            poly,
            init,
            ref_in,
            ref_out,
            xor_out,
        } => {
            let width = width as u32 % 65;
            match CrcAlgorithm::new(width, poly, init, ref_in, ref_out, xor_out) {
                Ok(algorithm) => algorithm,
                Err(_) => {
                    assert_eq!(width, 0);
                    return;
                }
            }
        }
    };

    let expected = algorithm.compute(&data.data);
    assert_eq!(expected & !algorithm.mask(), 0);

    // The same CRC must result from any split of the input.
    let mut crc = algorithm.start();
    let mut rest = &data.data[..];
    for split in data.splits {
        let (head, tail) = rest.split_at((split as usize).min(rest.len()));
        crc.add(head);
        rest = tail;
    }
    crc.add(rest);
    assert_eq!(crc.crc(), expected);

    let mut encoder = Encoder::<u8>::new();
    encoder.write_from(&data.data).unwrap();
    let span = encoder.freeze();
    let mut crc = algorithm.start();
    crc.add_reader(span.reader()).unwrap();
    assert_eq!(crc.crc(), expected);

    let rebuilt = CrcAlgorithm::try_from(algorithm.params()).unwrap();
    assert_eq!(rebuilt, algorithm);
    assert_eq!(rebuilt.compute(&data.data), expected);
}
