/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Runs the fuzzing harnesses on pseudorandom inputs.

#![cfg(feature = "fuzz")]

use arbitrary::{Arbitrary, Unstructured};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

macro_rules! impl_fuzz_rand {
    ($func_name:ident, $fuzz_name:ident) => {
        #[test]
        fn $func_name() {
            use data_substrate::fuzz::$fuzz_name::*;
            let mut r = SmallRng::seed_from_u64(0);
            let mut bytes = vec![0_u8; 4096];
            for _ in 0..200 {
                let len = r.random_range(0..bytes.len());
                r.fill(&mut bytes[..len]);
                let mut unstructured = Unstructured::new(&bytes[..len]);
                if let Ok(data) = FuzzCase::arbitrary(&mut unstructured) {
                    harness(data);
                }
            }
        }
    };
}

impl_fuzz_rand!(test_fuzz_crc, crc);
impl_fuzz_rand!(test_fuzz_encoder, encoder);
impl_fuzz_rand!(test_fuzz_span_reader, span_reader);
