/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use criterion::{criterion_group, criterion_main, Criterion};
use data_substrate::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use std::time::Duration;

const N: usize = 100_000;

fn gen_data() -> Vec<u32> {
    let mut r = SmallRng::seed_from_u64(0);
    (0..N).map(|_| r.random()).collect()
}

fn bench_endianness<E: Endianness>(c: &mut Criterion, data: &[u32]) {
    c.bench_function(&format!("encoder: write_u32 ({}-endian)", E::NAME), |b| {
        b.iter(|| {
            let mut encoder = Encoder::<u8>::new();
            for &value in data {
                encoder.write_u32::<E>(black_box(value)).unwrap();
            }
            encoder.freeze()
        })
    });

    let mut encoder = Encoder::<u8>::with_len(4 * N, 4 * N).unwrap();
    for &value in data {
        encoder.write_u32::<E>(value).unwrap();
    }
    let span = encoder.freeze();
    c.bench_function(&format!("reader: read_u32 ({}-endian)", E::NAME), |b| {
        b.iter(|| {
            let mut reader = span.reader();
            let mut sum = 0_u32;
            for _ in 0..N {
                sum = sum.wrapping_add(reader.read_u32::<E>().unwrap());
            }
            black_box(sum)
        })
    });
}

fn bench_growth(c: &mut Criterion) {
    let data = gen_data();
    c.bench_function("encoder: write_from (growing)", |b| {
        b.iter(|| {
            let mut encoder = Encoder::<u32>::new();
            for chunk in data.chunks(97) {
                encoder.write_from(black_box(chunk)).unwrap();
            }
            encoder.freeze()
        })
    });
    c.bench_function("encoder: write_from (presized)", |b| {
        b.iter(|| {
            let mut encoder = Encoder::<u32>::with_len(N, N).unwrap();
            for chunk in data.chunks(97) {
                encoder.write_from(black_box(chunk)).unwrap();
            }
            encoder.freeze()
        })
    });
}

fn bench_endian(c: &mut Criterion) {
    let data = gen_data();
    bench_endianness::<BE>(c, &data);
    bench_endianness::<LE>(c, &data);
}

criterion_group! {
    name = benches;
    config = Criterion::default().warm_up_time(Duration::from_secs(1)).measurement_time(Duration::from_secs(3));
    targets = bench_endian, bench_growth
}
criterion_main!(benches);
