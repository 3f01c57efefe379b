/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use data_substrate::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use std::time::Duration;

const DATA_LEN: usize = 1 << 16;

fn bench_catalogue(c: &mut Criterion) {
    let mut r = SmallRng::seed_from_u64(0);
    let data: Vec<u8> = (0..DATA_LEN).map(|_| r.random()).collect();

    let mut group = c.benchmark_group("crc");
    group.throughput(Throughput::Bytes(DATA_LEN as u64));
    for entry in [
        CrcStd::Crc5Usb,
        CrcStd::Crc8Smbus,
        CrcStd::Crc16Xmodem,
        CrcStd::Crc16Kermit,
        CrcStd::Crc32IsoHdlc,
        CrcStd::Crc64Xz,
    ] {
        let algorithm = entry.algorithm();
        group.bench_function(entry.name(), |b| {
            b.iter(|| algorithm.compute(black_box(&data)))
        });
    }
    group.finish();
}

fn bench_table(c: &mut Criterion) {
    c.bench_function("crc: table (CRC-32/ISO-HDLC)", |b| {
        b.iter(|| CrcStd::Crc32IsoHdlc.build())
    });
}

fn bench_sources(c: &mut Criterion) {
    let mut r = SmallRng::seed_from_u64(1);
    let span: Span<u8> = Span::wrap((0..DATA_LEN).map(|_| r.random()).collect());
    let algorithm = CrcStd::Crc32IsoHdlc.algorithm();

    c.bench_function("crc: provider", |b| {
        b.iter(|| {
            algorithm
                .start()
                .add_provider(black_box(&span), 0, DATA_LEN)
                .map(|crc| crc.crc())
        })
    });
    c.bench_function("crc: reader", |b| {
        b.iter(|| {
            algorithm
                .start()
                .add_reader(black_box(&span).reader())
                .map(|crc| crc.crc())
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().warm_up_time(Duration::from_secs(1)).measurement_time(Duration::from_secs(3));
    targets = bench_catalogue, bench_table, bench_sources
}
criterion_main!(benches);
