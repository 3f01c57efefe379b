/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use data_substrate::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

/// Bit-at-a-time CRC, used as a reference for the table-driven engine.
fn reference(params: &CrcParams, data: &[u8]) -> u64 {
    let width = params.width;
    let mask = mask(width);
    let top = 1_u64 << (width - 1);
    let mut register = params.init & mask;
    for &byte in data {
        let byte = if params.ref_in {
            byte.reverse_bits()
        } else {
            byte
        };
        for i in (0..8).rev() {
            let feedback = (register & top != 0) ^ ((byte >> i) & 1 != 0);
            register = (register << 1) & mask;
            if feedback {
                register ^= params.poly & mask;
            }
        }
    }
    if params.ref_out {
        register = reflect(register, width);
    }
    (register ^ params.xor_out) & mask
}

#[test]
fn test_catalogue() {
    for entry in CrcStd::ALL {
        let algorithm = entry.build();
        assert_eq!(algorithm.check(), entry.check(), "{entry}");
        assert_eq!(algorithm.compute(CHECK_BYTES), entry.check(), "{entry}");
        assert_eq!(
            reference(&entry.params(), CHECK_BYTES),
            entry.check(),
            "{entry}"
        );
        assert_eq!(entry.algorithm(), &algorithm);
        assert_eq!(CrcStd::from_name(entry.name()), Some(entry));
    }
    assert_eq!(CrcStd::Crc16Xmodem.build().check(), 0x31c3);
    assert_eq!(CrcStd::Crc8Smbus.build().check(), 0xf4);
}

#[test]
fn test_reference() -> TestResult {
    let mut r = SmallRng::seed_from_u64(0);
    let mut data = [0_u8; 64];
    for _ in 0..500 {
        let params = CrcParams::new(
            r.random_range(1..=64),
            r.random(),
            r.random(),
            r.random_bool(0.5),
            r.random_bool(0.5),
            r.random(),
        );
        let algorithm = CrcAlgorithm::new(
            params.width,
            params.poly,
            params.init,
            params.ref_in,
            params.ref_out,
            params.xor_out,
        )?;
        let data = &mut data[..r.random_range(0..64)];
        r.fill(&mut data[..]);
        let expected = reference(&params, data);
        assert_eq!(algorithm.compute(data), expected, "{algorithm}");
        assert_eq!(algorithm.compute(data) & !algorithm.mask(), 0);
    }
    Ok(())
}

#[test]
fn test_incremental() -> TestResult {
    let mut r = SmallRng::seed_from_u64(1);
    let data: Vec<u8> = (0..1000).map(|_| r.random()).collect();
    for entry in CrcStd::ALL {
        let algorithm = entry.algorithm();
        let expected = algorithm.compute(&data);
        for _ in 0..20 {
            let mut crc = algorithm.start();
            let mut rest = &data[..];
            while !rest.is_empty() {
                let (head, tail) = rest.split_at(r.random_range(0..=rest.len().min(100)));
                crc.add(head);
                rest = tail;
            }
            assert_eq!(crc.crc(), expected, "{entry}");
        }

        let span = Span::wrap(data.clone());
        let mut crc = algorithm.start();
        crc.add_provider(&span, 0, 500)?
            .add_reader(span.slice(500, 500)?.reader())?;
        assert_eq!(crc.crc(), expected, "{entry}");
    }
    Ok(())
}

#[test]
fn test_narrow_accessors() {
    let algorithm = CrcStd::Crc32IsoHdlc.algorithm();
    let mut crc = algorithm.start();
    crc.add(CHECK_BYTES);
    assert_eq!(crc.crc_u32(), 0xcbf43926);
    assert_eq!(crc.crc_u16(), 0x3926);
    assert_eq!(crc.crc_u8(), 0x26);
    crc.reset();
    assert_eq!(crc.crc(), algorithm.compute(&[]));
}

#[test]
fn test_configuration() {
    assert!(matches!(
        CrcAlgorithm::new(0, 1, 0, false, false, 0),
        Err(Error::InvalidConfiguration(ConfigError::CrcWidth(0)))
    ));
    assert!(CrcAlgorithm::of(65, 1, 0, true).is_err());

    let params = CrcStd::Crc16Kermit.params().with_check(0x1234);
    assert!(matches!(
        CrcAlgorithm::from_params(&params),
        Err(Error::InvalidConfiguration(ConfigError::CrcCheck {
            expected: 0x1234,
            actual: 0x2189
        }))
    ));

    // x^16 + x^12 + x^5 + 1
    let algorithm = CrcAlgorithm::builder(16)
        .powers(&[16, 12, 5, 0])
        .reflect(true, true)
        .build()
        .unwrap();
    assert_eq!(algorithm, CrcStd::Crc16Kermit.build());
    assert_eq!(algorithm.to_string(), "CRC-16[0x1021,0,T,T,0]");
}

#[cfg(feature = "serde")]
#[test]
fn test_serde() -> TestResult {
    let algorithm = CrcStd::Crc24Ble.build();
    let json = serde_json::to_string(&algorithm)?;
    assert_eq!(
        json,
        r#"{"width":24,"poly":1627,"init":5592405,"ref_in":true,"ref_out":true,"xor_out":0,"check":12737110}"#
    );
    let back: CrcAlgorithm = serde_json::from_str(&json)?;
    assert_eq!(back, algorithm);
    assert_eq!(back.check(), 0xc25a56);

    let params: CrcParams = serde_json::from_str(
        r#"{"width":8,"poly":7,"init":0,"ref_in":false,"ref_out":false,"xor_out":0}"#,
    )?;
    assert_eq!(params.check, None);
    assert_eq!(CrcAlgorithm::try_from(params)?, CrcStd::Crc8Smbus.build());

    let wrong = r#"{"width":8,"poly":7,"init":0,"ref_in":false,"ref_out":false,"xor_out":0,"check":1}"#;
    assert!(serde_json::from_str::<CrcAlgorithm>(wrong).is_err());
    Ok(())
}
