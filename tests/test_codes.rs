/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use data_substrate::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Bit(u32);

#[test]
fn test_mask_round_trip() -> Result<()> {
    let mut r = SmallRng::seed_from_u64(0);
    for _ in 0..1000 {
        let shift = r.random_range(0..64);
        let count = r.random_range(0..=64 - shift);
        let codec = MaskCodec::of_bits(shift, count)?;
        assert_eq!(codec.width(), count);
        let current: u64 = r.random();
        let value: u64 = r.random();

        let encoded = codec.encode(current, value);
        assert_eq!(codec.decode(encoded), value & codec.field_mask());
        assert_eq!(encoded & !codec.mask(), current & !codec.mask());
        assert_eq!(codec.decode(codec.encode(0, value & mask(count))), value & mask(count));
        assert_eq!(codec.decode(codec.encode_bool(current, true)), mask(count));
        assert_eq!(codec.decode(codec.encode_bool(current, false)), 0);
    }
    Ok(())
}

#[test]
fn test_disjoint_round_trip() -> Result<()> {
    let mut r = SmallRng::seed_from_u64(1);
    let bits: Vec<Bit> = (0..64).map(Bit).collect();
    let codec = TypeCodec::new(bits.iter().copied(), |bit| 1_u64 << bit.0)?;
    assert_eq!(codec.mask(), u64::MAX);

    for _ in 0..1000 {
        let members: Vec<Bit> = bits.iter().copied().filter(|_| r.random_bool(0.3)).collect();
        let value = codec.encode(&members);
        assert_eq!(value.count_ones() as usize, members.len());
        let rem = codec.decode_all(value);
        assert!(rem.is_exact());
        assert_eq!(rem.types().iter().map(|&&bit| bit).collect::<Vec<_>>(), members);
        assert!(codec.is_valid(value));
        assert!(codec.has_all(value, &members));
        assert!(codec.is_all(value, &members));
        assert_eq!(codec.remove(value, &members), 0);
        assert_eq!(codec.decode_all_valid(value)?.len(), members.len());
    }
    Ok(())
}

#[test]
fn test_partial_codec() -> Result<()> {
    // Only the even bits are mapped.
    let codec = TypeCodec::new((0..32).map(|i| Bit(2 * i)), |bit| 1_u64 << bit.0)?;
    assert_eq!(codec.mask(), 0x5555_5555_5555_5555);
    let value = 0b1110;
    let rem = codec.decode_all(value);
    assert_eq!(rem.types(), &[&Bit(2)]);
    assert_eq!(rem.remainder(), 0b1010);
    assert!(matches!(
        codec.decode_all_valid(value),
        Err(Error::InvalidEncoding {
            value: 0b1110,
            remainder: 0b1010
        })
    ));
    assert_eq!(codec.encode_type(&Bit(1)), 0);
    assert!(!codec.has(u64::MAX, &Bit(1)));
    Ok(())
}

#[test]
fn test_register_fields() -> Result<()> {
    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Speed {
        Slow,
        Fast,
        Turbo,
    }
    let speed = BitField::new(
        MaskCodec::of_bits(60, 4)?,
        TypeCodec::new([Speed::Slow, Speed::Fast, Speed::Turbo], |s| {
            [0x1, 0x2, 0xf][*s as usize]
        })?,
    );
    let enable = MaskCodec::of_bits(0, 1)?;

    let mut register = enable.encode_bool(0, true);
    register = speed.set(register, &Speed::Turbo);
    assert_eq!(register, 0xf000_0000_0000_0001);
    assert_eq!(speed.get(register), Some(&Speed::Turbo));
    register = speed.set_value(register, 0x3);
    assert_eq!(speed.get(register), None);
    assert_eq!(speed.get_all(register).types(), &[&Speed::Slow, &Speed::Fast]);
    assert_eq!(enable.decode(register), 1);
    Ok(())
}
