//! Property-based tests for the CRC engine.
//!
//! These tests check invariants across arbitrary parameter sets and inputs,
//! not just catalog vectors. Uses proptest for randomized generation.

use crcmodel::{
  Checksum, ChecksumCombine, Crc32, Crc64Xz, Crc82Darc, CrcParams, EngineConfig, FanOut, combine, factory,
  factory::Descriptor, mask, reference, reflect,
};
use proptest::prelude::*;

// Test Strategies

/// Generate arbitrary byte vectors up to 8KB.
fn arb_data() -> impl Strategy<Value = Vec<u8>> {
  prop::collection::vec(any::<u8>(), 0..8192)
}

/// Generate multiple split points for chunked testing.
fn arb_splits(len: usize, count: usize) -> impl Strategy<Value = Vec<usize>> {
  prop::collection::vec(0..=len, count).prop_map(move |mut splits| {
    splits.sort();
    splits.push(len);
    splits.dedup();
    splits
  })
}

/// Generate any valid Rocksoft parameter set.
fn arb_params() -> impl Strategy<Value = CrcParams> {
  (1u8..=128, any::<u128>(), any::<u128>(), any::<bool>(), any::<bool>(), any::<u128>()).prop_map(
    |(width, poly, init, refin, refout, xorout)| {
      let m = mask(width);
      CrcParams::new(width, (poly & m) | 1, init & m, refin, refout, xorout & m).unwrap()
    },
  )
}

/// Generate a power-of-two chunk size small enough to fan out on 8KB inputs.
fn arb_chunk() -> impl Strategy<Value = usize> {
  (4u32..=10).prop_map(|log2| 1usize << log2)
}

fn descriptor(p: &CrcParams) -> Descriptor {
  Descriptor::new(p.width(), p.poly(), p.init(), p.reflect_in(), p.reflect_out(), p.xor_out())
}

// Generic Property Tests

/// Test that incremental updates produce the same result as one-shot.
fn prop_multi_incremental<C: Checksum>(data: &[u8], splits: &[usize]) -> bool {
  let oneshot = C::checksum(data);

  let mut hasher = C::new();
  let mut prev = 0;
  for &split in splits {
    let split = split.min(data.len());
    if split > prev {
      hasher.update(&data[prev..split]);
      prev = split;
    }
  }
  if prev < data.len() {
    hasher.update(&data[prev..]);
  }

  hasher.finalize() == oneshot
}

/// Test that combine of two halves equals the CRC of the concatenation.
fn prop_combine_split<C: ChecksumCombine>(data: &[u8], split: usize) -> bool {
  let split = split.min(data.len());
  let (a, b) = data.split_at(split);
  C::combine(C::checksum(a), C::checksum(b), b.len()) == C::checksum(data)
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  #[test]
  fn engine_matches_bitwise_reference(params in arb_params(), data in prop::collection::vec(any::<u8>(), 0..512)) {
    let crc = factory::create(&descriptor(&params)).unwrap();
    let expected = reference::bitwise(&params, &data);
    prop_assert_eq!(crc.checksum(&data), expected);
    prop_assert_eq!(reference::bytewise(&params, &data), expected);
  }

  #[test]
  fn fan_out_matches_sequential(params in arb_params(), data in arb_data(), chunk in arb_chunk()) {
    let fanned = EngineConfig::default().with_chunk_size(chunk).unwrap().with_fan_out(FanOut::Parallel);
    let sequential = EngineConfig::default().with_fan_out(FanOut::Sequential);
    let d = descriptor(&params);
    let a = factory::create_with_config(&d, fanned).unwrap();
    let b = factory::create_with_config(&d, sequential).unwrap();
    prop_assert_eq!(a.checksum(&data), b.checksum(&data));
  }

  #[test]
  fn split_feeding_equals_one_shot((data, splits) in arb_data().prop_flat_map(|d| {
    let len = d.len();
    (Just(d), arb_splits(len, 4))
  }), params in arb_params()) {
    let mut crc = factory::create(&descriptor(&params)).unwrap();
    let oneshot = crc.checksum(&data);
    let mut prev = 0;
    for split in splits {
      crc.add(&data[prev..split]);
      prev = split;
    }
    prop_assert_eq!(crc.value(), oneshot);
  }

  #[test]
  fn combine_equals_concatenation(params in arb_params(), data in prop::collection::vec(any::<u8>(), 0..2048), split in 0..2048usize) {
    let split = split.min(data.len());
    let (a, b) = data.split_at(split);
    let crc_a = reference::bytewise(&params, a);
    let crc_b = reference::bytewise(&params, b);
    prop_assert_eq!(combine::combine(&params, crc_a, crc_b, b.len() as u64), reference::bytewise(&params, &data));
  }

  #[test]
  fn combine_all_folds_left(params in arb_params(), parts in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..256), 1..6)) {
    let whole: Vec<u8> = parts.concat();
    let crcs: Vec<(u128, u64)> = parts.iter().map(|p| (reference::bytewise(&params, p), p.len() as u64)).collect();
    prop_assert_eq!(combine::combine_all(&params, &crcs), Some(reference::bytewise(&params, &whole)));
  }

  #[test]
  fn reflect_is_an_involution(value in any::<u128>(), width in 1u8..=128) {
    prop_assert_eq!(reflect(reflect(value, width), width), value & mask(width));
  }

  #[test]
  fn add_range_matches_subslice(data in arb_data(), offset in 0..8192usize, count in 0..8192usize) {
    let mut a = factory::create_named("CRC-32/ISCSI").unwrap();
    let mut b = a.clone();
    let offset = offset.min(data.len());
    let count = count.min(data.len() - offset);
    a.add_range(&data, offset, Some(count)).unwrap();
    b.add(&data[offset..offset + count]);
    prop_assert_eq!(a.value(), b.value());
  }

  #[test]
  fn presets_incremental((data, splits) in arb_data().prop_flat_map(|d| {
    let len = d.len();
    (Just(d), arb_splits(len, 5))
  })) {
    prop_assert!(prop_multi_incremental::<Crc32>(&data, &splits));
    prop_assert!(prop_multi_incremental::<Crc64Xz>(&data, &splits));
    prop_assert!(prop_multi_incremental::<Crc82Darc>(&data, &splits));
  }

  #[test]
  fn presets_combine(data in arb_data(), split in 0..8192usize) {
    prop_assert!(prop_combine_split::<Crc32>(&data, split));
    prop_assert!(prop_combine_split::<Crc64Xz>(&data, split));
    prop_assert!(prop_combine_split::<Crc82Darc>(&data, split));
  }
}
