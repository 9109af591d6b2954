//! Fuzz target for cross-block combine.
//!
//! Splits arbitrary data at arbitrary points, checksums every piece and folds
//! the pieces back together with `combine`. The fold must equal the one-shot
//! CRC for every catalog entry the input selects.

#![no_main]

use arbitrary::Arbitrary;
use crcmodel::{Checksum, ChecksumCombine, Crc32, Crc82Darc, catalog, combine};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  algorithm: u8,
  data: Vec<u8>,
  splits: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let data = &input.data;

  // Normalize splits to valid range and sort
  let mut splits: Vec<usize> = input.splits.iter().map(|s| s % (data.len() + 1)).collect();
  splits.sort_unstable();
  splits.dedup();

  let pieces = pieces(data, &splits);

  let alg = &catalog::ALGORITHMS[usize::from(input.algorithm) % catalog::ALGORITHMS.len()];
  test_combine_chain(alg, data, &pieces);

  test_combine_chain_preset::<Crc32>(data, &pieces);
  test_combine_chain_preset::<Crc82Darc>(data, &pieces);
});

fn pieces<'a>(data: &'a [u8], splits: &[usize]) -> Vec<&'a [u8]> {
  let mut out = Vec::new();
  let mut prev = 0;
  for &split in splits {
    out.push(&data[prev..split]);
    prev = split;
  }
  out.push(&data[prev..]);
  out
}

fn test_combine_chain(alg: &catalog::Algorithm, data: &[u8], pieces: &[&[u8]]) {
  let params = alg.params();
  let expected = alg.checksum(data);
  let parts: Vec<(u128, u64)> = pieces.iter().map(|p| (alg.checksum(p), p.len() as u64)).collect();
  assert_eq!(
    combine::combine_all(&params, &parts),
    Some(expected),
    "{} combine chain mismatch",
    alg.name
  );
}

fn test_combine_chain_preset<C: ChecksumCombine>(data: &[u8], pieces: &[&[u8]]) {
  let expected = C::checksum(data);
  let parts: Vec<(C::Output, usize)> = pieces.iter().map(|p| (C::checksum(p), p.len())).collect();
  assert_eq!(C::combine_all(&parts), Some(expected), "preset combine chain mismatch");
}
