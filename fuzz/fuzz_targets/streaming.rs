//! Fuzz target for the streaming engine API.
//!
//! Feeds arbitrary data through arbitrary update sizes, small chunk sizes and
//! forced fan-out, and compares against the one-shot reference.

#![no_main]

use arbitrary::Arbitrary;
use crcmodel::{EngineConfig, FanOut, catalog, factory};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  algorithm: u8,
  chunk_log2: u8,
  data: Vec<u8>,
  /// Sizes of successive `add` calls
  update_sizes: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let alg = &catalog::ALGORITHMS[usize::from(input.algorithm) % catalog::ALGORITHMS.len()];
  let Ok(config) = EngineConfig::default().with_chunk_size(1 << (input.chunk_log2 % 10)) else {
    return;
  };
  let config = config.with_fan_out(FanOut::Parallel);
  let Ok(mut crc) = factory::create_with_config(&alg.into(), config) else {
    return;
  };

  let data = &input.data;
  let expected = alg.checksum(data);

  let mut offset = 0;
  let mut idx = 0;
  while offset < data.len() {
    let size = if input.update_sizes.is_empty() {
      1
    } else {
      (input.update_sizes[idx % input.update_sizes.len()] % 4096).max(1)
    };
    let end = (offset + size).min(data.len());
    crc.add(&data[offset..end]);
    offset = end;
    idx += 1;
  }

  assert_eq!(crc.value(), expected, "{} streaming mismatch", alg.name);

  // Reset then re-feed in one call reproduces the value.
  crc.reset();
  crc.add(data);
  assert_eq!(crc.value(), expected, "{} reset mismatch", alg.name);
});
