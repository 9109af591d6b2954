//! Parallel CRC computation: built-in fan-out and manual combine.
//!
//! Run with: `cargo run --example parallel -p crcmodel`

use std::thread;

use crcmodel::{Checksum, ChecksumCombine, Crc64Xz, EngineConfig, FanOut, catalog, combine, factory};

fn main() {
  println!("=== Parallel CRC Examples ===\n");

  engine_fan_out();
  manual_combine();
  threaded_example();
}

/// The engine splits large buffers itself and folds the chunk results.
fn engine_fan_out() {
  println!("--- Engine Fan-Out ---\n");

  let data: Vec<u8> = (0..4_000_000).map(|i| (i % 251) as u8).collect();
  let Ok(descriptor) = factory::Descriptor::named("CRC-32/ISCSI") else {
    return;
  };

  let sequential = EngineConfig::default().with_fan_out(FanOut::Sequential);
  let Ok(fanned) = EngineConfig::default().with_chunk_size(64 * 1024) else {
    return;
  };
  let fanned = fanned.with_fan_out(FanOut::Parallel);

  let (Ok(a), Ok(b)) = (
    factory::create_with_config(&descriptor, sequential),
    factory::create_with_config(&descriptor, fanned),
  ) else {
    return;
  };

  let expected = a.checksum(&data);
  let actual = b.checksum(&data);
  println!("Sequential: 0x{expected:08X}");
  println!("Fan-out:    0x{actual:08X}");
  assert_eq!(expected, actual);
  println!();
}

/// Combine CRCs of adjacent blocks without the data.
fn manual_combine() {
  println!("--- Combine ---\n");

  let params = catalog::CRC_82_DARC.params();
  let parts: &[&[u8]] = &[b"one", b"two", b"", b"three"];
  let full: Vec<u8> = parts.concat();

  let crcs: Vec<(u128, u64)> = parts
    .iter()
    .map(|p| (catalog::CRC_82_DARC.checksum(p), p.len() as u64))
    .collect();
  let combined = combine::combine_all(&params, &crcs);

  println!("Combined CRC-82: {combined:X?}");
  assert_eq!(combined, Some(catalog::CRC_82_DARC.checksum(&full)));
  println!();
}

/// Chunks hashed on separate threads, then merged in order.
fn threaded_example() {
  println!("--- Multi-Threaded Example ---\n");

  let data: Vec<u8> = (0..4_000_000).map(|i| ((i * 17) % 256) as u8).collect();
  let sequential = Crc64Xz::checksum(&data);

  let results: Vec<(u64, usize)> = thread::scope(|s| {
    let handles: Vec<_> = data
      .chunks(data.len() / 4)
      .map(|chunk| s.spawn(move || (Crc64Xz::checksum(chunk), chunk.len())))
      .collect();
    handles.into_iter().filter_map(|h| h.join().ok()).collect()
  });

  let combined = results
    .iter()
    .skip(1)
    .fold(results.first().map_or(0, |r| r.0), |acc, &(crc, len)| {
      Crc64Xz::combine(acc, crc, len)
    });

  println!("Sequential: 0x{sequential:016X}");
  println!("Threaded:   0x{combined:016X}");
  assert_eq!(sequential, combined);
  println!();
}
