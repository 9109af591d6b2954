//! Basic CRC usage: presets, catalog lookup and custom parameters.
//!
//! Run with: `cargo run --example basic -p crcmodel`

use crcmodel::{Checksum, Crc32, Crc64Xz, Crc82Darc, CrcParams, catalog, factory, reference};

fn main() {
  println!("=== CRC Model Basic Examples ===\n");

  preset_examples();
  catalog_examples();
  custom_parameters();
  resume_example();
}

/// Typed presets: fixed algorithm, native output type.
fn preset_examples() {
  println!("--- Presets ---\n");

  let data = catalog::CHECK_INPUT;

  let crc32 = Crc32::checksum(data);
  println!("CRC-32/ISO-HDLC: 0x{crc32:08X}");
  assert_eq!(crc32, 0xCBF4_3926);

  let crc64 = Crc64Xz::checksum(data);
  println!("CRC-64/XZ:       0x{crc64:016X}");
  assert_eq!(crc64, 0x995D_C9BB_DF19_39FA);

  // Widths above 64 bits use a two-word register.
  let crc82 = Crc82Darc::checksum(data);
  println!("CRC-82/DARC:     0x{crc82:021X}");
  assert_eq!(crc82, 0x9EA8_3F62_5023_801F_D612);

  let mut hasher = Crc32::new();
  hasher.update(b"1234");
  hasher.update(b"56789");
  assert_eq!(hasher.finalize(), crc32);

  println!();
}

/// Any catalog entry by name or alias.
fn catalog_examples() {
  println!("--- Catalog ---\n");

  for name in ["CRC-5/USB", "MODBUS", "crc-32c", "CRC-40/GSM", "CRC-64/WE"] {
    let Ok(mut crc) = factory::create_named(name) else {
      println!("{name}: not found");
      continue;
    };
    crc.add(catalog::CHECK_INPUT);
    println!("{name:<12} -> {:<18} 0x{:X}", crc.width_class().as_str(), crc.value());
  }

  println!("{} algorithms, {} of width 16", catalog::ALGORITHMS.len(), catalog::by_width(16).count());
  println!();
}

/// Parameters outside the catalog.
fn custom_parameters() {
  println!("--- Custom Parameters ---\n");

  let Ok(params) = CrcParams::new(12, 0x80F, 0xABC, true, false, 0x0F0) else {
    return;
  };
  let Ok(mut crc) = crcmodel::Crc::<u16>::new(params) else {
    return;
  };
  crc.add(catalog::CHECK_INPUT);
  let value = crc.value();
  println!("width=12 poly=0x80F: 0x{value:03X}");
  assert_eq!(value, reference::bitwise(&params, catalog::CHECK_INPUT));

  println!();
}

/// Continue from a previously finalized value.
fn resume_example() {
  println!("--- Resume ---\n");

  let part1 = b"first part of data";
  let part2 = b" and the second part";

  let saved = Crc32::checksum(part1);
  let mut resumed = Crc32::resume(saved);
  resumed.update(part2);

  let mut full = Crc32::new();
  full.update(part1);
  full.update(part2);
  assert_eq!(resumed.finalize(), full.finalize());
  println!("Resumed CRC-32: 0x{:08X}", resumed.finalize());

  println!();
}
