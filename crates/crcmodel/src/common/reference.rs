//! Reference implementations for every width in `1..=128`.
//!
//! These are the source of truth the engine is checked against. Both work on
//! a plain `u128` register and share nothing with the engine's word-generic
//! byte loop:
//!
//! | Function | Strategy | Speed |
//! |----------|----------|-------|
//! | [`bitwise`] | one division step per message bit, MSB-first | ~8 ops/bit |
//! | [`bytewise`] | 256-entry table built on every call | table build + 1 lookup/byte |
//!
//! Use them for test oracles and for generating expected values, never for
//! throughput.

// SAFETY: all array indexing uses `u8` indices into `[_; 256]` or bounded loop indices.
#![allow(clippy::indexing_slicing)]

use super::{tables::table_entry, word::reflect};
use crate::params::CrcParams;

// ─────────────────────────────────────────────────────────────────────────────
// Bitwise
// ─────────────────────────────────────────────────────────────────────────────

/// Bitwise CRC, one polynomial division step per message bit.
///
/// The register is kept unreflected and right-justified. Reflected inputs are
/// handled by reversing each byte before feeding it MSB-first, which is the
/// definition of `refin` in the Rocksoft model.
///
/// # Example
///
/// ```
/// use crcmodel::{CrcParams, reference};
///
/// let p = CrcParams::new(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF).unwrap();
/// assert_eq!(reference::bitwise(&p, b"123456789"), 0xCBF4_3926);
/// ```
#[must_use]
pub const fn bitwise(params: &CrcParams, data: &[u8]) -> u128 {
  let width = params.width();
  let mask = params.mask();
  let poly = params.poly();
  let top_shift = width as u32 - 1;
  let mut reg = params.init();
  let mut i = 0;
  while i < data.len() {
    let byte = if params.reflect_in() {
      data[i].reverse_bits()
    } else {
      data[i]
    };
    let mut bit = 0;
    while bit < 8 {
      let feedback = ((reg >> top_shift) as u8 ^ (byte >> (7 - bit))) & 1;
      reg = (reg << 1) & mask;
      if feedback != 0 {
        reg ^= poly;
      }
      bit += 1;
    }
    i += 1;
  }
  params.finalize_normal(reg)
}

// ─────────────────────────────────────────────────────────────────────────────
// Bytewise
// ─────────────────────────────────────────────────────────────────────────────

/// Table-driven CRC on a 128-bit register.
///
/// Unreflected registers are left-justified in all 128 bits so that the top
/// byte is always the one leaving the register, whatever the width.
#[must_use]
pub fn bytewise(params: &CrcParams, data: &[u8]) -> u128 {
  let width = params.width();
  let reflected = params.reflect_in();
  let mut table = [0u128; 256];
  for (index, slot) in (0..=u8::MAX).zip(table.iter_mut()) {
    *slot = table_entry(params.poly(), width, reflected, 128, index);
  }

  let normal = if reflected {
    let mut reg = reflect(params.init(), width);
    for &b in data {
      reg = (reg >> 8) ^ table[((reg as u8) ^ b) as usize];
    }
    reflect(reg, width)
  } else {
    let shift = 128 - u32::from(width);
    let mut reg = params.init() << shift;
    for &b in data {
      reg = (reg << 8) ^ table[(((reg >> 120) as u8) ^ b) as usize];
    }
    reg >> shift
  };
  params.finalize_normal(normal)
}

#[cfg(test)]
mod tests {
  use super::*;

  const CHECK: &[u8] = b"123456789";

  fn p(width: u8, poly: u128, init: u128, refin: bool, refout: bool, xorout: u128) -> CrcParams {
    CrcParams::new(width, poly, init, refin, refout, xorout).unwrap()
  }

  #[test]
  fn well_known_check_values() {
    let cases = [
      (p(32, 0x04C1_1DB7, !0, true, true, !0), 0xCBF4_3926u128),
      (p(32, 0x04C1_1DB7, !0, false, false, !0), 0xFC89_1918),
      (p(16, 0x1021, 0xFFFF, false, false, 0), 0x29B1),
      (p(16, 0x8005, 0, true, true, 0), 0xBB3D),
      (p(8, 0x07, 0, false, false, 0), 0xF4),
      (p(3, 0x3, 0, false, false, 0x7), 0x4),
      (p(5, 0x05, 0x1F, true, true, 0x1F), 0x19),
      (p(12, 0x80F, 0, false, true, 0), 0xDAF),
      (p(64, 0x42F0_E1EB_A9EA_3693, !0, true, true, !0), 0x995D_C9BB_DF19_39FA),
      (
        p(82, 0x308C_0111_0114_0144_0411, 0, true, true, 0),
        0x9EA8_3F62_5023_801F_D612,
      ),
    ];
    for (params, check) in cases {
      assert_eq!(bitwise(&params, CHECK), check, "bitwise {params:?}");
      assert_eq!(bytewise(&params, CHECK), check, "bytewise {params:?}");
    }
  }

  #[test]
  fn empty_input_is_empty_crc() {
    let params = p(24, 0x86_4CFB, 0xB7_04CE, false, false, 0);
    assert_eq!(bitwise(&params, &[]), 0xB7_04CE);
    assert_eq!(bytewise(&params, &[]), params.empty_crc());
  }

  #[test]
  fn bitwise_and_bytewise_agree_for_full_width() {
    let data: Vec<u8> = (0u16..300).map(|i| (i * 7 + 3) as u8).collect();
    for refin in [false, true] {
      for refout in [false, true] {
        let params = p(128, 0x87, 0x1234, refin, refout, 0xAB);
        assert_eq!(bitwise(&params, &data), bytewise(&params, &data));
      }
    }
  }

  const CRC32_CHECK: u128 = bitwise(
    &CrcParams::from_valid(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF),
    CHECK,
  );

  #[test]
  fn bitwise_is_const_evaluable() {
    assert_eq!(CRC32_CHECK, 0xCBF4_3926);
  }
}
