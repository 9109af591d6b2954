//! Cross-block combine.
//!
//! Computes `crc(A ‖ B)` from `crc(A)`, `crc(B)` and `len(B)` without touching
//! the data, in O(log len(B)) matrix squarings.
//!
//! # Derivation
//!
//! Write `N(x, M)` for the unreflected register after feeding `M` from
//! register `x`, and `T` for the output transform (optional reflection, then
//! XOR `xorout`). The update is linear over GF(2), so with `Z_n` the operator
//! for `n` zero bytes:
//!
//! ```text
//! N(init, A ‖ B) = Z_|B| · N(init, A) ^ N(0, B)
//! N(init, B)     = Z_|B| · init        ^ N(0, B)
//! ```
//!
//! and since `T(x ^ y) = refl(x) ^ T(y)`:
//!
//! ```text
//! crc(A ‖ B) = refl(Z_|B| · (N(init, A) ^ init)) ^ crc(B)
//! ```
//!
//! `N(init, A)` is recovered from `crc(A)` by undoing `T`. The input
//! reflection plays no part: zero bytes are zero in either bit order.
//!
//! Removing `init` by XOR is valid only because every step above is linear
//! over GF(2).

use crate::{
  common::{
    combine::shift_zero_bytes,
    word::{mask, reflect},
  },
  error::Result,
  params::CrcParams,
};

/// Combine `crc1 = crc(A)` and `crc2 = crc(B)` into `crc(A ‖ B)`.
///
/// `len2` is the length of `B` in bytes. `len2 == 0` returns `crc1`.
///
/// # Example
///
/// ```
/// use crcmodel::{catalog, combine};
///
/// let crc32 = catalog::CRC_32_ISO_HDLC;
/// let a = crc32.checksum(b"123456");
/// let b = crc32.checksum(b"789");
/// assert_eq!(combine::combine(&crc32.params(), a, b, 3), 0xCBF4_3926);
/// ```
#[must_use]
pub fn combine(params: &CrcParams, crc1: u128, crc2: u128, len2: u64) -> u128 {
  if len2 == 0 {
    return crc1;
  }
  let width = params.width();
  let contribution = params.unfinalize_normal(crc1) ^ params.init();
  let shifted = shift_zero_bytes(params.poly(), width, false, contribution, len2);
  let out = if params.reflect_out() {
    reflect(shifted, width)
  } else {
    shifted
  };
  (out ^ crc2) & mask(width)
}

/// [`combine`] taking the parameters it depends on directly.
///
/// `reflect_in` does not affect the result and is not asked for.
///
/// # Errors
///
/// The validation errors of [`CrcParams::new`].
#[allow(clippy::too_many_arguments)]
pub fn combine_parts(
  width: u8,
  poly: u128,
  init: u128,
  reflect_out: bool,
  xor_out: u128,
  crc1: u128,
  crc2: u128,
  len2: u64,
) -> Result<u128> {
  let params = CrcParams::new(width, poly, init, reflect_out, reflect_out, xor_out)?;
  Ok(combine(&params, crc1, crc2, len2))
}

/// Fold an ordered list of `(crc, len)` pairs into the CRC of the
/// concatenated blocks. Returns `None` for an empty list.
///
/// ```
/// use crcmodel::{catalog, combine};
///
/// let alg = catalog::CRC_64_XZ;
/// let parts: Vec<(u128, u64)> = [&b"12"[..], b"345", b"", b"6789"]
///   .iter()
///   .map(|p| (alg.checksum(p), p.len() as u64))
///   .collect();
/// assert_eq!(combine::combine_all(&alg.params(), &parts), Some(alg.check));
/// ```
#[must_use]
pub fn combine_all(params: &CrcParams, parts: &[(u128, u64)]) -> Option<u128> {
  let ((first, _), rest) = parts.split_first()?;
  Some(
    rest
      .iter()
      .fold(*first, |acc, &(crc, len)| combine(params, acc, crc, len)),
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::common::{combine::Gf2Matrix, reference::bitwise};

  const DATA: &[u8] = b"The quick brown fox jumps over the lazy dog, twice over.";

  fn p(width: u8, poly: u128, init: u128, refin: bool, refout: bool, xorout: u128) -> CrcParams {
    CrcParams::new(width, poly, init, refin, refout, xorout).unwrap()
  }

  #[test]
  fn crc32_split_example() {
    let params = p(32, 0x04C1_1DB7, !0, true, true, !0);
    let a = bitwise(&params, b"123456");
    let b = bitwise(&params, b"789");
    assert_eq!(combine(&params, a, b, 3), 0xCBF4_3926);
  }

  #[test]
  fn empty_second_block_returns_first() {
    let params = p(16, 0x1021, 0xFFFF, false, false, 0);
    let a = bitwise(&params, DATA);
    assert_eq!(combine(&params, a, params.empty_crc(), 0), a);
  }

  #[test]
  fn every_split_matches_whole() {
    let cases = [
      p(3, 0x3, 0, false, false, 0x7),
      p(5, 0x05, 0x1F, true, true, 0x1F),
      p(12, 0x80F, 0, false, true, 0),
      p(16, 0x8005, 0, true, true, 0),
      p(24, 0x86_4CFB, 0xB7_04CE, false, false, 0),
      p(32, 0x1EDC_6F41, !0, true, true, !0),
      p(40, 0x482_0009, 0, false, false, !0),
      p(64, 0xAD93_D235_94C9_3659, !0, true, true, !0),
      p(82, 0x308C_0111_0114_0144_0411, 0, true, true, 0),
      p(128, 0x87, !0, false, false, 0x55),
    ];
    for params in cases {
      let whole = bitwise(&params, DATA);
      for split in [0, 1, 7, DATA.len() / 2, DATA.len() - 1, DATA.len()] {
        let (a, b) = DATA.split_at(split);
        let combined = combine(&params, bitwise(&params, a), bitwise(&params, b), b.len() as u64);
        assert_eq!(combined, whole, "{params:?} split={split}");
      }
    }
  }

  #[test]
  fn combine_parts_matches_combine() {
    let params = p(32, 0x04C1_1DB7, !0, true, true, !0);
    let a = bitwise(&params, b"hello ");
    let b = bitwise(&params, b"world");
    assert_eq!(
      combine_parts(32, 0x04C1_1DB7, !0, true, !0, a, b, 5).unwrap(),
      bitwise(&params, b"hello world")
    );
    assert!(combine_parts(0, 0x07, 0, false, 0, 0, 0, 1).is_err());
  }

  #[test]
  fn combine_all_folds_in_order() {
    let params = p(16, 0x1021, 0, true, true, 0);
    assert_eq!(combine_all(&params, &[]), None);
    assert_eq!(combine_all(&params, &[(0x1234, 99)]), Some(0x1234));
    let parts: Vec<(u128, u64)> = DATA
      .chunks(5)
      .map(|c| (bitwise(&params, c), c.len() as u64))
      .collect();
    assert_eq!(combine_all(&params, &parts), Some(bitwise(&params, DATA)));
  }

  #[test]
  fn large_length_is_logarithmic() {
    // 2^40 zero bytes: only feasible through square-and-multiply. With zero
    // init and xorout the CRC of any run of zeros is zero, so combining with
    // it is a pure register advance.
    let params = p(32, 0x04C1_1DB7, 0, true, true, 0);
    let a = bitwise(&params, b"a");
    let n = 1u64 << 40;
    let combined = combine(&params, a, 0, n);

    let pow2 = Gf2Matrix::zero_bytes_pow2(0x04C1_1DB7, 32, true, 40).multiply(a);
    assert_eq!(combined, pow2);
    let half = shift_zero_bytes(0x04C1_1DB7, 32, true, a, n / 2);
    assert_eq!(shift_zero_bytes(0x04C1_1DB7, 32, true, half, n / 2), combined);
    assert_ne!(combined, a);

    // Odd lengths take the multiply branch as well as the squarings.
    let odd = n + 3;
    let direct = combine(&params, a, 0, odd);
    let split = combine(&params, combine(&params, a, 0, n), 0, 3);
    assert_eq!(direct, split);
    assert_eq!(combine(&params, a, 0, 3), bitwise(&params, b"a\0\0\0"));
  }
}
