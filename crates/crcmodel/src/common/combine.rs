//! GF(2) matrix operators for advancing a CRC register through zero bits.
//!
//! Appending one zero bit to a message is a linear map on the register:
//!
//! ```text
//! unreflected: r' = (r << 1) ^ (poly  if r & top)
//! reflected:   r' = (r >> 1) ^ (rpoly if r & 1)
//! ```
//!
//! A width×width matrix over GF(2) captures that map. Squaring the matrix
//! doubles the number of zero bits it represents, so the operator for `n` zero
//! bytes costs O(log n) squarings instead of O(n) shifts.
//!
//! Registers handled here are always right-justified `width`-bit values, even
//! for unreflected CRCs; callers convert from the storage justification.

// SAFETY: rows are indexed by bit positions below `width`, and `rows.len() == width`.
#![allow(clippy::indexing_slicing)]

use super::word::mask;

/// A `width`×`width` linear operator over GF(2).
///
/// Row `i` is the image of the basis vector `1 << i`. Applying the operator
/// to a vector XORs together the rows selected by the vector's set bits.
#[derive(Clone, PartialEq, Eq)]
pub struct Gf2Matrix {
  width: u8,
  rows: Vec<u128>,
}

impl Gf2Matrix {
  /// The identity operator.
  ///
  /// # Panics
  ///
  /// `width` must be in `1..=128`; anything else panics in debug builds.
  #[must_use]
  pub fn identity(width: u8) -> Self {
    debug_assert!((1..=128).contains(&width), "crc width must be in 1..=128");
    let rows = (0..u32::from(width)).map(|i| 1u128 << i).collect();
    Self { width, rows }
  }

  /// Operator for appending one zero bit.
  ///
  /// `poly` is the unreflected polynomial; it is reflected internally when
  /// `reflected` is set.
  ///
  /// # Panics
  ///
  /// `width` must be in `1..=128`; anything else panics in debug builds. The
  /// byte, power-of-two and [`shift_zero_bytes`] builders share this
  /// precondition.
  #[must_use]
  pub fn one_zero_bit(poly: u128, width: u8, reflected: bool) -> Self {
    debug_assert!((1..=128).contains(&width), "crc width must be in 1..=128");
    let m = mask(width);
    let poly = poly & m;
    let rows = if reflected {
      let rpoly = super::word::reflect(poly, width);
      // Bit 0 falls off and triggers feedback; every other bit moves down one.
      (0..u32::from(width))
        .map(|i| if i == 0 { rpoly } else { 1u128 << (i - 1) })
        .collect()
    } else {
      // The top bit falls off and triggers feedback; every other bit moves up one.
      let top = u32::from(width) - 1;
      (0..u32::from(width))
        .map(|i| if i == top { poly } else { 1u128 << (i + 1) })
        .collect()
    };
    Self { width, rows }
  }

  /// Operator for appending one zero byte: the one-bit operator squared three times.
  #[must_use]
  pub fn one_zero_byte(poly: u128, width: u8, reflected: bool) -> Self {
    Self::one_zero_bit(poly, width, reflected).square().square().square()
  }

  /// Operator for appending `2^log2_bytes` zero bytes.
  #[must_use]
  pub fn zero_bytes_pow2(poly: u128, width: u8, reflected: bool, log2_bytes: u32) -> Self {
    (0..log2_bytes).fold(Self::one_zero_byte(poly, width, reflected), |m, _| m.square())
  }

  /// Matrix width in bits.
  #[inline]
  pub fn width(&self) -> u8 {
    self.width
  }

  /// The rows, one per input bit.
  #[inline]
  pub fn rows(&self) -> &[u128] {
    &self.rows
  }

  /// Apply the operator to `vector`.
  #[inline]
  #[must_use]
  pub fn multiply(&self, vector: u128) -> u128 {
    let mut sum = 0u128;
    let mut v = vector & mask(self.width);
    while v != 0 {
      let bit = v.trailing_zeros() as usize;
      sum ^= self.rows[bit];
      v &= v - 1;
    }
    sum
  }

  /// `self ∘ self`: the operator applied twice.
  #[must_use]
  pub fn square(&self) -> Self {
    self.compose(self)
  }

  /// `self ∘ inner`: apply `inner` first, then `self`.
  ///
  /// Both operators must have the same width.
  #[must_use]
  pub fn compose(&self, inner: &Self) -> Self {
    debug_assert_eq!(self.width, inner.width);
    let rows = inner.rows.iter().map(|&row| self.multiply(row)).collect();
    Self {
      width: self.width,
      rows,
    }
  }
}

impl core::fmt::Debug for Gf2Matrix {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Gf2Matrix")
      .field("width", &self.width)
      .finish_non_exhaustive()
  }
}

/// Advance a right-justified register through `len` zero bytes.
///
/// `width` must be in `1..=128`.
///
/// Square-and-multiply over the bits of `len`: the running operator starts at
/// one byte and squares each round, and is applied whenever the current bit of
/// `len` is set. Powers of one operator commute, so application order does not
/// matter.
#[must_use]
pub fn shift_zero_bytes(poly: u128, width: u8, reflected: bool, register: u128, len: u64) -> u128 {
  if len == 0 {
    return register & mask(width);
  }
  let mut op = Gf2Matrix::one_zero_byte(poly, width, reflected);
  let mut reg = register & mask(width);
  let mut remaining = len;
  loop {
    if remaining & 1 != 0 {
      reg = op.multiply(reg);
    }
    remaining >>= 1;
    if remaining == 0 {
      break;
    }
    op = op.square();
  }
  reg
}
