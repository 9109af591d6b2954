//! Byte-at-a-time lookup tables.
//!
//! Entry `i` is the remainder left after shifting byte `i` through eight
//! single-bit division steps:
//!
//! - **Reflected**: the byte enters at the bottom of the register and the
//!   reflected polynomial is XORed in whenever a 1 falls off bit 0.
//! - **Unreflected**: the byte enters at the top of the storage word and the
//!   polynomial, left-justified to the word, is XORed in whenever a 1 falls off
//!   the top bit.
//!
//! Entries are stored in the same justification as the register they update,
//! so the engine never realigns during the byte loop.

// SAFETY: indexing is by `u8` into `[_; 256]`, which is always in bounds.
#![allow(clippy::indexing_slicing)]

use core::fmt;

use super::word::{Word, mask, reflect};
use crate::{
  error::{CrcError, Result},
  params::CrcParams,
};

/// Compute one table entry in `storage_bits`-wide justification.
///
/// `width` must be in `1..=storage_bits` and `storage_bits` in `8..=128`.
#[must_use]
pub(crate) const fn table_entry(poly: u128, width: u8, reflected: bool, storage_bits: u32, index: u8) -> u128 {
  let mut bit = 0;
  if reflected {
    let poly = reflect(poly, width);
    let mut crc = index as u128;
    while bit < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
      bit += 1;
    }
    crc
  } else {
    let shift = storage_bits - width as u32;
    let poly = (poly & mask(width)) << shift;
    let top = 1u128 << (storage_bits - 1);
    let storage_mask = u128::MAX >> (128 - storage_bits);
    let mut crc = (index as u128) << (storage_bits - 8);
    while bit < 8 {
      crc = if crc & top != 0 {
        (crc << 1) ^ poly
      } else {
        crc << 1
      };
      crc &= storage_mask;
      bit += 1;
    }
    crc
  }
}

/// A 256-entry lookup table for one (polynomial, width, orientation).
///
/// Tables are immutable once built and are shared between engines through
/// `Arc`.
#[derive(Clone, PartialEq, Eq)]
pub struct Table<W: Word> {
  entries: [W; 256],
  poly: u128,
  width: u8,
  reflected: bool,
}

impl<W: Word> Table<W> {
  /// Generate the table for `poly` at `width` bits.
  ///
  /// # Errors
  ///
  /// - [`CrcError::InvalidWidth`] unless `1 <= width <= W::BITS`
  /// - [`CrcError::ZeroPolynomial`] if `poly` masked to `width` is zero
  pub fn new(poly: u128, width: u8, reflected: bool) -> Result<Self> {
    let poly = validate::<W>(poly, width)?;
    let mut entries = [W::ZERO; 256];
    for (index, slot) in (0..=u8::MAX).zip(entries.iter_mut()) {
      *slot = W::from_u128(table_entry(poly, width, reflected, W::BITS, index));
    }
    tracing::debug!(width, poly = ?poly, reflected, word_bits = W::BITS, "generated crc table");
    Ok(Self {
      entries,
      poly,
      width,
      reflected,
    })
  }

  /// Generate the table an engine with `params` needs.
  pub fn for_params(params: &CrcParams) -> Result<Self> {
    Self::new(params.poly(), params.width(), params.reflect_in())
  }

  /// Wrap caller-supplied entries.
  ///
  /// The entries are taken as-is; they must be in the register justification
  /// described in the module docs.
  ///
  /// # Errors
  ///
  /// [`CrcError::TableLength`] unless exactly 256 entries are supplied, plus
  /// the errors of [`Table::new`].
  pub fn from_entries(poly: u128, width: u8, reflected: bool, entries: &[W]) -> Result<Self> {
    let poly = validate::<W>(poly, width)?;
    let entries: [W; 256] = entries
      .try_into()
      .map_err(|_| CrcError::TableLength { len: entries.len() })?;
    Ok(Self {
      entries,
      poly,
      width,
      reflected,
    })
  }

  /// Entry for `index`.
  #[inline]
  pub fn get(&self, index: u8) -> W {
    self.entries[index as usize]
  }

  /// All 256 entries.
  #[inline]
  pub fn entries(&self) -> &[W; 256] {
    &self.entries
  }

  /// Polynomial the table was generated for (masked).
  #[inline]
  pub fn poly(&self) -> u128 {
    self.poly
  }

  /// CRC width the table was generated for.
  #[inline]
  pub fn width(&self) -> u8 {
    self.width
  }

  /// Whether the table drives a reflected (LSB-first) register.
  #[inline]
  pub fn is_reflected(&self) -> bool {
    self.reflected
  }

  /// Whether an engine configured with `params` may use this table.
  #[inline]
  pub fn matches(&self, params: &CrcParams) -> bool {
    self.poly == params.poly() && self.width == params.width() && self.reflected == params.reflect_in()
  }
}

impl<W: Word> fmt::Debug for Table<W> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Table")
      .field("width", &self.width)
      .field("poly", &format_args!("{:#x}", self.poly))
      .field("reflected", &self.reflected)
      .field("word_bits", &W::BITS)
      .finish_non_exhaustive()
  }
}

fn validate<W: Word>(poly: u128, width: u8) -> Result<u128> {
  if width == 0 || u32::from(width) > W::BITS {
    return Err(CrcError::InvalidWidth {
      width: u32::from(width),
      max: W::BITS,
    });
  }
  let poly = poly & mask(width);
  if poly == 0 {
    return Err(CrcError::ZeroPolynomial { width });
  }
  Ok(poly)
}
