//! The generic CRC engine.
//!
//! [`Crc<W>`] holds one register in storage word `W` together with the shared,
//! immutable pieces it needs: the parameters, the byte table and the combine
//! matrix for the configured chunk size.
//!
//! # Register layout
//!
//! | Orientation | Layout in `W` | Initial register |
//! |-------------|---------------|------------------|
//! | reflected (`refin`)   | right-justified, bit-reversed | `reflect(init)` |
//! | unreflected           | left-justified                | `init << (W::BITS - width)` |
//!
//! [`Crc::register`] and [`Crc::set_register`] expose the raw word in this
//! layout so partial computations can be cached and resumed.

use std::sync::Arc;

use crate::{
  combine,
  common::{
    combine::Gf2Matrix,
    portable,
    tables::Table,
    word::{Word, mask, reflect},
  },
  config::{self, EngineConfig},
  error::{CrcError, Result},
  params::CrcParams,
  parallel,
};

/// A CRC accumulator over register word `W`.
///
/// Cloning an engine shares its table and combine matrix and copies the
/// register.
///
/// # Example
///
/// ```
/// use crcmodel::{Crc, CrcParams};
///
/// let params = CrcParams::new(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF).unwrap();
/// let mut crc = Crc::<u32>::new(params).unwrap();
/// crc.add(b"123456");
/// crc.add(b"789");
/// assert_eq!(crc.value(), 0xCBF4_3926);
///
/// crc.reset();
/// crc.add(b"123456789");
/// assert_eq!(crc.value(), 0xCBF4_3926);
/// ```
#[derive(Clone, Debug)]
pub struct Crc<W: Word> {
  params: CrcParams,
  table: Arc<Table<W>>,
  combine: Arc<Gf2Matrix>,
  config: EngineConfig,
  register: W,
}

impl<W: Word> Crc<W> {
  /// Build an engine with the process-wide configuration ([`config::get`]).
  ///
  /// # Errors
  ///
  /// [`CrcError::InvalidWidth`] if `params.width()` does not fit in `W`.
  pub fn new(params: CrcParams) -> Result<Self> {
    Self::with_config(params, config::get())
  }

  /// Build an engine with an explicit configuration.
  ///
  /// # Errors
  ///
  /// [`CrcError::InvalidWidth`] if `params.width()` does not fit in `W`.
  pub fn with_config(params: CrcParams, config: EngineConfig) -> Result<Self> {
    let table = Arc::new(Table::for_params(&params)?);
    Ok(Self::assemble(params, table, config))
  }

  /// Build an engine around an existing table.
  ///
  /// # Errors
  ///
  /// [`CrcError::TableMismatch`] if the table was generated for a different
  /// polynomial, width or orientation.
  pub fn with_table(params: CrcParams, table: Arc<Table<W>>) -> Result<Self> {
    Self::with_table_and_config(params, table, config::get())
  }

  /// Build an engine around an existing table with an explicit configuration.
  ///
  /// # Errors
  ///
  /// [`CrcError::TableMismatch`] if the table was generated for a different
  /// polynomial, width or orientation.
  pub fn with_table_and_config(params: CrcParams, table: Arc<Table<W>>, config: EngineConfig) -> Result<Self> {
    if !table.matches(&params) {
      return Err(CrcError::TableMismatch);
    }
    Ok(Self::assemble(params, table, config))
  }

  fn assemble(params: CrcParams, table: Arc<Table<W>>, config: EngineConfig) -> Self {
    let combine = Arc::new(Gf2Matrix::zero_bytes_pow2(
      params.poly(),
      params.width(),
      params.reflect_in(),
      config.chunk_log2(),
    ));
    tracing::debug!(
      width = params.width(),
      poly = ?params.poly(),
      reflect_in = params.reflect_in(),
      word_bits = W::BITS,
      chunk_size = config.chunk_size(),
      fan_out = config.fan_out().as_str(),
      "built crc engine"
    );
    let register = initial_register::<W>(&params);
    Self {
      params,
      table,
      combine,
      config,
      register,
    }
  }

  /// Feed one byte.
  #[inline]
  pub fn add_byte(&mut self, byte: u8) {
    self.register = portable::update(&self.table, self.register, &[byte]);
  }

  /// Feed a whole buffer.
  ///
  /// Inputs large enough for the configured [`FanOut`](crate::FanOut) mode are
  /// split into chunks and folded with the combine matrix; the result is
  /// identical to feeding byte by byte.
  pub fn add(&mut self, data: &[u8]) {
    self.register = self.feed(self.register, data);
  }

  /// Feed `count` bytes of `data` starting at `offset`.
  ///
  /// `None` means the rest of the buffer after `offset`. `Some(0)` is a no-op
  /// once the offset has been checked.
  ///
  /// # Errors
  ///
  /// [`CrcError::OutOfRange`] if the range does not lie inside `data`. The
  /// register is left untouched.
  pub fn add_range(&mut self, data: &[u8], offset: usize, count: Option<usize>) -> Result<()> {
    let len = data.len();
    let count = count.unwrap_or_else(|| len.saturating_sub(offset));
    let slice = offset
      .checked_add(count)
      .and_then(|end| data.get(offset..end))
      .ok_or(CrcError::OutOfRange { offset, count, len })?;
    self.add(slice);
    Ok(())
  }

  /// Return the register to the initial value.
  #[inline]
  pub fn reset(&mut self) {
    self.register = initial_register::<W>(&self.params);
  }

  /// The finalized CRC of everything fed since the last reset.
  ///
  /// Does not change the register.
  #[inline]
  #[must_use]
  pub fn value(&self) -> u128 {
    self.finalize(self.register)
  }

  /// Raw register in the layout described in the module docs.
  #[inline]
  #[must_use]
  pub fn register(&self) -> W {
    self.register
  }

  /// Overwrite the raw register.
  ///
  /// Bits outside the `width`-bit window of the layout are cleared, so the
  /// stored register is always one [`Crc::register`] could have returned.
  #[inline]
  pub fn set_register(&mut self, register: W) {
    let window = mask(self.params.width()) << self.matrix_shift();
    self.register = W::from_u128(register.to_u128() & window);
  }

  /// Load the register that finalizes to `crc`, so feeding more bytes extends
  /// a previously finalized CRC.
  ///
  /// ```
  /// use crcmodel::{Crc, catalog};
  ///
  /// let params = catalog::CRC_16_IBM_3740.params();
  /// let stored = catalog::CRC_16_IBM_3740.checksum(b"1234");
  ///
  /// let mut crc = Crc::<u16>::new(params).unwrap();
  /// crc.resume_from(stored);
  /// crc.add(b"56789");
  /// assert_eq!(crc.value(), 0x29B1);
  /// ```
  pub fn resume_from(&mut self, crc: u128) {
    let normal = self.params.unfinalize_normal(crc);
    self.register = from_normal::<W>(&self.params, normal);
  }

  /// One-shot CRC of `data` from the initial register; `self` is not changed.
  #[must_use]
  pub fn checksum(&self, data: &[u8]) -> u128 {
    self.finalize(self.feed(initial_register::<W>(&self.params), data))
  }

  /// CRC of `A ‖ B` from `crc(A)`, `crc(B)` and `len(B)` under this engine's
  /// parameters.
  #[must_use]
  pub fn combine(&self, crc1: u128, crc2: u128, len2: u64) -> u128 {
    combine::combine(&self.params, crc1, crc2, len2)
  }

  /// Parameters.
  #[inline]
  #[must_use]
  pub fn params(&self) -> &CrcParams {
    &self.params
  }

  /// Shared byte table, for building further engines with [`Crc::with_table`].
  #[inline]
  #[must_use]
  pub fn table(&self) -> &Arc<Table<W>> {
    &self.table
  }

  /// The operator that advances a register through one chunk of zero bytes.
  #[inline]
  #[must_use]
  pub fn combine_matrix(&self) -> &Gf2Matrix {
    &self.combine
  }

  /// Configuration the engine was built with.
  #[inline]
  #[must_use]
  pub fn config(&self) -> &EngineConfig {
    &self.config
  }

  fn feed(&self, register: W, data: &[u8]) -> W {
    if self.config.should_fan_out(data.len()) {
      parallel::fan_out(
        &self.table,
        &self.combine,
        self.matrix_shift(),
        register,
        data,
        self.config.chunk_size(),
      )
    } else {
      portable::update(&self.table, register, data)
    }
  }

  /// Distance between the storage layout and a right-justified vector.
  #[inline]
  fn matrix_shift(&self) -> u32 {
    if self.params.reflect_in() {
      0
    } else {
      W::BITS - u32::from(self.params.width())
    }
  }

  #[inline]
  fn finalize(&self, register: W) -> u128 {
    let width = self.params.width();
    let raw = register.to_u128();
    let normal = if self.params.reflect_in() {
      reflect(raw, width)
    } else {
      raw >> (W::BITS - u32::from(width))
    };
    self.params.finalize_normal(normal)
  }
}

fn initial_register<W: Word>(params: &CrcParams) -> W {
  from_normal::<W>(params, params.init())
}

fn from_normal<W: Word>(params: &CrcParams, normal: u128) -> W {
  let width = params.width();
  if params.reflect_in() {
    W::from_u128(reflect(normal, width))
  } else {
    W::from_u128(normal << (W::BITS - u32::from(width)))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{FanOut, common::word::Wide};

  fn crc32() -> CrcParams {
    CrcParams::new(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF).unwrap()
  }

  #[test]
  fn crc32_check() {
    let mut c = Crc::<u32>::new(crc32()).unwrap();
    c.add(b"123456789");
    assert_eq!(c.value(), 0xCBF4_3926);
  }

  #[test]
  fn add_byte_matches_add() {
    let mut a = Crc::<u32>::new(crc32()).unwrap();
    let mut b = a.clone();
    for &byte in b"123456789" {
      a.add_byte(byte);
    }
    b.add(b"123456789");
    assert_eq!(a.register(), b.register());
  }

  #[test]
  fn value_does_not_mutate() {
    let mut c = Crc::<u32>::new(crc32()).unwrap();
    c.add(b"1234");
    let r = c.register();
    let _ = c.value();
    assert_eq!(c.register(), r);
  }

  #[test]
  fn initial_register_layout() {
    let p = CrcParams::new(12, 0x80F, 0xABC, false, false, 0).unwrap();
    let c = Crc::<u16>::new(p).unwrap();
    assert_eq!(c.register(), 0xABC0);

    let p = CrcParams::new(5, 0x05, 0x1F, true, true, 0x1F).unwrap();
    let c = Crc::<u8>::new(p).unwrap();
    assert_eq!(c.register(), 0x1F);

    let p = CrcParams::new(82, 0x308C_0111_0114_0144_0411, 1, false, false, 0).unwrap();
    let c = Crc::<Wide>::new(p).unwrap();
    assert_eq!(c.register(), Wide::from(1u128 << 46));
  }

  #[test]
  fn empty_value_is_empty_crc() {
    let p = CrcParams::new(16, 0x1021, 0xFFFF, false, false, 0).unwrap();
    let c = Crc::<u16>::new(p).unwrap();
    assert_eq!(c.value(), 0xFFFF);
  }

  #[test]
  fn refin_refout_disagree() {
    // CRC-12/UMTS: MSB-first input, reflected output.
    let p = CrcParams::new(12, 0x80F, 0, false, true, 0).unwrap();
    let mut c = Crc::<u16>::new(p).unwrap();
    c.add(b"123456789");
    assert_eq!(c.value(), 0xDAF);
  }

  #[test]
  fn width_too_large_for_word() {
    assert_eq!(
      Crc::<u16>::new(crc32()).unwrap_err(),
      CrcError::InvalidWidth { width: 32, max: 16 }
    );
  }

  #[test]
  fn shared_table_must_match() {
    let c = Crc::<u32>::new(crc32()).unwrap();
    let table = Arc::clone(c.table());
    let other = CrcParams::new(32, 0x1EDC_6F41, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF).unwrap();
    assert_eq!(
      Crc::<u32>::with_table(other, Arc::clone(&table)).unwrap_err(),
      CrcError::TableMismatch
    );

    // Same table, different init/xorout is fine.
    let jam = CrcParams::new(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0).unwrap();
    let mut j = Crc::<u32>::with_table(jam, table).unwrap();
    j.add(b"123456789");
    assert_eq!(j.value(), 0x340B_C6D9);
  }

  #[test]
  fn add_range_semantics() {
    let data = b"xx123456789yy";
    let mut c = Crc::<u32>::new(crc32()).unwrap();
    c.add_range(data, 2, Some(9)).unwrap();
    assert_eq!(c.value(), 0xCBF4_3926);

    c.reset();
    c.add_range(&data[..11], 2, None).unwrap();
    assert_eq!(c.value(), 0xCBF4_3926);

    let before = c.register();
    c.add_range(data, 5, Some(0)).unwrap();
    assert_eq!(c.register(), before);

    assert_eq!(
      c.add_range(data, 10, Some(4)),
      Err(CrcError::OutOfRange {
        offset: 10,
        count: 4,
        len: 13
      })
    );
    assert_eq!(
      c.add_range(data, 14, None),
      Err(CrcError::OutOfRange {
        offset: 14,
        count: 0,
        len: 13
      })
    );
    assert_eq!(
      c.add_range(data, usize::MAX, Some(2)),
      Err(CrcError::OutOfRange {
        offset: usize::MAX,
        count: 2,
        len: 13
      })
    );
    assert_eq!(c.register(), before);
    assert!(c.add_range(data, 13, None).is_ok());
  }

  #[test]
  fn register_round_trip() {
    let mut a = Crc::<u32>::new(crc32()).unwrap();
    a.add(b"12345");
    let saved = a.register();

    let mut b = Crc::<u32>::new(crc32()).unwrap();
    b.set_register(saved);
    b.add(b"6789");
    assert_eq!(b.value(), 0xCBF4_3926);
  }

  #[test]
  fn set_register_clears_bits_outside_the_window() {
    let p = CrcParams::new(12, 0x80F, 0, false, false, 0).unwrap();
    let mut clean = Crc::<u16>::new(p).unwrap();
    let mut noisy = clean.clone();
    clean.set_register(0x0);
    noisy.set_register(0xF);
    assert_eq!(noisy.register(), 0);
    noisy.add(b"1");
    clean.add(b"1");
    assert_eq!(noisy.value(), clean.value());

    let p = CrcParams::new(5, 0x05, 0x1F, true, true, 0x1F).unwrap();
    let mut c = Crc::<u8>::new(p).unwrap();
    c.set_register(0xE3);
    assert_eq!(c.register(), 0x03);

    let p = CrcParams::new(82, 0x308C_0111_0114_0144_0411, 0, true, true, 0).unwrap();
    let mut c = Crc::<Wide>::new(p).unwrap();
    c.set_register(Wide::from(u128::MAX));
    assert_eq!(u128::from(c.register()), (1u128 << 82) - 1);
  }

  #[test]
  fn resume_from_finalized_value() {
    for (p, check) in [
      (crc32(), 0xCBF4_3926u128),
      (CrcParams::new(12, 0x80F, 0, false, true, 0).unwrap(), 0xDAF),
      (CrcParams::new(16, 0x1021, 0xFFFF, false, false, 0xFFFF).unwrap(), 0xD64E),
    ] {
      let first = Crc::<u32>::new(p).unwrap().checksum(b"123");
      let mut c = Crc::<u32>::new(p).unwrap();
      c.resume_from(first);
      c.add(b"456789");
      assert_eq!(c.value(), check);
    }
  }

  #[test]
  fn checksum_is_stateless() {
    let mut c = Crc::<u32>::new(crc32()).unwrap();
    c.add(b"abc");
    let r = c.register();
    assert_eq!(c.checksum(b"123456789"), 0xCBF4_3926);
    assert_eq!(c.register(), r);
  }

  #[test]
  fn chunk_boundaries_match_sequential() {
    let data: Vec<u8> = (0..1000u32).map(|i| (i * 31 + 7) as u8).collect();
    let sequential = EngineConfig::default().with_fan_out(FanOut::Sequential);
    let reference = Crc::<u32>::with_config(crc32(), sequential).unwrap().checksum(&data);
    for chunk in [1usize, 2, 16, 64, 128] {
      let config = EngineConfig::default()
        .with_chunk_size(chunk)
        .unwrap()
        .with_fan_out(FanOut::Parallel);
      let c = Crc::<u32>::with_config(crc32(), config).unwrap();
      assert_eq!(c.checksum(&data), reference, "chunk={chunk}");
      for len in [chunk - 1, chunk, chunk + 1] {
        let expected = Crc::<u32>::with_config(crc32(), sequential).unwrap().checksum(&data[..len]);
        assert_eq!(c.checksum(&data[..len]), expected, "chunk={chunk} len={len}");
      }
    }
  }

  #[test]
  fn engine_combine() {
    let c = Crc::<u32>::new(crc32()).unwrap();
    let a = c.checksum(b"123456");
    let b = c.checksum(b"789");
    assert_eq!(c.combine(a, b, 3), 0xCBF4_3926);
  }
}
