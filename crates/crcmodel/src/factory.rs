//! Descriptor → engine factory.
//!
//! A [`Descriptor`] names a parameter set, either ad hoc or from the
//! [catalog](crate::catalog). [`create`] picks the smallest register word that
//! holds the width and returns the engine behind [`AnyCrc`]:
//!
//! | Width | Class | Engine |
//! |-------|-------|--------|
//! | 1..=8 | [`WidthClass::W8`] | `Crc<u8>` |
//! | 9..=16 | [`WidthClass::W16`] | `Crc<u16>` |
//! | 17..=32 | [`WidthClass::W32`] | `Crc<u32>` |
//! | 33..=64 | [`WidthClass::W64`] | `Crc<u64>` |
//! | 65..=128 | [`WidthClass::W128`] | `Crc<Wide>` |

use std::borrow::Cow;

use crate::{
  catalog::{self, Algorithm},
  common::word::Wide,
  config::{self, EngineConfig},
  engine::Crc,
  error::{CrcError, Result},
  params::{CrcParams, MAX_WIDTH},
};

/// A CRC parameter set plus an optional name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Descriptor {
  /// Display name, if any.
  pub name: Option<Cow<'static, str>>,
  /// Register width in bits.
  pub width: u8,
  /// Generator polynomial (unreflected, top bit omitted).
  pub poly: u128,
  /// Initial register value (unreflected).
  pub init: u128,
  /// Process input bytes LSB-first.
  pub reflect_in: bool,
  /// Reflect the register before the final XOR.
  pub reflect_out: bool,
  /// Final XOR mask.
  pub xor_out: u128,
}

impl Descriptor {
  /// An unnamed descriptor.
  #[must_use]
  pub const fn new(width: u8, poly: u128, init: u128, reflect_in: bool, reflect_out: bool, xor_out: u128) -> Self {
    Self {
      name: None,
      width,
      poly,
      init,
      reflect_in,
      reflect_out,
      xor_out,
    }
  }

  /// An unnamed descriptor with 128-bit values given as `(hi, lo)` halves.
  #[must_use]
  pub fn from_halves(
    width: u8,
    poly: (u64, u64),
    init: (u64, u64),
    reflect_in: bool,
    reflect_out: bool,
    xor_out: (u64, u64),
  ) -> Self {
    let join = |(hi, lo): (u64, u64)| u128::from(Wide::new(hi, lo));
    Self::new(width, join(poly), join(init), reflect_in, reflect_out, join(xor_out))
  }

  /// The catalog entry called `name` (or an alias of it).
  ///
  /// # Errors
  ///
  /// [`CrcError::UnknownAlgorithm`] if the catalog has no such name.
  pub fn named(name: &str) -> Result<Self> {
    catalog::lookup(name).map(Self::from)
  }

  /// Attach a display name.
  #[must_use]
  pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
    self.name = Some(name.into());
    self
  }

  /// Validate into [`CrcParams`].
  ///
  /// # Errors
  ///
  /// The validation errors of [`CrcParams::new`].
  pub fn params(&self) -> Result<CrcParams> {
    CrcParams::new(
      self.width,
      self.poly,
      self.init,
      self.reflect_in,
      self.reflect_out,
      self.xor_out,
    )
  }

  /// Register word class for this width, if the width is supported.
  #[must_use]
  pub const fn width_class(&self) -> Option<WidthClass> {
    WidthClass::for_width(self.width)
  }
}

impl From<&Algorithm> for Descriptor {
  fn from(alg: &Algorithm) -> Self {
    Self::new(
      alg.width,
      alg.poly,
      alg.init,
      alg.reflect_in,
      alg.reflect_out,
      alg.xor_out,
    )
    .with_name(alg.name)
  }
}

/// Register word classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WidthClass {
  /// `u8` register.
  W8,
  /// `u16` register.
  W16,
  /// `u32` register.
  W32,
  /// `u64` register.
  W64,
  /// Two-word [`Wide`] register.
  W128,
}

impl WidthClass {
  /// Smallest class holding `width` bits.
  #[must_use]
  pub const fn for_width(width: u8) -> Option<Self> {
    match width {
      1..=8 => Some(Self::W8),
      9..=16 => Some(Self::W16),
      17..=32 => Some(Self::W32),
      33..=64 => Some(Self::W64),
      65..=MAX_WIDTH => Some(Self::W128),
      _ => None,
    }
  }

  /// Storage bits of the register word.
  #[must_use]
  pub const fn bits(self) -> u32 {
    match self {
      Self::W8 => 8,
      Self::W16 => 16,
      Self::W32 => 32,
      Self::W64 => 64,
      Self::W128 => 128,
    }
  }

  /// Short name of the register word.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::W8 => "u8",
      Self::W16 => "u16",
      Self::W32 => "u32",
      Self::W64 => "u64",
      Self::W128 => "wide",
    }
  }
}

/// An engine of any width class.
#[derive(Clone, Debug)]
pub enum AnyCrc {
  /// Widths 1..=8.
  W8(Crc<u8>),
  /// Widths 9..=16.
  W16(Crc<u16>),
  /// Widths 17..=32.
  W32(Crc<u32>),
  /// Widths 33..=64.
  W64(Crc<u64>),
  /// Widths 65..=128.
  W128(Crc<Wide>),
}

macro_rules! dispatch {
  ($self:expr, $crc:ident => $body:expr) => {
    match $self {
      AnyCrc::W8($crc) => $body,
      AnyCrc::W16($crc) => $body,
      AnyCrc::W32($crc) => $body,
      AnyCrc::W64($crc) => $body,
      AnyCrc::W128($crc) => $body,
    }
  };
}

impl AnyCrc {
  /// Feed one byte.
  #[inline]
  pub fn add_byte(&mut self, byte: u8) {
    dispatch!(self, c => c.add_byte(byte));
  }

  /// Feed a whole buffer.
  #[inline]
  pub fn add(&mut self, data: &[u8]) {
    dispatch!(self, c => c.add(data));
  }

  /// Feed part of a buffer. See [`Crc::add_range`].
  ///
  /// # Errors
  ///
  /// [`CrcError::OutOfRange`] if the range does not lie inside `data`.
  #[inline]
  pub fn add_range(&mut self, data: &[u8], offset: usize, count: Option<usize>) -> Result<()> {
    dispatch!(self, c => c.add_range(data, offset, count))
  }

  /// Return the register to the initial value.
  #[inline]
  pub fn reset(&mut self) {
    dispatch!(self, c => c.reset());
  }

  /// The finalized CRC.
  #[inline]
  #[must_use]
  pub fn value(&self) -> u128 {
    dispatch!(self, c => c.value())
  }

  /// Raw register, zero-extended to 128 bits.
  #[must_use]
  pub fn register(&self) -> u128 {
    use crate::common::word::Word;
    dispatch!(self, c => c.register().to_u128())
  }

  /// Overwrite the raw register. Bits outside the `width`-bit window are dropped.
  pub fn set_register(&mut self, register: u128) {
    use crate::common::word::Word;
    match self {
      Self::W8(c) => c.set_register(u8::from_u128(register)),
      Self::W16(c) => c.set_register(u16::from_u128(register)),
      Self::W32(c) => c.set_register(u32::from_u128(register)),
      Self::W64(c) => c.set_register(u64::from_u128(register)),
      Self::W128(c) => c.set_register(Wide::from_u128(register)),
    }
  }

  /// Resume from a finalized CRC. See [`Crc::resume_from`].
  #[inline]
  pub fn resume_from(&mut self, crc: u128) {
    dispatch!(self, c => c.resume_from(crc));
  }

  /// One-shot CRC of `data`; `self` is not changed.
  #[inline]
  #[must_use]
  pub fn checksum(&self, data: &[u8]) -> u128 {
    dispatch!(self, c => c.checksum(data))
  }

  /// CRC of `A ‖ B` from `crc(A)`, `crc(B)` and `len(B)`.
  #[inline]
  #[must_use]
  pub fn combine(&self, crc1: u128, crc2: u128, len2: u64) -> u128 {
    dispatch!(self, c => c.combine(crc1, crc2, len2))
  }

  /// Parameters.
  #[inline]
  #[must_use]
  pub fn params(&self) -> &CrcParams {
    dispatch!(self, c => c.params())
  }

  /// Register word class.
  #[must_use]
  pub const fn width_class(&self) -> WidthClass {
    match self {
      Self::W8(_) => WidthClass::W8,
      Self::W16(_) => WidthClass::W16,
      Self::W32(_) => WidthClass::W32,
      Self::W64(_) => WidthClass::W64,
      Self::W128(_) => WidthClass::W128,
    }
  }
}

/// Build the engine for `descriptor` with the process-wide configuration.
///
/// # Errors
///
/// - [`CrcError::InvalidWidth`] unless `1 <= width <= 128`
/// - [`CrcError::ZeroPolynomial`] if the polynomial masks to zero
///
/// # Example
///
/// ```
/// use crcmodel::factory::{self, Descriptor, WidthClass};
///
/// let mut crc = factory::create(&Descriptor::new(5, 0x15, 0, true, true, 0)).unwrap();
/// assert_eq!(crc.width_class(), WidthClass::W8);
/// crc.add(b"123456789");
/// assert_eq!(crc.value(), 0x07);
/// ```
pub fn create(descriptor: &Descriptor) -> Result<AnyCrc> {
  create_with_config(descriptor, config::get())
}

/// Build the engine for `descriptor` with an explicit configuration.
///
/// # Errors
///
/// As [`create`].
pub fn create_with_config(descriptor: &Descriptor, config: EngineConfig) -> Result<AnyCrc> {
  let params = descriptor.params()?;
  let class = WidthClass::for_width(params.width()).ok_or(CrcError::InvalidWidth {
    width: u32::from(params.width()),
    max: u32::from(MAX_WIDTH),
  })?;
  tracing::debug!(
    name = descriptor.name.as_deref().unwrap_or("custom"),
    width = params.width(),
    class = class.as_str(),
    "creating crc engine"
  );
  Ok(match class {
    WidthClass::W8 => AnyCrc::W8(Crc::with_config(params, config)?),
    WidthClass::W16 => AnyCrc::W16(Crc::with_config(params, config)?),
    WidthClass::W32 => AnyCrc::W32(Crc::with_config(params, config)?),
    WidthClass::W64 => AnyCrc::W64(Crc::with_config(params, config)?),
    WidthClass::W128 => AnyCrc::W128(Crc::with_config(params, config)?),
  })
}

/// Build the engine for a catalog name or alias.
///
/// # Errors
///
/// [`CrcError::UnknownAlgorithm`] if the catalog has no such name.
///
/// ```
/// let crc = crcmodel::factory::create_named("CRC-64/XZ").unwrap();
/// assert_eq!(crc.checksum(b"123456789"), 0x995D_C9BB_DF19_39FA);
/// ```
pub fn create_named(name: &str) -> Result<AnyCrc> {
  create(&Descriptor::named(name)?)
}
