//! CRC algorithm parameters.
//!
//! Parameters follow the Rocksoft model as used by the
//! [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/):
//!
//! | Parameter | Description |
//! |-----------|-------------|
//! | `width`   | Register width in bits, `1..=128` |
//! | `poly`    | Generator polynomial, unreflected, implicit top bit omitted |
//! | `init`    | Register value before the first byte (unreflected) |
//! | `refin`   | Process input bytes LSB-first |
//! | `refout`  | Reflect the register before the final XOR |
//! | `xorout`  | Value XORed into the reported CRC |

use crate::{
  common::word::{mask, reflect},
  error::{CrcError, Result},
};

/// Largest supported CRC width.
pub const MAX_WIDTH: u8 = 128;

/// Validated CRC parameters.
///
/// Every value is masked to `width` bits and the polynomial is non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CrcParams {
  width: u8,
  poly: u128,
  init: u128,
  reflect_in: bool,
  reflect_out: bool,
  xor_out: u128,
}

impl CrcParams {
  /// Validate and mask a parameter set.
  ///
  /// # Errors
  ///
  /// - [`CrcError::InvalidWidth`] unless `1 <= width <= 128`
  /// - [`CrcError::ZeroPolynomial`] if `poly` masked to `width` bits is zero
  ///
  /// # Example
  ///
  /// ```
  /// use crcmodel::CrcParams;
  ///
  /// let p = CrcParams::new(16, 0x1_1021, 0xFFFF, false, false, 0).unwrap();
  /// assert_eq!(p.poly(), 0x1021);
  /// assert!(CrcParams::new(0, 0x07, 0, false, false, 0).is_err());
  /// ```
  pub fn new(width: u8, poly: u128, init: u128, reflect_in: bool, reflect_out: bool, xor_out: u128) -> Result<Self> {
    if width == 0 || width > MAX_WIDTH {
      return Err(CrcError::InvalidWidth {
        width: u32::from(width),
        max: u32::from(MAX_WIDTH),
      });
    }
    let m = mask(width);
    if poly & m == 0 {
      return Err(CrcError::ZeroPolynomial { width });
    }
    Ok(Self {
      width,
      poly: poly & m,
      init: init & m,
      reflect_in,
      reflect_out,
      xor_out: xor_out & m,
    })
  }

  /// Build from values already known to be valid (catalog entries).
  pub(crate) const fn from_valid(
    width: u8,
    poly: u128,
    init: u128,
    reflect_in: bool,
    reflect_out: bool,
    xor_out: u128,
  ) -> Self {
    Self {
      width,
      poly,
      init,
      reflect_in,
      reflect_out,
      xor_out,
    }
  }

  /// Register width in bits.
  #[inline]
  pub const fn width(&self) -> u8 {
    self.width
  }

  /// Generator polynomial (unreflected, top bit omitted).
  #[inline]
  pub const fn poly(&self) -> u128 {
    self.poly
  }

  /// Initial register value (unreflected).
  #[inline]
  pub const fn init(&self) -> u128 {
    self.init
  }

  /// Whether input bytes are processed LSB-first.
  #[inline]
  pub const fn reflect_in(&self) -> bool {
    self.reflect_in
  }

  /// Whether the register is reflected before the final XOR.
  #[inline]
  pub const fn reflect_out(&self) -> bool {
    self.reflect_out
  }

  /// Final XOR mask.
  #[inline]
  pub const fn xor_out(&self) -> u128 {
    self.xor_out
  }

  /// Mask with the low `width` bits set.
  #[inline]
  pub const fn mask(&self) -> u128 {
    mask(self.width)
  }

  /// The polynomial bit-reversed within `width`, as used by LSB-first shifts.
  #[inline]
  pub const fn poly_reflected(&self) -> u128 {
    reflect(self.poly, self.width)
  }

  /// CRC of the empty message: `init` pushed through the output transform.
  #[inline]
  pub const fn empty_crc(&self) -> u128 {
    self.finalize_normal(self.init)
  }

  /// Apply the output transform to an unreflected (MSB-first) register.
  #[inline]
  pub(crate) const fn finalize_normal(&self, register: u128) -> u128 {
    let r = if self.reflect_out {
      reflect(register, self.width)
    } else {
      register
    };
    (r ^ self.xor_out) & mask(self.width)
  }

  /// Undo the output transform, recovering the unreflected register.
  #[inline]
  pub(crate) const fn unfinalize_normal(&self, crc: u128) -> u128 {
    let r = (crc ^ self.xor_out) & mask(self.width);
    if self.reflect_out { reflect(r, self.width) } else { r }
  }
}
