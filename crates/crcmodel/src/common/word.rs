//! Register storage words.
//!
//! A CRC register of width `w` lives in the smallest word that holds it:
//!
//! | Width | Word |
//! |-------|------|
//! | 1..=8 | `u8` |
//! | 9..=16 | `u16` |
//! | 17..=32 | `u32` |
//! | 33..=64 | `u64` |
//! | 65..=128 | [`Wide`] (two `u64` halves) |
//!
//! Unreflected registers keep their `w` active bits at the top of the word,
//! reflected registers keep them at the bottom. Either way the byte update only
//! needs a shift by eight, the top or bottom byte, and XOR.

use core::{
  fmt,
  ops::{BitXor, BitXorAssign},
};

mod sealed {
  pub trait Sealed {}
}

/// A fixed-size register word usable by [`Crc`](crate::Crc).
///
/// Sealed: implemented for `u8`, `u16`, `u32`, `u64` and [`Wide`].
pub trait Word:
  sealed::Sealed + Copy + Eq + fmt::Debug + Default + Send + Sync + BitXor<Output = Self> + BitXorAssign + 'static
{
  /// Storage width in bits.
  const BITS: u32;

  /// The all-zero word.
  const ZERO: Self;

  /// Truncate `value` to `BITS` bits.
  fn from_u128(value: u128) -> Self;

  /// Zero-extend to 128 bits.
  fn to_u128(self) -> u128;

  /// Shift left by one byte, discarding the top byte.
  fn shl8(self) -> Self;

  /// Shift right by one byte, discarding the bottom byte.
  fn shr8(self) -> Self;

  /// Least significant byte.
  fn low_byte(self) -> u8;

  /// Most significant byte of the storage word.
  fn high_byte(self) -> u8;
}

macro_rules! impl_native_word {
  ($($ty:ty),* $(,)?) => {$(
    impl sealed::Sealed for $ty {}

    impl Word for $ty {
      const BITS: u32 = <$ty>::BITS;
      const ZERO: Self = 0;

      #[inline]
      fn from_u128(value: u128) -> Self {
        value as $ty
      }

      #[inline]
      fn to_u128(self) -> u128 {
        self as u128
      }

      #[inline]
      fn shl8(self) -> Self {
        self.checked_shl(8).unwrap_or(0)
      }

      #[inline]
      fn shr8(self) -> Self {
        self.checked_shr(8).unwrap_or(0)
      }

      #[inline]
      fn low_byte(self) -> u8 {
        self as u8
      }

      #[inline]
      fn high_byte(self) -> u8 {
        (self >> (<$ty>::BITS - 8)) as u8
      }
    }
  )*};
}

impl_native_word!(u8, u16, u32, u64);

/// A 128-bit register held as two 64-bit halves.
///
/// Byte shifts carry explicitly between the halves, so the per-byte update
/// for widths 65..=128 runs on 64-bit operations only.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Wide {
  /// Bits 64..128.
  pub hi: u64,
  /// Bits 0..64.
  pub lo: u64,
}

impl Wide {
  /// Build from halves.
  #[inline]
  #[must_use]
  pub const fn new(hi: u64, lo: u64) -> Self {
    Self { hi, lo }
  }
}

impl fmt::Debug for Wide {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Wide({:#018x}_{:016x})", self.hi, self.lo)
  }
}

impl BitXor for Wide {
  type Output = Self;

  #[inline]
  fn bitxor(self, rhs: Self) -> Self {
    Self {
      hi: self.hi ^ rhs.hi,
      lo: self.lo ^ rhs.lo,
    }
  }
}

impl BitXorAssign for Wide {
  #[inline]
  fn bitxor_assign(&mut self, rhs: Self) {
    self.hi ^= rhs.hi;
    self.lo ^= rhs.lo;
  }
}

impl From<u128> for Wide {
  #[inline]
  fn from(value: u128) -> Self {
    Self {
      hi: (value >> 64) as u64,
      lo: value as u64,
    }
  }
}

impl From<Wide> for u128 {
  #[inline]
  fn from(value: Wide) -> Self {
    (u128::from(value.hi) << 64) | u128::from(value.lo)
  }
}

impl sealed::Sealed for Wide {}

impl Word for Wide {
  const BITS: u32 = 128;
  const ZERO: Self = Self { hi: 0, lo: 0 };

  #[inline]
  fn from_u128(value: u128) -> Self {
    Self::from(value)
  }

  #[inline]
  fn to_u128(self) -> u128 {
    u128::from(self)
  }

  #[inline]
  fn shl8(self) -> Self {
    Self {
      hi: (self.hi << 8) | (self.lo >> 56),
      lo: self.lo << 8,
    }
  }

  #[inline]
  fn shr8(self) -> Self {
    Self {
      hi: self.hi >> 8,
      lo: (self.lo >> 8) | (self.hi << 56),
    }
  }

  #[inline]
  fn low_byte(self) -> u8 {
    self.lo as u8
  }

  #[inline]
  fn high_byte(self) -> u8 {
    (self.hi >> 56) as u8
  }
}

/// Mask with the low `width` bits set.
///
/// # Panics
///
/// `width` must be in `1..=128`; anything else panics in debug builds.
#[inline]
#[must_use]
pub const fn mask(width: u8) -> u128 {
  debug_assert!(width >= 1 && width <= 128, "crc width must be in 1..=128");
  u128::MAX >> (128 - width as u32)
}

/// Reverse the low `width` bits of `value`. Bits above `width` are dropped.
///
/// `reflect(reflect(v, w), w) == v & mask(w)`.
///
/// # Panics
///
/// `width` must be in `1..=128`; anything else panics in debug builds.
#[inline]
#[must_use]
pub const fn reflect(value: u128, width: u8) -> u128 {
  debug_assert!(width >= 1 && width <= 128, "crc width must be in 1..=128");
  value.reverse_bits() >> (128 - width as u32)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn wide_matches_u128_shifts() {
    let samples = [
      0u128,
      1,
      u128::MAX,
      0x0123_4567_89AB_CDEF_FEDC_BA98_7654_3210,
      1u128 << 63,
      1u128 << 64,
      0xFF00_0000_0000_0000_00FF_0000_0000_0000,
    ];
    for v in samples {
      let w = Wide::from(v);
      assert_eq!(w.shl8().to_u128(), v << 8, "shl8 {v:#x}");
      assert_eq!(w.shr8().to_u128(), v >> 8, "shr8 {v:#x}");
      assert_eq!(w.low_byte(), v as u8);
      assert_eq!(w.high_byte(), (v >> 120) as u8);
      assert_eq!(Wide::from_u128(v).to_u128(), v);
    }
  }

  #[test]
  fn wide_xor() {
    let a = 0xDEAD_BEEF_0000_0000_1234_5678_9ABC_DEF0u128;
    let b = 0x0000_FFFF_FFFF_0000_0F0F_0F0F_F0F0_F0F0u128;
    assert_eq!((Wide::from(a) ^ Wide::from(b)).to_u128(), a ^ b);
    let mut c = Wide::from(a);
    c ^= Wide::from(b);
    assert_eq!(u128::from(c), a ^ b);
  }

  #[test]
  fn byte_wide_word_shifts_to_zero() {
    assert_eq!(0xABu8.shl8(), 0);
    assert_eq!(0xABu8.shr8(), 0);
    assert_eq!(0xABu8.high_byte(), 0xAB);
    assert_eq!(0x1234u16.shl8(), 0x3400);
    assert_eq!(0x1234u16.high_byte(), 0x12);
    assert_eq!(0x1234_5678u32.shr8(), 0x0012_3456);
  }

  #[test]
  fn from_u128_truncates() {
    assert_eq!(u16::from_u128(0x1_2345), 0x2345);
    assert_eq!(u64::from_u128(u128::MAX), u64::MAX);
  }

  #[test]
  fn mask_edges() {
    assert_eq!(mask(1), 1);
    assert_eq!(mask(8), 0xFF);
    assert_eq!(mask(82), (1u128 << 82) - 1);
    assert_eq!(mask(128), u128::MAX);
  }

  #[test]
  fn reflect_examples() {
    assert_eq!(reflect(0b1010, 4), 0b0101);
    assert_eq!(reflect(0x04C1_1DB7, 32), 0xEDB8_8320);
    assert_eq!(reflect(0x42F0_E1EB_A9EA_3693, 64), 0xC96C_5795_D787_0F42);
    assert_eq!(reflect(1, 128), 1u128 << 127);
    assert_eq!(reflect(1, 1), 1);
  }

  #[test]
  fn reflect_twice_is_identity() {
    let v = 0x0123_4567_89AB_CDEF_FEDC_BA98_7654_3210u128;
    for width in 1..=128u8 {
      assert_eq!(reflect(reflect(v, width), width), v & mask(width), "width={width}");
    }
  }

  #[test]
  #[cfg(debug_assertions)]
  #[should_panic(expected = "crc width must be in 1..=128")]
  fn mask_rejects_zero_width() {
    let _ = mask(0);
  }

  #[test]
  #[cfg(debug_assertions)]
  #[should_panic(expected = "crc width must be in 1..=128")]
  fn reflect_rejects_oversized_width() {
    let _ = reflect(1, 129);
  }
}
