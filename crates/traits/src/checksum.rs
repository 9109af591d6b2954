//! Checksum traits.
//!
//! - **Streaming**: incremental updates, reset, non-consuming finalize
//! - **Resumable**: continue from a previously finalized value
//! - **Combinable**: merge checksums of adjacent blocks without the data

use core::fmt::Debug;

/// A checksum with a fixed parameter set.
///
/// # Usage
///
/// ```rust,ignore
/// use crcmodel::{Checksum, Crc32};
///
/// let crc = Crc32::checksum(b"123456789");
///
/// let mut hasher = Crc32::new();
/// hasher.update(b"1234");
/// hasher.update(b"56789");
/// assert_eq!(hasher.finalize(), crc);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent
/// - `reset()` must restore the state produced by `new()`
/// - `with_initial(Self::checksum(a))` followed by `update(b)` must finalize to
///   `Self::checksum(a ++ b)`
pub trait Checksum: Clone + Default {
  /// Width of the checksum in bits.
  const WIDTH: u32;

  /// The finalized checksum type, wide enough to hold `WIDTH` bits.
  type Output: Copy + Eq + Debug + Default;

  /// Create a hasher in its initial state.
  #[must_use]
  fn new() -> Self;

  /// Create a hasher that resumes from a previously finalized checksum.
  #[must_use]
  fn with_initial(initial: Self::Output) -> Self;

  /// Feed more data.
  fn update(&mut self, data: &[u8]);

  /// Feed several non-contiguous buffers in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Feed `std::io::IoSlice` buffers in order.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Return the checksum of everything fed so far without consuming the hasher.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Return to the initial state.
  fn reset(&mut self);

  /// Checksum `data` in one shot.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Checksum the concatenation of `bufs` in one shot.
  #[inline]
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }
}

/// Checksums that can be merged across adjacent blocks.
///
/// `combine(crc(A), crc(B), len(B)) == crc(A || B)` in O(log len(B)).
///
/// ```text
/// crc(A || B) = (crc(A) ^ crc(empty)) * x^(8*len(B)) mod G(x)  ^  crc(B)
/// ```
pub trait ChecksumCombine: Checksum {
  /// Merge `crc_a = crc(A)` and `crc_b = crc(B)` into `crc(A || B)`.
  #[must_use]
  fn combine(crc_a: Self::Output, crc_b: Self::Output, len_b: usize) -> Self::Output;

  /// Fold an ordered list of `(checksum, block_len)` pairs.
  ///
  /// Returns `None` for an empty list. The first block's length is never
  /// needed.
  #[must_use]
  fn combine_all(parts: &[(Self::Output, usize)]) -> Option<Self::Output> {
    let ((first, _), rest) = parts.split_first()?;
    Some(rest.iter().fold(*first, |acc, &(crc, len)| Self::combine(acc, crc, len)))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Byte sum modulo 2^32: combinable because it ignores order.
  #[derive(Clone, Default)]
  struct Sum(u32);

  impl Checksum for Sum {
    const WIDTH: u32 = 32;
    type Output = u32;

    fn new() -> Self {
      Self(0)
    }

    fn with_initial(initial: u32) -> Self {
      Self(initial)
    }

    fn update(&mut self, data: &[u8]) {
      self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u32::from(b)));
    }

    fn finalize(&self) -> u32 {
      self.0
    }

    fn reset(&mut self) {
      self.0 = 0;
    }
  }

  impl ChecksumCombine for Sum {
    fn combine(crc_a: u32, crc_b: u32, _len_b: usize) -> u32 {
      crc_a.wrapping_add(crc_b)
    }
  }

  #[test]
  fn vectored_matches_contiguous() {
    assert_eq!(Sum::checksum_vectored(&[b"ab", b"", b"c"]), Sum::checksum(b"abc"));
  }

  #[test]
  fn resume_continues() {
    let mut h = Sum::with_initial(Sum::checksum(b"ab"));
    h.update(b"c");
    assert_eq!(h.finalize(), Sum::checksum(b"abc"));
  }

  #[test]
  fn combine_all_folds_in_order() {
    let parts = [(Sum::checksum(b"ab"), 2), (Sum::checksum(b"cd"), 2), (Sum::checksum(b"e"), 1)];
    assert_eq!(Sum::combine_all(&parts), Some(Sum::checksum(b"abcde")));
    assert_eq!(Sum::combine_all(&[]), None);
  }

  #[test]
  fn reset_restores_new() {
    let mut h = Sum::new();
    h.update(b"xyz");
    h.reset();
    assert_eq!(h.finalize(), Sum::new().finalize());
  }
}
