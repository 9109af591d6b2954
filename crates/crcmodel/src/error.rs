//! Error type for CRC configuration and ranged updates.
//!
//! Every error is a precondition violation: the engine performs no I/O, so
//! nothing here is transient or worth retrying.

/// Errors reported by constructors and ranged updates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CrcError {
  /// Width is zero or larger than the register word can hold.
  #[error("crc width {width} is outside 1..={max}")]
  InvalidWidth {
    /// Requested width in bits.
    width: u32,
    /// Largest width the chosen register word supports.
    max: u32,
  },

  /// The generator polynomial is zero once masked to `width` bits.
  #[error("generator polynomial is zero when masked to {width} bits")]
  ZeroPolynomial {
    /// Width the polynomial was masked to.
    width: u8,
  },

  /// A caller-supplied lookup table does not have exactly 256 entries.
  #[error("lookup table must have 256 entries, got {len}")]
  TableLength {
    /// Number of entries supplied.
    len: usize,
  },

  /// A caller-supplied lookup table was built for different parameters.
  #[error("lookup table was built for a different polynomial, width or orientation")]
  TableMismatch,

  /// `offset`/`count` do not describe a range inside the buffer.
  #[error("range offset={offset} count={count} does not fit a buffer of {len} bytes")]
  OutOfRange {
    /// Start of the requested range.
    offset: usize,
    /// Requested byte count.
    count: usize,
    /// Length of the buffer.
    len: usize,
  },

  /// Fan-out chunk size is zero or not a power of two.
  #[error("chunk size {size} must be a non-zero power of two")]
  InvalidChunkSize {
    /// Rejected chunk size.
    size: usize,
  },

  /// No catalog entry or alias carries this name.
  #[error("unknown crc algorithm `{name}`")]
  UnknownAlgorithm {
    /// Name that was looked up.
    name: String,
  },
}

/// Result alias used throughout the crate.
pub type Result<T, E = CrcError> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn messages_name_the_offending_value() {
    assert_eq!(
      CrcError::InvalidWidth { width: 129, max: 128 }.to_string(),
      "crc width 129 is outside 1..=128"
    );
    assert_eq!(
      CrcError::OutOfRange {
        offset: 4,
        count: 8,
        len: 10
      }
      .to_string(),
      "range offset=4 count=8 does not fit a buffer of 10 bytes"
    );
    assert_eq!(
      CrcError::UnknownAlgorithm {
        name: "CRC-99".into()
      }
      .to_string(),
      "unknown crc algorithm `CRC-99`"
    );
  }

  #[test]
  fn is_std_error() {
    fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
    assert_error::<CrcError>();
  }
}
