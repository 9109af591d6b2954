//! Engine runtime configuration (chunk size + fan-out mode).
//!
//! Two knobs control how [`Crc::add`](crate::Crc::add) processes large inputs:
//! - the chunk size `C` that the combine matrix advances through
//! - whether full chunks are fanned out to the rayon pool
//!
//! Defaults can be overridden process-wide from the environment:
//!
//! | Variable | Values |
//! |----------|--------|
//! | `CRCMODEL_CHUNK_SIZE` | power of two, in bytes |
//! | `CRCMODEL_FANOUT` | `auto`, `sequential` (`off`), `parallel` |
//!
//! Overrides are read once. Values that fail to parse are ignored with a
//! warning.

use crate::error::{CrcError, Result};

/// Default fan-out chunk size in bytes.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// How large inputs are processed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FanOut {
  /// Fan out when the `parallel` feature is enabled and the input holds at
  /// least one full chunk.
  #[default]
  Auto,
  /// Never fan out.
  Sequential,
  /// Fan out whenever the input holds at least one full chunk. Without the
  /// `parallel` feature the chunks are processed on the calling thread and
  /// folded the same way.
  Parallel,
}

impl FanOut {
  /// Lowercase name, as accepted by `CRCMODEL_FANOUT`.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Sequential => "sequential",
      Self::Parallel => "parallel",
    }
  }
}

/// Per-engine configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
  chunk_size: usize,
  fan_out: FanOut,
}

impl Default for EngineConfig {
  fn default() -> Self {
    Self {
      chunk_size: DEFAULT_CHUNK_SIZE,
      fan_out: FanOut::Auto,
    }
  }
}

impl EngineConfig {
  /// Replace the chunk size.
  ///
  /// # Errors
  ///
  /// [`CrcError::InvalidChunkSize`] unless `size` is a non-zero power of two.
  pub fn with_chunk_size(mut self, size: usize) -> Result<Self> {
    if !size.is_power_of_two() {
      return Err(CrcError::InvalidChunkSize { size });
    }
    self.chunk_size = size;
    Ok(self)
  }

  /// Replace the fan-out mode.
  #[must_use]
  pub const fn with_fan_out(mut self, fan_out: FanOut) -> Self {
    self.fan_out = fan_out;
    self
  }

  /// Chunk size in bytes (always a power of two).
  #[inline]
  #[must_use]
  pub const fn chunk_size(&self) -> usize {
    self.chunk_size
  }

  /// Fan-out mode.
  #[inline]
  #[must_use]
  pub const fn fan_out(&self) -> FanOut {
    self.fan_out
  }

  /// `log2(chunk_size)`.
  #[inline]
  pub(crate) const fn chunk_log2(&self) -> u32 {
    self.chunk_size.trailing_zeros()
  }

  /// Whether an input of `len` bytes should be split across workers.
  #[inline]
  pub(crate) fn should_fan_out(&self, len: usize) -> bool {
    match self.fan_out {
      FanOut::Sequential => false,
      FanOut::Parallel => len >= self.chunk_size,
      FanOut::Auto => cfg!(feature = "parallel") && len >= self.chunk_size,
    }
  }
}

#[derive(Clone, Copy, Debug, Default)]
struct Overrides {
  chunk_size: Option<usize>,
  fan_out: Option<FanOut>,
}

/// Trimmed value of `name`, or `None` when unset or blank.
fn env_value(name: &str) -> Option<String> {
  let value = std::env::var(name).ok()?;
  let value = value.trim();
  if value.is_empty() {
    return None;
  }
  Some(value.to_owned())
}

/// Parse a `CRCMODEL_CHUNK_SIZE` value.
fn parse_chunk_size(value: &str) -> Option<usize> {
  let value = value.trim();
  if value.is_empty() {
    return None;
  }
  match value.parse::<usize>() {
    Ok(size) if size.is_power_of_two() => Some(size),
    _ => {
      tracing::warn!(value = %value, "ignoring CRCMODEL_CHUNK_SIZE, expected a power of two");
      None
    }
  }
}

/// Parse a `CRCMODEL_FANOUT` value.
fn parse_fan_out(value: &str) -> Option<FanOut> {
  let value = value.trim();
  if value.is_empty() {
    return None;
  }
  if value.eq_ignore_ascii_case("auto") {
    return Some(FanOut::Auto);
  }
  if value.eq_ignore_ascii_case("sequential") || value.eq_ignore_ascii_case("off") {
    return Some(FanOut::Sequential);
  }
  if value.eq_ignore_ascii_case("parallel") {
    return Some(FanOut::Parallel);
  }

  tracing::warn!(value = %value, "ignoring unknown CRCMODEL_FANOUT value");
  None
}

fn read_env_overrides() -> Overrides {
  Overrides {
    chunk_size: env_value("CRCMODEL_CHUNK_SIZE").as_deref().and_then(parse_chunk_size),
    fan_out: env_value("CRCMODEL_FANOUT").as_deref().and_then(parse_fan_out),
  }
}

fn overrides() -> Overrides {
  use std::sync::OnceLock;
  static OVERRIDES: OnceLock<Overrides> = OnceLock::new();
  *OVERRIDES.get_or_init(read_env_overrides)
}

/// Default configuration with environment overrides applied.
#[inline]
#[must_use]
pub fn get() -> EngineConfig {
  let ov = overrides();
  let mut config = EngineConfig::default();
  if let Some(size) = ov.chunk_size {
    config.chunk_size = size;
  }
  if let Some(fan_out) = ov.fan_out {
    config.fan_out = fan_out;
  }
  config
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_chunk_is_4k() {
    let c = EngineConfig::default();
    assert_eq!(c.chunk_size(), 4096);
    assert_eq!(c.chunk_log2(), 12);
    assert_eq!(c.fan_out(), FanOut::Auto);
  }

  #[test]
  fn chunk_size_must_be_power_of_two() {
    assert_eq!(
      EngineConfig::default().with_chunk_size(0),
      Err(CrcError::InvalidChunkSize { size: 0 })
    );
    assert_eq!(
      EngineConfig::default().with_chunk_size(1000),
      Err(CrcError::InvalidChunkSize { size: 1000 })
    );
    assert_eq!(EngineConfig::default().with_chunk_size(1).unwrap().chunk_log2(), 0);
  }

  #[test]
  fn fan_out_thresholds() {
    let c = EngineConfig::default().with_chunk_size(64).unwrap();
    assert!(!c.with_fan_out(FanOut::Sequential).should_fan_out(1 << 20));
    assert!(c.with_fan_out(FanOut::Parallel).should_fan_out(64));
    assert!(!c.with_fan_out(FanOut::Parallel).should_fan_out(63));
    assert!(!c.should_fan_out(63));
    assert_eq!(c.should_fan_out(64), cfg!(feature = "parallel"));
  }

  #[test]
  fn fan_out_names() {
    assert_eq!(FanOut::Auto.as_str(), "auto");
    assert_eq!(FanOut::Sequential.as_str(), "sequential");
    assert_eq!(FanOut::Parallel.as_str(), "parallel");
  }

  #[test]
  fn get_returns_valid_chunk_size() {
    assert!(get().chunk_size().is_power_of_two());
  }

  #[test]
  fn chunk_size_override_parsing() {
    assert_eq!(parse_chunk_size("4096"), Some(4096));
    assert_eq!(parse_chunk_size("  65536 "), Some(65536));
    assert_eq!(parse_chunk_size("1"), Some(1));
    assert_eq!(parse_chunk_size("1000"), None);
    assert_eq!(parse_chunk_size("0"), None);
    assert_eq!(parse_chunk_size("-4096"), None);
    assert_eq!(parse_chunk_size("4k"), None);
    assert_eq!(parse_chunk_size(""), None);
    assert_eq!(parse_chunk_size("   "), None);
  }

  #[test]
  fn fan_out_override_parsing() {
    assert_eq!(parse_fan_out("auto"), Some(FanOut::Auto));
    assert_eq!(parse_fan_out("AUTO"), Some(FanOut::Auto));
    assert_eq!(parse_fan_out("sequential"), Some(FanOut::Sequential));
    assert_eq!(parse_fan_out("Off"), Some(FanOut::Sequential));
    assert_eq!(parse_fan_out(" parallel "), Some(FanOut::Parallel));
    assert_eq!(parse_fan_out("scalar"), None);
    assert_eq!(parse_fan_out("threads"), None);
    assert_eq!(parse_fan_out(""), None);
  }

  #[test]
  fn fan_out_names_round_trip_through_parser() {
    for mode in [FanOut::Auto, FanOut::Sequential, FanOut::Parallel] {
      assert_eq!(parse_fan_out(mode.as_str()), Some(mode));
    }
  }
}
