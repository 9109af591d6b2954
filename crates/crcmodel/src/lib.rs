//! Rocksoft-model CRC engine for any width from 1 to 128 bits.
//!
//! Any CRC in the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/)
//! sense, described by `(width, poly, init, refin, refout, xorout)`, runs
//! through one generic engine. On top of the byte loop the crate provides:
//!
//! - **Combine**: `crc(A ‖ B)` from `crc(A)`, `crc(B)` and `len(B)` in
//!   O(log len(B)) GF(2) matrix squarings, without the data.
//! - **Fan-out**: large buffers are cut into fixed-size chunks, processed on the
//!   rayon pool and folded back with a precomputed chunk operator. The result
//!   is bit-identical to sequential processing.
//!
//! # Register Words
//!
//! | Width | Word | Engine |
//! |-------|------|--------|
//! | 1..=8 | `u8` | `Crc<u8>` |
//! | 9..=16 | `u16` | `Crc<u16>` |
//! | 17..=32 | `u32` | `Crc<u32>` |
//! | 33..=64 | `u64` | `Crc<u64>` |
//! | 65..=128 | [`Wide`] | `Crc<Wide>` |
//!
//! # Example
//!
//! ```rust
//! use crcmodel::{catalog, combine, factory};
//!
//! // Any catalog entry by name or alias.
//! let mut crc = factory::create_named("CRC-16/MODBUS").unwrap();
//! crc.add(b"123456789");
//! assert_eq!(crc.value(), 0x4B37);
//!
//! // Merge CRCs of adjacent blocks.
//! let alg = catalog::CRC_32_ISO_HDLC;
//! let a = alg.checksum(b"123456");
//! let b = alg.checksum(b"789");
//! assert_eq!(combine::combine(&alg.params(), a, b, 3), 0xCBF4_3926);
//! ```
//!
//! # Typed Presets
//!
//! Common algorithms are also available as zero-configuration types
//! implementing [`Checksum`] and [`ChecksumCombine`]:
//!
//! ```rust
//! use crcmodel::{Checksum, Crc64Xz};
//!
//! let mut h = Crc64Xz::new();
//! h.update(b"1234");
//! h.update(b"56789");
//! assert_eq!(h.finalize(), 0x995D_C9BB_DF19_39FA);
//! ```
//!
//! # Features
//!
//! | Feature | Default | Effect |
//! |---------|---------|--------|
//! | `parallel` | yes | Fan-out runs on the rayon pool |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]

// Internal macros must be declared before modules that use them.
#[macro_use]
mod macros;

mod common;

pub mod catalog;
pub mod combine;
pub mod config;
mod engine;
mod error;
pub mod factory;
mod parallel;
mod params;
mod presets;

pub use common::{
  combine::Gf2Matrix,
  reference,
  tables::Table,
  word::{Wide, Word, mask, reflect},
};
pub use config::{EngineConfig, FanOut};
pub use engine::Crc;
pub use error::{CrcError, Result};
pub use params::{CrcParams, MAX_WIDTH};
pub use presets::{
  Crc16Arc, Crc16CcittFalse, Crc24OpenPgp, Crc32, Crc32Bzip2, Crc32C, Crc64Ecma182, Crc64Nvme, Crc64Xz, Crc82Darc,
};
pub use traits::{Checksum, ChecksumCombine};
