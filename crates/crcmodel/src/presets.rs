//! Preset CRC types for frequently used catalog entries.
//!
//! | Type | Algorithm | Output |
//! |------|-----------|--------|
//! | [`Crc16CcittFalse`] | CRC-16/IBM-3740 | `u16` |
//! | [`Crc16Arc`] | CRC-16/ARC | `u16` |
//! | [`Crc24OpenPgp`] | CRC-24/OPENPGP | `u32` |
//! | [`Crc32`] | CRC-32/ISO-HDLC | `u32` |
//! | [`Crc32C`] | CRC-32/ISCSI | `u32` |
//! | [`Crc32Bzip2`] | CRC-32/BZIP2 | `u32` |
//! | [`Crc64Xz`] | CRC-64/XZ | `u64` |
//! | [`Crc64Nvme`] | CRC-64/NVME | `u64` |
//! | [`Crc64Ecma182`] | CRC-64/ECMA-182 | `u64` |
//! | [`Crc82Darc`] | CRC-82/DARC | `u128` |
//!
//! ```
//! use crcmodel::{Checksum, ChecksumCombine, Crc32};
//!
//! assert_eq!(Crc32::checksum(b"123456789"), 0xCBF4_3926);
//!
//! let a = Crc32::checksum(b"123456");
//! let b = Crc32::checksum(b"789");
//! assert_eq!(Crc32::combine(a, b, 3), 0xCBF4_3926);
//! ```

use crate::{catalog, common::word::Wide};

define_crc_type! {
  /// CRC-16/IBM-3740, also known as CRC-16/CCITT-FALSE.
  pub struct Crc16CcittFalse {
    algorithm: catalog::CRC_16_IBM_3740,
    word: u16,
    output: u16,
  }
}

define_crc_type! {
  /// CRC-16/ARC (LHA, IBM).
  pub struct Crc16Arc {
    algorithm: catalog::CRC_16_ARC,
    word: u16,
    output: u16,
  }
}

define_crc_type! {
  /// CRC-24/OPENPGP (RFC 4880 armor checksum).
  pub struct Crc24OpenPgp {
    algorithm: catalog::CRC_24_OPENPGP,
    word: u32,
    output: u32,
  }
}

define_crc_type! {
  /// CRC-32/ISO-HDLC: zlib, gzip, PNG, Ethernet.
  pub struct Crc32 {
    algorithm: catalog::CRC_32_ISO_HDLC,
    word: u32,
    output: u32,
  }
}

define_crc_type! {
  /// CRC-32/ISCSI (Castagnoli).
  pub struct Crc32C {
    algorithm: catalog::CRC_32_ISCSI,
    word: u32,
    output: u32,
  }
}

define_crc_type! {
  /// CRC-32/BZIP2 (AAL5, DECT-B).
  pub struct Crc32Bzip2 {
    algorithm: catalog::CRC_32_BZIP2,
    word: u32,
    output: u32,
  }
}

define_crc_type! {
  /// CRC-64/XZ (GO-ECMA).
  pub struct Crc64Xz {
    algorithm: catalog::CRC_64_XZ,
    word: u64,
    output: u64,
  }
}

define_crc_type! {
  /// CRC-64/NVME.
  pub struct Crc64Nvme {
    algorithm: catalog::CRC_64_NVME,
    word: u64,
    output: u64,
  }
}

define_crc_type! {
  /// CRC-64/ECMA-182, MSB-first.
  pub struct Crc64Ecma182 {
    algorithm: catalog::CRC_64_ECMA_182,
    word: u64,
    output: u64,
  }
}

define_crc_type! {
  /// CRC-82/DARC, held in a two-word register.
  pub struct Crc82Darc {
    algorithm: catalog::CRC_82_DARC,
    word: Wide,
    output: u128,
  }
}
