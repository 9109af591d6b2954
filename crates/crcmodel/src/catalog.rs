//! Catalog of named CRC algorithms.
//!
//! Parameter sets and check values follow the
//! [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/). Every entry
//! carries its canonical name, any common aliases and the CRC of the ASCII
//! string `"123456789"`.
//!
//! | Width class | Entries |
//! |-------------|---------|
//! | 3..=8 | CRC-3 through CRC-8 families |
//! | 10..=16 | CRC-10 through CRC-16 families |
//! | 17..=32 | CAN-FD, CRC-24, CRC-30, CRC-31, CRC-32 families |
//! | 33..=64 | CRC-40/GSM, CRC-64 family |
//! | 65..=128 | CRC-82/DARC |
//!
//! Lookups by name or alias are case-insensitive and go through an index that
//! is built on first use.

use std::{collections::HashMap, sync::OnceLock};

use crate::{
  common::reference,
  error::{CrcError, Result},
  params::CrcParams,
};

/// The check string every catalog entry is verified against.
pub const CHECK_INPUT: &[u8] = b"123456789";

/// A named CRC parameter set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Algorithm {
  /// Canonical catalog name.
  pub name: &'static str,
  /// Other names the algorithm is known by.
  pub aliases: &'static [&'static str],
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
  /// CRC of [`CHECK_INPUT`].
  pub check: u128,
}

impl Algorithm {
  /// The parameters as a validated [`CrcParams`].
  #[inline]
  #[must_use]
  pub const fn params(&self) -> CrcParams {
    CrcParams::from_valid(
      self.width,
      self.poly,
      self.init,
      self.reflect_in,
      self.reflect_out,
      self.xor_out,
    )
  }

  /// One-shot CRC of `data` using a table built for this call.
  ///
  /// Build an engine through [`factory`](crate::factory) when hashing more
  /// than a few buffers.
  #[must_use]
  pub fn checksum(&self, data: &[u8]) -> u128 {
    reference::bytewise(&self.params(), data)
  }

  /// Whether `name` is the canonical name or an alias (ASCII case-insensitive).
  #[must_use]
  pub fn is_named(&self, name: &str) -> bool {
    self.name.eq_ignore_ascii_case(name) || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Entries
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-3/GSM.
pub const CRC_3_GSM: Algorithm = Algorithm {
  name: "CRC-3/GSM",
  aliases: &[],
  width: 3,
  poly: 0x3,
  init: 0x0,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x7,
  check: 0x4,
};

/// CRC-3/ROHC.
pub const CRC_3_ROHC: Algorithm = Algorithm {
  name: "CRC-3/ROHC",
  aliases: &[],
  width: 3,
  poly: 0x3,
  init: 0x7,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x0,
  check: 0x6,
};

/// CRC-4/G-704, also known as CRC-4/ITU.
pub const CRC_4_G_704: Algorithm = Algorithm {
  name: "CRC-4/G-704",
  aliases: &["CRC-4/ITU"],
  width: 4,
  poly: 0x3,
  init: 0x0,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x0,
  check: 0x7,
};

/// CRC-4/INTERLAKEN.
pub const CRC_4_INTERLAKEN: Algorithm = Algorithm {
  name: "CRC-4/INTERLAKEN",
  aliases: &[],
  width: 4,
  poly: 0x3,
  init: 0xF,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0xF,
  check: 0xB,
};

/// CRC-5/EPC-C1G2, also known as CRC-5/EPC.
pub const CRC_5_EPC_C1G2: Algorithm = Algorithm {
  name: "CRC-5/EPC-C1G2",
  aliases: &["CRC-5/EPC"],
  width: 5,
  poly: 0x09,
  init: 0x09,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x00,
  check: 0x00,
};

/// CRC-5/G-704, also known as CRC-5/ITU.
pub const CRC_5_G_704: Algorithm = Algorithm {
  name: "CRC-5/G-704",
  aliases: &["CRC-5/ITU"],
  width: 5,
  poly: 0x15,
  init: 0x00,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x00,
  check: 0x07,
};

/// CRC-5/USB.
pub const CRC_5_USB: Algorithm = Algorithm {
  name: "CRC-5/USB",
  aliases: &[],
  width: 5,
  poly: 0x05,
  init: 0x1F,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x1F,
  check: 0x19,
};

/// CRC-6/CDMA2000-A.
pub const CRC_6_CDMA2000_A: Algorithm = Algorithm {
  name: "CRC-6/CDMA2000-A",
  aliases: &[],
  width: 6,
  poly: 0x27,
  init: 0x3F,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x00,
  check: 0x0D,
};

/// CRC-6/CDMA2000-B.
pub const CRC_6_CDMA2000_B: Algorithm = Algorithm {
  name: "CRC-6/CDMA2000-B",
  aliases: &[],
  width: 6,
  poly: 0x07,
  init: 0x3F,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x00,
  check: 0x3B,
};

/// CRC-6/DARC.
pub const CRC_6_DARC: Algorithm = Algorithm {
  name: "CRC-6/DARC",
  aliases: &[],
  width: 6,
  poly: 0x19,
  init: 0x00,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x00,
  check: 0x26,
};

/// CRC-6/G-704, also known as CRC-6/ITU.
pub const CRC_6_G_704: Algorithm = Algorithm {
  name: "CRC-6/G-704",
  aliases: &["CRC-6/ITU"],
  width: 6,
  poly: 0x03,
  init: 0x00,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x00,
  check: 0x06,
};

/// CRC-6/GSM.
pub const CRC_6_GSM: Algorithm = Algorithm {
  name: "CRC-6/GSM",
  aliases: &[],
  width: 6,
  poly: 0x2F,
  init: 0x00,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x3F,
  check: 0x13,
};

/// CRC-7/MMC, also known as CRC-7.
pub const CRC_7_MMC: Algorithm = Algorithm {
  name: "CRC-7/MMC",
  aliases: &["CRC-7"],
  width: 7,
  poly: 0x09,
  init: 0x00,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x00,
  check: 0x75,
};

/// CRC-7/ROHC.
pub const CRC_7_ROHC: Algorithm = Algorithm {
  name: "CRC-7/ROHC",
  aliases: &[],
  width: 7,
  poly: 0x4F,
  init: 0x7F,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x00,
  check: 0x53,
};

/// CRC-7/UMTS.
pub const CRC_7_UMTS: Algorithm = Algorithm {
  name: "CRC-7/UMTS",
  aliases: &[],
  width: 7,
  poly: 0x45,
  init: 0x00,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x00,
  check: 0x61,
};

/// CRC-8/AUTOSAR.
pub const CRC_8_AUTOSAR: Algorithm = Algorithm {
  name: "CRC-8/AUTOSAR",
  aliases: &[],
  width: 8,
  poly: 0x2F,
  init: 0xFF,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0xFF,
  check: 0xDF,
};

/// CRC-8/BLUETOOTH.
pub const CRC_8_BLUETOOTH: Algorithm = Algorithm {
  name: "CRC-8/BLUETOOTH",
  aliases: &[],
  width: 8,
  poly: 0xA7,
  init: 0x00,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x00,
  check: 0x26,
};

/// CRC-8/CDMA2000.
pub const CRC_8_CDMA2000: Algorithm = Algorithm {
  name: "CRC-8/CDMA2000",
  aliases: &[],
  width: 8,
  poly: 0x9B,
  init: 0xFF,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x00,
  check: 0xDA,
};

/// CRC-8/DARC.
pub const CRC_8_DARC: Algorithm = Algorithm {
  name: "CRC-8/DARC",
  aliases: &[],
  width: 8,
  poly: 0x39,
  init: 0x00,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x00,
  check: 0x15,
};

/// CRC-8/DVB-S2.
pub const CRC_8_DVB_S2: Algorithm = Algorithm {
  name: "CRC-8/DVB-S2",
  aliases: &[],
  width: 8,
  poly: 0xD5,
  init: 0x00,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x00,
  check: 0xBC,
};

/// CRC-8/GSM-A.
pub const CRC_8_GSM_A: Algorithm = Algorithm {
  name: "CRC-8/GSM-A",
  aliases: &[],
  width: 8,
  poly: 0x1D,
  init: 0x00,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x00,
  check: 0x37,
};

/// CRC-8/GSM-B.
pub const CRC_8_GSM_B: Algorithm = Algorithm {
  name: "CRC-8/GSM-B",
  aliases: &[],
  width: 8,
  poly: 0x49,
  init: 0x00,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0xFF,
  check: 0x94,
};

/// CRC-8/HITAG.
pub const CRC_8_HITAG: Algorithm = Algorithm {
  name: "CRC-8/HITAG",
  aliases: &[],
  width: 8,
  poly: 0x1D,
  init: 0xFF,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x00,
  check: 0xB4,
};

/// CRC-8/I-432-1, also known as CRC-8/ITU.
pub const CRC_8_I_432_1: Algorithm = Algorithm {
  name: "CRC-8/I-432-1",
  aliases: &["CRC-8/ITU"],
  width: 8,
  poly: 0x07,
  init: 0x00,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x55,
  check: 0xA1,
};

/// CRC-8/I-CODE.
pub const CRC_8_I_CODE: Algorithm = Algorithm {
  name: "CRC-8/I-CODE",
  aliases: &[],
  width: 8,
  poly: 0x1D,
  init: 0xFD,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x00,
  check: 0x7E,
};

/// CRC-8/LTE.
pub const CRC_8_LTE: Algorithm = Algorithm {
  name: "CRC-8/LTE",
  aliases: &[],
  width: 8,
  poly: 0x9B,
  init: 0x00,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x00,
  check: 0xEA,
};

/// CRC-8/MAXIM-DOW, also known as CRC-8/MAXIM, DOW-CRC.
pub const CRC_8_MAXIM_DOW: Algorithm = Algorithm {
  name: "CRC-8/MAXIM-DOW",
  aliases: &["CRC-8/MAXIM", "DOW-CRC"],
  width: 8,
  poly: 0x31,
  init: 0x00,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x00,
  check: 0xA1,
};

/// CRC-8/MIFARE-MAD.
pub const CRC_8_MIFARE_MAD: Algorithm = Algorithm {
  name: "CRC-8/MIFARE-MAD",
  aliases: &[],
  width: 8,
  poly: 0x1D,
  init: 0xC7,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x00,
  check: 0x99,
};

/// CRC-8/NRSC-5.
pub const CRC_8_NRSC_5: Algorithm = Algorithm {
  name: "CRC-8/NRSC-5",
  aliases: &[],
  width: 8,
  poly: 0x31,
  init: 0xFF,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x00,
  check: 0xF7,
};

/// CRC-8/OPENSAFETY.
pub const CRC_8_OPENSAFETY: Algorithm = Algorithm {
  name: "CRC-8/OPENSAFETY",
  aliases: &[],
  width: 8,
  poly: 0x2F,
  init: 0x00,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x00,
  check: 0x3E,
};

/// CRC-8/ROHC.
pub const CRC_8_ROHC: Algorithm = Algorithm {
  name: "CRC-8/ROHC",
  aliases: &[],
  width: 8,
  poly: 0x07,
  init: 0xFF,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x00,
  check: 0xD0,
};

/// CRC-8/SAE-J1850.
pub const CRC_8_SAE_J1850: Algorithm = Algorithm {
  name: "CRC-8/SAE-J1850",
  aliases: &[],
  width: 8,
  poly: 0x1D,
  init: 0xFF,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0xFF,
  check: 0x4B,
};

/// CRC-8/SMBUS, also known as CRC-8.
pub const CRC_8_SMBUS: Algorithm = Algorithm {
  name: "CRC-8/SMBUS",
  aliases: &["CRC-8"],
  width: 8,
  poly: 0x07,
  init: 0x00,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x00,
  check: 0xF4,
};

/// CRC-8/TECH-3250, also known as CRC-8/AES, CRC-8/EBU.
pub const CRC_8_TECH_3250: Algorithm = Algorithm {
  name: "CRC-8/TECH-3250",
  aliases: &["CRC-8/AES", "CRC-8/EBU"],
  width: 8,
  poly: 0x1D,
  init: 0xFF,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x00,
  check: 0x97,
};

/// CRC-8/WCDMA.
pub const CRC_8_WCDMA: Algorithm = Algorithm {
  name: "CRC-8/WCDMA",
  aliases: &[],
  width: 8,
  poly: 0x9B,
  init: 0x00,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x00,
  check: 0x25,
};

/// CRC-10/ATM, also known as CRC-10, CRC-10/I-610.
pub const CRC_10_ATM: Algorithm = Algorithm {
  name: "CRC-10/ATM",
  aliases: &["CRC-10", "CRC-10/I-610"],
  width: 10,
  poly: 0x233,
  init: 0x000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x000,
  check: 0x199,
};

/// CRC-10/CDMA2000.
pub const CRC_10_CDMA2000: Algorithm = Algorithm {
  name: "CRC-10/CDMA2000",
  aliases: &[],
  width: 10,
  poly: 0x3D9,
  init: 0x3FF,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x000,
  check: 0x233,
};

/// CRC-10/GSM.
pub const CRC_10_GSM: Algorithm = Algorithm {
  name: "CRC-10/GSM",
  aliases: &[],
  width: 10,
  poly: 0x175,
  init: 0x000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x3FF,
  check: 0x12A,
};

/// CRC-11/FLEXRAY, also known as CRC-11.
pub const CRC_11_FLEXRAY: Algorithm = Algorithm {
  name: "CRC-11/FLEXRAY",
  aliases: &["CRC-11"],
  width: 11,
  poly: 0x385,
  init: 0x01A,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x000,
  check: 0x5A3,
};

/// CRC-11/UMTS.
pub const CRC_11_UMTS: Algorithm = Algorithm {
  name: "CRC-11/UMTS",
  aliases: &[],
  width: 11,
  poly: 0x307,
  init: 0x000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x000,
  check: 0x061,
};

/// CRC-12/CDMA2000.
pub const CRC_12_CDMA2000: Algorithm = Algorithm {
  name: "CRC-12/CDMA2000",
  aliases: &[],
  width: 12,
  poly: 0xF13,
  init: 0xFFF,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x000,
  check: 0xD4D,
};

/// CRC-12/DECT, also known as X-CRC-12.
pub const CRC_12_DECT: Algorithm = Algorithm {
  name: "CRC-12/DECT",
  aliases: &["X-CRC-12"],
  width: 12,
  poly: 0x80F,
  init: 0x000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x000,
  check: 0xF5B,
};

/// CRC-12/GSM.
pub const CRC_12_GSM: Algorithm = Algorithm {
  name: "CRC-12/GSM",
  aliases: &[],
  width: 12,
  poly: 0xD31,
  init: 0x000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0xFFF,
  check: 0xB34,
};

/// CRC-12/UMTS, also known as CRC-12/3GPP.
pub const CRC_12_UMTS: Algorithm = Algorithm {
  name: "CRC-12/UMTS",
  aliases: &["CRC-12/3GPP"],
  width: 12,
  poly: 0x80F,
  init: 0x000,
  reflect_in: false,
  reflect_out: true,
  xor_out: 0x000,
  check: 0xDAF,
};

/// CRC-13/BBC.
pub const CRC_13_BBC: Algorithm = Algorithm {
  name: "CRC-13/BBC",
  aliases: &[],
  width: 13,
  poly: 0x1CF5,
  init: 0x0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000,
  check: 0x04FA,
};

/// CRC-14/DARC.
pub const CRC_14_DARC: Algorithm = Algorithm {
  name: "CRC-14/DARC",
  aliases: &[],
  width: 14,
  poly: 0x0805,
  init: 0x0000,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x0000,
  check: 0x082D,
};

/// CRC-14/GSM.
pub const CRC_14_GSM: Algorithm = Algorithm {
  name: "CRC-14/GSM",
  aliases: &[],
  width: 14,
  poly: 0x202D,
  init: 0x0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x3FFF,
  check: 0x30AE,
};

/// CRC-15/CAN, also known as CRC-15.
pub const CRC_15_CAN: Algorithm = Algorithm {
  name: "CRC-15/CAN",
  aliases: &["CRC-15"],
  width: 15,
  poly: 0x4599,
  init: 0x0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000,
  check: 0x059E,
};

/// CRC-15/MPT1327.
pub const CRC_15_MPT1327: Algorithm = Algorithm {
  name: "CRC-15/MPT1327",
  aliases: &[],
  width: 15,
  poly: 0x6815,
  init: 0x0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0001,
  check: 0x2566,
};

/// CRC-16/ARC, also known as ARC, CRC-16, CRC-16/LHA, CRC-IBM.
pub const CRC_16_ARC: Algorithm = Algorithm {
  name: "CRC-16/ARC",
  aliases: &["ARC", "CRC-16", "CRC-16/LHA", "CRC-IBM"],
  width: 16,
  poly: 0x8005,
  init: 0x0000,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x0000,
  check: 0xBB3D,
};

/// CRC-16/CDMA2000.
pub const CRC_16_CDMA2000: Algorithm = Algorithm {
  name: "CRC-16/CDMA2000",
  aliases: &[],
  width: 16,
  poly: 0xC867,
  init: 0xFFFF,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000,
  check: 0x4C06,
};

/// CRC-16/CMS.
pub const CRC_16_CMS: Algorithm = Algorithm {
  name: "CRC-16/CMS",
  aliases: &[],
  width: 16,
  poly: 0x8005,
  init: 0xFFFF,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000,
  check: 0xAEE7,
};

/// CRC-16/DDS-110.
pub const CRC_16_DDS_110: Algorithm = Algorithm {
  name: "CRC-16/DDS-110",
  aliases: &[],
  width: 16,
  poly: 0x8005,
  init: 0x800D,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000,
  check: 0x9ECF,
};

/// CRC-16/DECT-R, also known as R-CRC-16.
pub const CRC_16_DECT_R: Algorithm = Algorithm {
  name: "CRC-16/DECT-R",
  aliases: &["R-CRC-16"],
  width: 16,
  poly: 0x0589,
  init: 0x0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0001,
  check: 0x007E,
};

/// CRC-16/DECT-X, also known as X-CRC-16.
pub const CRC_16_DECT_X: Algorithm = Algorithm {
  name: "CRC-16/DECT-X",
  aliases: &["X-CRC-16"],
  width: 16,
  poly: 0x0589,
  init: 0x0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000,
  check: 0x007F,
};

/// CRC-16/DNP.
pub const CRC_16_DNP: Algorithm = Algorithm {
  name: "CRC-16/DNP",
  aliases: &[],
  width: 16,
  poly: 0x3D65,
  init: 0x0000,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0xFFFF,
  check: 0xEA82,
};

/// CRC-16/EN-13757.
pub const CRC_16_EN_13757: Algorithm = Algorithm {
  name: "CRC-16/EN-13757",
  aliases: &[],
  width: 16,
  poly: 0x3D65,
  init: 0x0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0xFFFF,
  check: 0xC2B7,
};

/// CRC-16/GENIBUS, also known as CRC-16/DARC, CRC-16/EPC, CRC-16/EPC-C1G2, CRC-16/I-CODE.
pub const CRC_16_GENIBUS: Algorithm = Algorithm {
  name: "CRC-16/GENIBUS",
  aliases: &["CRC-16/DARC", "CRC-16/EPC", "CRC-16/EPC-C1G2", "CRC-16/I-CODE"],
  width: 16,
  poly: 0x1021,
  init: 0xFFFF,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0xFFFF,
  check: 0xD64E,
};

/// CRC-16/GSM.
pub const CRC_16_GSM: Algorithm = Algorithm {
  name: "CRC-16/GSM",
  aliases: &[],
  width: 16,
  poly: 0x1021,
  init: 0x0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0xFFFF,
  check: 0xCE3C,
};

/// CRC-16/IBM-3740, also known as CRC-16/AUTOSAR, CRC-16/CCITT-FALSE.
pub const CRC_16_IBM_3740: Algorithm = Algorithm {
  name: "CRC-16/IBM-3740",
  aliases: &["CRC-16/AUTOSAR", "CRC-16/CCITT-FALSE"],
  width: 16,
  poly: 0x1021,
  init: 0xFFFF,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000,
  check: 0x29B1,
};

/// CRC-16/IBM-SDLC, also known as CRC-16/ISO-HDLC, CRC-16/ISO-IEC-14443-3-B, CRC-16/X-25, CRC-B, X-25.
pub const CRC_16_IBM_SDLC: Algorithm = Algorithm {
  name: "CRC-16/IBM-SDLC",
  aliases: &["CRC-16/ISO-HDLC", "CRC-16/ISO-IEC-14443-3-B", "CRC-16/X-25", "CRC-B", "X-25"],
  width: 16,
  poly: 0x1021,
  init: 0xFFFF,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0xFFFF,
  check: 0x906E,
};

/// CRC-16/ISO-IEC-14443-3-A, also known as CRC-A.
pub const CRC_16_ISO_IEC_14443_3_A: Algorithm = Algorithm {
  name: "CRC-16/ISO-IEC-14443-3-A",
  aliases: &["CRC-A"],
  width: 16,
  poly: 0x1021,
  init: 0xC6C6,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x0000,
  check: 0xBF05,
};

/// CRC-16/KERMIT, also known as CRC-16/BLUETOOTH, CRC-16/CCITT, CRC-16/CCITT-TRUE, CRC-16/V-41-LSB, CRC-CCITT, KERMIT.
pub const CRC_16_KERMIT: Algorithm = Algorithm {
  name: "CRC-16/KERMIT",
  aliases: &["CRC-16/BLUETOOTH", "CRC-16/CCITT", "CRC-16/CCITT-TRUE", "CRC-16/V-41-LSB", "CRC-CCITT", "KERMIT"],
  width: 16,
  poly: 0x1021,
  init: 0x0000,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x0000,
  check: 0x2189,
};

/// CRC-16/LJ1200.
pub const CRC_16_LJ1200: Algorithm = Algorithm {
  name: "CRC-16/LJ1200",
  aliases: &[],
  width: 16,
  poly: 0x6F63,
  init: 0x0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000,
  check: 0xBDF4,
};

/// CRC-16/M17.
pub const CRC_16_M17: Algorithm = Algorithm {
  name: "CRC-16/M17",
  aliases: &[],
  width: 16,
  poly: 0x5935,
  init: 0xFFFF,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000,
  check: 0x772B,
};

/// CRC-16/MAXIM-DOW, also known as CRC-16/MAXIM.
pub const CRC_16_MAXIM_DOW: Algorithm = Algorithm {
  name: "CRC-16/MAXIM-DOW",
  aliases: &["CRC-16/MAXIM"],
  width: 16,
  poly: 0x8005,
  init: 0x0000,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0xFFFF,
  check: 0x44C2,
};

/// CRC-16/MCRF4XX.
pub const CRC_16_MCRF4XX: Algorithm = Algorithm {
  name: "CRC-16/MCRF4XX",
  aliases: &[],
  width: 16,
  poly: 0x1021,
  init: 0xFFFF,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x0000,
  check: 0x6F91,
};

/// CRC-16/MODBUS, also known as MODBUS.
pub const CRC_16_MODBUS: Algorithm = Algorithm {
  name: "CRC-16/MODBUS",
  aliases: &["MODBUS"],
  width: 16,
  poly: 0x8005,
  init: 0xFFFF,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x0000,
  check: 0x4B37,
};

/// CRC-16/NRSC-5.
pub const CRC_16_NRSC_5: Algorithm = Algorithm {
  name: "CRC-16/NRSC-5",
  aliases: &[],
  width: 16,
  poly: 0x080B,
  init: 0xFFFF,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x0000,
  check: 0xA066,
};

/// CRC-16/OPENSAFETY-A.
pub const CRC_16_OPENSAFETY_A: Algorithm = Algorithm {
  name: "CRC-16/OPENSAFETY-A",
  aliases: &[],
  width: 16,
  poly: 0x5935,
  init: 0x0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000,
  check: 0x5D38,
};

/// CRC-16/OPENSAFETY-B.
pub const CRC_16_OPENSAFETY_B: Algorithm = Algorithm {
  name: "CRC-16/OPENSAFETY-B",
  aliases: &[],
  width: 16,
  poly: 0x755B,
  init: 0x0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000,
  check: 0x20FE,
};

/// CRC-16/PROFIBUS, also known as CRC-16/IEC-61158-2.
pub const CRC_16_PROFIBUS: Algorithm = Algorithm {
  name: "CRC-16/PROFIBUS",
  aliases: &["CRC-16/IEC-61158-2"],
  width: 16,
  poly: 0x1DCF,
  init: 0xFFFF,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0xFFFF,
  check: 0xA819,
};

/// CRC-16/RIELLO.
pub const CRC_16_RIELLO: Algorithm = Algorithm {
  name: "CRC-16/RIELLO",
  aliases: &[],
  width: 16,
  poly: 0x1021,
  init: 0xB2AA,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x0000,
  check: 0x63D0,
};

/// CRC-16/SPI-FUJITSU, also known as CRC-16/AUG-CCITT.
pub const CRC_16_SPI_FUJITSU: Algorithm = Algorithm {
  name: "CRC-16/SPI-FUJITSU",
  aliases: &["CRC-16/AUG-CCITT"],
  width: 16,
  poly: 0x1021,
  init: 0x1D0F,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000,
  check: 0xE5CC,
};

/// CRC-16/T10-DIF.
pub const CRC_16_T10_DIF: Algorithm = Algorithm {
  name: "CRC-16/T10-DIF",
  aliases: &[],
  width: 16,
  poly: 0x8BB7,
  init: 0x0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000,
  check: 0xD0DB,
};

/// CRC-16/TELEDISK.
pub const CRC_16_TELEDISK: Algorithm = Algorithm {
  name: "CRC-16/TELEDISK",
  aliases: &[],
  width: 16,
  poly: 0xA097,
  init: 0x0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000,
  check: 0x0FB3,
};

/// CRC-16/TMS37157.
pub const CRC_16_TMS37157: Algorithm = Algorithm {
  name: "CRC-16/TMS37157",
  aliases: &[],
  width: 16,
  poly: 0x1021,
  init: 0x89EC,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x0000,
  check: 0x26B1,
};

/// CRC-16/UMTS, also known as CRC-16/BUYPASS, CRC-16/VERIFONE.
pub const CRC_16_UMTS: Algorithm = Algorithm {
  name: "CRC-16/UMTS",
  aliases: &["CRC-16/BUYPASS", "CRC-16/VERIFONE"],
  width: 16,
  poly: 0x8005,
  init: 0x0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000,
  check: 0xFEE8,
};

/// CRC-16/USB.
pub const CRC_16_USB: Algorithm = Algorithm {
  name: "CRC-16/USB",
  aliases: &[],
  width: 16,
  poly: 0x8005,
  init: 0xFFFF,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0xFFFF,
  check: 0xB4C8,
};

/// CRC-16/XMODEM, also known as CRC-16/ACORN, CRC-16/LTE, CRC-16/V-41-MSB, XMODEM, ZMODEM.
pub const CRC_16_XMODEM: Algorithm = Algorithm {
  name: "CRC-16/XMODEM",
  aliases: &["CRC-16/ACORN", "CRC-16/LTE", "CRC-16/V-41-MSB", "XMODEM", "ZMODEM"],
  width: 16,
  poly: 0x1021,
  init: 0x0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000,
  check: 0x31C3,
};

/// CRC-17/CAN-FD.
pub const CRC_17_CAN_FD: Algorithm = Algorithm {
  name: "CRC-17/CAN-FD",
  aliases: &[],
  width: 17,
  poly: 0x1_685B,
  init: 0x0_0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0_0000,
  check: 0x0_4F03,
};

/// CRC-21/CAN-FD.
pub const CRC_21_CAN_FD: Algorithm = Algorithm {
  name: "CRC-21/CAN-FD",
  aliases: &[],
  width: 21,
  poly: 0x10_2899,
  init: 0x00_0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x00_0000,
  check: 0x0E_D841,
};

/// CRC-24/BLE.
pub const CRC_24_BLE: Algorithm = Algorithm {
  name: "CRC-24/BLE",
  aliases: &[],
  width: 24,
  poly: 0x00_065B,
  init: 0x55_5555,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x00_0000,
  check: 0xC2_5A56,
};

/// CRC-24/FLEXRAY-A.
pub const CRC_24_FLEXRAY_A: Algorithm = Algorithm {
  name: "CRC-24/FLEXRAY-A",
  aliases: &[],
  width: 24,
  poly: 0x5D_6DCB,
  init: 0xFE_DCBA,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x00_0000,
  check: 0x79_79BD,
};

/// CRC-24/FLEXRAY-B.
pub const CRC_24_FLEXRAY_B: Algorithm = Algorithm {
  name: "CRC-24/FLEXRAY-B",
  aliases: &[],
  width: 24,
  poly: 0x5D_6DCB,
  init: 0xAB_CDEF,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x00_0000,
  check: 0x1F_23B8,
};

/// CRC-24/INTERLAKEN.
pub const CRC_24_INTERLAKEN: Algorithm = Algorithm {
  name: "CRC-24/INTERLAKEN",
  aliases: &[],
  width: 24,
  poly: 0x32_8B63,
  init: 0xFF_FFFF,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0xFF_FFFF,
  check: 0xB4_F3E6,
};

/// CRC-24/LTE-A.
pub const CRC_24_LTE_A: Algorithm = Algorithm {
  name: "CRC-24/LTE-A",
  aliases: &[],
  width: 24,
  poly: 0x86_4CFB,
  init: 0x00_0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x00_0000,
  check: 0xCD_E703,
};

/// CRC-24/LTE-B.
pub const CRC_24_LTE_B: Algorithm = Algorithm {
  name: "CRC-24/LTE-B",
  aliases: &[],
  width: 24,
  poly: 0x80_0063,
  init: 0x00_0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x00_0000,
  check: 0x23_EF52,
};

/// CRC-24/OPENPGP, also known as CRC-24.
pub const CRC_24_OPENPGP: Algorithm = Algorithm {
  name: "CRC-24/OPENPGP",
  aliases: &["CRC-24"],
  width: 24,
  poly: 0x86_4CFB,
  init: 0xB7_04CE,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x00_0000,
  check: 0x21_CF02,
};

/// CRC-24/OS-9.
pub const CRC_24_OS_9: Algorithm = Algorithm {
  name: "CRC-24/OS-9",
  aliases: &[],
  width: 24,
  poly: 0x80_0063,
  init: 0xFF_FFFF,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0xFF_FFFF,
  check: 0x20_0FA5,
};

/// CRC-30/CDMA.
pub const CRC_30_CDMA: Algorithm = Algorithm {
  name: "CRC-30/CDMA",
  aliases: &[],
  width: 30,
  poly: 0x2030_B9C7,
  init: 0x3FFF_FFFF,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x3FFF_FFFF,
  check: 0x04C3_4ABF,
};

/// CRC-31/PHILIPS.
pub const CRC_31_PHILIPS: Algorithm = Algorithm {
  name: "CRC-31/PHILIPS",
  aliases: &[],
  width: 31,
  poly: 0x04C1_1DB7,
  init: 0x7FFF_FFFF,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x7FFF_FFFF,
  check: 0x0CE9_E46C,
};

/// CRC-32/AIXM, also known as CRC-32Q.
pub const CRC_32_AIXM: Algorithm = Algorithm {
  name: "CRC-32/AIXM",
  aliases: &["CRC-32Q"],
  width: 32,
  poly: 0x8141_41AB,
  init: 0x0000_0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000_0000,
  check: 0x3010_BF7F,
};

/// CRC-32/AUTOSAR.
pub const CRC_32_AUTOSAR: Algorithm = Algorithm {
  name: "CRC-32/AUTOSAR",
  aliases: &[],
  width: 32,
  poly: 0xF4AC_FB13,
  init: 0xFFFF_FFFF,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0xFFFF_FFFF,
  check: 0x1697_D06A,
};

/// CRC-32/BASE91-D, also known as CRC-32D.
pub const CRC_32_BASE91_D: Algorithm = Algorithm {
  name: "CRC-32/BASE91-D",
  aliases: &["CRC-32D"],
  width: 32,
  poly: 0xA833_982B,
  init: 0xFFFF_FFFF,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0xFFFF_FFFF,
  check: 0x8731_5576,
};

/// CRC-32/BZIP2, also known as B-CRC-32, CRC-32/AAL5, CRC-32/DECT-B.
pub const CRC_32_BZIP2: Algorithm = Algorithm {
  name: "CRC-32/BZIP2",
  aliases: &["B-CRC-32", "CRC-32/AAL5", "CRC-32/DECT-B"],
  width: 32,
  poly: 0x04C1_1DB7,
  init: 0xFFFF_FFFF,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0xFFFF_FFFF,
  check: 0xFC89_1918,
};

/// CRC-32/CD-ROM-EDC.
pub const CRC_32_CD_ROM_EDC: Algorithm = Algorithm {
  name: "CRC-32/CD-ROM-EDC",
  aliases: &[],
  width: 32,
  poly: 0x8001_801B,
  init: 0x0000_0000,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x0000_0000,
  check: 0x6EC2_EDC4,
};

/// CRC-32/CKSUM, also known as CKSUM, CRC-32/POSIX.
pub const CRC_32_CKSUM: Algorithm = Algorithm {
  name: "CRC-32/CKSUM",
  aliases: &["CKSUM", "CRC-32/POSIX"],
  width: 32,
  poly: 0x04C1_1DB7,
  init: 0x0000_0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0xFFFF_FFFF,
  check: 0x765E_7680,
};

/// CRC-32/ISCSI, also known as CRC-32/BASE91-C, CRC-32/CASTAGNOLI, CRC-32/INTERLAKEN, CRC-32C.
pub const CRC_32_ISCSI: Algorithm = Algorithm {
  name: "CRC-32/ISCSI",
  aliases: &["CRC-32/BASE91-C", "CRC-32/CASTAGNOLI", "CRC-32/INTERLAKEN", "CRC-32C"],
  width: 32,
  poly: 0x1EDC_6F41,
  init: 0xFFFF_FFFF,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0xFFFF_FFFF,
  check: 0xE306_9283,
};

/// CRC-32/ISO-HDLC, also known as CRC-32, CRC-32/ADCCP, CRC-32/V-42, CRC-32/XZ, PKZIP.
pub const CRC_32_ISO_HDLC: Algorithm = Algorithm {
  name: "CRC-32/ISO-HDLC",
  aliases: &["CRC-32", "CRC-32/ADCCP", "CRC-32/V-42", "CRC-32/XZ", "PKZIP"],
  width: 32,
  poly: 0x04C1_1DB7,
  init: 0xFFFF_FFFF,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0xFFFF_FFFF,
  check: 0xCBF4_3926,
};

/// CRC-32/JAMCRC, also known as JAMCRC.
pub const CRC_32_JAMCRC: Algorithm = Algorithm {
  name: "CRC-32/JAMCRC",
  aliases: &["JAMCRC"],
  width: 32,
  poly: 0x04C1_1DB7,
  init: 0xFFFF_FFFF,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x0000_0000,
  check: 0x340B_C6D9,
};

/// CRC-32/MEF.
pub const CRC_32_MEF: Algorithm = Algorithm {
  name: "CRC-32/MEF",
  aliases: &[],
  width: 32,
  poly: 0x741B_8CD7,
  init: 0xFFFF_FFFF,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x0000_0000,
  check: 0xD2C2_2F51,
};

/// CRC-32/MPEG-2.
pub const CRC_32_MPEG_2: Algorithm = Algorithm {
  name: "CRC-32/MPEG-2",
  aliases: &[],
  width: 32,
  poly: 0x04C1_1DB7,
  init: 0xFFFF_FFFF,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000_0000,
  check: 0x0376_E6E7,
};

/// CRC-32/XFER, also known as XFER.
pub const CRC_32_XFER: Algorithm = Algorithm {
  name: "CRC-32/XFER",
  aliases: &["XFER"],
  width: 32,
  poly: 0x0000_00AF,
  init: 0x0000_0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000_0000,
  check: 0xBD0B_E338,
};

/// CRC-40/GSM.
pub const CRC_40_GSM: Algorithm = Algorithm {
  name: "CRC-40/GSM",
  aliases: &[],
  width: 40,
  poly: 0x00_0482_0009,
  init: 0x00_0000_0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0xFF_FFFF_FFFF,
  check: 0xD4_164F_C646,
};

/// CRC-64/ECMA-182, also known as CRC-64.
pub const CRC_64_ECMA_182: Algorithm = Algorithm {
  name: "CRC-64/ECMA-182",
  aliases: &["CRC-64"],
  width: 64,
  poly: 0x42F0_E1EB_A9EA_3693,
  init: 0x0000_0000_0000_0000,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0x0000_0000_0000_0000,
  check: 0x6C40_DF5F_0B49_7347,
};

/// CRC-64/GO-ISO.
pub const CRC_64_GO_ISO: Algorithm = Algorithm {
  name: "CRC-64/GO-ISO",
  aliases: &[],
  width: 64,
  poly: 0x0000_0000_0000_001B,
  init: 0xFFFF_FFFF_FFFF_FFFF,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0xFFFF_FFFF_FFFF_FFFF,
  check: 0xB909_56C7_75A4_1001,
};

/// CRC-64/MS.
pub const CRC_64_MS: Algorithm = Algorithm {
  name: "CRC-64/MS",
  aliases: &[],
  width: 64,
  poly: 0x259C_84CB_A642_6349,
  init: 0xFFFF_FFFF_FFFF_FFFF,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x0000_0000_0000_0000,
  check: 0x75D4_B74F_024E_CEEA,
};

/// CRC-64/NVME.
pub const CRC_64_NVME: Algorithm = Algorithm {
  name: "CRC-64/NVME",
  aliases: &[],
  width: 64,
  poly: 0xAD93_D235_94C9_3659,
  init: 0xFFFF_FFFF_FFFF_FFFF,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0xFFFF_FFFF_FFFF_FFFF,
  check: 0xAE8B_1486_0A79_9888,
};

/// CRC-64/REDIS.
pub const CRC_64_REDIS: Algorithm = Algorithm {
  name: "CRC-64/REDIS",
  aliases: &[],
  width: 64,
  poly: 0xAD93_D235_94C9_35A9,
  init: 0x0000_0000_0000_0000,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x0000_0000_0000_0000,
  check: 0xE9C6_D914_C4B8_D9CA,
};

/// CRC-64/WE.
pub const CRC_64_WE: Algorithm = Algorithm {
  name: "CRC-64/WE",
  aliases: &[],
  width: 64,
  poly: 0x42F0_E1EB_A9EA_3693,
  init: 0xFFFF_FFFF_FFFF_FFFF,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0xFFFF_FFFF_FFFF_FFFF,
  check: 0x62EC_59E3_F1A4_F00A,
};

/// CRC-64/XZ, also known as CRC-64/GO-ECMA.
pub const CRC_64_XZ: Algorithm = Algorithm {
  name: "CRC-64/XZ",
  aliases: &["CRC-64/GO-ECMA"],
  width: 64,
  poly: 0x42F0_E1EB_A9EA_3693,
  init: 0xFFFF_FFFF_FFFF_FFFF,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0xFFFF_FFFF_FFFF_FFFF,
  check: 0x995D_C9BB_DF19_39FA,
};

/// CRC-82/DARC.
pub const CRC_82_DARC: Algorithm = Algorithm {
  name: "CRC-82/DARC",
  aliases: &[],
  width: 82,
  poly: 0x0_308C_0111_0114_0144_0411,
  init: 0x0_0000_0000_0000_0000_0000,
  reflect_in: true,
  reflect_out: true,
  xor_out: 0x0_0000_0000_0000_0000_0000,
  check: 0x0_9EA8_3F62_5023_801F_D612,
};

/// Every catalog entry, ordered by width then name.
pub static ALGORITHMS: &[Algorithm] = &[
  CRC_3_GSM,
  CRC_3_ROHC,
  CRC_4_G_704,
  CRC_4_INTERLAKEN,
  CRC_5_EPC_C1G2,
  CRC_5_G_704,
  CRC_5_USB,
  CRC_6_CDMA2000_A,
  CRC_6_CDMA2000_B,
  CRC_6_DARC,
  CRC_6_G_704,
  CRC_6_GSM,
  CRC_7_MMC,
  CRC_7_ROHC,
  CRC_7_UMTS,
  CRC_8_AUTOSAR,
  CRC_8_BLUETOOTH,
  CRC_8_CDMA2000,
  CRC_8_DARC,
  CRC_8_DVB_S2,
  CRC_8_GSM_A,
  CRC_8_GSM_B,
  CRC_8_HITAG,
  CRC_8_I_432_1,
  CRC_8_I_CODE,
  CRC_8_LTE,
  CRC_8_MAXIM_DOW,
  CRC_8_MIFARE_MAD,
  CRC_8_NRSC_5,
  CRC_8_OPENSAFETY,
  CRC_8_ROHC,
  CRC_8_SAE_J1850,
  CRC_8_SMBUS,
  CRC_8_TECH_3250,
  CRC_8_WCDMA,
  CRC_10_ATM,
  CRC_10_CDMA2000,
  CRC_10_GSM,
  CRC_11_FLEXRAY,
  CRC_11_UMTS,
  CRC_12_CDMA2000,
  CRC_12_DECT,
  CRC_12_GSM,
  CRC_12_UMTS,
  CRC_13_BBC,
  CRC_14_DARC,
  CRC_14_GSM,
  CRC_15_CAN,
  CRC_15_MPT1327,
  CRC_16_ARC,
  CRC_16_CDMA2000,
  CRC_16_CMS,
  CRC_16_DDS_110,
  CRC_16_DECT_R,
  CRC_16_DECT_X,
  CRC_16_DNP,
  CRC_16_EN_13757,
  CRC_16_GENIBUS,
  CRC_16_GSM,
  CRC_16_IBM_3740,
  CRC_16_IBM_SDLC,
  CRC_16_ISO_IEC_14443_3_A,
  CRC_16_KERMIT,
  CRC_16_LJ1200,
  CRC_16_M17,
  CRC_16_MAXIM_DOW,
  CRC_16_MCRF4XX,
  CRC_16_MODBUS,
  CRC_16_NRSC_5,
  CRC_16_OPENSAFETY_A,
  CRC_16_OPENSAFETY_B,
  CRC_16_PROFIBUS,
  CRC_16_RIELLO,
  CRC_16_SPI_FUJITSU,
  CRC_16_T10_DIF,
  CRC_16_TELEDISK,
  CRC_16_TMS37157,
  CRC_16_UMTS,
  CRC_16_USB,
  CRC_16_XMODEM,
  CRC_17_CAN_FD,
  CRC_21_CAN_FD,
  CRC_24_BLE,
  CRC_24_FLEXRAY_A,
  CRC_24_FLEXRAY_B,
  CRC_24_INTERLAKEN,
  CRC_24_LTE_A,
  CRC_24_LTE_B,
  CRC_24_OPENPGP,
  CRC_24_OS_9,
  CRC_30_CDMA,
  CRC_31_PHILIPS,
  CRC_32_AIXM,
  CRC_32_AUTOSAR,
  CRC_32_BASE91_D,
  CRC_32_BZIP2,
  CRC_32_CD_ROM_EDC,
  CRC_32_CKSUM,
  CRC_32_ISCSI,
  CRC_32_ISO_HDLC,
  CRC_32_JAMCRC,
  CRC_32_MEF,
  CRC_32_MPEG_2,
  CRC_32_XFER,
  CRC_40_GSM,
  CRC_64_ECMA_182,
  CRC_64_GO_ISO,
  CRC_64_MS,
  CRC_64_NVME,
  CRC_64_REDIS,
  CRC_64_WE,
  CRC_64_XZ,
  CRC_82_DARC,
];

// ─────────────────────────────────────────────────────────────────────────────
// Lookup
// ─────────────────────────────────────────────────────────────────────────────

fn index() -> &'static HashMap<String, &'static Algorithm> {
  static INDEX: OnceLock<HashMap<String, &'static Algorithm>> = OnceLock::new();
  INDEX.get_or_init(|| {
    let mut map = HashMap::with_capacity(ALGORITHMS.len() * 2);
    for alg in ALGORITHMS {
      for name in core::iter::once(&alg.name).chain(alg.aliases) {
        map.insert(name.to_ascii_uppercase(), alg);
      }
    }
    tracing::debug!(algorithms = ALGORITHMS.len(), names = map.len(), "built crc catalog index");
    map
  })
}

/// Find an algorithm by canonical name or alias, ignoring ASCII case.
///
/// ```
/// use crcmodel::catalog;
///
/// let alg = catalog::find("crc-32c").unwrap();
/// assert_eq!(alg.name, "CRC-32/ISCSI");
/// assert_eq!(alg.check, 0xE306_9283);
/// assert!(catalog::find("CRC-99/NOPE").is_none());
/// ```
#[must_use]
pub fn find(name: &str) -> Option<&'static Algorithm> {
  index().get(&name.trim().to_ascii_uppercase()).copied()
}

/// Like [`find`], reporting a miss as an error.
///
/// # Errors
///
/// [`CrcError::UnknownAlgorithm`] if no entry carries `name`.
pub fn lookup(name: &str) -> Result<&'static Algorithm> {
  find(name).ok_or_else(|| CrcError::UnknownAlgorithm { name: name.to_owned() })
}

/// Every algorithm of the given width.
pub fn by_width(width: u8) -> impl Iterator<Item = &'static Algorithm> {
  ALGORITHMS.iter().filter(move |alg| alg.width == width)
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use super::*;

  #[test]
  fn names_are_unique() {
    let mut seen = HashSet::new();
    for alg in ALGORITHMS {
      for name in core::iter::once(&alg.name).chain(alg.aliases) {
        assert!(seen.insert(name.to_ascii_uppercase()), "duplicate name {name}");
      }
    }
  }

  #[test]
  fn entries_are_valid_params() {
    for alg in ALGORITHMS {
      let p = CrcParams::new(alg.width, alg.poly, alg.init, alg.reflect_in, alg.reflect_out, alg.xor_out).unwrap();
      assert_eq!(p, alg.params(), "{}", alg.name);
      assert_eq!(alg.check & !p.mask(), 0, "{} check wider than its width", alg.name);
    }
  }

  #[test]
  fn lookup_by_alias_and_case() {
    assert_eq!(find("CRC-32").unwrap().name, "CRC-32/ISO-HDLC");
    assert_eq!(find("pkzip").unwrap(), &CRC_32_ISO_HDLC);
    assert_eq!(find(" crc-16/ccitt-false ").unwrap(), &CRC_16_IBM_3740);
    assert_eq!(find("X-25").unwrap(), &CRC_16_IBM_SDLC);
    assert_eq!(find("crc-82/darc").unwrap().width, 82);
  }

  #[test]
  fn lookup_miss_is_error() {
    assert_eq!(
      lookup("CRC-7/NOPE"),
      Err(CrcError::UnknownAlgorithm {
        name: "CRC-7/NOPE".into()
      })
    );
  }

  #[test]
  fn by_width_filters() {
    assert!(by_width(64).all(|a| a.width == 64));
    assert_eq!(by_width(82).count(), 1);
    assert!(by_width(16).count() > 20);
  }

  #[test]
  fn is_named_checks_aliases() {
    assert!(!CRC_32_ISCSI.is_named("castagnoli"));
    assert!(CRC_32_ISCSI.is_named("crc-32/castagnoli"));
    assert!(CRC_32_ISCSI.is_named("CRC-32/ISCSI"));
  }
}
