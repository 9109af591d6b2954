//! Byte-at-a-time register update, generic over the storage word.
//!
//! | Orientation | Index | Shift |
//! |-------------|-------|-------|
//! | reflected   | `low_byte(reg) ^ b` | `reg >> 8` |
//! | unreflected | `high_byte(reg) ^ b` | `reg << 8` |
//!
//! For words of exactly eight bits the shift discards the whole register, so
//! the new register is the table entry alone.

use super::{tables::Table, word::Word};

/// Feed `data` through `reg` using `table`.
#[inline]
pub(crate) fn update<W: Word>(table: &Table<W>, mut reg: W, data: &[u8]) -> W {
  if table.is_reflected() {
    for &b in data {
      reg = reg.shr8() ^ table.get(reg.low_byte() ^ b);
    }
  } else {
    for &b in data {
      reg = reg.shl8() ^ table.get(reg.high_byte() ^ b);
    }
  }
  reg
}
