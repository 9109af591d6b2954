//! Chunked fan-out for large inputs.
//!
//! The input is cut into full chunks of `C` bytes plus a short tail. Every
//! full chunk is run through the byte loop independently: chunk 0 starts from
//! the caller's register, every other chunk starts from zero. Because the
//! register update is linear over GF(2),
//!
//! ```text
//! reg(A ‖ B) = M_|B| · reg(A) ^ reg₀(B)
//! ```
//!
//! where `M_|B|` advances a register through `|B|` zero bytes and `reg₀(B)`
//! is `B` run from a zero register. With all chunks the same size, one matrix
//! `M_C` folds the partial registers left to right:
//!
//! ```text
//! acc = partial[0]
//! acc = M_C · acc ^ partial[i]    for i in 1..n
//! ```
//!
//! The fold runs in chunk order, so the result never depends on which worker
//! finishes first. The tail is shorter than `C` and is fed sequentially from
//! the folded register.
//!
//! With the `parallel` feature the partial registers are computed on the rayon
//! pool and the calling thread blocks until every chunk is done. There is no
//! cancellation: a started fan-out runs to completion, and a panicking worker
//! propagates its panic to the caller.

use crate::common::{combine::Gf2Matrix, portable, tables::Table, word::Word};

/// Process `data` starting from `reg` by chunked fan-out.
///
/// `shift` is the distance between the register's storage justification and
/// the right-justified vector `matrix` operates on: `0` for reflected
/// registers, `W::BITS - width` for unreflected ones.
pub(crate) fn fan_out<W: Word>(
  table: &Table<W>,
  matrix: &Gf2Matrix,
  shift: u32,
  reg: W,
  data: &[u8],
  chunk_size: usize,
) -> W {
  let full = data.len() - data.len() % chunk_size;
  let (body, tail) = data.split_at(full);

  tracing::trace!(
    chunks = body.len() / chunk_size,
    chunk_size,
    tail = tail.len(),
    "crc fan-out"
  );

  let partials = partials(table, reg, body, chunk_size);
  let folded = fold(matrix, shift, reg, &partials);
  portable::update(table, folded, tail)
}

/// Fold partial registers in chunk order. An empty list leaves `reg` as is.
fn fold<W: Word>(matrix: &Gf2Matrix, shift: u32, reg: W, partials: &[W]) -> W {
  let Some((first, rest)) = partials.split_first() else {
    return reg;
  };
  let mut acc = first.to_u128() >> shift;
  for partial in rest {
    acc = matrix.multiply(acc) ^ (partial.to_u128() >> shift);
  }
  W::from_u128(acc << shift)
}

#[cfg(feature = "parallel")]
fn partials<W: Word>(table: &Table<W>, reg: W, body: &[u8], chunk_size: usize) -> Vec<W> {
  use rayon::prelude::*;

  body
    .par_chunks_exact(chunk_size)
    .enumerate()
    .map(|(i, chunk)| portable::update(table, if i == 0 { reg } else { W::ZERO }, chunk))
    .collect()
}

#[cfg(not(feature = "parallel"))]
fn partials<W: Word>(table: &Table<W>, reg: W, body: &[u8], chunk_size: usize) -> Vec<W> {
  body
    .chunks_exact(chunk_size)
    .enumerate()
    .map(|(i, chunk)| portable::update(table, if i == 0 { reg } else { W::ZERO }, chunk))
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::common::word::Wide;

  fn data(len: usize) -> Vec<u8> {
    let mut x = 0x9E37_79B9_7F4A_7C15u64;
    (0..len)
      .map(|_| {
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        x as u8
      })
      .collect()
  }

  fn check<W: Word>(poly: u128, width: u8, reflected: bool, init: W) {
    let table = Table::<W>::new(poly, width, reflected).unwrap();
    let shift = if reflected { 0 } else { W::BITS - u32::from(width) };
    for chunk_log2 in [0u32, 3, 6] {
      let chunk = 1usize << chunk_log2;
      let matrix = Gf2Matrix::zero_bytes_pow2(poly, width, reflected, chunk_log2);
      for len in [0, 1, chunk - 1 + usize::from(chunk == 1), chunk, chunk + 1, 5 * chunk + 3] {
        let d = data(len);
        assert_eq!(
          fan_out(&table, &matrix, shift, init, &d, chunk),
          portable::update(&table, init, &d),
          "width={width} reflected={reflected} chunk={chunk} len={len}"
        );
      }
    }
  }

  #[test]
  fn fan_out_matches_sequential() {
    check::<u8>(0x07, 8, false, 0xFF);
    check::<u8>(0x15, 5, true, 0x0A);
    check::<u8>(0x3, 3, false, 0xE0);
    check::<u16>(0x1021, 16, false, 0xFFFF);
    check::<u32>(0x04C1_1DB7, 32, true, 0xFFFF_FFFF);
    check::<u32>(0x86_4CFB, 24, false, 0xB704_CE00);
    check::<u64>(0x482_0009, 40, false, 0);
    check::<u64>(0x42F0_E1EB_A9EA_3693, 64, true, u64::MAX);
    check::<Wide>(0x308C_0111_0114_0144_0411, 82, true, Wide::new(0, 0x1234));
    check::<Wide>(0x87, 128, false, Wide::new(u64::MAX, 1));
  }

  #[test]
  fn fold_of_nothing_is_identity() {
    let m = Gf2Matrix::identity(16);
    assert_eq!(fold::<u16>(&m, 0, 0xBEEF, &[]), 0xBEEF);
  }
}
