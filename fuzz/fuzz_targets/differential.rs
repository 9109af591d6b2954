//! Differential fuzzing of the engine against the reference implementations.
//!
//! Parameters are arbitrary: any width 1..=128, any non-zero polynomial, any
//! init/xorout and both reflection flags.

#![no_main]

use arbitrary::Arbitrary;
use crcmodel::{factory, reference};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  width: u8,
  poly: u128,
  init: u128,
  reflect_in: bool,
  reflect_out: bool,
  xor_out: u128,
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let width = input.width % 128 + 1;
  let descriptor = factory::Descriptor::new(
    width,
    input.poly | 1,
    input.init,
    input.reflect_in,
    input.reflect_out,
    input.xor_out,
  );
  let Ok(params) = descriptor.params() else {
    return;
  };
  let Ok(crc) = factory::create(&descriptor) else {
    return;
  };

  let ours = crc.checksum(&input.data);
  let bitwise = reference::bitwise(&params, &input.data);
  let bytewise = reference::bytewise(&params, &input.data);

  assert_eq!(
    ours, bitwise,
    "engine/bitwise mismatch: ours={ours:#x}, reference={bitwise:#x}, params={params:?}"
  );
  assert_eq!(ours, bytewise, "engine/bytewise mismatch: params={params:?}");
});
