//! Building blocks shared by the engine, the combine helpers and the tests.
//!
//! - Register words, including the two-word `Wide` register above 64 bits
//! - Byte table generation
//! - GF(2) matrix operators for zero-byte advancement
//! - The byte-at-a-time update loop
//! - Bitwise and bytewise reference implementations

pub mod combine;
pub(crate) mod portable;
pub mod reference;
pub mod tables;
pub mod word;
