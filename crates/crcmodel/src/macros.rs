//! Internal macros for preset CRC types.

/// Generate a zero-configuration CRC type for one catalog entry.
///
/// This macro creates:
/// - The struct definition wrapping a [`Crc`](crate::Crc) engine
/// - A compile-time check that the width fits both the register word and the
///   output type
/// - `ALGORITHM`, `resume()` and `engine()` items
/// - `Checksum`, `ChecksumCombine` and `Default` implementations
///
/// Every instance clones one lazily built prototype engine, so the table and
/// combine matrix are generated once per type and shared afterwards.
///
/// # Arguments
///
/// - `$name`: The type name (e.g., `Crc32`)
/// - `$alg`: The catalog constant (e.g., `catalog::CRC_32_ISO_HDLC`)
/// - `$word`: Register word (`u8`..`u64` or `Wide`)
/// - `$out`: Finalized output type
macro_rules! define_crc_type {
  (
    $(#[$outer:meta])*
    $vis:vis struct $name:ident {
      algorithm: $alg:expr,
      word: $word:ty,
      output: $out:ty,
    }
  ) => {
    $(#[$outer])*
    #[derive(Clone, Debug)]
    $vis struct $name {
      engine: $crate::Crc<$word>,
    }

    const _: () = assert!(
      ($alg).width as u32 <= <$word as $crate::Word>::BITS && ($alg).width as u32 <= <$out>::BITS,
      "preset width does not fit its register word or output type"
    );

    impl $name {
      /// Catalog entry this type computes.
      pub const ALGORITHM: $crate::catalog::Algorithm = $alg;

      // Width is checked at compile time above, so building the engine cannot fail.
      #[allow(clippy::expect_used)]
      fn prototype() -> &'static $crate::Crc<$word> {
        static PROTOTYPE: ::std::sync::OnceLock<$crate::Crc<$word>> = ::std::sync::OnceLock::new();
        PROTOTYPE.get_or_init(|| {
          $crate::Crc::new(Self::ALGORITHM.params()).expect("catalog parameters fit the register word")
        })
      }

      /// Create a hasher to resume from a previous CRC value.
      #[inline]
      #[must_use]
      pub fn resume(crc: $out) -> Self {
        <Self as $crate::Checksum>::with_initial(crc)
      }

      /// The underlying engine.
      #[inline]
      #[must_use]
      pub fn engine(&self) -> &$crate::Crc<$word> {
        &self.engine
      }
    }

    impl Default for $name {
      #[inline]
      fn default() -> Self {
        Self {
          engine: Self::prototype().clone(),
        }
      }
    }

    impl $crate::Checksum for $name {
      const WIDTH: u32 = ($alg).width as u32;
      type Output = $out;

      #[inline]
      fn new() -> Self {
        Self::default()
      }

      #[inline]
      fn with_initial(initial: $out) -> Self {
        let mut engine = Self::prototype().clone();
        engine.resume_from(u128::from(initial));
        Self { engine }
      }

      #[inline]
      fn update(&mut self, data: &[u8]) {
        self.engine.add(data);
      }

      #[inline]
      #[allow(clippy::cast_possible_truncation)] // value() is masked to WIDTH bits
      fn finalize(&self) -> $out {
        self.engine.value() as $out
      }

      #[inline]
      fn reset(&mut self) {
        self.engine.reset();
      }
    }

    impl $crate::ChecksumCombine for $name {
      #[allow(clippy::cast_possible_truncation)] // combine() is masked to WIDTH bits
      fn combine(crc_a: $out, crc_b: $out, len_b: usize) -> $out {
        $crate::combine::combine(
          &Self::ALGORITHM.params(),
          u128::from(crc_a),
          u128::from(crc_b),
          len_b as u64,
        ) as $out
      }
    }
  };
}
