//! Logging shims: forward to `defmt` when the feature is on, vanish otherwise.

#[cfg(feature = "defmt")]
macro_rules! debug {
  ($($arg:tt)*) => {{ ::defmt::debug!($($arg)*); }};
}

#[cfg(feature = "defmt")]
macro_rules! warn {
  ($($arg:tt)*) => {{ ::defmt::warn!($($arg)*); }};
}

#[cfg(not(feature = "defmt"))]
macro_rules! debug {
  ($($arg:tt)*) => {{}};
}

#[cfg(not(feature = "defmt"))]
macro_rules! warn {
  ($($arg:tt)*) => {{}};
}
