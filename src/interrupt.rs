//! Interrupt pin and interrupt enable registers.
//!
//! The driver only programs these during [`apply_config`](crate::Mpu6050::apply_config);
//! it never waits on the pin itself.

/// `INT_PIN_CFG` register.
///
/// The default (`0x22`) drives INT active-high push-pull, latches it until
/// the status is read, and enables I2C bypass so auxiliary chips behind the
/// MPU6050 are reachable from the host bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[packbits::pack(bytes = 1)]
pub struct IntPinConfig {
  /// Expose the auxiliary I2C bus on the host bus.
  #[skip(1)]
  #[bits(1)]
  pub i2c_bypass: bool,
  /// Clear interrupt status on any read, not only `INT_STATUS` reads.
  #[skip(2)]
  #[bits(1)]
  pub clear_on_any_read: bool,
  /// Hold INT until cleared instead of emitting a 50 µs pulse.
  #[bits(1)]
  pub latch: bool,
  #[bits(1)]
  pub open_drain: bool,
  #[bits(1)]
  pub active_low: bool,
}

impl Default for IntPinConfig {
  fn default() -> Self {
    Self { i2c_bypass: true, clear_on_any_read: false, latch: true, open_drain: false, active_low: false }
  }
}

/// `INT_ENABLE` register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[packbits::pack(bytes = 1)]
pub struct IntEnable {
  /// Raise INT when a new sample set is written to the data registers.
  #[bits(1)]
  pub data_ready: bool,
}

impl Default for IntEnable {
  fn default() -> Self {
    Self { data_ready: true }
  }
}
