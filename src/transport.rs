//! Bus transport abstraction.
//!
//! The driver never talks to a bus directly. Everything goes through the
//! [`Transport`] trait, which exposes the three capabilities the MPU6050
//! needs: register writes, register reads and a blocking millisecond delay.
//!
//! [`I2cTransport`] implements it for any blocking `embedded-hal` I2C bus.
//!
//! # Examples
//!
//! ```no_run
//! # fn example<I, D>(i2c: I, delay: D)
//! # where I: embedded_hal::i2c::I2c, D: embedded_hal::delay::DelayNs {
//! use mpu6050::{transport::Address, Config, Mpu6050};
//!
//! let mut imu = Mpu6050::new_i2c(i2c, delay, Address::Ad0Low);
//! imu.set_config(Config::default());
//! imu.apply_config().unwrap();
//! # }
//! ```

use embedded_hal::{delay::DelayNs, i2c::*};

use crate::{defs::*, Mpu6050};

/// Register-level access to the sensor.
///
/// Implementations own timing and retries. The driver propagates `Error`
/// unchanged and never retries on its own.
pub trait Transport {
  type Error;

  /// Write `bytes` starting at `register`, as a single bus transfer of any
  /// length.
  fn send(&mut self, register: u8, bytes: &[u8]) -> Result<(), Self::Error>;

  /// Fill `buffer` starting at `register`.
  fn receive(&mut self, register: u8, buffer: &mut [u8]) -> Result<(), Self::Error>;

  /// Block the calling thread for `ms` milliseconds.
  fn delay_ms(&mut self, ms: u32);
}

/// 7-bit I2C address, selected by the AD0 pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Address {
  /// AD0 tied low (`0x68`)
  #[default]
  Ad0Low,
  /// AD0 tied high (`0x69`)
  Ad0High,
}

impl From<Address> for u8 {
  fn from(value: Address) -> Self {
    match value {
      Address::Ad0Low => ADDR_AD0_LOW,
      Address::Ad0High => ADDR_AD0_HIGH,
    }
  }
}

/// [`Transport`] over a blocking `embedded-hal` I2C bus and delay provider.
///
/// Writes are framed as `[register, bytes..]` without copying the payload,
/// so `send` has no length limit.
pub struct I2cTransport<I, D> {
  i2c: I,
  delay: D,
  address: u8,
}

impl<I, D> I2cTransport<I, D>
where
  I: I2c<SevenBitAddress>,
  D: DelayNs,
{
  pub fn new(i2c: I, delay: D, address: Address) -> Self {
    Self { i2c, delay, address: address.into() }
  }

  /// Give back the bus and the delay provider.
  pub fn release(self) -> (I, D) {
    (self.i2c, self.delay)
  }
}

impl<I, D> Transport for I2cTransport<I, D>
where
  I: I2c<SevenBitAddress>,
  D: DelayNs,
{
  type Error = I::Error;

  fn send(&mut self, register: u8, bytes: &[u8]) -> Result<(), Self::Error> {
    // Adjacent writes go out as one frame with no repeated start.
    self.i2c.transaction(self.address, &mut [Operation::Write(&[register]), Operation::Write(bytes)])
  }

  fn receive(&mut self, register: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
    self.i2c.write_read(self.address, &[register], buffer)
  }

  fn delay_ms(&mut self, ms: u32) {
    self.delay.delay_ms(ms);
  }
}

impl<I, D> Mpu6050<I2cTransport<I, D>>
where
  I: I2c<SevenBitAddress>,
  D: DelayNs,
{
  /// Create an unconfigured driver talking over I2C.
  pub fn new_i2c(i2c: I, delay: D, address: Address) -> Self {
    Self::new(I2cTransport::new(i2c, delay, address))
  }
}
