#![no_std]
#![doc = include_str!("../README.md")]
//!
//! ## Design Principles
//!
//! - **Type-safe**: Strongly-typed configuration with closed range selectors
//! - **Blocking**: Every call runs to completion on the caller's thread
//! - **Transport-agnostic**: Bus access goes through the [`transport::Transport`] trait,
//!   with a ready-made adapter for `embedded-hal` I2C
//! - **Allocation-free**: Fixed-size register buffers only
//!
//! ## Module Organization
//!
//! - [`config`]: Device configuration and hardware programming
//! - [`accel`]: Accelerometer range and data reading
//! - [`gyro`]: Gyroscope range and data reading
//! - [`interrupt`]: Interrupt pin and enable registers
//! - [`offset`]: Bias storage
//! - [`calib`]: Automatic bias calibration
//! - [`transport`]: Bus abstraction and the I2C adapter
//!
//! ## Basic Usage
//!
//! ```no_run
//! # fn example<I, D>(i2c: I, delay: D) -> Result<(), mpu6050::Error<I::Error>>
//! # where I: embedded_hal::i2c::I2c, D: embedded_hal::delay::DelayNs {
//! use mpu6050::{transport::Address, Config, Mpu6050};
//!
//! let mut imu = Mpu6050::new_i2c(i2c, delay, Address::Ad0Low);
//!
//! // Store the configuration, then program the chip
//! imu.set_config(Config::default());
//! imu.apply_config()?;
//!
//! // Estimate biases while the sensor rests flat, then read scaled data
//! imu.calibrate()?;
//! let accel = imu.read_accel_scaled()?;
//! let gyro = imu.read_gyro_scaled()?;
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod fmt;

pub mod accel;
pub mod calib;
pub mod config;
mod defs;
pub mod gyro;
pub mod interrupt;
pub mod offset;
pub(crate) mod rw;
pub mod transport;
mod types;

pub use calib::CalibrationParams;
pub use config::Config;
use defs::*;
pub use offset::Biases;
pub use types::*;

/// Driver error type.
///
/// Wraps the transport error and adds the driver's own argument checks.
/// Argument checks always run before any bus access.
#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
  /// Transport failure, passed through unchanged
  Bus(E),
  /// The driver holds no configuration yet; call [`Mpu6050::set_config`] first
  InvalidHandle,
  /// An argument or register value is out of range
  InvalidArgument,
}

/// MPU6050 device driver instance.
///
/// Owns the transport for its whole lifetime. A fresh driver is empty: every
/// operation except [`set_config`](Self::set_config) and
/// [`release`](Self::release) fails with [`Error::InvalidHandle`] until a
/// configuration has been stored.
///
/// Methods take `&mut self`; to share one sensor between threads, wrap the
/// driver in a mutex.
///
/// # Type Parameters
///
/// - `T`: bus transport (must implement [`transport::Transport`])
pub struct Mpu6050<T> {
  transport: T,
  state: Option<State>,
}

/// Stored configuration plus the scale factors derived from it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct State {
  pub config: Config,
  pub accel_scale: f32,
  pub gyro_scale: f32,
}

impl<T: transport::Transport> Mpu6050<T> {
  /// Create an empty driver over `transport`.
  pub fn new(transport: T) -> Self {
    Self { transport, state: None }
  }

  /// Create a driver and store `cfg` right away. The device is not touched.
  pub fn with_config(transport: T, cfg: Config) -> Self {
    let mut imu = Self::new(transport);
    imu.set_config(cfg);
    imu
  }

  /// Drop the driver state and hand back the transport.
  pub fn release(self) -> T {
    self.transport
  }

  pub(crate) fn state(&self) -> Result<&State, Error<T::Error>> {
    self.state.as_ref().ok_or(Error::InvalidHandle)
  }

  pub(crate) fn state_mut(&mut self) -> Result<&mut State, Error<T::Error>> {
    self.state.as_mut().ok_or(Error::InvalidHandle)
  }

  /// Read the `WHO_AM_I` register.
  ///
  /// Returns the device identity (should be `0x68` for the MPU6050,
  /// regardless of the AD0 pin).
  pub fn get_id(&mut self) -> Result<u8, Error<T::Error>> {
    self.state()?;
    self.read_u8(Reg::WhoAmI)
  }

  /// `true` if `WHO_AM_I` matches the MPU6050.
  pub fn is_mpu6050(&mut self) -> Result<bool, Error<T::Error>> {
    Ok(self.get_id()? == MPU6050_WHO_AM_I)
  }

  // -----------------
  // Misc. data reads
  // -----------------
  /// Read the raw die temperature (signed, big-endian).
  pub fn read_temperature_raw(&mut self) -> Result<i16, Error<T::Error>> {
    self.state()?;
    self.read_i16(Reg::TempOutH)
  }

  /// Read the die temperature in °C (`raw / 340 + 36.53`).
  pub fn read_temperature(&mut self) -> Result<f32, Error<T::Error>> {
    Ok(f32::from(self.read_temperature_raw()?) / 340.0 + 36.53)
  }
}
