//! Gyroscope range selection and data reading.
//!
//! # Examples
//!
//! ```no_run
//! # fn example<T: mpu6050::transport::Transport>(mut imu: mpu6050::Mpu6050<T>) -> Result<(), mpu6050::Error<T::Error>> {
//! use mpu6050::{gyro::GyroRange, Config};
//!
//! imu.set_config(Config { gyro_range: GyroRange::DPS500, ..Default::default() });
//! imu.apply_config()?;
//!
//! // Read gyroscope data in degrees per second
//! let gyro = imu.read_gyro_scaled()?;
//! # Ok(())
//! # }
//! ```

use micromath::vector::Vector3d;

use super::{defs::*, transport::Transport, Error, Mpu6050};

impl<T: Transport> Mpu6050<T> {
  /// Read raw gyroscope data (16-bit signed integers).
  pub fn read_gyro_raw(&mut self) -> Result<Vector3d<i16>, Error<T::Error>> {
    self.state()?;
    Ok(self.read_xyz(Reg::GyroXoutH)?.into())
  }

  /// Read raw gyroscope data minus the stored gyroscope bias (wrapping).
  pub fn read_gyro_calibrated(&mut self) -> Result<Vector3d<i16>, Error<T::Error>> {
    let bias = self.state()?.config.gyro_bias;
    Ok(self.read_xyz(Reg::GyroXoutH)?.wrapping_sub(bias).into())
  }

  /// Read calibrated gyroscope data scaled to degrees per second (°/s).
  pub fn read_gyro_scaled(&mut self) -> Result<Vector3d<f32>, Error<T::Error>> {
    let state = self.state()?;
    let (bias, factor) = (state.config.gyro_bias, state.gyro_scale);
    Ok(self.read_xyz(Reg::GyroXoutH)?.scaled_sub(bias, factor))
  }

  /// °/s per LSB for the configured range.
  pub fn gyro_scale_factor(&self) -> Result<f32, Error<T::Error>> {
    Ok(self.state()?.gyro_scale)
  }
}

/// `GYRO_CONFIG` register. Self-test bits are left cleared.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[packbits::pack(bytes = 1)]
pub(crate) struct GyroConfigReg {
  #[skip(3)]
  #[bits(2)]
  pub range: GyroRange,
}

/// Gyroscope measurement ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroRange {
  /// ±250 degrees per second
  DPS250 = 0,
  /// ±500 degrees per second
  DPS500 = 1,
  /// ±1000 degrees per second
  DPS1000 = 2,
  /// ±2000 degrees per second
  DPS2000 = 3,
}

impl GyroRange {
  pub fn dps(&self) -> f32 {
    match self {
      GyroRange::DPS250 => 250.0,
      GyroRange::DPS500 => 500.0,
      GyroRange::DPS1000 => 1000.0,
      GyroRange::DPS2000 => 2000.0,
    }
  }

  /// °/s per LSB.
  pub fn multiplier(&self) -> f32 {
    self.dps() / LSB_SPAN
  }
}

impl From<GyroRange> for u8 {
  fn from(value: GyroRange) -> Self {
    value as u8
  }
}

impl TryFrom<u8> for GyroRange {
  type Error = ();

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      0 => Ok(GyroRange::DPS250),
      1 => Ok(GyroRange::DPS500),
      2 => Ok(GyroRange::DPS1000),
      3 => Ok(GyroRange::DPS2000),
      _ => Err(()),
    }
  }
}
