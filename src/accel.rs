//! Accelerometer range selection and data reading.
//!
//! # Examples
//!
//! ```no_run
//! # fn example<T: mpu6050::transport::Transport>(mut imu: mpu6050::Mpu6050<T>) -> Result<(), mpu6050::Error<T::Error>> {
//! use mpu6050::{accel::AccelRange, Config};
//!
//! imu.set_config(Config { accel_range: AccelRange::G4, ..Default::default() });
//! imu.apply_config()?;
//!
//! // Read acceleration data in g units
//! let accel = imu.read_accel_scaled()?;
//! # Ok(())
//! # }
//! ```

use micromath::vector::Vector3d;

use super::{defs::*, transport::Transport, Error, Mpu6050};

impl<T: Transport> Mpu6050<T> {
  /// Read raw accelerometer data (16-bit signed integers).
  ///
  /// Use [`read_accel_calibrated`](Self::read_accel_calibrated) to subtract
  /// the stored bias, or [`read_accel_scaled`](Self::read_accel_scaled) to
  /// get g units.
  pub fn read_accel_raw(&mut self) -> Result<Vector3d<i16>, Error<T::Error>> {
    self.state()?;
    Ok(self.read_xyz(Reg::AccelXoutH)?.into())
  }

  /// Read raw accelerometer data minus the stored accelerometer bias.
  ///
  /// The subtraction wraps at the 16-bit boundary, so biases should come
  /// from [`calibrate`](Self::calibrate) or another plausible source.
  pub fn read_accel_calibrated(&mut self) -> Result<Vector3d<i16>, Error<T::Error>> {
    let bias = self.state()?.config.accel_bias;
    Ok(self.read_xyz(Reg::AccelXoutH)?.wrapping_sub(bias).into())
  }

  /// Read calibrated accelerometer data scaled to g units.
  ///
  /// Unlike [`read_accel_calibrated`](Self::read_accel_calibrated), the bias
  /// is subtracted without 16-bit wrapping.
  pub fn read_accel_scaled(&mut self) -> Result<Vector3d<f32>, Error<T::Error>> {
    let state = self.state()?;
    let (bias, factor) = (state.config.accel_bias, state.accel_scale);
    Ok(self.read_xyz(Reg::AccelXoutH)?.scaled_sub(bias, factor))
  }

  /// g per LSB for the configured range.
  pub fn accel_scale_factor(&self) -> Result<f32, Error<T::Error>> {
    Ok(self.state()?.accel_scale)
  }
}

/// `ACCEL_CONFIG` register. Self-test bits are left cleared.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[packbits::pack(bytes = 1)]
pub(crate) struct AccelConfigReg {
  #[skip(3)]
  #[bits(2)]
  pub range: AccelRange,
}

/// Accelerometer full-scale range.
///
/// Higher ranges allow measuring stronger accelerations with lower
/// resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelRange {
  /// ±2g range
  G2 = 0x00,
  /// ±4g range
  G4 = 0x01,
  /// ±8g range
  G8 = 0x02,
  /// ±16g range
  G16 = 0x03,
}

impl AccelRange {
  pub fn g(self) -> f32 {
    match self {
      AccelRange::G2 => 2.0,
      AccelRange::G4 => 4.0,
      AccelRange::G8 => 8.0,
      AccelRange::G16 => 16.0,
    }
  }

  /// g per LSB.
  pub fn multiplier(self) -> f32 {
    self.g() / LSB_SPAN
  }
}

impl From<AccelRange> for u8 {
  fn from(value: AccelRange) -> Self {
    value as u8
  }
}

impl TryFrom<u8> for AccelRange {
  type Error = ();

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      0x00 => Ok(AccelRange::G2),
      0x01 => Ok(AccelRange::G4),
      0x02 => Ok(AccelRange::G8),
      0x03 => Ok(AccelRange::G16),
      _ => Err(()),
    }
  }
}
