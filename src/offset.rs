//! Bias storage.
//!
//! Biases live in the driver only; nothing here touches the bus. They are
//! lost when the driver is dropped, so persist them yourself if needed.

use crate::{transport::Transport, Error, Mpu6050, XYZ};

/// Accelerometer and gyroscope biases, raw LSB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Biases {
  pub accel: XYZ,
  pub gyro: XYZ,
}

impl<T: Transport> Mpu6050<T> {
  pub fn get_accel_bias(&self) -> Result<XYZ, Error<T::Error>> {
    Ok(self.state()?.config.accel_bias)
  }

  pub fn set_accel_bias(&mut self, bias: XYZ) -> Result<(), Error<T::Error>> {
    self.state_mut()?.config.accel_bias = bias;
    Ok(())
  }

  pub fn get_gyro_bias(&self) -> Result<XYZ, Error<T::Error>> {
    Ok(self.state()?.config.gyro_bias)
  }

  pub fn set_gyro_bias(&mut self, bias: XYZ) -> Result<(), Error<T::Error>> {
    self.state_mut()?.config.gyro_bias = bias;
    Ok(())
  }

  /// Both biases at once.
  pub fn biases(&self) -> Result<Biases, Error<T::Error>> {
    let cfg = &self.state()?.config;
    Ok(Biases { accel: cfg.accel_bias, gyro: cfg.gyro_bias })
  }
}
