//! Device configuration and hardware programming.
//!
//! A [`Config`] is first stored with [`Mpu6050::set_config`], which also
//! derives the scale factors, and then written to the sensor with
//! [`Mpu6050::apply_config`].
//!
//! # Examples
//!
//! ```no_run
//! # fn example<T: mpu6050::transport::Transport>(mut imu: mpu6050::Mpu6050<T>) -> Result<(), mpu6050::Error<T::Error>> {
//! use mpu6050::{accel::AccelRange, gyro::GyroRange, ClockSource, Config, DlpfBandwidth};
//!
//! let config = Config {
//!     clock: ClockSource::PllZGyro,
//!     dlpf: DlpfBandwidth::Hz21,
//!     gyro_range: GyroRange::DPS1000,
//!     accel_range: AccelRange::G8,
//!     ..Default::default()
//! };
//! imu.set_config(config);
//! imu.apply_config()?;
//! # Ok(())
//! # }
//! ```

use crate::{
  accel::{AccelConfigReg, AccelRange},
  defs::*,
  gyro::{GyroConfigReg, GyroRange},
  interrupt::{IntEnable, IntPinConfig},
  transport::Transport,
  ClockSource, DlpfBandwidth, Error, Mpu6050, SleepMode, State, XYZ,
};

/// Operating parameters of the sensor.
///
/// Clock source and filter bandwidth are not checked against each other;
/// the device decides what it accepts.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
  pub clock: ClockSource,
  pub dlpf: DlpfBandwidth,
  pub sleep: SleepMode,
  pub gyro_range: GyroRange,
  pub accel_range: AccelRange,
  /// Initial accelerometer bias, raw LSB.
  pub accel_bias: XYZ,
  /// Initial gyroscope bias, raw LSB.
  pub gyro_bias: XYZ,
  /// Sample rate = gyro output rate / (1 + divider).
  pub sample_rate_divider: u8,
  pub int_pin: IntPinConfig,
  pub int_enable: IntEnable,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      clock: ClockSource::PllXGyro,
      dlpf: DlpfBandwidth::Hz44,
      sleep: SleepMode::Disabled,
      gyro_range: GyroRange::DPS250,
      accel_range: AccelRange::G2,
      accel_bias: XYZ::default(),
      gyro_bias: XYZ::default(),
      sample_rate_divider: 4,
      int_pin: IntPinConfig::default(),
      int_enable: IntEnable::default(),
    }
  }
}

impl<T: Transport> Mpu6050<T> {
  /// Store `cfg` and derive the accel/gyro scale factors from its ranges.
  ///
  /// All fields are replaced together, including both biases. Nothing is
  /// written to the device until [`apply_config`](Self::apply_config).
  pub fn set_config(&mut self, cfg: Config) {
    self.state = Some(State {
      config: cfg,
      accel_scale: cfg.accel_range.multiplier(),
      gyro_scale: cfg.gyro_range.multiplier(),
    });
  }

  /// The stored configuration, with biases as currently held by the driver.
  pub fn config(&self) -> Result<&Config, Error<T::Error>> {
    Ok(&self.state()?.config)
  }

  /// Reset the device and program it from the stored configuration.
  ///
  /// The reset always comes first. A bus error stops the sequence where it
  /// happened and is returned as is; the device is then partially
  /// programmed and the whole call has to be repeated.
  pub fn apply_config(&mut self) -> Result<(), Error<T::Error>> {
    let cfg = self.state()?.config;
    debug!("mpu6050: applying config");

    self.write_u8(Reg::PwrMgmt1, DEVICE_RESET)?;
    self.transport.delay_ms(RESET_DELAY_MS);

    self.write(Reg::PwrMgmt1, PowerManagement1 { clock: cfg.clock, sleep: cfg.sleep })?;
    self.transport.delay_ms(RESET_DELAY_MS);

    self.write(Reg::Config, DlpfConfigReg { dlpf: cfg.dlpf })?;
    self.write(Reg::GyroConfig, GyroConfigReg { range: cfg.gyro_range })?;
    self.write(Reg::AccelConfig, AccelConfigReg { range: cfg.accel_range })?;
    self.write_u8(Reg::SmplrtDiv, cfg.sample_rate_divider)?;
    self.write(Reg::IntPinCfg, cfg.int_pin)?;
    self.write(Reg::IntEnable, cfg.int_enable)?;

    debug!("mpu6050: config applied");
    Ok(())
  }
}

/// `PWR_MGMT_1` register without the reset bit. Cycle and temperature
/// disable are left cleared.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[packbits::pack(bytes = 1)]
struct PowerManagement1 {
  #[bits(3)]
  pub clock: ClockSource,
  #[skip(3)]
  #[bits(1)]
  pub sleep: SleepMode,
}

/// `CONFIG` register. External frame sync stays disabled.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[packbits::pack(bytes = 1)]
struct DlpfConfigReg {
  #[bits(3)]
  pub dlpf: DlpfBandwidth,
}
