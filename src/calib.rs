//! Automatic bias calibration.
//!
//! The sensor must rest still with its Z axis pointing up. The routine reads
//! a fixed number of raw accel/gyro sample pairs, throws away the first
//! `warmup` of them while the on-chip filters settle, and averages the rest.
//! The accelerometer Z mean has one g removed so that gravity is not
//! mistaken for an offset.
//!
//! # Examples
//!
//! ```no_run
//! # fn example<T: mpu6050::transport::Transport>(mut imu: mpu6050::Mpu6050<T>) -> Result<(), mpu6050::Error<T::Error>> {
//! use mpu6050::Config;
//!
//! imu.set_config(Config::default());
//! imu.apply_config()?;
//!
//! // Blocks for about 1100 sample pairs.
//! let biases = imu.calibrate()?;
//! let accel = imu.read_accel_scaled()?;
//! # Ok(())
//! # }
//! ```

use crate::{defs::*, offset::Biases, transport::Transport, Error, Mpu6050, XYZ};

/// Samples discarded before averaging starts.
pub const WARMUP_SAMPLES: u16 = 100;
/// Samples averaged into each bias.
pub const CALIBRATION_SAMPLES: u16 = 1000;

/// Sample counts for [`Mpu6050::calibrate_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationParams {
  pub warmup: u16,
  /// Must be non-zero.
  pub samples: u16,
}

impl Default for CalibrationParams {
  fn default() -> Self {
    Self { warmup: WARMUP_SAMPLES, samples: CALIBRATION_SAMPLES }
  }
}

impl<T: Transport> Mpu6050<T> {
  /// Estimate and store both biases using the default sample counts.
  pub fn calibrate(&mut self) -> Result<Biases, Error<T::Error>> {
    self.calibrate_with(CalibrationParams::default())
  }

  /// Estimate and store both biases.
  ///
  /// Performs exactly `warmup + samples` accel/gyro read pairs. Raw samples
  /// are used, so whatever bias is currently stored has no influence.
  ///
  /// A bus error aborts the run and is returned; the stored biases are then
  /// left as they were.
  pub fn calibrate_with(&mut self, params: CalibrationParams) -> Result<Biases, Error<T::Error>> {
    let lsb_per_g = (1.0 / self.state()?.accel_scale) as i64;
    if params.samples == 0 {
      return Err(Error::InvalidArgument);
    }
    debug!("mpu6050: calibrating, warmup={} samples={}", params.warmup, params.samples);

    let mut estimator = BiasEstimator::new(params);
    while estimator.phase() != Phase::Done {
      let (accel, gyro) = match self.read_sample() {
        Ok(sample) => sample,
        Err(e) => {
          warn!("mpu6050: calibration aborted at cycle {}", estimator.index);
          return Err(e);
        }
      };
      estimator.push(accel, gyro);
    }

    let biases = estimator.finish(lsb_per_g).ok_or(Error::InvalidArgument)?;
    let cfg = &mut self.state_mut()?.config;
    cfg.accel_bias = biases.accel;
    cfg.gyro_bias = biases.gyro;

    debug!("mpu6050: calibrated accel={} gyro={}", biases.accel, biases.gyro);
    Ok(biases)
  }

  fn read_sample(&mut self) -> Result<(XYZ, XYZ), Error<T::Error>> {
    let accel = self.read_xyz(Reg::AccelXoutH)?;
    let gyro = self.read_xyz(Reg::GyroXoutH)?;
    Ok((accel, gyro))
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
  WarmUp,
  Accumulate,
  Done,
}

/// Running sums over a fixed-length sample sequence.
#[derive(Debug, Clone)]
pub(crate) struct BiasEstimator {
  params: CalibrationParams,
  index: u32,
  accel: [i64; 3],
  gyro: [i64; 3],
}

impl BiasEstimator {
  pub(crate) fn new(params: CalibrationParams) -> Self {
    Self { params, index: 0, accel: [0; 3], gyro: [0; 3] }
  }

  pub(crate) fn phase(&self) -> Phase {
    let warmup = u32::from(self.params.warmup);
    if self.index < warmup {
      Phase::WarmUp
    } else if self.index < warmup + u32::from(self.params.samples) {
      Phase::Accumulate
    } else {
      Phase::Done
    }
  }

  /// Feed one sample pair. Ignored once the sequence is complete.
  pub(crate) fn push(&mut self, accel: XYZ, gyro: XYZ) {
    match self.phase() {
      Phase::WarmUp => {}
      Phase::Accumulate => {
        add(&mut self.accel, accel);
        add(&mut self.gyro, gyro);
      }
      Phase::Done => return,
    }
    self.index += 1;
  }

  /// Per-axis means, truncated toward zero, with one g (`lsb_per_g`) taken
  /// off accel Z. `None` until every sample has been pushed.
  pub(crate) fn finish(&self, lsb_per_g: i64) -> Option<Biases> {
    let n = i64::from(self.params.samples);
    if self.phase() != Phase::Done || n == 0 {
      return None;
    }
    let [ax, ay, az] = self.accel.map(|sum| sum / n);
    let [gx, gy, gz] = self.gyro.map(|sum| sum / n);
    Some(Biases {
      accel: XYZ::new(saturate(ax), saturate(ay), saturate(az - lsb_per_g)),
      gyro: XYZ::new(saturate(gx), saturate(gy), saturate(gz)),
    })
  }
}

fn add(sums: &mut [i64; 3], v: XYZ) {
  sums[0] += i64::from(v.x);
  sums[1] += i64::from(v.y);
  sums[2] += i64::from(v.z);
}

fn saturate(v: i64) -> i16 {
  v.clamp(i64::from(i16::MIN), i64::from(i16::MAX)) as i16
}
