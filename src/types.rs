use micromath::vector::Vector3d;

/// Signed 16-bit axis triple in raw sensor units (LSB).
///
/// Used for raw samples on the wire and for stored biases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct XYZ {
  pub x: i16,
  pub y: i16,
  pub z: i16,
}

impl XYZ {
  pub const fn new(x: i16, y: i16, z: i16) -> Self {
    Self { x, y, z }
  }

  /// Component-wise `self - rhs`, wrapping at the 16-bit boundary.
  pub const fn wrapping_sub(self, rhs: XYZ) -> XYZ {
    XYZ { x: self.x.wrapping_sub(rhs.x), y: self.y.wrapping_sub(rhs.y), z: self.z.wrapping_sub(rhs.z) }
  }

  /// `(self - bias) * factor` per axis. The difference is taken in `i32`
  /// so it never wraps.
  pub(crate) fn scaled_sub(self, bias: XYZ, factor: f32) -> Vector3d<f32> {
    let axis = |v: i16, b: i16| (i32::from(v) - i32::from(b)) as f32 * factor;
    Vector3d { x: axis(self.x, bias.x), y: axis(self.y, bias.y), z: axis(self.z, bias.z) }
  }
}

/// Decode a 6-byte `XOUT_H..ZOUT_L` block. Each axis is big-endian two's complement.
impl From<[u8; 6]> for XYZ {
  fn from(b: [u8; 6]) -> Self {
    XYZ {
      x: i16::from_be_bytes([b[0], b[1]]),
      y: i16::from_be_bytes([b[2], b[3]]),
      z: i16::from_be_bytes([b[4], b[5]]),
    }
  }
}

impl From<XYZ> for Vector3d<i16> {
  fn from(v: XYZ) -> Self {
    Vector3d { x: v.x, y: v.y, z: v.z }
  }
}

/// Digital low-pass filter bandwidth (`CONFIG.DLPF_CFG`).
///
/// Variants name the accelerometer cutoff; the gyroscope cutoff is close to
/// it. Narrower bandwidth means less noise and more output latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DlpfBandwidth {
  /// Accel 260 Hz, gyro 256 Hz
  Hz260 = 0x00,
  /// Accel 184 Hz, gyro 188 Hz
  Hz184 = 0x01,
  /// Accel 94 Hz, gyro 98 Hz
  Hz94 = 0x02,
  /// Accel 44 Hz, gyro 42 Hz
  Hz44 = 0x03,
  /// Accel 21 Hz, gyro 20 Hz
  Hz21 = 0x04,
  /// Accel 10 Hz, gyro 10 Hz
  Hz10 = 0x05,
  /// Accel 5 Hz, gyro 5 Hz
  Hz5 = 0x06,
}

impl From<DlpfBandwidth> for u8 {
  fn from(value: DlpfBandwidth) -> Self {
    value as u8
  }
}

impl TryFrom<u8> for DlpfBandwidth {
  type Error = ();

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      0x00 => Ok(DlpfBandwidth::Hz260),
      0x01 => Ok(DlpfBandwidth::Hz184),
      0x02 => Ok(DlpfBandwidth::Hz94),
      0x03 => Ok(DlpfBandwidth::Hz44),
      0x04 => Ok(DlpfBandwidth::Hz21),
      0x05 => Ok(DlpfBandwidth::Hz10),
      0x06 => Ok(DlpfBandwidth::Hz5),
      _ => Err(()),
    }
  }
}

/// Clock source (`PWR_MGMT_1.CLKSEL`). Value 6 is reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockSource {
  /// Internal 8 MHz oscillator
  Internal8MHz = 0x00,
  /// PLL with X axis gyroscope reference
  PllXGyro = 0x01,
  /// PLL with Y axis gyroscope reference
  PllYGyro = 0x02,
  /// PLL with Z axis gyroscope reference
  PllZGyro = 0x03,
  /// PLL with external 32.768 kHz reference
  PllExternal32kHz = 0x04,
  /// PLL with external 19.2 MHz reference
  PllExternal19MHz = 0x05,
  /// Stops the clock and keeps the timing generator in reset
  Stopped = 0x07,
}

impl From<ClockSource> for u8 {
  fn from(value: ClockSource) -> Self {
    value as u8
  }
}

impl TryFrom<u8> for ClockSource {
  type Error = ();

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      0x00 => Ok(ClockSource::Internal8MHz),
      0x01 => Ok(ClockSource::PllXGyro),
      0x02 => Ok(ClockSource::PllYGyro),
      0x03 => Ok(ClockSource::PllZGyro),
      0x04 => Ok(ClockSource::PllExternal32kHz),
      0x05 => Ok(ClockSource::PllExternal19MHz),
      0x07 => Ok(ClockSource::Stopped),
      _ => Err(()),
    }
  }
}

/// Sleep mode (`PWR_MGMT_1.SLEEP`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SleepMode {
  Disabled = 0x00,
  LowPower = 0x01,
}

impl From<SleepMode> for u8 {
  fn from(value: SleepMode) -> Self {
    value as u8
  }
}

impl TryFrom<u8> for SleepMode {
  type Error = ();

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      0x00 => Ok(SleepMode::Disabled),
      0x01 => Ok(SleepMode::LowPower),
      _ => Err(()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decodes_big_endian_axes() {
    let xyz = XYZ::from([0x01, 0x00, 0xFF, 0xFF, 0x80, 0x00]);
    assert_eq!(xyz, XYZ::new(256, -1, i16::MIN));
  }

  #[test]
  fn wrapping_sub_wraps_at_extremes() {
    let raw = XYZ::new(i16::MIN, 100, 0);
    let bias = XYZ::new(1, 40, -5);
    assert_eq!(raw.wrapping_sub(bias), XYZ::new(i16::MAX, 60, 5));
  }

  #[test]
  fn scaled_sub_keeps_the_sign_at_extremes() {
    let v = XYZ::new(i16::MIN, i16::MAX, 0).scaled_sub(XYZ::new(1, -1, 0), 1.0);
    assert_eq!(v.x, -32769.0);
    assert_eq!(v.y, 32768.0);
    assert_eq!(v.z, 0.0);
  }

  #[test]
  fn selector_values_outside_the_variant_set_are_rejected() {
    assert_eq!(ClockSource::try_from(0x06), Err(()));
    assert_eq!(ClockSource::try_from(0x07), Ok(ClockSource::Stopped));
    assert_eq!(DlpfBandwidth::try_from(0x07), Err(()));
    assert_eq!(SleepMode::try_from(0x02), Err(()));
  }
}
