#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Reg {
  SmplrtDiv = 0x19,
  Config = 0x1A,
  GyroConfig = 0x1B,
  AccelConfig = 0x1C,
  IntPinCfg = 0x37,
  IntEnable = 0x38,
  AccelXoutH = 0x3B,
  TempOutH = 0x41,
  GyroXoutH = 0x43,
  PwrMgmt1 = 0x6B,
  WhoAmI = 0x75,
}

impl From<Reg> for u8 {
  #[inline]
  fn from(r: Reg) -> Self {
    r as u8
  }
}

// Constants used across the crate
pub(crate) const MPU6050_WHO_AM_I: u8 = 0x68;
pub(crate) const DEVICE_RESET: u8 = 0x80;
pub(crate) const RESET_DELAY_MS: u32 = 10; // settle time after PWR_MGMT_1 writes

// Full-scale ranges map onto the signed 16-bit output span.
pub(crate) const LSB_SPAN: f32 = 32768.0;

// I2C addresses
pub(crate) const ADDR_AD0_LOW: u8 = 0x68;
pub(crate) const ADDR_AD0_HIGH: u8 = 0x69;
