//! Recording mock transport shared by the integration tests.
#![allow(dead_code)]

use mpu6050::transport::Transport;

pub const PWR_MGMT_1: u8 = 0x6B;
pub const CONFIG: u8 = 0x1A;
pub const GYRO_CONFIG: u8 = 0x1B;
pub const ACCEL_CONFIG: u8 = 0x1C;
pub const SMPLRT_DIV: u8 = 0x19;
pub const INT_PIN_CFG: u8 = 0x37;
pub const INT_ENABLE: u8 = 0x38;
pub const ACCEL_XOUT_H: u8 = 0x3B;
pub const TEMP_OUT_H: u8 = 0x41;
pub const GYRO_XOUT_H: u8 = 0x43;
pub const WHO_AM_I: u8 = 0x75;

/// One transport call, as seen by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
  Send { reg: u8, data: Vec<u8> },
  Receive { reg: u8, len: usize },
  Delay(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

/// Records every call and serves fixed register contents.
#[derive(Debug, Default)]
pub struct MockTransport {
  pub ops: Vec<Op>,
  pub accel: [u8; 6],
  pub gyro: [u8; 6],
  pub temp: [u8; 2],
  pub who_am_i: u8,
  /// Fail the send with this index (0-based, counting sends only).
  pub fail_send_at: Option<usize>,
  /// Fail the receive with this index (0-based, counting receives only).
  pub fail_receive_at: Option<usize>,
  sends: usize,
  receives: usize,
}

impl MockTransport {
  pub fn new() -> Self {
    Self { who_am_i: 0x68, ..Default::default() }
  }

  pub fn with_samples(accel: [i16; 3], gyro: [i16; 3]) -> Self {
    Self { accel: encode(accel), gyro: encode(gyro), ..Self::new() }
  }

  pub fn sends(&self) -> Vec<(u8, Vec<u8>)> {
    self
      .ops
      .iter()
      .filter_map(|op| match op {
        Op::Send { reg, data } => Some((*reg, data.clone())),
        _ => None,
      })
      .collect()
  }

  pub fn receives_from(&self, register: u8) -> usize {
    self.ops.iter().filter(|op| matches!(op, Op::Receive { reg, .. } if *reg == register)).count()
  }
}

/// Big-endian register image of an axis triple.
pub fn encode(v: [i16; 3]) -> [u8; 6] {
  let mut b = [0u8; 6];
  for (i, axis) in v.iter().enumerate() {
    b[i * 2..i * 2 + 2].copy_from_slice(&axis.to_be_bytes());
  }
  b
}

impl Transport for MockTransport {
  type Error = MockError;

  fn send(&mut self, register: u8, bytes: &[u8]) -> Result<(), Self::Error> {
    let index = self.sends;
    self.sends += 1;
    self.ops.push(Op::Send { reg: register, data: bytes.to_vec() });
    if self.fail_send_at == Some(index) {
      return Err(MockError);
    }
    Ok(())
  }

  fn receive(&mut self, register: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
    let index = self.receives;
    self.receives += 1;
    self.ops.push(Op::Receive { reg: register, len: buffer.len() });
    if self.fail_receive_at == Some(index) {
      return Err(MockError);
    }
    match register {
      ACCEL_XOUT_H => buffer.copy_from_slice(&self.accel[..buffer.len()]),
      GYRO_XOUT_H => buffer.copy_from_slice(&self.gyro[..buffer.len()]),
      TEMP_OUT_H => buffer.copy_from_slice(&self.temp[..buffer.len()]),
      WHO_AM_I => buffer[0] = self.who_am_i,
      _ => buffer.fill(0),
    }
    Ok(())
  }

  fn delay_ms(&mut self, ms: u32) {
    self.ops.push(Op::Delay(ms));
  }
}
