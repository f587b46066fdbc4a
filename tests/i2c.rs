use embedded_hal::{
  delay::DelayNs,
  i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation, SevenBitAddress},
};
use micromath::vector::Vector3d;
use mpu6050::{
  transport::{Address, I2cTransport, Transport},
  Config, Error, Mpu6050,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Transaction {
  Write { addr: u8, data: Vec<u8> },
  WriteRead { addr: u8, write: Vec<u8>, read_len: usize },
}

/// Answers every read with `response`, records each transaction.
#[derive(Default)]
struct MockI2c {
  transactions: Vec<Transaction>,
  response: Vec<u8>,
  nack: bool,
}

impl ErrorType for MockI2c {
  type Error = ErrorKind;
}

impl I2c<SevenBitAddress> for MockI2c {
  fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
    if self.nack {
      return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
    }
    let mut written = Vec::new();
    let mut read_len = None;
    for op in operations.iter_mut() {
      match op {
        Operation::Write(bytes) => written.extend_from_slice(bytes),
        Operation::Read(buf) => {
          buf.copy_from_slice(&self.response[..buf.len()]);
          read_len = Some(buf.len());
        }
      }
    }
    self.transactions.push(match read_len {
      Some(read_len) => Transaction::WriteRead { addr: address, write: written, read_len },
      None => Transaction::Write { addr: address, data: written },
    });
    Ok(())
  }
}

#[derive(Default)]
struct MockDelay {
  total_ns: u64,
}

impl DelayNs for MockDelay {
  fn delay_ns(&mut self, ns: u32) {
    self.total_ns += u64::from(ns);
  }
}

#[test]
fn register_writes_prefix_the_register_address() {
  let mut imu = Mpu6050::new_i2c(MockI2c::default(), MockDelay::default(), Address::Ad0Low);
  imu.set_config(Config::default());
  imu.apply_config().unwrap();

  let (i2c, delay) = imu.release().release();
  assert_eq!(i2c.transactions.len(), 8);
  assert_eq!(i2c.transactions[0], Transaction::Write { addr: 0x68, data: vec![0x6B, 0x80] });
  assert_eq!(i2c.transactions[7], Transaction::Write { addr: 0x68, data: vec![0x38, 0x01] });
  assert_eq!(delay.total_ns, 20_000_000);
}

#[test]
fn long_writes_are_sent_as_one_frame() {
  let mut transport = I2cTransport::new(MockI2c::default(), MockDelay::default(), Address::Ad0Low);
  let payload: Vec<u8> = (0..40).collect();
  transport.send(0x13, &payload).unwrap();

  let (i2c, _) = transport.release();
  let mut expected = vec![0x13];
  expected.extend_from_slice(&payload);
  assert_eq!(i2c.transactions, vec![Transaction::Write { addr: 0x68, data: expected }]);
}

#[test]
fn sample_reads_use_write_read_at_selected_address() {
  let i2c = MockI2c { response: vec![0x00, 0x10, 0xFF, 0xF0, 0x40, 0x00], ..Default::default() };
  let mut imu = Mpu6050::new_i2c(i2c, MockDelay::default(), Address::Ad0High);
  imu.set_config(Config::default());

  assert_eq!(imu.read_gyro_raw().unwrap(), Vector3d { x: 16, y: -16, z: 16384 });

  let (i2c, _) = imu.release().release();
  assert_eq!(i2c.transactions, vec![Transaction::WriteRead { addr: 0x69, write: vec![0x43], read_len: 6 }]);
}

#[test]
fn bus_errors_surface_as_bus_variant() {
  let i2c = MockI2c { nack: true, ..Default::default() };
  let mut imu = Mpu6050::new_i2c(i2c, MockDelay::default(), Address::default());
  imu.set_config(Config::default());

  assert!(matches!(
    imu.read_accel_raw(),
    Err(Error::Bus(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)))
  ));
}
