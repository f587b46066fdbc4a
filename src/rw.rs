use crate::{defs::Reg, transport::Transport, Error, Mpu6050, XYZ};

impl<T: Transport> Mpu6050<T> {
  pub(crate) fn read_bytes(&mut self, reg: Reg, buf: &mut [u8]) -> Result<(), Error<T::Error>> {
    self.transport.receive(reg.into(), buf).map_err(Error::Bus)
  }

  pub(crate) fn read_u8(&mut self, reg: Reg) -> Result<u8, Error<T::Error>> {
    let mut b = [0u8; 1];
    self.read_bytes(reg, &mut b)?;
    Ok(b[0])
  }

  pub(crate) fn read_i16(&mut self, reg: Reg) -> Result<i16, Error<T::Error>> {
    let mut b = [0u8; 2];
    self.read_bytes(reg, &mut b)?;
    // Sensor registers are big-endian (high byte first).
    Ok(i16::from_be_bytes(b))
  }

  /// One 6-byte burst starting at an `*_XOUT_H` register.
  pub(crate) fn read_xyz(&mut self, reg: Reg) -> Result<XYZ, Error<T::Error>> {
    let mut b = [0u8; 6];
    self.read_bytes(reg, &mut b)?;
    Ok(XYZ::from(b))
  }

  pub(crate) fn write<const N: usize, V: TryInto<[u8; N]>>(&mut self, reg: Reg, v: V) -> Result<(), Error<T::Error>> {
    let b = v.try_into().map_err(|_| Error::InvalidArgument)?;
    self.write_bytes(reg, &b)
  }

  pub(crate) fn write_u8(&mut self, reg: Reg, value: u8) -> Result<(), Error<T::Error>> {
    self.write_bytes(reg, &[value])
  }

  pub(crate) fn write_bytes(&mut self, reg: Reg, data: &[u8]) -> Result<(), Error<T::Error>> {
    self.transport.send(reg.into(), data).map_err(Error::Bus)
  }
}
