//! Platform-agnostic BMA222 accelerometer driver which uses I2C via
//! [embedded-hal] and implements the [`RawAccelerometer` trait][trait]
//! from the `accelerometer` crate.
//!
//! The BMA222 is an 8-bit part on a fixed ±2 g full scale; raw samples
//! are signed two's-complement counts. The driver never reconfigures
//! the device: it only probes the chip-ID register and reads the
//! acceleration data registers. [`RESOLUTION`] and [`GRAVITY`] are
//! provided for callers that want physical units.
//!
//! [embedded-hal]: https://docs.rs/embedded-hal
//! [trait]: https://docs.rs/accelerometer/latest/accelerometer/trait.RawAccelerometer.html
//!

#![deny(missing_docs)]
#![deny(warnings)]
#![no_std]
#![forbid(unsafe_code)]

mod reg;

use core::fmt::Debug;

#[cfg(feature = "out_f32")]
pub use accelerometer::vector::F32x3;
pub use accelerometer::vector::I8x3;
pub use accelerometer::{Accelerometer, Error, ErrorKind, RawAccelerometer};
#[cfg(feature = "out_f32")]
use cast::f32;
use embedded_hal as hal;
use hal::blocking::i2c::{Write, WriteRead};

use crate::reg::*;
pub use crate::reg::{Register, GRAVITY, RESOLUTION};

/// Data status structure,
/// decoded from the per-axis `ACC_x_NEW` registers
#[derive(Debug)]
pub struct DataStatus {
    /// (X, Y, Z) new-data bits
    pub xyzda: (bool, bool, bool),
}

/// `BMA222` driver
pub struct Bma222<I2C> {
    /// The concrete I²C device implementation
    i2c: I2C,
}

impl<I2C, E> Bma222<I2C>
where
    I2C: WriteRead<Error = E> + Write<Error = E>,
    E: Debug,
{
    /// Create a new `BMA222` driver from the given `I2C` peripheral
    ///
    /// Probes the device by reading `CHIP_ID`; the fetched byte itself
    /// is not compared against an expected value, only the bus transfer
    /// has to succeed. Callers that need a strict identity check can
    /// use [`chip_id`](Bma222::chip_id).
    pub fn new(i2c: I2C) -> Result<Self, Error<E>> {
        let mut dev = Self { i2c };

        dev.chip_id()?;

        Ok(dev)
    }

    /// Destroy driver instance, return `I2C` bus instance
    pub fn destroy(self) -> I2C {
        self.i2c
    }

    /// `CHIP_ID` register
    pub fn chip_id(&mut self) -> Result<u8, Error<E>> {
        self.read_reg(Register::CHIP_ID).map_err(Into::into)
    }

    /// Release the device for power saving
    ///
    /// Kept for API symmetry with [`new`](Bma222::new). The device is
    /// left in whatever mode it is running in; no bus traffic is
    /// generated and the call always succeeds.
    pub fn close(&mut self) -> Result<(), Error<E>> {
        // TODO: drive the power-mode register once standby support is needed
        Ok(())
    }

    /// Acceleration sample gated on the new-data flags,
    /// `ACC_X_NEW` .. `ACC_Z`: one 6-byte snapshot
    ///
    /// Succeeds only when all three axes carry a fresh sample
    /// simultaneously; otherwise fails with `ErrorKind::Device` and the
    /// caller is expected to poll again. A stale sample is reported
    /// through the same error channel as a bus fault.
    pub fn accel_new(&mut self) -> Result<I8x3, Error<E>> {
        let mut buf = [0u8; 6];
        self.read_regs(Register::ACC_X_NEW, &mut buf)?;

        if (buf[0] & NEW_DATA) == 0 || (buf[2] & NEW_DATA) == 0 || (buf[4] & NEW_DATA) == 0 {
            ErrorKind::Device.err()?;
        }

        Ok(I8x3::new(buf[1] as i8, buf[3] as i8, buf[5] as i8))
    }

    /// Data status,
    /// bit 0 of `ACC_X_NEW`, `ACC_Y_NEW`, `ACC_Z_NEW` as
    /// DataStatus {xyzda: (X, Y, Z)}
    pub fn get_status(&mut self) -> Result<DataStatus, Error<E>> {
        let mut buf = [0u8; 6];
        self.read_regs(Register::ACC_X_NEW, &mut buf)?;
        Ok(DataStatus {
            xyzda: (
                (buf[0] & NEW_DATA) != 0,
                (buf[2] & NEW_DATA) != 0,
                (buf[4] & NEW_DATA) != 0,
            ),
        })
    }

    /// Write a raw value to a device register
    pub fn write_register(&mut self, reg: Register, val: u8) -> Result<(), Error<E>> {
        self.write_reg(reg, val).map_err(Into::into)
    }

    #[inline]
    fn read_reg(&mut self, reg: Register) -> Result<u8, E> {
        let mut buf = [0u8];
        self.i2c.write_read(I2C_SAD, &[reg.addr()], &mut buf)?;
        Ok(buf[0])
    }

    // The register pointer auto-increments, a plain start offset covers
    // the whole block
    #[inline]
    fn read_regs(&mut self, reg: Register, buffer: &mut [u8]) -> Result<(), E> {
        self.i2c.write_read(I2C_SAD, &[reg.addr()], buffer)
    }

    #[inline]
    fn write_reg(&mut self, reg: Register, val: u8) -> Result<(), E> {
        self.i2c.write(I2C_SAD, &[reg.addr(), val])
    }
}

impl<I2C, E> RawAccelerometer<I8x3> for Bma222<I2C>
where
    I2C: WriteRead<Error = E> + Write<Error = E>,
    E: Debug,
{
    type Error = E;

    /// Get acceleration reading from the accelerometer,
    /// `ACC_X`, `ACC_Y`, `ACC_Z`: one transaction per axis,
    /// aborted on the first failing axis
    fn accel_raw(&mut self) -> Result<I8x3, Error<E>> {
        let x = self.read_reg(Register::ACC_X)? as i8;
        let y = self.read_reg(Register::ACC_Y)? as i8;
        let z = self.read_reg(Register::ACC_Z)? as i8;

        Ok(I8x3::new(x, y, z))
    }
}

#[cfg(feature = "out_f32")]
impl<I2C, E> Accelerometer for Bma222<I2C>
where
    I2C: WriteRead<Error = E> + Write<Error = E>,
    E: Debug,
{
    type Error = E;

    /// Get normalized ±g reading from the accelerometer
    fn accel_norm(&mut self) -> Result<F32x3, Error<E>> {
        let acc_raw: I8x3 = self.accel_raw()?;

        Ok(F32x3::new(
            f32(acc_raw.x) * RESOLUTION,
            f32(acc_raw.y) * RESOLUTION,
            f32(acc_raw.z) * RESOLUTION,
        ))
    }

    /// Get sample rate of accelerometer data in Hz
    ///
    /// The driver never reprograms the bandwidth filter, so this is the
    /// update rate at the power-on default configuration (1 kHz
    /// bandwidth, data refreshed at twice that).
    fn sample_rate(&mut self) -> Result<f32, Error<Self::Error>> {
        Ok(2000.0)
    }
}
