pub use bma222::Bma222;

use embedded_hal_mock as hal;
pub use hal::i2c::{Mock as I2cMock, Transaction as I2cTrans};
pub use hal::MockError;

pub const DEV_ADDR: u8 = 0b001_1000;

pub fn trans_chip_id() -> I2cTrans {
    I2cTrans::write_read(DEV_ADDR, vec![0x00], vec![0xFB])
}
