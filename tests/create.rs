mod common;

use common::*;

#[test]
fn create() {
    let trans = [trans_chip_id()];
    let mock = I2cMock::new(&trans);
    let dev = Bma222::new(mock).unwrap();
    dev.destroy().done();
}

#[test]
fn create_any_chip_id() {
    // The probe only requires the transfer to succeed; the ID byte
    // itself is not checked
    let trans = [I2cTrans::write_read(DEV_ADDR, vec![0x00], vec![0x00])];
    let mock = I2cMock::new(&trans);
    let dev = Bma222::new(mock).unwrap();
    dev.destroy().done();
}

#[test]
fn chip_id_get() {
    let trans = [trans_chip_id(), trans_chip_id()];
    let mock = I2cMock::new(&trans);
    let mut dev = Bma222::new(mock).unwrap();
    let id = dev.chip_id().unwrap();
    assert_eq!(id, 0xFB);
    dev.destroy().done();
}

#[test]
fn close_without_bus_traffic() {
    let trans = [trans_chip_id()];
    let mock = I2cMock::new(&trans);
    let mut dev = Bma222::new(mock).unwrap();
    dev.close().unwrap();
    dev.destroy().done();
}
