//! Tests for whole-port reads and writes

use dio_hal::sim::{loopback_table, SimulatedPort};
use dio_hal::{Dio, Error, PortId, PortRegisters};

#[test]
fn test_read_port_returns_input_register() {
    let table = [
        SimulatedPort::new().with_input(0x1234).with_output(0xFFFF),
        SimulatedPort::new().with_input(0xBEEF),
    ];
    let dio = Dio::new(&table);

    assert_eq!(dio.read_port(PortId::A).unwrap(), 0x1234);
    assert_eq!(dio.read_port(PortId::B).unwrap(), 0xBEEF);
}

#[test]
fn test_write_port_overwrites_everything() {
    let table = [SimulatedPort::new().with_output(0xFFFF)];
    let dio = Dio::new(&table);

    dio.write_port(PortId::A, 0xAA55).unwrap();
    assert_eq!(table[0].read_output(), 0xAA55);

    dio.write_port(PortId::A, 0).unwrap();
    assert_eq!(table[0].read_output(), 0);
}

#[test]
fn test_masked_write_port() {
    let table = [SimulatedPort::new().with_output(0xFF00)];
    let dio = Dio::new(&table);

    dio.masked_write_port(PortId::A, 0xFFFF, 0x00FF).unwrap();
    assert_eq!(table[0].read_output(), 0xFFFF);

    dio.masked_write_port(PortId::A, 0x0000, 0x0F0F).unwrap();
    assert_eq!(table[0].read_output(), 0xF0F0);

    // An empty mask leaves the register alone
    dio.masked_write_port(PortId::A, 0x0000, 0x0000).unwrap();
    assert_eq!(table[0].read_output(), 0xF0F0);
}

#[test]
fn test_masked_write_all_ones_equals_write_port() {
    let masked = loopback_table::<1>();
    let plain = loopback_table::<1>();
    masked[0].write_output(0x1357);
    plain[0].write_output(0x1357);

    Dio::new(&masked)
        .masked_write_port(PortId::A, 0xAA55, 0xFFFF_FFFF)
        .unwrap();
    Dio::new(&plain).write_port(PortId::A, 0xAA55).unwrap();

    assert_eq!(masked[0].read_output(), plain[0].read_output());
}

#[test]
fn test_port_ops_on_missing_port() {
    let dio = Dio::new(vec![SimulatedPort::loopback(); 3]);
    let err = Error::PortOutOfRange { port: 5, count: 3 };

    assert_eq!(dio.read_port(PortId::F), Err(err.clone()));
    assert_eq!(dio.write_port(PortId::F, 1), Err(err.clone()));
    assert_eq!(dio.masked_write_port(PortId::F, 1, 1), Err(err));
}
