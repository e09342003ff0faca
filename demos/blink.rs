use dio_hal::{sim::SimulatedPort, ChannelId, Dio, Level, PortId, PortRegisters, Result};
use std::{thread, time::Duration};

// Select pin PA5
const BLINK_PORT: PortId = PortId::A;
const BLINK_PIN_NUM: u8 = 5;

fn main() -> Result<()> {
    env_logger::init();

    // On target this would be `unsafe { MmioPortTable::default_map() }`
    let table = [SimulatedPort::loopback(), SimulatedPort::loopback()];
    let dio = Dio::new(&table);

    let blink_pin = ChannelId::new(BLINK_PORT, BLINK_PIN_NUM)?;
    println!("Blinking channel {} (raw 0x{:02X})", blink_pin, blink_pin.raw());

    dio.write_channel(blink_pin, Level::Low)?;
    for _ in 0..10 {
        let level = dio.flip_channel(blink_pin)?;
        println!(
            "{} -> {:?} (ODR=0x{:04X})",
            blink_pin,
            level,
            table[BLINK_PORT.index()].read_output()
        );
        thread::sleep(Duration::from_millis(250));
    }

    dio.write_channel(blink_pin, Level::Low)?;
    println!("Done.");
    Ok(())
}
