use dio_hal::{sim::SimulatedPort, ChannelGroup, Dio, DioConfig, PortId, Result};

fn main() -> Result<()> {
    env_logger::init();

    // Eight LEDs on PC2..PC9, a DIP switch nibble on PC12..PC15
    let led_bar = ChannelGroup::try_new(PortId::C, 0x03FC, 2)?;
    let switches = ChannelGroup::try_new(PortId::C, 0xF000, 12)?;

    let table: Vec<SimulatedPort> = (0..6).map(|_| SimulatedPort::new()).collect();
    let dio = Dio::with_config(&table, DioConfig::strict());

    table[PortId::C.index()].drive_input(0xA000);
    let pattern = dio.read_channel_group(&switches)?;
    println!("Switches read 0x{:X}", pattern);

    for step in 0..8 {
        let level = (pattern << step) & 0xFF;
        dio.write_channel_group(&led_bar, level)?;
        println!("LED bar <- {:08b}", level);
    }

    match dio.write_channel_group(&led_bar, 0x1FF) {
        Ok(()) => println!("Unexpected: 9-bit level accepted"),
        Err(e) => println!("Rejected as expected: {}", e),
    }

    dio.masked_write_port(PortId::C, 0, led_bar.mask())?;
    Ok(())
}
