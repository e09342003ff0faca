use crate::bfx;
use crate::channel::{ChannelId, Level, PortId, PortLevel};
use crate::config::{DioConfig, GroupWritePolicy};
use crate::error::{Error, Result};
use crate::group::ChannelGroup;
use crate::register::{PortRegisters, RegisterTable};
use log::{debug, trace, warn};

/// Version of this driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionInfo {
    pub major: u16,
    pub minor: u16,
    pub patch: u16,
}

impl VersionInfo {
    /// Returns the driver version (the crate version).
    pub fn current() -> Self {
        VersionInfo {
            major: env!("CARGO_PKG_VERSION_MAJOR").parse().unwrap_or(0),
            minor: env!("CARGO_PKG_VERSION_MINOR").parse().unwrap_or(0),
            patch: env!("CARGO_PKG_VERSION_PATCH").parse().unwrap_or(0),
        }
    }
}

/// Digital I/O driver over a table of pre-configured port register blocks.
///
/// Every operation is a synchronous transaction on the registers: nothing is
/// cached, buffered or batched. Pin direction and port setup are expected to
/// have been done by the port driver beforehand.
///
/// **Note:** read-modify-write operations (`write_channel`, `flip_channel`,
/// `masked_write_port`, `write_channel_group`) are not atomic. Callers sharing
/// a port between execution contexts must serialise access themselves.
#[derive(Debug)]
pub struct Dio<T: RegisterTable> {
    table: T,
    config: DioConfig,
}

impl<T: RegisterTable> Dio<T> {
    // --- Constructors and Info ---

    /// Creates a driver with the default configuration.
    pub fn new(table: T) -> Self {
        Self::with_config(table, DioConfig::default())
    }

    pub fn with_config(table: T, config: DioConfig) -> Self {
        debug!(
            "DIO driver over {} ports, group write policy {:?}",
            table.port_count(),
            config.group_write
        );
        Dio { table, config }
    }

    pub fn config(&self) -> DioConfig {
        self.config
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    /// Releases the register table.
    pub fn into_inner(self) -> T {
        self.table
    }

    // --- Register Access ---
    #[inline]
    fn port_regs(&self, port: PortId) -> Result<&T::Port> {
        self.table.port(port).ok_or_else(|| {
            warn!(
                "Port {} not in register table ({} ports)",
                port,
                self.table.port_count()
            );
            Error::PortOutOfRange {
                port: port.0,
                count: self.table.port_count(),
            }
        })
    }

    // --- Single Channel ---
    /// Reads the level of a channel from its port's input register.
    pub fn read_channel(&self, channel: ChannelId) -> Result<Level> {
        let regs = self.port_regs(channel.port())?;
        let value = regs.read_input();
        trace!(
            "Read IDR {}: pin {}, value=0x{:04X}",
            channel.port(),
            channel.pin(),
            value
        );
        Ok(Level::from(bfx::get_bit(value, channel.pin())))
    }

    /// Drives a channel to `level`, leaving the other pins of the port unchanged.
    pub fn write_channel(&self, channel: ChannelId, level: Level) -> Result<()> {
        let regs = self.port_regs(channel.port())?;
        let value = regs.modify_output(|mut odr| {
            bfx::put_bit(&mut odr, channel.pin(), level.is_high());
            odr
        });
        trace!(
            "Write ODR {}: pin {} {:?}, value=0x{:04X}",
            channel.port(),
            channel.pin(),
            level,
            value
        );
        Ok(())
    }

    /// Toggles a channel's output bit, then returns the level read back from
    /// the input register.
    ///
    /// The read happens after the toggle: on real hardware the result is the
    /// sensed pin state, which may lag the commanded one.
    pub fn flip_channel(&self, channel: ChannelId) -> Result<Level> {
        let regs = self.port_regs(channel.port())?;
        let odr = regs.modify_output(|mut odr| {
            bfx::toggle_bit_mask(&mut odr, channel.mask());
            odr
        });
        let idr = regs.read_input();
        trace!(
            "Flip {}: pin {}, ODR=0x{:04X}, IDR=0x{:04X}",
            channel.port(),
            channel.pin(),
            odr,
            idr
        );
        Ok(Level::from(bfx::get_bit(idr, channel.pin())))
    }

    // --- Port ---
    /// Reads the input register of a port, all bits.
    pub fn read_port(&self, port: PortId) -> Result<PortLevel> {
        let value = self.port_regs(port)?.read_input();
        trace!("Read IDR {}: value=0x{:04X}", port, value);
        Ok(value)
    }

    /// Overwrites the whole output register of a port.
    pub fn write_port(&self, port: PortId, level: PortLevel) -> Result<()> {
        let regs = self.port_regs(port)?;
        trace!("Write ODR {}: value=0x{:04X}", port, level);
        regs.write_output(level);
        Ok(())
    }

    /// Writes the bits of `level` selected by `mask` to a port's output
    /// register; unselected bits keep their value.
    pub fn masked_write_port(&self, port: PortId, level: PortLevel, mask: PortLevel) -> Result<()> {
        let regs = self.port_regs(port)?;
        let value = regs.modify_output(|mut odr| {
            bfx::put_bits_mask(&mut odr, level, mask);
            odr
        });
        trace!(
            "Masked write ODR {}: level=0x{:04X}, mask=0x{:04X}, value=0x{:04X}",
            port,
            level,
            mask,
            value
        );
        Ok(())
    }

    // --- Channel Group ---
    /// Reads a channel group, right-justified: `(IDR & mask) >> offset`.
    pub fn read_channel_group(&self, group: &ChannelGroup) -> Result<PortLevel> {
        let mut value = self.port_regs(group.port())?.read_input();
        bfx::clr_bit_mask(&mut value, !group.mask());
        let value = bfx::shift_right(value, group.offset());
        trace!(
            "Read group {}: mask=0x{:04X}, offset={}, value=0x{:04X}",
            group.port(),
            group.mask(),
            group.offset(),
            value
        );
        Ok(value)
    }

    /// Writes a group-relative `level` into a channel group: the group's bits
    /// are cleared, then `level << offset` is OR-ed in.
    ///
    /// With the default `GroupWritePolicy::Unmasked`, bits of `level` wider
    /// than the group are written outside it. See `DioConfig` for the
    /// clamping and rejecting alternatives.
    pub fn write_channel_group(&self, group: &ChannelGroup, level: PortLevel) -> Result<()> {
        let regs = self.port_regs(group.port())?;
        let overflow = group.overflow(level);
        let mut shifted = bfx::shift_left(level, group.offset());
        if overflow != 0 {
            match self.config.group_write {
                GroupWritePolicy::Unmasked => {}
                GroupWritePolicy::Masked => {
                    warn!(
                        "Level 0x{:04X} clamped to group {} mask 0x{:04X} (dropped 0x{:04X})",
                        level,
                        group.port(),
                        group.mask(),
                        overflow
                    );
                    shifted &= group.mask();
                }
                GroupWritePolicy::Reject => {
                    warn!(
                        "Level 0x{:04X} does not fit group {} mask 0x{:04X}",
                        level,
                        group.port(),
                        group.mask()
                    );
                    return Err(Error::LevelExceedsGroup {
                        level,
                        mask: group.mask(),
                        offset: group.offset(),
                    });
                }
            }
        }
        let value = regs.modify_output(|mut odr| {
            bfx::clr_bit_mask(&mut odr, group.mask());
            bfx::set_bit_mask(&mut odr, shifted);
            odr
        });
        trace!(
            "Write group {}: mask=0x{:04X}, offset={}, level=0x{:04X}, value=0x{:04X}",
            group.port(),
            group.mask(),
            group.offset(),
            level,
            value
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{loopback_table, SimulatedPort};

    fn ch(raw: u8) -> ChannelId {
        ChannelId::from_raw(raw)
    }

    #[test]
    fn test_write_channel_touches_only_target_pin() {
        let dio = Dio::new([SimulatedPort::new().with_output(0xFFFF)]);
        dio.write_channel(ch(0x03), Level::Low).unwrap();
        assert_eq!(dio.table()[0].read_output(), 0xFFF7);
        dio.write_channel(ch(0x03), Level::High).unwrap();
        assert_eq!(dio.table()[0].read_output(), 0xFFFF);
    }

    #[test]
    fn test_flip_reads_input_after_toggle() {
        // Input tied to output: the read-back reflects the toggle
        let dio = Dio::new(loopback_table::<1>());
        assert_eq!(dio.flip_channel(ch(0x05)).unwrap(), Level::High);
        assert_eq!(dio.table()[0].read_output(), 0x0020);
        assert_eq!(dio.flip_channel(ch(0x05)).unwrap(), Level::Low);
        assert_eq!(dio.table()[0].read_output(), 0);

        // Input held low externally: output toggles, read-back stays low
        let dio = Dio::new([SimulatedPort::new()]);
        assert_eq!(dio.flip_channel(ch(0x05)).unwrap(), Level::Low);
        assert_eq!(dio.table()[0].read_output(), 0x0020);
    }

    #[test]
    fn test_group_write_policies() {
        let group = ChannelGroup::new(PortId::A, 0x00FF, 2);

        let dio = Dio::new([SimulatedPort::new()]);
        dio.write_channel_group(&group, 0x55).unwrap();
        assert_eq!(dio.table()[0].read_output(), 0x0154);

        let dio = Dio::with_config([SimulatedPort::new()], DioConfig::clamped());
        dio.write_channel_group(&group, 0x55).unwrap();
        assert_eq!(dio.table()[0].read_output(), 0x0054);

        let dio = Dio::with_config([SimulatedPort::new().with_output(0xA000)], DioConfig::strict());
        assert_eq!(
            dio.write_channel_group(&group, 0x55),
            Err(Error::LevelExceedsGroup {
                level: 0x55,
                mask: 0x00FF,
                offset: 2
            })
        );
        assert_eq!(dio.table()[0].read_output(), 0xA000);
    }

    #[test]
    fn test_unknown_port_is_an_error() {
        let dio = Dio::new(loopback_table::<2>());
        let err = Error::PortOutOfRange { port: 2, count: 2 };
        assert_eq!(dio.read_channel(ch(0x20)), Err(err.clone()));
        assert_eq!(dio.write_port(PortId::C, 0), Err(err));
    }

    #[test]
    fn test_version_info_matches_crate() {
        let v = VersionInfo::current();
        assert_eq!(
            format!("{}.{}.{}", v.major, v.minor, v.patch),
            env!("CARGO_PKG_VERSION")
        );
    }
}
