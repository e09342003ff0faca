//! # dio-hal
//!
//! A Rust crate for reading and writing digital I/O channels, ports and
//! channel groups through the input/output data registers of a
//! microcontroller's GPIO ports.
//!
//! Ports are expected to be configured (mode, pulls, speed) by a separate
//! port driver. This crate only translates logical identifiers into bit
//! operations on the registers.
//!
//! ## Features
//!
//! *   Channels (single pins):
//!     *   Compact `ChannelId` encoding: port in the high nibble, pin in the low nibble.
//!     *   Reading (`read_channel`), writing (`write_channel`) and toggling (`flip_channel`).
//! *   Ports (16 pins):
//!     *   Reading the input register (`read_port`).
//!     *   Overwriting (`write_port`) or partially writing (`masked_write_port`) the output register.
//! *   Channel groups (adjoining pins of one port):
//!     *   Right-justified reads (`read_channel_group`).
//!     *   Group-relative writes (`write_channel_group`) with a configurable overflow policy.
//! *   Register tables:
//!     *   Memory-mapped GPIO blocks (`MmioPortTable`).
//!     *   Simulated ports for host-side development (`sim::SimulatedPort`).
//!
//! ## Channel Encoding
//!
//! *   `0x00`-`0x0F` map to PA0-PA15.
//! *   `0x10`-`0x1F` map to PB0-PB15.
//! *   ... up to port F (`0x50`-`0x5F`) in the default memory map.
//!
//! ## Basic Usage
//!
//! ```
//! use dio_hal::{sim, ChannelGroup, ChannelId, Dio, Level, PortId, Result};
//!
//! fn main() -> Result<()> {
//!     // Optional: Initialize logging
//!     // env_logger::init();
//!
//!     // On target: Dio::new(unsafe { dio_hal::MmioPortTable::default_map() })
//!     let dio = Dio::new(sim::loopback_table::<6>());
//!
//!     let red_led = ChannelId::new(PortId::A, 5)?;
//!     dio.write_channel(red_led, Level::High)?;
//!     assert_eq!(dio.read_channel(red_led)?, Level::High);
//!     assert_eq!(dio.flip_channel(red_led)?, Level::Low);
//!
//!     let led_bar = ChannelGroup::try_new(PortId::B, 0x03FC, 2)?;
//!     dio.write_channel_group(&led_bar, 0x55)?;
//!     assert_eq!(dio.read_port(PortId::B)?, 0x0154);
//!     assert_eq!(dio.read_channel_group(&led_bar)?, 0x55);
//!     Ok(())
//! }
//! ```
//!
//! ## Concurrency
//!
//! Operations are synchronous and never block. Read-modify-write sequences
//! on the output register are not atomic; if an interrupt handler and the
//! main line share a port, the host must provide exclusion around the calls.
//!
//! ## License
//!
//! This project is licensed under the WTFPL - see the [LICENSE](LICENSE) file for details.

pub mod bfx;
mod channel;
mod config;
pub mod consts;
mod dio;
mod error;
mod group;
pub mod register;
pub mod sim;

pub use channel::{decode, encode, ChannelId, Level, PortId, PortLevel};
pub use config::{DioConfig, GroupWritePolicy};
pub use dio::{Dio, VersionInfo};
pub use error::{Error, Result};
pub use group::ChannelGroup;
pub use register::{GpioRegisterBlock, MmioPortTable, PortRegisters, RegisterTable};
