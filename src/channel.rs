use crate::consts::{MAX_PORT_INDEX, PIN_FIELD_MASK, PIN_FIELD_WIDTH, PORT_WIDTH};
use crate::error::{self, Error, Result};
use std::fmt;
use std::ops::Not;

/// Logic state of a single pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Low,
    High,
}

impl Level {
    #[inline]
    pub fn is_high(self) -> bool {
        self == Level::High
    }

    #[inline]
    pub fn is_low(self) -> bool {
        self == Level::Low
    }
}

impl From<bool> for Level {
    #[inline]
    fn from(state: bool) -> Self {
        if state {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for bool {
    #[inline]
    fn from(level: Level) -> Self {
        level.is_high()
    }
}

impl Not for Level {
    type Output = Level;

    fn not(self) -> Level {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

/// Simultaneous state of every pin of a port (bit i = pin i).
pub type PortLevel = u32;

/// Index of a port in the register table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PortId(pub u8);

impl PortId {
    pub const A: PortId = PortId(0);
    pub const B: PortId = PortId(1);
    pub const C: PortId = PortId(2);
    pub const D: PortId = PortId(3);
    pub const E: PortId = PortId(4);
    pub const F: PortId = PortId(5);

    /// Returns the table index of this port.
    #[inline]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}

impl From<u8> for PortId {
    fn from(port: u8) -> Self {
        PortId(port)
    }
}

impl fmt::Display for PortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            // Ports A..Z get their letter, anything past that its number
            p @ 0..=25 => write!(f, "P{}", char::from(b'A' + p)),
            p => write!(f, "P{}", p),
        }
    }
}

/// Packs a port and pin index into a raw channel identifier.
///
/// Pin bits above the pin field are dropped; port bits above the high
/// nibble are shifted out.
#[inline]
pub const fn encode(port: PortId, pin: u8) -> u8 {
    (port.0 << PIN_FIELD_WIDTH) | (pin & PIN_FIELD_MASK)
}

/// Unpacks a raw channel identifier into its port and pin index.
#[inline]
pub const fn decode(raw: u8) -> (PortId, u8) {
    (PortId(raw >> PIN_FIELD_WIDTH), raw & PIN_FIELD_MASK)
}

/// A single addressable pin: port index in the high nibble, pin index in the low nibble.
/// Use `ChannelId::new(port, pin)` for a validated identifier, or
/// `ChannelId::from_raw` to adopt an already encoded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelId(pub(crate) u8);

impl ChannelId {
    /// Creates a channel identifier, returning an error if either index does not fit its field.
    pub fn new(port: PortId, pin: u8) -> Result<Self> {
        if pin >= PORT_WIDTH {
            return Err(error::pin_out_of_range(pin));
        }
        if port.0 > MAX_PORT_INDEX {
            return Err(Error::PortFieldOverflow {
                port: port.0,
                max: MAX_PORT_INDEX,
            });
        }
        Ok(ChannelId(encode(port, pin)))
    }

    /// Wraps an encoded identifier. Every `u8` decodes to some port/pin pair;
    /// whether the port exists is checked when the channel is accessed.
    #[inline]
    pub const fn from_raw(raw: u8) -> Self {
        ChannelId(raw)
    }

    #[inline]
    pub const fn raw(&self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn port(&self) -> PortId {
        decode(self.0).0
    }

    /// Returns the pin index (0-15) within the port.
    #[inline]
    pub const fn pin(&self) -> u8 {
        decode(self.0).1
    }

    /// Returns the bit mask (1 << pin) for register operations.
    #[inline]
    pub const fn mask(&self) -> u32 {
        1u32 << self.pin()
    }
}

impl From<ChannelId> for u8 {
    fn from(channel: ChannelId) -> Self {
        channel.0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.port(), self.pin())
    }
}
