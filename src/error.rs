use thiserror::Error;

/// Errors that can occur when accessing DIO channels, ports and channel groups.
///
/// Every variant describes a caller-side contract violation detected before
/// any register is touched; a failed operation leaves the hardware unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Port index does not name a port of the register table.
    #[error("Port {port} out of range (register table has {count} ports)")]
    PortOutOfRange {
        /// The port index that was requested.
        port: u8,
        /// Number of ports in the register table.
        count: usize,
    },
    /// Port index does not fit the port field of a channel identifier.
    #[error("Port {port} out of range (0-{max}): does not fit the channel identifier's port field")]
    PortFieldOverflow {
        /// The invalid port index.
        port: u8,
        /// Largest port index the identifier can encode.
        max: u8,
    },
    /// Pin index does not fit the pin field of a channel identifier.
    #[error("Pin {pin} out of range (0-15): {message}")]
    PinOutOfRange {
        /// The invalid pin index.
        pin: u8,
        /// Detailed error message explaining the constraint.
        message: String,
    },
    /// Channel group mask is empty or its set bits are not adjoining.
    #[error("Invalid channel group mask 0x{mask:08X}: set bits must be non-empty and contiguous")]
    InvalidGroupMask {
        /// The rejected mask.
        mask: u32,
    },
    /// Channel group offset does not match the position of the mask's lowest bit.
    #[error("Channel group offset {offset} does not match mask 0x{mask:08X} (lowest set bit is {expected})")]
    GroupOffsetMismatch {
        /// The mask of the group.
        mask: u32,
        /// The offset that was supplied.
        offset: u8,
        /// Bit position of the mask's lowest set bit.
        expected: u8,
    },
    /// Level written to a channel group has bits outside the group.
    #[error("Level 0x{level:08X} exceeds channel group (mask 0x{mask:08X}, offset {offset})")]
    LevelExceedsGroup {
        /// The level that was to be written.
        level: u32,
        /// The mask of the group.
        mask: u32,
        /// The offset of the group.
        offset: u8,
    },
}

/// Result type alias for DIO operations.
///
/// This is a convenience alias for `std::result::Result<T, Error>` used
/// throughout the crate to reduce boilerplate.
pub type Result<T> = std::result::Result<T, Error>;

// Helpers for creating specific errors
pub(crate) fn pin_out_of_range(pin: u8) -> Error {
    Error::PinOutOfRange {
        pin,
        message: format!(
            "Pin index must fit the {}-bit pin field",
            crate::consts::PIN_FIELD_WIDTH
        ),
    }
}
