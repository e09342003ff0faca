//! Channel encoding constants and the default GPIO register map.

// --- Channel Identifier Layout ---
/// Number of bits holding the pin index in a channel identifier.
pub const PIN_FIELD_WIDTH: u8 = 4;
/// Mask selecting the pin field of a channel identifier.
pub const PIN_FIELD_MASK: u8 = (1 << PIN_FIELD_WIDTH) - 1; // 0x0F
/// Number of logical pins per port.
pub const PORT_WIDTH: u8 = 16;
/// Largest port index a channel identifier can carry (high nibble).
pub const MAX_PORT_INDEX: u8 = u8::MAX >> PIN_FIELD_WIDTH; // 15

// --- Memory Map (STM32G0 style GPIO, ports A-F) ---
/// Base address of the first GPIO port block (port A).
pub const GPIOA_BASE: usize = 0x5000_0000;
/// Address distance between consecutive port blocks.
pub const GPIO_PORT_STRIDE: usize = 0x400;
/// Number of ports present in the default memory map (A..F).
pub const PORT_COUNT: usize = 6;

// Register offsets within one port block
pub mod offsets {
    /// Input data register.
    pub const IDR: usize = 0x10;
    /// Output data register.
    pub const ODR: usize = 0x14;
    /// Size of the block up to and including BRR.
    pub const BLOCK_SIZE: usize = 0x2C;
}
