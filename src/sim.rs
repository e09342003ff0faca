//! In-memory port register blocks for host-side development and tests.

use crate::channel::PortLevel;
use crate::register::PortRegisters;
use std::cell::Cell;

/// A simulated port: an input and an output register held in memory.
///
/// In loopback mode the input register mirrors the output register, as if
/// every pin were an output read back through its input buffer. Otherwise
/// the input register only changes through `drive_input`.
#[derive(Debug, Default, Clone)]
pub struct SimulatedPort {
    input: Cell<PortLevel>,
    output: Cell<PortLevel>,
    loopback: bool,
}

impl SimulatedPort {
    /// A port with independent input and output registers, both zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// A port whose input register mirrors its output register.
    pub fn loopback() -> Self {
        SimulatedPort {
            loopback: true,
            ..Self::default()
        }
    }

    /// Sets the output register's initial value.
    pub fn with_output(self, value: PortLevel) -> Self {
        self.output.set(value);
        self
    }

    /// Sets the input register's initial value (ignored in loopback mode).
    pub fn with_input(self, value: PortLevel) -> Self {
        self.input.set(value);
        self
    }

    /// Simulates an external source driving the port's pins.
    pub fn drive_input(&self, value: PortLevel) {
        self.input.set(value);
    }

    #[inline]
    pub fn is_loopback(&self) -> bool {
        self.loopback
    }
}

impl PortRegisters for SimulatedPort {
    fn read_input(&self) -> PortLevel {
        if self.loopback {
            self.output.get()
        } else {
            self.input.get()
        }
    }

    fn read_output(&self) -> PortLevel {
        self.output.get()
    }

    fn write_output(&self, value: PortLevel) {
        self.output.set(value);
    }
}

/// Builds a table of `N` loopback ports.
pub fn loopback_table<const N: usize>() -> [SimulatedPort; N] {
    std::array::from_fn(|_| SimulatedPort::loopback())
}
