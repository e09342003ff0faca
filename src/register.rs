//! Register-level traits and the memory-mapped GPIO register block.
//!
//! The driver only ever touches two registers per port: the input data
//! register, which reflects the sensed pin state, and the output data
//! register, which holds the commanded state. Port setup (mode, pulls,
//! alternate functions) belongs to the port driver and is not modelled here.
//!
//! Safety notes:
//! - `MmioPortTable` dereferences raw addresses. The base address, stride
//!   and port count given to `MmioPortTable::new` must describe valid,
//!   mapped register blocks for as long as the table is used.
//! - Read-modify-write sequences are not atomic. If an interrupt handler and
//!   the main line write the same port, the host must provide exclusion
//!   (e.g. a critical section) around the call.

use crate::channel::{PortId, PortLevel};
use crate::consts;
use std::marker::PhantomData;
use vcell::VolatileCell;

/// Input/output register pair of one port.
///
/// Methods take `&self`: hardware registers are shared, interior-mutable
/// state owned by the device, not by this layer.
pub trait PortRegisters {
    /// Read the input data register.
    fn read_input(&self) -> PortLevel;

    /// Read back the output data register.
    fn read_output(&self) -> PortLevel;

    /// Overwrite the output data register.
    fn write_output(&self, value: PortLevel);

    /// Read-modify-write the output data register.
    ///
    /// This is not atomic!
    #[inline]
    fn modify_output<F>(&self, f: F) -> PortLevel
    where
        F: FnOnce(PortLevel) -> PortLevel,
    {
        let value = f(self.read_output());
        self.write_output(value);
        value
    }
}

/// Ordered collection of port register blocks indexed by `PortId`.
pub trait RegisterTable {
    type Port: PortRegisters;

    /// Returns the register block of `port`, or `None` if the table has no such port.
    fn port(&self, port: PortId) -> Option<&Self::Port>;

    /// Number of ports in the table.
    fn port_count(&self) -> usize;
}

impl<P: PortRegisters> RegisterTable for [P] {
    type Port = P;

    #[inline]
    fn port(&self, port: PortId) -> Option<&P> {
        self.get(port.index())
    }

    #[inline]
    fn port_count(&self) -> usize {
        self.len()
    }
}

impl<P: PortRegisters, const N: usize> RegisterTable for [P; N] {
    type Port = P;

    #[inline]
    fn port(&self, port: PortId) -> Option<&P> {
        self.get(port.index())
    }

    #[inline]
    fn port_count(&self) -> usize {
        N
    }
}

impl<P: PortRegisters> RegisterTable for Vec<P> {
    type Port = P;

    #[inline]
    fn port(&self, port: PortId) -> Option<&P> {
        self.get(port.index())
    }

    #[inline]
    fn port_count(&self) -> usize {
        self.len()
    }
}

impl<T: RegisterTable + ?Sized> RegisterTable for &T {
    type Port = T::Port;

    #[inline]
    fn port(&self, port: PortId) -> Option<&T::Port> {
        (**self).port(port)
    }

    #[inline]
    fn port_count(&self) -> usize {
        (**self).port_count()
    }
}

/// Memory layout of one GPIO port (STM32 style).
///
/// Only IDR and ODR are accessed; the remaining words belong to the port driver.
#[repr(C)]
pub struct GpioRegisterBlock {
    _config: [VolatileCell<u32>; 4], // MODER, OTYPER, OSPEEDR, PUPDR
    idr: VolatileCell<u32>,
    odr: VolatileCell<u32>,
    _control: [VolatileCell<u32>; 5], // BSRR, LCKR, AFRL, AFRH, BRR
}

impl PortRegisters for GpioRegisterBlock {
    #[inline(always)]
    fn read_input(&self) -> PortLevel {
        self.idr.get()
    }

    #[inline(always)]
    fn read_output(&self) -> PortLevel {
        self.odr.get()
    }

    #[inline(always)]
    fn write_output(&self, value: PortLevel) {
        self.odr.set(value);
    }
}

/// Register table over memory-mapped `GpioRegisterBlock`s laid out at a
/// fixed stride from a base address.
///
/// The table is `!Send` and `!Sync`: copies of it alias the same registers,
/// and the output read-modify-writes are not atomic. A driver over it stays
/// on the execution context that created it.
///
/// ```compile_fail
/// fn assert_sync<T: Sync>() {}
/// assert_sync::<dio_hal::Dio<dio_hal::MmioPortTable>>();
/// ```
///
/// ```compile_fail
/// fn assert_send<T: Send>() {}
/// assert_send::<dio_hal::Dio<dio_hal::MmioPortTable>>();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MmioPortTable {
    base: usize,
    stride: usize,
    count: usize,
    _marker: PhantomData<*const GpioRegisterBlock>,
}

impl MmioPortTable {
    /// Creates a table of `count` port blocks starting at `base`, `stride` bytes apart.
    ///
    /// # Safety
    ///
    /// Caller must ensure:
    /// - every address `base + i * stride` for `i < count` is a mapped,
    ///   properly aligned `GpioRegisterBlock`
    /// - the blocks stay valid for the lifetime of the table
    /// - no other table, driver or code running in another thread or
    ///   interrupt writes the same output registers without exclusion
    pub const unsafe fn new(base: usize, stride: usize, count: usize) -> Self {
        MmioPortTable {
            base,
            stride,
            count,
            _marker: PhantomData,
        }
    }

    /// Ports A-F at their default addresses (`GPIOA_BASE`, `GPIO_PORT_STRIDE` apart).
    ///
    /// # Safety
    ///
    /// Only valid on a device whose GPIO blocks live at that memory map.
    pub const unsafe fn default_map() -> Self {
        Self::new(
            consts::GPIOA_BASE,
            consts::GPIO_PORT_STRIDE,
            consts::PORT_COUNT,
        )
    }

    /// Address of the register block of `port`, if the table has one.
    pub fn block_address(&self, port: PortId) -> Option<usize> {
        if port.index() < self.count {
            Some(self.base + port.index() * self.stride)
        } else {
            None
        }
    }
}

impl RegisterTable for MmioPortTable {
    type Port = GpioRegisterBlock;

    fn port(&self, port: PortId) -> Option<&GpioRegisterBlock> {
        let addr = self.block_address(port)?;
        // Safety: address validity was guaranteed by the caller of `new`
        Some(unsafe { &*(addr as *const GpioRegisterBlock) })
    }

    #[inline]
    fn port_count(&self) -> usize {
        self.count
    }
}
