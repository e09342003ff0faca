use crate::bfx;
use crate::channel::{PortId, PortLevel};
use crate::error::{Error, Result};

/// A contiguous subset of adjoining pins of one port.
///
/// `mask` is expressed in register bit positions (not shifted down to the
/// group), and `offset` is the register bit holding the group's least
/// significant pin. A consistent group therefore has `offset ==
/// mask.trailing_zeros()`.
///
/// ```
/// use dio_hal::{ChannelGroup, PortId};
///
/// // Eight LEDs on PB2..PB9
/// const LED_BAR: ChannelGroup = ChannelGroup::new(PortId::B, 0x03FC, 2);
/// assert_eq!(LED_BAR.width(), 8);
/// assert!(LED_BAR.is_consistent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelGroup {
    port: PortId,
    mask: PortLevel,
    offset: u8,
}

impl ChannelGroup {
    /// Creates a group without checking that `mask` and `offset` agree.
    ///
    /// Intended for static configuration tables. Reads and writes on an
    /// inconsistent group follow the raw mask/shift arithmetic.
    pub const fn new(port: PortId, mask: PortLevel, offset: u8) -> Self {
        ChannelGroup { port, mask, offset }
    }

    /// Creates a group, returning an error unless `mask` is contiguous and
    /// starts at bit `offset`.
    pub fn try_new(port: PortId, mask: PortLevel, offset: u8) -> Result<Self> {
        if !bfx::is_contiguous(mask) {
            return Err(Error::InvalidGroupMask { mask });
        }
        let expected = mask.trailing_zeros() as u8;
        if expected != offset {
            return Err(Error::GroupOffsetMismatch {
                mask,
                offset,
                expected,
            });
        }
        Ok(Self::new(port, mask, offset))
    }

    #[inline]
    pub const fn port(&self) -> PortId {
        self.port
    }

    #[inline]
    pub const fn mask(&self) -> PortLevel {
        self.mask
    }

    #[inline]
    pub const fn offset(&self) -> u8 {
        self.offset
    }

    /// Number of pins in the group.
    #[inline]
    pub const fn width(&self) -> u32 {
        self.mask.count_ones()
    }

    /// Returns `true` if the mask is contiguous and its lowest bit sits at `offset`.
    pub fn is_consistent(&self) -> bool {
        bfx::is_contiguous(self.mask) && self.mask.trailing_zeros() == u32::from(self.offset)
    }

    /// Bits a group-relative `level` would set outside the mask once shifted into place.
    #[inline]
    pub fn overflow(&self, level: PortLevel) -> PortLevel {
        bfx::shift_left(level, self.offset) & !self.mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_accepts_aligned_group() {
        let group = ChannelGroup::try_new(PortId::D, 0x03FC, 2).unwrap();
        assert_eq!(group.port(), PortId::D);
        assert_eq!(group.mask(), 0x03FC);
        assert_eq!(group.offset(), 2);
        assert_eq!(group.width(), 8);
        assert!(group.is_consistent());
    }

    #[test]
    fn test_try_new_rejects_bad_masks() {
        assert_eq!(
            ChannelGroup::try_new(PortId::A, 0, 0),
            Err(Error::InvalidGroupMask { mask: 0 })
        );
        assert_eq!(
            ChannelGroup::try_new(PortId::A, 0x0F0F, 0),
            Err(Error::InvalidGroupMask { mask: 0x0F0F })
        );
        assert_eq!(
            ChannelGroup::try_new(PortId::A, 0x00FF, 2),
            Err(Error::GroupOffsetMismatch {
                mask: 0x00FF,
                offset: 2,
                expected: 0
            })
        );
    }

    #[test]
    fn test_unchecked_group_keeps_raw_fields() {
        let group = ChannelGroup::new(PortId::A, 0x00FF, 2);
        assert!(!group.is_consistent());
        assert_eq!(group.width(), 8);
    }

    #[test]
    fn test_overflow() {
        let group = ChannelGroup::new(PortId::A, 0x03FC, 2);
        assert_eq!(group.overflow(0xFF), 0);
        assert_eq!(group.overflow(0x1FF), 0x0400);

        let skewed = ChannelGroup::new(PortId::A, 0x00FF, 2);
        assert_eq!(skewed.overflow(0x55), 0x0100);
    }
}
