//! Bit-field primitives over 32-bit register values.
//!
//! The driver composes these helpers instead of open-coding bit arithmetic.
//! Shifts by 32 or more yield 0 rather than panicking, so a malformed group
//! offset drops bits instead of aborting.

/// Returns `true` if bit `bit` of `value` is set. Bits past 31 read as clear.
#[inline]
pub fn get_bit(value: u32, bit: u8) -> bool {
    shift_right(value, bit) & 1 != 0
}

/// Sets or clears bit `bit` of `data`, leaving the others untouched.
#[inline]
pub fn put_bit(data: &mut u32, bit: u8, state: bool) {
    let mask = shift_left(1, bit);
    if state {
        set_bit_mask(data, mask);
    } else {
        clr_bit_mask(data, mask);
    }
}

/// Sets every bit of `data` selected by `mask`.
#[inline]
pub fn set_bit_mask(data: &mut u32, mask: u32) {
    *data |= mask;
}

/// Clears every bit of `data` selected by `mask`.
#[inline]
pub fn clr_bit_mask(data: &mut u32, mask: u32) {
    *data &= !mask;
}

/// Inverts every bit of `data` selected by `mask`.
#[inline]
pub fn toggle_bit_mask(data: &mut u32, mask: u32) {
    *data ^= mask;
}

/// Copies the bits of `pattern` selected by `mask` into `data`.
#[inline]
pub fn put_bits_mask(data: &mut u32, pattern: u32, mask: u32) {
    *data = (*data & !mask) | (pattern & mask);
}

#[inline]
pub fn shift_left(value: u32, count: u8) -> u32 {
    value.checked_shl(u32::from(count)).unwrap_or(0)
}

#[inline]
pub fn shift_right(value: u32, count: u8) -> u32 {
    value.checked_shr(u32::from(count)).unwrap_or(0)
}

/// Returns `true` if `mask` is non-zero and its set bits are adjoining.
#[inline]
pub fn is_contiguous(mask: u32) -> bool {
    if mask == 0 {
        return false;
    }
    let normalized = mask >> mask.trailing_zeros();
    normalized & normalized.wrapping_add(1) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_put_bit() {
        let mut reg = 0xFFFF;
        put_bit(&mut reg, 3, false);
        assert_eq!(reg, 0xFFF7);
        assert!(!get_bit(reg, 3));
        assert!(get_bit(reg, 4));

        put_bit(&mut reg, 3, true);
        assert_eq!(reg, 0xFFFF);
        assert!(!get_bit(reg, 40));
    }

    #[test]
    fn test_mask_helpers() {
        let mut reg = 0xFF00;
        put_bits_mask(&mut reg, 0xFFFF, 0x00FF);
        assert_eq!(reg, 0xFFFF);

        clr_bit_mask(&mut reg, 0x0F0F);
        assert_eq!(reg, 0xF0F0);

        toggle_bit_mask(&mut reg, 0x8001);
        assert_eq!(reg, 0x70F1);

        set_bit_mask(&mut reg, 0x000E);
        assert_eq!(reg, 0x70FF);
    }

    #[test]
    fn test_wide_shifts_saturate_to_zero() {
        assert_eq!(shift_left(1, 31), 0x8000_0000);
        assert_eq!(shift_left(1, 32), 0);
        assert_eq!(shift_right(0x8000_0000, 31), 1);
        assert_eq!(shift_right(0xFFFF_FFFF, 200), 0);
    }

    #[test]
    fn test_is_contiguous() {
        assert!(is_contiguous(0x00FF));
        assert!(is_contiguous(0x03FC));
        assert!(is_contiguous(0x8000_0000));
        assert!(is_contiguous(u32::MAX));
        assert!(!is_contiguous(0));
        assert!(!is_contiguous(0x0505));
    }
}
