//! Driver configuration.

/// How `Dio::write_channel_group` treats a level with bits outside the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupWritePolicy {
    /// OR `level << offset` into the register as is. Excess bits land
    /// outside the group and corrupt neighbouring pins.
    #[default]
    Unmasked,
    /// Clamp the shifted level to the group mask before writing.
    Masked,
    /// Refuse the write with `Error::LevelExceedsGroup`.
    Reject,
}

/// Configuration for a `Dio` driver.
///
/// The default reproduces the plain clear-then-OR group write; use
/// `DioConfig::strict()` or `DioConfig::clamped()` to guard against levels
/// wider than their group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DioConfig {
    pub group_write: GroupWritePolicy,
}

impl DioConfig {
    /// Reject group writes whose level does not fit the group.
    pub fn strict() -> Self {
        Self {
            group_write: GroupWritePolicy::Reject,
        }
    }

    /// Clamp group writes to the group mask, logging the dropped bits.
    pub fn clamped() -> Self {
        Self {
            group_write: GroupWritePolicy::Masked,
        }
    }
}
