use serde::{Deserialize, Serialize};

use crate::error::{CommandListError, CommandListResult};

pub const DEFAULT_INITIAL_CAPACITY: usize = 10;
pub const DEFAULT_GROWTH_PERCENT: u32 = 133;

/// Construction settings for a [`CommandList`](crate::CommandList).
///
/// Missing fields fall back to the defaults, so an empty document is a
/// valid config:
///
/// ```toml
/// initial_capacity = 32
/// growth_percent = 150
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListConfig {
    /// Slots allocated up front. Must be at least 1.
    pub initial_capacity: usize,
    /// Capacity multiplier applied when the list is full, in percent.
    /// Must exceed 100.
    pub growth_percent: u32,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            growth_percent: DEFAULT_GROWTH_PERCENT,
        }
    }
}

impl ListConfig {
    /// Default growth with a custom starting capacity.
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            ..Self::default()
        }
    }

    pub fn from_toml_str(source: &str) -> CommandListResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(source: &str) -> CommandListResult<Self> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CommandListResult<()> {
        if self.initial_capacity == 0 {
            return Err(CommandListError::ZeroCapacity);
        }
        if self.growth_percent <= 100 {
            return Err(CommandListError::InvalidGrowth(self.growth_percent));
        }
        Ok(())
    }

    /// Capacity after one growth step from `current`.
    ///
    /// Computed as `ceil(current * growth_percent / 100)` in integer
    /// arithmetic, and always at least one more slot than `current`.
    pub fn next_capacity(&self, current: usize) -> CommandListResult<usize> {
        let scaled = current
            .checked_mul(self.growth_percent as usize)
            .and_then(|v| v.checked_add(99))
            .ok_or(CommandListError::CapacityOverflow(current))?
            / 100;
        let floor = current
            .checked_add(1)
            .ok_or(CommandListError::CapacityOverflow(current))?;
        Ok(scaled.max(floor))
    }
}
