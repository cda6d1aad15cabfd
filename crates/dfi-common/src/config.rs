//! Resolved rendering options for one command invocation.

use crate::constants::{DEFAULT_CRIT_THRESHOLD, DEFAULT_WARN_THRESHOLD};
use crate::error::{DfiError, Result};
use crate::types::{Prefix, UnitSize};

/// Warn and critical percentages for the `%USED` column.
///
/// A value of this type always satisfies `warn <= crit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    warn: u64,
    crit: u64,
}

impl Thresholds {
    /// Creates a threshold pair.
    ///
    /// # Errors
    ///
    /// Returns [`DfiError::Config`] if `warn` is greater than `crit`.
    pub fn new(warn: u64, crit: u64) -> Result<Self> {
        if warn > crit {
            return Err(DfiError::Config {
                message: format!(
                    "can not set critical threshold less than warn threshold (warn:{warn} crit:{crit})"
                ),
            });
        }
        Ok(Self { warn, crit })
    }

    /// Percentage at which the warning band starts.
    #[must_use]
    pub const fn warn(&self) -> u64 {
        self.warn
    }

    /// Percentage at which the critical band starts.
    #[must_use]
    pub const fn crit(&self) -> u64 {
        self.crit
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            warn: DEFAULT_WARN_THRESHOLD,
            crit: DEFAULT_CRIT_THRESHOLD,
        }
    }
}

/// Which table the command prints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// One row per node with used, allocatable, capacity and percentage.
    #[default]
    Summary,
    /// One row per cached image.
    ImageList,
}

/// Rendering options resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Unit sizes are scaled to.
    pub unit: UnitSize,
    /// Decimal or binary unit base.
    pub prefix: Prefix,
    /// Omit the unit suffix from sizes.
    pub without_unit: bool,
    /// Append the image count to the used column.
    pub show_count: bool,
    /// Apply ANSI colors to percentages and image tags.
    pub color: bool,
    /// Band boundaries for the percentage column.
    pub thresholds: Thresholds,
    /// Table to print.
    pub mode: OutputMode,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            unit: UnitSize::default(),
            prefix: Prefix::default(),
            without_unit: false,
            show_count: false,
            color: true,
            thresholds: Thresholds::default(),
            mode: OutputMode::default(),
        }
    }
}
