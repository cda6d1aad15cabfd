//! Unit, color, and threshold flags.

use std::ffi::OsStr;

use clap::Args;
use dfi_common::config::{DisplayConfig, OutputMode, Thresholds};
use dfi_common::constants::{DEFAULT_CRIT_THRESHOLD, DEFAULT_WARN_THRESHOLD};
use dfi_common::error::Result;
use dfi_common::types::{Prefix, UnitSize};

/// Flags controlling how sizes and percentages are rendered.
#[derive(Args, Debug, Clone, Default)]
pub struct DisplayArgs {
    /// Use 1-byte (1-Byte) blocks rather than the default.
    #[arg(short = 'b', long)]
    pub bytes: bool,

    /// Use 1024-byte (1-Kbyte) blocks rather than the default.
    #[arg(short = 'k', long)]
    pub kilobytes: bool,

    /// Use 1048576-byte (1-Mbyte) blocks rather than the default.
    #[arg(short = 'm', long)]
    pub megabytes: bool,

    /// Use 1073741824-byte (1-Gbyte) blocks rather than the default.
    #[arg(short = 'g', long)]
    pub gigabytes: bool,

    /// Use 1024 for basic unit calculation instead of 1000. (print like "KiB")
    #[arg(short = 'B', long)]
    pub binary_prefix: bool,

    /// Do not print size with unit string.
    #[arg(long)]
    pub without_unit: bool,

    /// Print number of images.
    #[arg(short = 'c', long)]
    pub count: bool,

    /// Print without ansi color. A non-empty `NO_COLOR` has the same effect.
    #[arg(long)]
    pub no_color: bool,

    /// Threshold of warn(yellow) color for USED column.
    #[arg(
        long,
        env = "KUBECTL_DFI_WARN_THRESHOLD",
        default_value_t = DEFAULT_WARN_THRESHOLD
    )]
    pub warn_threshold: u64,

    /// Threshold of critical(red) color for USED column.
    #[arg(
        long,
        env = "KUBECTL_DFI_CRIT_THRESHOLD",
        default_value_t = DEFAULT_CRIT_THRESHOLD
    )]
    pub crit_threshold: u64,
}

/// Whether output is colored.
///
/// Follows the `NO_COLOR` convention that crossterm applies too: any
/// non-empty value disables color, `0` included.
fn color_enabled(no_color_flag: bool, no_color_env: Option<&OsStr>) -> bool {
    !no_color_flag && no_color_env.is_none_or(OsStr::is_empty)
}

impl DisplayArgs {
    /// Resolves the flags into a [`DisplayConfig`].
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the warn threshold exceeds the
    /// critical one.
    pub fn to_config(&self, list: bool) -> Result<DisplayConfig> {
        let thresholds = Thresholds::new(self.warn_threshold, self.crit_threshold)?;
        Ok(DisplayConfig {
            unit: UnitSize::from_flags(self.bytes, self.kilobytes, self.megabytes, self.gigabytes),
            prefix: if self.binary_prefix {
                Prefix::Binary
            } else {
                Prefix::Decimal
            },
            without_unit: self.without_unit,
            show_count: self.count,
            color: color_enabled(self.no_color, std::env::var_os("NO_COLOR").as_deref()),
            thresholds,
            mode: if list {
                OutputMode::ImageList
            } else {
                OutputMode::Summary
            },
        })
    }
}
