//! Percentage-used computation and threshold banding.

use dfi_common::config::Thresholds;
use dfi_common::constants::NOT_AVAILABLE;
use dfi_common::types::PercentageBand;

use crate::color;

/// Share of `capacity` taken by `used`, in whole percent.
///
/// Returns `None` when the capacity is zero. Results above 100 are clamped
/// to 100: used and capacity come from separate snapshots and can disagree.
#[must_use]
pub fn percentage(used: u64, capacity: u64) -> Option<u64> {
    if capacity == 0 {
        return None;
    }
    let raw = u128::from(used) * 100 / u128::from(capacity);
    Some(u64::try_from(raw).map_or(100, |p| p.min(100)))
}

/// Classifies a percentage against the thresholds.
#[must_use]
pub const fn classify(percentage: u64, thresholds: &Thresholds) -> PercentageBand {
    if percentage < thresholds.warn() {
        PercentageBand::Normal
    } else if percentage < thresholds.crit() {
        PercentageBand::Warning
    } else {
        PercentageBand::Critical
    }
}

/// Renders the `%USED` cell for a node.
///
/// `N/A` when the capacity is unknown, otherwise `NN%`, colored by band when
/// `color` is set.
#[must_use]
pub fn image_disk_usage(used: u64, capacity: u64, thresholds: &Thresholds, color: bool) -> String {
    let Some(p) = percentage(used, capacity) else {
        return NOT_AVAILABLE.to_string();
    };
    let text = format!("{p}%");
    if color {
        color::colorize(&text, classify(p, thresholds))
    } else {
        text
    }
}
