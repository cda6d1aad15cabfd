//! Per-node image usage totals.

use dfi_common::types::Image;

/// Total size and number of images cached on a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Usage {
    /// Sum of all image sizes in bytes.
    pub total_bytes: u64,
    /// Number of images.
    pub count: usize,
}

/// Sums image sizes and counts images.
#[must_use]
pub fn aggregate(images: &[Image]) -> Usage {
    let total_bytes = images
        .iter()
        .fold(0u64, |acc, image| acc.saturating_add(image.size_bytes));
    Usage {
        total_bytes,
        count: images.len(),
    }
}
