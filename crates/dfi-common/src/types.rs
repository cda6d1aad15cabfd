//! Domain primitive types used across the kubectl-dfi workspace.

use serde::{Deserialize, Serialize};

/// A container image cached on a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// References the image is known by (`repository:tag` or digest).
    pub names: Vec<String>,
    /// Size of the image in bytes.
    pub size_bytes: u64,
}

impl Image {
    /// Creates an image record from its names and size.
    #[must_use]
    pub fn new(names: Vec<String>, size_bytes: u64) -> Self {
        Self { names, size_bytes }
    }

    /// Returns the name shown in image listings.
    ///
    /// With more than one name the second entry is used, otherwise the only
    /// one. An image without names yields an empty string.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.names.as_slice() {
            [] => "",
            [only] => only,
            [_, second, ..] => second,
        }
    }
}

/// A cluster node with its ephemeral-storage figures and cached images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Node name, unique within one query result.
    pub name: String,
    /// Reported ephemeral-storage capacity in bytes, if the cluster reports it.
    pub capacity_bytes: Option<u64>,
    /// Reported allocatable ephemeral storage in bytes, if the cluster reports it.
    pub allocatable_bytes: Option<u64>,
    /// Images cached on the node, in the order the API returned them.
    #[serde(default)]
    pub images: Vec<Image>,
}

impl Node {
    /// Creates a node without storage figures or images.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            capacity_bytes: None,
            allocatable_bytes: None,
            images: Vec::new(),
        }
    }

    /// Capacity in bytes, with an unreported value counted as zero.
    #[must_use]
    pub fn capacity(&self) -> u64 {
        self.capacity_bytes.unwrap_or(0)
    }

    /// Allocatable bytes, with an unreported value counted as zero.
    #[must_use]
    pub fn allocatable(&self) -> u64 {
        self.allocatable_bytes.unwrap_or(0)
    }
}

/// Unit a byte count is scaled to before display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UnitSize {
    /// Plain bytes.
    Byte,
    /// Kilobytes or kibibytes.
    #[default]
    Kilo,
    /// Megabytes or mebibytes.
    Mega,
    /// Gigabytes or gibibytes.
    Giga,
}

impl UnitSize {
    /// Picks the unit from the four unit flags.
    ///
    /// The largest requested unit wins; with none requested the default
    /// (kilo) is returned.
    #[must_use]
    pub const fn from_flags(bytes: bool, kilo: bool, mega: bool, giga: bool) -> Self {
        if giga {
            Self::Giga
        } else if mega {
            Self::Mega
        } else if kilo {
            Self::Kilo
        } else if bytes {
            Self::Byte
        } else {
            Self::Kilo
        }
    }

    /// Power of the prefix base this unit corresponds to.
    #[must_use]
    pub const fn exponent(self) -> u32 {
        match self {
            Self::Byte => 0,
            Self::Kilo => 1,
            Self::Mega => 2,
            Self::Giga => 3,
        }
    }
}

/// Base used to scale units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Prefix {
    /// SI prefixes, base 1000 (`K`, `M`, `G`).
    #[default]
    Decimal,
    /// Binary prefixes, base 1024 (`Ki`, `Mi`, `Gi`).
    Binary,
}

impl Prefix {
    /// Multiplier between consecutive units.
    #[must_use]
    pub const fn base(self) -> u64 {
        match self {
            Self::Decimal => 1000,
            Self::Binary => 1024,
        }
    }
}

/// Divisor and suffix used to render a byte count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitSpec {
    /// Number of bytes in one unit. Always positive.
    pub divisor: u64,
    /// Suffix appended after the scaled value.
    pub suffix: &'static str,
}

/// Classification of a usage percentage against the thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PercentageBand {
    /// Below the warn threshold.
    Normal,
    /// At or above the warn threshold, below the critical one.
    Warning,
    /// At or above the critical threshold.
    Critical,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_second_entry() {
        let image = Image::new(vec!["image1".into(), "image2".into()], 1);
        assert_eq!(image.display_name(), "image2");
    }

    #[test]
    fn display_name_with_three_entries_still_uses_second() {
        let image = Image::new(vec!["a".into(), "b".into(), "c".into()], 1);
        assert_eq!(image.display_name(), "b");
    }

    #[test]
    fn display_name_uses_only_entry() {
        let image = Image::new(vec!["image1".into()], 1);
        assert_eq!(image.display_name(), "image1");
    }

    #[test]
    fn display_name_empty_without_names() {
        let image = Image::new(Vec::new(), 1);
        assert_eq!(image.display_name(), "");
    }

    #[test]
    fn unit_from_flags_defaults_to_kilo() {
        assert_eq!(UnitSize::from_flags(false, false, false, false), UnitSize::Kilo);
    }

    #[test]
    fn unit_from_flags_largest_wins() {
        assert_eq!(UnitSize::from_flags(true, true, false, false), UnitSize::Kilo);
        assert_eq!(UnitSize::from_flags(true, false, true, false), UnitSize::Mega);
        assert_eq!(UnitSize::from_flags(true, true, true, true), UnitSize::Giga);
        assert_eq!(UnitSize::from_flags(true, false, false, false), UnitSize::Byte);
    }

    #[test]
    fn node_missing_figures_count_as_zero() {
        let node = Node::new("node1");
        assert_eq!(node.capacity(), 0);
        assert_eq!(node.allocatable(), 0);
    }

    #[test]
    fn node_deserializes_without_images() {
        let node: Node = serde_json::from_str(
            r#"{"name":"node1","capacity_bytes":100,"allocatable_bytes":null}"#,
        )
        .expect("parse node");
        assert_eq!(node.capacity(), 100);
        assert!(node.images.is_empty());
    }
}
