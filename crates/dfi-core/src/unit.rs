//! Byte unit selection and size rendering.

use dfi_common::constants::NOT_AVAILABLE;
use dfi_common::types::{Prefix, UnitSize, UnitSpec};

/// Returns the divisor and suffix for a unit and prefix.
#[must_use]
pub const fn unit_spec(unit: UnitSize, prefix: Prefix) -> UnitSpec {
    let suffix = match (unit, prefix) {
        (UnitSize::Byte, _) => "B",
        (UnitSize::Kilo, Prefix::Decimal) => "K",
        (UnitSize::Mega, Prefix::Decimal) => "M",
        (UnitSize::Giga, Prefix::Decimal) => "G",
        (UnitSize::Kilo, Prefix::Binary) => "Ki",
        (UnitSize::Mega, Prefix::Binary) => "Mi",
        (UnitSize::Giga, Prefix::Binary) => "Gi",
    };
    UnitSpec {
        divisor: prefix.base().pow(unit.exponent()),
        suffix,
    }
}

/// Maps the four unit flags and the binary-prefix flag to a [`UnitSpec`].
///
/// If several unit flags are set the largest unit wins; with none set the
/// result is kilo.
#[must_use]
pub const fn select_unit(
    use_bytes: bool,
    use_kilo: bool,
    use_mega: bool,
    use_giga: bool,
    binary_prefix: bool,
) -> UnitSpec {
    let prefix = if binary_prefix {
        Prefix::Binary
    } else {
        Prefix::Decimal
    };
    unit_spec(
        UnitSize::from_flags(use_bytes, use_kilo, use_mega, use_giga),
        prefix,
    )
}

/// Renders a byte count in the given unit.
///
/// Zero renders as `N/A`: older clusters report no ephemeral storage and a
/// zero size is indistinguishable from an absent one.
#[must_use]
pub fn format_size(bytes: u64, spec: &UnitSpec, without_unit: bool) -> String {
    if bytes == 0 {
        return NOT_AVAILABLE.to_string();
    }
    let scaled = bytes / spec.divisor;
    if without_unit {
        scaled.to_string()
    } else {
        format!("{scaled}{}", spec.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_flag_combinations() -> impl Iterator<Item = [bool; 4]> {
        (0u8..16).map(|bits| [bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0])
    }

    fn expected_largest(flags: [bool; 4]) -> UnitSize {
        match flags {
            [_, _, _, true] => UnitSize::Giga,
            [_, _, true, false] => UnitSize::Mega,
            [_, true, false, false] | [false, false, false, false] => UnitSize::Kilo,
            [true, false, false, false] => UnitSize::Byte,
        }
    }

    #[test]
    fn select_unit_largest_requested_unit_wins() {
        for binary in [false, true] {
            let prefix = if binary { Prefix::Binary } else { Prefix::Decimal };
            for flags in all_flag_combinations() {
                let [b, k, m, g] = flags;
                assert_eq!(
                    select_unit(b, k, m, g, binary),
                    unit_spec(expected_largest(flags), prefix),
                    "flags {flags:?} binary {binary}"
                );
            }
        }
    }

    #[test]
    fn select_unit_defaults_to_kilo() {
        assert_eq!(
            select_unit(false, false, false, false, false),
            UnitSpec { divisor: 1000, suffix: "K" }
        );
        assert_eq!(
            select_unit(false, false, false, false, true),
            UnitSpec { divisor: 1024, suffix: "Ki" }
        );
    }

    #[test]
    fn decimal_table() {
        assert_eq!(unit_spec(UnitSize::Byte, Prefix::Decimal), UnitSpec { divisor: 1, suffix: "B" });
        assert_eq!(unit_spec(UnitSize::Kilo, Prefix::Decimal), UnitSpec { divisor: 1000, suffix: "K" });
        assert_eq!(
            unit_spec(UnitSize::Mega, Prefix::Decimal),
            UnitSpec { divisor: 1_000_000, suffix: "M" }
        );
        assert_eq!(
            unit_spec(UnitSize::Giga, Prefix::Decimal),
            UnitSpec { divisor: 1_000_000_000, suffix: "G" }
        );
    }

    #[test]
    fn binary_table() {
        assert_eq!(unit_spec(UnitSize::Kilo, Prefix::Binary), UnitSpec { divisor: 1024, suffix: "Ki" });
        assert_eq!(
            unit_spec(UnitSize::Mega, Prefix::Binary),
            UnitSpec { divisor: 1_048_576, suffix: "Mi" }
        );
        assert_eq!(
            unit_spec(UnitSize::Giga, Prefix::Binary),
            UnitSpec { divisor: 1_073_741_824, suffix: "Gi" }
        );
    }

    #[test]
    fn binary_prefix_never_changes_bytes() {
        assert_eq!(
            unit_spec(UnitSize::Byte, Prefix::Binary),
            unit_spec(UnitSize::Byte, Prefix::Decimal)
        );
    }

    #[test]
    fn format_size_decimal_kilo() {
        let spec = unit_spec(UnitSize::Kilo, Prefix::Decimal);
        assert_eq!(format_size(12345, &spec, true), "12");
        assert_eq!(format_size(12345, &spec, false), "12K");
        assert_eq!(format_size(6000, &spec, false), "6K");
    }

    #[test]
    fn format_size_binary_kilo() {
        let spec = unit_spec(UnitSize::Kilo, Prefix::Binary);
        assert_eq!(format_size(12345, &spec, true), "12");
        assert_eq!(format_size(6000, &spec, false), "5Ki");
    }

    #[test]
    fn format_size_zero_is_not_available() {
        for unit in [UnitSize::Byte, UnitSize::Kilo, UnitSize::Mega, UnitSize::Giga] {
            for prefix in [Prefix::Decimal, Prefix::Binary] {
                for without_unit in [false, true] {
                    assert_eq!(format_size(0, &unit_spec(unit, prefix), without_unit), "N/A");
                }
            }
        }
    }

    #[test]
    fn format_size_below_one_unit_truncates_to_zero() {
        let spec = unit_spec(UnitSize::Giga, Prefix::Decimal);
        assert_eq!(format_size(999, &spec, false), "0G");
    }
}
