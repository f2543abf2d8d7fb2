//! Small numeric helpers shared by the steering and driver code.

use num_traits::{Num, Signed};

/// Constrain `value` to the symmetric range `[-max, max]`.
pub fn limit<ItemT>(value: ItemT, max: ItemT) -> ItemT
where
    ItemT: Num + Signed + PartialOrd + core::marker::Copy,
{
    limit_range(value, -max, max)
}

/// Constrain `value` to `[min, max]`.
pub fn limit_range<ItemT>(value: ItemT, min: ItemT, max: ItemT) -> ItemT
where
    ItemT: Num + PartialOrd + core::marker::Copy,
{
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Zero out `value` when it falls within `deadband` of zero.
///
/// Values just outside the band pass through unchanged; they are not
/// rescaled to start from zero at the band edge.
pub fn handle_deadband<ItemT>(value: ItemT, deadband: ItemT) -> ItemT
where
    ItemT: Num + Signed + PartialOrd + core::marker::Copy,
{
    if value.abs() > deadband.abs() {
        value
    } else {
        ItemT::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_matches_limit_range() {
        for v in [-2.0, -1.0, -0.5, 0.0, 0.5, 1.0, 2.0] {
            assert_eq!(limit(v, 1.0), limit_range(v, -1.0, 1.0));
        }
    }

    #[test]
    fn limit_range_constrains_to_bounds() {
        assert_eq!(limit_range(1.5, -1.0, 1.0), 1.0);
        assert_eq!(limit_range(-3.0, -1.0, 1.0), -1.0);
        assert_eq!(limit_range(0.25, -1.0, 1.0), 0.25);
        assert_eq!(limit_range(-1.0, -1.0, 1.0), -1.0);
    }

    #[test]
    fn limit_range_works_on_integers() {
        assert_eq!(limit_range(5, 0, 10), 5);
        assert_eq!(limit_range(-4, 0, 10), 0);
        assert_eq!(limit(-12i32, 10), -10);
    }

    #[test]
    fn limit_passes_nan_through() {
        assert!(limit(f64::NAN, 1.0).is_nan());
    }

    #[test]
    fn deadband_zeroes_values_inside_the_band() {
        assert_eq!(handle_deadband(0.015, 0.02), 0.0);
        assert_eq!(handle_deadband(-0.02, 0.02), 0.0);
        assert_eq!(handle_deadband(0.0, 0.02), 0.0);
    }

    #[test]
    fn deadband_passes_values_through_unscaled() {
        assert_eq!(handle_deadband(0.021, 0.02), 0.021);
        assert_eq!(handle_deadband(-0.5, 0.02), -0.5);
    }

    #[test]
    fn deadband_width_is_taken_by_magnitude() {
        assert_eq!(handle_deadband(0.5, -0.6), 0.0);
        assert_eq!(handle_deadband(-0.7, -0.6), -0.7);
    }
}
