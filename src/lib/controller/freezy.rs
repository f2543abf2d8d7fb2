//! Freezy drive steering mixer, a hybrid of the "Cheesy Drive" and
//! "Culver Drive" schemes.
//!
//! Each control tick the mixer takes a throttle and a wheel reading and
//! produces one [`DriveSignal`]. Three pieces of state persist between
//! ticks: the previous wheel value (for a discrete turn-rate derivative),
//! a negative inertia accumulator that boosts or damps turn entry, and a
//! quickstop accumulator that bleeds off yaw after a quick turn. Call
//! order and decay thresholds are load-bearing; see the tests at the
//! bottom before touching either.

use crate::controller::tuning::TuningParams;
use crate::util::{handle_deadband, limit};
use core::f64::consts::{FRAC_PI_2, SQRT_2};
use libm::{atan2, fabs, pow, sin, sqrt};

/// Left/right motor powers for one tick, each bounded to [-1.0, 1.0].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriveSignal {
    left: f64,
    right: f64,
}

impl DriveSignal {
    pub const NEUTRAL: DriveSignal = DriveSignal {
        left: 0.0,
        right: 0.0,
    };

    pub fn new(left: f64, right: f64) -> DriveSignal {
        DriveSignal {
            left: limit(left, 1.0),
            right: limit(right, 1.0),
        }
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn right(&self) -> f64 {
        self.right
    }
}

/// The stateful mixer. One instance per drivetrain, mixed exactly once per
/// control tick; the accumulators assume a fixed tick period.
pub struct FreezyDrive {
    tuning: TuningParams,
    prev_wheel: f64,
    quickstop_accumulator: f64,
    neg_inertia_accumulator: f64,
}

impl Default for FreezyDrive {
    fn default() -> FreezyDrive {
        FreezyDrive::new(TuningParams::default())
    }
}

impl FreezyDrive {
    pub fn new(tuning: TuningParams) -> FreezyDrive {
        FreezyDrive {
            tuning,
            prev_wheel: 0.0,
            quickstop_accumulator: 0.0,
            neg_inertia_accumulator: 0.0,
        }
    }

    /// Drop all accumulated state, as when re-entering operator control.
    pub fn reset(&mut self) {
        self.prev_wheel = 0.0;
        self.quickstop_accumulator = 0.0;
        self.neg_inertia_accumulator = 0.0;
    }

    /// Mix from a two-axis steering stick.
    ///
    /// The stick is collapsed to a single wheel value first: deflection
    /// magnitude (mapped so a full corner still reads 1.0) scaled by the
    /// stick angle's fraction of a half turn.
    pub fn stick(
        &mut self,
        throttle: f64,
        wheel_x: f64,
        wheel_y: f64,
        quick_turn: bool,
        high_gear: bool,
    ) -> DriveSignal {
        let x = wheel_x * sqrt(2.0 - wheel_y * wheel_y);
        let y = wheel_y * sqrt(2.0 - wheel_x * wheel_x);
        let magnitude = handle_deadband(
            sqrt(x * x + y * y) / SQRT_2,
            self.tuning.magnitude_deadband,
        );
        let angle = atan2(wheel_x, wheel_y).to_degrees();
        self.mix(throttle, magnitude * (angle / 180.0), quick_turn, high_gear)
    }

    /// Mix from a single wheel axis.
    pub fn wheel(
        &mut self,
        throttle: f64,
        wheel: f64,
        quick_turn: bool,
        high_gear: bool,
    ) -> DriveSignal {
        let wheel = handle_deadband(wheel, self.tuning.wheel_deadband);
        self.mix(throttle, wheel, quick_turn, high_gear)
    }

    // The shared pipeline. `wheel` arrives already deadbanded by the entry
    // points above.
    fn mix(&mut self, throttle: f64, wheel: f64, quick_turn: bool, high_gear: bool) -> DriveSignal {
        let tuning = self.tuning;

        // Cubing sharpens low-end throttle response while keeping sign.
        let throttle = pow(handle_deadband(throttle, tuning.throttle_deadband), 3.0);

        // Turn-rate derivative, taken on the raw wheel before shaping.
        let neg_inertia = wheel - self.prev_wheel;
        self.prev_wheel = wheel;

        let mut wheel = if high_gear {
            shape_wheel(wheel, tuning.high_gear_nonlinearity, 2)
        } else {
            shape_wheel(wheel, tuning.low_gear_nonlinearity, 3)
        };

        let sensitivity;
        let neg_inertia_scalar;
        if high_gear {
            neg_inertia_scalar = tuning.high_neg_inertia_scalar;
            sensitivity = tuning.high_gear_sensitivity;
        } else {
            neg_inertia_scalar = if wheel * neg_inertia > 0.0 {
                // The wheel is being turned further out from center.
                tuning.low_neg_inertia_turn_scalar
            } else if fabs(wheel) > tuning.low_neg_inertia_threshold {
                tuning.low_neg_inertia_far_scalar
            } else {
                tuning.low_neg_inertia_close_scalar
            };
            sensitivity = tuning.low_gear_sensitivity;
        }

        self.neg_inertia_accumulator += neg_inertia * neg_inertia_scalar;
        wheel += self.neg_inertia_accumulator;
        if self.neg_inertia_accumulator > 1.0 {
            self.neg_inertia_accumulator -= 1.0;
        } else if self.neg_inertia_accumulator < -1.0 {
            self.neg_inertia_accumulator += 1.0;
        } else {
            self.neg_inertia_accumulator = 0.0;
        }

        let linear_power = throttle;

        let over_power;
        let angular_power;
        if quick_turn {
            if fabs(linear_power) < tuning.quickstop_deadband {
                let alpha = tuning.quickstop_weight;
                self.quickstop_accumulator = (1.0 - alpha) * self.quickstop_accumulator
                    + alpha * limit(wheel, 1.0) * tuning.quickstop_scalar;
            }
            over_power = 1.0;
            angular_power = wheel;
        } else {
            over_power = 0.0;
            angular_power = fabs(throttle) * wheel * sensitivity - self.quickstop_accumulator;
            // Decay thresholds are asymmetric: 2.0 above, -1.0 below.
            if self.quickstop_accumulator > 2.0 {
                self.quickstop_accumulator -= 1.0;
            } else if self.quickstop_accumulator < -1.0 {
                self.quickstop_accumulator += 1.0;
            } else {
                self.quickstop_accumulator = 0.0;
            }
        }

        let mut left = linear_power + angular_power;
        let mut right = linear_power - angular_power;

        // When one side saturates, push the excess onto the other side to
        // preserve the commanded difference. Only during quick turn; the
        // factor is zero otherwise. First matching side wins.
        if left > 1.0 {
            right -= over_power * (left - 1.0);
            left = 1.0;
        } else if right > 1.0 {
            left -= over_power * (right - 1.0);
            right = 1.0;
        } else if left < -1.0 {
            right += over_power * (-1.0 - left);
            left = -1.0;
        } else if right < -1.0 {
            left += over_power * (-1.0 - right);
            right = -1.0;
        }

        DriveSignal::new(left, right)
    }
}

// Scaled sine warp applied repeatedly; softens response around center while
// keeping the endpoints at +/-1.
fn shape_wheel(mut wheel: f64, nonlinearity: f64, passes: u32) -> f64 {
    let denominator = sin(FRAC_PI_2 * nonlinearity);
    for _ in 0..passes {
        wheel = sin(FRAC_PI_2 * nonlinearity * wheel) / denominator;
    }
    wheel
}
