//! Tuning values for the freezy drive mixer, kept in one place so every
//! consumer shares the same set.

pub const THROTTLE_DEADBAND: f64 = 0.02;
pub const MAGNITUDE_DEADBAND: f64 = 0.02;
pub const WHEEL_DEADBAND: f64 = 0.02;

pub const HIGH_GEAR_NONLINEARITY: f64 = 0.65;
pub const LOW_GEAR_NONLINEARITY: f64 = 0.65;

pub const HIGH_NEG_INERTIA_SCALAR: f64 = 4.0;

pub const LOW_NEG_INERTIA_THRESHOLD: f64 = 0.65;
pub const LOW_NEG_INERTIA_TURN_SCALAR: f64 = 3.5;
pub const LOW_NEG_INERTIA_CLOSE_SCALAR: f64 = 4.0;
pub const LOW_NEG_INERTIA_FAR_SCALAR: f64 = 5.0;

pub const HIGH_GEAR_SENSITIVITY: f64 = 0.95;
pub const LOW_GEAR_SENSITIVITY: f64 = 1.3;

pub const QUICKSTOP_DEADBAND: f64 = 0.2;
pub const QUICKSTOP_WEIGHT: f64 = 0.1;
pub const QUICKSTOP_SCALAR: f64 = 5.0;

/// Full tuning set for one mixer instance. Read-only once the mixer is
/// constructed; retuning means building a new mixer.
#[derive(Clone, Copy)]
pub struct TuningParams {
    pub throttle_deadband: f64,
    pub magnitude_deadband: f64,
    pub wheel_deadband: f64,
    pub high_gear_nonlinearity: f64,
    pub low_gear_nonlinearity: f64,
    pub high_neg_inertia_scalar: f64,
    pub low_neg_inertia_threshold: f64,
    pub low_neg_inertia_turn_scalar: f64,
    pub low_neg_inertia_close_scalar: f64,
    pub low_neg_inertia_far_scalar: f64,
    pub high_gear_sensitivity: f64,
    pub low_gear_sensitivity: f64,
    pub quickstop_deadband: f64,
    pub quickstop_weight: f64,
    pub quickstop_scalar: f64,
}

impl Default for TuningParams {
    fn default() -> TuningParams {
        TuningParams {
            throttle_deadband: THROTTLE_DEADBAND,
            magnitude_deadband: MAGNITUDE_DEADBAND,
            wheel_deadband: WHEEL_DEADBAND,
            high_gear_nonlinearity: HIGH_GEAR_NONLINEARITY,
            low_gear_nonlinearity: LOW_GEAR_NONLINEARITY,
            high_neg_inertia_scalar: HIGH_NEG_INERTIA_SCALAR,
            low_neg_inertia_threshold: LOW_NEG_INERTIA_THRESHOLD,
            low_neg_inertia_turn_scalar: LOW_NEG_INERTIA_TURN_SCALAR,
            low_neg_inertia_close_scalar: LOW_NEG_INERTIA_CLOSE_SCALAR,
            low_neg_inertia_far_scalar: LOW_NEG_INERTIA_FAR_SCALAR,
            high_gear_sensitivity: HIGH_GEAR_SENSITIVITY,
            low_gear_sensitivity: LOW_GEAR_SENSITIVITY,
            quickstop_deadband: QUICKSTOP_DEADBAND,
            quickstop_weight: QUICKSTOP_WEIGHT,
            quickstop_scalar: QUICKSTOP_SCALAR,
        }
    }
}
