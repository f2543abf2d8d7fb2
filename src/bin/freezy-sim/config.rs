//! Drive script and run parameters for the host run.

use freezy_drive::controller::teleop::{DriveCommand, Steering};

/// Ticks to run after the script ends, demonstrating the input failsafe.
pub const FAILSAFE_TICKS: usize = 2;

/// The canned drive sequence, one command per tick.
pub fn script() -> Vec<DriveCommand> {
    let mut script = Vec::new();

    // roll up to half throttle, straight ahead, low gear
    for step in 1..=5 {
        script.push(wheel(0.1 * step as f64, 0.0, false, false));
    }
    // carve right on the stick in high gear
    for _ in 0..4 {
        script.push(stick(0.5, 0.3, 0.8, false, true));
    }
    // ease the stick back toward center
    for _ in 0..2 {
        script.push(stick(0.5, 0.1, 0.9, false, true));
    }
    // slow down, then pivot in place with quick turn
    script.push(wheel(0.0, 0.0, false, true));
    for _ in 0..3 {
        script.push(wheel(0.0, 1.0, true, true));
    }
    // settle; the quickstop accumulator bleeds off here
    for _ in 0..4 {
        script.push(wheel(0.0, 0.0, false, false));
    }

    script
}

fn wheel(throttle: f64, wheel: f64, quick_turn: bool, high_gear: bool) -> DriveCommand {
    DriveCommand {
        throttle,
        steering: Steering::Wheel(wheel),
        quick_turn,
        high_gear,
    }
}

fn stick(throttle: f64, x: f64, y: f64, quick_turn: bool, high_gear: bool) -> DriveCommand {
    DriveCommand {
        throttle,
        steering: Steering::Stick { x, y },
        quick_turn,
        high_gear,
    }
}
