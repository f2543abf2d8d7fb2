//! Per-tick operator control flow: read the interface, run the mixer, hand
//! the result to the drivetrain.
//!
//! The loop body is deliberately free of hardware handles. The scheduler
//! that provides the tick, the joystick or wheel behind [`DriveInput`], and
//! the motors behind [`DriveOutput`] are all supplied by the caller.

use crate::controller::freezy::{DriveSignal, FreezyDrive};
use crate::controller::tuning::TuningParams;
use log::warn;

/// One tick's worth of operator input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriveCommand {
    pub throttle: f64,
    pub steering: Steering,
    pub quick_turn: bool,
    pub high_gear: bool,
}

impl DriveCommand {
    /// Zero throttle, centered steering, low gear.
    pub const NEUTRAL: DriveCommand = DriveCommand {
        throttle: 0.0,
        steering: Steering::Wheel(0.0),
        quick_turn: false,
        high_gear: false,
    };
}

/// Steering reading, either a two-axis stick or a single wheel axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Steering {
    Stick { x: f64, y: f64 },
    Wheel(f64),
}

/// Source of operator commands, read once per tick.
pub trait DriveInput {
    type Error;
    fn read(&mut self) -> Result<DriveCommand, Self::Error>;
}

/// Sink for the mixed output, applied once per tick.
pub trait DriveOutput {
    type Error;
    fn set_power(&mut self, signal: DriveSignal, high_gear: bool) -> Result<(), Self::Error>;
}

/// The teleop loop body: owns the mixer and both collaborators.
pub struct Teleop<InputT, OutputT> {
    input: InputT,
    output: OutputT,
    drive: FreezyDrive,
}

impl<InputT, OutputT> Teleop<InputT, OutputT>
where
    InputT: DriveInput,
    OutputT: DriveOutput,
{
    pub fn new(input: InputT, output: OutputT, tuning: TuningParams) -> Teleop<InputT, OutputT> {
        Teleop {
            input: input,
            output: output,
            drive: FreezyDrive::new(tuning),
        }
    }

    /// Drop the mixer's accumulated state, as when re-entering teleop after
    /// another mode ran the drivetrain.
    pub fn reset(&mut self) {
        self.drive.reset();
    }

    /// Run one control tick.
    ///
    /// A failed input read commands neutral for this tick rather than
    /// erroring out; losing the operator interface must never leave the
    /// last power command standing. Output errors propagate to the caller.
    pub fn step(&mut self) -> Result<DriveSignal, OutputT::Error> {
        let command = self.input.read().unwrap_or_else(|_| {
            warn!("drive input read failed, commanding neutral");
            DriveCommand::NEUTRAL
        });

        let signal = match command.steering {
            Steering::Stick { x, y } => self.drive.stick(
                command.throttle,
                x,
                y,
                command.quick_turn,
                command.high_gear,
            ),
            Steering::Wheel(wheel) => self.drive.wheel(
                command.throttle,
                wheel,
                command.quick_turn,
                command.high_gear,
            ),
        };

        self.output.set_power(signal, command.high_gear)?;
        Ok(signal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ScriptedInput {
        commands: Vec<Result<DriveCommand, ()>>,
        next: usize,
    }

    impl ScriptedInput {
        fn new(commands: Vec<Result<DriveCommand, ()>>) -> ScriptedInput {
            ScriptedInput { commands, next: 0 }
        }
    }

    impl DriveInput for ScriptedInput {
        type Error = ();

        fn read(&mut self) -> Result<DriveCommand, ()> {
            let command = self.commands[self.next];
            self.next += 1;
            command
        }
    }

    #[derive(Default)]
    struct RecordingOutput {
        applied: Vec<(DriveSignal, bool)>,
        fail: bool,
    }

    impl DriveOutput for RecordingOutput {
        type Error = &'static str;

        fn set_power(&mut self, signal: DriveSignal, high_gear: bool) -> Result<(), Self::Error> {
            if self.fail {
                return Err("output offline");
            }
            self.applied.push((signal, high_gear));
            Ok(())
        }
    }

    fn wheel_command(throttle: f64, wheel: f64, high_gear: bool) -> DriveCommand {
        DriveCommand {
            throttle,
            steering: Steering::Wheel(wheel),
            quick_turn: false,
            high_gear,
        }
    }

    #[test]
    fn step_mixes_and_applies_wheel_commands() {
        let input = ScriptedInput::new(vec![Ok(wheel_command(0.5, 0.25, false))]);
        let mut teleop = Teleop::new(input, RecordingOutput::default(), TuningParams::default());

        let applied = teleop.step().unwrap();

        let mut reference = FreezyDrive::default();
        let expected = reference.wheel(0.5, 0.25, false, false);
        assert_eq!(applied, expected);
        assert_eq!(teleop.output.applied, vec![(expected, false)]);
    }

    #[test]
    fn step_dispatches_stick_steering() {
        let command = DriveCommand {
            throttle: 0.1,
            steering: Steering::Stick { x: -0.4, y: 0.6 },
            quick_turn: true,
            high_gear: false,
        };
        let input = ScriptedInput::new(vec![Ok(command)]);
        let mut teleop = Teleop::new(input, RecordingOutput::default(), TuningParams::default());

        let applied = teleop.step().unwrap();

        let mut reference = FreezyDrive::default();
        let expected = reference.stick(0.1, -0.4, 0.6, true, false);
        assert_eq!(applied, expected);
    }

    #[test]
    fn failed_read_commands_neutral_for_the_tick() {
        let input = ScriptedInput::new(vec![Err(()), Ok(wheel_command(0.5, 0.0, true))]);
        let mut teleop = Teleop::new(input, RecordingOutput::default(), TuningParams::default());

        let applied = teleop.step().unwrap();
        assert_eq!(applied, DriveSignal::NEUTRAL);
        assert_eq!(teleop.output.applied[0], (DriveSignal::NEUTRAL, false));

        // The loop keeps running on the next good read.
        teleop.step().unwrap();
        assert_eq!(teleop.output.applied.len(), 2);
    }

    #[test]
    fn gear_flag_reaches_the_output() {
        let input = ScriptedInput::new(vec![
            Ok(wheel_command(0.2, 0.0, true)),
            Ok(wheel_command(0.2, 0.0, false)),
        ]);
        let mut teleop = Teleop::new(input, RecordingOutput::default(), TuningParams::default());

        teleop.step().unwrap();
        teleop.step().unwrap();
        assert!(teleop.output.applied[0].1);
        assert!(!teleop.output.applied[1].1);
    }

    #[test]
    fn output_errors_propagate() {
        let input = ScriptedInput::new(vec![Ok(wheel_command(0.0, 0.0, false))]);
        let output = RecordingOutput {
            fail: true,
            ..Default::default()
        };
        let mut teleop = Teleop::new(input, output, TuningParams::default());

        assert_eq!(teleop.step(), Err("output offline"));
    }

    #[test]
    fn reset_returns_the_mixer_to_fresh_state() {
        let input = ScriptedInput::new(vec![
            Ok(DriveCommand {
                throttle: 0.0,
                steering: Steering::Wheel(1.0),
                quick_turn: true,
                high_gear: true,
            }),
            Ok(wheel_command(0.0, 0.0, false)),
        ]);
        let mut teleop = Teleop::new(input, RecordingOutput::default(), TuningParams::default());

        teleop.step().unwrap();
        teleop.reset();
        let applied = teleop.step().unwrap();
        assert_eq!(applied, DriveSignal::NEUTRAL);
    }
}
