//! Drivetrain output stage: one motor group per side plus the gear shifter.

use crate::controller::freezy::DriveSignal;
use crate::controller::teleop::DriveOutput;
use crate::drivers::motor::hbridge;
use embedded_hal::digital::v2::OutputPin;

/// Left and right drive motors with a two-speed gearbox shifter.
///
/// Wiring convention: the shifter solenoid is energized for high gear, so a
/// de-energized pin leaves the drivetrain in low gear.
pub struct TankMotors<LeftT, RightT, ShifterT> {
    left: LeftT,
    right: RightT,
    shifter: ShifterT,
}

impl<LeftT, RightT, ShifterT> TankMotors<LeftT, RightT, ShifterT>
where
    LeftT: hbridge::Start + hbridge::SetPower,
    RightT: hbridge::Start + hbridge::SetPower,
    ShifterT: OutputPin,
{
    pub fn new(
        left: LeftT,
        right: RightT,
        shifter: ShifterT,
    ) -> TankMotors<LeftT, RightT, ShifterT> {
        let mut motors = TankMotors {
            left: left,
            right: right,
            shifter: shifter,
        };
        motors.left.start();
        motors.right.start();
        return motors;
    }

    pub fn stop(&mut self) {
        self.left.set_power(0.0);
        self.right.set_power(0.0);
    }
}

impl<LeftT, RightT, ShifterT> DriveOutput for TankMotors<LeftT, RightT, ShifterT>
where
    LeftT: hbridge::Start + hbridge::SetPower,
    RightT: hbridge::Start + hbridge::SetPower,
    ShifterT: OutputPin,
{
    type Error = ShifterT::Error;

    fn set_power(&mut self, signal: DriveSignal, high_gear: bool) -> Result<(), Self::Error> {
        self.left.set_power(signal.left());
        self.right.set_power(signal.right());
        if high_gear {
            self.shifter.set_high()
        } else {
            self.shifter.set_low()
        }
    }
}
