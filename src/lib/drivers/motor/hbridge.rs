//! Dual-PWM H-bridge motor driver: one pin drives forward, the other
//! reverse, and signed power in [-1.0, 1.0] picks between them.

use crate::util::limit;
use embedded_hal::PwmPin;
use num_traits::{Num, NumCast, Zero};

pub trait Start {
    fn start(&mut self);
}

pub trait SetPower {
    /// `power` is a signed fraction of full output, limited to [-1.0, 1.0].
    fn set_power(&mut self, power: f64);
}

pub struct HBridge<X, Y> {
    pwm: (X, Y),
}

impl<X, Y> HBridge<X, Y>
where
    X: PwmPin,
    Y: PwmPin,
{
    /// `pwm` is the (forward, reverse) pin pair.
    pub fn new(pwm: (X, Y)) -> Self {
        Self { pwm }
    }
}

impl<X, Y> Start for HBridge<X, Y>
where
    X: PwmPin,
    Y: PwmPin,
{
    fn start(&mut self) {
        self.pwm.0.enable();
        self.pwm.1.enable();
    }
}

impl<X, Y> SetPower for HBridge<X, Y>
where
    X: PwmPin,
    Y: PwmPin,
    <X as PwmPin>::Duty: Num + NumCast + core::marker::Copy,
    <Y as PwmPin>::Duty: Num + NumCast + core::marker::Copy,
{
    fn set_power(&mut self, power: f64) {
        let power = limit(power, 1.0);
        if power < 0.0 {
            self.pwm.0.set_duty(<X as PwmPin>::Duty::zero());
            let duty = scaled_duty(self.pwm.1.get_max_duty(), -power);
            self.pwm.1.set_duty(duty);
        } else {
            let duty = scaled_duty(self.pwm.0.get_max_duty(), power);
            self.pwm.0.set_duty(duty);
            self.pwm.1.set_duty(<Y as PwmPin>::Duty::zero());
        }
    }
}

// Scale a [0, 1] magnitude onto the pin's duty range, truncating. A failed
// cast commands zero duty.
fn scaled_duty<DutyT>(max_duty: DutyT, magnitude: f64) -> DutyT
where
    DutyT: Num + NumCast + core::marker::Copy,
{
    let max: f64 = NumCast::from(max_duty).unwrap_or(0.0);
    NumCast::from(magnitude * max).unwrap_or_else(DutyT::zero)
}
