//! Differential-drive steering control.
//!
//! The core is the freezy drive mixer, a blend of the "Cheesy Drive" and
//! "Culver Drive" steering schemes: throttle and wheel readings go through
//! deadbands, a sine-shaped response curve, and a pair of decaying
//! accumulators before being mixed into bounded left/right motor powers.
//! The [`controller::teleop`] module wires the mixer to an operator
//! interface and a motor sink once per control tick; [`drivers`] holds the
//! PWM-level motor output.

#![cfg_attr(not(test), no_std)]

pub mod controller;
pub mod drivers;
pub mod util;
