//! Scripted host run of the steering stack.
//!
//! Feeds a canned drive sequence through the teleop loop and prints the
//! motor command each tick produces, then keeps ticking past the end of
//! the script to show the neutral failsafe taking over.

mod config;
mod io;

use freezy_drive::controller::teleop::Teleop;
use freezy_drive::controller::tuning::TuningParams;
use io::{ConsoleOutput, ScriptInput};

fn main() {
    let script = config::script();
    let scripted_ticks = script.len();

    let mut teleop = Teleop::new(
        ScriptInput::new(script),
        ConsoleOutput::new(),
        TuningParams::default(),
    );

    println!("tick     left    right  gear");
    for tick in 0..scripted_ticks + config::FAILSAFE_TICKS {
        if tick == scripted_ticks {
            println!("---- script over: input reads fail, neutral takes over ----");
        }
        let _ = teleop.step();
    }
}
