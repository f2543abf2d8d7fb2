//! Console-backed collaborators for the host run.

use freezy_drive::controller::freezy::DriveSignal;
use freezy_drive::controller::teleop::{DriveCommand, DriveInput, DriveOutput};

/// Replays a fixed command script, then fails like an unplugged interface.
pub struct ScriptInput {
    script: Vec<DriveCommand>,
    next: usize,
}

#[derive(Debug)]
pub struct ScriptOver;

impl ScriptInput {
    pub fn new(script: Vec<DriveCommand>) -> ScriptInput {
        ScriptInput { script: script, next: 0 }
    }
}

impl DriveInput for ScriptInput {
    type Error = ScriptOver;

    fn read(&mut self) -> Result<DriveCommand, ScriptOver> {
        match self.script.get(self.next) {
            Some(command) => {
                self.next += 1;
                Ok(*command)
            }
            None => Err(ScriptOver),
        }
    }
}

/// Prints each applied motor command as one table row.
pub struct ConsoleOutput {
    tick: usize,
}

impl ConsoleOutput {
    pub fn new() -> ConsoleOutput {
        ConsoleOutput { tick: 0 }
    }
}

impl DriveOutput for ConsoleOutput {
    type Error = std::convert::Infallible;

    fn set_power(&mut self, signal: DriveSignal, high_gear: bool) -> Result<(), Self::Error> {
        let gear = if high_gear { "high" } else { "low" };
        println!(
            "{:>4}  {:+.4}  {:+.4}  {:>4}",
            self.tick,
            signal.left(),
            signal.right(),
            gear
        );
        self.tick += 1;
        Ok(())
    }
}
