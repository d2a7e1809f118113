//! Edge-triggered tone controller and the loop that ticks it.

pub mod driver;
pub mod edge;

pub use driver::{PeriodicDriver, TickSource};
pub use edge::EdgeDetector;

use crate::hardware::{LevelInput, ToneOutput};

/// Where the controller sits in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ToneState {
    /// Output held off, never toggled.
    Silent,
    /// Tone on, output currently low.
    ToneLow,
    /// Tone on, output currently high.
    ToneHigh,
}

impl ToneState {
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::Silent)
    }
}

/// Turns the tone on and off on rising edges of the switch, and inverts the
/// speaker once per tick while the tone is on.
///
/// `on_tick` must be called at a fixed rate and never re-entered; taking
/// `&mut self` and owning both pins makes the second part hold by
/// construction. The tone frequency is half the tick rate.
pub struct ToneController<I, O> {
    input: I,
    output: O,
    edge: EdgeDetector,
    enabled: bool,
    /// Mirror of the level last driven onto `output`. Only used for reporting.
    output_on: bool,
}

impl<I, O> ToneController<I, O>
where
    I: LevelInput,
    O: ToneOutput,
{
    /// Takes ownership of both lines and drives the output off.
    pub fn new(input: I, mut output: O) -> Self {
        output.set_off();
        Self {
            input,
            output,
            edge: EdgeDetector::new(),
            enabled: false,
            output_on: false,
        }
    }

    /// One tick: sample the switch, flip the tone on a rising edge, and
    /// toggle the output if the tone is on.
    ///
    /// The tick that enables the tone also toggles it. The tick that
    /// disables it forces the output off and does not toggle.
    pub fn on_tick(&mut self) {
        let current = self.input.read_level();

        if self.edge.rising(current) {
            self.enabled = !self.enabled;
            if self.enabled {
                debug!("tone on");
            } else {
                self.output.set_off();
                self.output_on = false;
                debug!("tone off");
            }
        }

        if self.enabled {
            self.output.toggle();
            self.output_on = !self.output_on;
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn state(&self) -> ToneState {
        match (self.enabled, self.output_on) {
            (false, _) => ToneState::Silent,
            (true, false) => ToneState::ToneLow,
            (true, true) => ToneState::ToneHigh,
        }
    }

    /// Switch level seen on the last tick.
    pub fn previous_input_level(&self) -> bool {
        self.edge.previous()
    }

    /// Gives the two lines back.
    pub fn release(self) -> (I, O) {
        (self.input, self.output)
    }
}
