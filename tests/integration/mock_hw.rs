//! Mock GPIO pins for integration tests.
//!
//! The switch level is set from the test between ticks; the speaker records
//! every call so tests can assert on exactly what each tick wrote.

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin, StatefulOutputPin};
use tuning_fork::config::Polarity;
use tuning_fork::hardware::{GpioSpeaker, GpioSwitch};
use tuning_fork::tone::{ToneController, ToneState};

// ── Pin call record ───────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinCall {
    SetLow,
    SetHigh,
    Toggle,
}

// ── Switch ────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockSwitchPin {
    high: Rc<Cell<bool>>,
}

impl MockSwitchPin {
    pub fn set(&self, high: bool) {
        self.high.set(high);
    }
}

impl ErrorType for MockSwitchPin {
    type Error = Infallible;
}

impl InputPin for MockSwitchPin {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.high.get())
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.high.get())
    }
}

// ── Speaker ───────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct SpeakerLog {
    pub high: bool,
    pub calls: Vec<PinCall>,
}

#[derive(Clone, Default)]
pub struct MockSpeakerPin {
    log: Rc<RefCell<SpeakerLog>>,
}

#[allow(dead_code)]
impl MockSpeakerPin {
    pub fn calls(&self) -> Vec<PinCall> {
        self.log.borrow().calls.clone()
    }

    pub fn is_high(&self) -> bool {
        self.log.borrow().high
    }
}

impl ErrorType for MockSpeakerPin {
    type Error = Infallible;
}

impl OutputPin for MockSpeakerPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        let mut log = self.log.borrow_mut();
        log.high = false;
        log.calls.push(PinCall::SetLow);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        let mut log = self.log.borrow_mut();
        log.high = true;
        log.calls.push(PinCall::SetHigh);
        Ok(())
    }
}

impl StatefulOutputPin for MockSpeakerPin {
    fn is_set_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.log.borrow().high)
    }

    fn is_set_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.log.borrow().high)
    }

    fn toggle(&mut self) -> Result<(), Infallible> {
        let mut log = self.log.borrow_mut();
        log.high = !log.high;
        log.calls.push(PinCall::Toggle);
        Ok(())
    }
}

// ── Bench ─────────────────────────────────────────────────────

/// What one tick did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickRecord {
    pub calls: Vec<PinCall>,
    pub speaker_high: bool,
    pub state: ToneState,
}

pub type MockController = ToneController<GpioSwitch<MockSwitchPin>, GpioSpeaker<MockSpeakerPin>>;

/// A controller wired to mock pins.
pub struct Bench {
    pub controller: MockController,
    switch: MockSwitchPin,
    speaker: MockSpeakerPin,
    polarity: Polarity,
}

#[allow(dead_code)]
impl Bench {
    pub fn new() -> Self {
        Self::with_polarity(Polarity::ActiveHigh)
    }

    pub fn with_polarity(polarity: Polarity) -> Self {
        let switch = MockSwitchPin::default();
        let speaker = MockSpeakerPin::default();
        // idle level of the line: low when active-high, pulled up when active-low
        switch.set(polarity == Polarity::ActiveLow);
        let controller = ToneController::new(
            GpioSwitch::new(switch.clone(), polarity),
            GpioSpeaker::new(speaker.clone()),
        );
        Self {
            controller,
            switch,
            speaker,
            polarity,
        }
    }

    /// Every call made so far, construction included.
    pub fn calls(&self) -> Vec<PinCall> {
        self.speaker.calls()
    }

    pub fn speaker_high(&self) -> bool {
        self.speaker.is_high()
    }

    /// Drives the switch as pressed or released, then runs one tick.
    pub fn tick(&mut self, pressed: bool) -> TickRecord {
        self.switch.set(pressed == (self.polarity == Polarity::ActiveHigh));
        let before = self.speaker.log.borrow().calls.len();

        self.controller.on_tick();

        let log = self.speaker.log.borrow();
        TickRecord {
            calls: log.calls[before..].to_vec(),
            speaker_high: log.high,
            state: self.controller.state(),
        }
    }

    pub fn run(&mut self, pressed: &[bool]) -> Vec<TickRecord> {
        pressed.iter().map(|&level| self.tick(level)).collect()
    }
}

impl Default for Bench {
    fn default() -> Self {
        Self::new()
    }
}
