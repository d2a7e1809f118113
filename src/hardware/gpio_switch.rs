use core::convert::Infallible;

use embedded_hal::digital::InputPin;

use super::traits::LevelInput;
use crate::config::Polarity;

/// Push switch on a GPIO input.
///
/// Only pins whose reads cannot fail are accepted, which is what the MCU's
/// own GPIO drivers provide.
pub struct GpioSwitch<P> {
    pin: P,
    polarity: Polarity,
}

impl<P> GpioSwitch<P>
where
    P: InputPin<Error = Infallible>,
{
    pub fn new(pin: P, polarity: Polarity) -> Self {
        Self { pin, polarity }
    }

    /// Switch wired to VCC with a pull-down.
    pub fn active_high(pin: P) -> Self {
        Self::new(pin, Polarity::ActiveHigh)
    }

    /// Switch wired to GND with a pull-up.
    pub fn active_low(pin: P) -> Self {
        Self::new(pin, Polarity::ActiveLow)
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P> LevelInput for GpioSwitch<P>
where
    P: InputPin<Error = Infallible>,
{
    fn read_level(&mut self) -> bool {
        let Ok(high) = self.pin.is_high();
        self.polarity.is_pressed(high)
    }
}
