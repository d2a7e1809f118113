use core::convert::Infallible;

use embedded_hal::digital::StatefulOutputPin;

use super::traits::ToneOutput;

/// Speaker or headphone driven straight from a push-pull GPIO, off = low.
pub struct GpioSpeaker<P> {
    pin: P,
}

impl<P> GpioSpeaker<P>
where
    P: StatefulOutputPin<Error = Infallible>,
{
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P> ToneOutput for GpioSpeaker<P>
where
    P: StatefulOutputPin<Error = Infallible>,
{
    fn set_off(&mut self) {
        let Ok(()) = self.pin.set_low();
    }

    fn toggle(&mut self) {
        let Ok(()) = self.pin.toggle();
    }
}
