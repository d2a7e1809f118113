//! Tone timing configuration.
//!
//! The controller inverts the speaker once per tick, so one tone cycle takes
//! two ticks: the tick rate is twice the tone frequency and the tick period
//! is `timer_tick_hz / (2 * tone_hz)` timer ticks, rounded down.

use crate::error::ConfigError;

/// Largest period a 24-bit reload counter such as SysTick can hold.
pub const MAX_PERIOD_TICKS: u32 = 0x00FF_FFFF;

/// Resolution of the firmware's tick timer.
pub const DEFAULT_TIMER_TICK_HZ: u32 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToneConfig {
    tone_hz: u32,
    timer_tick_hz: u32,
}

impl ToneConfig {
    /// Concert A on a 1 MHz timer: 880 ticks per second, 1136 us apart.
    pub const A440: Self = Self {
        tone_hz: 440,
        timer_tick_hz: DEFAULT_TIMER_TICK_HZ,
    };

    pub fn new(tone_hz: u32, timer_tick_hz: u32) -> Result<Self, ConfigError> {
        if tone_hz == 0 {
            warn!("rejecting 0 Hz tone");
            return Err(ConfigError::ZeroFrequency);
        }

        let config = Self {
            tone_hz,
            timer_tick_hz,
        };
        let period_ticks = config.period_ticks();

        if period_ticks == 0 {
            warn!("{} Hz tone is too high for a {} Hz timer", tone_hz, timer_tick_hz);
            return Err(ConfigError::PeriodTooShort {
                max_tone_hz: timer_tick_hz / 2,
            });
        }
        if period_ticks > MAX_PERIOD_TICKS {
            warn!("{} tick period does not fit the reload counter", period_ticks);
            return Err(ConfigError::PeriodTooLong { period_ticks });
        }

        Ok(config)
    }

    pub const fn tone_hz(&self) -> u32 {
        self.tone_hz
    }

    pub const fn timer_tick_hz(&self) -> u32 {
        self.timer_tick_hz
    }

    /// Ticks per second, two per tone cycle.
    pub const fn invocation_hz(&self) -> u64 {
        2 * self.tone_hz as u64
    }

    /// Timer ticks between two invocations of the controller.
    pub const fn period_ticks(&self) -> u32 {
        match (self.timer_tick_hz as u64).checked_div(self.invocation_hz()) {
            Some(ticks) => ticks as u32,
            None => 0,
        }
    }

    /// Frequency actually produced once the period is rounded to whole ticks.
    pub const fn actual_tone_hz(&self) -> u32 {
        match (self.timer_tick_hz as u64).checked_div(2 * self.period_ticks() as u64) {
            Some(hz) => hz as u32,
            None => 0,
        }
    }
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self::A440
    }
}

/// Which pin level means "pressed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Switch pulls the pin to VCC; pin needs a pull-down.
    #[default]
    ActiveHigh,
    /// Switch pulls the pin to GND; pin needs a pull-up.
    ActiveLow,
}

impl Polarity {
    pub const fn is_pressed(self, pin_high: bool) -> bool {
        match self {
            Self::ActiveHigh => pin_high,
            Self::ActiveLow => !pin_high,
        }
    }
}
