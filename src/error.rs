use core::fmt;

/// Reasons a [`ToneConfig`](crate::config::ToneConfig) is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A tone of 0 Hz has no tick period.
    ZeroFrequency,
    /// The tone is too high for the timer to produce two ticks per cycle.
    PeriodTooShort { max_tone_hz: u32 },
    /// The tick period does not fit a 24-bit reload counter.
    PeriodTooLong { period_ticks: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroFrequency => f.write_str("tone frequency must be non-zero"),
            Self::PeriodTooShort { max_tone_hz } => {
                write!(f, "tone too high for timer, maximum is {max_tone_hz} Hz")
            }
            Self::PeriodTooLong { period_ticks } => {
                write!(f, "tick period of {period_ticks} ticks exceeds 24-bit reload")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
