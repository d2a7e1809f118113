//! STM32 Blue Pill Speaker Bring-up
//! Checks the headphone wiring without the switch:
//! 1. Drives PA2 through the `ToneOutput` capability
//! 2. Beeps 440 Hz for one second, then stays silent for one second
//!
//! Hardware Connection:
//!   - Headphones: tip on PA2 through a 1k resistor, sleeve on GND
//!
//! Expected Behavior:
//!   - Alternating one second beeps and pauses
//!   - Each phase is logged via defmt RTT

#![no_std] // Required for embedded development
#![no_main] // Bypass standard main function

use defmt::*; // Formatted logging macros
use embassy_executor::Spawner; // Async executor
use embassy_stm32::gpio::{Level, Output, Speed}; // GPIO types
use embassy_time::{Duration, Ticker, Timer}; // Time-related functionality
use tuning_fork::{
    config::ToneConfig,
    hardware::{GpioSpeaker, ToneOutput},
};
use {defmt_rtt as _, panic_probe as _}; // Logging and panic handlers

/// Main application entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    // Initialize microcontroller peripherals with default configuration
    let p = embassy_stm32::init(Default::default());

    // 440Hz tone on the time driver's tick
    let tone = ToneConfig::new(440, embassy_time::TICK_HZ as u32).unwrap();

    // Headphones on PA2, start silent
    let mut speaker = GpioSpeaker::new(Output::new(p.PA2, Level::Low, Speed::Low));

    // Two ticks per tone cycle
    let mut ticker = Ticker::every(Duration::from_ticks(tone.period_ticks() as u64));

    // Main application loop
    loop {
        // One second of tone: invocation_hz ticks
        info!("beep");
        for _ in 0..tone.invocation_hz() {
            speaker.toggle();
            ticker.next().await;
        }

        // One second of silence with the line held low
        info!("silence");
        speaker.set_off();
        Timer::after_secs(1).await;

        // Skip the ticks missed while silent
        ticker.reset();
    }
}

// Notes:
// 1. Same speaker adapter and tick period as the tuning fork firmware
// 2. Without ticker.reset() the first beep after a pause would catch up on
//    a second's worth of ticks at full speed
// 3. A steady click instead of a tone points to a wrong tick rate feature
