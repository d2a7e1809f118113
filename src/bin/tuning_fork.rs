//! STM32 Blue Pill 440 Hz Tuning Fork
//! =============================================================================================
//!
//! Plays a 440 Hz square wave into headphones. Each press of the switch turns
//! the tone on or off.
//!
//! Hardware Connections:
//!   Switch -> Blue Pill
//!      one leg  -> 3.3V
//!      other    -> PA3 (internal pull-down, pressed = high)
//!
//!   Headphones -> Blue Pill
//!      tip      -> PA2 through a 1k resistor (680R..2k limits the volume)
//!      sleeve   -> GND
//!
//!   Onboard LED PC13 blinks as a heartbeat.
//!
//! Timing:
//!   The tone task ticks at 880 Hz (every 1136 us) and inverts PA2 once per
//!   tick while the tone is on, giving 440 Hz.
//!
//!              |---------|               |---------|
//!   Switch ----|         |---------------|         |------
//!
//!               |-| |-| |-| |-| |-| |-| |-|
//!   Tone -------| |-| |-| |-| |-| |-| |-| |---------------

#![no_std] // No standard library on the MCU
#![no_main] // Entry point comes from embassy_executor::main

use defmt::*; // Formatted logging macros
use embassy_executor::Spawner;
use embassy_stm32::{
    gpio::{Input, Level, Output, Pull, Speed},
    time::Hertz,
};
use embassy_time::{Duration, Ticker, Timer};
use tuning_fork::{
    config::ToneConfig,
    hardware::{GpioSpeaker, GpioSwitch},
    tone::{PeriodicDriver, ToneController},
};
use {defmt_rtt as _, panic_probe as _}; // Logging and panic handlers

/// Audible tone, concert A
const TONE_HZ: u32 = 440;

/// Heartbeat half-period; two halves make one status report
const HEARTBEAT: Duration = Duration::from_millis(500);

type ToneDriver =
    PeriodicDriver<GpioSwitch<Input<'static>>, GpioSpeaker<Output<'static>>, Ticker>;

/// Main application entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    // Configure system clock (external 8MHz crystal, PLL x9 to 72MHz)
    let mut config = embassy_stm32::Config::default();
    {
        use embassy_stm32::rcc::*;
        config.rcc.hse = Some(Hse {
            freq: Hertz(8_000_000),
            // Board has an external oscillator
            mode: HseMode::Oscillator,
        });
        config.rcc.pll = Some(Pll {
            src: PllSource::HSE,     // PLL fed from HSE
            prediv: PllPreDiv::DIV1, // No pre-division
            mul: PllMul::MUL9,       // 8MHz * 9 = 72MHz
        });
        config.rcc.sys = Sysclk::PLL1_P; // System clock from PLL
        config.rcc.ahb_pre = AHBPrescaler::DIV1; // AHB 72MHz
        config.rcc.apb1_pre = APBPrescaler::DIV2; // APB1 36MHz
        config.rcc.apb2_pre = APBPrescaler::DIV1; // APB2 72MHz
    }

    // Initialize peripherals
    let p = embassy_stm32::init(config);

    // Derive the tick period from the tone and the time driver's resolution
    let tone = ToneConfig::new(TONE_HZ, embassy_time::TICK_HZ as u32)
        .expect("tone frequency out of range for the time driver");
    info!(
        "tone {} Hz, tick every {} ticks, actual {} Hz",
        tone.tone_hz(),
        tone.period_ticks(),
        tone.actual_tone_hz()
    );

    // Positive logic switch on PA3: idle low through the pull-down
    let switch = GpioSwitch::active_high(Input::new(p.PA3, Pull::Down));

    // Headphones on PA2, start silent
    let speaker = GpioSpeaker::new(Output::new(p.PA2, Level::Low, Speed::Low));

    // The controller takes both pins; nothing else can touch them now
    let controller = ToneController::new(switch, speaker);

    // One controller tick per ticker period (1136us at 440Hz)
    let ticker = Ticker::every(Duration::from_ticks(tone.period_ticks() as u64));

    // Spawn tone task, it becomes the sole owner of the controller
    spawner
        .spawn(tone_task(PeriodicDriver::new(controller, ticker)))
        .unwrap();

    // Configure onboard LED (PC13) as heartbeat indicator
    // Initial state: High (LED off for common anode configuration)
    let mut led = Output::new(p.PC13, Level::High, Speed::Low);

    // Main loop: free for other work between ticks
    loop {
        // Blink on and off
        led.toggle();
        Timer::after(HEARTBEAT).await;
        led.toggle();
        Timer::after(HEARTBEAT).await;

        // Report once per blink cycle
        info!("System status: operational");
    }
}

/// Tone Task
///
/// Responsibilities:
/// 1. Own the tone controller for the life of the program
/// 2. Run one controller tick per ticker period
/// 3. Never yield the controller to another task
#[embassy_executor::task]
async fn tone_task(driver: ToneDriver) {
    // Never returns
    driver.run().await
}

// Notes:
// 1. The tone task is the only code that can reach the controller, so ticks
//    are strictly sequential without a mutex or critical section
// 2. embassy-time runs at 1MHz here; at 32.768kHz the 1136us period would
//    round to 37 ticks and detune the tone to ~443Hz
// 3. Ticker catches up after a late tick instead of drifting, so the long-run
//    tone frequency stays put even when the main loop is busy
// 4. Speed::Low is plenty for a 440Hz square wave
