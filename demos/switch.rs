//! STM32 Blue Pill Switch Bring-up
//! Checks the switch wiring without the speaker:
//! 1. Samples PA3 through the `LevelInput` capability every 10ms
//! 2. Runs the samples through the same rising edge detector as the tone
//! 3. Toggles the onboard LED (PC13) on every press
//!
//! Hardware Connections:
//!   - Onboard LED: PC13 (no external connection needed)
//!   - Switch: between 3.3V and PA3 (internal pull-down enabled)
//!
//! Expected Behavior:
//!   - LED toggles once per press, holding the switch does nothing more
//!   - Presses are logged via defmt RTT

#![no_std] // Required for embedded development
#![no_main] // Bypass standard main function

use defmt_rtt as _; // defmt logging over RTT
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_time::{Duration, Ticker};
use panic_probe as _; // Panic handler with defmt integration
use tuning_fork::{
    hardware::{GpioSwitch, LevelInput},
    tone::EdgeDetector,
};

/// Main application entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    // Initialize microcontroller peripherals with default configuration
    let p = embassy_stm32::init(Default::default());

    // Configure onboard LED (PC13) as push-pull output
    // Initial state: High (LED off for common anode configuration)
    let led = Output::new(p.PC13, Level::High, Speed::Low);

    // Configure switch pin (PA3) with:
    // - Internal pull-down resistor (low when not pressed)
    // - Positive logic: pressed reads high
    let switch = GpioSwitch::active_high(Input::new(p.PA3, Pull::Down));

    // Spawn switch sampling task
    spawner
        .spawn(switch_task(switch, led))
        .expect("Failed to spawn switch task");
}

/// Switch Sampling Task
///
/// Responsibilities:
/// 1. Sample the switch at a fixed rate
/// 2. Detect rising edges
/// 3. Toggle the LED and log each press
#[embassy_executor::task]
async fn switch_task(mut switch: GpioSwitch<Input<'static>>, mut led: Output<'static>) {
    // Fixed sampling rate, like the tone controller
    let mut ticker = Ticker::every(Duration::from_millis(10));

    // Starts released, so a switch held at reset counts as a press
    let mut edge = EdgeDetector::new();
    let mut presses: u32 = 0;

    // Main sampling loop
    loop {
        // Wait for the next sample point
        ticker.next().await;

        // Only the released -> pressed transition counts
        if edge.rising(switch.read_level()) {
            presses += 1;
            defmt::info!("Switch press {}", presses);

            // Toggle LED state
            led.toggle();
        }
    }
}

// Implementation Notes:
// 1. Polling at a fixed rate instead of EXTI sees the switch exactly the way
//    the tone controller does
// 2. A single sample per edge means contact bounce longer than 10ms can
//    register as an extra press
// 3. Pull-down configuration means the switch should connect to 3.3V
