//! Host-side integration tests.
//!
//! The controller is wired to mock `embedded-hal` pins through the real
//! `GpioSwitch` / `GpioSpeaker` adapters, so every pin call the firmware
//! would make is recorded and checked tick by tick.

mod mock_hw;
