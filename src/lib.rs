//! Square-wave tone generator toggled by a push switch.
//!
//! A fixed-rate tick samples the switch; each rising edge turns the tone on
//! or off, and while it is on the speaker pin is inverted once per tick, so
//! the audible frequency is half the tick rate.
//!
//! The library is hardware independent: [`hardware`] defines the two pin
//! capabilities and adapters over `embedded-hal` pins, [`tone`] holds the
//! controller and the tick driver, [`config`] derives the tick period from a
//! tone frequency. The board binary lives in `src/bin/tuning_fork.rs`.

#![cfg_attr(not(test), no_std)]

// must stay first so the logging macros are in scope for every module below
mod fmt;

pub mod config;
pub mod error;
pub mod hardware;
pub mod tone;
