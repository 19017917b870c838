#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Controller`**: The single state aggregate; every interrupt handler and accessor goes through it
//! - **`DisplayState`**: Displayed number, its two digits, the radix and the derived maximum
//! - **`Multiplexer`**: Alternates the lit digit once per fast-timer period, suppressing a leading zero
//! - **`Counter`**: Steps the number up or down once per slow-timer period, wrapping at the bounds
//! - **`ButtonDispatcher`**: Edge dispatch guarded by a one-shot debounce window
//! - **`PeriodicTimer`**: Tick counter raising a one-shot elapsed signal per period
//! - **`SegmentOutput`**, **`ButtonInput`**, **`NonVolatile`**: Traits to implement for your hardware
//! - **`Shared`**: Critical-section cell placing the controller in a `static`
//!
//! Nothing here touches hardware registers. The [`pins`] module implements the
//! output and input traits on top of `embedded-hal` pins.

#[macro_use]
mod fmt;

pub mod buttons;
pub mod config;
pub mod controller;
pub mod counter;
pub mod display;
pub mod multiplexer;
pub mod output;
pub mod pins;
pub mod segment;
pub mod shared;
pub mod storage;
pub mod timer;
pub mod types;

pub use buttons::{ButtonDispatcher, ButtonInput};
pub use config::{
    Config, DEFAULT_COUNT_INTERVAL_MS, DEFAULT_DEBOUNCE_MS, DEFAULT_DIGIT_SWITCH_MS,
    DEFAULT_TICK_PERIOD_US,
};
pub use controller::Controller;
pub use counter::{Counter, next_number};
pub use display::DisplayState;
pub use multiplexer::Multiplexer;
pub use output::SegmentOutput;
pub use pins::{EdgeInterrupt, PinButtons, PinSegmentOutput};
pub use segment::{DIGIT_PATTERNS, SegmentPattern, encode};
pub use shared::Shared;
pub use storage::{NonVolatile, Persistence, PersistentRecord, StorageLayout};
pub use timer::{PeriodicTimer, TickRate};
pub use types::{Button, ButtonAction, CountDirection, Digit, DisplayError, Radix};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_compile() {
        let _ = Config::default();
        let _ = DisplayState::default();
        let _ = CountDirection::default();
        let _ = Digit::default();
        let _ = Radix::default();
    }
}
