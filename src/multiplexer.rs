//! Digit multiplexing.
//!
//! Both digits share one segment bus, so only one can be lit at a time. The
//! [`Multiplexer`] alternates between them on every elapsed period of its
//! timer; at about 1 ms per half-cycle both appear continuously lit.

use crate::display::DisplayState;
use crate::output::SegmentOutput;
use crate::segment::SegmentPattern;
use crate::timer::PeriodicTimer;
use crate::types::Digit;

/// Two-state machine selecting which digit is lit.
///
/// The timer's enabled state is the source of truth for "output enabled".
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Multiplexer {
    active: Digit,
    timer: PeriodicTimer,
}

impl Multiplexer {
    /// Creates a disabled multiplexer switching every `period_ticks`.
    pub const fn new(period_ticks: u32) -> Self {
        Self {
            active: Digit::Digit1,
            timer: PeriodicTimer::new(period_ticks),
        }
    }

    /// Handles one hardware tick. Returns true if the active digit changed.
    #[inline]
    pub fn on_tick<O: SegmentOutput>(&mut self, state: &DisplayState, output: &mut O) -> bool {
        if self.timer.advance() {
            self.switch(state, output);
            true
        } else {
            false
        }
    }

    /// Moves to the other digit and drives the outputs for it.
    ///
    /// A leading zero on digit 1 is suppressed; digit 2 is always shown, so
    /// `7` reads as "7" and `0` still reads as "0".
    pub fn switch<O: SegmentOutput>(&mut self, state: &DisplayState, output: &mut O) {
        self.active = self.active.other();

        match self.active {
            Digit::Digit1 => {
                output.disable_digit(Digit::Digit2);

                let tens = state.digit(Digit::Digit1);
                if tens == 0 {
                    output.disable_digit(Digit::Digit1);
                } else {
                    output.set_segments(SegmentPattern::from_digit(tens));
                    output.enable_digit(Digit::Digit1);
                }
            }
            Digit::Digit2 => {
                output.disable_digit(Digit::Digit1);
                output.set_segments(SegmentPattern::from_digit(state.digit(Digit::Digit2)));
                output.enable_digit(Digit::Digit2);
            }
        }
    }

    pub fn enable(&mut self) {
        self.timer.enable();
    }

    /// Stops multiplexing and turns both digits off.
    pub fn disable<O: SegmentOutput>(&mut self, output: &mut O) {
        self.timer.reset();
        output.blank();
    }

    pub fn is_enabled(&self) -> bool {
        self.timer.is_enabled()
    }

    /// Digit lit by the most recent switch.
    pub fn active(&self) -> Digit {
        self.active
    }

    /// Disables the timer and selects digit 1 again.
    pub fn reset(&mut self) {
        self.timer.reset();
        self.active = Digit::Digit1;
    }

    pub fn timer(&self) -> &PeriodicTimer {
        &self.timer
    }
}
