//! Automatic up/down counting.

use crate::display::DisplayState;
use crate::timer::PeriodicTimer;
use crate::types::CountDirection;

/// Returns the value following `current` when counting in `direction`.
///
/// Up wraps from `max` to 0, down wraps from 0 to `max`. A stale `current`
/// above `max` (left over from a radix change) lands on 0 when counting up
/// and on `max` when counting down, so the result is always in range.
#[inline]
pub const fn next_number(current: u8, max: u8, direction: CountDirection) -> u8 {
    match direction {
        CountDirection::Up => {
            if current >= max {
                0
            } else {
                current + 1
            }
        }
        CountDirection::Down => {
            if current == 0 || current > max {
                max
            } else {
                current - 1
            }
        }
    }
}

/// Drives the displayed number at a fixed cadence.
///
/// The timer's enabled state is the source of truth for "count enabled".
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Counter {
    direction: CountDirection,
    interval_ms: u16,
    timer: PeriodicTimer,
}

impl Counter {
    /// Creates a disabled counter counting up.
    pub const fn new(interval_ms: u16, period_ticks: u32) -> Self {
        Self {
            direction: CountDirection::Up,
            interval_ms,
            timer: PeriodicTimer::new(period_ticks),
        }
    }

    /// Handles one hardware tick.
    ///
    /// Returns the next number when the interval has elapsed. The caller
    /// applies it through the validated setter.
    #[inline]
    pub fn on_tick(&mut self, state: &DisplayState) -> Option<u8> {
        if self.timer.advance() {
            Some(next_number(state.number(), state.max_value(), self.direction))
        } else {
            None
        }
    }

    pub fn direction(&self) -> CountDirection {
        self.direction
    }

    pub fn set_direction(&mut self, direction: CountDirection) {
        self.direction = direction;
    }

    /// Flips the direction and returns the new one.
    pub fn toggle_direction(&mut self) -> CountDirection {
        self.direction = self.direction.toggled();
        self.direction
    }

    pub fn interval_ms(&self) -> u16 {
        self.interval_ms
    }

    /// Changes the counting cadence without restarting the current interval.
    pub fn set_interval(&mut self, interval_ms: u16, period_ticks: u32) {
        self.interval_ms = interval_ms;
        self.timer.configure(period_ticks);
    }

    pub fn enable(&mut self) {
        self.timer.enable();
    }

    /// Stops counting and clears the pending interval.
    pub fn disable(&mut self) {
        self.timer.reset();
    }

    pub fn is_enabled(&self) -> bool {
        self.timer.is_enabled()
    }

    /// Stops counting and returns to counting up.
    pub fn reset(&mut self) {
        self.timer.reset();
        self.direction = CountDirection::Up;
    }

    pub fn timer(&self) -> &PeriodicTimer {
        &self.timer
    }
}
