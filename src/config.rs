//! Timing and storage configuration.

use crate::storage::StorageLayout;
use crate::timer::TickRate;

/// Hardware tick period: 256 timer counts at 2 MHz.
pub const DEFAULT_TICK_PERIOD_US: u32 = 128;

/// Time each digit stays lit before switching.
pub const DEFAULT_DIGIT_SWITCH_MS: u16 = 1;

/// Time between two automatic counting steps.
pub const DEFAULT_COUNT_INTERVAL_MS: u16 = 1000;

/// Window after a button edge during which further edges are ignored.
pub const DEFAULT_DEBOUNCE_MS: u16 = 300;

/// Controller configuration.
///
/// ```
/// use segment_counter::Config;
///
/// let config = Config::new()
///     .count_interval_ms(250)
///     .debounce_ms(50);
/// assert_eq!(config.count_interval(), 250);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    tick_period_us: u32,
    digit_switch_ms: u16,
    count_interval_ms: u16,
    debounce_ms: u16,
    layout: StorageLayout,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            tick_period_us: DEFAULT_TICK_PERIOD_US,
            digit_switch_ms: DEFAULT_DIGIT_SWITCH_MS,
            count_interval_ms: DEFAULT_COUNT_INTERVAL_MS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            layout: StorageLayout::contiguous(500),
        }
    }

    /// Period of the hardware tick feeding all timers.
    pub const fn tick_period_us(mut self, period_us: u32) -> Self {
        self.tick_period_us = period_us;
        self
    }

    pub const fn digit_switch_ms(mut self, millis: u16) -> Self {
        self.digit_switch_ms = millis;
        self
    }

    pub const fn count_interval_ms(mut self, millis: u16) -> Self {
        self.count_interval_ms = millis;
        self
    }

    pub const fn debounce_ms(mut self, millis: u16) -> Self {
        self.debounce_ms = millis;
        self
    }

    pub const fn layout(mut self, layout: StorageLayout) -> Self {
        self.layout = layout;
        self
    }

    pub const fn tick_rate(&self) -> TickRate {
        TickRate::from_micros(self.tick_period_us)
    }

    pub const fn digit_switch(&self) -> u16 {
        self.digit_switch_ms
    }

    pub const fn count_interval(&self) -> u16 {
        self.count_interval_ms
    }

    pub const fn debounce(&self) -> u16 {
        self.debounce_ms
    }

    pub const fn storage_layout(&self) -> StorageLayout {
        self.layout
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
