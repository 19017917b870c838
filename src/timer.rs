//! Software periodic timers driven by a hardware tick.
//!
//! A [`PeriodicTimer`] counts hardware ticks and raises an elapsed signal once
//! per configured period. The hardware side only has to call [`PeriodicTimer::tick`]
//! (or [`PeriodicTimer::advance`]) from its interrupt.

/// Conversion between milliseconds and hardware ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickRate {
    period_us: u32,
}

impl TickRate {
    /// Creates a tick rate from the hardware tick period in microseconds.
    ///
    /// A zero period is treated as one microsecond.
    pub const fn from_micros(period_us: u32) -> Self {
        Self {
            period_us: if period_us == 0 { 1 } else { period_us },
        }
    }

    /// Hardware tick period in microseconds.
    pub const fn period_us(&self) -> u32 {
        self.period_us
    }

    /// Number of ticks closest to `millis`, never less than one.
    pub const fn ticks_for_millis(&self, millis: u16) -> u32 {
        let micros = millis as u32 * 1000;
        let ticks = (micros + self.period_us / 2) / self.period_us;
        if ticks == 0 { 1 } else { ticks }
    }
}

/// Tick counter with a one-shot elapsed signal per period.
///
/// Disabling stops counting and signaling but keeps the current count;
/// [`reset`](Self::reset) clears the count and disables.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PeriodicTimer {
    period: u32,
    count: u32,
    enabled: bool,
}

impl PeriodicTimer {
    /// Creates a disabled timer with the given period in ticks.
    pub const fn new(period_ticks: u32) -> Self {
        Self {
            period: if period_ticks == 0 { 1 } else { period_ticks },
            count: 0,
            enabled: false,
        }
    }

    /// Sets a new period. The current count is kept.
    pub fn configure(&mut self, period_ticks: u32) {
        self.period = period_ticks.max(1);
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Registers one hardware tick. Ignored while disabled.
    #[inline]
    pub fn tick(&mut self) {
        if self.enabled {
            self.count = self.count.saturating_add(1);
        }
    }

    /// Returns true exactly once per period reached, restarting the count.
    #[inline]
    pub fn consume_elapsed(&mut self) -> bool {
        if self.enabled && self.count >= self.period {
            self.count = 0;
            true
        } else {
            false
        }
    }

    /// Ticks once and consumes the elapsed signal.
    #[inline]
    pub fn advance(&mut self) -> bool {
        self.tick();
        self.consume_elapsed()
    }

    /// Clears the count and disables the timer.
    pub fn reset(&mut self) {
        self.count = 0;
        self.enabled = false;
    }

    pub fn period(&self) -> u32 {
        self.period
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}
