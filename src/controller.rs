//! The display controller: one aggregate owning all display, counting and
//! button state, passed by reference to every handler.
//!
//! Provides [`Controller`], which ties the [`DisplayState`], [`Multiplexer`],
//! [`Counter`] and [`ButtonDispatcher`] to the hardware collaborators and to
//! persistent storage.
//!
//! # Interrupt wiring
//!
//! Each `on_*` handler is bounded and non-blocking. Call them from the
//! matching interrupts (or [`on_tick`](Controller::on_tick) from a single
//! shared tick) while holding the controller inside a critical section, e.g.
//! through [`Shared`](crate::Shared), so that multi-field updates such as
//! [`set_number`](Controller::set_number) are never observed half-done.

use crate::buttons::{ButtonDispatcher, ButtonInput};
use crate::config::Config;
use crate::counter::Counter;
use crate::display::DisplayState;
use crate::multiplexer::Multiplexer;
use crate::output::SegmentOutput;
use crate::storage::{NonVolatile, Persistence, PersistentRecord};
use crate::timer::TickRate;
use crate::types::{ButtonAction, CountDirection, Digit, DisplayError, Radix};

/// Drives two multiplexed seven-segment digits.
///
/// # Type Parameters
/// * `O` - Output port implementation
/// * `S` - Non-volatile storage implementation
/// * `I` - Button input implementation
pub struct Controller<O: SegmentOutput, S: NonVolatile, I: ButtonInput> {
    state: DisplayState,
    multiplexer: Multiplexer,
    counter: Counter,
    buttons: ButtonDispatcher,
    persistence: Persistence<S>,
    output: O,
    input: I,
    tick_rate: TickRate,
}

impl<O: SegmentOutput, S: NonVolatile, I: ButtonInput> Controller<O, S, I> {
    /// Creates a controller with both digits off and both timers disabled.
    ///
    /// Storage is not read; call [`restore`](Self::restore) for that.
    pub fn new(config: Config, mut output: O, store: S, input: I) -> Self {
        output.blank();

        let tick_rate = config.tick_rate();
        Self {
            state: DisplayState::new(),
            multiplexer: Multiplexer::new(tick_rate.ticks_for_millis(config.digit_switch())),
            counter: Counter::new(
                config.count_interval(),
                tick_rate.ticks_for_millis(config.count_interval()),
            ),
            buttons: ButtonDispatcher::new(tick_rate.ticks_for_millis(config.debounce())),
            persistence: Persistence::new(store, config.storage_layout()),
            output,
            input,
            tick_rate,
        }
    }

    /// Rebuilds the runtime state from storage.
    ///
    /// A stored number that does not fit the current radix is ignored and
    /// the display keeps its current value.
    pub fn restore(&mut self) -> PersistentRecord {
        let record = self.persistence.load();
        info!("restoring {}", record);

        if let Err(err) = self.set_number(record.number) {
            warn!("stored number rejected: {}", err);
        }

        self.counter.set_direction(record.direction);

        if record.output_enabled {
            self.enable_output();
        }
        if record.count_enabled {
            self.enable_count();
        }

        record
    }

    /// Back to 0 in decimal, counting up, with both timers stopped and both
    /// digits off. Storage is left as is.
    pub fn reset(&mut self) {
        self.multiplexer.reset();
        self.counter.reset();
        self.output.blank();
        self.state.reset();
        debug!("display reset");
    }

    // ------------------------------------------------------------------------
    // Displayed value
    // ------------------------------------------------------------------------

    /// Sets the displayed number and persists it.
    ///
    /// # Errors
    /// [`DisplayError::OutOfRange`] if it does not fit the current radix;
    /// nothing changes and nothing is written.
    pub fn set_number(&mut self, number: u8) -> Result<(), DisplayError> {
        self.state.set_number(number)?;
        self.persistence.store_number(number);
        Ok(())
    }

    /// Selects radix 2, 10 or 16.
    ///
    /// The current number and digits are left as they are, even when the
    /// number no longer fits; set the number again after changing radix.
    ///
    /// # Errors
    /// [`DisplayError::InvalidRadix`] for any other base.
    pub fn set_radix(&mut self, radix: u8) -> Result<(), DisplayError> {
        self.state.set_radix(radix)?;
        debug!("radix set to {}", radix);
        Ok(())
    }

    pub fn number(&self) -> u8 {
        self.state.number()
    }

    /// Returns `(digit1, digit2)`.
    pub fn digits(&self) -> (u8, u8) {
        self.state.digits()
    }

    pub fn radix(&self) -> Radix {
        self.state.radix()
    }

    pub fn max_value(&self) -> u8 {
        self.state.max_value()
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Digit lit by the most recent multiplexer switch.
    pub fn active_digit(&self) -> Digit {
        self.multiplexer.active()
    }

    // ------------------------------------------------------------------------
    // Output
    // ------------------------------------------------------------------------

    pub fn output_enabled(&self) -> bool {
        self.multiplexer.is_enabled()
    }

    /// Starts multiplexing the digits.
    pub fn enable_output(&mut self) {
        self.multiplexer.enable();
        self.persistence.store_output_enabled(true);
        debug!("output enabled");
    }

    /// Stops multiplexing and turns both digits off.
    pub fn disable_output(&mut self) {
        self.multiplexer.disable(&mut self.output);
        self.persistence.store_output_enabled(false);
        debug!("output disabled");
    }

    pub fn toggle_output(&mut self) {
        if self.output_enabled() {
            self.disable_output();
        } else {
            self.enable_output();
        }
    }

    // ------------------------------------------------------------------------
    // Counting
    // ------------------------------------------------------------------------

    pub fn count_enabled(&self) -> bool {
        self.counter.is_enabled()
    }

    pub fn enable_count(&mut self) {
        self.counter.enable();
        self.persistence.store_count_enabled(true);
        debug!("counting enabled");
    }

    pub fn disable_count(&mut self) {
        self.counter.disable();
        self.persistence.store_count_enabled(false);
        debug!("counting disabled");
    }

    pub fn toggle_count(&mut self) {
        if self.count_enabled() {
            self.disable_count();
        } else {
            self.enable_count();
        }
    }

    pub fn count_direction(&self) -> CountDirection {
        self.counter.direction()
    }

    pub fn set_count_direction(&mut self, direction: CountDirection) {
        self.counter.set_direction(direction);
        self.persistence.store_direction(direction);
        debug!("count direction {}", direction);
    }

    pub fn toggle_count_direction(&mut self) {
        let direction = self.counter.toggle_direction();
        self.persistence.store_direction(direction);
        debug!("count direction {}", direction);
    }

    /// Sets direction and cadence in one go. Counting is not enabled by this.
    pub fn set_count(&mut self, direction: CountDirection, interval_ms: u16) {
        self.counter
            .set_interval(interval_ms, self.tick_rate.ticks_for_millis(interval_ms));
        self.set_count_direction(direction);
    }

    pub fn count_interval_ms(&self) -> u16 {
        self.counter.interval_ms()
    }

    // ------------------------------------------------------------------------
    // Buttons
    // ------------------------------------------------------------------------

    /// Performs a button action.
    pub fn perform(&mut self, action: ButtonAction) {
        match action {
            ButtonAction::ToggleCount => self.toggle_count(),
            ButtonAction::ToggleDirection => self.toggle_count_direction(),
            ButtonAction::ToggleOutput => self.toggle_output(),
        }
    }

    pub fn is_debouncing(&self) -> bool {
        self.buttons.is_debouncing()
    }

    // ------------------------------------------------------------------------
    // Interrupt handlers
    // ------------------------------------------------------------------------

    /// Fast timer tick: switches the lit digit once per digit period.
    #[inline]
    pub fn on_multiplex_tick(&mut self) {
        self.multiplexer.on_tick(&self.state, &mut self.output);
    }

    /// Slow timer tick: advances the number once per count interval.
    ///
    /// Returns the new number when a step was taken.
    #[inline]
    pub fn on_count_tick(&mut self) -> Option<u8> {
        let next = self.counter.on_tick(&self.state)?;
        self.set_number(next).ok()?;
        Some(next)
    }

    /// Button group edge: dispatches at most one action per debounce window.
    pub fn on_button_edge(&mut self) -> Option<ButtonAction> {
        let action = self.buttons.on_edge(&mut self.input)?;
        debug!("button action {}", action);
        self.perform(action);
        Some(action)
    }

    /// Debounce timer tick: re-arms edge detection when the window closes.
    #[inline]
    pub fn on_debounce_tick(&mut self) -> bool {
        self.buttons.on_tick(&mut self.input)
    }

    /// Feeds one shared hardware tick to all three timers.
    #[inline]
    pub fn on_tick(&mut self) {
        self.on_debounce_tick();
        self.on_count_tick();
        self.on_multiplex_tick();
    }

    // ------------------------------------------------------------------------
    // Collaborators
    // ------------------------------------------------------------------------

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    pub fn store(&self) -> &S {
        self.persistence.inner()
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// Tears the controller down, returning the output, storage and input.
    pub fn release(self) -> (O, S, I) {
        (self.output, self.persistence.into_inner(), self.input)
    }
}
