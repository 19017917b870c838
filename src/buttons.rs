//! Edge-triggered button dispatch with a one-shot debounce window.
//!
//! An edge on the button group disables further edge events, arms the
//! debounce timer and performs the action of the first asserted button in
//! [`Button::PRIORITY`] order. Edge detection is re-armed only when the
//! debounce timer elapses; edges in between are dropped.

use crate::timer::PeriodicTimer;
use crate::types::{Button, ButtonAction};

/// Trait for abstracting the button input group.
pub trait ButtonInput {
    /// Returns true while `button` is held down.
    fn is_pressed(&mut self, button: Button) -> bool;

    /// Enables the edge interrupt of the button group.
    fn enable_edge_interrupt(&mut self);

    /// Disables the edge interrupt of the button group.
    fn disable_edge_interrupt(&mut self);
}

/// Single re-entrancy guard for the button group.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonDispatcher {
    debounce: PeriodicTimer,
}

impl ButtonDispatcher {
    /// Creates an idle dispatcher with a debounce window of `debounce_ticks`.
    pub const fn new(debounce_ticks: u32) -> Self {
        Self {
            debounce: PeriodicTimer::new(debounce_ticks),
        }
    }

    /// Handles an edge event.
    ///
    /// Returns the action to perform, or `None` if the edge arrived inside the
    /// debounce window or no button is asserted.
    pub fn on_edge<I: ButtonInput>(&mut self, input: &mut I) -> Option<ButtonAction> {
        if self.debounce.is_enabled() {
            return None;
        }

        input.disable_edge_interrupt();
        self.debounce.reset();
        self.debounce.enable();

        Button::PRIORITY
            .into_iter()
            .find(|button| input.is_pressed(*button))
            .map(Button::action)
    }

    /// Handles one hardware tick of the debounce timer.
    ///
    /// Returns true when the window closed and edge detection was re-armed.
    pub fn on_tick<I: ButtonInput>(&mut self, input: &mut I) -> bool {
        if self.debounce.advance() {
            self.debounce.reset();
            input.enable_edge_interrupt();
            true
        } else {
            false
        }
    }

    /// Returns true while edges are being ignored.
    pub fn is_debouncing(&self) -> bool {
        self.debounce.is_enabled()
    }

    /// Abandons a running debounce window without touching the input.
    pub fn reset(&mut self) {
        self.debounce.reset();
    }

    pub fn timer(&self) -> &PeriodicTimer {
        &self.debounce
    }
}
