//! `embedded-hal` implementations of the output and input capabilities.
//!
//! These cover the usual wiring: seven segment pins driven active-high, two
//! common-cathode digits enabled by pulling their cathode line low, and push
//! buttons to ground with pull-ups. Pin errors are ignored since the
//! capability methods run in interrupt context and cannot fail.

use embedded_hal::digital::{InputPin, OutputPin, PinState};

use crate::buttons::ButtonInput;
use crate::output::SegmentOutput;
use crate::segment::{SEGMENT_COUNT, SegmentPattern};
use crate::types::{Button, Digit};

/// Segment bus plus two active-low digit enables.
///
/// Segment pin `i` drives bit `i` of the pattern (a = 0 ... g = 6), so the
/// segment pins usually need to be type-erased to share one type.
pub struct PinSegmentOutput<S, C1, C2>
where
    S: OutputPin,
    C1: OutputPin,
    C2: OutputPin,
{
    segments: [S; SEGMENT_COUNT],
    cathode1: C1,
    cathode2: C2,
}

impl<S, C1, C2> PinSegmentOutput<S, C1, C2>
where
    S: OutputPin,
    C1: OutputPin,
    C2: OutputPin,
{
    /// Takes ownership of the pins and turns both digits off.
    pub fn new(segments: [S; SEGMENT_COUNT], cathode1: C1, cathode2: C2) -> Self {
        let mut output = Self {
            segments,
            cathode1,
            cathode2,
        };
        output.blank();
        output.set_segments(SegmentPattern::OFF);
        output
    }

    /// Returns the pins.
    pub fn release(self) -> ([S; SEGMENT_COUNT], C1, C2) {
        (self.segments, self.cathode1, self.cathode2)
    }
}

impl<S, C1, C2> SegmentOutput for PinSegmentOutput<S, C1, C2>
where
    S: OutputPin,
    C1: OutputPin,
    C2: OutputPin,
{
    fn set_segments(&mut self, pattern: SegmentPattern) {
        for (index, pin) in self.segments.iter_mut().enumerate() {
            let _ = pin.set_state(PinState::from(pattern.lit(index)));
        }
    }

    fn enable_digit(&mut self, digit: Digit) {
        match digit {
            Digit::Digit1 => self.cathode1.set_low().ok(),
            Digit::Digit2 => self.cathode2.set_low().ok(),
        };
    }

    fn disable_digit(&mut self, digit: Digit) {
        match digit {
            Digit::Digit1 => self.cathode1.set_high().ok(),
            Digit::Digit2 => self.cathode2.set_high().ok(),
        };
    }
}

/// Enable/disable control of a pin-change (edge) interrupt group.
pub trait EdgeInterrupt {
    fn enable(&mut self);
    fn disable(&mut self);
}

/// Three push buttons to ground on one edge-interrupt group.
///
/// A button reads as pressed while its pin is low. A pin read error counts
/// as released.
pub struct PinButtons<A, B, C, E>
where
    A: InputPin,
    B: InputPin,
    C: InputPin,
    E: EdgeInterrupt,
{
    a: A,
    b: B,
    c: C,
    edge: E,
}

impl<A, B, C, E> PinButtons<A, B, C, E>
where
    A: InputPin,
    B: InputPin,
    C: InputPin,
    E: EdgeInterrupt,
{
    /// Takes ownership of the pins and enables the edge interrupt.
    pub fn new(a: A, b: B, c: C, mut edge: E) -> Self {
        edge.enable();
        Self { a, b, c, edge }
    }

    /// Returns the pins and the edge control.
    pub fn release(self) -> (A, B, C, E) {
        (self.a, self.b, self.c, self.edge)
    }
}

impl<A, B, C, E> ButtonInput for PinButtons<A, B, C, E>
where
    A: InputPin,
    B: InputPin,
    C: InputPin,
    E: EdgeInterrupt,
{
    fn is_pressed(&mut self, button: Button) -> bool {
        match button {
            Button::A => self.a.is_low().unwrap_or(false),
            Button::B => self.b.is_low().unwrap_or(false),
            Button::C => self.c.is_low().unwrap_or(false),
        }
    }

    fn enable_edge_interrupt(&mut self) {
        self.edge.enable();
    }

    fn disable_edge_interrupt(&mut self) {
        self.edge.disable();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    struct FakeOut<'a>(&'a Cell<bool>);

    impl ErrorType for FakeOut<'_> {
        type Error = Infallible;
    }

    impl OutputPin for FakeOut<'_> {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.0.set(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.0.set(true);
            Ok(())
        }
    }

    struct FakeIn<'a>(&'a Cell<bool>);

    impl ErrorType for FakeIn<'_> {
        type Error = Infallible;
    }

    impl InputPin for FakeIn<'_> {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.0.get())
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.0.get())
        }
    }

    struct FakeEdge<'a>(&'a Cell<bool>);

    impl EdgeInterrupt for FakeEdge<'_> {
        fn enable(&mut self) {
            self.0.set(true);
        }

        fn disable(&mut self) {
            self.0.set(false);
        }
    }

    #[test]
    fn segment_pins_follow_pattern_bits() {
        let levels: [Cell<bool>; SEGMENT_COUNT] = Default::default();
        let k1 = Cell::new(false);
        let k2 = Cell::new(false);
        let pins: [FakeOut<'_>; SEGMENT_COUNT] = core::array::from_fn(|i| FakeOut(&levels[i]));
        let mut output = PinSegmentOutput::new(pins, FakeOut(&k1), FakeOut(&k2));

        // Both cathodes high (off) after construction
        assert!(k1.get());
        assert!(k2.get());

        output.set_segments(SegmentPattern::from_digit(7));
        let lit: [bool; SEGMENT_COUNT] = core::array::from_fn(|i| levels[i].get());
        assert_eq!(lit, [true, true, true, false, false, false, false]);
    }

    #[test]
    fn cathodes_are_active_low() {
        let levels: [Cell<bool>; SEGMENT_COUNT] = Default::default();
        let k1 = Cell::new(false);
        let k2 = Cell::new(false);
        let pins: [FakeOut<'_>; SEGMENT_COUNT] = core::array::from_fn(|i| FakeOut(&levels[i]));
        let mut output = PinSegmentOutput::new(pins, FakeOut(&k1), FakeOut(&k2));

        output.enable_digit(Digit::Digit2);
        assert!(k1.get());
        assert!(!k2.get());

        output.disable_digit(Digit::Digit2);
        output.enable_digit(Digit::Digit1);
        assert!(!k1.get());
        assert!(k2.get());
    }

    #[test]
    fn buttons_read_low_as_pressed() {
        let a = Cell::new(true);
        let b = Cell::new(false);
        let c = Cell::new(true);
        let edge = Cell::new(false);
        let mut buttons = PinButtons::new(FakeIn(&a), FakeIn(&b), FakeIn(&c), FakeEdge(&edge));

        assert!(edge.get());
        assert!(!buttons.is_pressed(Button::A));
        assert!(buttons.is_pressed(Button::B));
        assert!(!buttons.is_pressed(Button::C));

        buttons.disable_edge_interrupt();
        assert!(!edge.get());
    }
}
