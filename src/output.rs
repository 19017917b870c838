//! Output-port capability for the two multiplexed digits.

use crate::segment::SegmentPattern;
use crate::types::Digit;

/// Trait for abstracting the display output port.
///
/// Implement this for your hardware: one segment bus shared by both digits,
/// plus an enable line per digit. Polarity (e.g. active-low cathodes) is the
/// implementation's concern. These methods are called from interrupt context
/// and cannot fail; handle any hardware errors internally.
pub trait SegmentOutput {
    /// Drives `pattern` onto the shared segment bus.
    fn set_segments(&mut self, pattern: SegmentPattern);

    /// Lights the given digit.
    fn enable_digit(&mut self, digit: Digit);

    /// Turns the given digit off.
    fn disable_digit(&mut self, digit: Digit);

    /// Turns both digits off.
    fn blank(&mut self) {
        self.disable_digit(Digit::Digit1);
        self.disable_digit(Digit::Digit2);
    }
}
