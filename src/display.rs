//! Displayed value, its digit decomposition and the active radix.
//!
//! [`DisplayState`] is pure data: it validates and decomposes, while the
//! controller takes care of persisting accepted values.

use crate::types::{Digit, DisplayError, Radix};

/// The number shown on the two digits.
///
/// `digit1 * radix + digit2 == number` holds after every accepted
/// [`set_number`](Self::set_number). Changing the radix does not re-split or
/// clamp the current number; callers set the number again afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayState {
    number: u8,
    digit1: u8,
    digit2: u8,
    radix: Radix,
    max_value: u8,
}

impl DisplayState {
    /// Number 0 in decimal.
    pub const fn new() -> Self {
        Self {
            number: 0,
            digit1: 0,
            digit2: 0,
            radix: Radix::Decimal,
            max_value: Radix::Decimal.max_value(),
        }
    }

    /// Sets the displayed number and recomputes both digits.
    ///
    /// # Errors
    /// [`DisplayError::OutOfRange`] if `number` exceeds the current maximum.
    /// The state is left untouched in that case.
    pub fn set_number(&mut self, number: u8) -> Result<(), DisplayError> {
        if number > self.max_value {
            return Err(DisplayError::OutOfRange {
                requested: number,
                max: self.max_value,
            });
        }

        let radix = self.radix.value();
        let digit1 = number / radix;
        self.number = number;
        self.digit1 = digit1;
        self.digit2 = number - digit1 * radix;
        Ok(())
    }

    /// Selects a new radix (2, 10 or 16) and updates the maximum value.
    ///
    /// # Errors
    /// [`DisplayError::InvalidRadix`] for any other base, leaving the state untouched.
    pub fn set_radix(&mut self, radix: u8) -> Result<(), DisplayError> {
        let radix = Radix::try_from(radix)?;
        self.radix = radix;
        self.max_value = radix.max_value();
        Ok(())
    }

    /// Back to 0 in decimal.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    /// Returns `(digit1, digit2)`.
    pub fn digits(&self) -> (u8, u8) {
        (self.digit1, self.digit2)
    }

    pub fn digit(&self, digit: Digit) -> u8 {
        match digit {
            Digit::Digit1 => self.digit1,
            Digit::Digit2 => self.digit2,
        }
    }

    pub fn radix(&self) -> Radix {
        self.radix
    }

    pub fn max_value(&self) -> u8 {
        self.max_value
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}
